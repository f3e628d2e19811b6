use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::SiteHeader;
use crate::components::pointer::{forward_pointer_moves, FrameBroadcaster};
use crate::config;
use crate::splash::screen::SplashScreen;
use crate::splash::sequence;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// True once the intro has fully played this app lifetime.
    pub intro_done: bool,
    pub on_intro_finish: Callback<()>,
}

/// Landing route. Shows the splash intro on the first visit, then the
/// landing content. The splash signals completion while its fade is still
/// running; removal is delayed so the fade finishes on screen.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let on_finish = {
        let on_intro_finish = props.on_intro_finish.clone();
        Callback::from(move |_| {
            let notify = on_intro_finish.clone();
            Timeout::new(sequence::REMOVE_AT_MS - sequence::FINISH_AT_MS, move || {
                notify.emit(())
            })
            .forget();
        })
    };

    if !props.intro_done {
        html! { <SplashScreen {on_finish} /> }
    } else {
        html! { <Landing /> }
    }
}

#[function_component(Landing)]
fn landing() -> Html {
    let loaded = use_state(|| false);
    let frame_ref = use_node_ref();
    let navigator = use_navigator().unwrap();

    // Brief settle delay before the hero content fades in.
    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(500, move || loaded.set(true));
                move || drop(timer)
            },
            (),
        );
    }

    // Relay pointer movement to the embedded background for its own effects.
    {
        let frame_ref = frame_ref.clone();
        use_effect_with_deps(
            move |_| forward_pointer_moves(FrameBroadcaster::new(frame_ref)),
            (),
        );
    }

    let on_watch = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Watch))
    };
    let on_learn_more = Callback::from(move |_: MouseEvent| navigator.push(&Route::LearnMore));

    html! {
        <div class="landing">
            <style>{LANDING_STYLE}</style>

            <div class="landing-background">
                <iframe
                    ref={frame_ref}
                    src={config::interactive_background_url()}
                    title="Interactive Background"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                />
            </div>

            <div class="gradient-overlay"></div>

            <SiteHeader current={Route::Home} />

            <div class="landing-content">
                <div class="main-logo">
                    <h1 class="maska-text">{"MASKA"}</h1>
                    <span class="tv-text">{".TV"}</span>
                </div>

                <div class={classes!("landing-lower", loaded.then(|| "visible"))}>
                    <h2 class="tagline">
                        {"Experience "}
                        <span class="highlight">{"premium entertainment"}</span>
                        {" reimagined."}
                    </h2>

                    <div class="action-row">
                        <button class="watch-button" onclick={on_watch}>
                            {"Start Watching"}
                        </button>
                        <button class="learn-more-button" onclick={on_learn_more}>
                            {"Learn More"}
                        </button>
                    </div>

                    <div class="features">
                        <div class="feature">
                            <div class="feature-icon">
                                <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                    <path d="M4 8C4 6.89543 4.89543 6 6 6H18C19.1046 6 20 6.89543 20 8V16C20 17.1046 19.1046 18 18 18H6C4.89543 18 4 17.1046 4 16V8Z" fill="rgba(255,77,109,0.15)" stroke="currentColor" />
                                    <path d="M9 21L15 21" stroke="currentColor" />
                                    <path d="M12 18V21" stroke="currentColor" />
                                    <circle cx="17" cy="9" r="1" fill="currentColor" />
                                    <circle cx="7" cy="15" r="1" fill="currentColor" />
                                    <path d="M7 9H10" stroke="currentColor" />
                                </svg>
                            </div>
                            <p class="feature-text">{"Stream in 4K Ultra HD with Dolby Atmos sound"}</p>
                        </div>

                        <div class="feature">
                            <div class="feature-icon">
                                <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                    <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" stroke="currentColor" fill="rgba(255,77,109,0.15)" />
                                    <polyline points="7 10 12 15 17 10" stroke="currentColor" />
                                    <line x1="12" y1="15" x2="12" y2="3" stroke="currentColor" />
                                </svg>
                            </div>
                            <p class="feature-text">{"Download content for offline viewing anytime"}</p>
                        </div>

                        <div class="feature">
                            <div class="feature-icon">
                                <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                    <rect x="5" y="3" width="14" height="10" rx="2" fill="rgba(255,77,109,0.15)" stroke="currentColor" />
                                    <rect x="2" y="15" width="8" height="6" rx="1" fill="rgba(255,77,109,0.15)" stroke="currentColor" />
                                    <rect x="14" y="15" width="8" height="6" rx="1" fill="rgba(255,77,109,0.15)" stroke="currentColor" />
                                    <path d="M12 13v3" stroke="currentColor" />
                                </svg>
                            </div>
                            <p class="feature-text">{"Watch on any device, anytime, anywhere"}</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

const LANDING_STYLE: &str = r#"
.landing {
    width: 100vw;
    height: 100vh;
    background: #000000;
    position: relative;
    overflow: hidden;
    font-family: 'Montserrat', 'Inter', sans-serif;
}

.landing-background {
    position: absolute;
    inset: 0;
    z-index: 5;
    overflow: hidden;
}

.landing-background iframe {
    width: 100%;
    height: 100%;
    border: none;
    pointer-events: auto;
}

.gradient-overlay {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at center, transparent 0%, rgba(0, 0, 0, 0.4) 100%);
    z-index: 15;
    pointer-events: none;
}

.landing-content {
    position: absolute;
    inset: 0;
    z-index: 20;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    pointer-events: none;
}

.main-logo {
    display: flex;
    align-items: baseline;
    gap: 0.5rem;
    margin-bottom: 6rem;
    position: relative;
    top: 80px;
}

.maska-text {
    font-size: 6rem;
    font-weight: 800;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    letter-spacing: -0.02em;
    margin: 0;
    filter: drop-shadow(0 0 15px rgba(255, 255, 255, 0.15));
}

.tv-text {
    font-size: 6rem;
    font-weight: 800;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    letter-spacing: -0.02em;
    filter: drop-shadow(0 0 15px rgba(255, 20, 72, 0.4));
}

.landing-lower {
    display: flex;
    flex-direction: column;
    align-items: center;
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}

.landing-lower.visible {
    opacity: 1;
    transform: translateY(0);
}

.tagline {
    font-size: 1.8rem;
    color: rgba(255, 255, 255, 0.9);
    text-align: center;
    max-width: 700px;
    margin-bottom: 7rem;
    line-height: 1.4;
    font-weight: 300;
    letter-spacing: 0.3px;
    position: relative;
    top: 60px;
}

.highlight {
    color: #FF4D6D;
    font-weight: 400;
}

.action-row {
    display: flex;
    gap: 1.5rem;
    margin-bottom: 5rem;
    pointer-events: auto;
}

.watch-button {
    padding: 1.2rem 3.5rem;
    font-size: 1.1rem;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    border: none;
    border-radius: 50px;
    color: white;
    cursor: pointer;
    font-weight: 700;
    letter-spacing: 0.5px;
    box-shadow: 0 0 30px rgba(255, 77, 109, 0.4), inset 0 0 0 1px rgba(255, 255, 255, 0.1);
    transition: all 0.3s ease;
}

.watch-button:hover {
    transform: scale(1.05) translateY(-2px);
    box-shadow: 0 0 40px rgba(255, 77, 109, 0.6), inset 0 0 0 1px rgba(255, 255, 255, 0.2);
}

.learn-more-button {
    padding: 1.2rem 2.5rem;
    font-size: 1.1rem;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 50px;
    color: white;
    cursor: pointer;
    font-weight: 600;
    backdrop-filter: blur(10px);
    transition: all 0.3s ease;
}

.learn-more-button:hover {
    background: rgba(255, 255, 255, 0.15);
    border-color: rgba(255, 255, 255, 0.3);
    transform: translateY(-2px);
}

.features {
    display: flex;
    gap: 3rem;
    margin-top: 2rem;
    pointer-events: auto;
    justify-content: center;
    width: 100%;
    max-width: 1000px;
    flex-wrap: wrap;
}

.feature {
    display: flex;
    flex-direction: column;
    align-items: center;
    max-width: 220px;
    background: rgba(255, 77, 109, 0.05);
    padding: 1.5rem 1rem;
    border-radius: 12px;
    border: 1px solid rgba(255, 77, 109, 0.1);
    transition: all 0.3s ease;
}

.feature:hover {
    background: rgba(255, 77, 109, 0.1);
    transform: translateY(-5px);
}

.feature-icon {
    width: 60px;
    height: 60px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
    background: rgba(255, 77, 109, 0.1);
    border-radius: 50%;
    padding: 1rem;
    pointer-events: none;
    box-sizing: border-box;
}

.feature-icon svg {
    width: 100%;
    height: 100%;
    color: white;
}

.feature-icon svg path,
.feature-icon svg polyline,
.feature-icon svg line,
.feature-icon svg rect {
    stroke-width: 1.5;
    stroke-linecap: round;
    stroke-linejoin: round;
}

.feature-text {
    color: rgba(255, 255, 255, 0.9);
    text-align: center;
    font-size: 0.95rem;
    line-height: 1.5;
    font-weight: 500;
    cursor: pointer;
}
"#;
