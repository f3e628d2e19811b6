use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::splash::audio::AudioCue;
use crate::splash::sequence::{Stage, StageTimers};
use crate::splash::tilt::{tilt_from_pointer, Tilt};

#[derive(Properties, PartialEq)]
pub struct SplashScreenProps {
    /// Fired once when the sequence completes. The caller keeps the
    /// component mounted through the tail of the fade before removing it.
    pub on_finish: Callback<()>,
}

/// One-time cinematic intro: a click-to-start screen, then a timed sequence
/// of stages ending in a fade to black. Audio is unlocked by the activation
/// gesture and replayed on later interaction if the browser blocked it.
#[function_component(SplashScreen)]
pub fn splash_screen(props: &SplashScreenProps) -> Html {
    let stage = use_state(|| Stage::Entry);
    let tilt = use_state(Tilt::default);
    let audio = use_mut_ref(|| None::<AudioCue>);
    let timers = use_mut_ref(|| None::<StageTimers>);

    // Preload the cue once per component lifetime; dropping it on teardown
    // pauses anything still playing.
    {
        let audio = audio.clone();
        use_effect_with_deps(
            move |_| {
                *audio.borrow_mut() = AudioCue::load(config::splash_audio_url());
                move || {
                    audio.borrow_mut().take();
                }
            },
            (),
        );
    }

    // Window-level pointer tracking for the tilt. Lives apart from the stage
    // timers so pointer traffic cannot disturb the sequence timing.
    {
        let tilt = tilt.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let view = window.clone();
                let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
                    let width = view
                        .inner_width()
                        .ok()
                        .and_then(|w| w.as_f64())
                        .unwrap_or(0.0);
                    let height = view
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    tilt.set(tilt_from_pointer(
                        event.client_x() as f64,
                        event.client_y() as f64,
                        width,
                        height,
                    ));
                }) as Box<dyn FnMut(MouseEvent)>);

                window
                    .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let play_cue = {
        let audio = audio.clone();
        move || {
            if let Some(cue) = audio.borrow().as_ref() {
                cue.play();
            }
        }
    };

    let activate = {
        let stage = stage.clone();
        let timers = timers.clone();
        let audio = audio.clone();
        let on_finish = props.on_finish.clone();
        let play_cue = play_cue.clone();
        Callback::from(move |_: MouseEvent| {
            // No re-entry once the sequence is running.
            if timers.borrow().is_some() {
                return;
            }
            info!("Splash sequence activated");

            // First chance to unlock audio inside the user gesture.
            play_cue();
            stage.set(Stage::Moving);

            let advance = {
                let stage = stage.clone();
                let audio = audio.clone();
                move |next: Stage| {
                    if next == Stage::Revealed {
                        // One-shot cue as the full logo lands.
                        if let Some(cue) = audio.borrow().as_ref() {
                            cue.play();
                        }
                    }
                    stage.set(next);
                }
            };
            let finish = {
                let on_finish = on_finish.clone();
                move || on_finish.emit(())
            };
            *timers.borrow_mut() = Some(StageTimers::schedule(advance, finish));
        })
    };

    // Interaction during the timed sequence re-attempts the cue in case the
    // browser blocked the first play; it never changes stages.
    let replay_click = {
        let play_cue = play_cue.clone();
        Callback::from(move |_: MouseEvent| play_cue())
    };
    let replay_key = {
        let play_cue = play_cue.clone();
        Callback::from(move |_: KeyboardEvent| play_cue())
    };
    let replay_touch = Callback::from(move |_: TouchEvent| play_cue());

    if *stage == Stage::Entry {
        return html! {
            <div class="start-screen" onclick={activate}>
                <style>{SPLASH_STYLE}</style>
                <div class="gradient-background"></div>

                <div class="start-content" style={tilt.entry_style()}>
                    <div class="logo-container">
                        <div class="logo-glow"></div>
                        <svg class="start-logo" width="160" height="160" viewBox="0 0 100 120" fill="none" xmlns="http://www.w3.org/2000/svg">
                            <path d="M10 10L50 4L90 10L50 116L10 10Z" fill="url(#mGradient)" />
                            <defs>
                                <linearGradient id="mGradient" x1="10" y1="4" x2="90" y2="116" gradientUnits="userSpaceOnUse">
                                    <stop offset="0" style="stop-color: #FF4D6D;" />
                                    <stop offset="1" style="stop-color: #FF1048;" />
                                </linearGradient>
                            </defs>
                        </svg>
                    </div>

                    <div class="brand-name">
                        <span class="brand-text">{"MASKA"}</span>
                        <span class="brand-accent">{".FR"}</span>
                    </div>

                    <div class="start-prompt">
                        <div class="start-btn">
                            <span>{"ENTER EXPERIENCE"}</span>
                        </div>
                    </div>
                </div>

                <div class="background-particles">
                    { for (1..=30).map(|i| html! {
                        <div class={format!("particle particle-{}", i)}></div>
                    }) }
                </div>
            </div>
        };
    }

    let content_style = if *stage == Stage::Revealed {
        tilt.revealed_style()
    } else {
        String::new()
    };

    html! {
        <div
            class={classes!("splash-screen", stage.as_str())}
            onclick={replay_click}
            onkeydown={replay_key}
            ontouchstart={replay_touch}
        >
            <style>{SPLASH_STYLE}</style>
            <div class="splash-background"></div>

            <div class="splash-content" style={content_style}>
                <div class="m-logo">
                    <svg width="120" height="140" viewBox="0 0 100 120" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path d="M10 10L50 4L90 10L50 116L10 10Z" fill="url(#mGradient)" />
                        <defs>
                            <linearGradient id="mGradient" x1="10" y1="4" x2="90" y2="116" gradientUnits="userSpaceOnUse">
                                <stop offset="0" style="stop-color: #FF4D6D;" />
                                <stop offset="1" style="stop-color: #FF1048;" />
                            </linearGradient>
                        </defs>
                    </svg>
                </div>
            </div>

            <div class="ambient-lights">
                <div class="light light-1"></div>
                <div class="light light-2"></div>
                <div class="light light-3"></div>
            </div>

            <div class="splash-particles">
                { for (1..=24).map(|i| html! {
                    <div class={format!("splash-particle splash-particle-{}", i)}></div>
                }) }
            </div>
        </div>
    }
}

const SPLASH_STYLE: &str = r#"
.start-screen {
    position: fixed;
    inset: 0;
    background: #000;
    z-index: 1000;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    perspective: 1000px;
    overflow: hidden;
    font-family: 'Montserrat', 'Inter', sans-serif;
}

.gradient-background {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at 50% 40%, rgba(255, 16, 72, 0.12) 0%, transparent 60%);
}

.start-content {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
    transform-style: preserve-3d;
    transition: transform 0.1s ease-out;
    z-index: 2;
}

.logo-container {
    position: relative;
    margin-bottom: 2rem;
}

.logo-glow {
    position: absolute;
    inset: -40px;
    background: radial-gradient(circle, rgba(255, 77, 109, 0.35) 0%, transparent 70%);
    filter: blur(20px);
    animation: glow-pulse 3s ease-in-out infinite;
}

.start-logo {
    position: relative;
    filter: drop-shadow(0 0 25px rgba(255, 16, 72, 0.5));
}

.brand-name {
    display: flex;
    align-items: baseline;
    gap: 0.3rem;
    margin-bottom: 3rem;
}

.brand-text {
    font-size: 3rem;
    font-weight: 800;
    letter-spacing: -0.02em;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.brand-accent {
    font-size: 3rem;
    font-weight: 800;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.start-btn {
    padding: 1rem 2.5rem;
    border: 1px solid rgba(255, 255, 255, 0.3);
    border-radius: 50px;
    color: rgba(255, 255, 255, 0.9);
    font-size: 0.9rem;
    font-weight: 600;
    letter-spacing: 3px;
    animation: prompt-pulse 2s ease-in-out infinite;
}

.background-particles .particle {
    position: absolute;
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: rgba(255, 77, 109, 0.5);
    animation: particle-drift 9s linear infinite;
}

.background-particles .particle:nth-child(odd) {
    background: rgba(255, 255, 255, 0.35);
    animation-duration: 12s;
}

.background-particles .particle:nth-child(3n) {
    width: 3px;
    height: 3px;
    animation-delay: -4s;
}

.background-particles .particle:nth-child(4n) {
    animation-delay: -8s;
}

.background-particles .particle:nth-child(5n) {
    width: 6px;
    height: 6px;
    opacity: 0.4;
}

.background-particles .particle:nth-child(n) { left: 50%; top: 110%; }
.background-particles .particle:nth-child(2n) { left: 15%; }
.background-particles .particle:nth-child(3n+1) { left: 80%; }
.background-particles .particle:nth-child(4n+2) { left: 35%; }
.background-particles .particle:nth-child(5n+3) { left: 65%; }
.background-particles .particle:nth-child(7n) { left: 5%; }
.background-particles .particle:nth-child(7n+4) { left: 92%; }

.splash-screen {
    position: fixed;
    inset: 0;
    background: #000;
    z-index: 1000;
    display: flex;
    align-items: center;
    justify-content: center;
    perspective: 1000px;
    overflow: hidden;
}

.splash-background {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at center, rgba(255, 16, 72, 0.08) 0%, #000 75%);
}

.splash-content {
    position: relative;
    z-index: 2;
    transform-style: preserve-3d;
}

.m-logo {
    opacity: 0;
    transform: translateY(-45vh) scale(0.5);
    transition: transform 1s cubic-bezier(0.22, 1, 0.36, 1), opacity 0.8s ease;
    filter: drop-shadow(0 0 20px rgba(255, 16, 72, 0.4));
}

.splash-screen.moving .m-logo {
    opacity: 1;
    transform: translateY(0) scale(1);
}

.splash-screen.revealed .m-logo {
    opacity: 1;
    transform: scale(1.2);
    filter: drop-shadow(0 0 45px rgba(255, 16, 72, 0.7));
}

.splash-screen.fadeOut .m-logo {
    opacity: 0;
    transform: scale(1.35);
    transition: transform 2s ease, opacity 2s ease;
}

.splash-screen.fadeOut .splash-background,
.splash-screen.fadeOut .ambient-lights,
.splash-screen.fadeOut .splash-particles {
    opacity: 0;
    transition: opacity 2s ease;
}

.ambient-lights .light {
    position: absolute;
    border-radius: 50%;
    filter: blur(60px);
    opacity: 0.25;
    animation: light-float 10s ease-in-out infinite;
}

.ambient-lights .light-1 {
    width: 300px;
    height: 300px;
    left: 12%;
    top: 20%;
    background: #FF4D6D;
}

.ambient-lights .light-2 {
    width: 250px;
    height: 250px;
    right: 15%;
    top: 55%;
    background: #FF1048;
    animation-delay: -3s;
}

.ambient-lights .light-3 {
    width: 200px;
    height: 200px;
    left: 45%;
    bottom: 8%;
    background: #7b1032;
    animation-delay: -6s;
}

.splash-particles .splash-particle {
    position: absolute;
    width: 3px;
    height: 3px;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.5);
    opacity: 0;
    animation: particle-rise 6s linear infinite;
}

.splash-screen.revealed .splash-particle,
.splash-screen.fadeOut .splash-particle {
    opacity: 1;
}

.splash-particles .splash-particle:nth-child(n) { left: 50%; top: 105%; }
.splash-particles .splash-particle:nth-child(2n) { left: 20%; animation-delay: -1s; }
.splash-particles .splash-particle:nth-child(3n) { left: 75%; animation-delay: -2.5s; }
.splash-particles .splash-particle:nth-child(4n+1) { left: 40%; animation-delay: -4s; }
.splash-particles .splash-particle:nth-child(5n+2) { left: 88%; animation-delay: -5s; }
.splash-particles .splash-particle:nth-child(6n) { left: 8%; }

@keyframes glow-pulse {
    0%, 100% { opacity: 0.6; transform: scale(1); }
    50% { opacity: 1; transform: scale(1.1); }
}

@keyframes prompt-pulse {
    0%, 100% { opacity: 0.7; box-shadow: 0 0 0 rgba(255, 77, 109, 0); }
    50% { opacity: 1; box-shadow: 0 0 25px rgba(255, 77, 109, 0.35); }
}

@keyframes particle-drift {
    0% { transform: translateY(0); opacity: 0; }
    10% { opacity: 1; }
    90% { opacity: 1; }
    100% { transform: translateY(-120vh); opacity: 0; }
}

@keyframes particle-rise {
    0% { transform: translateY(0) scale(1); }
    100% { transform: translateY(-110vh) scale(0.6); }
}

@keyframes light-float {
    0%, 100% { transform: translate(0, 0); }
    50% { transform: translate(30px, -40px); }
}
"#;
