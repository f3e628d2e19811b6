use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::parallax::{animate_scroll_layers, drifting_particles};
use crate::Route;

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: Html,
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "4K Ultra HD Streaming",
            description: "Experience crystal-clear 4K resolution with HDR support for the ultimate viewing quality on compatible devices.",
            icon: html! {
                <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M4 8C4 6.89543 4.89543 6 6 6H18C19.1046 6 20 6.89543 20 8V16C20 17.1046 19.1046 18 18 18H6C4.89543 18 4 17.1046 4 16V8Z" fill="rgba(255,77,109,0.15)" stroke="currentColor" />
                    <path d="M9 21L15 21" stroke="currentColor" />
                    <path d="M12 18V21" stroke="currentColor" />
                    <circle cx="17" cy="9" r="1" fill="currentColor" />
                    <circle cx="7" cy="15" r="1" fill="currentColor" />
                    <path d="M7 9H10" stroke="currentColor" />
                </svg>
            },
        },
        Feature {
            title: "Offline Viewing",
            description: "Download your favorite shows and movies to watch offline anytime, anywhere, without internet connection.",
            icon: html! {
                <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" stroke="currentColor" fill="rgba(255,77,109,0.15)" />
                    <polyline points="7 10 12 15 17 10" stroke="currentColor" />
                    <line x1="12" y1="15" x2="12" y2="3" stroke="currentColor" />
                </svg>
            },
        },
        Feature {
            title: "Unlimited Streaming",
            description: "Stream as much as you want, whenever you want, with no ads or interruptions for a seamless viewing experience.",
            icon: html! {
                <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                    <circle cx="12" cy="12" r="10" stroke="currentColor" fill="rgba(255,77,109,0.15)" />
                    <path d="M12 8v4l3 3" stroke="currentColor" />
                </svg>
            },
        },
    ]
}

/// Marketing deep-dive with scroll-driven parallax layers. The decorative
/// layers are animated outside of Yew by a frame loop that rewrites their
/// inline styles, so scrolling never forces a re-render.
#[function_component(LearnMore)]
pub fn learn_more() -> Html {
    let particles = use_state(|| drifting_particles(20));
    let navigator = use_navigator().unwrap();

    use_effect_with_deps(|_| animate_scroll_layers(), ());

    let on_get_started = Callback::from(move |_: MouseEvent| navigator.push(&Route::Home));

    html! {
        <div class="learn-more">
            <style>{LEARN_MORE_STYLE}</style>

            <div class="background-particles">
                {(*particles).clone()}
            </div>

            <div class="background-glow"></div>
            <div class="floating-element-1"></div>
            <div class="floating-element-2"></div>
            <div class="floating-element-3"></div>

            <SiteHeader current={Route::LearnMore} fixed=true />

            <div class="content-wrapper">
                <section class="hero-section">
                    <div class="hero-motion-title">
                        <h1 class="hero-title">{"Premium Entertainment Experience"}</h1>
                    </div>

                    <div class="hero-motion-subtitle">
                        <p class="hero-subtitle">
                            {"Explore our curated collection of "}
                            <span class="highlight">{"exclusive content"}</span>
                            {", featuring stunning 4K visuals and immersive Dolby Atmos sound. Maska.FR redefines your streaming experience."}
                        </p>
                    </div>

                    <div class="scroll-prompt">
                        <div class="scroll-icon"></div>
                        <span>{"Scroll to explore"}</span>
                    </div>
                </section>

                <section class="feature-section">
                    <h2 class="section-title">{"Extraordinary Features"}</h2>
                    <div class="features-grid">
                        {
                            features().into_iter().map(|feature| html! {
                                <div class="feature-card">
                                    <div class="feature-card-icon">{feature.icon}</div>
                                    <h3 class="feature-card-title">{feature.title}</h3>
                                    <p class="feature-card-description">{feature.description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="cta-section">
                    <h2 class="cta-title">{"Ready to Elevate Your Entertainment?"}</h2>
                    <p class="cta-text">
                        {"Join millions of viewers already enjoying premium content on Maska.FR. Start your journey today with a 7-day free trial."}
                    </p>
                    <button class="cta-button" onclick={on_get_started}>{"Get Started"}</button>
                </section>
            </div>

            <div class="footer-section">
                <SiteFooter />
            </div>
        </div>
    }
}

const LEARN_MORE_STYLE: &str = r#"
html {
    scroll-snap-type: y proximity;
    scroll-behavior: smooth;
    scrollbar-width: thin;
    scrollbar-color: #FF1048 #000000;
}

::-webkit-scrollbar {
    width: 12px;
    display: block;
}

::-webkit-scrollbar-track {
    background: rgba(0, 0, 0, 0.3);
}

::-webkit-scrollbar-thumb {
    background: linear-gradient(45deg, #FF1048, #FF4D6D);
    border-radius: 6px;
    border: 2px solid #000;
}

::-webkit-scrollbar-thumb:hover {
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
}

.learn-more {
    width: 100%;
    min-height: 100vh;
    background: #000000;
    color: white;
    position: relative;
    font-family: 'Montserrat', 'Inter', sans-serif;
    overflow-x: hidden;
}

.background-particles {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    z-index: 1;
    overflow: hidden;
}

.particle {
    position: absolute;
    border-radius: 50%;
    opacity: 0.6;
    filter: blur(4px);
    animation: float 15s infinite ease-in-out;
}

@keyframes float {
    0%, 100% { transform: translate(0, 0) rotate(0deg); }
    33% { transform: translate(50px, 50px) rotate(120deg); }
    66% { transform: translate(-30px, 20px) rotate(240deg); }
}

.background-glow {
    position: fixed;
    top: 30%;
    left: 20%;
    width: 60%;
    height: 60%;
    background: radial-gradient(circle at center, rgba(255, 77, 109, 0.15) 0%, transparent 70%);
    z-index: 2;
    filter: blur(120px);
    pointer-events: none;
}

.floating-element-1,
.floating-element-2,
.floating-element-3 {
    position: absolute;
    border-radius: 50%;
    filter: blur(40px);
    z-index: 1;
}

.floating-element-1 {
    width: 400px;
    height: 400px;
    top: 20%;
    left: 10%;
    background: radial-gradient(circle at center, rgba(255, 77, 109, 0.2) 0%, transparent 70%);
}

.floating-element-2 {
    width: 300px;
    height: 300px;
    top: 60%;
    left: 70%;
    background: radial-gradient(circle at center, rgba(255, 77, 109, 0.15) 0%, transparent 70%);
}

.floating-element-3 {
    width: 200px;
    height: 200px;
    top: 80%;
    left: 30%;
    background: radial-gradient(circle at center, rgba(255, 77, 109, 0.1) 0%, transparent 70%);
}

.content-wrapper {
    position: relative;
    z-index: 10;
    width: 100%;
}

.hero-section {
    height: 100vh;
    width: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    position: relative;
    overflow: hidden;
    scroll-snap-align: start;
    scroll-snap-stop: always;
    padding-top: 120px;
}

.hero-title {
    font-size: clamp(4rem, 12vw, 9rem);
    font-weight: 900;
    text-align: center;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    margin-bottom: 2rem;
    line-height: 1.1;
    filter: drop-shadow(0 0 20px rgba(255, 255, 255, 0.4));
    z-index: 10;
    position: relative;
}

.hero-subtitle {
    font-size: clamp(1.2rem, 3vw, 1.8rem);
    text-align: center;
    max-width: 800px;
    line-height: 1.6;
    color: rgba(255, 255, 255, 0.8);
    margin-bottom: 3rem;
    font-weight: 300;
    z-index: 2;
}

.highlight {
    color: #FF4D6D;
    font-weight: 500;
}

.scroll-prompt {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.9rem;
}

.scroll-icon {
    width: 30px;
    height: 50px;
    border: 2px solid rgba(255, 255, 255, 0.3);
    border-radius: 20px;
    position: relative;
}

.scroll-icon::before {
    content: '';
    position: absolute;
    top: 10px;
    left: 50%;
    transform: translateX(-50%);
    width: 6px;
    height: 6px;
    background: white;
    border-radius: 50%;
    animation: scrollDown 2s infinite;
}

@keyframes scrollDown {
    0% { opacity: 1; top: 10px; }
    100% { opacity: 0; top: 30px; }
}

.feature-section {
    padding: 6rem 2rem;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    position: relative;
    scroll-snap-align: start;
    scroll-snap-stop: always;
}

.section-title {
    font-size: clamp(2rem, 5vw, 3.5rem);
    font-weight: 800;
    text-align: center;
    margin-bottom: 4rem;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    filter: drop-shadow(0 0 15px rgba(255, 20, 72, 0.2));
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 3rem;
    width: 100%;
    max-width: 1200px;
}

.feature-card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    padding: 2.5rem;
    border-radius: 20px;
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    backdrop-filter: blur(10px);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
    transition: all 0.4s ease;
}

.feature-card:hover {
    transform: translateY(-10px);
    border-color: rgba(255, 77, 109, 0.3);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3), 0 0 30px rgba(255, 77, 109, 0.15);
}

.feature-card-icon {
    width: 80px;
    height: 80px;
    margin-bottom: 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255, 77, 109, 0.1);
    border-radius: 50%;
    padding: 1.5rem;
    box-sizing: border-box;
}

.feature-card-icon svg {
    width: 100%;
    height: 100%;
    color: white;
}

.feature-card-icon svg path,
.feature-card-icon svg polyline,
.feature-card-icon svg line,
.feature-card-icon svg circle {
    stroke-width: 1.5;
    stroke-linecap: round;
    stroke-linejoin: round;
}

.feature-card-title {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
    color: white;
}

.feature-card-description {
    font-size: 1rem;
    line-height: 1.6;
    color: rgba(255, 255, 255, 0.7);
}

.cta-section {
    padding: 8rem 2rem;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    position: relative;
    margin-top: 4rem;
    scroll-snap-align: start;
    scroll-snap-stop: always;
}

.cta-title {
    font-size: clamp(2rem, 5vw, 3.5rem);
    font-weight: 800;
    margin-bottom: 2rem;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    max-width: 900px;
}

.cta-text {
    font-size: clamp(1rem, 2vw, 1.3rem);
    max-width: 700px;
    margin-bottom: 3rem;
    line-height: 1.7;
    color: rgba(255, 255, 255, 0.8);
}

.cta-button {
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

.cta-button:hover {
    transform: scale(1.05) translateY(-2px);
    box-shadow: 0 0 40px rgba(255, 77, 109, 0.6), inset 0 0 0 1px rgba(255, 255, 255, 0.2);
}

.footer-section {
    width: 100%;
    padding: 4rem 0;
    display: flex;
    justify-content: center;
    align-items: center;
    position: relative;
    z-index: 10;
}
"#;
