use gloo_timers::future::TimeoutFuture;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::Route;

/// Contact form with a simulated send. There is no backend; submission waits
/// a moment, clears the fields, and shows a confirmation that expires on its
/// own.
#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            info!("Contact form submitted");
            submitting.set(true);

            let name = name.clone();
            let email = email.clone();
            let subject = subject.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();

            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(1_500).await;
                submitting.set(false);
                submitted.set(true);
                name.set(String::new());
                email.set(String::new());
                subject.set(String::new());
                message.set(String::new());

                TimeoutFuture::new(5_000).await;
                submitted.set(false);
            });
        })
    };

    html! {
        <div class="contact-page">
            <style>{CONTACT_STYLE}</style>

            <SiteHeader current={Route::Contact} />

            <div class="background-glow"></div>

            <div class="content-wrapper">
                <h1 class="page-title">{"Contact Us"}</h1>

                <p class="page-intro">
                    {"Have questions or feedback? We'd love to hear from you. Fill out the form below or reach out to us directly using the contact information provided."}
                </p>

                <div class="contact-section">
                    <div class="contact-info">
                        <h3 class="info-title">{"Get In Touch"}</h3>

                        <div class="info-item">
                            <div class="info-icon">
                                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                    <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"></path>
                                </svg>
                            </div>
                            <div class="info-text">{"+1 (555) 123-4567"}</div>
                        </div>

                        <div class="info-item">
                            <div class="info-icon">
                                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                    <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path>
                                    <polyline points="22,6 12,13 2,6"></polyline>
                                </svg>
                            </div>
                            <div class="info-text">{"support@maska.FR"}</div>
                        </div>

                        <div class="info-item">
                            <div class="info-icon">
                                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                    <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"></path>
                                    <circle cx="12" cy="10" r="3"></circle>
                                </svg>
                            </div>
                            <div class="info-text">
                                {"Maska Entertainment Inc."}<br />
                                {"123 Streaming Street"}<br />
                                {"Los Angeles, CA 90210"}
                            </div>
                        </div>

                        <div class="info-item">
                            <div class="info-icon">
                                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                    <circle cx="12" cy="12" r="10"></circle>
                                    <line x1="12" y1="8" x2="12" y2="12"></line>
                                    <line x1="12" y1="16" x2="12.01" y2="16"></line>
                                </svg>
                            </div>
                            <div class="info-text">
                                {"Business Hours:"}<br />
                                {"Monday - Friday: 9:00 AM - 6:00 PM PST"}<br />
                                {"Saturday - Sunday: Closed"}
                            </div>
                        </div>

                        <div class="social-links">
                            <a class="social-icon" href="#" aria-label="Twitter">
                                <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                    <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"></path>
                                </svg>
                            </a>
                            <a class="social-icon" href="#" aria-label="Facebook">
                                <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                    <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path>
                                </svg>
                            </a>
                            <a class="social-icon" href="#" aria-label="Instagram">
                                <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                    <rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect>
                                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
                                    <line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line>
                                </svg>
                            </a>
                            <a class="social-icon" href="#" aria-label="LinkedIn">
                                <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                    <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
                                    <rect x="2" y="9" width="4" height="12"></rect>
                                    <circle cx="4" cy="4" r="2"></circle>
                                </svg>
                            </a>
                        </div>
                    </div>

                    <form class="contact-form" {onsubmit}>
                        if *submitted {
                            <div class="form-success">
                                {"Thank you for your message! We'll get back to you as soon as possible."}
                            </div>
                        }

                        <div class="form-group">
                            <label for="name">{"Name"}</label>
                            <input
                                type="text"
                                id="name"
                                required=true
                                placeholder="Your name"
                                value={(*name).clone()}
                                oninput={Callback::from({
                                    let name = name.clone();
                                    move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        name.set(input.value());
                                    }
                                })}
                            />
                        </div>

                        <div class="form-group">
                            <label for="email">{"Email"}</label>
                            <input
                                type="email"
                                id="email"
                                required=true
                                placeholder="your.email@example.com"
                                value={(*email).clone()}
                                oninput={Callback::from({
                                    let email = email.clone();
                                    move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        email.set(input.value());
                                    }
                                })}
                            />
                        </div>

                        <div class="form-group">
                            <label for="subject">{"Subject"}</label>
                            <input
                                type="text"
                                id="subject"
                                required=true
                                placeholder="What is this regarding?"
                                value={(*subject).clone()}
                                oninput={Callback::from({
                                    let subject = subject.clone();
                                    move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        subject.set(input.value());
                                    }
                                })}
                            />
                        </div>

                        <div class="form-group">
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                required=true
                                placeholder="Write your message here..."
                                value={(*message).clone()}
                                oninput={Callback::from({
                                    let message = message.clone();
                                    move |e: InputEvent| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        message.set(input.value());
                                    }
                                })}
                            />
                        </div>

                        <button class="submit-button" type="submit" disabled={*submitting}>
                            { if *submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                </div>
            </div>

            <SiteFooter />
        </div>
    }
}

const CONTACT_STYLE: &str = r#"
.contact-page {
    width: 100%;
    min-height: 100vh;
    background: #000000;
    color: white;
    position: relative;
    font-family: 'Montserrat', 'Inter', sans-serif;
    overflow-x: hidden;
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
    animation: glow-pulse 10s ease-in-out infinite alternate;
}

@keyframes glow-pulse {
    from { opacity: 0.6; transform: scale(1); }
    to { opacity: 0.8; transform: scale(1.2); }
}

.content-wrapper {
    position: relative;
    z-index: 10;
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 120px 2rem 4rem;
    min-height: calc(100vh - 200px);
    display: flex;
    flex-direction: column;
    box-sizing: border-box;
}

.page-title {
    font-size: clamp(2.5rem, 6vw, 4rem);
    font-weight: 800;
    text-align: center;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    margin-bottom: 2rem;
    filter: drop-shadow(0 0 15px rgba(255, 255, 255, 0.2));
}

.page-intro {
    text-align: center;
    max-width: 700px;
    margin: 0 auto 3rem;
    color: rgba(255, 255, 255, 0.8);
    font-size: 1.1rem;
}

.contact-section {
    display: flex;
    flex-direction: column;
    gap: 4rem;
    margin-top: 2rem;
}

@media (min-width: 992px) {
    .contact-section {
        flex-direction: row;
        align-items: flex-start;
    }
}

.contact-info {
    flex: 1;
    padding: 2rem;
    background: rgba(255, 255, 255, 0.05);
    border-radius: 16px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(10px);
}

.info-title {
    font-size: 1.5rem;
    margin-bottom: 1.5rem;
    color: white;
}

.info-item {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.info-icon {
    width: 24px;
    height: 24px;
    flex-shrink: 0;
    color: #FF4D6D;
}

.info-icon svg {
    width: 100%;
    height: 100%;
    stroke-width: 2;
    stroke-linecap: round;
    stroke-linejoin: round;
}

.info-text {
    color: rgba(255, 255, 255, 0.8);
}

.social-links {
    display: flex;
    gap: 1rem;
    margin-top: 2rem;
}

.social-icon {
    width: 40px;
    height: 40px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255, 255, 255, 0.1);
    border-radius: 50%;
    color: white;
    transition: all 0.3s ease;
}

.social-icon svg {
    stroke-width: 2;
    stroke-linecap: round;
    stroke-linejoin: round;
}

.social-icon:hover {
    background: #FF4D6D;
    transform: translateY(-3px);
}

.contact-form {
    flex: 2;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    padding: 2rem;
    background: rgba(255, 255, 255, 0.05);
    border-radius: 16px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(10px);
}

.form-group {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.form-group label {
    font-size: 1rem;
    color: rgba(255, 255, 255, 0.8);
}

.form-group input,
.form-group textarea {
    padding: 1rem;
    background: rgba(0, 0, 0, 0.3);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 8px;
    color: white;
    font-size: 1rem;
    font-family: inherit;
    outline: none;
    transition: all 0.3s ease;
}

.form-group textarea {
    min-height: 150px;
    resize: vertical;
}

.form-group input:focus,
.form-group textarea:focus {
    border-color: #FF4D6D;
    box-shadow: 0 0 10px rgba(255, 77, 109, 0.2);
}

.submit-button {
    padding: 1rem 2rem;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    border: none;
    border-radius: 50px;
    color: white;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    align-self: flex-start;
    transition: all 0.3s ease;
}

.submit-button:hover {
    transform: translateY(-2px);
    box-shadow: 0 10px 20px rgba(255, 16, 72, 0.2);
}

.submit-button:disabled {
    opacity: 0.7;
    cursor: not-allowed;
}

.form-success {
    background: rgba(39, 174, 96, 0.1);
    border: 1px solid rgba(39, 174, 96, 0.3);
    padding: 1rem;
    border-radius: 8px;
    color: rgba(39, 174, 96, 0.9);
    margin-bottom: 1rem;
}
"#;
