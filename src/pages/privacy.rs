use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::Route;

// Anchor targets for the table of contents. Order matches the sections below.
const SECTIONS: [(&str, &str); 10] = [
    ("introduction", "Introduction"),
    ("information-collected", "Information We Collect"),
    ("use-of-information", "How We Use Your Information"),
    ("information-sharing", "Information Sharing and Disclosure"),
    ("data-security", "Data Security"),
    ("your-rights", "Your Rights and Choices"),
    ("children-privacy", "Children's Privacy"),
    ("international-transfers", "International Data Transfers"),
    ("policy-changes", "Changes to This Privacy Policy"),
    ("contact-us", "Contact Us"),
];

fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Privacy)]
pub fn privacy() -> Html {
    html! {
        <div class="privacy-page">
            <style>{PRIVACY_STYLE}</style>
            <SiteHeader current={Route::Privacy} fixed=true />
            <div class="background-glow"></div>
            <div class="content-wrapper">
                <div class="hero-section">
                    <h1 class="hero-title">{"Privacy Policy"}</h1>
                    <p class="last-updated">{"Last Updated: January 15, 2024"}</p>
                    <div class="table-of-contents">
                        <h3 class="toc-title">{"Table of Contents"}</h3>
                        <ol class="toc-list">
                            { SECTIONS.iter().map(|(id, title)| {
                                let onclick = {
                                    let id = *id;
                                    Callback::from(move |e: MouseEvent| {
                                        e.prevent_default();
                                        scroll_to_section(id);
                                    })
                                };
                                html! {
                                    <li key={*id}>
                                        <a href={format!("#{}", id)} {onclick}>{ *title }</a>
                                    </li>
                                }
                            }).collect::<Html>() }
                        </ol>
                    </div>
                </div>

                <section id="introduction">
                    <h2 class="section-title">{"Introduction"}</h2>
                    <p>{"Maska.FR (\"we\", \"our\", or \"us\") is committed to protecting your privacy. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you visit our website and use our streaming service, including mobile applications and related services (collectively, the \"Service\")."}</p>
                    <p>{"Please read this Privacy Policy carefully. By accessing or using our Service, you acknowledge that you have read, understood, and agree to be bound by all the terms of this Privacy Policy. If you do not agree with the terms of this Privacy Policy, please do not access the Service."}</p>
                    <div class="floating-icon">
                        <svg viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg">
                            <path d="M12 2C6.48 2 2 6.48 2 12C2 17.52 6.48 22 12 22C17.52 22 22 17.52 22 12C22 6.48 17.52 2 12 2ZM12 20C7.59 20 4 16.41 4 12C4 7.59 7.59 4 12 4C16.41 4 20 7.59 20 12C20 16.41 16.41 20 12 20ZM11 7H13V9H11V7ZM11 11H13V17H11V11Z"/>
                        </svg>
                    </div>
                </section>

                <section id="information-collected">
                    <h2 class="section-title">{"Information We Collect"}</h2>
                    <p>{"We collect several types of information from and about users of our Service, including:"}</p>
                    <ul>
                        <li><strong>{"Personal Information:"}</strong>{" Name, email address, phone number, billing address, payment information, and other similar identifiers."}</li>
                        <li><strong>{"Account Information:"}</strong>{" Your username, password, account preferences, and subscription details."}</li>
                        <li><strong>{"User Content:"}</strong>{" Profiles, watchlists, ratings, reviews, and content preferences you provide."}</li>
                        <li><strong>{"Usage Data:"}</strong>{" Information about how you use our Service, including viewing history, search queries, interaction with content, and time spent."}</li>
                        <li><strong>{"Device Information:"}</strong>{" Hardware model, operating system, browser type, IP address, device identifiers, and mobile network information."}</li>
                        <li><strong>{"Location Data:"}</strong>{" General location derived from IP address."}</li>
                    </ul>
                </section>

                <section id="use-of-information">
                    <h2 class="section-title">{"How We Use Your Information"}</h2>
                    <p>{"We use the information we collect for various purposes, including to:"}</p>
                    <ul>
                        <li>{"Provide, maintain, and improve our Service"}</li>
                        <li>{"Process transactions and manage your account"}</li>
                        <li>{"Personalize your experience and deliver tailored content recommendations"}</li>
                        <li>{"Communicate with you about new features, offers, and updates"}</li>
                        <li>{"Monitor and analyze usage patterns and trends"}</li>
                        <li>{"Detect, prevent, and address technical issues and security breaches"}</li>
                        <li>{"Comply with legal obligations and enforce our terms of service"}</li>
                    </ul>
                    <p>{"We process your information for these purposes based on our legitimate business interests, to perform our contract with you, to comply with legal obligations, and/or with your consent when applicable."}</p>
                </section>

                <section id="information-sharing">
                    <h2 class="section-title">{"Information Sharing and Disclosure"}</h2>
                    <p>{"We may share your information in the following circumstances:"}</p>
                    <ul>
                        <li><strong>{"Service Providers:"}</strong>{" With third-party vendors and service providers who need access to your information to help us provide the Service (e.g., payment processors, cloud hosting, analytics)."}</li>
                        <li><strong>{"Business Transfers:"}</strong>{" In connection with a merger, acquisition, reorganization, or sale of assets, in which case personal information may be one of the transferred assets."}</li>
                        <li><strong>{"Legal Compliance:"}</strong>{" When required by law or in response to valid legal process, such as a court order or government request."}</li>
                        <li><strong>{"Protection of Rights:"}</strong>{" When we believe disclosure is necessary to protect our rights, property, or safety, or that of our users or others."}</li>
                    </ul>
                    <p>{"We do not sell your personal information to third parties for monetary compensation. However, we may share certain information with partners for personalization and advertising purposes."}</p>
                </section>

                <section id="data-security">
                    <h2 class="section-title">{"Data Security"}</h2>
                    <p>{"We implement appropriate technical and organizational measures to protect the security of your personal information. However, please be aware that no method of transmission over the Internet or electronic storage is 100% secure."}</p>
                    <p>{"We cannot guarantee the absolute security of your information. We encourage you to help us by keeping your account password confidential and by taking precautions to protect your personal information while using the Internet."}</p>
                </section>

                <section id="your-rights">
                    <h2 class="section-title">{"Your Rights and Choices"}</h2>
                    <p>{"Depending on your location, you may have certain rights regarding your personal information, including:"}</p>
                    <ul>
                        <li>{"Access to your personal information"}</li>
                        <li>{"Correction of inaccurate or incomplete information"}</li>
                        <li>{"Deletion of your personal information"}</li>
                        <li>{"Portability of your personal information"}</li>
                        <li>{"Restriction or objection to certain processing"}</li>
                        <li>{"Withdrawal of consent (where processing is based on consent)"}</li>
                    </ul>
                    <p>{"To exercise these rights, please contact us using the information provided in the \"Contact Us\" section. We will respond to your request within the timeframe required by applicable law."}</p>
                    <p>{"Please note that some of these rights may be limited where we have compelling reasons to continue processing your information."}</p>
                </section>

                <section id="children-privacy">
                    <h2 class="section-title">{"Children's Privacy"}</h2>
                    <p>{"Our Service is not directed to children under 16 years of age. We do not knowingly collect personal information from children under 16. If you are a parent or guardian and believe that your child has provided us with personal information, please contact us so that we can take necessary actions."}</p>
                </section>

                <section id="international-transfers">
                    <h2 class="section-title">{"International Data Transfers"}</h2>
                    <p>{"Your personal information may be transferred to, and processed in, countries other than the country in which you reside. These countries may have data protection laws that are different from the laws of your country."}</p>
                    <p>{"Whenever we transfer your personal information internationally, we take appropriate safeguards to ensure that your information receives an adequate level of protection."}</p>
                </section>

                <section id="policy-changes">
                    <h2 class="section-title">{"Changes to This Privacy Policy"}</h2>
                    <p>{"We may update our Privacy Policy from time to time. Any changes will be posted on this page, and if significant, we will provide a more prominent notice."}</p>
                    <p>{"Your continued use of the Service after we post any modifications to the Privacy Policy will constitute your acknowledgment of the modifications and your consent to the modified Privacy Policy."}</p>
                </section>

                <section id="contact-us">
                    <h2 class="section-title">{"Contact Us"}</h2>
                    <p>{"If you have any questions about this Privacy Policy or our data practices, please contact us:"}</p>
                    <div class="contact-card">
                        <h3>{"Maska.FR Privacy Team"}</h3>
                        <p>{"Email: privacy@maska.FR"}</p>
                        <p>{"Address: 123 Entertainment Blvd, Suite 500, Los Angeles, CA 90001"}</p>
                        <p>{"Phone: +1 (800) 555-MASKA"}</p>
                    </div>
                    <p>{"We strive to respond to all inquiries within 30 days."}</p>
                </section>

                <div class="footer-wrapper">
                    <SiteFooter />
                </div>
            </div>
        </div>
    }
}

const PRIVACY_STYLE: &str = r#"
html {
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

.privacy-page {
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
    background: radial-gradient(circle at center, rgba(255, 77, 109, 0.08) 0%, transparent 70%);
    z-index: 1;
    filter: blur(120px);
    pointer-events: none;
}

.content-wrapper {
    position: relative;
    z-index: 10;
    width: 100%;
    max-width: 1000px;
    margin: 0 auto;
    padding: 120px 2rem 4rem;
}

.hero-section {
    width: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 4rem 0 0;
    position: relative;
    animation: fade-up 0.8s ease both;
}

.hero-title {
    font-size: clamp(2.5rem, 6vw, 4rem);
    font-weight: 900;
    text-align: center;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    margin-bottom: 2rem;
    line-height: 1.1;
    filter: drop-shadow(0 0 20px rgba(255, 255, 255, 0.4));
}

.last-updated {
    font-size: 1rem;
    color: rgba(255, 255, 255, 0.6);
    margin-bottom: 3rem;
}

.table-of-contents {
    width: 100%;
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    padding: 2rem;
    border-radius: 12px;
    margin: 0 0 3rem;
    backdrop-filter: blur(10px);
    animation: fade-up 0.8s ease 0.2s both;
}

.toc-title {
    font-size: 1.3rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
    color: white;
}

.toc-list {
    padding-left: 1.5rem;
}

.toc-list li {
    font-size: 1rem;
    line-height: 1.6;
    margin-bottom: 0.8rem;
}

.toc-list a {
    color: rgba(255, 255, 255, 0.8);
    text-decoration: none;
    transition: all 0.3s ease;
}

.toc-list a:hover {
    color: #FF4D6D;
}

.privacy-page section {
    margin-bottom: 4rem;
    position: relative;
    animation: fade-up 0.8s ease 0.3s both;
}

.section-title {
    font-size: clamp(1.5rem, 3vw, 2rem);
    font-weight: 800;
    margin-bottom: 1.5rem;
    color: white;
    position: relative;
}

.section-title::after {
    content: '';
    position: absolute;
    bottom: -10px;
    left: 0;
    width: 60px;
    height: 3px;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    border-radius: 3px;
}

.privacy-page section p {
    font-size: 1.1rem;
    line-height: 1.8;
    color: rgba(255, 255, 255, 0.8);
    margin-bottom: 1.5rem;
}

.privacy-page section ul {
    margin-bottom: 1.5rem;
    padding-left: 1.5rem;
}

.privacy-page section li {
    font-size: 1.1rem;
    line-height: 1.8;
    color: rgba(255, 255, 255, 0.8);
    margin-bottom: 0.8rem;
}

.floating-icon {
    position: absolute;
    width: 300px;
    height: 300px;
    opacity: 0.03;
    z-index: -1;
    right: -150px;
    top: 50px;
    animation: slow-tilt 10s ease-in-out infinite alternate;
}

.floating-icon svg {
    width: 100%;
    height: 100%;
}

.contact-card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    padding: 2rem;
    border-radius: 12px;
    margin: 3rem 0;
    backdrop-filter: blur(10px);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
    transition: all 0.4s ease;
}

.contact-card:hover {
    transform: translateY(-5px);
    border-color: rgba(255, 77, 109, 0.3);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3), 0 0 30px rgba(255, 77, 109, 0.15);
}

.contact-card h3 {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
    color: white;
}

.contact-card p {
    margin-bottom: 0.8rem;
}

.footer-wrapper {
    margin-top: 4rem;
}

@keyframes fade-up {
    from {
        opacity: 0;
        transform: translateY(20px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

@keyframes slow-tilt {
    from { transform: rotate(0deg); }
    to { transform: rotate(10deg); }
}
"#;
