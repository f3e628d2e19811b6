use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::Route;

const SECTIONS: [(&str, &str); 10] = [
    ("acceptance", "Acceptance of Terms"),
    ("eligibility", "Eligibility"),
    ("account", "Account and Security"),
    ("subscription", "Subscription and Billing"),
    ("content", "Content and Licenses"),
    ("prohibited", "Prohibited Uses"),
    ("disclaimers", "Disclaimers and Limitations"),
    ("termination", "Termination"),
    ("changes", "Changes to Terms"),
    ("general", "General Provisions"),
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

#[function_component(Terms)]
pub fn terms() -> Html {
    html! {
        <div class="terms-page">
            <style>{TERMS_STYLE}</style>
            <SiteHeader current={Route::Terms} fixed=true />
            <div class="background-glow"></div>
            <div class="content-wrapper">
                <div class="hero-section">
                    <h1 class="hero-title">{"Terms of Service"}</h1>
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

                <section id="acceptance">
                    <h2 class="section-title">{"Acceptance of Terms"}</h2>
                    <p>{"Welcome to Maska.TV. These Terms of Service (\"Terms\") govern your access to and use of the Maska.TV streaming service, including any content, functionality, and services offered on or through our website and applications (collectively, the \"Service\")."}</p>
                    <p>{"By registering for an account, accessing, or using our Service, you agree to be bound by these Terms. If you do not agree to these Terms, you must not access or use the Service."}</p>
                    <p>{"Please read these Terms carefully before using our Service. These Terms constitute a legally binding agreement between you and Maska Entertainment, Inc. (\"Maska.TV,\" \"we,\" \"us,\" or \"our\")."}</p>
                    <div class="floating-icon">
                        <svg viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg">
                            <path d="M12 2C6.48 2 2 6.48 2 12C2 17.52 6.48 22 12 22C17.52 22 22 17.52 22 12C22 6.48 17.52 2 12 2ZM12 20C7.59 20 4 16.41 4 12C4 7.59 7.59 4 12 4C16.41 4 20 7.59 20 12C20 16.41 16.41 20 12 20ZM11 7H13V9H11V7ZM11 11H13V17H11V11Z"/>
                        </svg>
                    </div>
                </section>

                <section id="eligibility">
                    <h2 class="section-title">{"Eligibility"}</h2>
                    <p>{"You must be at least 18 years old or the age of legal majority in your jurisdiction, whichever is greater, to register for an account and use our Service. By using the Service, you represent and warrant that you meet these eligibility requirements."}</p>
                    <p>{"If you are creating an account on behalf of a company, organization, or other entity, you represent and warrant that you have the authority to bind that entity to these Terms, in which case \"you\" and \"your\" will refer to that entity."}</p>
                    <p>{"Certain content available through our Service may be subject to additional age restrictions or ratings. You are responsible for complying with all such restrictions."}</p>
                </section>

                <section id="account">
                    <h2 class="section-title">{"Account and Security"}</h2>
                    <p>{"To access certain features of the Service, you must register for an account. When registering, you agree to provide accurate, current, and complete information about yourself and to update this information to keep it accurate, current, and complete."}</p>
                    <p>{"You are solely responsible for:"}</p>
                    <ul>
                        <li>{"Maintaining the confidentiality of your account credentials"}</li>
                        <li>{"All activities that occur under your account"}</li>
                        <li>{"Restricting access to your devices"}</li>
                        <li>{"Logging out of your account at the end of each session"}</li>
                    </ul>
                    <p>{"You agree to immediately notify us of any unauthorized use of your account or any other breach of security. We will not be liable for any loss or damage arising from your failure to protect your account information."}</p>
                    <p>{"Maska.TV reserves the right to disable any user account at any time if, in our opinion, you have violated any provisions of these Terms."}</p>
                </section>

                <section id="subscription">
                    <h2 class="section-title">{"Subscription and Billing"}</h2>
                    <p>{"Maska.TV offers various subscription plans. By subscribing to our Service, you agree to the following terms:"}</p>
                    <ul>
                        <li><strong>{"Fees:"}</strong>{" You agree to pay all fees associated with your selected subscription plan. All fees are in USD unless otherwise stated and are non-refundable except as expressly provided in these Terms."}</li>
                        <li><strong>{"Free Trials:"}</strong>{" We may offer free trial subscriptions. Unless you cancel before the end of the trial period, your subscription will automatically convert to a paid subscription, and your payment method will be charged."}</li>
                        <li><strong>{"Recurring Billing:"}</strong>{" Your subscription will automatically renew at the end of each billing period unless you cancel before the renewal date."}</li>
                        <li><strong>{"Price Changes:"}</strong>{" We reserve the right to adjust pricing for our Service or any components thereof. Any price changes will take effect following notice to you."}</li>
                        <li><strong>{"Cancellation:"}</strong>{" You may cancel your subscription at any time through your account settings. Cancellation will be effective at the end of your current billing period."}</li>
                    </ul>
                    <p>{"By providing a payment method, you authorize us to charge that payment method for the subscription fees associated with your plan. If your payment cannot be completed, we may suspend or terminate your access to the Service."}</p>
                </section>

                <section id="content">
                    <h2 class="section-title">{"Content and Licenses"}</h2>
                    <p>{"Maska.TV grants you a limited, non-exclusive, non-transferable, revocable license to access and use the Service, including streaming and temporarily downloading content for personal, non-commercial use only."}</p>
                    <p>{"You may not:"}</p>
                    <ul>
                        <li>{"Reproduce, distribute, publicly display, publicly perform, or create derivative works from the content available through the Service"}</li>
                        <li>{"Remove, alter, or obscure any copyright, trademark, or other proprietary notices"}</li>
                        <li>{"Use the content for any commercial purpose"}</li>
                        <li>{"Transfer your rights to access content to another person"}</li>
                        <li>{"Circumvent, disable, or interfere with security-related features of the Service"}</li>
                    </ul>
                    <p>{"All content provided through the Service is owned by Maska.TV or its licensors and is protected by copyright, trademark, and other intellectual property laws."}</p>
                    <p>{"We reserve the right to add, remove, or modify content available through the Service at any time without notice."}</p>
                </section>

                <section id="prohibited">
                    <h2 class="section-title">{"Prohibited Uses"}</h2>
                    <p>{"You agree not to use the Service:"}</p>
                    <ul>
                        <li>{"In any way that violates any applicable federal, state, local, or international law or regulation"}</li>
                        <li>{"To impersonate or attempt to impersonate Maska.TV, a Maska.TV employee, another user, or any other person or entity"}</li>
                        <li>{"To engage in any conduct that restricts or inhibits anyone's use or enjoyment of the Service"}</li>
                        <li>{"To attempt to gain unauthorized access to, interfere with, damage, or disrupt any parts of the Service, the server on which the Service is stored, or any server, computer, or database connected to the Service"}</li>
                        <li>{"To attack the Service via a denial-of-service attack or a distributed denial-of-service attack"}</li>
                        <li>{"To use any robot, spider, or other automatic device, process, or means to access the Service for any purpose"}</li>
                        <li>{"To introduce any viruses, trojan horses, worms, logic bombs, or other malicious or technologically harmful material"}</li>
                    </ul>
                    <p>{"We reserve the right to terminate your access to the Service for any violation of these prohibited uses."}</p>
                </section>

                <section id="disclaimers">
                    <h2 class="section-title">{"Disclaimers and Limitations"}</h2>
                    <p>{"THE SERVICE AND ALL CONTENT PROVIDED THROUGH THE SERVICE ARE PROVIDED \"AS IS\" AND \"AS AVAILABLE\" WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR IMPLIED."}</p>
                    <p>{"TO THE FULLEST EXTENT PERMITTED BY LAW, MASKA.TV DISCLAIMS ALL WARRANTIES, EXPRESS OR IMPLIED, INCLUDING, BUT NOT LIMITED TO, IMPLIED WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE, AND NON-INFRINGEMENT."}</p>
                    <p>{"MASKA.TV DOES NOT WARRANT THAT THE SERVICE WILL BE UNINTERRUPTED OR ERROR-FREE, THAT DEFECTS WILL BE CORRECTED, OR THAT THE SERVICE OR THE SERVERS THAT MAKE IT AVAILABLE ARE FREE OF VIRUSES OR OTHER HARMFUL COMPONENTS."}</p>
                    <p>{"IN NO EVENT WILL MASKA.TV, ITS AFFILIATES, OR THEIR LICENSORS, SERVICE PROVIDERS, EMPLOYEES, AGENTS, OFFICERS, OR DIRECTORS BE LIABLE FOR DAMAGES OF ANY KIND, UNDER ANY LEGAL THEORY, ARISING OUT OF OR IN CONNECTION WITH YOUR USE OF THE SERVICE, INCLUDING ANY DIRECT, INDIRECT, SPECIAL, INCIDENTAL, CONSEQUENTIAL, OR PUNITIVE DAMAGES."}</p>
                    <p>{"SOME JURISDICTIONS DO NOT ALLOW THE EXCLUSION OF CERTAIN WARRANTIES OR THE LIMITATION OR EXCLUSION OF LIABILITY FOR INCIDENTAL OR CONSEQUENTIAL DAMAGES, SO THE ABOVE LIMITATIONS OR EXCLUSIONS MAY NOT APPLY TO YOU."}</p>
                </section>

                <section id="termination">
                    <h2 class="section-title">{"Termination"}</h2>
                    <p>{"We may terminate or suspend your account and access to the Service immediately, without prior notice or liability, for any reason, including, without limitation, if you breach these Terms."}</p>
                    <p>{"Upon termination, your right to use the Service will immediately cease. If you wish to terminate your account, you may simply discontinue using the Service and cancel your subscription through your account settings."}</p>
                    <p>{"All provisions of the Terms which by their nature should survive termination shall survive termination, including, without limitation, ownership provisions, warranty disclaimers, indemnity, and limitations of liability."}</p>
                </section>

                <section id="changes">
                    <h2 class="section-title">{"Changes to Terms"}</h2>
                    <p>{"We may revise and update these Terms from time to time in our sole discretion. All changes are effective immediately when we post them and apply to all access to and use of the Service thereafter."}</p>
                    <p>{"Your continued use of the Service following the posting of revised Terms means that you accept and agree to the changes. You are expected to check this page frequently so you are aware of any changes, as they are binding on you."}</p>
                    <p>{"If we make material changes to these Terms, we will provide notice through the Service or by other means, to provide you the opportunity to review the changes before they become effective."}</p>
                </section>

                <section id="general">
                    <h2 class="section-title">{"General Provisions"}</h2>
                    <p><strong>{"Governing Law:"}</strong>{" These Terms are governed by and construed in accordance with the laws of the State of California, without giving effect to any principles of conflicts of law."}</p>
                    <p><strong>{"Dispute Resolution:"}</strong>{" Any dispute arising from or relating to these Terms or the Service will be resolved through binding arbitration in Los Angeles, California, except that you or Maska.TV may seek injunctive or other equitable relief in any court of competent jurisdiction."}</p>
                    <p><strong>{"Severability:"}</strong>{" If any provision of these Terms is held to be invalid, illegal, or unenforceable, such provision shall be struck, and the remaining provisions shall remain in full force and effect."}</p>
                    <p><strong>{"Entire Agreement:"}</strong>{" These Terms, together with our Privacy Policy, constitute the sole and entire agreement between you and Maska.TV regarding the Service and supersede all prior and contemporaneous understandings, agreements, representations, and warranties."}</p>
                    <p><strong>{"Waiver:"}</strong>{" No waiver of any term or condition set forth in these Terms shall be deemed a further or continuing waiver of such term or condition or a waiver of any other term or condition."}</p>
                    <p><strong>{"Assignment:"}</strong>{" You may not assign or transfer these Terms or your rights under these Terms, in whole or in part, by operation of law or otherwise, without our prior written consent. We may assign these Terms at any time without notice."}</p>
                    <p><strong>{"Contact Information:"}</strong>{" Questions or comments about the Terms or the Service may be directed to us at the email address terms@maska.tv or by mail at Maska Entertainment, Inc., 123 Entertainment Blvd, Suite 500, Los Angeles, CA 90001."}</p>
                </section>

                <div class="footer-wrapper">
                    <SiteFooter />
                </div>
            </div>
        </div>
    }
}

const TERMS_STYLE: &str = r#"
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

.terms-page {
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

.terms-page section {
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

.terms-page section p {
    font-size: 1.1rem;
    line-height: 1.8;
    color: rgba(255, 255, 255, 0.8);
    margin-bottom: 1.5rem;
}

.terms-page section ul {
    margin-bottom: 1.5rem;
    padding-left: 1.5rem;
}

.terms-page section li {
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
