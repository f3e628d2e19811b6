use web_sys::{HtmlInputElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::Route;

enum Answer {
    Plain(&'static str),
    /// Markup-bearing answer. Only the question text participates in search.
    Rich(fn() -> Html),
}

struct FaqEntry {
    question: &'static str,
    answer: Answer,
}

struct FaqCategory {
    title: &'static str,
    entries: &'static [FaqEntry],
}

fn subscription_plans_answer() -> Html {
    html! {
        <>
            <p>{"Maska.TV offers three subscription tiers:"}</p>
            <ul>
                <li><strong>{"Basic"}</strong>{" ($8.99/month): HD streaming on one device"}</li>
                <li><strong>{"Standard"}</strong>{" ($14.99/month): 4K streaming on up to two devices simultaneously"}</li>
                <li><strong>{"Premium"}</strong>{" ($19.99/month): 4K Ultra HD with Dolby Atmos on up to four devices simultaneously, plus exclusive content"}</li>
            </ul>
            <p>{"All plans include ad-free viewing and access to our entire content library."}</p>
        </>
    }
}

fn supported_devices_answer() -> Html {
    html! {
        <>
            <p>{"Maska.TV is available on a wide range of devices, including:"}</p>
            <ul>
                <li>{"Smartphones and tablets (iOS and Android)"}</li>
                <li>{"Web browsers (Chrome, Safari, Firefox, Edge)"}</li>
                <li>{"Smart TVs (Samsung, LG, Sony, Vizio)"}</li>
                <li>{"Streaming devices (Roku, Apple TV, Amazon Fire TV, Chromecast)"}</li>
                <li>{"Gaming consoles (PlayStation, Xbox)"}</li>
            </ul>
        </>
    }
}

const CATEGORIES: [FaqCategory; 4] = [
    FaqCategory {
        title: "Subscription & Billing",
        entries: &[
            FaqEntry {
                question: "What subscription plans does Maska.TV offer?",
                answer: Answer::Rich(subscription_plans_answer),
            },
            FaqEntry {
                question: "How does the free trial work?",
                answer: Answer::Plain("New subscribers receive a 14-day free trial. You'll need to provide payment information when signing up, but you won't be charged until the trial period ends. You can cancel anytime during the trial period and won't be billed."),
            },
            FaqEntry {
                question: "How do I cancel my subscription?",
                answer: Answer::Plain("You can cancel your subscription at any time by going to your Account Settings and selecting 'Cancel Subscription'. Your subscription will remain active until the end of your current billing period. We don't offer refunds for partial subscription periods."),
            },
            FaqEntry {
                question: "Will I be notified before my subscription renews?",
                answer: Answer::Plain("Yes, we'll send you an email reminder three days before your subscription renews. You can also enable push notifications in your account settings to receive renewal reminders."),
            },
            FaqEntry {
                question: "What payment methods are accepted?",
                answer: Answer::Plain("Maska.TV accepts all major credit/debit cards (Visa, Mastercard, American Express, Discover), PayPal, Apple Pay, and Google Pay. In select regions, we also support local payment methods."),
            },
        ],
    },
    FaqCategory {
        title: "Content & Streaming",
        entries: &[
            FaqEntry {
                question: "What types of content are available on Maska.TV?",
                answer: Answer::Plain("Maska.TV offers a diverse library of movies, TV shows, documentaries, and exclusive original productions. Our content spans various genres including drama, comedy, action, sci-fi, horror, and family-friendly programming. We regularly add new titles and produce original content exclusively for our platform."),
            },
            FaqEntry {
                question: "Can I download content for offline viewing?",
                answer: Answer::Plain("Yes, most titles on Maska.TV are available for download on mobile devices for offline viewing. Look for the download icon on eligible titles. Downloads remain available for 30 days and expire 48 hours after you start watching."),
            },
            FaqEntry {
                question: "What video quality does Maska.TV offer?",
                answer: Answer::Plain("Depending on your subscription plan and internet speed, Maska.TV offers streaming in SD (480p), HD (1080p), and 4K Ultra HD with HDR and Dolby Vision on select titles. We also offer Dolby Atmos audio on compatible devices with our Premium plan."),
            },
            FaqEntry {
                question: "How many devices can I stream on simultaneously?",
                answer: Answer::Plain("The number of devices you can stream on simultaneously depends on your subscription plan: Basic (1 device), Standard (2 devices), or Premium (4 devices)."),
            },
            FaqEntry {
                question: "Does Maska.TV have parental controls?",
                answer: Answer::Plain("Yes, Maska.TV offers comprehensive parental controls. You can create kids' profiles with age-appropriate content restrictions, set PIN-protected access to adult content, and monitor viewing activity for all profiles on your account."),
            },
        ],
    },
    FaqCategory {
        title: "Technical Support",
        entries: &[
            FaqEntry {
                question: "What devices can I watch Maska.TV on?",
                answer: Answer::Rich(supported_devices_answer),
            },
            FaqEntry {
                question: "Why am I experiencing buffering or poor video quality?",
                answer: Answer::Plain("Buffering or poor video quality is usually related to your internet connection. For optimal streaming, we recommend a minimum speed of 5 Mbps for HD content and 25 Mbps for 4K content. Try closing other applications, restarting your device, or connecting via ethernet cable instead of Wi-Fi for better performance."),
            },
            FaqEntry {
                question: "How do I reset my password?",
                answer: Answer::Plain("To reset your password, go to the login screen and click 'Forgot Password'. Enter the email address associated with your account, and we'll send you a password reset link. For security reasons, this link expires after 24 hours."),
            },
            FaqEntry {
                question: "Can I watch Maska.TV while traveling abroad?",
                answer: Answer::Plain("Yes, Maska.TV is available in over 190 countries. However, the content library may vary based on your location due to licensing restrictions. Some features may also be limited in certain regions. Downloaded content remains accessible regardless of your location."),
            },
            FaqEntry {
                question: "My audio and video are out of sync. How can I fix this?",
                answer: Answer::Plain("If you're experiencing audio/video sync issues, try these steps: (1) Refresh your browser or restart the app, (2) Clear the app cache, (3) Update your app to the latest version, (4) Restart your device, (5) Check if the issue occurs on other devices. If problems persist, please contact our support team."),
            },
        ],
    },
    FaqCategory {
        title: "Account Management",
        entries: &[
            FaqEntry {
                question: "How many profiles can I create on my account?",
                answer: Answer::Plain("You can create up to 5 profiles on a single Maska.TV account. Each profile maintains its own watchlist, viewing history, and personalized recommendations."),
            },
            FaqEntry {
                question: "Can I share my account with family members?",
                answer: Answer::Plain("Yes, Maska.TV allows account sharing among household members. Each person can create their own profile. However, the number of simultaneous streams is limited by your subscription plan. For security reasons, we may verify that shared accounts are within the same household."),
            },
            FaqEntry {
                question: "How do I update my billing information?",
                answer: Answer::Plain("To update your billing information, go to your Account Settings and select 'Payment Information'. From there, you can add, edit, or remove payment methods. Changes will apply to your next billing cycle."),
            },
            FaqEntry {
                question: "Can I transfer my watch history and preferences to a new account?",
                answer: Answer::Plain("Currently, we don't offer the ability to transfer watch history and preferences between accounts. If you create a new account, you'll need to rebuild your watchlist and viewing preferences."),
            },
            FaqEntry {
                question: "How do I delete my account?",
                answer: Answer::Plain("To delete your account, go to Account Settings and select 'Delete Account' at the bottom of the page. You'll need to confirm this action by entering your password. Please note that account deletion is permanent and removes all your profiles, viewing history, and saved preferences."),
            },
        ],
    },
];

fn entry_matches(entry: &FaqEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    if entry.question.to_lowercase().contains(&query) {
        return true;
    }
    match entry.answer {
        Answer::Plain(text) => text.to_lowercase().contains(&query),
        Answer::Rich(_) => false,
    }
}

/// Categories with at least one matching entry, in declaration order.
fn visible_categories(query: &str) -> Vec<(&'static FaqCategory, Vec<&'static FaqEntry>)> {
    CATEGORIES
        .iter()
        .filter_map(|category| {
            let entries: Vec<_> = category
                .entries
                .iter()
                .filter(|entry| entry_matches(entry, query))
                .collect();
            if entries.is_empty() {
                None
            } else {
                Some((category, entries))
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let query = use_state(String::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let visible = visible_categories(query.as_str());

    html! {
        <div class="faq-page">
            <style>{FAQ_STYLE}</style>

            <SiteHeader current={Route::Faq} fixed=true />

            <div class="background-glow"></div>
            <div class="floating-element-1"></div>
            <div class="floating-element-2"></div>

            <div class="content-wrapper">
                <section class="faq-hero">
                    <h1>{"Frequently Asked Questions"}</h1>
                    <p>{"Find answers to common questions about Maska.TV's subscription plans, features, and technical support."}</p>

                    <div class="search-container">
                        <input
                            class="search-input"
                            placeholder="Search for a question..."
                            value={(*query).clone()}
                            oninput={on_search}
                        />
                        <div class="search-icon">
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                                <circle cx="11" cy="11" r="8" />
                                <line x1="21" y1="21" x2="16.65" y2="16.65" />
                            </svg>
                        </div>
                    </div>
                </section>

                <section class="faq-section">
                    {
                        visible.iter().map(|(category, entries)| html! {
                            <div class="faq-category" key={category.title}>
                                <h2 class="category-title">{category.title}</h2>
                                <div class="faq-container">
                                    {
                                        entries.iter().map(|entry| html! {
                                            <FaqItem key={entry.question} question={entry.question}>
                                                {
                                                    match &entry.answer {
                                                        Answer::Plain(text) => html! { <p>{*text}</p> },
                                                        Answer::Rich(build) => build(),
                                                    }
                                                }
                                            </FaqItem>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        }).collect::<Html>()
                    }

                    if visible.is_empty() {
                        <div class="no-results">
                            {format!("No questions found matching \"{}\". Please try a different search term.", *query)}
                        </div>
                    }
                </section>

                <div class="footer-wrapper">
                    <SiteFooter />
                </div>
            </div>
        </div>
    }
}

const FAQ_STYLE: &str = r#"
.faq-page {
    width: 100%;
    min-height: 100vh;
    background: #000000;
    color: white;
    position: relative;
    font-family: 'Montserrat', 'Inter', sans-serif;
    overflow-x: hidden;
    scroll-behavior: smooth;
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

.floating-element-1,
.floating-element-2 {
    position: absolute;
    border-radius: 50%;
    filter: blur(40px);
    z-index: 1;
    pointer-events: none;
}

.floating-element-1 {
    width: 400px;
    height: 400px;
    top: 15%;
    left: 5%;
    background: radial-gradient(circle at center, rgba(255, 77, 109, 0.1) 0%, transparent 70%);
    animation: drift-a 20s ease-in-out infinite alternate;
}

.floating-element-2 {
    width: 300px;
    height: 300px;
    top: 60%;
    left: 80%;
    background: radial-gradient(circle at center, rgba(255, 77, 109, 0.08) 0%, transparent 70%);
    animation: drift-b 25s ease-in-out infinite alternate;
}

@keyframes drift-a {
    from { transform: translate(0, 0); }
    to { transform: translate(30px, 20px); }
}

@keyframes drift-b {
    from { transform: translate(0, 0); }
    to { transform: translate(-20px, 40px); }
}

.content-wrapper {
    position: relative;
    z-index: 10;
    width: 100%;
    max-width: 1000px;
    margin: 0 auto;
    padding: 120px 2rem 4rem;
    box-sizing: border-box;
}

.faq-hero {
    width: 100%;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 4rem 0;
    position: relative;
}

.faq-hero h1 {
    font-size: clamp(2.5rem, 6vw, 4rem);
    font-weight: 900;
    text-align: center;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    margin-bottom: 1rem;
    line-height: 1.1;
    filter: drop-shadow(0 0 20px rgba(255, 255, 255, 0.4));
}

.faq-hero p {
    font-size: 1.2rem;
    color: rgba(255, 255, 255, 0.8);
    text-align: center;
    max-width: 700px;
    margin-bottom: 3rem;
}

.search-container {
    position: relative;
    margin-bottom: 3rem;
    width: 100%;
    max-width: 600px;
}

.search-input {
    width: 100%;
    padding: 1.2rem 3rem 1.2rem 1.5rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    color: white;
    font-size: 1rem;
    outline: none;
    transition: all 0.3s ease;
    box-sizing: border-box;
}

.search-input:focus {
    border-color: rgba(255, 77, 109, 0.5);
    background: rgba(255, 255, 255, 0.08);
    box-shadow: 0 0 20px rgba(255, 77, 109, 0.2);
}

.search-input::placeholder {
    color: rgba(255, 255, 255, 0.4);
}

.search-icon {
    position: absolute;
    right: 1.5rem;
    top: 50%;
    transform: translateY(-50%);
    width: 18px;
    height: 18px;
    color: rgba(255, 255, 255, 0.5);
    pointer-events: none;
}

.search-icon svg {
    width: 100%;
    height: 100%;
    stroke-width: 2;
    stroke-linecap: round;
    stroke-linejoin: round;
}

.faq-section {
    width: 100%;
    margin-bottom: 4rem;
}

.faq-category {
    margin-bottom: 3rem;
}

.category-title {
    font-size: clamp(1.5rem, 3vw, 2rem);
    font-weight: 800;
    margin-bottom: 1.5rem;
    color: white;
    position: relative;
}

.category-title::after {
    content: '';
    position: absolute;
    bottom: -10px;
    left: 0;
    width: 60px;
    height: 3px;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    border-radius: 3px;
}

.faq-container {
    width: 100%;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.faq-item {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    overflow: hidden;
    transition: all 0.4s cubic-bezier(0.04, 0.62, 0.23, 0.98);
}

.faq-item:hover {
    border-color: rgba(255, 77, 109, 0.3);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2), 0 0 15px rgba(255, 77, 109, 0.1);
    transform: translateY(-2px);
}

.faq-question {
    width: 100%;
    padding: 1.5rem;
    background: none;
    border: none;
    color: rgba(255, 255, 255, 0.9);
    font-size: 1.1rem;
    font-weight: 500;
    font-family: inherit;
    text-align: left;
    cursor: pointer;
    display: flex;
    justify-content: space-between;
    align-items: center;
    transition: all 0.4s cubic-bezier(0.04, 0.62, 0.23, 0.98);
}

.faq-question:hover {
    color: white;
    background-color: rgba(255, 255, 255, 0.02);
}

.faq-item.open .faq-question {
    color: white;
    font-weight: 600;
    background-color: rgba(255, 77, 109, 0.05);
}

.toggle-icon {
    width: 24px;
    height: 24px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255, 77, 109, 0.1);
    border-radius: 50%;
    flex-shrink: 0;
    margin-left: 1rem;
    color: #FF4D6D;
    transition: all 0.4s cubic-bezier(0.04, 0.62, 0.23, 0.98);
}

.faq-item.open .toggle-icon {
    transform: rotate(180deg);
    background: rgba(255, 77, 109, 0.25);
}

.faq-answer {
    max-height: 0;
    overflow: hidden;
    transition: max-height 0.5s cubic-bezier(0.04, 0.62, 0.23, 0.98);
    padding: 0 1.5rem;
    color: rgba(255, 255, 255, 0.8);
    font-size: 1rem;
    line-height: 1.7;
}

.faq-item.open .faq-answer {
    max-height: 1000px;
    padding: 0 1.5rem 1.5rem;
}

.faq-answer p {
    margin-bottom: 0.8rem;
}

.faq-answer ul {
    padding-left: 1.5rem;
    margin-top: 0.8rem;
}

.faq-answer li {
    margin-bottom: 0.5rem;
}

.no-results {
    text-align: center;
    padding: 3rem 0;
    color: rgba(255, 255, 255, 0.7);
}

.footer-wrapper {
    margin-top: 4rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_keeps_every_category() {
        let visible = visible_categories("");
        assert_eq!(visible.len(), CATEGORIES.len());
        let total: usize = visible.iter().map(|(_, entries)| entries.len()).sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn question_text_matches_case_insensitively() {
        let visible = visible_categories("TRIAL");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.title, "Subscription & Billing");
        assert_eq!(visible[0].1.len(), 1);
        assert_eq!(visible[0].1[0].question, "How does the free trial work?");
    }

    #[test]
    fn plain_answer_bodies_are_searchable() {
        // "ethernet" appears only inside the buffering answer, never in a
        // question.
        let visible = visible_categories("ethernet");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.title, "Technical Support");
        assert_eq!(
            visible[0].1[0].question,
            "Why am I experiencing buffering or poor video quality?"
        );
    }

    #[test]
    fn rich_answers_match_on_question_only() {
        // The tier prices live in markup, so they are not searchable.
        assert!(visible_categories("8.99").is_empty());
        // The same entry is still reachable through its question.
        let visible = visible_categories("subscription plans");
        assert!(visible
            .iter()
            .flat_map(|(_, entries)| entries.iter())
            .any(|entry| entry.question == "What subscription plans does Maska.TV offer?"));
    }

    #[test]
    fn categories_without_hits_drop_out() {
        let visible = visible_categories("buffering");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.title, "Technical Support");
    }
}
