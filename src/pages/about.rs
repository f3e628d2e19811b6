use yew::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::components::parallax::{animate_scroll_layers, drifting_particles};
use crate::Route;

struct StoryBlock {
    title: &'static str,
    image: &'static str,
    paragraphs: [&'static str; 2],
}

const STORY: [StoryBlock; 3] = [
    StoryBlock {
        title: "Our Beginning",
        image: "https://images.unsplash.com/photo-1601944179066-29786cb9d32a?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80",
        paragraphs: [
            "Founded in 2022, Maska.FR began with a revolutionary vision: to create an entertainment platform that would transcend traditional streaming services. Our founders, a team of industry veterans and tech innovators, recognized the limitations of existing platforms and set out to build something extraordinary.",
            "Unlike conventional streaming services, Maska.FR was designed from the ground up to deliver content in ways never before possible, combining cinematic quality with cutting-edge technology to create truly immersive viewing experiences.",
        ],
    },
    StoryBlock {
        title: "Innovation at Our Core",
        image: "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?ixlib=rb-1.2.1&auto=format&fit=crop&w=1267&q=80",
        paragraphs: [
            "The first breakthrough came with our proprietary 8K streaming technology, developed through three years of intensive research. This innovation allowed us to deliver crystal-clear visuals with zero buffering, a technological achievement that quickly distinguished Maska.FR in the competitive streaming landscape.",
            "Our engineering team, comprised of former leaders from Silicon Valley's tech giants, continues to push the boundaries of what's possible in digital entertainment, developing new ways to enhance the viewing experience.",
        ],
    },
    StoryBlock {
        title: "Global Impact",
        image: "https://images.unsplash.com/photo-1485846234645-a62644f84728?ixlib=rb-1.2.1&auto=format&fit=crop&w=1489&q=80",
        paragraphs: [
            "Today, Maska.FR serves millions of subscribers across 190 countries, with a library of over 10,000 exclusive titles. Our original productions have garnered critical acclaim, including 28 Emmy Awards and 12 Academy Award nominations.",
            "Beyond entertainment, we're committed to sustainability and social responsibility. Our carbon-neutral streaming infrastructure and commitment to diverse storytelling reflect our belief that great entertainment can also be a force for good.",
        ],
    },
];

struct TeamMember {
    name: &'static str,
    title: &'static str,
    bio: &'static str,
    photo: &'static str,
}

const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Alexandra Chen",
        title: "Founder & CEO",
        bio: "Former Netflix executive with a passion for storytelling and immersive experiences. Visionary behind Maska.FR's unique approach to content curation.",
        photo: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?ixlib=rb-1.2.1&auto=format&fit=crop&w=634&q=80",
    },
    TeamMember {
        name: "David Rodriguez",
        title: "Chief Technology Officer",
        bio: "Tech innovator with 15+ years in streaming platforms. Led development of Maska.FR's groundbreaking 8K streaming technology.",
        photo: "https://images.unsplash.com/photo-1566492031773-4f4e44671857?ixlib=rb-1.2.1&auto=format&fit=crop&w=634&q=80",
    },
    TeamMember {
        name: "Sophia Thompson",
        title: "Chief Content Officer",
        bio: "Award-winning producer who oversees Maska.FR's exclusive content development and acquisition strategy across global markets.",
        photo: "https://images.unsplash.com/photo-1580489944761-15a19d654956?ixlib=rb-1.2.1&auto=format&fit=crop&w=634&q=80",
    },
    TeamMember {
        name: "Michael Kim",
        title: "Head of User Experience",
        bio: "UX visionary responsible for Maska.FR's intuitive, accessible, and groundbreaking interface across all platforms and devices.",
        photo: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-1.2.1&auto=format&fit=crop&w=634&q=80",
    },
];

struct CompanyValue {
    title: &'static str,
    description: &'static str,
    icon: fn() -> Html,
}

const VALUES: [CompanyValue; 3] = [
    CompanyValue {
        title: "Innovation",
        description: "We push boundaries to create revolutionary entertainment experiences, always staying ahead of industry trends.",
        icon: || html! {
            <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M12 2L4 8L12 14L20 8L12 2Z" fill="rgba(255,77,109,0.15)" stroke="currentColor" />
                <path d="M4 14L12 20L20 14" stroke="currentColor" />
            </svg>
        },
    },
    CompanyValue {
        title: "Excellence",
        description: "We are committed to delivering the highest quality in content, technology, and customer experience.",
        icon: || html! {
            <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M12 15L8.5 11.5L9.91 10.09L12 12.17L16.18 8L17.59 9.41L12 15Z" fill="rgba(255,77,109,0.15)" />
                <circle cx="12" cy="12" r="9" stroke="currentColor" />
            </svg>
        },
    },
    CompanyValue {
        title: "Diversity",
        description: "We celebrate diverse voices and perspectives, ensuring our content resonates with global audiences.",
        icon: || html! {
            <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M12 2C6.48 2 2 6.48 2 12C2 17.52 6.48 22 12 22C17.52 22 22 17.52 22 12C22 6.48 17.52 2 12 2Z" fill="rgba(255,77,109,0.15)" stroke="currentColor" />
                <path d="M12 6V12L16 14" stroke="currentColor" />
            </svg>
        },
    },
];

#[function_component(About)]
pub fn about() -> Html {
    let particles = use_state(|| drifting_particles(20));

    use_effect_with_deps(|_| animate_scroll_layers(), ());

    html! {
        <div class="about">
            <style>{ABOUT_STYLE}</style>

            <div class="background-particles">
                {(*particles).clone()}
            </div>
            <div class="background-glow"></div>
            <div class="floating-element-1"></div>
            <div class="floating-element-2"></div>
            <div class="floating-element-3"></div>

            <SiteHeader current={Route::About} fixed=true />

            <div class="content-wrapper">
                <section class="hero-section">
                    <h1 class="hero-title">{"Our Story"}</h1>
                    <p class="hero-subtitle">
                        {"Discover how Maska.FR is "}
                        <span class="highlight">{"revolutionizing entertainment"}</span>
                        {" through cutting-edge technology, visionary leadership, and a passion for extraordinary content."}
                    </p>
                </section>

                <section class="about-section">
                    <h2 class="section-title">{"The Maska.FR Journey"}</h2>
                    <div class="section-content">
                        {
                            STORY.iter().map(|block| html! {
                                <div class="story-block">
                                    <div
                                        class="story-image"
                                        style={format!("background-image: url({});", block.image)}
                                    ></div>
                                    <div class="story-text">
                                        <h3 class="story-title">{block.title}</h3>
                                        { block.paragraphs.iter().map(|p| html! {
                                            <p class="story-paragraph">{*p}</p>
                                        }).collect::<Html>() }
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="about-section">
                    <h2 class="section-title">{"Visionary Leadership"}</h2>
                    <div class="team-grid">
                        {
                            TEAM.iter().map(|member| html! {
                                <div class="team-member">
                                    <div
                                        class="team-member-photo"
                                        style={format!("background-image: url({});", member.photo)}
                                    ></div>
                                    <h4 class="team-member-name">{member.name}</h4>
                                    <p class="team-member-title">{member.title}</p>
                                    <p class="team-member-bio">{member.bio}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="about-section">
                    <h2 class="section-title">{"Our Core Values"}</h2>
                    <div class="values-grid">
                        {
                            VALUES.iter().map(|value| html! {
                                <div class="value-card">
                                    <div class="value-icon">{(value.icon)()}</div>
                                    <h3 class="value-title">{value.title}</h3>
                                    <p class="value-description">{value.description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </section>
            </div>

            <footer class="about-footer">
                <div class="footer-logo">
                    <div class="footer-logo-maska">{"MASKA"}</div>
                    <span class="footer-logo-fr">{".FR"}</span>
                </div>
                <SiteFooter />
            </footer>
        </div>
    }
}

const ABOUT_STYLE: &str = r#"
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

.about {
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
    font-size: clamp(3rem, 8vw, 7rem);
    font-weight: 900;
    text-align: center;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    margin-bottom: 2rem;
    line-height: 1.1;
    filter: drop-shadow(0 0 20px rgba(255, 255, 255, 0.4));
}

.hero-subtitle {
    font-size: clamp(1.2rem, 2.5vw, 1.6rem);
    text-align: center;
    max-width: 800px;
    line-height: 1.6;
    color: rgba(255, 255, 255, 0.8);
    margin-bottom: 3rem;
    padding: 0 1rem;
    font-weight: 300;
}

.highlight {
    color: #FF4D6D;
    font-weight: 500;
}

.about-section {
    padding: 8rem 2rem;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    position: relative;
    scroll-snap-align: start;
}

.section-title {
    font-size: clamp(2rem, 5vw, 3.5rem);
    font-weight: 800;
    text-align: center;
    margin-bottom: 3rem;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    filter: drop-shadow(0 0 15px rgba(255, 20, 72, 0.2));
}

.section-content {
    max-width: 1200px;
    width: 100%;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 4rem;
}

.story-block {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2rem;
    position: relative;
}

@media (min-width: 992px) {
    .story-block {
        flex-direction: row;
        align-items: center;
    }

    .story-block:nth-of-type(even) {
        flex-direction: row-reverse;
    }
}

.story-image {
    width: 100%;
    max-width: 500px;
    height: 300px;
    border-radius: 20px;
    overflow: hidden;
    position: relative;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
    background-size: cover;
    background-position: center;
    filter: brightness(0.9) contrast(1.1);
    transition: transform 0.5s ease;
}

.story-image:hover {
    transform: scale(1.03);
}

@media (min-width: 992px) {
    .story-image {
        width: 45%;
    }
}

.story-text {
    width: 100%;
}

@media (min-width: 992px) {
    .story-text {
        width: 50%;
    }
}

.story-title {
    font-size: 1.8rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.story-paragraph {
    font-size: 1.1rem;
    line-height: 1.6;
    color: rgba(255, 255, 255, 0.8);
    margin-bottom: 1.5rem;
}

.team-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
    gap: 3rem;
    width: 100%;
    max-width: 1200px;
}

.team-member {
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
}

.team-member-photo {
    width: 180px;
    height: 180px;
    border-radius: 50%;
    overflow: hidden;
    margin-bottom: 1.5rem;
    position: relative;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
    background-size: cover;
    background-position: center;
    filter: brightness(0.9) contrast(1.1);
    transition: transform 0.5s ease;
}

.team-member-photo:hover {
    transform: scale(1.05);
}

.team-member-name {
    font-size: 1.4rem;
    font-weight: 700;
    margin-bottom: 0.5rem;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}

.team-member-title {
    font-size: 1rem;
    color: #FF4D6D;
    margin-bottom: 1rem;
    font-weight: 500;
}

.team-member-bio {
    font-size: 0.95rem;
    line-height: 1.6;
    color: rgba(255, 255, 255, 0.8);
}

.values-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
    gap: 3rem;
    width: 100%;
    max-width: 1200px;
}

.value-card {
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

.value-card:hover {
    transform: translateY(-10px);
    border-color: rgba(255, 77, 109, 0.3);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3), 0 0 30px rgba(255, 77, 109, 0.15);
}

.value-icon {
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

.value-icon svg {
    width: 100%;
    height: 100%;
    color: white;
}

.value-icon svg path,
.value-icon svg circle {
    stroke-width: 1.5;
    stroke-linecap: round;
    stroke-linejoin: round;
}

.value-title {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
    color: white;
}

.value-description {
    font-size: 1rem;
    line-height: 1.6;
    color: rgba(255, 255, 255, 0.7);
}

.about-footer {
    padding: 4rem 2rem;
    min-height: 50vh;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(10px);
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    position: relative;
    z-index: 10;
    scroll-snap-align: start;
    scroll-snap-stop: always;
}

.footer-logo {
    display: flex;
    align-items: center;
    margin-bottom: 2rem;
}

.footer-logo-maska {
    font-size: 1.5rem;
    font-weight: 800;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    letter-spacing: -0.02em;
    filter: drop-shadow(0 0 15px rgba(255, 255, 255, 0.15));
}

.footer-logo-fr {
    font-size: 1.5rem;
    font-weight: 800;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    letter-spacing: -0.02em;
    filter: drop-shadow(0 0 15px rgba(255, 20, 72, 0.4));
}
"#;
