use yew::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::Route;

struct FeaturedShow {
    title: &'static str,
    image: &'static str,
    tag: &'static str,
    kind: &'static str,
    duration: &'static str,
    description: &'static str,
}

const FEATURED: [FeaturedShow; 3] = [
    FeaturedShow {
        title: "Summer Pockets",
        image: "https://images.pexels.com/photos/12807840/pexels-photo-12807840.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tag: "Summer Pockets",
        kind: "TV",
        duration: "24 mins",
        description: "To help manage his recently deceased grandmother's effects, the protagonist Takahara Hairi travels to Torishirojima during his summer vacation. As he gets off the ferry boat, he spots a lone girl standing on the pier. A girl who simply gazes into the distance as her long hair flutters in the wind. He looks at the girl in utter bewilderment, but before he realizes it, she can no...",
    },
    FeaturedShow {
        title: "Demon Slayer",
        image: "https://images.pexels.com/photos/9431152/pexels-photo-9431152.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tag: "Demon Slayer",
        kind: "TV",
        duration: "25 mins",
        description: "A family is attacked by demons and only two members survive - Tanjiro and his sister Nezuko, who is turning into a demon slowly. Tanjiro sets out to become a demon slayer to avenge his family and cure his sister.",
    },
    FeaturedShow {
        title: "Attack on Titan",
        image: "https://images.pexels.com/photos/10795018/pexels-photo-10795018.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tag: "Attack on Titan",
        kind: "TV",
        duration: "24 mins",
        description: "Several hundred years ago, humans were nearly exterminated by giants. Giants are typically several stories tall, seem to have no intelligence, and who devour human beings. A small percentage of humanity survived by building a city protected by extremely high walls - even taller than the biggest giants.",
    },
];

struct WatchlistEntry {
    title: &'static str,
    image: &'static str,
    year: &'static str,
    current_episode: u32,
}

const CONTINUE_WATCHING: [WatchlistEntry; 3] = [
    WatchlistEntry {
        title: "Himitsu no Ai Pi",
        image: "https://images.pexels.com/photos/9430994/pexels-photo-9430994.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        year: "2023",
        current_episode: 3,
    },
    WatchlistEntry {
        title: "Bogus Skill <<Fruitmaster>> ~About that time I became the best farmer in the world~",
        image: "https://images.pexels.com/photos/8107806/pexels-photo-8107806.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        year: "2023",
        current_episode: 2,
    },
    WatchlistEntry {
        title: "My Hero Academia: Vigilantes",
        image: "https://images.pexels.com/photos/9428920/pexels-photo-9428920.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        year: "2023",
        current_episode: 3,
    },
];

struct PopularShow {
    title: &'static str,
    image: &'static str,
    rating: &'static str,
    year: &'static str,
    episodes: u32,
}

const POPULAR: [PopularShow; 6] = [
    PopularShow {
        title: "Attack on Titan",
        image: "https://images.pexels.com/photos/10795018/pexels-photo-10795018.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        rating: "9.5",
        year: "2013",
        episodes: 87,
    },
    PopularShow {
        title: "Demon Slayer",
        image: "https://images.pexels.com/photos/9431152/pexels-photo-9431152.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        rating: "9.2",
        year: "2019",
        episodes: 26,
    },
    PopularShow {
        title: "Tokyo Revengers",
        image: "https://images.pexels.com/photos/14016889/pexels-photo-14016889.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        rating: "8.5",
        year: "2021",
        episodes: 24,
    },
    PopularShow {
        title: "Jujutsu Kaisen",
        image: "https://images.pexels.com/photos/9431183/pexels-photo-9431183.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        rating: "9.0",
        year: "2020",
        episodes: 48,
    },
    PopularShow {
        title: "My Hero Academia",
        image: "https://images.pexels.com/photos/9430985/pexels-photo-9430985.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        rating: "8.9",
        year: "2016",
        episodes: 113,
    },
    PopularShow {
        title: "Chainsaw Man",
        image: "https://images.pexels.com/photos/12324060/pexels-photo-12324060.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        rating: "8.7",
        year: "2022",
        episodes: 12,
    },
];

const TOP_AIRING: [PopularShow; 1] = [PopularShow {
    title: "My Hero Academia: Vigilantes",
    image: "https://images.pexels.com/photos/9428920/pexels-photo-9428920.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    rating: "9.0",
    year: "2023",
    episodes: 13,
}];

const GENRES: [&str; 14] = [
    "Comedy",
    "Drama",
    "Ecchi",
    "Fantasy",
    "Horror",
    "Mahou Shoujo",
    "Mecha",
    "Music",
    "Mystery",
    "Psychological",
    "Romance",
    "Sci-Fi",
    "Slice of Life",
    "Sports",
];

const TABS: [&str; 3] = ["NEWEST", "POPULAR", "TOP RATED"];

// Hero carousel stepping, wrapping at both ends.
fn next_index(current: usize, len: usize) -> usize {
    if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

fn prev_index(current: usize, len: usize) -> usize {
    if current == 0 {
        len.saturating_sub(1)
    } else {
        current - 1
    }
}

#[function_component(Browse)]
pub fn browse() -> Html {
    let hero_index = use_state(|| 0usize);
    let active_genre = use_state(|| None::<&'static str>);
    let active_tab = use_state(|| "NEWEST");
    let page = use_state(|| 1u32);

    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_prev = {
        let hero_index = hero_index.clone();
        Callback::from(move |_: MouseEvent| hero_index.set(prev_index(*hero_index, FEATURED.len())))
    };
    let on_next = {
        let hero_index = hero_index.clone();
        Callback::from(move |_: MouseEvent| hero_index.set(next_index(*hero_index, FEATURED.len())))
    };

    let hero = &FEATURED[*hero_index];
    let hero_style = format!(
        "background: linear-gradient(to right, rgba(0, 0, 0, 0.8) 30%, rgba(0, 0, 0, 0.4) 70%, rgba(0, 0, 0, 0.2)), url({}) center/cover no-repeat;",
        hero.image
    );

    html! {
        <div class="browse-page">
            <style>{BROWSE_STYLE}</style>
            <SiteHeader current={Route::Watch} fixed=true />
            <div class="content-wrapper">
                <div class="hero-section" style={hero_style}>
                    <button class="nav-arrow prev-arrow" onclick={on_prev}>{"❮"}</button>
                    <button class="nav-arrow next-arrow" onclick={on_next}>{"❯"}</button>
                    <div class="meta-info">
                        <span class="meta-kind">{ hero.kind }</span>
                        <span>
                            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                <path d="M12 22C17.5228 22 22 17.5228 22 12C22 6.47715 17.5228 2 12 2C6.47715 2 2 6.47715 2 12C2 17.5228 6.47715 22 12 22Z" stroke="currentColor"/>
                                <path d="M12 6V12L16 14" stroke="currentColor"/>
                            </svg>
                            { hero.duration }
                        </span>
                    </div>
                    <div class="hero-tag">{ hero.tag }</div>
                    <div class="hero-content">
                        <h1 class="hero-title">{ hero.title }</h1>
                        <p class="hero-description">{ hero.description }</p>
                        <div class="buttons-container">
                            <button class="action-button outline">
                                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                    <path d="M12 22C17.5228 22 22 17.5228 22 12C22 6.47715 17.5228 2 12 2C6.47715 2 2 6.47715 2 12C2 17.5228 6.47715 22 12 22Z" stroke="currentColor"/>
                                    <path d="M8 12H16M16 12L12 8M16 12L12 16" stroke="currentColor"/>
                                </svg>
                                {"DETAILS"}
                            </button>
                            <button class="action-button">
                                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                    <path d="M5 3L19 12L5 21V3Z" fill="currentColor"/>
                                </svg>
                                {"WATCH NOW"}
                            </button>
                        </div>
                    </div>
                </div>

                <div class="genre-nav">
                    { GENRES.iter().map(|genre| {
                        let onclick = {
                            let active_genre = active_genre.clone();
                            let genre = *genre;
                            Callback::from(move |_: MouseEvent| active_genre.set(Some(genre)))
                        };
                        let class = classes!("genre-link", (*active_genre == Some(*genre)).then(|| "active"));
                        html! {
                            <button key={*genre} {class} {onclick}>{ *genre }</button>
                        }
                    }).collect::<Html>() }
                </div>

                <div class="section-header">
                    <h2 class="section-title">{"Your Watchlist"}</h2>
                    <div class="section-subtitle">{"Continue Watching"}</div>
                </div>
                <div class="content-row">
                    <div class="row-container">
                        { CONTINUE_WATCHING.iter().map(|entry| html! {
                            <div key={entry.title} class="show-card">
                                <div class="episode-indicator">{ format!("EP {}", entry.current_episode) }</div>
                                <div class="show-image" style={format!("background-image: url({});", entry.image)}></div>
                                <div class="show-overlay">
                                    <h3 class="show-title">{ entry.title }</h3>
                                    <div class="show-info">
                                        <span>{ entry.year }</span>
                                        <span>{"TV"}</span>
                                    </div>
                                </div>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>

                <div class="tabs-container">
                    { TABS.iter().map(|tab| {
                        let onclick = {
                            let active_tab = active_tab.clone();
                            let tab = *tab;
                            Callback::from(move |_: MouseEvent| active_tab.set(tab))
                        };
                        let class = classes!("tab", (*active_tab == *tab).then(|| "active"));
                        html! {
                            <button key={*tab} {class} {onclick}>{ *tab }</button>
                        }
                    }).collect::<Html>() }
                </div>

                <div class="show-grid">
                    { POPULAR.iter().map(|show| html! {
                        <div key={show.title} class="grid-card">
                            <div class="grid-image" style={format!("background-image: url({});", show.image)}></div>
                            <div class="show-overlay">
                                <h3 class="show-title">{ show.title }</h3>
                                <div class="show-info">
                                    <span>{ format!("⭐ {}", show.rating) }</span>
                                    <span>{ show.year }</span>
                                </div>
                            </div>
                        </div>
                    }).collect::<Html>() }
                </div>

                <div class="pagination">
                    <button class="pagination-button">{"❮"}</button>
                    { (1..=3u32).map(|n| {
                        let onclick = {
                            let page = page.clone();
                            Callback::from(move |_: MouseEvent| page.set(n))
                        };
                        let class = classes!("pagination-button", (*page == n).then(|| "active"));
                        html! {
                            <button key={n.to_string()} {class} {onclick}>{ n }</button>
                        }
                    }).collect::<Html>() }
                    <button class="pagination-button">{"❯"}</button>
                </div>

                <div class="top-airing-section">
                    <div class="top-airing-header">
                        <h3 class="top-airing-title">
                            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                <path d="M12 2L15.09 8.26L22 9.27L17 14.14L18.18 21.02L12 17.77L5.82 21.02L7 14.14L2 9.27L8.91 8.26L12 2Z" fill="#38b6ff"/>
                            </svg>
                            {"TOP AIRING"}
                        </h3>
                    </div>
                    { TOP_AIRING.iter().map(|show| html! {
                        <div key={show.title} class="top-airing-item">
                            <div class="top-airing-thumbnail" style={format!("background-image: url({});", show.image)}></div>
                            <div class="top-airing-info">
                                <h4 class="top-airing-show-title">{ show.title }</h4>
                                <div class="top-airing-meta">
                                    <span>{"TV"}</span>
                                    <span>{ show.year }</span>
                                    <span>{ format!("{} EPS", show.episodes) }</span>
                                </div>
                            </div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
            <SiteFooter />
        </div>
    }
}

const BROWSE_STYLE: &str = r#"
.browse-page {
    width: 100%;
    min-height: 100vh;
    background: #0a0a0a;
    color: white;
    position: relative;
    font-family: 'Montserrat', 'Inter', sans-serif;
    overflow-x: hidden;
}

.content-wrapper {
    position: relative;
    z-index: 10;
    width: 100%;
    margin: 0 auto;
    padding: 70px 0 4rem;
    min-height: calc(100vh - 200px);
}

.nav-arrow {
    width: 40px;
    height: 40px;
    border-radius: 50%;
    background: rgba(0, 0, 0, 0.7);
    border: none;
    color: white;
    display: flex;
    align-items: center;
    justify-content: center;
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    z-index: 30;
    cursor: pointer;
    font-size: 1rem;
}

.nav-arrow:hover {
    background: rgba(0, 0, 0, 0.9);
}

.next-arrow {
    right: 10px;
}

.prev-arrow {
    left: 10px;
}

.hero-section {
    width: 100%;
    height: 80vh;
    position: relative;
    margin-bottom: 2rem;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    padding: 0 5% 5%;
    transition: background 0.5s ease;
}

.meta-info {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}

.meta-info span {
    display: flex;
    align-items: center;
    font-size: 0.9rem;
    color: rgba(255, 255, 255, 0.8);
}

.meta-info svg {
    margin-right: 5px;
}

.meta-info svg path {
    stroke-width: 2;
    stroke-linecap: round;
}

.meta-kind {
    text-transform: uppercase;
}

.hero-tag {
    display: inline-block;
    align-self: flex-start;
    padding: 0.3rem 0.8rem;
    border: 1px solid rgba(255, 255, 255, 0.3);
    border-radius: 4px;
    font-size: 0.8rem;
    margin-bottom: 1.5rem;
}

.hero-content {
    max-width: 650px;
    margin-bottom: 2rem;
}

.hero-title {
    font-size: 3.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
    color: #38b6ff;
}

.hero-description {
    font-size: 1rem;
    line-height: 1.6;
    color: rgba(255, 255, 255, 0.9);
    margin-bottom: 2rem;
    max-width: 85%;
}

.buttons-container {
    display: flex;
    gap: 1rem;
}

.action-button {
    padding: 0.6rem 2rem;
    font-size: 0.9rem;
    background: #38b6ff;
    border: none;
    border-radius: 50px;
    color: white;
    cursor: pointer;
    font-weight: 600;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.action-button:hover {
    background: #2a9cd9;
}

.action-button svg path {
    stroke-width: 2;
    stroke-linecap: round;
    stroke-linejoin: round;
}

.action-button.outline {
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.3);
}

.action-button.outline:hover {
    background: rgba(255, 255, 255, 0.1);
}

.genre-nav {
    display: flex;
    padding: 0 5%;
    gap: 1.5rem;
    overflow-x: auto;
    margin: 1rem 0 2rem;
    position: relative;
    scrollbar-width: none;
}

.genre-nav::-webkit-scrollbar {
    display: none;
}

.genre-link {
    padding: 0.5rem 1.2rem;
    background: transparent;
    border: none;
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.9rem;
    cursor: pointer;
    white-space: nowrap;
    font-weight: 400;
}

.genre-link:hover {
    color: white;
}

.genre-link.active {
    color: white;
    font-weight: 600;
}

.section-header {
    padding: 0 5%;
    margin: 2rem 0 1rem;
}

.section-title {
    font-size: 1.3rem;
    font-weight: 500;
    color: white;
    margin-bottom: 0.5rem;
}

.section-subtitle {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.9rem;
}

.content-row {
    position: relative;
    padding: 0 5%;
    margin-bottom: 2rem;
}

.row-container {
    display: flex;
    overflow-x: auto;
    scrollbar-width: none;
    padding: 0.5rem 0;
    gap: 1rem;
}

.row-container::-webkit-scrollbar {
    display: none;
}

.episode-indicator {
    position: absolute;
    top: 10px;
    left: 10px;
    background: rgba(0, 0, 0, 0.7);
    padding: 0.2rem 0.5rem;
    border-radius: 2px;
    font-size: 0.8rem;
    z-index: 10;
}

.show-card {
    position: relative;
    border-radius: 4px;
    overflow: hidden;
    transition: all 0.3s ease;
    cursor: pointer;
    flex-shrink: 0;
    width: 240px;
    height: 135px;
}

.show-card:hover {
    transform: scale(1.05);
    z-index: 10;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.8);
}

.show-image {
    width: 100%;
    height: 100%;
    background-size: cover;
    background-position: center;
    background-repeat: no-repeat;
    transition: all 0.3s ease;
}

.show-overlay {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    padding: 0.7rem;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), transparent);
}

.show-title {
    font-size: 0.9rem;
    font-weight: 500;
    margin-bottom: 0.3rem;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.show-info {
    display: flex;
    justify-content: space-between;
    font-size: 0.75rem;
    color: rgba(255, 255, 255, 0.7);
}

.tabs-container {
    display: flex;
    margin: 2rem 0 1rem 5%;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}

.tab {
    padding: 0.7rem 1.5rem;
    background: transparent;
    border: none;
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.8rem;
    cursor: pointer;
    font-weight: 600;
    margin-bottom: -1px;
}

.tab:hover {
    color: white;
}

.tab.active {
    color: white;
    border-bottom: 2px solid #38b6ff;
}

.show-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
    gap: 1.5rem;
    padding: 0 5%;
    margin-bottom: 2rem;
}

.grid-card {
    position: relative;
    border-radius: 4px;
    overflow: hidden;
    cursor: pointer;
    transition: all 0.3s ease;
}

.grid-card:hover {
    transform: translateY(-5px);
}

.grid-image {
    width: 100%;
    aspect-ratio: 16/9;
    background-size: cover;
    background-position: center;
    background-repeat: no-repeat;
}

.pagination {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin: 2rem 0;
}

.pagination-button {
    width: 30px;
    height: 30px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(255, 255, 255, 0.1);
    border: none;
    border-radius: 4px;
    color: white;
    cursor: pointer;
}

.pagination-button:hover {
    background: rgba(255, 255, 255, 0.2);
}

.pagination-button.active,
.pagination-button.active:hover {
    background: #38b6ff;
}

.top-airing-section {
    background: rgba(20, 20, 20, 0.5);
    border-radius: 4px;
    padding: 1rem;
    margin: 0 5% 2rem;
}

.top-airing-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1rem;
}

.top-airing-title {
    font-size: 1rem;
    font-weight: 600;
    display: flex;
    align-items: center;
}

.top-airing-title svg {
    margin-right: 0.5rem;
}

.top-airing-item {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 0.8rem 0;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}

.top-airing-item:last-child {
    border-bottom: none;
}

.top-airing-thumbnail {
    width: 50px;
    height: 50px;
    border-radius: 4px;
    background-size: cover;
    background-position: center;
    flex-shrink: 0;
}

.top-airing-info {
    flex: 1;
}

.top-airing-show-title {
    font-size: 0.9rem;
    font-weight: 500;
    margin-bottom: 0.2rem;
}

.top-airing-meta {
    display: flex;
    gap: 1rem;
    font-size: 0.7rem;
    color: rgba(255, 255, 255, 0.6);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_forward_at_the_end() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(1, 3), 2);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn carousel_wraps_backward_at_the_start() {
        assert_eq!(prev_index(2, 3), 1);
        assert_eq!(prev_index(1, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
    }

    #[test]
    fn single_entry_carousel_stays_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn full_cycle_returns_to_the_first_slide() {
        let len = FEATURED.len();
        let mut index = 0;
        for _ in 0..len {
            index = next_index(index, len);
        }
        assert_eq!(index, 0);
    }
}
