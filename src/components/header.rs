use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// One entry in the header nav. `target: None` renders a placeholder for a
/// section the site does not ship yet.
#[derive(Clone, PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: Option<Route>,
}

fn default_links() -> Vec<NavEntry> {
    vec![
        NavEntry { label: "Home", target: Some(Route::Home) },
        NavEntry { label: "Animes", target: Some(Route::Watch) },
        NavEntry { label: "Movies", target: None },
        NavEntry { label: "Latest", target: None },
        NavEntry { label: "My List", target: None },
    ]
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    /// Route of the page rendering the header. Active-link styling comes
    /// from this, never from reading the location off the window.
    pub current: Route,
    #[prop_or(true)]
    pub show_nav_links: bool,
    #[prop_or_default]
    pub fixed: bool,
    #[prop_or_default]
    pub links: Option<Vec<NavEntry>>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let links = props.links.clone().unwrap_or_else(default_links);

    let on_sign_in = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("Sign-in functionality would go here!");
        }
    });

    html! {
        <header class={classes!("site-header", props.fixed.then(|| "fixed"))}>
            <style>{HEADER_STYLE}</style>
            <div class="header-top">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <span class="logo-maska">{"MASKA"}</span>
                    <span class="logo-tv">{".TV"}</span>
                </Link<Route>>

                <button class="sign-in-button" onclick={on_sign_in}>
                    {"Sign In"}
                </button>
            </div>

            if props.show_nav_links {
                <nav class="header-links">
                    { for links.iter().map(|link| {
                        let active = link.target.as_ref() == Some(&props.current);
                        match &link.target {
                            Some(route) => html! {
                                <Link<Route>
                                    to={route.clone()}
                                    classes={classes!("nav-link", active.then(|| "active"))}
                                >
                                    {link.label}
                                </Link<Route>>
                            },
                            None => html! {
                                <a class="nav-link">{link.label}</a>
                            },
                        }
                    }) }
                </nav>
            }
        </header>
    }
}

const HEADER_STYLE: &str = r#"
.site-header {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    padding: 2rem 5%;
    display: flex;
    flex-direction: column;
    align-items: center;
    z-index: 30;
    background: transparent;
    transition: all 0.3s ease;
    box-sizing: border-box;
    font-family: 'Montserrat', 'Inter', sans-serif;
}

.site-header.fixed {
    position: fixed;
    backdrop-filter: blur(10px);
    background: rgba(0, 0, 0, 0.4);
}

.header-top {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1rem;
}

.header-logo {
    display: flex;
    align-items: center;
    gap: 0.1rem;
    cursor: pointer;
    text-decoration: none;
}

.logo-maska {
    font-size: 1.8rem;
    font-weight: 800;
    letter-spacing: -0.02em;
    background: linear-gradient(to right, #FFFFFF 0%, #E8E8E8 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    filter: drop-shadow(0 0 15px rgba(255, 255, 255, 0.15));
}

.logo-tv {
    font-size: 1.8rem;
    font-weight: 800;
    background: linear-gradient(45deg, #FF4D6D, #FF1048);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    filter: drop-shadow(0 0 15px rgba(255, 20, 72, 0.4));
}

.sign-in-button {
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.3);
    color: white;
    padding: 0.5rem 1.5rem;
    border-radius: 50px;
    font-size: 1.1rem;
    font-weight: 700;
    cursor: pointer;
    backdrop-filter: blur(5px);
    transition: all 0.3s ease;
}

.sign-in-button:hover {
    border-color: white;
    background: rgba(255, 255, 255, 0.1);
}

.header-links {
    display: flex;
    gap: 2.5rem;
    justify-content: center;
    padding: 0.5rem 0;
}

.header-links .nav-link {
    color: rgba(255, 255, 255, 0.7);
    text-decoration: none;
    font-size: 1.1rem;
    font-weight: 500;
    letter-spacing: 0.5px;
    text-transform: uppercase;
    cursor: pointer;
    transition: all 0.3s ease;
}

.header-links .nav-link:hover {
    color: white;
    text-shadow: 0 0 10px rgba(255, 255, 255, 0.5);
}

.header-links .nav-link.active {
    color: #FF1048;
    font-weight: 700;
}

.header-links .nav-link.active:hover {
    color: #FF4D6D;
}
"#;
