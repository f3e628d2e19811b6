use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod splash {
    pub mod audio;
    pub mod screen;
    pub mod sequence;
    pub mod tilt;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod parallax;
    pub mod pointer;
}
mod pages {
    pub mod about;
    pub mod browse;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod learn_more;
    pub mod not_found;
    pub mod privacy;
    pub mod terms;
    pub mod test;
}

use pages::{
    about::About,
    browse::Browse,
    contact::Contact,
    faq::Faq,
    home::Home,
    learn_more::LearnMore,
    not_found::NotFound,
    privacy::Privacy,
    terms::Terms,
    test::TestPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/learn-more")]
    LearnMore,
    #[at("/about-us")]
    About,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/faq")]
    Faq,
    #[at("/contact-us")]
    Contact,
    #[at("/watch")]
    Watch,
    #[at("/test")]
    Test,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, intro_done: bool, on_intro_finish: Callback<()>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {intro_done} {on_intro_finish} /> }
        }
        Route::LearnMore => {
            info!("Rendering Learn More page");
            html! { <LearnMore /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <Privacy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <Terms /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Watch => {
            info!("Rendering Browse page");
            html! { <Browse /> }
        }
        Route::Test => {
            info!("Rendering Test page");
            html! { <TestPage /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // The intro plays once per app instance; every later visit to "/" goes
    // straight to the landing content.
    let intro_done = use_state(|| false);

    let on_intro_finish = {
        let intro_done = intro_done.clone();
        Callback::from(move |_| intro_done.set(true))
    };

    let render = {
        let done = *intro_done;
        move |route: Route| switch(route, done, on_intro_finish.clone())
    };

    html! {
        <BrowserRouter>
            <Global css={BASE_STYLE} />
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

const BASE_STYLE: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html, body {
    background: #000000;
    color: white;
    font-family: 'Montserrat', 'Inter', sans-serif;
}

body {
    overflow-x: hidden;
}

button {
    font-family: inherit;
}

a {
    color: inherit;
    text-decoration: none;
}
"#;

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
