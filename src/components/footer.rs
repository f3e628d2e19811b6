use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const FOOTER_LINKS: [(&str, Route); 5] = [
    ("About Us", Route::About),
    ("FAQ", Route::Faq),
    ("Terms of Service", Route::Terms),
    ("Privacy Policy", Route::Privacy),
    ("Contact Us", Route::Contact),
];

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>{FOOTER_STYLE}</style>
            <div class="footer-links">
                { for FOOTER_LINKS.iter().map(|(label, route)| html! {
                    <Link<Route> to={route.clone()} classes="footer-link">
                        {*label}
                    </Link<Route>>
                }) }
            </div>
            <div>{format!("© {} Maska.FR. All rights reserved.", year)}</div>
        </footer>
    }
}

const FOOTER_STYLE: &str = r#"
.site-footer {
    padding: 3rem 2rem;
    text-align: center;
    color: rgba(255, 255, 255, 0.4);
    font-size: 0.9rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    margin-top: 4rem;
    width: 100%;
    box-sizing: border-box;
}

.footer-links {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 2rem;
    max-width: 800px;
    margin: 0 auto 2rem;
}

.footer-link {
    color: rgba(255, 255, 255, 0.6);
    text-decoration: none;
    font-size: 0.9rem;
    transition: all 0.3s ease;
}

.footer-link:hover {
    color: white;
}
"#;
