use yew::prelude::*;

use crate::components::footer::SiteFooter;
use crate::components::header::SiteHeader;
use crate::Route;

#[function_component(TestPage)]
pub fn test_page() -> Html {
    html! {
        <div class="test-page">
            <style>{TEST_STYLE}</style>
            <SiteHeader current={Route::Test} />
            <div class="content-wrapper">
                <h1>{"Test Page"}</h1>
                <p>{"This is a simple test page to verify routing works."}</p>
            </div>
            <SiteFooter />
        </div>
    }
}

const TEST_STYLE: &str = r#"
.test-page {
    width: 100%;
    min-height: 100vh;
    background: #000000;
    color: white;
    position: relative;
    font-family: 'Montserrat', 'Inter', sans-serif;
    overflow-x: hidden;
}

.test-page .content-wrapper {
    position: relative;
    z-index: 10;
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 120px 2rem 4rem;
    min-height: calc(100vh - 200px);
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}
"#;
