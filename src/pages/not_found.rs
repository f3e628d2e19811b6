use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::pointer::{forward_pointer_moves, FrameBroadcaster};
use crate::config;
use crate::Route;

// The 404 visuals live in the embedded frame; this page only overlays the
// way back home.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let frame_ref = use_node_ref();
    let navigator = use_navigator().unwrap();

    {
        let frame_ref = frame_ref.clone();
        use_effect_with_deps(
            move |_| forward_pointer_moves(FrameBroadcaster::new(frame_ref)),
            (),
        );
    }

    let on_home = Callback::from(move |_: MouseEvent| navigator.push(&Route::Home));

    html! {
        <div class="not-found-page">
            <style>{NOT_FOUND_STYLE}</style>
            <div class="background-container">
                <iframe
                    ref={frame_ref}
                    src={config::not_found_background_url()}
                    title="404 Background"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                />
            </div>
            <div class="content-container">
                <button class="glow-button" onclick={on_home}>{"Go Back"}</button>
            </div>
        </div>
    }
}

const NOT_FOUND_STYLE: &str = r#"
.not-found-page {
    width: 100vw;
    height: 100vh;
    background: #000000;
    position: relative;
    overflow: hidden;
    font-family: 'Montserrat', 'Inter', sans-serif;
}

.background-container {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    z-index: 5;
    overflow: hidden;
}

.background-container iframe {
    width: 100%;
    height: 100%;
    border: none;
    pointer-events: auto;
}

.content-container {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    z-index: 20;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 2rem;
    color: white;
    pointer-events: none;
}

.glow-button {
    --glow-color: rgb(217, 176, 255);
    --glow-spread-color: rgb(81 55 107 / 78%);
    --enhanced-glow-color: rgb(231, 206, 255);
    --btn-color: rgb(100, 61, 136);
    border: .25em solid var(--glow-color);
    padding: 1em 3em;
    color: var(--glow-color);
    font-size: 15px;
    font-weight: bold;
    background-color: var(--btn-color);
    border-radius: 1em;
    outline: none;
    box-shadow: 0 0 1em .25em var(--glow-color),
           0 0 4em 1em var(--glow-spread-color),
           inset 0 0 .75em .25em var(--glow-color);
    text-shadow: 0 0 .5em var(--glow-color);
    position: relative;
    z-index: 30;
    margin-top: 25rem;
    transition: all 0.3s;
    cursor: pointer;
    pointer-events: auto;
}

.glow-button::after {
    pointer-events: none;
    content: "";
    position: absolute;
    top: 120%;
    left: 0;
    height: 100%;
    width: 100%;
    background-color: var(--glow-spread-color);
    filter: blur(2em);
    opacity: .7;
    transform: perspective(1.5em) rotateX(35deg) scale(1, .6);
}

.glow-button:hover {
    color: var(--btn-color);
    background-color: rgb(217, 176, 255);
    box-shadow: 0 0 1em .25em var(--glow-color),
           0 0 4em 2em var(--glow-spread-color),
           inset 0 0 .75em .25em var(--glow-color);
}

.glow-button:active {
    box-shadow: 0 0 0.6em .25em var(--glow-color),
           0 0 2.5em 2em var(--glow-spread-color),
           inset 0 0 .5em .25em var(--glow-color);
}
"#;
