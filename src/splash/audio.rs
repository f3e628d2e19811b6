use gloo_console::log;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

use std::cell::Cell;
use std::rc::Rc;

/// A preloaded one-shot sound effect. Playback is gated on the element
/// reporting `canplaythrough`; until then every play request is a silent
/// no-op. Each play restarts from position zero, so rapid re-triggers never
/// overlap. A rejected play (autoplay policy) is logged and dropped.
pub struct AudioCue {
    element: HtmlAudioElement,
    ready: Rc<Cell<bool>>,
    _on_ready: Closure<dyn FnMut()>,
}

impl AudioCue {
    pub fn load(src: &str) -> Option<Self> {
        let element = match HtmlAudioElement::new() {
            Ok(element) => element,
            Err(err) => {
                log!("Could not create splash audio element:", err);
                return None;
            }
        };
        element.set_src(src);
        element.set_preload("auto");
        element.set_volume(0.7);

        let ready = Rc::new(Cell::new(false));
        let on_ready = {
            let ready = ready.clone();
            Closure::wrap(Box::new(move || ready.set(true)) as Box<dyn FnMut()>)
        };
        if let Err(err) = element
            .add_event_listener_with_callback("canplaythrough", on_ready.as_ref().unchecked_ref())
        {
            log!("Could not watch splash audio readiness:", err);
        }

        Some(Self {
            element,
            ready,
            _on_ready: on_ready,
        })
    }

    /// Restart the cue from the beginning. Does nothing until the clip has
    /// buffered enough to play through.
    pub fn play(&self) {
        if !self.ready.get() {
            return;
        }
        self.element.set_current_time(0.0);
        match self.element.play() {
            Ok(promise) => {
                spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log!("Audio playback was prevented by browser:", err);
                    }
                });
            }
            Err(err) => {
                log!("Audio playback was prevented by browser:", err);
            }
        }
    }
}

impl Drop for AudioCue {
    fn drop(&mut self) {
        let _ = self.element.pause();
    }
}
