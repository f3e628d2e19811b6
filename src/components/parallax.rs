use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use yew::prelude::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// Scroll-driven parallax for the long marketing pages. A rAF loop samples
// page scroll progress, smooths it with a damping factor, and writes CSS
// transforms onto a fixed set of decorative layers. The loop cancels on
// unmount; it owns no page state.

const PARTICLE_COLORS: [&str; 3] = [
    "rgba(255, 77, 109, 0.3)",
    "rgba(255, 255, 255, 0.2)",
    "rgba(100, 61, 136, 0.3)",
];

/// Randomized blurred dots for the fixed particle layer. Positions are drawn
/// once per mount; the float keyframes take it from there.
pub fn drifting_particles(count: usize) -> Html {
    (0..count)
        .map(|_| {
            let size = Math::random() * 10.0 + 5.0;
            let color = PARTICLE_COLORS
                [(Math::random() * PARTICLE_COLORS.len() as f64) as usize % PARTICLE_COLORS.len()];
            let style = format!(
                "width: {:.0}px; height: {:.0}px; background: {}; top: {:.2}%; left: {:.2}%; animation-delay: {:.2}s;",
                size,
                size,
                color,
                Math::random() * 100.0,
                Math::random() * 100.0,
                Math::random() * 5.0
            );
            html! { <div class="particle" {style}></div> }
        })
        .collect()
}

/// Boosts the first 10% of scroll so small movements read immediately, then
/// compresses the remainder into the leftover range.
pub fn enhanced_progress(progress: f64) -> f64 {
    if progress < 0.1 {
        progress * 3.0
    } else {
        0.3 + (progress - 0.1) * 0.7
    }
}

/// One damping step toward `target`.
pub fn damp(current: f64, target: f64) -> f64 {
    current + (target - current) * 0.15
}

pub fn translate_y(progress: f64) -> String {
    format!("translateY({:.1}px)", -200.0 * progress.powf(0.7))
}

pub fn rotate(progress: f64) -> String {
    format!("rotate({:.1}deg)", 15.0 * progress.powf(0.7))
}

pub fn scale(progress: f64) -> String {
    format!("scale({:.3})", 1.0 + 0.25 * progress.powf(0.7))
}

/// Hero title lift: a steeper curve than the layers so the title leads.
pub fn title_transform(progress: f64) -> String {
    let eased = progress.powf(0.6);
    format!(
        "translateY({:.1}px) scale({:.3}) rotateX({:.1}deg)",
        -100.0 * eased,
        1.0 - 0.2 * eased,
        -5.0 * eased
    )
}

pub fn subtitle_transform(progress: f64) -> String {
    format!("translateY({:.1}px)", -50.0 * progress.powf(0.7))
}

/// Subtitle fade, gone within the first 15% of scroll.
pub fn fade_opacity(progress: f64) -> f64 {
    if progress < 0.15 {
        (1.0 - progress * 6.67).max(0.0)
    } else {
        0.0
    }
}

fn page_scroll_progress() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let range = root.scroll_height() as f64 - root.client_height() as f64;
                if range > 0.0 {
                    return (root.scroll_top() as f64 / range).clamp(0.0, 1.0);
                }
            }
        }
    }
    0.0
}

fn set_style(document: &web_sys::Document, selector: &str, style: &str) {
    if let Ok(Some(element)) = document.query_selector(selector) {
        let _ = element.set_attribute("style", style);
    }
}

fn apply_layers(progress: f64) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let lift = translate_y(progress);
    set_style(&document, ".background-particles", &format!("transform: {};", lift));
    set_style(
        &document,
        ".background-glow",
        &format!("transform: {} {} {};", lift, rotate(progress), scale(progress)),
    );

    // The floating blobs each drift on their own curve.
    let eased = progress.powf(0.7);
    set_style(
        &document,
        ".floating-element-1",
        &format!(
            "transform: translateY({:.1}px) scale({:.3}) rotate({:.1}deg);",
            -150.0 * eased,
            1.0 + 0.3 * progress,
            15.0 * progress
        ),
    );
    set_style(
        &document,
        ".floating-element-2",
        &format!(
            "transform: translateY({:.1}px) scale({:.3}) rotate({:.1}deg);",
            -200.0 * eased,
            1.0 - 0.3 * progress,
            -20.0 * progress
        ),
    );
    set_style(
        &document,
        ".floating-element-3",
        &format!(
            "transform: translateY({:.1}px) scale({:.3}) rotate({:.1}deg);",
            -180.0 * eased,
            1.0 + 0.8 * progress,
            25.0 * progress
        ),
    );

    set_style(
        &document,
        ".hero-motion-title",
        &format!("transform: {};", title_transform(progress)),
    );
    set_style(
        &document,
        ".hero-motion-subtitle",
        &format!(
            "transform: {}; opacity: {:.3};",
            subtitle_transform(progress),
            fade_opacity(progress)
        ),
    );
}

/// Starts the parallax loop and returns the stop closure, shaped for use as
/// an effect destructor. Stopping cancels the pending frame and releases the
/// self-referential callback.
pub fn animate_scroll_layers() -> impl FnOnce() {
    let frame_id = Rc::new(Cell::new(None::<i32>));
    let smooth = Rc::new(Cell::new(0.0_f64));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    {
        let frame_id = frame_id.clone();
        let tick_handle = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let target = enhanced_progress(page_scroll_progress());
            let damped = damp(smooth.get(), target);
            smooth.set(damped);
            apply_layers(damped);

            if let Some(window) = web_sys::window() {
                if let Some(callback) = tick_handle.borrow().as_ref() {
                    if let Ok(id) =
                        window.request_animation_frame(callback.as_ref().unchecked_ref())
                    {
                        frame_id.set(Some(id));
                    }
                }
            }
        }) as Box<dyn FnMut()>));
    }

    let window = web_sys::window().unwrap();
    if let Some(callback) = tick.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            frame_id.set(Some(id));
        }
    }

    move || {
        if let Some(id) = frame_id.get() {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference so it can drop.
        tick.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_scroll_is_boosted() {
        assert!((enhanced_progress(0.05) - 0.15).abs() < 1e-12);
        assert!((enhanced_progress(0.02) - 0.06).abs() < 1e-12);
    }

    #[test]
    fn curve_is_continuous_at_the_boost_boundary() {
        let below = enhanced_progress(0.1 - 1e-9);
        let at = enhanced_progress(0.1);
        assert!((below - at).abs() < 1e-6);
        assert!((at - 0.3).abs() < 1e-12);
    }

    #[test]
    fn full_scroll_compresses_below_one() {
        assert!((enhanced_progress(1.0) - 0.93).abs() < 1e-12);
    }

    #[test]
    fn damping_moves_a_fixed_fraction() {
        assert!((damp(0.0, 1.0) - 0.15).abs() < 1e-12);
        assert!((damp(0.5, 0.5) - 0.5).abs() < 1e-12);
        // Repeated steps converge on the target.
        let mut value = 0.0;
        for _ in 0..200 {
            value = damp(value, 1.0);
        }
        assert!((value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn transforms_at_rest_are_identity_shaped() {
        assert_eq!(translate_y(0.0), "translateY(-0.0px)");
        assert_eq!(rotate(0.0), "rotate(0.0deg)");
        assert_eq!(scale(0.0), "scale(1.000)");
        assert_eq!(title_transform(0.0), "translateY(-0.0px) scale(1.000) rotateX(-0.0deg)");
    }

    #[test]
    fn subtitle_fades_out_within_early_scroll() {
        assert!((fade_opacity(0.0) - 1.0).abs() < 1e-12);
        assert!(fade_opacity(0.1) < 0.34);
        assert_eq!(fade_opacity(0.15), 0.0);
        assert_eq!(fade_opacity(0.9), 0.0);
    }

    #[test]
    fn fade_never_goes_negative() {
        assert!(fade_opacity(0.1499) >= 0.0);
    }
}
