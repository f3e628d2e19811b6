use gloo_console::log;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlIFrameElement, MouseEvent};
use yew::NodeRef;

/// Message understood by the embedded background documents. The shape is
/// part of the contract with the hosted frame and must not change.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct PointerMessage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "relativeX")]
    pub relative_x: f64,
    #[serde(rename = "relativeY")]
    pub relative_y: f64,
}

pub const PARENT_MOUSE_MOVE: &str = "PARENT_MOUSE_MOVE";

impl PointerMessage {
    pub fn new(x: f64, y: f64, relative_x: f64, relative_y: f64) -> Self {
        Self {
            kind: PARENT_MOUSE_MOVE,
            x,
            y,
            relative_x,
            relative_y,
        }
    }
}

/// Where sampled pointer positions go. Pages only talk to this trait; the
/// message shape and transport stay behind it.
pub trait PointerSink {
    fn publish(&self, x: f64, y: f64);
}

/// Forwards pointer positions to an embedded frame as a best-effort
/// cross-document message with absolute and frame-relative coordinates.
/// Failures are logged and dropped; the channel is one-way.
pub struct FrameBroadcaster {
    frame: NodeRef,
}

impl FrameBroadcaster {
    pub fn new(frame: NodeRef) -> Self {
        Self { frame }
    }
}

impl PointerSink for FrameBroadcaster {
    fn publish(&self, x: f64, y: f64) {
        if let Some(frame) = self.frame.cast::<HtmlIFrameElement>() {
            if let Some(target) = frame.content_window() {
                let bounds = frame.get_bounding_client_rect();
                let message = PointerMessage::new(x, y, x - bounds.left(), y - bounds.top());
                match serde_wasm_bindgen::to_value(&message) {
                    Ok(payload) => {
                        if let Err(err) = target.post_message(&payload, "*") {
                            log!("Error communicating with iframe:", err);
                        }
                    }
                    Err(err) => {
                        log!("Error building iframe message:", err.to_string());
                    }
                }
            }
        }
    }
}

/// Attaches a window mousemove listener feeding `sink` and returns the
/// detach closure, shaped for use as an effect destructor.
pub fn forward_pointer_moves(sink: impl PointerSink + 'static) -> impl FnOnce() {
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        sink.publish(event.client_x() as f64, event.client_y() as f64);
    }) as Box<dyn FnMut(MouseEvent)>);

    let window = web_sys::window().unwrap();
    window
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .unwrap();

    move || {
        window
            .remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_shape_matches_the_frame_contract() {
        let message = PointerMessage::new(640.0, 360.0, 140.0, 60.0);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "PARENT_MOUSE_MOVE",
                "x": 640.0,
                "y": 360.0,
                "relativeX": 140.0,
                "relativeY": 60.0,
            })
        );
    }

    #[test]
    fn relative_coordinates_are_offsets_into_the_frame() {
        let message = PointerMessage::new(500.0, 400.0, 500.0 - 120.0, 400.0 - 80.0);
        assert_eq!(message.relative_x, 380.0);
        assert_eq!(message.relative_y, 320.0);
    }
}
