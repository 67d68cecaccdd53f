//! Imperative entry point for pages that mount a room canvas without Leptos.

use crate::rendering::RendererSession;
use gloo_utils::format::JsValueSerdeExt;
use serverhouse_core::{HostState, RenderError, RendererOptions, RoomType};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

fn to_js(error: RenderError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Accepts a JSON string, a plain object, or `undefined` for defaults.
fn parse_options(options: &JsValue) -> Result<RendererOptions, RenderError> {
    if options.is_undefined() || options.is_null() {
        return Ok(RendererOptions::default());
    }
    match options.as_string() {
        Some(json) => RendererOptions::from_json(&json),
        None => options
            .into_serde::<RendererOptions>()
            .map_err(RenderError::from),
    }
}

/// Live room canvas returned by [`mount_room_canvas`].
#[wasm_bindgen]
pub struct RoomCanvasHandle {
    session: RendererSession,
}

#[wasm_bindgen]
impl RoomCanvasHandle {
    /// Switch to room `room` (0..=5).
    #[wasm_bindgen(js_name = setRoom)]
    pub fn set_room(&self, room: i32) -> Result<(), JsValue> {
        let room = RoomType::try_from(i64::from(room)).map_err(to_js)?;
        self.session.set_room(room);
        Ok(())
    }

    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&self, is_active: bool) {
        self.session.set_active(is_active);
    }

    pub fn resize(&self) {
        self.session.resize();
    }

    /// "Canvas2D" or "WebGL2" while drawing, otherwise undefined.
    #[wasm_bindgen(getter)]
    pub fn backend(&self) -> Option<String> {
        match self.session.state() {
            HostState::Ready(kind) => Some(kind.to_string()),
            _ => None,
        }
    }

    /// Stop drawing and release the backend. Safe to call twice.
    pub fn destroy(&mut self) {
        self.session.stop();
    }
}

/// Mount a room renderer on the canvas with id `canvas_id`. `options` is a
/// JSON string or object: `{"roomType", "isActive", "use3D"}`.
#[wasm_bindgen(js_name = mountRoomCanvas)]
pub fn mount_room_canvas(canvas_id: &str, options: JsValue) -> Result<RoomCanvasHandle, JsValue> {
    crate::init_logging();

    let options = parse_options(&options).map_err(to_js)?;
    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(canvas_id))
        .ok_or_else(|| JsValue::from_str(&format!("No element with id {canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;

    let mut session = RendererSession::start(canvas, options);
    if session.state() == HostState::Failed {
        return Err(JsValue::from_str("No rendering backend available"));
    }
    session.watch_window_resize();

    Ok(RoomCanvasHandle { session })
}

