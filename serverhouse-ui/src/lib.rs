pub mod app;
pub mod components;
pub mod embed;
pub mod hooks;
pub mod rendering;

pub use app::App;
pub use components::CanvasRenderer;
pub use embed::{mount_room_canvas, RoomCanvasHandle};

use wasm_bindgen::prelude::*;

/// Install the panic hook and console logger. Repeated calls are harmless.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

#[wasm_bindgen]
pub fn hydrate() {
    init_logging();
    leptos::mount_to_body(App);
}
