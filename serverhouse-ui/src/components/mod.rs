pub mod canvas_renderer;
pub mod room_panel;

pub use canvas_renderer::CanvasRenderer;
pub use room_panel::RoomPanel;
