mod use_room_renderer;

pub use use_room_renderer::use_room_renderer;
