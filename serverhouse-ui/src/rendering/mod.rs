pub mod canvas2d;
pub mod canvas_utils;
pub mod factory;
pub mod frame_loop;
pub mod session;
pub mod shaders;
pub mod webgl2;

pub use canvas2d::{replay, Canvas2dRenderer, MathRandom};
pub use canvas_utils::{
    apply_backing_size, get_2d_context, get_webgl2_context, js_error, measure_surface,
    performance_now,
};
pub use factory::BrowserBackendFactory;
pub use frame_loop::FrameLoop;
pub use session::RendererSession;
pub use webgl2::WebGl2Renderer;
