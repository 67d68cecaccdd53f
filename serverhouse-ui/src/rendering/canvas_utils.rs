use serverhouse_core::{BackendKind, RenderError, SurfaceSize};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, WebGl2RenderingContext};

/// Get the current time in milliseconds, on the same clock as
/// requestAnimationFrame timestamps.
pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Convert a thrown JS value into a [`RenderError`].
pub fn js_error(value: JsValue) -> RenderError {
    RenderError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, RenderError> {
    get_context(canvas, "2d", BackendKind::Canvas2d)
}

/// Get WebGL2 rendering context from canvas. Fails when the browser lacks
/// WebGL2 or the canvas is already bound to another context type.
pub fn get_webgl2_context(canvas: &HtmlCanvasElement) -> Result<WebGl2RenderingContext, RenderError> {
    get_context(canvas, "webgl2", BackendKind::WebGl2)
}

fn get_context<T: JsCast>(
    canvas: &HtmlCanvasElement,
    context_id: &str,
    kind: BackendKind,
) -> Result<T, RenderError> {
    let unavailable = RenderError::ContextUnavailable { kind };
    match canvas.get_context(context_id) {
        Ok(Some(context)) => context.dyn_into::<T>().map_err(|_| unavailable),
        Ok(None) => Err(unavailable),
        Err(e) => {
            log::debug!("getContext({context_id}) threw: {e:?}");
            Err(unavailable)
        }
    }
}

/// Read the canvas's CSS box and the window's device pixel ratio.
pub fn measure_surface(canvas: &HtmlCanvasElement) -> SurfaceSize {
    let rect = canvas.get_bounding_client_rect();
    let dpr = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    SurfaceSize::new(rect.width(), rect.height(), dpr)
}

/// Size the backing store for `surface`. Writing the size resets any
/// context state, so callers re-apply transforms or viewports afterwards.
pub fn apply_backing_size(canvas: &HtmlCanvasElement, surface: &SurfaceSize) {
    canvas.set_width(surface.backing_width());
    canvas.set_height(surface.backing_height());
}
