use super::{Canvas2dRenderer, WebGl2Renderer};
use serverhouse_core::{BackendFactory, BackendKind, RenderError, RendererBackend, SurfaceSize};
use web_sys::HtmlCanvasElement;

/// Builds the real browser backends for one canvas element.
pub struct BrowserBackendFactory {
    canvas: HtmlCanvasElement,
}

impl BrowserBackendFactory {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl BackendFactory for BrowserBackendFactory {
    fn create(
        &self,
        kind: BackendKind,
        surface: SurfaceSize,
    ) -> Result<Box<dyn RendererBackend>, RenderError> {
        let backend: Box<dyn RendererBackend> = match kind {
            BackendKind::Canvas2d => Box::new(Canvas2dRenderer::new(self.canvas.clone(), surface)?),
            BackendKind::WebGl2 => Box::new(WebGl2Renderer::new(self.canvas.clone(), surface)?),
        };
        Ok(backend)
    }
}
