//! Canvas2D backend: replays core draw lists onto a 2D context.

use super::canvas_utils::{apply_backing_size, get_2d_context};
use serverhouse_core::{
    draw_circuit_board, draw_data_flow, draw_server_rack, BackendKind, Color, DrawCommand,
    DrawList, FrameParams, Point, RandomSource, RenderError, RendererBackend, RoomScene,
    SurfaceSize,
};
use std::f64::consts::TAU;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// `Math.random()` as a [`RandomSource`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

pub struct Canvas2dRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    surface: SurfaceSize,
    scene: RoomScene,
    scratch: DrawList,
    rng: MathRandom,
    destroyed: bool,
}

impl Canvas2dRenderer {
    pub fn new(canvas: HtmlCanvasElement, surface: SurfaceSize) -> Result<Self, RenderError> {
        let ctx = get_2d_context(&canvas)?;
        let mut renderer = Self {
            canvas,
            ctx,
            surface,
            scene: RoomScene::new(),
            scratch: DrawList::new(),
            rng: MathRandom,
            destroyed: false,
        };
        renderer.resize(surface);
        Ok(renderer)
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn draw_server_rack(&mut self, x: f64, y: f64, width: f64, height: f64, is_active: bool) {
        self.scratch.clear();
        draw_server_rack(&mut self.scratch, x, y, width, height, is_active);
        self.flush_scratch();
    }

    pub fn draw_data_flow(&mut self, points: &[Point], progress: f64, color: Color) {
        self.scratch.clear();
        draw_data_flow(&mut self.scratch, points, progress, color);
        self.flush_scratch();
    }

    pub fn draw_circuit_board(&mut self, x: f64, y: f64, width: f64, height: f64, density: f64) {
        self.scratch.clear();
        draw_circuit_board(&mut self.scratch, x, y, width, height, density, &mut self.rng);
        self.flush_scratch();
    }

    fn flush_scratch(&self) {
        if !self.destroyed {
            replay(&self.ctx, &self.scratch);
        }
    }
}

impl RendererBackend for Canvas2dRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::Canvas2d
    }

    fn clear(&mut self) {
        if self.destroyed {
            return;
        }
        // Backing dimensions in CSS units cover the whole store whatever the scale
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn resize(&mut self, surface: SurfaceSize) {
        if self.destroyed {
            return;
        }
        self.surface = surface;
        apply_backing_size(&self.canvas, &surface);
        let [a, b, c, d, e, f] = surface.css_to_device_transform();
        if let Err(err) = self.ctx.set_transform(a, b, c, d, e, f) {
            log::warn!("Canvas2D setTransform failed: {err:?}");
        }
    }

    fn draw_frame(&mut self, frame: &FrameParams) {
        if self.destroyed {
            return;
        }
        let list = self.scene.compose(frame, &mut self.rng);
        replay(&self.ctx, list);
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.scratch.clear();
        log::debug!("Canvas2D renderer destroyed");
    }
}

/// Execute `list` against `ctx`. Leaves global alpha and shadow blur reset.
pub fn replay(ctx: &CanvasRenderingContext2d, list: &DrawList) {
    for command in list {
        match command {
            DrawCommand::FillRect { rect, color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.begin_path();
                if ctx.arc(center.x, center.y, *radius, 0.0, TAU).is_ok() {
                    ctx.fill();
                }
            }
            DrawCommand::StrokeLine {
                from,
                to,
                color,
                width,
            } => {
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width);
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
            DrawCommand::StrokePath {
                points,
                color,
                width,
                glow,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                let css = color.to_css();
                ctx.set_stroke_style_str(&css);
                ctx.set_line_width(*width);
                ctx.set_shadow_color(&css);
                ctx.set_shadow_blur(*glow);
                ctx.begin_path();
                ctx.move_to(first.x, first.y);
                for point in rest {
                    ctx.line_to(point.x, point.y);
                }
                ctx.stroke();
                ctx.set_shadow_blur(0.0);
            }
            DrawCommand::SetAlpha(alpha) => ctx.set_global_alpha(*alpha),
        }
    }
    ctx.set_global_alpha(1.0);
}
