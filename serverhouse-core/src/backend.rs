//! Backend abstraction and the per-canvas lifecycle.
//!
//! A canvas owns at most one [`RendererBackend`] at a time. [`RendererHost`]
//! picks it on mount (WebGL2 when asked, Canvas2D otherwise or as fallback),
//! forwards frames and resizes, and destroys it on unmount.

use crate::config::{ACTIVE_LEVEL, IDLE_LEVEL};
use crate::{RenderError, RendererOptions, RoomType, SurfaceSize};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendKind {
    Canvas2d,
    WebGl2,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Canvas2d => f.write_str("Canvas2D"),
            BackendKind::WebGl2 => f.write_str("WebGL2"),
        }
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub room: RoomType,
    pub is_active: bool,
    /// Seconds since the host mounted.
    pub time_secs: f64,
    pub surface: SurfaceSize,
}

impl FrameParams {
    /// Shader activity level for the current flag.
    pub fn activity(&self) -> f32 {
        if self.is_active {
            ACTIVE_LEVEL
        } else {
            IDLE_LEVEL
        }
    }
}

/// Capability set shared by the Canvas2D and WebGL2 backends.
pub trait RendererBackend {
    fn kind(&self) -> BackendKind;

    /// Wipe the drawing surface.
    fn clear(&mut self);

    /// Re-apply backing-store size and scale for `surface`.
    fn resize(&mut self, surface: SurfaceSize);

    /// Draw one frame. Called after [`clear`](Self::clear).
    fn draw_frame(&mut self, frame: &FrameParams);

    /// Release every resource. Must be idempotent; later calls are no-ops.
    fn destroy(&mut self);
}

/// Builds backends bound to one canvas.
///
/// A failed construction must release anything it allocated before
/// returning the error.
pub trait BackendFactory {
    fn create(
        &self,
        kind: BackendKind,
        surface: SurfaceSize,
    ) -> Result<Box<dyn RendererBackend>, RenderError>;
}

/// Observable lifecycle state of a [`RendererHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostState {
    Uninitialized,
    Ready(BackendKind),
    /// Every construction attempt failed; nothing will be drawn.
    Failed,
    Unmounted,
}

enum Slot {
    Uninitialized,
    Ready(Box<dyn RendererBackend>),
    Failed,
    Unmounted,
}

/// Owns a canvas's backend and drives it frame by frame.
pub struct RendererHost {
    slot: Slot,
    options: RendererOptions,
    surface: SurfaceSize,
    started_at_ms: f64,
    frames_drawn: u64,
}

impl RendererHost {
    pub fn new(options: RendererOptions, surface: SurfaceSize) -> Self {
        Self {
            slot: Slot::Uninitialized,
            options,
            surface,
            started_at_ms: 0.0,
            frames_drawn: 0,
        }
    }

    pub fn state(&self) -> HostState {
        match &self.slot {
            Slot::Uninitialized => HostState::Uninitialized,
            Slot::Ready(backend) => HostState::Ready(backend.kind()),
            Slot::Failed => HostState::Failed,
            Slot::Unmounted => HostState::Unmounted,
        }
    }

    pub fn backend_kind(&self) -> Option<BackendKind> {
        match &self.slot {
            Slot::Ready(backend) => Some(backend.kind()),
            _ => None,
        }
    }

    /// True while frames should keep being scheduled.
    pub fn is_live(&self) -> bool {
        matches!(self.slot, Slot::Ready(_))
    }

    pub fn options(&self) -> RendererOptions {
        self.options
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Construct the backend. WebGL2 is tried first when `use_3d` is set;
    /// on failure Canvas2D is tried once. Both failing leaves the host in
    /// [`HostState::Failed`]. Only valid from `Uninitialized`.
    ///
    /// In a browser a canvas keeps the first context type it hands out, so
    /// the fallback only succeeds when WebGL2 was never acquired. A WebGL2
    /// failure after the context exists (shader compile or link) leaves the
    /// canvas bound to `webgl2` and the Canvas2D attempt fails too.
    pub fn mount(&mut self, factory: &dyn BackendFactory, now_ms: f64) -> HostState {
        if !matches!(self.slot, Slot::Uninitialized) {
            log::warn!("Renderer already mounted (state {:?})", self.state());
            return self.state();
        }

        let preferred = if self.options.use_3d {
            BackendKind::WebGl2
        } else {
            BackendKind::Canvas2d
        };

        let backend = match factory.create(preferred, self.surface) {
            Ok(backend) => Some(backend),
            Err(e) if preferred == BackendKind::WebGl2 => {
                log::warn!("Failed to initialize {preferred} renderer: {e}; falling back to Canvas2D");
                match factory.create(BackendKind::Canvas2d, self.surface) {
                    Ok(backend) => Some(backend),
                    Err(e) => {
                        log::error!("Failed to initialize fallback renderer: {e}");
                        None
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to initialize {preferred} renderer: {e}");
                None
            }
        };

        self.slot = match backend {
            Some(backend) => {
                log::info!(
                    "{} renderer ready for {} ({}x{} @{}x)",
                    backend.kind(),
                    self.options.room_type,
                    self.surface.css_width,
                    self.surface.css_height,
                    self.surface.dpr()
                );
                self.started_at_ms = now_ms;
                Slot::Ready(backend)
            }
            None => Slot::Failed,
        };
        self.state()
    }

    /// Clear and draw one frame at `now_ms`. Returns whether anything was
    /// drawn.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let Slot::Ready(backend) = &mut self.slot else {
            return false;
        };
        let frame = FrameParams {
            room: self.options.room_type,
            is_active: self.options.is_active,
            time_secs: ((now_ms - self.started_at_ms) / 1000.0).max(0.0),
            surface: self.surface,
        };
        backend.clear();
        backend.draw_frame(&frame);
        self.frames_drawn += 1;
        true
    }

    pub fn resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
        if let Slot::Ready(backend) = &mut self.slot {
            backend.resize(surface);
        }
    }

    pub fn set_room(&mut self, room: RoomType) {
        self.options.room_type = room;
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.options.is_active = is_active;
    }

    /// Destroy the backend. Terminal.
    pub fn unmount(&mut self) {
        if let Slot::Ready(backend) = &mut self.slot {
            log::debug!("Destroying {} renderer", backend.kind());
            backend.destroy();
        }
        self.slot = Slot::Unmounted;
    }
}

impl Drop for RendererHost {
    fn drop(&mut self) {
        if let Slot::Ready(backend) = &mut self.slot {
            backend.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Created(BackendKind),
        /// A failed construction released its partial allocation.
        Released(BackendKind),
        Clear(BackendKind),
        Draw(BackendKind, FrameParams),
        Resize(BackendKind, SurfaceSize),
        Destroy(BackendKind),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct MockBackend {
        kind: BackendKind,
        log: Log,
    }

    impl RendererBackend for MockBackend {
        fn kind(&self) -> BackendKind {
            self.kind
        }
        fn clear(&mut self) {
            self.log.borrow_mut().push(Event::Clear(self.kind));
        }
        fn resize(&mut self, surface: SurfaceSize) {
            self.log.borrow_mut().push(Event::Resize(self.kind, surface));
        }
        fn draw_frame(&mut self, frame: &FrameParams) {
            self.log.borrow_mut().push(Event::Draw(self.kind, *frame));
        }
        fn destroy(&mut self) {
            self.log.borrow_mut().push(Event::Destroy(self.kind));
        }
    }

    struct MockFactory {
        fail: Vec<BackendKind>,
        log: Log,
    }

    impl MockFactory {
        fn new(fail: &[BackendKind]) -> Self {
            Self {
                fail: fail.to_vec(),
                log: Rc::default(),
            }
        }

        fn events(&self) -> Vec<Event> {
            self.log.borrow().clone()
        }
    }

    impl BackendFactory for MockFactory {
        fn create(
            &self,
            kind: BackendKind,
            _surface: SurfaceSize,
        ) -> Result<Box<dyn RendererBackend>, RenderError> {
            if self.fail.contains(&kind) {
                self.log.borrow_mut().push(Event::Released(kind));
                return Err(RenderError::ContextUnavailable { kind });
            }
            self.log.borrow_mut().push(Event::Created(kind));
            Ok(Box::new(MockBackend {
                kind,
                log: self.log.clone(),
            }))
        }
    }

    fn surface() -> SurfaceSize {
        SurfaceSize::new(400.0, 300.0, 1.0)
    }

    fn host(room: RoomType, use_3d: bool) -> RendererHost {
        RendererHost::new(RendererOptions::new(room, true, use_3d), surface())
    }

    #[test]
    fn canvas2d_when_3d_not_requested() {
        let factory = MockFactory::new(&[]);
        let mut host = host(RoomType::ServerRoom, false);
        assert_eq!(host.mount(&factory, 0.0), HostState::Ready(BackendKind::Canvas2d));
        assert_eq!(factory.events(), vec![Event::Created(BackendKind::Canvas2d)]);
    }

    #[test]
    fn webgl2_when_requested_and_available() {
        let factory = MockFactory::new(&[]);
        let mut host = host(RoomType::ServerRoom, true);
        assert_eq!(host.mount(&factory, 0.0), HostState::Ready(BackendKind::WebGl2));
    }

    #[test]
    fn webgl2_failure_falls_back_to_canvas2d() {
        let factory = MockFactory::new(&[BackendKind::WebGl2]);
        let mut host = host(RoomType::ServerRoom, true);
        assert_eq!(host.mount(&factory, 0.0), HostState::Ready(BackendKind::Canvas2d));
        assert!(host.frame(16.0));
    }

    #[test]
    fn both_failing_is_terminal_and_draws_nothing() {
        let factory = MockFactory::new(&[BackendKind::WebGl2, BackendKind::Canvas2d]);
        let mut host = host(RoomType::ServerRoom, true);
        assert_eq!(host.mount(&factory, 0.0), HostState::Failed);
        assert!(!host.is_live());
        assert!(!host.frame(16.0));
        host.resize(SurfaceSize::new(800.0, 600.0, 2.0));
        assert_eq!(
            factory.events(),
            vec![
                Event::Released(BackendKind::WebGl2),
                Event::Released(BackendKind::Canvas2d),
            ]
        );

        // A second mount does not retry
        assert_eq!(host.mount(&MockFactory::new(&[]), 0.0), HostState::Failed);
    }

    #[test]
    fn canvas2d_failure_without_3d_does_not_try_webgl2() {
        let factory = MockFactory::new(&[BackendKind::Canvas2d]);
        let mut host = host(RoomType::ServerRoom, false);
        assert_eq!(host.mount(&factory, 0.0), HostState::Failed);
        assert_eq!(factory.events(), vec![Event::Released(BackendKind::Canvas2d)]);
    }

    #[test]
    fn failed_webgl2_is_released_before_canvas2d_is_built() {
        let factory = MockFactory::new(&[BackendKind::WebGl2]);
        let mut host = host(RoomType::ServerRoom, true);
        host.mount(&factory, 0.0);
        host.frame(16.0);

        let events = factory.events();
        assert_eq!(
            events[..2],
            [
                Event::Released(BackendKind::WebGl2),
                Event::Created(BackendKind::Canvas2d),
            ]
        );
        // The failed attempt never reaches the frame path
        assert!(events[2..].iter().all(|e| !matches!(
            e,
            Event::Clear(BackendKind::WebGl2)
                | Event::Draw(BackendKind::WebGl2, _)
                | Event::Destroy(BackendKind::WebGl2)
        )));
    }

    #[test]
    fn frame_clears_then_draws_with_elapsed_seconds() {
        let factory = MockFactory::new(&[]);
        let mut host = host(RoomType::DatabaseRoom, false);
        host.mount(&factory, 1_000.0);
        host.frame(3_500.0);

        let events = factory.events();
        assert_eq!(events[1], Event::Clear(BackendKind::Canvas2d));
        let Event::Draw(_, frame) = &events[2] else {
            panic!("expected draw, got {:?}", events[2]);
        };
        assert_eq!(frame.room, RoomType::DatabaseRoom);
        assert!((frame.time_secs - 2.5).abs() < 1e-12);
        assert_eq!(frame.activity(), ACTIVE_LEVEL);
        assert_eq!(host.frames_drawn(), 1);
    }

    #[test]
    fn resize_is_forwarded_without_state_change() {
        let factory = MockFactory::new(&[]);
        let mut host = host(RoomType::ServerRoom, false);
        host.mount(&factory, 0.0);

        let bigger = SurfaceSize::new(800.0, 600.0, 2.0);
        host.resize(bigger);
        assert_eq!(host.state(), HostState::Ready(BackendKind::Canvas2d));
        assert_eq!(host.surface(), bigger);
        assert!(factory
            .events()
            .contains(&Event::Resize(BackendKind::Canvas2d, bigger)));
    }

    #[test]
    fn activity_toggle_reaches_next_frame() {
        let factory = MockFactory::new(&[]);
        let mut host = host(RoomType::ServerRoom, true);
        host.mount(&factory, 0.0);
        host.set_active(false);
        host.set_room(RoomType::SystemStatus);
        host.frame(0.0);

        let last = factory.events().pop().unwrap();
        let Event::Draw(_, frame) = last else {
            panic!("expected draw");
        };
        assert!(!frame.is_active);
        assert_eq!(frame.activity(), IDLE_LEVEL);
        assert_eq!(frame.room, RoomType::SystemStatus);
    }

    #[test]
    fn unmount_destroys_and_stops_frames() {
        let factory = MockFactory::new(&[]);
        let mut host = host(RoomType::ServerRoom, true);
        host.mount(&factory, 0.0);
        host.frame(16.0);
        host.unmount();

        assert_eq!(host.state(), HostState::Unmounted);
        let before = factory.events().len();
        assert!(!host.frame(32.0));
        assert_eq!(factory.events().len(), before);
        assert_eq!(
            factory.events().last(),
            Some(&Event::Destroy(BackendKind::WebGl2))
        );
    }

    #[test]
    fn drop_destroys_live_backend_once() {
        let factory = MockFactory::new(&[]);
        {
            let mut host = host(RoomType::ServerRoom, false);
            host.mount(&factory, 0.0);
        }
        let destroys = factory
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Destroy(_)))
            .count();
        assert_eq!(destroys, 1);

        let mut host = host(RoomType::ServerRoom, false);
        host.mount(&factory, 0.0);
        host.unmount();
        drop(host);
        let destroys = factory
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Destroy(_)))
            .count();
        assert_eq!(destroys, 2);
    }
}
