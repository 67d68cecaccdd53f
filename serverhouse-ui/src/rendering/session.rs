//! One mounted canvas: host, backend and frame loop together.

use super::canvas_utils::{measure_surface, performance_now};
use super::{BrowserBackendFactory, FrameLoop};
use serverhouse_core::{HostState, RendererHost, RendererOptions, RoomType};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub struct RendererSession {
    canvas: HtmlCanvasElement,
    host: Rc<RefCell<RendererHost>>,
    frame_loop: Option<FrameLoop>,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

impl RendererSession {
    /// Measure the canvas, mount a backend and start drawing. A session
    /// whose backends all failed stays inert.
    pub fn start(canvas: HtmlCanvasElement, options: RendererOptions) -> Self {
        let mut host = RendererHost::new(options, measure_surface(&canvas));
        host.mount(&BrowserBackendFactory::new(canvas.clone()), performance_now());
        let host = Rc::new(RefCell::new(host));

        let frame_loop = if host.borrow().is_live() {
            let frame_host = Rc::clone(&host);
            let started = FrameLoop::start(move |now| {
                let mut host = frame_host.borrow_mut();
                host.frame(now);
                host.is_live()
            });
            match started {
                Ok(frame_loop) => Some(frame_loop),
                Err(e) => {
                    log::error!("Could not start frame loop: {e}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            canvas,
            host,
            frame_loop,
            resize_listener: None,
        }
    }

    pub fn state(&self) -> HostState {
        self.host.borrow().state()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.host.borrow().frames_drawn()
    }

    pub fn is_animating(&self) -> bool {
        self.frame_loop
            .as_ref()
            .is_some_and(|frame_loop| frame_loop.is_running())
    }

    /// Re-measure the canvas and resize the backend.
    pub fn resize(&self) {
        let surface = measure_surface(&self.canvas);
        self.host.borrow_mut().resize(surface);
    }

    pub fn set_room(&self, room: RoomType) {
        self.host.borrow_mut().set_room(room);
    }

    pub fn set_active(&self, is_active: bool) {
        self.host.borrow_mut().set_active(is_active);
    }

    /// Resize on every window `resize` event until [`stop`](Self::stop).
    /// For embedders without a reactive runtime.
    pub fn watch_window_resize(&mut self) {
        if self.resize_listener.is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let host = Rc::clone(&self.host);
        let canvas = self.canvas.clone();
        let listener = Closure::wrap(Box::new(move || {
            host.borrow_mut().resize(measure_surface(&canvas));
        }) as Box<dyn FnMut()>);
        match window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref()) {
            Ok(()) => self.resize_listener = Some(listener),
            Err(e) => log::warn!("Could not watch window resize: {e:?}"),
        }
    }

    /// Cancel the frame loop and destroy the backend. Idempotent.
    pub fn stop(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        if let Some(listener) = self.resize_listener.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }
        }
        if self.state() != HostState::Unmounted {
            self.host.borrow_mut().unmount();
        }
    }
}

impl Drop for RendererSession {
    fn drop(&mut self) {
        self.stop();
    }
}
