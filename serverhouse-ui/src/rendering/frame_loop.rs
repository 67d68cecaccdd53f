use super::canvas_utils::js_error;
use serverhouse_core::RenderError;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

type FrameCallback = Closure<dyn FnMut(f64)>;

#[derive(Default)]
struct LoopState {
    callback: RefCell<Option<FrameCallback>>,
    handle: Cell<Option<i32>>,
    stopped: Cell<bool>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), RenderError> {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = web_sys::window()
            .ok_or_else(|| RenderError::Js("No window".into()))?
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        self.handle.set(Some(id));
        Ok(())
    }

    fn cancel(&self) {
        self.stopped.set(true);
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// A requestAnimationFrame loop that runs until cancelled, dropped, or the
/// callback returns `false`.
///
/// The scheduled closure only holds a weak reference back to the loop, so
/// dropping the `FrameLoop` frees everything.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    /// Schedule `on_frame` for the next frame. It receives the rAF timestamp
    /// in milliseconds.
    pub fn start(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Result<Self, RenderError> {
        let state = Rc::new(LoopState::default());
        let weak: Weak<LoopState> = Rc::downgrade(&state);

        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.handle.set(None);
            if state.stopped.get() {
                return;
            }
            if !on_frame(timestamp) {
                state.stopped.set(true);
                return;
            }
            if let Err(e) = state.schedule() {
                log::error!("Failed to schedule animation frame: {e}");
                state.stopped.set(true);
            }
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(callback);
        state.schedule()?;
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        !self.state.stopped.get()
    }

    /// Cancel the pending frame. No callback runs afterwards.
    pub fn cancel(&self) {
        self.state.cancel();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.cancel();
        self.state.callback.borrow_mut().take();
    }
}
