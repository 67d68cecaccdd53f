// serverhouse-ui/src/hooks/use_room_renderer.rs
use crate::rendering::RendererSession;
use leptos::*;
use serverhouse_core::{HostState, RendererOptions, RoomType};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Hook that binds a renderer session to a canvas element.
/// - Mounts once the canvas is in the DOM (WebGL2 first when `use_3d`)
/// - Follows `room_type` and `is_active` without remounting
/// - Resizes on window resize
/// - Stops the frame loop and destroys the backend on cleanup
///
/// Returns the session state for display.
pub fn use_room_renderer(
    canvas_ref: NodeRef<html::Canvas>,
    room_type: Signal<RoomType>,
    is_active: Signal<bool>,
    use_3d: bool,
) -> ReadSignal<HostState> {
    let (state, set_state) = create_signal(HostState::Uninitialized);
    let session: Rc<RefCell<Option<RendererSession>>> = Rc::new(RefCell::new(None));

    {
        let session = Rc::clone(&session);
        create_effect(move |_| {
            let Some(canvas_el) = canvas_ref.get() else {
                return;
            };
            if session.borrow().is_some() {
                return;
            }
            let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>().clone();
            let options = RendererOptions::new(
                room_type.get_untracked(),
                is_active.get_untracked(),
                use_3d,
            );
            let started = RendererSession::start(canvas, options);
            set_state.set(started.state());
            *session.borrow_mut() = Some(started);
        });
    }

    {
        let session = Rc::clone(&session);
        create_effect(move |_| {
            let room = room_type.get();
            let active = is_active.get();
            if let Some(session) = session.borrow().as_ref() {
                session.set_room(room);
                session.set_active(active);
            }
        });
    }

    {
        let session = Rc::clone(&session);
        let _ = leptos_use::use_event_listener(
            leptos_use::use_window(),
            leptos::ev::resize,
            move |_| {
                if let Some(session) = session.borrow().as_ref() {
                    session.resize();
                }
            },
        );
    }

    on_cleanup(move || {
        if let Some(mut session) = session.borrow_mut().take() {
            session.stop();
        }
    });

    state
}
