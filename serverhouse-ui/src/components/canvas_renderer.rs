//! Decorative room canvas.

use crate::hooks::use_room_renderer;
use leptos::*;
use serverhouse_core::{HostState, RoomType};

const ACTIVE_FILTER: &str = "brightness(1.1) saturate(1.2)";
const IDLE_FILTER: &str = "brightness(0.7) saturate(0.8)";

/// Animated server room filling its parent. Draws with WebGL2 when `use_3d`
/// is set and the browser allows it, Canvas2D otherwise.
#[component]
pub fn CanvasRenderer(
    /// Which room to draw
    #[prop(into)]
    room_type: MaybeSignal<RoomType>,
    /// Powered-on state; drives LEDs, flows, particles and the CSS filter
    #[prop(into)]
    is_active: MaybeSignal<bool>,
    /// Prefer the WebGL2 backend. Read once at mount.
    #[prop(optional)]
    use_3d: bool,
    /// Extra classes for the canvas element
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let room_type: Signal<RoomType> = Signal::derive(move || room_type.get());
    let is_active: Signal<bool> = Signal::derive(move || is_active.get());

    let state = use_room_renderer(canvas_ref, room_type, is_active, use_3d);

    let backend = move || match state.get() {
        HostState::Ready(kind) => kind.to_string(),
        HostState::Uninitialized => "pending".to_string(),
        HostState::Failed => "failed".to_string(),
        HostState::Unmounted => "unmounted".to_string(),
    };
    let filter = move || {
        if is_active.get() {
            ACTIVE_FILTER
        } else {
            IDLE_FILTER
        }
    };

    view! {
        <canvas
            node_ref=canvas_ref
            class=format!("w-full h-full {class}")
            data-backend=backend
            style:background="transparent"
            style:filter=filter
        />
    }
}
