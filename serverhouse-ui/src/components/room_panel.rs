use crate::components::CanvasRenderer;
use leptos::*;
use serverhouse_core::RoomConfig;

/// One room of the demo page: heading, power toggle and the canvas.
#[component]
pub fn RoomPanel(config: &'static RoomConfig) -> impl IntoView {
    let (is_active, set_is_active) = create_signal(config.active_by_default);

    view! {
        <section class="relative h-80 rounded-lg overflow-hidden bg-slate-900 border border-slate-700">
            <CanvasRenderer
                room_type=config.room
                is_active=is_active
                use_3d=config.use_3d
                class="absolute inset-0"
            />
            <div class="absolute top-3 left-4 pointer-events-none">
                <h2 class="text-lg font-semibold text-white">{config.title}</h2>
                <p class="text-sm text-slate-400">{config.subtitle}</p>
            </div>
            <button
                class="absolute top-3 right-4 px-3 py-1 rounded text-xs font-medium bg-slate-800 text-slate-200 hover:bg-slate-700"
                on:click=move |_| set_is_active.update(|active| *active = !*active)
            >
                {move || if is_active.get() { "Power off" } else { "Power on" }}
            </button>
        </section>
    }
}
