use crate::components::RoomPanel;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use serverhouse_core::ROOM_CONFIGS;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Server House"/>
        <main class="min-h-screen bg-slate-950 p-6">
            <div class="grid gap-6 md:grid-cols-2 xl:grid-cols-3">
                {ROOM_CONFIGS
                    .iter()
                    .map(|config| view! { <RoomPanel config=config/> })
                    .collect_view()}
            </div>
        </main>
    }
}
