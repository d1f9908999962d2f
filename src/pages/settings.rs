use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppView;
use crate::core::services::check_for_updates;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let (status, set_status) = signal(None::<String>);

    let check_now = move |_| {
        set_status.set(Some("Checking for updates…".to_string()));
        spawn_local(async move {
            match check_for_updates().await {
                Ok(_) => set_status.set(Some("Update check requested.".to_string())),
                Err(e) => {
                    tracing::warn!("update check failed: {}", e);
                    set_status.set(Some("Update checks are unavailable here.".to_string()));
                }
            }
        });
    };

    view! {
        <div class="settings-page">
            <header class="board-header">
                <h1>"Settings"</h1>
                <button class="btn-secondary board-header-btn" on:click=move |_| navigate.set(AppView::Board)>"🡄"</button>
            </header>
            <section class="settings-section">
                <h3>"Updates"</h3>
                <p>"Installed version: " {env!("CARGO_PKG_VERSION")}</p>
                <button class="btn-primary" on:click=check_now>"Check for updates"</button>
                {move || status.get().map(|s| view! { <p class="settings-status">{s}</p> })}
            </section>
        </div>
    }
}
