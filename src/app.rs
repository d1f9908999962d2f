use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::features::update_banner::UpdateBanner;
use crate::pages::{BoardPage, SettingsPage};

#[derive(Clone, Debug, PartialEq)]
pub enum AppView {
    Board,
    Settings,
}

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let (current_view, set_current_view) = signal(AppView::Board);

    provide_context(set_current_view);
    provide_context(config);

    let open_settings = Callback::new(move |_: ()| set_current_view.set(AppView::Settings));

    view! {
        <main class="app">
            <UpdateBanner on_open_settings=open_settings />
            {move || match current_view.get() {
                AppView::Board => view! { <BoardPage /> }.into_any(),
                AppView::Settings => view! { <SettingsPage /> }.into_any(),
            }}
        </main>
    }
}
