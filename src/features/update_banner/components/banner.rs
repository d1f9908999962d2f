use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::core::services::{open_store, BrowserScheduler, TauriUpdateChannel, UpdateChannel};
use crate::features::update_banner::{BannerController, BannerView};

#[component]
pub fn UpdateBanner(#[prop(into)] on_open_settings: Callback<()>) -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let view_state = RwSignal::new(BannerView::Hidden);

    let controller = BannerController::new(
        &config,
        open_store(),
        Box::new(BrowserScheduler),
        move |view| {
            // The owner may already be disposed when a deferred callback lands.
            let _ = view_state.try_set(view);
        },
    );
    let channel = TauriUpdateChannel::detect(&config.update_event);
    controller.mount(channel.as_ref().map(|c| c as &dyn UpdateChannel));

    let controller = StoredValue::new_local(controller);
    on_cleanup(move || controller.with_value(|c| c.unmount()));

    let dismiss = move |_| controller.with_value(|c| c.dismiss());
    let update = move |_| controller.with_value(|c| c.update(|| on_open_settings.run(())));

    // Keyed on the version alone so the element survives Entering -> Shown and the
    // `visible` class change is animated.
    let version = Memo::new(move |_| view_state.with(|s| s.version().map(str::to_string)));

    view! {
        {move || {
            version.get().map(|version| {
                view! {
                    <div
                        class="update-banner"
                        class:visible=move || view_state.with(BannerView::is_visible)
                        role="status"
                    >
                        <span class="update-banner-text">
                            "Version " <strong>{version}</strong> " is available."
                        </span>
                        <div class="update-banner-actions">
                            <button class="btn-primary update-banner-btn" on:click=update>"Update"</button>
                            <button class="btn-secondary update-banner-btn" title="Dismiss" on:click=dismiss>"✕"</button>
                        </div>
                    </div>
                }
            })
        }}
    }
}
