use leptos::prelude::*;

use crate::app::AppView;
use crate::features::kanban::{use_board, KanbanColumn};
use crate::models::{TagDefinition, TagDisplaySettings};

#[component]
pub fn BoardPage() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    let hook = use_board();

    let tag_definitions = vec![
        TagDefinition::new("bug", "#d9534f"),
        TagDefinition::new("feature", "#5cb85c"),
        TagDefinition::new("docs", "#5bc0de"),
    ];
    let selected = hook.selected;
    let columns = hook.board.with_untracked(|b| b.columns.clone());

    view! {
        <div class="board-page" class:has-selection=move || selected.with(Option::is_some)>
            <header class="board-header">
                <h1>"Board"</h1>
                <div class="board-actions">
                    <button class="btn-secondary board-header-btn" title="Settings" on:click=move |_| {
                        navigate.set(AppView::Settings);
                    }>"⚙"</button>
                </div>
            </header>
            <div class="kanban-board">
                {columns.into_iter().map(|column| {
                    let cards = hook.cards_in(&column.id);
                    view! {
                        <KanbanColumn
                            column=column
                            cards=cards
                            callbacks=hook.callbacks
                            dnd=hook.dnd
                            tag_definitions=tag_definitions.clone()
                            tag_display=TagDisplaySettings::default()
                            broken_link_ids=hook.broken_link_ids
                            extra_actions=hook.extra_actions.clone()
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
