use std::collections::HashSet;

use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::features::kanban::callbacks::ColumnCallbacks;
use crate::features::kanban::components::CardView;
use crate::features::kanban::dnd::{DragDropBackend, SortStrategy, SortableList};
use crate::models::{Card, CardAction, Column, TagDefinition, TagDisplaySettings};

/// What one render of a column shows: the header count and each card's id with
/// its position, in the order the cards were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRows {
    pub count: usize,
    pub rows: Vec<(String, Option<usize>)>,
}

pub fn column_rows(cards: &[Card], order: &SortableList) -> ColumnRows {
    ColumnRows {
        count: cards.len(),
        rows: cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id.clone(), order.posinset(i, &card.id)))
            .collect(),
    }
}

#[component]
pub fn KanbanColumn<D>(
    column: Column,
    #[prop(into)] cards: Signal<Vec<Card>>,
    callbacks: ColumnCallbacks,
    dnd: D,
    #[prop(optional, into)] tag_definitions: MaybeProp<Vec<TagDefinition>>,
    #[prop(optional, into)] tag_display: MaybeProp<TagDisplaySettings>,
    #[prop(optional, into)] broken_link_ids: MaybeProp<HashSet<String>>,
    #[prop(optional, into)] extra_actions: MaybeProp<Vec<CardAction>>,
) -> impl IntoView
where
    D: DragDropBackend,
{
    let done_column_id = use_context::<BoardConfig>()
        .map(|c| c.done_column_id)
        .unwrap_or_else(|| BoardConfig::default().done_column_id);
    let card_callbacks = callbacks.for_column(&column.id, &done_column_id);
    let target = dnd.register_drop_target(&column.id);
    let is_over = target.is_over;
    let column_id = column.id.clone();

    let sortable = Memo::new(move |_| {
        let ids = cards.with(|cards| cards.iter().map(|c| c.id.clone()).collect());
        dnd.sortable(ids, SortStrategy::VerticalList)
    });
    let rows = Memo::new(move |_| cards.with(|cards| sortable.with(|order| column_rows(cards, order))));

    let render_cards = {
        let column_id = column_id.clone();
        move || {
            let definitions = tag_definitions.get().unwrap_or_default();
            let display = tag_display.get().unwrap_or_default();
            let broken = broken_link_ids.get().unwrap_or_default();
            let actions = extra_actions.get().unwrap_or_default();
            let rows = rows.get().rows;
            cards
                .get()
                .into_iter()
                .zip(rows)
                .map(|(card, (card_id, position))| {
                    let position = position.map(|p| p.to_string());
                    let has_broken_links = broken.contains(&card.id);
                    view! {
                        <div
                            class="sortable-item"
                            draggable="true"
                            aria-posinset=position
                            on:dragstart={
                                let card_id = card_id.clone();
                                move |ev: leptos::ev::DragEvent| {
                                    if let Some(transfer) = ev.data_transfer() {
                                        let _ = transfer.set_data("text/plain", &card_id);
                                    }
                                    dnd.drag_start(&card_id);
                                }
                            }
                            on:dragover={
                                let column_id = column_id.clone();
                                let card_id = card_id.clone();
                                move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    ev.stop_propagation();
                                    dnd.drag_over(&column_id, Some(&card_id));
                                }
                            }
                            on:dragend=move |_| dnd.drag_end()
                        >
                            <CardView
                                card=card
                                column_id=column_id.clone()
                                callbacks=card_callbacks
                                tag_definitions=definitions.clone()
                                tag_display=display
                                has_broken_links=has_broken_links
                                extra_actions=actions.clone()
                            />
                        </div>
                    }
                })
                .collect_view()
        }
    };

    view! {
        <div class="kanban-column" data-column-id=column_id.clone()>
            <div class="column-header">
                <h3>{column.title.clone()}</h3>
                <span class="card-count">{move || rows.with(|r| r.count)}</span>
            </div>
            <div
                class="column-content"
                data-drop-target=target.id.clone()
                class:drop-over=move || is_over.get()
                node_ref=target.node_ref
                on:dragover={
                    let column_id = column_id.clone();
                    move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        dnd.drag_over(&column_id, None);
                    }
                }
                on:dragleave={
                    let column_id = column_id.clone();
                    move |_| dnd.drag_leave(&column_id)
                }
                on:drop={
                    let column_id = column_id.clone();
                    move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        dnd.drop_on(&column_id);
                    }
                }
            >
                {render_cards}
            </div>
            <div class="column-actions">
                <button class="btn-secondary column-btn" on:click={
                    let column_id = column_id.clone();
                    move |_| callbacks.add_card(&column_id)
                }>"+ Add card"</button>
                <button class="btn-secondary column-btn" on:click={
                    let column_id = column_id.clone();
                    move |_| callbacks.add_window(&column_id)
                }>"+ Add window"</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::kanban::dnd::{CardDrop, Html5DragDrop};

    fn card(id: &str) -> Card {
        Card { id: id.to_string(), ..Card::new("todo", id) }
    }

    fn render(cards: Signal<Vec<Card>>, dnd: Html5DragDrop) -> ColumnRows {
        let ids = cards.with_untracked(|cards| cards.iter().map(|c| c.id.clone()).collect());
        let order = dnd.sortable(ids, SortStrategy::VerticalList);
        cards.with_untracked(|cards| column_rows(cards, &order))
    }

    #[test]
    fn rows_follow_card_order_and_count() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = Html5DragDrop::new(Callback::new(|_: CardDrop| {}));
            let list = RwSignal::new(vec![card("c"), card("a"), card("b")]);
            let cards: Signal<Vec<Card>> = list.into();

            let rows = render(cards, dnd);
            assert_eq!(rows.count, 3);
            assert_eq!(rows.rows, vec![
                ("c".to_string(), Some(1)),
                ("a".to_string(), Some(2)),
                ("b".to_string(), Some(3)),
            ]);

            list.update(|cards| cards.swap(0, 2));
            let ids: Vec<String> = render(cards, dnd).rows.into_iter().map(|(id, _)| id).collect();
            assert_eq!(ids, vec!["b", "a", "c"]);
        });
    }

    #[test]
    fn duplicate_ids_render_once_per_card() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = Html5DragDrop::new(Callback::new(|_: CardDrop| {}));
            let cards: Signal<Vec<Card>> = RwSignal::new(vec![card("a"), card("b"), card("a")]).into();

            let rows = render(cards, dnd);
            assert_eq!(rows.count, 3);
            assert_eq!(rows.rows, vec![
                ("a".to_string(), Some(1)),
                ("b".to_string(), Some(2)),
                ("a".to_string(), Some(3)),
            ]);
        });
    }

    #[test]
    fn empty_column_renders_no_rows() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = Html5DragDrop::new(Callback::new(|_: CardDrop| {}));
            let cards: Signal<Vec<Card>> = RwSignal::new(Vec::new()).into();

            let rows = render(cards, dnd);
            assert_eq!(rows.count, 0);
            assert!(rows.rows.is_empty());
        });
    }
}
