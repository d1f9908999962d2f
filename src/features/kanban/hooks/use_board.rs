use std::collections::HashSet;

use leptos::prelude::*;

use crate::features::kanban::callbacks::ColumnCallbacks;
use crate::features::kanban::dnd::{CardDrop, Html5DragDrop};
use crate::features::kanban::services::{BoardState, DUPLICATE_ACTION, TOGGLE_TASK_ACTION};
use crate::models::{Card, CardAction, StatusMarker};

pub struct BoardHook {
    pub board: RwSignal<BoardState>,
    pub selected: RwSignal<Option<String>>,
    pub broken_link_ids: Signal<HashSet<String>>,
    pub extra_actions: Vec<CardAction>,
    pub callbacks: ColumnCallbacks,
    pub dnd: Html5DragDrop,
}

impl BoardHook {
    pub fn cards_in(&self, column_id: &str) -> Signal<Vec<Card>> {
        let board = self.board;
        let column_id = column_id.to_string();
        Signal::derive(move || board.with(|b| b.cards_in(&column_id)))
    }
}

fn prompt_title(current: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.prompt_with_message_and_default("Card title", current).ok())
        .flatten()
}

fn scroll_to_card(card_id: &str) {
    let selector = format!("[data-card-id=\"{}\"]", card_id);
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&selector).ok().flatten());
    match element {
        Some(element) => element.scroll_into_view(),
        None => tracing::debug!(card_id, "jump target not rendered"),
    }
}

pub fn use_board() -> BoardHook {
    let board = RwSignal::new(BoardState::default());
    let selected = RwSignal::new(None::<String>);

    let broken_link_ids = Signal::derive(move || board.with(BoardState::broken_link_ids));

    let on_add_card = Callback::new(move |column_id: String| {
        let card = Card::new(column_id, "New card");
        tracing::debug!(card_id = %card.id, column = %card.column_id, "card added");
        board.update(|b| b.add_card(card));
    });

    let on_drop_window = Callback::new(move |column_id: String| {
        let card = Card::new_window(column_id);
        tracing::debug!(card_id = %card.id, column = %card.column_id, "window card added");
        board.update(|b| b.add_card(card));
    });

    let on_delete_card = Callback::new(move |card_id: String| {
        board.update(|b| {
            if b.delete_card(&card_id).is_none() {
                tracing::warn!(%card_id, "delete: card not found");
            }
        });
        selected.update(|s| {
            if s.as_deref() == Some(card_id.as_str()) {
                *s = None;
            }
        });
    });

    let on_edit_card = Callback::new(move |card_id: String| {
        let current = board.with_untracked(|b| {
            b.cards.iter().find(|c| c.id == card_id).map(|c| c.title.clone())
        });
        let Some(current) = current else { return };
        if let Some(title) = prompt_title(&current) {
            board.update(|b| {
                b.rename_card(&card_id, &title);
            });
        }
    });

    let on_jump_card = Callback::new(move |card_id: String| {
        scroll_to_card(&card_id);
        selected.set(Some(card_id));
    });

    let on_update_description = Callback::new(move |(card_id, text): (String, String)| {
        board.update(|b| {
            b.update_description(&card_id, text);
        });
    });

    let on_update_status_marker = Callback::new(move |(card_id, marker): (String, StatusMarker)| {
        board.update(|b| {
            b.update_status_marker(&card_id, marker);
        });
    });

    let on_card_click = Callback::new(move |card_id: String| {
        selected.set(Some(card_id));
    });

    let on_archive_card = Callback::new(move |card_id: String| {
        board.update(|b| {
            if b.archive_card(&card_id) {
                tracing::debug!(%card_id, "card archived");
            }
        });
    });

    let on_card_action = Callback::new(move |(card_id, action_id, task_index): (String, String, Option<usize>)| {
        board.update(|b| {
            if !b.apply_action(&card_id, &action_id, task_index) {
                tracing::warn!(%card_id, %action_id, ?task_index, "card action not applied");
            }
        });
    });

    let dnd = Html5DragDrop::new(Callback::new(move |card_drop: CardDrop| {
        board.update(|b| {
            if !b.apply_drop(&card_drop) {
                tracing::debug!(?card_drop, "drop left the board unchanged");
            }
        });
    }));

    BoardHook {
        board,
        selected,
        broken_link_ids,
        extra_actions: vec![
            CardAction::new(DUPLICATE_ACTION, "Duplicate", false),
            CardAction::new(TOGGLE_TASK_ACTION, "✓", true),
        ],
        callbacks: ColumnCallbacks {
            on_add_card,
            on_drop_window,
            on_delete_card,
            on_edit_card,
            on_jump_card,
            on_update_description,
            on_update_status_marker,
            on_card_click,
            on_archive_card: Some(on_archive_card),
            on_card_action,
        },
        dnd,
    }
}
