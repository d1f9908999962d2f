use leptos::prelude::*;

use crate::models::StatusMarker;

/// Handlers a parent passes to a column. Card-level handlers receive the card id.
#[derive(Clone, Copy)]
pub struct ColumnCallbacks {
    pub on_add_card: Callback<String>,
    pub on_drop_window: Callback<String>,
    pub on_delete_card: Callback<String>,
    pub on_edit_card: Callback<String>,
    pub on_jump_card: Callback<String>,
    pub on_update_description: Callback<(String, String)>,
    pub on_update_status_marker: Callback<(String, StatusMarker)>,
    pub on_card_click: Callback<String>,
    pub on_archive_card: Option<Callback<String>>,
    pub on_card_action: Callback<(String, String, Option<usize>)>,
}

/// The handler set one card view receives.
#[derive(Clone, Copy)]
pub struct CardCallbacks {
    pub on_delete: Callback<String>,
    pub on_edit: Callback<String>,
    pub on_jump: Callback<String>,
    pub on_update_description: Callback<(String, String)>,
    pub on_update_status_marker: Callback<(String, StatusMarker)>,
    pub on_click: Callback<String>,
    pub on_archive: Option<Callback<String>>,
    pub on_action: Callback<(String, String, Option<usize>)>,
}

/// Something the user did on a card, before it is tagged with the card id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    Delete,
    Edit,
    Jump,
    Click,
    Archive,
    UpdateDescription(String),
    UpdateStatusMarker(StatusMarker),
    Action { action_id: String, task_index: Option<usize> },
}

impl ColumnCallbacks {
    /// Card wiring for a column: archive is only offered in the done column.
    pub fn for_column(&self, column_id: &str, done_column_id: &str) -> CardCallbacks {
        CardCallbacks {
            on_delete: self.on_delete_card,
            on_edit: self.on_edit_card,
            on_jump: self.on_jump_card,
            on_update_description: self.on_update_description,
            on_update_status_marker: self.on_update_status_marker,
            on_click: self.on_card_click,
            on_archive: if column_id == done_column_id { self.on_archive_card } else { None },
            on_action: self.on_card_action,
        }
    }

    pub fn add_card(&self, column_id: &str) {
        self.on_add_card.run(column_id.to_string());
    }

    pub fn add_window(&self, column_id: &str) {
        self.on_drop_window.run(column_id.to_string());
    }
}

impl CardCallbacks {
    pub fn offers_archive(&self) -> bool {
        self.on_archive.is_some()
    }

    /// Forwards `event` upward tagged with `card_id`. Returns false when nothing is wired for it.
    pub fn emit(&self, card_id: &str, event: CardEvent) -> bool {
        let id = card_id.to_string();
        match event {
            CardEvent::Delete => self.on_delete.run(id),
            CardEvent::Edit => self.on_edit.run(id),
            CardEvent::Jump => self.on_jump.run(id),
            CardEvent::Click => self.on_click.run(id),
            CardEvent::Archive => match self.on_archive {
                Some(cb) => cb.run(id),
                None => return false,
            },
            CardEvent::UpdateDescription(text) => self.on_update_description.run((id, text)),
            CardEvent::UpdateStatusMarker(marker) => self.on_update_status_marker.run((id, marker)),
            CardEvent::Action { action_id, task_index } => self.on_action.run((id, action_id, task_index)),
        }
        true
    }
}
