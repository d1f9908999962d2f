use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CardKind {
    #[default]
    Note,
    Window,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum StatusMarker {
    #[default]
    None,
    Todo,
    Doing,
    Blocked,
    Done,
}

impl StatusMarker {
    pub fn glyph(&self) -> &'static str {
        match self {
            StatusMarker::None => "○",
            StatusMarker::Todo => "◔",
            StatusMarker::Doing => "◑",
            StatusMarker::Blocked => "⊘",
            StatusMarker::Done => "●",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusMarker::None => "No status",
            StatusMarker::Todo => "To do",
            StatusMarker::Doing => "Doing",
            StatusMarker::Blocked => "Blocked",
            StatusMarker::Done => "Done",
        }
    }

    /// Marker shown after clicking the status button.
    pub fn next(&self) -> StatusMarker {
        match self {
            StatusMarker::None => StatusMarker::Todo,
            StatusMarker::Todo => StatusMarker::Doing,
            StatusMarker::Doing => StatusMarker::Blocked,
            StatusMarker::Blocked => StatusMarker::Done,
            StatusMarker::Done => StatusMarker::None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardTask {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: String,
    pub column_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub kind: CardKind,
    #[serde(default)]
    pub status_marker: StatusMarker,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<CardTask>,
    /// Ids of other cards this card refers to.
    #[serde(default)]
    pub links: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    pub fn new(column_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            column_id: column_id.into(),
            title: title.into(),
            description: String::new(),
            kind: CardKind::Note,
            status_marker: StatusMarker::None,
            tags: Vec::new(),
            tasks: Vec::new(),
            links: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn new_window(column_id: impl Into<String>) -> Self {
        Self {
            kind: CardKind::Window,
            ..Self::new(column_id, "New window")
        }
    }
}

/// An extra action offered on every card, or on every checklist task when `per_task` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardAction {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub per_task: bool,
}

impl CardAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>, per_task: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            per_task,
        }
    }
}
