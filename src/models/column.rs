use serde::{Deserialize, Serialize};

/// Identifier of the column whose cards can be archived.
pub const DONE_COLUMN_ID: &str = "done";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub title: String,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn defaults() -> Vec<Column> {
        vec![
            Column::new("todo", "To Do"),
            Column::new("doing", "In Progress"),
            Column::new(DONE_COLUMN_ID, "Done"),
        ]
    }
}
