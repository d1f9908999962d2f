pub mod card;
pub mod column;
pub mod tag;
pub mod update;

pub use card::{Card, CardAction, CardKind, CardTask, StatusMarker};
pub use column::{Column, DONE_COLUMN_ID};
pub use tag::{TagDefinition, TagDisplaySettings};
pub use update::{UpdateCheckResult, UpdateInfo};
