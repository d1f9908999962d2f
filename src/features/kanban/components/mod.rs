pub mod card_view;
pub mod column;

pub use card_view::CardView;
pub use column::KanbanColumn;
