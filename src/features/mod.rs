pub mod kanban;
pub mod update_banner;
