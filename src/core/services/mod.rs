pub mod scheduler;
pub mod storage;
pub mod tauri_commands;
pub mod update_channel;

pub use scheduler::*;
pub use storage::*;
pub use tauri_commands::*;
pub use update_channel::*;
