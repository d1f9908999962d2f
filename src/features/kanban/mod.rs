pub mod callbacks;
pub mod components;
pub mod dnd;
pub mod hooks;
pub mod services;

pub use callbacks::*;
pub use components::*;
pub use dnd::*;
pub use hooks::*;
pub use services::*;
