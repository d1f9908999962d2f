pub mod components;
pub mod controller;
pub mod state;

pub use components::*;
pub use controller::BannerController;
pub use state::BannerView;
