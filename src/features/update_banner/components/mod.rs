pub mod banner;

pub use banner::UpdateBanner;
