pub mod analytics;
pub mod overlays;
pub mod settings;
pub mod stream;
