pub mod config;
pub mod display_spec;

pub use config::{ConvertConfig, Orientation};
