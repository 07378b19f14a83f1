pub mod constants;
pub mod settings;

pub use settings::{OutputFormat, RunMode, Settings};
