// Library modules for the binary and integration tests
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod text_processing;

pub use error::{NumberError, Result};
pub use text_processing::{parse, parse_nullable, strip};
