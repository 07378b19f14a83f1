pub mod inline_numbers;
pub mod normalization;
pub mod number_formatter;
pub mod triplet;

pub use number_formatter::{parse, parse_nullable, strip};
