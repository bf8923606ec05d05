//! Text normalization for keyword analysis

pub mod preprocessor;

pub use preprocessor::{clean, TextPreprocessor};
