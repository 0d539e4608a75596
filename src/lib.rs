pub mod api;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{GenerationAdapter, GenerationError, Scenario, Snippet, ValidationError};
pub use catalog::LayerKind;
