//! Error types for the library API.

use llm::error::LLMError;
use std::path::PathBuf;
use thiserror::Error;

/// Ways a provider response can break the scenario contract.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The body is not well-formed JSON (this includes invalid UTF-8 and empty bodies).
    #[error("response is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The body parsed, but its top-level value is not an array.
    #[error("expected a JSON array of scenarios, found {0}")]
    NotAnArray(&'static str),

    /// An array element is not an object.
    #[error("scenario #{index} is not an object")]
    NotAnObject { index: usize },

    /// An element lacks one of the required fields.
    #[error("scenario #{index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// A required field is present but not a string.
    #[error("scenario #{index} field '{field}' must be a string")]
    NotAString { index: usize, field: &'static str },
}

/// Failure of a structured generation call.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Transport, authentication or provider-side failure.
    #[error("LLM backend error: {0}")]
    Provider(#[from] LLMError),

    /// The provider answered, but not in the required shape.
    #[error("Invalid scenario response: {0}")]
    Validation(#[from] ValidationError),
}

impl GenerationError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerationError::Validation(_))
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, GenerationError::Provider(_))
    }
}

/// Errors raised while loading `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid backend '{0}'")]
    UnknownBackend(String),

    #[error("Unable to determine HOME directory")]
    NoHome,
}
