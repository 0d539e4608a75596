//! High-level API for generating snippets and scenarios with an LLM.

mod adapter;
mod error;
mod generator;
pub mod prompt;
pub mod scenario;

pub use adapter::{GenerationAdapter, ScenarioRequest, Snippet, SnippetRequest, FALLBACK_MESSAGE};
pub use error::{ConfigError, GenerationError, ValidationError};
pub use generator::{
    Credential, Generator, LlmGenerator, OutputFormat, ProviderRequest, ProviderSettings,
};
pub use scenario::{parse_scenarios, scenario_schema, Scenario};
