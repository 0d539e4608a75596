//! The provider seam and its implementation on top of the `llm` crate.

use async_trait::async_trait;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::{ChatMessage, StructuredOutputFormat};
use llm::error::LLMError;
use llm::LLMProvider;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Output shape requested from the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    /// Free-form text.
    Text,
    /// A JSON body conforming to `schema`.
    Json { name: &'static str, schema: Value },
}

/// A single-turn request to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub prompt: String,
    pub format: OutputFormat,
}

/// Anything able to answer a [`ProviderRequest`] with a raw body.
///
/// Implementations must be stateless per call; the adapter invokes them
/// concurrently without coordination.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn complete(&self, request: &ProviderRequest) -> Result<String, LLMError>;
}

#[async_trait]
impl<G: Generator + ?Sized> Generator for Arc<G> {
    async fn complete(&self, request: &ProviderRequest) -> Result<String, LLMError> {
        (**self).complete(request).await
    }
}

/// API credential passed through to the provider untouched.
#[derive(Clone, Default)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Reads the credential from `var`. A missing variable yields an empty
    /// credential; the provider rejects it on first use.
    pub fn from_env(var: &str) -> Self {
        match std::env::var(var) {
            Ok(secret) => Self(secret),
            Err(_) => {
                tracing::warn!(env = var, "API key env var not set; generation calls will fail");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}

/// Everything needed to build an `llm` provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub backend: String,
    pub model: String,
    pub credential: Credential,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// [`Generator`] backed by a hosted model through the `llm` crate.
#[derive(Debug, Clone)]
pub struct LlmGenerator {
    settings: ProviderSettings,
}

impl LlmGenerator {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn build(&self, format: &OutputFormat) -> Result<Box<dyn LLMProvider>, LLMError> {
        let backend = LLMBackend::from_str(&self.settings.backend)?;
        let mut builder = LLMBuilder::new()
            .backend(backend)
            .model(&self.settings.model)
            .api_key(self.settings.credential.expose());

        if let Some(base_url) = &self.settings.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(timeout) = self.settings.timeout_seconds {
            builder = builder.timeout_seconds(timeout);
        }
        if let OutputFormat::Json { name, schema } = format {
            let structured: StructuredOutputFormat =
                serde_json::from_value(json!({ "name": name, "schema": schema }))
                    .map_err(|e| LLMError::InvalidRequest(e.to_string()))?;
            builder = builder.schema(structured);
        }

        builder.build()
    }
}

#[async_trait]
impl Generator for LlmGenerator {
    async fn complete(&self, request: &ProviderRequest) -> Result<String, LLMError> {
        let llm = self.build(&request.format)?;
        tracing::debug!(
            backend = %self.settings.backend,
            model = %self.settings.model,
            structured = matches!(request.format, OutputFormat::Json { .. }),
            "sending generation request"
        );

        let messages = vec![ChatMessage::user().content(&request.prompt).build()];
        let response = llm.chat(&messages).await?;
        Ok(response.text().unwrap_or_default())
    }
}
