//! Turns typed generation requests into provider calls and typed results.

use futures::future;

use super::error::GenerationError;
use super::generator::{
    Credential, Generator, LlmGenerator, OutputFormat, ProviderRequest, ProviderSettings,
};
use super::prompt::{scenario_prompt, snippet_prompt};
use super::scenario::{parse_scenarios, scenario_schema, Scenario};
use crate::catalog::LayerKind;
use crate::core::config::Config;

/// Text returned in place of a snippet when generation fails.
pub const FALLBACK_MESSAGE: &str =
    "Error generating content. Please check your connection and API key.";

/// Request for an illustrative code snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRequest {
    pub layer: LayerKind,
    pub description: String,
}

impl SnippetRequest {
    pub fn new(layer: LayerKind, description: impl Into<String>) -> Self {
        Self {
            layer,
            description: description.into(),
        }
    }
}

/// Request for business scenarios about a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioRequest {
    pub feature: String,
}

impl ScenarioRequest {
    pub fn new(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
        }
    }
}

/// Outcome of a snippet generation. Always carries displayable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snippet {
    /// The provider's text, unmodified.
    Generated(String),
    /// Generation failed; the text is [`FALLBACK_MESSAGE`].
    Fallback(String),
}

impl Snippet {
    fn fallback() -> Self {
        Snippet::Fallback(FALLBACK_MESSAGE.to_string())
    }

    pub fn text(&self) -> &str {
        match self {
            Snippet::Generated(text) | Snippet::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Snippet::Generated(text) | Snippet::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Snippet::Fallback(_))
    }
}

impl std::fmt::Display for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// The only component that talks to the provider.
///
/// Holds no per-call state, so the same adapter can serve any number of
/// concurrent requests.
pub struct GenerationAdapter {
    generator: Box<dyn Generator>,
}

impl GenerationAdapter {
    pub fn new(generator: Box<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Builds an adapter over the configured `llm` backend, reading the
    /// credential from the environment once.
    pub fn from_config(config: &Config) -> Self {
        let provider = &config.provider;
        let settings = ProviderSettings {
            backend: provider.backend.clone(),
            model: provider.model.clone(),
            credential: Credential::from_env(&provider.api_key_env),
            base_url: provider.base_url.clone(),
            timeout_seconds: provider.timeout_seconds,
        };
        Self::new(Box::new(LlmGenerator::new(settings)))
    }

    /// Generates a code snippet for the requested layer.
    ///
    /// Never fails: any provider error is logged and replaced by
    /// [`Snippet::Fallback`].
    pub async fn generate_snippet(&self, request: &SnippetRequest) -> Snippet {
        let prompt = snippet_prompt(request.layer, &request.description);
        tracing::debug!(layer = %request.layer, %prompt, "generating snippet");

        let call = ProviderRequest {
            prompt,
            format: OutputFormat::Text,
        };
        match self.generator.complete(&call).await {
            Ok(text) => Snippet::Generated(text),
            Err(e) => {
                tracing::error!(error = %e, layer = %request.layer, "snippet generation failed");
                Snippet::fallback()
            }
        }
    }

    /// Generates one snippet per layer concurrently, in `LayerKind::ALL` order.
    pub async fn generate_snippets_for_all_layers(
        &self,
        description: &str,
    ) -> Vec<(LayerKind, Snippet)> {
        let requests: Vec<SnippetRequest> = LayerKind::ALL
            .into_iter()
            .map(|layer| SnippetRequest::new(layer, description))
            .collect();
        let snippets = future::join_all(requests.iter().map(|r| self.generate_snippet(r))).await;
        LayerKind::ALL.into_iter().zip(snippets).collect()
    }

    /// Generates titled scenarios for a feature, validated against the
    /// scenario schema before they are returned.
    pub async fn generate_scenarios(
        &self,
        request: &ScenarioRequest,
    ) -> Result<Vec<Scenario>, GenerationError> {
        let prompt = scenario_prompt(&request.feature);
        tracing::debug!(feature = %request.feature, %prompt, "generating scenarios");

        let call = ProviderRequest {
            prompt,
            format: OutputFormat::Json {
                name: "scenarios",
                schema: scenario_schema(),
            },
        };
        let body = self.generator.complete(&call).await?;

        parse_scenarios(body.as_bytes()).map_err(|e| {
            tracing::warn!(error = %e, feature = %request.feature, "scenario response rejected");
            GenerationError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use llm::error::LLMError;
    use std::sync::{Arc, Mutex};

    /// Records every request and answers with a fixed body.
    struct Recording {
        body: String,
        seen: Mutex<Vec<ProviderRequest>>,
    }

    impl Recording {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Generator for Recording {
        async fn complete(&self, request: &ProviderRequest) -> Result<String, LLMError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.body.clone())
        }
    }

    struct Failing;

    #[async_trait]
    impl Generator for Failing {
        async fn complete(&self, _request: &ProviderRequest) -> Result<String, LLMError> {
            Err(LLMError::HttpError("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn snippet_requests_plain_text() {
        let recording = Arc::new(Recording::new("public class LoginPage {}"));
        let adapter = GenerationAdapter::new(Box::new(recording.clone()));

        let snippet = adapter
            .generate_snippet(&SnippetRequest::new(LayerKind::Page, "login page"))
            .await;

        assert_eq!(snippet, Snippet::Generated("public class LoginPage {}".to_string()));
        let seen = recording.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].format, OutputFormat::Text);
        assert!(seen[0].prompt.contains("Page Object Layer"));
    }

    #[tokio::test]
    async fn scenarios_request_carries_the_schema() {
        let recording = Arc::new(Recording::new("[]"));
        let adapter = GenerationAdapter::new(Box::new(recording.clone()));

        let scenarios = adapter
            .generate_scenarios(&ScenarioRequest::new("Checkout"))
            .await
            .unwrap();

        assert!(scenarios.is_empty());
        let seen = recording.seen.lock().unwrap();
        match &seen[0].format {
            OutputFormat::Json { schema, .. } => assert_eq!(schema, &scenario_schema()),
            other => panic!("expected a JSON request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn provider_failure_becomes_fallback() {
        let adapter = GenerationAdapter::new(Box::new(Failing));
        let snippet = adapter
            .generate_snippet(&SnippetRequest::new(LayerKind::Business, "checkout"))
            .await;
        assert!(snippet.is_fallback());
        assert_eq!(snippet.text(), FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn provider_failure_surfaces_for_scenarios() {
        let adapter = GenerationAdapter::new(Box::new(Failing));
        let err = adapter
            .generate_scenarios(&ScenarioRequest::new("Checkout"))
            .await
            .unwrap_err();
        assert!(err.is_provider());
    }

    #[tokio::test]
    async fn all_layers_come_back_in_order() {
        let adapter = GenerationAdapter::new(Box::new(Recording::new("code")));
        let snippets = adapter.generate_snippets_for_all_layers("search results").await;
        let kinds: Vec<LayerKind> = snippets.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, LayerKind::ALL.to_vec());
        assert!(snippets.iter().all(|(_, s)| !s.is_fallback()));
    }
}
