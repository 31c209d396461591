//! Generative model abstractions and implementations.
//!
//! Everything above this module sees the model as a single capability:
//! "given a prompt and optional media, return raw text or fail".

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use mock::MockProvider;

/// Error type for provider operations.
///
/// Every variant means the model was unavailable for this request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    Network(String),
}

impl ProviderError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::Api(_) => "api",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::ContentFiltered => "content_filtered",
            ProviderError::Network(_) => "network",
        }
    }
}

/// Binary media sent alongside the prompt, e.g. an uploaded audio file.
#[derive(Debug, Clone)]
pub struct InlineMedia {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Generation parameters for a model request.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    pub temperature: Option<f32>,
    /// Ask the model to emit `application/json`.
    pub json_output: bool,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    Other,
}

/// Raw model reply.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Text output; `None` when the reply carried no text part.
    pub text: Option<String>,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub finish_reason: FinishReason,
}

impl ProviderResponse {
    /// The reply text, or an empty string when the model sent none.
    pub fn into_text(self) -> String {
        self.text.unwrap_or_default()
    }
}

#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Run one prompt, optionally with attached media.
    async fn generate(
        &self,
        prompt: &str,
        media: Option<&InlineMedia>,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;

    /// Provider name for logs and metrics.
    fn name(&self) -> &'static str;

    /// Model identifier for logs and metrics.
    fn model(&self) -> &str;
}
