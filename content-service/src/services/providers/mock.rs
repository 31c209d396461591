//! Scripted provider for tests and local runs without credentials.

use super::{
    FinishReason, GenerationParams, GenerativeProvider, InlineMedia, ProviderError,
    ProviderResponse,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum Script {
    Reply(Option<String>),
    Fail(ProviderError),
}

/// Mock provider returning a fixed reply (or failure) and recording calls.
#[derive(Debug)]
pub struct MockProvider {
    script: Script,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_media_type: Mutex<Option<String>>,
}

impl MockProvider {
    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_media_type: Mutex::new(None),
        }
    }

    /// Always reply with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_script(Script::Reply(Some(text.into())))
    }

    /// Reply successfully but with no text part at all.
    pub fn silent() -> Self {
        Self::with_script(Script::Reply(None))
    }

    /// Always fail with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self::with_script(Script::Fail(error))
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }

    pub fn last_media_type(&self) -> Option<String> {
        self.last_media_type.lock().ok().and_then(|m| m.clone())
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn generate(
        &self,
        prompt: &str,
        media: Option<&InlineMedia>,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        if let Ok(mut last) = self.last_media_type.lock() {
            *last = media.map(|m| m.mime_type.clone());
        }

        match &self.script {
            Script::Reply(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.as_ref().map(|t| t.len() as i32 / 4).unwrap_or(0),
                finish_reason: FinishReason::Complete,
            }),
            Script::Fail(error) => Err(error.clone()),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.script {
            Script::Fail(ProviderError::NotConfigured(msg)) => {
                Err(ProviderError::NotConfigured(msg.clone()))
            }
            _ => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}
