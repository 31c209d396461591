use super::fallback::synthesize_titles;
use super::model_call;
use super::normalizer::normalize_titles;
use super::prompt::PromptBuilder;
use super::providers::{GenerationParams, GenerativeProvider};
use super::metrics;
use crate::models::{TitleSet, TitleSource};
use std::sync::Arc;

/// Titles plus the path that produced them.
#[derive(Debug, Clone)]
pub struct TitleSuggestions {
    pub titles: TitleSet,
    pub source: TitleSource,
}

/// Blog title suggestions.
///
/// Never fails once given non-empty content: an unusable reply is recovered
/// line by line and a failed model call falls back to keyword synthesis.
#[derive(Clone)]
pub struct TitleGenerator {
    provider: Arc<dyn GenerativeProvider>,
}

impl TitleGenerator {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    pub async fn suggest(&self, content: &str, count: usize) -> TitleSuggestions {
        let prompt = PromptBuilder::titles(content, count);
        let params = GenerationParams {
            temperature: Some(0.8),
            json_output: true,
            ..Default::default()
        };

        let (titles, source) = match model_call::invoke(
            self.provider.as_ref(),
            "suggest_titles",
            &prompt,
            None,
            &params,
        )
        .await
        {
            Ok(raw) => normalize_titles(&raw, count),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Model unavailable, synthesizing titles from content"
                );
                (synthesize_titles(content, count), TitleSource::Synthesized)
            }
        };

        metrics::record_title_suggestion(source.as_str());
        tracing::info!(
            count = titles.len(),
            source = source.as_str(),
            "Title suggestions ready"
        );

        TitleSuggestions { titles, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::{MockProvider, ProviderError};

    #[tokio::test]
    async fn parsed_reply_is_used() {
        let provider = Arc::new(MockProvider::replying(r#"["A", "B", "C", "D"]"#));
        let generator = TitleGenerator::new(provider.clone());

        let result = generator.suggest("Some content", 3).await;

        assert_eq!(result.source, TitleSource::Parsed);
        assert_eq!(result.titles.as_slice(), ["A", "B", "C"]);
        assert_eq!(provider.calls(), 1);
        assert!(provider
            .last_prompt()
            .is_some_and(|p| p.contains("Some content")));
    }

    #[tokio::test]
    async fn model_failure_synthesizes_titles() {
        let provider = Arc::new(MockProvider::failing(ProviderError::Network(
            "connection refused".to_string(),
        )));
        let generator = TitleGenerator::new(provider);

        let content = "AI productivity tips for remote teams";
        let first = generator.suggest(content, 3).await;
        let second = generator.suggest(content, 3).await;

        assert_eq!(first.source, TitleSource::Synthesized);
        assert_eq!(first.titles.len(), 3);
        assert!(first.titles.as_slice().iter().all(|t| !t.is_empty()));
        assert_eq!(first.titles, second.titles);
    }

    #[tokio::test]
    async fn silent_model_yields_placeholders() {
        let generator = TitleGenerator::new(Arc::new(MockProvider::silent()));

        let result = generator.suggest("Some content", 3).await;

        assert_eq!(result.source, TitleSource::LineRecovered);
        assert_eq!(
            result.titles.as_slice(),
            ["Blog Post Title 1", "Blog Post Title 2", "Blog Post Title 3"]
        );
    }
}
