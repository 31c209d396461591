use super::metrics;
use super::providers::{GenerationParams, GenerativeProvider, InlineMedia, ProviderError};
use std::time::Instant;

/// Run one provider call and return its raw text, recording latency, token
/// usage and failures. A reply without text comes back as an empty string.
pub async fn invoke(
    provider: &dyn GenerativeProvider,
    operation: &'static str,
    prompt: &str,
    media: Option<&InlineMedia>,
    params: &GenerationParams,
) -> Result<String, ProviderError> {
    let start = Instant::now();
    let result = provider.generate(prompt, media, params).await;
    let elapsed = start.elapsed().as_secs_f64();

    metrics::record_provider_latency(provider.name(), provider.model(), elapsed);

    match result {
        Ok(response) => {
            metrics::record_tokens(
                provider.model(),
                response.input_tokens,
                response.output_tokens,
            );
            tracing::info!(
                operation,
                provider = provider.name(),
                model = provider.model(),
                elapsed_ms = (elapsed * 1000.0) as u64,
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                finish_reason = ?response.finish_reason,
                "Model call completed"
            );
            Ok(response.into_text())
        }
        Err(e) => {
            metrics::record_provider_error(provider.name(), e.kind());
            tracing::warn!(
                operation,
                provider = provider.name(),
                model = provider.model(),
                elapsed_ms = (elapsed * 1000.0) as u64,
                error = %e,
                "Model call failed"
            );
            Err(e)
        }
    }
}
