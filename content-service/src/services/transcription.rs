use super::error::GenerationError;
use super::metrics;
use super::model_call;
use super::normalizer::parse_transcript;
use super::prompt::PromptBuilder;
use super::providers::{GenerationParams, GenerativeProvider, InlineMedia};
use crate::models::TranscriptResult;
use std::sync::Arc;

/// MIME prefix accepted for uploads.
pub const AUDIO_MIME_PREFIX: &str = "audio/";

/// Diarized transcription of uploaded audio.
///
/// Unlike titles, nothing is synthesized here: a failed call or an unusable
/// reply is returned as an error rather than inventing speech.
#[derive(Clone)]
pub struct Transcriber {
    provider: Arc<dyn GenerativeProvider>,
}

impl Transcriber {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    pub fn is_audio_mime(mime_type: &str) -> bool {
        mime_type.starts_with(AUDIO_MIME_PREFIX)
    }

    pub async fn transcribe(&self, audio: InlineMedia) -> Result<TranscriptResult, GenerationError> {
        let prompt = PromptBuilder::transcription();
        let params = GenerationParams {
            temperature: Some(0.0),
            json_output: true,
            ..Default::default()
        };

        let result = async {
            let raw = model_call::invoke(
                self.provider.as_ref(),
                "transcribe",
                &prompt,
                Some(&audio),
                &params,
            )
            .await?;
            Ok::<_, GenerationError>(parse_transcript(&raw)?)
        }
        .await;

        match &result {
            Ok(transcript) => {
                metrics::record_transcription("ok");
                tracing::info!(
                    segments = transcript.diarization.len(),
                    transcript_len = transcript.full_transcript.len(),
                    "Transcription ready"
                );
            }
            Err(GenerationError::ModelUnavailable(_)) => {
                metrics::record_transcription("model_unavailable")
            }
            Err(GenerationError::UnparsableResponse(_)) => {
                metrics::record_transcription("unparsable")
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::{MockProvider, ProviderError};

    fn audio() -> InlineMedia {
        InlineMedia {
            mime_type: "audio/mpeg".to_string(),
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn only_audio_mime_types_are_accepted() {
        assert!(Transcriber::is_audio_mime("audio/wav"));
        assert!(Transcriber::is_audio_mime("audio/mpeg"));
        assert!(!Transcriber::is_audio_mime("image/png"));
        assert!(!Transcriber::is_audio_mime("video/mp4"));
    }

    #[tokio::test]
    async fn valid_reply_is_returned() {
        let provider = Arc::new(MockProvider::replying(
            r#"{"full_transcript": "Hi.", "diarization": [
                {"speaker": "Speaker A", "start_time": 0.0, "end_time": 0.8, "transcript": "Hi."}
            ]}"#,
        ));
        let transcriber = Transcriber::new(provider.clone());

        let transcript = transcriber.transcribe(audio()).await.unwrap();

        assert_eq!(transcript.full_transcript, "Hi.");
        assert_eq!(transcript.diarization.len(), 1);
        assert_eq!(provider.last_media_type().as_deref(), Some("audio/mpeg"));
    }

    #[tokio::test]
    async fn unparsable_reply_is_an_error() {
        let transcriber = Transcriber::new(Arc::new(MockProvider::replying("I heard two people.")));

        let result = transcriber.transcribe(audio()).await;

        assert!(matches!(result, Err(GenerationError::UnparsableResponse(_))));
    }

    #[tokio::test]
    async fn model_failure_is_not_masked() {
        let transcriber =
            Transcriber::new(Arc::new(MockProvider::failing(ProviderError::RateLimited)));

        let result = transcriber.transcribe(audio()).await;

        assert!(matches!(
            result,
            Err(GenerationError::ModelUnavailable(ProviderError::RateLimited))
        ));
    }
}
