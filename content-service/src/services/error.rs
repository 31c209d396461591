use super::normalizer::NormalizeError;
use super::providers::ProviderError;
use service_core::error::AppError;
use thiserror::Error;

/// Failure of a generation request after validation passed.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(#[from] ProviderError),

    #[error("{0}")]
    UnparsableResponse(#[from] NormalizeError),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::ModelUnavailable(ProviderError::RateLimited) => {
                AppError::ServiceUnavailable("Model provider is rate limiting requests".to_string())
            }
            GenerationError::ModelUnavailable(e) => AppError::BadGateway(e.to_string()),
            GenerationError::UnparsableResponse(e) => AppError::BadGateway(e.to_string()),
        }
    }
}
