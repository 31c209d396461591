//! HTTP handlers for the content service.

pub mod health;
pub mod titles;
pub mod transcription;

pub use health::{health_check, metrics, readiness_check, root};
pub use titles::suggest_titles;
pub use transcription::transcribe;
