pub mod error;
pub mod fallback;
pub mod metrics;
pub mod model_call;
pub mod normalizer;
pub mod prompt;
pub mod providers;
pub mod titles;
pub mod transcription;

pub use error::GenerationError;
pub use prompt::PromptBuilder;
pub use titles::{TitleGenerator, TitleSuggestions};
pub use transcription::Transcriber;
