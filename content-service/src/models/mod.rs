//! Domain models for the content service.

pub mod titles;
pub mod transcript;

pub use titles::{Placeholder, TitleSet, TitleSource};
pub use transcript::{SpeakerTurn, TranscriptResult};
