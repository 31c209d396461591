use serde::{Deserialize, Serialize};

/// One labelled speaker segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerTurn {
    pub speaker: String,
    pub start_time: f64,
    pub end_time: f64,
    pub transcript: String,
}

impl SpeakerTurn {
    /// Both bounds are finite and non-negative.
    pub fn has_valid_times(&self) -> bool {
        self.start_time.is_finite()
            && self.end_time.is_finite()
            && self.start_time >= 0.0
            && self.end_time >= 0.0
    }

    pub fn is_ordered(&self) -> bool {
        self.end_time >= self.start_time
    }
}

/// Full transcript plus diarization, in the order the model emitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    pub full_transcript: String,
    pub diarization: Vec<SpeakerTurn>,
}
