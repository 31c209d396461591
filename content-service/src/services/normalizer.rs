//! Turns raw model text into validated titles or transcripts.
//!
//! Each extraction strategy is a separate function returning `Option`, tried
//! in order:
//!
//! 1. [`strip_fence`] removes a surrounding ```` ``` ```` / ```` ```json ```` fence.
//! 2. [`slice_between`] cuts from the first opening bracket to the last closing one.
//! 3. The slice is parsed strictly; failing that, the whole cleaned text is.
//! 4. Titles only: [`recover_titles_from_lines`] reads a plain-text list.
//!
//! All title paths end in [`TitleSet::with_arity`], so the result always has
//! exactly the requested length. Transcripts have no line recovery; a reply
//! that does not match the schema is an error.

use crate::models::{Placeholder, TitleSet, TitleSource, TranscriptResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

const FENCE: &str = "```";
const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Model reply could not be parsed: {0}")]
    UnparsableResponse(String),
}

/// Strip a leading and trailing code fence (optionally tagged `json`) and trim.
pub fn strip_fence(text: &str) -> &str {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix(FENCE) {
        cleaned = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
    }
    if let Some(rest) = cleaned.strip_suffix(FENCE) {
        cleaned = rest;
    }

    cleaned.trim()
}

/// Substring from the first `open` to the last `close`, inclusive.
pub fn slice_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

/// Parse the bracketed slice, then the whole text, as `T`.
fn parse_candidates<T: DeserializeOwned>(cleaned: &str, open: char, close: char) -> Option<T> {
    slice_between(cleaned, open, close)
        .and_then(|slice| serde_json::from_str(slice).ok())
        .or_else(|| serde_json::from_str(cleaned).ok())
}

/// Trim whitespace, commas and quotes from both ends until nothing changes.
pub fn clean_title(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '"' | '\''))
        .to_string()
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Strict path: the reply must contain a JSON array.
///
/// Returns `None` when no array could be parsed, which hands over to line
/// recovery.
pub fn parse_title_array(text: &str, count: usize) -> Option<TitleSet> {
    let cleaned = strip_fence(text);
    let items = match parse_candidates::<Value>(cleaned, '[', ']')? {
        Value::Array(items) => items,
        _ => return None,
    };

    let titles = items
        .iter()
        .map(|item| clean_title(&value_to_text(item)))
        .filter(|title| !title.is_empty());

    Some(TitleSet::with_arity(titles, count, Placeholder::GeneratedTitle))
}

/// Numbered prefixes the model tends to add despite instructions.
const ENUMERATORS: [&str; 3] = ["1. ", "2. ", "3. "];

/// Read titles from a plain-text reply, one per line.
pub fn recover_titles_from_lines(text: &str, count: usize) -> TitleSet {
    let cleaned = strip_fence(text);

    let titles = cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('[') && !line.starts_with(']'))
        .map(|line| {
            let unquoted: String = line.chars().filter(|c| !matches!(c, '"' | '\'')).collect();
            let unbulleted = unquoted.strip_prefix("- ").unwrap_or(&unquoted);
            let plain = ENUMERATORS
                .iter()
                .find_map(|prefix| unbulleted.strip_prefix(prefix))
                .unwrap_or(unbulleted);
            clean_title(plain)
        })
        .filter(|title| !title.is_empty());

    TitleSet::with_arity(titles, count, Placeholder::BlogPostTitle)
}

/// Normalize a title reply. Never fails.
pub fn normalize_titles(text: &str, count: usize) -> (TitleSet, TitleSource) {
    match parse_title_array(text, count) {
        Some(titles) => (titles, TitleSource::Parsed),
        None => {
            tracing::warn!(
                raw_len = text.len(),
                raw_preview = %preview(text),
                "Model reply is not a JSON array, recovering titles line by line"
            );
            (
                recover_titles_from_lines(text, count),
                TitleSource::LineRecovered,
            )
        }
    }
}

/// Normalize a transcription reply into the fixed schema.
pub fn parse_transcript(text: &str) -> Result<TranscriptResult, NormalizeError> {
    let cleaned = strip_fence(text);

    let transcript: TranscriptResult = parse_candidates(cleaned, '{', '}').ok_or_else(|| {
        tracing::error!(
            raw_len = text.len(),
            raw_preview = %preview(text),
            "Model reply does not match the transcript schema"
        );
        NormalizeError::UnparsableResponse(
            "expected a JSON object with full_transcript and diarization".to_string(),
        )
    })?;

    if let Some((index, _)) = transcript
        .diarization
        .iter()
        .enumerate()
        .find(|(_, turn)| !turn.has_valid_times())
    {
        return Err(NormalizeError::UnparsableResponse(format!(
            "diarization segment {} has a negative or non-finite timestamp",
            index
        )));
    }

    for (index, turn) in transcript.diarization.iter().enumerate() {
        if !turn.is_ordered() {
            tracing::warn!(
                segment = index,
                speaker = %turn.speaker,
                start_time = turn.start_time,
                end_time = turn.end_time,
                "Diarization segment ends before it starts"
            );
        }
    }

    Ok(transcript)
}

/// Single-line, length-capped view of a model reply for logs.
fn preview(text: &str) -> String {
    let flat = text.trim().replace('\n', "\\n");
    match flat.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}... ({} chars total)", &flat[..cut], flat.chars().count()),
        None if flat.is_empty() => "[EMPTY]".to_string(),
        None => flat,
    }
}
