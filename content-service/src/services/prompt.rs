//! Instruction text sent to the model.
//!
//! Output-format constraints are stated as natural-language rules; the
//! normalizer downstream does not trust the model to follow them.

/// Builds prompts. Pure and infallible.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Prompt asking for exactly `count` blog titles as a bare JSON array.
    pub fn titles(content: &str, count: usize) -> String {
        let example = (1..=count)
            .map(|i| format!("\"Title {}\"", i))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"You are an expert copywriter specializing in compelling, SEO-friendly blog post titles.
Based on the content below, generate exactly {count} unique title suggestions.

Requirements:
- Titles should be 8-12 words long
- Make them engaging and clickable
- Use powerful action words
- Include the main topic/benefit
- NO generic phrases like "Blog Post About" or "Insights on"

Content:
---
{content}
---

Your output MUST be a single, valid JSON array of exactly {count} strings and nothing else.
Do not include any explanations, numbering, or markdown.
Example: [{example}]

JSON Array:"#
        )
    }

    /// Prompt asking for a diarized transcript of the attached audio as a
    /// single JSON object with a fixed schema.
    pub fn transcription() -> String {
        format!(
            r#"You are an expert audio transcription and diarization system.
Transcribe the provided audio file. Identify each distinct speaker and label them sequentially as "{first}", "{second}", etc., in order of first appearance.
Provide the start and end timestamps in seconds for each speaker's segment, in chronological order.
Your output MUST be a single, valid JSON object and nothing else.
The JSON object must conform to this exact structure:
{{
    "full_transcript": "The complete transcription of the audio as a single string.",
    "diarization": [
        {{
            "speaker": "{first}",
            "start_time": 0.00,
            "end_time": 10.52,
            "transcript": "The text spoken by {first} in this segment."
        }}
    ]
}}"#,
            first = speaker_label(0),
            second = speaker_label(1),
        )
    }
}

/// Sequential speaker label: 0 → "Speaker A", 25 → "Speaker Z", 26 → "Speaker AA".
pub fn speaker_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.reverse();
    format!("Speaker {}", letters.into_iter().collect::<String>())
}
