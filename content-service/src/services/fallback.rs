//! Model-independent title synthesis.
//!
//! Used when the model call itself fails. Titles are derived from keywords in
//! the submitted content only, so this path is deterministic and cannot fail.

use crate::models::{Placeholder, TitleSet};

/// Tokens scanned from the start of the content.
const SCAN_LIMIT: usize = 20;

const KEYWORDS: [&str; 19] = [
    "ai",
    "artificial",
    "intelligence",
    "machine",
    "learning",
    "technology",
    "business",
    "marketing",
    "social",
    "media",
    "health",
    "routine",
    "productivity",
    "success",
    "tips",
    "guide",
    "strategy",
    "future",
    "innovation",
];

const DEFAULT_TOPICS: [&str; 3] = ["Success", "Guide", "Tips"];

/// The first three are the canonical fallback set; the rest only appear when
/// more than three titles are requested.
const TEMPLATES: [&str; 5] = [
    "The Ultimate Guide to {topic} and Growth",
    "How to Master {topic}: A Complete Strategy",
    "Transform Your Approach to {topic} Today",
    "{topic} Essentials: What Actually Works",
    "Why {topic} Matters More Than Ever",
];

/// Keywords found in the first [`SCAN_LIMIT`] tokens, title-cased, in order of
/// occurrence.
pub fn extract_topics(content: &str) -> Vec<String> {
    content
        .to_lowercase()
        .split_whitespace()
        .take(SCAN_LIMIT)
        .map(|word| word.trim_end_matches(['.', ',', '!', '?']))
        .filter(|word| KEYWORDS.contains(word))
        .map(title_case)
        .collect()
}

/// Build `count` titles around the first topic found in `content`.
pub fn synthesize_titles(content: &str, count: usize) -> TitleSet {
    let topics = extract_topics(content);
    let topic = topics
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_TOPICS[0]);

    let titles = TEMPLATES
        .iter()
        .map(|template| template.replace("{topic}", topic));

    TitleSet::with_arity(titles, count, Placeholder::GeneratedTitle)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
