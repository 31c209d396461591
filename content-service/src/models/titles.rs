use serde::Serialize;

/// Prefix for synthetic titles used to fill a short result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Padding after a successful JSON parse.
    GeneratedTitle,
    /// Padding after line-based recovery.
    BlogPostTitle,
}

impl Placeholder {
    pub fn title(self, position: usize) -> String {
        match self {
            Placeholder::GeneratedTitle => format!("Generated Title {}", position),
            Placeholder::BlogPostTitle => format!("Blog Post Title {}", position),
        }
    }
}

/// Exactly N titles, in order.
///
/// The only constructor is [`TitleSet::with_arity`], so every path that
/// produces titles goes through the same truncate-or-pad step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TitleSet(Vec<String>);

impl TitleSet {
    /// Keep the first `count` candidates, padding with numbered placeholders
    /// (1-based position) when fewer are available.
    pub fn with_arity<I>(candidates: I, count: usize, placeholder: Placeholder) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut titles: Vec<String> = candidates.into_iter().take(count).collect();
        while titles.len() < count {
            titles.push(placeholder.title(titles.len() + 1));
        }
        Self(titles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Which path produced a title set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// The reply parsed as a JSON array.
    Parsed,
    /// The reply was not JSON; titles were read line by line.
    LineRecovered,
    /// The model call failed; titles were built from the input content.
    Synthesized,
}

impl TitleSource {
    pub fn as_str(self) -> &'static str {
        match self {
            TitleSource::Parsed => "parsed",
            TitleSource::LineRecovered => "line_recovered",
            TitleSource::Synthesized => "synthesized",
        }
    }
}
