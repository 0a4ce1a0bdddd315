//! Match highlighting.
//!
//! Splits text into alternating matched/unmatched segments for a query so a
//! renderer can mark the hits. The query is escaped before the pattern is
//! built, so arbitrary user input can never produce an invalid or unintended
//! pattern.

use regex::Regex;

/// One run of text, flagged if it matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The run's text, original casing preserved
    pub text: String,

    /// Whether this run matched the query
    pub is_match: bool,
}

impl Segment {
    fn new(text: impl Into<String>, is_match: bool) -> Self {
        Self {
            text: text.into(),
            is_match,
        }
    }
}

/// Split `text` into segments around case-insensitive occurrences of
/// `query`.
///
/// An empty/whitespace query or empty text yields the whole text as a single
/// non-match segment. Concatenating the returned segments always reproduces
/// `text` exactly: every character lands in exactly one segment.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let trimmed = query.trim();
    if trimmed.is_empty() || text.is_empty() {
        return vec![Segment::new(text, false)];
    }

    let pattern = format!("(?i){}", regex::escape(trimmed));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        // Escaped literals only fail on pathological pattern sizes; treat
        // the whole text as unmatched rather than erroring.
        Err(_) => return vec![Segment::new(text, false)],
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for m in re.find_iter(text) {
        if m.start() > cursor {
            segments.push(Segment::new(&text[cursor..m.start()], false));
        }
        segments.push(Segment::new(m.as_str(), true));
        cursor = m.end();
    }
    if cursor < text.len() {
        segments.push(Segment::new(&text[cursor..], false));
    }

    segments
}
