//! Substring matcher and snippet extractor.
//!
//! Matching is case-insensitive containment, tested independently against a
//! post's title, short summary, and a punctuation-stripped version of its
//! body. A context snippet is produced only when the body is the sole place
//! the query appears.

use crate::models::Post;
use once_cell::sync::Lazy;
use regex::Regex;

/// Snippet window length in characters. The match is centered inside this
/// window; ellipsis markers are added on top when the window is interior.
pub const SNIPPET_LENGTH: usize = 90;

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s]|_").expect("Failed to compile non-word regex"));
static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// A post that matched a query, with an optional body context snippet.
///
/// `context_snippet` is `Some` iff the query was found in the normalized
/// body but in neither the title nor the short summary.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The matching post
    pub post: Post,

    /// Bounded context around the first body match
    pub context_snippet: Option<String>,
}

/// Normalize a post body for searching: drop non-word/non-space characters
/// (underscore included) and collapse whitespace runs to a single space.
pub fn normalize_body(text: &str) -> String {
    let stripped = NON_WORD_RE.replace_all(text, "");
    WHITESPACE_RE.replace_all(&stripped, " ").into_owned()
}

/// Search `posts` for `query`.
///
/// Empty or whitespace-only queries mean search is inactive and yield no
/// results. Input order is preserved; there is no ranking beyond inclusion,
/// and nothing here can fail — posts with empty fields simply never match.
pub fn search(posts: &[Post], query: &str) -> Vec<MatchResult> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let needle = trimmed.to_lowercase();

    posts
        .iter()
        .filter_map(|post| {
            let title_match = post.title.to_lowercase().contains(&needle);
            let short_match = post.short.to_lowercase().contains(&needle);
            let normalized = normalize_body(&post.full);
            let body_index = char_index_of(&normalized, &needle);

            if !title_match && !short_match && body_index.is_none() {
                return None;
            }

            // A title or summary hit already gives the reader context; the
            // snippet is only for matches buried in the body.
            let context_snippet = match body_index {
                Some(idx) if !title_match && !short_match => {
                    Some(extract_snippet(&normalized, idx, trimmed))
                }
                _ => None,
            };

            Some(MatchResult {
                post: post.clone(),
                context_snippet,
            })
        })
        .collect()
}

/// Character index of the first case-insensitive occurrence of
/// `needle_lower` (already lowercased) in `haystack`.
fn char_index_of(haystack: &str, needle_lower: &str) -> Option<usize> {
    let lower = haystack.to_lowercase();
    lower
        .find(needle_lower)
        .map(|byte_idx| lower[..byte_idx].chars().count())
}

/// Extract a fixed-length window around a match in a normalized body.
///
/// `match_index` is a character index into `normalized_body`. The window is
/// `SNIPPET_LENGTH` characters with the match centered; if the window runs
/// into the end of the text its start shifts left so it stays full length
/// where the text allows. `...` marks a truncated start or end. Pure: same
/// inputs, same snippet.
pub fn extract_snippet(normalized_body: &str, match_index: usize, query: &str) -> String {
    let chars: Vec<char> = normalized_body.chars().collect();
    let len = chars.len();
    let query_len = query.chars().count();

    let half = SNIPPET_LENGTH.saturating_sub(query_len) / 2;
    let mut start = match_index.saturating_sub(half).min(len);
    let end = (start + SNIPPET_LENGTH).min(len);
    if end == len {
        start = len.saturating_sub(SNIPPET_LENGTH);
    }

    let mut snippet: String = chars[start..end].iter().collect();
    if start > 0 {
        snippet = format!("...{}", snippet);
    }
    if end < len {
        snippet = format!("{}...", snippet);
    }
    snippet
}
