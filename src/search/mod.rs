//! In-memory search and match engine.
//!
//! Case-insensitive substring search over the post collection, with bounded
//! context snippets for matches that only occur in long-form bodies.

mod engine;

pub use engine::{extract_snippet, normalize_body, search, MatchResult, SNIPPET_LENGTH};
