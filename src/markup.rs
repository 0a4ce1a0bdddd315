//! Light line-based markup for post bodies.
//!
//! A body is a sequence of non-blank lines. A line of the form
//! `[MARKER] Title: Description` is a styled list item; anything else is a
//! plain paragraph.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.+?)\]\s*(.*?):\s*(.*)").expect("Failed to compile list regex"));

/// One rendered block of a post body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A plain paragraph line
    Paragraph(String),

    /// A `[MARKER] Title: Description` list item
    ListItem {
        marker: String,
        title: String,
        description: String,
    },
}

/// Parse a post body into blocks. Blank lines are skipped.
pub fn parse(text: &str) -> Vec<Block> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match LIST_ITEM_RE.captures(line) {
            Some(caps) => Block::ListItem {
                marker: caps[1].to_string(),
                title: caps[2].to_string(),
                description: caps[3].to_string(),
            },
            None => Block::Paragraph(line.to_string()),
        })
        .collect()
}
