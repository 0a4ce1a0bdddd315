//! Post model representing one entry in the portfolio/blog collection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a post. The set is closed; every per-category lookup below is
/// an exhaustive `match` so adding a variant is a compile error until all
/// call sites handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Self-directed projects and builds
    Effort,
    /// Roles and professional work
    Experience,
}

impl Category {
    /// Uppercase label used in tabs and tags.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Effort => "EFFORT",
            Self::Experience => "EXPERIENCE",
        }
    }

    /// ANSI escape for the category accent color in terminal output.
    pub fn accent(&self) -> &'static str {
        match self {
            Self::Effort => "\x1b[34m",      // blue
            Self::Experience => "\x1b[32m",  // green
        }
    }

    /// All variants, in display order.
    pub fn all() -> [Category; 2] {
        [Self::Effort, Self::Experience]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single post/project entry.
///
/// The collection is loaded once at startup and never mutated; `id` is only
/// unique within a category, so `(category, id)` is the global key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier, unique within the post's category
    pub id: u32,

    /// Post title
    pub title: String,

    /// One-line summary shown on the collapsed card
    pub short: String,

    /// Long-form body (plain text with light line markup)
    pub full: String,

    /// Category the post belongs to
    pub category: Category,

    /// Display tag, e.g. "EFFORT.001"
    pub tag: String,

    /// Display date; treated as an opaque string
    pub date: String,
}

impl Post {
    /// Create a post with required fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        short: impl Into<String>,
        full: impl Into<String>,
        category: Category,
        tag: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            short: short.into(),
            full: full.into(),
            category,
            tag: tag.into(),
            date: date.into(),
        }
    }

    /// Global key for this post.
    pub fn key(&self) -> (Category, u32) {
        (self.category, self.id)
    }
}
