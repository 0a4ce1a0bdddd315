//! Application state machine.
//!
//! The whole UI model is a single-threaded pure reducer: discrete events
//! mutate `AppState` and each event runs to completion before the next is
//! applied. There is no terminal state; the machine is live for the process
//! lifetime.

use crate::models::Category;

/// Active content filter. Closed set: all, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(Category),
}

impl Filter {
    /// Whether a post of `category` is visible under this filter.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => *c == category,
        }
    }

    /// Tab label, e.g. `[ALL]`.
    pub fn label(&self) -> String {
        match self {
            Self::All => "[ALL]".to_string(),
            Self::Category(c) => format!("[{}]", c.display_name()),
        }
    }

    /// All tabs in display order.
    pub fn tabs() -> Vec<Filter> {
        let mut tabs = vec![Self::All];
        tabs.extend(Category::all().into_iter().map(Self::Category));
        tabs
    }
}

/// Global key of a post: `(category, id)`.
pub type PostKey = (Category, u32);

/// Events the reducer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A tab was selected
    FilterSelected(Filter),

    /// A post card was clicked (toggles expansion)
    CardToggled(PostKey),

    /// The live highlight query changed (synced from the palette)
    HighlightChanged(String),

    /// The command palette was opened or closed
    PaletteVisibility(bool),
}

/// Top-level UI state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Active filter tab
    pub filter: Filter,

    /// Currently expanded post, if any
    pub expanded: Option<PostKey>,

    /// Query used for in-card highlighting
    pub highlight_query: String,

    /// Whether the command palette overlay is visible
    pub palette_open: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            filter: Filter::All,
            expanded: None,
            highlight_query: String::new(),
            palette_open: false,
        }
    }

    /// Apply one event. Runs to completion; no event can fail.
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::FilterSelected(filter) => {
                self.filter = filter;
                // Switching tabs abandons the expanded card and any search
                self.expanded = None;
                self.highlight_query.clear();
            }
            AppEvent::CardToggled(key) => {
                self.expanded = if self.expanded == Some(key) {
                    None
                } else {
                    Some(key)
                };
            }
            AppEvent::HighlightChanged(query) => {
                self.highlight_query = query;
            }
            AppEvent::PaletteVisibility(open) => {
                self.palette_open = open;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
