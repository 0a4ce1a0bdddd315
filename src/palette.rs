//! Command palette: quick actions plus post search, behind a keyboard-driven
//! selection cursor.
//!
//! Activation never invokes callbacks; Enter yields a [`Activation`] value
//! and the caller interprets it. That keeps the palette a pure state machine
//! that can be driven and tested without any UI attached.

use crate::models::Post;
use crate::search::{self, MatchResult};
use crate::state::{Filter, PostKey};

/// Keys the palette reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Ctrl+K / Cmd+K: toggle the palette
    ToggleShortcut,
    Escape,
    Up,
    Down,
    Enter,
}

/// Grouping shown next to a quick action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Filter,
}

impl ActionCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Filter => "Filter",
        }
    }
}

/// What activating an item asks the application to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetFilter(Filter),
    OpenUrl(String),
}

/// A quick action entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub id: &'static str,
    pub label: String,
    pub category: ActionCategory,
    pub command: Command,
}

/// One row in the palette list.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteItem {
    Action(Action),
    Post(MatchResult),
}

/// Result of pressing Enter.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// Run a quick action's command and close the palette
    Command(Command),

    /// Open this post, carrying the query for in-card highlighting
    Post { key: PostKey, query: String },
}

/// The built-in quick actions.
pub fn quick_actions() -> Vec<Action> {
    let mut actions: Vec<Action> = Filter::tabs()
        .into_iter()
        .map(|filter| {
            let (id, name) = match filter {
                Filter::All => ("filter-all", "ALL"),
                Filter::Category(crate::models::Category::Effort) => ("filter-effort", "EFFORT"),
                Filter::Category(crate::models::Category::Experience) => {
                    ("filter-experience", "EXPERIENCE")
                }
            };
            Action {
                id,
                label: format!("[Filter by: {}]", name),
                category: ActionCategory::Filter,
                command: Command::SetFilter(filter),
            }
        })
        .collect();

    actions.push(Action {
        id: "nav-x",
        label: "[Navigate to: X Profile]".to_string(),
        category: ActionCategory::Navigation,
        command: Command::OpenUrl("https://x.com/senkrov".to_string()),
    });

    actions
}

/// Build the combined item list for a query: quick actions whose label
/// contains the query (case-insensitive), followed by post search results.
/// With an empty query every action is listed and search is inactive.
pub fn build_items(posts: &[Post], query: &str) -> Vec<PaletteItem> {
    let needle = query.to_lowercase();
    let actions = quick_actions()
        .into_iter()
        .filter(|a| a.label.to_lowercase().contains(&needle))
        .map(PaletteItem::Action);

    let results = search::search(posts, query).into_iter().map(PaletteItem::Post);

    actions.chain(results).collect()
}

/// Palette overlay state: visibility, live query, selection cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteState {
    open: bool,
    query: String,
    active_index: usize,
}

impl PaletteState {
    pub fn new() -> Self {
        Self {
            open: false,
            query: String::new(),
            active_index: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and reset: the next open starts from a blank query.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.active_index = 0;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Update the live query. The item list it implies has changed, so the
    /// cursor resets to the top.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.active_index = 0;
    }

    /// Re-validate the cursor against the current item count. A list that
    /// shrank below the cursor resets it to 0 instead of indexing out of
    /// bounds.
    pub fn clamp_to(&mut self, item_count: usize) {
        if self.active_index >= item_count {
            self.active_index = 0;
        }
    }

    /// Handle a key against the current item list. Returns the activation
    /// when Enter selects an item.
    pub fn handle_key(&mut self, key: Key, items: &[PaletteItem]) -> Option<Activation> {
        if key == Key::ToggleShortcut {
            self.toggle();
            return None;
        }
        if !self.open {
            return None;
        }

        match key {
            Key::Escape => {
                self.close();
                None
            }
            Key::Down if !items.is_empty() => {
                self.active_index = (self.active_index + 1) % items.len();
                None
            }
            Key::Up if !items.is_empty() => {
                self.active_index = (self.active_index + items.len() - 1) % items.len();
                None
            }
            Key::Enter => {
                let activation = match items.get(self.active_index)? {
                    PaletteItem::Action(action) => Activation::Command(action.command.clone()),
                    PaletteItem::Post(result) => Activation::Post {
                        key: result.post.key(),
                        query: self.query.clone(),
                    },
                };
                if matches!(activation, Activation::Command(_)) {
                    self.close();
                }
                Some(activation)
            }
            _ => None,
        }
    }
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::new()
    }
}
