//! Folio Palette - search and command-palette core for a static
//! portfolio/blog site.
//!
//! The site's content is a fixed in-memory collection; this crate implements
//! the parts of the page that are actual logic rather than presentation:
//!
//! # Architecture
//!
//! - **models**: Post records and the closed category set
//! - **content**: the hardcoded post collection
//! - **search**: substring matcher and context snippet extractor
//! - **highlight**: match segmentation for rendering
//! - **markup**: line markup parser for post bodies
//! - **state**: filter tabs and the top-level UI reducer
//! - **palette**: command palette items and selection cursor
//! - **shortcut**: RAII global-shortcut subscriptions
//! - **client**: optional remote search API client
//! - **service**: debounced search with stale-response discarding
//! - **config** / **error**: environment configuration and error types

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod highlight;
pub mod markup;
pub mod models;
pub mod palette;
pub mod search;
pub mod service;
pub mod shortcut;
pub mod state;

pub use client::SiteClient;
pub use config::Config;
pub use error::{ConfigError, SiteApiError};
pub use highlight::{highlight, Segment};
pub use markup::{parse as parse_markup, Block};
pub use models::{Category, Post};
pub use palette::{
    build_items, quick_actions, Action, Activation, Command, Key, PaletteItem, PaletteState,
};
pub use search::{extract_snippet, normalize_body, search, MatchResult, SNIPPET_LENGTH};
pub use service::SearchService;
pub use shortcut::{ShortcutRegistry, ShortcutSubscription};
pub use state::{AppEvent, AppState, Filter, PostKey};
