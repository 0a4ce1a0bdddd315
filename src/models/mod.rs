//! Data models for the portfolio content collection.
//!
//! This module contains the data structures representing posts and their
//! categories, matching the JSON shape exchanged with the optional remote
//! search API.

mod post;

pub use post::{Category, Post};
