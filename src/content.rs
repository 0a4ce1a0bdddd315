//! The static post collection.
//!
//! Content is hardcoded and built once on first access; the rest of the
//! crate treats it as an immutable, ordered slice.

use crate::models::{Category, Post};
use crate::state::Filter;
use once_cell::sync::Lazy;

static POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        Post::new(
            1,
            "Kinetic Typography Engine",
            "Fluid text animation at high frame rates.",
            "A performant rendering engine for complex text animations, focusing on fluid \
             motion and predictable frame budgets.\n\
             [1] Glyph pipeline: signed distance fields keep scaling crisp without re-rasterizing.\n\
             [2] Scheduling: animation steps are batched per frame so layout is computed once.\n\
             [3] Results: sustained 60fps on mid-range hardware with thousands of live glyphs.",
            Category::Effort,
            "EFFORT.001",
            "2023-11-12",
        ),
        Post::new(
            2,
            "Real-time Data Visualization",
            "Sub-second insight into high-frequency streams.",
            "A dashboard for visualizing high-frequency trading data with actionable latency.\n\
             [A] Ingest: deltas are coalesced into fixed ticks so the view never falls behind.\n\
             [B] Rendering: only dirty series redraw, keeping interaction smooth under load.",
            Category::Effort,
            "EFFORT.002",
            "2024-02-27",
        ),
        Post::new(
            3,
            "Decentralized Identity Protocol",
            "Self-sovereign identity, user-controlled data.",
            "An open-source exploration into self-sovereign identity management and secure, \
             user-controlled data sharing. The interesting part was not the ledger but the \
             recovery flow: how someone regains control without a custodian holding keys.",
            Category::Effort,
            "EFFORT.003",
            "2024-06-08",
        ),
        Post::new(
            1,
            "Lead Frontend at Acme Corp",
            "Large-scale e-commerce, measurable wins.",
            "Led development of a large-scale e-commerce platform.\n\
             [1] Performance: cut initial load from 6s to under 2s by deferring non-critical paths.\n\
             [2] Conversion: checkout redesign improved conversion rates by 20%.\n\
             [3] Team: grew the frontend group from three to nine without slowing releases.",
            Category::Experience,
            "EXPERIENCE.001",
            "2022-09-01",
        ),
        Post::new(
            2,
            "Generative Art Installation",
            "Visuals that listen to the room.",
            "An interactive museum piece that creates evolving visuals from ambient sound and \
             visitor movement. Built around a small constraint solver so the output stays \
             coherent no matter how chaotic the input gets.",
            Category::Experience,
            "EXPERIENCE.002",
            "2023-05-19",
        ),
        Post::new(
            3,
            "Motion",
            "Resolutions suck.",
            "Every January the same lists appear and by February they are gone. This year the \
             plan is different: no outcomes, only direction. Move every day, write when it \
             helps, and eat real food is the goal, not a number on a scale. Direction survives \
             bad weeks; outcomes do not.",
            Category::Experience,
            "EXPERIENCE.003",
            "2025-01-04",
        ),
    ]
});

/// All posts, in authored order.
pub fn all() -> &'static [Post] {
    &POSTS
}

/// Posts visible under the given filter, preserving authored order.
pub fn filtered(filter: Filter) -> Vec<&'static Post> {
    POSTS
        .iter()
        .filter(|p| filter.admits(p.category))
        .collect()
}
