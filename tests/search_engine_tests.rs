//! Integration tests for the search engine over the static collection,
//! covering the observable matching and snippet properties end to end.

use folio_palette::{
    content, extract_snippet, highlight, normalize_body, search, Category, Post, SNIPPET_LENGTH,
};

fn record(title: &str, short: &str, full: &str) -> Post {
    Post::new(1, title, short, full, Category::Experience, "EXPERIENCE.001", "2025-01-04")
}

#[test]
fn matches_iff_query_in_title_short_or_normalized_body() {
    let posts = vec![record(
        "Motion",
        "Resolutions suck",
        "...eat real food is the goal...",
    )];

    // title
    assert_eq!(search(&posts, "motion").len(), 1);
    // short
    assert_eq!(search(&posts, "suck").len(), 1);
    // body, through punctuation stripping
    assert_eq!(search(&posts, "real").len(), 1);
    // nowhere
    assert!(search(&posts, "quantum").is_empty());
}

#[test]
fn empty_query_yields_empty_results() {
    assert!(search(content::all(), "").is_empty());
    assert!(search(content::all(), " \t ").is_empty());
}

#[test]
fn body_only_match_gets_centered_snippet() {
    let posts = vec![record(
        "Motion",
        "Resolutions suck",
        "...eat real food is the goal...",
    )];
    let results = search(&posts, "real");
    assert_eq!(results.len(), 1);

    let snippet = results[0].context_snippet.as_deref().unwrap();
    assert!(snippet.to_lowercase().contains("real"));
    // "real" occurs within the first half-window of a short body: no
    // leading ellipsis, and the whole thing fits inside the window
    assert!(!snippet.starts_with("..."));
    assert!(snippet.chars().count() <= SNIPPET_LENGTH);
}

#[test]
fn snippet_contains_query_and_respects_window() {
    for post in content::all() {
        let normalized = normalize_body(&post.full);
        for probe in ["the", "and", "of"] {
            let lower = normalized.to_lowercase();
            if let Some(byte_idx) = lower.find(probe) {
                let char_idx = lower[..byte_idx].chars().count();
                let snippet = extract_snippet(&normalized, char_idx, probe);

                assert!(
                    snippet.to_lowercase().contains(probe),
                    "snippet {:?} missing probe {:?}",
                    snippet,
                    probe
                );
                let core = snippet.trim_start_matches("...").trim_end_matches("...");
                assert!(core.chars().count() <= SNIPPET_LENGTH);
            }
        }
    }
}

#[test]
fn snippet_ellipses_mark_truncation_exactly() {
    let body = format!("start {} keyword {} finish", "pad ".repeat(60), "pad ".repeat(60));
    let normalized = normalize_body(&body);
    let lower = normalized.to_lowercase();

    // interior match: both markers
    let idx = lower.find("keyword").unwrap();
    let char_idx = lower[..idx].chars().count();
    let snippet = extract_snippet(&normalized, char_idx, "keyword");
    assert!(snippet.starts_with("..."));
    assert!(snippet.ends_with("..."));

    // match at offset 0: no leading marker
    let snippet = extract_snippet(&normalized, 0, "start");
    assert!(!snippet.starts_with("..."));
    assert!(snippet.ends_with("..."));

    // match at the very end: no trailing marker
    let idx = lower.rfind("finish").unwrap();
    let char_idx = lower[..idx].chars().count();
    let snippet = extract_snippet(&normalized, char_idx, "finish");
    assert!(snippet.starts_with("..."));
    assert!(!snippet.ends_with("..."));
}

#[test]
fn title_or_short_match_suppresses_snippet() {
    let posts = vec![record(
        "Motion",
        "Resolutions suck",
        "motion appears in the body too",
    )];
    let results = search(&posts, "motion");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].context_snippet, None);
}

#[test]
fn regex_metacharacter_query_is_inert() {
    // must not panic anywhere in the pipeline
    let results = search(content::all(), ".*+?");
    assert!(results.is_empty());

    let segments = highlight("any .*+? text", ".*+?");
    let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(rebuilt, "any .*+? text");
    assert!(segments.iter().any(|s| s.is_match));
}

#[test]
fn highlight_reconstruction_over_collection() {
    for post in content::all() {
        for query in ["e", "the", "REAL", "zzz-no-match"] {
            for text in [&post.title, &post.short, &post.full] {
                let rebuilt: String = highlight(text, query)
                    .iter()
                    .map(|s| s.text.as_str())
                    .collect();
                assert_eq!(&rebuilt, text);
            }
        }
    }
}

#[test]
fn search_static_collection_preserves_order() {
    // "the" appears in several bodies; results must follow authored order
    let results = search(content::all(), "the");
    let positions: Vec<usize> = results
        .iter()
        .map(|r| {
            content::all()
                .iter()
                .position(|p| p.key() == r.post.key())
                .unwrap()
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
