//! Folio Palette - interactive driver.
//!
//! A line-oriented front end for the search core: type a query to search the
//! collection, or `/all`, `/effort`, `/experience` to switch the filter tab.
//! Exists to wire the library end to end; the real site renders the same
//! state through its own presentation layer.

use anyhow::Result;
use folio_palette::{
    content, highlight, AppEvent, AppState, Category, Config, Filter, SearchService,
};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const MARK: &str = "\x1b[33m"; // yellow, like the site's highlight marks

/// Render text with matched runs wrapped in the highlight color.
fn highlighted(text: &str, query: &str) -> String {
    highlight(text, query)
        .into_iter()
        .map(|seg| {
            if seg.is_match {
                format!("{}{}{}", MARK, seg.text, RESET)
            } else {
                seg.text
            }
        })
        .collect()
}

fn print_results(results: &[folio_palette::MatchResult], query: &str, filter: Filter) {
    let visible: Vec<_> = results
        .iter()
        .filter(|r| filter.admits(r.post.category))
        .collect();

    if visible.is_empty() {
        println!("{}[NO RESULTS]{}", DIM, RESET);
        return;
    }

    for result in visible {
        let post = &result.post;
        let accent = post.category.accent();
        println!(
            "{} {}{}{}",
            highlighted(&post.title, query),
            accent,
            post.tag,
            RESET
        );
        let context = result.context_snippet.as_deref().unwrap_or(&post.short);
        println!("  {}{}{}", DIM, highlighted(context, query), RESET);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logging goes to stderr so results stay clean on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "remote search: {}",
        config.api_base_url.as_deref().unwrap_or("disabled (local)")
    );

    let service = SearchService::new(&config, content::all().to_vec());
    let mut state = AppState::new();

    println!(
        "folio palette - {} posts loaded. /all /effort /experience to filter, /quit to exit.",
        content::all().len()
    );

    let stdin = io::stdin();
    loop {
        print!("{}> {}", state.filter.label(), RESET);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "/quit" => break,
            "/all" => state.apply(AppEvent::FilterSelected(Filter::All)),
            "/effort" => {
                state.apply(AppEvent::FilterSelected(Filter::Category(Category::Effort)))
            }
            "/experience" => state.apply(AppEvent::FilterSelected(Filter::Category(
                Category::Experience,
            ))),
            query => {
                state.apply(AppEvent::HighlightChanged(query.to_string()));
                // submit() debounces and discards stale work internally;
                // with line input there is exactly one submission in flight
                if let Some(results) = service.submit(query).await {
                    print_results(&results, query, state.filter);
                }
            }
        }
    }

    info!("bye");
    Ok(())
}
