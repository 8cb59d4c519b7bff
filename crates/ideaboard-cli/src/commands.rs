//! Subcommand execution over loaded idea records.
//!
//! Each command returns the rendered output so it can be tested without
//! touching stdout.

use crate::output;
use ideaboard_core::featured::featured_schedule;
use ideaboard_core::leaderboard::{winners_in, WeekWindow};
use ideaboard_core::ranking::{rank_top_k, SortStrategy};
use ideaboard_core::record::IdeaRecord;
use ideaboard_core::search::search_top_k;
use tracing::{info, warn};

/// Ranks records with the named strategy and keeps the top `limit`.
///
/// Unknown strategy names sort as `newest`.
pub fn run_rank(
    records: &[IdeaRecord],
    strategy_name: &str,
    limit: usize,
    now_ms: i64,
    json: bool,
) -> String {
    let strategy = SortStrategy::lookup(strategy_name).unwrap_or_else(|| {
        warn!(
            "Unknown sort strategy \"{}\", falling back to {}",
            strategy_name,
            SortStrategy::default()
        );
        SortStrategy::default()
    });

    let feed = rank_top_k(records, strategy, now_ms, limit);
    info!("Ranked {} of {} ideas by {}", feed.len(), records.len(), strategy);

    if json {
        output::format_feed_json(strategy, now_ms, &feed)
    } else {
        output::format_feed_human(strategy, now_ms, &feed)
    }
}

pub fn run_search(records: &[IdeaRecord], query: &str, limit: usize, json: bool) -> String {
    let hits = search_top_k(records, query, limit);
    info!("Search \"{}\" returned {} ideas", query, hits.len());

    if json {
        output::format_search_json(query, &hits)
    } else {
        output::format_search_human(query, &hits)
    }
}

pub fn run_winners(
    records: &[IdeaRecord],
    limit: usize,
    previous: bool,
    now_ms: i64,
    json: bool,
) -> String {
    let current = WeekWindow::containing(now_ms);
    let window = if previous { current.previous() } else { current };
    let board = winners_in(records, window, now_ms, limit);

    if json {
        output::format_winners_json(window, &board)
    } else {
        output::format_winners_human(window, &board)
    }
}

pub fn run_featured(records: &[IdeaRecord], days: usize, now_ms: i64, json: bool) -> String {
    let schedule = featured_schedule(records, now_ms, days);

    if json {
        output::format_featured_json(&schedule)
    } else {
        output::format_featured_human(&schedule)
    }
}
