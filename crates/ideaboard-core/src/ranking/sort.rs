//! Sort strategy dispatch.
//!
//! Every strategy computes one key per record, then runs a stable descending
//! sort over those keys. Records with equal keys keep their input order, and
//! the input slice is never reordered.

use super::relevance::smart_score;
use super::strategy::SortStrategy;
use super::traction::traction_score;
use crate::record::Rankable;
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Returns `records` ordered by `strategy` at time `now_ms`.
#[instrument(skip_all, fields(records = records.len(), strategy = %strategy))]
pub fn sort_records<R: Rankable>(records: &[R], strategy: SortStrategy, now_ms: i64) -> Vec<&R> {
    let mut keyed: Vec<(f64, &R)> = records
        .iter()
        .map(|record| (sort_key(record, strategy, now_ms), record))
        .collect();

    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    debug!("Sorted {} records", keyed.len());
    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Like [`sort_records`], keeping only the first `k` records.
pub fn rank_top_k<R: Rankable>(
    records: &[R],
    strategy: SortStrategy,
    now_ms: i64,
    k: usize,
) -> Vec<&R> {
    let mut ranked = sort_records(records, strategy, now_ms);
    ranked.truncate(k);
    ranked
}

/// Descending sort key of one record under `strategy`.
///
/// Timestamps are exact in `f64` for any realistic date (below 2^53 ms).
pub fn sort_key<R: Rankable + ?Sized>(record: &R, strategy: SortStrategy, now_ms: i64) -> f64 {
    match strategy {
        SortStrategy::Smart => smart_score(record, now_ms),
        SortStrategy::Newest => record.created_millis(now_ms) as f64,
        SortStrategy::RecentlyUpdated => record.freshness_millis(now_ms) as f64,
        SortStrategy::MostLiked => record.like_count() as f64,
        SortStrategy::Traction => {
            traction_score(record.user_count(), record.monthly_recurring_revenue())
        }
    }
}
