//! Weekly winners leaderboard.
//!
//! Ranks the ideas created during an ISO week (Monday 00:00 UTC to the next
//! Monday) by like count. The board for the current week updates live; the
//! previous week's board is the one announced as the winners.

use crate::config::{MILLIS_PER_DAY, MILLIS_PER_WEEK};
use crate::record::Rankable;
use serde::Serialize;
use tracing::{debug, instrument};

/// Half-open window `[start_ms, end_ms)` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl WeekWindow {
    /// The ISO week containing `now_ms`.
    ///
    /// Bounds saturate at the ends of the `i64` range.
    pub fn containing(now_ms: i64) -> Self {
        let day = now_ms.div_euclid(MILLIS_PER_DAY);
        // 1970-01-01 was a Thursday, three days after a Monday
        let days_since_monday = (day + 3).rem_euclid(7);
        let start_ms = (day - days_since_monday).saturating_mul(MILLIS_PER_DAY);
        Self {
            start_ms,
            end_ms: start_ms.saturating_add(MILLIS_PER_WEEK),
        }
    }

    /// The ISO week before this one.
    pub fn previous(&self) -> Self {
        Self {
            start_ms: self.start_ms.saturating_sub(MILLIS_PER_WEEK),
            end_ms: self.start_ms,
        }
    }

    pub fn contains(&self, ms: i64) -> bool {
        self.start_ms <= ms && ms < self.end_ms
    }
}

/// A ranked entry on the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry<'a, R> {
    /// 1-based position
    pub rank: usize,
    pub record: &'a R,
    pub like_count: u64,
}

/// Winners of the ISO week containing `now_ms`.
pub fn weekly_winners<R: Rankable>(
    records: &[R],
    now_ms: i64,
    limit: usize,
) -> Vec<LeaderboardEntry<'_, R>> {
    winners_in(records, WeekWindow::containing(now_ms), now_ms, limit)
}

/// Winners of the full ISO week before the one containing `now_ms`.
pub fn previous_week_winners<R: Rankable>(
    records: &[R],
    now_ms: i64,
    limit: usize,
) -> Vec<LeaderboardEntry<'_, R>> {
    winners_in(records, WeekWindow::containing(now_ms).previous(), now_ms, limit)
}

/// Ranks liked records created inside `window`.
///
/// Ties on likes go to the earlier idea, then to input order. Records with no
/// likes never place.
#[instrument(skip_all, fields(records = records.len(), start_ms = window.start_ms))]
pub fn winners_in<R: Rankable>(
    records: &[R],
    window: WeekWindow,
    now_ms: i64,
    limit: usize,
) -> Vec<LeaderboardEntry<'_, R>> {
    let mut candidates: Vec<(i64, &R)> = records
        .iter()
        .filter(|record| record.like_count() > 0)
        .map(|record| (record.created_millis(now_ms), record))
        .filter(|(created, _)| window.contains(*created))
        .collect();

    candidates.sort_by(|(a_created, a), (b_created, b)| {
        b.like_count()
            .cmp(&a.like_count())
            .then(a_created.cmp(b_created))
    });

    debug!("{} ideas eligible for the weekly board", candidates.len());

    candidates
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, (_, record))| LeaderboardEntry {
            rank: position + 1,
            record,
            like_count: record.like_count(),
        })
        .collect()
}
