//! Idea records and the traits the engine ranks them through.
//!
//! - `timestamp`: heterogeneous timestamp normalization
//! - `idea`: the concrete [`IdeaRecord`] decoded from the document database export
//! - `loader`: JSON ingestion with per-record error reporting
//!
//! Ranking functions are generic over [`Rankable`], so callers can rank their
//! own view types without converting to [`IdeaRecord`] first.

mod idea;
mod loader;
pub mod timestamp;

pub use idea::IdeaRecord;
pub use loader::{load_records_from_json, load_records_from_path};
pub use timestamp::{
    current_timestamp_millis, freshness_millis, normalize_timestamp, Timestamp, TimestampObject,
};

/// A record that can be ordered by the sort strategies.
pub trait Rankable {
    /// Opaque unique identifier.
    fn id(&self) -> &str;

    /// Creation time as stored, if any.
    fn created_at(&self) -> Option<&Timestamp>;

    /// Last update time as stored, if any.
    fn updated_at(&self) -> Option<&Timestamp>;

    /// Number of likes; absent counts as zero.
    fn like_count(&self) -> u64;

    /// Reported user count, if any.
    fn user_count(&self) -> Option<f64>;

    /// Reported monthly recurring revenue, if any.
    fn monthly_recurring_revenue(&self) -> Option<f64>;

    /// Creation time in epoch milliseconds, `now_ms` when unknown.
    fn created_millis(&self, now_ms: i64) -> i64 {
        normalize_timestamp(self.created_at(), now_ms)
    }

    /// Later of creation and update time in epoch milliseconds.
    fn freshness_millis(&self, now_ms: i64) -> i64 {
        freshness_millis(self.created_at(), self.updated_at(), now_ms)
    }
}

impl<T: Rankable + ?Sized> Rankable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn created_at(&self) -> Option<&Timestamp> {
        (**self).created_at()
    }

    fn updated_at(&self) -> Option<&Timestamp> {
        (**self).updated_at()
    }

    fn like_count(&self) -> u64 {
        (**self).like_count()
    }

    fn user_count(&self) -> Option<f64> {
        (**self).user_count()
    }

    fn monthly_recurring_revenue(&self) -> Option<f64> {
        (**self).monthly_recurring_revenue()
    }
}
