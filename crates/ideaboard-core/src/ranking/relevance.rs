//! Smart-sort relevance scoring.
//!
//! The composite score is `0.6 * recency + 0.3 * engagement + 0.1 * traction`:
//!
//! - **Recency**: `exp(-0.1 * age_days)`, 1.0 at age zero, halving about every 6.9 days
//! - **Engagement**: `min(log10(likes + 1) / 3, 1)`, saturating at 999 likes
//! - **Traction**: presence of users and revenue, see [`traction_score`]
//!
//! Negative ages (timestamps in the future) are not clamped and push recency
//! above 1.0.

use super::traction::traction_score;
use crate::config::{
    ENGAGEMENT_SATURATION_DECADES, ENGAGEMENT_WEIGHT, MILLIS_PER_DAY, RECENCY_DECAY_PER_DAY,
    RECENCY_WEIGHT, TRACTION_WEIGHT,
};
use crate::record::Rankable;

/// Exponential recency decay for an age in days.
pub fn recency_component(age_days: f64) -> f64 {
    (-RECENCY_DECAY_PER_DAY * age_days).exp()
}

/// Sub-linear engagement from a like count, in `[0, 1]`.
pub fn engagement_component(like_count: u64) -> f64 {
    if like_count == 0 {
        return 0.0;
    }
    ((like_count as f64 + 1.0).log10() / ENGAGEMENT_SATURATION_DECADES).min(1.0)
}

/// Composite relevance score.
pub fn relevance_score(
    age_days: f64,
    like_count: u64,
    user_count: Option<f64>,
    monthly_recurring_revenue: Option<f64>,
) -> f64 {
    RECENCY_WEIGHT * recency_component(age_days)
        + ENGAGEMENT_WEIGHT * engagement_component(like_count)
        + TRACTION_WEIGHT * traction_score(user_count, monthly_recurring_revenue)
}

/// Days elapsed between `timestamp_ms` and `now_ms`.
pub fn age_in_days(timestamp_ms: i64, now_ms: i64) -> f64 {
    (now_ms as f64 - timestamp_ms as f64) / MILLIS_PER_DAY as f64
}

/// Smart score of a record at `now_ms`, aged from its effective freshness.
pub fn smart_score<R: Rankable + ?Sized>(record: &R, now_ms: i64) -> f64 {
    let age_days = age_in_days(record.freshness_millis(now_ms), now_ms);
    relevance_score(
        age_days,
        record.like_count(),
        record.user_count(),
        record.monthly_recurring_revenue(),
    )
}
