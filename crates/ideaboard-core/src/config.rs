//! Production ranking constants.
//!
//! This module contains the constants that define how ideas are ranked on
//! the discovery feed. They are shared by the scoring functions, the CLI and
//! the benchmarks so every consumer ranks ideas the same way.
//!
//! # Usage
//!
//! ```
//! use ideaboard_core::config::{ENGAGEMENT_WEIGHT, RECENCY_WEIGHT, TRACTION_WEIGHT};
//!
//! let total = RECENCY_WEIGHT + ENGAGEMENT_WEIGHT + TRACTION_WEIGHT;
//! assert!((total - 1.0).abs() < 1e-12);
//! ```

// =============================================================================
// Smart Sort Weights
// =============================================================================

/// Weight of the recency component in the smart score.
///
/// Freshness dominates the feed so new ideas get a chance to be seen.
pub const RECENCY_WEIGHT: f64 = 0.6;

/// Weight of the engagement (like count) component in the smart score.
pub const ENGAGEMENT_WEIGHT: f64 = 0.3;

/// Weight of the traction presence component in the smart score.
pub const TRACTION_WEIGHT: f64 = 0.1;

/// Exponential decay rate of the recency component, per day of age.
///
/// `exp(-0.1 * days)` halves roughly every 6.9 days.
pub const RECENCY_DECAY_PER_DAY: f64 = 0.1;

/// Number of decades of likes at which engagement saturates.
///
/// `log10(likes + 1) / 3` reaches 1.0 at 999 likes.
pub const ENGAGEMENT_SATURATION_DECADES: f64 = 3.0;

// =============================================================================
// Time
// =============================================================================

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Milliseconds in one week.
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

// =============================================================================
// Leaderboard
// =============================================================================

/// Number of ideas shown on the weekly winners board.
pub const WEEKLY_WINNERS_LIMIT: usize = 3;
