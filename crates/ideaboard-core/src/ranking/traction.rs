//! Traction presence scoring.
//!
//! Only whether a metric is reported and positive counts. A record with one
//! user scores the same as one with a million.

/// Returns `true` when a metric is reported and strictly positive.
///
/// `None`, zero, negatives and NaN are all absent.
pub fn has_metric(value: Option<f64>) -> bool {
    value.is_some_and(|v| v > 0.0)
}

/// Presence score of the business metrics: 0, 0.5 or 1.0.
pub fn traction_score(user_count: Option<f64>, monthly_recurring_revenue: Option<f64>) -> f64 {
    match (has_metric(user_count), has_metric(monthly_recurring_revenue)) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.5,
        (false, false) => 0.0,
    }
}
