//! Feed ranking.
//!
//! - `traction`: presence score of the business metrics
//! - `relevance`: recency / engagement / traction composite used by smart sort
//! - `strategy`: the named [`SortStrategy`] values, parsed permissively
//! - `sort`: stable, non-mutating dispatch over a slice of [`Rankable`](crate::record::Rankable) records
//!
//! All functions take `now_ms` explicitly so rankings are reproducible.

mod relevance;
mod sort;
mod strategy;
mod traction;

pub use relevance::{
    age_in_days, engagement_component, recency_component, relevance_score, smart_score,
};
pub use sort::{rank_top_k, sort_key, sort_records};
pub use strategy::SortStrategy;
pub use traction::{has_metric, traction_score};
