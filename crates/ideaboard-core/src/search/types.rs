use super::fields::SearchField;
use serde::Serialize;

/// One record returned by [`search`](super::search).
///
/// Borrows the record from the searched slice; the slice itself is untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit<'a, R> {
    /// The matched record
    pub record: &'a R,
    /// Sum of field weights and phrase bonuses
    pub relevance_score: u32,
    /// Fields that contributed to the score, each at most once
    pub matched_fields: Vec<SearchField>,
}

impl<'a, R> SearchHit<'a, R> {
    /// A hit with no score, used for the empty-query pass-through.
    pub fn unscored(record: &'a R) -> Self {
        Self {
            record,
            relevance_score: 0,
            matched_fields: Vec::new(),
        }
    }
}
