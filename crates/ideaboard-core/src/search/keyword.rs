//! Weighted keyword search over idea fields.
//!
//! # Algorithm
//!
//! For each query term and each field in [`FIELD_WEIGHTS`], a case-insensitive
//! substring match adds the field's term weight. The whole trimmed query then
//! earns an exact-phrase bonus on title, category and one-liner. Records that
//! score zero are dropped; the rest are ordered by descending score, ties in
//! input order.
//!
//! An empty query is a pass-through: every record comes back with score 0 in
//! input order.
//!
//! # Usage
//!
//! ```
//! use ideaboard_core::record::IdeaRecord;
//! use ideaboard_core::search::{search, SearchField};
//!
//! let records = vec![
//!     IdeaRecord { title: Some("AI tutor".into()), ..IdeaRecord::new("a") },
//!     IdeaRecord { title: Some("Pet store".into()), ..IdeaRecord::new("b") },
//! ];
//!
//! let hits = search(&records, "ai");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].record.id, "a");
//! assert!(hits[0].matched_fields.contains(&SearchField::Title));
//! ```

use super::fields::{Query, SearchField, Searchable, FIELD_WEIGHTS};
use super::types::SearchHit;
use tracing::{debug, instrument};

/// Lowercased values of every weighted field, computed once per record.
struct LoweredFields {
    values: Vec<(usize, Vec<String>)>,
}

impl LoweredFields {
    fn of<R: Searchable + ?Sized>(record: &R) -> Self {
        let values = FIELD_WEIGHTS
            .iter()
            .enumerate()
            .filter_map(|(slot, weight)| {
                let values: Vec<String> = record
                    .field_values(weight.field)
                    .into_iter()
                    .map(str::to_lowercase)
                    .collect();
                (!values.is_empty()).then_some((slot, values))
            })
            .collect();
        Self { values }
    }

    fn any_contains(values: &[String], needle: &str) -> bool {
        values.iter().any(|value| value.contains(needle))
    }
}

/// Scores one record against a parsed query.
///
/// Returns the relevance score and the matched fields in table order, each
/// field at most once.
pub fn score_record<R: Searchable + ?Sized>(record: &R, query: &Query) -> (u32, Vec<SearchField>) {
    if query.is_empty() {
        return (0, Vec::new());
    }

    let lowered = LoweredFields::of(record);
    let mut score = 0u32;
    let mut matched_fields = Vec::new();

    for (slot, values) in &lowered.values {
        let weight = &FIELD_WEIGHTS[*slot];

        let term_hits = query
            .terms()
            .iter()
            .filter(|term| LoweredFields::any_contains(values, term))
            .count() as u32;
        let mut field_score = term_hits.saturating_mul(weight.term_weight);

        if weight.phrase_bonus > 0 && LoweredFields::any_contains(values, query.phrase()) {
            field_score = field_score.saturating_add(weight.phrase_bonus);
        }

        if field_score > 0 {
            score = score.saturating_add(field_score);
            matched_fields.push(weight.field);
        }
    }

    (score, matched_fields)
}

/// Returns `true` if any query term appears in any weighted field.
///
/// An empty query matches every record. For non-empty queries this agrees
/// with [`score_record`] returning a positive score.
pub fn matches<R: Searchable + ?Sized>(record: &R, query: &str) -> bool {
    let query = Query::parse(query);
    if query.is_empty() {
        return true;
    }

    FIELD_WEIGHTS.iter().any(|weight| {
        record.field_values(weight.field).into_iter().any(|value| {
            let value = value.to_lowercase();
            query.terms().iter().any(|term| value.contains(term.as_str()))
        })
    })
}

/// Searches `records` for `query`, best matches first.
#[instrument(skip_all, fields(records = records.len(), query_len = query.len()))]
pub fn search<'a, R: Searchable>(records: &'a [R], query: &str) -> Vec<SearchHit<'a, R>> {
    let parsed = Query::parse(query);

    if parsed.is_empty() {
        return records.iter().map(SearchHit::unscored).collect();
    }

    let mut hits: Vec<SearchHit<'a, R>> = records
        .iter()
        .filter_map(|record| {
            let (relevance_score, matched_fields) = score_record(record, &parsed);
            (relevance_score > 0).then_some(SearchHit {
                record,
                relevance_score,
                matched_fields,
            })
        })
        .collect();

    // Stable: equal scores keep input order
    hits.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

    debug!(
        terms = parsed.terms().len(),
        "Search matched {} of {} records",
        hits.len(),
        records.len()
    );
    hits
}

/// Like [`search`], keeping only the first `k` hits.
pub fn search_top_k<'a, R: Searchable>(
    records: &'a [R],
    query: &str,
    k: usize,
) -> Vec<SearchHit<'a, R>> {
    let mut hits = search(records, query);
    hits.truncate(k);
    hits
}
