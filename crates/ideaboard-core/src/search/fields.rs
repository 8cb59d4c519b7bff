//! The weighted field table shared by scoring and matching.
//!
//! [`FIELD_WEIGHTS`] is the only place field weights are defined. Both
//! [`score_record`](super::keyword::score_record) and
//! [`matches`](super::keyword::matches) walk this table, so "is it included"
//! and "how is it ranked" cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A searchable attribute of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchField {
    Category,
    Title,
    Tags,
    Sectors,
    FounderUsername,
    OneLiner,
    TargetAudiences,
    Description,
}

impl SearchField {
    /// Field name as it appears in `matchedFields`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Category => "category",
            SearchField::Title => "title",
            SearchField::Tags => "tags",
            SearchField::Sectors => "sectors",
            SearchField::FounderUsername => "founderUsername",
            SearchField::OneLiner => "oneLiner",
            SearchField::TargetAudiences => "targetAudiences",
            SearchField::Description => "description",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring weights for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeight {
    pub field: SearchField,
    /// Added once per query term contained in the field
    pub term_weight: u32,
    /// Added when the whole query is contained in the field
    pub phrase_bonus: u32,
}

/// Weighted field table, in the order fields are reported as matched.
pub const FIELD_WEIGHTS: [FieldWeight; 8] = [
    FieldWeight {
        field: SearchField::Category,
        term_weight: 12,
        phrase_bonus: 15,
    },
    FieldWeight {
        field: SearchField::Title,
        term_weight: 10,
        phrase_bonus: 15,
    },
    FieldWeight {
        field: SearchField::Tags,
        term_weight: 10,
        phrase_bonus: 0,
    },
    FieldWeight {
        field: SearchField::Sectors,
        term_weight: 9,
        phrase_bonus: 0,
    },
    FieldWeight {
        field: SearchField::FounderUsername,
        term_weight: 7,
        phrase_bonus: 0,
    },
    FieldWeight {
        field: SearchField::OneLiner,
        term_weight: 8,
        phrase_bonus: 12,
    },
    FieldWeight {
        field: SearchField::TargetAudiences,
        term_weight: 6,
        phrase_bonus: 0,
    },
    FieldWeight {
        field: SearchField::Description,
        term_weight: 4,
        phrase_bonus: 0,
    },
];

/// A record whose text fields can be searched.
pub trait Searchable {
    /// Values stored under `field`; empty when the field is absent.
    ///
    /// Single-valued fields return at most one element.
    fn field_values(&self, field: SearchField) -> Vec<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field_values(&self, field: SearchField) -> Vec<&str> {
        (**self).field_values(field)
    }
}

/// A parsed search query.
///
/// The phrase is the trimmed, lowercased query; terms are the phrase split on
/// whitespace runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    phrase: String,
    terms: Vec<String>,
}

impl Query {
    pub fn parse(text: &str) -> Self {
        let phrase = text.to_lowercase().trim().to_string();
        let terms = phrase.split_whitespace().map(str::to_string).collect();
        Self { phrase, terms }
    }

    /// Whole query used for exact-phrase bonuses.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns `true` for an empty or whitespace-only query.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_table_covers_every_field_once() {
        let fields: std::collections::HashSet<SearchField> =
            FIELD_WEIGHTS.iter().map(|w| w.field).collect();
        assert_eq!(fields.len(), FIELD_WEIGHTS.len());
        assert!(FIELD_WEIGHTS.iter().all(|w| w.term_weight > 0));
    }

    #[test]
    fn test_phrase_bonuses_only_on_title_category_one_liner() {
        let bonused: Vec<SearchField> = FIELD_WEIGHTS
            .iter()
            .filter(|w| w.phrase_bonus > 0)
            .map(|w| w.field)
            .collect();
        assert_eq!(
            bonused,
            vec![
                SearchField::Category,
                SearchField::Title,
                SearchField::OneLiner
            ]
        );
    }

    #[test]
    fn test_query_parse_splits_on_whitespace_runs() {
        let query = Query::parse("  AI \t  Tutor\nApp ");
        assert_eq!(query.phrase(), "ai \t  tutor\napp");
        assert_eq!(query.terms(), ["ai", "tutor", "app"]);
        assert!(!query.is_empty());
    }

    #[test]
    fn test_query_whitespace_only_is_empty() {
        assert!(Query::parse("").is_empty());
        assert!(Query::parse("   \n ").is_empty());
    }

    #[test]
    fn test_field_names_serialize_camel_case() {
        let json = serde_json::to_string(&SearchField::FounderUsername).unwrap();
        assert_eq!(json, "\"founderUsername\"");
        assert_eq!(SearchField::TargetAudiences.to_string(), "targetAudiences");
    }
}
