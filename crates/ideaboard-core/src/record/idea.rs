//! The idea record as exported from the document database.

use super::{Rankable, Timestamp};
use crate::search::{SearchField, Searchable};
use serde::{Deserialize, Deserializer, Serialize};

/// One listed idea.
///
/// Deserialization goes through a raw wire shape that folds the legacy
/// singular `sector` / `targetAudience` fields into their plural lists. The
/// record itself only stores and serializes the plural form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawIdeaRecord")]
pub struct IdeaRecord {
    pub id: String,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub like_count: u64,
    pub user_count: Option<f64>,
    pub monthly_recurring_revenue: Option<f64>,
    pub title: Option<String>,
    pub one_liner: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub founder_username: Option<String>,
    pub tags: Vec<String>,
    pub sectors: Vec<String>,
    pub target_audiences: Vec<String>,
}

impl IdeaRecord {
    /// Creates an empty record with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Rankable for IdeaRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }

    fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref()
    }

    fn like_count(&self) -> u64 {
        self.like_count
    }

    fn user_count(&self) -> Option<f64> {
        self.user_count
    }

    fn monthly_recurring_revenue(&self) -> Option<f64> {
        self.monthly_recurring_revenue
    }
}

impl Searchable for IdeaRecord {
    fn field_values(&self, field: SearchField) -> Vec<&str> {
        match field {
            SearchField::Category => single(&self.category),
            SearchField::Title => single(&self.title),
            SearchField::Tags => many(&self.tags),
            SearchField::Sectors => many(&self.sectors),
            SearchField::FounderUsername => single(&self.founder_username),
            SearchField::OneLiner => single(&self.one_liner),
            SearchField::TargetAudiences => many(&self.target_audiences),
            SearchField::Description => single(&self.description),
        }
    }
}

fn single(value: &Option<String>) -> Vec<&str> {
    value.as_deref().into_iter().collect()
}

fn many(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

/// Wire shape of an idea record, including legacy aliases.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIdeaRecord {
    id: String,
    #[serde(default)]
    created_at: Option<Timestamp>,
    #[serde(default)]
    updated_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "lenient_number")]
    like_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    user_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    monthly_recurring_revenue: Option<f64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    one_liner: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    founder_username: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    sectors: Option<Vec<String>>,
    #[serde(default)]
    sector: Option<LegacyList>,
    #[serde(default)]
    target_audiences: Option<Vec<String>>,
    #[serde(default)]
    target_audience: Option<LegacyList>,
}

impl From<RawIdeaRecord> for IdeaRecord {
    fn from(raw: RawIdeaRecord) -> Self {
        Self {
            id: raw.id,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            like_count: raw
                .like_count
                .filter(|likes| likes.is_finite() && *likes > 0.0)
                .map(|likes| likes as u64)
                .unwrap_or(0),
            user_count: raw.user_count,
            monthly_recurring_revenue: raw.monthly_recurring_revenue,
            title: raw.title,
            one_liner: raw.one_liner,
            description: raw.description,
            category: raw.category,
            founder_username: raw.founder_username,
            tags: raw.tags.unwrap_or_default(),
            sectors: fold_legacy(raw.sectors, raw.sector),
            target_audiences: fold_legacy(raw.target_audiences, raw.target_audience),
        }
    }
}

/// A legacy singular field: older writers stored a bare string, some a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyList {
    One(String),
    Many(Vec<String>),
}

impl LegacyList {
    fn into_vec(self) -> Vec<String> {
        match self {
            LegacyList::One(value) if value.trim().is_empty() => Vec::new(),
            LegacyList::One(value) => vec![value],
            LegacyList::Many(values) => values,
        }
    }
}

/// The plural list wins; the legacy field only fills an empty list.
fn fold_legacy(plural: Option<Vec<String>>, legacy: Option<LegacyList>) -> Vec<String> {
    let plural = plural.unwrap_or_default();
    if !plural.is_empty() {
        return plural;
    }
    legacy.map(LegacyList::into_vec).unwrap_or_default()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts a number, a numeric string, or null. Anything unparseable is absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    }
    .filter(|n| !n.is_nan()))
}
