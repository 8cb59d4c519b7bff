//! Named sort strategies.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How the feed is ordered.
///
/// Parsing never fails: unrecognized names fall back to [`SortStrategy::Newest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum SortStrategy {
    /// Composite of recency, engagement and traction
    Smart,
    /// Creation time, newest first
    #[default]
    Newest,
    /// Like count, highest first
    MostLiked,
    /// Effective freshness (update time falling back to creation time)
    RecentlyUpdated,
    /// Traction presence score, highest first
    Traction,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 5] = [
        SortStrategy::Smart,
        SortStrategy::Newest,
        SortStrategy::MostLiked,
        SortStrategy::RecentlyUpdated,
        SortStrategy::Traction,
    ];

    /// Canonical camelCase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Smart => "smart",
            SortStrategy::Newest => "newest",
            SortStrategy::MostLiked => "mostLiked",
            SortStrategy::RecentlyUpdated => "recentlyUpdated",
            SortStrategy::Traction => "traction",
        }
    }

    /// Looks up a strategy by name, returning `None` for unknown names.
    ///
    /// Matching ignores case, `-` and `_`, so `most-liked`, `most_liked`
    /// and `mostLiked` are the same strategy.
    pub fn lookup(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "smart" => Some(SortStrategy::Smart),
            "newest" => Some(SortStrategy::Newest),
            "mostliked" => Some(SortStrategy::MostLiked),
            "recentlyupdated" => Some(SortStrategy::RecentlyUpdated),
            "traction" => Some(SortStrategy::Traction),
            _ => None,
        }
    }
}

impl From<&str> for SortStrategy {
    fn from(name: &str) -> Self {
        Self::lookup(name).unwrap_or_default()
    }
}

impl From<String> for SortStrategy {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl FromStr for SortStrategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
