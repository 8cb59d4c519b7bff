//! Output formatting for feeds, search results, the weekly board and the
//! featured schedule.
//!
//! Supports both human-readable terminal output and JSON for scripting.

use chrono::{DateTime, SecondsFormat, Utc};
use ideaboard_core::config::MILLIS_PER_DAY;
use ideaboard_core::leaderboard::{LeaderboardEntry, WeekWindow};
use ideaboard_core::ranking::{smart_score, SortStrategy};
use ideaboard_core::record::IdeaRecord;
use ideaboard_core::search::{SearchField, SearchHit};
use serde::Serialize;

/// Maximum characters to show of an idea's one-liner
const SNIPPET_MAX_LEN: usize = 80;

/// Title shown for ideas without one
const UNTITLED: &str = "(untitled)";

// =============================================================================
// JSON structures
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFeed {
    pub strategy: SortStrategy,
    pub now: String,
    pub results: Vec<JsonFeedEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFeedEntry {
    pub position: usize,
    pub id: String,
    pub title: Option<String>,
    pub like_count: u64,
    /// Smart score at `now`, reported for every strategy
    pub smart_score: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSearch {
    pub query: String,
    pub results: Vec<JsonSearchHit>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSearchHit {
    pub id: String,
    pub title: Option<String>,
    pub relevance_score: u32,
    pub matched_fields: Vec<SearchField>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonWinners {
    pub week_start: String,
    /// Exclusive: the Monday after the week
    pub week_end: String,
    pub winners: Vec<JsonWinner>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonWinner {
    pub rank: usize,
    pub id: String,
    pub title: Option<String>,
    pub like_count: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFeatured {
    pub schedule: Vec<JsonFeaturedDay>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFeaturedDay {
    pub day: String,
    pub id: String,
    pub title: Option<String>,
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

// =============================================================================
// Feed
// =============================================================================

pub fn format_feed_json(strategy: SortStrategy, now_ms: i64, feed: &[&IdeaRecord]) -> String {
    let output = JsonFeed {
        strategy,
        now: format_timestamp(now_ms),
        results: feed
            .iter()
            .enumerate()
            .map(|(i, idea)| JsonFeedEntry {
                position: i + 1,
                id: idea.id.clone(),
                title: idea.title.clone(),
                like_count: idea.like_count,
                smart_score: smart_score(*idea, now_ms),
            })
            .collect(),
    };
    to_pretty_json(&output)
}

pub fn format_feed_human(strategy: SortStrategy, now_ms: i64, feed: &[&IdeaRecord]) -> String {
    if feed.is_empty() {
        return "No ideas to rank".to_string();
    }

    let mut output = format!(
        "Top {} idea{} by {} (as of {}):\n\n",
        feed.len(),
        plural(feed.len()),
        strategy,
        format_timestamp(now_ms)
    );

    for (i, idea) in feed.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} [{}] (likes: {}, smart: {:.3})\n",
            i + 1,
            title_of(idea),
            idea.id,
            idea.like_count,
            smart_score(*idea, now_ms)
        ));
        push_one_liner(&mut output, idea);
    }

    output.trim_end().to_string()
}

// =============================================================================
// Search
// =============================================================================

pub fn format_search_json(query: &str, hits: &[SearchHit<'_, IdeaRecord>]) -> String {
    let output = JsonSearch {
        query: query.to_string(),
        results: hits
            .iter()
            .map(|hit| JsonSearchHit {
                id: hit.record.id.clone(),
                title: hit.record.title.clone(),
                relevance_score: hit.relevance_score,
                matched_fields: hit.matched_fields.clone(),
            })
            .collect(),
    };
    to_pretty_json(&output)
}

pub fn format_search_human(query: &str, hits: &[SearchHit<'_, IdeaRecord>]) -> String {
    if hits.is_empty() {
        return format!("No ideas found for \"{}\"", query);
    }

    let mut output = format!(
        "Found {} idea{} for \"{}\":\n\n",
        hits.len(),
        plural(hits.len()),
        query
    );

    for (i, hit) in hits.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} [{}] (score: {})\n",
            i + 1,
            title_of(hit.record),
            hit.record.id,
            hit.relevance_score
        ));

        if !hit.matched_fields.is_empty() {
            let fields: Vec<&str> = hit.matched_fields.iter().map(SearchField::as_str).collect();
            output.push_str(&format!("   Matched: {}\n", fields.join(", ")));
        }
        push_one_liner(&mut output, hit.record);
    }

    output.trim_end().to_string()
}

// =============================================================================
// Weekly winners
// =============================================================================

pub fn format_winners_json(window: WeekWindow, board: &[LeaderboardEntry<'_, IdeaRecord>]) -> String {
    let output = JsonWinners {
        week_start: format_timestamp(window.start_ms),
        week_end: format_timestamp(window.end_ms),
        winners: board
            .iter()
            .map(|entry| JsonWinner {
                rank: entry.rank,
                id: entry.record.id.clone(),
                title: entry.record.title.clone(),
                like_count: entry.like_count,
            })
            .collect(),
    };
    to_pretty_json(&output)
}

pub fn format_winners_human(window: WeekWindow, board: &[LeaderboardEntry<'_, IdeaRecord>]) -> String {
    // The window end is exclusive, so the last day shown is the Sunday
    let week = format!(
        "{} to {}",
        format_day(window.start_ms),
        format_day(window.end_ms.saturating_sub(MILLIS_PER_DAY))
    );

    if board.is_empty() {
        return format!("No liked ideas for the week of {}", week);
    }

    let mut output = format!("Weekly winners, {}:\n\n", week);
    for entry in board {
        output.push_str(&format!(
            "{}. {} [{}] ({} like{})\n",
            entry.rank,
            title_of(entry.record),
            entry.record.id,
            entry.like_count,
            plural(entry.like_count as usize)
        ));
    }

    output.trim_end().to_string()
}

// =============================================================================
// Featured
// =============================================================================

pub fn format_featured_json(schedule: &[(i64, &IdeaRecord)]) -> String {
    let output = JsonFeatured {
        schedule: schedule
            .iter()
            .map(|(day_ms, idea)| JsonFeaturedDay {
                day: format_day(*day_ms),
                id: idea.id.clone(),
                title: idea.title.clone(),
            })
            .collect(),
    };
    to_pretty_json(&output)
}

pub fn format_featured_human(schedule: &[(i64, &IdeaRecord)]) -> String {
    match schedule {
        [] => "No ideas to feature".to_string(),
        [(day_ms, idea)] => {
            let mut output = format!(
                "Featured on {}: {} [{}]\n",
                format_day(*day_ms),
                title_of(idea),
                idea.id
            );
            push_one_liner(&mut output, idea);
            output.trim_end().to_string()
        }
        _ => schedule
            .iter()
            .map(|(day_ms, idea)| format!("{}  {} [{}]", format_day(*day_ms), title_of(idea), idea.id))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn title_of(idea: &IdeaRecord) -> &str {
    idea.title
        .as_deref()
        .filter(|title| !title.trim().is_empty())
        .unwrap_or(UNTITLED)
}

fn push_one_liner(output: &mut String, idea: &IdeaRecord) {
    if let Some(one_liner) = idea.one_liner.as_deref().filter(|s| !s.trim().is_empty()) {
        output.push_str(&format!("   {}\n", truncate_text(one_liner, SNIPPET_MAX_LEN)));
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// RFC 3339 rendering of epoch milliseconds, or the raw number if out of range.
fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|date| date.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| ms.to_string())
}

fn format_day(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Truncates text to a maximum length, adding ellipsis if needed.
fn truncate_text(text: &str, max_len: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_len).collect();
    match truncated.rfind(' ') {
        Some(last_space) => format!("{}...", &truncated[..last_space]),
        None => format!("{}...", truncated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideaboard_core::record::Timestamp;

    // 2024-03-13T12:00:00Z
    const NOW: i64 = 1_710_331_200_000;

    fn idea(id: &str, title: &str, likes: u64) -> IdeaRecord {
        IdeaRecord {
            title: Some(title.to_string()),
            one_liner: Some(format!("{title} in one line")),
            like_count: likes,
            created_at: Some(Timestamp::Millis(NOW)),
            ..IdeaRecord::new(id)
        }
    }

    #[test]
    fn test_feed_human_empty() {
        assert_eq!(
            format_feed_human(SortStrategy::Smart, NOW, &[]),
            "No ideas to rank"
        );
    }

    #[test]
    fn test_feed_human() {
        let a = idea("a", "AI Tutor", 12);
        let output = format_feed_human(SortStrategy::MostLiked, NOW, &[&a]);
        assert!(output.contains("Top 1 idea by mostLiked"));
        assert!(output.contains("2024-03-13T12:00:00Z"));
        assert!(output.contains("1. AI Tutor [a] (likes: 12"));
        assert!(output.contains("AI Tutor in one line"));
    }

    #[test]
    fn test_feed_json() {
        let a = idea("a", "AI Tutor", 0);
        let output = format_feed_json(SortStrategy::Smart, NOW, &[&a]);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["strategy"], "smart");
        assert_eq!(json["results"][0]["position"], 1);
        assert_eq!(json["results"][0]["id"], "a");
        assert_eq!(json["results"][0]["likeCount"], 0);
        assert_eq!(json["results"][0]["smartScore"], 0.6);
    }

    #[test]
    fn test_search_human() {
        let a = idea("a", "AI Tutor", 0);
        let hits = vec![SearchHit {
            record: &a,
            relevance_score: 25,
            matched_fields: vec![SearchField::Title],
        }];
        let output = format_search_human("ai", &hits);
        assert!(output.contains("Found 1 idea for \"ai\""));
        assert!(output.contains("(score: 25)"));
        assert!(output.contains("Matched: title"));
    }

    #[test]
    fn test_search_human_empty() {
        assert!(format_search_human("zzz", &[]).contains("No ideas found"));
    }

    #[test]
    fn test_search_json() {
        let a = idea("a", "AI Tutor", 0);
        let hits = vec![SearchHit {
            record: &a,
            relevance_score: 25,
            matched_fields: vec![SearchField::Title, SearchField::OneLiner],
        }];
        let output = format_search_json("ai", &hits);
        assert!(output.contains("\"query\": \"ai\""));
        assert!(output.contains("\"relevanceScore\": 25"));
        assert!(output.contains("\"oneLiner\""));
    }

    #[test]
    fn test_winners_human() {
        let a = idea("a", "AI Tutor", 1);
        let board = vec![LeaderboardEntry {
            rank: 1,
            record: &a,
            like_count: 1,
        }];
        let window = WeekWindow::containing(NOW);
        let output = format_winners_human(window, &board);
        assert!(output.contains("2024-03-11 to 2024-03-17"));
        assert!(!output.contains("2024-03-18"));
        assert!(output.contains("1. AI Tutor [a] (1 like)"));
    }

    #[test]
    fn test_winners_empty() {
        let output = format_winners_human(WeekWindow::containing(NOW), &[]);
        assert!(output.starts_with("No liked ideas"));
    }

    #[test]
    fn test_winners_json() {
        let a = idea("a", "AI Tutor", 4);
        let board = vec![LeaderboardEntry {
            rank: 1,
            record: &a,
            like_count: 4,
        }];
        let output = format_winners_json(WeekWindow::containing(NOW), &board);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["weekStart"], "2024-03-11T00:00:00Z");
        assert_eq!(json["winners"][0]["likeCount"], 4);
    }

    #[test]
    fn test_featured_single_and_schedule() {
        let a = idea("a", "AI Tutor", 0);
        let b = idea("b", "Pet Store", 0);

        let single = format_featured_human(&[(NOW, &a)]);
        assert!(single.starts_with("Featured on 2024-03-13: AI Tutor [a]"));

        let schedule = format_featured_human(&[(NOW, &a), (NOW + 86_400_000, &b)]);
        assert_eq!(schedule.lines().count(), 2);
        assert!(schedule.contains("2024-03-14  Pet Store [b]"));

        assert_eq!(format_featured_human(&[]), "No ideas to feature");
    }

    #[test]
    fn test_untitled() {
        let untitled = IdeaRecord::new("x");
        assert_eq!(title_of(&untitled), UNTITLED);
    }

    #[test]
    fn test_truncate_text() {
        let short = "Short text";
        assert_eq!(truncate_text(short, 50), short);

        let long = "This is a much longer text that should be truncated at a reasonable point";
        let truncated = truncate_text(long, 30);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 33);
    }
}
