//! # Ideaboard Core
//!
//! Ranking and search engine for the ideaboard discovery feed.
//!
//! Everything here is a pure, synchronous function over idea records that
//! are already loaded in memory. Time-dependent functions take `now_ms`
//! (epoch milliseconds) explicitly so results are reproducible.
//!
//! ## Modules
//!
//! - [`record`] - Idea records, timestamp normalization and JSON loading
//! - [`ranking`] - Smart relevance score and the named sort strategies
//! - [`search`] - Weighted keyword search and the matching predicate
//! - [`leaderboard`] - Weekly winners board
//! - [`featured`] - Daily featured idea rotation
//! - [`config`] - Production ranking constants
//! - [`error`] - Errors raised while loading records
//!
//! ## Example
//!
//! ```
//! use ideaboard_core::ranking::{sort_records, SortStrategy};
//! use ideaboard_core::record::load_records_from_json;
//!
//! let records = load_records_from_json(
//!     r#"[{"id": "a", "createdAt": 1000, "likeCount": 3},
//!         {"id": "b", "createdAt": 2000, "likeCount": 9}]"#,
//! )?;
//!
//! let feed = sort_records(&records, SortStrategy::from("mostLiked"), 5000);
//! assert_eq!(feed[0].id, "b");
//! # Ok::<(), ideaboard_core::error::RecordError>(())
//! ```

pub mod config;
pub mod error;
pub mod featured;
pub mod leaderboard;
pub mod ranking;
pub mod record;
pub mod search;
