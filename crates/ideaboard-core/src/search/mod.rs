//! Keyword search over idea listings.
//!
//! This module implements the search box on the discovery page:
//! - **Weighted field table** (`fields`): one definition of which fields are
//!   searched and how much each is worth
//! - **Scoring** (`keyword`): per-term substring weights plus exact-phrase bonuses
//! - **Matching** (`keyword::matches`): a yes/no filter derived from the same table
//!
//! # Architecture
//!
//! - `fields`: [`SearchField`], [`FIELD_WEIGHTS`], [`Searchable`], [`Query`]
//! - `keyword`: [`search`], [`search_top_k`], [`score_record`], [`matches`]
//! - `types`: [`SearchHit`]
//!
//! # Field Weights
//!
//! | field | per term | exact phrase |
//! |---|---|---|
//! | category | 12 | +15 |
//! | title | 10 | +15 |
//! | tags | 10 | |
//! | sectors | 9 | |
//! | oneLiner | 8 | +12 |
//! | founderUsername | 7 | |
//! | targetAudiences | 6 | |
//! | description | 4 | |
//!
//! Search is a linear scan over the supplied slice.

mod fields;
mod keyword;
pub mod types;

pub use fields::{FieldWeight, Query, SearchField, Searchable, FIELD_WEIGHTS};
pub use keyword::{matches, score_record, search, search_top_k};
pub use types::SearchHit;
