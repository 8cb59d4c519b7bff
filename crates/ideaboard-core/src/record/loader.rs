//! Loading idea records from a JSON export.
//!
//! Accepts either a bare array of records or an object with an `ideas` array.
//! Each record is decoded on its own so a bad record is reported with its
//! position instead of a line/column into the whole document.

use super::{IdeaRecord, Rankable, Timestamp};
use crate::error::RecordError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument, warn};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsDocument {
    List(Vec<Value>),
    Wrapped { ideas: Vec<Value> },
}

/// Decodes idea records from a JSON string.
///
/// Duplicate ids and unparseable timestamps are logged but kept; ranking
/// treats an unparseable timestamp as "now".
///
/// # Errors
///
/// - [`RecordError::MalformedDocument`] if the JSON is invalid or has the wrong shape
/// - [`RecordError::InvalidRecord`] if any record fails to decode
pub fn load_records_from_json(json: &str) -> Result<Vec<IdeaRecord>, RecordError> {
    let document: RecordsDocument = serde_json::from_str(json).map_err(|e| {
        RecordError::MalformedDocument(format!(
            "expected an array of ideas or an object with an \"ideas\" array ({e})"
        ))
    })?;

    let values = match document {
        RecordsDocument::List(values) => values,
        RecordsDocument::Wrapped { ideas } => ideas,
    };

    let records = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<IdeaRecord>(value).map_err(|e| RecordError::InvalidRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    report_suspicious(&records);
    Ok(records)
}

/// Reads and decodes idea records from a JSON file.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_records_from_path(path: &Path) -> Result<Vec<IdeaRecord>, RecordError> {
    let json = std::fs::read_to_string(path).map_err(|e| RecordError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let records = load_records_from_json(&json)?;
    info!("Loaded {} idea records", records.len());
    Ok(records)
}

fn report_suspicious(records: &[IdeaRecord]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            warn!(id = %record.id(), "Duplicate idea id");
        }

        let bad_timestamp = [record.created_at(), record.updated_at()]
            .into_iter()
            .flatten()
            .any(Timestamp::is_unparseable);
        if bad_timestamp {
            warn!(id = %record.id(), "Unparseable timestamp, it will rank as if written now");
        }
    }
}
