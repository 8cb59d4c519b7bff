//! Configuration and path resolution for the CLI.
//!
//! Finds the idea export to read and the reference time to rank at:
//! - Records: `--records` flag, then `$IDEABOARD_RECORDS`, then the platform data directory
//! - Now: `--now` (epoch millis or calendar text), otherwise the system clock

use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use ideaboard_core::record::{current_timestamp_millis, timestamp::parse_calendar_millis};
use std::path::PathBuf;

/// Export file name inside the data directory
const RECORDS_FILENAME: &str = "ideas.json";

/// Environment variable for a custom export path
const RECORDS_ENV: &str = "IDEABOARD_RECORDS";

/// Returns the path of the idea export to read.
///
/// Search order:
/// 1. `--records` flag
/// 2. `$IDEABOARD_RECORDS` environment variable
/// 3. `ideas.json` in the platform data directory
pub fn records_path(custom: Option<&PathBuf>) -> Result<PathBuf> {
    resolve_records_path(custom, std::env::var(RECORDS_ENV).ok())
}

fn resolve_records_path(custom: Option<&PathBuf>, env_value: Option<String>) -> Result<PathBuf> {
    if let Some(path) = custom {
        return Ok(path.clone());
    }

    if let Some(path) = env_value.filter(|value| !value.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    Ok(get_data_dir()?.join(RECORDS_FILENAME))
}

/// Returns the platform data directory.
///
/// - macOS: `~/Library/Application Support/com.ideaboard.Ideaboard/`
/// - Linux: `~/.local/share/ideaboard/`
/// - Windows: `%APPDATA%\ideaboard\Ideaboard\data\`
pub fn get_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "ideaboard", "Ideaboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| anyhow!("Could not determine data directory"))
}

/// Resolves the reference time for ranking, in epoch milliseconds.
///
/// Unlike record timestamps, a `--now` the user typed is never silently
/// replaced: unparseable input is an error.
pub fn resolve_now(now: Option<&str>) -> Result<i64> {
    let Some(text) = now else {
        return Ok(current_timestamp_millis());
    };

    let ms = match text.trim().parse::<i64>() {
        Ok(ms) => ms,
        Err(_) => parse_calendar_millis(text).ok_or_else(|| {
            anyhow!(
                "Invalid --now value \"{}\". Use epoch milliseconds or a date like 2024-03-13T12:00:00Z",
                text
            )
        })?,
    };

    if DateTime::<Utc>::from_timestamp_millis(ms).is_none() {
        bail!("--now value {} is outside the supported date range", ms);
    }
    Ok(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let custom = PathBuf::from("/tmp/custom.json");
        let path = resolve_records_path(Some(&custom), Some("/tmp/env.json".to_string())).unwrap();
        assert_eq!(path, custom);
    }

    #[test]
    fn test_env_used_without_flag() {
        let path = resolve_records_path(None, Some("/tmp/env.json".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/env.json"));
    }

    #[test]
    fn test_blank_env_falls_through_to_data_dir() {
        if let Ok(path) = resolve_records_path(None, Some("  ".to_string())) {
            assert!(path.ends_with(RECORDS_FILENAME));
        }
    }

    #[test]
    fn test_data_dir_uses_app_name() {
        // Not every CI environment has a home directory
        if let Ok(dir) = get_data_dir() {
            let dir_str = dir.to_string_lossy().to_lowercase();
            assert!(dir_str.contains("ideaboard"), "unexpected data dir: {dir_str}");
        }
    }

    #[test]
    fn test_resolve_now_millis() {
        assert_eq!(resolve_now(Some("1710331200000")).unwrap(), 1_710_331_200_000);
    }

    #[test]
    fn test_resolve_now_calendar() {
        assert_eq!(
            resolve_now(Some("2024-03-13T12:00:00Z")).unwrap(),
            1_710_331_200_000
        );
        assert_eq!(resolve_now(Some("2024-03-11")).unwrap(), 1_710_115_200_000);
    }

    #[test]
    fn test_resolve_now_rejects_garbage() {
        let err = resolve_now(Some("next tuesday")).unwrap_err();
        assert!(err.to_string().contains("Invalid --now"));
    }

    #[test]
    fn test_resolve_now_rejects_out_of_range_millis() {
        let err = resolve_now(Some("9223372036854775807")).unwrap_err();
        assert!(err.to_string().contains("outside the supported date range"));
        assert!(resolve_now(Some("-9223372036854775808")).is_err());

        // 9999-12-31T23:59:59Z is still accepted
        assert_eq!(
            resolve_now(Some("253402300799000")).unwrap(),
            253_402_300_799_000
        );
    }

    #[test]
    fn test_resolve_now_defaults_to_clock() {
        assert!(resolve_now(None).unwrap() > 1_577_836_800_000);
    }
}
