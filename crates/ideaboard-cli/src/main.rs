//! Ideaboard CLI - rank, search and feature ideas from a JSON export.
//!
//! # Usage
//!
//! ```bash
//! # Smart-ranked feed
//! ideaboard rank
//! ideaboard rank mostLiked -n 5
//!
//! # Keyword search
//! ideaboard search "ai tutor" --json
//!
//! # This week's (or last week's) most liked ideas
//! ideaboard winners
//! ideaboard winners --previous
//!
//! # Today's featured idea, or the coming week's rotation
//! ideaboard featured --days 7
//! ```
//!
//! Records are read from `--records`, then `$IDEABOARD_RECORDS`, then
//! `ideas.json` in the platform data directory.

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ideaboard_core::config::WEEKLY_WINNERS_LIMIT;
use ideaboard_core::record::load_records_from_path;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Ideaboard ranking and search CLI.
#[derive(Parser)]
#[command(name = "ideaboard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON export of idea records (default: platform data directory)
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Sort ideas with a named strategy
    Rank {
        /// smart, newest, mostLiked, recentlyUpdated or traction
        #[arg(default_value = "smart")]
        strategy: String,

        /// Maximum number of ideas to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Reference time as epoch milliseconds or a date (default: now)
        #[arg(long)]
        now: Option<String>,
    },

    /// Keyword search across idea fields
    Search {
        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Most liked ideas created this week
    Winners {
        /// Maximum number of winners
        #[arg(short = 'n', long, default_value_t = WEEKLY_WINNERS_LIMIT)]
        limit: usize,

        /// Show the previous week instead
        #[arg(long)]
        previous: bool,

        /// Reference time as epoch milliseconds or a date (default: now)
        #[arg(long)]
        now: Option<String>,
    },

    /// Today's featured idea
    Featured {
        /// Number of consecutive days to show
        #[arg(long, default_value = "1")]
        days: usize,

        /// Reference time as epoch milliseconds or a date (default: now)
        #[arg(long)]
        now: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let path = config::records_path(cli.records.as_ref())?;
    let records = load_records_from_path(&path)
        .with_context(|| format!("Failed to load ideas from {}", path.display()))?;

    let output = match &cli.command {
        Command::Rank {
            strategy,
            limit,
            now,
        } => {
            let now_ms = config::resolve_now(now.as_deref())?;
            commands::run_rank(&records, strategy, *limit, now_ms, cli.json)
        }
        Command::Search { query, limit } => {
            commands::run_search(&records, query, *limit, cli.json)
        }
        Command::Winners {
            limit,
            previous,
            now,
        } => {
            let now_ms = config::resolve_now(now.as_deref())?;
            commands::run_winners(&records, *limit, *previous, now_ms, cli.json)
        }
        Command::Featured { days, now } => {
            let now_ms = config::resolve_now(now.as_deref())?;
            commands::run_featured(&records, *days, now_ms, cli.json)
        }
    };

    println!("{}", output);
    Ok(())
}
