//! Configuration handling for the bq-guard CLI.
//!
//! Configuration comes from CLI arguments with environment-variable
//! fallbacks.

use clap::Parser;
use std::path::PathBuf;

use crate::allowlist::AllowList;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for the bq-guard CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bq-guard",
    about = "Check a BigQuery SQL statement against a dataset allow-list",
    version,
    author
)]
pub struct Config {
    /// SQL statement or script to check.
    pub sql: String,

    /// Billing project; also the default project for two-part table names.
    #[arg(short, long, env = "BQ_GUARD_PROJECT", default_value = "")]
    pub project: String,

    /// Job location passed to the planner. Empty lets the backend infer it.
    #[arg(long, env = "BQ_GUARD_LOCATION", default_value = "")]
    pub location: String,

    /// Allowed dataset as project.dataset.
    /// Can be specified multiple times or comma-separated.
    /// No occurrences means no restriction.
    #[arg(
        short = 'a',
        long = "allowed-dataset",
        value_name = "PROJECT.DATASET",
        env = "BQ_GUARD_ALLOWED_DATASETS",
        value_delimiter = ','
    )]
    pub allowed_datasets: Vec<String>,

    /// Path to a dry-run job JSON captured with
    /// `bq query --dry_run --format=json`; enables the full cross-check
    /// instead of the text-only scan.
    #[arg(long, value_name = "PATH")]
    pub dry_run_job: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, env = "BQ_GUARD_LOG_LEVEL")]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, env = "BQ_GUARD_JSON_LOGS")]
    pub json_logs: bool,
}

impl Config {
    /// Parse configuration from command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the allow-list from the configured entries.
    pub fn allow_list(&self) -> Result<AllowList, String> {
        AllowList::parse(&self.allowed_datasets)
    }

    /// The default project for promoting two-part table names, if set.
    pub fn default_project(&self) -> Option<&str> {
        (!self.project.is_empty()).then_some(self.project.as_str())
    }
}
