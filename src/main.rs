//! bq-guard - Main entry point.
//!
//! Checks a BigQuery SQL statement against a dataset allow-list. By default
//! only the local text scan runs; with `--dry-run-job` pointing at captured
//! planner output, the full cross-check validation runs as it would inside a
//! deployment.

use clap::Parser;

use bq_guard::allowlist::DatasetPolicy;
use bq_guard::config::Config;
use bq_guard::planner::StaticPlanner;
use bq_guard::sql::parse_tables;
use bq_guard::validator::validate_query;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_tracing(&config);

    let allow_list = config.allow_list()?;
    debug!(
        datasets = allow_list.len(),
        project = %config.project,
        "checking statement"
    );

    if let Some(path) = &config.dry_run_job {
        let raw = std::fs::read_to_string(path)?;
        let planner = StaticPlanner::from_json(&raw)?;
        match validate_query(
            &planner,
            &config.project,
            &config.location,
            &config.sql,
            &[],
            &[],
            &allow_list,
        )
        .await
        {
            Ok(job) => {
                if let Some(stats) = job.query_statistics() {
                    for table in &stats.referenced_tables {
                        println!("{}", table.dotted());
                    }
                    if let Some(bytes) = &stats.total_bytes_processed {
                        println!("estimated bytes processed: {bytes}");
                    }
                }
                println!("ALLOW");
            }
            Err(e) => {
                println!("DENY: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    match parse_tables(&config.sql, config.default_project()) {
        Ok(tables) => {
            let mut denied = false;
            for table in &tables {
                let parts: Vec<&str> = table.split('.').collect();
                let allowed = match parts.as_slice() {
                    [project, dataset, _] => allow_list.is_allowed(project, dataset),
                    _ => true,
                };
                if !allowed {
                    denied = true;
                }
                println!("{table}{}", if allowed { "" } else { "  [not allowed]" });
            }
            if denied {
                println!("DENY");
                std::process::exit(1);
            }
            println!("ALLOW");
        }
        Err(e) => {
            println!("DENY: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
