//! The planner handle consumed by the validator.
//!
//! The validator needs exactly one backend operation: a no-execute dry run
//! that returns job statistics. The concrete RPC client lives with the
//! embedding application; this crate defines the contract and a canned
//! implementation for tests and offline use.

use std::future::Future;

use crate::error::{GuardError, GuardResult};
use crate::models::{ConnectionProperty, Job, QueryParameter};

/// One dry-run submission.
#[derive(Debug, Clone, Copy)]
pub struct DryRunRequest<'a> {
    /// Billing project the job runs under.
    pub project: &'a str,
    /// Job location; empty lets the backend infer it.
    pub location: &'a str,
    pub sql: &'a str,
    pub parameters: &'a [QueryParameter],
    pub connection_properties: &'a [ConnectionProperty],
}

/// A query planner that can analyze a statement without executing it.
///
/// Implementations submit the request with `dryRun` set and legacy SQL
/// disabled, and surface transport failures as
/// [`GuardError::DryRunSubmit`]. Cancellation is the caller's: dropping the
/// returned future abandons the dry run.
pub trait QueryPlanner: Send + Sync {
    fn dry_run(
        &self,
        request: DryRunRequest<'_>,
    ) -> impl Future<Output = GuardResult<Job>> + Send;
}

/// A planner that replays a canned dry-run result.
///
/// Used by tests, and by the CLI to validate against a job captured with
/// `bq query --dry_run --format=json`.
#[derive(Debug, Clone)]
pub struct StaticPlanner {
    result: Result<Job, String>,
}

impl StaticPlanner {
    /// A planner that returns `job` for every request.
    pub fn new(job: Job) -> Self {
        Self { result: Ok(job) }
    }

    /// A planner whose dry run fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
        }
    }

    /// Load a captured job from its REST JSON representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl QueryPlanner for StaticPlanner {
    async fn dry_run(&self, _request: DryRunRequest<'_>) -> GuardResult<Job> {
        match &self.result {
            Ok(job) => Ok(job.clone()),
            Err(message) => Err(GuardError::dry_run_submit(message.clone())),
        }
    }
}
