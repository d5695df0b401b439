//! Error types for bq-guard.
//!
//! This module defines all error types using `thiserror`. Every variant
//! renders as a single-line, user-visible message; callers match on the
//! variant when they need to distinguish policy denials from analysis
//! failures.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    /// The planner rejected or failed to accept the dry-run job.
    #[error("failed to insert dry run job: {message}")]
    DryRunSubmit { message: String },

    /// Wrapper used by the validator around any planner failure.
    #[error("query validation failed: {message}")]
    Validation { message: String },

    /// The dry run succeeded but carried no query statistics.
    #[error("dry run failed to return query statistics")]
    MissingStatistics,

    /// The planner classified the statement as a schema-level operation.
    #[error(
        "dataset-level operations like '{statement_type}' are not allowed when dataset restrictions are in place"
    )]
    SchemaStatement { statement_type: String },

    /// The planner classified the statement as a routine definition.
    #[error(
        "creating stored routines ('{statement_type}') is not allowed when dataset restrictions are in place, as their contents cannot be safely analyzed"
    )]
    RoutineStatement { statement_type: String },

    /// The planner classified the statement as a procedure call.
    #[error(
        "calling stored procedures ('{statement_type}') is not allowed when dataset restrictions are in place, as their contents cannot be safely analyzed"
    )]
    CallStatement { statement_type: String },

    /// The lexical scanner saw a bare CALL keyword.
    #[error(
        "CALL is not allowed when dataset restrictions are in place, as the called procedure's contents cannot be safely analyzed"
    )]
    Call,

    /// EXECUTE IMMEDIATE with an operand the scanner cannot expand.
    #[error(
        "EXECUTE IMMEDIATE is not allowed when dataset restrictions are in place, as its contents cannot be safely analyzed"
    )]
    ExecuteImmediate,

    /// The lexical scanner saw a routine definition.
    #[error("unanalyzable statements like '{verb} {kind}' are not allowed")]
    Unanalyzable { verb: String, kind: String },

    /// The lexical scanner saw a schema-level operation.
    #[error(
        "dataset-level operations like '{verb} {kind}' are not allowed when dataset restrictions are in place"
    )]
    DatasetOperation { verb: String, kind: String },

    /// The statement reads or writes a dataset outside the allow-list.
    #[error("access to dataset '{dataset}' is not allowed")]
    DatasetDenied { dataset: String },

    #[error("unclosed backtick identifier")]
    UnclosedBacktick,

    #[error("unclosed subquery parenthesis")]
    UnclosedSubquery,

    /// A two-part table name with no default project to promote it.
    #[error(
        "query contains table '{table}' without project ID, and no default project ID is provided"
    )]
    MissingProject { table: String },

    /// The fallback parse failed; the query cannot be allowed safely.
    #[error("could not safely analyze query with dataset restrictions: {message}")]
    Indeterminate { message: String },

    /// The explicit-reference scan failed.
    #[error("failed to analyze query for explicit table references: {message}")]
    AuditFailed { message: String },

    #[error("unsupported tool parameter type for BigQuery: {tool_type}")]
    UnsupportedType { tool_type: String },
}

impl GuardError {
    /// Create a dry-run submission error.
    pub fn dry_run_submit(message: impl Into<String>) -> Self {
        Self::DryRunSubmit {
            message: message.into(),
        }
    }

    /// Wrap a planner failure as a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a dataset access denial for a `project.dataset` pair.
    pub fn dataset_denied(dataset: impl Into<String>) -> Self {
        Self::DatasetDenied {
            dataset: dataset.into(),
        }
    }

    /// Wrap a parse failure that prevents a safe verdict.
    pub fn indeterminate(message: impl Into<String>) -> Self {
        Self::Indeterminate {
            message: message.into(),
        }
    }

    /// Wrap an explicit-reference scan failure.
    pub fn audit(message: impl Into<String>) -> Self {
        Self::AuditFailed {
            message: message.into(),
        }
    }

    /// Check if this error is a policy decision rather than a failure to
    /// analyze. Policy denials are final; analysis failures may succeed on a
    /// reworded query.
    pub fn is_policy_deny(&self) -> bool {
        matches!(
            self,
            Self::SchemaStatement { .. }
                | Self::RoutineStatement { .. }
                | Self::CallStatement { .. }
                | Self::Call
                | Self::ExecuteImmediate
                | Self::Unanalyzable { .. }
                | Self::DatasetOperation { .. }
                | Self::DatasetDenied { .. }
        )
    }
}

/// Result type alias for validation operations.
pub type GuardResult<T> = Result<T, GuardError>;
