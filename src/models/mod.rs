//! Data models shared across the validator.
//!
//! - `job`: the planner dry-run job metadata (REST wire shape)
//! - `parameter`: tool-parameter descriptors and BigQuery type mapping

pub mod job;
pub mod parameter;

pub use job::{
    ConnectionProperty, Job, JobReference, JobStatistics, QueryParameter, QueryParameterType,
    QueryParameterValue, QueryStatistics, TableReference,
};
pub use parameter::{ToolParameter, bigquery_type};
