//! bq-guard Library
//!
//! Dataset access-control validation for BigQuery SQL. Given a statement, a
//! dataset allow-list, and a handle to the backend's query planner, the
//! validator decides whether the statement may run and returns the planner's
//! dry-run metadata when it may.
//!
//! The verdict fuses two sources: the planner's referenced-table list (which
//! sees through views, including authorized views) and a conservative local
//! scan of the text (which sees what the caller actually wrote). A statement
//! is allowed only when both sources stay inside the allow-list; anything
//! the analysis cannot follow is denied.

pub mod allowlist;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod sql;
pub mod validator;

pub use allowlist::{AllowList, DatasetPolicy, dataset_parameters};
pub use error::{GuardError, GuardResult};
pub use models::{Job, bigquery_type};
pub use planner::{DryRunRequest, QueryPlanner, StaticPlanner};
pub use sql::{is_any_table_explicitly_referenced, parse_tables};
pub use validator::validate_query;
