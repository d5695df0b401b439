//! Planner dry-run job metadata.
//!
//! These types mirror the subset of the BigQuery REST job resource the
//! validator consumes. Field names follow the REST wire format (camelCase)
//! so a job captured with `bq query --dry_run --format=json` deserializes
//! directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A dry-run job as returned by the planner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Identity of the job within the planner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_reference: Option<JobReference>,
    /// Statistics produced by the dry run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<JobStatistics>,
}

impl Job {
    /// Convenience constructor for a job that only carries query statistics.
    pub fn with_query_statistics(query: QueryStatistics) -> Self {
        Self {
            job_reference: None,
            statistics: Some(JobStatistics { query: Some(query) }),
        }
    }

    /// The query statistics, if the planner returned any.
    pub fn query_statistics(&self) -> Option<&QueryStatistics> {
        self.statistics.as_ref().and_then(|s| s.query.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobReference {
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryStatistics>,
}

/// Query analysis from the dry run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryStatistics {
    /// Planner classification, e.g. `SELECT`, `CREATE_SCHEMA`, `CALL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_type: Option<String>,
    /// Every table the statement reads, including tables reached through
    /// view definitions the statement never names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub referenced_tables: Vec<TableReference>,
    /// Target table of a DDL statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddl_target_table: Option<TableReference>,
    /// Destination table of a DDL statement such as CREATE TABLE AS SELECT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddl_destination_table: Option<TableReference>,
    /// Estimated bytes the query would process. Int64 fields are strings on
    /// the REST wire.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bytes_processed: Option<String>,
}

/// A fully qualified table identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableReference {
    pub project_id: String,
    pub dataset_id: String,
    pub table_id: String,
}

impl TableReference {
    pub fn new(
        project_id: impl Into<String>,
        dataset_id: impl Into<String>,
        table_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            dataset_id: dataset_id.into(),
            table_id: table_id.into(),
        }
    }

    /// The canonical `project.dataset.table` form.
    pub fn dotted(&self) -> String {
        format!("{}.{}.{}", self.project_id, self.dataset_id, self.table_id)
    }
}

/// A query parameter forwarded to the dry run, REST shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameter {
    /// Parameter name; `None` for positional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub parameter_type: QueryParameterType,
    pub parameter_value: QueryParameterValue,
}

impl QueryParameter {
    /// A positional parameter of the given BigQuery type.
    pub fn positional(bq_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: None,
            parameter_type: QueryParameterType {
                kind: bq_type.into(),
            },
            parameter_value: QueryParameterValue {
                value: Some(value.into()),
            },
        }
    }

    /// A named parameter of the given BigQuery type.
    pub fn named(
        name: impl Into<String>,
        bq_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::positional(bq_type, value)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QueryParameterType {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QueryParameterValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A connection property forwarded to the dry run, e.g. a session ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionProperty {
    pub key: String,
    pub value: String,
}
