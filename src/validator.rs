//! Cross-check validation of a statement against a dataset allow-list.
//!
//! Two sources of truth are fused. The planner's dry run is authoritative
//! about what a statement *reaches* - it resolves views, including authorized
//! views into datasets the caller cannot touch directly. The local scan is
//! authoritative about what the caller *wrote*. Trusting either alone admits
//! a bypass: the planner over-reports through authorized views, the text
//! under-reports through anything the scanner cannot follow. The verdict is
//! allow only when both agree, and every indeterminate state is a deny.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::allowlist::DatasetPolicy;
use crate::error::{GuardError, GuardResult};
use crate::models::{ConnectionProperty, Job, QueryParameter};
use crate::planner::{DryRunRequest, QueryPlanner};
use crate::sql::{is_any_table_explicitly_referenced, parse_tables};

/// Statement types that operate on whole datasets.
const SCHEMA_STATEMENT_TYPES: &[&str] = &["CREATE_SCHEMA", "DROP_SCHEMA", "ALTER_SCHEMA"];

/// Statement types that define routines whose bodies escape analysis.
const ROUTINE_STATEMENT_TYPES: &[&str] =
    &["CREATE_FUNCTION", "CREATE_TABLE_FUNCTION", "CREATE_PROCEDURE"];

/// Validate `sql` against the dataset policy and return the planner's
/// metadata for it.
///
/// `project` doubles as the default project for two-part table names in the
/// statement. Failures carry the user-visible denial or analysis error.
pub async fn validate_query<P: QueryPlanner, D: DatasetPolicy + ?Sized>(
    planner: &P,
    project: &str,
    location: &str,
    sql: &str,
    parameters: &[QueryParameter],
    connection_properties: &[ConnectionProperty],
    policy: &D,
) -> GuardResult<Job> {
    let request = DryRunRequest {
        project,
        location,
        sql,
        parameters,
        connection_properties,
    };
    let job = planner
        .dry_run(request)
        .await
        .map_err(|e| GuardError::validation(e.to_string()))?;

    let stats = job
        .query_statistics()
        .ok_or(GuardError::MissingStatistics)?;

    if let Some(statement_type) = stats.statement_type.as_deref() {
        if SCHEMA_STATEMENT_TYPES.contains(&statement_type) {
            return Err(GuardError::SchemaStatement {
                statement_type: statement_type.to_string(),
            });
        }
        if ROUTINE_STATEMENT_TYPES.contains(&statement_type) {
            return Err(GuardError::RoutineStatement {
                statement_type: statement_type.to_string(),
            });
        }
        if statement_type == "CALL" {
            return Err(GuardError::CallStatement {
                statement_type: statement_type.to_string(),
            });
        }
    }

    let mut planner_tables: BTreeSet<String> = stats
        .referenced_tables
        .iter()
        .map(|t| t.dotted())
        .collect();
    if let Some(table) = &stats.ddl_target_table {
        planner_tables.insert(table.dotted());
    }
    if let Some(table) = &stats.ddl_destination_table {
        planner_tables.insert(table.dotted());
    }

    let violations: Vec<String> = planner_tables
        .iter()
        .filter(|id| !table_allowed(id, policy))
        .cloned()
        .collect();

    if !planner_tables.is_empty() && violations.is_empty() {
        debug!(
            tables = planner_tables.len(),
            "dry run references only allowed datasets"
        );
        return Ok(job);
    }

    let default_project = (!project.is_empty()).then_some(project);

    if !violations.is_empty() {
        // Tables the caller typed are direct access and a hard deny; tables
        // only the planner sees came in through authorized views.
        let explicit = is_any_table_explicitly_referenced(sql, default_project, &violations)
            .map_err(|e| GuardError::audit(e.to_string()))?;
        if explicit {
            return Err(GuardError::dataset_denied(dataset_of(&violations[0])));
        }
        debug!(
            violations = violations.len(),
            "disallowed tables are not named in the statement; re-checking the text"
        );
    }

    // Final check on the caller's own words, also covering dry runs that
    // reported no tables at all.
    let parsed =
        parse_tables(sql, default_project).map_err(|e| GuardError::indeterminate(e.to_string()))?;
    for id in &parsed {
        if !table_allowed(id, policy) {
            return Err(GuardError::dataset_denied(dataset_of(id)));
        }
    }

    info!(
        planner_tables = planner_tables.len(),
        parsed_tables = parsed.len(),
        "statement validated against dataset restrictions"
    );
    Ok(job)
}

fn table_allowed<D: DatasetPolicy + ?Sized>(table_id: &str, policy: &D) -> bool {
    let parts: Vec<&str> = table_id.split('.').collect();
    match parts.as_slice() {
        [project, dataset, _] => policy.is_allowed(project, dataset),
        _ => true,
    }
}

/// The `project.dataset` prefix of a dotted table ID.
fn dataset_of(table_id: &str) -> String {
    table_id
        .split('.')
        .take(2)
        .collect::<Vec<_>>()
        .join(".")
}
