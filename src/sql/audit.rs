//! Explicit table-reference detection.
//!
//! The dry run reports every table a statement reaches, including tables
//! pulled in by authorized views the caller never named. To tell direct
//! access apart from view fan-out, this scan answers a narrower question:
//! does the text itself contain one of the target tables as an identifier?
//! Keyword context is irrelevant here; only strings and comments are skipped.

use crate::error::GuardResult;

use super::identifier::parse_identifier_sequence;
use super::scan::{ScanState, comment_start, step_inside, string_start};

/// Check whether the SQL text literally names any of `targets`.
///
/// Targets are `project.dataset.table` strings; comparison is lowercased.
/// A match is the target itself or the target followed by `.column`. When a
/// default project is configured, two-part references are also tried with
/// that prefix. Occurrences inside string literals or comments never match.
pub fn is_any_table_explicitly_referenced(
    sql: &str,
    default_project: Option<&str>,
    targets: &[String],
) -> GuardResult<bool> {
    if targets.is_empty() {
        return Ok(false);
    }
    let targets: Vec<String> = targets.iter().map(|t| t.to_ascii_lowercase()).collect();

    let chars: Vec<char> = sql.chars().collect();
    let mut state = ScanState::Normal;
    let mut i = 0usize;
    while i < chars.len() {
        if state != ScanState::Normal {
            (state, i) = step_inside(state, &chars, i);
            continue;
        }
        if let Some((comment, skip)) = comment_start(&chars, i) {
            state = comment;
            i += skip;
            continue;
        }
        if let Some((string, skip)) = string_start(&chars, i) {
            state = string;
            i += skip;
            continue;
        }

        let c = chars[i];
        if c.is_alphabetic() || c == '`' || c == '_' {
            let (parts, consumed) = parse_identifier_sequence(&chars[i..])?;
            if consumed > 0 {
                if parts.len() >= 2 {
                    let full_id = parts.join(".").to_ascii_lowercase();
                    if matches_any(&full_id, default_project, &targets) {
                        return Ok(true);
                    }
                }
                i += consumed;
                continue;
            }
        }
        i += 1;
    }

    Ok(false)
}

fn matches_any(full_id: &str, default_project: Option<&str>, targets: &[String]) -> bool {
    let stripped_id = strip_backticks(full_id);
    for target in targets {
        if matches_target(full_id, target) {
            return true;
        }
        // Callers may hand in quoted targets; compare without backticks too.
        if matches_target(&stripped_id, &strip_backticks(target)) {
            return true;
        }
        if let Some(project) = default_project {
            let qualified = format!("{}.{full_id}", project.to_ascii_lowercase());
            if matches_target(&qualified, target) {
                return true;
            }
        }
    }
    false
}

/// Exact match, or the target as the table qualifier of a column reference.
fn matches_target(id: &str, target: &str) -> bool {
    id == target
        || id
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('.'))
}

fn strip_backticks(s: &str) -> String {
    s.chars().filter(|&c| c != '`').collect()
}
