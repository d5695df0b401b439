//! Table-reference extraction from BigQuery SQL.
//!
//! A single forward scan drives a keyword-context state machine: after
//! `FROM`/`JOIN`/`INTO`/... the next identifier sequence is a table, `WITH`
//! introduces CTE names, `AS` and bare post-source identifiers introduce
//! aliases, and parentheses recurse into subqueries. `EXECUTE IMMEDIATE`
//! over a plain string literal is expanded and scanned recursively; any
//! other dynamic SQL is refused, as are statements (CALL, routine creation,
//! schema DDL) whose effects cannot be determined from the text.
//!
//! The scan deliberately over-approximates: an identifier it cannot place is
//! never silently treated as a table in an allowed dataset.

use std::collections::HashSet;

use crate::error::{GuardError, GuardResult};

use super::identifier::{parse_identifier_sequence, skip_whitespace_and_comments};
use super::scan::{ScanState, comment_start, step_inside, string_start};

/// Keywords after which an identifier sequence names a table.
const TABLE_FOLLOWS_KEYWORDS: &[&str] = &[
    "from", "join", "update", "into", "table", "using", "insert", "merge",
];

/// Keywords that end a table context.
const TABLE_CONTEXT_EXIT_KEYWORDS: &[&str] = &[
    "where",
    "group",
    "having",
    "order",
    "limit",
    "window",
    "union",
    "intersect",
    "except",
    "on",
    "set",
    "when",
];

/// Leading DML/DDL verbs of a statement.
const STATEMENT_VERBS: &[&str] = &[
    "select", "insert", "update", "delete", "merge", "create", "alter", "drop",
];

fn is_table_follows(keyword: &str) -> bool {
    TABLE_FOLLOWS_KEYWORDS.contains(&keyword)
}

fn is_context_exit(keyword: &str) -> bool {
    TABLE_CONTEXT_EXIT_KEYWORDS.contains(&keyword)
}

/// Keywords that can never be an alias name in alias position.
fn is_structural_keyword(keyword: &str) -> bool {
    is_table_follows(keyword)
        || is_context_exit(keyword)
        || keyword == "select"
        || keyword == "with"
}

/// Accumulators shared across one top-level parse, including every subquery
/// and expanded dynamic-SQL literal.
#[derive(Debug, Default)]
struct ParseContext {
    /// Fully qualified tables collected so far.
    tables: HashSet<String>,
    /// SQL strings already scanned; cuts recursion cycles.
    visited: HashSet<String>,
    /// Lowercased CTE names and aliases, both dotted and first-part forms.
    aliases: HashSet<String>,
}

/// Extract the set of fully qualified `project.dataset.table` references
/// from a SQL statement or script.
///
/// Two-part references are promoted with `default_project`; without one they
/// fail rather than being dropped. CTE names and aliases are suppressed from
/// the result. The returned list is sorted.
///
/// # Examples
///
/// ```
/// use bq_guard::sql::parse_tables;
///
/// let tables = parse_tables(
///     "WITH t AS (SELECT 1) SELECT * FROM t JOIN ok.users u ON 1 = 1",
///     Some("proj"),
/// )
/// .unwrap();
/// assert_eq!(tables, ["proj.ok.users"]);
/// ```
pub fn parse_tables(sql: &str, default_project: Option<&str>) -> GuardResult<Vec<String>> {
    let mut ctx = ParseContext::default();
    parse_sql(sql, default_project, &mut ctx, false)?;

    let ParseContext {
        tables, aliases, ..
    } = ctx;
    let mut ids: Vec<String> = tables
        .into_iter()
        .filter(|id| {
            let parts: Vec<&str> = id.split('.').collect();
            !(0..parts.len())
                .any(|j| aliases.contains(&parts[j..].join(".").to_ascii_lowercase()))
        })
        .collect();
    ids.sort();
    Ok(ids)
}

/// Scan one SQL string, collecting tables and aliases into `ctx`.
///
/// Returns the number of code points consumed. In a subquery the scan stops
/// at the matching closing parenthesis; reaching the end of input there is a
/// failure.
fn parse_sql(
    sql: &str,
    default_project: Option<&str>,
    ctx: &mut ParseContext,
    in_subquery: bool,
) -> GuardResult<usize> {
    if ctx.visited.contains(sql) {
        return Ok(sql.chars().count());
    }
    ctx.visited.insert(sql.to_owned());

    let chars: Vec<char> = sql.chars().collect();
    let mut state = ScanState::Normal;
    let mut expecting_table = false;
    let mut expecting_alias = false;
    let mut expecting_cte = false;
    let mut last_table_keyword = String::new();
    let mut last_token = String::new();
    let mut statement_verb = String::new();

    let mut i = 0usize;
    while i < chars.len() {
        if state != ScanState::Normal {
            (state, i) = step_inside(state, &chars, i);
            continue;
        }
        let c = chars[i];

        if let Some((comment, skip)) = comment_start(&chars, i) {
            state = comment;
            i += skip;
            continue;
        }
        if c == ',' {
            if last_table_keyword == "from" {
                expecting_table = true;
                expecting_alias = false;
            } else if statement_verb == "with" {
                expecting_cte = true;
                expecting_alias = false;
            }
            i += 1;
            continue;
        }
        if c == '(' && (expecting_table || expecting_cte || last_token == "as") {
            let rest: String = chars[i + 1..].iter().collect();
            let consumed = parse_sql(&rest, default_project, ctx, true)?;
            i += consumed + 1;
            // A comma list after FROM may hold several parenthesized sources.
            if last_table_keyword != "from" {
                expecting_table = false;
            }
            expecting_alias = true;
            expecting_cte = false;
            continue;
        }
        if c == ')' && in_subquery {
            return Ok(i + 1);
        }
        if c == ';' {
            statement_verb.clear();
            last_token.clear();
            expecting_table = false;
            expecting_alias = false;
            expecting_cte = false;
            i += 1;
            continue;
        }
        if let Some((string, skip)) = string_start(&chars, i) {
            state = string;
            i += skip;
            continue;
        }

        if c.is_alphabetic() || c == '`' || c == '_' {
            let (parts, consumed) = parse_identifier_sequence(&chars[i..])?;
            if consumed == 0 {
                i += 1;
                continue;
            }
            let keyword = parts[0].to_ascii_lowercase();
            let full_id = parts.join(".").to_ascii_lowercase();

            // Operations that hide their targets are refused outright.
            if parts.len() == 1 {
                match keyword.as_str() {
                    "call" => return Err(GuardError::Call),
                    "immediate" if last_token == "execute" => {
                        i = expand_dynamic_sql(&chars, i + consumed, default_project, ctx)?;
                        last_token = keyword.clone();
                        continue;
                    }
                    "procedure" | "function"
                        if matches!(
                            last_token.as_str(),
                            "create" | "create or" | "create or replace"
                        ) =>
                    {
                        return Err(GuardError::Unanalyzable {
                            verb: last_token.to_uppercase(),
                            kind: keyword.to_uppercase(),
                        });
                    }
                    "function" if last_token == "table" && statement_verb == "create" => {
                        return Err(GuardError::Unanalyzable {
                            verb: "CREATE".to_string(),
                            kind: "TABLE FUNCTION".to_string(),
                        });
                    }
                    _ => {}
                }

                if STATEMENT_VERBS.contains(&keyword.as_str())
                    && (statement_verb.is_empty() || statement_verb == "with")
                {
                    statement_verb = keyword.clone();
                }

                if matches!(statement_verb.as_str(), "create" | "alter" | "drop")
                    && (keyword == "schema" || keyword == "dataset")
                {
                    return Err(GuardError::DatasetOperation {
                        verb: statement_verb.to_uppercase(),
                        kind: keyword.to_uppercase(),
                    });
                }
            }

            // Decide whether this identifier is an alias or a table.
            let mut is_known_alias = ctx.aliases.contains(&full_id)
                || (parts.len() > 1 && ctx.aliases.contains(&parts[0].to_ascii_lowercase()));

            if expecting_cte {
                ctx.aliases.insert(full_id.clone());
                ctx.aliases.insert(parts[0].to_ascii_lowercase());
                expecting_cte = false;
            } else if expecting_alias {
                if parts.len() == 1 && is_structural_keyword(&keyword) {
                    expecting_alias = false;
                } else {
                    ctx.aliases.insert(full_id.clone());
                    ctx.aliases.insert(parts[0].to_ascii_lowercase());
                    expecting_alias = false;
                    is_known_alias = true;
                }
            }

            if !is_known_alias && ctx.aliases.contains(&full_id) {
                is_known_alias = true;
            }

            if expecting_table && !is_known_alias {
                if parts.len() >= 2 {
                    if let Some(id) = format_table_id(&parts, default_project)? {
                        ctx.tables.insert(id);
                    }
                }
                // Only FROM keeps collecting through a comma list.
                if last_table_keyword != "from" {
                    expecting_table = false;
                }
                expecting_alias = true;
            }

            if parts.len() == 1 {
                if keyword == "with" {
                    expecting_cte = true;
                    statement_verb = "with".to_string();
                } else if keyword == "as" {
                    if statement_verb != "with" {
                        expecting_alias = true;
                    }
                    expecting_table = false;
                } else if is_table_follows(&keyword) {
                    expecting_table = true;
                    last_table_keyword = keyword.clone();
                    expecting_alias = false;
                } else if is_context_exit(&keyword) {
                    expecting_table = false;
                    last_table_keyword.clear();
                    expecting_alias = false;
                }

                if last_token == "create" && keyword == "or" {
                    last_token = "create or".to_string();
                } else if last_token == "create or" && keyword == "replace" {
                    last_token = "create or replace".to_string();
                } else {
                    last_token = keyword;
                }
            } else {
                last_token.clear();
            }
            i += consumed;
            continue;
        }

        i += 1;
    }

    if in_subquery {
        return Err(GuardError::UnclosedSubquery);
    }
    Ok(chars.len())
}

/// Expand the operand of `EXECUTE IMMEDIATE`.
///
/// Only a single plain string literal can be analyzed: its content is scanned
/// recursively with the shared context, and the position after the literal is
/// returned. A variable, expression, or concatenation builds SQL this scanner
/// cannot see in full, so anything else is refused.
fn expand_dynamic_sql(
    chars: &[char],
    start: usize,
    default_project: Option<&str>,
    ctx: &mut ParseContext,
) -> GuardResult<usize> {
    let mut i = skip_whitespace_and_comments(chars, start);
    let Some((state, skip)) = (i < chars.len())
        .then(|| string_start(chars, i))
        .flatten()
    else {
        return Err(GuardError::ExecuteImmediate);
    };
    i += skip;

    let content_start = i;
    let mut st = state;
    loop {
        if i >= chars.len() {
            // Unterminated literal.
            return Err(GuardError::ExecuteImmediate);
        }
        let (next, advanced) = step_inside(st, chars, i);
        if next == ScanState::Normal {
            let content: String = chars[content_start..i].iter().collect();
            parse_sql(&content, default_project, ctx, false)?;

            let after = skip_whitespace_and_comments(chars, advanced);
            if chars.get(after) == Some(&'|') {
                // String concatenation; the full statement is out of reach.
                return Err(GuardError::ExecuteImmediate);
            }
            return Ok(advanced);
        }
        st = next;
        i = advanced;
    }
}

/// Format collected identifier parts as `project.dataset.table`.
///
/// One part is a CTE or column, four or more a column path; neither names a
/// table. Two parts are promoted with the default project.
fn format_table_id(parts: &[String], default_project: Option<&str>) -> GuardResult<Option<String>> {
    if parts.len() < 2 || parts.len() > 3 {
        return Ok(None);
    }
    if parts.len() == 3 {
        return Ok(Some(parts.join(".")));
    }
    match default_project {
        Some(project) if !project.is_empty() => Ok(Some(format!("{project}.{}", parts.join(".")))),
        _ => Err(GuardError::MissingProject {
            table: parts.join("."),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(sql: &str) -> Vec<String> {
        parse_tables(sql, Some("proj")).unwrap()
    }

    // =========================================================================
    // Basic table collection
    // =========================================================================

    #[test]
    fn test_simple_select() {
        assert_eq!(tables("SELECT * FROM proj.ok.t"), ["proj.ok.t"]);
    }

    #[test]
    fn test_case_insensitive_keywords() {
        assert_eq!(tables("select * from proj.ok.t"), ["proj.ok.t"]);
        assert_eq!(tables("SeLeCt * FrOm proj.ok.t"), ["proj.ok.t"]);
    }

    #[test]
    fn test_two_part_promoted_with_default_project() {
        assert_eq!(tables("SELECT * FROM ok.t"), ["proj.ok.t"]);
    }

    #[test]
    fn test_two_part_without_default_project_fails() {
        assert_eq!(
            parse_tables("SELECT * FROM ok.t", None),
            Err(GuardError::MissingProject {
                table: "ok.t".to_string()
            })
        );
    }

    #[test]
    fn test_single_part_is_not_a_table() {
        assert_eq!(tables("SELECT * FROM t"), Vec::<String>::new());
    }

    #[test]
    fn test_column_path_is_not_a_table() {
        // Four parts can only be table.column or deeper.
        assert_eq!(
            tables("SELECT proj.ok.t.c FROM proj.ok.t"),
            ["proj.ok.t"]
        );
    }

    #[test]
    fn test_backticked_reference() {
        assert_eq!(tables("SELECT * FROM `proj.ok.t`"), ["proj.ok.t"]);
        assert_eq!(tables("SELECT * FROM `proj`.`ok`.`t`"), ["proj.ok.t"]);
    }

    #[test]
    fn test_join_collects_both_sides() {
        assert_eq!(
            tables("SELECT * FROM proj.ok.a JOIN proj.ok.b ON a.id = b.id"),
            ["proj.ok.a", "proj.ok.b"]
        );
    }

    #[test]
    fn test_from_comma_list() {
        assert_eq!(
            tables("SELECT * FROM ok.a, ok.b, ok.c"),
            ["proj.ok.a", "proj.ok.b", "proj.ok.c"]
        );
    }

    #[test]
    fn test_duplicates_deduplicated() {
        assert_eq!(
            tables("SELECT * FROM proj.ok.t JOIN proj.ok.t ON 1 = 1"),
            ["proj.ok.t"]
        );
    }

    #[test]
    fn test_insert_into() {
        assert_eq!(
            tables("INSERT INTO proj.ok.t (a) VALUES (1)"),
            ["proj.ok.t"]
        );
    }

    #[test]
    fn test_insert_without_into() {
        assert_eq!(tables("INSERT proj.ok.t (a) VALUES (1)"), ["proj.ok.t"]);
    }

    #[test]
    fn test_update_statement() {
        assert_eq!(tables("UPDATE proj.ok.t SET a = 1 WHERE b = 2"), [
            "proj.ok.t"
        ]);
    }

    #[test]
    fn test_delete_statement() {
        assert_eq!(tables("DELETE FROM proj.ok.t WHERE a = 1"), ["proj.ok.t"]);
    }

    #[test]
    fn test_merge_with_using() {
        assert_eq!(
            tables(
                "MERGE proj.ok.target USING proj.ok.source \
                 ON target.id = source.id WHEN MATCHED THEN DELETE"
            ),
            ["proj.ok.source", "proj.ok.target"]
        );
    }

    #[test]
    fn test_multi_statement_script() {
        assert_eq!(
            tables("SELECT * FROM proj.ok.a; SELECT * FROM proj.ok.b"),
            ["proj.ok.a", "proj.ok.b"]
        );
    }

    // =========================================================================
    // CTEs and aliases
    // =========================================================================

    #[test]
    fn test_cte_suppressed() {
        assert_eq!(
            tables("WITH t AS (SELECT 1) SELECT * FROM t"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_cte_list() {
        assert_eq!(
            tables(
                "WITH a AS (SELECT * FROM proj.ok.x), b AS (SELECT * FROM a) \
                 SELECT * FROM b"
            ),
            ["proj.ok.x"]
        );
    }

    #[test]
    fn test_cte_survives_statement_separator() {
        // Alias knowledge is intentionally kept across statements; a stale
        // alias can only suppress, never admit, a table.
        assert_eq!(
            tables("WITH t AS (SELECT 1) SELECT * FROM t; SELECT * FROM t"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_explicit_alias_not_emitted() {
        assert_eq!(
            tables("SELECT x.c FROM proj.ok.t AS x WHERE x.c = 1"),
            ["proj.ok.t"]
        );
    }

    #[test]
    fn test_bare_alias_not_emitted() {
        assert_eq!(tables("SELECT * FROM proj.ok.t x JOIN x.y ON 1 = 1"), [
            "proj.ok.t"
        ]);
    }

    #[test]
    fn test_alias_dotted_suffix_suppression() {
        // A CTE named like a dataset.table pair must not leak as a table.
        assert_eq!(
            tables("WITH ok.t AS (SELECT 1) SELECT * FROM ok.t"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_subquery_with_alias() {
        assert_eq!(
            tables("SELECT * FROM (SELECT a FROM proj.ok.t) z WHERE z.a = 1"),
            ["proj.ok.t"]
        );
    }

    #[test]
    fn test_from_list_of_subqueries() {
        assert_eq!(
            tables("SELECT * FROM (SELECT 1 FROM proj.ok.a), (SELECT 2 FROM proj.ok.b)"),
            ["proj.ok.a", "proj.ok.b"]
        );
    }

    #[test]
    fn test_union_keyword_is_not_an_alias() {
        assert_eq!(
            tables("SELECT * FROM proj.ok.a UNION ALL SELECT * FROM proj.ok.b"),
            ["proj.ok.a", "proj.ok.b"]
        );
    }

    // =========================================================================
    // Strings and comments
    // =========================================================================

    #[test]
    fn test_table_text_inside_strings_ignored() {
        let literals = [
            "'FROM proj.bad.t'",
            "\"FROM proj.bad.t\"",
            "'''FROM proj.bad.t'''",
            "\"\"\"FROM proj.bad.t\"\"\"",
            "r'FROM proj.bad.t'",
            "r\"FROM proj.bad.t\"",
            "r'''FROM proj.bad.t'''",
            "r\"\"\"FROM proj.bad.t\"\"\"",
        ];
        for lit in literals {
            let sql = format!("SELECT {lit} FROM proj.ok.t");
            assert_eq!(tables(&sql), ["proj.ok.t"], "literal form: {lit}");
        }
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        assert_eq!(
            tables("SELECT 'it\\'s FROM proj.bad.t' FROM proj.ok.t"),
            ["proj.ok.t"]
        );
    }

    #[test]
    fn test_raw_string_backslash_does_not_escape() {
        // In r'\' the backslash is literal and the quote closes the string.
        assert_eq!(tables("SELECT r'\\' FROM proj.ok.t"), ["proj.ok.t"]);
    }

    #[test]
    fn test_triple_quoted_spans_newlines() {
        assert_eq!(
            tables("SELECT '''\nFROM proj.bad.t\n''' FROM proj.ok.t"),
            ["proj.ok.t"]
        );
    }

    #[test]
    fn test_comments_ignored() {
        assert_eq!(
            tables(
                "-- FROM proj.bad.a\n# FROM proj.bad.b\n/* FROM proj.bad.c */\n\
                 SELECT * FROM proj.ok.t"
            ),
            ["proj.ok.t"]
        );
    }

    #[test]
    fn test_comment_between_from_and_table() {
        assert_eq!(
            tables("SELECT * FROM /* hint */ proj.ok.t"),
            ["proj.ok.t"]
        );
    }

    // =========================================================================
    // Refused statements
    // =========================================================================

    #[test]
    fn test_call_refused() {
        assert_eq!(
            parse_tables("CALL proj.ds.proc()", Some("proj")),
            Err(GuardError::Call)
        );
    }

    #[test]
    fn test_create_procedure_refused() {
        let err = parse_tables("CREATE PROCEDURE p() BEGIN SELECT 1; END", Some("proj"))
            .unwrap_err();
        assert_eq!(
            err,
            GuardError::Unanalyzable {
                verb: "CREATE".to_string(),
                kind: "PROCEDURE".to_string()
            }
        );
    }

    #[test]
    fn test_create_or_replace_function_refused() {
        let err =
            parse_tables("CREATE OR REPLACE FUNCTION f() AS (1)", Some("proj")).unwrap_err();
        assert_eq!(
            err,
            GuardError::Unanalyzable {
                verb: "CREATE OR REPLACE".to_string(),
                kind: "FUNCTION".to_string()
            }
        );
    }

    #[test]
    fn test_create_table_function_refused() {
        let err = parse_tables(
            "CREATE TABLE FUNCTION f() AS SELECT * FROM proj.ok.t",
            Some("proj"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GuardError::Unanalyzable {
                verb: "CREATE".to_string(),
                kind: "TABLE FUNCTION".to_string()
            }
        );
    }

    #[test]
    fn test_schema_ddl_refused() {
        for (sql, verb) in [
            ("CREATE SCHEMA ds", "CREATE"),
            ("ALTER SCHEMA ds SET OPTIONS()", "ALTER"),
            ("DROP SCHEMA ds", "DROP"),
        ] {
            let err = parse_tables(sql, Some("proj")).unwrap_err();
            assert_eq!(
                err,
                GuardError::DatasetOperation {
                    verb: verb.to_string(),
                    kind: "SCHEMA".to_string()
                },
                "sql: {sql}"
            );
        }
    }

    #[test]
    fn test_create_table_is_not_refused() {
        assert_eq!(
            tables("CREATE TABLE proj.ok.t (a INT64)"),
            ["proj.ok.t"]
        );
    }

    // =========================================================================
    // Dynamic SQL
    // =========================================================================

    #[test]
    fn test_execute_immediate_literal_expanded() {
        assert_eq!(
            tables("EXECUTE IMMEDIATE 'SELECT * FROM proj.hidden.t'"),
            ["proj.hidden.t"]
        );
    }

    #[test]
    fn test_execute_immediate_triple_quoted_expanded() {
        assert_eq!(
            tables("EXECUTE IMMEDIATE '''SELECT * FROM ok.t'''"),
            ["proj.ok.t"]
        );
    }

    #[test]
    fn test_execute_immediate_nested() {
        assert_eq!(
            tables("EXECUTE IMMEDIATE \"EXECUTE IMMEDIATE 'SELECT * FROM proj.deep.t'\""),
            ["proj.deep.t"]
        );
    }

    #[test]
    fn test_execute_immediate_repeated_literal_terminates() {
        assert_eq!(
            tables(
                "EXECUTE IMMEDIATE 'SELECT * FROM proj.ok.a'; \
                 EXECUTE IMMEDIATE 'SELECT * FROM proj.ok.a'"
            ),
            ["proj.ok.a"]
        );
    }

    #[test]
    fn test_execute_immediate_variable_refused() {
        assert_eq!(
            parse_tables("EXECUTE IMMEDIATE @query", Some("proj")),
            Err(GuardError::ExecuteImmediate)
        );
    }

    #[test]
    fn test_execute_immediate_expression_refused() {
        assert_eq!(
            parse_tables("EXECUTE IMMEDIATE FORMAT('SELECT 1')", Some("proj")),
            Err(GuardError::ExecuteImmediate)
        );
    }

    #[test]
    fn test_execute_immediate_concatenation_refused() {
        assert_eq!(
            parse_tables(
                "EXECUTE IMMEDIATE 'SELECT * FROM proj' || '.bad.t'",
                Some("proj")
            ),
            Err(GuardError::ExecuteImmediate)
        );
    }

    #[test]
    fn test_execute_immediate_unterminated_literal_refused() {
        assert_eq!(
            parse_tables("EXECUTE IMMEDIATE 'SELECT 1", Some("proj")),
            Err(GuardError::ExecuteImmediate)
        );
    }

    #[test]
    fn test_immediate_without_execute_is_plain_identifier() {
        assert_eq!(tables("SELECT immediate FROM proj.ok.t"), ["proj.ok.t"]);
    }

    // =========================================================================
    // Failure modes
    // =========================================================================

    #[test]
    fn test_unclosed_backtick() {
        assert_eq!(
            parse_tables("SELECT * FROM `proj.ok.t", Some("proj")),
            Err(GuardError::UnclosedBacktick)
        );
    }

    #[test]
    fn test_unclosed_subquery() {
        assert_eq!(
            parse_tables("SELECT * FROM (SELECT 1", Some("proj")),
            Err(GuardError::UnclosedSubquery)
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tables(""), Vec::<String>::new());
    }

    #[test]
    fn test_terminates_on_punctuation_noise() {
        assert_eq!(tables("@@ ?? ++ $1 )( %"), Vec::<String>::new());
    }
}
