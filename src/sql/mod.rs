//! Lexical analysis of BigQuery standard SQL.
//!
//! This module implements a conservative scanner over SQL text. It is not a
//! grammar: it recognizes exactly enough structure (strings, comments,
//! identifiers, a handful of keywords) to extract every table a statement
//! could touch, and it fails closed on anything it cannot follow.
//!
//! - `parse_tables` returns the fully qualified tables a statement names,
//!   with CTEs and aliases suppressed and `EXECUTE IMMEDIATE` literals
//!   expanded.
//! - `is_any_table_explicitly_referenced` answers whether the text literally
//!   names one of a set of target tables, skipping strings and comments.

mod audit;
mod identifier;
mod parser;
mod scan;

pub use audit::is_any_table_explicitly_referenced;
pub use parser::parse_tables;
