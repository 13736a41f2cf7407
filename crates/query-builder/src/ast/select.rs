//! The AST for an assembled SELECT statement.
//!
//! The planner produces one `Select` value per build call; the
//! renderer turns it into the final query text. Nothing here is
//! shared between builds.

use crate::ast::common::TableRef;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Select {
    /// The output columns, in field-descriptor order. A join field
    /// contributes two entries (key column, then description column).
    pub columns: Vec<SelectExpr>,

    /// The primary table of the query.
    pub from: FromClause,

    /// LEFT JOIN clauses, in encounter order.
    pub joins: Vec<JoinClause>,
}

/// One `source.column AS alias` fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectExpr {
    pub qualifier: String,
    pub column: String,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FromClause {
    pub table: TableRef,
}

/// A `LEFT JOIN <table> ON <main>.<key> = <table>.<key_column>` fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinClause {
    /// The reference table being joined.
    pub table: TableRef,

    /// The main table the join key lives on.
    pub main_table: String,

    /// The join key column on the main table.
    pub join_key: String,

    /// The key column on the reference table, `CD_<table>` by convention.
    pub key_column: String,
}
