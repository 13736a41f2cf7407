//! Common, reusable AST nodes shared by the select fragments.

use serde::Serialize;

/// A table reference, optionally qualified by a database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRef {
    pub database: Option<String>,
    pub name: String,
}

impl TableRef {
    pub fn new(database: Option<&str>, name: &str) -> Self {
        Self {
            database: database.map(String::from),
            name: name.to_string(),
        }
    }
}
