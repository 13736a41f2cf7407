//! The declarative query configuration, as materialized from a JSON file.

use serde::{Deserialize, Serialize};

/// One query definition: a main table plus an ordered list of fields.
///
/// The configuration is read-only input; building a query never
/// mutates it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// The table the SELECT reads from.
    pub main_table: String,

    /// Optional database qualifying the main table, e.g. `RAW.ORDERS`.
    #[serde(default)]
    pub main_database: Option<String>,

    /// Optional database qualifying every joined reference table.
    #[serde(default)]
    pub reference_database: Option<String>,

    /// The output columns, in the order they appear in the SELECT.
    pub fields: Vec<FieldSpec>,

    /// Separator placed between JOIN clauses. Earlier config variants
    /// disagreed on this, so it is an explicit option.
    #[serde(default)]
    pub join_separator: JoinSeparator,
}

/// A single field descriptor: either a plain column on the main table
/// or a join against a reference table.
///
/// The two shapes are distinguished by their keys: a join carries
/// `on` + `table`, a plain field carries `column`. An object matching
/// neither shape fails deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldSpec {
    Join {
        /// The join key column on the main table.
        on: String,

        /// The reference table to LEFT JOIN against.
        table: String,

        /// Overrides the alias base for the exported key/description
        /// columns; `alias` takes precedence over `field`.
        #[serde(default)]
        field: Option<String>,

        #[serde(default)]
        alias: Option<String>,
    },
    Column {
        /// A column on the main table.
        column: String,

        /// Output alias; defaults to the column name.
        #[serde(default)]
        alias: Option<String>,
    },
}

/// Separator between rendered JOIN clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinSeparator {
    #[default]
    Space,
    Comma,
}

impl JoinSeparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinSeparator::Space => " ",
            JoinSeparator::Comma => ",",
        }
    }
}
