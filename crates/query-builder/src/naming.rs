//! The reference-table column naming convention.
//!
//! Reference tables expose a code column and a description column
//! named after the table itself (`CD_REGION` / `DESC_REGION`). This
//! is a business convention, not metadata from any data source, so it
//! lives here as plain string functions.

pub fn key_column(base: &str) -> String {
    format!("CD_{base}")
}

pub fn description_column(base: &str) -> String {
    format!("DESC_{base}")
}
