use thiserror::Error;

/// Configuration errors detected while planning a query.
///
/// These are fail-fast: no partial query is ever produced.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration has no main table")]
    MissingMainTable,

    #[error("Field #{0} has an empty column name")]
    EmptyColumn(usize),

    #[error("Join field #{0} has an empty reference table")]
    EmptyReferenceTable(usize),

    #[error("Join field #{0} has an empty join key")]
    EmptyJoinKey(usize),
}
