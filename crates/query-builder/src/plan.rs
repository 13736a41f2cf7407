//! Plans a `Select` AST from a query configuration.
//!
//! Planning is pure: every call builds a fresh `Select` from scratch
//! and returns it by value, so repeated builds of one configuration
//! are byte-identical and independent builds never share state.

use crate::{
    ast::{
        common::TableRef,
        select::{FromClause, JoinClause, Select, SelectExpr},
    },
    naming,
};
use model::{
    config::{FieldSpec, QueryConfig},
    error::ConfigError,
};

/// Walks the configured fields in order and classifies each as a
/// plain column or a join, accumulating select expressions and join
/// clauses as it goes.
pub fn plan(config: &QueryConfig) -> Result<Select, ConfigError> {
    if config.main_table.is_empty() {
        return Err(ConfigError::MissingMainTable);
    }

    let mut columns = Vec::new();
    let mut joins = Vec::new();

    for (index, field) in config.fields.iter().enumerate() {
        match field {
            FieldSpec::Column { column, alias } => {
                if column.is_empty() {
                    return Err(ConfigError::EmptyColumn(index));
                }
                columns.push(SelectExpr {
                    qualifier: config.main_table.clone(),
                    column: column.clone(),
                    alias: alias.clone().unwrap_or_else(|| column.clone()),
                });
            }
            FieldSpec::Join {
                on,
                table,
                field,
                alias,
            } => {
                let (join, key, description) = resolve_join(
                    &config.main_table,
                    on,
                    table,
                    alias.as_deref().or(field.as_deref()),
                    config.reference_database.as_deref(),
                    index,
                )?;
                joins.push(join);
                columns.push(key);
                columns.push(description);
            }
        }
    }

    Ok(Select {
        columns,
        from: FromClause {
            table: TableRef::new(config.main_database.as_deref(), &config.main_table),
        },
        joins,
    })
}

/// Resolves one join field into its join clause and the pair of
/// select expressions it exports (key column first, description
/// column second).
///
/// The source columns on the reference table are always `CD_<table>`
/// and `DESC_<table>`; an alias override renames only the exported
/// aliases, never the ON lookup.
fn resolve_join(
    main_table: &str,
    join_key: &str,
    reference_table: &str,
    alias_base: Option<&str>,
    reference_database: Option<&str>,
    index: usize,
) -> Result<(JoinClause, SelectExpr, SelectExpr), ConfigError> {
    if reference_table.is_empty() {
        return Err(ConfigError::EmptyReferenceTable(index));
    }
    if join_key.is_empty() {
        return Err(ConfigError::EmptyJoinKey(index));
    }

    let key_column = naming::key_column(reference_table);
    let alias_base = alias_base.unwrap_or(reference_table);

    let join = JoinClause {
        table: TableRef::new(reference_database, reference_table),
        main_table: main_table.to_string(),
        join_key: join_key.to_string(),
        key_column: key_column.clone(),
    };

    let key = SelectExpr {
        qualifier: reference_table.to_string(),
        column: key_column,
        alias: naming::key_column(alias_base),
    };
    let description = SelectExpr {
        qualifier: reference_table.to_string(),
        column: naming::description_column(reference_table),
        alias: naming::description_column(alias_base),
    };

    Ok((join, key, description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::config::JoinSeparator;

    fn config(main_table: &str, fields: Vec<FieldSpec>) -> QueryConfig {
        QueryConfig {
            main_table: main_table.to_string(),
            main_database: None,
            reference_database: None,
            fields,
            join_separator: JoinSeparator::Space,
        }
    }

    fn column(name: &str) -> FieldSpec {
        FieldSpec::Column {
            column: name.to_string(),
            alias: None,
        }
    }

    fn join(on: &str, table: &str) -> FieldSpec {
        FieldSpec::Join {
            on: on.to_string(),
            table: table.to_string(),
            field: None,
            alias: None,
        }
    }

    #[test]
    fn test_plain_field_defaults_alias_to_column() {
        let select = plan(&config("ORDERS", vec![column("ID")])).unwrap();

        assert_eq!(select.columns.len(), 1);
        assert_eq!(select.columns[0].qualifier, "ORDERS");
        assert_eq!(select.columns[0].column, "ID");
        assert_eq!(select.columns[0].alias, "ID");
        assert!(select.joins.is_empty());
    }

    #[test]
    fn test_plain_field_honors_alias() {
        let select = plan(&config(
            "ORDERS",
            vec![FieldSpec::Column {
                column: "ID".to_string(),
                alias: Some("ORDER_ID".to_string()),
            }],
        ))
        .unwrap();

        assert_eq!(select.columns[0].alias, "ORDER_ID");
    }

    #[test]
    fn test_join_field_contributes_one_join_and_two_columns() {
        let select = plan(&config("ORDERS", vec![join("REGION_ID", "REGION")])).unwrap();

        assert_eq!(select.joins.len(), 1);
        assert_eq!(select.columns.len(), 2);

        let join = &select.joins[0];
        assert_eq!(join.main_table, "ORDERS");
        assert_eq!(join.join_key, "REGION_ID");
        assert_eq!(join.key_column, "CD_REGION");

        assert_eq!(select.columns[0].column, "CD_REGION");
        assert_eq!(select.columns[1].column, "DESC_REGION");
    }

    #[test]
    fn test_join_alias_renames_exports_not_lookup() {
        let select = plan(&config(
            "ORDERS",
            vec![FieldSpec::Join {
                on: "REGION_ID".to_string(),
                table: "REGION".to_string(),
                field: None,
                alias: Some("AREA".to_string()),
            }],
        ))
        .unwrap();

        // Exported aliases follow the override.
        assert_eq!(select.columns[0].alias, "CD_AREA");
        assert_eq!(select.columns[1].alias, "DESC_AREA");

        // Source columns and the ON lookup still use the table name.
        assert_eq!(select.columns[0].column, "CD_REGION");
        assert_eq!(select.joins[0].key_column, "CD_REGION");
    }

    #[test]
    fn test_join_field_selector_is_alias_fallback() {
        let select = plan(&config(
            "ORDERS",
            vec![FieldSpec::Join {
                on: "REGION_ID".to_string(),
                table: "REGION".to_string(),
                field: Some("AREA".to_string()),
                alias: None,
            }],
        ))
        .unwrap();

        assert_eq!(select.columns[0].alias, "CD_AREA");
        assert_eq!(select.columns[1].alias, "DESC_AREA");

        // The ON lookup is still derived from the table name.
        assert_eq!(select.joins[0].key_column, "CD_REGION");
        assert_eq!(select.columns[0].column, "CD_REGION");
    }

    #[test]
    fn test_join_alias_wins_over_field_selector() {
        let select = plan(&config(
            "ORDERS",
            vec![FieldSpec::Join {
                on: "REGION_ID".to_string(),
                table: "REGION".to_string(),
                field: Some("AREA".to_string()),
                alias: Some("ZONE".to_string()),
            }],
        ))
        .unwrap();

        assert_eq!(select.columns[0].alias, "CD_ZONE");
        assert_eq!(select.columns[1].alias, "DESC_ZONE");
        assert_eq!(select.joins[0].key_column, "CD_REGION");
    }

    #[test]
    fn test_descriptor_order_is_preserved() {
        let select = plan(&config(
            "ORDERS",
            vec![
                column("ID"),
                join("REGION_ID", "REGION"),
                column("AMOUNT"),
                join("STATUS_ID", "STATUS"),
            ],
        ))
        .unwrap();

        let aliases: Vec<&str> = select.columns.iter().map(|c| c.alias.as_str()).collect();
        assert_eq!(
            aliases,
            vec![
                "ID",
                "CD_REGION",
                "DESC_REGION",
                "AMOUNT",
                "CD_STATUS",
                "DESC_STATUS"
            ]
        );
        assert_eq!(select.joins[0].table.name, "REGION");
        assert_eq!(select.joins[1].table.name, "STATUS");
    }

    #[test]
    fn test_empty_main_table_fails() {
        let err = plan(&config("", vec![column("ID")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingMainTable));
    }

    #[test]
    fn test_empty_column_fails() {
        let err = plan(&config("ORDERS", vec![column("")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyColumn(0)));
    }

    #[test]
    fn test_empty_join_parts_fail() {
        let err = plan(&config("ORDERS", vec![join("REGION_ID", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyReferenceTable(0)));

        let err = plan(&config("ORDERS", vec![join("", "REGION")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyJoinKey(0)));
    }

    #[test]
    fn test_reference_database_qualifies_join_table() {
        let mut config = config("ORDERS", vec![join("REGION_ID", "REGION")]);
        config.reference_database = Some("REFDATA".to_string());

        let select = plan(&config).unwrap();
        assert_eq!(select.joins[0].table.database.as_deref(), Some("REFDATA"));
    }
}
