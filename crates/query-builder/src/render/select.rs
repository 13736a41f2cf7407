use crate::{
    ast::{
        common::TableRef,
        select::{FromClause, JoinClause, Select, SelectExpr},
    },
    render::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push(',');
            }
            col.render(r);
        }

        // 2. FROM
        r.sql.push(' ');
        self.from.render(r);

        // 3. JOIN — the configured separator goes between clauses only
        for (i, join) in self.joins.iter().enumerate() {
            if i == 0 {
                r.sql.push(' ');
            } else {
                r.push_join_separator();
            }
            join.render(r);
        }
    }
}

impl Render for SelectExpr {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.qualifier);
        r.sql.push('.');
        r.sql.push_str(&self.column);
        r.sql.push_str(" AS ");
        r.sql.push_str(&self.alias);
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        self.table.render(r);
    }
}

impl Render for TableRef {
    fn render(&self, r: &mut Renderer) {
        if let Some(database) = &self.database {
            r.sql.push_str(database);
            r.sql.push('.');
        }
        r.sql.push_str(&self.name);
    }
}

impl Render for JoinClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("LEFT JOIN ");
        self.table.render(r);
        r.sql.push_str(" ON ");
        r.sql.push_str(&self.main_table);
        r.sql.push('.');
        r.sql.push_str(&self.join_key);
        r.sql.push_str(" = ");
        self.table.render(r);
        r.sql.push('.');
        r.sql.push_str(&self.key_column);
    }
}
