use super::{placeholder::Assign, Clause, Comma, Formatter, Placeholder, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Count(stmt) => stmt.to_sql(f),
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Count<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let filter = Clause::new("WHERE", self.filter);

        fmt!(f, "SELECT count(*) FROM " self.table filter);
    }
}

impl ToSql for &stmt::CreateTable<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };

        fmt!(f, "CREATE TABLE " if_not_exists self.name " (" Comma(&self.columns));

        if let Some(constraint) = self.constraint.filter(|c| !c.trim().is_empty()) {
            fmt!(f, ", " constraint);
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::Delete<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let filter = Clause::new("WHERE", Some(self.filter));

        fmt!(f, "DELETE FROM " self.table filter);
    }
}

impl ToSql for &stmt::Insert<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.columns.is_empty() {
            fmt!(f, "INSERT INTO " self.table " DEFAULT VALUES");
            return;
        }

        let placeholders = Comma(self.columns.iter().map(|_| Placeholder));

        fmt!(f, "INSERT INTO " self.table " (" Comma(&self.columns) ") VALUES (" placeholders ")");
    }
}

impl ToSql for &stmt::Select<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let filter = Clause::new("WHERE", self.filter);
        let order_by = Clause::new("ORDER BY", self.order_by);
        let limit = Clause::new("LIMIT", self.limit);

        fmt!(f, "SELECT " Comma(&self.columns) " FROM " self.table filter order_by limit);
    }
}

impl ToSql for &stmt::Update<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let assignments = Comma(self.columns.iter().map(|column| Assign(*column)));
        let filter = Clause::new("WHERE", Some(self.filter));

        fmt!(f, "UPDATE " self.table " SET " assignments filter);
    }
}
