use super::{check_args, Mapper};

use rowbind_core::{
    driver::Backend,
    err,
    schema::FieldValue,
    stmt::Value,
    Record, Result,
};
use rowbind_sql::{stmt, Statement};

use tracing::debug;

/// A select query under construction.
///
/// Created by [`Mapper::select`]. The clauses are raw SQL fragments inserted
/// verbatim; values belong in the filter arguments.
#[derive(Debug)]
pub struct Select<'a, B> {
    mapper: &'a Mapper<B>,
    filter: Option<String>,
    args: Vec<Value>,
    order_by: Option<String>,
    limit: Option<String>,
}

impl<'a, B: Backend> Select<'a, B> {
    pub(super) fn new(mapper: &'a Mapper<B>) -> Self {
        Self {
            mapper,
            filter: None,
            args: vec![],
            order_by: None,
            limit: None,
        }
    }

    /// Sets the where clause and the arguments bound to its placeholders.
    pub fn filter(mut self, clause: impl Into<String>, args: impl Into<Vec<Value>>) -> Self {
        self.filter = Some(clause.into());
        self.args = args.into();
        self
    }

    /// Sets the `ORDER BY` clause.
    pub fn order(mut self, clause: impl Into<String>) -> Self {
        self.order_by = Some(clause.into());
        self
    }

    /// Sets the `LIMIT` clause.
    pub fn limit(mut self, clause: impl Into<String>) -> Self {
        self.limit = Some(clause.into());
        self
    }

    /// Loads the first matching row into `record`.
    ///
    /// Fails with a record-not-found error when nothing matches.
    pub fn find<R: Record>(self, record: &mut R) -> Result<()> {
        let spec = R::table_spec();
        let sql = self.render(spec)?;

        debug!(sql = %sql, args = ?self.args, "query row");

        let row = self
            .mapper
            .backend()
            .query_row(&sql, &self.args)
            .map_err(|err| err.context(err!("find in {}", spec.name())))?;

        row.scan(record, spec.columns())
    }

    /// Loads every matching row into `records`, replacing its contents.
    ///
    /// `records` is only written once all rows have been read and converted;
    /// on error it keeps its previous contents.
    pub fn find_all<R: Record + Default>(self, records: &mut Vec<R>) -> Result<()> {
        let spec = R::table_spec();
        let sql = self.render(spec)?;

        debug!(sql = %sql, args = ?self.args, "query");

        let rows = self
            .mapper
            .backend()
            .query(&sql, &self.args)
            .map_err(|err| err.context(err!("find all in {}", spec.name())))?;

        let mut found = vec![];

        for row in rows {
            let mut record = R::default();
            row?.scan(&mut record, spec.columns())
                .map_err(|err| err.context(err!("row {} of {}", found.len(), spec.name())))?;
            found.push(record);
        }

        *records = found;
        Ok(())
    }

    /// Counts the rows of `R`'s table matching the filter. Order and limit
    /// clauses are ignored.
    pub fn count<R: Record>(self) -> Result<i64> {
        let spec = R::table_spec();

        let filter = self.filter.as_deref();
        check_args(filter.unwrap_or(""), &self.args)?;

        let sql = Statement::count(spec, filter).to_string();

        debug!(sql = %sql, args = ?self.args, "query row");

        let row = self
            .mapper
            .backend()
            .query_row(&sql, &self.args)
            .map_err(|err| err.context(err!("count {}", spec.name())))?;

        i64::from_value(row.into_scalar()?)
    }

    fn render(&self, spec: &rowbind_core::TableSpec) -> Result<String> {
        let filter = self.filter.as_deref();
        check_args(filter.unwrap_or(""), &self.args)?;

        let stmt = Statement::from(stmt::Select {
            filter,
            order_by: self.order_by.as_deref(),
            limit: self.limit.as_deref(),
            ..stmt::Select::all_columns(spec)
        });

        Ok(stmt.to_string())
    }
}
