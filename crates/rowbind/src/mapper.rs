mod select;
pub use select::Select;

use rowbind_core::{
    driver::{Backend, ExecResult},
    err,
    stmt::Value,
    Error, Record, Result, TableSpec,
};
use rowbind_sql::{count_placeholders, Statement};

use tracing::{debug, trace};

/// Performs CRUD operations for [`Record`] types against a [`Backend`].
///
/// The mapper holds nothing but the backend handle. Every operation renders
/// its SQL from the record's [`TableSpec`], runs it, and returns once the
/// backend call and all field conversions have completed.
#[derive(Debug, Default, Clone)]
pub struct Mapper<B> {
    backend: B,
}

impl<B: Backend> Mapper<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Creates the table for `R`.
    pub fn create_table<R: Record>(&self, if_not_exists: bool) -> Result<()> {
        let spec = R::table_spec();
        let stmt = Statement::create_table(spec, if_not_exists);

        self.execute(&stmt, &[])
            .map_err(|err| err.context(err!("create table {}", spec.name())))?;
        Ok(())
    }

    /// Inserts `record`.
    ///
    /// Every column except the primary key is written. If the table has a
    /// primary key, the identifier assigned by the backend is stored back
    /// into `record`.
    pub fn insert<R: Record>(&self, record: &mut R) -> Result<()> {
        let spec = R::table_spec();
        let stmt = Statement::insert(spec);
        let args = load_columns(spec.non_key_columns(), record)?;

        let result = self
            .execute(&stmt, &args)
            .map_err(|err| err.context(err!("insert into {}", spec.name())))?;

        let Some(primary_key) = spec.primary_key() else {
            return Ok(());
        };

        let id = result
            .last_insert_id
            .ok_or_else(|| Error::missing_insert_id(spec.name()))?;

        trace!(table = spec.name(), column = primary_key.name(), id, "assigned primary key");

        primary_key.save_to(record)?.set(Value::I64(id))
    }

    /// Starts a select query. See [`Select`] for the terminal operations.
    pub fn select(&self) -> Select<'_, B> {
        Select::new(self)
    }

    /// Reloads `record` from the row matching its primary key.
    ///
    /// # Panics
    ///
    /// Panics if the table of `R` has no primary key.
    #[track_caller]
    pub fn find_by_primary_key<R: Record>(&self, record: &mut R) -> Result<()> {
        let (clause, args) = primary_key_filter(record)?;
        self.select().filter(clause, args).find(record)
    }

    /// Writes every column except the primary key to the rows matching
    /// `clause`. Returns the number of rows updated.
    ///
    /// `args` are bound to the placeholders of `clause`, after the column
    /// values.
    pub fn update<R: Record>(
        &self,
        record: &R,
        clause: &str,
        args: impl Into<Vec<Value>>,
    ) -> Result<u64> {
        let spec = R::table_spec();
        let where_args = args.into();

        require_filter(clause, "update", spec)?;
        check_args(clause, &where_args)?;

        let stmt = Statement::update(spec, clause);

        if stmt.column_placeholders() == 0 {
            return Err(err!("table {} has no columns to update", spec.name()));
        }

        let mut args = load_columns(spec.non_key_columns(), record)?;
        args.extend(where_args);

        let result = self
            .execute(&stmt, &args)
            .map_err(|err| err.context(err!("update {}", spec.name())))?;
        Ok(result.rows_affected)
    }

    /// Updates the row matching `record`'s primary key.
    ///
    /// # Panics
    ///
    /// Panics if the table of `R` has no primary key.
    #[track_caller]
    pub fn update_by_primary_key<R: Record>(&self, record: &R) -> Result<u64> {
        let (clause, args) = primary_key_filter(record)?;
        self.update(record, &clause, args)
    }

    /// Deletes the rows of `R`'s table matching `clause`. Returns the number
    /// of rows deleted.
    pub fn delete<R: Record>(
        &self,
        _record: &R,
        clause: &str,
        args: impl Into<Vec<Value>>,
    ) -> Result<u64> {
        let spec = R::table_spec();
        let args = args.into();

        require_filter(clause, "delete", spec)?;
        check_args(clause, &args)?;

        let stmt = Statement::delete(spec, clause);

        let result = self
            .execute(&stmt, &args)
            .map_err(|err| err.context(err!("delete from {}", spec.name())))?;
        Ok(result.rows_affected)
    }

    /// Deletes the row matching `record`'s primary key.
    ///
    /// # Panics
    ///
    /// Panics if the table of `R` has no primary key.
    #[track_caller]
    pub fn delete_by_primary_key<R: Record>(&self, record: &R) -> Result<u64> {
        let (clause, args) = primary_key_filter(record)?;
        self.delete(record, &clause, args)
    }

    fn execute(&self, stmt: &Statement<'_>, args: &[Value]) -> Result<ExecResult> {
        let sql = stmt.to_string();
        debug!(sql = %sql, args = ?args, "execute");
        self.backend.execute(&sql, args)
    }
}

/// Reads the parameter value of each column from `record`, in column order.
fn load_columns<'a, R: Record>(
    columns: impl Iterator<Item = &'a rowbind_core::schema::ColumnSpec>,
    record: &R,
) -> Result<Vec<Value>> {
    columns.map(|column| column.load_from(record)).collect()
}

/// Builds `<pk> = ?` and its argument for `record`.
#[track_caller]
fn primary_key_filter<R: Record>(record: &R) -> Result<(String, Vec<Value>)> {
    let primary_key = R::table_spec().expect_primary_key();
    let value = primary_key.load_from(record)?;
    Ok((format!("{} = ?", primary_key.name()), vec![value]))
}

/// Checks that `clause` has one placeholder per argument.
pub(crate) fn check_args(clause: &str, args: &[Value]) -> Result<()> {
    let expected = count_placeholders(clause);
    if expected != args.len() {
        return Err(Error::argument_count(clause, expected, args.len()));
    }
    Ok(())
}

/// Update and delete always need a filter; a blank one would touch every row.
fn require_filter(clause: &str, op: &str, spec: &TableSpec) -> Result<()> {
    if clause.trim().is_empty() {
        return Err(err!("{op} on {} requires a where clause", spec.name()));
    }
    Ok(())
}
