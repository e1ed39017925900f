use super::{ColumnSpec, Fields, TableSpecBuilder};

use indexmap::IndexMap;

/// Describes how a record type maps onto a table.
///
/// Built once per record type with [`TableSpec::builder`] and immutable
/// afterwards, so it can be shared freely across threads.
#[derive(Debug, PartialEq)]
pub struct TableSpec {
    /// Name of the table
    pub(super) name: String,

    /// The table's columns, in declaration order
    pub(super) columns: IndexMap<String, ColumnSpec>,

    /// Index of the primary key column in `columns`
    pub(super) primary_key: Option<usize>,

    /// Table-level constraint appended to `CREATE TABLE`
    pub(super) constraint: Option<String>,
}

impl TableSpec {
    /// Starts building the table spec for the record type `R`.
    pub fn builder<R: Fields>() -> TableSpecBuilder<R> {
        TableSpecBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &ColumnSpec> + '_ {
        self.columns.values()
    }

    /// Every column except the primary key, in declaration order.
    pub fn non_key_columns(&self) -> impl Iterator<Item = &ColumnSpec> + '_ {
        self.columns
            .values()
            .enumerate()
            .filter(move |(index, _)| Some(*index) != self.primary_key)
            .map(|(_, column)| column)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.get(name)
    }

    pub fn primary_key(&self) -> Option<&ColumnSpec> {
        self.primary_key
            .and_then(|index| self.columns.get_index(index))
            .map(|(_, column)| column)
    }

    /// Returns the primary key column, panicking if the table has none.
    #[track_caller]
    pub fn expect_primary_key(&self) -> &ColumnSpec {
        match self.primary_key() {
            Some(column) => column,
            None => panic!("table `{}` has no primary key", self.name),
        }
    }

    pub fn constraint(&self) -> Option<&str> {
        self.constraint.as_deref()
    }
}
