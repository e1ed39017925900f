use crate::{schema::ColumnSpec, stmt::Value, Result};

use std::{any::Any, fmt};

/// One result row: its values in select-list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn from_vec(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Scans the row positionally into `record`, one column per value.
    ///
    /// Each value is handed to the settable target the column produces for
    /// `record`. The row must have exactly as many values as there are
    /// columns.
    pub fn scan<'a, R: Any>(
        self,
        record: &mut R,
        columns: impl ExactSizeIterator<Item = &'a ColumnSpec>,
    ) -> Result<()> {
        if columns.len() != self.values.len() {
            bail!(
                "row has {} values but {} columns were requested",
                self.values.len(),
                columns.len()
            );
        }

        for (column, value) in columns.zip(self.values) {
            column.save_to(record)?.set(value)?;
        }

        Ok(())
    }

    /// Takes the single value of a one-column row.
    pub fn into_scalar(self) -> Result<Value> {
        let [value] = <[Value; 1]>::try_from(self.values).map_err(|values| {
            err!("expected a single value, row has {}", values.len())
        })?;
        Ok(value)
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::from_vec(values)
    }
}

/// Cursor over the rows of a query.
///
/// Each step may fail independently; callers stop at the first error.
pub struct Rows<'a> {
    iter: Box<dyn Iterator<Item = Result<Row>> + 'a>,
}

impl<'a> Rows<'a> {
    pub fn new(iter: impl Iterator<Item = Result<Row>> + 'a) -> Self {
        Self {
            iter: Box::new(iter),
        }
    }

    /// A cursor over already-materialized rows.
    pub fn from_vec(rows: Vec<Row>) -> Self {
        Self::new(rows.into_iter().map(Ok))
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl fmt::Debug for Rows<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows").finish_non_exhaustive()
    }
}
