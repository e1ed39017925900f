mod row;
pub use row::{Row, Rows};

use crate::{stmt::Value, Result};

use std::{rc::Rc, sync::Arc};

/// Executes SQL on behalf of the mapper.
///
/// Statements use positional `?` placeholders; `args` are bound in order.
/// Implementations decide whether they can be shared across threads. The
/// mapper adds no locking of its own.
pub trait Backend {
    /// Executes a statement that returns no rows.
    fn execute(&self, sql: &str, args: &[Value]) -> Result<ExecResult>;

    /// Runs a query, returning a cursor over its rows.
    fn query(&self, sql: &str, args: &[Value]) -> Result<Rows<'_>>;

    /// Runs a query expected to produce one row.
    ///
    /// Must fail with [`Error::record_not_found`](crate::Error::record_not_found)
    /// when the query produces no rows. Rows after the first are ignored.
    fn query_row(&self, sql: &str, args: &[Value]) -> Result<Row> {
        match self.query(sql, args)?.next() {
            Some(row) => row,
            None => Err(crate::Error::record_not_found(sql.trim())),
        }
    }
}

/// Outcome of [`Backend::execute`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    /// Number of rows inserted, updated or deleted
    pub rows_affected: u64,

    /// Identifier assigned by the backend to the last inserted row, if any
    pub last_insert_id: Option<i64>,
}

macro_rules! forward_backend {
    ( $( $ptr:ty ),* ) => {
        $(
            impl<B: Backend + ?Sized> Backend for $ptr {
                fn execute(&self, sql: &str, args: &[Value]) -> Result<ExecResult> {
                    (**self).execute(sql, args)
                }

                fn query(&self, sql: &str, args: &[Value]) -> Result<Rows<'_>> {
                    (**self).query(sql, args)
                }

                fn query_row(&self, sql: &str, args: &[Value]) -> Result<Row> {
                    (**self).query_row(sql, args)
                }
            }
        )*
    };
}

forward_backend!(&B, Box<B>, Rc<B>, Arc<B>);
