mod value;
pub(crate) use value::Value;

use rowbind_core::{
    driver::{Backend, ExecResult, Row, Rows},
    err, stmt, Error, Result,
};
use rusqlite::Connection;
use std::{
    path::Path,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::debug;
use url::Url;

/// A [`Backend`] over a single SQLite connection.
///
/// The connection sits behind a mutex, so one `Sqlite` can be shared between
/// threads; statements run one at a time.
#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Opens a database from a connection URL: `sqlite::memory:` for an
    /// in-memory database, `sqlite:<path>` for a file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::backend)?;

        if url.scheme() != "sqlite" {
            return Err(err!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            ));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        debug!("opening in-memory sqlite database");
        let connection = Connection::open_in_memory().map_err(Error::backend)?;
        Ok(Self::from_connection(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening sqlite database");
        let connection = Connection::open(path).map_err(Error::backend)?;
        Ok(Self::from_connection(connection))
    }

    pub fn from_connection(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        // A panic while holding the lock leaves no partial state in the
        // connection itself.
        self.connection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Backend for Sqlite {
    fn execute(&self, sql: &str, args: &[stmt::Value]) -> Result<ExecResult> {
        let connection = self.lock();

        let mut stmt = connection.prepare_cached(sql).map_err(Error::backend)?;
        let count = stmt
            .execute(rusqlite::params_from_iter(args.iter().map(Value::from)))
            .map_err(Error::backend)?;

        Ok(ExecResult {
            rows_affected: count as u64,
            last_insert_id: Some(connection.last_insert_rowid()),
        })
    }

    fn query(&self, sql: &str, args: &[stmt::Value]) -> Result<Rows<'_>> {
        let connection = self.lock();

        let mut stmt = connection.prepare_cached(sql).map_err(Error::backend)?;
        let width = stmt.column_count();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(args.iter().map(Value::from)))
            .map_err(Error::backend)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::backend)? {
            let values = (0..width)
                .map(|index| value::from_sql(row, index))
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(Error::backend)?;

            ret.push(Row::from_vec(values));
        }

        Ok(Rows::from_vec(ret))
    }
}
