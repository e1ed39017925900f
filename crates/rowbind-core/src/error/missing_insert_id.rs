use super::Error;

/// Error when an insert into a table with a primary key did not yield a
/// backend-assigned identifier.
#[derive(Debug)]
pub(super) struct MissingInsertIdError {
    table: Box<str>,
}

impl std::error::Error for MissingInsertIdError {}

impl core::fmt::Display for MissingInsertIdError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "backend did not report an insert id for table {}",
            self.table
        )
    }
}

impl Error {
    /// Creates a missing insert id error.
    pub fn missing_insert_id(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingInsertId(MissingInsertIdError {
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a missing insert id error.
    pub fn is_missing_insert_id(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingInsertId(_)))
    }
}
