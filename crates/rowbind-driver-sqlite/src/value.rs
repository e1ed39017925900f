use rowbind_core::stmt::Value as CoreValue;
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

/// Reads the value at `index` of a SQLite row.
///
/// Integers come back as `I64`, reals as `F64`, text as `String` and blobs as
/// `Bytes`. Conversion to the field's type happens when the value is scanned
/// into a record.
pub fn from_sql(row: &Row<'_>, index: usize) -> rusqlite::Result<CoreValue> {
    let value: SqlValue = row.get(index)?;

    Ok(match value {
        SqlValue::Null => CoreValue::Null,
        SqlValue::Integer(value) => CoreValue::I64(value),
        SqlValue::Real(value) => CoreValue::F64(value),
        SqlValue::Text(value) => CoreValue::String(value),
        SqlValue::Blob(value) => CoreValue::Bytes(value),
    })
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::U64(v) => {
                let v = i64::try_from(*v)
                    .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
                Ok(ToSqlOutput::Owned(SqlValue::Integer(v)))
            }
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            CoreValue::Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_rfc3339()))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
