use super::Statement;

use rowbind_core::TableSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert<'a> {
    pub table: &'a str,

    /// Inserted columns; one placeholder is generated per column
    pub columns: Vec<&'a str>,
}

impl<'a> Statement<'a> {
    /// Inserts every column except the primary key, which the backend assigns.
    pub fn insert(spec: &'a TableSpec) -> Self {
        Insert {
            table: spec.name(),
            columns: spec.non_key_columns().map(|column| column.name()).collect(),
        }
        .into()
    }
}

impl<'a> From<Insert<'a>> for Statement<'a> {
    fn from(value: Insert<'a>) -> Self {
        Self::Insert(value)
    }
}
