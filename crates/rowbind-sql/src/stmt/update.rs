use super::Statement;

use rowbind_core::TableSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct Update<'a> {
    pub table: &'a str,

    /// Assigned columns, each as `column = ?`
    pub columns: Vec<&'a str>,

    pub filter: &'a str,
}

impl<'a> Statement<'a> {
    /// Assigns every column except the primary key.
    pub fn update(spec: &'a TableSpec, filter: &'a str) -> Self {
        Update {
            table: spec.name(),
            columns: spec.non_key_columns().map(|column| column.name()).collect(),
            filter,
        }
        .into()
    }
}

impl<'a> From<Update<'a>> for Statement<'a> {
    fn from(value: Update<'a>) -> Self {
        Self::Update(value)
    }
}
