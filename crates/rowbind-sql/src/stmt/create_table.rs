use super::{ColumnDef, Statement};

use rowbind_core::TableSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable<'a> {
    /// Name of the table
    pub name: &'a str,

    /// Column definitions
    pub columns: Vec<ColumnDef<'a>>,

    /// Table-level constraint, emitted after the columns
    pub constraint: Option<&'a str>,

    pub if_not_exists: bool,
}

impl<'a> Statement<'a> {
    pub fn create_table(spec: &'a TableSpec, if_not_exists: bool) -> Self {
        CreateTable {
            name: spec.name(),
            columns: spec.columns().map(ColumnDef::from).collect(),
            constraint: spec.constraint(),
            if_not_exists,
        }
        .into()
    }
}

impl<'a> From<CreateTable<'a>> for Statement<'a> {
    fn from(value: CreateTable<'a>) -> Self {
        Self::CreateTable(value)
    }
}
