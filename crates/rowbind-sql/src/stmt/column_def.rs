use rowbind_core::schema::ColumnSpec;

/// A column definition inside `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef<'a> {
    pub name: &'a str,
    pub ty: &'a str,

    /// Column constraint; omitted from the output when empty
    pub constraint: &'a str,
}

impl<'a> From<&'a ColumnSpec> for ColumnDef<'a> {
    fn from(column: &'a ColumnSpec) -> Self {
        ColumnDef {
            name: column.name(),
            ty: column.sql_type(),
            constraint: column.constraint(),
        }
    }
}
