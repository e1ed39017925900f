use super::Statement;

use rowbind_core::TableSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct Select<'a> {
    pub table: &'a str,

    /// Selected columns, in the order rows are scanned
    pub columns: Vec<&'a str>,

    pub filter: Option<&'a str>,
    pub order_by: Option<&'a str>,
    pub limit: Option<&'a str>,
}

impl<'a> Select<'a> {
    /// Selects every column of the table, unfiltered.
    pub fn all_columns(spec: &'a TableSpec) -> Self {
        Select {
            table: spec.name(),
            columns: spec.columns().map(|column| column.name()).collect(),
            filter: None,
            order_by: None,
            limit: None,
        }
    }
}

impl<'a> From<Select<'a>> for Statement<'a> {
    fn from(value: Select<'a>) -> Self {
        Self::Select(value)
    }
}
