use super::Statement;

use rowbind_core::TableSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct Delete<'a> {
    pub table: &'a str,
    pub filter: &'a str,
}

impl<'a> Statement<'a> {
    pub fn delete(spec: &'a TableSpec, filter: &'a str) -> Self {
        Delete {
            table: spec.name(),
            filter,
        }
        .into()
    }
}

impl<'a> From<Delete<'a>> for Statement<'a> {
    fn from(value: Delete<'a>) -> Self {
        Self::Delete(value)
    }
}
