use super::Statement;

use rowbind_core::TableSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct Count<'a> {
    pub table: &'a str,
    pub filter: Option<&'a str>,
}

impl<'a> Statement<'a> {
    pub fn count(spec: &'a TableSpec, filter: Option<&'a str>) -> Self {
        Count {
            table: spec.name(),
            filter,
        }
        .into()
    }
}

impl<'a> From<Count<'a>> for Statement<'a> {
    fn from(value: Count<'a>) -> Self {
        Self::Count(value)
    }
}
