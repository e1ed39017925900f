use super::{Formatter, ToSql};

use crate::stmt::ColumnDef;

impl ToSql for &ColumnDef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.name " " self.ty);

        if !self.constraint.is_empty() {
            fmt!(f, " " self.constraint);
        }
    }
}
