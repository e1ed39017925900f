#[macro_use]
mod fmt;
use fmt::ToSql;

mod clause;
use clause::Clause;

mod delim;
use delim::Comma;

mod placeholder;
pub use placeholder::count_placeholders;
use placeholder::Placeholder;

// Fragment serializers
mod column_def;
mod statement;

use crate::stmt::Statement;

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

/// Serialize a statement to a single-line SQL string terminated by `;`.
pub fn serialize(stmt: &Statement<'_>) -> String {
    let mut ret = String::new();

    let mut fmt = Formatter { dst: &mut ret };

    stmt.to_sql(&mut fmt);

    ret.push(';');
    ret
}
