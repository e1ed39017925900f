mod column_def;
pub use column_def::ColumnDef;

mod count;
pub use count::Count;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'a> {
    Count(Count<'a>),
    CreateTable(CreateTable<'a>),
    Delete(Delete<'a>),
    Insert(Insert<'a>),
    Select(Select<'a>),
    Update(Update<'a>),
}

impl Statement<'_> {
    /// Number of placeholders the statement itself generates for column
    /// values. Placeholders inside caller-supplied clauses are not included.
    pub fn column_placeholders(&self) -> usize {
        match self {
            Statement::Insert(insert) => insert.columns.len(),
            Statement::Update(update) => update.columns.len(),
            _ => 0,
        }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize(self))
    }
}
