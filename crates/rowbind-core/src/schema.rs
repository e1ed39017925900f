mod builder;
pub use builder::TableSpecBuilder;

mod column;
pub use column::{ColumnSpec, Target};

mod field;
pub use field::Field;

mod field_value;
pub use field_value::{FieldKind, FieldValue};

mod record;
pub use record::{Fields, Record};

mod table;
pub use table::TableSpec;
