//! A small object-relational mapper.
//!
//! A record type describes its table once, as a [`TableSpec`], and the
//! [`Mapper`] uses that description to generate parameterized SQL for
//! create-table, insert, select, count, update and delete, binding record
//! fields to parameters and scanning result rows back into records.
//!
//! ```ignore
//! use rowbind::{Fields, Mapper, Record, TableSpec};
//! use std::sync::OnceLock;
//!
//! #[derive(Debug, Default, Fields)]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! impl Record for User {
//!     fn table_spec() -> &'static TableSpec {
//!         static SPEC: OnceLock<TableSpec> = OnceLock::new();
//!         SPEC.get_or_init(|| {
//!             TableSpec::builder::<User>()
//!                 .set_table("users")
//!                 .generic_other_fields()
//!                 .set_primary_key("id")
//!                 .build()
//!         })
//!     }
//! }
//!
//! let mapper = Mapper::new(rowbind::Sqlite::in_memory()?);
//! mapper.create_table::<User>(true)?;
//!
//! let mut user = User { name: "alice".into(), ..Default::default() };
//! mapper.insert(&mut user)?;
//! ```

// Lets code generated by `#[derive(Fields)]` refer to this crate by name from
// within the crate itself.
extern crate self as rowbind;

mod mapper;
pub use mapper::{Mapper, Select};

pub use rowbind_core::{args, driver, schema, stmt, Error, IntoError, Result};
pub use rowbind_core::{
    driver::{Backend, ExecResult, Row, Rows},
    schema::{Fields, Record, TableSpec},
    stmt::Value,
};

pub use rowbind_macros::Fields;

#[cfg(feature = "sqlite")]
pub use rowbind_driver_sqlite::Sqlite;
