#[macro_use]
mod macros;

pub mod driver;
pub use driver::Backend;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Fields, Record, TableSpec};

pub mod stmt;

/// A Result type alias that uses Rowbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
