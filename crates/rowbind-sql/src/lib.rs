//! Renders the SQL statements used by the mapper.
//!
//! Six statement shapes are supported: `CREATE TABLE`, `SELECT`,
//! `SELECT count(*)`, `INSERT`, `UPDATE` and `DELETE`. Table and column names
//! and the placeholders for column values are generated from a
//! [`TableSpec`](rowbind_core::TableSpec). Filter, order and limit clauses are
//! caller-supplied text and are inserted verbatim; values must always be
//! passed as bound arguments, never spliced into a clause.

pub mod serializer;
pub use serializer::{count_placeholders, serialize};

pub mod stmt;
pub use stmt::Statement;
