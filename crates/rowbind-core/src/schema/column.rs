use crate::{stmt::Value, Error, Result};

use std::{
    any::{Any, TypeId},
    fmt,
    sync::Arc,
};

pub(super) type LoadFn = Arc<dyn Fn(&dyn Any) -> Result<Value> + Send + Sync>;
pub(super) type SaveFn = Arc<dyn Fn(&mut dyn Any, Value) -> Result<()> + Send + Sync>;

/// Maps one column of a table to a field (or computed value) of a record.
///
/// A column is bound to exactly one record type. It holds no data of its
/// own, so it can be used with any number of record instances concurrently.
#[derive(Clone)]
pub struct ColumnSpec {
    /// The name of the column in the database.
    pub(super) name: String,

    /// SQL type used in `CREATE TABLE`.
    pub(super) sql_type: String,

    /// Column constraint, e.g. `NOT NULL`. Empty when unconstrained.
    pub(super) constraint: String,

    pub(super) record_type: TypeId,
    pub(super) record_type_name: &'static str,

    pub(super) load: LoadFn,
    pub(super) save: SaveFn,
}

/// A write-through sink bound to one column of one record instance.
///
/// Obtained from [`ColumnSpec::save_to`]; consumed by [`Target::set`].
pub struct Target<'a> {
    column: &'a ColumnSpec,
    record: &'a mut dyn Any,
}

impl ColumnSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    /// Extracts the column's parameter value from `record`.
    pub fn load_from<R: Any>(&self, record: &R) -> Result<Value> {
        self.check_record::<R>()?;
        (self.load)(record as &dyn Any)
    }

    /// Returns a target that writes a scanned value into `record`.
    pub fn save_to<'a, R: Any>(&'a self, record: &'a mut R) -> Result<Target<'a>> {
        self.check_record::<R>()?;
        Ok(Target {
            column: self,
            record,
        })
    }

    fn check_record<R: Any>(&self) -> Result<()> {
        if TypeId::of::<R>() != self.record_type {
            return Err(Error::type_mismatch(
                self.record_type_name,
                std::any::type_name::<R>(),
            ));
        }
        Ok(())
    }
}

impl Target<'_> {
    pub fn column(&self) -> &ColumnSpec {
        self.column
    }

    /// Converts `value` and stores it in the bound field.
    pub fn set(self, value: Value) -> Result<()> {
        (self.column.save)(self.record, value)
            .map_err(|err| err.context(err!("column {}", self.column.name)))
    }
}

/// Wraps a typed load function so it can be stored on a column.
pub(super) fn erase_load<R: Any>(
    load: impl Fn(&R) -> Result<Value> + Send + Sync + 'static,
) -> LoadFn {
    Arc::new(move |record: &dyn Any| match record.downcast_ref::<R>() {
        Some(record) => load(record),
        None => Err(Error::type_mismatch(std::any::type_name::<R>(), "unknown")),
    })
}

/// Wraps a typed save function so it can be stored on a column.
pub(super) fn erase_save<R: Any>(
    save: impl Fn(&mut R, Value) -> Result<()> + Send + Sync + 'static,
) -> SaveFn {
    Arc::new(
        move |record: &mut dyn Any, value: Value| match record.downcast_mut::<R>() {
            Some(record) => save(record, value),
            None => Err(Error::type_mismatch(std::any::type_name::<R>(), "unknown")),
        },
    )
}

impl PartialEq for ColumnSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.sql_type == other.sql_type
            && self.constraint == other.constraint
            && self.record_type == other.record_type
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("sql_type", &self.sql_type)
            .field("constraint", &self.constraint)
            .field("record", &self.record_type_name)
            .finish()
    }
}
