use super::{FieldKind, FieldValue};
use crate::{stmt::Value, Result};

use std::{fmt, sync::Arc};

type LoadFn<R> = Arc<dyn Fn(&R) -> Value + Send + Sync>;
type SaveFn<R> = Arc<dyn Fn(&mut R, Value) -> Result<()> + Send + Sync>;

/// Accessor for one field of the record type `R`.
///
/// A field is resolved once, when the record's field table is generated, and
/// can then be used against any number of `R` instances.
pub struct Field<R> {
    name: &'static str,
    kind: FieldKind,
    ty_name: &'static str,
    load: LoadFn<R>,
    save: SaveFn<R>,
}

impl<R: 'static> Field<R> {
    /// Creates an accessor from a pair of projections into `R`.
    ///
    /// ```
    /// use rowbind_core::schema::Field;
    ///
    /// struct Point { x: i64 }
    ///
    /// let x = Field::new("x", |p: &Point| &p.x, |p: &mut Point| &mut p.x);
    /// let mut p = Point { x: 1 };
    /// x.save(&mut p, 7.into()).unwrap();
    /// assert_eq!(p.x, 7);
    /// ```
    pub fn new<F: FieldValue>(
        name: &'static str,
        get: fn(&R) -> &F,
        get_mut: fn(&mut R) -> &mut F,
    ) -> Self {
        Self {
            name,
            kind: F::KIND,
            ty_name: std::any::type_name::<F>(),
            load: Arc::new(move |record: &R| get(record).to_value()),
            save: Arc::new(move |record: &mut R, value: Value| {
                *get_mut(record) = F::from_value(value)?;
                Ok(())
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Rust type name of the field, for diagnostics.
    pub fn ty_name(&self) -> &'static str {
        self.ty_name
    }

    /// Reads the field's current value from `record`.
    pub fn load(&self, record: &R) -> Value {
        (self.load)(record)
    }

    /// Converts `value` into the field's type and writes it into `record`.
    /// On failure the record is left untouched.
    pub fn save(&self, record: &mut R, value: Value) -> Result<()> {
        (self.save)(record, value)
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            kind: self.kind,
            ty_name: self.ty_name,
            load: self.load.clone(),
            save: self.save.clone(),
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("ty", &self.ty_name)
            .finish()
    }
}
