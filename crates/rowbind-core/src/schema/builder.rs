use super::{
    column::{erase_load, erase_save},
    ColumnSpec, Field, Fields, TableSpec,
};
use crate::{stmt::Value, Result};

use indexmap::IndexMap;
use std::{any::TypeId, collections::HashSet};

/// Builds a [`TableSpec`] for the record type `R`.
///
/// Misuse of the builder (unknown fields, duplicate columns, a primary key
/// that names no column) is a defect in the static mapping and panics.
///
/// ```ignore
/// let spec = TableSpec::builder::<User>()
///     .set_table("users")
///     .ignore_fields(&["cache"])
///     .set_field_column("name", "user_name")
///     .generic_other_fields()
///     .set_primary_key("id")
///     .build();
/// ```
pub struct TableSpecBuilder<R> {
    name: String,

    /// Accessible fields of `R`, in declaration order
    fields: Vec<Field<R>>,

    columns: IndexMap<String, ColumnSpec>,

    /// Fields excluded from `generic_other_fields`
    ignored: HashSet<&'static str>,

    /// Fields already mapped to some column
    mapped: HashSet<&'static str>,

    primary_key: Option<String>,

    /// Constraint overrides, applied last
    constraints: Vec<(String, String)>,

    table_constraint: Option<String>,
}

impl<R: Fields> TableSpecBuilder<R> {
    /// The table name defaults to the record type's name.
    pub fn new() -> Self {
        Self {
            name: R::NAME.to_string(),
            fields: R::fields(),
            columns: IndexMap::new(),
            ignored: HashSet::new(),
            mapped: HashSet::new(),
            primary_key: None,
            constraints: vec![],
            table_constraint: None,
        }
    }

    pub fn set_table(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a table-level constraint, e.g. `UNIQUE (a, b)`.
    pub fn set_table_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.table_constraint = Some(constraint.into());
        self
    }

    /// Excludes fields from [`generic_other_fields`](Self::generic_other_fields).
    #[track_caller]
    pub fn ignore_fields(mut self, names: &[&str]) -> Self {
        for name in names {
            let field = self.field(name);
            let name = field.name();
            self.ignored.insert(name);
        }
        self
    }

    /// Registers a column with custom load and save functions.
    #[track_caller]
    pub fn set_column(
        mut self,
        name: impl Into<String>,
        sql_type: impl Into<String>,
        constraint: impl Into<String>,
        load: impl Fn(&R) -> Result<Value> + Send + Sync + 'static,
        save: impl Fn(&mut R, Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();

        if self.columns.contains_key(&name) {
            panic!("column `{name}` has already been added to table `{}`", self.name);
        }

        let column = ColumnSpec {
            name: name.clone(),
            sql_type: sql_type.into(),
            constraint: constraint.into(),
            record_type: TypeId::of::<R>(),
            record_type_name: std::any::type_name::<R>(),
            load: erase_load(load),
            save: erase_save(save),
        };
        self.columns.insert(name, column);
        self
    }

    /// Maps `field` to `column` with an explicit SQL type and constraint.
    #[track_caller]
    pub fn set_field_column_type(
        self,
        field: &str,
        column: impl Into<String>,
        sql_type: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        let field = self.field(field).clone();
        self.map_field(field, column.into(), sql_type.into(), constraint.into())
    }

    /// Maps `field` to `column`, inferring the SQL type from the field's type.
    #[track_caller]
    pub fn set_field_column(self, field: &str, column: impl Into<String>) -> Self {
        let field = self.field(field).clone();
        let Some(sql_type) = field.kind().sql_type() else {
            panic!(
                "unsupported field type `{}` for field `{}` of `{}`",
                field.ty_name(),
                field.name(),
                R::NAME
            );
        };
        self.map_field(field, column.into(), sql_type.to_string(), String::new())
    }

    /// Maps each named field to a column of the same name.
    #[track_caller]
    pub fn generic_fields(mut self, names: &[&str]) -> Self {
        for name in names {
            self = self.set_field_column(name, *name);
        }
        self
    }

    /// Maps every accessible field that is neither ignored nor already mapped,
    /// in declaration order.
    #[track_caller]
    pub fn generic_other_fields(self) -> Self {
        let names: Vec<&'static str> = self
            .fields
            .iter()
            .map(Field::name)
            .filter(|name| {
                !self.ignored.contains(name)
                    && !self.mapped.contains(name)
                    && !self.columns.contains_key(*name)
            })
            .collect();

        self.generic_fields(&names)
    }

    /// Names the primary key column. Resolved by [`build`](Self::build).
    pub fn set_primary_key(mut self, name: impl Into<String>) -> Self {
        self.primary_key = Some(name.into());
        self
    }

    /// Overrides column constraints. Applied after the primary key is marked.
    pub fn set_constraints<K, V>(mut self, constraints: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.constraints.extend(
            constraints
                .into_iter()
                .map(|(column, constraint)| (column.into(), constraint.into())),
        );
        self
    }

    #[track_caller]
    pub fn build(self) -> TableSpec {
        let mut columns = self.columns;

        if self.name.is_empty() {
            panic!("empty table name for `{}`", R::NAME);
        }

        let primary_key = self.primary_key.map(|name| {
            let Some((index, _, column)) = columns.get_full_mut(&name) else {
                panic!("invalid column `{name}` as primary key of table `{}`", self.name);
            };
            column.constraint = "PRIMARY KEY".to_string();
            index
        });

        for (name, constraint) in self.constraints {
            let Some(column) = columns.get_mut(&name) else {
                panic!("cannot set constraint on unknown column `{name}` of table `{}`", self.name);
            };
            column.constraint = constraint;
        }

        TableSpec {
            name: self.name,
            columns,
            primary_key,
            constraint: self.table_constraint,
        }
    }

    #[track_caller]
    fn field(&self, name: &str) -> &Field<R> {
        match self.fields.iter().find(|field| field.name() == name) {
            Some(field) => field,
            None => panic!("field `{name}` is not found or not public on `{}`", R::NAME),
        }
    }

    #[track_caller]
    fn map_field(
        mut self,
        field: Field<R>,
        column: String,
        sql_type: String,
        constraint: String,
    ) -> Self {
        self.mapped.insert(field.name());

        let load = field.clone();
        self.set_column(
            column,
            sql_type,
            constraint,
            move |record| Ok(load.load(record)),
            move |record, value| field.save(record, value),
        )
    }
}

impl<R: Fields> Default for TableSpecBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
