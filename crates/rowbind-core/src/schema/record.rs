use super::{Field, TableSpec};

/// A record shape whose accessible fields can be enumerated.
///
/// Usually implemented with `#[derive(Fields)]`, which lists the struct's
/// `pub` fields in declaration order.
pub trait Fields: Sized + 'static {
    /// Name of the record type. Used as the default table name.
    const NAME: &'static str;

    /// Accessors for every accessible field, in declaration order.
    fn fields() -> Vec<Field<Self>>;
}

/// A record that can be mapped to a table.
///
/// Every instance of the type shares the same [`TableSpec`], which is
/// typically built once and kept in a static:
///
/// ```ignore
/// impl Record for User {
///     fn table_spec() -> &'static TableSpec {
///         static SPEC: OnceLock<TableSpec> = OnceLock::new();
///         SPEC.get_or_init(|| {
///             TableSpec::builder::<User>()
///                 .generic_other_fields()
///                 .set_primary_key("id")
///                 .build()
///         })
///     }
/// }
/// ```
pub trait Record: 'static {
    fn table_spec() -> &'static TableSpec;
}
