use super::Error;
use crate::stmt::Value;

/// Error when a value cannot be converted to the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    from_type: &'static str,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.from_type, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error.
    ///
    /// Raised when a scanned value cannot be coerced into the field's type,
    /// e.g. text that does not parse as an integer, or `NULL` into a
    /// non-optional field.
    pub fn type_conversion(value: &Value, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from_type: value.ty_name(),
            to_type,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TypeConversion(_)))
    }
}
