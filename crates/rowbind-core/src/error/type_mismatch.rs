use super::Error;

/// Error when a column descriptor is invoked with a record of a different
/// shape than the one it was built for.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    expected: &'static str,
    actual: &'static str,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch: column bound to {}, invoked with {}",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TypeMismatch(_)))
    }
}
