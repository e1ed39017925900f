use super::Error;

/// Error when a where clause and its bound arguments disagree on the number
/// of placeholders.
#[derive(Debug)]
pub(super) struct ArgumentCountError {
    clause: Box<str>,
    expected: usize,
    actual: usize,
}

impl std::error::Error for ArgumentCountError {}

impl core::fmt::Display for ArgumentCountError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "clause `{}` has {} placeholders but {} arguments were given",
            self.clause, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates an argument count error.
    pub fn argument_count(clause: impl Into<String>, expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::ArgumentCount(ArgumentCountError {
            clause: clause.into().into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an argument count error.
    pub fn is_argument_count(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ArgumentCount(_)))
    }
}
