use super::Error;

/// Error from an execution backend.
#[derive(Debug)]
pub(super) struct BackendError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for BackendError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a backend error.
    ///
    /// Backends use this to convert their native errors (rusqlite, etc.) into
    /// rowbind errors. The mapper passes these through unchanged, only adding
    /// context about the statement being executed.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Backend(BackendError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, came from the backend.
    pub fn is_backend(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Backend(_)))
    }
}
