//! Optimistic mutation errors

/// A remote call failed after a tentative local change was applied.
///
/// By the time this error is returned the local value has already been
/// restored from its snapshot.
#[derive(Debug, thiserror::Error)]
#[error("change rolled back: {source}")]
pub struct OptimisticError<E: std::error::Error + 'static> {
    #[source]
    pub source: E,
}

impl<E: std::error::Error + 'static> OptimisticError<E> {
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// Returns the error raised by the remote call.
    pub fn into_inner(self) -> E {
        self.source
    }
}
