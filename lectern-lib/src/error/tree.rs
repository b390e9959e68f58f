//! Errors raised by strict tree building

/// Malformed parent graphs, reported only when strict building is requested.
///
/// Lenient building never returns these; it logs and degrades instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Two records share the same id.
    #[error("duplicate category id {id}")]
    DuplicateId { id: String },

    /// Following parent links from this record leads back to it.
    #[error("cycle detected in parent chain at category id {id}")]
    CycleDetected { id: String },
}
