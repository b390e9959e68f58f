//! Errors raised by typed record accessors

/// Error type for typed field access on a [`Record`](crate::model::Record).
///
/// Dotted-path resolution never produces this error; only the typed getters
/// and conversions into concrete row types do.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The requested field is absent from the record.
    #[error("field '{field}' is missing")]
    Missing { field: String },

    /// The field holds a value of another type.
    #[error("field '{field}' is {actual}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// The name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::TypeMismatch { field, .. } => field,
        }
    }
}
