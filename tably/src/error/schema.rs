//! SchemaError for column inference

/// Error returned when a column schema cannot be derived from a sample record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The record is neither struct-like nor a string-keyed map.
    #[error("cannot infer columns from {found}: expected a struct or a string-keyed map")]
    UnsupportedShape { found: &'static str },
}

impl SchemaError {
    /// Creates a new unsupported shape error.
    pub fn unsupported(found: &'static str) -> Self {
        Self::UnsupportedShape { found }
    }
}
