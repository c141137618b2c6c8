//! IngestionError for loading records into a table

use super::SchemaError;

/// Error returned by [`Table::set_data`](crate::Table::set_data) and friends.
///
/// Per-field lookup misses are never reported here; they degrade to an
/// empty cell instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestionError {
    /// The input is not an indexable sequence of records.
    #[error("data must be a collection of records, got {found}")]
    NotACollection { found: &'static str },

    /// Columns had to be inferred and the first record could not be described.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl IngestionError {
    /// Creates a new not-a-collection error.
    pub fn not_a_collection(found: &'static str) -> Self {
        Self::NotACollection { found }
    }
}
