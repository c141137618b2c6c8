//! SortError for column sorting

/// Error returned by [`Table::sort_by_column`](crate::Table::sort_by_column).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The column index is out of range.
    #[error("invalid column index: {index} (table has {column_count} columns)")]
    InvalidIndex { index: usize, column_count: usize },

    /// The column exists but is marked as not sortable.
    #[error("column '{header}' is not sortable")]
    NotSortable { index: usize, header: String },
}

impl SortError {
    /// Creates a new invalid index error.
    pub fn invalid_index(index: usize, column_count: usize) -> Self {
        Self::InvalidIndex {
            index,
            column_count,
        }
    }

    /// Creates a new not sortable error.
    pub fn not_sortable(index: usize, header: impl Into<String>) -> Self {
        Self::NotSortable {
            index,
            header: header.into(),
        }
    }
}
