//! Cells and rows.

use super::SemanticType;
use super::Value;

/// One value at the intersection of a row and a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    value: Value,
    semantic_type: SemanticType,
}

impl Cell {
    /// Creates a cell for a column of type `semantic_type`.
    ///
    /// Text that does not parse as that type is kept as
    /// [`Value::Unparsed`].
    pub fn new(value: Value, semantic_type: SemanticType) -> Self {
        Self {
            value: value.coerce(semantic_type),
            semantic_type,
        }
    }

    /// The stored value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Semantic type of the owning column at creation time.
    pub fn semantic_type(&self) -> SemanticType {
        self.semantic_type
    }
}

/// One ingested record.
#[derive(Debug, Clone)]
pub struct Row<R> {
    id: usize,
    cells: Vec<Cell>,
    source: R,
}

impl<R> Row<R> {
    pub(crate) fn new(id: usize, cells: Vec<Cell>, source: R) -> Self {
        Self { id, cells, source }
    }

    /// Ingestion sequence number.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Cells, aligned with the table's columns.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at column `index`.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// The record this row was built from.
    pub fn source(&self) -> &R {
        &self.source
    }
}
