//! The table engine.
//!
//! Rows live in an arena and are addressed by index. The current view
//! (`order`) and the ingestion order (`natural`) are both permutations of
//! arena indices, so sorting never copies or edits a row.

mod compare;
mod filter;
mod ingest;
mod sort;

use std::collections::HashSet;
use std::sync::Arc;

pub use compare::compare_cells;
pub use sort::SortState;

use crate::config::TableConfig;
use crate::config::WidthDefaults;
use crate::model::Column;
use crate::model::Row;
use crate::pagination;

/// A headless data table.
///
/// `R` is the record type the table is built from; each [`Row`] keeps its
/// source record.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use tably::{Table, Value};
///
/// let people: Vec<BTreeMap<String, Value>> = vec![
///     BTreeMap::from([("id".into(), Value::from(2)), ("name".into(), Value::from("Bob"))]),
///     BTreeMap::from([("id".into(), Value::from(1)), ("name".into(), Value::from("Alice"))]),
/// ];
///
/// let mut table = Table::new().with_page_size(10);
/// table.set_data(people)?;
/// table.sort_by_column(0, false)?;
/// assert_eq!(table.cell_display_value(0, 1), "Alice");
///
/// let bobs = table.filter("bob");
/// assert_eq!(bobs.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Table<R> {
    columns: Arc<Vec<Column<R>>>,
    arena: Vec<Arc<Row<R>>>,
    /// Current view, as arena indices.
    order: Vec<usize>,
    /// Ingestion order, as arena indices.
    natural: Vec<usize>,
    sort: Option<SortState>,
    page_size: usize,
    total_rows: usize,
    next_id: usize,
    widths: WidthDefaults,
}

impl<R> Table<R> {
    /// Creates an empty table that infers its columns on first ingestion.
    pub fn new() -> Self {
        Self::from_config(TableConfig::default())
    }

    /// Creates an empty table from a configuration.
    pub fn from_config(config: TableConfig) -> Self {
        Self {
            columns: Arc::new(Vec::new()),
            arena: Vec::new(),
            order: Vec::new(),
            natural: Vec::new(),
            sort: None,
            page_size: config.page_size(),
            total_rows: 0,
            next_id: 0,
            widths: config.widths,
        }
    }

    /// Creates an empty table with explicit columns.
    pub fn with_columns(columns: Vec<Column<R>>) -> Self {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                log::warn!("Duplicate column key '{}'", column.key);
            }
        }
        let mut table = Self::new();
        table.columns = Arc::new(columns);
        table
    }

    /// Sets the page size (builder pattern). Clamped to at least 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Column definitions in display order.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Column at `index`.
    pub fn column(&self, index: usize) -> Option<&Column<R>> {
        self.columns.get(index)
    }

    /// Column headers in display order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Adjusts the display width of a column. Returns `false` for an
    /// unknown index.
    pub fn set_column_width(&mut self, index: usize, width: u16) -> bool {
        match Arc::make_mut(&mut self.columns).get_mut(index) {
            Some(column) => {
                column.width = width;
                true
            }
            None => false,
        }
    }

    /// Rows in the current (possibly sorted) order.
    pub fn rows(&self) -> impl Iterator<Item = &Row<R>> + '_ {
        self.resolve(&self.order)
    }

    /// Rows in ingestion order.
    pub fn natural_rows(&self) -> impl Iterator<Item = &Row<R>> + '_ {
        self.resolve(&self.natural)
    }

    /// Row at position `index` of the current view.
    pub fn row(&self, index: usize) -> Option<&Row<R>> {
        self.order
            .get(index)
            .and_then(|&slot| self.arena.get(slot))
            .map(Arc::as_ref)
    }

    /// Number of rows in the current view.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Row count recorded by the last ingestion or derivation.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets rows per page. Values below 1 are treated as 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Rows of page `page` (0-indexed). Out-of-range pages are empty.
    pub fn page(&self, page: usize) -> Vec<&Row<R>> {
        match pagination::page_bounds(self.len(), self.page_size, page) {
            Some(range) => {
                log::trace!("Page {} covers rows {:?}", page, range);
                self.resolve(&self.order[range]).collect()
            }
            None => Vec::new(),
        }
    }

    /// Number of pages. An empty table has one, empty, page.
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.len(), self.page_size)
    }

    /// Display text of the cell at (`row`, `column`) in the current view,
    /// formatted by the column's formatter. Empty for unknown positions.
    pub fn cell_display_value(&self, row: usize, column: usize) -> String {
        let cell = self.row(row).and_then(|r| r.cell(column));
        match (cell, self.column(column)) {
            (Some(cell), Some(column)) => column.format(cell.value()),
            _ => String::new(),
        }
    }

    fn resolve<'a>(&'a self, slots: &'a [usize]) -> impl Iterator<Item = &'a Row<R>> + 'a {
        slots
            .iter()
            .filter_map(|&slot| self.arena.get(slot))
            .map(Arc::as_ref)
    }

    /// Drops every row and the active sort. Columns are kept.
    fn clear_rows(&mut self) {
        self.arena.clear();
        self.order.clear();
        self.natural.clear();
        self.sort = None;
        self.total_rows = 0;
        self.next_id = 0;
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            columns: Arc::clone(&self.columns),
            arena: self.arena.clone(),
            order: self.order.clone(),
            natural: self.natural.clone(),
            sort: self.sort,
            page_size: self.page_size,
            total_rows: self.total_rows,
            next_id: self.next_id,
            widths: self.widths,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::SemanticType;
    use crate::model::Value;

    type Map = HashMap<String, Value>;

    fn record(id: i64, name: &str) -> Map {
        Map::from([
            ("id".to_string(), Value::from(id)),
            ("name".to_string(), Value::from(name)),
        ])
    }

    fn people() -> Table<Map> {
        let mut table = Table::with_columns(vec![
            Column::new("id", "ID").with_type(SemanticType::Integer),
            Column::new("name", "Name"),
        ])
        .with_page_size(2);
        table
            .set_data(vec![record(1, "Ann"), record(2, "Ben"), record(3, "Cy")])
            .unwrap();
        table
    }

    #[test]
    fn test_new_table_is_empty() {
        let table: Table<Map> = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.page_size(), 10);
        assert_eq!(table.total_pages(), 1);
        assert!(table.page(0).is_empty());
        assert!(table.columns().is_empty());
        assert_eq!(table.sort_state(), None);
    }

    #[test]
    fn test_page_size_clamped() {
        let mut table: Table<Map> = Table::new().with_page_size(0);
        assert_eq!(table.page_size(), 1);
        table.set_page_size(0);
        assert_eq!(table.page_size(), 1);

        let table: Table<Map> = Table::from_config(TableConfig::new().with_page_size(0));
        assert_eq!(table.page_size(), 1);
    }

    #[test]
    fn test_pages() {
        let table = people();
        assert_eq!(table.total_pages(), 2);
        let first: Vec<usize> = table.page(0).iter().map(|r| r.id()).collect();
        assert_eq!(first, vec![0, 1]);
        assert_eq!(table.page(1).len(), 1);
        assert!(table.page(2).is_empty());
    }

    #[test]
    fn test_cell_display_value() {
        let table = people();
        assert_eq!(table.cell_display_value(0, 1), "Ann");
        assert_eq!(table.cell_display_value(2, 0), "3");
        assert_eq!(table.cell_display_value(3, 0), "");
        assert_eq!(table.cell_display_value(0, 5), "");
    }

    #[test]
    fn test_headers_and_widths() {
        let mut table = people();
        assert_eq!(table.headers(), vec!["ID", "Name"]);

        let derived = table.filter("a").into_owned();
        assert!(table.set_column_width(1, 40));
        assert!(!table.set_column_width(9, 40));
        assert_eq!(table.columns()[1].width, 40);
        assert_eq!(derived.columns()[1].width, 15);
    }
}
