//! Deriving filtered tables.

use std::borrow::Cow;
use std::sync::Arc;

use log::debug;

use super::Table;
use crate::model::Row;

impl<R> Table<R> {
    /// Rows of the current view whose searchable cells contain `needle`,
    /// case-insensitively, after formatting.
    ///
    /// An empty needle borrows `self` unchanged. Otherwise the result is a
    /// new table sharing this table's columns, holding the matching rows
    /// in current-view order as both its view and its natural order, and
    /// starting with this table's sort state and page size. The derived
    /// table never affects this one.
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use std::collections::BTreeMap;
    /// use tably::Table;
    ///
    /// let fruit = ["Apple", "banana", "Cherry"]
    ///     .map(|name| BTreeMap::from([("name".to_string(), name)]));
    /// let table = Table::new().with_data(fruit)?;
    ///
    /// assert!(matches!(table.filter(""), Cow::Borrowed(_)));
    /// assert_eq!(table.filter("AN").len(), 1);
    /// # Ok::<(), tably::IngestionError>(())
    /// ```
    pub fn filter(&self, needle: &str) -> Cow<'_, Table<R>> {
        if needle.is_empty() {
            return Cow::Borrowed(self);
        }

        let needle = needle.to_lowercase();
        let arena: Vec<Arc<Row<R>>> = self
            .order
            .iter()
            .filter_map(|&slot| self.arena.get(slot))
            .filter(|row| self.matches(row, &needle))
            .cloned()
            .collect();
        let len = arena.len();
        debug!("Filter '{}' kept {} of {} rows", needle, len, self.len());

        Cow::Owned(Table {
            columns: Arc::clone(&self.columns),
            arena,
            order: (0..len).collect(),
            natural: (0..len).collect(),
            sort: self.sort,
            page_size: self.page_size,
            total_rows: len,
            next_id: self.next_id,
            widths: self.widths,
        })
    }

    fn matches(&self, row: &Row<R>, needle: &str) -> bool {
        self.columns
            .iter()
            .zip(row.cells())
            .filter(|(column, _)| column.searchable)
            .any(|(column, cell)| column.format(cell.value()).to_lowercase().contains(needle))
    }
}
