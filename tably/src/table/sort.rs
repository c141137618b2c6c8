//! Sorting and the unsorted/ascending/descending cycle.

use log::debug;
use log::trace;

use super::Table;
use super::compare::SortKey;
use crate::error::SortError;

/// Active sort of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Index of the sorted column.
    pub column: usize,
    /// Whether the order is descending.
    pub descending: bool,
}

impl SortState {
    /// Ascending sort on `column`.
    pub fn ascending(column: usize) -> Self {
        Self {
            column,
            descending: false,
        }
    }

    /// Descending sort on `column`.
    pub fn descending(column: usize) -> Self {
        Self {
            column,
            descending: true,
        }
    }

    /// Next state when `column` is activated again.
    ///
    /// Same column: ascending becomes descending, descending becomes
    /// unsorted. Any other column starts ascending.
    ///
    /// ```
    /// use tably::SortState;
    ///
    /// let asc = SortState::next_for(None, 2);
    /// assert_eq!(asc, Some(SortState::ascending(2)));
    /// let desc = SortState::next_for(asc, 2);
    /// assert_eq!(desc, Some(SortState::descending(2)));
    /// assert_eq!(SortState::next_for(desc, 2), None);
    /// assert_eq!(SortState::next_for(desc, 0), Some(SortState::ascending(0)));
    /// ```
    pub fn next_for(current: Option<SortState>, column: usize) -> Option<SortState> {
        match current {
            Some(state) if state.column == column && !state.descending => {
                Some(Self::descending(column))
            }
            Some(state) if state.column == column => None,
            _ => Some(Self::ascending(column)),
        }
    }
}

impl<R> Table<R> {
    /// Active sort, if any.
    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    /// Sorts the current view by column `index`.
    ///
    /// The sort is stable: rows comparing equal keep their current
    /// relative order.
    ///
    /// # Errors
    ///
    /// [`SortError::InvalidIndex`] for an unknown column and
    /// [`SortError::NotSortable`] for a column marked not sortable. The
    /// table is unchanged on error.
    pub fn sort_by_column(&mut self, index: usize, descending: bool) -> Result<(), SortError> {
        let column = self
            .columns
            .get(index)
            .ok_or_else(|| SortError::invalid_index(index, self.columns.len()))?;
        if !column.sortable {
            return Err(SortError::not_sortable(index, column.header.clone()));
        }

        debug!(
            "Sorting {} rows by '{}' ({})",
            self.order.len(),
            column.header,
            if descending { "descending" } else { "ascending" }
        );
        self.sort = Some(SortState { column: index, descending });
        self.apply_sort();
        Ok(())
    }

    /// Restores ingestion order and drops the active sort.
    pub fn clear_sort(&mut self) {
        trace!("Clearing sort");
        self.sort = None;
        self.order.clone_from(&self.natural);
    }

    /// Advances the three-state sort cycle on column `index`.
    ///
    /// Returns the new sort state; `None` means natural order was restored.
    pub fn cycle_sort(&mut self, index: usize) -> Result<Option<SortState>, SortError> {
        let next = SortState::next_for(self.sort, index);
        match next {
            Some(state) => self.sort_by_column(state.column, state.descending)?,
            None => self.clear_sort(),
        }
        Ok(next)
    }

    /// Re-orders `order` by the active sort.
    pub(super) fn apply_sort(&mut self) {
        let Some(SortState { column, descending }) = self.sort else {
            return;
        };
        let keys: Vec<SortKey> = self
            .arena
            .iter()
            .map(|row| match row.cell(column) {
                Some(cell) => SortKey::of_cell(cell),
                None => SortKey::Unparsed(String::new()),
            })
            .collect();

        if descending {
            self.order.sort_by(|&a, &b| keys[b].cmp(&keys[a]));
        } else {
            self.order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        }
    }
}
