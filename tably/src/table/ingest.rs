//! Loading records into a table.

use std::sync::Arc;

use log::debug;
use log::trace;

use super::Table;
use crate::error::IngestionError;
use crate::error::SchemaError;
use crate::model::Cell;
use crate::model::Column;
use crate::model::Record;
use crate::model::Row;
use crate::model::json_kind;
use crate::schema;

impl<R: Record> Table<R> {
    /// Loads `records` into a table (builder pattern).
    pub fn with_data<I>(mut self, records: I) -> Result<Self, IngestionError>
    where
        I: IntoIterator<Item = R>,
    {
        self.set_data(records)?;
        Ok(self)
    }

    /// Replaces all rows with `records`.
    ///
    /// Prior rows and the active sort are dropped first. Columns are
    /// inferred from the first record when none are set; an empty input
    /// with no columns leaves a table with no columns and no rows. Fields
    /// a record does not have become empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError::Schema`] when columns must be inferred
    /// and the first record is neither a struct nor a map. The table is
    /// left empty in that case.
    pub fn set_data<I>(&mut self, records: I) -> Result<(), IngestionError>
    where
        I: IntoIterator<Item = R>,
    {
        self.clear_rows();

        let mut records = records.into_iter().peekable();
        let unconfigured = self.columns.is_empty();
        if let Some(first) = records.peek().filter(|_| unconfigured) {
            self.columns = Arc::new(self.infer_columns(first)?);
        }

        for record in records {
            self.append(record);
        }
        self.total_rows = self.arena.len();

        debug!(
            "Loaded {} rows into {} columns",
            self.total_rows,
            self.columns.len()
        );
        Ok(())
    }

    /// Appends one record to the end of the natural order and the current
    /// view. Columns are inferred from it when none are set; an active sort
    /// is re-applied.
    pub fn push(&mut self, record: R) -> Result<(), IngestionError> {
        if self.columns.is_empty() {
            self.columns = Arc::new(self.infer_columns(&record)?);
        }
        self.append(record);
        self.total_rows = self.arena.len();
        self.apply_sort();
        Ok(())
    }

    /// Infers columns for records shaped like `sample`, using this table's
    /// default widths.
    pub fn infer_columns(&self, sample: &R) -> Result<Vec<Column<R>>, SchemaError> {
        schema::infer_columns(sample, &self.widths)
    }

    fn append(&mut self, record: R) {
        let slot = self.arena.len();
        let id = self.next_id;
        self.next_id += 1;
        let cells: Vec<Cell> = self
            .columns
            .iter()
            .map(|column| Cell::new(column.value_of(&record), column.semantic_type))
            .collect();
        trace!("Row {} built with {} cells", id, cells.len());

        self.arena.push(Arc::new(Row::new(id, cells, record)));
        self.natural.push(slot);
        self.order.push(slot);
    }
}

impl Table<serde_json::Value> {
    /// Loads a JSON array of objects.
    ///
    /// ```
    /// use tably::Table;
    ///
    /// let mut table = Table::new();
    /// table.set_json(serde_json::json!([{"name": "Ann", "age": 41}]))?;
    /// assert_eq!(table.headers(), vec!["age", "name"]);
    ///
    /// assert!(table.set_json(serde_json::json!({"name": "Ann"})).is_err());
    /// assert!(table.is_empty());
    /// # Ok::<(), tably::IngestionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`IngestionError::NotACollection`] when `data` is not an array. The
    /// table is cleared before the check, so it is empty afterwards.
    pub fn set_json(&mut self, data: serde_json::Value) -> Result<(), IngestionError> {
        match data {
            serde_json::Value::Array(items) => self.set_data(items),
            other => {
                self.clear_rows();
                Err(IngestionError::not_a_collection(json_kind(&other)))
            }
        }
    }
}
