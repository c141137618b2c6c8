//! Column schema.

use std::fmt;
use std::sync::Arc;

use super::Record;
use super::SemanticType;
use super::Value;
use super::record::resolve_field;
use crate::format::Formatter;

/// Custom value extraction for a column, bypassing by-name lookup.
pub struct Accessor<R>(Arc<dyn Fn(&R) -> Value + Send + Sync>);

impl<R> Accessor<R> {
    /// Wraps an extraction function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&R) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(func))
    }

    /// Extracts the value from `record`.
    pub fn get(&self, record: &R) -> Value {
        (self.0)(record)
    }
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor(..)")
    }
}

/// Schema for one logical field of a table.
///
/// # Examples
///
/// ```
/// use tably::{Column, Formatter, SemanticType};
/// # use std::collections::HashMap;
/// # type Row = HashMap<String, String>;
///
/// let salary: Column<Row> = Column::new("salary", "Salary")
///     .with_type(SemanticType::Float)
///     .with_width(12)
///     .with_formatter(Formatter::currency());
/// assert!(salary.sortable);
/// ```
pub struct Column<R> {
    /// Lookup key, unique within a table.
    pub key: String,
    /// Display label.
    pub header: String,
    /// Semantic type of the values in this column.
    pub semantic_type: SemanticType,
    /// Display width hint for presentation layers.
    pub width: u16,
    /// Whether the column can be sorted.
    pub sortable: bool,
    /// Whether filtering looks at this column.
    pub searchable: bool,
    /// Display formatter.
    pub formatter: Formatter,
    /// Optional custom value extraction.
    pub accessor: Option<Accessor<R>>,
}

impl<R> Column<R> {
    /// Creates a sortable, searchable text column.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            semantic_type: SemanticType::Text,
            width: SemanticType::Text.default_width(),
            sortable: true,
            searchable: true,
            formatter: Formatter::default(),
            accessor: None,
        }
    }

    /// Sets the semantic type.
    pub fn with_type(mut self, semantic_type: SemanticType) -> Self {
        self.semantic_type = semantic_type;
        self
    }

    /// Sets the display width.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Sets whether the column is sortable.
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets whether the column is searchable.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Sets the display formatter.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Sets a custom accessor.
    pub fn with_accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&R) -> Value + Send + Sync + 'static,
    {
        self.accessor = Some(Accessor::new(accessor));
        self
    }

    /// Formats a value with this column's formatter.
    pub fn format(&self, value: &Value) -> String {
        self.formatter.format(value)
    }
}

impl<R: Record> Column<R> {
    /// Resolves this column's value on `record`.
    ///
    /// Uses the accessor when set, otherwise a by-name lookup. Missing
    /// fields resolve to [`Value::empty`].
    pub fn value_of(&self, record: &R) -> Value {
        match &self.accessor {
            Some(accessor) => accessor.get(record),
            None => resolve_field(record, &self.key).unwrap_or_default(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            semantic_type: self.semantic_type,
            width: self.width,
            sortable: self.sortable,
            searchable: self.searchable,
            formatter: self.formatter.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("semantic_type", &self.semantic_type)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .field("formatter", &self.formatter)
            .field("accessor", &self.accessor.is_some())
            .finish()
    }
}
