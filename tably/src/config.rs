//! Table configuration

use serde::Deserialize;

use crate::model::SemanticType;

/// Default page size for new tables.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default display widths per semantic type, used by schema inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidthDefaults {
    pub text: u16,
    pub integer: u16,
    pub float: u16,
    pub date: u16,
    pub boolean: u16,
}

impl Default for WidthDefaults {
    fn default() -> Self {
        Self {
            text: SemanticType::Text.default_width(),
            integer: SemanticType::Integer.default_width(),
            float: SemanticType::Float.default_width(),
            date: SemanticType::Date.default_width(),
            boolean: SemanticType::Boolean.default_width(),
        }
    }
}

impl WidthDefaults {
    /// Width for a column of type `ty`.
    pub fn for_type(&self, ty: SemanticType) -> u16 {
        match ty {
            SemanticType::Text => self.text,
            SemanticType::Integer => self.integer,
            SemanticType::Float => self.float,
            SemanticType::Date => self.date,
            SemanticType::Boolean => self.boolean,
        }
    }
}

/// Configuration for a [`Table`](crate::Table).
///
/// # Example
///
/// ```
/// use tably::TableConfig;
///
/// let config = TableConfig::default().with_page_size(25);
/// assert_eq!(config.page_size(), 25);
///
/// let config: TableConfig = serde_json::from_str(r#"{"page_size": 0}"#).unwrap();
/// assert_eq!(config.page_size(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page. Values below 1 are treated as 1.
    ///
    /// Default: 10
    page_size: usize,

    /// Default column widths for inferred columns.
    pub widths: WidthDefaults,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            widths: WidthDefaults::default(),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (clamped to at least 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the default widths for inferred columns.
    pub fn with_widths(mut self, widths: WidthDefaults) -> Self {
        self.widths = widths;
        self
    }

    /// Effective page size.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
