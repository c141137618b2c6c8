//! Declarative column descriptions loaded from host configuration.

use serde::Deserialize;

use crate::format::Formatter;
use crate::model::Column;
use crate::model::SemanticType;

/// A column description that can be deserialized from configuration.
///
/// ```
/// use tably::ColumnHint;
/// # use std::collections::HashMap;
///
/// let hint: ColumnHint = serde_json::from_str(
///     r#"{"key": "salary", "header": "Salary", "type": "float", "format": "currency"}"#,
/// )
/// .unwrap();
/// let column = hint.into_column::<HashMap<String, f64>>();
/// assert_eq!(column.header, "Salary");
/// assert_eq!(column.width, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnHint {
    pub key: String,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default, rename = "type")]
    pub semantic_type: SemanticType,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default = "default_true")]
    pub searchable: bool,
    #[serde(default)]
    pub format: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ColumnHint {
    /// Builds the column. Header defaults to the key and width to the
    /// type's default width.
    pub fn into_column<R>(self) -> Column<R> {
        let header = self.header.unwrap_or_else(|| self.key.clone());
        let width = self
            .width
            .unwrap_or_else(|| self.semantic_type.default_width());
        let formatter = self
            .format
            .as_deref()
            .map(Formatter::by_name)
            .unwrap_or_default();

        Column::new(self.key, header)
            .with_type(self.semantic_type)
            .with_width(width)
            .with_sortable(self.sortable)
            .with_searchable(self.searchable)
            .with_formatter(formatter)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::Value;

    type Map = HashMap<String, Value>;

    #[test]
    fn test_minimal_hint() {
        let hint: ColumnHint = serde_json::from_str(r#"{"key": "name"}"#).unwrap();
        let column: Column<Map> = hint.into_column();
        assert_eq!(column.header, "name");
        assert_eq!(column.semantic_type, SemanticType::Text);
        assert_eq!(column.width, 15);
        assert!(column.sortable);
        assert!(column.searchable);
    }

    #[test]
    fn test_full_hint() {
        let hints: Vec<ColumnHint> = serde_json::from_str(
            r#"[
                {"key": "id", "header": "ID", "type": "integer", "width": 4, "searchable": false},
                {"key": "done", "type": "boolean", "sortable": false, "format": "percent"}
            ]"#,
        )
        .unwrap();
        let columns: Vec<Column<Map>> = hints.into_iter().map(ColumnHint::into_column).collect();

        assert_eq!(columns[0].header, "ID");
        assert_eq!(columns[0].semantic_type, SemanticType::Integer);
        assert_eq!(columns[0].width, 4);
        assert!(!columns[0].searchable);

        assert_eq!(columns[1].width, 8);
        assert!(!columns[1].sortable);
        assert_eq!(columns[1].formatter.name(), "percent");
    }

    #[test]
    fn test_rejects_unknown_type() {
        let result: Result<ColumnHint, _> = serde_json::from_str(r#"{"key": "x", "type": "money"}"#);
        assert!(result.is_err());
    }
}
