//! Per-field configuration strings: `"Header,opt,opt,..."`.

use crate::format::Formatter;
use crate::model::Column;

/// Parsed form of a field configuration string.
///
/// The first comma-separated part is the header. Options:
///
/// | Option | Effect |
/// |--------|--------|
/// | `sortable` / `!sortable` | toggle sorting |
/// | `searchable` / `!searchable` | toggle filtering |
/// | `width:N` | display width |
/// | `format:NAME` | formatter, see [`Formatter::by_name`] |
///
/// ```
/// use tably::FieldConfig;
///
/// let config = FieldConfig::parse("Salary,!searchable,width:12,format:currency");
/// assert_eq!(config.header.as_deref(), Some("Salary"));
/// assert!(config.sortable);
/// assert!(!config.searchable);
/// assert_eq!(config.width, Some(12));
/// assert_eq!(config.format.as_deref(), Some("currency"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub header: Option<String>,
    pub sortable: bool,
    pub searchable: bool,
    pub width: Option<u16>,
    pub format: Option<String>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            header: None,
            sortable: true,
            searchable: true,
            width: None,
            format: None,
        }
    }
}

impl FieldConfig {
    /// Parses a configuration string. Malformed options are skipped.
    pub fn parse(tag: &str) -> Self {
        let mut config = Self::default();
        let mut parts = tag.split(',');

        let header = parts.next().map(str::trim).unwrap_or_default();
        if !header.is_empty() {
            config.header = Some(header.to_string());
        }

        for part in parts.map(str::trim) {
            match part {
                "" => {}
                "sortable" => config.sortable = true,
                "!sortable" => config.sortable = false,
                "searchable" => config.searchable = true,
                "!searchable" => config.searchable = false,
                _ => {
                    if let Some(width) = part.strip_prefix("width:") {
                        match width.trim().parse::<u16>() {
                            Ok(width) => config.width = Some(width),
                            Err(_) => log::warn!("Ignoring invalid width in field tag '{}'", tag),
                        }
                    } else if let Some(format) = part.strip_prefix("format:") {
                        config.format = Some(format.to_string());
                    } else {
                        log::warn!("Ignoring unknown option '{}' in field tag '{}'", part, tag);
                    }
                }
            }
        }

        config
    }

    /// Applies this configuration on top of `column`.
    pub fn apply<R>(&self, mut column: Column<R>) -> Column<R> {
        if let Some(header) = &self.header {
            column.header = header.clone();
        }
        if let Some(width) = self.width {
            column.width = width;
        }
        if let Some(format) = &self.format {
            column.formatter = Formatter::by_name(format);
        }
        column.sortable = self.sortable;
        column.searchable = self.searchable;
        column
    }
}
