//! Formatter registry: turns typed cell values into display strings.

use std::fmt;
use std::sync::Arc;

use crate::model::Value;
use crate::model::date::DATE_LAYOUT;
use crate::model::date::DATETIME_LAYOUT;
use crate::model::date::parse_datetime;
use crate::model::date::parse_display_date;

type FormatFn = dyn Fn(&Value) -> String + Send + Sync;

/// A named, cloneable display function for cell values.
///
/// # Example
///
/// ```
/// use tably::{Formatter, Value};
///
/// let price = Formatter::currency();
/// assert_eq!(price.format(&Value::from(99.99)), "$99.99");
///
/// let done = Formatter::boolean("yes", "no");
/// assert_eq!(done.format(&Value::from(true)), "yes");
/// ```
#[derive(Clone)]
pub struct Formatter {
    name: String,
    func: Arc<FormatFn>,
}

impl Formatter {
    /// Wraps a caller-supplied formatting function.
    pub fn custom<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Name this formatter was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formats a value.
    pub fn format(&self, value: &Value) -> String {
        (self.func)(value)
    }

    /// Resolves the `format:` option of a field tag.
    ///
    /// Known names are `currency`, `percent`, `date`, `time`, `number`,
    /// `truncate:N`, `prefix:TEXT` and `suffix:TEXT`. Anything else falls
    /// back to [`Formatter::default`].
    pub fn by_name(name: &str) -> Self {
        let name = name.trim();
        match name {
            "" | "default" => return Self::default(),
            "currency" => return Self::currency(),
            "percent" => return Self::percent(),
            "date" => return Self::date(),
            "time" => return Self::time(),
            "number" => return Self::number(),
            _ => {}
        }

        if let Some(len) = name.strip_prefix("truncate:") {
            match len.trim().parse::<usize>() {
                Ok(len) => return Self::truncate(len),
                Err(_) => log::warn!("Invalid truncate length in formatter '{}'", name),
            }
        } else if let Some(prefix) = name.strip_prefix("prefix:") {
            return Self::prefix(prefix);
        } else if let Some(suffix) = name.strip_prefix("suffix:") {
            return Self::suffix(suffix);
        } else {
            log::warn!("Unknown formatter '{}', using default", name);
        }
        Self::default()
    }

    /// Currency with two decimals: `$99.99`, `$100.00`.
    pub fn currency() -> Self {
        Self::custom("currency", |value| match value {
            Value::Float(n) => format!("${n:.2}"),
            Value::Integer(n) => format!("${n}.00"),
            other => {
                let raw = other.to_string();
                if raw.is_empty() {
                    "$0.00".to_string()
                } else {
                    format!("${raw}")
                }
            }
        })
    }

    /// Fraction as a percentage with one decimal: `0.25` becomes `25.0%`.
    pub fn percent() -> Self {
        Self::custom("percent", |value| match value {
            Value::Float(n) => format!("{:.1}%", n * 100.0),
            other => format!("{other}%"),
        })
    }

    /// Calendar date as `YYYY-MM-DD`; recognised date text is reformatted.
    pub fn date() -> Self {
        Self::custom("date", |value| match value {
            Value::Date(dt) => dt.format(DATE_LAYOUT).to_string(),
            Value::Text(s) | Value::Unparsed(s) => match parse_display_date(s) {
                Some(dt) => dt.format(DATE_LAYOUT).to_string(),
                None => s.clone(),
            },
            other => other.to_string(),
        })
    }

    /// Date and time as `YYYY-MM-DD hh:mm:ss`.
    pub fn time() -> Self {
        Self::custom("time", |value| match value {
            Value::Date(dt) => dt.format(DATETIME_LAYOUT).to_string(),
            Value::Text(s) | Value::Unparsed(s) => match parse_datetime(s) {
                Some(dt) => dt.format(DATETIME_LAYOUT).to_string(),
                None => s.clone(),
            },
            other => other.to_string(),
        })
    }

    /// Custom labels for booleans. Text `true`, `1` and `yes` count as true;
    /// every other value renders as `false_label`.
    pub fn boolean(true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
        let true_label = true_label.into();
        let false_label = false_label.into();
        Self::custom("boolean", move |value| {
            let truthy = match value {
                Value::Boolean(b) => *b,
                Value::Text(s) | Value::Unparsed(s) => matches!(s.as_str(), "true" | "1" | "yes"),
                _ => false,
            };
            if truthy {
                true_label.clone()
            } else {
                false_label.clone()
            }
        })
    }

    /// Thousands separators; floats are rounded to whole numbers first.
    pub fn number() -> Self {
        Self::custom("number", |value| match value {
            Value::Integer(n) => add_commas(&n.to_string()),
            Value::Float(n) => add_commas(&format!("{n:.0}")),
            Value::Text(s) => match s.trim().parse::<i64>() {
                Ok(n) => add_commas(&n.to_string()),
                Err(_) => s.clone(),
            },
            other => other.to_string(),
        })
    }

    /// Cuts the raw text to `max_len` characters, ending in `...` when
    /// there is room for it.
    pub fn truncate(max_len: usize) -> Self {
        Self::custom(format!("truncate:{max_len}"), move |value| {
            truncate_str(&value.to_string(), max_len)
        })
    }

    /// Prepends `prefix` to the raw text.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::custom(format!("prefix:{prefix}"), move |value| format!("{prefix}{value}"))
    }

    /// Appends `suffix` to the raw text.
    pub fn suffix(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        Self::custom(format!("suffix:{suffix}"), move |value| format!("{value}{suffix}"))
    }
}

impl Default for Formatter {
    /// See [`Value::formatted`].
    fn default() -> Self {
        Self::custom("default", Value::formatted)
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Formatter").field(&self.name).finish()
    }
}

/// Inserts `,` every three digits of a decimal integer string.
pub fn add_commas(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 + 1);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn truncate_str(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len <= 3 {
        return text.chars().take(max_len).collect();
    }
    let mut out: String = text.chars().take(max_len - 3).collect();
    out.push_str("...");
    out
}
