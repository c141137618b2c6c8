//! Value enum for typed cell contents

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::TimeZone;
use serde::Deserialize;
use serde::Serialize;

use super::date::DATE_LAYOUT;
use super::date::DATETIME_LAYOUT;
use super::date::parse_date;

/// The semantic type of a column.
///
/// Governs comparison, default formatting and default display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    #[default]
    Text,
    Integer,
    Float,
    Date,
    Boolean,
}

impl SemanticType {
    /// Returns the lowercase name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            SemanticType::Text => "text",
            SemanticType::Integer => "integer",
            SemanticType::Float => "float",
            SemanticType::Date => "date",
            SemanticType::Boolean => "boolean",
        }
    }

    /// Default display width for columns of this type.
    pub fn default_width(&self) -> u16 {
        match self {
            SemanticType::Text => 15,
            SemanticType::Integer | SemanticType::Boolean => 8,
            SemanticType::Float => 10,
            SemanticType::Date => 12,
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamic value held by a cell.
///
/// | Input | Variant |
/// |-------|---------|
/// | strings, chars, missing fields | `Text` |
/// | signed/unsigned integers | `Integer` |
/// | `f32`, `f64` | `Float` |
/// | `bool` | `Boolean` |
/// | chrono dates and datetimes | `Date` |
/// | text that failed to parse as its column's type | `Unparsed` |
///
/// # Example
///
/// ```
/// use tably::Value;
///
/// let name = Value::from("Alice");
/// let age = Value::from(42);
/// let empty = Value::empty();
/// assert!(empty.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text value.
    Text(String),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// Date with optional time of day (midnight for plain dates).
    Date(NaiveDateTime),
    /// Text placed in a typed column that does not parse as that type.
    Unparsed(String),
}

impl Value {
    /// The empty value substituted for missing fields.
    pub fn empty() -> Self {
        Value::Text(String::new())
    }

    /// Returns `true` for empty text.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(s) | Value::Unparsed(s) if s.is_empty())
    }

    /// Returns the runtime type of this value. `Unparsed` reports `Text`.
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            Value::Text(_) | Value::Unparsed(_) => SemanticType::Text,
            Value::Integer(_) => SemanticType::Integer,
            Value::Float(_) => SemanticType::Float,
            Value::Boolean(_) => SemanticType::Boolean,
            Value::Date(_) => SemanticType::Date,
        }
    }

    /// Places this value in a column of type `ty`.
    ///
    /// Text that does not parse as `ty` becomes `Unparsed`; every other
    /// value is kept as is.
    pub fn coerce(self, ty: SemanticType) -> Self {
        let Value::Text(text) = self else {
            return self;
        };
        let parses = match ty {
            SemanticType::Text => true,
            SemanticType::Integer | SemanticType::Float => parse_number(&text).is_some(),
            SemanticType::Boolean => parse_bool(&text).is_some(),
            SemanticType::Date => parse_date(&text).is_some(),
        };
        if parses {
            Value::Text(text)
        } else {
            Value::Unparsed(text)
        }
    }

    /// Default display form: floats with two decimals, dates as `YYYY-MM-DD`.
    pub fn formatted(&self) -> String {
        match self {
            Value::Text(s) | Value::Unparsed(s) => s.clone(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => format!("{n:.2}"),
            Value::Boolean(b) => b.to_string(),
            Value::Date(dt) => dt.format(DATE_LAYOUT).to_string(),
        }
    }
}

/// Numeric reading of a value: integers stay exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

/// Parses finite numeric text.
pub(crate) fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Some(Number::Int(n));
    }
    text.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Number::Float)
}

/// Parses the textual boolean spellings accepted by the comparator.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::empty()
    }
}

/// Raw stringification, used for lexical fallbacks and by the text formatters.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) | Value::Unparsed(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Date(dt) if dt.time() == NaiveTime::MIN => {
                write!(f, "{}", dt.format(DATE_LAYOUT))
            }
            Value::Date(dt) => write!(f, "{}", dt.format(DATETIME_LAYOUT)),
        }
    }
}

// =============================================================================
// IntoValue
// =============================================================================

/// Types that can populate a cell.
///
/// `SEMANTIC_TYPE` is what schema inference records for a struct field of
/// this type; `#[derive(Record)]` reads it through the field's declared type.
pub trait IntoValue {
    /// Semantic type of a column holding values of this type.
    const SEMANTIC_TYPE: SemanticType;

    /// Converts a borrowed value into a cell value.
    fn to_value(&self) -> Value;
}

macro_rules! lossless_integer {
    ($($ty:ty),*) => {$(
        impl IntoValue for $ty {
            const SEMANTIC_TYPE: SemanticType = SemanticType::Integer;

            fn to_value(&self) -> Value {
                Value::Integer(i64::from(*self))
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                v.to_value()
            }
        }
    )*};
}

macro_rules! wide_integer {
    ($($ty:ty),*) => {$(
        impl IntoValue for $ty {
            const SEMANTIC_TYPE: SemanticType = SemanticType::Integer;

            fn to_value(&self) -> Value {
                i64::try_from(*self)
                    .map(Value::Integer)
                    .unwrap_or_else(|_| Value::Text(self.to_string()))
            }
        }

        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                v.to_value()
            }
        }
    )*};
}

lossless_integer!(i8, i16, i32, i64, u8, u16, u32);
wide_integer!(isize, usize, u64, i128, u128);

impl IntoValue for f64 {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Float;

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl IntoValue for f32 {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Float;

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl IntoValue for bool {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Boolean;

    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }
}

impl IntoValue for String {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl IntoValue for &str {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Text;

    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl IntoValue for char {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl IntoValue for NaiveDate {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Date;

    fn to_value(&self) -> Value {
        Value::Date(self.and_time(NaiveTime::MIN))
    }
}

impl IntoValue for NaiveDateTime {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Date;

    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl<Tz: TimeZone> IntoValue for DateTime<Tz> {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Date;

    fn to_value(&self) -> Value {
        Value::Date(self.naive_local())
    }
}

impl IntoValue for Value {
    const SEMANTIC_TYPE: SemanticType = SemanticType::Text;

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    const SEMANTIC_TYPE: SemanticType = T::SEMANTIC_TYPE;

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::empty(),
        }
    }
}

impl<T: IntoValue> IntoValue for Box<T> {
    const SEMANTIC_TYPE: SemanticType = T::SEMANTIC_TYPE;

    fn to_value(&self) -> Value {
        self.as_ref().to_value()
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        v.to_value()
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Date(v)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Date(v.naive_local())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::empty(),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::empty(),
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    Value::Text(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::Text(s.clone()),
            other => Value::Text(other.to_string()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_formatting() {
        assert_eq!(Value::empty().formatted(), "");
        assert_eq!(Value::from("hello").formatted(), "hello");
        assert_eq!(Value::from(true).formatted(), "true");
        assert_eq!(Value::from(false).formatted(), "false");
        assert_eq!(Value::from(123.456).formatted(), "123.46");
        assert_eq!(Value::from(123.456f32).formatted(), "123.46");
        assert_eq!(Value::from(42).formatted(), "42");

        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(Value::from(date).formatted(), "2023-01-15");
    }

    #[test]
    fn test_raw_display() {
        assert_eq!(Value::from(3.5).to_string(), "3.5");
        assert_eq!(Value::from(3.0).to_string(), "3");
        assert_eq!(Value::Unparsed("N/A".into()).to_string(), "N/A");

        let dt = NaiveDate::from_ymd_opt(2023, 12, 25)
            .unwrap()
            .and_hms_opt(14, 30, 45)
            .unwrap();
        assert_eq!(Value::from(dt).to_string(), "2023-12-25 14:30:45");
    }

    #[test]
    fn test_coerce_marks_unparseable_text() {
        assert_eq!(
            Value::from("N/A").coerce(SemanticType::Float),
            Value::Unparsed("N/A".into())
        );
        assert_eq!(
            Value::from("3.5").coerce(SemanticType::Float),
            Value::Text("3.5".into())
        );
        assert_eq!(
            Value::from("maybe").coerce(SemanticType::Boolean),
            Value::Unparsed("maybe".into())
        );
        assert_eq!(
            Value::from("2023-01-15").coerce(SemanticType::Date),
            Value::Text("2023-01-15".into())
        );
        assert_eq!(
            Value::from("anything").coerce(SemanticType::Text),
            Value::Text("anything".into())
        );
        // Non-text values are never rewritten.
        assert_eq!(Value::from(7).coerce(SemanticType::Date), Value::Integer(7));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 42 "), Some(Number::Int(42)));
        assert_eq!(parse_number("3.5"), Some(Number::Float(3.5)));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_semantic_types() {
        assert_eq!(<u8 as IntoValue>::SEMANTIC_TYPE, SemanticType::Integer);
        assert_eq!(<f32 as IntoValue>::SEMANTIC_TYPE, SemanticType::Float);
        assert_eq!(<bool as IntoValue>::SEMANTIC_TYPE, SemanticType::Boolean);
        assert_eq!(<NaiveDate as IntoValue>::SEMANTIC_TYPE, SemanticType::Date);
        assert_eq!(<Option<i32> as IntoValue>::SEMANTIC_TYPE, SemanticType::Integer);
        assert_eq!(<String as IntoValue>::SEMANTIC_TYPE, SemanticType::Text);
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(Value::from(42u64), Value::Integer(42));
        assert_eq!(Value::from(u64::MAX), Value::Text(u64::MAX.to_string()));
        assert_eq!(None::<i32>.to_value(), Value::empty());
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Value::from(serde_json::json!(null)), Value::empty());
        assert_eq!(Value::from(serde_json::json!(5)), Value::Integer(5));
        assert_eq!(Value::from(serde_json::json!(2.5)), Value::Float(2.5));
        assert_eq!(Value::from(serde_json::json!("x")), Value::from("x"));
        assert_eq!(Value::from(serde_json::json!([1, 2])), Value::from("[1,2]"));
    }
}
