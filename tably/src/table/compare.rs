//! Type-aware cell ordering.
//!
//! Every cell is reduced to a [`SortKey`] according to its semantic type.
//! Values that parse as the type get a typed key; the rest keep their raw
//! text and order after all typed keys, lexically among themselves. This
//! makes the comparison a total order even for columns with junk data.
//! A mixed pair is never compared by raw text: `"2023-01-15"` sorts before
//! `"1999 later"` in a date column.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::model::Cell;
use crate::model::Number;
use crate::model::SemanticType;
use crate::model::Value;
use crate::model::parse_bool;
use crate::model::parse_date;
use crate::model::parse_number;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Typed {
    Text(String),
    Number(Number),
    Boolean(bool),
    Date(NaiveDateTime),
}

impl Typed {
    fn rank(&self) -> u8 {
        match self {
            Typed::Text(_) => 0,
            Typed::Number(_) => 1,
            Typed::Boolean(_) => 2,
            Typed::Date(_) => 3,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Typed::Text(a), Typed::Text(b)) => a.cmp(b),
            (Typed::Number(a), Typed::Number(b)) => cmp_numbers(*a, *b),
            (Typed::Boolean(a), Typed::Boolean(b)) => a.cmp(b),
            (Typed::Date(a), Typed::Date(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

/// Precomputed ordering key of one cell.
#[derive(Debug, Clone)]
pub(crate) enum SortKey {
    Typed(Typed),
    Unparsed(String),
}

impl SortKey {
    /// Builds the key of `value` in a column of type `ty`.
    pub(crate) fn new(value: &Value, ty: SemanticType) -> Self {
        let typed = match ty {
            SemanticType::Text => Some(Typed::Text(value.to_string().to_lowercase())),
            SemanticType::Integer | SemanticType::Float => match value {
                Value::Integer(n) => Some(Typed::Number(Number::Int(*n))),
                Value::Float(n) => Some(Typed::Number(Number::Float(*n))),
                Value::Text(s) => parse_number(s).map(Typed::Number),
                _ => None,
            },
            SemanticType::Boolean => match value {
                Value::Boolean(b) => Some(Typed::Boolean(*b)),
                Value::Text(s) => parse_bool(s).map(Typed::Boolean),
                _ => None,
            },
            SemanticType::Date => match value {
                Value::Date(dt) => Some(Typed::Date(*dt)),
                Value::Text(s) => parse_date(s).map(Typed::Date),
                _ => None,
            },
        };
        match typed {
            Some(key) => SortKey::Typed(key),
            None => SortKey::Unparsed(value.to_string()),
        }
    }

    /// Builds the key of `cell` using its own semantic type.
    pub(crate) fn of_cell(cell: &Cell) -> Self {
        Self::new(cell.value(), cell.semantic_type())
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Typed(a), SortKey::Typed(b)) => a.compare(b),
            (SortKey::Typed(_), SortKey::Unparsed(_)) => Ordering::Less,
            (SortKey::Unparsed(_), SortKey::Typed(_)) => Ordering::Greater,
            (SortKey::Unparsed(a), SortKey::Unparsed(b)) => a.cmp(b),
        }
    }
}

/// Compares two cells of the same column.
pub fn compare_cells(a: &Cell, b: &Cell) -> Ordering {
    SortKey::of_cell(a).cmp(&SortKey::of_cell(b))
}

/// Exact numeric ordering. NaN sorts after every number and `-0.0 == 0.0`.
fn cmp_numbers(a: Number, b: Number) -> Ordering {
    match (a, b) {
        (Number::Int(a), Number::Int(b)) => a.cmp(&b),
        (Number::Float(a), Number::Float(b)) => cmp_floats(a, b),
        (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
        (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).reverse(),
    }
}

fn cmp_floats(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

// 2^63 as f64; every finite float at or above it exceeds i64::MAX.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn cmp_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() || float >= I64_BOUND {
        return Ordering::Less;
    }
    if float < -I64_BOUND {
        return Ordering::Greater;
    }
    let whole = float.trunc();
    // In range, so the cast is exact.
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => cmp_floats(0.0, float - whole),
        other => other,
    }
}
