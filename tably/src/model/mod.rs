//! Data model: values, records, columns, cells and rows.

mod column;
pub(crate) mod date;
mod record;
mod row;
mod value;

pub use column::*;
pub use date::parse_date;
pub use record::*;
pub use row::*;
pub use value::*;

pub(crate) use record::json_kind;
