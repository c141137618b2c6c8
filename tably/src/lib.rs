//! Headless data table engine
//!
//! Infers a column schema from arbitrary records (structs via
//! `#[derive(Record)]`, string-keyed maps, JSON objects), and sorts,
//! filters and paginates the resulting rows. Rendering and input handling
//! are left to the caller.

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod pagination;
pub mod schema;
pub mod table;

pub use config::TableConfig;
pub use config::WidthDefaults;
pub use error::*;
pub use format::Formatter;
pub use model::*;
pub use schema::ColumnHint;
pub use schema::FieldConfig;
pub use table::SortState;
pub use table::Table;
pub use tably_derive::*;

pub mod prelude {
    pub use crate::config::{TableConfig, WidthDefaults};
    pub use crate::error::{IngestionError, SchemaError, SortError};
    pub use crate::format::Formatter;
    pub use crate::model::{Cell, Column, IntoValue, Record, Row, SemanticType, Value};
    pub use crate::schema::{ColumnHint, FieldConfig};
    pub use crate::table::{SortState, Table};

    pub use tably_derive::*;
}
