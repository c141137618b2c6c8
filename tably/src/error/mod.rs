//! Error types

mod ingest;
mod schema;
mod sort;

pub use ingest::*;
pub use schema::*;
pub use sort::*;
