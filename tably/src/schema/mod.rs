//! Schema inference and column configuration.

mod hint;
mod infer;
mod tag;

pub use hint::*;
pub use infer::*;
pub use tag::*;
