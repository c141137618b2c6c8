mod macros;

use proc_macro::TokenStream;

/// Derives `tably::Record` for a struct with named fields.
///
/// Field attributes:
/// - `#[table("Header,opt,...")]` attaches a column configuration string
/// - `#[table(skip)]` leaves the field out of the table
#[proc_macro_derive(Record, attributes(table))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    macros::record::expand(input.into()).into()
}
