mod schema;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `SchemaInitializer` trait for a table iden enum
///
/// The enum must carry a `Table` variant and a `#[schema(meta(...))]`
/// attribute naming the table creation function.
#[proc_macro_derive(SchemaTable, attributes(schema))]
pub fn derive_schema_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match schema::expand_derive_schema_table(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
