extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `rowbind::Fields` for a struct with named fields.
///
/// Every `pub` field is listed, in declaration order, under its own name.
/// Private fields and fields annotated with `#[rowbind(skip)]` are left out.
#[proc_macro_derive(Fields, attributes(rowbind))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
