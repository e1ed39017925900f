use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn fields(record: &Record) -> TokenStream {
    let rowbind = quote!(_rowbind);
    let ident = &record.ident;
    let name = ident.to_string();

    let fields = record.fields.iter().map(|field| {
        let field_ident = &field.ident;
        let field_name = field_ident.to_string();

        quote! {
            #rowbind::schema::Field::new(
                #field_name,
                |record: &Self| &record.#field_ident,
                |record: &mut Self| &mut record.#field_ident,
            )
        }
    });

    wrap_in_const(quote! {
        impl #rowbind::Fields for #ident {
            const NAME: &'static str = #name;

            fn fields() -> ::std::vec::Vec<#rowbind::schema::Field<Self>> {
                ::std::vec![ #( #fields, )* ]
            }
        }
    })
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
