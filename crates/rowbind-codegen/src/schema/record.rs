use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// The struct identifier
    pub(crate) ident: syn::Ident,

    /// Accessible fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(Some(field)) => fields.push(field),
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
