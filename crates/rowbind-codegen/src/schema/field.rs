#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier, also used as its default column name
    pub(crate) ident: syn::Ident,
}

impl Field {
    /// Returns `None` for fields that are not accessible to the mapper:
    /// fields that are not `pub` and fields marked `#[rowbind(skip)]`.
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut skip = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("rowbind") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported rowbind attribute; expected `skip`"))
                }
            })?;
        }

        if skip || !matches!(field.vis, syn::Visibility::Public(_)) {
            return Ok(None);
        }

        Ok(Some(Field {
            ident: ident.clone(),
        }))
    }
}
