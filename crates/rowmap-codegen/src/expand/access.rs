use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_get_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;

        let arms = self.record.fields.iter().map(|field| {
            let name = field.name();
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #name => #rowmap::Option::Some(<#ty as #rowmap::Primitive>::to_value(&self.#ident)),
            }
        });

        quote! {
            match field {
                #( #arms )*
                _ => #rowmap::Option::None,
            }
        }
    }

    pub(super) fn expand_set_body(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let record_name = self.record.ident.to_string();

        let arms = self.record.fields.iter().map(|field| {
            let name = field.name();
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #name => {
                    self.#ident = <#ty as #rowmap::Primitive>::load(value)?;
                    #rowmap::Result::Ok(())
                }
            }
        });

        quote! {
            match field {
                #( #arms )*
                _ => #rowmap::Result::Err(#rowmap::Error::field_mismatch(#record_name, field)),
            }
        }
    }
}
