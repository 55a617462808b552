mod access;
mod schema;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowmap types
    rowmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let ident = &self.record.ident;
        let schema = self.expand_record_schema();
        let get_body = self.expand_get_body();
        let set_body = self.expand_set_body();

        wrap_in_const(quote! {
            impl #rowmap::Record for #ident {
                const SCHEMA: #rowmap::RecordSchema = #schema;

                fn get(&self, field: &str) -> #rowmap::Option<#rowmap::Value> {
                    #get_body
                }

                fn set(&mut self, field: &str, value: #rowmap::Value) -> #rowmap::Result<()> {
                    #set_body
                }
            }
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rowmap: quote!(_rowmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowmap as _rowmap;
            #code
        };
    }
}
