use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_schema(&self) -> TokenStream {
        let rowmap = &self.rowmap;
        let name = self.record.ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name);

        let table = match &self.record.table {
            Some(table) => quote!(#rowmap::Option::Some(#table)),
            None => quote!(#rowmap::Option::None),
        };

        let fields = self.record.fields.iter().map(|field| {
            let name = field.name();
            let ty = &field.ty;
            let column = match &field.column {
                Some(column) => {
                    let lit = &column.name;
                    quote!(#rowmap::Option::Some(#lit))
                }
                None => quote!(#rowmap::Option::None),
            };

            quote! {
                #rowmap::FieldDef {
                    name: #name,
                    column: #column,
                    ty: <#ty as #rowmap::Primitive>::TYPE,
                    nullable: <#ty as #rowmap::Primitive>::NULLABLE,
                }
            }
        });

        quote! {
            #rowmap::RecordSchema {
                name: #name,
                table: #table,
                fields: &[ #( #fields, )* ],
            }
        }
    }
}
