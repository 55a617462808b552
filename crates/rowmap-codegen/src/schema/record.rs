use super::{ErrorSet, Field, RecordAttr};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the record to
    pub(crate) table: Option<syn::LitStr>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let data = match &ast.data {
            syn::Data::Struct(data) => data,
            syn::Data::Enum(_) => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    format!("not a struct: `{}` is an enum", ast.ident),
                ))
            }
            syn::Data::Union(_) => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    format!("not a struct: `{}` is a union", ast.ident),
                ))
            }
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "not a struct: record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        if node.named.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "not a struct: record must have at least one field",
            ));
        }

        let mut record_attr = RecordAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = record_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            table: record_attr.table,
        })
    }
}
