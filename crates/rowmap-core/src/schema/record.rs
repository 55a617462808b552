use crate::stmt::Type;

/// Static description of a record type: its name and ordered fields.
///
/// This is what `#[derive(Record)]` generates in place of runtime
/// reflection. It is the only thing the metadata builder reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    /// Rust type name
    pub name: &'static str,

    /// Table name override from `#[table = "..."]`
    pub table: Option<&'static str>,

    /// Fields, in declaration order
    pub fields: &'static [FieldDef],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Rust field name
    pub name: &'static str,

    /// Column name override from `#[column("...")]`
    pub column: Option<&'static str>,

    /// Scalar kind of the field
    pub ty: Type,

    /// True when the field is an `Option`
    pub nullable: bool,
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }
}
