use crate::{
    stmt::{Type, Value},
    Error, Result,
};

/// A typed receptacle for one result cell.
///
/// Slots are allocated from the table description before a row is scanned.
/// The driver hands over untyped cells; the slot's type is what gives the
/// value meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    ty: Type,
    nullable: bool,
    value: Value,
}

impl Slot {
    pub fn new(ty: Type, nullable: bool) -> Self {
        Self {
            ty,
            nullable,
            value: Value::Null,
        }
    }

    pub fn ty(&self) -> Type {
        self.ty
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Stores a raw cell, converting it to the slot's type.
    pub fn set(&mut self, cell: Value) -> Result<()> {
        if cell.is_null() && !self.nullable {
            return Err(Error::type_conversion(cell, self.ty));
        }

        self.value = self.ty.cast(cell)?;
        Ok(())
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Takes the held value, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(&mut self.value)
    }
}
