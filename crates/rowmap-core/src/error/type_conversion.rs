use super::Error;
use crate::stmt::{Type, Value};

/// Error when a value cannot be converted to the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    value: Value,
    to_type: Type,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.value.ty() {
            Some(from) => write!(f, "cannot convert {from:?} to {:?}", self.to_type),
            None => write!(f, "cannot convert NULL to non-nullable {:?}", self.to_type),
        }
    }
}

impl Error {
    /// Creates a type conversion error.
    ///
    /// This is used when a cell value cannot be converted into the type of
    /// the slot or field receiving it.
    pub fn type_conversion(value: Value, to_type: Type) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            value,
            to_type,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a type
    /// conversion error.
    pub fn is_type_conversion(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::TypeConversion(_)))
    }
}
