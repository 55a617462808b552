use super::Type;
use crate::Error;

/// A dynamically typed cell value passed between records and drivers.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point
    F64(f64),

    /// String value
    String(String),

    /// An instant in time
    Timestamp(jiff::Timestamp),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the type of the value, or `None` for `Null`.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Timestamp(_) => Type::Timestamp,
            Self::Null => return None,
        })
    }

    /// Returns `true` if the value can be stored in a slot of type `ty`
    /// without conversion. `Null` is a member of every type.
    pub fn is_a(&self, ty: &Type) -> bool {
        match self.ty() {
            Some(actual) => actual == *ty,
            None => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

macro_rules! impl_scalar_conversions {
    ($ty:ty, $name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match Type::$name.cast(value)? {
                    Value::$name(value) => Ok(value),
                    value => Err(Error::type_conversion(value, Type::$name)),
                }
            }
        }
    };
}

impl_scalar_conversions!(bool, Bool);
impl_scalar_conversions!(i32, I32);
impl_scalar_conversions!(i64, I64);
impl_scalar_conversions!(f64, F64);
impl_scalar_conversions!(String, String);
impl_scalar_conversions!(jiff::Timestamp, Timestamp);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_a_member_of_every_type() {
        assert!(Value::Null.is_a(&Type::I64));
        assert!(Value::Null.is_a(&Type::String));
        assert_eq!(Value::Null.ty(), None);
    }

    #[test]
    fn option_into_value() {
        assert_eq!(Value::from(Some(3_i64)), Value::I64(3));
        assert_eq!(Value::from(None::<String>), Value::Null);
    }

    #[test]
    fn try_from_goes_through_cast() {
        let v: i64 = Value::I32(9).try_into().unwrap();
        assert_eq!(v, 9);

        let err = String::try_from(Value::Null).unwrap_err();
        assert!(err.is_type_conversion());
    }
}
