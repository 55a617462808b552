use super::Value;
use crate::{Error, Result};

/// The closed set of scalar kinds a record field can hold.
///
/// Every cell that crosses the driver boundary is converted into one of these
/// through [`Type::cast`]; there is no other coercion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point
    F64,

    /// UTF-8 text
    String,

    /// An instant in time, UTC
    Timestamp,
}

impl Type {
    /// Converts `value` into this type.
    ///
    /// `Null` passes through unchanged; nullability is enforced by the caller.
    /// Conversions other than identity:
    ///
    /// | from      | to          | rule                                |
    /// |-----------|-------------|-------------------------------------|
    /// | I32       | I64, F64    | widening                            |
    /// | I64       | I32         | only when the value fits            |
    /// | I64       | F64         | `as f64`                            |
    /// | I32, I64  | Bool        | `0` is false, `1` is true           |
    /// | Bool      | I32, I64    | false is `0`, true is `1`           |
    /// | I64       | Timestamp   | seconds since the Unix epoch        |
    /// | String    | Timestamp   | RFC 3339                            |
    /// | Timestamp | String      | RFC 3339                            |
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        Ok(match (value, self) {
            (value, ty) if value.is_a(ty) => value,
            (Value::I32(v), Self::I64) => Value::I64(v.into()),
            (Value::I32(v), Self::F64) => Value::F64(v.into()),
            (Value::I64(v), Self::I32) => match i32::try_from(v) {
                Ok(v) => Value::I32(v),
                Err(_) => return Err(Error::type_conversion(Value::I64(v), *self)),
            },
            (Value::I64(v), Self::F64) => Value::F64(v as f64),
            (Value::I32(0), Self::Bool) | (Value::I64(0), Self::Bool) => Value::Bool(false),
            (Value::I32(1), Self::Bool) | (Value::I64(1), Self::Bool) => Value::Bool(true),
            (Value::Bool(v), Self::I32) => Value::I32(v.into()),
            (Value::Bool(v), Self::I64) => Value::I64(v.into()),
            (Value::I64(v), Self::Timestamp) => match jiff::Timestamp::from_second(v) {
                Ok(ts) => Value::Timestamp(ts),
                Err(_) => return Err(Error::type_conversion(Value::I64(v), *self)),
            },
            (Value::String(v), Self::Timestamp) => match v.parse::<jiff::Timestamp>() {
                Ok(ts) => Value::Timestamp(ts),
                Err(_) => return Err(Error::type_conversion(Value::String(v), *self)),
            },
            (Value::Timestamp(ts), Self::String) => Value::String(ts.to_string()),
            (value, _) => return Err(Error::type_conversion(value, *self)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identity_casts() {
        for (value, ty) in [
            (Value::Bool(true), Type::Bool),
            (Value::I32(7), Type::I32),
            (Value::I64(7), Type::I64),
            (Value::F64(1.5), Type::F64),
            (Value::from("x"), Type::String),
        ] {
            assert_eq!(ty.cast(value.clone()).unwrap(), value);
        }
    }

    #[test]
    fn null_passes_through() {
        assert_eq!(Type::I64.cast(Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn integer_widening_and_narrowing() {
        assert_eq!(Type::I64.cast(Value::I32(-3)).unwrap(), Value::I64(-3));
        assert_eq!(Type::I32.cast(Value::I64(42)).unwrap(), Value::I32(42));

        let err = Type::I32.cast(Value::I64(i64::MAX)).unwrap_err();
        assert!(err.is_type_conversion());
    }

    #[test]
    fn bool_from_integer_only_accepts_zero_and_one() {
        assert_eq!(Type::Bool.cast(Value::I64(0)).unwrap(), Value::Bool(false));
        assert_eq!(Type::Bool.cast(Value::I32(1)).unwrap(), Value::Bool(true));
        assert!(Type::Bool.cast(Value::I64(2)).is_err());
    }

    #[test]
    fn timestamp_from_text_and_seconds() {
        let expected: jiff::Timestamp = "2024-03-01T12:00:00Z".parse().unwrap();

        assert_eq!(
            Type::Timestamp
                .cast(Value::from("2024-03-01T12:00:00Z"))
                .unwrap(),
            Value::Timestamp(expected)
        );
        assert_eq!(
            Type::Timestamp
                .cast(Value::I64(expected.as_second()))
                .unwrap(),
            Value::Timestamp(expected)
        );
        assert!(Type::Timestamp.cast(Value::from("yesterday")).is_err());
    }

    #[test]
    fn text_never_becomes_a_number() {
        let err = Type::I64.cast(Value::from("12")).unwrap_err();
        assert_eq!(err.to_string(), "cannot convert String to I64");
    }
}
