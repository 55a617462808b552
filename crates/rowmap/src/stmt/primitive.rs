use crate::Result;

use rowmap_core::stmt;

/// A Rust type that can be stored in a single column.
///
/// `#[derive(Record)]` reads `TYPE` and `NULLABLE` for every field, so a field
/// whose type does not implement `Primitive` fails to compile.
pub trait Primitive: Sized {
    const TYPE: stmt::Type;
    const NULLABLE: bool = false;

    fn load(value: stmt::Value) -> Result<Self>;

    fn to_value(&self) -> stmt::Value;
}

impl Primitive for bool {
    const TYPE: stmt::Type = stmt::Type::Bool;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bool(*self)
    }
}

impl Primitive for i32 {
    const TYPE: stmt::Type = stmt::Type::I32;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::I32(*self)
    }
}

impl Primitive for i64 {
    const TYPE: stmt::Type = stmt::Type::I64;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::I64(*self)
    }
}

impl Primitive for f64 {
    const TYPE: stmt::Type = stmt::Type::F64;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::F64(*self)
    }
}

impl Primitive for String {
    const TYPE: stmt::Type = stmt::Type::String;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::String(self.clone())
    }
}

impl Primitive for jiff::Timestamp {
    const TYPE: stmt::Type = stmt::Type::Timestamp;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Timestamp(*self)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(value) => value.to_value(),
            None => stmt::Value::Null,
        }
    }
}
