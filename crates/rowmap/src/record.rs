use crate::Result;

use rowmap_core::{schema::RecordSchema, stmt::Value};

/// A flat struct that maps onto one table row.
///
/// Usually implemented with `#[derive(Record)]`. `SCHEMA` lists the fields in
/// declaration order; `get` and `set` address a single field by its Rust
/// name.
pub trait Record: Default + 'static {
    const SCHEMA: RecordSchema;

    /// Reads a field, or `None` if the record has no field with that name.
    fn get(&self, field: &str) -> Option<Value>;

    /// Writes a field, converting `value` to the field's type.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;
}
