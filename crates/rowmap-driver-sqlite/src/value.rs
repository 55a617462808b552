use rowmap_core::{bail, stmt::Value as CoreValue, Result};
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// A rowmap value bound as a statement parameter.
#[derive(Debug)]
pub(crate) struct Param<'a>(pub(crate) &'a CoreValue);

impl ToSql for Param<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self.0 {
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            // SQLite has no timestamp type; store RFC 3339 text
            CoreValue::Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_string()))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}

/// Converts a raw SQLite cell into an untyped rowmap value.
///
/// The cell keeps SQLite's storage class; the receiving slot converts it.
pub(crate) fn from_sql(value: SqlValue, column: &str) -> Result<CoreValue> {
    Ok(match value {
        SqlValue::Null => CoreValue::Null,
        SqlValue::Integer(v) => CoreValue::I64(v),
        SqlValue::Real(v) => CoreValue::F64(v),
        SqlValue::Text(v) => CoreValue::String(v),
        SqlValue::Blob(_) => bail!("column `{column}` holds a blob, which rowmap cannot map"),
    })
}
