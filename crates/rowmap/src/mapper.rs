//! Moves values between records and statement rows.
//!
//! Writes read the record's fields in column order. Reads resolve every
//! result column to a field once, then fill a fresh record per row.

use crate::{Record, Result};

use rowmap_core::{
    bail,
    driver::{Rows, Slot},
    schema::{ColumnInfo, TableInfo},
    stmt::Value,
    Error,
};
use tracing::warn;

/// Reads the record's values in column order, one per placeholder.
///
/// `table` must describe `R`: a description derived from another record, or
/// from one whose fields differ in type or nullability, is a field mismatch.
pub fn project_for_write<R: Record>(record: &R, table: &TableInfo) -> Result<Vec<Value>> {
    table
        .columns
        .values()
        .map(|column| {
            let mismatch = || Error::field_mismatch(R::SCHEMA.name, column.field_name);

            if table.record != R::SCHEMA.name {
                return Err(mismatch());
            }

            match R::SCHEMA.field(column.field_name) {
                Some(field) if field.ty == column.ty && field.nullable == column.nullable => {}
                _ => return Err(mismatch()),
            }

            record.get(column.field_name).ok_or_else(mismatch)
        })
        .collect()
}

/// Builds a record from one row of raw cells.
///
/// `columns` are the result column names and `row` their cells, in the same
/// order.
pub fn materialize<R: Record>(columns: &[String], row: Vec<Value>, table: &TableInfo) -> Result<R> {
    let plan = ReadPlan::resolve(columns, table)?;

    if row.len() != plan.columns.len() {
        bail!(
            "row has {} cells but the result has {} columns",
            row.len(),
            plan.columns.len()
        );
    }

    let mut slots = plan.slots();
    for (slot, cell) in slots.iter_mut().zip(row) {
        slot.set(cell)?;
    }

    plan.fill(slots)
}

/// Drains `rows` into records, in result order.
///
/// The first failure aborts the read and no records are returned. The cursor
/// is closed on every path.
pub fn load_all<R: Record>(rows: Box<dyn Rows + '_>, table: &TableInfo) -> Result<Vec<R>> {
    let mut cursor = Cursor::new(rows);
    let plan = ReadPlan::resolve(&cursor.rows.column_names(), table)?;

    let mut records = vec![];

    while cursor.rows.advance()? {
        let mut slots = plan.slots();
        cursor.rows.scan_into(&mut slots)?;
        records.push(plan.fill(slots)?);
    }

    cursor.close()?;
    Ok(records)
}

/// The field each result column fills, resolved once per result set.
struct ReadPlan<'a> {
    columns: Vec<&'a ColumnInfo>,
}

impl<'a> ReadPlan<'a> {
    fn resolve(result_columns: &[String], table: &'a TableInfo) -> Result<ReadPlan<'a>> {
        let columns = result_columns
            .iter()
            .map(|name| table.resolve_column(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(ReadPlan { columns })
    }

    fn slots(&self) -> Vec<Slot> {
        self.columns
            .iter()
            .map(|column| Slot::new(column.ty, column.nullable))
            .collect()
    }

    fn fill<R: Record>(&self, slots: Vec<Slot>) -> Result<R> {
        let mut record = R::default();

        for (column, mut slot) in self.columns.iter().zip(slots) {
            record.set(column.field_name, slot.take())?;
        }

        Ok(record)
    }
}

/// Closes the wrapped cursor when dropped, unless it was closed explicitly.
struct Cursor<'a> {
    rows: Box<dyn Rows + 'a>,
    closed: bool,
}

impl<'a> Cursor<'a> {
    fn new(rows: Box<dyn Rows + 'a>) -> Self {
        Self {
            rows,
            closed: false,
        }
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.rows.close()
    }
}

impl Drop for Cursor<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }

        if let Err(err) = self.rows.close() {
            warn!(error = %err, "failed to close cursor");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{schema::Registry, Record};

    use pretty_assertions::assert_eq;

    #[derive(Debug, Default, PartialEq, Record)]
    struct Reading {
        sensor: String,
        celsius: f64,
        note: Option<String>,
    }

    #[derive(Debug, Default, Record)]
    struct Other {
        id: i64,
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn projection_follows_column_order() {
        let table = Registry::new().describe::<Reading>().unwrap();
        let reading = Reading {
            sensor: "north".to_string(),
            celsius: 21.5,
            note: None,
        };

        let values = project_for_write(&reading, &table).unwrap();
        assert_eq!(values.len(), table.column_names().len());
        assert_eq!(
            values,
            [
                Value::String("north".to_string()),
                Value::F64(21.5),
                Value::Null
            ]
        );
    }

    #[test]
    fn projection_against_foreign_table_fails() {
        let table = Registry::new().describe::<Reading>().unwrap();
        let err = project_for_write(&Other { id: 1 }, &table).unwrap_err();
        assert!(err.is_field_mismatch());
    }

    mod shadow {
        use crate::Record;

        /// Same name and fields as the outer `Reading`, different types.
        #[derive(Debug, Default, Record)]
        pub(super) struct Reading {
            pub(super) sensor: i64,
            pub(super) celsius: f64,
            pub(super) note: String,
        }
    }

    #[test]
    fn projection_rejects_diverged_record_shape() {
        let table = Registry::new().describe::<Reading>().unwrap();
        let shadow = shadow::Reading {
            sensor: 4,
            celsius: 1.0,
            note: "dry".to_string(),
        };

        let err = project_for_write(&shadow, &table).unwrap_err();
        assert!(err.is_field_mismatch());
        assert_eq!(
            err.to_string(),
            "field mismatch: record `Reading` has no field `sensor`"
        );
    }

    #[test]
    fn materialize_round_trips_projection() {
        let table = Registry::new().describe::<Reading>().unwrap();
        let reading = Reading {
            sensor: "south".to_string(),
            celsius: -3.0,
            note: Some("frost".to_string()),
        };

        let names = table.column_names().map(str::to_string).collect::<Vec<_>>();
        let row = project_for_write(&reading, &table).unwrap();
        let loaded: Reading = materialize(&names, row, &table).unwrap();

        assert_eq!(loaded, reading);
    }

    #[test]
    fn materialize_accepts_reordered_and_unnormalized_columns() {
        let table = Registry::new().describe::<Reading>().unwrap();
        let row = vec![Value::I32(12), Value::from("east")];

        let loaded: Reading = materialize(&columns(&["Celsius", "sensor"]), row, &table).unwrap();

        assert_eq!(
            loaded,
            Reading {
                sensor: "east".to_string(),
                celsius: 12.0,
                note: None,
            }
        );
    }

    #[test]
    fn materialize_unknown_column() {
        let table = Registry::new().describe::<Reading>().unwrap();
        let err = materialize::<Reading>(&columns(&["humidity"]), vec![Value::I64(40)], &table)
            .unwrap_err();
        assert!(err.is_column_mismatch());
    }

    #[test]
    fn materialize_null_into_required_field() {
        let table = Registry::new().describe::<Reading>().unwrap();
        let err = materialize::<Reading>(&columns(&["sensor"]), vec![Value::Null], &table)
            .unwrap_err();
        assert!(err.is_type_conversion());
    }
}
