//! The relational-execution interface rowmap consumes.
//!
//! Opening connections, preparing statements and talking to the database all
//! live behind these traits; the mapping engine only needs to execute a
//! statement with positional parameters and walk a result cursor.

mod slot;
pub use slot::Slot;

use crate::{stmt::Value, Result};

use std::fmt::Debug;

/// Outcome of a statement that does not return rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Number of rows inserted, updated or deleted
    pub rows_affected: u64,

    /// Row id generated by the last insert, when the database reports one
    pub last_insert_id: Option<i64>,
}

pub trait Connection: Debug {
    /// Execute a statement that does not return rows.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<ExecResult>;

    /// Execute a query and return a cursor over its rows.
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Box<dyn Rows + '_>>;
}

/// An in-flight result cursor.
///
/// The cursor starts positioned before the first row. Each successful
/// [`advance`](Rows::advance) moves onto the next row, which can then be
/// scanned any number of times.
pub trait Rows {
    /// Column names of the result set, in result order.
    fn column_names(&self) -> Vec<String>;

    /// Moves to the next row. Returns `false` once the rows are exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Writes the current row's cells into `slots`, one slot per column.
    ///
    /// Each slot converts the raw cell into its own type; a cell the slot
    /// cannot hold fails the scan.
    fn scan_into(&mut self, slots: &mut [Slot]) -> Result<()>;

    /// Releases the cursor. Calling `close` more than once is a no-op.
    fn close(&mut self) -> Result<()>;
}
