mod value;
use value::Param;

use rowmap_core::{
    bail,
    driver::{Connection, ExecResult, Rows, Slot},
    stmt::Value,
    Error, Result,
};
use rusqlite::{params_from_iter, types::Value as SqlValue, Connection as RusqliteConnection};
use tracing::trace;

use std::path::Path;

/// A SQLite connection.
#[derive(Debug)]
pub struct Sqlite {
    connection: RusqliteConnection,
}

impl Sqlite {
    /// Open a private in-memory database
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    /// Runs one or more statements without parameters, such as table
    /// definitions.
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql).map_err(Error::driver)
    }
}

impl Connection for Sqlite {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<ExecResult> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;
        let rows_affected = stmt
            .execute(params_from_iter(params.iter().map(Param)))
            .map_err(Error::driver)?;

        let last_insert_id = is_insert(sql).then(|| self.connection.last_insert_rowid());

        Ok(ExecResult {
            rows_affected: rows_affected as u64,
            last_insert_id,
        })
    }

    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Box<dyn Rows + '_>> {
        let mut stmt = self.connection.prepare_cached(sql).map_err(Error::driver)?;
        let column_names = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let mut rows = stmt
            .query(params_from_iter(params.iter().map(Param)))
            .map_err(Error::driver)?;

        // Rows borrow the prepared statement, so the result is read eagerly.
        let mut buffered = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut cells = Vec::with_capacity(column_names.len());

            for (index, column) in column_names.iter().enumerate() {
                let cell: SqlValue = row.get(index).map_err(Error::driver)?;
                cells.push(value::from_sql(cell, column)?);
            }

            buffered.push(cells);
        }

        trace!(rows = buffered.len(), "buffered sqlite result");

        Ok(Box::new(Cursor {
            column_names,
            rows: buffered.into_iter(),
            current: None,
            closed: false,
        }))
    }
}

struct Cursor {
    column_names: Vec<String>,
    rows: std::vec::IntoIter<Vec<Value>>,
    current: Option<Vec<Value>>,
    closed: bool,
}

impl Rows for Cursor {
    fn column_names(&self) -> Vec<String> {
        self.column_names.clone()
    }

    fn advance(&mut self) -> Result<bool> {
        if self.closed {
            return Ok(false);
        }

        self.current = self.rows.next();
        Ok(self.current.is_some())
    }

    fn scan_into(&mut self, slots: &mut [Slot]) -> Result<()> {
        let Some(row) = &self.current else {
            bail!("no current row; call `advance` first");
        };

        if slots.len() != row.len() {
            bail!(
                "expected {} slots for the row, got {}",
                row.len(),
                slots.len()
            );
        }

        for (slot, cell) in slots.iter_mut().zip(row) {
            slot.set(cell.clone())?;
        }

        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.current = None;
        self.rows = Vec::new().into_iter();
        Ok(())
    }
}

fn is_insert(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("insert"))
}
