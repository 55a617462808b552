mod builder;
pub use builder::Builder;

use crate::{mapper, schema::Registry, stmt::require_where, Filter, Record, Result, Statement};

use rowmap_core::driver::{Connection, ExecResult};
use tracing::debug;

use std::sync::Arc;

/// A database connection paired with the registry describing its records.
#[derive(Debug)]
pub struct Db {
    connection: Box<dyn Connection>,
    registry: Arc<Registry>,
}

impl Db {
    /// Wraps `connection`, describing records through the process-wide
    /// registry.
    pub fn new(connection: impl Connection + 'static) -> Db {
        Db {
            connection: Box::new(connection),
            registry: Registry::global().clone(),
        }
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Inserts `record` as a new row.
    pub fn save<R: Record>(&mut self, record: &R) -> Result<ExecResult> {
        let table = self.registry.describe::<R>()?;
        let stmt = Statement::insert_into(&table, record)?;
        self.exec(&stmt)
    }

    /// Writes every column of `record` to the rows matched by `filter`.
    ///
    /// The filter must open with `where`; without one nothing is executed and
    /// a predicate-required error is returned.
    pub fn update<R: Record>(
        &mut self,
        record: &R,
        filter: impl Into<Option<Filter>>,
    ) -> Result<ExecResult> {
        let filter = require_where(filter.into())?;
        let table = self.registry.describe::<R>()?;
        let stmt = Statement::update_table(&table, record, filter)?;
        self.exec(&stmt)
    }

    /// Loads every row of `R`'s table, optionally narrowed by `filter`.
    pub fn list<R: Record>(&mut self, filter: impl Into<Option<Filter>>) -> Result<Vec<R>> {
        let table = self.registry.describe::<R>()?;
        let stmt = Statement::select_from(&table, filter.into());

        debug!(sql = %stmt.sql(), params = stmt.params().len(), "query");
        let rows = self.connection.query(stmt.sql(), stmt.params())?;
        mapper::load_all(rows, &table)
    }

    /// Executes a statement that returns no rows.
    pub fn exec(&mut self, stmt: &Statement) -> Result<ExecResult> {
        debug!(sql = %stmt.sql(), params = stmt.params().len(), "exec");
        self.connection.execute(stmt.sql(), stmt.params())
    }

    /// Executes a query and loads every row as an `R`.
    pub fn query<R: Record>(&mut self, stmt: &Statement) -> Result<Vec<R>> {
        let table = self.registry.describe::<R>()?;

        debug!(sql = %stmt.sql(), params = stmt.params().len(), "query");
        let rows = self.connection.query(stmt.sql(), stmt.params())?;
        mapper::load_all(rows, &table)
    }
}
