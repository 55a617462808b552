use super::Filter;
use crate::{mapper, schema::Registry, Record, Result};

use rowmap_core::{
    schema::{StatementKind, TableInfo},
    stmt::Value,
    Error,
};

/// SQL text ready to hand to a connection, with its positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<Value>,
}

impl Statement {
    /// Builds the insert for `record`. Arguments follow column order.
    pub fn insert<R: Record>(registry: &Registry, record: &R) -> Result<Statement> {
        let table = registry.describe::<R>()?;
        Self::insert_into(&table, record)
    }

    /// Builds an update for `record` restricted by `filter`.
    ///
    /// The filter is required and must open with `where`; otherwise this fails
    /// with a predicate-required error before the record is inspected. The
    /// arguments are the record's values followed by the filter's.
    pub fn update<R: Record>(
        registry: &Registry,
        record: &R,
        filter: Option<Filter>,
    ) -> Result<Statement> {
        let filter = require_where(filter)?;
        let table = registry.describe::<R>()?;
        Self::update_table(&table, record, filter)
    }

    /// Builds a select of every column of `R`, optionally followed by a raw
    /// fragment such as a predicate or an `order by` clause.
    pub fn select<R: Record>(registry: &Registry, filter: Option<Filter>) -> Result<Statement> {
        let table = registry.describe::<R>()?;
        Ok(Self::select_from(&table, filter))
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub(crate) fn insert_into<R: Record>(table: &TableInfo, record: &R) -> Result<Statement> {
        Ok(Statement {
            sql: table.sql(StatementKind::Insert).to_string(),
            params: mapper::project_for_write(record, table)?,
        })
    }

    pub(crate) fn update_table<R: Record>(
        table: &TableInfo,
        record: &R,
        filter: Filter,
    ) -> Result<Statement> {
        let mut params = mapper::project_for_write(record, table)?;
        let (predicate, args) = filter.into_parts();
        params.extend(args);

        Ok(Statement {
            sql: append(table.sql(StatementKind::Update), &predicate),
            params,
        })
    }

    pub(crate) fn select_from(table: &TableInfo, filter: Option<Filter>) -> Statement {
        let template = table.sql(StatementKind::Select);

        match filter {
            Some(filter) => {
                let (fragment, params) = filter.into_parts();
                Statement {
                    sql: append(template, &fragment),
                    params,
                }
            }
            None => Statement {
                sql: template.to_string(),
                params: vec![],
            },
        }
    }
}

pub(crate) fn require_where(filter: Option<Filter>) -> Result<Filter> {
    match filter {
        Some(filter) if filter.is_where() => Ok(filter),
        _ => Err(Error::predicate_required()),
    }
}

fn append(template: &str, fragment: &str) -> String {
    let mut sql = String::with_capacity(template.len() + 1 + fragment.len());
    sql.push_str(template);
    sql.push(' ');
    sql.push_str(fragment);
    sql
}
