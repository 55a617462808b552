// Lets `#[derive(Record)]` expand inside this crate's own tests.
extern crate self as rowmap;

pub mod db;
pub use db::Db;

pub mod driver;

pub mod mapper;

mod record;
pub use record::Record;

pub mod schema;
pub use schema::Registry;

pub mod stmt;
pub use stmt::{Filter, Statement};

pub use rowmap_core::{bail, err, Error, Result, TableInfo};
pub use rowmap_macros::Record;

use std::sync::Arc;

/// Describes `R` through the process-wide registry.
///
/// The description is built on first use and cached; later calls return the
/// same `Arc`.
pub fn describe<R: Record>() -> Result<Arc<TableInfo>> {
    Registry::global().describe::<R>()
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{stmt::Primitive, Error, Record, Result};
    pub use rowmap_core::{
        schema::{FieldDef, RecordSchema},
        stmt::Value,
    };
    pub use std::option::Option;
}
