use super::Builder;
use crate::{Record, Result};

use rowmap_core::schema::{RecordSchema, TableInfo};

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

/// Cache of table descriptions, one per record type.
///
/// A description is derived the first time its record type is described and
/// handed out behind an `Arc` from then on. Readers never observe a partially
/// built description: it is derived outside the lock and published whole.
#[derive(Debug, Default)]
pub struct Registry {
    builder: Builder,
    tables: RwLock<HashMap<TypeId, Arc<TableInfo>>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(super) fn from_builder(builder: Builder) -> Registry {
        Registry {
            builder,
            tables: RwLock::default(),
        }
    }

    /// The process-wide registry, built with default settings.
    pub fn global() -> &'static Arc<Registry> {
        static GLOBAL: OnceLock<Arc<Registry>> = OnceLock::new();
        GLOBAL.get_or_init(Default::default)
    }

    /// Returns the description of `R`, deriving and caching it on first use.
    pub fn describe<R: Record>(&self) -> Result<Arc<TableInfo>> {
        let key = TypeId::of::<R>();

        if let Some(table) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(table.clone());
        }

        let table = Arc::new(self.builder.table(&R::SCHEMA)?);

        // Another thread may have raced us here; the first insert wins.
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Ok(tables.entry(key).or_insert(table).clone())
    }

    /// Derives a description from a bare descriptor. The result is not cached.
    pub fn describe_schema(&self, schema: &RecordSchema) -> Result<TableInfo> {
        self.builder.table(schema)
    }

    /// Number of record types described so far.
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
