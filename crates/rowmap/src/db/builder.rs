use super::Db;
use crate::schema::{self, Flavor, Naming, Registry};

use rowmap_core::driver::Connection;

use std::sync::Arc;

/// Configures a [`Db`] with its own registry.
#[derive(Debug, Default)]
pub struct Builder {
    /// Registry settings
    core: schema::Builder,

    /// Use this registry instead of building one
    registry: Option<Arc<Registry>>,
}

impl Builder {
    pub fn naming(&mut self, naming: Naming) -> &mut Self {
        self.core.naming(naming);
        self
    }

    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.core.flavor(flavor);
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    /// Share an existing registry. Naming, flavor and prefix settings are
    /// then ignored.
    pub fn registry(&mut self, registry: Arc<Registry>) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    pub fn connect(&self, connection: impl Connection + 'static) -> Db {
        let registry = match &self.registry {
            Some(registry) => registry.clone(),
            None => Arc::new(self.core.build()),
        };

        Db {
            connection: Box::new(connection),
            registry,
        }
    }
}
