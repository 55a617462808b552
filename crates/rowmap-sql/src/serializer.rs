#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
pub use flavor::Flavor;

mod params;
use params::Placeholder;

mod statement;

use crate::stmt::{Statement, Table};

use rowmap_core::schema::Templates;

/// Serialize a statement template to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// Placeholder syntax of the target database
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Number of placeholders written so far
    placeholders: usize,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    /// Renders `stmt`, returning the SQL text and the number of placeholders
    /// it contains.
    pub fn serialize(&self, stmt: &Statement<'_>) -> (String, usize) {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            placeholders: 0,
        };

        stmt.to_sql(&mut fmt);

        let placeholders = fmt.placeholders;
        (ret, placeholders)
    }

    /// Renders the insert, update and select templates for `table`.
    pub fn templates(&self, table: &Table<'_>) -> Templates {
        let (insert, insert_placeholders) = self.serialize(&Statement::Insert(table));
        let (update, update_placeholders) = self.serialize(&Statement::Update(table));
        let (select, _) = self.serialize(&Statement::Select(table));

        debug_assert_eq!(insert_placeholders, table.columns.len());
        debug_assert_eq!(update_placeholders, table.columns.len());

        Templates {
            insert,
            update,
            select,
        }
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new(Flavor::default())
    }
}
