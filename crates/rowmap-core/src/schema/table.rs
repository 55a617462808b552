use super::Naming;
use crate::{stmt::Type, Error, Result};

use indexmap::IndexMap;

/// Table description derived from a record type.
///
/// Built once per record type and shared behind an `Arc`. The keys of
/// `columns` are the column names, in field-declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableInfo {
    /// Name of the record type the table was derived from
    pub record: &'static str,

    /// Name of the table
    pub table_name: String,

    /// Column name to field correspondence
    pub columns: IndexMap<String, ColumnInfo>,

    /// Pre-rendered statements
    pub sql: Templates,

    /// Convention used to normalize result column names
    pub naming: Naming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Record field the column maps to
    pub field_name: &'static str,

    /// Scalar kind of the field
    pub ty: Type,

    /// True when the column accepts `NULL`
    pub nullable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Insert,
    Update,
    Select,
}

/// SQL rendered from the column list.
///
/// `insert` and `update` carry one placeholder per column, in column order.
/// `update` and `select` have no predicate; callers append one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub insert: String,
    pub update: String,
    pub select: String,
}

impl Templates {
    pub fn get(&self, kind: StatementKind) -> &str {
        match kind {
            StatementKind::Insert => &self.insert,
            StatementKind::Update => &self.update,
            StatementKind::Select => &self.select,
        }
    }
}

impl TableInfo {
    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.get(name)
    }

    pub fn sql(&self, kind: StatementKind) -> &str {
        self.sql.get(kind)
    }

    /// Resolves a result-set column name to the field it fills.
    ///
    /// The name is looked up as-is first, then translated through the naming
    /// convention. A column that matches neither is a hard failure.
    pub fn resolve_column(&self, result_column: &str) -> Result<&ColumnInfo> {
        if let Some(column) = self.columns.get(result_column) {
            return Ok(column);
        }

        self.columns
            .get(&self.naming.apply(result_column))
            .ok_or_else(|| Error::column_mismatch(result_column, &self.table_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> TableInfo {
        let mut columns = IndexMap::new();
        columns.insert(
            "id".to_string(),
            ColumnInfo {
                field_name: "id",
                ty: Type::I64,
                nullable: false,
            },
        );
        columns.insert(
            "full_name".to_string(),
            ColumnInfo {
                field_name: "full_name",
                ty: Type::String,
                nullable: false,
            },
        );

        TableInfo {
            record: "Person",
            table_name: "person".to_string(),
            columns,
            sql: Templates {
                insert: String::new(),
                update: String::new(),
                select: String::new(),
            },
            naming: Naming::SnakeCase,
        }
    }

    #[test]
    fn column_names_follow_declaration_order() {
        let table = person();
        assert_eq!(table.column_names().collect::<Vec<_>>(), ["id", "full_name"]);
    }

    #[test]
    fn resolve_column_normalizes_through_naming() {
        let table = person();
        assert_eq!(table.resolve_column("full_name").unwrap().field_name, "full_name");
        assert_eq!(table.resolve_column("FullName").unwrap().field_name, "full_name");
        assert_eq!(table.resolve_column("ID").unwrap().field_name, "id");
    }

    #[test]
    fn resolve_unknown_column_fails() {
        let err = person().resolve_column("nickname").unwrap_err();
        assert!(err.is_column_mismatch());
        assert_eq!(
            err.to_string(),
            "column `nickname` mismatch: not found in table `person`"
        );
    }
}
