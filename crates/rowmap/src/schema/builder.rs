use super::Registry;
use crate::Result;

use indexmap::IndexMap;
use rowmap_core::{
    schema::{ColumnInfo, Naming, RecordSchema, TableInfo},
    Error,
};
use rowmap_sql::{Flavor, Serializer, Table};
use tracing::debug;

/// Settings shared by every table a [`Registry`] describes.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    /// Convention for table and column names
    naming: Naming,

    /// Placeholder syntax of the rendered statements
    flavor: Flavor,

    /// Prepended to every table name
    table_name_prefix: String,
}

impl Builder {
    pub fn naming(&mut self, naming: Naming) -> &mut Self {
        self.naming = naming;
        self
    }

    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = prefix.to_string();
        self
    }

    pub fn build(&self) -> Registry {
        Registry::from_builder(self.clone())
    }

    /// Derives the table description of a record.
    pub(crate) fn table(&self, schema: &RecordSchema) -> Result<TableInfo> {
        verify_shape(schema)?;

        let table_name = format!(
            "{}{}",
            self.table_name_prefix,
            match schema.table {
                Some(table) => table.to_string(),
                None => self.naming.apply(schema.name),
            }
        );

        let mut columns = IndexMap::<String, ColumnInfo>::with_capacity(schema.fields.len());

        for field in schema.fields {
            let column = match field.column {
                Some(column) => column.to_string(),
                None => self.naming.apply(field.name),
            };

            if column.is_empty() {
                return Err(Error::shape(format!(
                    "field `{}` of `{}` maps to an empty column name",
                    field.name, schema.name
                )));
            }

            if let Some(existing) = columns.get(&column) {
                return Err(Error::ambiguous_column(
                    &column,
                    existing.field_name,
                    field.name,
                ));
            }

            columns.insert(
                column,
                ColumnInfo {
                    field_name: field.name,
                    ty: field.ty,
                    nullable: field.nullable,
                },
            );
        }

        let column_names = columns.keys().map(String::as_str).collect::<Vec<_>>();
        let sql = Serializer::new(self.flavor).templates(&Table::new(&table_name, &column_names));

        debug!(
            record = schema.name,
            table = %table_name,
            columns = columns.len(),
            "described record"
        );

        Ok(TableInfo {
            record: schema.name,
            table_name,
            columns,
            sql,
            naming: self.naming,
        })
    }
}

fn verify_shape(schema: &RecordSchema) -> Result<()> {
    if schema.name.is_empty() {
        return Err(Error::shape("record type has no name"));
    }

    if schema.fields.is_empty() {
        return Err(Error::shape(format!(
            "record `{}` must have at least one field",
            schema.name
        )));
    }

    for (i, field) in schema.fields.iter().enumerate() {
        if field.name.is_empty() {
            return Err(Error::shape(format!(
                "record `{}` has an unnamed field at position {i}",
                schema.name
            )));
        }

        if schema.fields[..i].iter().any(|prev| prev.name == field.name) {
            return Err(Error::shape(format!(
                "record `{}` declares field `{}` more than once",
                schema.name, field.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowmap_core::{schema::FieldDef, stmt::Type};

    use pretty_assertions::assert_eq;

    const fn field(name: &'static str, ty: Type) -> FieldDef {
        FieldDef {
            name,
            column: None,
            ty,
            nullable: false,
        }
    }

    const ORDER_LINE: RecordSchema = RecordSchema {
        name: "OrderLine",
        table: None,
        fields: &[
            field("orderId", Type::I64),
            field("sku", Type::String),
            field("unitPrice", Type::F64),
        ],
    };

    #[test]
    fn derives_names_through_snake_case() {
        let table = Builder::default().table(&ORDER_LINE).unwrap();

        assert_eq!(table.table_name, "order_line");
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            ["order_id", "sku", "unit_price"]
        );
        assert_eq!(table.column("unit_price").unwrap().field_name, "unitPrice");
        assert_eq!(
            table.sql.insert,
            "INSERT INTO order_line (order_id,sku,unit_price) VALUES (?,?,?)"
        );
        assert_eq!(
            table.sql.update,
            "UPDATE order_line SET order_id=?,sku=?,unit_price=?"
        );
        assert_eq!(
            table.sql.select,
            "SELECT order_id,sku,unit_price FROM order_line"
        );
    }

    #[test]
    fn prefix_flavor_and_verbatim_naming() {
        let table = Builder::default()
            .naming(Naming::Verbatim)
            .flavor(Flavor::Postgresql)
            .table_name_prefix("app_")
            .table(&ORDER_LINE)
            .unwrap();

        assert_eq!(table.table_name, "app_OrderLine");
        assert_eq!(
            table.sql.insert,
            "INSERT INTO app_OrderLine (orderId,sku,unitPrice) VALUES ($1,$2,$3)"
        );
        assert_eq!(
            table.sql.update,
            "UPDATE app_OrderLine SET orderId=$1,sku=$2,unitPrice=$3"
        );
    }

    #[test]
    fn overrides_win_over_naming() {
        const SCHEMA: RecordSchema = RecordSchema {
            name: "Account",
            table: Some("accounts"),
            fields: &[
                field("id", Type::I64),
                FieldDef {
                    name: "email",
                    column: Some("email_address"),
                    ty: Type::String,
                    nullable: true,
                },
            ],
        };

        let table = Builder::default()
            .table_name_prefix("t_")
            .table(&SCHEMA)
            .unwrap();

        assert_eq!(table.table_name, "t_accounts");
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            ["id", "email_address"]
        );
        assert!(table.column("email_address").unwrap().nullable);
    }

    #[test]
    fn colliding_columns_are_ambiguous() {
        const SCHEMA: RecordSchema = RecordSchema {
            name: "Clash",
            table: None,
            fields: &[field("user_id", Type::I64), field("userId", Type::I64)],
        };

        let err = Builder::default().table(&SCHEMA).unwrap_err();
        assert!(err.is_ambiguous_column());
        assert_eq!(
            err.to_string(),
            "ambiguous column `user_id`: fields `user_id` and `userId` map to the same column"
        );
    }

    #[test]
    fn zero_fields_is_a_shape_error() {
        const SCHEMA: RecordSchema = RecordSchema {
            name: "Nothing",
            table: None,
            fields: &[],
        };

        let err = Builder::default().table(&SCHEMA).unwrap_err();
        assert!(err.is_shape());
        assert_eq!(
            err.to_string(),
            "not a struct: record `Nothing` must have at least one field"
        );
    }

    #[test]
    fn malformed_descriptors_are_shape_errors() {
        const UNNAMED: RecordSchema = RecordSchema {
            name: "",
            table: None,
            fields: &[field("id", Type::I64)],
        };
        const DUPLICATE: RecordSchema = RecordSchema {
            name: "Twice",
            table: None,
            fields: &[field("id", Type::I64), field("id", Type::I32)],
        };

        assert!(Builder::default().table(&UNNAMED).unwrap_err().is_shape());
        assert!(Builder::default().table(&DUPLICATE).unwrap_err().is_shape());
    }
}
