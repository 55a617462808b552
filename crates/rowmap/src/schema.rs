mod builder;
pub use builder::Builder;

mod registry;
pub use registry::Registry;

pub use rowmap_core::schema::{
    ColumnInfo, FieldDef, Naming, RecordSchema, StatementKind, TableInfo, Templates,
};
pub use rowmap_sql::Flavor;
