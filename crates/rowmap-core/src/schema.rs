mod naming;
pub use naming::Naming;

mod record;
pub use record::{FieldDef, RecordSchema};

mod table;
pub use table::{ColumnInfo, StatementKind, TableInfo, Templates};
