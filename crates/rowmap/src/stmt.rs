mod filter;
pub use filter::Filter;

mod primitive;
pub use primitive::Primitive;

mod statement;
pub use statement::Statement;

pub use rowmap_core::stmt::{Type, Value};

pub(crate) use statement::require_where;
