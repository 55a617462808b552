pub mod serializer;
pub use serializer::{Flavor, Serializer};

pub mod stmt;
pub use stmt::{Statement, Table};
