pub use rowmap_core::driver::{Connection, ExecResult, Rows, Slot};

#[cfg(feature = "sqlite")]
pub use rowmap_driver_sqlite::Sqlite;
