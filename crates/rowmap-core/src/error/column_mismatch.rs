use super::Error;

/// Error when a result set carries a column the table description does not
/// know about.
#[derive(Debug)]
pub(super) struct ColumnMismatchError {
    column: Box<str>,
    table: Box<str>,
}

impl std::error::Error for ColumnMismatchError {}

impl core::fmt::Display for ColumnMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` mismatch: not found in table `{}`",
            self.column, self.table
        )
    }
}

impl Error {
    /// Creates a column mismatch error.
    pub fn column_mismatch(column: &str, table: &str) -> Error {
        Error::from(super::ErrorKind::ColumnMismatch(ColumnMismatchError {
            column: column.into(),
            table: table.into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a column
    /// mismatch error.
    pub fn is_column_mismatch(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::ColumnMismatch(_)))
    }
}
