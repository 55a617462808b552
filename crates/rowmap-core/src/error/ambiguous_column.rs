use super::Error;

/// Error when two fields of a record map to the same column name.
///
/// The naming convention must be injective over a record's fields, otherwise
/// a result column could not be routed back to a single field.
#[derive(Debug)]
pub(super) struct AmbiguousColumnError {
    column: Box<str>,
    first: Box<str>,
    second: Box<str>,
}

impl std::error::Error for AmbiguousColumnError {}

impl core::fmt::Display for AmbiguousColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "ambiguous column `{}`: fields `{}` and `{}` map to the same column",
            self.column, self.first, self.second
        )
    }
}

impl Error {
    /// Creates an ambiguous column error.
    pub fn ambiguous_column(column: &str, first: &str, second: &str) -> Error {
        Error::from(super::ErrorKind::AmbiguousColumn(AmbiguousColumnError {
            column: column.into(),
            first: first.into(),
            second: second.into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an ambiguous
    /// column error.
    pub fn is_ambiguous_column(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::AmbiguousColumn(_)))
    }
}
