use super::Error;

/// Error when a described column has no matching field on a record instance.
///
/// The table description and the instance arrive independently; this fires
/// when they were derived from different types.
#[derive(Debug)]
pub(super) struct FieldMismatchError {
    record: Box<str>,
    field: Box<str>,
}

impl std::error::Error for FieldMismatchError {}

impl core::fmt::Display for FieldMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field mismatch: record `{}` has no field `{}`",
            self.record, self.field
        )
    }
}

impl Error {
    /// Creates a field mismatch error.
    pub fn field_mismatch(record: &str, field: &str) -> Error {
        Error::from(super::ErrorKind::FieldMismatch(FieldMismatchError {
            record: record.into(),
            field: field.into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a field
    /// mismatch error.
    pub fn is_field_mismatch(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::FieldMismatch(_)))
    }
}
