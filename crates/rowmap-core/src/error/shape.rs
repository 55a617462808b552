use super::Error;

/// Error when an argument cannot be described as a flat record.
///
/// This occurs when:
/// - A record descriptor has no type name
/// - A record has no mapped fields
/// - A field name is empty or declared twice
///
/// Non-struct types never reach this point; `#[derive(Record)]` rejects them
/// at compile time with the same message.
#[derive(Debug)]
pub(super) struct ShapeError {
    message: Box<str>,
}

impl std::error::Error for ShapeError {}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not a struct: {}", self.message)
    }
}

impl Error {
    /// Creates a shape error.
    pub fn shape(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Shape(ShapeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a shape error.
    pub fn is_shape(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Shape(_)))
    }
}
