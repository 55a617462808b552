mod adhoc;
mod ambiguous_column;
mod column_mismatch;
mod driver;
mod field_mismatch;
mod predicate_required;
mod shape;
mod type_conversion;

use adhoc::AdhocError;
use ambiguous_column::AmbiguousColumnError;
use column_mismatch::ColumnMismatchError;
use driver::DriverError;
use field_mismatch::FieldMismatchError;
use predicate_required::PredicateRequiredError;
use shape::ShapeError;
use std::sync::Arc;
use type_conversion::TypeConversionError;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while describing, mapping, or executing records.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        // A consequent that is shared or carries its own chain is kept whole.
        let kind = match Arc::try_unwrap(consequent.inner) {
            Ok(ErrorInner { kind, cause: None }) => kind,
            Ok(inner) => ErrorKind::Nested(Error {
                inner: Arc::new(inner),
            }),
            Err(shared) => ErrorKind::Nested(Error { inner: shared }),
        };

        Error {
            inner: Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            }),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = &err.inner.cause {
            err = cause;
        }
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Returns `true` if any error in the context chain matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool + Copy) -> bool {
        self.chain().any(|err| match err.kind() {
            ErrorKind::Nested(nested) => nested.any_kind(f),
            kind => f(kind),
        })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::Nested(err) => err.source(),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Shape(ShapeError),
    AmbiguousColumn(AmbiguousColumnError),
    FieldMismatch(FieldMismatchError),
    ColumnMismatch(ColumnMismatchError),
    PredicateRequired(PredicateRequiredError),
    TypeConversion(TypeConversionError),
    Driver(DriverError),
    Nested(Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Shape(err) => core::fmt::Display::fmt(err, f),
            AmbiguousColumn(err) => core::fmt::Display::fmt(err, f),
            FieldMismatch(err) => core::fmt::Display::fmt(err, f),
            ColumnMismatch(err) => core::fmt::Display::fmt(err, f),
            PredicateRequired(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            Nested(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::{Type, Value};

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = err!("test error: {}", 42);
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let err = Error::column_mismatch("nickname", "person")
            .context("materializing row 3")
            .context("Person::list");

        assert_eq!(
            err.to_string(),
            "Person::list: materializing row 3: column `nickname` mismatch: not found in table `person`"
        );
    }

    #[test]
    fn kind_checks_walk_the_context_chain() {
        let err = Error::predicate_required().context("update failed");
        assert!(err.is_predicate_required());
        assert!(!err.is_shape());
        assert!(err.root().is_predicate_required());
    }

    #[test]
    fn shared_context_keeps_its_kind() {
        let shared = Error::predicate_required();
        let err = Error::shape("record `Empty` has no fields").context(shared.clone());

        assert!(err.is_predicate_required());
        assert!(err.is_shape());
        assert_eq!(
            err.to_string(),
            "must set where condition: not a struct: record `Empty` has no fields"
        );
    }

    #[test]
    fn chained_context_keeps_its_chain() {
        let consequent = Error::column_mismatch("nickname", "person").context("loading rows");
        let err = Error::predicate_required().context(consequent);

        assert!(err.is_column_mismatch());
        assert!(err.is_predicate_required());
        assert_eq!(
            err.to_string(),
            "loading rows: column `nickname` mismatch: not found in table `person`: must set where condition"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn shape_error() {
        let err = Error::shape("record `Empty` has no fields");
        assert!(err.is_shape());
        assert_eq!(err.to_string(), "not a struct: record `Empty` has no fields");
    }

    #[test]
    fn ambiguous_column_error() {
        let err = Error::ambiguous_column("user_id", "user_id", "UserId");
        assert!(err.is_ambiguous_column());
        assert_eq!(
            err.to_string(),
            "ambiguous column `user_id`: fields `user_id` and `UserId` map to the same column"
        );
    }

    #[test]
    fn field_mismatch_error() {
        let err = Error::field_mismatch("Invoice", "full_name");
        assert!(err.is_field_mismatch());
        assert_eq!(
            err.to_string(),
            "field mismatch: record `Invoice` has no field `full_name`"
        );
    }

    #[test]
    fn predicate_required_error() {
        let err = Error::predicate_required();
        assert_eq!(err.to_string(), "must set where condition");
    }

    #[test]
    fn type_conversion_error() {
        let err = Error::type_conversion(Value::String("abc".into()), Type::I64);
        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert String to I64");
    }

    #[test]
    fn driver_error_is_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = Error::driver(io);
        assert!(err.is_driver());
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "disk on fire");
    }
}
