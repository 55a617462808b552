use super::Error;

/// Error when an update is requested without a `where` predicate.
#[derive(Debug)]
pub(super) struct PredicateRequiredError;

impl std::error::Error for PredicateRequiredError {}

impl core::fmt::Display for PredicateRequiredError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("must set where condition")
    }
}

impl Error {
    /// Creates a predicate required error.
    pub fn predicate_required() -> Error {
        Error::from(super::ErrorKind::PredicateRequired(PredicateRequiredError))
    }

    /// Returns `true` if this error, or any error it wraps, is a predicate
    /// required error.
    pub fn is_predicate_required(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::PredicateRequired(_)))
    }
}
