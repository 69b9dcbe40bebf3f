//! Factories for building errors

use super::types::{Error, ErrorCollection, Fault};
use crate::constants::DEFAULT_ERROR_CODE;

impl Error {
    /// Create an expected error with the default code
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_code(message, DEFAULT_ERROR_CODE)
    }

    /// Create an expected error with an explicit code
    #[must_use]
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Error::Expected {
            message: message.into(),
            code: code.into(),
        }
    }

    /// Create an unexpected error whose message is the fault's own message
    #[must_use]
    pub fn from_fault(fault: impl Into<Fault>) -> Self {
        Self::from_fault_with(fault, None::<String>, DEFAULT_ERROR_CODE)
    }

    /// Create an unexpected error with an optional message and an explicit
    /// code.
    ///
    /// A missing or blank message falls back to the fault's own message.
    #[must_use]
    pub fn from_fault_with(
        fault: impl Into<Fault>,
        message: Option<impl Into<String>>,
        code: impl Into<String>,
    ) -> Self {
        let fault = fault.into();
        let message = message
            .map(Into::into)
            .filter(|message: &String| !message.trim().is_empty())
            .unwrap_or_else(|| fault.message());
        Error::Unexpected {
            message,
            code: code.into(),
            fault,
        }
    }

    /// The identity element of [`Error::merge`]: a collection with no children
    #[must_use]
    pub fn empty() -> Self {
        Error::Collection(ErrorCollection::default())
    }
}

/// Namespace for error factories.
///
/// Mirrors the constructors on [`Error`] for call sites that read better as
/// `Errors::new("...")` or `Errors::empty_error()`.
#[derive(Debug, Clone, Copy)]
pub struct Errors;

impl Errors {
    /// Expected error with the default code
    #[must_use]
    pub fn new(message: impl Into<String>) -> Error {
        Error::new(message)
    }

    /// Expected error with an explicit code
    #[must_use]
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Error {
        Error::with_code(message, code)
    }

    /// Unexpected error wrapping a fault
    #[must_use]
    pub fn from_fault(fault: impl Into<Fault>) -> Error {
        Error::from_fault(fault)
    }

    /// Unexpected error with an optional message and an explicit code
    #[must_use]
    pub fn from_fault_with(
        fault: impl Into<Fault>,
        message: Option<impl Into<String>>,
        code: impl Into<String>,
    ) -> Error {
        Error::from_fault_with(fault, message, code)
    }

    /// Zero-child collection
    #[must_use]
    pub fn empty_error() -> Error {
        Error::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PanicFault;

    fn fault(message: &str) -> Fault {
        Fault::new(PanicFault {
            message: message.to_string(),
        })
    }

    #[test]
    fn test_new_uses_default_code() {
        let error = Error::new("not found");
        assert_eq!(error.message(), "not found");
        assert_eq!(error.code(), DEFAULT_ERROR_CODE);
        assert!(error.is_expected());
        assert_eq!(error.count(), 1);
    }

    #[test]
    fn test_from_fault_defaults_to_fault_message() {
        let error = Error::from_fault(fault("disk on fire"));
        assert_eq!(error.message(), "disk on fire");
        assert!(!error.is_expected());
    }

    #[test]
    fn test_from_fault_with_explicit_message() {
        let error = Error::from_fault_with(fault("disk on fire"), Some("storage failed"), "500");
        assert_eq!(error.message(), "storage failed");
        assert_eq!(error.code(), "500");
    }

    #[test]
    fn test_from_fault_with_blank_message_falls_back() {
        let empty = Error::from_fault_with(fault("disk on fire"), Some(""), "500");
        let blank = Error::from_fault_with(fault("disk on fire"), Some("   "), "500");
        assert_eq!(empty.message(), "disk on fire");
        assert_eq!(blank.message(), "disk on fire");
    }

    #[test]
    fn test_empty_is_zero_child_collection() {
        let empty = Errors::empty_error();
        assert_eq!(empty.count(), 0);
        assert!(empty.is_expected());
        assert_eq!(empty.message(), "[]");
        assert_eq!(empty.code(), "[]");
    }
}
