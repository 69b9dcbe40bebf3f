//! Serializable transport view of an error

use serde::{Deserialize, Serialize};

use super::types::Error;

/// Flat, serializable description of an [`Error`].
///
/// Faults are reduced to the message of the error that carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: String,
    pub message: String,
    pub expected: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorReport>,
}

impl Error {
    /// Build the transport view of this error
    pub fn report(&self) -> ErrorReport {
        let errors = match self {
            Error::Collection(children) => children.errors().iter().map(Error::report).collect(),
            _ => Vec::new(),
        };
        ErrorReport {
            code: self.code().into_owned(),
            message: self.message().into_owned(),
            expected: self.is_expected(),
            errors,
        }
    }
}

impl From<&Error> for ErrorReport {
    fn from(error: &Error) -> Self {
        error.report()
    }
}
