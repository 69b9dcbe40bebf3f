//! Queries over the error model

use std::borrow::Cow;

use super::types::{AggregateFault, Error, ErrorCollection, ErrorKind, Fault};
use crate::constants::{COLLECTION_CLOSE, COLLECTION_OPEN, COLLECTION_SEPARATOR};

impl Error {
    /// Variant tag of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Expected { .. } => ErrorKind::Expected,
            Error::Unexpected { .. } => ErrorKind::Unexpected,
            Error::Collection(_) => ErrorKind::Collection,
        }
    }

    /// Human readable message. Collections render `[m1, m2, ...]`.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Error::Expected { message, .. } | Error::Unexpected { message, .. } => {
                Cow::Borrowed(message)
            }
            Error::Collection(children) => Cow::Owned(children.message()),
        }
    }

    /// Error code. Collections render `[c1, c2, ...]`.
    pub fn code(&self) -> Cow<'_, str> {
        match self {
            Error::Expected { code, .. } | Error::Unexpected { code, .. } => Cow::Borrowed(code),
            Error::Collection(children) => Cow::Owned(children.code()),
        }
    }

    /// True for expected atoms, and for collections whose children are all
    /// expected
    pub fn is_expected(&self) -> bool {
        match self {
            Error::Expected { .. } => true,
            Error::Unexpected { .. } => false,
            Error::Collection(children) => children.0.iter().all(Error::is_expected),
        }
    }

    /// Number of atoms: 1 for an atom, the child count for a collection
    pub fn count(&self) -> usize {
        match self {
            Error::Collection(children) => children.len(),
            _ => 1,
        }
    }

    /// The atoms of this error: itself, or the children of a collection
    pub fn as_slice(&self) -> &[Error] {
        match self {
            Error::Collection(children) => children.errors(),
            atom => std::slice::from_ref(atom),
        }
    }

    /// Iterate over the atoms of this error
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.as_slice().iter()
    }

    /// Fault carried by an unexpected atom
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Error::Unexpected { fault, .. } => Some(fault),
            _ => None,
        }
    }

    /// The native fault behind this error.
    ///
    /// A collection groups the faults of its children into a single
    /// [`AggregateFault`]; it returns `None` when no child carries one.
    pub fn exception(&self) -> Option<Fault> {
        match self {
            Error::Expected { .. } => None,
            Error::Unexpected { fault, .. } => Some(fault.clone()),
            Error::Collection(children) => {
                let faults: Vec<Fault> = children
                    .0
                    .iter()
                    .filter_map(Error::fault)
                    .cloned()
                    .collect();
                if faults.is_empty() {
                    None
                } else {
                    Some(Fault::new(AggregateFault { faults }))
                }
            }
        }
    }

    /// Whether this error, or any child of a collection, has the given variant
    pub fn has_error_of(&self, kind: ErrorKind) -> bool {
        self.kind() == kind || self.iter().any(|child| child.kind() == kind)
    }

    /// Whether any fault carried by this error is a `T`
    pub fn has_fault_of<T>(&self) -> bool
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        self.iter()
            .filter_map(Error::fault)
            .any(|fault| fault.is::<T>())
    }
}

impl ErrorCollection {
    pub(crate) fn message(&self) -> String {
        project(&self.0, |child| child.message())
    }

    pub(crate) fn code(&self) -> String {
        project(&self.0, |child| child.code())
    }
}

fn project<'a, F>(children: &'a [Error], field: F) -> String
where
    F: Fn(&'a Error) -> Cow<'a, str>,
{
    let joined = children
        .iter()
        .map(field)
        .collect::<Vec<_>>()
        .join(COLLECTION_SEPARATOR);
    format!("{COLLECTION_OPEN}{joined}{COLLECTION_CLOSE}")
}

impl<'a> IntoIterator for &'a Error {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Error {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Error::Collection(children) => children.0.into_iter(),
            atom => vec![atom].into_iter(),
        }
    }
}
