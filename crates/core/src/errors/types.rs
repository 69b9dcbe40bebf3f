//! Core error type definitions

use std::fmt;
use std::sync::Arc;

/// Boxed native error shared by every clone of a [`Fault`].
pub type DynError = dyn std::error::Error + Send + Sync + 'static;

/// The error model carried on the failure branch of an [`Outcome`](crate::Outcome).
///
/// An error is one of three shapes:
///
/// - an *expected* failure: an anticipated domain outcome with a message and a code;
/// - an *unexpected* failure: a captured [`Fault`] raised by native machinery
///   (a panic, an I/O error, ...);
/// - a *collection* of zero or more atoms, built by merging errors with `+`.
///
/// Collections are always flat. They are only ever built by the merge
/// operation, which splices the children of collections instead of nesting them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Anticipated domain failure
    #[error("{message}")]
    Expected { message: String, code: String },

    /// Captured native fault
    #[error("{message}")]
    Unexpected {
        message: String,
        code: String,
        #[source]
        fault: Fault,
    },

    /// Flattened sequence of atoms
    #[error("{}", .0.message())]
    Collection(ErrorCollection),
}

/// Variant tags of [`Error`], used by [`Error::has_error_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Expected,
    Unexpected,
    Collection,
}

/// Ordered children of an [`Error::Collection`].
///
/// The children are never collections themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorCollection(pub(crate) Vec<Error>);

impl ErrorCollection {
    /// Children in merge order
    pub fn errors(&self) -> &[Error] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Handle on a captured native fault.
///
/// Cloning a fault shares the underlying error, so two clones compare equal
/// while two faults captured separately never do.
#[derive(Clone)]
pub struct Fault(Repr);

#[derive(Clone)]
enum Repr {
    Native(Arc<DynError>),
    // Kept whole so downcasts reach the error anyhow wraps
    Anyhow(Arc<anyhow::Error>),
}

impl Fault {
    /// Wrap a native error
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Repr::Native(Arc::new(error)))
    }

    /// Wrap an already boxed native error
    pub fn from_boxed(error: Box<DynError>) -> Self {
        Self(Repr::Native(Arc::from(error)))
    }

    /// Wrap an `anyhow` error, keeping its concrete error type reachable
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self(Repr::Anyhow(Arc::new(error)))
    }

    /// The fault's own message
    pub fn message(&self) -> String {
        self.inner().to_string()
    }

    /// Borrow the captured error
    pub fn inner(&self) -> &DynError {
        match &self.0 {
            Repr::Native(error) => &**error,
            Repr::Anyhow(error) => &***error,
        }
    }

    /// Downcast the captured error to a concrete type
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        match &self.0 {
            Repr::Native(error) => error.downcast_ref::<T>(),
            Repr::Anyhow(error) => error.downcast_ref::<T>(),
        }
    }

    /// Whether the captured error is a `T`
    pub fn is<T>(&self) -> bool
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        match &self.0 {
            Repr::Native(error) => error.is::<T>(),
            Repr::Anyhow(error) => error.is::<T>(),
        }
    }

    /// Whether both handles share the same captured error
    pub fn ptr_eq(&self, other: &Fault) -> bool {
        match (&self.0, &other.0) {
            (Repr::Native(left), Repr::Native(right)) => Arc::ptr_eq(left, right),
            (Repr::Anyhow(left), Repr::Anyhow(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner(), f)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner().source()
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Fault recorded when a panic is captured by [`Outcome::try_catch`](crate::Outcome::try_catch)
/// or [`Outcome::try_async`](crate::Outcome::try_async).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PanicFault {
    pub message: String,
}

/// Fault exposed by a collection that groups the faults of its children.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", display_aggregate(.faults))]
pub struct AggregateFault {
    pub faults: Vec<Fault>,
}

impl AggregateFault {
    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }
}

fn display_aggregate(faults: &[Fault]) -> String {
    let mut rendered = String::from(crate::constants::AGGREGATE_FAULT_MESSAGE);
    for fault in faults {
        rendered.push_str(&format!(" ({fault})"));
    }
    rendered
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Error::Expected { message, code },
                Error::Expected {
                    message: other_message,
                    code: other_code,
                },
            ) => message == other_message && code == other_code,
            (
                Error::Unexpected {
                    message,
                    code,
                    fault,
                },
                Error::Unexpected {
                    message: other_message,
                    code: other_code,
                    fault: other_fault,
                },
            ) => message == other_message && code == other_code && fault == other_fault,
            (Error::Collection(children), Error::Collection(other_children)) => {
                children == other_children
            }
            _ => false,
        }
    }
}

/// Programmer error raised when a union cannot be viewed as an [`Outcome`](crate::Outcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The union's left type is not [`Error`]
    #[error("invalid conversion: cannot convert a union with left type `{left_type}` into an outcome")]
    InvalidLeftType { left_type: &'static str },
}
