//! Specialized success/error union

use std::any::{Any, TypeId};
use std::future::Future;

use tracing::debug;

use crate::capture::{catch_panic, catch_panic_async};
use crate::either::Either;
use crate::errors::{ConversionError, Error, PanicFault};

/// Result of a computation that may fail with an [`Error`].
///
/// `Outcome<T>` carries the same information as `Either<Error, T>` with the
/// branches named `Fail` and `Success`; the two convert into each other
/// without loss.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Fail(Error),
}

/// Alternative name for [`Outcome`]
pub type SResult<T> = Outcome<T>;

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn fail(error: impl Into<Error>) -> Self {
        Outcome::Fail(error.into())
    }

    /// `Success` for `Some`, otherwise `Fail` with the error built by `error`
    pub fn from_option<F>(value: Option<T>, error: F) -> Self
    where
        F: FnOnce() -> Error,
    {
        match value {
            Some(value) => Outcome::Success(value),
            None => Outcome::Fail(error()),
        }
    }

    /// Run `f`, capturing a panic as an unexpected error.
    ///
    /// A `Fail` returned by `f` is passed through as it is.
    ///
    /// Capturing does not silence the panic hook: the default hook still
    /// prints `thread '...' panicked at ...` to stderr before the panic is
    /// turned into a [`PanicFault`]. Install a custom hook with
    /// [`std::panic::set_hook`] if that output is unwanted.
    pub fn try_catch<F>(f: F) -> Self
    where
        F: FnOnce() -> Outcome<T>,
    {
        catch_panic(f).unwrap_or_else(captured)
    }

    /// Suspending twin of [`try_catch`](Outcome::try_catch).
    ///
    /// Captures panics raised while building the future as well as those
    /// raised while it is polled. As with `try_catch`, the panic hook still
    /// runs and reports each captured panic on stderr.
    pub async fn try_async<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        let future = match catch_panic(f) {
            Ok(future) => future,
            Err(fault) => return captured(fault),
        };
        catch_panic_async(future).await.unwrap_or_else(captured)
    }

    /// View an arbitrary union as an outcome.
    ///
    /// Only unions whose left type is [`Error`] convert; any other left type is
    /// rejected whichever branch is populated.
    pub fn try_from_either<L>(either: Either<L, T>) -> Result<Self, ConversionError>
    where
        L: 'static,
    {
        let invalid = || ConversionError::InvalidLeftType {
            left_type: std::any::type_name::<L>(),
        };
        if TypeId::of::<L>() != TypeId::of::<Error>() {
            debug!(
                left_type = std::any::type_name::<L>(),
                "rejected union conversion"
            );
            return Err(invalid());
        }

        match either {
            Either::Right(value) => Ok(Outcome::Success(value)),
            Either::Left(value) => {
                let value: Box<dyn Any> = Box::new(value);
                value
                    .downcast::<Error>()
                    .map(|error| Outcome::Fail(*error))
                    .map_err(|_| invalid())
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    /// Success payload, or `None` on `Fail`
    pub fn success_value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Fail(_) => None,
        }
    }

    /// Error payload, or `None` on `Success`
    pub fn error_value(&self) -> Option<&Error> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Fail(error) => Some(error),
        }
    }

    pub fn into_success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Fail(_) => None,
        }
    }

    pub fn into_error(self) -> Option<Error> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Fail(error) => Some(error),
        }
    }

    pub fn into_either(self) -> Either<Error, T> {
        self.into()
    }

    pub fn into_result(self) -> Result<T, Error> {
        self.into()
    }

    /// Run exactly one of the two functions, depending on the branch
    pub fn match_with<U, FF, FS>(self, on_fail: FF, on_success: FS) -> U
    where
        FF: FnOnce(Error) -> U,
        FS: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Fail(error) => on_fail(error),
        }
    }

    /// Transform the success payload; `f` is never called on `Fail`
    pub fn map<O, F>(self, f: F) -> Outcome<O>
    where
        F: FnOnce(T) -> O,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Transform the error; `f` is never called on `Success`
    pub fn map_err<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Fail(error) => Outcome::Fail(f(error)),
        }
    }

    /// Chain a step that itself may fail; `f` is never called on `Fail`
    pub fn bind<O, F>(self, f: F) -> Outcome<O>
    where
        F: FnOnce(T) -> Outcome<O>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Transform both branches, e.g. to recover from a failure or rewrite its
    /// error
    pub fn apply<O, FF, FS>(self, on_fail: FF, on_success: FS) -> Outcome<O>
    where
        FF: FnOnce(Error) -> Outcome<O>,
        FS: FnOnce(T) -> Outcome<O>,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Fail(error) => on_fail(error),
        }
    }

    /// Hand the whole outcome to `f` and continue with its result
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self)
    }

    /// Hand the whole outcome to `f` and return whatever it builds
    pub fn transform<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Fail(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Fail(error) => f(error),
        }
    }
}

fn captured<T>(fault: PanicFault) -> Outcome<T> {
    Outcome::Fail(Error::from_fault(fault))
}

impl<T> From<Either<Error, T>> for Outcome<T> {
    fn from(either: Either<Error, T>) -> Self {
        match either {
            Either::Left(error) => Outcome::Fail(error),
            Either::Right(value) => Outcome::Success(value),
        }
    }
}

impl<T> From<Outcome<T>> for Either<Error, T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Either::Right(value),
            Outcome::Fail(error) => Either::Left(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Error>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Fail(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Fail(error) => Err(error),
        }
    }
}
