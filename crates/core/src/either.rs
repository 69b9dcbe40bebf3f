//! Generic two-branch union

use serde::{Deserialize, Serialize};

/// A value that is exactly one of a left payload `L` or a right payload `R`.
///
/// By convention `Right` carries the value a chain keeps working on and
/// `Left` carries whatever short-circuits it. [`map`](Either::map) and
/// [`bind`](Either::bind) only ever touch `Right`; [`apply`](Either::apply)
/// and [`match_with`](Either::match_with) handle both branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Left payload, or `None` on `Right`
    pub fn left_value(&self) -> Option<&L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    /// Right payload, or `None` on `Left`
    pub fn right_value(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Exchange the branches
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(value) => Either::Right(value),
            Either::Right(value) => Either::Left(value),
        }
    }

    /// Run exactly one of the two functions, depending on the branch
    pub fn match_with<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    /// Transform the right payload; `f` is never called on `Left`
    pub fn map<O, F>(self, f: F) -> Either<L, O>
    where
        F: FnOnce(R) -> O,
    {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(f(value)),
        }
    }

    /// Transform the left payload; `f` is never called on `Right`
    pub fn map_left<O, F>(self, f: F) -> Either<O, R>
    where
        F: FnOnce(L) -> O,
    {
        match self {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Chain a step that itself produces a union; `f` is never called on `Left`
    pub fn bind<O, F>(self, f: F) -> Either<L, O>
    where
        F: FnOnce(R) -> Either<L, O>,
    {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => f(value),
        }
    }

    /// Transform both branches, e.g. to recover from a `Left` or retype it
    pub fn apply<O, FL, FR>(self, on_left: FL, on_right: FR) -> Either<L, O>
    where
        FL: FnOnce(L) -> Either<L, O>,
        FR: FnOnce(R) -> Either<L, O>,
    {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    /// Hand the whole union to `f`, e.g. for a logging tap, and continue with
    /// its result
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self)
    }

    /// Hand the whole union to `f` and return whatever it builds
    pub fn transform<T, F>(self, f: F) -> T
    where
        F: FnOnce(Self) -> T,
    {
        f(self)
    }

    pub fn right_or(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(value) => value,
        }
    }

    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(value) => f(value),
            Either::Right(value) => value,
        }
    }
}

impl<L, R> From<std::result::Result<R, L>> for Either<L, R> {
    fn from(result: std::result::Result<R, L>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(value) => Either::Left(value),
        }
    }
}

impl<L, R> From<Either<L, R>> for std::result::Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
