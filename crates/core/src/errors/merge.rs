//! Merge algebra of the error model
//!
//! Errors form a monoid under [`Error::merge`]: the zero-child collection is
//! the identity, and merging is associative. It is not commutative, since
//! children keep the order in which they were merged. Collections are
//! spliced, never nested.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use super::types::{Error, ErrorCollection};

impl Error {
    /// Merge two errors into a flat collection.
    ///
    /// Returns `right` when `left` has no atoms and `left` when `right` has
    /// none.
    #[must_use]
    pub fn merge(left: Error, right: Error) -> Error {
        if left.count() == 0 {
            return right;
        }
        if right.count() == 0 {
            return left;
        }

        let mut children = Vec::with_capacity(left.count() + right.count());
        children.extend(left);
        children.extend(right);
        Error::Collection(ErrorCollection(children))
    }

    /// Merge every error of `errors` in order, starting from the identity
    #[must_use]
    pub fn merge_all<I>(errors: I) -> Error
    where
        I: IntoIterator<Item = Error>,
    {
        errors.into_iter().fold(Error::empty(), Error::merge)
    }
}

impl Add for Error {
    type Output = Error;

    fn add(self, rhs: Error) -> Error {
        Error::merge(self, rhs)
    }
}

/// A missing side is ignored.
impl Add<Option<Error>> for Error {
    type Output = Error;

    fn add(self, rhs: Option<Error>) -> Error {
        match rhs {
            Some(rhs) => Error::merge(self, rhs),
            None => self,
        }
    }
}

/// A missing side is ignored.
impl Add<Error> for Option<Error> {
    type Output = Error;

    fn add(self, rhs: Error) -> Error {
        match self {
            Some(lhs) => Error::merge(lhs, rhs),
            None => rhs,
        }
    }
}

impl AddAssign for Error {
    fn add_assign(&mut self, rhs: Error) {
        let lhs = std::mem::replace(self, Error::empty());
        *self = Error::merge(lhs, rhs);
    }
}

impl Sum for Error {
    fn sum<I: Iterator<Item = Error>>(iter: I) -> Error {
        Error::merge_all(iter)
    }
}

impl FromIterator<Error> for Error {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Error {
        Error::merge_all(iter)
    }
}
