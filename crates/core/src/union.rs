//! The two-branch abstraction shared by [`Either`] and [`Outcome`]
//!
//! Every combinator that works on "some union" is written once against
//! [`Union`]: the suspension-aware twins in [`UnionExt`], the steps over
//! pending unions in [`crate::pending`], and the batch combinators in
//! [`crate::batch`].

use std::future::Future;

use crate::either::Either;
use crate::errors::Error;
use crate::outcome::Outcome;

/// A two-branch union that can be viewed as an [`Either`] without loss.
pub trait Union: Sized {
    /// Payload of the short-circuiting branch
    type Left;
    /// Payload of the branch combinators transform
    type Right;
    /// The same union shape with a different right payload
    type Rebind<O>: Union<Left = Self::Left, Right = O>;

    fn from_either(either: Either<Self::Left, Self::Right>) -> Self;

    fn into_either(self) -> Either<Self::Left, Self::Right>;
}

/// Right payload of a union
pub type RightOf<U> = <U as Union>::Right;

/// Left payload of a union
pub type LeftOf<U> = <U as Union>::Left;

/// `U` with its right payload replaced by `O`
pub type Rebound<U, O> = <U as Union>::Rebind<O>;

impl<L, R> Union for Either<L, R> {
    type Left = L;
    type Right = R;
    type Rebind<O> = Either<L, O>;

    fn from_either(either: Either<L, R>) -> Self {
        either
    }

    fn into_either(self) -> Either<L, R> {
        self
    }
}

impl<T> Union for Outcome<T> {
    type Left = Error;
    type Right = T;
    type Rebind<O> = Outcome<O>;

    fn from_either(either: Either<Error, T>) -> Self {
        either.into()
    }

    fn into_either(self) -> Either<Error, T> {
        self.into()
    }
}

pub(crate) fn left<U, O>(value: LeftOf<U>) -> Rebound<U, O>
where
    U: Union,
{
    <Rebound<U, O> as Union>::from_either(Either::Left(value))
}

pub(crate) fn right<U, O>(value: O) -> Rebound<U, O>
where
    U: Union,
{
    <Rebound<U, O> as Union>::from_either(Either::Right(value))
}

pub(crate) fn map<U, O, F>(union: U, f: F) -> Rebound<U, O>
where
    U: Union,
    F: FnOnce(RightOf<U>) -> O,
{
    match union.into_either() {
        Either::Left(value) => left::<U, O>(value),
        Either::Right(value) => right::<U, O>(f(value)),
    }
}

pub(crate) fn bind<U, O, F>(union: U, f: F) -> Rebound<U, O>
where
    U: Union,
    F: FnOnce(RightOf<U>) -> Rebound<U, O>,
{
    match union.into_either() {
        Either::Left(value) => left::<U, O>(value),
        Either::Right(value) => f(value),
    }
}

pub(crate) fn apply<U, O, FL, FR>(union: U, on_left: FL, on_right: FR) -> Rebound<U, O>
where
    U: Union,
    FL: FnOnce(LeftOf<U>) -> Rebound<U, O>,
    FR: FnOnce(RightOf<U>) -> Rebound<U, O>,
{
    match union.into_either() {
        Either::Left(value) => on_left(value),
        Either::Right(value) => on_right(value),
    }
}

pub(crate) fn match_with<U, T, FL, FR>(union: U, on_left: FL, on_right: FR) -> T
where
    U: Union,
    FL: FnOnce(LeftOf<U>) -> T,
    FR: FnOnce(RightOf<U>) -> T,
{
    union.into_either().match_with(on_left, on_right)
}

/// Suspension-aware twins of the union combinators.
///
/// Each method has the contract of its synchronous counterpart, except that
/// the supplied function returns a future. The future is awaited only on the
/// branch the synchronous combinator would have called the function on.
pub trait UnionExt: Union {
    fn map_async<O, F, Fut>(self, f: F) -> impl Future<Output = Rebound<Self, O>>
    where
        F: FnOnce(Self::Right) -> Fut,
        Fut: Future<Output = O>,
    {
        async move {
            match self.into_either() {
                Either::Left(value) => left::<Self, O>(value),
                Either::Right(value) => right::<Self, O>(f(value).await),
            }
        }
    }

    fn bind_async<O, F, Fut>(self, f: F) -> impl Future<Output = Rebound<Self, O>>
    where
        F: FnOnce(Self::Right) -> Fut,
        Fut: Future<Output = Rebound<Self, O>>,
    {
        async move {
            match self.into_either() {
                Either::Left(value) => left::<Self, O>(value),
                Either::Right(value) => f(value).await,
            }
        }
    }

    fn apply_async<O, FL, FR, FutL, FutR>(
        self,
        on_left: FL,
        on_right: FR,
    ) -> impl Future<Output = Rebound<Self, O>>
    where
        FL: FnOnce(Self::Left) -> FutL,
        FR: FnOnce(Self::Right) -> FutR,
        FutL: Future<Output = Rebound<Self, O>>,
        FutR: Future<Output = Rebound<Self, O>>,
    {
        async move {
            match self.into_either() {
                Either::Left(value) => on_left(value).await,
                Either::Right(value) => on_right(value).await,
            }
        }
    }

    fn match_async<T, FL, FR, FutL, FutR>(
        self,
        on_left: FL,
        on_right: FR,
    ) -> impl Future<Output = T>
    where
        FL: FnOnce(Self::Left) -> FutL,
        FR: FnOnce(Self::Right) -> FutR,
        FutL: Future<Output = T>,
        FutR: Future<Output = T>,
    {
        async move {
            match self.into_either() {
                Either::Left(value) => on_left(value).await,
                Either::Right(value) => on_right(value).await,
            }
        }
    }

    fn tap_async<F, Fut>(self, f: F) -> impl Future<Output = Self>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Self>,
    {
        f(self)
    }

    fn transform_async<T, F, Fut>(self, f: F) -> impl Future<Output = T>
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = T>,
    {
        f(self)
    }
}

impl<U: Union> UnionExt for U {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_outcome_views_as_either() {
        let outcome = Outcome::success(5);
        assert_eq!(outcome.clone().into_either(), Either::Right(5));
        let rebuilt = <Outcome<i32> as Union>::from_either(Either::Right(5));
        assert_eq!(rebuilt, outcome);
    }

    #[test]
    fn test_generic_helpers_follow_union_shape() {
        let mapped: Outcome<String> = map(Outcome::success(2), |v| v.to_string());
        assert_eq!(mapped, Outcome::Success("2".to_string()));

        let start: Either<&str, i32> = Either::right(2);
        let bound = bind(start, |v| Either::right(v * 3));
        assert_eq!(bound, Either::Right(6));
    }

    #[tokio::test]
    async fn test_map_async_skips_left() {
        let calls = Cell::new(0);
        let result = Either::<&str, i32>::left("stop")
            .map_async(|v| {
                calls.set(calls.get() + 1);
                async move { v + 1 }
            })
            .await;
        assert_eq!(result, Either::Left("stop"));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_bind_async_on_outcome() {
        let result = Outcome::success(4)
            .bind_async(|v: i32| async move {
                tokio::task::yield_now().await;
                Outcome::success(v * 2)
            })
            .await;
        assert_eq!(result, Outcome::Success(8));
    }

    #[tokio::test]
    async fn test_apply_async_recovers() {
        let result = Outcome::<i32>::fail(Error::new("cache miss"))
            .apply_async(
                |_error| async { Outcome::success(0) },
                |v| async move { Outcome::success(v) },
            )
            .await;
        assert_eq!(result, Outcome::Success(0));
    }

    #[tokio::test]
    async fn test_match_async_and_transform_async() {
        let rendered = Outcome::success(3)
            .match_async(
                |e: Error| async move { format!("error: {e}") },
                |v: i32| async move { format!("value: {v}") },
            )
            .await;
        assert_eq!(rendered, "value: 3");

        let status = Outcome::<i32>::fail(Error::new("nope"))
            .transform_async(|o| async move { o.match_with(|_| 500, |_| 200) })
            .await;
        assert_eq!(status, 500);
    }
}
