//! Fail-fast batch combinators over collections of unions
//!
//! Elements are consumed strictly in source order and consumption stops at
//! the first `Left`/`Fail`, which becomes the result of the whole batch.
//! Later elements are never pulled from the iterator, so their evaluation is
//! skipped. The suspending variants await one element at a time; they never
//! poll two elements concurrently.

use std::future::Future;

use tracing::trace;

use crate::either::Either;
use crate::outcome::Outcome;
use crate::union::{self, Rebound, RightOf, Union};

/// Collect the right payloads of `items`, or return the first left.
pub fn sequence<I, U>(items: I) -> Rebound<U, Vec<RightOf<U>>>
where
    I: IntoIterator<Item = U>,
    U: Union,
{
    traverse(items, |item| item)
}

/// Map every element to a union and sequence the results in one pass.
pub fn traverse<I, T, U, F>(items: I, mut f: F) -> Rebound<U, Vec<RightOf<U>>>
where
    I: IntoIterator<Item = T>,
    U: Union,
    F: FnMut(T) -> U,
{
    let items = items.into_iter();
    let mut values = Vec::with_capacity(items.size_hint().0);
    for (index, item) in items.enumerate() {
        match f(item).into_either() {
            Either::Right(value) => values.push(value),
            Either::Left(value) => {
                trace!(index, "batch stopped at first failure");
                return union::left::<U, Vec<RightOf<U>>>(value);
            }
        }
    }
    union::right::<U, _>(values)
}

/// Suspending twin of [`sequence`]: awaits each pending union in order.
pub async fn sequence_async<I, Fut, U>(items: I) -> Rebound<U, Vec<RightOf<U>>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = U>,
    U: Union,
{
    traverse_async(items, |item| item).await
}

/// Suspending twin of [`traverse`]: `f` is called and its future awaited
/// for one element before the next element is pulled.
pub async fn traverse_async<I, T, U, F, Fut>(items: I, mut f: F) -> Rebound<U, Vec<RightOf<U>>>
where
    I: IntoIterator<Item = T>,
    U: Union,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = U>,
{
    let items = items.into_iter();
    let mut values = Vec::with_capacity(items.size_hint().0);
    for (index, item) in items.enumerate() {
        match f(item).await.into_either() {
            Either::Right(value) => values.push(value),
            Either::Left(value) => {
                trace!(index, "batch stopped at first failure");
                return union::left::<U, Vec<RightOf<U>>>(value);
            }
        }
    }
    union::right::<U, _>(values)
}

impl<L, R, C> FromIterator<Either<L, R>> for Either<L, C>
where
    C: FromIterator<R>,
{
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: C = iter
            .into_iter()
            .map_while(|item| match item {
                Either::Right(value) => Some(value),
                Either::Left(value) => {
                    failure = Some(value);
                    None
                }
            })
            .collect();
        match failure {
            Some(value) => Either::Left(value),
            None => Either::Right(collected),
        }
    }
}

impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_either)
            .collect::<Either<_, C>>()
            .into()
    }
}
