//! Chaining combinators over pending unions
//!
//! Once a chain contains a suspending step, every later step receives a
//! future of a union rather than the union itself. [`PendingUnion`] lets
//! those steps be written exactly as on a ready value:
//!
//! ```
//! use outcome_core::prelude::*;
//!
//! # futures::executor::block_on(async {
//! let rendered = Outcome::success(42)
//!     .map(|x| x + 10)
//!     .bind_async(|x: i32| async move { Outcome::success(f64::from(x) * 1.5) })
//!     .map(|x: f64| format!("{x:.1}"))
//!     .await;
//! assert_eq!(rendered, Outcome::Success("78.0".to_string()));
//! # });
//! ```
//!
//! Each step awaits the previous future exactly once, when the step itself
//! runs, and steps run strictly in chain order. Nothing runs until the final
//! future is awaited.
//!
//! Importing both this trait and [`futures::FutureExt`] in the same scope makes
//! `map` ambiguous; call one of them with a qualified path in that case.

use std::future::Future;

use crate::union::{self, LeftOf, Rebound, RightOf, Union, UnionExt};

/// Union combinators available on any future resolving to a [`Union`].
pub trait PendingUnion<U: Union>: Future<Output = U> + Sized {
    fn map<O, F>(self, f: F) -> impl Future<Output = Rebound<U, O>>
    where
        F: FnOnce(RightOf<U>) -> O,
    {
        async move { union::map(self.await, f) }
    }

    fn map_async<O, F, Fut>(self, f: F) -> impl Future<Output = Rebound<U, O>>
    where
        F: FnOnce(RightOf<U>) -> Fut,
        Fut: Future<Output = O>,
    {
        async move { UnionExt::map_async(self.await, f).await }
    }

    fn bind<O, F>(self, f: F) -> impl Future<Output = Rebound<U, O>>
    where
        F: FnOnce(RightOf<U>) -> Rebound<U, O>,
    {
        async move { union::bind(self.await, f) }
    }

    fn bind_async<O, F, Fut>(self, f: F) -> impl Future<Output = Rebound<U, O>>
    where
        F: FnOnce(RightOf<U>) -> Fut,
        Fut: Future<Output = Rebound<U, O>>,
    {
        async move { UnionExt::bind_async(self.await, f).await }
    }

    fn apply<O, FL, FR>(self, on_left: FL, on_right: FR) -> impl Future<Output = Rebound<U, O>>
    where
        FL: FnOnce(LeftOf<U>) -> Rebound<U, O>,
        FR: FnOnce(RightOf<U>) -> Rebound<U, O>,
    {
        async move { union::apply(self.await, on_left, on_right) }
    }

    fn apply_async<O, FL, FR, FutL, FutR>(
        self,
        on_left: FL,
        on_right: FR,
    ) -> impl Future<Output = Rebound<U, O>>
    where
        FL: FnOnce(LeftOf<U>) -> FutL,
        FR: FnOnce(RightOf<U>) -> FutR,
        FutL: Future<Output = Rebound<U, O>>,
        FutR: Future<Output = Rebound<U, O>>,
    {
        async move { UnionExt::apply_async(self.await, on_left, on_right).await }
    }

    fn match_with<T, FL, FR>(self, on_left: FL, on_right: FR) -> impl Future<Output = T>
    where
        FL: FnOnce(LeftOf<U>) -> T,
        FR: FnOnce(RightOf<U>) -> T,
    {
        async move { union::match_with(self.await, on_left, on_right) }
    }

    fn match_async<T, FL, FR, FutL, FutR>(
        self,
        on_left: FL,
        on_right: FR,
    ) -> impl Future<Output = T>
    where
        FL: FnOnce(LeftOf<U>) -> FutL,
        FR: FnOnce(RightOf<U>) -> FutR,
        FutL: Future<Output = T>,
        FutR: Future<Output = T>,
    {
        async move { UnionExt::match_async(self.await, on_left, on_right).await }
    }

    fn tap<F>(self, f: F) -> impl Future<Output = U>
    where
        F: FnOnce(U) -> U,
    {
        async move { f(self.await) }
    }

    fn tap_async<F, Fut>(self, f: F) -> impl Future<Output = U>
    where
        F: FnOnce(U) -> Fut,
        Fut: Future<Output = U>,
    {
        async move { f(self.await).await }
    }

    fn transform<T, F>(self, f: F) -> impl Future<Output = T>
    where
        F: FnOnce(U) -> T,
    {
        async move { f(self.await) }
    }

    fn transform_async<T, F, Fut>(self, f: F) -> impl Future<Output = T>
    where
        F: FnOnce(U) -> Fut,
        Fut: Future<Output = T>,
    {
        async move { f(self.await).await }
    }
}

impl<U, P> PendingUnion<U> for P
where
    U: Union,
    P: Future<Output = U>,
{
}
