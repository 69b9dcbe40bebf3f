//! Composable outcomes for computations that may fail.
//!
//! This crate represents failure as data instead of control flow, and gives
//! application code a small set of combinators to thread such values through
//! a computation.
//!
//! ## Key Components
//!
//! - **`either`**: [`Either`], a generic two-branch union. Combinators only
//!   transform `Right`; `Left` short-circuits.
//! - **`outcome`**: [`Outcome`], a success/error union whose failure branch
//!   is the crate's [`Error`]. Converts to and from `Either<Error, T>` without loss.
//! - **`errors`**: the error model: expected failures, unexpected faults and
//!   flat collections merged with `+`.
//! - **`union`** and **`pending`**: the suspension-aware twins of every
//!   combinator, and the same combinators on futures of unions so chains can
//!   mix ready and suspending steps.
//! - **`batch`**: fail-fast `sequence` and `traverse`.
//!
//! Expected failures are data; programmer errors (such as converting a union
//! whose left side is not an [`Error`]) are reported through ordinary
//! `Result`s and never encoded as a failed outcome.

pub mod batch;
mod capture;
pub mod constants;
pub mod either;
pub mod errors;
pub mod outcome;
pub mod pending;
pub mod prelude;
#[cfg(test)]
mod testing;
pub mod union;

pub use self::{
    batch::{sequence, sequence_async, traverse, traverse_async},
    either::Either,
    errors::{ConversionError, Error, ErrorKind, ErrorReport, Errors, Fault, PanicFault},
    outcome::{Outcome, SResult},
    pending::PendingUnion,
    union::{Union, UnionExt},
};
