//! Prelude module for convenient imports

pub use crate::batch::{sequence, sequence_async, traverse, traverse_async};
pub use crate::either::Either;
pub use crate::errors::{Error, ErrorKind, Errors, Fault};
pub use crate::outcome::{Outcome, SResult};
pub use crate::pending::PendingUnion;
pub use crate::union::{Union, UnionExt};
