//! Error model for failed outcomes: expected, unexpected and merged collections

mod builders;
mod conversions;
mod inspect;
mod merge;
mod report;
mod types;

pub use builders::Errors;
pub use report::ErrorReport;
pub use types::{
    AggregateFault, ConversionError, DynError, Error, ErrorCollection, ErrorKind, Fault, PanicFault,
};
