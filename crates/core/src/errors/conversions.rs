//! Conversion implementations for error types

use super::types::{AggregateFault, DynError, Error, Fault, PanicFault};

impl From<PanicFault> for Fault {
    fn from(fault: PanicFault) -> Self {
        Fault::new(fault)
    }
}

impl From<AggregateFault> for Fault {
    fn from(fault: AggregateFault) -> Self {
        Fault::new(fault)
    }
}

impl From<std::io::Error> for Fault {
    fn from(error: std::io::Error) -> Self {
        Fault::new(error)
    }
}

impl From<Box<DynError>> for Fault {
    fn from(error: Box<DynError>) -> Self {
        Fault::from_boxed(error)
    }
}

impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        Fault::from_anyhow(error)
    }
}

// Native errors reaching the combinator layer are faults, not domain failures
impl From<Fault> for Error {
    fn from(fault: Fault) -> Self {
        Error::from_fault(fault)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::from_fault(error)
    }
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::from_fault(error)
    }
}
