//! Panic capture for `Outcome::try_catch` and `Outcome::try_async`

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt as _;
use tracing::debug;

use crate::constants::UNKNOWN_PANIC_MESSAGE;
use crate::errors::PanicFault;

/// Run `f`, turning a panic into a [`PanicFault`]
pub(crate) fn catch_panic<T, F>(f: F) -> Result<T, PanicFault>
where
    F: FnOnce() -> T,
{
    let f = AssertUnwindSafe(f);
    panic::catch_unwind(f).map_err(into_fault)
}

/// Drive `future` to completion, turning a panic raised while polling into a
/// [`PanicFault`]
pub(crate) async fn catch_panic_async<Fut>(future: Fut) -> Result<Fut::Output, PanicFault>
where
    Fut: Future,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(into_fault)
}

fn into_fault(payload: Box<dyn Any + Send>) -> PanicFault {
    let message = payload
        .downcast_ref::<&'static str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| UNKNOWN_PANIC_MESSAGE.to_string());
    debug!(%message, "captured panic");
    PanicFault { message }
}
