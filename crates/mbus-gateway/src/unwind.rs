//! Containment of panics raised by caller-supplied code.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Runs `operation`, returning the panic message if it unwinds.
///
/// Callers only pass closures that borrow state immutably, so no invariant
/// can be left half-updated by an unwind.
pub(crate) fn contain<T>(operation: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(operation)).map_err(|payload| panic_message(&*payload))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
