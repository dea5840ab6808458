//! Outermost error boundary
//!
//! Engine operations return [`Result`]. Callers that want the integer
//! status convention pass results through [`guard`], which records the
//! code of a failure in a per-thread slot. The slot keeps the first
//! failure until [`err_clear`] resets it.

use std::cell::Cell;

use crate::api::{ErrorKind, Result};

/// Status of a successful operation
pub const RLC_OK: i32 = 0;

/// Status of a failed operation
pub const RLC_ERR: i32 = 1;

std::thread_local! {
    static LAST: Cell<Option<ErrorKind>> = const { Cell::new(None) };
}

/// Record a failed result in the slot of the current thread
pub fn guard<T>(result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        LAST.with(|slot| {
            if slot.get().is_none() {
                tracing::trace!(kind = e.kind().name(), context = e.context(), "error slot set");
                slot.set(Some(e.kind()));
            }
        });
    }
    result
}

/// [`RLC_ERR`] if a failure was recorded since the last clear
pub fn err_get_code() -> i32 {
    match err_get_kind() {
        Some(_) => RLC_ERR,
        None => RLC_OK,
    }
}

/// Code of the recorded failure
pub fn err_get_kind() -> Option<ErrorKind> {
    LAST.with(Cell::get)
}

/// Reset the slot
pub fn err_clear() {
    LAST.with(|slot| slot.set(None));
}
