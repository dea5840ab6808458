//! Error handling for the arithmetic engine
//!
//! The engine shares the error vocabulary of `relic-api`. Every fallible
//! operation returns [`Result`]; an enclosing layer re-raises with
//! [`ResultExt::caught`] and cleanup happens when temporaries go out of scope.

pub use relic_api::error::{Error, ErrorKind, Result, ResultExt};

pub mod validate;

/// Shorthand for an invalid-input error
#[inline]
pub(crate) const fn no_valid(context: &'static str) -> Error {
    Error::NoValid { context }
}

/// Shorthand for a capacity error
#[inline]
pub(crate) const fn no_memory(context: &'static str) -> Error {
    Error::NoMemory { context }
}
