//! Error handling for the relic engine

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, ErrorKind, Result};

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
