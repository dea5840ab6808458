//! Public API types for the relic library
//!
//! This crate holds the pieces every other relic crate agrees on: the error
//! vocabulary of the engine and the byte-codec trait implemented by
//! integers, field elements and points.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

pub use error::{Error, ErrorKind, Result, ResultExt};
pub use traits::Serialize;
