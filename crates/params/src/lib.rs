//! Constant values for the relic library
//!
//! Multi-limb constants are stored as little-endian arrays of 64-bit limbs
//! in canonical (non-Montgomery) form.

#![no_std]

pub mod curves;
pub mod utils;
