//! Internal utilities for the relic library
//!
//! Masking primitives over digit vectors and big-endian digit codecs. Nothing
//! here branches on the values it is given.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{dv_cmp_const, dv_copy_cond, dv_swap_cond, dv_zero_cond};
