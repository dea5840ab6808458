//! # relic
//!
//! Pure Rust arithmetic for pairing-based and elliptic-curve cryptography:
//! multi-precision integers, prime and binary fields, extension towers,
//! elliptic curves and bilinear pairings on the BN, BLS12, BLS24, BLS48,
//! KSS16 and KSS18 families and a supersingular k = 2 curve.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! relic = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support and the [`core`] error slot
//! - `serde`: serde derives on error codes and configuration enums
//! - `fp-inv-*`, `ep-*`, `pp-*`: algorithm selection, forwarded to the engine
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`relic-algorithms`]: the engine (integers, fields, curves, pairings)
//! - [`relic-api`]: error vocabulary and the byte codec trait
//! - [`relic-internal`]: masking primitives over digit vectors
//! - [`relic-params`]: constants of the named curves

#![cfg_attr(not(feature = "std"), no_std)]

pub use relic_algorithms as algorithms;
pub use relic_api as api;
pub use relic_internal as internal;
pub use relic_params as params;

#[cfg(feature = "std")]
pub mod core;

/// Common imports for relic users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt};

    // Re-export core traits
    pub use crate::algorithms::{CurveGroup, Cyclotomic, Engine, Field};
    pub use crate::api::Serialize;

    // Engine types
    pub use crate::algorithms::{Bn, Fb, Fp, Fp12, Fp2, Fp6, FpParams, Sign, Tower};
    pub use crate::algorithms::{EdCurve, EdPoint, EpCurve, EpPoint, Ep2, Ep2Point, EpX, FbCurve, FbPoint};
    pub use crate::algorithms::{Pairing, PairingX, Pc};
}
