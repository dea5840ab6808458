//! Arithmetic engine of the relic library
//!
//! Multi-precision integers, prime and binary fields, extension towers,
//! elliptic curves over all of them, and bilinear pairings on the BN, BLS12,
//! BLS24, BLS48, KSS16 and KSS18 families and a supersingular k = 2 curve.
//! Layers build strictly upwards:
//!
//! - [`bn`]: signed integers on 64-bit digits, modular arithmetic, primes
//!   and scalar recodings
//! - [`fp`] and [`fpx`]: prime fields in Montgomery form and the towers
//!   Fp2 up to Fp54
//! - [`ec`]: the group-generic multipliers shared by [`ep`], [`ep2`],
//!   [`epx`], [`ed`] and [`fb`]
//! - [`pp`] and [`ppx`]: pairings with k = 12 and with the other embedding
//!   degrees
//! - [`pc`]: the pairing context over either engine
//!
//! Algorithm variants are picked at compile time in [`config`]. Secret
//! dependent operations go through `subtle` selections, and secret
//! integers are zeroized on drop.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod config;
pub mod error;
pub use error::{Error, ErrorKind, Result, ResultExt};

pub mod field;
pub use field::Field;

// Integers and fields
pub mod bn;
pub mod fb;
pub mod fp;
pub mod fpx;
pub mod md;
pub use bn::{Bn, Dig, Sign};
pub use fb::Fb;
pub use fp::{Fp, FpParams};
pub use fpx::{Cyclotomic, Fp12, Fp2, Fp6, Subfield, Tower};

// Curves
pub mod ec;
pub mod ed;
pub mod ep;
pub mod ep2;
pub mod epx;
pub use ec::CurveGroup;
pub use ed::{EdCurve, EdPoint};
pub use ep::{EpCurve, EpPoint};
pub use ep2::{Ep2, Ep2Point};
pub use epx::EpX;
pub use fb::{FbCurve, FbPoint};

// Pairings
pub mod pc;
pub mod pp;
pub mod ppx;
pub use pc::{Engine, Pc};
pub use pp::Pairing;
pub use ppx::PairingX;
