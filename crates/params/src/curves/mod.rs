//! Parameters of the named curves
//!
//! Pairing-friendly curves carry the family seed, the tower non-residues
//! and the twist type next to the usual curve constants.

pub mod b12_p377;
pub mod b12_p381;
pub mod b24_p315;
pub mod b48_p378;
pub mod bn_p254;
pub mod ed25519;
pub mod k16_p361;
pub mod k18_p372;
pub mod nist_b283;
pub mod nist_p256;
pub mod secg_k256;
pub mod ss_p383;
