//! Build-time selection of algorithm variants
//!
//! Each layer exposes every variant as a public function; the constants here
//! decide which one the dispatching entry point (`Bn::mxp`, `Fp::inv`,
//! `EpCurve::mul`, `pp::map`, ...) calls. Cargo features override the
//! defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest `bn` magnitude, in digits
pub const BN_MAX_DIGS: usize = 128;

/// Width of the simultaneous exponentiation window
pub const BN_XPWDT: usize = 4;

/// Digits of every prime-field element
pub const FP_DIGS: usize = 6;

/// Window width of fixed-base and w-NAF point multiplication
pub const EP_WIDTH: usize = 4;

/// Precomputation depth of fixed-base tables
pub const EP_DEPTH: usize = 4;

/// Modular exponentiation method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BnMxp {
    /// Left-to-right binary
    Basic,
    /// Sliding window
    Slide,
    /// Montgomery ladder
    Monty,
}

/// Modular reduction method of `bn`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BnMod {
    /// Division remainder
    Basic,
    /// Barrett reduction
    Barrt,
    /// Montgomery reduction
    Monty,
}

/// Prime field inversion method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FpInv {
    /// Fermat's little theorem
    Basic,
    /// Binary extended Euclid
    Binar,
    /// Kaliski almost-inverse with Montgomery correction
    Monty,
    /// Extended Euclid on `bn`
    Exgcd,
    /// Bernstein-Yang divsteps
    Divst,
    /// Batched divsteps through transition matrices
    Jmpds,
}

/// Prime field reduction method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FpRdc {
    /// Schoolbook remainder
    Basic,
    /// Montgomery reduction
    Monty,
}

/// Extension field reduction strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FpxRdc {
    /// Reduce after every product
    Basic,
    /// Accumulate double-width products, reduce once
    Lazyr,
}

/// Point coordinate system used by curve arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EpAdd {
    /// Affine
    Basic,
    /// Homogeneous projective, complete formulas
    Projc,
    /// Jacobian
    Jacob,
}

/// Variable-base scalar multiplication method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EpMul {
    /// Double-and-add
    Basic,
    /// Sliding window
    Slide,
    /// Montgomery ladder
    Monty,
    /// Left-to-right w-NAF
    Lwnaf,
    /// Regular recoding
    Lwreg,
}

/// Fixed-base scalar multiplication method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EpFix {
    /// One point per bit
    Basic,
    /// Single-table comb
    Combs,
    /// Double-table comb
    Combd,
    /// w-NAF table
    Lwnaf,
}

/// Simultaneous scalar multiplication method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EpSim {
    /// Two independent multiplications
    Basic,
    /// Shamir's trick
    Trick,
    /// Interleaved w-NAF
    Inter,
    /// Joint sparse form
    Joint,
}

/// Pairing function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PpMap {
    /// Tate pairing
    Tatep,
    /// Weil pairing
    Weilp,
    /// Optimal ate pairing
    Oatep,
}

/// Mirrors `FpxRdc` for the pairing layer
pub type PpExt = FpxRdc;

/// Configured modular exponentiation
pub const BN_MXP: BnMxp = if cfg!(feature = "bn-mxp-basic") {
    BnMxp::Basic
} else if cfg!(feature = "bn-mxp-monty") {
    BnMxp::Monty
} else {
    BnMxp::Slide
};

/// Configured `bn` modular reduction
pub const BN_MOD: BnMod = if cfg!(feature = "bn-mod-basic") {
    BnMod::Basic
} else if cfg!(feature = "bn-mod-barrt") {
    BnMod::Barrt
} else {
    BnMod::Monty
};

/// Configured prime field inversion
pub const FP_INV: FpInv = if cfg!(feature = "fp-inv-binar") {
    FpInv::Binar
} else if cfg!(feature = "fp-inv-monty") {
    FpInv::Monty
} else if cfg!(feature = "fp-inv-exgcd") {
    FpInv::Exgcd
} else if cfg!(feature = "fp-inv-divst") {
    FpInv::Divst
} else if cfg!(feature = "fp-inv-jmpds") {
    FpInv::Jmpds
} else {
    FpInv::Basic
};

/// Configured prime field reduction
pub const FP_RDC: FpRdc = if cfg!(feature = "fp-rdc-basic") {
    FpRdc::Basic
} else {
    FpRdc::Monty
};

/// Configured extension field reduction
pub const FPX_RDC: FpxRdc = if cfg!(feature = "fpx-lazyr") {
    FpxRdc::Lazyr
} else {
    FpxRdc::Basic
};

/// Configured coordinate system
pub const EP_ADD: EpAdd = if cfg!(feature = "ep-basic") {
    EpAdd::Basic
} else if cfg!(feature = "ep-jacob") {
    EpAdd::Jacob
} else {
    EpAdd::Projc
};

/// Configured variable-base multiplication
pub const EP_MUL: EpMul = if cfg!(feature = "ep-mul-basic") {
    EpMul::Basic
} else if cfg!(feature = "ep-mul-slide") {
    EpMul::Slide
} else if cfg!(feature = "ep-mul-monty") {
    EpMul::Monty
} else if cfg!(feature = "ep-mul-lwreg") {
    EpMul::Lwreg
} else {
    EpMul::Lwnaf
};

/// Configured fixed-base multiplication
pub const EP_FIX: EpFix = if cfg!(feature = "ep-fix-basic") {
    EpFix::Basic
} else if cfg!(feature = "ep-fix-combd") {
    EpFix::Combd
} else if cfg!(feature = "ep-fix-lwnaf") {
    EpFix::Lwnaf
} else {
    EpFix::Combs
};

/// Configured simultaneous multiplication
pub const EP_SIM: EpSim = if cfg!(feature = "ep-sim-basic") {
    EpSim::Basic
} else if cfg!(feature = "ep-sim-trick") {
    EpSim::Trick
} else if cfg!(feature = "ep-sim-joint") {
    EpSim::Joint
} else {
    EpSim::Inter
};

/// Configured pairing
pub const PP_MAP: PpMap = if cfg!(feature = "pp-tatep") {
    PpMap::Tatep
} else if cfg!(feature = "pp-weilp") {
    PpMap::Weilp
} else {
    PpMap::Oatep
};

/// Configured pairing arithmetic
pub const PP_EXT: PpExt = if cfg!(feature = "pp-lazyr") {
    FpxRdc::Lazyr
} else {
    FPX_RDC
};
