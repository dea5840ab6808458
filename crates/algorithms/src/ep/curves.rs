//! Named prime curves

use relic_params::curves::{
    b12_p377 as p377, b12_p381 as p381, b24_p315 as p315, b48_p378 as p378, bn_p254 as p254, k16_p361 as p361,
    k18_p372 as p372, nist_p256 as p256, secg_k256 as k256, ss_p383 as p383,
};

use super::{EpCurve, MapConst};
use crate::bn::Bn;
use crate::error::Result;
use crate::fp::{Bls315, Bls377, Bls378, Bls381, Bn254, Fp, FpParams, Kss361, Kss372, Limbs, NistP256, SecgK256, Ss383};

#[inline]
fn fp<P: FpParams>(limbs: &Limbs) -> Result<Fp<P>> {
    Fp::from_limbs(limbs)
}

/// The seed z of a pairing-friendly family as a signed integer
pub(crate) fn seed(abs: u64, neg: bool) -> Bn {
    let z = Bn::from_dig(abs);
    if neg {
        z.neg()
    } else {
        z
    }
}

/// NIST P-256, hashing through SSWU with Z = -10
#[tracing::instrument(level = "debug")]
pub fn nist_p256() -> Result<EpCurve<Fp<NistP256>>> {
    let a = Fp::from_dis(p256::A);
    let b = fp(&p256::B)?;
    let map = MapConst::sswu(&a, &b, Fp::from_dis(p256::SSWU_Z))?;
    EpCurve::new(
        "NIST-P256",
        a,
        b,
        fp(&p256::G_X)?,
        fp(&p256::G_Y)?,
        Bn::from_limbs(&p256::N),
        Bn::one(),
    )?
    .with_map(map)
    .with_fix()
}

/// secp256k1 with its GLV endomorphism
#[tracing::instrument(level = "debug")]
pub fn secg_k256() -> Result<EpCurve<Fp<SecgK256>>> {
    EpCurve::new(
        "SECG-K256",
        Fp::zero(),
        Fp::from_dis(k256::B),
        fp(&k256::G_X)?,
        fp(&k256::G_Y)?,
        Bn::from_limbs(&k256::N),
        Bn::one(),
    )?
    .with_endo(fp(&k256::BETA)?, Bn::from_limbs(&k256::LAMBDA))?
    .with_fix()
}

/// G1 of the BN curve over the 254-bit Nogami prime
#[tracing::instrument(level = "debug")]
pub fn bn_p254() -> Result<EpCurve<Fp<Bn254>>> {
    EpCurve::new(
        "BN-P254",
        Fp::zero(),
        Fp::from_dis(p254::B),
        fp(&p254::G1_X)?,
        fp(&p254::G1_Y)?,
        Bn::from_limbs(&p254::R),
        Bn::from_limbs(&p254::H),
    )?
    .with_endo(fp(&p254::BETA)?, Bn::from_limbs(&p254::LAMBDA))?
    .with_fix()
}

/// G1 of BLS12-381, clearing the cofactor with 1 - z
#[tracing::instrument(level = "debug")]
pub fn b12_p381() -> Result<EpCurve<Fp<Bls381>>> {
    let h_eff = Bn::one().sub(&seed(p381::Z_ABS, p381::Z_NEG))?;
    Ok(EpCurve::new(
        "B12-P381",
        Fp::zero(),
        Fp::from_dis(p381::B),
        fp(&p381::G1_X)?,
        fp(&p381::G1_Y)?,
        Bn::from_limbs(&p381::R),
        Bn::from_limbs(&p381::H),
    )?
    .with_endo(fp(&p381::BETA)?, Bn::from_limbs(&p381::LAMBDA))?
    .with_h_eff(h_eff)
    .with_fix()?)
}

/// G1 of BLS12-377, clearing the cofactor with 1 - z
#[tracing::instrument(level = "debug")]
pub fn b12_p377() -> Result<EpCurve<Fp<Bls377>>> {
    let h_eff = Bn::one().sub(&seed(p377::Z_ABS, p377::Z_NEG))?;
    Ok(EpCurve::new(
        "B12-P377",
        Fp::zero(),
        Fp::from_dis(p377::B),
        fp(&p377::G1_X)?,
        fp(&p377::G1_Y)?,
        Bn::from_limbs(&p377::R),
        Bn::from_limbs(&p377::H),
    )?
    .with_endo(fp(&p377::BETA)?, Bn::from_limbs(&p377::LAMBDA))?
    .with_h_eff(h_eff)
    .with_fix()?)
}

/// G1 of the BLS24 curve over a 315-bit prime
#[tracing::instrument(level = "debug")]
pub fn b24_p315() -> Result<EpCurve<Fp<Bls315>>> {
    EpCurve::new(
        "B24-P315",
        Fp::zero(),
        Fp::from_dis(p315::B),
        fp(&p315::G1_X)?,
        fp(&p315::G1_Y)?,
        Bn::from_limbs(&p315::R),
        Bn::from_limbs(&p315::H),
    )?
    .with_endo(fp(&p315::BETA)?, Bn::from_limbs(&p315::LAMBDA))?
    .with_fix()
}

/// G1 of the BLS48 curve over a 378-bit prime
#[tracing::instrument(level = "debug")]
pub fn b48_p378() -> Result<EpCurve<Fp<Bls378>>> {
    EpCurve::new(
        "B48-P378",
        Fp::zero(),
        Fp::from_dis(p378::B),
        fp(&p378::G1_X)?,
        fp(&p378::G1_Y)?,
        Bn::from_limbs(&p378::R),
        Bn::from_limbs(&p378::H),
    )?
    .with_endo(fp(&p378::BETA)?, Bn::from_limbs(&p378::LAMBDA))?
    .with_fix()
}

/// G1 of the KSS18 curve over a 372-bit prime
#[tracing::instrument(level = "debug")]
pub fn k18_p372() -> Result<EpCurve<Fp<Kss372>>> {
    EpCurve::new(
        "K18-P372",
        Fp::zero(),
        Fp::from_dis(p372::B),
        fp(&p372::G1_X)?,
        fp(&p372::G1_Y)?,
        Bn::from_limbs(&p372::R),
        Bn::from_limbs(&p372::H),
    )?
    .with_endo(fp(&p372::BETA)?, Bn::from_limbs(&p372::LAMBDA))?
    .with_fix()
}

/// G1 of the KSS16 curve y^2 = x^3 + 10x over a 361-bit prime
#[tracing::instrument(level = "debug")]
pub fn k16_p361() -> Result<EpCurve<Fp<Kss361>>> {
    EpCurve::new(
        "K16-P361",
        Fp::from_dis(p361::A),
        Fp::zero(),
        fp(&p361::G1_X)?,
        fp(&p361::G1_Y)?,
        Bn::from_limbs(&p361::R),
        Bn::from_limbs(&p361::H),
    )?
    .with_fix()
}

/// The supersingular curve y^2 = x^3 + x over a 383-bit prime
#[tracing::instrument(level = "debug")]
pub fn ss_p383() -> Result<EpCurve<Fp<Ss383>>> {
    EpCurve::new(
        "SS-P383",
        Fp::from_dis(p383::A),
        Fp::zero(),
        fp(&p383::G1_X)?,
        fp(&p383::G1_Y)?,
        Bn::from_limbs(&p383::R),
        Bn::from_limbs(&p383::H),
    )?
    .with_fix()
}
