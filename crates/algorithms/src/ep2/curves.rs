//! Named twists

use relic_params::curves::{b12_p377 as p377, b12_p381 as p381, bn_p254 as p254};

use super::{twist_b, Ep2, Family, Twist};
use crate::bn::Bn;
use crate::ep::{seed, EpCurve};
use crate::error::Result;
use crate::field::Field;
use crate::fp::{Bls377, Bls381, Bn254, Fp, FpParams, Limbs};
use crate::fpx::Fp2;

fn fp2<P: FpParams>(c0: &Limbs, c1: &Limbs) -> Result<Fp2<P>> {
    Ok(Fp2::new(Fp::from_limbs(c0)?, Fp::from_limbs(c1)?))
}

/// #E'(Fp2) / r for a BLS12 seed: (z^8 - 4z^7 + 5z^6 - 4z^4 + 6z^3 - 4z^2 - 4z + 13) / 9
pub(crate) fn b12_cofactor(z: &Bn) -> Result<Bn> {
    const COEFFS: [i64; 9] = [1, -4, 5, 0, -4, 6, -4, -4, 13];
    let mut acc = Bn::zero();
    for c in COEFFS {
        acc = acc.mul(z)?.add(&Bn::from_i64(c))?;
    }
    acc.div_dig(9)
}

/// #E'(Fp2) / r for a BN curve: 2p - r
fn bn_cofactor<P: FpParams>(r: &Bn) -> Result<Bn> {
    Fp::<P>::modulus().dbl()?.sub(r)
}

struct TwistParams<'a> {
    name: &'static str,
    b: i64,
    x: (&'a Limbs, &'a Limbs),
    y: (&'a Limbs, &'a Limbs),
    r: &'a Limbs,
}

fn build<P: FpParams>(t: TwistParams<'_>, twist: Twist, family: Family, z: Bn) -> Result<Ep2<P>> {
    let r = Bn::from_limbs(t.r);
    let h = match family {
        Family::Bn => bn_cofactor::<P>(&r)?,
        _ => b12_cofactor(&z)?,
    };
    let curve = EpCurve::new(
        t.name,
        Fp2::zero(),
        twist_b(&Fp::from_dis(t.b), twist)?,
        fp2(t.x.0, t.x.1)?,
        fp2(t.y.0, t.y.1)?,
        r,
        h,
    )?;
    Ep2::new(curve, twist, family, z)?.with_fix()
}

const fn twist_of(m: bool) -> Twist {
    if m {
        Twist::M
    } else {
        Twist::D
    }
}

/// G2 of the BN curve over the 254-bit Nogami prime
#[tracing::instrument(level = "debug")]
pub fn bn_p254() -> Result<Ep2<Bn254>> {
    let t = TwistParams {
        name: "BN-P254-G2",
        b: p254::B,
        x: (&p254::G2_X0, &p254::G2_X1),
        y: (&p254::G2_Y0, &p254::G2_Y1),
        r: &p254::R,
    };
    build(t, twist_of(p254::TWIST_M), Family::Bn, seed(p254::Z_ABS, p254::Z_NEG))
}

/// G2 of BLS12-381
#[tracing::instrument(level = "debug")]
pub fn b12_p381() -> Result<Ep2<Bls381>> {
    let t = TwistParams {
        name: "B12-P381-G2",
        b: p381::B,
        x: (&p381::G2_X0, &p381::G2_X1),
        y: (&p381::G2_Y0, &p381::G2_Y1),
        r: &p381::R,
    };
    build(t, twist_of(p381::TWIST_M), Family::B12, seed(p381::Z_ABS, p381::Z_NEG))
}

/// G2 of BLS12-377
#[tracing::instrument(level = "debug")]
pub fn b12_p377() -> Result<Ep2<Bls377>> {
    let t = TwistParams {
        name: "B12-P377-G2",
        b: p377::B,
        x: (&p377::G2_X0, &p377::G2_X1),
        y: (&p377::G2_Y0, &p377::G2_Y1),
        r: &p377::R,
    };
    build(t, twist_of(p377::TWIST_M), Family::B12, seed(p377::Z_ABS, p377::Z_NEG))
}
