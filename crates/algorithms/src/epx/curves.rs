//! Named twists of the k = 2, 16, 18, 24 and 48 curves

use relic_params::curves::{b24_p315 as p315, b48_p378 as p378, k16_p361 as p361, k18_p372 as p372, ss_p383 as p383};

use super::{twist_coeffs, Ep3, Ep4, Ep8, EpX};
use crate::bn::{Bn, Dig};
use crate::ep::{seed, EpCurve};
use crate::ep2::{Family, Twist};
use crate::error::Result;
use crate::field::Field;
use crate::fp::{Bls315, Bls378, Fp, FpParams, Kss361, Kss372, Limbs, Ss383};
use crate::fpx::{Cyclotomic, ExtField, Fp16, Fp18, Fp2, Fp24, Fp48, Subfield};

/// Element of a tower over Fp2 from its flat coordinates, each Fp2
/// coordinate given as two limb arrays
fn over_fp2<P: FpParams, T: ExtField<Root = Fp2<P>>>(c: &[Limbs]) -> Result<T> {
    let mut r = [Fp2::zero(); 8];
    for (x, pair) in r.iter_mut().zip(c.chunks_exact(2)) {
        *x = Fp2::new(Fp::from_limbs(&pair[0])?, Fp::from_limbs(&pair[1])?);
    }
    Ok(T::from_root(&r[..T::ROOT_DEG]))
}

/// Element of a tower over Fp from its flat coordinates
fn over_fp<P: FpParams, T: ExtField<Root = Fp<P>>>(c: &[Limbs]) -> Result<T> {
    let mut r = [Fp::zero(); 8];
    for (x, limbs) in r.iter_mut().zip(c) {
        *x = Fp::from_limbs(limbs)?;
    }
    Ok(T::from_root(&r[..T::ROOT_DEG]))
}

struct TwistParams<'a, T> {
    name: &'static str,
    a: i64,
    b: i64,
    x: T,
    y: T,
    r: &'a Limbs,
    h2: &'a [Dig],
    m: bool,
}

fn build<T, K>(t: TwistParams<'_, T>, family: Family, z: Bn) -> Result<EpX<T>>
where
    T: Subfield<K>,
    K: Cyclotomic,
{
    let twist = if t.m { Twist::M } else { Twist::D };
    let (a, b) = twist_coeffs::<T, K>(&Fp::from_dis(t.a), &Fp::from_dis(t.b), twist)?;
    let curve = EpCurve::new(t.name, a, b, t.x, t.y, Bn::from_limbs(t.r), Bn::from_limbs(t.h2))?;
    EpX::new::<K>(curve, twist, family, z)?.with_fix()
}

/// G2 of BLS24-P315 on its sextic twist over Fp4
#[tracing::instrument(level = "debug")]
pub fn b24_p315() -> Result<Ep4<Bls315>> {
    let t = TwistParams {
        name: "B24-P315-G2",
        a: 0,
        b: p315::B,
        x: over_fp2(&p315::G2_X)?,
        y: over_fp2(&p315::G2_Y)?,
        r: &p315::R,
        h2: &p315::H2,
        m: p315::TWIST_M,
    };
    build::<_, Fp24<Bls315>>(t, Family::B24, seed(p315::Z_ABS, p315::Z_NEG))
}

/// G2 of BLS48-P378 on its sextic twist over Fp8
#[tracing::instrument(level = "debug")]
pub fn b48_p378() -> Result<Ep8<Bls378>> {
    let t = TwistParams {
        name: "B48-P378-G2",
        a: 0,
        b: p378::B,
        x: over_fp2(&p378::G2_X)?,
        y: over_fp2(&p378::G2_Y)?,
        r: &p378::R,
        h2: &p378::H2,
        m: p378::TWIST_M,
    };
    build::<_, Fp48<Bls378>>(t, Family::B48, seed(p378::Z_ABS, p378::Z_NEG))
}

/// G2 of KSS16-P361 on its quartic twist over Fp4
#[tracing::instrument(level = "debug")]
pub fn k16_p361() -> Result<Ep4<Kss361>> {
    let t = TwistParams {
        name: "K16-P361-G2",
        a: p361::A,
        b: p361::B,
        x: over_fp2(&p361::G2_X)?,
        y: over_fp2(&p361::G2_Y)?,
        r: &p361::R,
        h2: &p361::H2,
        m: p361::TWIST_M,
    };
    build::<_, Fp16<Kss361>>(t, Family::K16, seed(p361::Z_ABS, p361::Z_NEG))
}

/// G2 of KSS18-P372 on its sextic twist over Fp3
#[tracing::instrument(level = "debug")]
pub fn k18_p372() -> Result<Ep3<Kss372>> {
    let t = TwistParams {
        name: "K18-P372-G2",
        a: 0,
        b: p372::B,
        x: over_fp(&p372::G2_X)?,
        y: over_fp(&p372::G2_Y)?,
        r: &p372::R,
        h2: &p372::H2,
        m: p372::TWIST_M,
    };
    build::<_, Fp18<Kss372>>(t, Family::K18, seed(p372::Z_ABS, p372::Z_NEG))
}

/// G2 of SS-P383: the curve itself, reached from Fp2 by the distortion map
#[tracing::instrument(level = "debug")]
pub fn ss_p383() -> Result<EpX<Fp<Ss383>>> {
    let t = TwistParams {
        name: "SS-P383-G2",
        a: p383::A,
        b: p383::B,
        x: over_fp(&p383::G2_X)?,
        y: over_fp(&p383::G2_Y)?,
        r: &p383::R,
        h2: &p383::H2,
        m: p383::TWIST_M,
    };
    build::<_, Fp2<Ss383>>(t, Family::Ss, Bn::zero())
}
