//! Curves over the higher towers, lifted from a prime-field curve

use super::EpCurve;
use crate::bn::Bn;
use crate::error::{validate, Result};
use crate::field::Field;
use crate::fp::Fp;
use crate::fpx::{Fp3, Fp4, Fp8};

/// A curve over `Fp3`
pub type Ep3Curve<P> = EpCurve<Fp3<P>>;
/// A curve over `Fp4`
pub type Ep4Curve<P> = EpCurve<Fp4<P>>;
/// A curve over `Fp8`
pub type Ep8Curve<P> = EpCurve<Fp8<P>>;

/// Trace of the p^k-power Frobenius from the trace t of the p-power one:
/// t_k = t t_(k-1) - p t_(k-2), with t_0 = 2.
pub fn frb_trace(t: &Bn, p: &Bn, k: usize) -> Result<Bn> {
    let (mut prev, mut cur) = (Bn::from_dig(2), t.clone());
    if k == 0 {
        return Ok(prev);
    }
    for _ in 1..k {
        let next = t.mul(&cur)?.sub(&p.mul(&prev)?)?;
        prev = core::mem::replace(&mut cur, next);
    }
    Ok(cur)
}

impl<L: Field> EpCurve<L> {
    /// The curve of `base` over L. The generator keeps its order r and the
    /// cofactor becomes #E(L) / r.
    pub fn lift(base: &EpCurve<Fp<L::Prime>>) -> Result<Self> {
        let _span = tracing::debug_span!("ep_lift", base = base.name, degree = L::DEGREE).entered();
        let p = Fp::<L::Prime>::modulus();
        let n1 = base.h.mul(&base.r)?;
        let t = p.add_dig(1)?.sub(&n1)?;
        let tk = frb_trace(&t, &p, L::DEGREE)?;
        let mut q = Bn::one();
        for _ in 0..L::DEGREE {
            q = q.mul(&p)?;
        }
        let nk = q.add_dig(1)?.sub(&tk)?;
        let (h, rem) = nk.div_rem(&base.r)?;
        validate::parameter(rem.is_zero(), "ep_lift")?;

        let g = base.norm(&base.g);
        let curve = EpCurve::new(
            base.name,
            L::from_base(base.a),
            L::from_base(base.b),
            L::from_base(g.x),
            L::from_base(g.y),
            base.r.clone(),
            h,
        )?;
        tracing::debug!(cofactor_bits = curve.h.bits(), "lifted curve");
        Ok(curve)
    }
}
