//! Extension fields of the prime field
//!
//! Two families of towers are built on each pairing prime:
//!
//! - over `Fp2 = Fp[u]/(u^2 - β₀)`: `Fp4`, `Fp6`, `Fp8`, `Fp12`, `Fp16`,
//!   `Fp24` and `Fp48`, each adjoining a square or cube root of the previous
//!   generator, with ξ at the bottom;
//! - over `Fp3 = Fp[v]/(v^3 - γ₀)`: `Fp9`, `Fp18`, `Fp27` and `Fp54`.
//!
//! Every type in a family is therefore a Kummer extension θ^e = c of its
//! root field (`Fp2` with c = ξ, or `Fp` with c = γ₀). [`ExtField`] exposes
//! that flat view, which is what the Frobenius tables in [`Tower`] act on.
//!
//! The pairing target fields implement [`Cyclotomic`], and the twist fields
//! sit inside them through [`Subfield`].

use crate::bn::{Bn, Dig};
use crate::error::Result;
use crate::field::Field;
use crate::fp::{Fp, FpParams};

mod cyc;
mod ext;
mod fp2;
mod lazy;
mod sparse;
mod sub;
mod tower;

pub use cyc::Cyclotomic;
pub use fp2::Fp2;
pub use lazy::{Fp2Dbl, Fp6Dbl};
pub use sub::Subfield;
pub use tower::{FrbTable, Tower};

use ext::{cubic_ext, quad_ext};

/// Largest θ-degree of a tower over its root field
pub(crate) const MAX_ROOT_DEG: usize = 54;

/// A field seen as a Kummer extension θ^e = c of its root field.
pub trait ExtField: Field {
    /// `Fp2` or `Fp`
    type Root: ExtField<Prime = Self::Prime>;

    /// e, the degree over the root field
    const ROOT_DEG: usize;

    /// Multiply by the generator θ
    fn mul_gen(&self) -> Self;

    /// Coordinates on 1, θ, ..., θ^(e-1)
    fn to_root(&self, out: &mut [Self::Root]);

    /// Inverse of [`ExtField::to_root`]
    fn from_root(c: &[Self::Root]) -> Self;

    /// θ^k, reduced through θ^e = c
    fn gen_pow(k: usize) -> Self {
        let mut c = [Self::Root::zero(); MAX_ROOT_DEG];
        let nr = Self::Root::one().mul_gen();
        c[k % Self::ROOT_DEG] = nr.exp_limbs(&[(k / Self::ROOT_DEG) as Dig]);
        Self::from_root(&c[..Self::ROOT_DEG])
    }
}

impl<P: FpParams> ExtField for Fp<P> {
    type Root = Fp<P>;
    const ROOT_DEG: usize = 1;

    fn mul_gen(&self) -> Self {
        self.mul_dis(P::CNR)
    }

    fn to_root(&self, out: &mut [Self]) {
        out[0] = *self;
    }

    fn from_root(c: &[Self]) -> Self {
        c[0]
    }
}

// ============================================================================
// Square roots shared by the generated types
// ============================================================================

/// Complex method for a + b w with w^2 = θ, where `mul_nr` multiplies by θ.
pub(crate) fn srt_quad<K: Field>(a: &K, b: &K, mul_nr: impl Fn(&K) -> K) -> Option<(K, K)> {
    if b.is_zero() {
        if let Some(s) = a.srt() {
            return Some((s, K::zero()));
        }
        // a is a non-square, so a / θ is a square
        let t = a.mul(&mul_nr(&K::one()).inv().ok()?);
        return t.srt().map(|s| (K::zero(), s));
    }
    let n = a.sqr().sub(&mul_nr(&b.sqr()));
    let s = n.srt()?;
    let t = a.add(&s).hlv();
    let x0 = match t.srt() {
        Some(x) => x,
        None => a.sub(&s).hlv().srt()?,
    };
    let x1 = b.mul(&x0.dbl().inv().ok()?);
    Some((x0, x1))
}

/// Size of the field K as a multi-precision integer
pub(crate) fn field_order<K: Field>() -> Result<Bn> {
    let p = Fp::<K::Prime>::modulus();
    let mut q = Bn::one();
    for _ in 0..K::DEGREE {
        q = q.mul(&p)?;
    }
    Ok(q)
}

/// Norm method for a cubic step: with q = |K| and N the relative norm,
/// y = a^((q^2 + q + 2) / 2) / sqrt(N(a)).
pub(crate) fn srt_cubic<L: Field, K: Field>(a: &L, rel_norm: &K, lift: impl Fn(K) -> L) -> Option<L> {
    let s = rel_norm.srt()?;
    let q = field_order::<K>().ok()?;
    let e = q.sqr().ok()?.add(&q).ok()?.add_dig(2).ok()?.hlv();
    let y = a.exp(&e).ok()?.mul(&lift(s.inv().ok()?));
    Some(y)
}

// ============================================================================
// The towers
// ============================================================================

cubic_ext!(
    /// Fp[v]/(v^3 - γ₀)
    Fp3, Fp, frb_fp
);
quad_ext!(
    /// Fp2[s]/(s^2 - ξ)
    Fp4, Fp2, frb_fp2
);
cubic_ext!(
    /// Fp2[v]/(v^3 - ξ)
    Fp6, Fp2, frb_fp2
);
quad_ext!(
    /// Fp4[t]/(t^2 - s)
    Fp8, Fp4, frb_fp2
);
cubic_ext!(
    /// Fp3[y]/(y^3 - v)
    Fp9, Fp3, frb_fp
);
quad_ext!(
    /// Fp6[w]/(w^2 - v), the target field of the k = 12 pairings
    Fp12, Fp6, frb_fp2
);
quad_ext!(
    /// Fp8[w]/(w^2 - t)
    Fp16, Fp8, frb_fp2
);
quad_ext!(
    /// Fp9[w]/(w^2 - y)
    Fp18, Fp9, frb_fp
);
quad_ext!(
    /// Fp12[z]/(z^2 - w)
    Fp24, Fp12, frb_fp2
);
cubic_ext!(
    /// Fp9[z]/(z^3 - y)
    Fp27, Fp9, frb_fp
);
quad_ext!(
    /// Fp24[x]/(x^2 - z)
    Fp48, Fp24, frb_fp2
);
quad_ext!(
    /// Fp27[x]/(x^2 - z)
    Fp54, Fp27, frb_fp
);

#[cfg(test)]
mod tests;
