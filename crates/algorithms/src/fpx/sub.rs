//! Twist fields inside the pairing target fields
//!
//! A twist field T of degree e_T over the root field sits in the target K of
//! degree e_K through θ_T -> θ_K^(e_K / e_T). The twist isomorphism is
//! (x, y) -> (ζ^2 x, ζ^3 y) with ζ = θ_K, so ζ^d = θ_T for a twist of
//! degree d = e_K / e_T.

use super::{ExtField, Fp16, Fp18, Fp2, Fp24, Fp3, Fp4, Fp48, Fp8, MAX_ROOT_DEG};
use crate::field::Field;
use crate::fp::{Fp, FpParams};

/// A subfield T of the target field K carrying a twist of degree
/// [`Subfield::TWIST_DEG`].
pub trait Subfield<K: Field>: Field<Prime = K::Prime> {
    /// d, with ζ^d in T
    const TWIST_DEG: usize;

    /// Image of the element in K
    fn embed(&self) -> K;

    /// Preimage of a, if a lies in T
    fn project(a: &K) -> Option<Self>;

    /// The root ζ of θ_T
    fn twist_root() -> K;
}

macro_rules! flat_subfield {
    ($t:ident, $k:ident) => {
        impl<P: FpParams> Subfield<$k<P>> for $t<P> {
            const TWIST_DEG: usize = <$k<P> as ExtField>::ROOT_DEG / <$t<P> as ExtField>::ROOT_DEG;

            fn embed(&self) -> $k<P> {
                let step = <Self as Subfield<$k<P>>>::TWIST_DEG;
                let mut a = [<<$t<P> as ExtField>::Root as Field>::zero(); MAX_ROOT_DEG];
                let mut c = [<<$t<P> as ExtField>::Root as Field>::zero(); MAX_ROOT_DEG];
                self.to_root(&mut a[..<$t<P> as ExtField>::ROOT_DEG]);
                for (j, x) in a[..<$t<P> as ExtField>::ROOT_DEG].iter().enumerate() {
                    c[j * step] = *x;
                }
                <$k<P> as ExtField>::from_root(&c[..<$k<P> as ExtField>::ROOT_DEG])
            }

            fn project(a: &$k<P>) -> Option<Self> {
                let step = <Self as Subfield<$k<P>>>::TWIST_DEG;
                let mut c = [<<$t<P> as ExtField>::Root as Field>::zero(); MAX_ROOT_DEG];
                a.to_root(&mut c[..<$k<P> as ExtField>::ROOT_DEG]);
                let c = &c[..<$k<P> as ExtField>::ROOT_DEG];
                if c.iter().enumerate().any(|(i, x)| i % step != 0 && !x.is_zero()) {
                    return None;
                }
                let mut t = [<<$t<P> as ExtField>::Root as Field>::zero(); MAX_ROOT_DEG];
                for (j, x) in c.iter().step_by(step).enumerate() {
                    t[j] = *x;
                }
                Some(<$t<P> as ExtField>::from_root(&t[..<$t<P> as ExtField>::ROOT_DEG]))
            }

            fn twist_root() -> $k<P> {
                <$k<P> as ExtField>::gen_pow(1)
            }
        }
    };
}

flat_subfield!(Fp4, Fp24);
flat_subfield!(Fp8, Fp48);
flat_subfield!(Fp4, Fp16);
flat_subfield!(Fp3, Fp18);

/// The prime field in Fp2, where ζ = u maps the supersingular curve
/// y^2 = x^3 + a x onto itself by (x, y) -> (-x, u y) when u^2 = -1.
impl<P: FpParams> Subfield<Fp2<P>> for Fp<P> {
    const TWIST_DEG: usize = 2;

    fn embed(&self) -> Fp2<P> {
        Fp2::from_base(*self)
    }

    fn project(a: &Fp2<P>) -> Option<Self> {
        if a.c1.is_zero() {
            Some(a.c0)
        } else {
            None
        }
    }

    fn twist_root() -> Fp2<P> {
        Fp2::new(Fp::zero(), Fp::one())
    }
}
