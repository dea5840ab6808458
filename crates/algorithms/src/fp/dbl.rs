//! Double-precision field values for lazy reduction
//!
//! An [`FpDbl`] holds an unreduced product in [0, pR). Sums and
//! differences stay in that range, so a chain of products costs a single
//! Montgomery reduction at the end.

use core::marker::PhantomData;

use super::params::Limbs;
use super::{Fp, FpParams};
use crate::bn::{low, Dig, Dis};
use crate::config::FP_DIGS;

const WIDE: usize = 2 * FP_DIGS;

/// Unreduced double-width value modulo pR
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FpDbl<P: FpParams>(pub(crate) [Dig; WIDE], PhantomData<P>);

impl<P: FpParams> Default for FpDbl<P> {
    fn default() -> Self {
        FpDbl([0; WIDE], PhantomData)
    }
}

/// pR as a double-width integer
fn p_shifted<P: FpParams>() -> [Dig; WIDE] {
    let mut r = [0; WIDE];
    r[FP_DIGS..].copy_from_slice(&P::MODULUS);
    r
}

impl<P: FpParams> FpDbl<P> {
    /// Product of the Montgomery representations, not reduced
    pub fn mul_unr(a: &Fp<P>, b: &Fp<P>) -> Self {
        let mut c = [0; WIDE];
        low::muln(&mut c, &a.0, &b.0);
        FpDbl(c, PhantomData)
    }

    /// a^2 without reduction
    pub fn sqr_unr(a: &Fp<P>) -> Self {
        Self::mul_unr(a, a)
    }

    /// (a + b) mod pR
    pub fn add(&self, b: &Self) -> Self {
        let mut s = [0; WIDE];
        let carry = low::addn(&mut s, &self.0, &b.0);
        let mut d = [0; WIDE];
        let borrow = low::subn(&mut d, &s, &p_shifted::<P>());
        let keep = subtle::Choice::from((borrow & !carry & 1) as u8);
        low::copy_cond(&mut d, &s, keep);
        FpDbl(d, PhantomData)
    }

    /// (a - b) mod pR
    pub fn sub(&self, b: &Self) -> Self {
        let mut d = [0; WIDE];
        let borrow = low::subn(&mut d, &self.0, &b.0);
        let mut s = [0; WIDE];
        low::addn(&mut s, &d, &p_shifted::<P>());
        low::copy_cond(&mut d, &s, subtle::Choice::from((borrow & 1) as u8));
        FpDbl(d, PhantomData)
    }

    /// k a mod pR for a small signed k
    pub fn mul_dis(&self, k: Dis) -> Self {
        let m = k.unsigned_abs();
        let mut r = FpDbl::default();
        for i in (0..64 - m.leading_zeros()).rev() {
            r = r.add(&r);
            if (m >> i) & 1 == 1 {
                r = r.add(self);
            }
        }
        if k < 0 {
            FpDbl::default().sub(&r)
        } else {
            r
        }
    }

    /// Montgomery reduction to a field element
    pub fn rdc(&self) -> Fp<P> {
        let mut t = self.0;
        let mut c = [0; FP_DIGS];
        low::modn(&mut c, &mut t, &P::MODULUS, P::INV);
        Fp::from_mont(c)
    }

    /// Reduction by long division, for cross-checking `rdc`
    pub fn rdc_basic(&self) -> Fp<P> {
        let mut unit = [0; FP_DIGS];
        unit[0] = 1;
        // t mod p carries one factor of R too many
        Fp::from_mont(Self::rdc_basic_limbs(&self.0)).mul(&Fp::from_mont(unit))
    }

    /// t mod p for a double-width t, by schoolbook division
    pub(crate) fn rdc_basic_limbs(t: &[Dig; WIDE]) -> Limbs {
        let n = P::MODULUS.iter().rposition(|&d| d != 0).map_or(1, |i| i + 1);
        let mut q = [0; WIDE];
        let mut r = [0; FP_DIGS];
        low::divn(&mut q, &mut r[..n], t, &P::MODULUS[..n]);
        r
    }
}
