//! Square roots in the prime field

use subtle::{ConditionallySelectable, ConstantTimeEq};

use super::{Fp, FpParams};

impl<P: FpParams> Fp<P> {
    /// Square root, or `None` for a non-square. The root returned is the one
    /// the method lands on; callers that need a canonical sign fix it.
    pub fn srt(&self) -> Option<Self> {
        let r = if P::MOD8 & 3 == 3 {
            self.pow_limbs(&P::P_PLUS_1_QUARTER)
        } else if P::MOD8 == 5 {
            self.srt_atkin()
        } else {
            self.srt_tonelli()
        };
        if r.sqr() == *self {
            Some(r)
        } else {
            None
        }
    }

    /// Atkin's formula for p = 5 mod 8
    fn srt_atkin(&self) -> Self {
        let two_a = self.dbl();
        let b = two_a.pow_limbs(&P::P_MINUS_5_EIGHTH);
        let i = two_a.mul(&b.sqr());
        self.mul(&b).mul(&i.sub(&Fp::one()))
    }

    /// Constant-time Tonelli-Shanks with a fixed loop over the 2-adicity
    fn srt_tonelli(&self) -> Self {
        let mut z = self.pow_limbs(&P::TS_EXP);
        let mut t = z.sqr().mul(self);
        z = z.mul(self);
        let mut b = t;
        let mut c = Fp::from_canonical(&P::TS_ROOT);
        for i in (2..=P::TWO_ADICITY).rev() {
            for _ in 1..i - 1 {
                b = b.sqr();
            }
            let e = b.ct_eq(&Fp::one());
            z = Fp::conditional_select(&z.mul(&c), &z, e);
            c = c.sqr();
            t = Fp::conditional_select(&t.mul(&c), &t, e);
            b = t;
        }
        z
    }
}
