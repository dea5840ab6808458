//! Lazy reduction in Fp2, Fp6 and Fp12
//!
//! Products are accumulated as unreduced [`FpDbl`] coordinates and reduced
//! once per output coordinate.

use super::{Fp12, Fp2, Fp6};
use crate::fp::{FpDbl, FpParams};

/// Unreduced Fp2 value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fp2Dbl<P: FpParams> {
    /// Constant coordinate
    pub c0: FpDbl<P>,
    /// Coefficient of i
    pub c1: FpDbl<P>,
}

impl<P: FpParams> Fp2Dbl<P> {
    /// a + b
    pub fn add(&self, b: &Self) -> Self {
        Fp2Dbl {
            c0: self.c0.add(&b.c0),
            c1: self.c1.add(&b.c1),
        }
    }

    /// a - b
    pub fn sub(&self, b: &Self) -> Self {
        Fp2Dbl {
            c0: self.c0.sub(&b.c0),
            c1: self.c1.sub(&b.c1),
        }
    }

    /// Multiply by ξ
    pub fn mul_gen(&self) -> Self {
        let (x0, x1) = P::XI;
        let t = self.c1.mul_dis(P::QNR);
        Fp2Dbl {
            c0: self.c0.mul_dis(x0).add(&t.mul_dis(x1)),
            c1: self.c0.mul_dis(x1).add(&self.c1.mul_dis(x0)),
        }
    }

    /// Montgomery reduction of both coordinates
    pub fn rdc(&self) -> Fp2<P> {
        Fp2::new(self.c0.rdc(), self.c1.rdc())
    }
}

impl<P: FpParams> Fp2<P> {
    /// Karatsuba product without the final reduction
    pub fn mul_unr(&self, b: &Self) -> Fp2Dbl<P> {
        let v0 = FpDbl::mul_unr(&self.c0, &b.c0);
        let v1 = FpDbl::mul_unr(&self.c1, &b.c1);
        let t = FpDbl::mul_unr(&self.c0.add(&self.c1), &b.c0.add(&b.c1));
        Fp2Dbl {
            c0: v0.add(&v1.mul_dis(P::QNR)),
            c1: t.sub(&v0).sub(&v1),
        }
    }

    /// Square without the final reduction
    pub fn sqr_unr(&self) -> Fp2Dbl<P> {
        let v0 = FpDbl::sqr_unr(&self.c0);
        let v1 = FpDbl::sqr_unr(&self.c1);
        let t = FpDbl::mul_unr(&self.c0, &self.c1);
        Fp2Dbl {
            c0: v0.add(&v1.mul_dis(P::QNR)),
            c1: t.add(&t),
        }
    }

    /// Product with two reductions
    pub fn mul_lazy(&self, b: &Self) -> Self {
        self.mul_unr(b).rdc()
    }

    /// Square with two reductions
    pub fn sqr_lazy(&self) -> Self {
        self.sqr_unr().rdc()
    }
}

/// Unreduced Fp6 value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fp6Dbl<P: FpParams>(pub [Fp2Dbl<P>; 3]);

impl<P: FpParams> Fp6Dbl<P> {
    /// Karatsuba-style interpolation of a b in Fp2[v]/(v^3 - ξ)
    pub fn mul(a: &Fp6<P>, b: &Fp6<P>) -> Self {
        let v0 = a.c0.mul_unr(&b.c0);
        let v1 = a.c1.mul_unr(&b.c1);
        let v2 = a.c2.mul_unr(&b.c2);
        let t0 = (a.c1 + a.c2).mul_unr(&(b.c1 + b.c2));
        let t1 = (a.c0 + a.c1).mul_unr(&(b.c0 + b.c1));
        let t2 = (a.c0 + a.c2).mul_unr(&(b.c0 + b.c2));
        Fp6Dbl([
            v0.add(&t0.sub(&v1).sub(&v2).mul_gen()),
            t1.sub(&v0).sub(&v1).add(&v2.mul_gen()),
            t2.sub(&v0).sub(&v2).add(&v1),
        ])
    }

    /// a + b
    pub fn add(&self, b: &Self) -> Self {
        Fp6Dbl([self.0[0].add(&b.0[0]), self.0[1].add(&b.0[1]), self.0[2].add(&b.0[2])])
    }

    /// a - b
    pub fn sub(&self, b: &Self) -> Self {
        Fp6Dbl([self.0[0].sub(&b.0[0]), self.0[1].sub(&b.0[1]), self.0[2].sub(&b.0[2])])
    }

    /// Multiply by v
    pub fn mul_gen(&self) -> Self {
        Fp6Dbl([self.0[2].mul_gen(), self.0[0], self.0[1]])
    }

    /// Reduction of the three coordinates
    pub fn rdc(&self) -> Fp6<P> {
        Fp6::new(self.0[0].rdc(), self.0[1].rdc(), self.0[2].rdc())
    }
}

impl<P: FpParams> Fp6<P> {
    /// Product with six reductions
    pub fn mul_lazy(&self, b: &Self) -> Self {
        Fp6Dbl::mul(self, b).rdc()
    }
}

impl<P: FpParams> Fp12<P> {
    /// Product with twelve reductions
    pub fn mul_lazy(&self, b: &Self) -> Self {
        let v0 = Fp6Dbl::mul(&self.c0, &b.c0);
        let v1 = Fp6Dbl::mul(&self.c1, &b.c1);
        let t = Fp6Dbl::mul(&(self.c0 + self.c1), &(b.c0 + b.c1));
        Fp12::new(v0.add(&v1.mul_gen()).rdc(), t.sub(&v0).sub(&v1).rdc())
    }

    /// Square with twelve reductions
    pub fn sqr_lazy(&self) -> Self {
        self.mul_lazy(self)
    }
}
