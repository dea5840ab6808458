//! Sparse products with Miller lines
//!
//! A line evaluated at a point sits in Fp12 with three non-zero Fp2
//! coordinates. Where they sit depends on the twist:
//!
//! - D-type: l = (l0, 0, 0) + (l1, l3, 0) w
//! - M-type: l = (l0, l1, 0) + (0, l3, 0) w

use super::{Fp12, Fp2, Fp6};
use crate::field::Field;
use crate::fp::FpParams;

impl<P: FpParams> Fp6<P> {
    /// Product with an Fp2 scalar
    pub fn mul_by_0(&self, b0: &Fp2<P>) -> Self {
        Fp6::new(self.c0 * *b0, self.c1 * *b0, self.c2 * *b0)
    }

    /// Product with b0 + b1 v
    pub fn mul_by_01(&self, b0: &Fp2<P>, b1: &Fp2<P>) -> Self {
        let v0 = self.c0 * *b0;
        let v1 = self.c1 * *b1;
        let c0 = v0 + (self.c2 * *b1).mul_nor();
        let c1 = (self.c0 + self.c1) * (*b0 + *b1) - v0 - v1;
        let c2 = self.c2 * *b0 + v1;
        Fp6::new(c0, c1, c2)
    }

    /// Product with b1 v
    pub fn mul_by_1(&self, b1: &Fp2<P>) -> Self {
        Fp6::new((self.c2 * *b1).mul_nor(), self.c0 * *b1, self.c1 * *b1)
    }
}

impl<P: FpParams> Fp12<P> {
    /// Product with a D-type line
    pub fn mul_dxs_d(&self, l0: &Fp2<P>, l1: &Fp2<P>, l3: &Fp2<P>) -> Self {
        let t0 = self.c0.mul_by_0(l0);
        let t1 = self.c1.mul_by_01(l1, l3);
        let t2 = (self.c0 + self.c1).mul_by_01(&(*l0 + *l1), l3);
        Fp12::new(t0 + t1.mul_art(), t2 - t0 - t1)
    }

    /// Product with an M-type line
    pub fn mul_dxs_m(&self, l0: &Fp2<P>, l1: &Fp2<P>, l3: &Fp2<P>) -> Self {
        let t0 = self.c0.mul_by_01(l0, l1);
        let t1 = self.c1.mul_by_1(l3);
        let t2 = (self.c0 + self.c1).mul_by_01(l0, &(*l1 + *l3));
        Fp12::new(t0 + t1.mul_art(), t2 - t0 - t1)
    }

    /// Dense form of a D-type line
    pub fn from_line_d(l0: &Fp2<P>, l1: &Fp2<P>, l3: &Fp2<P>) -> Self {
        let z = Fp2::zero();
        Fp12::new(Fp6::new(*l0, z, z), Fp6::new(*l1, *l3, z))
    }

    /// Dense form of an M-type line
    pub fn from_line_m(l0: &Fp2<P>, l1: &Fp2<P>, l3: &Fp2<P>) -> Self {
        let z = Fp2::zero();
        Fp12::new(Fp6::new(*l0, *l1, z), Fp6::new(z, *l3, z))
    }
}
