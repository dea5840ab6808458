//! Miller lines in homogeneous projective coordinates on the twist
//!
//! Doubling and addition steps return the next running point together
//! with the line through it, evaluated at an affine G1 point and scaled
//! by a factor in a proper subfield that the final exponentiation kills.

use super::{Pairing, G1, G2};
use crate::ep2::Twist;
use crate::field::Field;
use crate::fp::FpParams;
use crate::fpx::{Fp12, Fp2};

/// Three non-zero Fp2 coordinates of a line placed by the twist type
#[derive(Clone, Copy, Debug)]
pub struct Line<P: FpParams> {
    /// Coefficient on 1
    pub l0: Fp2<P>,
    /// Coefficient on w for D-type, w^2 for M-type
    pub l1: Fp2<P>,
    /// Coefficient on w^3
    pub l3: Fp2<P>,
}

impl<P: FpParams> Line<P> {
    /// Line from its coefficients on 1, xP and yP, ordered for `twist`
    fn place(twist: Twist, one: Fp2<P>, x: Fp2<P>, y: Fp2<P>) -> Self {
        match twist {
            Twist::D => Line { l0: y, l1: x, l3: one },
            Twist::M => Line { l0: one, l1: x, l3: y },
        }
    }

    /// Dense Fp12 form
    pub fn to_fp12(&self, twist: Twist) -> Fp12<P> {
        match twist {
            Twist::D => Fp12::from_line_d(&self.l0, &self.l1, &self.l3),
            Twist::M => Fp12::from_line_m(&self.l0, &self.l1, &self.l3),
        }
    }

    /// f * l, sparse unless `lazy` asks for the dense lazily reduced product
    pub fn mul_into(&self, f: &Fp12<P>, twist: Twist, lazy: bool) -> Fp12<P> {
        if lazy {
            return f.mul_lazy(&self.to_fp12(twist));
        }
        match twist {
            Twist::D => f.mul_dxs_d(&self.l0, &self.l1, &self.l3),
            Twist::M => f.mul_dxs_m(&self.l0, &self.l1, &self.l3),
        }
    }
}

/// Running point (X : Y : Z) with x = X / Z and y = Y / Z
#[derive(Clone, Copy, Debug)]
pub(super) struct Run<P: FpParams> {
    pub x: Fp2<P>,
    pub y: Fp2<P>,
    pub z: Fp2<P>,
}

impl<P: FpParams> Run<P> {
    pub fn from_affine(q: &G2<P>) -> Self {
        Run { x: q.x, y: q.y, z: Fp2::one() }
    }

    pub fn neg(&self) -> Self {
        Run { x: self.x, y: self.y.neg(), z: self.z }
    }
}

impl<P: FpParams> Pairing<P> {
    /// Tangent at T evaluated at P, and 2T
    pub(super) fn dbl_lin(&self, t: &Run<P>, p: &G1<P>) -> (Run<P>, Line<P>) {
        let a = t.x.mul(&t.y).hlv();
        let b = t.y.sqr();
        let c = t.z.sqr();
        let e = c.mul(&self.b3);
        let f = e.dbl().add(&e);
        let x3 = a.mul(&b.sub(&f));
        let g = b.add(&f).hlv();
        let e2 = e.sqr();
        let y3 = g.sqr().sub(&e2.dbl()).sub(&e2);
        let h = t.y.add(&t.z).sqr().sub(&b.add(&c));
        let z3 = b.mul(&h);

        let i = e.sub(&b);
        let x2 = t.x.sqr();
        let j = x2.dbl().add(&x2);
        let line = Line::place(self.twist(), i, j.mul_fp(&p.x), h.neg().mul_fp(&p.y));
        (Run { x: x3, y: y3, z: z3 }, line)
    }

    /// Line through T and the affine point Q evaluated at P, and T + Q
    pub(super) fn add_lin(&self, t: &Run<P>, q: &G2<P>, p: &G1<P>) -> (Run<P>, Line<P>) {
        let theta = t.y.sub(&q.y.mul(&t.z));
        let lambda = t.x.sub(&q.x.mul(&t.z));
        let c = theta.sqr();
        let d = lambda.sqr();
        let e = lambda.mul(&d);
        let f = t.z.mul(&c);
        let g = t.x.mul(&d);
        let h = e.add(&f).sub(&g.dbl());
        let x3 = lambda.mul(&h);
        let y3 = theta.mul(&g.sub(&h)).sub(&t.y.mul(&e));
        let z3 = t.z.mul(&e);

        let j = theta.mul(&q.x).sub(&lambda.mul(&q.y));
        let line = Line::place(self.twist(), j, theta.neg().mul_fp(&p.x), lambda.mul_fp(&p.y));
        (Run { x: x3, y: y3, z: z3 }, line)
    }

    /// Line of slope λ through the affine twist point T, evaluated at P
    pub(super) fn aff_lin(&self, lambda: &Fp2<P>, t: &G2<P>, p: &G1<P>) -> Line<P> {
        let c = lambda.mul(&t.x).sub(&t.y);
        Line::place(self.twist(), c, lambda.neg().mul_fp(&p.x), Fp2::from_base(p.y))
    }
}
