//! Point addition and doubling
//!
//! Three formula families:
//!
//! - affine (`*_basic`), with one inversion per operation
//! - homogeneous projective (`*_projc`), the complete formulas of Renes,
//!   Costello and Batina for a = 0, a = -3 and arbitrary a, with a mixed
//!   variant when the second operand has z = 1
//! - Jacobian (`*_jacob`): add-2007-bl, madd-2007-bl and the doubling
//!   formulas dbl-2009-l (a = 0), dbl-2001-b (a = -3), dbl-2007-bl

use super::{Coord, EpCurve, EpPoint, Opt};
use crate::field::Field;

impl<F: Field> EpCurve<F> {
    // ========================================================================
    // Affine
    // ========================================================================

    /// Affine addition with the exceptional cases handled explicitly
    pub fn add_basic(&self, p: &EpPoint<F>, q: &EpPoint<F>) -> EpPoint<F> {
        let (p, q) = (self.to_affine(p), self.to_affine(q));
        if p.is_infty() {
            return q;
        }
        if q.is_infty() {
            return p;
        }
        let dx = q.x.sub(&p.x);
        if dx.is_zero() {
            if q.y == p.y {
                return self.dbl_basic(&p);
            }
            return EpPoint::infinity();
        }
        let l = q.y.sub(&p.y).mul(&inv0(&dx));
        let x3 = l.sqr().sub(&p.x).sub(&q.x);
        let y3 = l.mul(&p.x.sub(&x3)).sub(&p.y);
        EpPoint::from_affine(x3, y3)
    }

    /// Affine doubling
    pub fn dbl_basic(&self, p: &EpPoint<F>) -> EpPoint<F> {
        let p = self.to_affine(p);
        if p.is_infty() || p.y.is_zero() {
            return EpPoint::infinity();
        }
        let xx = p.x.sqr();
        let num = xx.dbl().add(&xx).add(&self.a);
        let l = num.mul(&inv0(&p.y.dbl()));
        let x3 = l.sqr().sub(&p.x.dbl());
        let y3 = l.mul(&p.x.sub(&x3)).sub(&p.y);
        EpPoint::from_affine(x3, y3)
    }

    // ========================================================================
    // Homogeneous projective, complete
    // ========================================================================

    /// Complete projective addition. Uses the mixed formula when q has z = 1.
    pub fn add_projc(&self, p: &EpPoint<F>, q: &EpPoint<F>) -> EpPoint<F> {
        let p = self.to_system(p, Coord::Projc);
        let q = self.to_system(q, Coord::Projc);
        let one = F::one();
        let (p, q) = if p.z == one && q.z != one { (q, p) } else { (p, q) };

        let t0 = p.x.mul(&q.x);
        let t1 = p.y.mul(&q.y);
        let xy = p.x.add(&p.y).mul(&q.x.add(&q.y)).sub(&t0.add(&t1));
        let (t2, xz, yz) = if q.z == one {
            (p.z, q.x.mul(&p.z).add(&p.x), q.y.mul(&p.z).add(&p.y))
        } else {
            let t2 = p.z.mul(&q.z);
            let xz = p.x.add(&p.z).mul(&q.x.add(&q.z)).sub(&t0.add(&t2));
            let yz = p.y.add(&p.z).mul(&q.y.add(&q.z)).sub(&t1.add(&t2));
            (t2, xz, yz)
        };

        let (x3, y3, z3) = match self.opt_a {
            Opt::Zero => self.finish_add_zero(t0, t1, t2, xy, xz, yz),
            Opt::Minus3 => self.finish_add_minus3(t0, t1, t2, xy, xz, yz),
            _ => self.finish_add_any(t0, t1, t2, xy, xz, yz),
        };
        EpPoint { x: x3, y: y3, z: z3, coord: Coord::Projc }
    }

    fn finish_add_any(&self, t0: F, t1: F, t2: F, xy: F, xz: F, yz: F) -> (F, F, F) {
        let z3 = self.mul_a(&xz).add(&self.mul_b3(&t2));
        let x3 = t1.sub(&z3);
        let z3 = t1.add(&z3);
        let y3 = x3.mul(&z3);
        let at2 = self.mul_a(&t2);
        let t1 = t0.dbl().add(&t0).add(&at2);
        let t2 = self.mul_a(&t0.sub(&at2));
        let t4 = self.mul_b3(&xz).add(&t2);
        let y3 = y3.add(&t1.mul(&t4));
        let x3 = xy.mul(&x3).sub(&yz.mul(&t4));
        let z3 = yz.mul(&z3).add(&xy.mul(&t1));
        (x3, y3, z3)
    }

    fn finish_add_minus3(&self, t0: F, t1: F, t2: F, xy: F, xz: F, yz: F) -> (F, F, F) {
        let z3 = self.mul_b(&t2);
        let x3 = xz.sub(&z3);
        let x3 = x3.dbl().add(&x3);
        let z3 = t1.sub(&x3);
        let x3 = t1.add(&x3);
        let t2 = t2.dbl().add(&t2);
        let y3 = self.mul_b(&xz).sub(&t2).sub(&t0);
        let y3 = y3.dbl().add(&y3);
        let t0 = t0.dbl().add(&t0).sub(&t2);
        let t1 = yz.mul(&y3);
        let y3 = x3.mul(&z3).add(&t0.mul(&y3));
        let x3 = xy.mul(&x3).sub(&t1);
        let z3 = yz.mul(&z3).add(&xy.mul(&t0));
        (x3, y3, z3)
    }

    fn finish_add_zero(&self, t0: F, t1: F, t2: F, xy: F, xz: F, yz: F) -> (F, F, F) {
        let t0 = t0.dbl().add(&t0);
        let t2 = self.mul_b3(&t2);
        let z3 = t1.add(&t2);
        let t1 = t1.sub(&t2);
        let y3 = self.mul_b3(&xz);
        let x3 = xy.mul(&t1).sub(&yz.mul(&y3));
        let y3 = y3.mul(&t0).add(&t1.mul(&z3));
        let z3 = yz.mul(&z3).add(&t0.mul(&xy));
        (x3, y3, z3)
    }

    /// Complete projective doubling
    pub fn dbl_projc(&self, p: &EpPoint<F>) -> EpPoint<F> {
        let p = self.to_system(p, Coord::Projc);
        let (x3, y3, z3) = match self.opt_a {
            Opt::Zero => {
                let t0 = p.y.sqr();
                let z3 = t0.dbl().dbl().dbl();
                let t1 = p.y.mul(&p.z);
                let t2 = self.mul_b3(&p.z.sqr());
                let x3 = t2.mul(&z3);
                let y3 = t0.add(&t2);
                let z3 = t1.mul(&z3);
                let t2 = t2.dbl().add(&t2);
                let t0 = t0.sub(&t2);
                let y3 = x3.add(&t0.mul(&y3));
                let x3 = t0.mul(&p.x.mul(&p.y)).dbl();
                (x3, y3, z3)
            }
            Opt::Minus3 => {
                let t0 = p.x.sqr();
                let t1 = p.y.sqr();
                let t2 = p.z.sqr();
                let t3 = p.x.mul(&p.y).dbl();
                let z3 = p.x.mul(&p.z).dbl();
                let y3 = self.mul_b(&t2).sub(&z3);
                let y3 = y3.dbl().add(&y3);
                let x3 = t1.sub(&y3);
                let y3 = t1.add(&y3);
                let y3 = x3.mul(&y3);
                let x3 = x3.mul(&t3);
                let t2 = t2.dbl().add(&t2);
                let z3 = self.mul_b(&z3).sub(&t2).sub(&t0);
                let z3 = z3.dbl().add(&z3);
                let t0 = t0.dbl().add(&t0).sub(&t2);
                let y3 = y3.add(&t0.mul(&z3));
                let t0 = p.y.mul(&p.z).dbl();
                let x3 = x3.sub(&t0.mul(&z3));
                let z3 = t0.mul(&t1).dbl().dbl();
                (x3, y3, z3)
            }
            _ => {
                let t0 = p.x.sqr();
                let t1 = p.y.sqr();
                let t2 = p.z.sqr();
                let t3 = p.x.mul(&p.y).dbl();
                let z3 = p.x.mul(&p.z).dbl();
                let y3 = self.mul_a(&z3).add(&self.mul_b3(&t2));
                let x3 = t1.sub(&y3);
                let y3 = t1.add(&y3);
                let y3 = x3.mul(&y3);
                let x3 = t3.mul(&x3);
                let z3 = self.mul_b3(&z3);
                let t2 = self.mul_a(&t2);
                let t3 = self.mul_a(&t0.sub(&t2)).add(&z3);
                let t0 = t0.dbl().add(&t0).add(&t2);
                let y3 = y3.add(&t0.mul(&t3));
                let t2 = p.y.mul(&p.z).dbl();
                let x3 = x3.sub(&t2.mul(&t3));
                let z3 = t2.mul(&t1).dbl().dbl();
                (x3, y3, z3)
            }
        };
        EpPoint { x: x3, y: y3, z: z3, coord: Coord::Projc }
    }

    // ========================================================================
    // Jacobian
    // ========================================================================

    /// Jacobian addition, mixed when q has z = 1
    pub fn add_jacob(&self, p: &EpPoint<F>, q: &EpPoint<F>) -> EpPoint<F> {
        let p = self.to_system(p, Coord::Jacob);
        let q = self.to_system(q, Coord::Jacob);
        if p.is_infty() {
            return q;
        }
        if q.is_infty() {
            return p;
        }
        let one = F::one();
        let (p, q) = if p.z == one && q.z != one { (q, p) } else { (p, q) };

        let z1z1 = p.z.sqr();
        let u2 = q.x.mul(&z1z1);
        let s2 = q.y.mul(&p.z).mul(&z1z1);
        let (u1, s1, z2z2) = if q.z == one {
            (p.x, p.y, one)
        } else {
            let z2z2 = q.z.sqr();
            (p.x.mul(&z2z2), p.y.mul(&q.z).mul(&z2z2), z2z2)
        };
        let h = u2.sub(&u1);
        let r = s2.sub(&s1).dbl();
        if h.is_zero() {
            if r.is_zero() {
                return self.dbl_jacob(&p);
            }
            return EpPoint::infinity();
        }
        let i = h.dbl().sqr();
        let j = h.mul(&i);
        let v = u1.mul(&i);
        let x3 = r.sqr().sub(&j).sub(&v.dbl());
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&j).dbl());
        let z3 = if q.z == one {
            p.z.add(&h).sqr().sub(&z1z1).sub(&h.sqr())
        } else {
            p.z.add(&q.z).sqr().sub(&z1z1).sub(&z2z2).mul(&h)
        };
        EpPoint { x: x3, y: y3, z: z3, coord: Coord::Jacob }
    }

    /// Jacobian doubling
    pub fn dbl_jacob(&self, p: &EpPoint<F>) -> EpPoint<F> {
        let p = self.to_system(p, Coord::Jacob);
        if p.is_infty() {
            return p;
        }
        let (x3, y3, z3) = match self.opt_a {
            Opt::Zero => {
                let a = p.x.sqr();
                let b = p.y.sqr();
                let c = b.sqr();
                let d = p.x.add(&b).sqr().sub(&a).sub(&c).dbl();
                let e = a.dbl().add(&a);
                let x3 = e.sqr().sub(&d.dbl());
                let y3 = e.mul(&d.sub(&x3)).sub(&c.dbl().dbl().dbl());
                (x3, y3, p.y.mul(&p.z).dbl())
            }
            Opt::Minus3 => {
                let delta = p.z.sqr();
                let gamma = p.y.sqr();
                let beta = p.x.mul(&gamma);
                let t = p.x.sub(&delta).mul(&p.x.add(&delta));
                let alpha = t.dbl().add(&t);
                let x3 = alpha.sqr().sub(&beta.dbl().dbl().dbl());
                let z3 = p.y.add(&p.z).sqr().sub(&gamma).sub(&delta);
                let y3 = alpha
                    .mul(&beta.dbl().dbl().sub(&x3))
                    .sub(&gamma.sqr().dbl().dbl().dbl());
                (x3, y3, z3)
            }
            _ => {
                let xx = p.x.sqr();
                let yy = p.y.sqr();
                let yyyy = yy.sqr();
                let zz = p.z.sqr();
                let s = p.x.add(&yy).sqr().sub(&xx).sub(&yyyy).dbl();
                let m = xx.dbl().add(&xx).add(&self.mul_a(&zz.sqr()));
                let x3 = m.sqr().sub(&s.dbl());
                let y3 = m.mul(&s.sub(&x3)).sub(&yyyy.dbl().dbl().dbl());
                let z3 = p.y.add(&p.z).sqr().sub(&yy).sub(&zz);
                (x3, y3, z3)
            }
        };
        EpPoint { x: x3, y: y3, z: z3, coord: Coord::Jacob }
    }
}

/// Inverse that maps zero to zero
#[inline]
pub(crate) fn inv0<F: Field>(a: &F) -> F {
    a.inv().unwrap_or_else(|_| F::zero())
}
