//! Miller loops

use alloc::vec::Vec;

use super::line::Run;
use super::{Pairing, G1, G2};
use crate::ep2::{Family, Twist};
use crate::error::Result;
use crate::field::Field;
use crate::fp::{Fp, FpParams};
use crate::fpx::{Fp12, Fp2, Fp6};

impl<P: FpParams> Pairing<P> {
    /// Optimal ate loop over affine pairs, sharing the squarings of f.
    pub(super) fn miller_oate(&self, ps: &[G1<P>], qs: &[G2<P>], lazy: bool) -> Fp12<P> {
        let twist = self.twist();
        let curve = self.g2.curve();
        let negs: Vec<G2<P>> = qs.iter().map(|q| curve.neg(q)).collect();
        let mut ts: Vec<Run<P>> = qs.iter().map(Run::from_affine).collect();

        let mut f = Fp12::one();
        for i in (0..self.ate_naf.len().saturating_sub(1)).rev() {
            f = if lazy { f.sqr_lazy() } else { f.sqr() };
            for (t, p) in ts.iter_mut().zip(ps) {
                let (n, l) = self.dbl_lin(t, p);
                *t = n;
                f = l.mul_into(&f, twist, lazy);
            }
            let d = self.ate_naf[i];
            if d == 0 {
                continue;
            }
            for (j, (t, p)) in ts.iter_mut().zip(ps).enumerate() {
                let q = if d > 0 { &qs[j] } else { &negs[j] };
                let (n, l) = self.add_lin(t, q, p);
                *t = n;
                f = l.mul_into(&f, twist, lazy);
            }
        }
        if self.ate_neg {
            f = f.conj();
            for t in ts.iter_mut() {
                *t = t.neg();
            }
        }

        // f_{6z+2,Q} l_{T,Q1} l_{T+Q1,-Q2} with Q1 = ψ(Q), Q2 = ψ^2(Q)
        if self.family() == Family::Bn {
            for ((t, p), q) in ts.iter().zip(ps).zip(qs) {
                let q1 = curve.norm(&self.g2.psi(q));
                let q2 = curve.neg(&curve.norm(&self.g2.psi(&q1)));
                let (t, l) = self.add_lin(t, &q1, p);
                f = l.mul_into(&f, twist, lazy);
                let (_, l) = self.add_lin(&t, &q2, p);
                f = l.mul_into(&f, twist, lazy);
            }
        }
        f
    }

    /// f_{r,P} evaluated at the untwisted image of Q
    pub(super) fn miller_tate(&self, p: &G1<P>, q: &G2<P>) -> Result<Fp12<P>> {
        let r = self.ord();
        let mut f = Fp12::one();
        let mut t = *p;
        for i in (0..r.bits() - 1).rev() {
            let x2 = t.x.sqr();
            let lambda = x2.dbl().add(&x2).mul(&t.y.dbl().inv()?);
            f = f.sqr().mul(&self.tate_line(&t, &lambda, q));
            t = self.g1.norm(&self.g1.dbl(&t));
            if !r.get_bit(i) {
                continue;
            }
            if t.x == p.x {
                // T = -P: the vertical line lies in Fp6
                break;
            }
            let lambda = p.y.sub(&t.y).mul(&p.x.sub(&t.x).inv()?);
            f = f.mul(&self.tate_line(&t, &lambda, q));
            t = self.g1.norm(&self.g1.add(&t, p));
        }
        Ok(f)
    }

    /// yQ - yT - λ (xQ - xT) with Q mapped from the twist
    fn tate_line(&self, t: &G1<P>, lambda: &Fp<P>, q: &G2<P>) -> Fp12<P> {
        let zero = Fp2::zero();
        let c = Fp2::from_base(lambda.mul(&t.x).sub(&t.y));
        match self.twist() {
            // x w^2 and y w^3
            Twist::D => Fp12::new(
                Fp6::new(c, q.x.mul_fp(lambda).neg(), zero),
                Fp6::new(zero, q.y, zero),
            ),
            // x w^4 / ξ and y w^3 / ξ
            Twist::M => Fp12::new(
                Fp6::new(c, zero, q.x.mul(&self.xi_inv).mul_fp(lambda).neg()),
                Fp6::new(zero, q.y.mul(&self.xi_inv), zero),
            ),
        }
    }

    /// f_{r,Q} over the twist, evaluated at P
    pub(super) fn miller_weil(&self, p: &G1<P>, q: &G2<P>) -> Result<Fp12<P>> {
        let twist = self.twist();
        let curve = self.g2.curve();
        let r = self.ord();
        let mut f = Fp12::one();
        let mut t = *q;
        for i in (0..r.bits() - 1).rev() {
            let x2 = t.x.sqr();
            let lambda = x2.dbl().add(&x2).mul(&t.y.dbl().inv()?);
            f = self.aff_lin(&lambda, &t, p).mul_into(&f.sqr(), twist, false);
            t = curve.norm(&curve.dbl(&t));
            if !r.get_bit(i) {
                continue;
            }
            if t.x == q.x {
                // vertical line in a subfield
                break;
            }
            let lambda = q.y.sub(&t.y).mul(&q.x.sub(&t.x).inv()?);
            f = self.aff_lin(&lambda, &t, p).mul_into(&f, twist, false);
            t = curve.norm(&curve.add(&t, q));
        }
        Ok(f)
    }
}
