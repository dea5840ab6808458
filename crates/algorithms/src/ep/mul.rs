//! Scalar multiplication on prime curves
//!
//! Curves with an endomorphism multiply through the GLV decomposition
//! k = k1 + k2 λ mod r; the rest use the shared multipliers of [`crate::ec`].

use subtle::{Choice, ConditionallySelectable};

use super::{Endo, EpCurve, EpPoint};
use crate::bn::{rec_glv, rec_sac, Bn, Dig};
use crate::config::{EpMul, EP_MUL};
use crate::ec::{self, FixTable};
use crate::error::Result;
use crate::field::Field;

impl<F: Field> EpCurve<F> {
    /// [k]P, configured method
    pub fn mul(&self, p: &EpPoint<F>, k: &Bn) -> Result<EpPoint<F>> {
        if k.is_zero() || p.is_infty() {
            return Ok(EpPoint::infinity());
        }
        match (&self.endo, EP_MUL) {
            (Some(e), EpMul::Lwnaf) => self.mul_glv_with(p, k, e),
            (Some(e), EpMul::Lwreg) => self.mul_glv_reg_with(p, k, e),
            _ => ec::mul(self, p, k),
        }
    }

    /// [k]P through the GLV decomposition and interleaved NAFs. Falls back
    /// to w-NAF on curves without an endomorphism.
    pub fn mul_glv(&self, p: &EpPoint<F>, k: &Bn) -> Result<EpPoint<F>> {
        match &self.endo {
            Some(e) => self.mul_glv_with(p, k, e),
            None => ec::mul_lwnaf(self, p, k),
        }
    }

    /// Regular GLV multiplication over sign-aligned columns. Every column
    /// costs one doubling and one addition.
    pub fn mul_glv_reg(&self, p: &EpPoint<F>, k: &Bn) -> Result<EpPoint<F>> {
        match &self.endo {
            Some(e) => self.mul_glv_reg_with(p, k, e),
            None => ec::mul_lwreg(self, p, k),
        }
    }

    fn mul_glv_with(&self, p: &EpPoint<F>, k: &Bn, e: &Endo<F>) -> Result<EpPoint<F>> {
        let (k1, k2) = rec_glv(k, &self.r, &e.basis)?;
        let q = self.endo_map(p, e);
        ec::mul_sim_inter(self, p, &k1, &q, &k2)
    }

    fn mul_glv_reg_with(&self, p: &EpPoint<F>, k: &Bn, e: &Endo<F>) -> Result<EpPoint<F>> {
        let (k1, k2) = rec_glv(k, &self.r, &e.basis)?;
        let p1 = if k1.is_neg() { self.neg(p) } else { *p };
        let q = self.endo_map(p, e);
        let p2 = if k2.is_neg() { self.neg(&q) } else { q };

        // Odd first scalar, fixed up by one subtraction at the end.
        let even = Choice::from(k1.is_even() as u8);
        let a1 = k1.abs().add_dig(k1.is_even() as Dig)?;
        let a2 = k2.abs();
        let l = a1.bits().max(a2.bits()).max((self.r.bits() + 1) / 2) + 1;
        let cols = rec_sac(&[a1, a2], l)?;

        let table = [p1, self.add(&p1, &p2)];
        let lookup = |i: usize| {
            let pick = Choice::from((cols[1][i] != 0) as u8);
            let t = EpPoint::conditional_select(&table[0], &table[1], pick);
            let n = self.neg(&t);
            EpPoint::conditional_select(&t, &n, Choice::from((cols[0][i] < 0) as u8))
        };
        let mut r = lookup(l - 1);
        for i in (0..l - 1).rev() {
            r = self.dbl(&r);
            r = self.add(&r, &lookup(i));
        }
        let fixed = self.sub(&r, &p1);
        Ok(EpPoint::conditional_select(&r, &fixed, even))
    }

    /// [k]G, through the precomputed table when present
    pub fn mul_gen(&self, k: &Bn) -> Result<EpPoint<F>> {
        match &self.fix {
            Some(t) => ec::mul_fix(self, t, k),
            None => self.mul(&self.g, k),
        }
    }

    /// [k]P from a table built for P
    pub fn mul_fix(&self, t: &FixTable<EpPoint<F>>, k: &Bn) -> Result<EpPoint<F>> {
        ec::mul_fix(self, t, k)
    }

    /// Table for repeated multiplication of P
    pub fn mul_pre(&self, p: &EpPoint<F>) -> Result<FixTable<EpPoint<F>>> {
        FixTable::new(self, p)
    }

    /// [k]P + [l]Q, configured method
    pub fn mul_sim(&self, p: &EpPoint<F>, k: &Bn, q: &EpPoint<F>, l: &Bn) -> Result<EpPoint<F>> {
        if self.endo.is_some() {
            return Ok(self.add(&self.mul(p, k)?, &self.mul(q, l)?));
        }
        ec::mul_sim(self, p, k, q, l)
    }

    /// [k]G + [l]Q
    pub fn mul_sim_gen(&self, k: &Bn, q: &EpPoint<F>, l: &Bn) -> Result<EpPoint<F>> {
        Ok(self.add(&self.mul_gen(k)?, &self.mul(q, l)?))
    }

    /// Sum of [k_i]P_i
    pub fn mul_sim_lot(&self, points: &[EpPoint<F>], k: &[Bn]) -> Result<EpPoint<F>> {
        ec::mul_sim_lot(self, points, k)
    }

    /// [k]P for a single digit
    pub fn mul_dig(&self, p: &EpPoint<F>, k: Dig) -> Result<EpPoint<F>> {
        ec::mul_dig(self, p, k)
    }

    /// Map any point of E(F) into the order-r subgroup
    pub fn mul_cof(&self, p: &EpPoint<F>) -> Result<EpPoint<F>> {
        match &self.h_eff {
            Some(h) => ec::mul_lwnaf(self, p, h),
            None if self.h.is_one() => Ok(*p),
            None => ec::mul_lwnaf(self, p, &self.h),
        }
    }
}
