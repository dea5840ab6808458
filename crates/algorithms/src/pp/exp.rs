//! Final exponentiation f^((p^12 - 1) / r)
//!
//! The easy part (p^6 - 1)(p^2 + 1) lands in the cyclotomic subgroup. The
//! hard part (p^4 - p^2 + 1) / r runs as an addition chain in z, using
//! compressed squarings for every power by the seed.

use super::{Gt, Pairing};
use crate::bn::Bn;
use crate::ep2::Family;
use crate::error::Result;
use crate::field::Field;
use crate::fp::FpParams;
use crate::fpx::Cyclotomic;

impl<P: FpParams> Pairing<P> {
    /// f^((p^6 - 1)(p^2 + 1))
    pub fn exp_easy(&self, f: &Gt<P>) -> Result<Gt<P>> {
        f.conv_cyc(&self.tower)
    }

    /// f^z for cyclotomic f
    fn exp_z(&self, f: &Gt<P>) -> Result<Gt<P>> {
        f.exp_cyc_sps(&self.z_naf, self.seed().is_neg())
    }

    /// Hard part on an element of the cyclotomic subgroup. The result is
    /// a fixed power of f^((p^4 - p^2 + 1) / r), coprime to r.
    pub fn exp_hard(&self, f: &Gt<P>) -> Result<Gt<P>> {
        match self.family() {
            Family::Bn => self.exp_hard_bn(f),
            _ => self.exp_hard_b12(f),
        }
    }

    /// c with exp_hard(f) = f^(c (p^4 - p^2 + 1) / r): 3 for B12 and
    /// 2z (6z^2 + 3z + 1) for BN
    pub fn hard_power(&self) -> Result<Bn> {
        let z = self.seed();
        match self.family() {
            Family::Bn => {
                let c = z.sqr()?.mul_dig(6)?.add(&z.mul_dig(3)?)?.add_dig(1)?;
                z.dbl()?.mul(&c)
            }
            _ => Ok(Bn::from_dig(3)),
        }
    }

    /// Full final exponentiation
    pub fn final_exp(&self, f: &Gt<P>) -> Result<Gt<P>> {
        let t = self.exp_easy(f)?;
        self.exp_hard(&t)
    }

    /// 3 (p^4 - p^2 + 1) / r = (z - 1)^2 (z + p) (z^2 + p^2 - 1) + 3
    fn exp_hard_b12(&self, f: &Gt<P>) -> Result<Gt<P>> {
        let tw = &self.tower;
        let a = self.exp_z(f)?.mul(&f.inv_cyc());
        let a = self.exp_z(&a)?.mul(&a.inv_cyc());
        let b = self.exp_z(&a)?.mul(&a.frb(tw, 1));
        let c = self.exp_z(&self.exp_z(&b)?)?.mul(&b.frb(tw, 2)).mul(&b.inv_cyc());
        Ok(c.mul(&f.sqr_cyc().mul(f)))
    }

    /// Fuentes-Castaneda et al. chain, computing the hard part raised to
    /// 2z (6z^2 + 3z + 1)
    fn exp_hard_bn(&self, r: &Gt<P>) -> Result<Gt<P>> {
        let tw = &self.tower;
        let eneg = |g: &Gt<P>| self.exp_z(g).map(|x| x.inv_cyc());

        let y0 = eneg(r)?;
        let y1 = y0.sqr_cyc();
        let y2 = y1.sqr_cyc();
        let y3 = y2.mul(&y1);
        let y4 = eneg(&y3)?;
        let y5 = y4.sqr_cyc();
        let y6 = eneg(&y5)?.inv_cyc();
        let y3 = y3.inv_cyc();
        let y7 = y6.mul(&y4);
        let y8 = y7.mul(&y3);
        let y9 = y8.mul(&y1);
        let y10 = y8.mul(&y4);
        let y11 = y10.mul(r);
        let y13 = y9.frb(tw, 1).mul(&y11);
        let y14 = y8.frb(tw, 2).mul(&y13);
        let y15 = r.inv_cyc().mul(&y9).frb(tw, 3);
        Ok(y15.mul(&y14))
    }
}
