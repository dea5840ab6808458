//! Hashing to Ed25519 through Elligator 2 on Curve25519

use subtle::{Choice, ConditionallySelectable};

use super::{EdCurve, EdPoint, Fe};
use crate::ep::DEFAULT_DST;
use crate::error::{no_valid, Result};
use crate::field::Field;
use crate::md;

/// Non-square used by Elligator 2 for p = 2^255 - 19
const ELL_Z: u64 = 2;

fn inv0(a: &Fe) -> Fe {
    a.inv().unwrap_or(Fe::zero())
}

impl EdCurve {
    /// g(s) = s^3 + J s^2 + s on the Montgomery curve
    pub(super) fn mont_rhs(&self, s: &Fe) -> Fe {
        s.sqr().add(&self.mont_j.mul(s)).add(&Fe::one()).mul(s)
    }

    /// Elligator 2 image (s, t) of u on Curve25519
    pub fn map_mont(&self, u: &Fe) -> Result<(Fe, Fe)> {
        let mut tv1 = Fe::from_dig(ELL_Z).mul(&u.sqr());
        let e1 = Choice::from((tv1 == Fe::one().neg()) as u8);
        tv1 = Fe::conditional_select(&tv1, &Fe::zero(), e1);
        let x1 = self.mont_j.neg().mul(&inv0(&tv1.add(&Fe::one())));
        let gx1 = self.mont_rhs(&x1);
        let x2 = x1.neg().sub(&self.mont_j);
        let gx2 = self.mont_rhs(&x2);
        let e2 = Choice::from(gx1.is_sqr() as u8);
        let s = Fe::conditional_select(&x2, &x1, e2);
        let gs = Fe::conditional_select(&gx2, &gx1, e2);
        let t = gs.srt().ok_or(no_valid("ed_map"))?;
        // sgn0(t) is 0 when gx1 was square and 1 otherwise
        let flip = Choice::from((((t.sgn0() as u8) ^ e2.unwrap_u8()) == 0) as u8);
        let t = Fe::conditional_select(&t, &t.neg(), flip);
        Ok((s, t))
    }

    /// Birational map from Curve25519 to Ed25519
    pub fn mont_to_ed(&self, s: &Fe, t: &Fe) -> EdPoint {
        let num = self.ell_c1.mul(s);
        let den = *t;
        let yn = s.sub(&Fe::one());
        let yd = s.add(&Fe::one());
        let exc = Choice::from((den.is_zero() || yd.is_zero()) as u8);
        let x = num.mul(&inv0(&den));
        let y = yn.mul(&inv0(&yd));
        let p = EdPoint::from_affine(x, y);
        EdPoint::conditional_select(&p, &EdPoint::neutral(), exc)
    }

    /// Elligator 2 image of u, not cofactor-cleared
    pub fn map_to_curve(&self, u: &Fe) -> Result<EdPoint> {
        let (s, t) = self.map_mont(u)?;
        Ok(self.mont_to_ed(&s, &t))
    }

    /// Hash to the order-l subgroup under the default tag
    pub fn map(&self, msg: &[u8]) -> Result<EdPoint> {
        self.map_dst(msg, DEFAULT_DST)
    }

    /// Hash to the order-l subgroup under a domain separation tag
    pub fn map_dst(&self, msg: &[u8], dst: &[u8]) -> Result<EdPoint> {
        let u = md::hash_to_field::<Fe>(msg, dst, 2)?;
        let q0 = self.map_to_curve(&u[0])?;
        let q1 = self.map_to_curve(&u[1])?;
        Ok(self.mul_cof(&self.add(&q0, &q1)))
    }
}
