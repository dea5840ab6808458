//! Hashing to prime curves (RFC 9380)
//!
//! Curves with a b != 0 use the simplified SWU map, the others the
//! Shallue-van de Woestijne map. Both encode two field elements and add the
//! images before clearing the cofactor.

use subtle::{Choice, ConditionallySelectable};

use super::{inv0, EpCurve, EpPoint};
use crate::bn::Dig;
use crate::error::{no_valid, validate, Result};
use crate::field::Field;
use crate::md;

/// Domain separation tag used when none is given
pub const DEFAULT_DST: &[u8] = b"RELIC";

/// Candidates tried when searching for the map constant Z
const Z_SEARCH: Dig = 256;

/// Attempts of the try-and-increment map
const BASIC_TRIES: usize = 1 << 16;

/// Precomputed constants of the deterministic maps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapConst<F: Field> {
    /// Simplified SWU: c1 = -b/a, c2 = b/(Z a)
    Sswu { z: F, c1: F, c2: F },
    /// Shallue-van de Woestijne: c1 = g(Z), c2 = -Z/2,
    /// c3 = sqrt(-g(Z)(3Z^2 + 4a)), c4 = -4 g(Z)/(3Z^2 + 4a)
    Svdw { z: F, c1: F, c2: F, c3: F, c4: F },
}

#[inline]
fn g<F: Field>(a: &F, b: &F, x: &F) -> F {
    x.sqr().add(a).mul(x).add(b)
}

fn candidates<F: Field>() -> impl Iterator<Item = F> {
    (1..=Z_SEARCH).flat_map(|c| [F::from_dig(c), F::from_dig(c).neg()])
}

impl<F: Field> MapConst<F> {
    /// Constants for y^2 = x^3 + a x + b, searching for the smallest
    /// admissible Z. Fails with `NoValid` when no candidate qualifies.
    pub fn new(a: &F, b: &F) -> Result<Self> {
        if !a.is_zero() && !b.is_zero() {
            let c2_of = |z: &F| b.mul(&inv0(&z.mul(a)));
            let minus_one = F::one().neg();
            let z = candidates::<F>()
                .find(|z| !z.is_sqr() && *z != minus_one && g(a, b, &c2_of(z)).is_sqr())
                .ok_or(no_valid("ep_map_sswu"))?;
            return Self::sswu(a, b, z);
        }
        let three = F::from_dig(3);
        let four = F::from_dig(4);
        let z = candidates::<F>()
            .find(|z| {
                let gz = g(a, b, z);
                let t = three.mul(&z.sqr()).add(&four.mul(a));
                if gz.is_zero() || t.is_zero() {
                    return false;
                }
                let h = t.neg().mul(&inv0(&four.mul(&gz)));
                h.is_sqr() && (gz.is_sqr() || g(a, b, &z.neg().hlv()).is_sqr())
            })
            .ok_or(no_valid("ep_map_svdw"))?;
        Self::svdw(a, b, z)
    }

    /// SSWU constants for a given Z
    pub fn sswu(a: &F, b: &F, z: F) -> Result<Self> {
        validate::parameter(!a.is_zero() && !b.is_zero() && !z.is_sqr(), "ep_map_sswu")?;
        let ia = a.inv()?;
        let c1 = b.neg().mul(&ia);
        let c2 = b.mul(&z.mul(a).inv()?);
        Ok(MapConst::Sswu { z, c1, c2 })
    }

    /// SvdW constants for a given Z
    pub fn svdw(a: &F, b: &F, z: F) -> Result<Self> {
        let gz = g(a, b, &z);
        let t = F::from_dig(3).mul(&z.sqr()).add(&F::from_dig(4).mul(a));
        let mut c3 = gz.mul(&t).neg().srt().ok_or(no_valid("ep_map_svdw"))?;
        if c3.sgn0() {
            c3 = c3.neg();
        }
        let c4 = gz.mul_dig(4).neg().mul(&t.inv()?);
        Ok(MapConst::Svdw { z, c1: gz, c2: z.neg().hlv(), c3, c4 })
    }

    /// The constant Z
    pub fn z(&self) -> &F {
        match self {
            MapConst::Sswu { z, .. } | MapConst::Svdw { z, .. } => z,
        }
    }
}

impl<F: Field> EpCurve<F> {
    /// Simplified SWU image of u
    pub fn map_sswu(&self, u: &F) -> Result<EpPoint<F>> {
        let (z, c1, c2) = match &self.map {
            MapConst::Sswu { z, c1, c2 } => (z, c1, c2),
            MapConst::Svdw { .. } => return Err(no_valid("ep_map_sswu")),
        };
        let zu2 = z.mul(&u.sqr());
        let den = zu2.sqr().add(&zu2);
        let tv1 = inv0(&den);
        let x1 = F::conditional_select(&c1.mul(&F::one().add(&tv1)), c2, Choice::from(den.is_zero() as u8));
        let gx1 = self.rhs(&x1);
        let x2 = zu2.mul(&x1);
        let gx2 = self.rhs(&x2);
        let e1 = Choice::from(gx1.is_sqr() as u8);
        let x = F::conditional_select(&x2, &x1, e1);
        let gx = F::conditional_select(&gx2, &gx1, e1);
        self.finish_map(x, &gx, u, "ep_map_sswu")
    }

    /// Shallue-van de Woestijne image of u
    pub fn map_svdw(&self, u: &F) -> Result<EpPoint<F>> {
        let (z, c1, c2, c3, c4) = match &self.map {
            MapConst::Svdw { z, c1, c2, c3, c4 } => (z, c1, c2, c3, c4),
            MapConst::Sswu { .. } => return Err(no_valid("ep_map_svdw")),
        };
        let tv1 = u.sqr().mul(c1);
        let tv2 = F::one().add(&tv1);
        let tv1 = F::one().sub(&tv1);
        let tv3 = inv0(&tv1.mul(&tv2));
        let tv4 = u.mul(&tv1).mul(&tv3).mul(c3);
        let x1 = c2.sub(&tv4);
        let x2 = c2.add(&tv4);
        let x3 = tv2.sqr().mul(&tv3).sqr().mul(c4).add(z);
        let e1 = Choice::from(self.rhs(&x1).is_sqr() as u8);
        let e2 = Choice::from(self.rhs(&x2).is_sqr() as u8) & !e1;
        let x = F::conditional_select(&x3, &x1, e1);
        let x = F::conditional_select(&x, &x2, e2);
        let gx = self.rhs(&x);
        self.finish_map(x, &gx, u, "ep_map_svdw")
    }

    fn finish_map(&self, x: F, gx: &F, u: &F, ctx: &'static str) -> Result<EpPoint<F>> {
        let y = gx.srt().ok_or(no_valid(ctx))?;
        let flip = Choice::from((y.sgn0() != u.sgn0()) as u8);
        let y = F::conditional_select(&y, &y.neg(), flip);
        Ok(EpPoint::from_affine(x, y))
    }

    /// The deterministic map selected by the curve's constants
    pub fn map_to_curve(&self, u: &F) -> Result<EpPoint<F>> {
        match self.map {
            MapConst::Sswu { .. } => self.map_sswu(u),
            MapConst::Svdw { .. } => self.map_svdw(u),
        }
    }

    /// Hash to the order-r subgroup under the default tag
    pub fn map(&self, msg: &[u8]) -> Result<EpPoint<F>> {
        self.map_dst(msg, DEFAULT_DST)
    }

    /// Hash to the order-r subgroup under a domain separation tag
    pub fn map_dst(&self, msg: &[u8], dst: &[u8]) -> Result<EpPoint<F>> {
        let u = md::hash_to_field::<F>(msg, dst, 2)?;
        let q0 = self.map_to_curve(&u[0])?;
        let q1 = self.map_to_curve(&u[1])?;
        self.mul_cof(&self.add(&q0, &q1))
    }

    /// Try-and-increment: the first x = h(msg) + i with a square root
    pub fn map_basic(&self, msg: &[u8]) -> Result<EpPoint<F>> {
        let mut x = md::hash_to_field::<F>(msg, DEFAULT_DST, 1)?[0];
        for _ in 0..BASIC_TRIES {
            if let Some(y) = self.rhs(&x).srt() {
                let y = if y.sgn0() { y.neg() } else { y };
                return self.mul_cof(&EpPoint::from_affine(x, y));
            }
            x = x.add(&F::one());
        }
        Err(no_valid("ep_map_basic"))
    }
}
