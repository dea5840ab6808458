//! Twisted Edwards curve Ed25519: -x^2 + y^2 = 1 + d x^2 y^2
//!
//! Points use extended coordinates (X : Y : Z : T) with x = X/Z, y = Y/Z
//! and T = XY/Z. Addition and doubling are the complete formulas of
//! Hisil, Wong, Carter and Dawson for a = -1.

use core::fmt;

use rand::{CryptoRng, RngCore};
use relic_params::curves::ed25519;
use subtle::{Choice, ConditionallySelectable};

use crate::bn::{Bn, Dig};
use crate::ec::{self, CurveGroup, FixTable};
use crate::error::{no_valid, validate, Result};
use crate::field::Field;
use crate::fp::{Curve25519, Fp};

mod codec;
mod map;

pub use codec::ED_COMPRESSED;

/// Field element of GF(2^255 - 19)
pub type Fe = Fp<Curve25519>;

/// A point in extended coordinates
#[derive(Clone, Copy)]
pub struct EdPoint {
    /// X
    pub x: Fe,
    /// Y
    pub y: Fe,
    /// Z
    pub z: Fe,
    /// T = X Y / Z
    pub t: Fe,
}

impl fmt::Debug for EdPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdPoint")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish_non_exhaustive()
    }
}

impl Default for EdPoint {
    fn default() -> Self {
        EdPoint::neutral()
    }
}

impl ConditionallySelectable for EdPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdPoint {
            x: Fe::conditional_select(&a.x, &b.x, choice),
            y: Fe::conditional_select(&a.y, &b.y, choice),
            z: Fe::conditional_select(&a.z, &b.z, choice),
            t: Fe::conditional_select(&a.t, &b.t, choice),
        }
    }
}

impl EdPoint {
    /// The neutral element (0, 1)
    pub const fn neutral() -> Self {
        EdPoint { x: Fe::zero(), y: Fe::one(), z: Fe::one(), t: Fe::zero() }
    }

    /// Point from affine coordinates, unchecked
    pub fn from_affine(x: Fe, y: Fe) -> Self {
        EdPoint { x, y, z: Fe::one(), t: x.mul(&y) }
    }

    /// Whether this is the neutral element
    pub fn is_neutral(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }
}

/// The Ed25519 group
#[derive(Debug, Clone)]
pub struct EdCurve {
    d: Fe,
    d2: Fe,
    g: EdPoint,
    l: Bn,
    h: Dig,
    mont_j: Fe,
    ell_c1: Fe,
    fix: Option<FixTable<EdPoint>>,
}

impl EdCurve {
    /// Ed25519 with its base point of prime order l and cofactor 8
    #[tracing::instrument(level = "debug")]
    pub fn ed25519() -> Result<Self> {
        let d = Fe::from_limbs(&ed25519::D)?;
        let g = EdPoint::from_affine(Fe::from_limbs(&ed25519::G_X)?, Fe::from_limbs(&ed25519::G_Y)?);
        let mont_j = Fe::from_dig(ed25519::MONT_J);
        // sqrt(-(J + 2)) with sgn0 = 0
        let mut ell_c1 = mont_j.add(&Fe::from_dig(2)).neg().srt().ok_or(no_valid("ed_param_set"))?;
        if Field::sgn0(&ell_c1) {
            ell_c1 = ell_c1.neg();
        }
        let mut curve = EdCurve {
            d,
            d2: d.dbl(),
            g,
            l: Bn::from_limbs(&ed25519::L),
            h: ed25519::H,
            mont_j,
            ell_c1,
            fix: None,
        };
        validate::parameter(curve.on_curve(&g), "ed_param_set")?;
        let table = FixTable::new(&curve, &g)?;
        tracing::debug!(points = table.len(), "fixed-base table");
        curve.fix = Some(table);
        Ok(curve)
    }

    /// Coefficient d
    pub fn d(&self) -> &Fe {
        &self.d
    }

    /// Base point
    pub fn gen(&self) -> EdPoint {
        self.g
    }

    /// Order l of the base point
    pub fn ord(&self) -> &Bn {
        &self.l
    }

    /// Cofactor
    pub fn cofactor(&self) -> Dig {
        self.h
    }

    /// Whether the affine form of P satisfies the curve equation
    pub fn on_curve(&self, p: &EdPoint) -> bool {
        let Ok(zi) = p.z.inv() else {
            return false;
        };
        let (x2, y2) = (p.x.mul(&zi).sqr(), p.y.mul(&zi).sqr());
        // the extended coordinate must agree too
        let t_ok = p.t.mul(&p.z) == p.x.mul(&p.y);
        t_ok && y2.sub(&x2) == Fe::one().add(&self.d.mul(&x2).mul(&y2))
    }

    /// Complete addition
    pub fn add(&self, p: &EdPoint, q: &EdPoint) -> EdPoint {
        let a = p.y.sub(&p.x).mul(&q.y.sub(&q.x));
        let b = p.y.add(&p.x).mul(&q.y.add(&q.x));
        let c = p.t.mul(&self.d2).mul(&q.t);
        let d = p.z.dbl().mul(&q.z);
        let (e, f, g, h) = (b.sub(&a), d.sub(&c), d.add(&c), b.add(&a));
        EdPoint { x: e.mul(&f), y: g.mul(&h), z: f.mul(&g), t: e.mul(&h) }
    }

    /// Doubling
    pub fn dbl(&self, p: &EdPoint) -> EdPoint {
        let a = p.x.sqr();
        let b = p.y.sqr();
        let c = p.z.sqr().dbl();
        let e = p.x.add(&p.y).sqr().sub(&a).sub(&b);
        let g = b.sub(&a);
        let f = g.sub(&c);
        let h = a.neg().sub(&b);
        EdPoint { x: e.mul(&f), y: g.mul(&h), z: f.mul(&g), t: e.mul(&h) }
    }

    /// -P
    pub fn neg(&self, p: &EdPoint) -> EdPoint {
        EdPoint { x: p.x.neg(), t: p.t.neg(), ..*p }
    }

    /// P - Q
    pub fn sub(&self, p: &EdPoint, q: &EdPoint) -> EdPoint {
        self.add(p, &self.neg(q))
    }

    /// Representative with Z = 1
    pub fn norm(&self, p: &EdPoint) -> EdPoint {
        match p.z.inv() {
            Ok(zi) => EdPoint::from_affine(p.x.mul(&zi), p.y.mul(&zi)),
            Err(_) => *p,
        }
    }

    /// Equality of the represented points
    pub fn eq(&self, p: &EdPoint, q: &EdPoint) -> bool {
        p.x.mul(&q.z) == q.x.mul(&p.z) && p.y.mul(&q.z) == q.y.mul(&p.z)
    }

    /// Whether P is a non-neutral element of the order-l subgroup
    pub fn is_valid(&self, p: &EdPoint) -> bool {
        if p.is_neutral() || !self.on_curve(p) {
            return false;
        }
        ec::mul_lwnaf(self, p, &self.l).map(|q| q.is_neutral()).unwrap_or(false)
    }

    /// [8]P
    pub fn mul_cof(&self, p: &EdPoint) -> EdPoint {
        let mut r = *p;
        let mut h = self.h;
        while h > 1 {
            r = self.dbl(&r);
            h >>= 1;
        }
        r
    }

    /// [k]P, configured method
    pub fn mul(&self, p: &EdPoint, k: &Bn) -> Result<EdPoint> {
        ec::mul(self, p, k)
    }

    /// [k]G through the fixed-base table
    pub fn mul_gen(&self, k: &Bn) -> Result<EdPoint> {
        CurveGroup::mul_gen(self, k)
    }

    /// [k]P + [l]Q
    pub fn mul_sim(&self, p: &EdPoint, k: &Bn, q: &EdPoint, l: &Bn) -> Result<EdPoint> {
        ec::mul_sim(self, p, k, q, l)
    }

    /// Uniform element of the order-l subgroup
    pub fn rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<EdPoint> {
        CurveGroup::rand(self, rng)
    }
}

impl CurveGroup for EdCurve {
    type Point = EdPoint;

    fn infinity(&self) -> EdPoint {
        EdPoint::neutral()
    }

    fn generator(&self) -> EdPoint {
        self.g
    }

    fn order(&self) -> &Bn {
        &self.l
    }

    fn add(&self, p: &EdPoint, q: &EdPoint) -> EdPoint {
        EdCurve::add(self, p, q)
    }

    fn dbl(&self, p: &EdPoint) -> EdPoint {
        EdCurve::dbl(self, p)
    }

    fn neg(&self, p: &EdPoint) -> EdPoint {
        EdCurve::neg(self, p)
    }

    fn is_infty(&self, p: &EdPoint) -> bool {
        p.is_neutral()
    }

    fn eq(&self, p: &EdPoint, q: &EdPoint) -> bool {
        EdCurve::eq(self, p, q)
    }

    fn norm(&self, p: &EdPoint) -> EdPoint {
        EdCurve::norm(self, p)
    }

    fn norm_sim(&self, points: &mut [EdPoint]) -> Result<()> {
        let zs: alloc::vec::Vec<Fe> = points.iter().map(|p| p.z).collect();
        let inv = Fe::inv_sim(&zs)?;
        for (p, zi) in points.iter_mut().zip(&inv) {
            *p = EdPoint::from_affine(p.x.mul(zi), p.y.mul(zi));
        }
        Ok(())
    }

    fn blind<R: RngCore + CryptoRng + ?Sized>(&self, p: &EdPoint, rng: &mut R) -> EdPoint {
        let mut l = Fe::random(rng);
        while l.is_zero() {
            l = Fe::random(rng);
        }
        EdPoint { x: p.x.mul(&l), y: p.y.mul(&l), z: p.z.mul(&l), t: p.t.mul(&l) }
    }

    fn fixed(&self) -> Option<&FixTable<EdPoint>> {
        self.fix.as_ref()
    }
}

#[cfg(test)]
mod tests;
