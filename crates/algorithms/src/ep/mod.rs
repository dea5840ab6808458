//! Short Weierstrass curves y^2 = x^3 + a x + b
//!
//! [`EpCurve<F>`] is the curve context over any [`Field`]: G1 curves live
//! over `Fp`, the pairing twists over `Fp2`, and lifted curves over the
//! higher towers. Points carry a [`Coord`] tag; every operation accepts
//! affine points and points in the configured system, and returns points in
//! the configured system.

use core::fmt;

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable};

use crate::bn::{Bn, Dig, Dis, GlvBasis};
use crate::config::{EpAdd, EP_ADD};
use crate::ec::{self, CurveGroup, FixTable};
use crate::error::{validate, Result};
use crate::field::Field;

mod add;
mod codec;
mod curves;
mod lift;
mod map;
mod mul;

pub(crate) use add::inv0;
pub use curves::{b12_p377, b12_p381, b24_p315, b48_p378, bn_p254, k16_p361, k18_p372, nist_p256, secg_k256, ss_p383};
pub(crate) use curves::seed;
pub use lift::{frb_trace, Ep3Curve, Ep4Curve, Ep8Curve};
pub use map::{MapConst, DEFAULT_DST};

/// Shape of a curve coefficient, selecting the cheapest multiplication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opt {
    /// 0
    Zero,
    /// 1
    One,
    /// 2
    Two,
    /// -3
    Minus3,
    /// A small integer
    Tiny(Dis),
    /// Anything else
    Huge,
}

impl Opt {
    /// Classify a coefficient
    pub fn of<F: Field>(c: &F) -> Opt {
        if c.is_zero() {
            return Opt::Zero;
        }
        if *c == F::one() {
            return Opt::One;
        }
        if *c == F::from_dig(2) {
            return Opt::Two;
        }
        if *c == F::from_dig(3).neg() {
            return Opt::Minus3;
        }
        for d in 3..=16 {
            if *c == F::from_dig(d) {
                return Opt::Tiny(d as Dis);
            }
            if *c == F::from_dig(d).neg() {
                return Opt::Tiny(-(d as Dis));
            }
        }
        Opt::Huge
    }

    /// x c, given the coefficient c of this shape
    #[inline]
    pub fn apply<F: Field>(self, x: &F, c: &F) -> F {
        match self {
            Opt::Zero => F::zero(),
            Opt::One => *x,
            Opt::Two => x.dbl(),
            Opt::Minus3 => x.dbl().add(x).neg(),
            Opt::Tiny(d) if d >= 0 => x.mul_dig(d as Dig),
            Opt::Tiny(d) => x.mul_dig(d.unsigned_abs()).neg(),
            Opt::Huge => x.mul(c),
        }
    }
}

/// Coordinate system of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Coord {
    /// Affine, z = 1, or the point at infinity
    Basic = 0,
    /// Homogeneous projective: (X/Z, Y/Z)
    Projc = 1,
    /// Jacobian: (X/Z^2, Y/Z^3)
    Jacob = 2,
}

impl Coord {
    /// The configured system
    pub const fn configured() -> Coord {
        match EP_ADD {
            EpAdd::Basic => Coord::Basic,
            EpAdd::Projc => Coord::Projc,
            EpAdd::Jacob => Coord::Jacob,
        }
    }

    const fn from_u8(v: u8) -> Coord {
        match v {
            0 => Coord::Basic,
            1 => Coord::Projc,
            _ => Coord::Jacob,
        }
    }
}

impl ConditionallySelectable for Coord {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Coord::from_u8(u8::conditional_select(&(*a as u8), &(*b as u8), choice))
    }
}

/// A point of a short Weierstrass curve
#[derive(Clone, Copy)]
pub struct EpPoint<F: Field> {
    /// x, or X in projective or Jacobian form
    pub x: F,
    /// y, or Y
    pub y: F,
    /// Z, one when affine and zero at infinity
    pub z: F,
    /// Coordinate system of the point
    pub coord: Coord,
}

impl<F: Field> fmt::Debug for EpPoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infty() {
            return write!(f, "EpPoint(infinity)");
        }
        f.debug_struct("EpPoint")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("coord", &self.coord)
            .finish()
    }
}

impl<F: Field> Default for EpPoint<F> {
    fn default() -> Self {
        EpPoint::infinity()
    }
}

impl<F: Field> ConditionallySelectable for EpPoint<F> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EpPoint {
            x: F::conditional_select(&a.x, &b.x, choice),
            y: F::conditional_select(&a.y, &b.y, choice),
            z: F::conditional_select(&a.z, &b.z, choice),
            coord: Coord::conditional_select(&a.coord, &b.coord, choice),
        }
    }
}

impl<F: Field> EpPoint<F> {
    /// The point at infinity (0, 1, 0)
    pub fn infinity() -> Self {
        EpPoint { x: F::zero(), y: F::one(), z: F::zero(), coord: Coord::Basic }
    }

    /// Affine point, unchecked
    pub fn from_affine(x: F, y: F) -> Self {
        EpPoint { x, y, z: F::one(), coord: Coord::Basic }
    }

    /// Whether this is the point at infinity
    pub fn is_infty(&self) -> bool {
        self.z.is_zero()
    }
}

/// Endomorphism (x, y) -> (β x, y) acting as [λ] on the order-r subgroup
#[derive(Debug, Clone)]
pub struct Endo<F: Field> {
    /// Cube root of unity β in the base field
    pub beta: F,
    /// Eigenvalue λ of the map on the subgroup
    pub lambda: Bn,
    /// Short basis for splitting scalars
    pub basis: GlvBasis,
}

/// A short Weierstrass curve with a distinguished subgroup of prime order r
#[derive(Debug, Clone)]
pub struct EpCurve<F: Field> {
    name: &'static str,
    pub(crate) a: F,
    pub(crate) b: F,
    b3: F,
    pub(crate) opt_a: Opt,
    pub(crate) opt_b: Opt,
    opt_b3: Opt,
    g: EpPoint<F>,
    r: Bn,
    h: Bn,
    h_eff: Option<Bn>,
    endo: Option<Endo<F>>,
    map: MapConst<F>,
    fix: Option<FixTable<EpPoint<F>>>,
}

impl<F: Field> EpCurve<F> {
    /// Curve with generator (gx, gy) of order r and cofactor h. Fails with
    /// `NoValid` when the generator is not on the curve.
    pub fn new(name: &'static str, a: F, b: F, gx: F, gy: F, r: Bn, h: Bn) -> Result<Self> {
        let _span = tracing::debug_span!("ep_curve", name).entered();
        let b3 = b.dbl().add(&b);
        let map = MapConst::new(&a, &b)?;
        let curve = EpCurve {
            name,
            a,
            b,
            b3,
            opt_a: Opt::of(&a),
            opt_b: Opt::of(&b),
            opt_b3: Opt::of(&b3),
            g: EpPoint::from_affine(gx, gy),
            r,
            h,
            h_eff: None,
            endo: None,
            map,
            fix: None,
        };
        validate::parameter(curve.on_curve(&curve.g), "ep_param_set")?;
        tracing::debug!(opt_a = ?curve.opt_a, opt_b = ?curve.opt_b, r_bits = curve.r.bits(), "curve ready");
        Ok(curve)
    }

    /// Attach the endomorphism (x, y) -> (β x, y) = [λ]. Fails with
    /// `NoValid` unless it acts as [λ] on the generator.
    pub fn with_endo(mut self, beta: F, lambda: Bn) -> Result<Self> {
        let basis = GlvBasis::new(&self.r, &lambda)?;
        let endo = Endo { beta, lambda, basis };
        let phi = EpPoint::from_affine(self.g.x.mul(&endo.beta), self.g.y);
        let lg = ec::mul_lwnaf(&self, &self.g, &endo.lambda)?;
        validate::parameter(self.eq(&phi, &lg), "ep_param_endo")?;
        self.endo = Some(endo);
        Ok(self)
    }

    /// Use [h_eff] instead of [h] to clear the cofactor
    pub fn with_h_eff(mut self, h_eff: Bn) -> Self {
        self.h_eff = Some(h_eff);
        self
    }

    /// Precompute a table for the generator
    pub fn with_fix(mut self) -> Result<Self> {
        let table = FixTable::new(&self, &self.g)?;
        tracing::debug!(curve = self.name, points = table.len(), method = ?table.method(), "fixed-base table");
        self.fix = Some(table);
        Ok(self)
    }

    /// Replace the hashing constants
    pub fn with_map(mut self, map: MapConst<F>) -> Self {
        self.map = map;
        self
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// Name of the curve
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Coefficient a
    pub fn a(&self) -> &F {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &F {
        &self.b
    }

    /// Shapes of a and b
    pub fn opts(&self) -> (Opt, Opt) {
        (self.opt_a, self.opt_b)
    }

    /// Generator of the order-r subgroup
    pub fn gen(&self) -> EpPoint<F> {
        self.g
    }

    /// Order r of the generator
    pub fn ord(&self) -> &Bn {
        &self.r
    }

    /// Cofactor h
    pub fn cofactor(&self) -> &Bn {
        &self.h
    }

    /// The endomorphism, if any
    pub fn endo(&self) -> Option<&Endo<F>> {
        self.endo.as_ref()
    }

    /// Hashing constants
    pub fn map_const(&self) -> &MapConst<F> {
        &self.map
    }

    #[inline]
    pub(crate) fn mul_a(&self, x: &F) -> F {
        self.opt_a.apply(x, &self.a)
    }

    #[inline]
    pub(crate) fn mul_b(&self, x: &F) -> F {
        self.opt_b.apply(x, &self.b)
    }

    #[inline]
    pub(crate) fn mul_b3(&self, x: &F) -> F {
        self.opt_b3.apply(x, &self.b3)
    }

    // ========================================================================
    // Group law
    // ========================================================================

    /// x^3 + a x + b
    pub fn rhs(&self, x: &F) -> F {
        x.sqr().add(&self.a).mul(x).add(&self.b)
    }

    /// Whether P satisfies the curve equation. The point at infinity does.
    pub fn on_curve(&self, p: &EpPoint<F>) -> bool {
        let p = self.to_affine(p);
        p.is_infty() || p.y.sqr() == self.rhs(&p.x)
    }

    /// Sum in the configured coordinate system
    pub fn add(&self, p: &EpPoint<F>, q: &EpPoint<F>) -> EpPoint<F> {
        match EP_ADD {
            EpAdd::Basic => self.add_basic(p, q),
            EpAdd::Projc => self.add_projc(p, q),
            EpAdd::Jacob => self.add_jacob(p, q),
        }
    }

    /// Doubling in the configured coordinate system
    pub fn dbl(&self, p: &EpPoint<F>) -> EpPoint<F> {
        match EP_ADD {
            EpAdd::Basic => self.dbl_basic(p),
            EpAdd::Projc => self.dbl_projc(p),
            EpAdd::Jacob => self.dbl_jacob(p),
        }
    }

    /// -P
    pub fn neg(&self, p: &EpPoint<F>) -> EpPoint<F> {
        EpPoint { y: p.y.neg(), ..*p }
    }

    /// P - Q
    pub fn sub(&self, p: &EpPoint<F>, q: &EpPoint<F>) -> EpPoint<F> {
        self.add(p, &self.neg(q))
    }

    /// Affine representative
    pub fn norm(&self, p: &EpPoint<F>) -> EpPoint<F> {
        self.to_affine(p)
    }

    /// Affine representatives with a single inversion
    pub fn norm_sim(&self, points: &mut [EpPoint<F>]) -> Result<()> {
        let zs: alloc::vec::Vec<F> = points
            .iter()
            .filter(|p| p.coord != Coord::Basic && !p.is_infty())
            .map(|p| p.z)
            .collect();
        let inv = F::inv_sim(&zs)?;
        let mut it = inv.iter();
        for p in points.iter_mut() {
            if p.is_infty() {
                *p = EpPoint::infinity();
            } else if p.coord != Coord::Basic {
                if let Some(zi) = it.next() {
                    *p = self.scale(p, zi);
                }
            }
        }
        Ok(())
    }

    /// Equality of the represented points
    pub fn eq(&self, p: &EpPoint<F>, q: &EpPoint<F>) -> bool {
        let (p, q) = (self.to_affine(p), self.to_affine(q));
        match (p.is_infty(), q.is_infty()) {
            (true, true) => true,
            (false, false) => p.x == q.x && p.y == q.y,
            _ => false,
        }
    }

    /// Multiply the coordinates by powers of a random non-zero λ
    pub fn blind<R: RngCore + CryptoRng + ?Sized>(&self, p: &EpPoint<F>, rng: &mut R) -> EpPoint<F> {
        let mut l = F::rand(rng);
        while l.is_zero() {
            l = F::rand(rng);
        }
        let q = self.to_system(p, Coord::configured());
        match EP_ADD {
            EpAdd::Basic => q,
            EpAdd::Projc => EpPoint { x: q.x.mul(&l), y: q.y.mul(&l), z: q.z.mul(&l), coord: Coord::Projc },
            EpAdd::Jacob => {
                let l2 = l.sqr();
                EpPoint { x: q.x.mul(&l2), y: q.y.mul(&l2).mul(&l), z: q.z.mul(&l), coord: Coord::Jacob }
            }
        }
    }

    /// Whether P is a non-trivial element of the order-r subgroup
    pub fn is_valid(&self, p: &EpPoint<F>) -> bool {
        if p.is_infty() || !self.on_curve(p) {
            return false;
        }
        if self.h.is_one() {
            return true;
        }
        let check = match &self.endo {
            Some(e) => ec::mul_lwnaf(self, p, &e.lambda).map(|lp| self.eq(&self.endo_map(p, e), &lp)),
            None => ec::mul_lwnaf(self, p, &self.r).map(|rp| rp.is_infty()),
        };
        check.unwrap_or(false)
    }

    /// Uniform element of the order-r subgroup
    pub fn rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<EpPoint<F>> {
        let k = Bn::rand_mod(rng, &self.r)?;
        self.mul_gen(&k)
    }

    /// A point of the whole group E(F), not necessarily in the subgroup
    pub fn rand_any<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> EpPoint<F> {
        loop {
            let x = F::rand(rng);
            if let Some(y) = self.rhs(&x).srt() {
                return EpPoint::from_affine(x, y);
            }
        }
    }

    // ========================================================================
    // Coordinate conversions
    // ========================================================================

    fn scale(&self, p: &EpPoint<F>, zi: &F) -> EpPoint<F> {
        match p.coord {
            Coord::Basic => *p,
            Coord::Projc => EpPoint::from_affine(p.x.mul(zi), p.y.mul(zi)),
            Coord::Jacob => {
                let zi2 = zi.sqr();
                EpPoint::from_affine(p.x.mul(&zi2), p.y.mul(&zi2).mul(zi))
            }
        }
    }

    pub(crate) fn to_affine(&self, p: &EpPoint<F>) -> EpPoint<F> {
        if p.is_infty() {
            return EpPoint::infinity();
        }
        if p.coord == Coord::Basic {
            return *p;
        }
        self.scale(p, &inv0(&p.z))
    }

    /// P as an operand of formulas in `sys`: affine points pass through,
    /// points in another system are normalized.
    pub(crate) fn to_system(&self, p: &EpPoint<F>, sys: Coord) -> EpPoint<F> {
        if p.coord == Coord::Basic || p.coord == sys {
            *p
        } else {
            self.to_affine(p)
        }
    }

    pub(crate) fn endo_map(&self, p: &EpPoint<F>, e: &Endo<F>) -> EpPoint<F> {
        EpPoint { x: p.x.mul(&e.beta), ..*p }
    }
}

impl<F: Field> CurveGroup for EpCurve<F> {
    type Point = EpPoint<F>;

    fn infinity(&self) -> EpPoint<F> {
        EpPoint::infinity()
    }

    fn generator(&self) -> EpPoint<F> {
        self.g
    }

    fn order(&self) -> &Bn {
        &self.r
    }

    fn add(&self, p: &EpPoint<F>, q: &EpPoint<F>) -> EpPoint<F> {
        EpCurve::add(self, p, q)
    }

    fn dbl(&self, p: &EpPoint<F>) -> EpPoint<F> {
        EpCurve::dbl(self, p)
    }

    fn neg(&self, p: &EpPoint<F>) -> EpPoint<F> {
        EpCurve::neg(self, p)
    }

    fn is_infty(&self, p: &EpPoint<F>) -> bool {
        p.is_infty()
    }

    fn eq(&self, p: &EpPoint<F>, q: &EpPoint<F>) -> bool {
        EpCurve::eq(self, p, q)
    }

    fn norm(&self, p: &EpPoint<F>) -> EpPoint<F> {
        self.to_affine(p)
    }

    fn norm_sim(&self, points: &mut [EpPoint<F>]) -> Result<()> {
        EpCurve::norm_sim(self, points)
    }

    fn blind<R: RngCore + CryptoRng + ?Sized>(&self, p: &EpPoint<F>, rng: &mut R) -> EpPoint<F> {
        EpCurve::blind(self, p, rng)
    }

    fn fixed(&self) -> Option<&FixTable<EpPoint<F>>> {
        self.fix.as_ref()
    }
}

#[cfg(test)]
mod tests;
