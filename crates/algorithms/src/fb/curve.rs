//! Binary curves y^2 + xy = x^3 + a x^2 + b over GF(2^283)
//!
//! Points are kept in Lopez-Dahab coordinates (X : Y : Z) with x = X/Z and
//! y = Y/Z^2; the point at infinity has Z = 0.

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use relic_api::Serialize;
use relic_params::curves::nist_b283 as params;
use subtle::{Choice, ConditionallySelectable};

use super::{Fb, FB_BYTES, FB_DIGS};
use crate::bn::{rec_tnaf, Bn, Dig};
use crate::config::{EpAdd, EP_ADD};
use crate::ec::{self, CurveGroup, FixTable};
use crate::ep::DEFAULT_DST;
use crate::error::{no_valid, validate, Result};
use crate::md;

const TAG_INFTY: u8 = 0x00;
const TAG_PACK: u8 = 0x02;
const TAG_FULL: u8 = 0x04;
const BASIC_TRIES: usize = 1 << 16;

/// A point in Lopez-Dahab coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct FbPoint {
    /// X
    pub x: Fb,
    /// Y
    pub y: Fb,
    /// Z, with x = X / Z and y = Y / Z^2
    pub z: Fb,
}

impl ConditionallySelectable for FbPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FbPoint {
            x: Fb::conditional_select(&a.x, &b.x, choice),
            y: Fb::conditional_select(&a.y, &b.y, choice),
            z: Fb::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl FbPoint {
    /// The point at infinity
    pub const fn infinity() -> Self {
        FbPoint { x: Fb::one(), y: Fb::zero(), z: Fb::zero() }
    }

    /// Point from affine coordinates, unchecked
    pub const fn from_affine(x: Fb, y: Fb) -> Self {
        FbPoint { x, y, z: Fb::one() }
    }

    /// Whether this is the point at infinity
    pub fn is_infty(&self) -> bool {
        self.z.is_zero()
    }
}

/// A binary curve with a generator of prime order r
#[derive(Debug, Clone)]
pub struct FbCurve {
    name: &'static str,
    a: Fb,
    b: Fb,
    g: FbPoint,
    r: Bn,
    h: Dig,
    /// Frobenius trace sign of a Koblitz curve, `None` otherwise
    mu: Option<i8>,
    fix: Option<FixTable<FbPoint>>,
}

impl FbCurve {
    /// Curve from its parameters; the generator must lie on it
    pub fn new(name: &'static str, a: Fb, b: Fb, g: FbPoint, r: Bn, h: Dig) -> Result<Self> {
        validate::parameter(a.is_zero() || a.is_one(), "fb_param_set")?;
        validate::parameter(!b.is_zero(), "fb_param_set")?;
        let mu = if b.is_one() { Some(if a.is_one() { 1 } else { -1 }) } else { None };
        let curve = FbCurve { name, a, b, g, r, h, mu, fix: None };
        if !curve.on_curve(&g) {
            tracing::debug!(curve = name, "generator is not on the curve");
            return Err(no_valid("fb_param_set"));
        }
        Ok(curve)
    }

    /// Attach a fixed-base table for the generator
    pub fn with_fix(mut self) -> Result<Self> {
        let table = FixTable::new(&self, &self.g)?;
        tracing::debug!(curve = self.name, points = table.len(), "fixed-base table");
        self.fix = Some(table);
        Ok(self)
    }

    /// Curve name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Coefficient a
    pub fn a(&self) -> &Fb {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &Fb {
        &self.b
    }

    /// Generator
    pub fn gen(&self) -> FbPoint {
        self.g
    }

    /// Order r
    pub fn ord(&self) -> &Bn {
        &self.r
    }

    /// Cofactor h
    pub fn cofactor(&self) -> Dig {
        self.h
    }

    /// Whether the curve is a Koblitz curve (b = 1)
    pub fn is_koblitz(&self) -> bool {
        self.mu.is_some()
    }

    /// x^3 + a x^2 + b
    fn rhs(&self, x: &Fb) -> Fb {
        let x2 = x.sqr();
        let t = if self.a.is_one() { x2.mul(x).add(&x2) } else { x2.mul(x) };
        t.add(&self.b)
    }

    /// Whether P satisfies the curve equation
    pub fn on_curve(&self, p: &FbPoint) -> bool {
        if p.is_infty() {
            return true;
        }
        let q = self.norm(p);
        q.y.sqr().add(&q.x.mul(&q.y)) == self.rhs(&q.x)
    }

    /// -P = (x, x + y)
    pub fn neg(&self, p: &FbPoint) -> FbPoint {
        // -(X : Y : Z) = (X : XZ + Y : Z)
        FbPoint { y: p.x.mul(&p.z).add(&p.y), ..*p }
    }

    /// Affine representative
    pub fn norm(&self, p: &FbPoint) -> FbPoint {
        if p.is_infty() || p.z.is_one() {
            return *p;
        }
        match p.z.inv() {
            Ok(zi) => FbPoint::from_affine(p.x.mul(&zi), p.y.mul(&zi.sqr())),
            Err(_) => FbPoint::infinity(),
        }
    }

    /// Equality of the represented points
    pub fn eq(&self, p: &FbPoint, q: &FbPoint) -> bool {
        match (p.is_infty(), q.is_infty()) {
            (true, true) => true,
            (false, false) => {
                p.x.mul(&q.z) == q.x.mul(&p.z) && p.y.mul(&q.z.sqr()) == q.y.mul(&p.z.sqr())
            }
            _ => false,
        }
    }

    /// Affine doubling
    pub fn dbl_basic(&self, p: &FbPoint) -> FbPoint {
        let p = self.norm(p);
        if p.is_infty() {
            return p;
        }
        let Ok(xi) = p.x.inv() else {
            return FbPoint::infinity();
        };
        let l = p.x.add(&p.y.mul(&xi));
        let x3 = l.sqr().add(&l).add(&self.a);
        let y3 = p.x.sqr().add(&l.mul(&x3)).add(&x3);
        FbPoint::from_affine(x3, y3)
    }

    /// Affine addition
    pub fn add_basic(&self, p: &FbPoint, q: &FbPoint) -> FbPoint {
        let (p, q) = (self.norm(p), self.norm(q));
        if p.is_infty() {
            return q;
        }
        if q.is_infty() {
            return p;
        }
        let dx = p.x.add(&q.x);
        let Ok(dxi) = dx.inv() else {
            return if q.y == p.x.add(&p.y) { FbPoint::infinity() } else { self.dbl_basic(&p) };
        };
        let l = p.y.add(&q.y).mul(&dxi);
        let x3 = l.sqr().add(&l).add(&dx).add(&self.a);
        let y3 = l.mul(&p.x.add(&x3)).add(&x3).add(&p.y);
        FbPoint::from_affine(x3, y3)
    }

    /// Lopez-Dahab doubling
    pub fn dbl_projc(&self, p: &FbPoint) -> FbPoint {
        if p.is_infty() || p.x.is_zero() {
            return FbPoint::infinity();
        }
        let z3 = p.x.sqr().mul(&p.z.sqr());
        let bz4 = self.b.mul(&p.z.sqr().sqr());
        let x3 = p.x.sqr().sqr().add(&bz4);
        let az3 = if self.a.is_one() { z3 } else { Fb::zero() };
        let y3 = bz4.mul(&z3).add(&x3.mul(&az3.add(&p.y.sqr()).add(&bz4)));
        FbPoint { x: x3, y: y3, z: z3 }
    }

    /// Lopez-Dahab addition, mixed when Z2 = 1
    pub fn add_projc(&self, p: &FbPoint, q: &FbPoint) -> FbPoint {
        if p.is_infty() {
            return *q;
        }
        if q.is_infty() {
            return *p;
        }
        let (z1s, z2s) = (p.z.sqr(), q.z.sqr());
        let a = p.y.mul(&z2s).add(&q.y.mul(&z1s));
        let b = p.x.mul(&q.z).add(&q.x.mul(&p.z));
        if b.is_zero() {
            return if a.is_zero() { self.dbl_projc(p) } else { FbPoint::infinity() };
        }
        let t = p.z.mul(&b);
        let c = t.mul(&q.z);
        let z3 = c.sqr();
        let d = if self.a.is_one() { c.add(&z1s.mul(&z2s)) } else { c };
        let x3 = a.sqr().add(&a.mul(&c)).add(&b.sqr().mul(&d));
        let e = a.mul(&c);
        let t2z2 = t.sqr().mul(&q.z);
        let f = x3.add(&q.x.mul(&t2z2));
        let y3 = e.mul(&f).add(&x3.mul(&z3)).add(&q.y.mul(&t2z2.sqr()));
        FbPoint { x: x3, y: y3, z: z3 }
    }

    /// P + Q in the configured coordinates
    pub fn add(&self, p: &FbPoint, q: &FbPoint) -> FbPoint {
        match EP_ADD {
            EpAdd::Basic => self.add_basic(p, q),
            _ => self.add_projc(p, q),
        }
    }

    /// 2P in the configured coordinates
    pub fn dbl(&self, p: &FbPoint) -> FbPoint {
        match EP_ADD {
            EpAdd::Basic => self.dbl_basic(p),
            _ => self.dbl_projc(p),
        }
    }

    /// P - Q
    pub fn sub(&self, p: &FbPoint, q: &FbPoint) -> FbPoint {
        self.add(p, &self.neg(q))
    }

    /// Frobenius map (x, y) -> (x^2, y^2)
    pub fn frb(&self, p: &FbPoint) -> FbPoint {
        FbPoint { x: p.x.sqr(), y: p.y.sqr(), z: p.z.sqr() }
    }

    /// Whether P is a finite point of order r
    pub fn is_valid(&self, p: &FbPoint) -> bool {
        if p.is_infty() || !self.on_curve(p) {
            return false;
        }
        ec::mul_lwnaf(self, p, &self.r).map(|q| q.is_infty()).unwrap_or(false)
    }

    /// [h]P
    pub fn mul_cof(&self, p: &FbPoint) -> Result<FbPoint> {
        ec::mul_dig(self, p, self.h)
    }

    /// [k]P by evaluating the tau-adic NAF of k with the Frobenius map
    pub fn mul_tnaf(&self, p: &FbPoint, k: &Bn) -> Result<FbPoint> {
        let Some(mu) = self.mu else {
            return Err(no_valid("fb_mul_tnaf"));
        };
        if k.is_zero() || p.is_infty() {
            return Ok(FbPoint::infinity());
        }
        let digits = rec_tnaf(&k.abs(), mu)?;
        let base = self.norm(p);
        let minus = self.neg(&base);
        let mut r = FbPoint::infinity();
        for &u in digits.iter().rev() {
            r = self.frb(&r);
            if u == 1 {
                r = self.add(&r, &base);
            } else if u == -1 {
                r = self.add(&r, &minus);
            }
        }
        Ok(if k.is_neg() { self.neg(&r) } else { r })
    }

    /// [k]P: tau-adic on Koblitz curves, the configured method otherwise
    pub fn mul(&self, p: &FbPoint, k: &Bn) -> Result<FbPoint> {
        if self.is_koblitz() {
            self.mul_tnaf(p, k)
        } else {
            ec::mul(self, p, k)
        }
    }

    /// [k]G
    pub fn mul_gen(&self, k: &Bn) -> Result<FbPoint> {
        CurveGroup::mul_gen(self, k)
    }

    /// [k]P + [l]Q
    pub fn mul_sim(&self, p: &FbPoint, k: &Bn, q: &FbPoint, l: &Bn) -> Result<FbPoint> {
        ec::mul_sim(self, p, k, q, l)
    }

    /// Uniform element of the subgroup
    pub fn rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<FbPoint> {
        CurveGroup::rand(self, rng)
    }

    /// y with y/x of the given parity, or sqrt(b) at x = 0
    fn solve_y(&self, x: &Fb, bit: bool) -> Result<Fb> {
        if x.is_zero() {
            return Ok(self.b.srt());
        }
        // y = x z with z^2 + z = x + a + b / x^2
        let c = x.add(&self.a).add(&self.b.mul(&x.sqr().inv()?));
        let mut z = c.slv()?;
        if z.get_bit(0) != bit {
            z = z.add_dig(1);
        }
        Ok(x.mul(&z))
    }

    /// Try-and-increment hashing into the order-r subgroup
    pub fn map(&self, msg: &[u8]) -> Result<FbPoint> {
        self.map_dst(msg, DEFAULT_DST)
    }

    /// Hash with an explicit domain separation tag
    pub fn map_dst(&self, msg: &[u8], dst: &[u8]) -> Result<FbPoint> {
        let bytes = md::expand_message_xmd(msg, dst, FB_BYTES)?;
        let mut x = Fb::from_uniform(&bytes)?;
        for _ in 0..BASIC_TRIES {
            if let Ok(y) = self.solve_y(&x, false) {
                return self.mul_cof(&FbPoint::from_affine(x, y));
            }
            x = x.next();
        }
        Err(no_valid("fb_map"))
    }

    /// Length of the encoding of P
    pub fn size_bin(&self, p: &FbPoint, pack: bool) -> usize {
        if p.is_infty() {
            1
        } else if pack {
            1 + FB_BYTES
        } else {
            1 + 2 * FB_BYTES
        }
    }

    /// Encode P; the packed form keeps x and the low bit of y/x
    pub fn write_bin(&self, p: &FbPoint, out: &mut [u8], pack: bool) -> Result<()> {
        validate::length("fb_write_bin", out.len(), self.size_bin(p, pack))?;
        if p.is_infty() {
            out[0] = TAG_INFTY;
            return Ok(());
        }
        let q = self.norm(p);
        let (x, y) = out[1..].split_at_mut(FB_BYTES);
        q.x.write_bin(x, false)?;
        if pack {
            let bit = match q.x.inv() {
                Ok(xi) => q.y.mul(&xi).get_bit(0),
                Err(_) => false,
            };
            out[0] = TAG_PACK | bit as u8;
        } else {
            q.y.write_bin(y, false)?;
            out[0] = TAG_FULL;
        }
        Ok(())
    }

    /// Decode a point, rejecting points off the curve
    pub fn read_bin(&self, bytes: &[u8]) -> Result<FbPoint> {
        validate::min_length("fb_read_bin", bytes.len(), 1)?;
        let tag = bytes[0];
        let p = match tag {
            TAG_INFTY => {
                validate::length("fb_read_bin", bytes.len(), 1)?;
                return Ok(FbPoint::infinity());
            }
            0x02 | 0x03 => {
                validate::length("fb_read_bin", bytes.len(), 1 + FB_BYTES)?;
                let x = Fb::read_bin(&bytes[1..])?;
                let y = self.solve_y(&x, tag & 1 == 1)?;
                FbPoint::from_affine(x, y)
            }
            TAG_FULL => {
                validate::length("fb_read_bin", bytes.len(), 1 + 2 * FB_BYTES)?;
                let x = Fb::read_bin(&bytes[1..1 + FB_BYTES])?;
                let y = Fb::read_bin(&bytes[1 + FB_BYTES..])?;
                FbPoint::from_affine(x, y)
            }
            _ => {
                tracing::trace!(curve = self.name, tag, "unknown point tag");
                return Err(no_valid("fb_read_bin"));
            }
        };
        if !self.on_curve(&p) {
            tracing::trace!(curve = self.name, "decoded point is not on the curve");
            return Err(no_valid("fb_read_bin"));
        }
        Ok(p)
    }
}

impl CurveGroup for FbCurve {
    type Point = FbPoint;

    fn infinity(&self) -> FbPoint {
        FbPoint::infinity()
    }

    fn generator(&self) -> FbPoint {
        self.g
    }

    fn order(&self) -> &Bn {
        &self.r
    }

    fn add(&self, p: &FbPoint, q: &FbPoint) -> FbPoint {
        FbCurve::add(self, p, q)
    }

    fn dbl(&self, p: &FbPoint) -> FbPoint {
        FbCurve::dbl(self, p)
    }

    fn neg(&self, p: &FbPoint) -> FbPoint {
        FbCurve::neg(self, p)
    }

    fn is_infty(&self, p: &FbPoint) -> bool {
        p.is_infty()
    }

    fn eq(&self, p: &FbPoint, q: &FbPoint) -> bool {
        FbCurve::eq(self, p, q)
    }

    fn norm(&self, p: &FbPoint) -> FbPoint {
        FbCurve::norm(self, p)
    }

    fn norm_sim(&self, points: &mut [FbPoint]) -> Result<()> {
        let finite: Vec<usize> = (0..points.len()).filter(|&i| !points[i].is_infty()).collect();
        // Montgomery's trick over the finite points
        let mut acc = Vec::with_capacity(finite.len());
        let mut run = Fb::one();
        for &i in &finite {
            acc.push(run);
            run = run.mul(&points[i].z);
        }
        let mut inv = run.inv().unwrap_or(Fb::zero());
        for (&i, pre) in finite.iter().zip(acc).rev() {
            let zi = inv.mul(&pre);
            inv = inv.mul(&points[i].z);
            let p = points[i];
            points[i] = FbPoint::from_affine(p.x.mul(&zi), p.y.mul(&zi.sqr()));
        }
        Ok(())
    }

    fn blind<R: RngCore + CryptoRng + ?Sized>(&self, p: &FbPoint, rng: &mut R) -> FbPoint {
        if p.is_infty() {
            return *p;
        }
        let mut l = Fb::random(rng);
        while l.is_zero() {
            l = Fb::random(rng);
        }
        FbPoint { x: p.x.mul(&l), y: p.y.mul(&l.sqr()), z: p.z.mul(&l) }
    }

    fn fixed(&self) -> Option<&FixTable<FbPoint>> {
        self.fix.as_ref()
    }
}

fn fb(limbs: &[u64; FB_DIGS]) -> Result<Fb> {
    Fb::from_limbs(limbs)
}

/// NIST K-283
#[tracing::instrument(level = "debug")]
pub fn nist_k283() -> Result<FbCurve> {
    let g = FbPoint::from_affine(fb(&params::k283::G_X)?, fb(&params::k283::G_Y)?);
    FbCurve::new("NIST-K283", Fb::zero(), Fb::one(), g, Bn::from_limbs(&params::k283::N), params::k283::H)?
        .with_fix()
}

/// NIST B-283
#[tracing::instrument(level = "debug")]
pub fn nist_b283() -> Result<FbCurve> {
    let g = FbPoint::from_affine(fb(&params::b283::G_X)?, fb(&params::b283::G_Y)?);
    FbCurve::new(
        "NIST-B283",
        Fb::one(),
        fb(&params::b283::B)?,
        g,
        Bn::from_limbs(&params::b283::N),
        params::b283::H,
    )?
    .with_fix()
}
