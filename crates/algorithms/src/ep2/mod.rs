//! The sextic twist E'(Fp2) carrying G2 of the k = 12 pairings
//!
//! [`Ep2`] wraps the twist as an [`EpCurve<Fp2>`] and adds what the
//! pairing families know about it: the untwist-Frobenius-twist map ψ, the
//! subgroup identities, cofactor clearing and GLS decompositions.

use alloc::vec;
use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};

use crate::bn::{rec_frb, Bn, Dig, FrbBasis};
use crate::ec::{self, CurveGroup, FixTable};
use crate::ep::{EpCurve, EpPoint};
use crate::error::{validate, Result};
use crate::field::Field;
use crate::fp::{Fp, FpParams};
use crate::fpx::Fp2;
use crate::md;

mod curves;

pub use curves::{b12_p377, b12_p381, bn_p254};

/// Twist type: y^2 = x^3 + b/ξ (D) or y^2 = x^3 + b ξ (M)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Twist {
    /// Divisive
    D,
    /// Multiplicative
    M,
}

/// Pairing-friendly family of the curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// Barreto-Naehrig: p = 36z^4 + 36z^3 + 24z^2 + 6z + 1
    Bn,
    /// Barreto-Lynn-Scott, k = 12: p = (z - 1)^2 (z^4 - z^2 + 1) / 3 + z
    B12,
    /// Barreto-Lynn-Scott, k = 24: r = z^8 - z^4 + 1
    B24,
    /// Barreto-Lynn-Scott, k = 48: r = z^16 - z^8 + 1
    B48,
    /// Kachisa-Schaefer-Scott, k = 16, y^2 = x^3 + a x
    K16,
    /// Kachisa-Schaefer-Scott, k = 18
    K18,
    /// Supersingular y^2 = x^3 + a x over p = 3 mod 4, k = 2
    Ss,
}

impl Family {
    /// Embedding degree k
    pub const fn embed(self) -> usize {
        match self {
            Family::Ss => 2,
            Family::Bn | Family::B12 => 12,
            Family::K16 => 16,
            Family::K18 => 18,
            Family::B24 => 24,
            Family::B48 => 48,
        }
    }

    /// Degree d of the twist carrying G2
    pub const fn twist_deg(self) -> usize {
        match self {
            Family::Ss => 2,
            Family::K16 => 4,
            _ => 6,
        }
    }
}

/// Point of the twist
pub type Ep2Point<P> = EpPoint<Fp2<P>>;

/// G2 context: the twist curve with its family data
#[derive(Debug, Clone)]
pub struct Ep2<P: FpParams> {
    curve: EpCurve<Fp2<P>>,
    twist: Twist,
    family: Family,
    z: Bn,
    psi_x: Fp2<P>,
    psi_y: Fp2<P>,
    gls: Option<FrbBasis>,
}

/// Twist coefficient for the base-curve coefficient b
pub fn twist_b<P: FpParams>(b: &Fp<P>, twist: Twist) -> Result<Fp2<P>> {
    let b = Fp2::from_base(*b);
    Ok(match twist {
        Twist::D => b.mul(&Fp2::xi().inv()?),
        Twist::M => b.mul_nor(),
    })
}

/// The four-dimensional GLS lattice of a BN curve, with ψ acting as p mod r
fn bn_lattice(z: &Bn) -> Result<FrbBasis> {
    let lin = |a: i64, b: i64| -> Result<Bn> { z.mul(&Bn::from_i64(a))?.add(&Bn::from_i64(b)) };
    FrbBasis::new(vec![
        vec![lin(1, 1)?, lin(1, 0)?, lin(1, 0)?, lin(-2, 0)?],
        vec![lin(2, 1)?, lin(-1, 0)?, lin(-1, -1)?, lin(-1, 0)?],
        vec![lin(2, 0)?, lin(2, 1)?, lin(2, 1)?, lin(2, 1)?],
        vec![lin(1, -1)?, lin(4, 2)?, lin(-2, 1)?, lin(1, -1)?],
    ])
}

impl<P: FpParams> Ep2<P> {
    /// Family data for a twist whose generator spans G2. Fails with
    /// `NoValid` when the generator does not satisfy the subgroup identity.
    pub fn new(curve: EpCurve<Fp2<P>>, twist: Twist, family: Family, z: Bn) -> Result<Self> {
        let _span = tracing::debug_span!("ep2_new", curve = curve.name(), ?twist, ?family).entered();
        validate::parameter(family.embed() == 12, "ep2_param_set")?;
        let p = Fp::<P>::modulus();
        let p1 = p.sub_dig(1)?;
        let xi = Fp2::<P>::xi();
        let e3 = xi.exp(&p1.div_dig(3)?)?;
        let e2 = xi.exp(&p1.hlv())?;
        let (psi_x, psi_y) = match twist {
            Twist::D => (e3, e2),
            Twist::M => (e3.inv()?, e2.inv()?),
        };
        let gls = match family {
            Family::Bn => Some(bn_lattice(&z)?),
            _ => None,
        };
        let g2 = Ep2 { curve, twist, family, z, psi_x, psi_y, gls };
        validate::parameter(g2.is_valid(&g2.curve.gen()), "ep2_param_set")?;
        tracing::debug!(z_bits = g2.z.bits(), "twist ready");
        Ok(g2)
    }

    /// Precompute a table for the generator
    pub fn with_fix(mut self) -> Result<Self> {
        self.curve = self.curve.with_fix()?;
        Ok(self)
    }

    /// The twist as a plain curve
    pub fn curve(&self) -> &EpCurve<Fp2<P>> {
        &self.curve
    }

    /// D- or M-type
    pub fn twist(&self) -> Twist {
        self.twist
    }

    /// Pairing family
    pub fn family(&self) -> Family {
        self.family
    }

    /// Family seed z
    pub fn seed(&self) -> &Bn {
        &self.z
    }

    /// Generator of G2
    pub fn gen(&self) -> Ep2Point<P> {
        self.curve.gen()
    }

    /// Order r of G2
    pub fn ord(&self) -> &Bn {
        self.curve.ord()
    }

    // ========================================================================
    // Endomorphism
    // ========================================================================

    /// ψ(x, y) = (conj(x) ψx, conj(y) ψy), acting as [p] on G2
    pub fn psi(&self, q: &Ep2Point<P>) -> Ep2Point<P> {
        EpPoint {
            x: q.x.conj().mul(&self.psi_x),
            y: q.y.conj().mul(&self.psi_y),
            z: q.z.conj(),
            coord: q.coord,
        }
    }

    /// ψ applied n times
    pub fn psi_n(&self, q: &Ep2Point<P>, n: usize) -> Ep2Point<P> {
        (0..n).fold(*q, |acc, _| self.psi(&acc))
    }

    /// Whether Q is a non-trivial element of G2. B12 checks ψ(Q) = [z]Q;
    /// BN checks [z + 1]Q + ψ([z]Q) + ψ^2([z]Q) = ψ^3([2z]Q).
    pub fn is_valid(&self, q: &Ep2Point<P>) -> bool {
        if q.is_infty() || !self.curve.on_curve(q) {
            return false;
        }
        self.subgroup_identity(q).unwrap_or(false)
    }

    fn subgroup_identity(&self, q: &Ep2Point<P>) -> Result<bool> {
        let c = &self.curve;
        let zq = ec::mul_lwnaf(c, q, &self.z)?;
        match self.family {
            Family::Bn => {
                let lhs = c.add(&c.add(&zq, q), &c.add(&self.psi(&zq), &self.psi_n(&zq, 2)));
                let rhs = self.psi_n(&c.dbl(&zq), 3);
                Ok(c.eq(&lhs, &rhs))
            }
            _ => Ok(c.eq(&self.psi(q), &zq)),
        }
    }

    /// Map any twist point into G2
    pub fn mul_cof(&self, q: &Ep2Point<P>) -> Result<Ep2Point<P>> {
        let c = &self.curve;
        match self.family {
            Family::Bn => ec::mul_lwnaf(c, q, c.cofactor()),
            _ => {
                // [z^2 - z - 1]Q + [z - 1]ψ(Q) + ψ^2(2Q)
                let z = &self.z;
                let zq = ec::mul_lwnaf(c, q, z)?;
                let z2q = ec::mul_lwnaf(c, &zq, z)?;
                let t0 = c.sub(&c.sub(&z2q, &zq), q);
                let t1 = self.psi(&c.sub(&zq, q));
                let t2 = self.psi_n(&c.dbl(q), 2);
                Ok(c.add(&c.add(&t0, &t1), &t2))
            }
        }
    }

    // ========================================================================
    // Scalar multiplication
    // ========================================================================

    /// [k]Q for Q in G2, through the GLS decomposition
    pub fn mul(&self, q: &Ep2Point<P>, k: &Bn) -> Result<Ep2Point<P>> {
        if k.is_zero() || q.is_infty() {
            return Ok(EpPoint::infinity());
        }
        self.mul_gls(q, k)
    }

    /// GLS multiplication: k = sum k_i λ^i with λ = p mod r, evaluated as
    /// sum [k_i] ψ^i(Q).
    pub fn mul_gls(&self, q: &Ep2Point<P>, k: &Bn) -> Result<Ep2Point<P>> {
        let r = self.curve.ord();
        let (digits, flip_odd) = match &self.gls {
            Some(basis) => (rec_frb(k, r, basis)?, false),
            None => (self.zadic(&k.modp(r)?)?, self.z.is_neg()),
        };
        let mut points = Vec::with_capacity(digits.len());
        let mut acc = *q;
        for i in 0..digits.len() {
            let pt = if flip_odd && i % 2 == 1 { self.curve.neg(&acc) } else { acc };
            points.push(pt);
            acc = self.psi(&acc);
        }
        ec::mul_sim_lot(&self.curve, &points, &digits)
    }

    /// Digits of k in radix |z|
    fn zadic(&self, k: &Bn) -> Result<Vec<Bn>> {
        let base = self.z.abs();
        let mut digits = Vec::with_capacity(4);
        let mut t = k.clone();
        while !t.is_zero() {
            let (q, d) = t.div_rem(&base)?;
            digits.push(d);
            t = q;
        }
        Ok(digits)
    }

    /// [k]G through the generator table
    pub fn mul_gen(&self, k: &Bn) -> Result<Ep2Point<P>> {
        match self.curve.fixed() {
            Some(t) => ec::mul_fix(&self.curve, t, k),
            None => self.mul(&self.curve.gen(), k),
        }
    }

    /// [k]P + [l]Q
    pub fn mul_sim(&self, p: &Ep2Point<P>, k: &Bn, q: &Ep2Point<P>, l: &Bn) -> Result<Ep2Point<P>> {
        Ok(self.curve.add(&self.mul(p, k)?, &self.mul(q, l)?))
    }

    /// [k]P for a single digit
    pub fn mul_dig(&self, p: &Ep2Point<P>, k: Dig) -> Result<Ep2Point<P>> {
        ec::mul_dig(&self.curve, p, k)
    }

    /// Uniform element of G2
    pub fn rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<Ep2Point<P>> {
        let k = Bn::rand_mod(rng, self.ord())?;
        self.mul_gen(&k)
    }

    // ========================================================================
    // Hashing and encoding
    // ========================================================================

    /// Hash to G2 under the default tag
    pub fn map(&self, msg: &[u8]) -> Result<Ep2Point<P>> {
        self.map_dst(msg, crate::ep::DEFAULT_DST)
    }

    /// Hash to G2 under a domain separation tag
    pub fn map_dst(&self, msg: &[u8], dst: &[u8]) -> Result<Ep2Point<P>> {
        let u = md::hash_to_field::<Fp2<P>>(msg, dst, 2)?;
        let q0 = self.curve.map_to_curve(&u[0])?;
        let q1 = self.curve.map_to_curve(&u[1])?;
        self.mul_cof(&self.curve.add(&q0, &q1))
    }

    /// Decode a twist point
    pub fn read_bin(&self, bytes: &[u8]) -> Result<Ep2Point<P>> {
        self.curve.read_bin(bytes)
    }

    /// Encode a twist point
    pub fn write_bin(&self, q: &Ep2Point<P>, out: &mut [u8], pack: bool) -> Result<()> {
        self.curve.write_bin(q, out, pack)
    }

    /// Length of the encoding of Q
    pub fn size_bin(&self, q: &Ep2Point<P>, pack: bool) -> usize {
        self.curve.size_bin(q, pack)
    }
}

impl<P: FpParams> CurveGroup for Ep2<P> {
    type Point = Ep2Point<P>;

    fn infinity(&self) -> Ep2Point<P> {
        EpPoint::infinity()
    }

    fn generator(&self) -> Ep2Point<P> {
        self.curve.gen()
    }

    fn order(&self) -> &Bn {
        self.curve.ord()
    }

    fn add(&self, p: &Ep2Point<P>, q: &Ep2Point<P>) -> Ep2Point<P> {
        self.curve.add(p, q)
    }

    fn dbl(&self, p: &Ep2Point<P>) -> Ep2Point<P> {
        self.curve.dbl(p)
    }

    fn neg(&self, p: &Ep2Point<P>) -> Ep2Point<P> {
        self.curve.neg(p)
    }

    fn is_infty(&self, p: &Ep2Point<P>) -> bool {
        p.is_infty()
    }

    fn eq(&self, p: &Ep2Point<P>, q: &Ep2Point<P>) -> bool {
        self.curve.eq(p, q)
    }

    fn norm(&self, p: &Ep2Point<P>) -> Ep2Point<P> {
        self.curve.norm(p)
    }

    fn norm_sim(&self, points: &mut [Ep2Point<P>]) -> Result<()> {
        self.curve.norm_sim(points)
    }

    fn blind<R: RngCore + CryptoRng + ?Sized>(&self, p: &Ep2Point<P>, rng: &mut R) -> Ep2Point<P> {
        self.curve.blind(p, rng)
    }

    fn fixed(&self) -> Option<&FixTable<Ep2Point<P>>> {
        self.curve.fixed()
    }
}

#[cfg(test)]
mod tests;
