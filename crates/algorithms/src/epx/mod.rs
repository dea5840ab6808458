//! Twists over Fp, Fp3, Fp4 and Fp8 carrying G2 of the k = 2, 16, 18, 24
//! and 48 pairings
//!
//! [`EpX`] plays the part [`Ep2`](crate::ep2::Ep2) plays for k = 12. A
//! twist of degree d of E over the subfield T of the target K untwists by
//! (x, y) -> (ζ^2 x, ζ^3 y), where ζ^d generates T over the root field (D
//! type) or ζ^-d does (M type). The map ψ = untwist-Frobenius-twist acts as
//! [p] on G2, and each family checks membership through an identity of ψ
//! and the seed u:
//!
//! - B24 and B48: ψ(Q) = [u]Q
//! - K18: Q + [u]ψ^2(Q) + [2]ψ^3(Q) = O
//! - K16: [u]Q + ψ(Q) = [2]ψ^5(Q)
//! - SS: [r]Q = O

use rand::{CryptoRng, RngCore};

use crate::bn::Bn;
use crate::ec::{self, CurveGroup, FixTable};
use crate::ep::{EpCurve, EpPoint};
use crate::ep2::{Family, Twist};
use crate::error::{no_valid, validate, Result};
use crate::field::Field;
use crate::fp::Fp;
use crate::fpx::{Cyclotomic, Fp3, Fp4, Fp8, Subfield, Tower};

mod curves;

pub use curves::{b24_p315, b48_p378, k16_p361, k18_p372, ss_p383};

/// Point of a twist over T
pub type EpXPoint<T> = EpPoint<T>;

/// Cubic twist field of KSS18
pub type Ep3<P> = EpX<Fp3<P>>;
/// Quartic twist field of BLS24 and KSS16
pub type Ep4<P> = EpX<Fp4<P>>;
/// Twist field of BLS48
pub type Ep8<P> = EpX<Fp8<P>>;

/// The root ζ of the untwisting map in K
pub fn twist_root<T: Subfield<K>, K: Field>(twist: Twist) -> Result<K> {
    let z = T::twist_root();
    match twist {
        Twist::D => Ok(z),
        Twist::M => z.inv(),
    }
}

/// Coefficients a ζ^-4 and b ζ^-6 of the twist of y^2 = x^3 + a x + b
pub fn twist_coeffs<T: Subfield<K>, K: Field>(
    a: &Fp<K::Prime>,
    b: &Fp<K::Prime>,
    twist: Twist,
) -> Result<(T, T)> {
    let zi = twist_root::<T, K>(twist)?.inv()?;
    let z2 = zi.sqr();
    let z4 = z2.sqr();
    let a = T::project(&z4.mul_fp(a)).ok_or(no_valid("epx_twist"))?;
    let b = T::project(&z4.mul(&z2).mul_fp(b)).ok_or(no_valid("epx_twist"))?;
    Ok((a, b))
}

/// G2 context on a twist over T
#[derive(Debug, Clone)]
pub struct EpX<T: Field> {
    curve: EpCurve<T>,
    twist: Twist,
    family: Family,
    z: Bn,
    psi_x: T,
    psi_y: T,
    tower: Tower<T::Prime>,
}

impl<T: Field> EpX<T> {
    /// Family data for a twist embedded in the target K. Fails with
    /// `NoValid` when the family does not match the fields or the generator
    /// does not satisfy the subgroup identity.
    pub fn new<K>(curve: EpCurve<T>, twist: Twist, family: Family, z: Bn) -> Result<Self>
    where
        T: Subfield<K>,
        K: Cyclotomic,
    {
        let _span = tracing::debug_span!("epx_new", curve = curve.name(), ?twist, ?family).entered();
        validate::parameter(
            family.embed() == K::EMBED && family.twist_deg() == <T as Subfield<K>>::TWIST_DEG,
            "epx_param_set",
        )?;
        let tower = Tower::new()?;
        let zeta = twist_root::<T, K>(twist)?;
        let cz = zeta.frb(&tower, 1).mul(&zeta.inv()?);
        let cx = cz.sqr();
        let psi_x = T::project(&cx).ok_or(no_valid("epx_psi"))?;
        let psi_y = T::project(&cx.mul(&cz)).ok_or(no_valid("epx_psi"))?;
        let g2 = EpX { curve, twist, family, z, psi_x, psi_y, tower };
        validate::parameter(g2.is_valid(&g2.curve.gen()), "epx_param_set")?;
        tracing::debug!(t_degree = T::DEGREE, k = K::EMBED, "twist ready");
        Ok(g2)
    }

    /// Precompute a table for the generator
    pub fn with_fix(mut self) -> Result<Self> {
        self.curve = self.curve.with_fix()?;
        Ok(self)
    }

    /// The twist as a plain curve
    pub fn curve(&self) -> &EpCurve<T> {
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

    /// Family seed u, zero for the supersingular curves
    pub fn seed(&self) -> &Bn {
        &self.z
    }

    /// Frobenius tables of the prime
    pub fn tower(&self) -> &Tower<T::Prime> {
        &self.tower
    }

    /// Generator of G2
    pub fn gen(&self) -> EpXPoint<T> {
        self.curve.gen()
    }

    /// Order r of G2
    pub fn ord(&self) -> &Bn {
        self.curve.ord()
    }

    // ========================================================================
    // Endomorphism
    // ========================================================================

    /// ψ(x, y) = (x^p ψx, y^p ψy)
    pub fn psi(&self, q: &EpXPoint<T>) -> EpXPoint<T> {
        let tw = &self.tower;
        EpPoint {
            x: q.x.frb(tw, 1).mul(&self.psi_x),
            y: q.y.frb(tw, 1).mul(&self.psi_y),
            z: q.z.frb(tw, 1),
            coord: q.coord,
        }
    }

    /// ψ applied n times
    pub fn psi_n(&self, q: &EpXPoint<T>, n: usize) -> EpXPoint<T> {
        (0..n).fold(*q, |acc, _| self.psi(&acc))
    }

    /// Whether Q is a non-trivial element of G2
    pub fn is_valid(&self, q: &EpXPoint<T>) -> bool {
        if q.is_infty() || !self.curve.on_curve(q) {
            return false;
        }
        self.subgroup_identity(q).unwrap_or(false)
    }

    fn subgroup_identity(&self, q: &EpXPoint<T>) -> Result<bool> {
        let c = &self.curve;
        match self.family {
            Family::B24 | Family::B48 => {
                let zq = ec::mul_lwnaf(c, q, &self.z)?;
                Ok(c.eq(&self.psi(q), &zq))
            }
            Family::K18 => {
                let zq = ec::mul_lwnaf(c, &self.psi_n(q, 2), &self.z)?;
                let t = c.add(&c.add(q, &zq), &c.dbl(&self.psi_n(q, 3)));
                Ok(t.is_infty())
            }
            Family::K16 => {
                let zq = ec::mul_lwnaf(c, q, &self.z)?;
                let lhs = c.add(&zq, &self.psi(q));
                Ok(c.eq(&lhs, &c.dbl(&self.psi_n(q, 5))))
            }
            _ => Ok(ec::mul_lwnaf(c, q, self.ord())?.is_infty()),
        }
    }

    /// Map any twist point into G2: [h2]Q
    pub fn mul_cof(&self, q: &EpXPoint<T>) -> Result<EpXPoint<T>> {
        ec::mul_lwnaf(&self.curve, q, self.curve.cofactor())
    }

    // ========================================================================
    // Scalar multiplication
    // ========================================================================

    /// [k]Q for Q in G2
    pub fn mul(&self, q: &EpXPoint<T>, k: &Bn) -> Result<EpXPoint<T>> {
        if k.is_zero() || q.is_infty() {
            return Ok(EpPoint::infinity());
        }
        self.curve.mul(q, &k.modp(self.ord())?)
    }

    /// [k]G through the generator table
    pub fn mul_gen(&self, k: &Bn) -> Result<EpXPoint<T>> {
        self.curve.mul_gen(&k.modp(self.ord())?)
    }

    /// [k]P + [l]Q
    pub fn mul_sim(&self, p: &EpXPoint<T>, k: &Bn, q: &EpXPoint<T>, l: &Bn) -> Result<EpXPoint<T>> {
        Ok(self.curve.add(&self.mul(p, k)?, &self.mul(q, l)?))
    }

    /// Uniform element of G2
    pub fn rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<EpXPoint<T>> {
        let k = Bn::rand_mod(rng, self.ord())?;
        self.mul_gen(&k)
    }

    // ========================================================================
    // Hashing and encoding
    // ========================================================================

    /// Hash to G2 under the default tag
    pub fn map(&self, msg: &[u8]) -> Result<EpXPoint<T>> {
        self.map_dst(msg, crate::ep::DEFAULT_DST)
    }

    /// Hash to G2 under a domain separation tag
    pub fn map_dst(&self, msg: &[u8], dst: &[u8]) -> Result<EpXPoint<T>> {
        let u = crate::md::hash_to_field::<T>(msg, dst, 2)?;
        let q0 = self.curve.map_to_curve(&u[0])?;
        let q1 = self.curve.map_to_curve(&u[1])?;
        self.mul_cof(&self.curve.add(&q0, &q1))
    }

    /// Decode a twist point
    pub fn read_bin(&self, bytes: &[u8]) -> Result<EpXPoint<T>> {
        self.curve.read_bin(bytes)
    }

    /// Encode a twist point
    pub fn write_bin(&self, q: &EpXPoint<T>, out: &mut [u8], pack: bool) -> Result<()> {
        self.curve.write_bin(q, out, pack)
    }

    /// Length of the encoding of Q
    pub fn size_bin(&self, q: &EpXPoint<T>, pack: bool) -> usize {
        self.curve.size_bin(q, pack)
    }
}

impl<T: Field> CurveGroup for EpX<T> {
    type Point = EpXPoint<T>;

    fn infinity(&self) -> EpXPoint<T> {
        EpPoint::infinity()
    }

    fn generator(&self) -> EpXPoint<T> {
        self.curve.gen()
    }

    fn order(&self) -> &Bn {
        self.curve.ord()
    }

    fn add(&self, p: &EpXPoint<T>, q: &EpXPoint<T>) -> EpXPoint<T> {
        self.curve.add(p, q)
    }

    fn dbl(&self, p: &EpXPoint<T>) -> EpXPoint<T> {
        self.curve.dbl(p)
    }

    fn neg(&self, p: &EpXPoint<T>) -> EpXPoint<T> {
        self.curve.neg(p)
    }

    fn is_infty(&self, p: &EpXPoint<T>) -> bool {
        p.is_infty()
    }

    fn eq(&self, p: &EpXPoint<T>, q: &EpXPoint<T>) -> bool {
        self.curve.eq(p, q)
    }

    fn norm(&self, p: &EpXPoint<T>) -> EpXPoint<T> {
        self.curve.norm(p)
    }

    fn norm_sim(&self, points: &mut [EpXPoint<T>]) -> Result<()> {
        self.curve.norm_sim(points)
    }

    fn blind<R: RngCore + CryptoRng + ?Sized>(&self, p: &EpXPoint<T>, rng: &mut R) -> EpXPoint<T> {
        self.curve.blind(p, rng)
    }

    fn fixed(&self) -> Option<&FixTable<EpXPoint<T>>> {
        self.curve.fixed()
    }
}

#[cfg(test)]
mod tests;
