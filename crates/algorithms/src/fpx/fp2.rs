//! Quadratic extension Fp2 = Fp[u]/(u^2 - β₀)

use core::fmt;

use rand::{CryptoRng, RngCore};
use relic_api::Serialize;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

use super::{srt_quad, ExtField, Tower};
use crate::bn::{Dig, Dis};
use crate::config::{FpxRdc, FPX_RDC};
use crate::error::{validate, Result};
use crate::field::{impl_field_ops, Field};
use crate::fp::{Fp, FpParams};

/// Element a0 + a1 u of Fp2
#[derive(Clone, Copy)]
pub struct Fp2<P: FpParams> {
    /// Real part
    pub c0: Fp<P>,
    /// Coefficient of u
    pub c1: Fp<P>,
}

impl<P: FpParams> fmt::Debug for Fp2<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp2({:?} + {:?} u)", self.c0, self.c1)
    }
}

impl<P: FpParams> Default for Fp2<P> {
    fn default() -> Self {
        Fp2::new(Fp::zero(), Fp::zero())
    }
}

impl<P: FpParams> DefaultIsZeroes for Fp2<P> {}

impl<P: FpParams> ConstantTimeEq for Fp2<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl<P: FpParams> PartialEq for Fp2<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: FpParams> Eq for Fp2<P> {}

impl<P: FpParams> ConditionallySelectable for Fp2<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2::new(
            Fp::conditional_select(&a.c0, &b.c0, choice),
            Fp::conditional_select(&a.c1, &b.c1, choice),
        )
    }
}

impl<P: FpParams> Fp2<P> {
    /// c0 + c1 i
    #[inline]
    pub const fn new(c0: Fp<P>, c1: Fp<P>) -> Self {
        Fp2 { c0, c1 }
    }

    /// a0 + a1 u from two small integers
    pub const fn from_dis(a0: Dis, a1: Dis) -> Self {
        Fp2::new(Fp::from_dis(a0), Fp::from_dis(a1))
    }

    /// The tower non-residue ξ
    pub const fn xi() -> Self {
        Fp2::from_dis(P::XI.0, P::XI.1)
    }

    /// a0 - a1 u, the Frobenius of Fp2
    pub fn conj(&self) -> Self {
        Fp2::new(self.c0, self.c1.neg())
    }

    /// Multiply by u
    pub fn mul_art(&self) -> Self {
        Fp2::new(self.c1.mul_dis(P::QNR), self.c0)
    }

    /// Multiply by ξ = x0 + x1 u, using small-integer multiplications
    pub fn mul_nor(&self) -> Self {
        let (x0, x1) = P::XI;
        let t = self.c1.mul_dis(P::QNR);
        let c0 = self.c0.mul_dis(x0).add(&t.mul_dis(x1));
        let c1 = self.c0.mul_dis(x1).add(&self.c1.mul_dis(x0));
        Fp2::new(c0, c1)
    }

    /// Multiply by a small signed integer
    pub fn mul_dis(&self, k: Dis) -> Self {
        Fp2::new(self.c0.mul_dis(k), self.c1.mul_dis(k))
    }

    /// Karatsuba product with one reduction per coordinate
    pub fn mul_basic(&self, rhs: &Self) -> Self {
        let v0 = self.c0.mul(&rhs.c0);
        let v1 = self.c1.mul(&rhs.c1);
        let t = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));
        Fp2::new(v0.add(&v1.mul_dis(P::QNR)), t.sub(&v0).sub(&v1))
    }

    /// Square via (a0 + a1)(a0 + β₀ a1)
    pub fn sqr_basic(&self) -> Self {
        let v = self.c0.mul(&self.c1);
        let t = self.c0.add(&self.c1).mul(&self.c0.add(&self.c1.mul_dis(P::QNR)));
        Fp2::new(t.sub(&v).sub(&v.mul_dis(P::QNR)), v.dbl())
    }
}

impl<P: FpParams> Serialize for Fp2<P> {
    fn size_bin(&self, _pack: bool) -> usize {
        2 * P::BYTES
    }

    fn write_bin(&self, out: &mut [u8], _pack: bool) -> Result<()> {
        validate::length("fp2_write_bin", out.len(), 2 * P::BYTES)?;
        let (a, b) = out.split_at_mut(P::BYTES);
        self.c0.write_bin(a, false)?;
        self.c1.write_bin(b, false)
    }

    fn read_bin(bytes: &[u8]) -> Result<Self> {
        validate::length("fp2_read_bin", bytes.len(), 2 * P::BYTES)?;
        let (a, b) = bytes.split_at(P::BYTES);
        Ok(Fp2::new(Fp::read_bin(a)?, Fp::read_bin(b)?))
    }
}

impl<P: FpParams> Field for Fp2<P> {
    type Prime = P;
    const DEGREE: usize = 2;
    const BYTES: usize = 2 * P::BYTES;

    fn zero() -> Self {
        Fp2::new(Fp::zero(), Fp::zero())
    }

    fn one() -> Self {
        Fp2::new(Fp::one(), Fp::zero())
    }

    fn from_dig(d: Dig) -> Self {
        Fp2::new(Fp::from_dig(d), Fp::zero())
    }

    fn from_base(a: Fp<P>) -> Self {
        Fp2::new(a, Fp::zero())
    }

    fn is_zero(&self) -> bool {
        bool::from(self.c0.ct_is_zero() & self.c1.ct_is_zero())
    }

    fn add(&self, rhs: &Self) -> Self {
        Fp2::new(self.c0.add(&rhs.c0), self.c1.add(&rhs.c1))
    }

    fn sub(&self, rhs: &Self) -> Self {
        Fp2::new(self.c0.sub(&rhs.c0), self.c1.sub(&rhs.c1))
    }

    fn neg(&self) -> Self {
        Fp2::new(self.c0.neg(), self.c1.neg())
    }

    fn dbl(&self) -> Self {
        Fp2::new(self.c0.dbl(), self.c1.dbl())
    }

    fn hlv(&self) -> Self {
        Fp2::new(self.c0.hlv(), self.c1.hlv())
    }

    fn mul(&self, rhs: &Self) -> Self {
        match FPX_RDC {
            FpxRdc::Lazyr => self.mul_lazy(rhs),
            FpxRdc::Basic => self.mul_basic(rhs),
        }
    }

    fn sqr(&self) -> Self {
        match FPX_RDC {
            FpxRdc::Lazyr => self.sqr_lazy(),
            FpxRdc::Basic => self.sqr_basic(),
        }
    }

    fn mul_fp(&self, k: &Fp<P>) -> Self {
        Fp2::new(self.c0.mul(k), self.c1.mul(k))
    }

    fn inv(&self) -> Result<Self> {
        let t = self.norm().inv()?;
        Ok(Fp2::new(self.c0.mul(&t), self.c1.mul(&t).neg()))
    }

    fn frb(&self, _tower: &Tower<P>, i: usize) -> Self {
        if i % 2 == 1 {
            self.conj()
        } else {
            *self
        }
    }

    fn norm(&self) -> Fp<P> {
        self.c0.sqr().sub(&self.c1.sqr().mul_dis(P::QNR))
    }

    fn srt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(*self);
        }
        let (a, b) = srt_quad(&self.c0, &self.c1, |x| x.mul_dis(P::QNR))?;
        let r = Fp2::new(a, b);
        if r.sqr() == *self {
            Some(r)
        } else {
            None
        }
    }

    fn sgn0(&self) -> bool {
        let z0 = bool::from(self.c0.ct_is_zero());
        self.c0.is_odd() || (z0 && self.c1.is_odd())
    }

    fn rand<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Fp2::new(Fp::random(rng), Fp::random(rng))
    }

    fn from_uniform(bytes: &[u8]) -> Result<Self> {
        validate::parameter(bytes.len() % 2 == 0, "fp2_from_uniform")?;
        let (a, b) = bytes.split_at(bytes.len() / 2);
        Ok(Fp2::new(
            <Fp<P> as Field>::from_uniform(a)?,
            <Fp<P> as Field>::from_uniform(b)?,
        ))
    }
}

impl<P: FpParams> ExtField for Fp2<P> {
    type Root = Fp2<P>;
    const ROOT_DEG: usize = 1;

    fn mul_gen(&self) -> Self {
        self.mul_nor()
    }

    fn to_root(&self, out: &mut [Self]) {
        out[0] = *self;
    }

    fn from_root(c: &[Self]) -> Self {
        c[0]
    }
}

impl_field_ops!(Fp2);
