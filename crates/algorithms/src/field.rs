//! The field contract shared by the prime field and every tower extension

use alloc::vec::Vec;
use core::fmt::Debug;

use rand::{CryptoRng, RngCore};
use relic_api::Serialize;
use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::bn::{Bn, Dig};
use crate::error::Result;
use crate::fp::{Fp, FpParams};
use crate::fpx::Tower;

/// Arithmetic in a finite field of characteristic p.
///
/// Every operation returns a fully reduced element. Elements serialize as
/// the concatenation of their base-field coordinates, low index first.
pub trait Field:
    Sized
    + Copy
    + Clone
    + PartialEq
    + Eq
    + Debug
    + Default
    + ConditionallySelectable
    + ConstantTimeEq
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// The prime field below
    type Prime: FpParams;

    /// Degree over the prime field
    const DEGREE: usize;

    /// Length of the serialized form
    const BYTES: usize;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Embedding of a small integer
    fn from_dig(d: Dig) -> Self;

    /// Embedding of a prime-field element
    fn from_base(a: Fp<Self::Prime>) -> Self;

    /// Whether the element is zero
    fn is_zero(&self) -> bool;

    /// Sum
    fn add(&self, rhs: &Self) -> Self;

    /// Difference
    fn sub(&self, rhs: &Self) -> Self;

    /// Additive inverse
    fn neg(&self) -> Self;

    /// Doubling
    fn dbl(&self) -> Self;

    /// Halving
    fn hlv(&self) -> Self;

    /// Product
    fn mul(&self, rhs: &Self) -> Self;

    /// Square
    fn sqr(&self) -> Self;

    /// Product with a prime-field element
    fn mul_fp(&self, k: &Fp<Self::Prime>) -> Self;

    /// Multiplicative inverse. Fails with `NoValid` on zero.
    fn inv(&self) -> Result<Self>;

    /// Frobenius map x -> x^(p^i)
    fn frb(&self, tower: &Tower<Self::Prime>, i: usize) -> Self;

    /// Norm down to the prime field
    fn norm(&self) -> Fp<Self::Prime>;

    /// Square root, if one exists
    fn srt(&self) -> Option<Self>;

    /// Sign of the element (RFC 9380 sgn0)
    fn sgn0(&self) -> bool;

    /// Uniformly random element
    fn rand<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self;

    /// Element from `DEGREE` chunks of uniform bytes, each reduced modulo p.
    fn from_uniform(bytes: &[u8]) -> Result<Self>;

    /// Product with a small integer
    fn mul_dig(&self, d: Dig) -> Self {
        self.mul_fp(&Fp::from_dig(d))
    }

    /// Power by a multi-precision exponent. Negative exponents invert.
    fn exp(&self, e: &Bn) -> Result<Self> {
        let base = if e.is_neg() { self.inv()? } else { *self };
        Ok(base.exp_limbs(e.digits()))
    }

    /// Power by non-negative little-endian limbs, square and multiply
    fn exp_limbs(&self, e: &[Dig]) -> Self {
        let mut r = Self::one();
        for limb in e.iter().rev() {
            for i in (0..64).rev() {
                r = r.sqr();
                if (limb >> i) & 1 == 1 {
                    r = r.mul(self);
                }
            }
        }
        r
    }

    /// Quadratic residuosity, decided through the norm
    fn is_sqr(&self) -> bool {
        let n = self.norm();
        n.is_zero() || n.smb() == 1
    }

    /// Simultaneous inversion with a single field inversion.
    fn inv_sim(a: &[Self]) -> Result<Vec<Self>> {
        if a.is_empty() {
            return Ok(Vec::new());
        }
        let mut acc = Vec::with_capacity(a.len());
        let mut t = a[0];
        acc.push(t);
        for x in &a[1..] {
            t = t.mul(x);
            acc.push(t);
        }
        let mut inv = t.inv()?;
        let mut out = alloc::vec![Self::zero(); a.len()];
        for i in (1..a.len()).rev() {
            out[i] = inv.mul(&acc[i - 1]);
            inv = inv.mul(&a[i]);
        }
        out[0] = inv;
        Ok(out)
    }
}

/// Operator sugar for a field type generic over its prime parameters.
macro_rules! impl_field_ops {
    ($t:ident) => {
        impl<P: $crate::fp::FpParams> core::ops::Add for $t<P> {
            type Output = $t<P>;
            #[inline]
            fn add(self, rhs: $t<P>) -> $t<P> {
                $crate::field::Field::add(&self, &rhs)
            }
        }

        impl<'a, P: $crate::fp::FpParams> core::ops::Add<&'a $t<P>> for &'a $t<P> {
            type Output = $t<P>;
            #[inline]
            fn add(self, rhs: &'a $t<P>) -> $t<P> {
                $crate::field::Field::add(self, rhs)
            }
        }

        impl<P: $crate::fp::FpParams> core::ops::Sub for $t<P> {
            type Output = $t<P>;
            #[inline]
            fn sub(self, rhs: $t<P>) -> $t<P> {
                $crate::field::Field::sub(&self, &rhs)
            }
        }

        impl<'a, P: $crate::fp::FpParams> core::ops::Sub<&'a $t<P>> for &'a $t<P> {
            type Output = $t<P>;
            #[inline]
            fn sub(self, rhs: &'a $t<P>) -> $t<P> {
                $crate::field::Field::sub(self, rhs)
            }
        }

        impl<P: $crate::fp::FpParams> core::ops::Mul for $t<P> {
            type Output = $t<P>;
            #[inline]
            fn mul(self, rhs: $t<P>) -> $t<P> {
                $crate::field::Field::mul(&self, &rhs)
            }
        }

        impl<'a, P: $crate::fp::FpParams> core::ops::Mul<&'a $t<P>> for &'a $t<P> {
            type Output = $t<P>;
            #[inline]
            fn mul(self, rhs: &'a $t<P>) -> $t<P> {
                $crate::field::Field::mul(self, rhs)
            }
        }

        impl<P: $crate::fp::FpParams> core::ops::Neg for $t<P> {
            type Output = $t<P>;
            #[inline]
            fn neg(self) -> $t<P> {
                $crate::field::Field::neg(&self)
            }
        }

        impl<P: $crate::fp::FpParams> core::ops::AddAssign for $t<P> {
            #[inline]
            fn add_assign(&mut self, rhs: $t<P>) {
                *self = $crate::field::Field::add(self, &rhs);
            }
        }

        impl<P: $crate::fp::FpParams> core::ops::SubAssign for $t<P> {
            #[inline]
            fn sub_assign(&mut self, rhs: $t<P>) {
                *self = $crate::field::Field::sub(self, &rhs);
            }
        }

        impl<P: $crate::fp::FpParams> core::ops::MulAssign for $t<P> {
            #[inline]
            fn mul_assign(&mut self, rhs: $t<P>) {
                *self = $crate::field::Field::mul(self, &rhs);
            }
        }
    };
}

pub(crate) use impl_field_ops;
