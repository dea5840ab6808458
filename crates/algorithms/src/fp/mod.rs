//! Prime field arithmetic
//!
//! [`Fp<P>`] is a residue modulo the prime of the parameter set `P`, kept in
//! Montgomery form aR mod p with R = 2^384. Arithmetic runs in constant time
//! except where a method says otherwise.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use relic_api::Serialize;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

use crate::bn::{Bn, Dig, Dis};
use crate::config::FP_DIGS;
use crate::error::{no_valid, validate, Result};
use crate::field::{impl_field_ops, Field};
use crate::fpx::Tower;

pub mod params;
pub mod primes;

mod dbl;
mod inv;
mod srt;

pub use dbl::FpDbl;
pub use params::Limbs;
pub use primes::{Bls315, Bls377, Bls378, Bls381, Bn254, Curve25519, Kss361, Kss372, NistP256, SecgK256, Ss383};

use params::{add_mod, geq, hlv_mod, mont_mul, sub_mod};

/// Parameters of a prime field and of the towers built on it.
///
/// Implementors provide the modulus and the tower non-residues. Everything
/// else is derived at compile time.
pub trait FpParams:
    Copy + Clone + fmt::Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Human-readable name of the prime
    const NAME: &'static str;
    /// The prime p, little-endian
    const MODULUS: Limbs;
    /// Quadratic non-residue β₀ defining fp2 = fp[u]/(u^2 - β₀)
    const QNR: i64;
    /// Cubic non-residue γ₀ defining fp3, or 0 when p ≢ 1 mod 3
    const CNR: i64;
    /// Non-residue ξ = XI.0 + XI.1 u of fp2 defining fp4 and fp6
    const XI: (i64, i64);
    /// Generator of the 2-Sylow subgroup, canonical form
    const TS_ROOT: Limbs;

    /// -p^-1 mod 2^64
    const INV: Dig = params::inv_digit(Self::MODULUS[0]);
    /// R mod p
    const R: Limbs = params::pow2_mod(384, &Self::MODULUS);
    /// R^2 mod p
    const R2: Limbs = params::pow2_mod(768, &Self::MODULUS);
    /// R^3 mod p
    const R3: Limbs = mont_mul(&Self::R2, &Self::R2, &Self::MODULUS, Self::INV);
    /// Bit length of p
    const BITS: usize = params::bits(&Self::MODULUS);
    /// Byte length of a serialized element
    const BYTES: usize = (Self::BITS + 7) / 8;
    /// Largest s with 2^s | p - 1
    const TWO_ADICITY: u32 = params::two_adicity(&Self::MODULUS);
    /// Residue class of p modulo 8
    const MOD8: Dig = Self::MODULUS[0] & 7;
    /// p - 2
    const P_MINUS_2: Limbs = params::sub_small(&Self::MODULUS, 2);
    /// (p - 1) / 2
    const P_MINUS_1_HALF: Limbs = params::shr(&params::sub_small(&Self::MODULUS, 1), 1);
    /// (p + 1) / 4
    const P_PLUS_1_QUARTER: Limbs = params::shr(&params::add_small(&Self::MODULUS, 1), 2);
    /// (p - 5) / 8
    const P_MINUS_5_EIGHTH: Limbs = params::shr(&params::sub_small(&Self::MODULUS, 5), 3);
    /// (t - 1) / 2 for p - 1 = 2^s t
    const TS_EXP: Limbs =
        params::shr_any(&params::sub_small(&Self::MODULUS, 1), Self::TWO_ADICITY + 1);
    /// Divstep iterations of the Bernstein-Yang inverse
    const DIVST_STEPS: usize = params::divst_iterations(Self::BITS);
    /// Montgomery form of 2^-DIVST_STEPS
    const DIVST_CORR: Limbs = params::hlv_n(&Self::R, Self::DIVST_STEPS, &Self::MODULUS);
    /// 62-step jumps of the jumpdivstep inverse
    const JMPDS_JUMPS: usize = params::jmpds_jumps(Self::BITS);
    /// Montgomery form of 2^-(62 JMPDS_JUMPS)
    const JMPDS_CORR: Limbs = params::hlv_n(&Self::R, 62 * Self::JMPDS_JUMPS, &Self::MODULUS);
}

/// Element of GF(p) in Montgomery form
#[derive(Clone, Copy)]
pub struct Fp<P: FpParams>(pub(crate) Limbs, PhantomData<P>);

impl<P: FpParams> fmt::Debug for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp(0x")?;
        for d in self.to_limbs().iter().rev() {
            write!(f, "{:016x}", d)?;
        }
        write!(f, ")")
    }
}

impl<P: FpParams> fmt::Display for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<P: FpParams> Default for Fp<P> {
    fn default() -> Self {
        Fp::zero()
    }
}

impl<P: FpParams> DefaultIsZeroes for Fp<P> {}

impl<P: FpParams> ConstantTimeEq for Fp<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut c = Choice::from(1u8);
        for i in 0..FP_DIGS {
            c &= self.0[i].ct_eq(&other.0[i]);
        }
        c
    }
}

impl<P: FpParams> PartialEq for Fp<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<P: FpParams> Eq for Fp<P> {}

impl<P: FpParams> ConditionallySelectable for Fp<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = [0; FP_DIGS];
        for (i, ri) in r.iter_mut().enumerate() {
            *ri = Dig::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fp(r, PhantomData)
    }
}

impl<P: FpParams> PartialOrd for Fp<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Order of the canonical representatives. Variable time.
impl<P: FpParams> Ord for Fp<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.to_limbs();
        let b = other.to_limbs();
        for i in (0..FP_DIGS).rev() {
            match a[i].cmp(&b[i]) {
                Ordering::Equal => continue,
                o => return o,
            }
        }
        Ordering::Equal
    }
}

// ============================================================================
// Construction and conversion
// ============================================================================

impl<P: FpParams> Fp<P> {
    /// Zero
    #[inline]
    pub const fn zero() -> Self {
        Fp([0; FP_DIGS], PhantomData)
    }

    /// One
    #[inline]
    pub const fn one() -> Self {
        Fp(P::R, PhantomData)
    }

    /// Wrap limbs that are already in Montgomery form.
    #[inline]
    pub(crate) const fn from_mont(limbs: Limbs) -> Self {
        Fp(limbs, PhantomData)
    }

    /// Convert canonical limbs below p. Out-of-range input is not checked.
    #[inline]
    pub const fn from_canonical(limbs: &Limbs) -> Self {
        Fp(mont_mul(limbs, &P::R2, &P::MODULUS, P::INV), PhantomData)
    }

    /// Convert canonical limbs, rejecting values not below p.
    pub fn from_limbs(limbs: &Limbs) -> Result<Self> {
        if geq(limbs, &P::MODULUS) {
            return Err(no_valid("fp_from_limbs"));
        }
        Ok(Fp::from_canonical(limbs))
    }

    /// Canonical limbs
    #[inline]
    pub const fn to_limbs(&self) -> Limbs {
        mont_mul(&self.0, &params::one(), &P::MODULUS, P::INV)
    }

    /// Montgomery limbs
    #[inline]
    pub const fn as_mont(&self) -> &Limbs {
        &self.0
    }

    /// Small non-negative integer
    pub const fn from_dig(d: Dig) -> Self {
        let mut l = [0; FP_DIGS];
        l[0] = d;
        // p exceeds any single digit for every supported prime
        Fp::from_canonical(&l)
    }

    /// Small signed integer
    pub const fn from_dis(d: Dis) -> Self {
        let a = Fp::<P>::from_dig(d.unsigned_abs());
        if d < 0 {
            a.neg()
        } else {
            a
        }
    }

    /// Residue of a multi-precision integer
    pub fn from_bn(a: &Bn) -> Result<Self> {
        let p = Self::modulus();
        let r = a.modp(&p)?;
        let mut limbs = [0; FP_DIGS];
        limbs[..r.len()].copy_from_slice(r.digits());
        Ok(Fp::from_canonical(&limbs))
    }

    /// Canonical value as a multi-precision integer
    pub fn to_bn(&self) -> Bn {
        Bn::from_limbs(&self.to_limbs())
    }

    /// The prime as a multi-precision integer
    pub fn modulus() -> Bn {
        Bn::from_limbs(&P::MODULUS)
    }

    /// Parse a string in the given radix. The value must be below p.
    pub fn read_str(s: &str, radix: u32) -> Result<Self> {
        let a = Bn::read_str(s, radix)?;
        validate::parameter(!a.is_neg() && a < Self::modulus(), "fp_read_str")?;
        Fp::from_bn(&a)
    }

    /// Render the canonical value in the given radix
    pub fn write_str(&self, radix: u32) -> Result<alloc::string::String> {
        self.to_bn().write_str(radix)
    }

    /// Reduce a 768-bit value given as low and high halves.
    pub(crate) const fn from_wide(lo: &Limbs, hi: &Limbs) -> Self {
        let a = mont_mul(lo, &P::R2, &P::MODULUS, P::INV);
        let b = mont_mul(hi, &P::R3, &P::MODULUS, P::INV);
        Fp(add_mod(&a, &b, &P::MODULUS), PhantomData)
    }

    /// Uniform element from 768 random bits
    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut lo = [0; FP_DIGS];
        let mut hi = [0; FP_DIGS];
        for d in lo.iter_mut().chain(hi.iter_mut()) {
            *d = rng.next_u64();
        }
        Fp::from_wide(&lo, &hi)
    }

    /// Whether the element is zero, as a `Choice`
    #[inline]
    pub fn ct_is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Constant-time select: `b` when `choice` is set
    #[inline]
    pub fn ct_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp::conditional_select(a, b, choice)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<P: FpParams> Fp<P> {
    /// a + b
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Fp(add_mod(&self.0, &rhs.0, &P::MODULUS), PhantomData)
    }

    /// a - b
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Fp(sub_mod(&self.0, &rhs.0, &P::MODULUS), PhantomData)
    }

    /// -a
    #[inline]
    pub const fn neg(&self) -> Self {
        Fp(sub_mod(&[0; FP_DIGS], &self.0, &P::MODULUS), PhantomData)
    }

    /// 2a
    #[inline]
    pub const fn dbl(&self) -> Self {
        self.add(self)
    }

    /// a / 2
    #[inline]
    pub const fn hlv(&self) -> Self {
        Fp(hlv_mod(&self.0, &P::MODULUS), PhantomData)
    }

    /// a b, Montgomery multiplication
    #[inline]
    pub const fn mul(&self, rhs: &Self) -> Self {
        Fp(mont_mul(&self.0, &rhs.0, &P::MODULUS, P::INV), PhantomData)
    }

    /// a^2
    #[inline]
    pub const fn sqr(&self) -> Self {
        self.mul(self)
    }

    /// a b through the canonical product and a schoolbook remainder
    pub fn mul_basic(&self, rhs: &Self) -> Self {
        let a = self.to_limbs();
        let b = rhs.to_limbs();
        let mut c = [0; 2 * FP_DIGS];
        crate::bn::low::muln(&mut c, &a, &b);
        Fp::from_canonical(&FpDbl::<P>::rdc_basic_limbs(&c))
    }

    /// a k for a digit k
    pub fn mul_dig(&self, k: Dig) -> Self {
        self.mul(&Fp::from_dig(k))
    }

    /// a k for a signed digit k. Small multipliers use an addition chain.
    pub fn mul_dis(&self, k: Dis) -> Self {
        let m = k.unsigned_abs();
        let r = if m < 16 {
            let mut r = Fp::zero();
            for i in (0..4).rev() {
                r = r.dbl();
                if (m >> i) & 1 == 1 {
                    r = r.add(self);
                }
            }
            r
        } else {
            self.mul(&Fp::from_dig(m))
        };
        if k < 0 {
            r.neg()
        } else {
            r
        }
    }

    /// Power by canonical little-endian limbs. Constant time in the base.
    pub fn pow_limbs(&self, e: &[Dig]) -> Self {
        let mut r = Fp::one();
        for limb in e.iter().rev() {
            for i in (0..64).rev() {
                r = r.sqr();
                let t = r.mul(self);
                r = Fp::conditional_select(&r, &t, Choice::from(((limb >> i) & 1) as u8));
            }
        }
        r
    }

    /// Power by a multi-precision exponent. Negative exponents invert.
    pub fn exp(&self, e: &Bn) -> Result<Self> {
        let base = if e.is_neg() { self.inv()? } else { *self };
        Ok(base.pow_limbs(e.digits()))
    }

    /// Quadratic character: 0, 1 or -1, by Euler's criterion.
    pub fn smb(&self) -> i32 {
        let t = self.pow_limbs(&P::P_MINUS_1_HALF);
        if bool::from(t.ct_is_zero()) {
            0
        } else if t == Fp::one() {
            1
        } else {
            -1
        }
    }

    /// Parity of the canonical value
    pub fn is_odd(&self) -> bool {
        self.to_limbs()[0] & 1 == 1
    }
}

// ============================================================================
// Field and codec
// ============================================================================

impl<P: FpParams> Serialize for Fp<P> {
    fn size_bin(&self, _pack: bool) -> usize {
        P::BYTES
    }

    fn write_bin(&self, out: &mut [u8], _pack: bool) -> Result<()> {
        validate::length("fp_write_bin", out.len(), P::BYTES)?;
        relic_internal::endian::digits_to_be(&self.to_limbs(), out);
        Ok(())
    }

    fn read_bin(bytes: &[u8]) -> Result<Self> {
        validate::length("fp_read_bin", bytes.len(), P::BYTES)?;
        let mut limbs = [0; FP_DIGS];
        relic_internal::endian::digits_from_be(bytes, &mut limbs);
        Fp::from_limbs(&limbs)
    }
}

impl<P: FpParams> Field for Fp<P> {
    type Prime = P;
    const DEGREE: usize = 1;
    const BYTES: usize = P::BYTES;

    fn zero() -> Self {
        Fp::zero()
    }

    fn one() -> Self {
        Fp::one()
    }

    fn from_dig(d: Dig) -> Self {
        Fp::from_dig(d)
    }

    fn from_base(a: Fp<P>) -> Self {
        a
    }

    fn is_zero(&self) -> bool {
        bool::from(self.ct_is_zero())
    }

    fn add(&self, rhs: &Self) -> Self {
        Fp::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Fp::sub(self, rhs)
    }

    fn neg(&self) -> Self {
        Fp::neg(self)
    }

    fn dbl(&self) -> Self {
        Fp::dbl(self)
    }

    fn hlv(&self) -> Self {
        Fp::hlv(self)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Fp::mul(self, rhs)
    }

    fn sqr(&self) -> Self {
        Fp::sqr(self)
    }

    fn mul_fp(&self, k: &Fp<P>) -> Self {
        Fp::mul(self, k)
    }

    fn mul_dig(&self, d: Dig) -> Self {
        Fp::mul_dig(self, d)
    }

    fn inv(&self) -> Result<Self> {
        Fp::inv(self)
    }

    fn exp(&self, e: &Bn) -> Result<Self> {
        Fp::exp(self, e)
    }

    fn frb(&self, _tower: &Tower<P>, _i: usize) -> Self {
        *self
    }

    fn norm(&self) -> Fp<P> {
        *self
    }

    fn is_sqr(&self) -> bool {
        self.smb() != -1
    }

    fn srt(&self) -> Option<Self> {
        Fp::srt(self)
    }

    fn sgn0(&self) -> bool {
        self.is_odd()
    }

    fn rand<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Fp::random(rng)
    }

    fn from_uniform(bytes: &[u8]) -> Result<Self> {
        validate::max_length("fp_from_uniform", bytes.len(), 2 * FP_DIGS * 8)?;
        let mut wide = [0; 2 * FP_DIGS];
        relic_internal::endian::digits_from_be(bytes, &mut wide);
        let mut lo = [0; FP_DIGS];
        let mut hi = [0; FP_DIGS];
        lo.copy_from_slice(&wide[..FP_DIGS]);
        hi.copy_from_slice(&wide[FP_DIGS..]);
        Ok(Fp::from_wide(&lo, &hi))
    }

    fn inv_sim(a: &[Self]) -> Result<alloc::vec::Vec<Self>> {
        Fp::inv_sim(a)
    }
}

impl_field_ops!(Fp);

#[cfg(test)]
mod tests;
