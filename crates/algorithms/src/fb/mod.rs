//! Binary field GF(2^283) in polynomial basis
//!
//! Elements are polynomials of degree below 283 reduced modulo the
//! pentanomial f(z) = z^283 + z^12 + z^7 + z^5 + 1, stored as five
//! little-endian 64-bit digits.

use core::fmt;

use rand::{CryptoRng, RngCore};
use relic_api::Serialize;
use relic_params::curves::nist_b283 as params;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::bn::{Bn, Dig};
use crate::error::{no_valid, validate, Result};

mod curve;

pub use curve::{nist_b283, nist_k283, FbCurve, FbPoint};

/// Degree m of the field
pub const FB_POLYN: usize = params::M;
/// Digits per element
pub const FB_DIGS: usize = FB_POLYN.div_ceil(64);
/// Bytes per encoded element
pub const FB_BYTES: usize = FB_POLYN.div_ceil(8);

const PENTA: [usize; 3] = params::PENTANOMIAL;
const TOP: usize = FB_POLYN % 64;
const TOP_MASK: Dig = (1 << TOP) - 1;
/// Bit positions i with Tr(z^i) = 1
const TRACE_BITS: [usize; 2] = [0, 271];

/// Element of GF(2^283)
#[derive(Clone, Copy, Default, PartialEq, Eq, Zeroize)]
pub struct Fb([Dig; FB_DIGS]);

impl fmt::Debug for Fb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fb(0x")?;
        for d in self.0.iter().rev() {
            write!(f, "{d:016x}")?;
        }
        write!(f, ")")
    }
}

impl ConditionallySelectable for Fb {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0; FB_DIGS];
        for (o, (x, y)) in out.iter_mut().zip(a.0.iter().zip(&b.0)) {
            *o = Dig::conditional_select(x, y, choice);
        }
        Fb(out)
    }
}

impl ConstantTimeEq for Fb {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

/// Spread the low 32 bits of `x` into the even bit positions.
#[inline]
const fn spread(x: Dig) -> Dig {
    let mut x = x & 0xffff_ffff;
    x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
    x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
    x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    (x | (x << 1)) & 0x5555_5555_5555_5555
}

#[inline]
fn xor_at(c: &mut [Dig], t: Dig, pos: usize) {
    let (w, b) = (pos / 64, pos % 64);
    c[w] ^= t << b;
    if b != 0 {
        c[w + 1] ^= t >> (64 - b);
    }
}

/// Reduce a double-length polynomial modulo f.
fn rdc(mut c: [Dig; 2 * FB_DIGS]) -> Fb {
    for i in (FB_DIGS..2 * FB_DIGS).rev() {
        let t = c[i];
        c[i] = 0;
        // z^(64 i) = z^(64 i - m) (1 + z^5 + z^7 + z^12)
        let base = 64 * i - FB_POLYN;
        xor_at(&mut c, t, base);
        for k in PENTA {
            xor_at(&mut c, t, base + k);
        }
    }
    let t = c[FB_DIGS - 1] >> TOP;
    c[FB_DIGS - 1] &= TOP_MASK;
    c[0] ^= t;
    for k in PENTA {
        xor_at(&mut c, t, k);
    }
    let mut out = [0; FB_DIGS];
    out.copy_from_slice(&c[..FB_DIGS]);
    Fb(out)
}

impl Fb {
    /// Zero
    pub const fn zero() -> Self {
        Fb([0; FB_DIGS])
    }

    /// One
    pub const fn one() -> Self {
        let mut d = [0; FB_DIGS];
        d[0] = 1;
        Fb(d)
    }

    /// The polynomial whose coefficients are the bits of `d`
    pub const fn from_dig(d: Dig) -> Self {
        let mut out = [0; FB_DIGS];
        out[0] = d;
        Fb(out)
    }

    /// From little-endian digits, rejecting degrees of m or more
    pub fn from_limbs(limbs: &[Dig; FB_DIGS]) -> Result<Self> {
        if limbs[FB_DIGS - 1] >> TOP != 0 {
            return Err(no_valid("fb_from_limbs"));
        }
        Ok(Fb(*limbs))
    }

    /// Little-endian digits
    pub const fn to_limbs(&self) -> [Dig; FB_DIGS] {
        self.0
    }

    /// Uniform element
    pub fn random<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut d = [0; FB_DIGS];
        for x in d.iter_mut() {
            *x = rng.next_u64();
        }
        d[FB_DIGS - 1] &= TOP_MASK;
        Fb(d)
    }

    /// Coefficient of z^i
    pub fn get_bit(&self, i: usize) -> bool {
        i < FB_POLYN && (self.0[i / 64] >> (i % 64)) & 1 == 1
    }

    /// Degree plus one, zero for the zero polynomial
    pub fn bits(&self) -> usize {
        for i in (0..FB_DIGS).rev() {
            if self.0[i] != 0 {
                return 64 * i + 64 - self.0[i].leading_zeros() as usize;
            }
        }
        0
    }

    /// Whether a = 0
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }

    /// Whether a = 1
    pub fn is_one(&self) -> bool {
        *self == Fb::one()
    }

    /// a + b
    pub fn add(&self, b: &Fb) -> Fb {
        let mut out = self.0;
        for (o, y) in out.iter_mut().zip(&b.0) {
            *o ^= y;
        }
        Fb(out)
    }

    /// a + d for a small polynomial d
    pub fn add_dig(&self, d: Dig) -> Fb {
        let mut out = self.0;
        out[0] ^= d;
        Fb(out)
    }

    /// Subtraction is addition in characteristic 2
    pub fn sub(&self, b: &Fb) -> Fb {
        self.add(b)
    }

    /// Left-to-right comb multiplication
    pub fn mul(&self, b: &Fb) -> Fb {
        let mut c = [0 as Dig; 2 * FB_DIGS];
        for k in (0..64).rev() {
            for j in 0..FB_DIGS {
                let mask = ((self.0[j] >> k) & 1).wrapping_neg();
                for i in 0..FB_DIGS {
                    c[i + j] ^= b.0[i] & mask;
                }
            }
            if k != 0 {
                for i in (1..2 * FB_DIGS).rev() {
                    c[i] = (c[i] << 1) | (c[i - 1] >> 63);
                }
                c[0] <<= 1;
            }
        }
        rdc(c)
    }

    /// Squaring by spreading the bits into a double-length polynomial
    pub fn sqr(&self) -> Fb {
        let mut c = [0 as Dig; 2 * FB_DIGS];
        for (i, &d) in self.0.iter().enumerate() {
            c[2 * i] = spread(d);
            c[2 * i + 1] = spread(d >> 32);
        }
        rdc(c)
    }

    /// a^(2^n)
    pub fn sqr_n(&self, n: usize) -> Fb {
        let mut r = *self;
        for _ in 0..n {
            r = r.sqr();
        }
        r
    }

    /// Itoh-Tsujii inversion: a^(2^m - 2)
    pub fn inv(&self) -> Result<Fb> {
        if self.is_zero() {
            return Err(no_valid("fb_inv"));
        }
        // beta_k = a^(2^k - 1), built along the bits of m - 1
        let e = FB_POLYN - 1;
        let top = usize::BITS - 1 - e.leading_zeros();
        let mut beta = *self;
        let mut k = 1usize;
        for i in (0..top).rev() {
            beta = beta.sqr_n(k).mul(&beta);
            k *= 2;
            if (e >> i) & 1 == 1 {
                beta = beta.sqr().mul(self);
                k += 1;
            }
        }
        Ok(beta.sqr())
    }

    /// Square root a^(2^(m - 1))
    pub fn srt(&self) -> Fb {
        self.sqr_n(FB_POLYN - 1)
    }

    /// Absolute trace, read off the coefficients that carry it
    pub fn trc(&self) -> bool {
        TRACE_BITS.iter().fold(false, |acc, &i| acc ^ self.get_bit(i))
    }

    /// Half-trace solution z of z^2 + z = a, when Tr(a) = 0
    pub fn slv(&self) -> Result<Fb> {
        if self.trc() {
            return Err(no_valid("fb_slv"));
        }
        let mut h = *self;
        for _ in 0..(FB_POLYN - 1) / 2 {
            h = h.sqr().sqr().add(self);
        }
        Ok(h)
    }

    /// a^e for a non-negative exponent
    pub fn exp(&self, e: &Bn) -> Result<Fb> {
        validate::parameter(!e.is_neg(), "fb_exp")?;
        let mut r = Fb::one();
        for i in (0..e.bits()).rev() {
            r = r.sqr();
            let t = r.mul(self);
            r = Fb::conditional_select(&r, &t, Choice::from(e.get_bit(i) as u8));
        }
        Ok(r)
    }

    /// The element whose digit vector is one more, wrapping below z^m
    pub(crate) fn next(&self) -> Fb {
        let mut out = self.0;
        for d in out.iter_mut() {
            let (v, carry) = d.overflowing_add(1);
            *d = v;
            if !carry {
                break;
            }
        }
        out[FB_DIGS - 1] &= TOP_MASK;
        Fb(out)
    }

    /// Bit-string reduction of uniform bytes, keeping the low m bits
    pub fn from_uniform(bytes: &[u8]) -> Result<Fb> {
        validate::min_length("fb_from_uniform", bytes.len(), FB_BYTES)?;
        let mut d = [0; FB_DIGS];
        relic_internal::endian::digits_from_be(&bytes[bytes.len() - FB_BYTES..], &mut d);
        d[FB_DIGS - 1] &= TOP_MASK;
        Ok(Fb(d))
    }

    /// Parse a hexadecimal polynomial
    pub fn read_str(s: &str) -> Result<Fb> {
        let n = Bn::read_str(s, 16)?;
        validate::parameter(!n.is_neg() && n.bits() <= FB_POLYN, "fb_read_str")?;
        let mut d = [0; FB_DIGS];
        for (x, y) in d.iter_mut().zip(n.digits()) {
            *x = *y;
        }
        Ok(Fb(d))
    }
}

impl Serialize for Fb {
    fn size_bin(&self, _pack: bool) -> usize {
        FB_BYTES
    }

    fn write_bin(&self, out: &mut [u8], _pack: bool) -> Result<()> {
        validate::length("fb_write_bin", out.len(), FB_BYTES)?;
        relic_internal::endian::digits_to_be(&self.0, out);
        Ok(())
    }

    fn read_bin(bytes: &[u8]) -> Result<Self> {
        validate::length("fb_read_bin", bytes.len(), FB_BYTES)?;
        let mut d = [0; FB_DIGS];
        relic_internal::endian::digits_from_be(bytes, &mut d);
        Fb::from_limbs(&d)
    }
}

#[cfg(test)]
mod tests;
