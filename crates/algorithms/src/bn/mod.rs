//! Multi-precision integers
//!
//! [`Bn`] is a sign-magnitude integer over 64-bit digits. Values are kept in
//! trimmed form: the top digit is non-zero unless the value is zero, and zero
//! is always positive with a single zero digit. Growth past
//! [`BN_MAX_DIGS`](crate::config::BN_MAX_DIGS) digits fails with `NoMemory`.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::{CryptoRng, RngCore};
use relic_api::Serialize;
use zeroize::Zeroize;

use crate::config::BN_MAX_DIGS;
use crate::error::{no_memory, no_valid, validate, Error, Result};

pub mod low;

mod arith;
mod div;
mod gcd;
mod mxp;
mod prime;
mod rec;

pub use div::{
    mod_barrt, mod_monty, mod_monty_back, mod_monty_conv, mod_pre_barrt, mod_pre_monty, ModCtx,
};
pub(crate) use div::monty_inv;
pub use gcd::mod_inv_sim;
pub use mxp::{mxp_crt, mxp_sim, mxp_sim_lot};
pub use prime::gen_prime;
pub use rec::{
    rec_frb, rec_glv, rec_jsf, rec_naf, rec_reg, rec_sac, rec_slw, rec_tnaf, rec_win, FrbBasis,
    GlvBasis,
};

/// Machine digit
pub type Dig = u64;
/// Signed digit of the same width
pub type Dis = i64;
/// Double-width digit
pub type Dbl = u128;
/// Bits per digit
pub const DIG: usize = 64;
/// log2 of [`DIG`]
pub const DIG_LOG: usize = 6;

/// Statistical distance, in bits, added when sampling modulo an integer
pub const RAND_DIST: usize = relic_params::utils::hash::RAND_DIST;

const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// Sign of a multi-precision integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or positive
    Pos,
    /// Negative
    Neg,
}

impl Sign {
    /// The opposite sign
    pub const fn flip(self) -> Self {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Product of two signs
    pub const fn mul(self, other: Sign) -> Self {
        match (self, other) {
            (Sign::Pos, Sign::Pos) | (Sign::Neg, Sign::Neg) => Sign::Pos,
            _ => Sign::Neg,
        }
    }
}

/// Sign-magnitude multi-precision integer
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bn {
    dp: Vec<Dig>,
    sign: Sign,
}

impl Drop for Bn {
    fn drop(&mut self) {
        self.dp.zeroize();
    }
}

impl Zeroize for Bn {
    fn zeroize(&mut self) {
        self.dp.zeroize();
        self.dp.push(0);
        self.sign = Sign::Pos;
    }
}

impl Default for Bn {
    fn default() -> Self {
        Bn::zero()
    }
}

// ============================================================================
// Construction
// ============================================================================

impl Bn {
    /// Build from digits and a sign, trimming and checking capacity.
    pub(crate) fn from_parts(mut dp: Vec<Dig>, sign: Sign) -> Result<Bn> {
        while dp.len() > 1 && dp[dp.len() - 1] == 0 {
            dp.pop();
        }
        if dp.is_empty() {
            dp.push(0);
        }
        validate::capacity("bn_grow", dp.len(), BN_MAX_DIGS)?;
        let sign = if dp.len() == 1 && dp[0] == 0 {
            Sign::Pos
        } else {
            sign
        };
        Ok(Bn { dp, sign })
    }

    /// Same as `from_parts` for digit vectors known to fit.
    pub(crate) fn from_parts_small(mut dp: Vec<Dig>, sign: Sign) -> Bn {
        while dp.len() > 1 && dp[dp.len() - 1] == 0 {
            dp.pop();
        }
        if dp.is_empty() {
            dp.push(0);
        }
        debug_assert!(dp.len() <= BN_MAX_DIGS);
        let sign = if dp.len() == 1 && dp[0] == 0 {
            Sign::Pos
        } else {
            sign
        };
        Bn { dp, sign }
    }

    /// Zero
    pub fn zero() -> Bn {
        Bn {
            dp: vec![0],
            sign: Sign::Pos,
        }
    }

    /// One
    pub fn one() -> Bn {
        Bn::from_dig(1)
    }

    /// A non-negative single-digit value
    pub fn from_dig(digit: Dig) -> Bn {
        Bn {
            dp: vec![digit],
            sign: Sign::Pos,
        }
    }

    /// A signed single-digit value
    pub fn from_i64(v: i64) -> Bn {
        let sign = if v < 0 { Sign::Neg } else { Sign::Pos };
        Bn::from_parts_small(vec![v.unsigned_abs()], sign)
    }

    /// A non-negative value from little-endian digits of any length up to capacity
    pub fn from_limbs(limbs: &[Dig]) -> Bn {
        let n = limbs.len().min(BN_MAX_DIGS);
        Bn::from_parts_small(limbs[..n].to_vec(), Sign::Pos)
    }

    /// 2^b
    pub fn set_2b(b: usize) -> Result<Bn> {
        let mut dp = vec![0; b / DIG + 1];
        dp[b / DIG] = 1 << (b % DIG);
        Bn::from_parts(dp, Sign::Pos)
    }

    /// Uniform integer of exactly `bits` bits or fewer, with the given sign.
    pub fn rand<R: RngCore + ?Sized>(rng: &mut R, sign: Sign, bits: usize) -> Result<Bn> {
        let n = (bits + DIG - 1) / DIG;
        validate::capacity("bn_rand", n, BN_MAX_DIGS)?;
        let mut dp = vec![0; n.max(1)];
        for d in dp.iter_mut().take(n) {
            *d = rng.next_u64();
        }
        if bits % DIG != 0 {
            dp[n - 1] &= (1 << (bits % DIG)) - 1;
        }
        Bn::from_parts(dp, sign)
    }

    /// Uniform integer in [1, m - 1], sampled with `RAND_DIST` extra bits.
    pub fn rand_mod<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, m: &Bn) -> Result<Bn> {
        validate::parameter(m.cmp_dig(1) == Ordering::Greater, "bn_rand_mod")?;
        loop {
            let t = Bn::rand(rng, Sign::Pos, m.bits() + RAND_DIST)?;
            let t = t.modp(m)?;
            if !t.is_zero() {
                return Ok(t);
            }
        }
    }

    /// Parse a string in the given radix (2 to 64), with an optional leading `-`.
    pub fn read_str(s: &str, radix: u32) -> Result<Bn> {
        validate::parameter((2..=64).contains(&radix), "bn_read_str")?;
        let bytes = s.as_bytes();
        let (sign, digits) = match bytes.first() {
            Some(b'-') => (Sign::Neg, &bytes[1..]),
            _ => (Sign::Pos, bytes),
        };
        validate::parameter(!digits.is_empty(), "bn_read_str")?;
        let mut r = Bn::zero();
        for &c in digits {
            let v = digit_value(c, radix).ok_or(no_valid("bn_read_str"))?;
            r = r.mul_dig(radix as Dig)?.add_dig(v as Dig)?;
        }
        r.sign = if r.is_zero() { Sign::Pos } else { sign };
        Ok(r)
    }

    /// Render in the given radix (2 to 64).
    pub fn write_str(&self, radix: u32) -> Result<String> {
        validate::parameter((2..=64).contains(&radix), "bn_write_str")?;
        if self.is_zero() {
            return Ok(String::from("0"));
        }
        let mut out = Vec::new();
        let mut t = self.abs();
        while !t.is_zero() {
            let (q, r) = t.div_rem_dig(radix as Dig)?;
            out.push(ALPHABET[r as usize]);
            t = q;
        }
        if self.sign == Sign::Neg {
            out.push(b'-');
        }
        out.reverse();
        String::from_utf8(out).map_err(|_| no_valid("bn_write_str"))
    }

    /// Number of characters `write_str` produces, sign included.
    pub fn size_str(&self, radix: u32) -> Result<usize> {
        Ok(self.write_str(radix)?.len())
    }
}

fn digit_value(c: u8, radix: u32) -> Option<u32> {
    let v = if radix <= 36 {
        match c {
            b'0'..=b'9' => (c - b'0') as u32,
            b'A'..=b'Z' => (c - b'A') as u32 + 10,
            b'a'..=b'z' => (c - b'a') as u32 + 10,
            _ => return None,
        }
    } else {
        ALPHABET.iter().position(|&a| a == c)? as u32
    };
    if v < radix {
        Some(v)
    } else {
        None
    }
}

// ============================================================================
// Queries
// ============================================================================

impl Bn {
    /// Digits of the magnitude, least significant first
    #[inline]
    pub fn digits(&self) -> &[Dig] {
        &self.dp
    }

    /// Number of significant digits
    #[inline]
    pub fn len(&self) -> usize {
        self.dp.len()
    }

    /// Sign
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether the value is negative
    #[inline]
    pub fn is_neg(&self) -> bool {
        self.sign == Sign::Neg
    }

    /// Whether the value is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.dp.len() == 1 && self.dp[0] == 0
    }

    /// Whether the magnitude is even
    #[inline]
    pub fn is_even(&self) -> bool {
        self.dp[0] & 1 == 0
    }

    /// Whether the value is one
    #[inline]
    pub fn is_one(&self) -> bool {
        self.sign == Sign::Pos && self.dp.len() == 1 && self.dp[0] == 1
    }

    /// Bit length of the magnitude. Zero has zero bits.
    pub fn bits(&self) -> usize {
        let top = self.dp[self.dp.len() - 1];
        (self.dp.len() - 1) * DIG + (DIG - top.leading_zeros() as usize)
    }

    /// Bit `i` of the magnitude
    pub fn get_bit(&self, i: usize) -> bool {
        let d = i / DIG;
        d < self.dp.len() && (self.dp[d] >> (i % DIG)) & 1 == 1
    }

    /// Set or clear bit `i` of the magnitude.
    pub fn set_bit(&mut self, i: usize, value: bool) -> Result<()> {
        let d = i / DIG;
        if d >= self.dp.len() {
            if !value {
                return Ok(());
            }
            validate::capacity("bn_set_bit", d + 1, BN_MAX_DIGS)?;
            self.dp.resize(d + 1, 0);
        }
        if value {
            self.dp[d] |= 1 << (i % DIG);
        } else {
            self.dp[d] &= !(1 << (i % DIG));
        }
        let dp = core::mem::take(&mut self.dp);
        *self = Bn::from_parts_small(dp, self.sign);
        Ok(())
    }

    /// Hamming weight of the magnitude
    pub fn ham(&self) -> usize {
        self.dp.iter().map(|d| d.count_ones() as usize).sum()
    }

    /// Least significant digit of the magnitude
    #[inline]
    pub fn get_dig(&self) -> Dig {
        self.dp[0]
    }

    /// Value as a signed 64-bit integer, if it fits
    pub fn to_i64(&self) -> Option<i64> {
        if self.dp.len() > 1 || self.dp[0] > i64::MAX as u64 {
            return None;
        }
        let v = self.dp[0] as i64;
        Some(if self.is_neg() { -v } else { v })
    }

    /// Compare magnitudes
    pub fn cmp_abs(&self, other: &Bn) -> Ordering {
        if self.dp.len() != other.dp.len() {
            return self.dp.len().cmp(&other.dp.len());
        }
        match low::cmpn(&self.dp, &other.dp) {
            1 => Ordering::Greater,
            -1 => Ordering::Less,
            _ => Ordering::Equal,
        }
    }

    /// Compare with a non-negative digit
    pub fn cmp_dig(&self, digit: Dig) -> Ordering {
        if self.is_neg() {
            return Ordering::Less;
        }
        if self.dp.len() > 1 {
            return Ordering::Greater;
        }
        self.dp[0].cmp(&digit)
    }

    /// Magnitude zero-padded to `n` digits. The value must fit.
    pub(crate) fn padded(&self, n: usize) -> Vec<Dig> {
        let mut v = vec![0; n.max(self.dp.len())];
        v[..self.dp.len()].copy_from_slice(&self.dp);
        v.truncate(n);
        v
    }
}

impl PartialOrd for Bn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bn {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Pos, Sign::Neg) => Ordering::Greater,
            (Sign::Neg, Sign::Pos) => Ordering::Less,
            (Sign::Pos, Sign::Pos) => self.cmp_abs(other),
            (Sign::Neg, Sign::Neg) => other.cmp_abs(self),
        }
    }
}

impl From<Dig> for Bn {
    fn from(d: Dig) -> Self {
        Bn::from_dig(d)
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Bn {
    /// Write the magnitude big-endian into a buffer at least `size_bin` long,
    /// zero-padding on the left.
    pub fn write_bin_padded(&self, out: &mut [u8]) -> Result<()> {
        let size = self.size_bin(false);
        validate::min_length("bn_write_bin", out.len(), size)?;
        relic_internal::endian::digits_to_be(&self.dp, out);
        Ok(())
    }

    /// Magnitude as a big-endian byte vector of exactly `len` bytes.
    pub fn to_bytes_be(&self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.write_bin_padded(&mut out)?;
        Ok(out)
    }
}

impl Serialize for Bn {
    fn size_bin(&self, _pack: bool) -> usize {
        ((self.bits() + 7) / 8).max(1)
    }

    fn write_bin(&self, out: &mut [u8], pack: bool) -> Result<()> {
        validate::length("bn_write_bin", out.len(), self.size_bin(pack))?;
        relic_internal::endian::digits_to_be(&self.dp, out);
        Ok(())
    }

    fn read_bin(bytes: &[u8]) -> Result<Bn> {
        let n = relic_internal::endian::digits_for(bytes.len());
        if n > BN_MAX_DIGS {
            // leading zero bytes do not count against capacity
            let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
            if relic_internal::endian::digits_for(bytes.len() - first) > BN_MAX_DIGS {
                return Err(no_memory("bn_read_bin"));
            }
            return Bn::read_bin(&bytes[first..]);
        }
        let mut dp = vec![0; n.max(1)];
        relic_internal::endian::digits_from_be(bytes, &mut dp);
        Bn::from_parts(dp, Sign::Pos)
    }
}

impl fmt::Display for Bn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.write_str(16) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl fmt::Debug for Bn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bn({})", self)
    }
}

impl core::str::FromStr for Bn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Bn> {
        match s.strip_prefix("0x") {
            Some(hex) => Bn::read_str(hex, 16),
            None => match s.strip_prefix("-0x") {
                Some(hex) => Ok(Bn::read_str(hex, 16)?.neg()),
                None => Bn::read_str(s, 10),
            },
        }
    }
}

#[cfg(test)]
mod tests;
