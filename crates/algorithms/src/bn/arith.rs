//! Addition, multiplication and shifts of multi-precision integers

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use super::{low, Bn, Dig, Sign, DIG};
use crate::error::Result;

/// Operand length below which Karatsuba falls back to schoolbook
const KARAT_CUTOFF: usize = 8;

/// |a| + |b|
pub(crate) fn mag_add(a: &[Dig], b: &[Dig]) -> Vec<Dig> {
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut c = vec![0; a.len() + 1];
    c[..a.len()].copy_from_slice(a);
    let carry = low::addn_assign(&mut c[..a.len()], b);
    c[a.len()] = carry;
    c
}

/// |a| - |b| for |a| >= |b|
pub(crate) fn mag_sub(a: &[Dig], b: &[Dig]) -> Vec<Dig> {
    debug_assert!(a.len() >= b.len());
    let mut c = a.to_vec();
    let borrow = low::subn_assign(&mut c, b);
    debug_assert_eq!(borrow, 0);
    c
}

/// Schoolbook product of magnitudes
pub(crate) fn mag_mul(a: &[Dig], b: &[Dig]) -> Vec<Dig> {
    let mut c = vec![0; a.len() + b.len()];
    low::muln(&mut c, a, b);
    c
}

fn karat(a: &[Dig], b: &[Dig]) -> Vec<Dig> {
    let n = a.len().max(b.len());
    if a.len().min(b.len()) < KARAT_CUTOFF {
        return mag_mul(a, b);
    }
    let h = n / 2;
    let (a0, a1) = a.split_at(h.min(a.len()));
    let (b0, b1) = b.split_at(h.min(b.len()));

    let z0 = karat(a0, b0);
    let z2 = karat(a1, b1);
    let sa = mag_add(a0, a1);
    let sb = mag_add(b0, b1);
    let mut z1 = karat(&sa, &sb);
    let n1 = z1.len();
    low::subn_assign(&mut z1, &z0[..z0.len().min(n1)]);
    low::subn_assign(&mut z1, &z2[..z2.len().min(n1)]);

    let mut c = vec![0; a.len() + b.len() + 1];
    low::addn_assign(&mut c, &z0);
    low::addn_assign(&mut c[h..], &trim_slice(&z1));
    low::addn_assign(&mut c[2 * h..], &trim_slice(&z2));
    c
}

fn trim_slice(a: &[Dig]) -> Vec<Dig> {
    let mut n = a.len();
    while n > 1 && a[n - 1] == 0 {
        n -= 1;
    }
    a[..n].to_vec()
}

impl Bn {
    /// self + b
    pub fn add(&self, b: &Bn) -> Result<Bn> {
        if self.sign == b.sign {
            return Bn::from_parts(mag_add(&self.dp, &b.dp), self.sign);
        }
        match self.cmp_abs(b) {
            Ordering::Less => Bn::from_parts(mag_sub(&b.dp, &self.dp), b.sign),
            _ => Bn::from_parts(mag_sub(&self.dp, &b.dp), self.sign),
        }
    }

    /// self - b
    pub fn sub(&self, b: &Bn) -> Result<Bn> {
        if self.sign != b.sign {
            return Bn::from_parts(mag_add(&self.dp, &b.dp), self.sign);
        }
        match self.cmp_abs(b) {
            Ordering::Less => Bn::from_parts(mag_sub(&b.dp, &self.dp), self.sign.flip()),
            _ => Bn::from_parts(mag_sub(&self.dp, &b.dp), self.sign),
        }
    }

    /// self + digit
    pub fn add_dig(&self, digit: Dig) -> Result<Bn> {
        self.add(&Bn::from_dig(digit))
    }

    /// self - digit
    pub fn sub_dig(&self, digit: Dig) -> Result<Bn> {
        self.sub(&Bn::from_dig(digit))
    }

    /// -self
    pub fn neg(&self) -> Bn {
        let mut r = self.clone();
        if !r.is_zero() {
            r.sign = r.sign.flip();
        }
        r
    }

    /// |self|
    pub fn abs(&self) -> Bn {
        let mut r = self.clone();
        r.sign = Sign::Pos;
        r
    }

    /// self * b, schoolbook
    pub fn mul(&self, b: &Bn) -> Result<Bn> {
        Bn::from_parts(mag_mul(&self.dp, &b.dp), self.sign.mul(b.sign))
    }

    /// self * b, Karatsuba
    pub fn mul_karat(&self, b: &Bn) -> Result<Bn> {
        Bn::from_parts(karat(&self.dp, &b.dp), self.sign.mul(b.sign))
    }

    /// self * digit
    pub fn mul_dig(&self, digit: Dig) -> Result<Bn> {
        let mut c = vec![0; self.dp.len() + 1];
        let hi = low::mul1(&mut c, &self.dp, digit);
        c[self.dp.len()] = hi;
        Bn::from_parts(c, self.sign)
    }

    /// self^2
    pub fn sqr(&self) -> Result<Bn> {
        let mut c = vec![0; 2 * self.dp.len()];
        low::sqrn(&mut c, &self.dp);
        Bn::from_parts(c, Sign::Pos)
    }

    /// self * 2^bits
    pub fn lsh(&self, bits: usize) -> Result<Bn> {
        let digs = bits / DIG;
        let b = (bits % DIG) as u32;
        let mut c = vec![0; self.dp.len() + digs + 1];
        if b == 0 {
            c[digs..digs + self.dp.len()].copy_from_slice(&self.dp);
        } else {
            let hi = low::lshb(&mut c[digs..], &self.dp, b);
            c[digs + self.dp.len()] = hi;
        }
        Bn::from_parts(c, self.sign)
    }

    /// Magnitude shifted right by `bits`, sign kept
    pub fn rsh(&self, bits: usize) -> Bn {
        let digs = bits / DIG;
        if digs >= self.dp.len() {
            return Bn::zero();
        }
        let b = (bits % DIG) as u32;
        let src = &self.dp[digs..];
        let mut c = vec![0; src.len()];
        if b == 0 {
            c.copy_from_slice(src);
        } else {
            low::rshb(&mut c, src, b);
        }
        Bn::from_parts_small(c, self.sign)
    }

    /// Magnitude halved, sign kept
    pub fn hlv(&self) -> Bn {
        self.rsh(1)
    }

    /// 2 * self
    pub fn dbl(&self) -> Result<Bn> {
        self.lsh(1)
    }

    /// Low `bits` bits of the magnitude
    pub fn low_bits(&self, bits: usize) -> Bn {
        let n = (bits + DIG - 1) / DIG;
        let mut v = self.padded(n.max(1));
        if bits % DIG != 0 && n > 0 {
            v[n - 1] &= (1 << (bits % DIG)) - 1;
        }
        if n == 0 {
            return Bn::zero();
        }
        Bn::from_parts_small(v, Sign::Pos)
    }
}
