//! Greatest common divisors, inverses, roots and residue symbols

use alloc::vec::Vec;
use core::cmp::Ordering;

use super::Bn;
use crate::error::{no_valid, validate, Result};

impl Bn {
    /// gcd(|self|, |b|) by the Euclidean algorithm
    pub fn gcd(&self, b: &Bn) -> Result<Bn> {
        let mut u = self.abs();
        let mut v = b.abs();
        while !v.is_zero() {
            let r = u.modp(&v)?;
            u = v;
            v = r;
        }
        Ok(u)
    }

    /// gcd(|self|, |b|) by the binary method
    pub fn gcd_bin(&self, b: &Bn) -> Result<Bn> {
        let mut u = self.abs();
        let mut v = b.abs();
        if u.is_zero() {
            return Ok(v);
        }
        if v.is_zero() {
            return Ok(u);
        }
        let mut shift = 0;
        while u.is_even() && v.is_even() {
            u = u.hlv();
            v = v.hlv();
            shift += 1;
        }
        while !u.is_zero() {
            while u.is_even() {
                u = u.hlv();
            }
            while v.is_even() {
                v = v.hlv();
            }
            if u.cmp(&v) != Ordering::Less {
                u = u.sub(&v)?.hlv();
            } else {
                v = v.sub(&u)?.hlv();
            }
        }
        v.lsh(shift)
    }

    /// Extended gcd: (g, u, v) with self * u + b * v = g = gcd(|self|, |b|).
    pub fn gcd_ext(&self, b: &Bn) -> Result<(Bn, Bn, Bn)> {
        let (mut r0, mut r1) = (self.abs(), b.abs());
        let (mut s0, mut s1) = (Bn::one(), Bn::zero());
        let (mut t0, mut t1) = (Bn::zero(), Bn::one());
        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1)?;
            let s = s0.sub(&q.mul(&s1)?)?;
            let t = t0.sub(&q.mul(&t1)?)?;
            r0 = core::mem::replace(&mut r1, r);
            s0 = core::mem::replace(&mut s1, s);
            t0 = core::mem::replace(&mut t1, t);
        }
        if self.is_neg() {
            s0 = s0.neg();
        }
        if b.is_neg() {
            t0 = t0.neg();
        }
        Ok((r0, s0, t0))
    }

    /// Least common multiple of the magnitudes
    pub fn lcm(&self, b: &Bn) -> Result<Bn> {
        if self.is_zero() || b.is_zero() {
            return Ok(Bn::zero());
        }
        self.abs().div(&self.gcd(b)?)?.mul(&b.abs())
    }

    /// Inverse modulo m, for gcd(self, m) = 1.
    pub fn mod_inv(&self, m: &Bn) -> Result<Bn> {
        validate::parameter(!m.is_zero() && !m.is_neg(), "bn_mod_inv")?;
        let a = self.modp(m)?;
        let (g, u, _) = a.gcd_ext(m)?;
        if !g.is_one() {
            return Err(no_valid("bn_mod_inv"));
        }
        u.modp(m)
    }

    /// Integer square root: floor(sqrt(self)) for non-negative values.
    pub fn srt(&self) -> Result<Bn> {
        validate::parameter(!self.is_neg(), "bn_srt")?;
        if self.is_zero() {
            return Ok(Bn::zero());
        }
        // Newton iteration from an overestimate
        let mut x = Bn::set_2b((self.bits() + 1) / 2)?;
        loop {
            let y = x.add(&self.div(&x)?)?.hlv();
            if y.cmp(&x) != Ordering::Less {
                return Ok(x);
            }
            x = y;
        }
    }

    /// Legendre symbol (self / p) for an odd prime p, as -1, 0 or 1.
    pub fn smb_leg(&self, p: &Bn) -> Result<i32> {
        validate::parameter(!p.is_even() && p.cmp_dig(2) == Ordering::Greater, "bn_smb_leg")?;
        let e = p.sub_dig(1)?.hlv();
        let t = self.modp(p)?.mxp(&e, p)?;
        if t.is_zero() {
            Ok(0)
        } else if t.is_one() {
            Ok(1)
        } else {
            Ok(-1)
        }
    }

    /// Jacobi symbol (self / n) for odd positive n.
    pub fn smb_jac(&self, n: &Bn) -> Result<i32> {
        validate::parameter(!n.is_even() && !n.is_neg(), "bn_smb_jac")?;
        let mut a = self.modp(n)?;
        let mut n = n.clone();
        let mut t = 1;
        while !a.is_zero() {
            while a.is_even() {
                a = a.hlv();
                let r = n.get_dig() & 7;
                if r == 3 || r == 5 {
                    t = -t;
                }
            }
            core::mem::swap(&mut a, &mut n);
            if a.get_dig() & 3 == 3 && n.get_dig() & 3 == 3 {
                t = -t;
            }
            a = a.modp(&n)?;
        }
        Ok(if n.is_one() { t } else { 0 })
    }
}

/// Inverses of every element modulo m with a single modular inversion.
pub fn mod_inv_sim(a: &[Bn], m: &Bn) -> Result<Vec<Bn>> {
    if a.is_empty() {
        return Ok(Vec::new());
    }
    let mut acc = Vec::with_capacity(a.len());
    let mut t = a[0].modp(m)?;
    acc.push(t.clone());
    for x in &a[1..] {
        t = t.mul(x)?.modp(m)?;
        acc.push(t.clone());
    }
    let mut inv = t.mod_inv(m)?;
    let mut out = alloc::vec![Bn::zero(); a.len()];
    for i in (1..a.len()).rev() {
        out[i] = inv.mul(&acc[i - 1])?.modp(m)?;
        inv = inv.mul(&a[i])?.modp(m)?;
    }
    out[0] = inv;
    Ok(out)
}

/// Signed remainder sequence of the extended Euclidean algorithm on (a, b),
/// as rows (r_i, t_i) with r_i = s_i a + t_i b.
pub(crate) fn euclid_rows(a: &Bn, b: &Bn) -> Result<Vec<(Bn, Bn)>> {
    let mut rows = Vec::new();
    let (mut r0, mut r1) = (a.abs(), b.abs());
    let (mut t0, mut t1) = (Bn::zero(), Bn::one());
    rows.push((r0.clone(), t0.clone()));
    while !r1.is_zero() {
        rows.push((r1.clone(), t1.clone()));
        let (q, r) = r0.div_rem(&r1)?;
        let t = t0.sub(&q.mul(&t1)?)?;
        r0 = core::mem::replace(&mut r1, r);
        t0 = core::mem::replace(&mut t1, t);
    }
    Ok(rows)
}
