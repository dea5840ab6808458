//! Scalar recodings
//!
//! Digit vectors are least significant first unless noted. Recodings work on
//! the magnitude of their input; callers carry the sign.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use super::gcd::euclid_rows;
use super::Bn;
use crate::error::{validate, Result};

/// Unsigned fixed windows of width `w` (1 to 8).
pub fn rec_win(k: &Bn, w: usize) -> Vec<u8> {
    debug_assert!((1..=8).contains(&w));
    let n = (k.bits() + w - 1) / w;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let mut d = 0u8;
        for j in 0..w {
            if k.get_bit(i * w + j) {
                d |= 1 << j;
            }
        }
        out.push(d);
    }
    out
}

/// Sliding windows of width at most `w`, most significant first.
///
/// A zero entry stands for one squaring. A non-zero entry is an odd window
/// value u: square by the bit length of u, then multiply by the power u.
pub fn rec_slw(k: &Bn, w: usize) -> Vec<u8> {
    debug_assert!((1..=8).contains(&w));
    let mut out = Vec::new();
    let mut i = k.bits() as isize - 1;
    while i >= 0 {
        if !k.get_bit(i as usize) {
            out.push(0);
            i -= 1;
            continue;
        }
        let mut j = (i - w as isize + 1).max(0);
        while !k.get_bit(j as usize) {
            j += 1;
        }
        let mut u = 0u8;
        for b in (j..=i).rev() {
            u = (u << 1) | k.get_bit(b as usize) as u8;
        }
        out.push(u);
        i = j - 1;
    }
    out
}

/// Width-`w` non-adjacent form of |k|. Digits are odd and below 2^(w-1) in
/// absolute value, and any w consecutive digits hold at most one non-zero.
pub fn rec_naf(k: &Bn, w: usize) -> Result<Vec<i8>> {
    validate::parameter((2..=8).contains(&w), "bn_rec_naf")?;
    let mut t = k.abs();
    let mut out = Vec::with_capacity(t.bits() + 1);
    let modulus = 1i64 << w;
    while !t.is_zero() {
        if t.is_even() {
            out.push(0);
        } else {
            let mut d = (t.get_dig() & (modulus as u64 - 1)) as i64;
            if d >= modulus / 2 {
                d -= modulus;
            }
            t = t.sub(&Bn::from_i64(d))?;
            out.push(d as i8);
        }
        t = t.hlv();
    }
    Ok(out)
}

/// Regular signed-window recoding of an odd k < 2^n with width `w`: every
/// digit is odd, so the digit count depends only on n and w.
pub fn rec_reg(k: &Bn, n: usize, w: usize) -> Result<Vec<i8>> {
    validate::parameter((2..=8).contains(&w) && !k.is_even(), "bn_rec_reg")?;
    let l = (n + w - 2) / (w - 1);
    let half = 1i64 << (w - 1);
    let mut t = k.abs();
    let mut out = Vec::with_capacity(l + 1);
    for _ in 0..l {
        let d = (t.get_dig() & ((1u64 << w) - 1)) as i64 - half;
        t = t.sub(&Bn::from_i64(d))?.rsh(w - 1);
        out.push(d as i8);
    }
    out.push(t.to_i64().unwrap_or(0) as i8);
    Ok(out)
}

/// Joint sparse form of (|k|, |l|)
pub fn rec_jsf(k: &Bn, l: &Bn) -> Result<Vec<[i8; 2]>> {
    let mut a = k.abs();
    let mut b = l.abs();
    let mut d = [0i64; 2];
    let mut out = Vec::with_capacity(a.bits().max(b.bits()) + 1);
    let low3 = |x: &Bn, d: i64| ((x.get_dig() as i64).wrapping_add(d)) & 7;
    while !(a.is_zero() && d[0] == 0 && b.is_zero() && d[1] == 0) {
        let l0 = low3(&a, d[0]);
        let l1 = low3(&b, d[1]);
        let mut u0 = 0;
        if l0 & 1 == 1 {
            u0 = if l0 & 3 == 1 { 1 } else { -1 };
            if (l0 == 3 || l0 == 5) && l1 & 3 == 2 {
                u0 = -u0;
            }
        }
        let mut u1 = 0;
        if l1 & 1 == 1 {
            u1 = if l1 & 3 == 1 { 1 } else { -1 };
            if (l1 == 3 || l1 == 5) && l0 & 3 == 2 {
                u1 = -u1;
            }
        }
        out.push([u0 as i8, u1 as i8]);
        if 2 * d[0] == 1 + u0 {
            d[0] = 1 - d[0];
        }
        if 2 * d[1] == 1 + u1 {
            d[1] = 1 - d[1];
        }
        a = a.hlv();
        b = b.hlv();
    }
    Ok(out)
}

/// Rounded quotient round(x / y) for any signs.
fn rnd(x: &Bn, y: &Bn) -> Result<Bn> {
    let (x, y) = if y.is_neg() { (x.neg(), y.neg()) } else { (x.clone(), y.clone()) };
    x.dbl()?.add(&y)?.div(&y.dbl()?)
}

/// Short basis {(a1, b1), (a2, b2)} of the lattice of (x, y) with
/// x + y λ = 0 mod n.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlvBasis {
    /// First vector
    pub a1: Bn,
    /// First vector
    pub b1: Bn,
    /// Second vector
    pub a2: Bn,
    /// Second vector
    pub b2: Bn,
}

impl GlvBasis {
    /// Basis from the extended Euclidean sequence of (n, λ), stopped at the
    /// square root of n.
    pub fn new(n: &Bn, lambda: &Bn) -> Result<GlvBasis> {
        let rows = euclid_rows(n, &lambda.modp(n)?)?;
        let bound = n.srt()?;
        let mut l = 0;
        for (i, (r, _)) in rows.iter().enumerate() {
            if r.cmp(&bound) != Ordering::Less {
                l = i;
            }
        }
        validate::parameter(l + 1 < rows.len(), "bn_rec_glv")?;
        let (r1, t1) = &rows[l + 1];
        let (a1, b1) = (r1.clone(), t1.neg());
        let (a2, b2) = match rows.get(l + 2) {
            Some((r2, t2)) => {
                let first = rows[l].0.sqr()?.add(&rows[l].1.sqr()?)?;
                let second = r2.sqr()?.add(&t2.sqr()?)?;
                if first.cmp(&second) != Ordering::Greater {
                    (rows[l].0.clone(), rows[l].1.neg())
                } else {
                    (r2.clone(), t2.neg())
                }
            }
            None => (rows[l].0.clone(), rows[l].1.neg()),
        };
        Ok(GlvBasis { a1, b1, a2, b2 })
    }
}

/// Balanced decomposition k = k1 + k2 λ mod n with |k1|, |k2| about sqrt(n).
pub fn rec_glv(k: &Bn, n: &Bn, basis: &GlvBasis) -> Result<(Bn, Bn)> {
    let k = k.modp(n)?;
    let c1 = rnd(&basis.b2.mul(&k)?, n)?;
    let c2 = rnd(&basis.b1.mul(&k)?.neg(), n)?;
    let k1 = k
        .sub(&c1.mul(&basis.a1)?)?
        .sub(&c2.mul(&basis.a2)?)?;
    let k2 = c1.mul(&basis.b1)?.add(&c2.mul(&basis.b2)?)?.neg();
    Ok((k1, k2))
}

/// Lattice basis for an n-dimensional endomorphism decomposition, with the
/// first column of its adjugate cached.
#[derive(Clone, Debug)]
pub struct FrbBasis {
    rows: Vec<Vec<Bn>>,
    cof: Vec<Bn>,
    det: Bn,
}

impl FrbBasis {
    /// Basis whose rows v satisfy sum v_i λ^i = 0 mod r.
    pub fn new(rows: Vec<Vec<Bn>>) -> Result<FrbBasis> {
        let n = rows.len();
        validate::parameter(n > 0 && rows.iter().all(|r| r.len() == n), "bn_rec_frb")?;
        let det = determinant(&rows)?;
        validate::parameter(!det.is_zero(), "bn_rec_frb")?;
        let mut cof = Vec::with_capacity(n);
        for j in 0..n {
            let c = determinant(&minor(&rows, j, 0))?;
            cof.push(if j % 2 == 1 { c.neg() } else { c });
        }
        tracing::debug!(dimension = n, det_bits = det.bits(), "frobenius basis");
        Ok(FrbBasis { rows, cof, det })
    }

    /// Dimension of the decomposition
    pub fn dim(&self) -> usize {
        self.rows.len()
    }
}

fn minor(m: &[Vec<Bn>], row: usize, col: usize) -> Vec<Vec<Bn>> {
    m.iter()
        .enumerate()
        .filter(|(i, _)| *i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|(j, _)| *j != col)
                .map(|(_, v)| v.clone())
                .collect()
        })
        .collect()
}

/// Determinant by cofactor expansion along the first row.
fn determinant(m: &[Vec<Bn>]) -> Result<Bn> {
    if m.len() == 1 {
        return Ok(m[0][0].clone());
    }
    let mut acc = Bn::zero();
    for j in 0..m.len() {
        if m[0][j].is_zero() {
            continue;
        }
        let t = m[0][j].mul(&determinant(&minor(m, 0, j))?)?;
        acc = if j % 2 == 1 { acc.sub(&t)? } else { acc.add(&t)? };
    }
    Ok(acc)
}

/// Babai rounding of (k mod r, 0, ..., 0) against the basis: returns v with
/// sum v_i λ^i = k mod r and every |v_i| about r^(1/n).
pub fn rec_frb(k: &Bn, r: &Bn, basis: &FrbBasis) -> Result<Vec<Bn>> {
    let k = k.modp(r)?;
    let n = basis.dim();
    let mut v = vec![Bn::zero(); n];
    v[0] = k.clone();
    for j in 0..n {
        let alpha = rnd(&k.mul(&basis.cof[j])?, &basis.det)?;
        if alpha.is_zero() {
            continue;
        }
        for (vi, bji) in v.iter_mut().zip(&basis.rows[j]) {
            *vi = vi.sub(&alpha.mul(bji)?)?;
        }
    }
    Ok(v)
}

/// Sign-aligned column recoding of non-negative scalars below 2^l with an
/// odd first scalar. Digits of the first scalar are +-1. Digits of the
/// others are 0 or the first scalar's digit in the same column.
pub fn rec_sac(k: &[Bn], l: usize) -> Result<Vec<Vec<i8>>> {
    validate::parameter(!k.is_empty() && l > 0, "bn_rec_sac")?;
    validate::parameter(!k[0].is_even() && k.iter().all(|x| !x.is_neg()), "bn_rec_sac")?;
    let mut out = vec![vec![0i8; l]; k.len()];
    out[0][l - 1] = 1;
    for i in 0..l - 1 {
        out[0][i] = if k[0].get_bit(i + 1) { 1 } else { -1 };
    }
    for j in 1..k.len() {
        let mut t = k[j].clone();
        for i in 0..l {
            let d = if t.is_even() { 0 } else { out[0][i] };
            out[j][i] = d;
            t = t.hlv();
            if d < 0 {
                t = t.add_dig(1)?;
            }
        }
        validate::parameter(t.is_zero(), "bn_rec_sac")?;
    }
    Ok(out)
}

/// τ-adic NAF of k on a Koblitz curve with μ = ±1, τ^2 = μτ - 2.
pub fn rec_tnaf(k: &Bn, mu: i8) -> Result<Vec<i8>> {
    validate::parameter(mu == 1 || mu == -1, "bn_rec_tnaf")?;
    let four = Bn::from_dig(4);
    let mut r0 = k.clone();
    let mut r1 = Bn::zero();
    let mut out = Vec::new();
    while !(r0.is_zero() && r1.is_zero()) {
        let mut u = 0i8;
        if !r0.is_even() {
            let t = r0.sub(&r1.dbl()?)?.modp(&four)?;
            u = if t.get_dig() == 1 { 1 } else { -1 };
            r0 = r0.sub(&Bn::from_i64(u as i64))?;
        }
        out.push(u);
        // (r0 + r1 τ) / τ
        let h = r0.hlv();
        let next0 = if mu == 1 { r1.add(&h)? } else { r1.sub(&h)? };
        r1 = h.neg();
        r0 = next0;
    }
    Ok(out)
}
