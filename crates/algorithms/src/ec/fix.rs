//! Fixed-base scalar multiplication

use alloc::vec::Vec;

use super::mul::naf_eval;
use super::{odd_multiples, CurveGroup};
use crate::bn::{rec_naf, Bn};
use crate::config::{EpFix, EP_DEPTH, EP_FIX};
use crate::error::{validate, Result};

/// Layout of a precomputed table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMethod {
    /// 2^i P for every bit position
    Basic,
    /// Lim-Lee comb with one table
    Combs,
    /// Comb with two tables
    Combd,
    /// Odd multiples for w-NAF
    Lwnaf,
}

impl From<EpFix> for FixMethod {
    fn from(m: EpFix) -> Self {
        match m {
            EpFix::Basic => FixMethod::Basic,
            EpFix::Combs => FixMethod::Combs,
            EpFix::Combd => FixMethod::Combd,
            EpFix::Lwnaf => FixMethod::Lwnaf,
        }
    }
}

/// Precomputation for repeated multiplication of one base point
#[derive(Debug, Clone)]
pub struct FixTable<T> {
    method: FixMethod,
    bits: usize,
    table: Vec<T>,
}

impl<T: Copy> FixTable<T> {
    /// Table of the configured layout
    pub fn new<G>(g: &G, p: &T) -> Result<Self>
    where
        G: CurveGroup<Point = T> + ?Sized,
    {
        Self::with_method(g, p, EP_FIX.into())
    }

    /// Table covering scalars up to the bit length of the group order
    pub fn with_method<G>(g: &G, p: &T, method: FixMethod) -> Result<Self>
    where
        G: CurveGroup<Point = T> + ?Sized,
    {
        let bits = g.order().bits() + 1;
        let mut table = match method {
            FixMethod::Basic => {
                let mut t = Vec::with_capacity(bits);
                t.push(*p);
                for i in 1..bits {
                    let next = g.dbl(&t[i - 1]);
                    t.push(next);
                }
                t
            }
            FixMethod::Combs => comb(g, p, comb_rows(bits)),
            FixMethod::Combd => {
                let d = comb_rows(bits);
                let e = (d + 1) / 2;
                let t0 = comb(g, p, d);
                let mut t = t0.clone();
                for q in &t0 {
                    let mut q = *q;
                    for _ in 0..e {
                        q = g.dbl(&q);
                    }
                    t.push(q);
                }
                t
            }
            FixMethod::Lwnaf => odd_multiples(g, p, 1 << (EP_DEPTH - 2)),
        };
        g.norm_sim(&mut table)?;
        Ok(FixTable { method, bits, table })
    }

    /// Layout of this table
    pub fn method(&self) -> FixMethod {
        self.method
    }

    /// Number of stored points
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The precomputed points
    pub fn points(&self) -> &[T] {
        &self.table
    }
}

/// Rows of a comb of depth EP_DEPTH over `bits` bits
fn comb_rows(bits: usize) -> usize {
    (bits + EP_DEPTH - 1) / EP_DEPTH
}

/// T[j] = sum over bits t of j of 2^(t d) P
fn comb<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, d: usize) -> Vec<G::Point> {
    let mut pow = Vec::with_capacity(EP_DEPTH);
    pow.push(*p);
    for t in 1..EP_DEPTH {
        let mut q = pow[t - 1];
        for _ in 0..d {
            q = g.dbl(&q);
        }
        pow.push(q);
    }
    let mut table = Vec::with_capacity(1 << EP_DEPTH);
    table.push(g.infinity());
    for j in 1..(1usize << EP_DEPTH) {
        let t = j.trailing_zeros() as usize;
        let rest = j & (j - 1);
        let q = if rest == 0 {
            pow[t]
        } else {
            g.add(&table[rest], &pow[t])
        };
        table.push(q);
    }
    table
}

/// Comb column index for bit offset `i` of rows of length `d`
#[inline]
fn column(k: &Bn, i: usize, d: usize) -> usize {
    let mut idx = 0;
    for t in 0..EP_DEPTH {
        if k.get_bit(t * d + i) {
            idx |= 1 << t;
        }
    }
    idx
}

/// [k]P from a table built for P
pub fn mul_fix<G: CurveGroup + ?Sized>(g: &G, t: &FixTable<G::Point>, k: &Bn) -> Result<G::Point> {
    let m = k.abs().modp(g.order())?;
    validate::parameter(m.bits() <= t.bits, "ep_mul_fix")?;
    let r = match t.method {
        FixMethod::Basic => {
            let mut r = g.infinity();
            for (i, q) in t.table.iter().enumerate().take(m.bits()) {
                if m.get_bit(i) {
                    r = g.add(&r, q);
                }
            }
            r
        }
        FixMethod::Combs => {
            let d = comb_rows(t.bits);
            let mut r = g.infinity();
            for i in (0..d).rev() {
                r = g.dbl(&r);
                let idx = column(&m, i, d);
                if idx != 0 {
                    r = g.add(&r, &t.table[idx]);
                }
            }
            r
        }
        FixMethod::Combd => {
            let d = comb_rows(t.bits);
            let e = (d + 1) / 2;
            let half = 1 << EP_DEPTH;
            let mut r = g.infinity();
            for i in (0..e).rev() {
                r = g.dbl(&r);
                let lo = column(&m, i, d);
                if lo != 0 {
                    r = g.add(&r, &t.table[lo]);
                }
                if i + e < d {
                    let hi = column(&m, i + e, d);
                    if hi != 0 {
                        r = g.add(&r, &t.table[half + hi]);
                    }
                }
            }
            r
        }
        FixMethod::Lwnaf => naf_eval(g, &t.table, &rec_naf(&m, EP_DEPTH)?),
    };
    Ok(if k.is_neg() { g.neg(&r) } else { r })
}
