//! Variable-base scalar multiplication
//!
//! Every method accepts any signed scalar and returns [k]P.

use rand::{CryptoRng, RngCore};
use subtle::Choice;

use super::{ct_lookup, odd_multiples, CurveGroup};
use crate::bn::{rec_naf, rec_reg, rec_slw, Bn, Dig};
use crate::config::{EpMul, EP_MUL, EP_WIDTH};
use crate::error::Result;

#[inline]
fn signed<G: CurveGroup + ?Sized>(g: &G, r: G::Point, k: &Bn) -> G::Point {
    if k.is_neg() {
        g.neg(&r)
    } else {
        r
    }
}

/// Left-to-right double-and-add
pub fn mul_basic<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, k: &Bn) -> Result<G::Point> {
    let mut r = g.infinity();
    for i in (0..k.bits()).rev() {
        r = g.dbl(&r);
        if k.get_bit(i) {
            r = g.add(&r, p);
        }
    }
    Ok(signed(g, r, k))
}

/// Sliding windows over the odd multiples of P
pub fn mul_slide<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, k: &Bn) -> Result<G::Point> {
    let mut table = odd_multiples(g, p, 1 << (EP_WIDTH - 1));
    g.norm_sim(&mut table)?;
    let mut r = g.infinity();
    for u in rec_slw(k, EP_WIDTH) {
        if u == 0 {
            r = g.dbl(&r);
            continue;
        }
        for _ in 0..(8 - u.leading_zeros()) {
            r = g.dbl(&r);
        }
        r = g.add(&r, &table[(u / 2) as usize]);
    }
    Ok(signed(g, r, k))
}

/// Montgomery ladder over as many bits as the group order
pub fn mul_monty<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, k: &Bn) -> Result<G::Point> {
    Ok(signed(g, ladder(g, g.infinity(), *p, k), k))
}

/// Montgomery ladder with both registers re-randomized before the loop
pub fn mul_monty_blind<G, R>(g: &G, p: &G::Point, k: &Bn, rng: &mut R) -> Result<G::Point>
where
    G: CurveGroup + ?Sized,
    R: RngCore + CryptoRng + ?Sized,
{
    let r0 = g.blind(&g.infinity(), rng);
    let r1 = g.blind(p, rng);
    Ok(signed(g, ladder(g, r0, r1, k), k))
}

fn ladder<G: CurveGroup + ?Sized>(g: &G, mut r0: G::Point, mut r1: G::Point, k: &Bn) -> G::Point {
    let bits = k.bits().max(g.order().bits());
    for i in (0..bits).rev() {
        let b = Choice::from(k.get_bit(i) as u8);
        let (s0, s1) = (G::select(&r0, &r1, b), G::select(&r1, &r0, b));
        let t1 = g.add(&s0, &s1);
        let t0 = g.dbl(&s0);
        r0 = G::select(&t0, &t1, b);
        r1 = G::select(&t1, &t0, b);
    }
    r0
}

/// Left-to-right width-w NAF
pub fn mul_lwnaf<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, k: &Bn) -> Result<G::Point> {
    let naf = rec_naf(k, EP_WIDTH)?;
    let mut table = odd_multiples(g, p, 1 << (EP_WIDTH - 2));
    g.norm_sim(&mut table)?;
    Ok(signed(g, naf_eval(g, &table, &naf), k))
}

/// Evaluate a NAF digit vector (least significant first) against a table of
/// odd multiples.
pub(crate) fn naf_eval<G: CurveGroup + ?Sized>(g: &G, table: &[G::Point], naf: &[i8]) -> G::Point {
    let mut r = g.infinity();
    for &d in naf.iter().rev() {
        r = g.dbl(&r);
        if d > 0 {
            r = g.add(&r, &table[(d / 2) as usize]);
        } else if d < 0 {
            r = g.sub(&r, &table[(-d / 2) as usize]);
        }
    }
    r
}

/// Regular recoding with constant-time table lookups. Even scalars are made
/// odd by adding the group order, so P must lie in the order-r subgroup.
pub fn mul_lwreg<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, k: &Bn) -> Result<G::Point> {
    let n = g.order();
    let mut t = k.abs().modp(n)?;
    if t.is_zero() {
        return Ok(g.infinity());
    }
    if t.is_even() {
        t = t.add(n)?;
    }
    let digits = rec_reg(&t, n.bits() + 1, EP_WIDTH)?;
    let table = odd_multiples(g, p, 1 << (EP_WIDTH - 2));
    let (top, rest) = match digits.split_last() {
        Some(s) => s,
        None => return Ok(g.infinity()),
    };
    let mut r = mul_dig(g, p, *top as Dig)?;
    for &d in rest.iter().rev() {
        for _ in 0..EP_WIDTH - 1 {
            r = g.dbl(&r);
        }
        r = g.add(&r, &ct_lookup(g, &table, d));
    }
    Ok(signed(g, r, k))
}

/// [k]P for a single-digit scalar
pub fn mul_dig<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, k: Dig) -> Result<G::Point> {
    let mut r = g.infinity();
    for i in (0..64 - k.leading_zeros()).rev() {
        r = g.dbl(&r);
        if (k >> i) & 1 == 1 {
            r = g.add(&r, p);
        }
    }
    Ok(r)
}

/// Configured variable-base multiplication
pub fn mul<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, k: &Bn) -> Result<G::Point> {
    if k.is_zero() || g.is_infty(p) {
        return Ok(g.infinity());
    }
    match EP_MUL {
        EpMul::Basic => mul_basic(g, p, k),
        EpMul::Slide => mul_slide(g, p, k),
        EpMul::Monty => mul_monty(g, p, k),
        EpMul::Lwnaf => mul_lwnaf(g, p, k),
        EpMul::Lwreg => mul_lwreg(g, p, k),
    }
}
