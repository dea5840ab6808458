//! Simultaneous scalar multiplication: [k]P + [l]Q and multi-scalar sums

use alloc::vec;
use alloc::vec::Vec;

use super::mul::mul;
use super::{odd_multiples, CurveGroup};
use crate::bn::{rec_jsf, rec_naf, rec_win, Bn};
use crate::config::{EpSim, EP_SIM, EP_WIDTH};
use crate::error::{validate, Result};

/// Two independent multiplications
pub fn mul_sim_basic<G: CurveGroup + ?Sized>(
    g: &G,
    p: &G::Point,
    k: &Bn,
    q: &G::Point,
    l: &Bn,
) -> Result<G::Point> {
    Ok(g.add(&mul(g, p, k)?, &mul(g, q, l)?))
}

/// Shamir's trick with joint windows of width w = EP_WIDTH / 2
pub fn mul_sim_trick<G: CurveGroup + ?Sized>(
    g: &G,
    p: &G::Point,
    k: &Bn,
    q: &G::Point,
    l: &Bn,
) -> Result<G::Point> {
    let w = (EP_WIDTH / 2).max(1);
    let (p, q) = (signed_base(g, p, k), signed_base(g, q, l));
    let n = 1usize << w;
    // table[i * n + j] = [i]P + [j]Q
    let mut table = Vec::with_capacity(n * n);
    let mut row = g.infinity();
    for _ in 0..n {
        let mut cell = row;
        for _ in 0..n {
            table.push(cell);
            cell = g.add(&cell, &q);
        }
        row = g.add(&row, &p);
    }
    g.norm_sim(&mut table)?;

    let mut wk = rec_win(k, w);
    let mut wl = rec_win(l, w);
    let len = wk.len().max(wl.len());
    wk.resize(len, 0);
    wl.resize(len, 0);
    let mut r = g.infinity();
    for i in (0..len).rev() {
        for _ in 0..w {
            r = g.dbl(&r);
        }
        let idx = (wk[i] as usize) * n + wl[i] as usize;
        if idx != 0 {
            r = g.add(&r, &table[idx]);
        }
    }
    Ok(r)
}

/// Interleaved width-w NAFs
pub fn mul_sim_inter<G: CurveGroup + ?Sized>(
    g: &G,
    p: &G::Point,
    k: &Bn,
    q: &G::Point,
    l: &Bn,
) -> Result<G::Point> {
    let (p, q) = (signed_base(g, p, k), signed_base(g, q, l));
    let mut tp = odd_multiples(g, &p, 1 << (EP_WIDTH - 2));
    let mut tq = odd_multiples(g, &q, 1 << (EP_WIDTH - 2));
    g.norm_sim(&mut tp)?;
    g.norm_sim(&mut tq)?;
    let mut nk = rec_naf(k, EP_WIDTH)?;
    let mut nl = rec_naf(l, EP_WIDTH)?;
    let len = nk.len().max(nl.len());
    nk.resize(len, 0);
    nl.resize(len, 0);
    let mut r = g.infinity();
    for i in (0..len).rev() {
        r = g.dbl(&r);
        for (d, t) in [(nk[i], &tp), (nl[i], &tq)] {
            if d > 0 {
                r = g.add(&r, &t[(d / 2) as usize]);
            } else if d < 0 {
                r = g.sub(&r, &t[(-d / 2) as usize]);
            }
        }
    }
    Ok(r)
}

/// Joint sparse form over P, Q, P + Q and P - Q
pub fn mul_sim_joint<G: CurveGroup + ?Sized>(
    g: &G,
    p: &G::Point,
    k: &Bn,
    q: &G::Point,
    l: &Bn,
) -> Result<G::Point> {
    let (p, q) = (signed_base(g, p, k), signed_base(g, q, l));
    let mut t = [p, q, g.add(&p, &q), g.sub(&p, &q)];
    g.norm_sim(&mut t)?;
    let jsf = rec_jsf(k, l)?;
    let mut r = g.infinity();
    for &[u0, u1] in jsf.iter().rev() {
        r = g.dbl(&r);
        let (pt, neg) = match (u0, u1) {
            (0, 0) => continue,
            (a, 0) => (&t[0], a < 0),
            (0, b) => (&t[1], b < 0),
            (a, b) if a == b => (&t[2], a < 0),
            (a, _) => (&t[3], a < 0),
        };
        r = if neg { g.sub(&r, pt) } else { g.add(&r, pt) };
    }
    Ok(r)
}

/// Configured simultaneous multiplication
pub fn mul_sim<G: CurveGroup + ?Sized>(
    g: &G,
    p: &G::Point,
    k: &Bn,
    q: &G::Point,
    l: &Bn,
) -> Result<G::Point> {
    match EP_SIM {
        EpSim::Basic => mul_sim_basic(g, p, k, q, l),
        EpSim::Trick => mul_sim_trick(g, p, k, q, l),
        EpSim::Inter => mul_sim_inter(g, p, k, q, l),
        EpSim::Joint => mul_sim_joint(g, p, k, q, l),
    }
}

/// Sum of [k_i]P_i by bucket accumulation. Fails with `NoValid` when the
/// slices differ in length.
pub fn mul_sim_lot<G: CurveGroup + ?Sized>(g: &G, points: &[G::Point], k: &[Bn]) -> Result<G::Point> {
    validate::parameter(points.len() == k.len(), "ep_mul_sim_lot")?;
    if points.is_empty() {
        return Ok(g.infinity());
    }
    let bases: Vec<_> = points.iter().zip(k).map(|(p, s)| signed_base(g, p, s)).collect();
    let c = match points.len() {
        0..=3 => 2,
        4..=31 => 3,
        32..=127 => 5,
        _ => 7,
    };
    let windows: Vec<Vec<u8>> = k.iter().map(|s| rec_win(s, c)).collect();
    let len = windows.iter().map(Vec::len).max().unwrap_or(0);

    let mut r = g.infinity();
    for i in (0..len).rev() {
        for _ in 0..c {
            r = g.dbl(&r);
        }
        let mut buckets = vec![g.infinity(); (1 << c) - 1];
        for (p, w) in bases.iter().zip(&windows) {
            match w.get(i) {
                Some(&d) if d != 0 => {
                    let b = &mut buckets[d as usize - 1];
                    *b = g.add(b, p);
                }
                _ => {}
            }
        }
        let mut run = g.infinity();
        let mut acc = g.infinity();
        for b in buckets.iter().rev() {
            run = g.add(&run, b);
            acc = g.add(&acc, &run);
        }
        r = g.add(&r, &acc);
    }
    Ok(r)
}

fn signed_base<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, k: &Bn) -> G::Point {
    if k.is_neg() {
        g.neg(p)
    } else {
        *p
    }
}
