//! Group layer shared by every curve family
//!
//! A curve is a context value implementing [`CurveGroup`]; its points are
//! plain `Copy` values. The scalar multipliers in this module only use the
//! group law, so prime curves, twists, Edwards and binary curves all share
//! them.

use core::fmt::Debug;

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable};

use crate::bn::Bn;
use crate::error::Result;

mod fix;
mod mul;
mod sim;

pub use fix::{mul_fix, FixMethod, FixTable};
pub use mul::{
    mul, mul_basic, mul_dig, mul_lwnaf, mul_lwreg, mul_monty, mul_monty_blind, mul_slide,
};
pub use sim::{mul_sim, mul_sim_basic, mul_sim_inter, mul_sim_joint, mul_sim_lot, mul_sim_trick};

/// An elliptic curve group of prime order r, possibly times a cofactor.
pub trait CurveGroup {
    /// Point representation
    type Point: Copy + Clone + Debug + ConditionallySelectable;

    /// The neutral element
    fn infinity(&self) -> Self::Point;

    /// Generator of the order-r subgroup
    fn generator(&self) -> Self::Point;

    /// Order r of the generator
    fn order(&self) -> &Bn;

    /// P + Q
    fn add(&self, p: &Self::Point, q: &Self::Point) -> Self::Point;

    /// 2P
    fn dbl(&self, p: &Self::Point) -> Self::Point;

    /// -P
    fn neg(&self, p: &Self::Point) -> Self::Point;

    /// Whether P is the neutral element
    fn is_infty(&self, p: &Self::Point) -> bool;

    /// Equality of the represented points
    fn eq(&self, p: &Self::Point, q: &Self::Point) -> bool;

    /// Canonical (affine) representative
    fn norm(&self, p: &Self::Point) -> Self::Point;

    /// P - Q
    fn sub(&self, p: &Self::Point, q: &Self::Point) -> Self::Point {
        self.add(p, &self.neg(q))
    }

    /// Normalize many points at once
    fn norm_sim(&self, points: &mut [Self::Point]) -> Result<()> {
        for p in points.iter_mut() {
            *p = self.norm(p);
        }
        Ok(())
    }

    /// Constant-time choice between two points
    fn select(a: &Self::Point, b: &Self::Point, choice: Choice) -> Self::Point {
        Self::Point::conditional_select(a, b, choice)
    }

    /// Re-randomize the representation of P without changing the point
    fn blind<R: RngCore + CryptoRng + ?Sized>(&self, p: &Self::Point, _rng: &mut R) -> Self::Point {
        *p
    }

    /// Precomputed table of the generator, if any
    fn fixed(&self) -> Option<&FixTable<Self::Point>> {
        None
    }

    /// [k]G, through the fixed table when one exists
    fn mul_gen(&self, k: &Bn) -> Result<Self::Point> {
        match self.fixed() {
            Some(t) => mul_fix(self, t, k),
            None => mul_lwnaf(self, &self.generator(), k),
        }
    }

    /// Uniform element of the order-r subgroup
    fn rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<Self::Point> {
        let k = Bn::rand_mod(rng, self.order())?;
        self.mul_gen(&k)
    }
}

/// Odd multiples P, 3P, ..., (2n - 1)P
pub(crate) fn odd_multiples<G: CurveGroup + ?Sized>(g: &G, p: &G::Point, n: usize) -> alloc::vec::Vec<G::Point> {
    let mut t = alloc::vec::Vec::with_capacity(n);
    t.push(*p);
    if n > 1 {
        let p2 = g.dbl(p);
        for i in 1..n {
            let next = g.add(&t[i - 1], &p2);
            t.push(next);
        }
    }
    t
}

/// Constant-time table lookup of entry |d| / 2 for an odd digit d, negated
/// when d < 0.
pub(crate) fn ct_lookup<G: CurveGroup + ?Sized>(g: &G, table: &[G::Point], d: i8) -> G::Point {
    let idx = (d.unsigned_abs() / 2) as usize;
    let mut r = table[0];
    for (i, t) in table.iter().enumerate() {
        r = G::select(&r, t, Choice::from((i == idx) as u8));
    }
    let n = g.neg(&r);
    G::select(&r, &n, Choice::from((d < 0) as u8))
}
