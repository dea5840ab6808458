//! Pairings on the k = 2, 16, 18, 24 and 48 curves
//!
//! [`PairingX`] pairs G1 over Fp with a twist [`EpX`] over T into the
//! target K, with T embedded in K as a [`Subfield`]. The Miller loops run in
//! affine coordinates on both groups and evaluate lines directly in K.
//!
//! The optimal ate pairing follows a short vector c with Σ c_i p^i = 0 mod
//! r:
//!
//! | family | c                       |
//! |--------|-------------------------|
//! | B24    | (u, -1)                 |
//! | B48    | (u, -1)                 |
//! | K16    | (u, 1, 0, 0, 0, -2)     |
//! | K18    | (u, 3, 0, 0, -1)        |
//! | SS     | (r)                     |
//!
//! and multiplies the Frobenius images of f_{c_i,Q}(P) with the lines
//! joining the partial sums of ψ^i([c_i]Q). Tate and Weil pairings use the
//! full loop over r.

use alloc::vec;
use alloc::vec::Vec;

use crate::bn::Bn;
use crate::config::{PpMap, PP_MAP};
use crate::ep::{self, EpCurve, EpPoint};
use crate::ep2::Family;
use crate::epx::{self, twist_root, EpX};
use crate::error::{no_valid, validate, Result};
use crate::field::Field;
use crate::fp::{Bls315, Bls378, Fp, Kss361, Kss372, Ss383};
use crate::fpx::{Cyclotomic, Fp16, Fp18, Fp2, Fp24, Fp3, Fp4, Fp48, Fp8, Subfield, Tower};

mod exp;
mod miller;

/// Element of G1 over the prime of K
pub type G1X<K> = EpPoint<Fp<<K as Field>::Prime>>;

/// Affine coordinates of a point of G1 and of G2
type Pair<T, K> = ((Fp<<K as Field>::Prime>, Fp<<K as Field>::Prime>), (T, T));

/// How the hard part of the final exponentiation runs
#[derive(Debug, Clone)]
enum Hard {
    /// BLS chain of depth j, for k = 3 2^j
    Chain(usize),
    /// Base-p digits of Φk(p) / r
    Digits(Vec<Bn>),
}

/// Pairing engine with G2 on a twist over T and GT in K
#[derive(Debug, Clone)]
pub struct PairingX<T: Field, K: Field> {
    g1: EpCurve<Fp<K::Prime>>,
    g2: EpX<T>,
    tower: Tower<K::Prime>,
    /// Ate coefficients c_i, least significant first
    ate: Vec<Bn>,
    zeta: K,
    zeta2: K,
    zeta3: K,
    hard: Hard,
}

/// Short vector of the optimal ate pairing of a family
fn ate_vector(family: Family, z: &Bn, r: &Bn) -> Vec<Bn> {
    let c = Bn::from_i64;
    match family {
        Family::B24 | Family::B48 => vec![z.clone(), c(-1)],
        Family::K16 => vec![z.clone(), c(1), c(0), c(0), c(0), c(-2)],
        Family::K18 => vec![z.clone(), c(3), c(0), c(0), c(-1)],
        _ => vec![r.clone()],
    }
}

/// Φk(p) for the supported embedding degrees
pub(crate) fn cyclotomic_poly(k: usize, p: &Bn) -> Result<Bn> {
    let pow = |e: usize| (0..e).try_fold(Bn::one(), |a, _| a.mul(p));
    match k {
        2 => p.add_dig(1),
        12 => pow(4)?.sub(&pow(2)?)?.add_dig(1),
        16 => pow(8)?.add_dig(1),
        18 => pow(6)?.sub(&pow(3)?)?.add_dig(1),
        24 => pow(8)?.sub(&pow(4)?)?.add_dig(1),
        48 => pow(16)?.sub(&pow(8)?)?.add_dig(1),
        _ => Err(no_valid("pp_param_set")),
    }
}

impl<T, K> PairingX<T, K>
where
    T: Subfield<K>,
    K: Cyclotomic,
{
    /// Engine for the groups `g1` and `g2`, which must share the order r
    pub fn new(g1: EpCurve<Fp<K::Prime>>, g2: EpX<T>) -> Result<Self> {
        let span = tracing::debug_span!("ppx_new", curve = g1.name(), k = K::EMBED);
        let _guard = span.enter();

        validate::parameter(g1.ord() == g2.ord(), "pp_param_set")?;
        let r = g1.ord().clone();
        let p = Fp::<K::Prime>::modulus();
        let ate = ate_vector(g2.family(), g2.seed(), &r);

        let pr = p.modp(&r)?;
        let mut sum = Bn::zero();
        let mut pi = Bn::one();
        for c in &ate {
            sum = sum.add(&c.mul(&pi)?)?.modp(&r)?;
            pi = pi.mul(&pr)?.modp(&r)?;
        }
        validate::parameter(sum.is_zero(), "pp_param_set")?;

        let hard = match g2.family() {
            Family::B24 => Hard::Chain(2),
            Family::B48 => Hard::Chain(3),
            _ => {
                let (mut h, rem) = cyclotomic_poly(K::EMBED, &p)?.div_rem(&r)?;
                validate::parameter(rem.is_zero(), "pp_param_set")?;
                let mut digits = Vec::new();
                while !h.is_zero() {
                    let (q, d) = h.div_rem(&p)?;
                    digits.push(d);
                    h = q;
                }
                Hard::Digits(digits)
            }
        };

        let zeta = twist_root::<T, K>(g2.twist())?;
        let zeta2 = zeta.sqr();
        let engine = PairingX {
            g1,
            tower: Tower::new()?,
            ate,
            zeta,
            zeta2,
            zeta3: zeta2.mul(&zeta),
            g2,
            hard,
        };
        tracing::debug!(terms = engine.ate.len(), "pairing ready");
        Ok(engine)
    }

    /// The group G1
    pub fn g1(&self) -> &EpCurve<Fp<K::Prime>> {
        &self.g1
    }

    /// The group G2
    pub fn g2(&self) -> &EpX<T> {
        &self.g2
    }

    /// Frobenius tables of the prime
    pub fn tower(&self) -> &Tower<K::Prime> {
        &self.tower
    }

    /// Pairing family
    pub fn family(&self) -> Family {
        self.g2.family()
    }

    /// Order r of the three groups
    pub fn ord(&self) -> &Bn {
        self.g1.ord()
    }

    /// Coefficients of the ate vector, least significant first
    pub fn ate_vector(&self) -> &[Bn] {
        &self.ate
    }

    fn affine_pair(&self, p: &G1X<K>, q: &EpPoint<T>) -> Option<Pair<T, K>> {
        if p.is_infty() || q.is_infty() {
            return None;
        }
        let p = self.g1.norm(p);
        let q = self.g2.curve().norm(q);
        Some(((p.x, p.y), (q.x, q.y)))
    }

    fn pairs(&self, ps: &[G1X<K>], qs: &[EpPoint<T>]) -> Result<Vec<Pair<T, K>>> {
        validate::length("pp_map_sim", qs.len(), ps.len())?;
        Ok(ps.iter().zip(qs).filter_map(|(p, q)| self.affine_pair(p, q)).collect())
    }

    // ========================================================================
    // Pairings
    // ========================================================================

    /// Optimal ate pairing
    pub fn map_oatep(&self, p: &G1X<K>, q: &EpPoint<T>) -> Result<K> {
        self.map_sim_oatep(&[*p], &[*q])
    }

    /// Product of optimal ate pairings under one final exponentiation
    pub fn map_sim_oatep(&self, ps: &[G1X<K>], qs: &[EpPoint<T>]) -> Result<K> {
        let mut f = K::one();
        for (p, q) in self.pairs(ps, qs)? {
            f = f.mul(&self.miller_ate(&p, &q)?);
        }
        self.final_exp(&f)
    }

    /// Reduced Tate pairing f_{r,P}(Q)^((p^k - 1) / r)
    pub fn map_tatep(&self, p: &G1X<K>, q: &EpPoint<T>) -> Result<K> {
        self.map_sim_tatep(&[*p], &[*q])
    }

    /// Product of Tate pairings
    pub fn map_sim_tatep(&self, ps: &[G1X<K>], qs: &[EpPoint<T>]) -> Result<K> {
        let mut f = K::one();
        for (p, q) in self.pairs(ps, qs)? {
            f = f.mul(&self.miller_tate(&p, &q)?);
        }
        self.final_exp(&f)
    }

    /// Weil pairing (-1)^r f_{r,P}(Q) / f_{r,Q}(P), projected by the easy
    /// part of the final exponentiation.
    ///
    /// With λ = Σ c_i p^i = m r over the ate vector, M = (p^k - 1) / r,
    /// S = Σ i c_i p^(i-1), Y = k p^(k-1), X = m Y - M S, h = Φk(p) / r and
    /// c = [`PairingX::hard_power`], the three maps satisfy
    /// oatep^Y weilp^(c h X) = tatep^X.
    pub fn map_weilp(&self, p: &G1X<K>, q: &EpPoint<T>) -> Result<K> {
        self.map_sim_weilp(&[*p], &[*q])
    }

    /// Product of Weil pairings
    pub fn map_sim_weilp(&self, ps: &[G1X<K>], qs: &[EpPoint<T>]) -> Result<K> {
        let mut f = K::one();
        for (p, q) in self.pairs(ps, qs)? {
            f = f.mul(&self.weil_ratio(&p, &q)?);
        }
        self.exp_easy(&f)
    }

    fn weil_ratio(&self, p: &(Fp<K::Prime>, Fp<K::Prime>), q: &(T, T)) -> Result<K> {
        let num = self.miller_tate(p, q)?;
        let (den, _) = self.miller_twist(self.ord(), q, p)?;
        let w = num.mul(&den.inv()?);
        Ok(if self.ord().is_even() { w } else { w.neg() })
    }

    /// The configured pairing
    pub fn map(&self, p: &G1X<K>, q: &EpPoint<T>) -> Result<K> {
        self.map_sim(&[*p], &[*q])
    }

    /// Product of configured pairings
    pub fn map_sim(&self, ps: &[G1X<K>], qs: &[EpPoint<T>]) -> Result<K> {
        match PP_MAP {
            PpMap::Tatep => self.map_sim_tatep(ps, qs),
            PpMap::Weilp => self.map_sim_weilp(ps, qs),
            PpMap::Oatep => self.map_sim_oatep(ps, qs),
        }
    }
}

/// Pairing on BLS24-P315
pub fn b24_p315() -> Result<PairingX<Fp4<Bls315>, Fp24<Bls315>>> {
    PairingX::new(ep::b24_p315()?, epx::b24_p315()?)
}

/// Pairing on BLS48-P378
pub fn b48_p378() -> Result<PairingX<Fp8<Bls378>, Fp48<Bls378>>> {
    PairingX::new(ep::b48_p378()?, epx::b48_p378()?)
}

/// Pairing on KSS16-P361
pub fn k16_p361() -> Result<PairingX<Fp4<Kss361>, Fp16<Kss361>>> {
    PairingX::new(ep::k16_p361()?, epx::k16_p361()?)
}

/// Pairing on KSS18-P372
pub fn k18_p372() -> Result<PairingX<Fp3<Kss372>, Fp18<Kss372>>> {
    PairingX::new(ep::k18_p372()?, epx::k18_p372()?)
}

/// Symmetric pairing on SS-P383
pub fn ss_p383() -> Result<PairingX<Fp<Ss383>, Fp2<Ss383>>> {
    PairingX::new(ep::ss_p383()?, epx::ss_p383()?)
}
