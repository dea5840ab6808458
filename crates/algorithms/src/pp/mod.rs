//! Bilinear pairings e: G1 x G2 -> GT on the k = 12 curves
//!
//! [`Pairing`] bundles the two source groups with the extension tower and
//! the seed recodings the Miller loops and final exponentiations consume.
//! Three maps are provided: the optimal ate pairing, the reduced Tate
//! pairing and a Weil pairing; [`Pairing::map`] picks one through
//! [`PP_MAP`]. Any pairing with the point at infinity on either side is 1.
//! The other embedding degrees live in [`ppx`](crate::ppx).

use alloc::vec::Vec;

use crate::bn::{rec_naf, Bn};
use crate::config::{FpxRdc, PpMap, PP_EXT, PP_MAP};
use crate::ep::{self, EpCurve, EpPoint};
use crate::ep2::{self, Ep2, Ep2Point, Family, Twist};
use crate::error::{validate, Result};
use crate::field::Field;
use crate::fp::{Bls377, Bls381, Bn254, Fp, FpParams};
use crate::fpx::{Cyclotomic, Fp12, Fp2, Tower};

mod exp;
mod line;
mod miller;

pub use line::Line;

/// Element of G1
pub type G1<P> = EpPoint<Fp<P>>;
/// Element of G2
pub type G2<P> = Ep2Point<P>;
/// Element of GT
pub type Gt<P> = Fp12<P>;

/// Pairing engine over one prime
#[derive(Debug, Clone)]
pub struct Pairing<P: FpParams> {
    g1: EpCurve<Fp<P>>,
    g2: Ep2<P>,
    tower: Tower<P>,
    /// NAF of |z|, least significant first
    z_naf: Vec<i8>,
    /// NAF of the ate loop length |6z + 2| or |z|
    ate_naf: Vec<i8>,
    ate_neg: bool,
    /// 3 b' on the twist
    b3: Fp2<P>,
    xi_inv: Fp2<P>,
}

impl<P: FpParams> Pairing<P> {
    /// Engine for the groups `g1` and `g2`, which must share the order r
    pub fn new(g1: EpCurve<Fp<P>>, g2: Ep2<P>) -> Result<Self> {
        let span = tracing::debug_span!("pp_new", curve = g1.name());
        let _guard = span.enter();

        validate::parameter(g1.ord() == g2.ord(), "pp_param_set")?;
        let tower = Tower::new()?;
        let z = g2.seed().clone();
        let ate = match g2.family() {
            Family::Bn => z.mul_dig(6)?.add_dig(2)?,
            _ => z.clone(),
        };
        let b3 = g2.curve().b().mul_dig(3);
        let engine = Pairing {
            z_naf: rec_naf(&z, 2)?,
            ate_naf: rec_naf(&ate, 2)?,
            ate_neg: ate.is_neg(),
            g1,
            g2,
            tower,
            b3,
            xi_inv: Fp2::xi().inv()?,
        };
        tracing::debug!(loop_len = engine.ate_naf.len(), "pairing ready");
        Ok(engine)
    }

    /// The group G1
    pub fn g1(&self) -> &EpCurve<Fp<P>> {
        &self.g1
    }

    /// The group G2 on the sextic twist
    pub fn g2(&self) -> &Ep2<P> {
        &self.g2
    }

    /// Frobenius tables of the tower up to Fp12
    pub fn tower(&self) -> &Tower<P> {
        &self.tower
    }

    /// BN or B12
    pub fn family(&self) -> Family {
        self.g2.family()
    }

    /// D- or M-type
    pub fn twist(&self) -> Twist {
        self.g2.twist()
    }

    /// The seed z
    pub fn seed(&self) -> &Bn {
        self.g2.seed()
    }

    /// Order r of the three groups
    pub fn ord(&self) -> &Bn {
        self.g1.ord()
    }

    /// Coefficients c_i of the optimal ate loop, Σ c_i p^i = 0 mod r
    pub fn ate_vector(&self) -> Result<Vec<Bn>> {
        let z = self.seed();
        let c = Bn::from_i64;
        Ok(match self.family() {
            Family::Bn => alloc::vec![z.mul_dig(6)?.add_dig(2)?, c(1), c(-1), c(1)],
            _ => alloc::vec![z.clone(), c(-1)],
        })
    }

    fn affine_pair(&self, p: &G1<P>, q: &G2<P>) -> Option<(G1<P>, G2<P>)> {
        if p.is_infty() || q.is_infty() {
            return None;
        }
        Some((self.g1.norm(p), self.g2.curve().norm(q)))
    }

    // ========================================================================
    // Pairings
    // ========================================================================

    /// Optimal ate pairing
    pub fn map_oatep(&self, p: &G1<P>, q: &G2<P>) -> Result<Gt<P>> {
        self.map_sim_oatep(&[*p], &[*q])
    }

    /// Product of optimal ate pairings sharing one Miller loop
    pub fn map_sim_oatep(&self, ps: &[G1<P>], qs: &[G2<P>]) -> Result<Gt<P>> {
        self.oatep_with(ps, qs, false)
    }

    /// Optimal ate pairing with lazily reduced Fp12 arithmetic in the loop
    pub fn map_lazy(&self, p: &G1<P>, q: &G2<P>) -> Result<Gt<P>> {
        self.oatep_with(&[*p], &[*q], true)
    }

    fn oatep_with(&self, ps: &[G1<P>], qs: &[G2<P>], lazy: bool) -> Result<Gt<P>> {
        validate::length("pp_map_sim", qs.len(), ps.len())?;
        let pairs: Vec<_> = ps.iter().zip(qs).filter_map(|(p, q)| self.affine_pair(p, q)).collect();
        if pairs.is_empty() {
            return Ok(Fp12::one());
        }
        let (g1s, g2s): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        let f = self.miller_oate(&g1s, &g2s, lazy);
        self.final_exp(&f)
    }

    /// Reduced Tate pairing f_{r,P}(Q)^((p^12 - 1) / r)
    pub fn map_tatep(&self, p: &G1<P>, q: &G2<P>) -> Result<Gt<P>> {
        let Some((p, q)) = self.affine_pair(p, q) else {
            return Ok(Fp12::one());
        };
        let f = self.miller_tate(&p, &q)?;
        self.final_exp(&f)
    }

    /// Product of Tate pairings
    pub fn map_sim_tatep(&self, ps: &[G1<P>], qs: &[G2<P>]) -> Result<Gt<P>> {
        validate::length("pp_map_sim", qs.len(), ps.len())?;
        let mut f = Fp12::one();
        for (p, q) in ps.iter().zip(qs) {
            if let Some((p, q)) = self.affine_pair(p, q) {
                f *= self.miller_tate(&p, &q)?;
            }
        }
        self.final_exp(&f)
    }

    /// Weil pairing (-1)^r f_{r,P}(Q) / f_{r,Q}(P), projected by the easy
    /// part of the final exponentiation.
    ///
    /// Against the ate vector c = (z, -1) for B12 and (6z + 2, 1, -1, 1) for
    /// BN, the relation oatep^Y weilp^(c_h h X) = tatep^X of
    /// [`PairingX::map_weilp`](crate::ppx::PairingX::map_weilp) holds with
    /// k = 12 and c_h = [`Pairing::hard_power`].
    pub fn map_weilp(&self, p: &G1<P>, q: &G2<P>) -> Result<Gt<P>> {
        let Some((p, q)) = self.affine_pair(p, q) else {
            return Ok(Fp12::one());
        };
        let w = self.weil_ratio(&p, &q)?;
        self.exp_easy(&w)
    }

    /// Product of Weil pairings
    pub fn map_sim_weilp(&self, ps: &[G1<P>], qs: &[G2<P>]) -> Result<Gt<P>> {
        validate::length("pp_map_sim", qs.len(), ps.len())?;
        let mut f = Fp12::one();
        for (p, q) in ps.iter().zip(qs) {
            if let Some((p, q)) = self.affine_pair(p, q) {
                f *= self.weil_ratio(&p, &q)?;
            }
        }
        self.exp_easy(&f)
    }

    fn weil_ratio(&self, p: &G1<P>, q: &G2<P>) -> Result<Gt<P>> {
        let num = self.miller_tate(p, q)?;
        let den = self.miller_weil(p, q)?;
        let w = num.mul(&den.inv()?);
        Ok(if self.ord().is_even() { w } else { w.neg() })
    }

    /// The configured pairing
    pub fn map(&self, p: &G1<P>, q: &G2<P>) -> Result<Gt<P>> {
        match PP_MAP {
            PpMap::Tatep => self.map_tatep(p, q),
            PpMap::Weilp => self.map_weilp(p, q),
            PpMap::Oatep if PP_EXT == FpxRdc::Lazyr => self.map_lazy(p, q),
            PpMap::Oatep => self.map_oatep(p, q),
        }
    }

    /// Product of configured pairings
    pub fn map_sim(&self, ps: &[G1<P>], qs: &[G2<P>]) -> Result<Gt<P>> {
        match PP_MAP {
            PpMap::Tatep => self.map_sim_tatep(ps, qs),
            PpMap::Weilp => self.map_sim_weilp(ps, qs),
            PpMap::Oatep => self.oatep_with(ps, qs, PP_EXT == FpxRdc::Lazyr),
        }
    }
}

/// Pairing on BN-P254
pub fn bn_p254() -> Result<Pairing<Bn254>> {
    Pairing::new(ep::bn_p254()?, ep2::bn_p254()?)
}

/// Pairing on BLS12-381
pub fn b12_p381() -> Result<Pairing<Bls381>> {
    Pairing::new(ep::b12_p381()?, ep2::b12_p381()?)
}

/// Pairing on BLS12-377
pub fn b12_p377() -> Result<Pairing<Bls377>> {
    Pairing::new(ep::b12_p377()?, ep2::b12_p377()?)
}

#[cfg(test)]
mod tests;
