//! Pairing-based cryptography context
//!
//! [`Pc`] gives the three groups of a pairing-friendly curve uniform
//! names: `g1_*`, `g2_*` and `gt_*`, plus the pairing itself. G1 and G2 are
//! written additively, GT multiplicatively. Every GT element handled here
//! is expected to lie in the order-r subgroup of the cyclotomic subgroup.
//!
//! The context is generic over an [`Engine`]: the k = 12 [`Pairing`] or
//! one of the twisted [`PairingX`] engines. Each named curve has its own
//! constructor.

use rand::{CryptoRng, RngCore};
use relic_api::Serialize;

use crate::bn::Bn;
use crate::ep::EpPoint;
use crate::error::{no_valid, Result};
use crate::field::Field;
use crate::fp::{Bls315, Bls377, Bls378, Bls381, Bn254, Fp, Kss361, Kss372, Ss383};
use crate::fpx::{Cyclotomic, Fp16, Fp18, Fp2, Fp24, Fp3, Fp4, Fp48, Fp8};
use crate::pp::{self, Pairing};
use crate::ppx::{self, PairingX};

mod engine;

pub use crate::ep2::{Family, Twist};
pub use engine::{Engine, G2Point, TwistGroup};

/// Point of G1 of an engine
pub type G1Point<E> = EpPoint<Fp<<E as Engine>::Prime>>;

/// Element of GT of an engine
pub type GtElem<E> = <E as Engine>::Gt;

/// Pairing context for one curve
#[derive(Debug, Clone)]
pub struct Pc<E: Engine> {
    pp: E,
    /// e(G1, G2)
    gt_gen: E::Gt,
    /// Exponent e with f^p = f^e on GT
    frb_exp: Bn,
}

impl Pc<Pairing<Bn254>> {
    /// BN curve over the 254-bit Nogami prime
    #[tracing::instrument(level = "debug")]
    pub fn bn_p254() -> Result<Self> {
        Pc::new(pp::bn_p254()?)
    }
}

impl Pc<Pairing<Bls381>> {
    /// BLS12-381
    #[tracing::instrument(level = "debug")]
    pub fn b12_p381() -> Result<Self> {
        Pc::new(pp::b12_p381()?)
    }
}

impl Pc<Pairing<Bls377>> {
    /// BLS12-377
    #[tracing::instrument(level = "debug")]
    pub fn b12_p377() -> Result<Self> {
        Pc::new(pp::b12_p377()?)
    }
}

impl Pc<PairingX<Fp4<Bls315>, Fp24<Bls315>>> {
    /// BLS24-P315
    #[tracing::instrument(level = "debug")]
    pub fn b24_p315() -> Result<Self> {
        Pc::new(ppx::b24_p315()?)
    }
}

impl Pc<PairingX<Fp8<Bls378>, Fp48<Bls378>>> {
    /// BLS48-P378
    #[tracing::instrument(level = "debug")]
    pub fn b48_p378() -> Result<Self> {
        Pc::new(ppx::b48_p378()?)
    }
}

impl Pc<PairingX<Fp4<Kss361>, Fp16<Kss361>>> {
    /// KSS16-P361
    #[tracing::instrument(level = "debug")]
    pub fn k16_p361() -> Result<Self> {
        Pc::new(ppx::k16_p361()?)
    }
}

impl Pc<PairingX<Fp3<Kss372>, Fp18<Kss372>>> {
    /// KSS18-P372
    #[tracing::instrument(level = "debug")]
    pub fn k18_p372() -> Result<Self> {
        Pc::new(ppx::k18_p372()?)
    }
}

impl Pc<PairingX<Fp<Ss383>, Fp2<Ss383>>> {
    /// Supersingular curve SS-P383 with k = 2
    #[tracing::instrument(level = "debug")]
    pub fn ss_p383() -> Result<Self> {
        Pc::new(ppx::ss_p383()?)
    }
}

impl<E: Engine> Pc<E> {
    /// Context over a pairing engine
    pub fn new(pp: E) -> Result<Self> {
        let gt_gen = pp.map(&pp.g1().gen(), &pp.g2().gen())?;
        let frb_exp = pp.frb_exp()?;
        tracing::debug!(family = ?pp.family(), k = E::Gt::EMBED, "pairing context ready");
        Ok(Pc { pp, gt_gen, frb_exp })
    }

    /// The underlying pairing engine
    pub fn pairing(&self) -> &E {
        &self.pp
    }

    /// Pairing family of the curve
    pub fn family(&self) -> Family {
        self.pp.family()
    }

    /// Security level in bits
    pub fn param_level(&self) -> usize {
        match self.pp.family() {
            Family::Bn => 100,
            Family::B12 => 128,
            _ => self.g1_get_ord().bits() / 2,
        }
    }

    /// Embedding degree
    pub fn param_embed(&self) -> usize {
        E::Gt::EMBED
    }

    // ========================================================================
    // G1
    // ========================================================================

    /// P + Q
    pub fn g1_add(&self, p: &G1Point<E>, q: &G1Point<E>) -> G1Point<E> {
        self.pp.g1().add(p, q)
    }

    /// 2P
    pub fn g1_dbl(&self, p: &G1Point<E>) -> G1Point<E> {
        self.pp.g1().dbl(p)
    }

    /// -P
    pub fn g1_neg(&self, p: &G1Point<E>) -> G1Point<E> {
        self.pp.g1().neg(p)
    }

    /// P - Q
    pub fn g1_sub(&self, p: &G1Point<E>, q: &G1Point<E>) -> G1Point<E> {
        self.pp.g1().sub(p, q)
    }

    /// Whether P and Q are the same point
    pub fn g1_eq(&self, p: &G1Point<E>, q: &G1Point<E>) -> bool {
        self.pp.g1().eq(p, q)
    }

    /// P in affine coordinates
    pub fn g1_norm(&self, p: &G1Point<E>) -> G1Point<E> {
        self.pp.g1().norm(p)
    }

    /// [k]P
    pub fn g1_mul(&self, p: &G1Point<E>, k: &Bn) -> Result<G1Point<E>> {
        self.pp.g1().mul(p, k)
    }

    /// [k]G
    pub fn g1_mul_gen(&self, k: &Bn) -> Result<G1Point<E>> {
        self.pp.g1().mul_gen(k)
    }

    /// [k]P + [l]Q
    pub fn g1_mul_sim(&self, p: &G1Point<E>, k: &Bn, q: &G1Point<E>, l: &Bn) -> Result<G1Point<E>> {
        self.pp.g1().mul_sim(p, k, q, l)
    }

    /// Whether P is a non-trivial element of G1
    pub fn g1_is_valid(&self, p: &G1Point<E>) -> bool {
        self.pp.g1().is_valid(p)
    }

    /// Hash to G1
    pub fn g1_map(&self, msg: &[u8]) -> Result<G1Point<E>> {
        self.pp.g1().map(msg)
    }

    /// Uniform element of G1
    pub fn g1_rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<G1Point<E>> {
        self.pp.g1().rand(rng)
    }

    /// Encoding length of P
    pub fn g1_size_bin(&self, p: &G1Point<E>, pack: bool) -> usize {
        self.pp.g1().size_bin(p, pack)
    }

    /// Encode P
    pub fn g1_write_bin(&self, p: &G1Point<E>, out: &mut [u8], pack: bool) -> Result<()> {
        self.pp.g1().write_bin(p, out, pack)
    }

    /// Decode and check membership in G1
    pub fn g1_read_bin(&self, bytes: &[u8]) -> Result<G1Point<E>> {
        let p = self.pp.g1().read_bin(bytes)?;
        if !p.is_infty() && !self.g1_is_valid(&p) {
            tracing::trace!("g1 point outside the subgroup");
            return Err(no_valid("g1_read_bin"));
        }
        Ok(p)
    }

    /// Generator of G1
    pub fn g1_get_gen(&self) -> G1Point<E> {
        self.pp.g1().gen()
    }

    /// Order r of G1
    pub fn g1_get_ord(&self) -> &Bn {
        self.pp.g1().ord()
    }

    // ========================================================================
    // G2
    // ========================================================================

    /// P + Q
    pub fn g2_add(&self, p: &G2Point<E>, q: &G2Point<E>) -> G2Point<E> {
        self.pp.g2().curve().add(p, q)
    }

    /// 2P
    pub fn g2_dbl(&self, p: &G2Point<E>) -> G2Point<E> {
        self.pp.g2().curve().dbl(p)
    }

    /// -P
    pub fn g2_neg(&self, p: &G2Point<E>) -> G2Point<E> {
        self.pp.g2().curve().neg(p)
    }

    /// P - Q
    pub fn g2_sub(&self, p: &G2Point<E>, q: &G2Point<E>) -> G2Point<E> {
        self.pp.g2().curve().sub(p, q)
    }

    /// Whether P and Q are the same point
    pub fn g2_eq(&self, p: &G2Point<E>, q: &G2Point<E>) -> bool {
        self.pp.g2().curve().eq(p, q)
    }

    /// P in affine coordinates
    pub fn g2_norm(&self, p: &G2Point<E>) -> G2Point<E> {
        self.pp.g2().curve().norm(p)
    }

    /// [k]P
    pub fn g2_mul(&self, p: &G2Point<E>, k: &Bn) -> Result<G2Point<E>> {
        self.pp.g2().mul(p, k)
    }

    /// [k]G
    pub fn g2_mul_gen(&self, k: &Bn) -> Result<G2Point<E>> {
        self.pp.g2().mul_gen(k)
    }

    /// [k]P + [l]Q
    pub fn g2_mul_sim(&self, p: &G2Point<E>, k: &Bn, q: &G2Point<E>, l: &Bn) -> Result<G2Point<E>> {
        self.pp.g2().mul_sim(p, k, q, l)
    }

    /// Whether Q is a non-trivial element of G2
    pub fn g2_is_valid(&self, q: &G2Point<E>) -> bool {
        self.pp.g2().is_valid(q)
    }

    /// Hash to G2
    pub fn g2_map(&self, msg: &[u8]) -> Result<G2Point<E>> {
        self.pp.g2().map(msg)
    }

    /// Uniform element of G2
    pub fn g2_rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<G2Point<E>> {
        self.pp.g2().rand(rng)
    }

    /// Encoding length of Q
    pub fn g2_size_bin(&self, q: &G2Point<E>, pack: bool) -> usize {
        self.pp.g2().size_bin(q, pack)
    }

    /// Encode Q
    pub fn g2_write_bin(&self, q: &G2Point<E>, out: &mut [u8], pack: bool) -> Result<()> {
        self.pp.g2().write_bin(q, out, pack)
    }

    /// Decode and check membership in G2
    pub fn g2_read_bin(&self, bytes: &[u8]) -> Result<G2Point<E>> {
        let q = self.pp.g2().read_bin(bytes)?;
        if !q.is_infty() && !self.g2_is_valid(&q) {
            tracing::trace!("g2 point outside the subgroup");
            return Err(no_valid("g2_read_bin"));
        }
        Ok(q)
    }

    /// Generator of G2
    pub fn g2_get_gen(&self) -> G2Point<E> {
        self.pp.g2().gen()
    }

    /// Order r of G2
    pub fn g2_get_ord(&self) -> &Bn {
        self.pp.g2().ord()
    }

    // ========================================================================
    // GT
    // ========================================================================

    /// a b
    pub fn gt_mul(&self, a: &E::Gt, b: &E::Gt) -> E::Gt {
        a.mul(b)
    }

    /// a^2
    pub fn gt_sqr(&self, a: &E::Gt) -> E::Gt {
        a.sqr_cyc()
    }

    /// a^-1, by conjugation
    pub fn gt_inv(&self, a: &E::Gt) -> E::Gt {
        a.inv_cyc()
    }

    /// a^k
    pub fn gt_exp(&self, a: &E::Gt, k: &Bn) -> Result<E::Gt> {
        a.exp_cyc(&k.modp(self.g1_get_ord())?)
    }

    /// a^k b^l
    pub fn gt_exp_sim(&self, a: &E::Gt, k: &Bn, b: &E::Gt, l: &Bn) -> Result<E::Gt> {
        Ok(self.gt_exp(a, k)?.mul(&self.gt_exp(b, l)?))
    }

    /// Whether a is the identity of GT
    pub fn gt_is_unity(&self, a: &E::Gt) -> bool {
        *a == E::Gt::one()
    }

    /// Whether a is a non-trivial element of GT: cyclotomic with
    /// a^p = a^(p mod r)
    pub fn gt_is_valid(&self, a: &E::Gt) -> bool {
        if self.gt_is_unity(a) || !a.test_cyc(self.pp.tower()) {
            return false;
        }
        match a.exp_cyc(&self.frb_exp) {
            Ok(e) => a.frb(self.pp.tower(), 1) == e,
            Err(_) => false,
        }
    }

    /// e(G1, G2)
    pub fn gt_get_gen(&self) -> E::Gt {
        self.gt_gen
    }

    /// Order r of GT
    pub fn gt_get_ord(&self) -> &Bn {
        self.g1_get_ord()
    }

    /// Uniform element of GT
    pub fn gt_rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<E::Gt> {
        self.pp.final_exp(&E::Gt::rand(rng))
    }

    /// All the target field coordinates, or the compressed form when packed
    pub fn gt_size_bin(&self, a: &E::Gt, pack: bool) -> usize {
        if pack {
            E::Gt::PACK_BYTES
        } else {
            a.size_bin(false)
        }
    }

    /// Encode, compressing when packed
    pub fn gt_write_bin(&self, a: &E::Gt, out: &mut [u8], pack: bool) -> Result<()> {
        if pack {
            a.write_pck(out)
        } else {
            a.write_bin(out, false)
        }
    }

    /// Decode, unpacking compressed encodings, and check membership in GT
    pub fn gt_read_bin(&self, bytes: &[u8]) -> Result<E::Gt> {
        let a = if bytes.len() == E::Gt::PACK_BYTES {
            E::Gt::read_pck(bytes, self.pp.tower())?
        } else {
            <E::Gt as Serialize>::read_bin(bytes)?
        };
        if !self.gt_is_unity(&a) && !self.gt_is_valid(&a) {
            tracing::trace!("gt element outside the subgroup");
            return Err(no_valid("gt_read_bin"));
        }
        Ok(a)
    }

    // ========================================================================
    // Pairing
    // ========================================================================

    /// e(P, Q)
    pub fn map(&self, p: &G1Point<E>, q: &G2Point<E>) -> Result<E::Gt> {
        self.pp.map(p, q)
    }

    /// Product of e(P_i, Q_i)
    pub fn map_sim(&self, ps: &[G1Point<E>], qs: &[G2Point<E>]) -> Result<E::Gt> {
        self.pp.map_sim(ps, qs)
    }
}
