//! The seams between [`Pc`](super::Pc) and the pairing engines

use rand::{CryptoRng, RngCore};

use crate::bn::Bn;
use crate::ep::{EpCurve, EpPoint};
use crate::ep2::{Ep2, Family};
use crate::epx::EpX;
use crate::error::Result;
use crate::field::Field;
use crate::fp::{Fp, FpParams};
use crate::fpx::{Cyclotomic, Fp2, Subfield, Tower};
use crate::pp::Pairing;
use crate::ppx::PairingX;

/// G2 of a pairing: a prime-order subgroup of a twist
pub trait TwistGroup {
    /// Field the twist is defined over
    type Field: Field;

    /// The twist as a plain curve
    fn curve(&self) -> &EpCurve<Self::Field>;
    /// Generator
    fn gen(&self) -> EpPoint<Self::Field>;
    /// Order r
    fn ord(&self) -> &Bn;
    /// [k]Q
    fn mul(&self, q: &EpPoint<Self::Field>, k: &Bn) -> Result<EpPoint<Self::Field>>;
    /// [k]G
    fn mul_gen(&self, k: &Bn) -> Result<EpPoint<Self::Field>>;
    /// [k]P + [l]Q
    fn mul_sim(
        &self,
        p: &EpPoint<Self::Field>,
        k: &Bn,
        q: &EpPoint<Self::Field>,
        l: &Bn,
    ) -> Result<EpPoint<Self::Field>>;
    /// Whether Q is a non-trivial element of the group
    fn is_valid(&self, q: &EpPoint<Self::Field>) -> bool;
    /// Hash to the group
    fn map(&self, msg: &[u8]) -> Result<EpPoint<Self::Field>>;
    /// Uniform element
    fn rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<EpPoint<Self::Field>>;
    /// Decode a point
    fn read_bin(&self, bytes: &[u8]) -> Result<EpPoint<Self::Field>>;
    /// Encode a point
    fn write_bin(&self, q: &EpPoint<Self::Field>, out: &mut [u8], pack: bool) -> Result<()>;
    /// Encoding length
    fn size_bin(&self, q: &EpPoint<Self::Field>, pack: bool) -> usize;
}

macro_rules! twist_group {
    (impl<$g:ident: $bound:path> for $ty:ty, $f:ty) => {
        impl<$g: $bound> TwistGroup for $ty {
            type Field = $f;

            fn curve(&self) -> &EpCurve<$f> {
                <$ty>::curve(self)
            }

            fn gen(&self) -> EpPoint<$f> {
                <$ty>::gen(self)
            }

            fn ord(&self) -> &Bn {
                <$ty>::ord(self)
            }

            fn mul(&self, q: &EpPoint<$f>, k: &Bn) -> Result<EpPoint<$f>> {
                <$ty>::mul(self, q, k)
            }

            fn mul_gen(&self, k: &Bn) -> Result<EpPoint<$f>> {
                <$ty>::mul_gen(self, k)
            }

            fn mul_sim(&self, p: &EpPoint<$f>, k: &Bn, q: &EpPoint<$f>, l: &Bn) -> Result<EpPoint<$f>> {
                <$ty>::mul_sim(self, p, k, q, l)
            }

            fn is_valid(&self, q: &EpPoint<$f>) -> bool {
                <$ty>::is_valid(self, q)
            }

            fn map(&self, msg: &[u8]) -> Result<EpPoint<$f>> {
                <$ty>::map(self, msg)
            }

            fn rand<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<EpPoint<$f>> {
                <$ty>::rand(self, rng)
            }

            fn read_bin(&self, bytes: &[u8]) -> Result<EpPoint<$f>> {
                <$ty>::read_bin(self, bytes)
            }

            fn write_bin(&self, q: &EpPoint<$f>, out: &mut [u8], pack: bool) -> Result<()> {
                <$ty>::write_bin(self, q, out, pack)
            }

            fn size_bin(&self, q: &EpPoint<$f>, pack: bool) -> usize {
                <$ty>::size_bin(self, q, pack)
            }
        }
    };
}

twist_group!(impl<P: FpParams> for Ep2<P>, Fp2<P>);
twist_group!(impl<T: Field> for EpX<T>, T);

/// Point of G2 of an engine
pub type G2Point<E> = EpPoint<<<E as Engine>::G2 as TwistGroup>::Field>;

/// A pairing engine: two source groups, a target and the maps between them
pub trait Engine {
    /// Base prime
    type Prime: FpParams;
    /// Second source group
    type G2: TwistGroup;
    /// Target field, GT being its order-r cyclotomic elements
    type Gt: Cyclotomic<Prime = Self::Prime>;

    /// The group G1
    fn g1(&self) -> &EpCurve<Fp<Self::Prime>>;
    /// The group G2
    fn g2(&self) -> &Self::G2;
    /// Frobenius tables of the prime
    fn tower(&self) -> &Tower<Self::Prime>;
    /// Pairing family
    fn family(&self) -> Family;
    /// The configured pairing
    fn map(
        &self,
        p: &EpPoint<Fp<Self::Prime>>,
        q: &EpPoint<<Self::G2 as TwistGroup>::Field>,
    ) -> Result<Self::Gt>;
    /// Product of configured pairings
    fn map_sim(
        &self,
        ps: &[EpPoint<Fp<Self::Prime>>],
        qs: &[EpPoint<<Self::G2 as TwistGroup>::Field>],
    ) -> Result<Self::Gt>;
    /// Easy part of the final exponentiation
    fn exp_easy(&self, f: &Self::Gt) -> Result<Self::Gt>;
    /// Full final exponentiation
    fn final_exp(&self, f: &Self::Gt) -> Result<Self::Gt>;

    /// e with a^p = a^e on GT
    fn frb_exp(&self) -> Result<Bn> {
        Fp::<Self::Prime>::modulus().modp(self.g1().ord())
    }
}

impl<P: FpParams> Engine for Pairing<P> {
    type Prime = P;
    type G2 = Ep2<P>;
    type Gt = crate::fpx::Fp12<P>;

    fn g1(&self) -> &EpCurve<Fp<P>> {
        Pairing::g1(self)
    }

    fn g2(&self) -> &Ep2<P> {
        Pairing::g2(self)
    }

    fn tower(&self) -> &Tower<P> {
        Pairing::tower(self)
    }

    fn family(&self) -> Family {
        Pairing::family(self)
    }

    fn map(&self, p: &EpPoint<Fp<P>>, q: &EpPoint<Fp2<P>>) -> Result<Self::Gt> {
        Pairing::map(self, p, q)
    }

    fn map_sim(&self, ps: &[EpPoint<Fp<P>>], qs: &[EpPoint<Fp2<P>>]) -> Result<Self::Gt> {
        Pairing::map_sim(self, ps, qs)
    }

    fn exp_easy(&self, f: &Self::Gt) -> Result<Self::Gt> {
        Pairing::exp_easy(self, f)
    }

    fn final_exp(&self, f: &Self::Gt) -> Result<Self::Gt> {
        Pairing::final_exp(self, f)
    }

    /// p = t - 1 mod r, with t - 1 = z for B12 and 6z^2 for BN
    fn frb_exp(&self) -> Result<Bn> {
        let z = self.seed();
        match Pairing::family(self) {
            Family::Bn => z.sqr()?.mul_dig(6),
            _ => Ok(z.clone()),
        }
    }
}

impl<T, K> Engine for PairingX<T, K>
where
    T: Subfield<K>,
    K: Cyclotomic,
{
    type Prime = K::Prime;
    type G2 = EpX<T>;
    type Gt = K;

    fn g1(&self) -> &EpCurve<Fp<K::Prime>> {
        PairingX::g1(self)
    }

    fn g2(&self) -> &EpX<T> {
        PairingX::g2(self)
    }

    fn tower(&self) -> &Tower<K::Prime> {
        PairingX::tower(self)
    }

    fn family(&self) -> Family {
        PairingX::family(self)
    }

    fn map(&self, p: &EpPoint<Fp<K::Prime>>, q: &EpPoint<T>) -> Result<K> {
        PairingX::map(self, p, q)
    }

    fn map_sim(&self, ps: &[EpPoint<Fp<K::Prime>>], qs: &[EpPoint<T>]) -> Result<K> {
        PairingX::map_sim(self, ps, qs)
    }

    fn exp_easy(&self, f: &K) -> Result<K> {
        PairingX::exp_easy(self, f)
    }

    fn final_exp(&self, f: &K) -> Result<K> {
        PairingX::final_exp(self, f)
    }
}
