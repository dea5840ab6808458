//! Cyclotomic subgroups of the pairing target fields
//!
//! For a target field of embedding degree k these are the elements f with
//! f^Φk(p) = 1. [`Cyclotomic`] gathers what the final exponentiations and
//! the GT layer need there: inversion by conjugation, cheap squarings and a
//! compressed encoding.
//!
//! Fp12 squares with Granger-Scott on the full element, and with Karabina on
//! the four coordinates c01, c02, c10 and c12, recovering c00 and c11
//! afterwards. The quadratic targets Fp2, Fp16, Fp18, Fp24 and Fp48 have
//! norm 1 over their halves after the easy part, which gives a squaring in
//! two base squarings and the trace compression a = (1 + c0) / c1.

use alloc::vec::Vec;

use super::{ExtField, Fp12, Fp16, Fp18, Fp2, Fp24, Fp48, Fp6, Fp8, Fp9, Tower};
use crate::bn::{rec_naf, Bn};
use crate::error::{no_valid, validate, Result};
use crate::field::Field;
use crate::fp::{Fp, FpParams};
use relic_api::Serialize;

/// The cyclotomic subgroup of a target field of embedding degree
/// [`Cyclotomic::EMBED`].
pub trait Cyclotomic: Field {
    /// k
    const EMBED: usize;

    /// Length of the compressed encoding
    const PACK_BYTES: usize;

    /// Map into the subgroup by the easy part of the final exponentiation:
    /// f^((p^(k/2) - 1)(p^(k/6) + 1)) when 6 divides k, f^(p^(k/2) - 1)
    /// otherwise.
    fn conv_cyc(&self, tower: &Tower<Self::Prime>) -> Result<Self> {
        let t = self.frb(tower, Self::EMBED / 2).mul(&self.inv()?);
        if Self::EMBED % 6 != 0 {
            return Ok(t);
        }
        Ok(t.frb(tower, Self::EMBED / 6).mul(&t))
    }

    /// Membership: f^(p^(k/3)) f = f^(p^(k/6)) when 6 divides k,
    /// f^(p^(k/2)) f = 1 otherwise
    fn test_cyc(&self, tower: &Tower<Self::Prime>) -> bool {
        if Self::EMBED % 6 != 0 {
            return self.frb(tower, Self::EMBED / 2).mul(self) == Self::one();
        }
        let m = Self::EMBED / 6;
        self.frb(tower, 2 * m).mul(self) == self.frb(tower, m)
    }

    /// Inverse of a cyclotomic element, f^(p^(k/2))
    fn inv_cyc(&self) -> Self;

    /// Square of a cyclotomic element
    fn sqr_cyc(&self) -> Self;

    /// Power of a cyclotomic element by odd-power windows over the NAF
    fn exp_cyc(&self, e: &Bn) -> Result<Self> {
        if e.is_zero() {
            return Ok(Self::one());
        }
        let naf = rec_naf(e, 4)?;
        let f2 = self.sqr_cyc();
        let mut table = [*self; 4];
        for i in 1..4 {
            table[i] = table[i - 1].mul(&f2);
        }
        let mut r = Self::one();
        for &d in naf.iter().rev() {
            r = r.sqr_cyc();
            if d > 0 {
                r = r.mul(&table[(d / 2) as usize]);
            } else if d < 0 {
                r = r.mul(&table[(-d / 2) as usize].inv_cyc());
            }
        }
        Ok(if e.is_neg() { r.inv_cyc() } else { r })
    }

    /// Write the compressed form, `PACK_BYTES` long
    fn write_pck(&self, out: &mut [u8]) -> Result<()>;

    /// Read a compressed form. Fails with `NoValid` when the result leaves
    /// the cyclotomic subgroup.
    fn read_pck(bytes: &[u8], tower: &Tower<Self::Prime>) -> Result<Self>;
}

/// (x + y s)^2 in Fp4 = Fp2[s]/(s^2 - ξ)
#[inline]
fn sqr_fp4<P: FpParams>(x: &Fp2<P>, y: &Fp2<P>) -> (Fp2<P>, Fp2<P>) {
    let t0 = x.sqr();
    let t1 = y.sqr();
    (t0 + t1.mul_nor(), (*x + *y).sqr() - t0 - t1)
}

/// 3a - 2b
#[inline]
fn tri_sub<P: FpParams>(a: &Fp2<P>, b: &Fp2<P>) -> Fp2<P> {
    a.dbl() + *a - b.dbl()
}

/// 3a + 2b
#[inline]
fn tri_add<P: FpParams>(a: &Fp2<P>, b: &Fp2<P>) -> Fp2<P> {
    a.dbl() + *a + b.dbl()
}

impl<P: FpParams> Fp12<P> {
    /// Karabina squaring of the packed coordinates. c00 and c11 of the
    /// result are left zero.
    pub fn sqr_pck(&self) -> Self {
        let (a01, a02) = (self.c0.c1, self.c0.c2);
        let (a10, a12) = (self.c1.c0, self.c1.c2);

        let t0 = a01.sqr();
        let t1 = a12.sqr();
        let t5 = (a01 + a12).sqr() - (t0 + t1);
        let t3 = (a10 + a02).sqr();
        let t2 = a10.sqr();

        let t6 = t5.mul_nor();
        let c10 = (t6 + a10).dbl() + t6;

        let t5 = t0 + t1.mul_nor();
        let c02 = (t5 - a02).dbl() + t5;

        let t1 = a02.sqr();
        let t5 = t2 + t1.mul_nor();
        let c01 = (t5 - a01).dbl() + t5;

        let t5 = t3 - (t2 + t1);
        let c12 = (t5 + a12).dbl() + t5;

        let z = Fp2::zero();
        Fp12::new(Fp6::new(z, c01, c02), Fp6::new(c10, z, c12))
    }

    /// Numerator and denominator of c11 for a packed element
    fn back_frac(&self) -> (Fp2<P>, Fp2<P>) {
        let (g2, g3, g4, g5) = (self.c1.c0, self.c0.c2, self.c0.c1, self.c1.c2);
        if !g2.is_zero() {
            let t = g5.sqr().mul_nor() + g4.sqr().dbl() + g4.sqr() - g3.dbl();
            (t, g2.dbl().dbl())
        } else if !g3.is_zero() {
            ((g4 * g5).dbl(), g3)
        } else {
            (Fp2::zero(), Fp2::one())
        }
    }

    /// Fill c00 once c11 is known
    fn back_fill(&mut self, g1: Fp2<P>) {
        let (g2, g3, g4, g5) = (self.c1.c0, self.c0.c2, self.c0.c1, self.c1.c2);
        let t = g1.sqr().dbl() + g2 * g5 - (g3 * g4).dbl() - g3 * g4;
        self.c0.c0 = t.mul_nor() + Fp2::one();
        self.c1.c1 = g1;
    }

    /// Recover c00 and c11 of a packed element
    pub fn back_cyc(&self) -> Result<Self> {
        let (n, d) = self.back_frac();
        let mut r = *self;
        r.back_fill(n * d.inv()?);
        Ok(r)
    }

    /// Decompress many elements with one inversion
    pub fn back_cyc_sim(a: &mut [Self]) -> Result<()> {
        let (nums, dens): (Vec<_>, Vec<_>) = a.iter().map(Fp12::back_frac).unzip();
        let inv = Fp2::inv_sim(&dens)?;
        for ((x, n), d) in a.iter_mut().zip(&nums).zip(&inv) {
            x.back_fill(*n * *d);
        }
        Ok(())
    }

    /// Power by a sparse signed exponent, given as digits in {-1, 0, 1}
    /// least significant first. Squarings run compressed and the partial
    /// powers are decompressed together.
    pub fn exp_cyc_sps(&self, digits: &[i8], neg: bool) -> Result<Self> {
        validate::parameter(digits.iter().all(|d| (-1..=1).contains(d)), "fp12_exp_cyc_sps")?;
        let top = match digits.iter().rposition(|&d| d != 0) {
            Some(i) => i,
            None => return Ok(Fp12::one()),
        };

        let mut packed = Vec::new();
        let mut signs = Vec::new();
        let mut r = Fp12::one();
        if digits[0] != 0 {
            r = if digits[0] > 0 { *self } else { self.inv_cyc() };
        }
        let mut t = *self;
        for &d in &digits[1..=top] {
            t = t.sqr_pck();
            if d != 0 {
                packed.push(t);
                signs.push(d);
            }
        }
        Fp12::back_cyc_sim(&mut packed)?;
        for (u, d) in packed.iter().zip(&signs) {
            r *= if *d > 0 { *u } else { u.inv_cyc() };
        }
        Ok(if neg { r.inv_cyc() } else { r })
    }

    /// Compress to c01, c02, c10 and c12
    pub fn pck(&self) -> Self {
        let mut r = *self;
        r.c0.c0 = Fp2::zero();
        r.c1.c1 = Fp2::zero();
        r
    }

    /// Decompress, failing with `NoValid` when the result leaves the
    /// cyclotomic subgroup.
    pub fn upk(&self, tower: &Tower<P>) -> Result<Self> {
        let r = self.back_cyc()?;
        validate::parameter(r.test_cyc(tower), "fp12_upk")?;
        Ok(r)
    }
}

impl<P: FpParams> Cyclotomic for Fp12<P> {
    const EMBED: usize = 12;
    const PACK_BYTES: usize = 4 * <Fp2<P> as Field>::BYTES;

    fn conv_cyc(&self, tower: &Tower<P>) -> Result<Self> {
        let t = self.conj() * self.inv()?;
        Ok(t.frb(tower, 2) * t)
    }

    fn inv_cyc(&self) -> Self {
        self.conj()
    }

    /// Granger-Scott squaring
    fn sqr_cyc(&self) -> Self {
        let (g0, g2, g4) = (self.c0.c0, self.c0.c1, self.c0.c2);
        let (g1, g3, g5) = (self.c1.c0, self.c1.c1, self.c1.c2);

        let a0 = sqr_fp4(&g0, &g3);
        let a1 = sqr_fp4(&g1, &g4);
        let a2 = sqr_fp4(&g2, &g5);

        let n00 = tri_sub(&a0.0, &g0);
        let n01 = tri_add(&a0.1, &g3);
        let n10 = tri_add(&a2.1.mul_nor(), &g1);
        let n11 = tri_sub(&a2.0, &g4);
        let n20 = tri_sub(&a1.0, &g2);
        let n21 = tri_add(&a1.1, &g5);

        Fp12::new(Fp6::new(n00, n20, n11), Fp6::new(n10, n01, n21))
    }

    /// c01, c02, c10 and c12
    fn write_pck(&self, out: &mut [u8]) -> Result<()> {
        validate::length("fp12_write_pck", out.len(), Self::PACK_BYTES)?;
        let n = <Fp2<P> as Field>::BYTES;
        let c = self.pck();
        for (chunk, x) in out.chunks_mut(n).zip([c.c0.c1, c.c0.c2, c.c1.c0, c.c1.c2]) {
            x.write_bin(chunk, false)?;
        }
        Ok(())
    }

    fn read_pck(bytes: &[u8], tower: &Tower<P>) -> Result<Self> {
        validate::length("fp12_read_pck", bytes.len(), Self::PACK_BYTES)?;
        let n = <Fp2<P> as Field>::BYTES;
        let mut c = [Fp2::zero(); 4];
        for (x, chunk) in c.iter_mut().zip(bytes.chunks(n)) {
            *x = Fp2::read_bin(chunk)?;
        }
        let mut a = Fp12::zero();
        (a.c0.c1, a.c0.c2, a.c1.c0, a.c1.c2) = (c[0], c[1], c[2], c[3]);
        a.upk(tower)
    }
}

/// Quadratic targets B[w]/(w^2 - θ), where `$theta` multiplies by θ in B.
/// Unity compresses to zero.
macro_rules! quad_cyc {
    ($name:ident, $base:ident, $k:expr, $theta:expr) => {
        impl<P: FpParams> Cyclotomic for $name<P> {
            const EMBED: usize = $k;
            const PACK_BYTES: usize = <$base<P> as Field>::BYTES;

            fn conv_cyc(&self, tower: &Tower<P>) -> Result<Self> {
                let t = self.conj().mul(&self.inv()?);
                if Self::EMBED % 6 != 0 {
                    return Ok(t);
                }
                Ok(t.frb(tower, Self::EMBED / 6).mul(&t))
            }

            fn test_cyc(&self, tower: &Tower<P>) -> bool {
                if Self::EMBED % 6 != 0 {
                    return self.conj().mul(self) == Self::one();
                }
                let m = Self::EMBED / 6;
                self.frb(tower, 2 * m).mul(self) == self.frb(tower, m)
            }

            fn inv_cyc(&self) -> Self {
                self.conj()
            }

            /// With c0^2 - θ c1^2 = 1: (1 + 2θ c1^2, (c0 + c1)^2 - 1 - (1 + θ) c1^2)
            fn sqr_cyc(&self) -> Self {
                let theta = $theta;
                let s1 = self.c1.sqr();
                let ts = theta(&s1);
                let one = <$base<P> as Field>::one();
                let c0 = one.add(&ts.dbl());
                let c1 = self.c0.add(&self.c1).sqr().sub(&one).sub(&s1).sub(&ts);
                $name::new(c0, c1)
            }

            fn write_pck(&self, out: &mut [u8]) -> Result<()> {
                validate::length(concat!(stringify!($name), "_write_pck"), out.len(), Self::PACK_BYTES)?;
                if self.c1.is_zero() {
                    if self.c0 != <$base<P> as Field>::one() {
                        return Err(no_valid(concat!(stringify!($name), "_write_pck")));
                    }
                    return <$base<P> as Field>::zero().write_bin(out, false);
                }
                let tau = self.c0.add(&<$base<P> as Field>::one()).mul(&self.c1.inv()?);
                tau.write_bin(out, false)
            }

            /// c0 = (a^2 + θ) / (a^2 - θ) and c1 = 2a / (a^2 - θ)
            fn read_pck(bytes: &[u8], tower: &Tower<P>) -> Result<Self> {
                let tau = <$base<P> as Serialize>::read_bin(bytes)?;
                if tau.is_zero() {
                    return Ok(Self::one());
                }
                let theta = $theta;
                let one = <$base<P> as Field>::one();
                let t2 = tau.sqr();
                let d = t2.sub(&theta(&one)).inv()?;
                let r = $name::new(t2.add(&theta(&one)).mul(&d), tau.dbl().mul(&d));
                validate::parameter(r.test_cyc(tower), concat!(stringify!($name), "_read_pck"))?;
                Ok(r)
            }
        }
    };
}

quad_cyc!(Fp2, Fp, 2, |x: &Fp<P>| x.mul_dis(P::QNR));
quad_cyc!(Fp16, Fp8, 16, <Fp8<P> as ExtField>::mul_gen);
quad_cyc!(Fp18, Fp9, 18, <Fp9<P> as ExtField>::mul_gen);
quad_cyc!(Fp24, Fp12, 24, <Fp12<P> as ExtField>::mul_gen);
quad_cyc!(Fp48, Fp24, 48, <Fp24<P> as ExtField>::mul_gen);
