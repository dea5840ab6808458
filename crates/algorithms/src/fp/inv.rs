//! Inversion in the prime field
//!
//! Every variant returns a^-1 for a != 0 and fails with `NoValid` on zero.

use alloc::vec::Vec;
use core::cmp::Ordering;

use subtle::{Choice, ConditionallySelectable};

use super::{Fp, FpParams};
use crate::bn::{low, Bn, Dig, Dis};
use crate::config::{FpInv, FP_DIGS, FP_INV};
use crate::error::{no_valid, Result};

/// Signed working width of the divstep variants
const W: usize = FP_DIGS + 1;

type Signed = [Dig; W];

fn signed_from(limbs: &[Dig; FP_DIGS]) -> Signed {
    let mut r = [0; W];
    r[..FP_DIGS].copy_from_slice(limbs);
    r
}

fn select_signed(a: &Signed, b: &Signed, choice: Choice) -> Signed {
    let mut r = [0; W];
    for i in 0..W {
        r[i] = Dig::conditional_select(&a[i], &b[i], choice);
    }
    r
}

/// |x| == 1 test and sign for the terminal value of a divstep run
fn unit_sign(f: &Signed) -> Choice {
    Choice::from((f[W - 1] >> 63) as u8)
}

impl<P: FpParams> Fp<P> {
    /// Inverse with the configured method
    pub fn inv(&self) -> Result<Self> {
        match FP_INV {
            FpInv::Basic => self.inv_basic(),
            FpInv::Binar => self.inv_binar(),
            FpInv::Monty => self.inv_monty(),
            FpInv::Exgcd => self.inv_exgcd(),
            FpInv::Divst => self.inv_divst(),
            FpInv::Jmpds => self.inv_jmpds(),
        }
    }

    fn check_nonzero(&self, context: &'static str) -> Result<()> {
        if bool::from(self.ct_is_zero()) {
            return Err(no_valid(context));
        }
        Ok(())
    }

    /// Fermat: a^(p-2)
    pub fn inv_basic(&self) -> Result<Self> {
        self.check_nonzero("fp_inv_basic")?;
        Ok(self.pow_limbs(&P::P_MINUS_2))
    }

    /// Binary extended Euclid. Variable time.
    pub fn inv_binar(&self) -> Result<Self> {
        self.check_nonzero("fp_inv_binar")?;
        let mut u = self.to_bn();
        let mut v = Fp::<P>::modulus();
        let mut x1 = Fp::<P>::one();
        let mut x2 = Fp::<P>::zero();
        while !u.is_one() && !v.is_one() {
            while u.is_even() {
                u = u.hlv();
                x1 = x1.hlv();
            }
            while v.is_even() {
                v = v.hlv();
                x2 = x2.hlv();
            }
            if u.cmp(&v) != Ordering::Less {
                u = u.sub(&v)?;
                x1 = x1.sub(&x2);
            } else {
                v = v.sub(&u)?;
                x2 = x2.sub(&x1);
            }
        }
        Ok(if u.is_one() { x1 } else { x2 })
    }

    /// Kaliski almost inverse with a Montgomery correction. Variable time.
    pub fn inv_monty(&self) -> Result<Self> {
        self.check_nonzero("fp_inv_monty")?;
        let p = Fp::<P>::modulus();
        // the Montgomery limbs x = aR are inverted as an integer
        let mut u = p.clone();
        let mut v = Bn::from_limbs(&self.0);
        let mut r = Bn::zero();
        let mut s = Bn::one();
        let mut k = 0usize;
        while !v.is_zero() {
            if u.is_even() {
                u = u.hlv();
                s = s.dbl()?;
            } else if v.is_even() {
                v = v.hlv();
                r = r.dbl()?;
            } else if u.cmp(&v) == Ordering::Greater {
                u = u.sub(&v)?.hlv();
                r = r.add(&s)?;
                s = s.dbl()?;
            } else {
                v = v.sub(&u)?.hlv();
                s = s.add(&r)?;
                r = r.dbl()?;
            }
            k += 1;
        }
        if r.cmp(&p) != Ordering::Less {
            r = r.sub(&p)?;
        }
        // x^-1 2^k, lifted to a^-1 R = x^-1 R^2
        let almost = p.sub(&r)?;
        let t = almost.lsh(2 * 64 * FP_DIGS - k)?.modp(&p)?;
        let mut limbs = [0; FP_DIGS];
        limbs[..t.len()].copy_from_slice(t.digits());
        Ok(Fp::from_mont(limbs))
    }

    /// Extended Euclid on multi-precision integers. Variable time.
    pub fn inv_exgcd(&self) -> Result<Self> {
        self.check_nonzero("fp_inv_exgcd")?;
        let p = Fp::<P>::modulus();
        let (_, u, _) = self.to_bn().gcd_ext(&p)?;
        Fp::from_bn(&u)
    }

    /// Bernstein-Yang divsteps with a fixed iteration count.
    pub fn inv_divst(&self) -> Result<Self> {
        self.check_nonzero("fp_inv_divst")?;
        let mut delta: Dis = 1;
        let mut f = signed_from(&P::MODULUS);
        let mut g = signed_from(&self.to_limbs());
        let mut d = Fp::<P>::zero();
        let mut e = Fp::<P>::one();

        for _ in 0..P::DIVST_STEPS {
            let g0 = Choice::from((g[0] & 1) as u8);
            let pos = Choice::from((delta.wrapping_neg() >> 63) as u8 & 1);
            let swap = pos & g0;

            let mut fneg = f;
            low::negs_cond(&mut fneg, swap);
            let zero = [0; W];
            let addend = select_signed(&zero, &fneg, g0);
            let new_f = select_signed(&f, &g, swap);
            let mut sum = [0; W];
            low::addn(&mut sum, &g, &addend);
            low::rshs(&mut g, &sum, 1);
            f = new_f;

            let signed_d = Fp::conditional_select(&d, &d.neg(), swap);
            let new_e = e.add(&Fp::conditional_select(&Fp::zero(), &signed_d, g0));
            let new_d = Fp::conditional_select(&d, &e, swap).dbl();
            d = new_d;
            e = new_e;

            delta = Dis::conditional_select(&(1 + delta), &(1 - delta), swap);
        }

        let r = Fp::conditional_select(&d, &d.neg(), unit_sign(&f));
        Ok(r.mul(&Fp::from_mont(P::DIVST_CORR)))
    }

    /// Jumpdivsteps: 62 divsteps per transition matrix on the low digits.
    pub fn inv_jmpds(&self) -> Result<Self> {
        self.check_nonzero("fp_inv_jmpds")?;
        let mut delta: Dis = 1;
        let mut f = signed_from(&P::MODULUS);
        let mut g = signed_from(&self.to_limbs());
        let mut d = Fp::<P>::zero();
        let mut e = Fp::<P>::one();

        for _ in 0..P::JMPDS_JUMPS {
            let (dl, m) = jump(delta, f[0], g[0]);
            delta = dl;
            let [u, v, q, r] = m;

            let nf = combine(&f, &g, u, v);
            let ng = combine(&f, &g, q, r);
            f = nf;
            g = ng;

            let nd = d.mul_dis(u).add(&e.mul_dis(v));
            let ne = d.mul_dis(q).add(&e.mul_dis(r));
            d = nd;
            e = ne;
        }

        let r = Fp::conditional_select(&d, &d.neg(), unit_sign(&f));
        Ok(r.mul(&Fp::from_mont(P::JMPDS_CORR)))
    }

    /// Inverses of every element with one field inversion.
    pub fn inv_sim(a: &[Self]) -> Result<Vec<Self>> {
        if a.is_empty() {
            return Ok(Vec::new());
        }
        let mut acc = Vec::with_capacity(a.len());
        let mut t = a[0];
        acc.push(t);
        for x in &a[1..] {
            t = t.mul(x);
            acc.push(t);
        }
        let mut inv = t.inv()?;
        let mut out = alloc::vec![Fp::zero(); a.len()];
        for i in (1..a.len()).rev() {
            out[i] = inv.mul(&acc[i - 1]);
            inv = inv.mul(&a[i]);
        }
        out[0] = inv;
        Ok(out)
    }
}

/// 62 divsteps on the low digits, returning the new delta and the
/// transition matrix [u, v, q, r] scaled by 2^62.
fn jump(mut delta: Dis, mut fl: Dig, mut gl: Dig) -> (Dis, [Dis; 4]) {
    let (mut u, mut v, mut q, mut r): (Dis, Dis, Dis, Dis) = (1, 0, 0, 1);
    for _ in 0..62 {
        let g1 = Choice::from((gl & 1) as u8);
        let pos = Choice::from((delta.wrapping_neg() >> 63) as u8 & 1);
        let swap = pos & g1;

        let x = Dig::conditional_select(&fl, &fl.wrapping_neg(), swap);
        let add = Dig::conditional_select(&0, &x, g1);
        let new_fl = Dig::conditional_select(&fl, &gl, swap);
        gl = gl.wrapping_add(add) >> 1;
        fl = new_fl;

        let xu = Dis::conditional_select(&u, &u.wrapping_neg(), swap);
        let xv = Dis::conditional_select(&v, &v.wrapping_neg(), swap);
        let nu = Dis::conditional_select(&u, &q, swap).wrapping_mul(2);
        let nv = Dis::conditional_select(&v, &r, swap).wrapping_mul(2);
        q = q.wrapping_add(Dis::conditional_select(&0, &xu, g1));
        r = r.wrapping_add(Dis::conditional_select(&0, &xv, g1));
        u = nu;
        v = nv;

        delta = Dis::conditional_select(&(1 + delta), &(1 - delta), swap);
    }
    (delta, [u, v, q, r])
}

/// (x f + y g) / 2^62 over the signed working width
fn combine(f: &Signed, g: &Signed, x: Dis, y: Dis) -> Signed {
    let mut a = [0; W + 1];
    let mut b = [0; W + 1];
    low::muls(&mut a, f, x);
    low::muls(&mut b, g, y);
    let mut s = [0; W + 1];
    low::addn(&mut s, &a, &b);
    let mut t = [0; W + 1];
    low::rshs(&mut t, &s, 62);
    let mut out = [0; W];
    out.copy_from_slice(&t[..W]);
    out
}
