//! Modular exponentiation

use alloc::vec;
use alloc::vec::Vec;

use subtle::Choice;

use super::div::ModCtx;
use super::{low, rec, Bn, Dig, Sign};
use crate::config::{BnMxp, BN_MXP, BN_XPWDT};
use crate::error::{validate, Result};

/// Shared prologue: validates m and resolves the trivial cases. Returns the
/// answer directly when no exponentiation is needed.
fn trivial(a: &Bn, b: &Bn, m: &Bn, context: &'static str) -> Result<Option<Bn>> {
    validate::parameter(!m.is_zero() && !m.is_neg(), context)?;
    if m.is_one() {
        return Ok(Some(Bn::zero()));
    }
    if b.is_zero() {
        return Ok(Some(Bn::one()));
    }
    if a.modp(m)?.is_zero() {
        validate::parameter(!b.is_neg(), context)?;
        return Ok(Some(Bn::zero()));
    }
    Ok(None)
}

/// Undo the context form and invert for negative exponents.
fn finish(ctx: &ModCtx, r: &Bn, b: &Bn) -> Result<Bn> {
    let r = ctx.from_internal(r)?;
    if b.is_neg() {
        return r.mod_inv(ctx.modulus());
    }
    Ok(r)
}

impl Bn {
    /// self^b mod m with the configured method. Negative b inverts.
    pub fn mxp(&self, b: &Bn, m: &Bn) -> Result<Bn> {
        match BN_MXP {
            BnMxp::Basic => self.mxp_basic(b, m),
            BnMxp::Slide => self.mxp_slide(b, m),
            BnMxp::Monty => self.mxp_monty(b, m),
        }
    }

    /// Left-to-right binary exponentiation
    pub fn mxp_basic(&self, b: &Bn, m: &Bn) -> Result<Bn> {
        if let Some(r) = trivial(self, b, m, "bn_mxp_basic")? {
            return Ok(r);
        }
        let ctx = ModCtx::new(m)?;
        let t = ctx.to_internal(self)?;
        let mut r = t.clone();
        for i in (0..b.bits() - 1).rev() {
            r = ctx.sqr(&r)?;
            if b.get_bit(i) {
                r = ctx.mul(&r, &t)?;
            }
        }
        finish(&ctx, &r, b)
    }

    /// Sliding-window exponentiation
    pub fn mxp_slide(&self, b: &Bn, m: &Bn) -> Result<Bn> {
        if let Some(r) = trivial(self, b, m, "bn_mxp_slide")? {
            return Ok(r);
        }
        let w = slide_width(b.bits());
        let ctx = ModCtx::new(m)?;

        // odd powers t[i] = a^(2i + 1)
        let a = ctx.to_internal(self)?;
        let a2 = ctx.sqr(&a)?;
        let mut table = Vec::with_capacity(1 << (w - 1));
        table.push(a);
        for i in 1..(1 << (w - 1)) {
            let next = ctx.mul(&table[i - 1], &a2)?;
            table.push(next);
        }

        let mut r = ctx.one()?;
        for win in rec::rec_slw(&b.abs(), w) {
            if win == 0 {
                r = ctx.sqr(&r)?;
            } else {
                for _ in 0..(8 - win.leading_zeros()) {
                    r = ctx.sqr(&r)?;
                }
                r = ctx.mul(&r, &table[(win >> 1) as usize])?;
            }
        }
        finish(&ctx, &r, b)
    }

    /// Montgomery ladder. The sequence of operations does not depend on the
    /// exponent bits.
    pub fn mxp_monty(&self, b: &Bn, m: &Bn) -> Result<Bn> {
        if let Some(r) = trivial(self, b, m, "bn_mxp_monty")? {
            return Ok(r);
        }
        let ctx = ModCtx::new(m)?;
        let n = m.len() + 1;
        let mut r0 = ctx.one()?.padded(n);
        let mut r1 = ctx.to_internal(self)?.padded(n);
        for i in (0..b.bits()).rev() {
            let bit = Choice::from(b.get_bit(i) as u8);
            low::swap_cond(&mut r0, &mut r1, bit);
            let x0 = Bn::from_parts_small(r0.clone(), Sign::Pos);
            let x1 = Bn::from_parts_small(r1.clone(), Sign::Pos);
            r1 = ctx.mul(&x0, &x1)?.padded(n);
            r0 = ctx.sqr(&x0)?.padded(n);
            low::swap_cond(&mut r0, &mut r1, bit);
        }
        finish(&ctx, &Bn::from_parts_small(r0, Sign::Pos), b)
    }

    /// self^digit mod m
    pub fn mxp_dig(&self, digit: Dig, m: &Bn) -> Result<Bn> {
        self.mxp_basic(&Bn::from_dig(digit), m)
    }
}

/// Window width of the sliding-window method for an exponent of `bits` bits.
pub(crate) const fn slide_width(bits: usize) -> usize {
    match bits {
        0..=21 => 2,
        22..=32 => 3,
        33..=128 => 4,
        129..=256 => 5,
        257..=512 => 6,
        _ => 7,
    }
}

/// a^b mod pq (or mod p^2 q^2 when `sqr` is set) from two half-size
/// exponentiations recombined with Garner's formula. p and q are distinct primes.
pub fn mxp_crt(a: &Bn, b: &Bn, p: &Bn, q: &Bn, sqr: bool) -> Result<Bn> {
    validate::parameter(!p.is_zero() && !q.is_zero() && p != q, "bn_mxp_crt")?;
    let (mp, mq, ep, eq) = if sqr {
        let pp = p.sqr()?;
        let qq = q.sqr()?;
        let ep = p.mul(&p.sub_dig(1)?)?;
        let eq = q.mul(&q.sub_dig(1)?)?;
        (pp, qq, ep, eq)
    } else {
        (p.clone(), q.clone(), p.sub_dig(1)?, q.sub_dig(1)?)
    };
    let e = b.abs();
    // the exponent only reduces modulo the group order for units
    let half = |m: &Bn, phi: &Bn, prime: &Bn| -> Result<Bn> {
        if a.modp(prime)?.is_zero() {
            a.mxp(&e, m)
        } else {
            a.mxp(&e.modp(phi)?, m)
        }
    };
    let xp = half(&mp, &ep, p)?;
    let xq = half(&mq, &eq, q)?;
    // h = (xp - xq) / mq mod mp
    let h = xp.sub(&xq)?.mul(&mq.mod_inv(&mp)?)?.modp(&mp)?;
    let n = mp.mul(&mq)?;
    let r = xq.add(&h.mul(&mq)?)?;
    if b.is_neg() {
        return r.mod_inv(&n);
    }
    Ok(r)
}

/// Product of a[i]^b[i] mod m for at most `BN_XPWDT` pairs, by Shamir's trick.
pub fn mxp_sim(a: &[Bn], b: &[Bn], m: &Bn) -> Result<Bn> {
    validate::parameter(a.len() == b.len() && a.len() <= BN_XPWDT, "bn_mxp_sim")?;
    validate::parameter(!m.is_zero() && !m.is_neg(), "bn_mxp_sim")?;
    if m.is_one() {
        return Ok(Bn::zero());
    }
    let ctx = ModCtx::new(m)?;
    let mut bases = Vec::with_capacity(a.len());
    for (x, e) in a.iter().zip(b) {
        let x = if e.is_neg() { x.mod_inv(m)? } else { x.modp(m)? };
        bases.push(ctx.to_internal(&x)?);
    }

    // table[mask] = product of the bases selected by mask
    let mut table = vec![ctx.one()?; 1 << a.len()];
    for mask in 1..table.len() {
        let low_bit = mask.trailing_zeros() as usize;
        table[mask] = ctx.mul(&table[mask & (mask - 1)], &bases[low_bit])?;
    }

    let bits = b.iter().map(Bn::bits).max().unwrap_or(0);
    let mut r = ctx.one()?;
    for i in (0..bits).rev() {
        r = ctx.sqr(&r)?;
        let mut mask = 0;
        for (j, e) in b.iter().enumerate() {
            if e.get_bit(i) {
                mask |= 1 << j;
            }
        }
        if mask != 0 {
            r = ctx.mul(&r, &table[mask])?;
        }
    }
    ctx.from_internal(&r)
}

/// Product of a[i]^b[i] mod m for any number of pairs, in blocks of `BN_XPWDT`.
pub fn mxp_sim_lot(a: &[Bn], b: &[Bn], m: &Bn) -> Result<Bn> {
    validate::parameter(a.len() == b.len(), "bn_mxp_sim_lot")?;
    let mut r = Bn::one().modp(m)?;
    for (ca, cb) in a.chunks(BN_XPWDT).zip(b.chunks(BN_XPWDT)) {
        r = r.mul(&mxp_sim(ca, cb, m)?)?.modp(m)?;
    }
    Ok(r)
}
