//! Division and modular reduction of multi-precision integers

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use super::{low, Bn, Dig, Sign, DIG};
use crate::config::{BnMod, BN_MOD};
use crate::error::{validate, Result};

impl Bn {
    /// Floor division with remainder: self = q * b + r, where r has the sign
    /// of b and |r| < |b|.
    pub fn div_rem(&self, b: &Bn) -> Result<(Bn, Bn)> {
        validate::parameter(!b.is_zero(), "bn_div")?;
        let (q, r) = divmod_mag(&self.dp, &b.dp);
        let mut q = Bn::from_parts_small(q, self.sign.mul(b.sign));
        let mut r = Bn::from_parts_small(r, self.sign);
        if self.sign != b.sign && !r.is_zero() {
            q = q.sub_dig(1)?;
            r = r.add(b)?;
        }
        Ok((q, r))
    }

    /// Floor quotient
    pub fn div(&self, b: &Bn) -> Result<Bn> {
        Ok(self.div_rem(b)?.0)
    }

    /// Residue in [0, |m|)
    pub fn modp(&self, m: &Bn) -> Result<Bn> {
        let r = self.div_rem(&m.abs())?.1;
        Ok(r)
    }

    /// Quotient of the magnitude by a digit, with the sign of self
    pub fn div_dig(&self, digit: Dig) -> Result<Bn> {
        Ok(self.div_rem_dig(digit)?.0)
    }

    /// Quotient and remainder of the magnitude by a digit
    pub fn div_rem_dig(&self, digit: Dig) -> Result<(Bn, Dig)> {
        validate::parameter(digit != 0, "bn_div_dig")?;
        let mut q = vec![0; self.dp.len()];
        let r = low::div1(&mut q, &self.dp, digit);
        Ok((Bn::from_parts_small(q, self.sign), r))
    }

    /// Non-negative residue modulo a digit
    pub fn mod_dig(&self, digit: Dig) -> Result<Dig> {
        let (_, r) = self.div_rem_dig(digit)?;
        if self.is_neg() && r != 0 {
            return Ok(digit - r);
        }
        Ok(r)
    }

    /// Alias of `modp` kept under its reduction-method name
    pub fn mod_basic(&self, m: &Bn) -> Result<Bn> {
        self.modp(m)
    }
}

/// Truncated division of trimmed magnitudes
pub(crate) fn divmod_mag(a: &[Dig], b: &[Dig]) -> (Vec<Dig>, Vec<Dig>) {
    if a.len() < b.len() || (a.len() == b.len() && low::cmpn(a, b) < 0) {
        return (vec![0], a.to_vec());
    }
    let mut q = vec![0; a.len() - b.len() + 1];
    let mut r = vec![0; b.len()];
    low::divn(&mut q, &mut r, a, b);
    (q, r)
}

// ============================================================================
// Reduction contexts
// ============================================================================

/// Barrett constant floor(2^(2 DIG k) / m), k the digit length of m.
pub fn mod_pre_barrt(m: &Bn) -> Result<Bn> {
    validate::parameter(!m.is_zero() && !m.is_neg(), "bn_mod_pre_barrt")?;
    Bn::set_2b(2 * DIG * m.len())?.div(m)
}

/// Barrett reduction of 0 <= a < m^2.
pub fn mod_barrt(a: &Bn, m: &Bn, u: &Bn) -> Result<Bn> {
    if a.is_neg() || a.len() > 2 * m.len() {
        return a.modp(m);
    }
    let k = m.len();
    let q1 = a.rsh(DIG * (k - 1));
    let q2 = q1.mul(u)?;
    let q3 = q2.rsh(DIG * (k + 1));
    let r1 = a.low_bits(DIG * (k + 1));
    let r2 = q3.mul(m)?.low_bits(DIG * (k + 1));
    let mut r = r1.sub(&r2)?;
    if r.is_neg() {
        r = r.add(&Bn::set_2b(DIG * (k + 1))?)?;
    }
    while r.cmp(m) != Ordering::Less {
        r = r.sub(m)?;
    }
    Ok(r)
}

/// Montgomery constant -m^-1 mod 2^DIG for odd m.
pub fn mod_pre_monty(m: &Bn) -> Result<Dig> {
    validate::parameter(!m.is_even() && !m.is_neg(), "bn_mod_pre_monty")?;
    Ok(monty_inv(m.get_dig()))
}

/// -x^-1 mod 2^64 for odd x, by Newton iteration.
pub(crate) const fn monty_inv(x: Dig) -> Dig {
    let mut inv: Dig = 1;
    let mut i = 0;
    while i < 6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(x.wrapping_mul(inv)));
        i += 1;
    }
    inv.wrapping_neg()
}

/// Montgomery reduction: a * R^-1 mod m with R = 2^(DIG * m.len()), for 0 <= a < m R.
pub fn mod_monty(a: &Bn, m: &Bn, u: Dig) -> Result<Bn> {
    validate::parameter(!a.is_neg() && a.len() <= 2 * m.len(), "bn_mod_monty")?;
    let n = m.len();
    let mut t = a.padded(2 * n);
    let mut c = vec![0; n];
    low::modn(&mut c, &mut t, &m.dp, u);
    Ok(Bn::from_parts_small(c, Sign::Pos))
}

/// Conversion into Montgomery form: a R mod m.
pub fn mod_monty_conv(a: &Bn, m: &Bn) -> Result<Bn> {
    a.modp(m)?.lsh(DIG * m.len())?.modp(m)
}

/// Conversion out of Montgomery form.
pub fn mod_monty_back(a: &Bn, m: &Bn, u: Dig) -> Result<Bn> {
    mod_monty(a, m, u)
}

/// Reduction state for repeated arithmetic modulo a fixed positive integer.
///
/// Values handed to [`ModCtx::mul`] live in the context's internal form:
/// Montgomery form when the method is `Monty`, canonical otherwise.
#[derive(Clone, Debug)]
pub struct ModCtx {
    m: Bn,
    method: BnMod,
    barrett: Bn,
    monty: Dig,
}

impl ModCtx {
    /// Context for the configured reduction method. Even moduli fall back
    /// from Montgomery to Barrett.
    pub fn new(m: &Bn) -> Result<ModCtx> {
        ModCtx::with_method(m, BN_MOD)
    }

    /// Context for an explicit reduction method.
    pub fn with_method(m: &Bn, method: BnMod) -> Result<ModCtx> {
        validate::parameter(!m.is_neg() && !m.is_zero(), "bn_mod_pre")?;
        let method = match method {
            BnMod::Monty if m.is_even() => BnMod::Barrt,
            other => other,
        };
        let barrett = match method {
            BnMod::Barrt => mod_pre_barrt(m)?,
            _ => Bn::zero(),
        };
        let monty = match method {
            BnMod::Monty => mod_pre_monty(m)?,
            _ => 0,
        };
        Ok(ModCtx {
            m: m.clone(),
            method,
            barrett,
            monty,
        })
    }

    /// The modulus
    pub fn modulus(&self) -> &Bn {
        &self.m
    }

    /// Effective reduction method
    pub fn method(&self) -> BnMod {
        self.method
    }

    /// Reduce a product of two internal-form values
    pub fn reduce(&self, a: &Bn) -> Result<Bn> {
        match self.method {
            BnMod::Basic => a.modp(&self.m),
            BnMod::Barrt => mod_barrt(a, &self.m, &self.barrett),
            BnMod::Monty => mod_monty(a, &self.m, self.monty),
        }
    }

    /// Internal-form product
    pub fn mul(&self, a: &Bn, b: &Bn) -> Result<Bn> {
        self.reduce(&a.mul(b)?)
    }

    /// Internal-form square
    pub fn sqr(&self, a: &Bn) -> Result<Bn> {
        self.reduce(&a.sqr()?)
    }

    /// Canonical residue into internal form
    pub fn to_internal(&self, a: &Bn) -> Result<Bn> {
        match self.method {
            BnMod::Monty => mod_monty_conv(a, &self.m),
            _ => a.modp(&self.m),
        }
    }

    /// Internal form back to a canonical residue
    pub fn from_internal(&self, a: &Bn) -> Result<Bn> {
        match self.method {
            BnMod::Monty => mod_monty_back(a, &self.m, self.monty),
            _ => Ok(a.clone()),
        }
    }

    /// One in internal form
    pub fn one(&self) -> Result<Bn> {
        self.to_internal(&Bn::one())
    }
}
