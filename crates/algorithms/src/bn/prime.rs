//! Primality testing and prime generation

use core::cmp::Ordering;

use rand::{CryptoRng, RngCore};

use super::{Bn, Dig, Sign};
use crate::error::Result;

/// Odd primes used for trial division and as Miller-Rabin bases
const SMALL_PRIMES: [Dig; 53] = [
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Miller-Rabin rounds for a modulus of the given size
const fn rabin_rounds(bits: usize) -> usize {
    if bits >= 1300 {
        2
    } else if bits >= 850 {
        3
    } else if bits >= 650 {
        4
    } else if bits >= 350 {
        8
    } else if bits >= 250 {
        12
    } else if bits >= 150 {
        18
    } else {
        27
    }
}

impl Bn {
    /// Trial division by small primes. `Some` when that settles primality.
    pub fn is_prime_basic(&self) -> Result<Option<bool>> {
        if self.cmp_dig(2) == Ordering::Less {
            return Ok(Some(false));
        }
        if self.cmp_dig(2) == Ordering::Equal {
            return Ok(Some(true));
        }
        if self.is_even() {
            return Ok(Some(false));
        }
        for &p in SMALL_PRIMES.iter() {
            if self.cmp_dig(p) == Ordering::Equal {
                return Ok(Some(true));
            }
            if self.mod_dig(p)? == 0 {
                return Ok(Some(false));
            }
        }
        Ok(None)
    }

    /// Miller-Rabin with the first small primes as bases
    pub fn is_prime_rabin(&self) -> Result<bool> {
        if let Some(answer) = self.is_prime_basic()? {
            return Ok(answer);
        }
        let n1 = self.sub_dig(1)?;
        let mut s = 0;
        while !n1.get_bit(s) {
            s += 1;
        }
        let d = n1.rsh(s);
        'bases: for &a in SMALL_PRIMES.iter().take(rabin_rounds(self.bits())) {
            let mut y = Bn::from_dig(a).mxp(&d, self)?;
            if y.is_one() || y == n1 {
                continue;
            }
            for _ in 1..s {
                y = y.sqr()?.modp(self)?;
                if y == n1 {
                    continue 'bases;
                }
                if y.is_one() {
                    return Ok(false);
                }
            }
            return Ok(false);
        }
        Ok(true)
    }

    /// Solovay-Strassen with the first small primes as bases
    pub fn is_prime_solov(&self) -> Result<bool> {
        if let Some(answer) = self.is_prime_basic()? {
            return Ok(answer);
        }
        let n1 = self.sub_dig(1)?;
        let e = n1.hlv();
        for &a in SMALL_PRIMES.iter().take(rabin_rounds(self.bits())) {
            let a = Bn::from_dig(a);
            let j = a.smb_jac(self)?;
            let t = a.mxp(&e, self)?;
            let expected = match j {
                1 => Bn::one(),
                -1 => n1.clone(),
                _ => return Ok(false),
            };
            if t != expected {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Probabilistic primality test
    pub fn is_prime(&self) -> Result<bool> {
        self.is_prime_rabin()
    }
}

/// Random prime of exactly `bits` bits.
pub fn gen_prime<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, bits: usize) -> Result<Bn> {
    crate::error::validate::parameter(bits >= 2, "bn_gen_prime")?;
    loop {
        let mut p = Bn::rand(rng, Sign::Pos, bits)?;
        p.set_bit(bits - 1, true)?;
        if bits > 2 {
            p.set_bit(0, true)?;
        }
        if p.is_prime()? {
            tracing::trace!(bits, "generated prime");
            return Ok(p);
        }
    }
}
