//! Shared helpers for the relic end-to-end and property tests

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use relic::algorithms::Bn;

/// Deterministic generator for a test case
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Integer from an unsigned 128-bit value
pub fn bn_from_u128(v: u128) -> Bn {
    Bn::from_limbs(&[v as u64, (v >> 64) as u64])
}

/// Non-negative integer of at most two digits, as `u128`
pub fn bn_to_u128(a: &Bn) -> Option<u128> {
    if a.is_neg() || a.bits() > 128 {
        return None;
    }
    let d = a.digits();
    let lo = d.first().copied().unwrap_or(0) as u128;
    let hi = d.get(1).copied().unwrap_or(0) as u128;
    Some(lo | (hi << 64))
}

/// Integer of signed 128-bit value
pub fn bn_from_i128(v: i128) -> Bn {
    let a = bn_from_u128(v.unsigned_abs());
    if v < 0 {
        a.neg()
    } else {
        a
    }
}

/// Integer from a hex string, for published constants
pub fn bn_from_hex(s: &str) -> Bn {
    let bytes = hex::decode(s).expect("test vector is valid hex");
    <Bn as relic::api::Serialize>::read_bin(&bytes).expect("test vector fits")
}

/// a^b mod m over u128, square and multiply
pub fn pow_mod_u128(a: u128, mut b: u128, m: u128) -> u128 {
    let mut r = 1 % m;
    let mut a = a % m;
    while b > 0 {
        if b & 1 == 1 {
            r = mul_mod_u128(r, a, m);
        }
        a = mul_mod_u128(a, a, m);
        b >>= 1;
    }
    r
}

fn mul_mod_u128(a: u128, b: u128, m: u128) -> u128 {
    // operands stay below 2^64 in every caller
    (a * b) % m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u128_conversions() {
        let v = 0x1234_5678_9abc_def0_0fed_cba9_8765_4321u128;
        assert_eq!(bn_to_u128(&bn_from_u128(v)), Some(v));
        assert_eq!(bn_to_u128(&bn_from_i128(-5)), None);
        assert_eq!(bn_from_hex("0100"), Bn::from_dig(256));
        assert_eq!(pow_mod_u128(3, 4, 7), 81 % 7);
    }
}
