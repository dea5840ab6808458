//! Compile-time derivation of Montgomery and exponent constants
//!
//! Every prime uses six 64-bit digits and the radix R = 2^384.

use crate::bn::low::{adc, mac, sbb};
use crate::bn::Dig;
use crate::config::FP_DIGS;

/// Limb array of a field element
pub type Limbs = [Dig; FP_DIGS];

/// -p^-1 mod 2^64
pub const fn inv_digit(p0: Dig) -> Dig {
    crate::bn::monty_inv(p0)
}

/// a >= b
pub const fn geq(a: &Limbs, b: &Limbs) -> bool {
    let mut i = FP_DIGS;
    while i > 0 {
        i -= 1;
        if a[i] != b[i] {
            return a[i] > b[i];
        }
    }
    true
}

/// a - b with the final borrow
pub const fn sub_limbs(a: &Limbs, b: &Limbs) -> (Limbs, Dig) {
    let mut r = [0; FP_DIGS];
    let mut borrow = 0;
    let mut i = 0;
    while i < FP_DIGS {
        let (d, b1) = sbb(a[i], b[i], borrow);
        r[i] = d;
        borrow = b1;
        i += 1;
    }
    (r, borrow)
}

/// a + b with the final carry
pub const fn add_limbs(a: &Limbs, b: &Limbs) -> (Limbs, Dig) {
    let mut r = [0; FP_DIGS];
    let mut carry = 0;
    let mut i = 0;
    while i < FP_DIGS {
        let (s, c) = adc(a[i], b[i], carry);
        r[i] = s;
        carry = c;
        i += 1;
    }
    (r, carry)
}

/// Mask-select: `b` when mask is all ones, `a` when zero
pub const fn select(a: &Limbs, b: &Limbs, mask: Dig) -> Limbs {
    let mut r = [0; FP_DIGS];
    let mut i = 0;
    while i < FP_DIGS {
        r[i] = (a[i] & !mask) | (b[i] & mask);
        i += 1;
    }
    r
}

/// (a + b) mod p for a, b < p
pub const fn add_mod(a: &Limbs, b: &Limbs, p: &Limbs) -> Limbs {
    let (s, carry) = add_limbs(a, b);
    let (d, borrow) = sub_limbs(&s, p);
    // keep the sum only when the subtraction underflowed without a carry
    let keep = (borrow & !carry & 1).wrapping_neg();
    select(&d, &s, keep)
}

/// (a - b) mod p for a, b < p
pub const fn sub_mod(a: &Limbs, b: &Limbs, p: &Limbs) -> Limbs {
    let (d, borrow) = sub_limbs(a, b);
    let (s, _) = add_limbs(&d, p);
    select(&d, &s, borrow.wrapping_neg())
}

/// a / 2 mod p for a < p, p odd
pub const fn hlv_mod(a: &Limbs, p: &Limbs) -> Limbs {
    let odd = (a[0] & 1).wrapping_neg();
    let mut masked = [0; FP_DIGS];
    let mut i = 0;
    while i < FP_DIGS {
        masked[i] = p[i] & odd;
        i += 1;
    }
    let (s, carry) = add_limbs(a, &masked);
    let mut r = [0; FP_DIGS];
    let mut i = 0;
    while i < FP_DIGS {
        let hi = if i + 1 < FP_DIGS { s[i + 1] } else { carry };
        r[i] = (s[i] >> 1) | (hi << 63);
        i += 1;
    }
    r
}

/// Montgomery product a b R^-1 mod p (CIOS), for a b < p R.
pub const fn mont_mul(a: &Limbs, b: &Limbs, p: &Limbs, inv: Dig) -> Limbs {
    let mut t = [0 as Dig; FP_DIGS + 2];
    let mut i = 0;
    while i < FP_DIGS {
        let mut carry = 0;
        let mut j = 0;
        while j < FP_DIGS {
            let (v, c) = mac(t[j], a[j], b[i], carry);
            t[j] = v;
            carry = c;
            j += 1;
        }
        let (v, c) = adc(t[FP_DIGS], carry, 0);
        t[FP_DIGS] = v;
        t[FP_DIGS + 1] = c;

        let m = t[0].wrapping_mul(inv);
        let (_, mut carry) = mac(t[0], m, p[0], 0);
        let mut j = 1;
        while j < FP_DIGS {
            let (v, c) = mac(t[j], m, p[j], carry);
            t[j - 1] = v;
            carry = c;
            j += 1;
        }
        let (v, c) = adc(t[FP_DIGS], carry, 0);
        t[FP_DIGS - 1] = v;
        t[FP_DIGS] = t[FP_DIGS + 1] + c;
        i += 1;
    }
    let mut r = [0; FP_DIGS];
    let mut k = 0;
    while k < FP_DIGS {
        r[k] = t[k];
        k += 1;
    }
    let (d, borrow) = sub_limbs(&r, p);
    let keep = (borrow & !t[FP_DIGS] & 1).wrapping_neg();
    select(&d, &r, keep)
}

/// 2^k mod p
pub const fn pow2_mod(k: usize, p: &Limbs) -> Limbs {
    let mut r = [0; FP_DIGS];
    r[0] = 1;
    let mut i = 0;
    while i < k {
        r = add_mod(&r, &r, p);
        i += 1;
    }
    r
}

/// a / 2^k mod p
pub const fn hlv_n(a: &Limbs, k: usize, p: &Limbs) -> Limbs {
    let mut r = *a;
    let mut i = 0;
    while i < k {
        r = hlv_mod(&r, p);
        i += 1;
    }
    r
}

/// Bit length of a limb array
pub const fn bits(a: &Limbs) -> usize {
    let mut i = FP_DIGS;
    while i > 0 {
        i -= 1;
        if a[i] != 0 {
            return i * 64 + 64 - a[i].leading_zeros() as usize;
        }
    }
    0
}

/// Largest s with 2^s dividing p - 1
pub const fn two_adicity(p: &Limbs) -> u32 {
    let (pm1, _) = sub_limbs(p, &one());
    let mut s = 0;
    let mut i = 0;
    while i < FP_DIGS {
        if pm1[i] != 0 {
            return s + pm1[i].trailing_zeros();
        }
        s += 64;
        i += 1;
    }
    s
}

/// The integer one
pub const fn one() -> Limbs {
    let mut r = [0; FP_DIGS];
    r[0] = 1;
    r
}

/// a >> k, for k < 64
pub const fn shr(a: &Limbs, k: u32) -> Limbs {
    if k == 0 {
        return *a;
    }
    let mut r = [0; FP_DIGS];
    let mut i = 0;
    while i < FP_DIGS {
        let hi = if i + 1 < FP_DIGS { a[i + 1] << (64 - k) } else { 0 };
        r[i] = (a[i] >> k) | hi;
        i += 1;
    }
    r
}

/// a >> k for any k
pub const fn shr_any(a: &Limbs, k: u32) -> Limbs {
    let mut r = *a;
    let mut left = k;
    while left > 0 {
        let step = if left > 63 { 63 } else { left };
        r = shr(&r, step);
        left -= step;
    }
    r
}

/// a + d for a small digit
pub const fn add_small(a: &Limbs, d: Dig) -> Limbs {
    let mut b = [0; FP_DIGS];
    b[0] = d;
    add_limbs(a, &b).0
}

/// a - d for a small digit
pub const fn sub_small(a: &Limbs, d: Dig) -> Limbs {
    let mut b = [0; FP_DIGS];
    b[0] = d;
    sub_limbs(a, &b).0
}

/// Iteration count of the divstep inverse for a modulus of `n` bits
pub const fn divst_iterations(n: usize) -> usize {
    let base = if n < 46 { (49 * n + 80) / 17 } else { (49 * n + 57) / 17 };
    base + 1
}

/// Number of 62-step jumps of the jumpdivstep inverse for `n` bits
pub const fn jmpds_jumps(n: usize) -> usize {
    let total = (45907 * n + 26313 + 19928) / 19929;
    (total + 61) / 62
}
