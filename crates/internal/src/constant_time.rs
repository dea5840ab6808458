//! Constant-time operations on digit vectors
//!
//! Digit vectors are little-endian slices of 64-bit words. Every function in
//! this module touches each word of its operands exactly once, whatever the
//! condition, so the memory trace is independent of secret data.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// All-ones when `choice` is set, zero otherwise.
#[inline(always)]
pub fn mask(choice: Choice) -> u64 {
    (choice.unwrap_u8() as u64).wrapping_neg()
}

/// Copy `src` into `dst` when `choice` is set.
///
/// Both vectors must have the same length.
pub fn dv_copy_cond(dst: &mut [u64], src: &[u64], choice: Choice) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.conditional_assign(s, choice);
    }
}

/// Swap `a` and `b` when `choice` is set.
pub fn dv_swap_cond(a: &mut [u64], b: &mut [u64], choice: Choice) {
    debug_assert_eq!(a.len(), b.len());
    let m = mask(choice);
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let t = (*x ^ *y) & m;
        *x ^= t;
        *y ^= t;
    }
}

/// Constant-time equality of two digit vectors of the same length.
pub fn dv_cmp_const(a: &[u64], b: &[u64]) -> Choice {
    if a.len() != b.len() {
        return Choice::from(0);
    }
    a.ct_eq(b)
}

/// Clear `a` when `choice` is set.
pub fn dv_zero_cond(a: &mut [u64], choice: Choice) {
    let m = !mask(choice);
    for x in a.iter_mut() {
        *x &= m;
    }
}

/// Constant-time `a < b` on equal-length vectors, by borrow propagation.
pub fn dv_lt(a: &[u64], b: &[u64]) -> Choice {
    debug_assert_eq!(a.len(), b.len());
    let mut borrow = 0u64;
    for (x, y) in a.iter().zip(b.iter()) {
        let t = (*x as u128)
            .wrapping_sub(*y as u128)
            .wrapping_sub(borrow as u128);
        borrow = ((t >> 64) as u64) & 1;
    }
    Choice::from(borrow as u8)
}

/// Constant-time test for the all-zero vector.
pub fn dv_is_zero(a: &[u64]) -> Choice {
    let acc = a.iter().fold(0u64, |acc, x| acc | x);
    acc.ct_eq(&0)
}

/// Constant-time equality of byte strings of public length.
pub fn ct_eq_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
