//! Low-level arithmetic on digit vectors
//!
//! Vectors are little-endian slices of [`Dig`]. Unless stated otherwise the
//! routines run in time that depends only on the lengths of their operands.
//! `divn` and `cmpn` are variable-time and used on public values only.

use super::{Dbl, Dig, Dis, DIG};
use subtle::Choice;

// ============================================================================
// Digit helpers
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub const fn adc(a: Dig, b: Dig, carry: Dig) -> (Dig, Dig) {
    let ret = (a as Dbl) + (b as Dbl) + (carry as Dbl);
    (ret as Dig, (ret >> DIG) as Dig)
}

/// Compute a - b - borrow, returning (result, borrow) with borrow in {0, 1}
#[inline(always)]
pub const fn sbb(a: Dig, b: Dig, borrow: Dig) -> (Dig, Dig) {
    let ret = (a as Dbl).wrapping_sub((b as Dbl) + (borrow as Dbl));
    (ret as Dig, ((ret >> DIG) as Dig) & 1)
}

/// Compute a + b * c + carry, returning (result, carry)
#[inline(always)]
pub const fn mac(a: Dig, b: Dig, c: Dig, carry: Dig) -> (Dig, Dig) {
    let ret = (a as Dbl) + (b as Dbl) * (c as Dbl) + (carry as Dbl);
    (ret as Dig, (ret >> DIG) as Dig)
}

// ============================================================================
// Addition and subtraction
// ============================================================================

/// c = a + digit. Returns the carry.
pub fn add1(c: &mut [Dig], a: &[Dig], digit: Dig) -> Dig {
    let mut carry = digit;
    for (ci, ai) in c.iter_mut().zip(a.iter()) {
        let (s, k) = adc(*ai, carry, 0);
        *ci = s;
        carry = k;
    }
    carry
}

/// c = a + b over equal lengths. Returns the carry.
pub fn addn(c: &mut [Dig], a: &[Dig], b: &[Dig]) -> Dig {
    debug_assert!(a.len() == b.len() && c.len() >= a.len());
    let mut carry = 0;
    for i in 0..a.len() {
        let (s, k) = adc(a[i], b[i], carry);
        c[i] = s;
        carry = k;
    }
    carry
}

/// In-place c += a, with `a` no longer than `c`. Returns the carry.
pub fn addn_assign(c: &mut [Dig], a: &[Dig]) -> Dig {
    debug_assert!(a.len() <= c.len());
    let mut carry = 0;
    for i in 0..c.len() {
        let ai = if i < a.len() { a[i] } else { 0 };
        let (s, k) = adc(c[i], ai, carry);
        c[i] = s;
        carry = k;
    }
    carry
}

/// c = a - digit. Returns the borrow.
pub fn sub1(c: &mut [Dig], a: &[Dig], digit: Dig) -> Dig {
    let mut borrow = 0;
    let mut d = digit;
    for (ci, ai) in c.iter_mut().zip(a.iter()) {
        let (s, b) = sbb(*ai, d, borrow);
        *ci = s;
        borrow = b;
        d = 0;
    }
    borrow
}

/// c = a - b over equal lengths. Returns the borrow.
pub fn subn(c: &mut [Dig], a: &[Dig], b: &[Dig]) -> Dig {
    debug_assert!(a.len() == b.len() && c.len() >= a.len());
    let mut borrow = 0;
    for i in 0..a.len() {
        let (s, k) = sbb(a[i], b[i], borrow);
        c[i] = s;
        borrow = k;
    }
    borrow
}

/// In-place c -= a, with `a` no longer than `c`. Returns the borrow.
pub fn subn_assign(c: &mut [Dig], a: &[Dig]) -> Dig {
    debug_assert!(a.len() <= c.len());
    let mut borrow = 0;
    for i in 0..c.len() {
        let ai = if i < a.len() { a[i] } else { 0 };
        let (s, k) = sbb(c[i], ai, borrow);
        c[i] = s;
        borrow = k;
    }
    borrow
}

// ============================================================================
// Multiplication
// ============================================================================

/// c = a * digit. Returns the high digit.
pub fn mul1(c: &mut [Dig], a: &[Dig], digit: Dig) -> Dig {
    let mut carry = 0;
    for (ci, ai) in c.iter_mut().zip(a.iter()) {
        let (s, k) = mac(0, *ai, digit, carry);
        *ci = s;
        carry = k;
    }
    carry
}

/// c += a * digit over the low `a.len()` digits of c. Returns the high digit.
pub fn mula(c: &mut [Dig], a: &[Dig], digit: Dig) -> Dig {
    let mut carry = 0;
    for (ci, ai) in c.iter_mut().zip(a.iter()) {
        let (s, k) = mac(*ci, *ai, digit, carry);
        *ci = s;
        carry = k;
    }
    carry
}

/// c = a * digit for a two's complement vector `a` and a signed digit.
///
/// `c` must be one digit longer than `a`; the product is written in two's
/// complement over all of `c`.
pub fn muls(c: &mut [Dig], a: &[Dig], digit: Dis) -> Dig {
    debug_assert!(c.len() == a.len() + 1);
    let neg_a = ((a[a.len() - 1] >> (DIG - 1)) & 1) as u8;
    let neg_d = (digit < 0) as u8;
    let mag = digit.unsigned_abs();

    // |a| into c, then |a| * |digit|
    let n = a.len();
    c[..n].copy_from_slice(a);
    c[n] = 0;
    negs_cond(&mut c[..n], Choice::from(neg_a));
    let mut carry = 0;
    for ci in c[..n].iter_mut() {
        let (s, k) = mac(0, *ci, mag, carry);
        *ci = s;
        carry = k;
    }
    c[n] = carry;
    negs_cond(c, Choice::from(neg_a ^ neg_d));
    c[n]
}

/// c = a * b by product scanning. `c` holds `a.len() + b.len()` digits.
pub fn muln(c: &mut [Dig], a: &[Dig], b: &[Dig]) {
    debug_assert!(c.len() >= a.len() + b.len());
    for ci in c.iter_mut() {
        *ci = 0;
    }
    for (i, ai) in a.iter().enumerate() {
        let hi = mula(&mut c[i..i + b.len()], b, *ai);
        c[i + b.len()] = hi;
    }
}

/// Accumulate one row of a squaring: c += a[0]^2 + 2 a[0] (a[1..] << DIG).
///
/// The carry is propagated through the rest of `c`; the digit falling off
/// the end is returned.
pub fn sqra(c: &mut [Dig], a: &[Dig]) -> Dig {
    let a0 = a[0] as Dbl;
    let t = a0 * a0 + c[0] as Dbl;
    c[0] = t as Dig;
    let mut carry: Dbl = t >> DIG;
    for j in 1..a.len() {
        let p = a0 * (a[j] as Dbl);
        let lost = p >> (2 * DIG - 1);
        let (s, o1) = (p << 1).overflowing_add(c[j] as Dbl);
        let (s, o2) = s.overflowing_add(carry);
        c[j] = s as Dig;
        carry = (s >> DIG) + ((lost + o1 as Dbl + o2 as Dbl) << DIG);
    }
    for cj in c.iter_mut().skip(a.len()) {
        let t = (*cj as Dbl) + carry;
        *cj = t as Dig;
        carry = t >> DIG;
    }
    carry as Dig
}

/// c = a^2. `c` holds `2 * a.len()` digits.
pub fn sqrn(c: &mut [Dig], a: &[Dig]) {
    debug_assert!(c.len() >= 2 * a.len());
    for ci in c.iter_mut() {
        *ci = 0;
    }
    for i in 0..a.len() {
        sqra(&mut c[2 * i..], &a[i..]);
    }
}

// ============================================================================
// Shifts
// ============================================================================

/// c = a << 1. Returns the bit shifted out.
pub fn lsh1(c: &mut [Dig], a: &[Dig]) -> Dig {
    let mut carry = 0;
    for (ci, ai) in c.iter_mut().zip(a.iter()) {
        let r = *ai >> (DIG - 1);
        *ci = (*ai << 1) | carry;
        carry = r;
    }
    carry
}

/// c = a << bits, 0 < bits < DIG. Returns the bits shifted out.
pub fn lshb(c: &mut [Dig], a: &[Dig], bits: u32) -> Dig {
    debug_assert!(bits > 0 && (bits as usize) < DIG);
    let mut carry = 0;
    for (ci, ai) in c.iter_mut().zip(a.iter()) {
        let r = *ai >> (DIG as u32 - bits);
        *ci = (*ai << bits) | carry;
        carry = r;
    }
    carry
}

/// c = a >> 1. Returns the bit shifted out, in the top position.
pub fn rsh1(c: &mut [Dig], a: &[Dig]) -> Dig {
    let mut carry = 0;
    for i in (0..a.len()).rev() {
        let r = a[i] << (DIG - 1);
        c[i] = (a[i] >> 1) | carry;
        carry = r;
    }
    carry
}

/// c = a >> bits, 0 < bits < DIG. Returns the bits shifted out, at the top.
pub fn rshb(c: &mut [Dig], a: &[Dig], bits: u32) -> Dig {
    debug_assert!(bits > 0 && (bits as usize) < DIG);
    let mut carry = 0;
    for i in (0..a.len()).rev() {
        let r = a[i] << (DIG as u32 - bits);
        c[i] = (a[i] >> bits) | carry;
        carry = r;
    }
    carry
}

/// Arithmetic right shift of a two's complement vector, 0 < bits < DIG.
pub fn rshs(c: &mut [Dig], a: &[Dig], bits: u32) {
    debug_assert!(bits > 0 && (bits as usize) < DIG);
    let n = a.len();
    let fill = ((a[n - 1] as Dis) >> (DIG - 1)) as Dig;
    let mut carry = fill << (DIG as u32 - bits);
    for i in (0..n).rev() {
        let r = a[i] << (DIG as u32 - bits);
        c[i] = (a[i] >> bits) | carry;
        carry = r;
    }
}

/// c = -a in two's complement. Returns the final carry.
pub fn negs(c: &mut [Dig], a: &[Dig]) -> Dig {
    let mut carry = 1;
    for (ci, ai) in c.iter_mut().zip(a.iter()) {
        let (s, k) = adc(!*ai, 0, carry);
        *ci = s;
        carry = k;
    }
    carry
}

/// Negate `a` in place when `choice` is set.
pub fn negs_cond(a: &mut [Dig], choice: Choice) {
    let m = relic_internal::constant_time::mask(choice);
    let mut carry = m & 1;
    for ai in a.iter_mut() {
        let (s, k) = adc(*ai ^ m, 0, carry);
        *ai = s;
        carry = k;
    }
}

// ============================================================================
// Reduction and division
// ============================================================================

/// Montgomery reduction: c = t * R^-1 mod m, where R = 2^(DIG * m.len()).
///
/// `t` holds `2 * m.len()` digits below `m * R` and is consumed. `u` is
/// `-m^-1 mod 2^DIG`. The result is fully reduced.
pub fn modn(c: &mut [Dig], t: &mut [Dig], m: &[Dig], u: Dig) {
    let n = m.len();
    debug_assert!(t.len() >= 2 * n && c.len() >= n);
    let mut top = 0;
    for i in 0..n {
        let r = t[i].wrapping_mul(u);
        let hi = mula(&mut t[i..i + n], m, r);
        let (s, k1) = adc(t[i + n], hi, top);
        t[i + n] = s;
        top = k1;
    }
    let res = &t[n..2 * n];
    let borrow = subn(c, res, m);
    // the subtraction only stands when it did not underflow past the top carry
    let keep = Choice::from((borrow & !top & 1) as u8);
    relic_internal::dv_copy_cond(&mut c[..n], res, keep);
}

/// Divide by a single digit: q = a / digit. Returns the remainder.
pub fn div1(q: &mut [Dig], a: &[Dig], digit: Dig) -> Dig {
    debug_assert!(digit != 0);
    let d = digit as Dbl;
    let mut r: Dbl = 0;
    for i in (0..a.len()).rev() {
        let w = (r << DIG) | a[i] as Dbl;
        q[i] = (w / d) as Dig;
        r = w % d;
    }
    r as Dig
}

/// Long division (Knuth, algorithm D): q = a / b, r = a mod b.
///
/// The most significant digit of `b` must be non-zero and `a.len() >= b.len()`.
/// `q` holds `a.len() - b.len() + 1` digits and `r` holds `b.len()` digits.
pub fn divn(q: &mut [Dig], r: &mut [Dig], a: &[Dig], b: &[Dig]) {
    let n = b.len();
    let m = a.len();
    debug_assert!(n > 0 && m >= n && b[n - 1] != 0);

    for qi in q.iter_mut() {
        *qi = 0;
    }
    if n == 1 {
        r[0] = div1(q, a, b[0]);
        return;
    }

    let s = b[n - 1].leading_zeros();
    let mut v = alloc::vec![0 as Dig; n];
    let mut u = alloc::vec![0 as Dig; m + 1];
    if s > 0 {
        lshb(&mut v, b, s);
        u[m] = lshb(&mut u[..m], a, s);
    } else {
        v.copy_from_slice(b);
        u[..m].copy_from_slice(a);
    }

    let base: Dbl = 1 << DIG;
    for j in (0..=m - n).rev() {
        let num = ((u[j + n] as Dbl) << DIG) | u[j + n - 1] as Dbl;
        let mut qhat = num / v[n - 1] as Dbl;
        let mut rhat = num % v[n - 1] as Dbl;
        while qhat >= base || qhat * (v[n - 2] as Dbl) > ((rhat << DIG) | u[j + n - 2] as Dbl) {
            qhat -= 1;
            rhat += v[n - 1] as Dbl;
            if rhat >= base {
                break;
            }
        }

        // u[j..=j+n] -= qhat * v
        let mut borrow: Dig = 0;
        let mut carry: Dig = 0;
        for i in 0..n {
            let (p, k) = mac(0, qhat as Dig, v[i], carry);
            carry = k;
            let (d, b1) = sbb(u[i + j], p, borrow);
            u[i + j] = d;
            borrow = b1;
        }
        let (d, b1) = sbb(u[j + n], carry, borrow);
        u[j + n] = d;

        if b1 != 0 {
            qhat -= 1;
            let c = addn_assign(&mut u[j..j + n], &v);
            u[j + n] = u[j + n].wrapping_add(c);
        }
        q[j] = qhat as Dig;
    }

    if s > 0 {
        rshb(r, &u[..n], s);
        r[n - 1] |= u[n] << (DIG as u32 - s);
    } else {
        r.copy_from_slice(&u[..n]);
    }
}

// ============================================================================
// Comparison and masking
// ============================================================================

/// Compare equal-length vectors: -1, 0 or 1.
pub fn cmpn(a: &[Dig], b: &[Dig]) -> i32 {
    debug_assert_eq!(a.len(), b.len());
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return if a[i] > b[i] { 1 } else { -1 };
        }
    }
    0
}

/// Copy `src` into `dst` when `choice` is set.
#[inline]
pub fn copy_cond(dst: &mut [Dig], src: &[Dig], choice: Choice) {
    relic_internal::dv_copy_cond(dst, src, choice);
}

/// Swap two vectors when `choice` is set.
#[inline]
pub fn swap_cond(a: &mut [Dig], b: &mut [Dig], choice: Choice) {
    relic_internal::dv_swap_cond(a, b, choice);
}
