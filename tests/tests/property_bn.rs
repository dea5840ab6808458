//! Multi-precision integers against native 128-bit arithmetic

use proptest::prelude::*;
use relic::algorithms::bn::{mxp_sim, ModCtx};
use relic::algorithms::Bn;
use relic_tests::{bn_from_i128, bn_from_u128, bn_to_u128, pow_mod_u128};

fn small_i128() -> impl Strategy<Value = i128> {
    any::<i64>().prop_map(i128::from)
}

proptest! {
    #[test]
    fn add_sub_match_i128(a in small_i128(), b in small_i128()) {
        let x = bn_from_i128(a);
        let y = bn_from_i128(b);
        prop_assert_eq!(x.add(&y).unwrap(), bn_from_i128(a + b));
        prop_assert_eq!(x.sub(&y).unwrap(), bn_from_i128(a - b));
        prop_assert_eq!(x.add(&x.neg()).unwrap(), Bn::zero());
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    #[test]
    fn mul_matches_u128(a in any::<u64>(), b in any::<u64>()) {
        let x = Bn::from_dig(a);
        let y = Bn::from_dig(b);
        let expect = bn_from_u128(a as u128 * b as u128);
        prop_assert_eq!(x.mul(&y).unwrap(), expect.clone());
        prop_assert_eq!(x.mul_karat(&y).unwrap(), expect);
        prop_assert_eq!(x.sqr().unwrap(), x.mul(&x).unwrap());
    }

    #[test]
    fn div_rem_matches_u128(a in any::<u128>(), b in 1..=u128::MAX) {
        let (q, r) = bn_from_u128(a).div_rem(&bn_from_u128(b)).unwrap();
        prop_assert_eq!(bn_to_u128(&q), Some(a / b));
        prop_assert_eq!(bn_to_u128(&r), Some(a % b));
    }

    #[test]
    fn floor_division_of_signed(a in small_i128(), b in small_i128()) {
        prop_assume!(b != 0);
        let mut q = a / b;
        if a % b != 0 && (a < 0) != (b < 0) {
            q -= 1;
        }
        let (x, r) = bn_from_i128(a).div_rem(&bn_from_i128(b)).unwrap();
        prop_assert_eq!(x, bn_from_i128(q));
        // remainder takes the sign of the divisor
        prop_assert_eq!(r, bn_from_i128(a - b * q));
    }

    #[test]
    fn shifts_match_u128(a in any::<u64>(), s in 0usize..64) {
        let x = Bn::from_dig(a);
        prop_assert_eq!(bn_to_u128(&x.lsh(s).unwrap()), Some((a as u128) << s));
        prop_assert_eq!(x.rsh(s), Bn::from_dig(a >> s));
    }

    #[test]
    fn decimal_strings_match(a in any::<u128>()) {
        let x = bn_from_u128(a);
        prop_assert_eq!(x.write_str(10).unwrap(), a.to_string());
        prop_assert_eq!(Bn::read_str(&a.to_string(), 10).unwrap(), x);
    }

    #[test]
    fn gcd_matches_euclid(a in 1u64.., b in 1u64..) {
        let (mut u, mut v) = (a, b);
        while v != 0 {
            let t = u % v;
            u = v;
            v = t;
        }
        let x = Bn::from_dig(a);
        let y = Bn::from_dig(b);
        let g = Bn::from_dig(u);
        prop_assert_eq!(x.gcd(&y).unwrap(), g.clone());
        prop_assert_eq!(x.gcd_bin(&y).unwrap(), g.clone());
        let (d, s, t) = x.gcd_ext(&y).unwrap();
        prop_assert_eq!(d, g.clone());
        prop_assert_eq!(x.mul(&s).unwrap().add(&y.mul(&t).unwrap()).unwrap(), g);
    }

    #[test]
    fn exponent_variants_agree(a in any::<u64>(), b in any::<u64>(), m in 3u64..) {
        let m = m | 1;
        let expect = Bn::from_dig(pow_mod_u128(a as u128, b as u128, m as u128) as u64);
        let (x, e, n) = (Bn::from_dig(a), Bn::from_dig(b), Bn::from_dig(m));
        prop_assert_eq!(x.mxp_basic(&e, &n).unwrap(), expect.clone());
        prop_assert_eq!(x.mxp_slide(&e, &n).unwrap(), expect.clone());
        prop_assert_eq!(x.mxp_monty(&e, &n).unwrap(), expect.clone());
        prop_assert_eq!(x.mxp(&e, &n).unwrap(), expect);
    }

    #[test]
    fn simultaneous_exponent(a in any::<u64>(), b in any::<u64>(), e in any::<u32>(), f in any::<u32>(), m in 3u64..) {
        let m = m | 1;
        let n = Bn::from_dig(m);
        let lhs = mxp_sim(
            &[Bn::from_dig(a), Bn::from_dig(b)],
            &[Bn::from_dig(e as u64), Bn::from_dig(f as u64)],
            &n,
        ).unwrap();
        let rhs = pow_mod_u128(a as u128, e as u128, m as u128) * pow_mod_u128(b as u128, f as u128, m as u128) % m as u128;
        prop_assert_eq!(lhs, Bn::from_dig(rhs as u64));
    }

    #[test]
    fn reduction_contexts_agree(a in any::<u128>(), m in 3u64..) {
        let m = m | 1;
        let ctx = ModCtx::new(&Bn::from_dig(m)).unwrap();
        let x = bn_from_u128(a);
        let mont = ctx.to_internal(&x).unwrap();
        prop_assert_eq!(ctx.from_internal(&mont).unwrap(), Bn::from_dig((a % m as u128) as u64));
        prop_assert_eq!(x.modp(&Bn::from_dig(m)).unwrap(), Bn::from_dig((a % m as u128) as u64));
    }
}
