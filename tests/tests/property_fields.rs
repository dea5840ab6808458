//! Field axioms over the prime fields, the towers and GF(2^283)

use proptest::prelude::*;
use relic::algorithms::fp::{Bls377, Bls381, Bn254, NistP256};
use relic::algorithms::fpx::{Fp3, Fp4, Fp9};
use relic::algorithms::{Fb, Field, Fp, Fp12, Fp2, Fp6, Tower};
use relic::api::Serialize;
use relic_tests::test_rng;

fn field_axioms<F: Field>(seed: u64) -> Result<(), TestCaseError> {
    let mut rng = test_rng(seed);
    let (a, b, c) = (F::rand(&mut rng), F::rand(&mut rng), F::rand(&mut rng));

    prop_assert_eq!(a.add(&b), b.add(&a));
    prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    prop_assert_eq!(a.add(&F::zero()), a);
    prop_assert!(a.add(&a.neg()).is_zero());
    prop_assert_eq!(a.sub(&b), a.add(&b.neg()));
    prop_assert_eq!(a.mul(&b), b.mul(&a));
    prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
    prop_assert_eq!(a.mul(&F::one()), a);
    prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    prop_assert_eq!(a.sqr(), a.mul(&a));
    prop_assert_eq!(a.dbl(), a.add(&a));
    prop_assert_eq!(a.hlv().dbl(), a);
    if !a.is_zero() {
        prop_assert_eq!(a.mul(&a.inv().unwrap()), F::one());
    }
    prop_assert!(F::zero().inv().is_err());

    let xs = [a, b, c];
    let inv = F::inv_sim(&xs).unwrap();
    for (x, y) in xs.iter().zip(&inv) {
        prop_assert_eq!(x.mul(y), F::one());
    }

    let mut out = vec![0u8; a.size_bin(false)];
    prop_assert_eq!(out.len(), F::BYTES);
    a.write_bin(&mut out, false).unwrap();
    prop_assert_eq!(F::read_bin(&out).unwrap(), a);
    Ok(())
}

fn frobenius_order<F: Field>(tower: &Tower<F::Prime>, seed: u64) -> Result<(), TestCaseError> {
    let mut rng = test_rng(seed);
    let a = F::rand(&mut rng);
    let b = F::rand(&mut rng);
    prop_assert_eq!(a.frb(tower, F::DEGREE), a);
    prop_assert_eq!(a.mul(&b).frb(tower, 1), a.frb(tower, 1).mul(&b.frb(tower, 1)));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prime_fields_are_fields(seed in any::<u64>()) {
        field_axioms::<Fp<Bls381>>(seed)?;
        field_axioms::<Fp<Bn254>>(seed)?;
        field_axioms::<Fp<NistP256>>(seed)?;
        field_axioms::<Fp<Bls377>>(seed)?;
    }

    #[test]
    fn towers_are_fields(seed in any::<u64>()) {
        field_axioms::<Fp2<Bls381>>(seed)?;
        field_axioms::<Fp4<Bn254>>(seed)?;
        field_axioms::<Fp6<Bls381>>(seed)?;
        field_axioms::<Fp12<Bn254>>(seed)?;
        field_axioms::<Fp3<Bls377>>(seed)?;
        field_axioms::<Fp9<Bls377>>(seed)?;
    }

    #[test]
    fn frobenius_is_multiplicative(seed in any::<u64>()) {
        let t381 = Tower::<Bls381>::new().unwrap();
        let t377 = Tower::<Bls377>::new().unwrap();
        frobenius_order::<Fp2<Bls381>>(&t381, seed)?;
        frobenius_order::<Fp12<Bls381>>(&t381, seed)?;
        frobenius_order::<Fp9<Bls377>>(&t377, seed)?;
    }

    #[test]
    fn inversion_variants_agree(seed in any::<u64>()) {
        let mut rng = test_rng(seed);
        let a = Fp::<Bls381>::random(&mut rng);
        prop_assume!(!a.is_zero());
        let expect = a.inv_basic().unwrap();
        prop_assert_eq!(a.mul(&expect), Fp::one());
        prop_assert_eq!(a.inv_binar().unwrap(), expect);
        prop_assert_eq!(a.inv_monty().unwrap(), expect);
        prop_assert_eq!(a.inv_exgcd().unwrap(), expect);
        prop_assert_eq!(a.inv_divst().unwrap(), expect);
        prop_assert_eq!(a.inv_jmpds().unwrap(), expect);
    }

    #[test]
    fn square_roots_square_back(seed in any::<u64>()) {
        let mut rng = test_rng(seed);
        let a = Fp::<Bls377>::random(&mut rng);
        let s = a.sqr();
        let r = s.srt().unwrap();
        prop_assert!(r == a || r == a.neg());
        let b = Fp2::<Bls381>::rand(&mut rng).sqr();
        let r = b.srt().unwrap();
        prop_assert_eq!(r.sqr(), b);
    }

    #[test]
    fn binary_field_axioms(seed in any::<u64>()) {
        let mut rng = test_rng(seed);
        let (a, b, c) = (Fb::random(&mut rng), Fb::random(&mut rng), Fb::random(&mut rng));
        prop_assert!(a.add(&a).is_zero());
        prop_assert_eq!(a.mul(&b), b.mul(&a));
        prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        prop_assert_eq!(a.sqr(), a.mul(&a));
        prop_assert_eq!(a.srt().sqr(), a);
        prop_assert_eq!(a.add(&b).trc(), a.trc() ^ b.trc());
        if !a.is_zero() {
            prop_assert!(a.mul(&a.inv().unwrap()).is_one());
        }
        if !a.trc() {
            let x = a.slv().unwrap();
            prop_assert_eq!(x.sqr().add(&x), a);
        }
        let mut out = vec![0u8; a.size_bin(false)];
        a.write_bin(&mut out, false).unwrap();
        prop_assert_eq!(Fb::read_bin(&out).unwrap(), a);
    }
}
