//! Group axioms on every curve family, through the shared group layer

use proptest::prelude::*;
use relic::algorithms::ec::{self, CurveGroup};
use relic::algorithms::{ep, ep2, fb, Bn, EdCurve};
use relic_tests::test_rng;

fn group_axioms<G: CurveGroup>(g: &G, seed: u64) -> Result<(), TestCaseError> {
    let mut rng = test_rng(seed);
    let base = g.generator();
    let mut pt = || {
        let k = Bn::rand_mod(&mut rng, g.order()).unwrap();
        (ec::mul_basic(g, &base, &k).unwrap(), k)
    };
    let (p, k) = pt();
    let (q, l) = pt();
    let (r, _) = pt();

    prop_assert!(g.eq(&g.add(&p, &q), &g.add(&q, &p)));
    prop_assert!(g.eq(&g.add(&g.add(&p, &q), &r), &g.add(&p, &g.add(&q, &r))));
    prop_assert!(g.eq(&g.add(&p, &g.infinity()), &p));
    prop_assert!(g.is_infty(&g.add(&p, &g.neg(&p))));
    prop_assert!(g.eq(&g.dbl(&p), &g.add(&p, &p)));
    prop_assert!(g.eq(&g.norm(&g.dbl(&q)), &g.dbl(&q)));

    // multipliers and the scalar ring agree
    let kl = k.add(&l).unwrap().modp(g.order()).unwrap();
    prop_assert!(g.eq(&ec::mul(g, &base, &kl).unwrap(), &g.add(&p, &q)));
    prop_assert!(g.eq(&ec::mul_lwnaf(g, &base, &k).unwrap(), &p));
    prop_assert!(g.eq(&ec::mul_monty(g, &base, &k).unwrap(), &p));
    prop_assert!(g.eq(&ec::mul_sim(g, &base, &k, &base, &l).unwrap(), &g.add(&p, &q)));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prime_curves_are_groups(seed in any::<u64>()) {
        group_axioms(&ep::nist_p256().unwrap(), seed)?;
        group_axioms(&ep::secg_k256().unwrap(), seed)?;
        group_axioms(&ep::b12_p377().unwrap(), seed)?;
    }

    #[test]
    fn twists_are_groups(seed in any::<u64>()) {
        group_axioms(ep2::bn_p254().unwrap().curve(), seed)?;
        group_axioms(&ep2::b12_p381().unwrap(), seed)?;
    }

    #[test]
    fn edwards_and_binary_curves_are_groups(seed in any::<u64>()) {
        group_axioms(&EdCurve::ed25519().unwrap(), seed)?;
        group_axioms(&fb::nist_k283().unwrap(), seed)?;
        group_axioms(&fb::nist_b283().unwrap(), seed)?;
    }
}
