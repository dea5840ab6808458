use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0xe4)
}

fn check_twist<T: Field>(g2: &EpX<T>, rng: &mut ChaCha20Rng) {
    let c = g2.curve();
    let q = g2.gen();
    assert!(g2.is_valid(&q));
    assert!(!g2.is_valid(&EpPoint::infinity()));
    assert!(ec::mul_lwnaf(c, &q, g2.ord()).unwrap().is_infty());

    // ψ acts as p mod r on G2
    let lambda = Fp::<T::Prime>::modulus().modp(g2.ord()).unwrap();
    let q = g2.rand(rng).unwrap();
    assert!(c.eq(&g2.psi(&q), &ec::mul_lwnaf(c, &q, &lambda).unwrap()));
    assert!(c.eq(&g2.psi_n(&q, 3), &g2.psi(&g2.psi(&g2.psi(&q)))));

    let r = g2.ord().clone();
    let k = Bn::rand_mod(rng, &r).unwrap();
    let l = Bn::from_i64(-7);
    assert!(c.eq(&g2.mul(&q, &k).unwrap(), &ec::mul_lwnaf(c, &q, &k).unwrap()));
    assert!(c.eq(&g2.mul_gen(&l).unwrap(), &ec::mul_lwnaf(c, &g2.gen(), &l).unwrap()));
    assert!(g2.mul(&q, &r).unwrap().is_infty());
    let both = c.add(&g2.mul(&q, &k).unwrap(), &g2.mul(&g2.gen(), &l).unwrap());
    assert!(c.eq(&g2.mul_sim(&q, &k, &g2.gen(), &l).unwrap(), &both));

    let any = c.rand_any(rng);
    assert!(c.on_curve(&any));
    assert!(!g2.is_valid(&any));
    assert!(g2.is_valid(&g2.mul_cof(&any).unwrap()));
    let h = g2.map(b"abc").unwrap();
    assert!(g2.is_valid(&h));
    assert!(!c.eq(&h, &g2.map(b"abd").unwrap()));

    for pack in [false, true] {
        let mut out = vec![0u8; g2.size_bin(&q, pack)];
        g2.write_bin(&q, &mut out, pack).unwrap();
        assert!(c.eq(&g2.read_bin(&out).unwrap(), &q));
    }
}

#[test]
fn test_b24_p315_twist() {
    let g2 = b24_p315().unwrap();
    assert_eq!(g2.family(), Family::B24);
    assert_eq!(g2.twist(), Twist::D);
    assert!(g2.seed().is_neg());
    check_twist(&g2, &mut rng());
}

#[test]
fn test_b48_p378_twist() {
    let g2 = b48_p378().unwrap();
    assert_eq!(g2.family(), Family::B48);
    assert_eq!(g2.twist(), Twist::M);
    check_twist(&g2, &mut rng());
}

#[test]
fn test_k16_p361_twist() {
    let g2 = k16_p361().unwrap();
    assert_eq!(g2.family(), Family::K16);
    assert!(g2.curve().b().is_zero());
    check_twist(&g2, &mut rng());
}

#[test]
fn test_k18_p372_twist() {
    let g2 = k18_p372().unwrap();
    assert_eq!(g2.family(), Family::K18);
    check_twist(&g2, &mut rng());
}

#[test]
fn test_ss_p383_twist() {
    let g2 = ss_p383().unwrap();
    assert_eq!(g2.family(), Family::Ss);
    assert!(g2.seed().is_zero());
    // ψ is negation on the supersingular curve
    let q = g2.gen();
    assert!(g2.curve().eq(&g2.psi(&q), &g2.curve().neg(&q)));
    check_twist(&g2, &mut rng());
}

#[test]
fn test_family_identity_rejects_wrong_family() {
    let g2 = b24_p315().unwrap();
    let curve = g2.curve().clone();
    let err = EpX::new::<crate::fpx::Fp24<crate::fp::Bls315>>(curve, Twist::D, Family::K16, g2.seed().clone()).unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::NoValid);
}

#[test]
fn test_generator_outside_g2_rejected() {
    let mut rng = rng();
    let g2 = k18_p372().unwrap();
    let c = g2.curve();
    let off = c.rand_any(&mut rng);
    let bad = EpCurve::new("BAD", *c.a(), *c.b(), off.x, off.y, c.ord().clone(), c.cofactor().clone()).unwrap();
    let err = EpX::new::<crate::fpx::Fp18<crate::fp::Kss372>>(bad, Twist::D, Family::K18, g2.seed().clone()).unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::NoValid);
}
