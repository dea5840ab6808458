use super::*;
use crate::fp::Bls381;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0xe2)
}

fn check_twist<P: FpParams>(g2: &Ep2<P>, rng: &mut ChaCha20Rng) {
    let c = g2.curve();
    let q = g2.gen();
    assert!(g2.is_valid(&q));
    assert!(!g2.is_valid(&EpPoint::infinity()));
    assert!(ec::mul_basic(c, &q, g2.ord()).unwrap().is_infty());

    // ψ acts as p mod r on G2
    let lambda = Fp::<P>::modulus().modp(g2.ord()).unwrap();
    let q = g2.rand(rng).unwrap();
    assert!(c.eq(&g2.psi(&q), &ec::mul_basic(c, &q, &lambda).unwrap()));
    assert!(c.eq(&g2.psi_n(&q, 2), &g2.psi(&g2.psi(&q))));
    assert!(c.eq(&g2.psi(&c.dbl(&q)), &c.dbl(&g2.psi(&q))));

    let r = g2.ord().clone();
    let mut ks = vec![Bn::one(), r.sub_dig(1).unwrap(), Bn::from_i64(-5)];
    for _ in 0..3 {
        ks.push(Bn::rand_mod(rng, &r).unwrap());
    }
    for k in &ks {
        let e = ec::mul_lwnaf(c, &q, k).unwrap();
        assert!(c.eq(&g2.mul(&q, k).unwrap(), &e));
        assert!(c.eq(&g2.mul_gen(k).unwrap(), &ec::mul_lwnaf(c, &g2.gen(), k).unwrap()));
    }
    assert!(g2.mul(&q, &Bn::zero()).unwrap().is_infty());
    assert!(g2.mul(&q, &r).unwrap().is_infty());
    let both = c.add(&g2.mul(&q, &ks[3]).unwrap(), &g2.mul(&g2.gen(), &ks[4]).unwrap());
    assert!(c.eq(&g2.mul_sim(&q, &ks[3], &g2.gen(), &ks[4]).unwrap(), &both));
    assert!(c.eq(&g2.mul_dig(&q, 3).unwrap(), &c.add(&c.dbl(&q), &q)));

    // cofactor clearing and hashing
    let any = c.rand_any(rng);
    assert!(c.on_curve(&any));
    assert!(!g2.is_valid(&any));
    assert!(g2.is_valid(&g2.mul_cof(&any).unwrap()));
    let h = g2.map(b"abc").unwrap();
    assert!(g2.is_valid(&h));
    assert!(c.eq(&h, &g2.map_dst(b"abc", crate::ep::DEFAULT_DST).unwrap()));
    assert!(!c.eq(&h, &g2.map(b"abd").unwrap()));

    for pack in [false, true] {
        let mut out = vec![0u8; g2.size_bin(&q, pack)];
        g2.write_bin(&q, &mut out, pack).unwrap();
        assert!(c.eq(&g2.read_bin(&out).unwrap(), &q));
    }
}

#[test]
fn test_bn_p254_twist() {
    let g2 = bn_p254().unwrap();
    assert_eq!(g2.twist(), Twist::D);
    assert_eq!(g2.family(), Family::Bn);
    assert!(g2.seed().is_neg());
    check_twist(&g2, &mut rng());
}

#[test]
fn test_b12_p381_twist() {
    let g2 = b12_p381().unwrap();
    assert_eq!(g2.twist(), Twist::M);
    assert_eq!(g2.family(), Family::B12);
    check_twist(&g2, &mut rng());
}

#[test]
fn test_b12_p377_twist() {
    let g2 = b12_p377().unwrap();
    assert_eq!(g2.twist(), Twist::D);
    assert!(!g2.seed().is_neg());
    check_twist(&g2, &mut rng());
}

#[test]
fn test_b12_cofactor_formula() {
    let z = Bn::from_dig(0xd201_0000_0001_0000).neg();
    let h = curves::b12_cofactor(&z).unwrap();
    let expected = "5d543a95414e7f1091d50792876a202cd91de4547085abaa68a205b2e5a7ddfa\
                    628f1cb4d9e82ef21537e293a6691ae1616ec6e786f0c70cf1c38e31c7238e5";
    assert_eq!(h, Bn::read_str(expected, 16).unwrap());
}

#[test]
fn test_generator_outside_g2_rejected() {
    let mut rng = rng();
    let g2 = b12_p381().unwrap();
    let c = g2.curve();
    let off = c.rand_any(&mut rng);
    let bad = EpCurve::new("BAD", Fp2::zero(), *c.b(), off.x, off.y, c.ord().clone(), c.cofactor().clone()).unwrap();
    let err = Ep2::<Bls381>::new(bad, Twist::M, Family::B12, g2.seed().clone()).unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::NoValid);
}
