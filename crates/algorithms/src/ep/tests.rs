use super::*;
use crate::error::ErrorKind;
use crate::fp::{Bls377, Bls381, Bn254, Fp, FpParams, NistP256, SecgK256};
use crate::fpx::Fp2;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0xec_0001)
}

fn fp<P: FpParams>(s: &str) -> Fp<P> {
    Fp::read_str(s, 16).unwrap()
}

/// y^2 = x^3 + 5x - 5 through (1, 1), exercising the generic-a formulas
fn generic_curve() -> EpCurve<Fp<Bn254>> {
    EpCurve::new(
        "TEST-A5",
        Fp::from_dig(5),
        Fp::from_dis(-5),
        Fp::one(),
        Fp::one(),
        Fp::<Bn254>::modulus(),
        Bn::one(),
    )
    .unwrap()
}

fn check_formulas<F: Field>(c: &EpCurve<F>, rng: &mut ChaCha20Rng) {
    let o = EpPoint::infinity();
    for _ in 0..6 {
        let p = c.rand_any(rng);
        let q = c.rand_any(rng);
        let sum = c.add_basic(&p, &q);
        assert!(c.on_curve(&sum));

        let pp = c.dbl_projc(&p);
        let pj = c.dbl_jacob(&p);
        let sum_p = c.add_projc(&pp, &c.dbl_projc(&q));
        let sum_j = c.add_jacob(&pj, &c.dbl_jacob(&q));
        let expect = c.dbl_basic(&sum);
        assert!(c.eq(&sum_p, &expect));
        assert!(c.eq(&sum_j, &expect));

        // mixed operands
        assert!(c.eq(&c.add_projc(&pp, &q), &c.add_basic(&c.dbl_basic(&p), &q)));
        assert!(c.eq(&c.add_jacob(&pj, &q), &c.add_basic(&c.dbl_basic(&p), &q)));
        assert!(c.eq(&c.add_projc(&q, &pp), &c.add_projc(&pp, &q)));

        // exceptional inputs
        assert!(c.eq(&c.add_projc(&pp, &pp), &c.dbl_projc(&pp)));
        assert!(c.eq(&c.add_jacob(&pj, &pj), &c.dbl_jacob(&pj)));
        assert!(c.add_projc(&pp, &c.neg(&pp)).is_infty());
        assert!(c.add_jacob(&pj, &c.neg(&pj)).is_infty());
        assert!(c.add_basic(&p, &c.neg(&p)).is_infty());
        assert!(c.eq(&c.add_projc(&pp, &o), &pp));
        assert!(c.eq(&c.add_jacob(&o, &pj), &pj));
        assert!(c.eq(&c.add(&p, &o), &p));
        assert!(c.dbl(&o).is_infty());

        // associativity and commutativity through the configured law
        let r = c.rand_any(rng);
        let lhs = c.add(&c.add(&p, &q), &r);
        let rhs = c.add(&p, &c.add(&q, &r));
        assert!(c.eq(&lhs, &rhs));
        assert!(c.eq(&c.add(&p, &q), &c.add(&q, &p)));
        assert!(c.eq(&c.sub(&lhs, &r), &c.add(&p, &q)));
    }
}

#[test]
fn test_formula_families_agree() {
    let mut rng = rng();
    let p256 = nist_p256().unwrap();
    assert_eq!(p256.opts().0, Opt::Minus3);
    check_formulas(&p256, &mut rng);

    let k256 = secg_k256().unwrap();
    assert_eq!(k256.opts(), (Opt::Zero, Opt::Tiny(7)));
    check_formulas(&k256, &mut rng);

    let generic = generic_curve();
    assert_eq!(generic.opts(), (Opt::Tiny(5), Opt::Tiny(-5)));
    check_formulas(&generic, &mut rng);

    let twist = EpCurve::<Fp2<Bls381>>::new(
        "TEST-FP2",
        Fp2::zero(),
        Fp2::from_dig(4),
        Fp2::zero(),
        Fp2::from_dig(2),
        Bn::one(),
        Bn::one(),
    )
    .unwrap();
    check_formulas(&twist, &mut rng);
}

#[test]
fn test_opt_shapes() {
    type F = Fp<Bn254>;
    assert_eq!(Opt::of(&F::zero()), Opt::Zero);
    assert_eq!(Opt::of(&F::one()), Opt::One);
    assert_eq!(Opt::of(&F::from_dig(2)), Opt::Two);
    assert_eq!(Opt::of(&F::from_dis(-3)), Opt::Minus3);
    assert_eq!(Opt::of(&F::from_dis(-16)), Opt::Tiny(-16));
    assert_eq!(Opt::of(&F::from_dig(17)), Opt::Huge);
    let x = F::from_dig(1234);
    for c in [F::from_dig(2), F::from_dis(-3), F::from_dis(-11), F::from_dig(9), F::from_dig(100)] {
        assert_eq!(Opt::of(&c).apply(&x, &c), x.mul(&c));
    }
}

fn check_subgroup<F: Field>(c: &EpCurve<F>) {
    let g = c.gen();
    assert!(c.on_curve(&g));
    assert!(c.is_valid(&g));
    assert!(ec::mul_basic(c, &g, c.ord()).unwrap().is_infty());
    let o = EpPoint::infinity();
    assert!(c.on_curve(&o));
    assert!(!c.is_valid(&o));
}

#[test]
fn test_named_curves() {
    check_subgroup(&nist_p256().unwrap());
    check_subgroup(&secg_k256().unwrap());
    check_subgroup(&bn_p254().unwrap());
    check_subgroup(&b12_p381().unwrap());
    check_subgroup(&b12_p377().unwrap());
}

#[test]
fn test_known_multiples() {
    let c = nist_p256().unwrap();
    let two = c.norm(&c.dbl(&c.gen()));
    assert_eq!(two.x, fp::<NistP256>("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"));
    assert_eq!(two.y, fp::<NistP256>("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"));

    let c = secg_k256().unwrap();
    let two = c.norm(&c.mul(&c.gen(), &Bn::from_dig(2)).unwrap());
    assert_eq!(two.x, fp::<SecgK256>("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"));
    assert_eq!(two.y, fp::<SecgK256>("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"));
}

fn check_multipliers<F: Field>(c: &EpCurve<F>, rng: &mut ChaCha20Rng) {
    let g = c.gen();
    let r = c.ord().clone();
    let mut ks = vec![Bn::one(), Bn::from_dig(2), r.sub_dig(1).unwrap(), Bn::from_i64(-77)];
    for _ in 0..4 {
        ks.push(Bn::rand_mod(rng, &r).unwrap());
    }
    assert!(c.mul(&g, &Bn::zero()).unwrap().is_infty());
    assert!(c.mul(&g, &r).unwrap().is_infty());
    assert!(c.eq(&c.mul(&g, &r.sub_dig(1).unwrap()).unwrap(), &c.neg(&g)));
    let p = c.rand(rng).unwrap();
    for k in &ks {
        let e = ec::mul_basic(c, &p, k).unwrap();
        assert!(c.eq(&c.mul(&p, k).unwrap(), &e));
        assert!(c.eq(&c.mul_glv(&p, k).unwrap(), &e));
        assert!(c.eq(&c.mul_glv_reg(&p, k).unwrap(), &e));
        assert!(c.eq(&ec::mul_lwreg(c, &p, k).unwrap(), &e));
        assert!(c.eq(&c.mul_gen(k).unwrap(), &ec::mul_basic(c, &g, k).unwrap()));

        let l = k.add_dig(12345).unwrap();
        let both = c.add(&e, &ec::mul_basic(c, &g, &l).unwrap());
        assert!(c.eq(&c.mul_sim(&p, k, &g, &l).unwrap(), &both));
        assert!(c.eq(&c.mul_sim_gen(&l, &p, k).unwrap(), &both));
    }
    let table = c.mul_pre(&p).unwrap();
    assert!(c.eq(&c.mul_fix(&table, &ks[4]).unwrap(), &c.mul(&p, &ks[4]).unwrap()));
    assert!(c.eq(&c.mul_dig(&p, 10).unwrap(), &c.mul(&p, &Bn::from_dig(10)).unwrap()));
}

#[test]
fn test_scalar_multiplication() {
    let mut rng = rng();
    let k256 = secg_k256().unwrap();
    assert!(k256.endo().is_some());
    check_multipliers(&k256, &mut rng);
    let p256 = nist_p256().unwrap();
    assert!(p256.endo().is_none());
    check_multipliers(&p256, &mut rng);
    check_multipliers(&b12_p381().unwrap(), &mut rng);
}

#[test]
fn test_endomorphism_rejected() {
    let c = nist_p256().unwrap();
    let err = c.with_endo(Fp::from_dig(3), Bn::from_dig(5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoValid);
}

#[test]
fn test_multi_scalar() {
    let mut rng = rng();
    let c = bn_p254().unwrap();
    let points: Vec<_> = (0..6).map(|_| c.rand(&mut rng).unwrap()).collect();
    let ks: Vec<_> = (0..6).map(|_| Bn::rand_mod(&mut rng, c.ord()).unwrap()).collect();
    let mut e = EpPoint::infinity();
    for (p, k) in points.iter().zip(&ks) {
        e = c.add(&e, &c.mul(p, k).unwrap());
    }
    assert!(c.eq(&c.mul_sim_lot(&points, &ks).unwrap(), &e));
}

#[test]
fn test_normalization_and_blinding() {
    let mut rng = rng();
    let c = nist_p256().unwrap();
    let mut pts = vec![c.dbl(&c.gen()), EpPoint::infinity(), c.gen(), c.rand(&mut rng).unwrap()];
    let expect: Vec<_> = pts.iter().map(|p| c.norm(p)).collect();
    c.norm_sim(&mut pts).unwrap();
    for (a, b) in pts.iter().zip(&expect) {
        assert!(a.is_infty() || a.coord == Coord::Basic);
        assert!(c.eq(a, b));
    }
    let p = c.rand(&mut rng).unwrap();
    let b = c.blind(&p, &mut rng);
    assert!(c.eq(&b, &p));
    assert!(c.eq(&ec::mul_monty_blind(&c, &p, &Bn::from_dig(9), &mut rng).unwrap(), &c.mul_dig(&p, 9).unwrap()));
}

fn check_codec<F: Field>(c: &EpCurve<F>, rng: &mut ChaCha20Rng) {
    for _ in 0..4 {
        let p = c.rand(rng).unwrap();
        for pack in [false, true] {
            let mut out = vec![0u8; c.size_bin(&p, pack)];
            c.write_bin(&p, &mut out, pack).unwrap();
            assert_eq!(out[0] & 0xfe, if pack { 0x02 } else { 0x04 });
            assert!(c.eq(&c.read_bin(&out).unwrap(), &p));
        }
    }
    let o = EpPoint::infinity();
    let mut out = [0xffu8; 1];
    c.write_bin(&o, &mut out, true).unwrap();
    assert_eq!(out, [0x00]);
    assert!(c.read_bin(&out).unwrap().is_infty());
}

#[test]
fn test_point_codec() {
    let mut rng = rng();
    let c = nist_p256().unwrap();
    check_codec(&c, &mut rng);
    check_codec(&b12_p381().unwrap(), &mut rng);

    let g = c.gen();
    let mut out = vec![0u8; 65];
    c.write_bin(&g, &mut out, false).unwrap();
    assert_eq!(c.write_bin(&g, &mut out[..33], false).unwrap_err().kind(), ErrorKind::NoBuffer);
    assert_eq!(c.read_bin(&out[..64]).unwrap_err().kind(), ErrorKind::NoBuffer);
    assert_eq!(c.read_bin(&[]).unwrap_err().kind(), ErrorKind::NoBuffer);

    let mut bad = out.clone();
    bad[64] ^= 1;
    assert_eq!(c.read_bin(&bad).unwrap_err().kind(), ErrorKind::NoValid);
    bad[0] = 0x05;
    assert_eq!(c.read_bin(&bad).unwrap_err().kind(), ErrorKind::NoValid);
    assert_eq!(c.read_bin(&[0x00, 0x00]).unwrap_err().kind(), ErrorKind::NoBuffer);
}

#[test]
fn test_codec_zero_ordinate() {
    // y^2 = x^3 + 5x - 6 has the 2-torsion point (1, 0)
    let c = EpCurve::<Fp<NistP256>>::new(
        "TEST-T2",
        Fp::from_dig(5),
        Fp::from_dis(-6),
        Fp::one(),
        Fp::zero(),
        Bn::from_dig(2),
        Bn::one(),
    )
    .unwrap();
    let t = c.gen();
    let mut out = vec![0u8; c.size_bin(&t, true)];
    c.write_bin(&t, &mut out, true).unwrap();
    assert_eq!(out[0], 0x02);
    assert!(c.eq(&c.read_bin(&out).unwrap(), &t));
    out[0] = 0x03;
    assert_eq!(c.read_bin(&out).unwrap_err().kind(), ErrorKind::NoValid);
}

#[test]
fn test_hash_to_curve_vectors() {
    let c = nist_p256().unwrap();
    let dst = b"QUUX-V01-CS02-with-P256_XMD:SHA-256_SSWU_RO_";
    let cases = [
        (
            &b""[..],
            "2c15230b26dbc6fc9a37051158c95b79656e17a1a920b11394ca91c44247d3e4",
            "8a7a74985cc5c776cdfe4b1f19884970453912e9d31528c060be9ab5c43e8415",
        ),
        (
            &b"abc"[..],
            "0bb8b87485551aa43ed54f009230450b492fead5f1cc91658775dac4a3388a0f",
            "5c41b3d0731a27a7b14bc0bf0ccded2d8751f83493404c84a88e71ffd424212e",
        ),
    ];
    for (msg, x, y) in cases {
        let p = c.norm(&c.map_dst(msg, dst).unwrap());
        assert_eq!(p.x, fp::<NistP256>(x));
        assert_eq!(p.y, fp::<NistP256>(y));
    }
}

#[test]
fn test_hashing_lands_in_subgroup() {
    let k256 = secg_k256().unwrap();
    assert!(matches!(k256.map_const(), MapConst::Svdw { .. }));
    assert_eq!(k256.map_sswu(&Fp::one()).unwrap_err().kind(), ErrorKind::NoValid);
    let b381 = b12_p381().unwrap();
    let b377 = b12_p377().unwrap();
    for msg in [&b""[..], b"abc", b"a longer message to hash"] {
        assert!(k256.is_valid(&k256.map(msg).unwrap()));
        assert!(k256.is_valid(&k256.map_basic(msg).unwrap()));
        assert!(b381.is_valid(&b381.map(msg).unwrap()));
        assert!(b377.is_valid(&b377.map_dst(msg, b"OTHER").unwrap()));
    }
    assert!(!k256.eq(&k256.map(b"abc").unwrap(), &k256.map_dst(b"abc", b"OTHER").unwrap()));

    let p256 = nist_p256().unwrap();
    assert_eq!(p256.map_const().z(), &Fp::from_dis(-10));
    assert_eq!(p256.map_svdw(&Fp::one()).unwrap_err().kind(), ErrorKind::NoValid);
}

#[test]
fn test_cofactor_clearing() {
    let mut rng = rng();
    let c = b12_p381().unwrap();
    let p = c.rand_any(&mut rng);
    assert!(c.on_curve(&p));
    assert!(!c.is_valid(&p));
    assert!(c.is_valid(&c.mul_cof(&p).unwrap()));
}

fn check_lift<L: Field<Prime = Bn254>>(base: &EpCurve<Fp<Bn254>>, rng: &mut ChaCha20Rng) {
    let c = EpCurve::<L>::lift(base).unwrap();
    assert!(c.is_valid(&c.gen()));
    let n = c.cofactor().mul(c.ord()).unwrap();
    let p = c.rand_any(rng);
    assert!(ec::mul_lwnaf(&c, &p, &n).unwrap().is_infty());
    assert!(c.is_valid(&c.map(b"lift").unwrap()));
}

#[test]
fn test_lifted_curves() {
    let mut rng = rng();
    let base = bn_p254().unwrap();
    check_lift::<crate::fpx::Fp3<Bn254>>(&base, &mut rng);
    check_lift::<crate::fpx::Fp4<Bn254>>(&base, &mut rng);

    let p = Bn::from_dig(101);
    let t = Bn::from_i64(-7);
    assert_eq!(frb_trace(&t, &p, 0).unwrap(), Bn::from_dig(2));
    assert_eq!(frb_trace(&t, &p, 1).unwrap(), t);
    assert_eq!(frb_trace(&t, &p, 2).unwrap(), Bn::from_i64(49 - 202));
}

#[test]
fn test_generator_off_curve_rejected() {
    let err = EpCurve::<Fp<Bls377>>::new(
        "BAD",
        Fp::zero(),
        Fp::one(),
        Fp::from_dig(5),
        Fp::from_dig(5),
        Bn::one(),
        Bn::one(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoValid);
}
