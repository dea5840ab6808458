//! End-to-end scenarios across the integer, field, curve and pairing layers

use relic::algorithms::ec;
use relic::algorithms::fp::{Bls381, Bn254};
use relic::algorithms::{ep, ep2, fb, Bn, EdCurve, EpPoint, ErrorKind, Field, Fp, Pc};
use relic::core::{err_clear, err_get_code, err_get_kind, guard, RLC_ERR, RLC_OK};
use relic_tests::{bn_from_hex, test_rng};

const G1_X: &str = "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";
const G1_Y: &str = "08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1";

#[test]
fn fermat_exponent_on_bls12_381_prime() {
    let p = Fp::<Bls381>::modulus();
    let b = p.sub_dig(2).unwrap();
    let two = Bn::from_dig(2);
    assert!(two.mxp(&b, &p).unwrap().mul(&two).unwrap().modp(&p).unwrap().is_one());
    assert!(two.mxp(&p.sub_dig(1).unwrap(), &p).unwrap().is_one());
    assert_eq!(two.mxp_basic(&b, &p).unwrap(), two.mxp_monty(&b, &p).unwrap());
}

#[test]
fn square_root_of_four_on_bn254() {
    let four = Fp::<Bn254>::from_dig(4);
    let r = four.srt().unwrap();
    let two = Fp::<Bn254>::from_dig(2);
    assert!(r == two || r == two.neg());
    assert_eq!(r.sqr(), four);
}

#[test]
fn order_annihilates_bls12_381_generators() {
    let g1 = ep::b12_p381().unwrap();
    let g2 = ep2::b12_p381().unwrap();
    assert!(g1.mul(&g1.gen(), g1.ord()).unwrap().is_infty());
    assert!(g2.mul(&g2.gen(), g2.ord()).unwrap().is_infty());
    assert!(ec::mul_basic(&g1, &g1.gen(), g1.ord()).unwrap().is_infty());
}

#[test]
fn bilinearity_with_small_scalars() {
    let pc = Pc::b12_p381().unwrap();
    let (a, b) = (Bn::from_dig(3), Bn::from_dig(5));
    let p = pc.g1_mul_gen(&a).unwrap();
    let q = pc.g2_mul_gen(&b).unwrap();
    let lhs = pc.map(&p, &q).unwrap();
    let rhs = pc.gt_exp(&pc.gt_get_gen(), &Bn::from_dig(15)).unwrap();
    assert_eq!(lhs, rhs);
    assert!(!pc.gt_is_unity(&pc.map(&pc.g1_get_gen(), &pc.g2_get_gen()).unwrap()));
}

#[test]
fn hash_to_g1_lands_in_subgroup() {
    let g1 = ep::b12_p381().unwrap();
    let p = g1.map(b"hello").unwrap();
    assert!(g1.is_valid(&p));
    assert!(g1.mul(&p, g1.ord()).unwrap().is_infty());
    assert!(g1.eq(&p, &g1.map(b"hello").unwrap()));
    assert!(!g1.eq(&p, &g1.map(b"hello!").unwrap()));
    assert!(!g1.eq(&p, &g1.map_dst(b"hello", b"OTHER-DST").unwrap()));

    let g2 = ep2::b12_p381().unwrap();
    let q = g2.map(b"hello").unwrap();
    assert!(g2.is_valid(&q));
    assert!(g2.mul(&q, g2.ord()).unwrap().is_infty());
}

#[test]
fn points_rewrite_byte_exact() {
    let g1 = ep::b12_p381().unwrap();
    let mut rng = test_rng(6);
    let p = g1.rand(&mut rng).unwrap();
    for pack in [true, false] {
        let mut first = vec![0u8; g1.size_bin(&p, pack)];
        g1.write_bin(&p, &mut first, pack).unwrap();
        let back = g1.read_bin(&first).unwrap();
        let mut second = vec![0u8; g1.size_bin(&back, pack)];
        g1.write_bin(&back, &mut second, pack).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn bls12_381_generator_encoding() {
    let g1 = ep::b12_p381().unwrap();
    let gen = g1.gen();
    let mut full = vec![0u8; g1.size_bin(&gen, false)];
    g1.write_bin(&gen, &mut full, false).unwrap();
    assert_eq!(hex::encode(&full), format!("04{G1_X}{G1_Y}"));
    let mut pack = vec![0u8; g1.size_bin(&gen, true)];
    g1.write_bin(&gen, &mut pack, true).unwrap();
    assert_eq!(hex::encode(&pack), format!("03{G1_X}"));
    assert!(g1.eq(&g1.read_bin(&pack).unwrap(), &gen));
    assert_eq!(gen.x.to_bn(), bn_from_hex(G1_X));
}

#[test]
fn endomorphism_multipliers_match_generic() {
    let mut rng = test_rng(7);
    let k256 = ep::secg_k256().unwrap();
    let p = k256.rand(&mut rng).unwrap();
    let k = Bn::rand_mod(&mut rng, k256.ord()).unwrap();
    let plain = ec::mul_basic(&k256, &p, &k).unwrap();
    assert!(k256.eq(&k256.mul_glv(&p, &k).unwrap(), &plain));
    assert!(k256.eq(&k256.mul_glv_reg(&p, &k).unwrap(), &plain));

    let g2 = ep2::bn_p254().unwrap();
    let q = g2.rand(&mut rng).unwrap();
    let plain = ec::mul_basic(g2.curve(), &q, &k).unwrap();
    assert!(g2.curve().eq(&g2.mul_gls(&q, &k).unwrap(), &plain));
}

#[test]
fn aggregate_signature_verifies_with_one_product() {
    // sig_i = [sk_i] H(m_i); prod e(H(m_i), pk_i) e(-sum sig_i, g2) = 1
    let pc = Pc::bn_p254().unwrap();
    let mut rng = test_rng(8);
    let msgs: [&[u8]; 3] = [b"alpha", b"beta", b"gamma"];
    let mut hs = Vec::new();
    let mut pks = Vec::new();
    let mut agg = EpPoint::infinity();
    for m in msgs {
        let sk = Bn::rand_mod(&mut rng, pc.g1_get_ord()).unwrap();
        let h = pc.g1_map(m).unwrap();
        agg = pc.g1_add(&agg, &pc.g1_mul(&h, &sk).unwrap());
        hs.push(h);
        pks.push(pc.g2_mul_gen(&sk).unwrap());
    }
    hs.push(pc.g1_neg(&agg));
    pks.push(pc.g2_get_gen());
    assert!(pc.gt_is_unity(&pc.map_sim(&hs, &pks).unwrap()));

    // a forged aggregate fails
    let last = hs.len() - 1;
    hs[last] = pc.g1_neg(&pc.g1_dbl(&agg));
    assert!(!pc.gt_is_unity(&pc.map_sim(&hs, &pks).unwrap()));
}

#[test]
fn subgroup_failures_reach_the_error_slot() {
    err_clear();
    let pc = Pc::b12_p381().unwrap();
    let g1 = pc.pairing().g1();
    let mut rng = test_rng(9);
    // a point of the full curve group, outside the order-r subgroup
    let p = g1.rand_any(&mut rng);
    assert!(g1.on_curve(&p));
    assert!(!g1.is_valid(&p));
    let mut out = vec![0u8; g1.size_bin(&p, true)];
    g1.write_bin(&p, &mut out, true).unwrap();
    assert!(g1.read_bin(&out).is_ok());

    assert_eq!(err_get_code(), RLC_OK);
    let err = guard(pc.g1_read_bin(&out)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoValid);
    assert_eq!(err_get_code(), RLC_ERR);
    assert_eq!(err_get_kind(), Some(ErrorKind::NoValid));

    err_clear();
    let short = guard(pc.g1_read_bin(&out[..10])).unwrap_err();
    assert_eq!(short.kind(), ErrorKind::NoBuffer);
    assert_eq!(err_get_kind(), Some(ErrorKind::NoBuffer));
    err_clear();
    assert!(guard(Fp::<Bls381>::zero().inv()).is_err());
    assert_eq!(err_get_kind(), Some(ErrorKind::NoValid));
    err_clear();
}

#[test]
fn edwards_and_binary_curves_share_the_group_layer() {
    let mut rng = test_rng(10);
    let ed = EdCurve::ed25519().unwrap();
    let g = ed.gen();
    assert!(ed.mul(&g, ed.ord()).unwrap().is_neutral());
    let k = Bn::rand_mod(&mut rng, ed.ord()).unwrap();
    assert!(ed.eq(&ed.mul(&g, &k).unwrap(), &ec::mul_slide(&ed, &g, &k).unwrap()));
    assert!(ed.is_valid(&ed.map(b"hello").unwrap()));

    let k283 = fb::nist_k283().unwrap();
    let p = k283.rand(&mut rng).unwrap();
    let k = Bn::rand_mod(&mut rng, k283.ord()).unwrap();
    assert!(k283.eq(&k283.mul_tnaf(&p, &k).unwrap(), &ec::mul_basic(&k283, &p, &k).unwrap()));
    assert!(k283.mul(&p, k283.ord()).unwrap().is_infty());
}
