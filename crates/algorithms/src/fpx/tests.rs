use super::*;
use crate::error::ErrorKind;
use crate::fp::{Bls315, Bls377, Bls378, Bls381, Bn254, Kss361, Kss372, NistP256, Ss383};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use relic_api::Serialize;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x70e4)
}

fn tower<P: FpParams>() -> Tower<P> {
    Tower::new().unwrap()
}

/// Ring axioms, inversion and the Frobenius of one tower type
fn check_field<F: Field>(tower: &Tower<F::Prime>, rng: &mut ChaCha20Rng) {
    let a = F::rand(rng);
    let b = F::rand(rng);
    let c = F::rand(rng);

    assert_eq!(a.mul(&b), b.mul(&a));
    assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
    assert_eq!(a.sqr(), a.mul(&a));
    assert_eq!(a.dbl().hlv(), a);
    assert_eq!(a.sub(&a), F::zero());
    assert_eq!(a.add(&a.neg()), F::zero());
    assert_eq!(a.mul(&a.inv().unwrap()), F::one());
    assert_eq!(F::zero().inv().unwrap_err().kind(), ErrorKind::NoValid);

    let k = Fp::<F::Prime>::from_dig(5);
    assert_eq!(a.mul_fp(&k), a.mul(&F::from_base(k)));
    assert_eq!(a.mul_dig(5), a.mul_fp(&k));

    let p = Fp::<F::Prime>::modulus();
    assert_eq!(a.frb(tower, 1), a.exp(&p).unwrap());
    assert_eq!(a.frb(tower, F::DEGREE), a);
    assert_eq!(a.mul(&b).frb(tower, 1), a.frb(tower, 1).mul(&b.frb(tower, 1)));
    assert_eq!(a.norm(), b.norm().mul(&b.inv().unwrap().mul(&a).norm()));

    let bytes = a.to_bytes(false).unwrap();
    assert_eq!(bytes.len(), F::BYTES);
    assert_eq!(F::read_bin(&bytes).unwrap(), a);
}

/// Flat view through the root field
fn check_root<X: ExtField>(rng: &mut ChaCha20Rng) {
    let a = X::rand(rng);
    let mut c = [X::Root::zero(); MAX_ROOT_DEG];
    a.to_root(&mut c[..X::ROOT_DEG]);
    assert_eq!(X::from_root(&c[..X::ROOT_DEG]), a);

    assert_eq!(X::gen_pow(1), X::one().mul_gen());
    assert_eq!(a.mul_gen(), a.mul(&X::gen_pow(1)));
    let mut nr = [X::Root::zero(); MAX_ROOT_DEG];
    nr[0] = X::Root::one().mul_gen();
    assert_eq!(X::gen_pow(X::ROOT_DEG), X::from_root(&nr[..X::ROOT_DEG]));
}

fn check_srt<F: Field>(rng: &mut ChaCha20Rng) {
    let a = F::rand(rng);
    let s = a.sqr();
    let r = s.srt().unwrap();
    assert!(r == a || r == a.neg());
    assert!(s.is_sqr());
    assert_eq!(F::zero().srt(), Some(F::zero()));
}

// ============================================================================
// Tower setup
// ============================================================================

#[test]
fn test_tower_rejects_primes_without_towers() {
    let err = Tower::<NistP256>::new().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoCurve);
}

#[test]
fn test_tower_tables() {
    let t = tower::<Bn254>();
    for e in [2, 3, 4, 6, 8, 12, 24] {
        assert_eq!(t.table_fp2(e).unwrap().degree(), e);
    }
    for e in [3, 9, 18, 27, 54] {
        assert_eq!(t.table_fp(e).unwrap().degree(), e);
    }
    assert!(t.table_fp2(5).is_none());
    // θ^0 is fixed by the p-power map
    assert_eq!(*t.table_fp2(6).unwrap().constant(0), Fp2::one());
}

// ============================================================================
// Fp2
// ============================================================================

#[test]
fn test_fp2_products_agree() {
    let mut rng = rng();
    for _ in 0..8 {
        let a = Fp2::<Bls381>::rand(&mut rng);
        let b = Fp2::<Bls381>::rand(&mut rng);
        assert_eq!(a.mul_basic(&b), a.mul_lazy(&b));
        assert_eq!(a.sqr_basic(), a.sqr_lazy());
        assert_eq!(a.sqr_basic(), a.mul_basic(&a));
    }
}

#[test]
fn test_fp2_structure() {
    let mut rng = rng();
    let a = Fp2::<Bn254>::rand(&mut rng);
    let u = Fp2::<Bn254>::new(Fp::zero(), Fp::one());
    assert_eq!(u.sqr(), Fp2::from_dis(Bn254::QNR, 0));
    assert_eq!(a.mul_art(), a * u);
    assert_eq!(a.mul_nor(), a * Fp2::xi());
    assert_eq!(a.mul_dis(-3), a * Fp2::from_dis(-3, 0));
    assert_eq!(a.norm(), (a * a.conj()).c0);
    assert!(!Fp2::<Bn254>::xi().is_sqr());
}

#[test]
fn test_fp2_sgn0() {
    let one = Fp2::<Bn254>::one();
    assert!(one.sgn0());
    assert_eq!(one.neg().sgn0(), Fp::<Bn254>::one().neg().is_odd());
    assert!(Fp2::<Bn254>::new(Fp::zero(), Fp::one()).sgn0());
    assert!(!Fp2::<Bn254>::zero().sgn0());
}

#[test]
fn test_fp2_from_uniform() {
    let bytes = [0x5au8; 128];
    let a = Fp2::<Bls381>::from_uniform(&bytes).unwrap();
    assert_eq!(a.c0, a.c1);
    assert!(Fp2::<Bls381>::from_uniform(&bytes[..127]).is_err());
}

// ============================================================================
// Towers of every degree
// ============================================================================

#[test]
fn test_towers_over_fp2() {
    let t = tower::<Bn254>();
    let mut rng = rng();
    check_field::<Fp2<Bn254>>(&t, &mut rng);
    check_field::<Fp4<Bn254>>(&t, &mut rng);
    check_field::<Fp6<Bn254>>(&t, &mut rng);
    check_field::<Fp8<Bn254>>(&t, &mut rng);
    check_field::<Fp12<Bn254>>(&t, &mut rng);
    check_field::<Fp16<Bn254>>(&t, &mut rng);
    check_field::<Fp24<Bn254>>(&t, &mut rng);
    check_field::<Fp48<Bn254>>(&t, &mut rng);
}

#[test]
fn test_towers_over_fp3() {
    let t = tower::<Bls377>();
    let mut rng = rng();
    check_field::<Fp3<Bls377>>(&t, &mut rng);
    check_field::<Fp9<Bls377>>(&t, &mut rng);
    check_field::<Fp18<Bls377>>(&t, &mut rng);
    check_field::<Fp27<Bls377>>(&t, &mut rng);
    check_field::<Fp54<Bls377>>(&t, &mut rng);
}

#[test]
fn test_flat_view() {
    let mut rng = rng();
    check_root::<Fp4<Bls381>>(&mut rng);
    check_root::<Fp6<Bls381>>(&mut rng);
    check_root::<Fp12<Bls381>>(&mut rng);
    check_root::<Fp24<Bls381>>(&mut rng);
    check_root::<Fp3<Bls381>>(&mut rng);
    check_root::<Fp9<Bls381>>(&mut rng);
    check_root::<Fp18<Bls381>>(&mut rng);
}

#[test]
fn test_karatsuba_matches_schoolbook() {
    let mut rng = rng();
    let a = Fp12::<Bls381>::rand(&mut rng);
    let b = Fp12::<Bls381>::rand(&mut rng);
    assert_eq!(a * b, a.mul_basic(&b));
    assert_eq!(a.c0 * b.c0, a.c0.mul_basic(&b.c0));
    let x = Fp9::<Bls381>::rand(&mut rng);
    let y = Fp9::<Bls381>::rand(&mut rng);
    assert_eq!(x * y, x.mul_basic(&y));
}

#[test]
fn test_square_roots() {
    let mut rng = rng();
    check_srt::<Fp2<Bls381>>(&mut rng);
    check_srt::<Fp2<Bls377>>(&mut rng);
    check_srt::<Fp3<Bn254>>(&mut rng);
    check_srt::<Fp4<Bn254>>(&mut rng);
    check_srt::<Fp6<Bn254>>(&mut rng);
    check_srt::<Fp12<Bn254>>(&mut rng);

    let nr = Fp2::<Bls381>::xi();
    assert!(nr.srt().is_none());
    let v = Fp6::<Bn254>::gen_pow(1);
    assert!(v.srt().is_none());
}

#[test]
fn test_conjugate_is_order_two_frobenius() {
    let t = tower::<Bn254>();
    let mut rng = rng();
    let a = Fp12::<Bn254>::rand(&mut rng);
    assert_eq!(a.conj(), a.frb(&t, 6));
    let b = Fp4::<Bn254>::rand(&mut rng);
    assert_eq!(b.conj(), b.frb(&t, 2));
}

// ============================================================================
// Lazy reduction and sparse lines
// ============================================================================

#[test]
fn test_lazy_products() {
    let mut rng = rng();
    let a = Fp12::<Bn254>::rand(&mut rng);
    let b = Fp12::<Bn254>::rand(&mut rng);
    assert_eq!(a.mul_lazy(&b), a * b);
    assert_eq!(a.sqr_lazy(), a.sqr());
    assert_eq!(a.c1.mul_lazy(&b.c1), a.c1 * b.c1);

    let d = a.c0.c0.mul_unr(&b.c0.c0);
    assert_eq!(d.mul_gen().rdc(), (a.c0.c0 * b.c0.c0).mul_nor());
    assert_eq!(d.sub(&d).rdc(), Fp2::zero());
}

#[test]
fn test_sparse_line_products() {
    let mut rng = rng();
    let f = Fp12::<Bls381>::rand(&mut rng);
    let l0 = Fp2::rand(&mut rng);
    let l1 = Fp2::rand(&mut rng);
    let l3 = Fp2::rand(&mut rng);
    assert_eq!(f.mul_dxs_d(&l0, &l1, &l3), f * Fp12::from_line_d(&l0, &l1, &l3));
    assert_eq!(f.mul_dxs_m(&l0, &l1, &l3), f * Fp12::from_line_m(&l0, &l1, &l3));

    let g = f.c0;
    assert_eq!(g.mul_by_01(&l0, &l1), g * Fp6::new(l0, l1, Fp2::zero()));
    assert_eq!(g.mul_by_1(&l3), g * Fp6::new(Fp2::zero(), l3, Fp2::zero()));
}

// ============================================================================
// Cyclotomic subgroup
// ============================================================================

fn cyclotomic<P: FpParams>(t: &Tower<P>, rng: &mut ChaCha20Rng) -> Fp12<P> {
    Fp12::rand(rng).conv_cyc(t).unwrap()
}

#[test]
fn test_cyclotomic_membership() {
    let t = tower::<Bls381>();
    let mut rng = rng();
    let f = cyclotomic(&t, &mut rng);
    assert!(f.test_cyc(&t));
    assert!(!Fp12::<Bls381>::rand(&mut rng).test_cyc(&t));
    assert_eq!(f * f.inv_cyc(), Fp12::one());
}

#[test]
fn test_cyclotomic_squarings() {
    for seed in 0..2u64 {
        let t = tower::<Bn254>();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let f = cyclotomic(&t, &mut rng);
        let s = f.sqr();
        assert_eq!(f.sqr_cyc(), s);
        assert_eq!(f.sqr_pck().back_cyc().unwrap(), s);
        assert_eq!(f.sqr_pck().sqr_pck().back_cyc().unwrap(), s.sqr());
    }
}

#[test]
fn test_cyclotomic_decompression() {
    let t = tower::<Bls377>();
    let mut rng = rng();
    let mut batch = [cyclotomic(&t, &mut rng), cyclotomic(&t, &mut rng), Fp12::one()];
    let expected = batch;
    for x in batch.iter_mut() {
        *x = x.pck();
    }
    Fp12::back_cyc_sim(&mut batch).unwrap();
    assert_eq!(batch, expected);
    assert_eq!(expected[0].pck().upk(&t).unwrap(), expected[0]);
}

#[test]
fn test_cyclotomic_exponentiation() {
    let t = tower::<Bls381>();
    let mut rng = rng();
    let f = cyclotomic(&t, &mut rng);
    let e = Bn::read_str("d201000000010000", 16).unwrap();
    assert_eq!(f.exp_cyc(&e).unwrap(), f.exp(&e).unwrap());
    assert_eq!(f.exp_cyc(&e.neg()).unwrap(), f.exp(&e).unwrap().inv_cyc());
    assert_eq!(f.exp_cyc(&Bn::zero()).unwrap(), Fp12::one());

    let naf = crate::bn::rec_naf(&e, 2).unwrap();
    assert_eq!(f.exp_cyc_sps(&naf, false).unwrap(), f.exp(&e).unwrap());
    assert_eq!(f.exp_cyc_sps(&naf, true).unwrap(), f.exp(&e).unwrap().inv_cyc());
    assert_eq!(f.exp_cyc_sps(&[1, 0, -1], false).unwrap(), f.inv_cyc().exp_limbs(&[3]));
    assert!(f.exp_cyc_sps(&[2], false).is_err());
}

/// Squaring, inversion, powers and compression on one target field
fn check_target<F: Cyclotomic>(t: &Tower<F::Prime>, rng: &mut ChaCha20Rng) {
    let f = F::rand(rng).conv_cyc(t).unwrap();
    assert!(f.test_cyc(t));
    assert!(!F::rand(rng).test_cyc(t));
    assert_eq!(f.sqr_cyc(), f.sqr());
    assert_eq!(f.mul(&f.inv_cyc()), F::one());
    let e = Bn::read_str("-bfcfffff", 16).unwrap();
    assert_eq!(f.exp_cyc(&e).unwrap(), f.exp(&e).unwrap());

    let mut buf = [0u8; 1152];
    let buf = &mut buf[..F::PACK_BYTES];
    f.write_pck(buf).unwrap();
    assert_eq!(F::read_pck(buf, t).unwrap(), f);
    F::one().write_pck(buf).unwrap();
    assert_eq!(F::read_pck(buf, t).unwrap(), F::one());
    assert_eq!(f.write_pck(&mut [0u8; 3]).unwrap_err().kind(), ErrorKind::NoBuffer);
}

#[test]
fn test_target_fields() {
    let mut rng = rng();
    check_target::<Fp12<Bls381>>(&tower(), &mut rng);
    check_target::<Fp24<Bls315>>(&tower(), &mut rng);
    check_target::<Fp48<Bls378>>(&tower(), &mut rng);
    check_target::<Fp16<Kss361>>(&tower(), &mut rng);
    check_target::<Fp18<Kss372>>(&tower(), &mut rng);
    check_target::<Fp2<Ss383>>(&tower(), &mut rng);
}

#[test]
fn test_trace_compression_rejects_minus_one() {
    let t = tower::<Kss361>();
    let m = Fp16::<Kss361>::one().neg();
    assert!(m.test_cyc(&t));
    let mut buf = [0u8; <Fp8<Kss361> as Field>::BYTES];
    assert_eq!(m.write_pck(&mut buf).unwrap_err().kind(), ErrorKind::NoValid);
}
