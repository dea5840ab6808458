use super::*;
use crate::error::ErrorKind;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

type F = Fp<Bn254>;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0xf1e1d)
}

fn fp<P: FpParams>(s: &str) -> Fp<P> {
    Fp::read_str(s.trim_start_matches("0x"), 16).unwrap()
}

#[test]
fn test_montgomery_constants() {
    assert_eq!(F::one().to_limbs(), params::one());
    assert_eq!(F::from_dig(7).to_bn(), Bn::from_dig(7));
    assert_eq!(Fp::<Bls381>::from_dis(-1).add(&Fp::one()), Fp::zero());
    assert_eq!(<Bn254 as FpParams>::BITS, 254);
    assert_eq!(<Bls381 as FpParams>::BYTES, 48);
    assert_eq!(<Bls377 as FpParams>::TWO_ADICITY, 46);
    assert_eq!(<Curve25519 as FpParams>::MOD8, 5);
}

#[test]
fn test_inverse_vectors() {
    assert_eq!(
        F::from_dig(2).inv().unwrap(),
        fp("0x1291b24120000000dd1a26c0000000043090800000000009d38000000000000a")
    );
    assert_eq!(
        F::from_dig(3).inv().unwrap(),
        fp("0x18c243018000000126cd890000000005961600000000000d1a0000000000000d")
    );
}

#[test]
fn test_inverse_variants_agree() {
    let mut rng = rng();
    for _ in 0..8 {
        let a = F::random(&mut rng);
        let expected = a.inv_basic().unwrap();
        assert_eq!(a.mul(&expected), F::one());
        assert_eq!(a.inv_binar().unwrap(), expected);
        assert_eq!(a.inv_monty().unwrap(), expected);
        assert_eq!(a.inv_exgcd().unwrap(), expected);
        assert_eq!(a.inv_divst().unwrap(), expected);
        assert_eq!(a.inv_jmpds().unwrap(), expected);
    }
    let b = Fp::<Bls381>::random(&mut rng);
    let expected = b.inv_basic().unwrap();
    assert_eq!(b.inv_divst().unwrap(), expected);
    assert_eq!(b.inv_jmpds().unwrap(), expected);
    assert_eq!(b.inv_monty().unwrap(), expected);
}

#[test]
fn test_inverse_of_zero() {
    let z = F::zero();
    for r in [
        z.inv_basic(),
        z.inv_binar(),
        z.inv_monty(),
        z.inv_exgcd(),
        z.inv_divst(),
        z.inv_jmpds(),
    ] {
        assert_eq!(r.unwrap_err().kind(), ErrorKind::NoValid);
    }
}

#[test]
fn test_inv_sim() {
    let mut rng = rng();
    let a: Vec<F> = (0..5).map(|_| F::random(&mut rng)).collect();
    let b = F::inv_sim(&a).unwrap();
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.mul(y), F::one());
    }
    assert!(F::inv_sim(&[]).unwrap().is_empty());
    assert!(F::inv_sim(&[a[0], F::zero()]).is_err());
}

#[test]
fn test_square_roots() {
    // p = 3 mod 4
    let r = F::from_dig(4).srt().unwrap();
    assert!(r == F::from_dig(2) || r == F::from_dig(2).neg());
    assert!(F::from_dis(-1).srt().is_none());

    // p = 5 mod 8
    let five = Fp::<Curve25519>::from_dig(5);
    let r = five.srt().unwrap();
    assert_eq!(r.sqr(), five);
    assert!(Fp::<Curve25519>::from_dig(2).srt().is_none());

    // 2-adicity 46
    let mut rng = rng();
    for _ in 0..4 {
        let a = Fp::<Bls377>::random(&mut rng);
        let s = a.sqr();
        let r = s.srt().unwrap();
        assert!(r == a || r == a.neg());
    }
    assert!(Fp::<Bls377>::from_dig(5).srt().is_none());
    assert_eq!(Fp::<Bls377>::zero().srt(), Some(Fp::zero()));
}

#[test]
fn test_legendre() {
    assert_eq!(F::zero().smb(), 0);
    assert_eq!(F::from_dig(4).smb(), 1);
    assert_eq!(F::from_dis(-1).smb(), -1);
    assert_eq!(Fp::<Bls377>::from_dig(5).smb(), -1);
}

#[test]
fn test_reductions_agree() {
    let mut rng = rng();
    for _ in 0..8 {
        let a = Fp::<Bls381>::random(&mut rng);
        let b = Fp::<Bls381>::random(&mut rng);
        let c = a.mul(&b);
        assert_eq!(a.mul_basic(&b), c);
        let t = FpDbl::mul_unr(&a, &b);
        assert_eq!(t.rdc(), c);
        assert_eq!(t.rdc_basic(), c);
        let u = FpDbl::sqr_unr(&a);
        assert_eq!(t.add(&u).rdc(), c.add(&a.sqr()));
        assert_eq!(t.sub(&u).rdc(), c.sub(&a.sqr()));
    }
}

#[test]
fn test_small_multipliers() {
    let mut rng = rng();
    let a = F::random(&mut rng);
    for k in [-17i64, -15, -3, 0, 1, 5, 15, 16, 1000] {
        assert_eq!(a.mul_dis(k), a.mul(&F::from_dis(k)));
    }
    assert_eq!(a.dbl().hlv(), a);
    assert_eq!(a.sub(&a), F::zero());
}

#[test]
fn test_exponentiation() {
    let mut rng = rng();
    let a = F::random(&mut rng);
    let p = F::modulus();
    assert_eq!(a.exp(&p).unwrap(), a);
    assert_eq!(a.exp(&Bn::from_i64(-1)).unwrap(), a.inv().unwrap());
    assert_eq!(a.exp(&Bn::zero()).unwrap(), F::one());
}

#[test]
fn test_serialization() {
    let mut rng = rng();
    let a = Fp::<Bls381>::random(&mut rng);
    let bytes = a.to_bytes(false).unwrap();
    assert_eq!(bytes.len(), 48);
    assert_eq!(Fp::<Bls381>::read_bin(&bytes).unwrap(), a);

    let p = hex::decode(
        "2523648240000001ba344d80000000086121000000000013a700000000000013",
    )
    .unwrap();
    assert_eq!(F::read_bin(&p).unwrap_err().kind(), ErrorKind::NoValid);
    assert_eq!(F::read_bin(&p[1..]).unwrap_err().kind(), ErrorKind::NoBuffer);

    let s = a.write_str(16).unwrap();
    assert_eq!(Fp::<Bls381>::read_str(&s, 16).unwrap(), a);
    assert!(F::read_str("2523648240000001ba344d80000000086121000000000013a700000000000013", 16).is_err());
}

#[test]
fn test_from_uniform() {
    let bytes = [0xffu8; 64];
    let a = F::from_uniform(&bytes).unwrap();
    let expected = Bn::read_str(&"f".repeat(128), 16).unwrap().modp(&F::modulus()).unwrap();
    assert_eq!(a.to_bn(), expected);
    assert!(F::from_uniform(&[0u8; 97]).is_err());
}
