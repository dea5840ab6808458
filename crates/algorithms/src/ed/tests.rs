use super::*;
use crate::error::ErrorKind;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn curve() -> EdCurve {
    EdCurve::ed25519().unwrap()
}

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(25519)
}

fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).unwrap();
    out
}

#[test]
fn test_group_law() {
    let e = curve();
    let mut rng = rng();
    let g = e.gen();
    let o = EdPoint::neutral();
    assert!(e.on_curve(&g));
    assert!(e.on_curve(&o));
    assert!(e.eq(&e.add(&g, &o), &g));
    assert!(e.eq(&e.dbl(&g), &e.add(&g, &g)));
    assert!(e.add(&g, &e.neg(&g)).is_neutral());
    assert!(e.eq(&e.dbl(&o), &o));

    let p = e.rand(&mut rng).unwrap();
    let q = e.rand(&mut rng).unwrap();
    let r = e.rand(&mut rng).unwrap();
    assert!(e.on_curve(&p));
    assert!(e.eq(&e.add(&p, &q), &e.add(&q, &p)));
    assert!(e.eq(&e.add(&e.add(&p, &q), &r), &e.add(&p, &e.add(&q, &r))));
    assert!(e.eq(&e.sub(&e.add(&p, &q), &q), &p));

    let n = e.norm(&e.dbl(&p));
    assert_eq!(n.z, Fe::one());
    assert!(e.on_curve(&n));
    let b = CurveGroup::blind(&e, &p, &mut rng);
    assert!(e.eq(&b, &p));
    assert!(e.on_curve(&b));
}

#[test]
fn test_known_multiples() {
    let e = curve();
    let g = e.gen();
    assert_eq!(e.compress(&g).unwrap(), hex32("5866666666666666666666666666666666666666666666666666666666666666"));
    let g2 = e.mul(&g, &Bn::from_dig(2)).unwrap();
    assert_eq!(e.compress(&g2).unwrap(), hex32("c9a3f86aae465f0e56513864510f3997561fa2c9e85ea21dc2292309f3cd6022"));
    let g3 = e.mul_gen(&Bn::from_dig(3)).unwrap();
    assert_eq!(e.compress(&g3).unwrap(), hex32("d4b4f5784868c3020403246717ec169ff79e26608ea126a1ab69ee77d1b16712"));
}

#[test]
fn test_subgroup() {
    let e = curve();
    let mut rng = rng();
    let g = e.gen();
    assert!(e.is_valid(&g));
    assert!(!e.is_valid(&EdPoint::neutral()));
    assert!(e.mul(&g, e.ord()).unwrap().is_neutral());

    // (0, -1) has order 2
    let t = EdPoint::from_affine(Fe::zero(), Fe::one().neg());
    assert!(e.on_curve(&t));
    assert!(!e.is_valid(&t));
    assert!(e.mul_cof(&t).is_neutral());
    let mixed = e.add(&g, &t);
    assert!(!e.is_valid(&mixed));
    assert!(e.is_valid(&e.mul_cof(&mixed)));

    let p = e.rand(&mut rng).unwrap();
    assert!(e.is_valid(&p));
    assert!(e.eq(&e.mul_cof(&p), &e.mul(&p, &Bn::from_dig(8)).unwrap()));
}

#[test]
fn test_multipliers_agree() {
    let e = curve();
    let mut rng = rng();
    let p = e.rand(&mut rng).unwrap();
    let q = e.rand(&mut rng).unwrap();
    for _ in 0..4 {
        let k = Bn::rand_mod(&mut rng, e.ord()).unwrap();
        let m = Bn::rand_mod(&mut rng, e.ord()).unwrap();
        let expect = ec::mul_basic(&e, &p, &k).unwrap();
        assert!(e.eq(&e.mul(&p, &k).unwrap(), &expect));
        assert!(e.eq(&ec::mul_lwreg(&e, &p, &k).unwrap(), &expect));
        assert!(e.eq(&ec::mul_monty(&e, &p, &k).unwrap(), &expect));
        assert!(e.eq(&e.mul_gen(&k).unwrap(), &ec::mul_basic(&e, &e.gen(), &k).unwrap()));
        let both = e.add(&expect, &ec::mul_basic(&e, &q, &m).unwrap());
        assert!(e.eq(&e.mul_sim(&p, &k, &q, &m).unwrap(), &both));
    }
    assert!(e.mul(&p, &Bn::zero()).unwrap().is_neutral());
}

#[test]
fn test_codec() {
    let e = curve();
    let mut rng = rng();
    let p = e.rand(&mut rng).unwrap();
    for pack in [false, true] {
        let mut out = vec![0u8; e.size_bin(&p, pack)];
        e.write_bin(&p, &mut out, pack).unwrap();
        assert!(e.eq(&e.read_bin(&out).unwrap(), &p));
    }
    let o = EdPoint::neutral();
    assert_eq!(e.size_bin(&o, true), 1);
    let mut one = [0xffu8; 1];
    e.write_bin(&o, &mut one, true).unwrap();
    assert_eq!(one, [0]);
    assert!(e.read_bin(&one).unwrap().is_neutral());

    let c = e.compress(&p).unwrap();
    assert!(e.eq(&e.decompress(&c).unwrap(), &p));

    let mut short = vec![0u8; 10];
    assert_eq!(e.write_bin(&p, &mut short, true).unwrap_err().kind(), ErrorKind::NoBuffer);
    assert_eq!(e.read_bin(&[]).unwrap_err().kind(), ErrorKind::NoBuffer);
    assert_eq!(e.read_bin(&[0x07]).unwrap_err().kind(), ErrorKind::NoValid);
    assert_eq!(e.decompress(&c[..31]).unwrap_err().kind(), ErrorKind::NoBuffer);

    // y = 2 has no matching x on Ed25519
    let mut bad = [0u8; 32];
    bad[0] = 2;
    assert_eq!(e.decompress(&bad).unwrap_err().kind(), ErrorKind::NoValid);
    // y >= p is not canonical
    let big = hex32("eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    assert!(e.decompress(&big).is_err());
}

#[test]
fn test_hash_to_curve() {
    let e = curve();
    let a = e.map(b"abc").unwrap();
    assert!(e.is_valid(&a));
    assert!(e.eq(&a, &e.map_dst(b"abc", crate::ep::DEFAULT_DST).unwrap()));
    assert!(!e.eq(&a, &e.map(b"abd").unwrap()));
    assert!(!e.eq(&a, &e.map_dst(b"abc", b"OTHER").unwrap()));

    let mut rng = rng();
    for _ in 0..8 {
        let u = Fe::random(&mut rng);
        let (s, t) = e.map_mont(&u).unwrap();
        // t^2 = s^3 + J s^2 + s
        assert_eq!(t.sqr(), e.mont_rhs(&s));
        assert!(e.on_curve(&e.map_to_curve(&u).unwrap()));
    }
    // u = 0 lands on the Montgomery point (0, 0), which maps to the neutral element
    assert!(e.map_to_curve(&Fe::zero()).unwrap().is_neutral());
}
