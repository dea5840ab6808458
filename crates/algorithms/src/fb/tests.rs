use super::*;
use crate::ec::{self, CurveGroup};
use crate::error::ErrorKind;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const K_GX: &str = "503213f78ca44883f1a3b8162f188e553cd265f23c1567a16876913b0c2ac2458492836";
const K_GY: &str = "1ccda380f1c9e318d90f95d07e5426fe87e45c0e8184698e45962364e34116177dd2259";

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(283)
}

fn fb(s: &str) -> Fb {
    Fb::read_str(s).unwrap()
}

/// Shift-and-add product, reducing one bit at a time
fn mul_naive(a: &Fb, b: &Fb) -> Fb {
    let mut r = Fb::zero();
    let mut t = *a;
    for i in 0..FB_POLYN {
        if b.get_bit(i) {
            r = r.add(&t);
        }
        t = t.mul(&Fb::from_dig(2));
    }
    r
}

#[test]
fn test_fb_known_answers() {
    let (x, y) = (fb(K_GX), fb(K_GY));
    assert_eq!(x.mul(&y), fb("3442fc9ae59bc110b320f4efe06875a83911b8ecacb841baa6f689747d864ce1a2f49f4"));
    assert_eq!(x.sqr(), fb("23e5da79acfd5221dd36ca7c69942ffb878734e2caa6d3e3adc35bdb579e53dc448471e"));
    assert_eq!(x.inv().unwrap(), fb("86d01d939cd7605f2b3d5ad73a0fd125ea2704121c958e7a820f5fe6e8962aea314d79"));
    // z^283 = z^12 + z^7 + z^5 + 1
    let z = Fb::from_dig(2);
    assert_eq!(z.exp(&Bn::from_dig(283)).unwrap(), Fb::from_dig((1 << 12) | (1 << 7) | (1 << 5) | 1));
}

#[test]
fn test_fb_arithmetic() {
    let mut rng = rng();
    for _ in 0..8 {
        let a = Fb::random(&mut rng);
        let b = Fb::random(&mut rng);
        let c = Fb::random(&mut rng);
        assert!(a.bits() <= FB_POLYN);
        assert_eq!(a.mul(&b), mul_naive(&a, &b));
        assert_eq!(a.mul(&b), b.mul(&a));
        assert_eq!(a.add(&b).mul(&c), a.mul(&c).add(&b.mul(&c)));
        assert_eq!(a.sqr(), a.mul(&a));
        assert_eq!(a.add(&a), Fb::zero());
        if !a.is_zero() {
            assert!(a.mul(&a.inv().unwrap()).is_one());
        }
        assert_eq!(a.srt().sqr(), a);
        assert_eq!(a.sqr_n(FB_POLYN), a);
        // the trace is linear and equals the sum of the conjugates
        let mut t = a;
        let mut s = a;
        for _ in 1..FB_POLYN {
            t = t.sqr();
            s = s.add(&t);
        }
        assert!(s.is_zero() || s.is_one());
        assert_eq!(s.is_one(), a.trc());
        assert_eq!(a.add(&b).trc(), a.trc() ^ b.trc());

        let c = if a.trc() { a.add_dig(1) } else { a };
        let z = c.slv().unwrap();
        assert_eq!(z.sqr().add(&z), c);
    }
    assert_eq!(Fb::zero().inv().unwrap_err().kind(), ErrorKind::NoValid);
    assert!(Fb::one().trc());
    assert_eq!(Fb::one().slv().unwrap_err().kind(), ErrorKind::NoValid);
}

#[test]
fn test_fb_codec() {
    let mut rng = rng();
    let a = Fb::random(&mut rng);
    let mut out = [0u8; FB_BYTES];
    a.write_bin(&mut out, false).unwrap();
    assert_eq!(Fb::read_bin(&out).unwrap(), a);
    out[0] = 0xff;
    assert_eq!(Fb::read_bin(&out).unwrap_err().kind(), ErrorKind::NoValid);
    assert_eq!(Fb::read_bin(&out[1..]).unwrap_err().kind(), ErrorKind::NoBuffer);
    let mut short = [0u8; 4];
    assert_eq!(a.write_bin(&mut short, false).unwrap_err().kind(), ErrorKind::NoBuffer);
    assert!(Fb::read_str("1").unwrap().is_one());
    assert!(Fb::read_str(&"f".repeat(72)).is_err());
}

fn check_curve(c: &FbCurve, rng: &mut ChaCha20Rng) {
    let g = c.gen();
    assert!(c.on_curve(&g));
    assert!(c.is_valid(&g));
    assert!(!c.is_valid(&FbPoint::infinity()));
    assert!(ec::mul_basic(c, &g, c.ord()).unwrap().is_infty());

    let p = c.rand(rng).unwrap();
    let q = c.rand(rng).unwrap();
    // both coordinate systems agree
    assert!(c.eq(&c.add_projc(&p, &q), &c.add_basic(&p, &q)));
    assert!(c.eq(&c.dbl_projc(&p), &c.dbl_basic(&p)));
    assert!(c.eq(&c.add_projc(&p, &p), &c.dbl_projc(&p)));
    assert!(c.add_projc(&p, &c.neg(&p)).is_infty());
    assert!(c.add_basic(&p, &c.neg(&p)).is_infty());
    assert!(c.eq(&c.sub(&c.add(&p, &q), &q), &p));
    let n = c.norm(&c.dbl(&p));
    assert!(n.z.is_one());
    assert!(c.on_curve(&n));
    let mut pts = [c.dbl(&p), FbPoint::infinity(), c.add(&p, &q)];
    let expect = pts;
    CurveGroup::norm_sim(c, &mut pts).unwrap();
    for (a, b) in pts.iter().zip(&expect) {
        assert!(c.eq(a, b));
    }
    let bl = CurveGroup::blind(c, &p, rng);
    assert!(c.eq(&bl, &p));

    for _ in 0..3 {
        let k = Bn::rand_mod(rng, c.ord()).unwrap();
        let m = Bn::rand_mod(rng, c.ord()).unwrap();
        let expect = ec::mul_lwnaf(c, &p, &k).unwrap();
        assert!(c.eq(&c.mul(&p, &k).unwrap(), &expect));
        assert!(c.eq(&ec::mul_basic(c, &p, &k).unwrap(), &expect));
        assert!(c.eq(&c.mul_gen(&k).unwrap(), &ec::mul_lwnaf(c, &g, &k).unwrap()));
        let both = c.add(&expect, &ec::mul_lwnaf(c, &q, &m).unwrap());
        assert!(c.eq(&c.mul_sim(&p, &k, &q, &m).unwrap(), &both));
    }
    assert!(c.mul(&p, &Bn::zero()).unwrap().is_infty());

    let h = c.map(b"abc").unwrap();
    assert!(c.is_valid(&h));
    assert!(c.eq(&h, &c.map_dst(b"abc", crate::ep::DEFAULT_DST).unwrap()));
    assert!(!c.eq(&h, &c.map(b"abd").unwrap()));

    for pt in [p, c.dbl(&q)] {
        for pack in [false, true] {
            let mut out = vec![0u8; c.size_bin(&pt, pack)];
            c.write_bin(&pt, &mut out, pack).unwrap();
            assert!(c.eq(&c.read_bin(&out).unwrap(), &pt));
        }
    }
    let mut one = [0u8; 1];
    c.write_bin(&FbPoint::infinity(), &mut one, true).unwrap();
    assert!(c.read_bin(&one).unwrap().is_infty());
    assert_eq!(c.read_bin(&[0x05]).unwrap_err().kind(), ErrorKind::NoValid);
    assert_eq!(c.read_bin(&[]).unwrap_err().kind(), ErrorKind::NoBuffer);
    let mut full = vec![0u8; c.size_bin(&p, false)];
    c.write_bin(&p, &mut full, false).unwrap();
    full[FB_BYTES + 4] ^= 1;
    assert_eq!(c.read_bin(&full).unwrap_err().kind(), ErrorKind::NoValid);
}

#[test]
fn test_nist_k283() {
    let c = nist_k283().unwrap();
    assert!(c.is_koblitz());
    assert_eq!(c.cofactor(), 4);
    check_curve(&c, &mut rng());

    let g2 = c.norm(&c.mul(&c.gen(), &Bn::from_dig(2)).unwrap());
    assert_eq!(g2.x, fb("30ae969b9792d44bfdae086dc6fa1039e52a459a545e78b57a1c9d749c1dc6faeaf80cf"));
    assert_eq!(g2.y, fb("59d726aa1b70c5e9ffa46d6a1f912b31480bc3d8e0cab1666497f16b970256427b2fc02"));

    // tau^2 + tau + 2 = 0 on K-283
    let p = c.gen();
    let t = c.frb(&p);
    let s = c.add(&c.add(&c.frb(&t), &t), &c.dbl(&p));
    assert!(s.is_infty());

    let k = Bn::from_i64(-12345);
    let e = c.neg(&ec::mul_lwnaf(&c, &p, &k.abs()).unwrap());
    assert!(c.eq(&c.mul_tnaf(&p, &k).unwrap(), &e));
}

#[test]
fn test_nist_b283() {
    let c = nist_b283().unwrap();
    assert!(!c.is_koblitz());
    assert_eq!(c.cofactor(), 2);
    check_curve(&c, &mut rng());

    let g2 = c.norm(&c.dbl(&c.gen()));
    assert_eq!(g2.x, fb("32a728c1f40082ae632cb3814635d8bbd48627f0e88e4b3768c8c8d27be75237d7499d5"));
    assert_eq!(g2.y, fb("52d072775b39fe97b97ba764bfeff90500024077d37a2fd4620e95e89cda072a45be1c0"));
    assert_eq!(c.mul_tnaf(&c.gen(), &Bn::one()).unwrap_err().kind(), ErrorKind::NoValid);
}

#[test]
fn test_bad_curve_parameters() {
    let g = FbPoint::from_affine(fb(K_GX), fb(K_GY));
    let r = Bn::from_dig(7);
    assert!(FbCurve::new("X", Fb::from_dig(2), Fb::one(), g, r.clone(), 1).is_err());
    assert!(FbCurve::new("X", Fb::zero(), Fb::zero(), g, r.clone(), 1).is_err());
    let err = FbCurve::new("X", Fb::one(), Fb::one(), g, r, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoValid);
}
