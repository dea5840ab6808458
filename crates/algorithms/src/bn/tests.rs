use super::*;
use crate::config::BnMod;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn hex(s: &str) -> Bn {
    s.parse().unwrap()
}

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5eed_b16)
}

const A: &str = "0x1f3a5c7e9b2d4f60718293a4b5c6d7e8f9012345678";
const B: &str = "0xfedcba9876543210f0e1d2c3b4a5";
const M127: &str = "0x7fffffffffffffffffffffffffffffff";

#[test]
fn test_trimmed_zero() {
    let a = hex(A);
    let z = a.sub(&a).unwrap();
    assert!(z.is_zero());
    assert_eq!(z.sign(), Sign::Pos);
    assert_eq!(z.len(), 1);
    assert_eq!(z, Bn::zero());
    assert_eq!(Bn::from_i64(0).neg(), Bn::zero());
}

#[test]
fn test_mul_vector() {
    let c = hex(A).mul(&hex(B)).unwrap();
    assert_eq!(
        c,
        hex("0x1f16d4b01b0e6381223ee0d55b2068b1408de98e012f44f687312f501c120ecd5f01b58")
    );
    assert_eq!(hex(A).mul_karat(&hex(B)).unwrap(), c);
    assert_eq!(hex(A).sqr().unwrap(), hex(A).mul(&hex(A)).unwrap());
}

#[test]
fn test_karatsuba_matches_schoolbook() {
    let mut rng = rng();
    for bits in [600, 1024, 2000, 3000] {
        let a = Bn::rand(&mut rng, Sign::Neg, bits).unwrap();
        let b = Bn::rand(&mut rng, Sign::Pos, bits / 2 + 17).unwrap();
        assert_eq!(a.mul_karat(&b).unwrap(), a.mul(&b).unwrap());
    }
}

#[test]
fn test_floor_division() {
    let a = hex(A).neg();
    let b = hex(B);
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, hex("-0x1f5e0ce85070f0e"));
    assert_eq!(r, hex("0x6447ab42eec94ad051c9598358e"));
    assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);
    assert!(a.div(&Bn::zero()).is_err());
    assert_eq!(
        a.div(&Bn::zero()).unwrap_err().kind(),
        relic_api::ErrorKind::NoValid
    );
}

#[test]
fn test_division_identity() {
    let mut rng = rng();
    for _ in 0..50 {
        let a = Bn::rand(&mut rng, Sign::Pos, 700).unwrap();
        let b = Bn::rand(&mut rng, Sign::Neg, 300).unwrap();
        if b.is_zero() {
            continue;
        }
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);
        assert!(r.cmp_abs(&b) == Ordering::Less);
        assert!(r.is_zero() || r.sign() == b.sign());
        let m = a.modp(&b).unwrap();
        assert!(!m.is_neg());
    }
}

#[test]
fn test_digit_ops() {
    let a = hex(A);
    let (q, r) = a.div_rem_dig(1_000_003).unwrap();
    assert_eq!(q.mul_dig(1_000_003).unwrap().add_dig(r).unwrap(), a);
    assert_eq!(a.neg().mod_dig(7).unwrap(), (7 - a.mod_dig(7).unwrap()) % 7);
    assert!(a.div_dig(0).is_err());
}

#[test]
fn test_capacity() {
    let big = Bn::set_2b(BN_MAX_DIGS * DIG - 1).unwrap();
    assert_eq!(big.bits(), BN_MAX_DIGS * DIG);
    let err = big.lsh(1).unwrap_err();
    assert_eq!(err.kind(), relic_api::ErrorKind::NoMemory);
    assert!(big.mul(&big).is_err());
}

#[test]
fn test_string_radices() {
    let a = hex(A).neg();
    for radix in [2, 8, 10, 16, 36, 64] {
        let s = a.write_str(radix).unwrap();
        assert_eq!(s.len(), a.size_str(radix).unwrap());
        assert_eq!(Bn::read_str(&s, radix).unwrap(), a);
    }
    assert_eq!(Bn::read_str("ff", 16).unwrap(), Bn::from_dig(255));
    assert!(Bn::read_str("12", 65).is_err());
    assert!(Bn::read_str("9", 8).is_err());
    assert_eq!(format!("{}", Bn::from_dig(255)), "FF");
}

#[test]
fn test_binary_codec() {
    let a = hex(B);
    let bytes = a.to_bytes(false).unwrap();
    assert_eq!(bytes.len(), a.size_bin(false));
    assert_eq!(Bn::read_bin(&bytes).unwrap(), a);
    let mut short = [0u8; 4];
    assert!(a.write_bin(&mut short, false).is_err());
    assert_eq!(Bn::read_bin(&[0, 0, 0, 5]).unwrap(), Bn::from_dig(5));
}

#[test]
fn test_bits() {
    let mut a = Bn::zero();
    a.set_bit(130, true).unwrap();
    assert_eq!(a.bits(), 131);
    assert!(a.get_bit(130));
    assert_eq!(a.ham(), 1);
    a.set_bit(130, false).unwrap();
    assert!(a.is_zero());
    assert_eq!(a.len(), 1);
}

#[test]
fn test_gcd_family() {
    let a = hex(A);
    let b = hex(B);
    let g = a.gcd(&b).unwrap();
    assert_eq!(g, a.gcd_bin(&b).unwrap());
    let (g2, u, v) = a.gcd_ext(&b).unwrap();
    assert_eq!(g, g2);
    assert_eq!(a.mul(&u).unwrap().add(&b.mul(&v).unwrap()).unwrap(), g);

    let x = Bn::from_dig(12);
    let y = Bn::from_dig(18);
    assert_eq!(x.gcd(&y).unwrap(), Bn::from_dig(6));
    assert_eq!(x.lcm(&y).unwrap(), Bn::from_dig(36));
    let (g, u, v) = x.neg().gcd_ext(&y).unwrap();
    assert_eq!(x.neg().mul(&u).unwrap().add(&y.mul(&v).unwrap()).unwrap(), g);
}

#[test]
fn test_mod_inv() {
    let m = hex(M127);
    let inv = hex(A).mod_inv(&m).unwrap();
    assert_eq!(inv, hex("0x573af576a019c6daa6cded0fad21fb92"));
    assert!(Bn::from_dig(6).mod_inv(&Bn::from_dig(9)).is_err());

    let xs: Vec<Bn> = (2..10).map(Bn::from_dig).collect();
    let invs = mod_inv_sim(&xs, &m).unwrap();
    for (x, i) in xs.iter().zip(&invs) {
        assert!(x.mul(i).unwrap().modp(&m).unwrap().is_one());
    }
}

#[test]
fn test_srt_and_symbols() {
    assert_eq!(hex(A).srt().unwrap(), hex("0x165a50f9784dd1292bad52"));
    assert_eq!(Bn::from_dig(99).srt().unwrap(), Bn::from_dig(9));
    assert!(Bn::from_i64(-4).srt().is_err());

    let p = Bn::from_dig(23);
    assert_eq!(Bn::from_dig(2).smb_leg(&p).unwrap(), 1);
    assert_eq!(Bn::from_dig(5).smb_leg(&p).unwrap(), -1);
    assert_eq!(Bn::from_dig(46).smb_leg(&p).unwrap(), 0);
    for a in 0..40u64 {
        let a = Bn::from_dig(a);
        assert_eq!(a.smb_jac(&p).unwrap(), a.smb_leg(&p).unwrap());
    }
    // (2/15) = (2/3)(2/5) = 1
    assert_eq!(Bn::from_dig(2).smb_jac(&Bn::from_dig(15)).unwrap(), 1);
}

#[test]
fn test_mxp_contract() {
    let m = hex(M127);
    let e = Bn::from_dig(0x10001);
    let expected = hex("0x37002cd96c28f670d8eb760e6301408");
    let three = Bn::from_dig(3);
    assert_eq!(three.mxp_basic(&e, &m).unwrap(), expected);
    assert_eq!(three.mxp_slide(&e, &m).unwrap(), expected);
    assert_eq!(three.mxp_monty(&e, &m).unwrap(), expected);
    assert_eq!(three.mxp_dig(0x10001, &m).unwrap(), expected);

    assert!(three.mxp(&e, &Bn::one()).unwrap().is_zero());
    assert!(three.mxp(&Bn::zero(), &m).unwrap().is_one());
    let inv = three.mxp(&e.neg(), &m).unwrap();
    assert!(inv.mul(&expected).unwrap().modp(&m).unwrap().is_one());
}

#[test]
fn test_mxp_variants_agree() {
    let mut rng = rng();
    let m_odd = Bn::rand(&mut rng, Sign::Pos, 521).unwrap().add_dig(1).unwrap();
    let m_odd = if m_odd.is_even() { m_odd.add_dig(1).unwrap() } else { m_odd };
    let m_even = m_odd.add_dig(1).unwrap();
    for m in [m_odd, m_even] {
        for bits in [5, 30, 100, 300, 600] {
            let a = Bn::rand(&mut rng, Sign::Pos, 400).unwrap();
            let b = Bn::rand(&mut rng, Sign::Pos, bits).unwrap();
            let r = a.mxp_basic(&b, &m).unwrap();
            assert_eq!(a.mxp_slide(&b, &m).unwrap(), r);
            assert_eq!(a.mxp_monty(&b, &m).unwrap(), r);
        }
    }
}

#[test]
fn test_reduction_contexts() {
    let mut rng = rng();
    let m = hex(M127).mul(&hex(B)).unwrap().add_dig(2).unwrap();
    let even = m.add_dig(1).unwrap();
    for method in [BnMod::Basic, BnMod::Barrt, BnMod::Monty] {
        let ctx = ModCtx::with_method(&m, method).unwrap();
        let a = Bn::rand_mod(&mut rng, &m).unwrap();
        let b = Bn::rand_mod(&mut rng, &m).unwrap();
        let x = ctx.to_internal(&a).unwrap();
        let y = ctx.to_internal(&b).unwrap();
        let c = ctx.from_internal(&ctx.mul(&x, &y).unwrap()).unwrap();
        assert_eq!(c, a.mul(&b).unwrap().modp(&m).unwrap());
    }
    let ctx = ModCtx::with_method(&even, BnMod::Monty).unwrap();
    assert_eq!(ctx.method(), BnMod::Barrt);
    assert!(mod_pre_monty(&even).is_err());
}

#[test]
fn test_mxp_crt() {
    let p = Bn::from_dig(1_000_000_007);
    let q = Bn::from_dig(998_244_353);
    let n = p.mul(&q).unwrap();
    let a = Bn::from_dig(123_456_789_012);
    let b = hex(B);
    assert_eq!(mxp_crt(&a, &b, &p, &q, false).unwrap(), a.mxp(&b, &n).unwrap());
    let n2 = n.sqr().unwrap();
    assert_eq!(mxp_crt(&a, &b, &p, &q, true).unwrap(), a.mxp(&b, &n2).unwrap());
}

#[test]
fn test_mxp_crt_shared_factor() {
    let p = Bn::from_dig(1_000_000_007);
    let q = Bn::from_dig(998_244_353);
    let n = p.mul(&q).unwrap();
    // a = 3p and b = p - 1 reduce to a^0 modulo p
    let a = p.mul_dig(3).unwrap();
    let b = p.sub_dig(1).unwrap();
    let r = mxp_crt(&a, &b, &p, &q, false).unwrap();
    assert_eq!(r, a.mxp(&b, &n).unwrap());
    assert!(r.modp(&p).unwrap().is_zero());
    let a = q.mul_dig(5).unwrap();
    let b = q.sub_dig(1).unwrap().mul_dig(2).unwrap();
    assert_eq!(mxp_crt(&a, &b, &p, &q, false).unwrap(), a.mxp(&b, &n).unwrap());
    let n2 = n.sqr().unwrap();
    assert_eq!(mxp_crt(&a, &b, &p, &q, true).unwrap(), a.mxp(&b, &n2).unwrap());
}

#[test]
fn test_mxp_sim() {
    let mut rng = rng();
    let m = hex(M127);
    let bases: Vec<Bn> = (0..7).map(|_| Bn::rand_mod(&mut rng, &m).unwrap()).collect();
    let exps: Vec<Bn> = (0..7)
        .map(|i| Bn::rand(&mut rng, if i == 2 { Sign::Neg } else { Sign::Pos }, 90).unwrap())
        .collect();
    let mut expected = Bn::one();
    for (a, e) in bases.iter().zip(&exps) {
        expected = expected.mul(&a.mxp(e, &m).unwrap()).unwrap().modp(&m).unwrap();
    }
    assert_eq!(mxp_sim_lot(&bases, &exps, &m).unwrap(), expected);
    assert!(mxp_sim(&bases, &exps, &m).is_err());
    let direct = mxp_sim(&bases[..3], &exps[..3], &m).unwrap();
    let lot = mxp_sim_lot(&bases[..3], &exps[..3], &m).unwrap();
    assert_eq!(direct, lot);
}

#[test]
fn test_primality() {
    let p381 = hex(concat!(
        "0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f624",
        "1eabfffeb153ffffb9feffffffffaaab"
    ));
    assert!(p381.is_prime().unwrap());
    assert!(p381.is_prime_solov().unwrap());
    assert!(!p381.add_dig(2).unwrap().is_prime().unwrap());
    assert!(hex(M127).is_prime().unwrap());
    // Carmichael number
    assert!(!Bn::from_dig(561).is_prime().unwrap());
    assert!(!Bn::from_dig(1).is_prime().unwrap());
    assert!(Bn::from_dig(2).is_prime().unwrap());

    let mut rng = rng();
    let q = gen_prime(&mut rng, 160).unwrap();
    assert_eq!(q.bits(), 160);
    assert!(q.is_prime_solov().unwrap());
}

fn eval_signed(digits: &[i8], radix_bits: usize) -> Bn {
    let mut acc = Bn::zero();
    for &d in digits.iter().rev() {
        acc = acc.lsh(radix_bits).unwrap().add(&Bn::from_i64(d as i64)).unwrap();
    }
    acc
}

#[test]
fn test_recodings() {
    let k = hex(A);
    for w in 2..=6 {
        let naf = rec_naf(&k, w).unwrap();
        assert_eq!(eval_signed(&naf, 1), k);
        for (i, &d) in naf.iter().enumerate() {
            if d != 0 {
                assert!(d % 2 != 0 && (d.unsigned_abs() as usize) < (1 << (w - 1)));
                assert!(naf[i + 1..].iter().take(w - 1).all(|&x| x == 0));
            }
        }

        let wins = rec_win(&k, w);
        let mut acc = Bn::zero();
        for &d in wins.iter().rev() {
            acc = acc.lsh(w).unwrap().add_dig(d as Dig).unwrap();
        }
        assert_eq!(acc, k);

        let mut acc = Bn::zero();
        for d in rec_slw(&k, w) {
            if d == 0 {
                acc = acc.dbl().unwrap();
            } else {
                let len = 8 - d.leading_zeros() as usize;
                acc = acc.lsh(len).unwrap().add_dig(d as Dig).unwrap();
            }
        }
        assert_eq!(acc, k);

        let odd = k.add_dig(1).unwrap();
        let reg = rec_reg(&odd, odd.bits(), w).unwrap();
        assert!(reg.iter().all(|d| d % 2 != 0));
        assert_eq!(eval_signed(&reg, w - 1), odd);
    }
    assert!(rec_reg(&Bn::from_dig(4), 8, 4).is_err());
}

#[test]
fn test_jsf() {
    let k = hex(A);
    let l = hex(B);
    let jsf = rec_jsf(&k, &l).unwrap();
    let c0: Vec<i8> = jsf.iter().map(|d| d[0]).collect();
    let c1: Vec<i8> = jsf.iter().map(|d| d[1]).collect();
    assert_eq!(eval_signed(&c0, 1), k);
    assert_eq!(eval_signed(&c1, 1), l);
}

#[test]
fn test_glv_decomposition() {
    let n = hex(secp256k1::K256_N);
    let lambda = hex(secp256k1::K256_LAMBDA);
    let basis = GlvBasis::new(&n, &lambda).unwrap();
    let mut rng = rng();
    for _ in 0..20 {
        let k = Bn::rand_mod(&mut rng, &n).unwrap();
        let (k1, k2) = rec_glv(&k, &n, &basis).unwrap();
        assert!(k1.bits() <= 129 && k2.bits() <= 129);
        let back = k1.add(&k2.mul(&lambda).unwrap()).unwrap().modp(&n).unwrap();
        assert_eq!(back, k);
    }
}

mod secp256k1 {
    pub const K256_N: &str = "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";
    pub const K256_LAMBDA: &str = "0x5363AD4CC05C30E0A5261C028812645A122E22EA20816678DF02967C1B23BD72";
}

#[test]
fn test_frb_decomposition() {
    // BLS12-381: v with sum v_i z^i = k mod r
    let z = hex("-0xd201000000010000");
    let r = z.sqr().unwrap().sqr().unwrap().sub(&z.sqr().unwrap()).unwrap().add_dig(1).unwrap();
    let zero = Bn::zero;
    let one = Bn::one;
    let rows = vec![
        vec![z.clone(), one().neg(), zero(), zero()],
        vec![zero(), z.clone(), one().neg(), zero()],
        vec![zero(), zero(), z.clone(), one().neg()],
        vec![one(), zero(), one().neg(), z.clone()],
    ];
    let basis = FrbBasis::new(rows).unwrap();
    let mut rng = rng();
    for _ in 0..10 {
        let k = Bn::rand_mod(&mut rng, &r).unwrap();
        let v = rec_frb(&k, &r, &basis).unwrap();
        let mut acc = Bn::zero();
        let mut zi = Bn::one();
        for vi in &v {
            assert!(vi.bits() <= 64);
            acc = acc.add(&vi.mul(&zi).unwrap()).unwrap();
            zi = zi.mul(&z).unwrap();
        }
        assert_eq!(acc.modp(&r).unwrap(), k);
    }
}

#[test]
fn test_sac() {
    let k = vec![hex("0x1234567"), hex("0xabcdef"), hex("0x0"), hex("0x7fffff")];
    let cols = rec_sac(&k, 30).unwrap();
    for (j, digits) in cols.iter().enumerate() {
        assert_eq!(eval_signed(digits, 1), k[j]);
        for i in 0..30 {
            assert!(digits[i] == 0 || digits[i] == cols[0][i]);
        }
    }
    assert!(rec_sac(&[hex("0x10")], 8).is_err());
}

#[test]
fn test_tnaf() {
    for mu in [1i8, -1] {
        let k = hex(B);
        let digits = rec_tnaf(&k, mu).unwrap();
        // evaluate in Z[τ] with τ^2 = μτ - 2
        let (mut a, mut b) = (Bn::zero(), Bn::zero());
        let (mut pa, mut pb) = (Bn::one(), Bn::zero());
        for (i, &u) in digits.iter().enumerate() {
            if i + 1 < digits.len() {
                assert!(u == 0 || digits[i + 1] == 0);
            }
            let u = Bn::from_i64(u as i64);
            a = a.add(&u.mul(&pa).unwrap()).unwrap();
            b = b.add(&u.mul(&pb).unwrap()).unwrap();
            let na = pb.dbl().unwrap().neg();
            let nb = if mu == 1 { pa.add(&pb).unwrap() } else { pa.sub(&pb).unwrap() };
            pa = na;
            pb = nb;
        }
        assert_eq!(a, k);
        assert!(b.is_zero());
    }
}
