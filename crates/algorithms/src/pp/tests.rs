use super::*;
use crate::error::ErrorKind;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x9a1)
}

type MapFn<P> = fn(&Pairing<P>, &G1<P>, &G2<P>) -> Result<Gt<P>>;

fn check_map<P: FpParams>(e: &Pairing<P>, map: MapFn<P>, rng: &mut ChaCha20Rng) {
    let (p, q) = (e.g1().gen(), e.g2().gen());
    let g = map(e, &p, &q).unwrap();
    assert_ne!(g, Fp12::one());
    assert_eq!(g.exp(e.ord()).unwrap(), Fp12::one());
    assert!(g.test_cyc(e.tower()));

    let a = Bn::rand_mod(rng, e.ord()).unwrap();
    let b = Bn::rand_mod(rng, e.ord()).unwrap();
    let pa = e.g1().mul(&p, &a).unwrap();
    let qb = e.g2().mul(&q, &b).unwrap();
    let ab = a.mul(&b).unwrap().modp(e.ord()).unwrap();
    assert_eq!(map(e, &pa, &qb).unwrap(), g.exp(&ab).unwrap());
    // projective inputs give the same value
    assert_eq!(map(e, &e.g1().dbl(&p), &q).unwrap(), map(e, &p, &e.g2().curve().dbl(&q)).unwrap());

    assert_eq!(map(e, &G1::infinity(), &q).unwrap(), Fp12::one());
    assert_eq!(map(e, &p, &G2::infinity()).unwrap(), Fp12::one());
}

fn check_pairing<P: FpParams>(e: &Pairing<P>, rng: &mut ChaCha20Rng) {
    check_map(e, Pairing::map_oatep, rng);
    check_map(e, Pairing::map_tatep, rng);
    check_map(e, Pairing::map_weilp, rng);

    let p = e.g1().rand(rng).unwrap();
    let q = e.g2().rand(rng).unwrap();
    let a = e.map_oatep(&p, &q).unwrap();
    assert_eq!(e.map_lazy(&p, &q).unwrap(), a);
    assert_eq!(e.map(&p, &q).unwrap(), match PP_MAP {
        PpMap::Oatep => a,
        PpMap::Tatep => e.map_tatep(&p, &q).unwrap(),
        PpMap::Weilp => e.map_weilp(&p, &q).unwrap(),
    });

    // products share one loop
    let p2 = e.g1().rand(rng).unwrap();
    let q2 = e.g2().rand(rng).unwrap();
    let b = e.map_oatep(&p2, &q2).unwrap();
    let ps = [p, G1::infinity(), p2];
    let qs = [q, q2, q2];
    assert_eq!(e.map_sim_oatep(&ps, &qs).unwrap(), a.mul(&b));
    assert_eq!(e.map_sim(&ps, &qs).unwrap(), e.map(&p, &q).unwrap().mul(&e.map(&p2, &q2).unwrap()));
    let t = e.map_tatep(&p, &q).unwrap().mul(&e.map_tatep(&p2, &q2).unwrap());
    assert_eq!(e.map_sim_tatep(&ps, &qs).unwrap(), t);
    let w = e.map_weilp(&p, &q).unwrap().mul(&e.map_weilp(&p2, &q2).unwrap());
    assert_eq!(e.map_sim_weilp(&ps, &qs).unwrap(), w);
    assert_eq!(e.map_sim_oatep(&[], &[]).unwrap(), Fp12::one());
    let err = e.map_sim_oatep(&ps, &qs[..2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoBuffer);

    // e(P, -Q) e(P, Q) = 1
    let nq = e.g2().curve().neg(&q);
    assert_eq!(e.map_sim_oatep(&[p, p], &[q, nq]).unwrap(), Fp12::one());
}

/// The hard part equals a fixed power c of the textbook exponent
fn check_final_exp<P: FpParams>(e: &Pairing<P>, c: &Bn, rng: &mut ChaCha20Rng) {
    let p = Fp::<P>::modulus();
    let p2 = p.sqr().unwrap();
    let phi = p2.sqr().unwrap().sub(&p2).unwrap().add_dig(1).unwrap();
    let (h, rem) = phi.div_rem(e.ord()).unwrap();
    assert!(rem.is_zero());

    let f = Fp12::rand(rng);
    let easy = e.exp_easy(&f).unwrap();
    assert!(easy.test_cyc(e.tower()));
    let expect = easy.exp(&h.mul(c).unwrap()).unwrap();
    assert_eq!(e.final_exp(&f).unwrap(), expect);
}

/// oatep^Y weilp^(c h X) = tatep^X on inputs away from the generators
fn check_weil_relation<P: FpParams>(e: &Pairing<P>, rng: &mut ChaCha20Rng) {
    let p = e.g1().rand(rng).unwrap();
    let q = e.g2().rand(rng).unwrap();
    let c = e.ate_vector().unwrap();
    let (y, w, x) = crate::ppx::tests::weil_relation(12, &Fp::<P>::modulus(), e.ord(), &c, &e.hard_power().unwrap());
    let a = e.map_oatep(&p, &q).unwrap();
    let t = e.map_tatep(&p, &q).unwrap();
    let wv = e.map_weilp(&p, &q).unwrap();
    assert_ne!(wv, Fp12::one());
    assert_eq!(a.exp_cyc(&y).unwrap().mul(&wv.exp_cyc(&w).unwrap()), t.exp_cyc(&x).unwrap());
}

/// Products of Weil pairings stay bilinear in every slot
fn check_sim_weil<P: FpParams>(e: &Pairing<P>, rng: &mut ChaCha20Rng) {
    let (p1, p2) = (e.g1().rand(rng).unwrap(), e.g1().rand(rng).unwrap());
    let (q1, q2) = (e.g2().rand(rng).unwrap(), e.g2().rand(rng).unwrap());
    let a = Bn::rand_mod(rng, e.ord()).unwrap();
    let b = Bn::rand_mod(rng, e.ord()).unwrap();
    let ps = [e.g1().mul(&p1, &a).unwrap(), p2];
    let qs = [q1, e.g2().mul(&q2, &b).unwrap()];
    let w1 = e.map_weilp(&p1, &q1).unwrap().exp_cyc(&a).unwrap();
    let w2 = e.map_weilp(&p2, &q2).unwrap().exp_cyc(&b).unwrap();
    assert_eq!(e.map_sim_weilp(&ps, &qs).unwrap(), w1.mul(&w2));
    // e_W(P, Q) e_W(-P, Q) = 1
    let np = e.g1().neg(&p1);
    assert_eq!(e.map_sim_weilp(&[p1, np], &[q1, q1]).unwrap(), Fp12::one());
}

#[test]
fn test_bn_p254() {
    let e = bn_p254().unwrap();
    assert_eq!(e.family(), Family::Bn);
    assert_eq!(e.twist(), Twist::D);
    let mut rng = rng();
    check_pairing(&e, &mut rng);

    let z = e.seed().clone();
    let c = z.sqr().unwrap().mul_dig(6).unwrap().add(&z.mul_dig(3).unwrap()).unwrap().add_dig(1).unwrap();
    check_final_exp(&e, &z.dbl().unwrap().mul(&c).unwrap(), &mut rng);
    assert_eq!(e.hard_power().unwrap(), z.dbl().unwrap().mul(&c).unwrap());
    check_weil_relation(&e, &mut rng);
    check_sim_weil(&e, &mut rng);
}

#[test]
fn test_b12_p381() {
    let e = b12_p381().unwrap();
    assert_eq!(e.family(), Family::B12);
    assert_eq!(e.twist(), Twist::M);
    let mut rng = rng();
    check_pairing(&e, &mut rng);
    check_final_exp(&e, &Bn::from_dig(3), &mut rng);
    check_weil_relation(&e, &mut rng);
    check_sim_weil(&e, &mut rng);
}

#[test]
fn test_b12_p377() {
    let e = b12_p377().unwrap();
    assert_eq!(e.twist(), Twist::D);
    let mut rng = rng();
    check_map(&e, Pairing::map_oatep, &mut rng);
    check_final_exp(&e, &Bn::from_dig(3), &mut rng);
}

#[test]
fn test_group_mismatch() {
    let g = ep::bn_p254().unwrap();
    let gen = g.gen();
    let wrong = EpCurve::new("X", *g.a(), *g.b(), gen.x, gen.y, g.ord().add_dig(2).unwrap(), Bn::one()).unwrap();
    let err = Pairing::new(wrong, ep2::bn_p254().unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoValid);
}
