//! Affine Miller loops for the twisted pairings

use super::PairingX;
use crate::bn::Bn;
use crate::ep::EpPoint;
use crate::error::Result;
use crate::field::Field;
use crate::fp::Fp;
use crate::fpx::{Cyclotomic, Subfield};

/// Affine point, `None` at infinity
type Aff<F> = Option<(F, F)>;

/// Slope of the line through A and B on y^2 = x^3 + a x + b, `None` when
/// the line is vertical
fn slope<F: Field>(a: &F, p: &(F, F), q: &(F, F)) -> Result<Option<F>> {
    if p.0 != q.0 {
        return Ok(Some(q.1.sub(&p.1).mul(&q.0.sub(&p.0).inv()?)));
    }
    if p.1 != q.1 || p.1.is_zero() {
        return Ok(None);
    }
    let x2 = p.0.sqr();
    Ok(Some(x2.dbl().add(&x2).add(a).mul(&p.1.dbl().inv()?)))
}

/// P + Q from the chord of slope λ through P and Q
fn chord<F: Field>(lambda: &F, p: &(F, F), q: &(F, F)) -> (F, F) {
    let x = lambda.sqr().sub(&p.0).sub(&q.0);
    let y = lambda.mul(&p.0.sub(&x)).sub(&p.1);
    (x, y)
}

impl<T, K> PairingX<T, K>
where
    T: Subfield<K>,
    K: Cyclotomic,
{
    /// Line of slope λ' through T on the twist, at P:
    /// yP - ζ λ' xP + ζ^3 (λ' xT - yT)
    fn twist_line(&self, lambda: &T, t: &(T, T), p: &(Fp<K::Prime>, Fp<K::Prime>)) -> K {
        let a = <T as Subfield<K>>::embed(&lambda.mul_fp(&p.0));
        let b = <T as Subfield<K>>::embed(&lambda.mul(&t.0).sub(&t.1));
        K::from_base(p.1).sub(&a.mul(&self.zeta)).add(&b.mul(&self.zeta3))
    }

    /// f_{n,Q}(P) and [n]Q. A negative n conjugates f and negates the
    /// point.
    pub(super) fn miller_twist(
        &self,
        n: &Bn,
        q: &(T, T),
        p: &(Fp<K::Prime>, Fp<K::Prime>),
    ) -> Result<(K, Aff<T>)> {
        if n.is_zero() {
            return Ok((K::one(), None));
        }
        let a = *self.g2.curve().a();
        let m = n.abs();
        let mut f = K::one();
        let mut t = *q;
        let mut infty = false;
        for i in (0..m.bits() - 1).rev() {
            let Some(lambda) = slope(&a, &t, &t)? else {
                infty = true;
                break;
            };
            f = f.sqr().mul(&self.twist_line(&lambda, &t, p));
            t = chord(&lambda, &t, &t);
            if !m.get_bit(i) {
                continue;
            }
            let Some(lambda) = slope(&a, &t, q)? else {
                // T = -Q: the vertical line lies in a subfield
                infty = true;
                break;
            };
            f = f.mul(&self.twist_line(&lambda, &t, p));
            t = chord(&lambda, &t, q);
        }
        let t = if infty { None } else { Some(t) };
        if n.is_neg() {
            return Ok((f.frb(&self.tower, K::EMBED / 2), t.map(|(x, y)| (x, y.neg()))));
        }
        Ok((f, t))
    }

    fn psi_aff(&self, t: &(T, T), n: usize) -> (T, T) {
        let q = self.g2.psi_n(&EpPoint::from_affine(t.0, t.1), n);
        (q.x, q.y)
    }

    /// Π f_{c_i,Q}(P)^(p^i) times the lines adding up ψ^i([c_i]Q), highest
    /// term first
    pub(super) fn miller_ate(&self, p: &(Fp<K::Prime>, Fp<K::Prime>), q: &(T, T)) -> Result<K> {
        let a = *self.g2.curve().a();
        let mut f = K::one();
        let mut acc: Option<Aff<T>> = None;
        for (i, c) in self.ate.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let (fi, ti) = self.miller_twist(c, q, p)?;
            f = f.mul(&fi.frb(&self.tower, i));
            let ti = ti.map(|t| self.psi_aff(&t, i));
            acc = Some(match (acc, ti) {
                (None, _) => ti,
                (Some(None), _) => ti,
                (Some(s), None) => s,
                (Some(Some(s)), Some(u)) => match slope(&a, &s, &u)? {
                    Some(lambda) => {
                        f = f.mul(&self.twist_line(&lambda, &s, p));
                        Some(chord(&lambda, &s, &u))
                    }
                    None => None,
                },
            });
        }
        Ok(f)
    }

    /// f_{r,P} evaluated at the untwisted image of Q
    pub(super) fn miller_tate(&self, p: &(Fp<K::Prime>, Fp<K::Prime>), q: &(T, T)) -> Result<K> {
        let qx = <T as Subfield<K>>::embed(&q.0).mul(&self.zeta2);
        let qy = <T as Subfield<K>>::embed(&q.1).mul(&self.zeta3);
        // yQ - λ xQ + (λ xT - yT)
        let line = |lambda: &Fp<K::Prime>, t: &(Fp<K::Prime>, Fp<K::Prime>)| {
            qy.sub(&qx.mul_fp(lambda)).add(&K::from_base(lambda.mul(&t.0).sub(&t.1)))
        };

        let a = *self.g1.a();
        let r = self.ord();
        let mut f = K::one();
        let mut t = *p;
        for i in (0..r.bits() - 1).rev() {
            let Some(lambda) = slope(&a, &t, &t)? else {
                break;
            };
            f = f.sqr().mul(&line(&lambda, &t));
            t = chord(&lambda, &t, &t);
            if !r.get_bit(i) {
                continue;
            }
            if t.0 == p.0 {
                // T = -P
                break;
            }
            let Some(lambda) = slope(&a, &t, p)? else {
                break;
            };
            f = f.mul(&line(&lambda, &t));
            t = chord(&lambda, &t, p);
        }
        Ok(f)
    }
}
