//! Final exponentiation f^((p^k - 1) / r) on the twisted targets
//!
//! The easy part is [`Cyclotomic::conv_cyc`]. For B24 and B48 the hard part
//! runs the BLS chain
//!
//! 3 Φk(p) / r = (u - 1)^2 (u + p) Π_{i<j} (u^(2^i) + p^(2^i)) (u^(2^j) + p^(2^j) - 1) + 3
//!
//! with k = 3 2^(j+1). The other families raise the Frobenius images of f to
//! the base-p digits of Φk(p) / r.

use super::{Hard, PairingX};
use crate::bn::Bn;
use crate::error::Result;
use crate::field::Field;
use crate::fpx::{Cyclotomic, Subfield};

impl<T, K> PairingX<T, K>
where
    T: Subfield<K>,
    K: Cyclotomic,
{
    /// f^((p^(k/2) - 1)(p^(k/6) + 1)), or f^(p^(k/2) - 1) when 6 does not
    /// divide k
    pub fn exp_easy(&self, f: &K) -> Result<K> {
        f.conv_cyc(&self.tower)
    }

    fn exp_u(&self, f: &K, times: usize) -> Result<K> {
        (0..times).try_fold(*f, |a, _| a.exp_cyc(self.g2.seed()))
    }

    /// Hard part on an element of the cyclotomic subgroup, a fixed power
    /// [`PairingX::hard_power`] of f^(Φk(p) / r)
    pub fn exp_hard(&self, f: &K) -> Result<K> {
        let tw = &self.tower;
        match &self.hard {
            Hard::Chain(j) => {
                let a = self.exp_u(f, 1)?.mul(&f.inv_cyc());
                let a = self.exp_u(&a, 1)?.mul(&a.inv_cyc());
                let mut a = self.exp_u(&a, 1)?.mul(&a.frb(tw, 1));
                for i in 1..*j {
                    let m = 1 << i;
                    a = self.exp_u(&a, m)?.mul(&a.frb(tw, m));
                }
                let m = 1 << j;
                let a = self.exp_u(&a, m)?.mul(&a.frb(tw, m)).mul(&a.inv_cyc());
                Ok(a.mul(&f.sqr_cyc().mul(f)))
            }
            Hard::Digits(digits) => {
                let mut r = K::one();
                for (i, d) in digits.iter().enumerate() {
                    r = r.mul(&f.exp_cyc(d)?.frb(tw, i));
                }
                Ok(r)
            }
        }
    }

    /// c with exp_hard(f) = f^(c Φk(p) / r)
    pub fn hard_power(&self) -> Bn {
        match self.hard {
            Hard::Chain(_) => Bn::from_dig(3),
            Hard::Digits(_) => Bn::one(),
        }
    }

    /// Full final exponentiation
    pub fn final_exp(&self, f: &K) -> Result<K> {
        let t = self.exp_easy(f)?;
        self.exp_hard(&t)
    }
}
