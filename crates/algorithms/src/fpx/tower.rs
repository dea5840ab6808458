//! Frobenius tables of the towers over one prime
//!
//! For θ^e = c over a root field K, write p = qe + r. Then
//! (θ^j)^p = c^(jq + ⌊jr/e⌋) θ^(jr mod e), so the p-power map permutes the
//! θ-coordinates and scales each by a constant. The tables hold that
//! permutation and those constants for every tower degree.

use alloc::vec::Vec;

use super::{ExtField, Fp2, MAX_ROOT_DEG};
use crate::bn::Dig;
use crate::error::{validate, Error, Result};
use crate::field::Field;
use crate::fp::{Fp, FpParams};

/// θ-degrees of the towers over Fp2
const FP2_DEGREES: [usize; 7] = [2, 3, 4, 6, 8, 12, 24];
/// θ-degrees of the towers over Fp
const FP_DEGREES: [usize; 5] = [3, 9, 18, 27, 54];

/// p-power map of a Kummer extension θ^e = c of the root field K
#[derive(Clone, Debug)]
pub struct FrbTable<K> {
    e: usize,
    idx: Vec<usize>,
    cst: Vec<K>,
}

impl<K: ExtField> FrbTable<K> {
    fn new(c: &K, e: usize) -> Result<Self> {
        let p = Fp::<K::Prime>::modulus();
        let (q, r) = p.div_rem_dig(e as Dig)?;
        let r = r as usize;
        let g = c.exp(&q)?;
        let mut idx = Vec::with_capacity(e);
        let mut cst = Vec::with_capacity(e);
        let mut gj = K::one();
        for j in 0..e {
            idx.push((j * r) % e);
            cst.push(gj.mul(&c.exp_limbs(&[((j * r) / e) as Dig])));
            gj = gj.mul(&g);
        }
        Ok(FrbTable { e, idx, cst })
    }

    /// Degree e of the extension
    pub fn degree(&self) -> usize {
        self.e
    }

    /// Constant multiplying θ^j under the p-power map
    pub fn constant(&self, j: usize) -> &K {
        &self.cst[j % self.e]
    }

    fn apply(&self, a: &[K], out: &mut [K], root_frb: impl Fn(&K) -> K) {
        for j in 0..self.e {
            out[self.idx[j]] = root_frb(&a[j]).mul(&self.cst[j]);
        }
    }
}

/// Checked tower parameters of a prime with their Frobenius tables.
#[derive(Clone, Debug)]
pub struct Tower<P: FpParams> {
    fp2: Vec<FrbTable<Fp2<P>>>,
    fp: Vec<FrbTable<Fp<P>>>,
}

impl<P: FpParams> Tower<P> {
    /// Validate the non-residues of `P` and build every table.
    ///
    /// Fails with `NoCurve` when the prime carries no tower, and with
    /// `NoValid` when a non-residue does not make its step irreducible.
    pub fn new() -> Result<Self> {
        let span = tracing::debug_span!("tower_new", prime = P::NAME);
        let _guard = span.enter();

        if P::CNR == 0 || P::XI == (0, 0) {
            return Err(Error::NoCurve { context: "tower_new" });
        }
        let beta = Fp::<P>::from_dis(P::QNR);
        validate::parameter(beta.smb() == -1, "tower_qnr")?;

        let p = Fp::<P>::modulus();
        validate::parameter(p.mod_dig(3)? == 1, "tower_cnr")?;
        let gamma = Fp::<P>::from_dis(P::CNR);
        validate::parameter(!is_cube(&gamma)?, "tower_cnr")?;

        let xi = Fp2::<P>::xi();
        validate::parameter(!xi.is_sqr(), "tower_xi")?;
        validate::parameter(!is_cube(&xi)?, "tower_xi")?;

        let fp2 = FP2_DEGREES
            .iter()
            .map(|&e| FrbTable::new(&xi, e))
            .collect::<Result<Vec<_>>>()?;
        let fp = FP_DEGREES
            .iter()
            .map(|&e| FrbTable::new(&gamma, e))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(fp2 = fp2.len(), fp = fp.len(), "tower ready");
        Ok(Tower { fp2, fp })
    }

    /// Table of the degree-e extension of Fp2, if the tower has one
    pub fn table_fp2(&self, e: usize) -> Option<&FrbTable<Fp2<P>>> {
        self.fp2.iter().find(|t| t.e == e)
    }

    /// Table of the degree-e extension of Fp, if the tower has one
    pub fn table_fp(&self, e: usize) -> Option<&FrbTable<Fp<P>>> {
        self.fp.iter().find(|t| t.e == e)
    }

    /// x^p for an element of a tower over Fp2
    pub fn frb_fp2<X: ExtField<Root = Fp2<P>>>(&self, x: &X) -> X {
        let e = X::ROOT_DEG;
        let Some(t) = self.table_fp2(e) else {
            return x.exp_limbs(&P::MODULUS);
        };
        let mut a = [Fp2::zero(); MAX_ROOT_DEG];
        let mut b = [Fp2::zero(); MAX_ROOT_DEG];
        x.to_root(&mut a[..e]);
        t.apply(&a[..e], &mut b[..e], |y| y.conj());
        X::from_root(&b[..e])
    }

    /// x^p for an element of a tower over Fp
    pub fn frb_fp<X: ExtField<Root = Fp<P>>>(&self, x: &X) -> X {
        let e = X::ROOT_DEG;
        let Some(t) = self.table_fp(e) else {
            return x.exp_limbs(&P::MODULUS);
        };
        let mut a = [Fp::zero(); MAX_ROOT_DEG];
        let mut b = [Fp::zero(); MAX_ROOT_DEG];
        x.to_root(&mut a[..e]);
        t.apply(&a[..e], &mut b[..e], |y| *y);
        X::from_root(&b[..e])
    }
}

/// Cubic residuosity through a^((|K| - 1) / 3)
fn is_cube<K: Field>(a: &K) -> Result<bool> {
    let q = super::field_order::<K>()?;
    let e = q.sub_dig(1)?.div_dig(3)?;
    Ok(a.exp(&e)? == K::one())
}
