//! Message digests and expansion of messages into field elements
//!
//! [`expand_message_xmd`] follows RFC 9380, section 5.3.1, over SHA-256.

use alloc::vec::Vec;

use sha2::{Digest, Sha256};

use crate::error::{validate, Result};
use crate::field::Field;
use crate::fp::FpParams;

/// SHA-256 output length
pub const MD_LEN: usize = 32;

/// SHA-256 block length
const MD_BLOCK: usize = 64;

/// Security parameter of `hash_to_field`, in bits
const SEC_BITS: usize = 128;

/// SHA-256 of a message
pub fn sha256(msg: &[u8]) -> [u8; MD_LEN] {
    Sha256::digest(msg).into()
}

/// Expand `msg` into `len` uniform bytes under the domain separation tag
/// `dst`. Fails with `NoBuffer` when `len` exceeds 255 blocks or the tag is
/// longer than 255 bytes.
pub fn expand_message_xmd(msg: &[u8], dst: &[u8], len: usize) -> Result<Vec<u8>> {
    validate::max_length("md_xmd", len, 255 * MD_LEN)?;
    validate::max_length("md_xmd_dst", dst.len(), 255)?;
    let ell = (len + MD_LEN - 1) / MD_LEN;
    let dst_len = [dst.len() as u8];

    let b0: [u8; MD_LEN] = Sha256::new()
        .chain_update([0u8; MD_BLOCK])
        .chain_update(msg)
        .chain_update((len as u16).to_be_bytes())
        .chain_update([0u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize()
        .into();

    let mut out = Vec::with_capacity(ell * MD_LEN);
    let mut bi = [0u8; MD_LEN];
    for i in 1..=ell {
        let mut x = b0;
        for (a, b) in x.iter_mut().zip(&bi) {
            *a ^= b;
        }
        bi = Sha256::new()
            .chain_update(x)
            .chain_update([i as u8])
            .chain_update(dst)
            .chain_update(dst_len)
            .finalize()
            .into();
        out.extend_from_slice(&bi);
    }
    out.truncate(len);
    Ok(out)
}

/// Bytes drawn per prime-field coordinate
pub const fn field_chunk<P: FpParams>() -> usize {
    (P::BITS + SEC_BITS + 7) / 8
}

/// `count` elements of F from a message, each coordinate reduced from
/// `field_chunk` uniform bytes.
pub fn hash_to_field<F: Field>(msg: &[u8], dst: &[u8], count: usize) -> Result<Vec<F>> {
    let chunk = field_chunk::<F::Prime>() * F::DEGREE;
    let bytes = expand_message_xmd(msg, dst, count * chunk)?;
    bytes.chunks_exact(chunk).map(F::from_uniform).collect()
}

#[cfg(test)]
mod tests;
