//! Point encodings
//!
//! Infinity is the single byte 0x00. Other points start with a tag: 0x02 or
//! 0x03 followed by x for the compressed form, the low bit carrying the sign
//! of y, or 0x04 followed by x and y.

use relic_api::Serialize;

use super::{EpCurve, EpPoint};
use crate::error::{no_valid, validate, Result};
use crate::field::Field;

const TAG_INFTY: u8 = 0x00;
const TAG_PACK: u8 = 0x02;
const TAG_FULL: u8 = 0x04;

impl<F: Field> EpCurve<F> {
    /// Length of the encoding of P
    pub fn size_bin(&self, p: &EpPoint<F>, pack: bool) -> usize {
        if p.is_infty() {
            1
        } else if pack {
            1 + F::BYTES
        } else {
            1 + 2 * F::BYTES
        }
    }

    /// Encode P into `out`, which must hold exactly `size_bin(p, pack)` bytes
    pub fn write_bin(&self, p: &EpPoint<F>, out: &mut [u8], pack: bool) -> Result<()> {
        validate::length("ep_write_bin", out.len(), self.size_bin(p, pack))?;
        if p.is_infty() {
            out[0] = TAG_INFTY;
            return Ok(());
        }
        let q = self.norm(p);
        let (x, y) = out[1..].split_at_mut(F::BYTES);
        q.x.write_bin(x, false)?;
        if pack {
            out[0] = TAG_PACK | q.y.sgn0() as u8;
        } else {
            q.y.write_bin(y, false)?;
            out[0] = TAG_FULL;
        }
        Ok(())
    }

    /// Decode a point, rejecting encodings that are not on the curve
    pub fn read_bin(&self, bytes: &[u8]) -> Result<EpPoint<F>> {
        validate::min_length("ep_read_bin", bytes.len(), 1)?;
        let tag = bytes[0];
        let p = match tag {
            TAG_INFTY => {
                validate::length("ep_read_bin", bytes.len(), 1)?;
                return Ok(EpPoint::infinity());
            }
            0x02 | 0x03 => {
                validate::length("ep_read_bin", bytes.len(), 1 + F::BYTES)?;
                let x = F::read_bin(&bytes[1..])?;
                let y = match self.rhs(&x).srt() {
                    Some(y) => y,
                    None => {
                        tracing::trace!(curve = self.name, "compressed x without a point");
                        return Err(no_valid("ep_read_bin"));
                    }
                };
                if y.is_zero() && tag & 1 == 1 {
                    tracing::trace!(curve = self.name, "odd sign on a zero ordinate");
                    return Err(no_valid("ep_read_bin"));
                }
                let y = if y.sgn0() != (tag & 1 == 1) { y.neg() } else { y };
                EpPoint::from_affine(x, y)
            }
            TAG_FULL => {
                validate::length("ep_read_bin", bytes.len(), 1 + 2 * F::BYTES)?;
                let x = F::read_bin(&bytes[1..1 + F::BYTES])?;
                let y = F::read_bin(&bytes[1 + F::BYTES..])?;
                EpPoint::from_affine(x, y)
            }
            _ => {
                tracing::trace!(curve = self.name, tag, "unknown point tag");
                return Err(no_valid("ep_read_bin"));
            }
        };
        if !self.on_curve(&p) {
            tracing::trace!(curve = self.name, "decoded point is not on the curve");
            return Err(no_valid("ep_read_bin"));
        }
        Ok(p)
    }
}
