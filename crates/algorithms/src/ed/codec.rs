//! Point encodings
//!
//! The tagged form matches the prime curves except that a packed point
//! carries y and the parity of x. `compress` is the 32-byte little-endian
//! form: y with the parity of x in the top bit.

use relic_api::Serialize;

use super::{EdCurve, EdPoint, Fe};
use crate::error::{no_valid, validate, Result};
use crate::field::Field;

const TAG_NEUTRAL: u8 = 0x00;
const TAG_PACK: u8 = 0x02;
const TAG_FULL: u8 = 0x04;

/// Length of the little-endian compressed form
pub const ED_COMPRESSED: usize = 32;

impl EdCurve {
    /// Length of the tagged encoding of P
    pub fn size_bin(&self, p: &EdPoint, pack: bool) -> usize {
        if p.is_neutral() {
            1
        } else if pack {
            1 + Fe::BYTES
        } else {
            1 + 2 * Fe::BYTES
        }
    }

    /// Tagged encoding of P into exactly `size_bin(p, pack)` bytes
    pub fn write_bin(&self, p: &EdPoint, out: &mut [u8], pack: bool) -> Result<()> {
        validate::length("ed_write_bin", out.len(), self.size_bin(p, pack))?;
        if p.is_neutral() {
            out[0] = TAG_NEUTRAL;
            return Ok(());
        }
        let q = self.norm(p);
        if pack {
            out[0] = TAG_PACK | q.x.is_odd() as u8;
            q.y.write_bin(&mut out[1..], false)?;
        } else {
            out[0] = TAG_FULL;
            let (x, y) = out[1..].split_at_mut(Fe::BYTES);
            q.x.write_bin(x, false)?;
            q.y.write_bin(y, false)?;
        }
        Ok(())
    }

    /// Decode a tagged point, rejecting points off the curve
    pub fn read_bin(&self, bytes: &[u8]) -> Result<EdPoint> {
        validate::min_length("ed_read_bin", bytes.len(), 1)?;
        let tag = bytes[0];
        let p = match tag {
            TAG_NEUTRAL => {
                validate::length("ed_read_bin", bytes.len(), 1)?;
                return Ok(EdPoint::neutral());
            }
            0x02 | 0x03 => {
                validate::length("ed_read_bin", bytes.len(), 1 + Fe::BYTES)?;
                let y = Fe::read_bin(&bytes[1..])?;
                self.recover(y, tag & 1 == 1)?
            }
            TAG_FULL => {
                validate::length("ed_read_bin", bytes.len(), 1 + 2 * Fe::BYTES)?;
                let x = Fe::read_bin(&bytes[1..1 + Fe::BYTES])?;
                let y = Fe::read_bin(&bytes[1 + Fe::BYTES..])?;
                EdPoint::from_affine(x, y)
            }
            _ => {
                tracing::trace!(tag, "unknown point tag");
                return Err(no_valid("ed_read_bin"));
            }
        };
        if !self.on_curve(&p) {
            tracing::trace!("decoded point is not on the curve");
            return Err(no_valid("ed_read_bin"));
        }
        Ok(p)
    }

    /// x from y and its parity: x^2 = (y^2 - 1) / (d y^2 + 1)
    fn recover(&self, y: Fe, odd: bool) -> Result<EdPoint> {
        let y2 = y.sqr();
        let den = self.d.mul(&y2).add(&Fe::one()).inv()?;
        let x2 = y2.sub(&Fe::one()).mul(&den);
        let Some(mut x) = x2.srt() else {
            tracing::trace!("y without a matching x");
            return Err(no_valid("ed_read_bin"));
        };
        if x.is_zero() && odd {
            return Err(no_valid("ed_read_bin"));
        }
        if x.is_odd() != odd {
            x = x.neg();
        }
        Ok(EdPoint::from_affine(x, y))
    }

    /// 32-byte little-endian encoding
    pub fn compress(&self, p: &EdPoint) -> Result<[u8; ED_COMPRESSED]> {
        let q = self.norm(p);
        let mut out = [0u8; ED_COMPRESSED];
        q.y.write_bin(&mut out, false)?;
        out.reverse();
        out[31] |= (q.x.is_odd() as u8) << 7;
        Ok(out)
    }

    /// Inverse of [`EdCurve::compress`]; non-canonical y is rejected
    pub fn decompress(&self, bytes: &[u8]) -> Result<EdPoint> {
        validate::length("ed_decompress", bytes.len(), ED_COMPRESSED)?;
        let mut be = [0u8; ED_COMPRESSED];
        be.copy_from_slice(bytes);
        let odd = be[31] >> 7 == 1;
        be[31] &= 0x7f;
        be.reverse();
        let y = Fe::read_bin(&be)?;
        self.recover(y, odd)
    }
}
