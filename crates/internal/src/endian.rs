//! Big-endian codecs between byte strings and little-endian digit vectors

use byteorder::{BigEndian, ByteOrder};

/// Number of digits needed to hold `len` bytes.
pub const fn digits_for(len: usize) -> usize {
    (len + 7) / 8
}

/// Decode a big-endian byte string into `out`, least significant digit first.
///
/// Digits beyond the input are cleared. `out` must be wide enough.
pub fn digits_from_be(bytes: &[u8], out: &mut [u64]) {
    debug_assert!(digits_for(bytes.len()) <= out.len());
    for d in out.iter_mut() {
        *d = 0;
    }
    for (d, chunk) in out.iter_mut().zip(bytes.rchunks(8)) {
        *d = if chunk.len() == 8 {
            BigEndian::read_u64(chunk)
        } else {
            BigEndian::read_uint(chunk, chunk.len())
        };
    }
}

/// Encode the digits into `out` as a big-endian integer of exactly `out.len()` bytes.
///
/// High digits that do not fit are dropped; missing digits are written as zero.
pub fn digits_to_be(digits: &[u64], out: &mut [u8]) {
    for (i, chunk) in out.rchunks_mut(8).enumerate() {
        let d = digits.get(i).copied().unwrap_or(0);
        if chunk.len() == 8 {
            BigEndian::write_u64(chunk, d);
        } else {
            let n = chunk.len();
            BigEndian::write_uint(chunk, d & ((1u64 << (8 * n)) - 1), n);
        }
    }
}

/// Read one big-endian digit.
#[inline]
pub fn u64_from_be_bytes(bytes: &[u8]) -> u64 {
    BigEndian::read_u64(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_length_roundtrip() {
        let bytes = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a];
        let mut d = [0u64; 2];
        digits_from_be(&bytes, &mut d);
        assert_eq!(d, [0x0304_0506_0708_090a, 0x0102]);

        let mut out = [0u8; 10];
        digits_to_be(&d, &mut out);
        assert_eq!(out, bytes);
    }

    #[test]
    fn test_padding() {
        let mut out = [0xffu8; 12];
        digits_to_be(&[0x1122], &mut out);
        assert_eq!(&out[..10], &[0u8; 10]);
        assert_eq!(&out[10..], &[0x11, 0x22]);
        assert_eq!(digits_for(48), 6);
        assert_eq!(digits_for(49), 7);
        assert_eq!(u64_from_be_bytes(&[0, 0, 0, 0, 0, 0, 1, 0]), 256);
    }
}
