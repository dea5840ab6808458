//! Byte serialization of engine values

use crate::Result;

#[cfg(feature = "alloc")]
use zeroize::Zeroizing;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};

/// Fixed-format byte codec for integers, field elements and points.
///
/// `pack` selects the compressed form where one exists and is ignored
/// otherwise.
pub trait Serialize: Sized {
    /// Number of bytes `write_bin` produces.
    fn size_bin(&self, pack: bool) -> usize;

    /// Write into `out`, which must hold exactly `size_bin(pack)` bytes.
    fn write_bin(&self, out: &mut [u8], pack: bool) -> Result<()>;

    /// Decode a value, rejecting malformed or out-of-range encodings.
    fn read_bin(bytes: &[u8]) -> Result<Self>;

    /// Encode into a freshly allocated buffer.
    #[cfg(feature = "alloc")]
    fn to_bytes(&self, pack: bool) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.size_bin(pack)];
        self.write_bin(&mut out, pack)?;
        Ok(out)
    }

    /// Encode a secret value into a buffer wiped on drop.
    #[cfg(feature = "alloc")]
    fn to_bytes_zeroizing(&self, pack: bool) -> Result<Zeroizing<Vec<u8>>> {
        let mut out = Zeroizing::new(vec![0u8; self.size_bin(pack)]);
        self.write_bin(&mut out, pack)?;
        Ok(out)
    }
}
