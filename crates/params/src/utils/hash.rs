//! Constants for hash functions and hashing to curves

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Largest output of expand_message_xmd with SHA-256 (255 blocks)
pub const XMD_MAX_OUTPUT: usize = 255 * SHA256_OUTPUT_SIZE;

/// Largest domain separation tag accepted by expand_message_xmd
pub const XMD_MAX_DST: usize = 255;

/// Domain separation tag used when the caller supplies none
pub const DEFAULT_DST: &[u8] = b"RELIC";

/// Extra bits sampled when reducing uniform bytes modulo a prime
pub const RAND_DIST: usize = 40;

/// Security parameter k of hash_to_field in bits
pub const HASH_SECURITY: usize = 128;
