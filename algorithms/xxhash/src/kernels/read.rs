//! Little-endian word access.
//!
//! Every multi-byte read in both kernels goes through this module. Input
//! positions carry no alignment guarantee, so words are assembled from byte
//! arrays with `from_le_bytes`, which the compiler lowers to a plain load on
//! little-endian hosts and a load plus byte-swap on big-endian ones.

use super::constants::{BLOCK32, BLOCK64, NUM_LANES};

#[inline]
pub const fn read_u32_le(bytes: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*bytes)
}

#[inline]
pub const fn read_u64_le(bytes: &[u8; 8]) -> u64 {
    u64::from_le_bytes(*bytes)
}

/// Splits an H32 block into its four lane words.
#[inline]
pub fn block_words32(block: &[u8; BLOCK32]) -> [u32; NUM_LANES] {
    let (words, _) = block.as_chunks::<4>();
    core::array::from_fn(|lane| read_u32_le(&words[lane]))
}

/// Splits an H64 block into its four lane words.
#[inline]
pub fn block_words64(block: &[u8; BLOCK64]) -> [u64; NUM_LANES] {
    let (words, _) = block.as_chunks::<8>();
    core::array::from_fn(|lane| read_u64_le(&words[lane]))
}

// =============================================================================
// TESTS
// =============================================================================
