//! H64 Kernel
//!
//! Four `u64` lanes over 32-byte blocks. Convergence merges every lane back
//! into the accumulator, and the tail runs in three widths (8, 4, 1).

use super::constants::{BLOCK64, PRIME64_1, PRIME64_2, PRIME64_3, PRIME64_4, PRIME64_5};
use super::read::{block_words64, read_u32_le, read_u64_le};

// =============================================================================
// PRIMITIVES
// =============================================================================

/// One lane step: `rotl(acc + input * P2, 31) * P1`.
#[inline]
pub const fn round(acc: u64, input: u64) -> u64 {
    acc.wrapping_add(input.wrapping_mul(PRIME64_2))
        .rotate_left(31)
        .wrapping_mul(PRIME64_1)
}

/// Folds a lane into the converged accumulator.
#[inline]
pub const fn merge(acc: u64, lane: u64) -> u64 {
    (acc ^ round(0, lane))
        .wrapping_mul(PRIME64_1)
        .wrapping_add(PRIME64_4)
}

/// Final bit mixer.
#[inline]
pub const fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(PRIME64_2);
    h ^= h >> 29;
    h = h.wrapping_mul(PRIME64_3);
    h ^= h >> 32;
    h
}

// =============================================================================
// LANES
// =============================================================================

/// The four lane accumulators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lanes64 {
    v: [u64; 4],
}

impl Lanes64 {
    /// Seed-to-lanes initialization.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        Self {
            v: [
                seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
                seed.wrapping_add(PRIME64_2),
                seed,
                seed.wrapping_sub(PRIME64_1),
            ],
        }
    }

    /// Runs one block stage iteration.
    #[inline]
    pub fn consume(&mut self, block: &[u8; BLOCK64]) {
        for (lane, word) in self.v.iter_mut().zip(block_words64(block)) {
            *lane = round(*lane, word);
        }
    }

    #[inline]
    pub fn consume_blocks(&mut self, blocks: &[[u8; BLOCK64]]) {
        for block in blocks {
            self.consume(block);
        }
    }

    /// Collapses the lanes once at least one block has been consumed.
    #[inline]
    pub const fn converge(&self) -> u64 {
        let [v1, v2, v3, v4] = self.v;
        let h = v1
            .rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18));
        merge(merge(merge(merge(h, v1), v2), v3), v4)
    }
}

// =============================================================================
// FINALIZATION
// =============================================================================

/// Starting value when no block was ever consumed.
#[inline]
pub const fn small_input_start(seed: u64) -> u64 {
    seed.wrapping_add(PRIME64_5)
}

/// Tail stage over the residual bytes followed by the avalanche.
///
/// `h` must already carry the converged value and the injected length.
pub fn finish(mut h: u64, tail: &[u8]) -> u64 {
    let (words, rest) = tail.as_chunks::<8>();
    for word in words {
        h ^= round(0, read_u64_le(word));
        h = h.rotate_left(27).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4);
    }

    // At most one half-word remains after the 8-byte loop.
    let bytes = match rest.split_first_chunk::<4>() {
        Some((half, bytes)) => {
            h ^= u64::from(read_u32_le(half)).wrapping_mul(PRIME64_1);
            h = h.rotate_left(23).wrapping_mul(PRIME64_2).wrapping_add(PRIME64_3);
            bytes
        }
        None => rest,
    };

    for &byte in bytes {
        h ^= u64::from(byte).wrapping_mul(PRIME64_5);
        h = h.rotate_left(11).wrapping_mul(PRIME64_1);
    }
    avalanche(h)
}

// =============================================================================
// ONE-SHOT
// =============================================================================

/// Hashes a contiguous input.
pub fn oneshot(input: &[u8], seed: u64) -> u64 {
    let (blocks, tail) = input.as_chunks::<BLOCK64>();

    let h = if blocks.is_empty() {
        small_input_start(seed)
    } else {
        let mut lanes = Lanes64::new(seed);
        lanes.consume_blocks(blocks);
        lanes.converge()
    };

    finish(h.wrapping_add(input.len() as u64), tail)
}

// =============================================================================
// TESTS
// =============================================================================
