//! H32 Kernel
//!
//! Four `u32` lanes over 16-byte blocks. The one-shot path and the streaming
//! digest share [`Lanes32`] and [`finish`], which is what keeps them
//! bit-identical.

use super::constants::{BLOCK32, PRIME32_1, PRIME32_2, PRIME32_3, PRIME32_4, PRIME32_5};
use super::read::{block_words32, read_u32_le};

// =============================================================================
// PRIMITIVES
// =============================================================================

/// One lane step: `rotl(acc + input * P2, 13) * P1`.
#[inline]
pub const fn round(acc: u32, input: u32) -> u32 {
    acc.wrapping_add(input.wrapping_mul(PRIME32_2))
        .rotate_left(13)
        .wrapping_mul(PRIME32_1)
}

/// Final bit mixer.
#[inline]
pub const fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 15;
    h = h.wrapping_mul(PRIME32_2);
    h ^= h >> 13;
    h = h.wrapping_mul(PRIME32_3);
    h ^= h >> 16;
    h
}

// =============================================================================
// LANES
// =============================================================================

/// The four lane accumulators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lanes32 {
    v: [u32; 4],
}

impl Lanes32 {
    /// Seed-to-lanes initialization.
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self {
            v: [
                seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
                seed.wrapping_add(PRIME32_2),
                seed,
                seed.wrapping_sub(PRIME32_1),
            ],
        }
    }

    /// Runs one block stage iteration.
    #[inline]
    pub fn consume(&mut self, block: &[u8; BLOCK32]) {
        for (lane, word) in self.v.iter_mut().zip(block_words32(block)) {
            *lane = round(*lane, word);
        }
    }

    #[inline]
    pub fn consume_blocks(&mut self, blocks: &[[u8; BLOCK32]]) {
        for block in blocks {
            self.consume(block);
        }
    }

    /// Collapses the lanes once at least one block has been consumed.
    #[inline]
    pub const fn converge(&self) -> u32 {
        let [v1, v2, v3, v4] = self.v;
        v1.rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18))
    }
}

// =============================================================================
// FINALIZATION
// =============================================================================

/// Starting value when no block was ever consumed.
#[inline]
pub const fn small_input_start(seed: u32) -> u32 {
    seed.wrapping_add(PRIME32_5)
}

/// Tail stage over the residual bytes followed by the avalanche.
///
/// `h` must already carry the converged value and the injected length.
pub fn finish(mut h: u32, tail: &[u8]) -> u32 {
    let (words, bytes) = tail.as_chunks::<4>();
    for word in words {
        h = h
            .wrapping_add(read_u32_le(word).wrapping_mul(PRIME32_3))
            .rotate_left(17)
            .wrapping_mul(PRIME32_4);
    }
    for &byte in bytes {
        h = h
            .wrapping_add(u32::from(byte).wrapping_mul(PRIME32_5))
            .rotate_left(11)
            .wrapping_mul(PRIME32_1);
    }
    avalanche(h)
}

// =============================================================================
// ONE-SHOT
// =============================================================================

/// Hashes a contiguous input.
pub fn oneshot(input: &[u8], seed: u32) -> u32 {
    let (blocks, tail) = input.as_chunks::<BLOCK32>();

    let h = if blocks.is_empty() {
        small_input_start(seed)
    } else {
        let mut lanes = Lanes32::new(seed);
        lanes.consume_blocks(blocks);
        lanes.converge()
    };

    // The length is injected modulo 2^32.
    #[allow(clippy::cast_possible_truncation)]
    let len = input.len() as u32;

    finish(h.wrapping_add(len), tail)
}

// =============================================================================
// TESTS
// =============================================================================
