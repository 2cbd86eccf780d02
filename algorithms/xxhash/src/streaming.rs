//! Streaming Hasher
//!
//! Incremental states for both variants. Input may arrive in chunks of any
//! size; the digest equals the one-shot digest of the concatenation.
//!
//! States are plain values with no heap data. They can live on the stack,
//! inside another struct, or in a `Box`.

use crate::canonical::{Canonical32, Canonical64};
use crate::kernels::constants::{BLOCK32, BLOCK64};
use crate::kernels::xxh32::{self, Lanes32};
use crate::kernels::xxh64::{self, Lanes64};
use core::hash::{BuildHasher, Hasher};

#[cfg(feature = "digest-trait")]
use crypto_common::{Key, KeyInit, KeySizeUser};
#[cfg(feature = "digest-trait")]
use digest::typenum::{U4, U8};
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, FixedOutputReset, HashMarker, OutputSizeUser, Reset, Update};

// =============================================================================
// H32 STATE
// =============================================================================

/// Streaming H32 state.
///
/// The byte counter is 32 bits wide and wraps after 4 GiB. Only the low 32
/// bits of the length ever reach the digest, so the wrap is invisible in the
/// output and matches [`crate::hash32`] for every input length.
#[derive(Debug, Clone)]
pub struct Xxh32 {
    /// Bytes ingested, modulo 2^32
    total_len: u32,
    /// Set once 16 bytes have been seen; selects the converged branch
    large: bool,
    lanes: Lanes32,
    /// Pending tail input (`buffered < BLOCK32` between calls)
    buffer: [u8; BLOCK32],
    buffered: usize,
    seed: u32,
}

impl Xxh32 {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a state seeded with `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            total_len: 0,
            large: false,
            lanes: Lanes32::new(seed),
            buffer: [0; BLOCK32],
            buffered: 0,
            seed,
        }
    }

    /// Discard all input and start over with `seed`.
    pub fn reset(&mut self, seed: u32) {
        log::trace!("xxh32 state reset (seed={seed:#010x})");
        *self = Self::new(seed);
    }

    /// Overwrite this state with a deep copy of `src`.
    pub fn copy_from(&mut self, src: &Self) {
        self.clone_from(src);
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Feed the next chunk of input.
    #[allow(clippy::cast_possible_truncation)]
    pub fn update(&mut self, data: &[u8]) {
        // Both the counter and the threshold test are modulo 2^32.
        self.total_len = self.total_len.wrapping_add(data.len() as u32);
        self.large |= data.len() >= BLOCK32 || self.total_len >= BLOCK32 as u32;

        // Not enough for a block: just accumulate
        if self.buffered + data.len() < BLOCK32 {
            self.buffer[self.buffered..self.buffered + data.len()].copy_from_slice(data);
            self.buffered += data.len();
            return;
        }

        let mut data = data;

        // Complete the pending block first
        if self.buffered > 0 {
            let (fill, rest) = data.split_at(BLOCK32 - self.buffered);
            self.buffer[self.buffered..].copy_from_slice(fill);
            self.lanes.consume(&self.buffer);
            self.buffered = 0;
            data = rest;
        }

        let (blocks, tail) = data.as_chunks::<BLOCK32>();
        self.lanes.consume_blocks(blocks);

        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Digest of everything fed so far. The state is left untouched.
    #[must_use]
    pub fn digest(&self) -> u32 {
        let h = if self.large {
            self.lanes.converge()
        } else {
            xxh32::small_input_start(self.seed)
        };
        xxh32::finish(
            h.wrapping_add(self.total_len),
            &self.buffer[..self.buffered],
        )
    }

    /// Digest in canonical (big-endian) form.
    #[must_use]
    pub fn canonical_digest(&self) -> Canonical32 {
        Canonical32::from_hash(self.digest())
    }

    /// Bytes ingested since the last reset, modulo 2^32.
    #[must_use]
    pub const fn total_len(&self) -> u32 {
        self.total_len
    }

    /// Seed given to the last `new` or `reset`.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }
}

// =============================================================================
// H64 STATE
// =============================================================================

/// Streaming H64 state.
#[derive(Debug, Clone)]
pub struct Xxh64 {
    /// Bytes ingested
    total_len: u64,
    lanes: Lanes64,
    /// Pending tail input (`buffered < BLOCK64` between calls)
    buffer: [u8; BLOCK64],
    buffered: usize,
    seed: u64,
}

impl Xxh64 {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Create a state seeded with `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            total_len: 0,
            lanes: Lanes64::new(seed),
            buffer: [0; BLOCK64],
            buffered: 0,
            seed,
        }
    }

    /// Discard all input and start over with `seed`.
    pub fn reset(&mut self, seed: u64) {
        log::trace!("xxh64 state reset (seed={seed:#018x})");
        *self = Self::new(seed);
    }

    /// Overwrite this state with a deep copy of `src`.
    pub fn copy_from(&mut self, src: &Self) {
        self.clone_from(src);
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Feed the next chunk of input.
    pub fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if self.buffered + data.len() < BLOCK64 {
            self.buffer[self.buffered..self.buffered + data.len()].copy_from_slice(data);
            self.buffered += data.len();
            return;
        }

        let mut data = data;

        if self.buffered > 0 {
            let (fill, rest) = data.split_at(BLOCK64 - self.buffered);
            self.buffer[self.buffered..].copy_from_slice(fill);
            self.lanes.consume(&self.buffer);
            self.buffered = 0;
            data = rest;
        }

        let (blocks, tail) = data.as_chunks::<BLOCK64>();
        self.lanes.consume_blocks(blocks);

        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Digest of everything fed so far. The state is left untouched.
    #[must_use]
    pub fn digest(&self) -> u64 {
        let h = if self.total_len >= BLOCK64 as u64 {
            self.lanes.converge()
        } else {
            xxh64::small_input_start(self.seed)
        };
        xxh64::finish(
            h.wrapping_add(self.total_len),
            &self.buffer[..self.buffered],
        )
    }

    /// Digest in canonical (big-endian) form.
    #[must_use]
    pub fn canonical_digest(&self) -> Canonical64 {
        Canonical64::from_hash(self.digest())
    }

    /// Bytes ingested since the last reset.
    #[must_use]
    pub const fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Seed given to the last `new` or `reset`.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for Xxh32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Default for Xxh64 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Hasher for Xxh32 {
    fn finish(&self) -> u64 {
        u64::from(self.digest())
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

impl Hasher for Xxh64 {
    fn finish(&self) -> u64 {
        self.digest()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

/// Builds seeded [`Xxh32`] states, e.g. for `HashMap::with_hasher`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildXxh32 {
    seed: u32,
}

impl BuildXxh32 {
    /// Builder whose hashers all start from `seed`.
    #[must_use]
    pub const fn with_seed(seed: u32) -> Self {
        Self { seed }
    }
}

impl BuildHasher for BuildXxh32 {
    type Hasher = Xxh32;

    fn build_hasher(&self) -> Xxh32 {
        Xxh32::new(self.seed)
    }
}

/// Builds seeded [`Xxh64`] states, e.g. for `HashMap::with_hasher`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildXxh64 {
    seed: u64,
}

impl BuildXxh64 {
    /// Builder whose hashers all start from `seed`.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl BuildHasher for BuildXxh64 {
    type Hasher = Xxh64;

    fn build_hasher(&self) -> Xxh64 {
        Xxh64::new(self.seed)
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Xxh32 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::io::Write for Xxh64 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// DIGEST TRAIT IMPL
// =============================================================================
//
// Output is the canonical big-endian digest. The "key" is the canonical
// big-endian encoding of the seed.

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Xxh32 {
    type OutputSize = U4;
}

#[cfg(feature = "digest-trait")]
impl KeySizeUser for Xxh32 {
    type KeySize = U4;
}

#[cfg(feature = "digest-trait")]
impl Update for Xxh32 {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Xxh32 {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(self.canonical_digest().as_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Xxh32 {
    fn reset(&mut self) {
        let seed = self.seed;
        self.reset(seed);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for Xxh32 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(self.canonical_digest().as_bytes());
        let seed = self.seed;
        self.reset(seed);
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Xxh32 {}

#[cfg(feature = "digest-trait")]
impl KeyInit for Xxh32 {
    fn new(key: &Key<Self>) -> Self {
        let mut seed = [0u8; 4];
        seed.copy_from_slice(key.as_slice());
        Self::new(u32::from_be_bytes(seed))
    }
}

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Xxh64 {
    type OutputSize = U8;
}

#[cfg(feature = "digest-trait")]
impl KeySizeUser for Xxh64 {
    type KeySize = U8;
}

#[cfg(feature = "digest-trait")]
impl Update for Xxh64 {
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Xxh64 {
    fn finalize_into(self, out: &mut Output<Self>) {
        out.copy_from_slice(self.canonical_digest().as_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Xxh64 {
    fn reset(&mut self) {
        let seed = self.seed;
        self.reset(seed);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutputReset for Xxh64 {
    fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
        out.copy_from_slice(self.canonical_digest().as_bytes());
        let seed = self.seed;
        self.reset(seed);
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Xxh64 {}

#[cfg(feature = "digest-trait")]
impl KeyInit for Xxh64 {
    fn new(key: &Key<Self>) -> Self {
        let mut seed = [0u8; 8];
        seed.copy_from_slice(key.as_slice());
        Self::new(u64::from_be_bytes(seed))
    }
}

// =============================================================================
// TESTS
// =============================================================================
