#![cfg_attr(not(feature = "std"), no_std)]

//! # xxhash
//!
//! Seeded, non-cryptographic hash family with a 32-bit variant (H32) and a
//! 64-bit variant (H64). Digests are identical on every platform regardless
//! of endianness or alignment, and identical between one-shot and streaming
//! use.
//!
//! Not suitable where an adversary picks the input: there is no collision
//! resistance beyond what the seed provides.

//! # Usage
//! ```rust
//! use xxhash::{Xxh32, Xxh64};
//!
//! // 1. One-shot
//! let h32 = xxhash::hash32(b"Performance Matters", 0);
//! let h64 = xxhash::hash64(b"Performance Matters", 0);
//!
//! // 2. Streaming (same digests, any chunking)
//! let mut state = Xxh64::new(0);
//! state.update(b"Performance ");
//! state.update(b"Matters");
//! assert_eq!(state.digest(), h64);
//!
//! let mut state = Xxh32::new(0);
//! state.update(b"Performance Matters");
//! assert_eq!(state.digest(), h32);
//!
//! // 3. Canonical (big-endian) bytes for storage
//! let stored = xxhash::canonical_from_hash64(h64);
//! assert_eq!(xxhash::hash_from_canonical64(&stored), h64);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod canonical;
mod engine;
#[cfg(feature = "std")]
mod ffi;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use canonical::{
    canonical_from_hash32, canonical_from_hash64, hash_from_canonical32, hash_from_canonical64,
    Canonical32, Canonical64,
};
#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::parallel::{hash32_batch, hash64_batch};
pub use oneshot::{hash32, hash32_canonical, hash64, hash64_canonical, verify32, verify64};
pub use streaming::{BuildXxh32, BuildXxh64, Xxh32, Xxh64};
pub use types::{HashError, XxhErrorCode};

/// Library version as `MAJOR * 10000 + MINOR * 100 + RELEASE` (currently 602).
#[must_use]
pub const fn version_number() -> u32 {
    kernels::constants::VERSION_NUMBER
}

/// Library version as `(MAJOR, MINOR, RELEASE)`.
pub const VERSION: (u32, u32, u32) = (
    kernels::constants::VERSION_MAJOR,
    kernels::constants::VERSION_MINOR,
    kernels::constants::VERSION_RELEASE,
);
