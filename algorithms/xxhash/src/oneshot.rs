//! Public API Layer
//!
//! One-shot entry points. These allocate nothing and read the input once.
use crate::canonical::{Canonical32, Canonical64};
use crate::kernels::{xxh32, xxh64};
use subtle::ConstantTimeEq;

// =============================================================================
// H32
// =============================================================================

/// Compute the 32-bit digest of `input`.
///
/// # Example
/// ```rust
/// assert_eq!(xxhash::hash32(b"", 0), 0x02CC_5D05);
/// ```
#[must_use]
#[inline]
pub fn hash32(input: &[u8], seed: u32) -> u32 {
    xxh32::oneshot(input, seed)
}

/// Compute the 32-bit digest in canonical (big-endian) form.
#[must_use]
#[inline]
pub fn hash32_canonical(input: &[u8], seed: u32) -> Canonical32 {
    Canonical32::from_hash(hash32(input, seed))
}

// =============================================================================
// H64
// =============================================================================

/// Compute the 64-bit digest of `input`.
///
/// # Example
/// ```rust
/// assert_eq!(xxhash::hash64(b"a", 0), 0xD24E_C4F1_A98C_6E5B);
/// ```
#[must_use]
#[inline]
pub fn hash64(input: &[u8], seed: u64) -> u64 {
    xxh64::oneshot(input, seed)
}

/// Compute the 64-bit digest in canonical (big-endian) form.
#[must_use]
#[inline]
pub fn hash64_canonical(input: &[u8], seed: u64) -> Canonical64 {
    Canonical64::from_hash(hash64(input, seed))
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Check `input` against a stored canonical H32 digest.
///
/// The comparison does not short-circuit on the first differing byte. This is
/// an integrity check, not authentication.
///
/// # Example
/// ```rust
/// let stored = xxhash::hash32_canonical(b"frame", 0);
/// assert!(xxhash::verify32(b"frame", 0, &stored));
/// assert!(!xxhash::verify32(b"frame", 1, &stored));
/// ```
#[must_use]
pub fn verify32(input: &[u8], seed: u32, expected: &Canonical32) -> bool {
    let computed = hash32_canonical(input, seed);
    computed.digest[..].ct_eq(&expected.digest[..]).into()
}

/// Check `input` against a stored canonical H64 digest.
#[must_use]
pub fn verify64(input: &[u8], seed: u64, expected: &Canonical64) -> bool {
    let computed = hash64_canonical(input, seed);
    computed.digest[..].ct_eq(&expected.digest[..]).into()
}
