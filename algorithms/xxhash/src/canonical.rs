//! Canonical Encoding
//!
//! Big-endian byte form of a digest, for storage and transmission. The
//! layout is fixed: 4 or 8 bytes, most significant first, no framing.

use crate::kernels::constants::{DIGEST32_SIZE, DIGEST64_SIZE};
use core::fmt;
use static_assertions::assert_eq_size;

// =============================================================================
// CANONICAL TYPES
// =============================================================================

/// Canonical form of an H32 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Canonical32 {
    /// Digest bytes, most significant first.
    pub digest: [u8; DIGEST32_SIZE],
}

/// Canonical form of an H64 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Canonical64 {
    /// Digest bytes, most significant first.
    pub digest: [u8; DIGEST64_SIZE],
}

assert_eq_size!(Canonical32, [u8; 4]);
assert_eq_size!(Canonical64, [u8; 8]);

impl Canonical32 {
    /// Encodes `hash` big-endian.
    #[must_use]
    pub const fn from_hash(hash: u32) -> Self {
        Self {
            digest: hash.to_be_bytes(),
        }
    }

    /// Decodes the big-endian digest.
    #[must_use]
    pub const fn to_hash(&self) -> u32 {
        u32::from_be_bytes(self.digest)
    }

    /// Borrows the canonical bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST32_SIZE] {
        &self.digest
    }
}

impl Canonical64 {
    /// Encodes `hash` big-endian.
    #[must_use]
    pub const fn from_hash(hash: u64) -> Self {
        Self {
            digest: hash.to_be_bytes(),
        }
    }

    /// Decodes the big-endian digest.
    #[must_use]
    pub const fn to_hash(&self) -> u64 {
        u64::from_be_bytes(self.digest)
    }

    /// Borrows the canonical bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST64_SIZE] {
        &self.digest
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Writes an H32 digest in canonical (big-endian) order.
#[must_use]
pub const fn canonical_from_hash32(hash: u32) -> Canonical32 {
    Canonical32::from_hash(hash)
}

/// Reads an H32 digest from its canonical form.
#[must_use]
pub const fn hash_from_canonical32(src: &Canonical32) -> u32 {
    src.to_hash()
}

/// Writes an H64 digest in canonical (big-endian) order.
#[must_use]
pub const fn canonical_from_hash64(hash: u64) -> Canonical64 {
    Canonical64::from_hash(hash)
}

/// Reads an H64 digest from its canonical form.
#[must_use]
pub const fn hash_from_canonical64(src: &Canonical64) -> u64 {
    src.to_hash()
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl From<u32> for Canonical32 {
    fn from(hash: u32) -> Self {
        Self::from_hash(hash)
    }
}

impl From<Canonical32> for u32 {
    fn from(canonical: Canonical32) -> Self {
        canonical.to_hash()
    }
}

impl From<[u8; DIGEST32_SIZE]> for Canonical32 {
    fn from(digest: [u8; DIGEST32_SIZE]) -> Self {
        Self { digest }
    }
}

impl From<u64> for Canonical64 {
    fn from(hash: u64) -> Self {
        Self::from_hash(hash)
    }
}

impl From<Canonical64> for u64 {
    fn from(canonical: Canonical64) -> Self {
        canonical.to_hash()
    }
}

impl From<[u8; DIGEST64_SIZE]> for Canonical64 {
    fn from(digest: [u8; DIGEST64_SIZE]) -> Self {
        Self { digest }
    }
}

impl AsRef<[u8]> for Canonical32 {
    fn as_ref(&self) -> &[u8] {
        &self.digest
    }
}

impl AsRef<[u8]> for Canonical64 {
    fn as_ref(&self) -> &[u8] {
        &self.digest
    }
}

impl fmt::Display for Canonical32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Display for Canonical64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Canonical32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.digest {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for Canonical64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.digest {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
