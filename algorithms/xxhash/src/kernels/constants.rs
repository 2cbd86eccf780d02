//! Kernel Constants
//!
//! Round primes, block geometry and digest widths for both variants.
//! Changing any value here changes every digest.

use static_assertions::const_assert_eq;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 6;
pub const VERSION_RELEASE: u32 = 2;

/// `MAJOR * 10000 + MINOR * 100 + RELEASE`
pub const VERSION_NUMBER: u32 = VERSION_MAJOR * 10_000 + VERSION_MINOR * 100 + VERSION_RELEASE;

const_assert_eq!(VERSION_NUMBER, 602);

// =============================================================================
// 32-BIT PRIMES
// =============================================================================

pub const PRIME32_1: u32 = 0x9E37_79B1; // 2654435761
pub const PRIME32_2: u32 = 0x85EB_CA77; // 2246822519
pub const PRIME32_3: u32 = 0xC2B2_AE3D; // 3266489917
pub const PRIME32_4: u32 = 0x27D4_EB2F; // 668265263
pub const PRIME32_5: u32 = 0x1656_67B1; // 374761393

// =============================================================================
// 64-BIT PRIMES
// =============================================================================

pub const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87; // 11400714785074694791
pub const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F; // 14029467366897019727
pub const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9; // 1609587929392839161
pub const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63; // 9650029242287828579
pub const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5; // 2870177450012600261

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Number of lane accumulators in either variant.
pub const NUM_LANES: usize = 4;

/// H32 block: four little-endian `u32` words.
pub const BLOCK32: usize = NUM_LANES * core::mem::size_of::<u32>();

/// H64 block: four little-endian `u64` words.
pub const BLOCK64: usize = NUM_LANES * core::mem::size_of::<u64>();

/// Canonical H32 digest width in bytes.
pub const DIGEST32_SIZE: usize = core::mem::size_of::<u32>();

/// Canonical H64 digest width in bytes.
pub const DIGEST64_SIZE: usize = core::mem::size_of::<u64>();

const_assert_eq!(BLOCK32, 16);
const_assert_eq!(BLOCK64, 32);
