#![no_main]

use libfuzzer_sys::fuzz_target;
use xxhash::{Canonical32, Canonical64};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // The first 8 bytes (when present) select the seed
    let mut seed_bytes = [0u8; 8];
    let msg_start = if data.len() >= 8 {
        seed_bytes.copy_from_slice(&data[..8]);
        8
    } else {
        0
    };
    let seed = u64::from_le_bytes(seed_bytes);
    let seed32 = seed as u32;
    let msg = &data[msg_start..];

    // =============================================================================
    // 1. REFERENCE AGREEMENT
    // =============================================================================

    let h32 = xxhash::hash32(msg, seed32);
    let h64 = xxhash::hash64(msg, seed);
    assert_eq!(h32, xxhash_rust::xxh32::xxh32(msg, seed32), "H32 differs from reference");
    assert_eq!(h64, xxhash_rust::xxh64::xxh64(msg, seed), "H64 differs from reference");

    // =============================================================================
    // 2. CANONICAL ENCODING
    // =============================================================================

    let c32 = Canonical32::from_hash(h32);
    let c64 = Canonical64::from_hash(h64);
    assert_eq!(c32.digest, h32.to_be_bytes());
    assert_eq!(c64.digest, h64.to_be_bytes());
    assert_eq!(xxhash::hash_from_canonical32(&c32), h32);
    assert_eq!(xxhash::hash_from_canonical64(&c64), h64);

    // =============================================================================
    // 3. VERIFICATION
    // =============================================================================

    assert!(xxhash::verify32(msg, seed32, &c32), "verify32 rejected its own digest");
    assert!(xxhash::verify64(msg, seed, &c64), "verify64 rejected its own digest");

    let mut wrong = c64;
    wrong.digest[0] ^= 0xFF;
    assert!(!xxhash::verify64(msg, seed, &wrong), "verify64 accepted a corrupted digest");
});
