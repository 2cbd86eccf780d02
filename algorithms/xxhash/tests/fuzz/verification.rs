use bolero::check;
use xxhash::{hash32_canonical, hash64_canonical, verify32, verify64};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<(u32, Vec<u8>)>().for_each(|(seed, data)| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let c32 = hash32_canonical(data, *seed);
        let c64 = hash64_canonical(data, u64::from(*seed));
        assert!(verify32(data, *seed, &c32), "verify32() failed on correct data");
        assert!(
            verify64(data, u64::from(*seed), &c64),
            "verify64() failed on correct data"
        );

        // =============================================================================
        // CANONICAL ROUND TRIP
        // =============================================================================

        assert_eq!(xxhash::hash_from_canonical32(&c32), xxhash::hash32(data, *seed));
        assert_eq!(
            xxhash::hash_from_canonical64(&c64),
            xxhash::hash64(data, u64::from(*seed))
        );

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        let mut bad32 = c32;
        bad32.digest[0] ^= 0xFF;
        assert!(!verify32(data, *seed, &bad32), "verify32() succeeded on corrupted digest");

        let mut bad64 = c64;
        bad64.digest[7] ^= 0x01;
        assert!(
            !verify64(data, u64::from(*seed), &bad64),
            "verify64() succeeded on corrupted digest"
        );
    });
}
