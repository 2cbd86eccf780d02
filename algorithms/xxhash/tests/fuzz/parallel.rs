use bolero::check;
use xxhash::{hash32, hash32_batch, hash64, hash64_batch};

#[test]
fn fuzz_batch_consistency() {
    check!().with_type::<Vec<Vec<u8>>>().for_each(|inputs| {
        // =============================================================================
        // BATCH EXECUTION (RAYON)
        // =============================================================================

        let batch32 = hash32_batch(inputs, 0x9E37_79B1);
        let batch64 = hash64_batch(inputs, 0x9E37_79B1);

        // =============================================================================
        // SEQUENTIAL REFERENCE
        // =============================================================================

        assert_eq!(batch32.len(), inputs.len());
        assert_eq!(batch64.len(), inputs.len());
        for (i, input) in inputs.iter().enumerate() {
            assert_eq!(batch32[i], hash32(input, 0x9E37_79B1), "H32 batch mismatch at {i}");
            assert_eq!(batch64[i], hash64(input, 0x9E37_79B1), "H64 batch mismatch at {i}");
        }
    });
}
