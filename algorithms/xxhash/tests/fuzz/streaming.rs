use bolero::check;
use xxhash::{hash32, hash64, Xxh32, Xxh64};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<(u64, Vec<u8>)>().for_each(|(seed, data)| {
        let seed32 = *seed as u32;

        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected32 = hash32(data, seed32);
        let expected64 = hash64(data, *seed);

        assert_eq!(expected32, xxhash_rust::xxh32::xxh32(data, seed32));
        assert_eq!(expected64, xxhash_rust::xxh64::xxh64(data, *seed));

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Update
        let mut s32 = Xxh32::new(seed32);
        let mut s64 = Xxh64::new(*seed);
        s32.update(data);
        s64.update(data);
        assert_eq!(s32.digest(), expected32, "H32 single update mismatch");
        assert_eq!(s64.digest(), expected64, "H64 single update mismatch");

        // 2. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            let mut s32 = Xxh32::new(seed32);
            let mut s64 = Xxh64::new(*seed);
            for b in data {
                s32.update(&[*b]);
                s64.update(&[*b]);
            }
            assert_eq!(s32.digest(), expected32, "H32 byte-by-byte mismatch");
            assert_eq!(s64.digest(), expected64, "H64 byte-by-byte mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let (first, second) = data.split_at(split_idx);
                let mut s32 = Xxh32::new(seed32);
                let mut s64 = Xxh64::new(*seed);
                s32.update(first);
                s64.update(first);
                s32.update(second);
                s64.update(second);
                assert_eq!(s32.digest(), expected32, "H32 split at {split_idx} mismatch");
                assert_eq!(s64.digest(), expected64, "H64 split at {split_idx} mismatch");
            }
        }
    });
}
