#![no_main]

use libfuzzer_sys::fuzz_target;
use xxhash::{Xxh32, Xxh64};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Chunk size is derived from the first byte (1 to 64)
    let chunk_size = usize::from(data[0] % 64) + 1;
    let seed = u64::from(data[0]);

    // One-shot digests are the reference
    let reference32 = xxhash::hash32(data, seed as u32);
    let reference64 = xxhash::hash64(data, seed);

    let mut s32 = Xxh32::new(seed as u32);
    let mut s64 = Xxh64::new(seed);
    for chunk in data.chunks(chunk_size) {
        s32.update(chunk);
        s64.update(chunk);
    }

    // They must be identical
    assert_eq!(reference32, s32.digest(), "H32 streaming and one-shot differ!");
    assert_eq!(reference64, s64.digest(), "H64 streaming and one-shot differ!");

    // A copy taken mid-stream finishes the same way
    let mid = data.len() / 2;
    let mut head = Xxh64::new(seed);
    head.update(&data[..mid]);
    let mut copy = head.clone();
    copy.update(&data[mid..]);
    assert_eq!(copy.digest(), reference64, "Copied state diverged");
});
