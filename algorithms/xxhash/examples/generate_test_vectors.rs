//! Generator for xxhash test vectors
//!
//! Generates the JSON test vectors used by `tests/test_vectors.json`.
//! Every input is hashed with seeds 0, 1 and 2654435761.
//! Inputs with a symbolic name are expanded by the test harness.
#![allow(clippy::unwrap_used)]
use serde_json::json;

const SEEDS: [u64; 3] = [0, 1, 2_654_435_761];

/// The classic sanity buffer: top byte of a squaring sequence.
fn sanity_buffer(len: usize) -> Vec<u8> {
    let mut gen: u32 = 2_654_435_761;
    (0..len)
        .map(|_| {
            let byte = gen.to_be_bytes()[0];
            gen = gen.wrapping_mul(gen);
            byte
        })
        .collect()
}

fn main() {
    let inputs: Vec<(&str, &str, Vec<u8>)> = vec![
        // =====================================================================
        // 1. BASIC VECTORS
        // =====================================================================
        ("empty", "", Vec::new()),
        ("single_a", "a", b"a".to_vec()),
        ("abc", "abc", b"abc".to_vec()),
        (
            "spammish",
            "Nobody inspects the spammish repetition",
            b"Nobody inspects the spammish repetition".to_vec(),
        ),
        // =====================================================================
        // 2. REFERENCE BUFFERS
        // =====================================================================
        ("incrementing_100", "INCREMENTING_100", (0..100u8).collect()),
        ("sanity_1", "SANITY_1", sanity_buffer(1)),
        ("sanity_14", "SANITY_14", sanity_buffer(14)),
        ("sanity_101", "SANITY_101", sanity_buffer(101)),
        // =====================================================================
        // 3. BLOCK BOUNDARIES (16 bytes for H32, 32 bytes for H64)
        // =====================================================================
        ("zero_15", "ZERO_15", vec![0u8; 15]),
        ("zero_16", "ZERO_16", vec![0u8; 16]),
        ("zero_31", "ZERO_31", vec![0u8; 31]),
        ("zero_32", "ZERO_32", vec![0u8; 32]),
        ("one_1024", "ONE_1024", vec![1u8; 1024]),
    ];

    let mut vectors = Vec::new();
    for (name, input, data) in &inputs {
        for seed in SEEDS {
            let seed32 = u32::try_from(seed).unwrap();
            vectors.push(json!({
                "name": format!("{name}_seed{seed}"),
                "input": input,
                "seed": seed,
                "xxh32": hex::encode(xxhash::hash32_canonical(data, seed32)),
                "xxh64": hex::encode(xxhash::hash64_canonical(data, seed)),
            }));
        }
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
