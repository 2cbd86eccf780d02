//! xxhash Basic Example
//!
//! Minimal usage: `let h = xxhash::hash64(&data, seed);`

#![allow(clippy::pedantic, clippy::nursery)]

use xxhash::Xxh64;

fn main() {
    let data = b"Hello, World!";
    let h32 = xxhash::hash32(data, 0);
    let h64 = xxhash::hash64(data, 0);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("H32:  {h32:08x}");
    println!("H64:  {h64:016x}");

    // Same digest when the data arrives in pieces
    let mut state = Xxh64::new(0);
    for word in data.split_inclusive(|b| *b == b' ') {
        state.update(word);
    }
    println!("H64 (streamed):  {}", state.canonical_digest());
}
