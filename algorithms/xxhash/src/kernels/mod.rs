//! Hash Kernels
//!
//! Portable scalar implementations of both variants. No kernel reads the
//! host's native byte order, so digests are identical on every target.

pub mod constants;
pub mod read;
pub mod xxh32;
pub mod xxh64;
