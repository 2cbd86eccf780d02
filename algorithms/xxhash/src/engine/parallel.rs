//! Batch Execution Engine
//!
//! Hashes many independent inputs with one seed. Inputs share no state, so
//! with the `multithread` feature the batch is spread across the Rayon pool;
//! without it the batch runs serially. Results always come back in input
//! order.

use crate::kernels::{xxh32, xxh64};
use crate::types::KernelFn;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// PUBLIC API
// =============================================================================

/// H32 digest of every input, in input order.
///
/// # Example
/// ```rust
/// let digests = xxhash::hash32_batch(&[&b"a"[..], &b""[..]], 0);
/// assert_eq!(digests, vec![0x550D_7456, 0x02CC_5D05]);
/// ```
#[must_use]
pub fn hash32_batch<I>(inputs: &[I], seed: u32) -> Vec<u32>
where
    I: AsRef<[u8]> + Sync,
{
    inputs.process_batch(seed, xxh32::oneshot)
}

/// H64 digest of every input, in input order.
#[must_use]
pub fn hash64_batch<I>(inputs: &[I], seed: u64) -> Vec<u64>
where
    I: AsRef<[u8]> + Sync,
{
    inputs.process_batch(seed, xxh64::oneshot)
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

/// Helper for feature-agnostic batch processing
trait BatchProcessor {
    fn process_batch<S, H>(self, seed: S, kernel: KernelFn<S, H>) -> Vec<H>
    where
        S: Copy + Send + Sync,
        H: Send;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "multithread")] {
        use rayon::prelude::*;

        impl<I> BatchProcessor for &[I]
        where
            I: AsRef<[u8]> + Sync,
        {
            fn process_batch<S, H>(self, seed: S, kernel: KernelFn<S, H>) -> Vec<H>
            where
                S: Copy + Send + Sync,
                H: Send,
            {
                self.par_iter().map(|input| kernel(input.as_ref(), seed)).collect()
            }
        }
    } else {
        impl<I> BatchProcessor for &[I]
        where
            I: AsRef<[u8]> + Sync,
        {
            fn process_batch<S, H>(self, seed: S, kernel: KernelFn<S, H>) -> Vec<H>
            where
                S: Copy + Send + Sync,
                H: Send,
            {
                self.iter().map(|input| kernel(input.as_ref(), seed)).collect()
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
