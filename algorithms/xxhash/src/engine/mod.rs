//! Execution Engine
//!
//! Batch hashing over independent inputs.

pub mod parallel;
