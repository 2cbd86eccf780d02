//! C-API Bindings
//!
//! Exposes both variants to C/C++ via FFI with pointer checks and panic
//! boundaries. States are heap-allocated here; the caller pairs every
//! `*_create_state` with a `*_free_state`.
//!
//! Null input policy:
//! - default: a null input with length 0 is the empty input. `update` rejects
//!   a null input with non-zero length; one-shot hashing aborts on it.
//! - `accept-null-input`: one-shot hashing treats any null input as empty,
//!   `update` rejects every null input.

#![allow(unsafe_code)]

use crate::canonical::{Canonical32, Canonical64};
use crate::kernels::constants::VERSION_NUMBER;
use crate::oneshot;
use crate::streaming::{Xxh32, Xxh64};
use crate::types::{HashError, XxhErrorCode};

use std::panic::{self, AssertUnwindSafe};
use std::slice;

// =============================================================================
// INPUT RESOLUTION
// =============================================================================

/// Turn a one-shot `(ptr, len)` pair into a slice.
///
/// # Safety
/// A non-null `ptr` must be valid for `len` bytes.
unsafe fn oneshot_input<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if ptr.is_null() {
        if cfg!(feature = "accept-null-input") || len == 0 {
            return &[];
        }
        log::error!("null input pointer with length {len} passed to one-shot hash; aborting");
        std::process::abort();
    }
    slice::from_raw_parts(ptr, len)
}

/// Turn an `update` `(ptr, len)` pair into a slice.
///
/// # Safety
/// A non-null `ptr` must be valid for `len` bytes.
unsafe fn update_input<'a>(ptr: *const u8, len: usize) -> Result<&'a [u8], HashError> {
    if ptr.is_null() {
        if !cfg!(feature = "accept-null-input") && len == 0 {
            return Ok(&[]);
        }
        log::warn!("rejected null input pointer (length {len})");
        return Err(HashError::InvalidInput);
    }
    Ok(slice::from_raw_parts(ptr, len))
}

/// Run `f`, aborting instead of unwinding into C.
fn no_unwind<R>(f: impl FnOnce() -> R + panic::UnwindSafe) -> R {
    panic::catch_unwind(f).unwrap_or_else(|_| {
        log::error!("panic at the C boundary; aborting");
        std::process::abort()
    })
}

// =============================================================================
// VERSION
// =============================================================================

/// Library version as `MAJOR * 10000 + MINOR * 100 + RELEASE`.
#[no_mangle]
pub const extern "C" fn xxh_version_number() -> u32 {
    VERSION_NUMBER
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute the 32-bit digest.
///
/// # Safety
/// - `input` must be valid for `length` bytes (see the module null policy)
#[no_mangle]
pub unsafe extern "C" fn xxh32(input: *const u8, length: usize, seed: u32) -> u32 {
    let data = oneshot_input(input, length);
    no_unwind(|| oneshot::hash32(data, seed))
}

/// Compute the 64-bit digest.
///
/// # Safety
/// - `input` must be valid for `length` bytes (see the module null policy)
#[no_mangle]
pub unsafe extern "C" fn xxh64(input: *const u8, length: usize, seed: u64) -> u64 {
    let data = oneshot_input(input, length);
    no_unwind(|| oneshot::hash64(data, seed))
}

// =============================================================================
// STREAMING API (H32)
// =============================================================================

/// Allocate a state. It is seeded with 0; call `xxh32_reset` to pick a seed.
/// Caller must free with `xxh32_free_state`.
#[no_mangle]
pub extern "C" fn xxh32_create_state() -> *mut Xxh32 {
    let state = Box::into_raw(Box::new(Xxh32::new(0)));
    log::debug!("xxh32 state allocated at {state:p}");
    state
}

/// Free a state. Null is accepted and ignored.
///
/// # Safety
/// - `state` must come from `xxh32_create_state`, or be null
#[no_mangle]
pub unsafe extern "C" fn xxh32_free_state(state: *mut Xxh32) -> XxhErrorCode {
    if !state.is_null() {
        log::debug!("xxh32 state freed at {state:p}");
        drop(Box::from_raw(state));
    }
    XxhErrorCode::Ok
}

/// Deep-copy `src` into `dst`.
///
/// # Safety
/// - `dst` and `src` must point to live states, or be null (no-op)
#[no_mangle]
pub unsafe extern "C" fn xxh32_copy_state(dst: *mut Xxh32, src: *const Xxh32) {
    if dst.is_null() || src.is_null() {
        return;
    }
    let copy = (*src).clone();
    *dst = copy;
}

/// Restart a state with `seed`.
///
/// # Safety
/// - `state` must point to a live state
#[no_mangle]
pub unsafe extern "C" fn xxh32_reset(state: *mut Xxh32, seed: u32) -> XxhErrorCode {
    if state.is_null() {
        return XxhErrorCode::Error;
    }
    (*state).reset(seed);
    XxhErrorCode::Ok
}

/// Feed `length` bytes. A rejected input leaves the state unchanged.
///
/// # Safety
/// - `state` must point to a live state
/// - `input` must be valid for `length` bytes, or be null (rejected)
#[no_mangle]
pub unsafe extern "C" fn xxh32_update(
    state: *mut Xxh32,
    input: *const u8,
    length: usize,
) -> XxhErrorCode {
    if state.is_null() {
        return XxhErrorCode::Error;
    }
    let result = update_input(input, length).map(|data| {
        let state = &mut *state;
        no_unwind(AssertUnwindSafe(|| state.update(data)));
    });
    result.into()
}

/// Digest of everything fed so far. Returns 0 for a null state.
///
/// # Safety
/// - `state` must point to a live state, or be null
#[no_mangle]
pub unsafe extern "C" fn xxh32_digest(state: *const Xxh32) -> u32 {
    if state.is_null() {
        log::warn!("xxh32_digest called with a null state");
        return 0;
    }
    (*state).digest()
}

/// Write `hash` in canonical (big-endian) order.
///
/// # Safety
/// - `dst` must be valid for one `Canonical32` write, or be null (no-op)
#[no_mangle]
pub const unsafe extern "C" fn xxh32_canonical_from_hash(dst: *mut Canonical32, hash: u32) {
    if !dst.is_null() {
        dst.write(Canonical32::from_hash(hash));
    }
}

/// Read a digest from canonical form. Returns 0 for a null pointer.
///
/// # Safety
/// - `src` must be valid for one `Canonical32` read, or be null
#[no_mangle]
pub const unsafe extern "C" fn xxh32_hash_from_canonical(src: *const Canonical32) -> u32 {
    if src.is_null() {
        return 0;
    }
    (*src).to_hash()
}

// =============================================================================
// STREAMING API (H64)
// =============================================================================

/// Allocate a state. It is seeded with 0; call `xxh64_reset` to pick a seed.
/// Caller must free with `xxh64_free_state`.
#[no_mangle]
pub extern "C" fn xxh64_create_state() -> *mut Xxh64 {
    let state = Box::into_raw(Box::new(Xxh64::new(0)));
    log::debug!("xxh64 state allocated at {state:p}");
    state
}

/// Free a state. Null is accepted and ignored.
///
/// # Safety
/// - `state` must come from `xxh64_create_state`, or be null
#[no_mangle]
pub unsafe extern "C" fn xxh64_free_state(state: *mut Xxh64) -> XxhErrorCode {
    if !state.is_null() {
        log::debug!("xxh64 state freed at {state:p}");
        drop(Box::from_raw(state));
    }
    XxhErrorCode::Ok
}

/// Deep-copy `src` into `dst`.
///
/// # Safety
/// - `dst` and `src` must point to live states, or be null (no-op)
#[no_mangle]
pub unsafe extern "C" fn xxh64_copy_state(dst: *mut Xxh64, src: *const Xxh64) {
    if dst.is_null() || src.is_null() {
        return;
    }
    let copy = (*src).clone();
    *dst = copy;
}

/// Restart a state with `seed`.
///
/// # Safety
/// - `state` must point to a live state
#[no_mangle]
pub unsafe extern "C" fn xxh64_reset(state: *mut Xxh64, seed: u64) -> XxhErrorCode {
    if state.is_null() {
        return XxhErrorCode::Error;
    }
    (*state).reset(seed);
    XxhErrorCode::Ok
}

/// Feed `length` bytes. A rejected input leaves the state unchanged.
///
/// # Safety
/// - `state` must point to a live state
/// - `input` must be valid for `length` bytes, or be null (rejected)
#[no_mangle]
pub unsafe extern "C" fn xxh64_update(
    state: *mut Xxh64,
    input: *const u8,
    length: usize,
) -> XxhErrorCode {
    if state.is_null() {
        return XxhErrorCode::Error;
    }
    let result = update_input(input, length).map(|data| {
        let state = &mut *state;
        no_unwind(AssertUnwindSafe(|| state.update(data)));
    });
    result.into()
}

/// Digest of everything fed so far. Returns 0 for a null state.
///
/// # Safety
/// - `state` must point to a live state, or be null
#[no_mangle]
pub unsafe extern "C" fn xxh64_digest(state: *const Xxh64) -> u64 {
    if state.is_null() {
        log::warn!("xxh64_digest called with a null state");
        return 0;
    }
    (*state).digest()
}

/// Write `hash` in canonical (big-endian) order.
///
/// # Safety
/// - `dst` must be valid for one `Canonical64` write, or be null (no-op)
#[no_mangle]
pub const unsafe extern "C" fn xxh64_canonical_from_hash(dst: *mut Canonical64, hash: u64) {
    if !dst.is_null() {
        dst.write(Canonical64::from_hash(hash));
    }
}

/// Read a digest from canonical form. Returns 0 for a null pointer.
///
/// # Safety
/// - `src` must be valid for one `Canonical64` read, or be null
#[no_mangle]
pub const unsafe extern "C" fn xxh64_hash_from_canonical(src: *const Canonical64) -> u64 {
    if src.is_null() {
        return 0;
    }
    (*src).to_hash()
}

// =============================================================================
// TESTS
// =============================================================================
