//! Shared types used across the library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// One-shot kernel signature: `(input, seed) -> digest`.
///
/// Both variants fit this shape, so the batch engine can drive either.
pub type KernelFn<S, H> = fn(&[u8], S) -> H;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error raised at the raw-pointer boundary.
///
/// The hash algorithm itself cannot fail; this only reports input that could
/// not be turned into a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// Input buffer pointer was null for a non-empty read.
    InvalidInput,
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input: null buffer pointer"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for HashError {}

// =============================================================================
// C ERROR CODES
// =============================================================================

/// Status code returned across the C ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub enum XxhErrorCode {
    /// Operation completed.
    Ok = 0,
    /// Input was rejected; state is unchanged.
    Error = 1,
}

impl From<Result<(), HashError>> for XxhErrorCode {
    fn from(result: Result<(), HashError>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(HashError::InvalidInput) => Self::Error,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(XxhErrorCode::from(Ok(())), XxhErrorCode::Ok);
        assert_eq!(
            XxhErrorCode::from(Err(HashError::InvalidInput)),
            XxhErrorCode::Error
        );
        assert_eq!(XxhErrorCode::Ok as i32, 0);
        assert_eq!(XxhErrorCode::Error as i32, 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_error_display() {
        let msg = HashError::InvalidInput.to_string();
        assert!(msg.contains("null"));
    }
}
