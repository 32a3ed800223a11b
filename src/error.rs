//! Error types for the tickwindow library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (zero capacity, or a capacity the logical index type cannot address).
//! - [`InvariantError`]: Returned by
//!   [`SlidingWindowBuffer::check_invariants`](crate::ds::SlidingWindowBuffer::check_invariants)
//!   when internal bookkeeping is inconsistent.
//!
//! Out-of-range logical indices are not represented here. They are caller
//! bugs and panic at the call site; see the `# Panics` sections on
//! [`SlidingWindowBuffer`](crate::ds::SlidingWindowBuffer).
//!
//! ## Example Usage
//!
//! ```
//! use tickwindow::ds::SlidingWindowBuffer;
//! use tickwindow::error::ConfigError;
//!
//! let window: Result<SlidingWindowBuffer<u32>, ConfigError> = SlidingWindowBuffer::try_new(64);
//! assert!(window.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = SlidingWindowBuffer::<u32>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal window invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by [`SlidingWindowBuffer::try_new`](crate::ds::SlidingWindowBuffer::try_new).
///
/// # Example
///
/// ```
/// use tickwindow::ds::SlidingWindowBuffer;
///
/// let err = SlidingWindowBuffer::<u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
