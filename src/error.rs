//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned when a capacity argument is rejected, either at
//!   construction or by [`LruCache::set_capacity`](crate::policy::lru::LruCache::set_capacity).
//! - [`InvariantError`]: Returned by
//!   [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants)
//!   when the index and recency list disagree.
//!
//! A missing key is not an error: lookups return `Option`.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::CacheError;
//! use lrukit::policy::lru::LruCache;
//!
//! let cache: Result<LruCache<i32, i32>, CacheError> = LruCache::new(2);
//! assert!(cache.is_ok());
//!
//! let bad = LruCache::<i32, i32>::new(0);
//! assert_eq!(bad.unwrap_err(), CacheError::InvalidCapacity { requested: 0 });
//! ```

use thiserror::Error;

use crate::config::{MAX_CAPACITY, MIN_CAPACITY};

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Error returned by cache operations that validate their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    /// Capacity fell outside `MIN_CAPACITY..=MAX_CAPACITY`. Nothing was mutated.
    #[error(
        "capacity must be in [{min}, {max}], got {requested}",
        min = MIN_CAPACITY,
        max = MAX_CAPACITY
    )]
    InvalidCapacity { requested: usize },
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
