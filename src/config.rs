//! Capacity bounds and cache configuration.
//!
//! The capacity range is checked in exactly one place, [`Capacity::new`].
//! Everything that accepts a raw `usize` capacity goes through it.
//!
//! | Field      | Type    | Default | Description         |
//! |------------|---------|---------|---------------------|
//! | `capacity` | `usize` | 1000    | Maximum entry count |
//!
//! With the `serde` feature, [`CacheConfig`] can be embedded in a host
//! application's configuration file:
//!
//! ```toml
//! [cache]
//! capacity = 512
//! ```

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::CacheError;

/// Smallest accepted capacity.
pub const MIN_CAPACITY: usize = 1;

/// Largest accepted capacity.
pub const MAX_CAPACITY: usize = 100_000;

/// A capacity value already known to lie in `MIN_CAPACITY..=MAX_CAPACITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Validates `requested` against the capacity bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::config::Capacity;
    ///
    /// assert_eq!(Capacity::new(2).unwrap().get(), 2);
    /// assert!(Capacity::new(0).is_err());
    /// assert!(Capacity::new(100_001).is_err());
    /// ```
    pub fn new(requested: usize) -> Result<Self, CacheError> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&requested) {
            return Err(CacheError::InvalidCapacity { requested });
        }
        NonZeroUsize::new(requested)
            .map(Self)
            .ok_or(CacheError::InvalidCapacity { requested })
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for Capacity {
    type Error = CacheError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Capacity> for usize {
    fn from(capacity: Capacity) -> Self {
        capacity.get()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Construction parameters for [`LruCache`](crate::policy::lru::LruCache).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CacheConfig {
    /// Maximum number of live entries.
    pub capacity: usize,
}

impl CacheConfig {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks the configured capacity.
    pub fn validate(&self) -> Result<Capacity, CacheError> {
        Capacity::new(self.capacity)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 1000 }
    }
}
