//! lrukit: a fixed-capacity LRU cache built on a slot arena and an intrusive
//! recency list.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put(1, 1);
//! cache.put(2, 2);
//! assert_eq!(cache.get(&1), Some(&1));
//!
//! cache.put(3, 3); // evicts 2
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.delete(&3), Some(3));
//! # Ok::<(), CacheError>(())
//! ```

pub mod config;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod observer;
pub mod policy;
pub mod prelude;
