pub use crate::config::{CacheConfig, Capacity, MAX_CAPACITY, MIN_CAPACITY};
pub use crate::error::{CacheError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::{LruMetrics, LruMetricsSnapshot};
pub use crate::observer::{CacheObserver, NoopObserver, TracingObserver};
pub use crate::policy::lru::{LruCache, PutOutcome};
