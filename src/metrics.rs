//! Counter-based observer and its snapshot type.
//!
//! [`LruMetrics`] is a [`CacheObserver`] that only increments counters.
//! [`LruCache::metrics_snapshot`](crate::policy::lru::LruCache::metrics_snapshot)
//! copies them out together with the cache's current size and capacity.
//!
//! ```
//! use lrukit::metrics::LruMetrics;
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache = LruCache::with_observer(1, LruMetrics::default()).unwrap();
//! cache.put(1, 1);
//! cache.put(2, 2);
//! cache.get(&1);
//!
//! let snap = cache.metrics_snapshot();
//! assert_eq!(snap.insert_new, 2);
//! assert_eq!(snap.evicted_entries, 1);
//! assert_eq!(snap.get_misses, 1);
//! ```

use crate::observer::CacheObserver;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_rejected: u64,
    pub evicted_entries: u64,
    pub delete_found: u64,
    pub capacity_changes: u64,
}

impl LruMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<K, V> CacheObserver<K, V> for LruMetrics {
    fn on_promote(&mut self, _key: &K) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn on_miss(&mut self, _key: &K) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn on_insert(&mut self, _key: &K, _value: &V) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }

    fn on_reject(&mut self, _key: &K) {
        self.insert_calls += 1;
        self.insert_rejected += 1;
    }

    fn on_evict(&mut self, _key: &K, _value: &V) {
        self.evicted_entries += 1;
    }

    fn on_delete(&mut self, _key: &K, _value: &V) {
        self.delete_found += 1;
    }

    fn on_capacity_change(&mut self, _old: usize, _new: usize) {
        self.capacity_changes += 1;
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_rejected: u64,

    pub evicted_entries: u64,
    pub delete_found: u64,
    pub capacity_changes: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl LruMetricsSnapshot {
    pub(crate) fn capture(metrics: &LruMetrics, cache_len: usize, capacity: usize) -> Self {
        Self {
            get_calls: metrics.get_calls,
            get_hits: metrics.get_hits,
            get_misses: metrics.get_misses,
            insert_calls: metrics.insert_calls,
            insert_new: metrics.insert_new,
            insert_rejected: metrics.insert_rejected,
            evicted_entries: metrics.evicted_entries,
            delete_found: metrics.delete_found,
            capacity_changes: metrics.capacity_changes,
            cache_len,
            capacity,
        }
    }

    /// Fraction of `get` calls that hit, or `0.0` before any lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
