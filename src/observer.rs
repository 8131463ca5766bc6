//! Observers notified of cache state transitions.
//!
//! The cache calls into its observer once a transition has been applied, so
//! a panicking observer never leaves the cache half-updated. Observers see
//! keys and values by reference and cannot change the outcome of an
//! operation.
//!
//! | Hook                 | Fired when                                   |
//! |----------------------|----------------------------------------------|
//! | `on_promote`         | `get` hit, including a hit on the MRU entry  |
//! | `on_miss`            | `get` did not find the key                   |
//! | `on_insert`          | `put` created a new entry                    |
//! | `on_reject`          | `put` hit an existing key and was ignored    |
//! | `on_evict`           | the LRU entry was dropped to make room       |
//! | `on_delete`          | `delete` removed an entry                    |
//! | `on_capacity_change` | `set_capacity` accepted a new bound          |
//!
//! Observers compose as tuples: `(LruMetrics, TracingObserver)` forwards
//! every hook to both.

use std::fmt::Debug;

/// Receives cache state transitions. Every hook defaults to a no-op.
pub trait CacheObserver<K, V> {
    fn on_promote(&mut self, _key: &K) {}

    fn on_miss(&mut self, _key: &K) {}

    fn on_insert(&mut self, _key: &K, _value: &V) {}

    fn on_reject(&mut self, _key: &K) {}

    fn on_evict(&mut self, _key: &K, _value: &V) {}

    fn on_delete(&mut self, _key: &K, _value: &V) {}

    fn on_capacity_change(&mut self, _old: usize, _new: usize) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopObserver;

impl<K, V> CacheObserver<K, V> for NoopObserver {}

/// Observer that emits a `tracing` event per transition.
///
/// Promotions, misses, inserts and deletes are logged at `DEBUG`; evictions,
/// rejected writes and capacity changes at `INFO`. Events carry `key` and
/// `value` as debug-formatted fields under the `lrukit` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl<K: Debug, V: Debug> CacheObserver<K, V> for TracingObserver {
    fn on_promote(&mut self, key: &K) {
        tracing::debug!(target: "lrukit", key = ?key, "entry promoted to MRU");
    }

    fn on_miss(&mut self, key: &K) {
        tracing::debug!(target: "lrukit", key = ?key, "lookup missed");
    }

    fn on_insert(&mut self, key: &K, value: &V) {
        tracing::debug!(target: "lrukit", key = ?key, value = ?value, "entry inserted");
    }

    fn on_reject(&mut self, key: &K) {
        tracing::info!(target: "lrukit", key = ?key, "key already cached, write rejected");
    }

    fn on_evict(&mut self, key: &K, value: &V) {
        tracing::info!(target: "lrukit", key = ?key, value = ?value, "evicted LRU entry");
    }

    fn on_delete(&mut self, key: &K, value: &V) {
        tracing::debug!(target: "lrukit", key = ?key, value = ?value, "entry deleted");
    }

    fn on_capacity_change(&mut self, old: usize, new: usize) {
        tracing::info!(target: "lrukit", old, new, "capacity changed");
    }
}

impl<K, V, A, B> CacheObserver<K, V> for (A, B)
where
    A: CacheObserver<K, V>,
    B: CacheObserver<K, V>,
{
    fn on_promote(&mut self, key: &K) {
        self.0.on_promote(key);
        self.1.on_promote(key);
    }

    fn on_miss(&mut self, key: &K) {
        self.0.on_miss(key);
        self.1.on_miss(key);
    }

    fn on_insert(&mut self, key: &K, value: &V) {
        self.0.on_insert(key, value);
        self.1.on_insert(key, value);
    }

    fn on_reject(&mut self, key: &K) {
        self.0.on_reject(key);
        self.1.on_reject(key);
    }

    fn on_evict(&mut self, key: &K, value: &V) {
        self.0.on_evict(key, value);
        self.1.on_evict(key, value);
    }

    fn on_delete(&mut self, key: &K, value: &V) {
        self.0.on_delete(key, value);
        self.1.on_delete(key, value);
    }

    fn on_capacity_change(&mut self, old: usize, new: usize) {
        self.0.on_capacity_change(old, new);
        self.1.on_capacity_change(old, new);
    }
}
