//! # Least Recently Used (LRU) Cache
//!
//! A fixed-capacity key/value cache that evicts the least recently used entry
//! when a new key arrives at capacity.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                        LruCache<K, V, O>                             │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (lookup index)                        │   │
//!   │   │                                                              │   │
//!   │   │   key_1 ──────────────┐                                      │   │
//!   │   │   key_2 ────────────┐ │                                      │   │
//!   │   │   key_3 ──────────┐ │ │                                      │   │
//!   │   └───────────────────┼─┼─┼──────────────────────────────────────┘   │
//!   │                       │ │ │                                          │
//!   │   ┌───────────────────┼─┼─┼──────────────────────────────────────┐   │
//!   │   │  IntrusiveList<Entry<K, V>>  (recency list, arena-backed)    │   │
//!   │   │                   ▼ ▼ ▼                                      │   │
//!   │   │  head ──► [key_1] ◄──► [key_2] ◄──► [key_3] ◄── tail         │   │
//!   │   │   (MRU)                                         (LRU)        │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   │                                                                      │
//!   │   observer: O  (notified after every state transition)              │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index holds `SlotId` handles, never references. Entries are owned by
//! the arena inside the list, so evicting or deleting an entry frees its slot
//! and any later use of the old handle is rejected by the arena.
//!
//! ## Operations
//!
//! | Method             | Complexity | Description                                   |
//! |--------------------|------------|-----------------------------------------------|
//! | `new(capacity)`    | O(1)       | Validate capacity, create empty cache         |
//! | `get(&k)`          | O(1)       | Return value and move entry to MRU            |
//! | `put(k, v)`        | O(1)*      | Insert new key, evicting LRU at capacity      |
//! | `delete(&k)`       | O(1)       | Remove entry, return its value                |
//! | `set_capacity(n)`  | O(evicted) | Change bound, evicting LRU entries on shrink  |
//! | `peek(&k)`         | O(1)       | Value without reordering                      |
//! | `peek_lru()`       | O(1)       | Next eviction candidate                       |
//! | `check_invariants` | O(n)       | Cross-check index and list                    |
//!
//! ## Write Semantics
//!
//! `put` on a key that is already cached is rejected: the stored value and
//! the recency order stay as they were, and the new value is handed back in
//! [`PutOutcome::Rejected`]. To overwrite, `delete` first.
//!
//! ```text
//!   put(D) at capacity 3
//!
//!   Before:  head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!   1. pop tail [C], drop C from index
//!   2. push [D] at head, index D
//!   After:   head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//! ```
//!
//! ## Thread Safety
//!
//! `LruCache` is single-threaded. Every operation takes `&mut self`; callers
//! that share a cache must serialize access themselves.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::config::{CacheConfig, Capacity};
use crate::ds::{IntrusiveList, SlotId};
use crate::error::{CacheError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{LruMetrics, LruMetricsSnapshot};
use crate::observer::{CacheObserver, NoopObserver};

/// One cached pair. The list node around it carries the recency links.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Result of [`LruCache::put`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome<K, V> {
    /// New entry stored without evicting anything.
    Inserted,
    /// New entry stored after evicting the LRU pair returned here.
    Evicted { key: K, value: V },
    /// Key was already cached; the rejected value is returned unchanged.
    Rejected(V),
}

impl<K, V> PutOutcome<K, V> {
    /// Returns `true` if the write created a new entry.
    pub fn is_stored(&self) -> bool {
        !matches!(self, PutOutcome::Rejected(_))
    }

    /// Returns the evicted pair, if any.
    pub fn into_evicted(self) -> Option<(K, V)> {
        match self {
            PutOutcome::Evicted { key, value } => Some((key, value)),
            _ => None,
        }
    }
}

/// Fixed-capacity LRU cache over a hash index and an arena-backed recency list.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.put(1, 1);
/// cache.put(2, 2);
/// assert_eq!(cache.get(&1), Some(&1));
///
/// // 2 is now least recently used
/// cache.put(3, 3);
/// assert_eq!(cache.get(&2), None);
/// ```
pub struct LruCache<K, V, O = NoopObserver> {
    index: FxHashMap<K, SlotId>,
    list: IntrusiveList<Entry<K, V>>,
    capacity: Capacity,
    observer: O,
}

impl<K, V> LruCache<K, V, NoopObserver>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] unless `capacity` is in
    /// `1..=100_000`.
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        Self::with_observer(capacity, NoopObserver)
    }

    /// Creates an empty cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self, CacheError> {
        Self::from_config_with_observer(config, NoopObserver)
    }
}

impl<K, V, O> LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
    O: CacheObserver<K, V>,
{
    /// Creates an empty cache that reports transitions to `observer`.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::observer::TracingObserver;
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u64, String, _> =
    ///     LruCache::with_observer(16, TracingObserver::new()).unwrap();
    /// assert_eq!(cache.capacity(), 16);
    /// ```
    pub fn with_observer(capacity: usize, observer: O) -> Result<Self, CacheError> {
        let capacity = Capacity::new(capacity)?;
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity.get(), Default::default()),
            list: IntrusiveList::with_capacity(capacity.get()),
            capacity,
            observer,
        })
    }

    pub fn from_config_with_observer(
        config: &CacheConfig,
        observer: O,
    ) -> Result<Self, CacheError> {
        Self::with_observer(config.capacity, observer)
    }

    /// Looks up `key`, marking it most recently used on a hit.
    ///
    /// A miss changes nothing.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&id) = self.index.get(key) else {
            self.observer.on_miss(key);
            return None;
        };

        self.list.move_to_front(id);
        self.observer.on_promote(key);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Stores `value` under a new `key`.
    ///
    /// An existing key is left untouched and the write is rejected. A new
    /// key at capacity first evicts the least recently used entry.
    pub fn put(&mut self, key: K, value: V) -> PutOutcome<K, V> {
        if self.index.contains_key(&key) {
            self.observer.on_reject(&key);
            return PutOutcome::Rejected(value);
        }

        let evicted = if self.list.len() >= self.capacity.get() {
            self.evict_lru()
        } else {
            None
        };

        let id = self.list.push_front(Entry { key, value });
        self.index.insert(key, id);
        if let Some(entry) = self.list.get(id) {
            self.observer.on_insert(&entry.key, &entry.value);
        }

        debug_assert!(self.list.len() <= self.capacity.get());
        debug_assert_eq!(self.index.len(), self.list.len());

        match evicted {
            Some((key, value)) => PutOutcome::Evicted { key, value },
            None => PutOutcome::Inserted,
        }
    }

    /// Removes `key` and returns its value.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let Entry { value, .. } = self.list.remove(id)?;
        self.observer.on_delete(key, &value);

        debug_assert_eq!(self.index.len(), self.list.len());
        Some(value)
    }

    /// Changes the capacity bound.
    ///
    /// Shrinking below the current size evicts least recently used entries
    /// until the cache fits.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidCapacity`] for an out-of-range value, in
    /// which case nothing is evicted and the old bound stays.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), CacheError> {
        let capacity = Capacity::new(capacity)?;
        let old = self.capacity;

        while self.list.len() > capacity.get() {
            if self.evict_lru().is_none() {
                break;
            }
        }
        if capacity > old {
            let additional = capacity.get() - self.list.len();
            self.list.reserve(additional);
            self.index.reserve(additional);
        }

        self.capacity = capacity;
        if capacity != old {
            self.observer.on_capacity_change(old.get(), capacity.get());
        }
        Ok(())
    }

    /// Drops every entry. Capacity is unchanged and no evictions are reported.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    fn evict_lru(&mut self) -> Option<(K, V)> {
        let Entry { key, value } = self.list.pop_back()?;
        self.index.remove(&key);
        self.observer.on_evict(&key, &value);
        Some((key, value))
    }
}

impl<K, V, O> LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
{
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns `true` if `key` is cached. Does not update recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the value for `key` without marking it used.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Returns the pair that the next eviction would drop.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Verifies size bounds, list links, and that the index and the list
    /// describe the same key set with matching handles.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        K: fmt::Debug,
    {
        let len = self.list.len();
        if len > self.capacity.get() {
            return Err(InvariantError::new(format!(
                "size {len} exceeds capacity {}",
                self.capacity
            )));
        }
        if self.index.len() != len {
            return Err(InvariantError::new(format!(
                "index holds {} keys but list holds {len} entries",
                self.index.len()
            )));
        }

        self.list.validate()?;

        for (id, entry) in self.list.iter() {
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                Some(&indexed) => {
                    return Err(InvariantError::new(format!(
                        "key {:?} indexed at {indexed:?} but listed at {id:?}",
                        entry.key
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "listed key {:?} missing from index",
                        entry.key
                    )));
                },
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn keys_mru_to_lru(&self) -> Vec<K> {
        self.list.iter().map(|(_, entry)| entry.key).collect()
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V, LruMetrics>
where
    K: Copy + Eq + Hash,
{
    /// Copies the observer's counters along with the current size and capacity.
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot::capture(&self.observer, self.list.len(), self.capacity.get())
    }
}

impl<K, V, O> fmt::Debug for LruCache<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.list.len())
            .field("capacity", &self.capacity.get())
            .finish_non_exhaustive()
    }
}
