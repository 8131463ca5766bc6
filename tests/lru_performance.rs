// ==============================================
// LRU PERFORMANCE TESTS (integration)
// ==============================================
//
// Coarse latency checks at the maximum capacity. Bounds are loose enough for
// unoptimized builds; they catch an accidental O(n) path, not small regressions.

use lrukit::config::MAX_CAPACITY;
use lrukit::policy::lru::LruCache;
use std::time::{Duration, Instant};

/// Helper function to measure execution time of a closure
fn measure_time<F, R>(operation: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = operation();
    let duration = start.elapsed();
    (result, duration)
}

fn full_cache() -> LruCache<u64, u64> {
    let mut cache = LruCache::new(MAX_CAPACITY).unwrap();
    for i in 0..MAX_CAPACITY as u64 {
        cache.put(i, i);
    }
    cache
}

#[test]
fn test_tail_get_latency_at_max_capacity() {
    let mut cache = full_cache();

    // Always hit the current LRU entry, the worst case for a scanning list.
    let iterations = 20_000u32;
    let (_, duration) = measure_time(|| {
        for i in 0..iterations as u64 {
            let key = i % MAX_CAPACITY as u64;
            assert!(cache.get(&key).is_some());
        }
    });

    let avg_latency = duration / iterations;
    println!("Average tail get latency: {:?}", avg_latency);
    assert!(
        avg_latency < Duration::from_micros(50),
        "Get operation too slow: {:?}",
        avg_latency
    );
}

#[test]
fn test_eviction_latency_at_max_capacity() {
    let mut cache = full_cache();

    let iterations = 20_000u32;
    let (_, duration) = measure_time(|| {
        for i in 0..iterations as u64 {
            cache.put(1_000_000 + i, i);
        }
    });

    let avg_latency = duration / iterations;
    println!("Average evicting put latency: {:?}", avg_latency);
    assert_eq!(cache.len(), MAX_CAPACITY);
    assert!(
        avg_latency < Duration::from_micros(50),
        "Put operation too slow: {:?}",
        avg_latency
    );
}

#[test]
fn test_delete_latency_at_max_capacity() {
    let mut cache = full_cache();

    let iterations = 20_000u32;
    let (_, duration) = measure_time(|| {
        for i in 0..iterations as u64 {
            // spread across head, interior and tail
            let key = (i * 7_919) % MAX_CAPACITY as u64;
            cache.delete(&key);
        }
    });

    let avg_latency = duration / iterations;
    println!("Average delete latency: {:?}", avg_latency);
    assert!(
        avg_latency < Duration::from_micros(50),
        "Delete operation too slow: {:?}",
        avg_latency
    );
    cache.check_invariants().unwrap();
}
