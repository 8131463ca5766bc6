use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use lrukit::policy::lru::LruCache;

fn prefilled(capacity: usize) -> LruCache<u64, u64> {
    let mut cache = LruCache::new(capacity).unwrap();
    for i in 0..capacity as u64 {
        cache.put(i, i);
    }
    cache
}

fn bench_lru_put_get(c: &mut Criterion) {
    c.bench_function("lru_put_get", |b| {
        b.iter_batched(
            || prefilled(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            || prefilled(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(cache.put(std::hint::black_box(10_000 + i), i));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_get_hotset(c: &mut Criterion) {
    c.bench_function("lru_get_hotset", |b| {
        b.iter_batched(
            || prefilled(4096),
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_delete_reinsert(c: &mut Criterion) {
    c.bench_function("lru_delete_reinsert", |b| {
        b.iter_batched(
            || prefilled(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    let value = cache.delete(&i).unwrap_or_default();
                    let _ = std::hint::black_box(cache.put(i, value + 1));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_shrink(c: &mut Criterion) {
    c.bench_function("lru_shrink_half", |b| {
        b.iter_batched(
            || prefilled(4096),
            |mut cache| {
                cache.set_capacity(2048).unwrap();
                std::hint::black_box(cache.len())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lru_put_get,
    bench_lru_eviction_churn,
    bench_lru_get_hotset,
    bench_lru_delete_reinsert,
    bench_lru_shrink
);
criterion_main!(benches);
