//! Runs a fixed call script against a capacity-2 cache and prints each result.
//!
//! Observer events are logged through `tracing`; set `RUST_LOG=lrukit=info`
//! to see only evictions.

use lrukit::prelude::*;
use tracing_subscriber::EnvFilter;

fn show(op: &str, result: Option<i32>) {
    match result {
        Some(value) => println!("{op} -> {value}"),
        None => println!("{op} -> not found"),
    }
}

fn main() -> Result<(), CacheError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut cache = LruCache::with_observer(2, TracingObserver::new())?;

    cache.put(1, 1);
    cache.put(2, 2);
    show("get(1)", cache.get(&1).copied());

    // evicts 2
    cache.put(3, 3);
    show("get(2)", cache.get(&2).copied());

    // evicts 1
    cache.put(4, 4);
    show("get(1)", cache.get(&1).copied());
    show("get(3)", cache.get(&3).copied());
    show("get(4)", cache.get(&4).copied());

    show("delete(3)", cache.delete(&3));
    show("get(3)", cache.get(&3).copied());

    Ok(())
}
