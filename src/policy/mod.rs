pub mod lru;

pub use lru::{LruCache, PutOutcome};
