// Network-first response caching with versioned cache names.

pub mod network_first;
pub mod storage;

pub use network_first::{NetworkFirstCache, WorkerState};
pub use storage::CacheStorage;
