//! The search engine: per-thread DFS (C6), the thread pool/partitioner (C8),
//! and the rank orchestrator (C9) that ties them to a [`crate::transport`].
pub mod pool;
pub mod rank;
pub mod worker;

pub use self::rank::{search, SearchConfig, SearchConfigBuilder};
