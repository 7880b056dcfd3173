//! # slotcache
//!
//! Fixed-capacity LRU cache built on an arena-indexed intrusive list.
//!
//! ## Architecture
//! - **Index**: AHash-keyed `HashMap` from key to slot handle (O(1))
//! - **Recency list**: doubly-linked list threaded through an entry
//!   arena by slot index, head = most recently used (O(1) splices)
//! - **SharedCache**: `Arc<Mutex>` facade with hit/miss statistics for
//!   callers that need one cache across threads
//!
//! `LruCache` itself is not internally synchronized; `get` promotes the
//! key to most-recently-used, so it takes `&mut self` like any write.

#![warn(missing_docs)]

mod cache;
mod error;
mod list;
mod shared;
mod stats;

pub use cache::LruCache;
pub use error::{Error, Result};
pub use shared::SharedCache;
pub use stats::{CacheStats, StatsSnapshot};
