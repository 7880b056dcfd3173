//! Thread-safe cache handle
//!
//! [`LruCache`] is single-threaded by design: `get` promotes recency,
//! so every reader is also a writer. `SharedCache` is the sanctioned
//! concurrent facade: one mutex spans each whole operation, so the
//! evict-then-insert inside `put` is atomic to every other handle.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::LruCache;
use crate::error::Result;
use crate::stats::CacheStats;

/// Clonable handle to a mutex-guarded [`LruCache`] with statistics
///
/// Cloning is cheap and every clone operates on the same cache. A
/// `Mutex` is used rather than a reader/writer lock because hits
/// reorder the recency list, leaving no read-only path to share.
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
    stats: Arc<CacheStats>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new shared cache with the given capacity
    ///
    /// # Errors
    /// Returns [`crate::Error::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity)?)),
            stats: Arc::new(CacheStats::new()),
        })
    }

    /// Get a value by clone, promoting the key on a hit
    pub fn get(&self, key: &K) -> Option<V> {
        let value = self.inner.lock().get(key).cloned();
        match value {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert a key-value pair, evicting the LRU entry if full
    pub fn put(&self, key: K, value: V) {
        let evicted = self.inner.lock().put(key, value);
        self.stats.record_insert();
        if evicted.is_some() {
            self.stats.record_eviction();
        }
    }

    /// Remove a key, returning its value if present
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Whether a key is cached; does not touch recency order or stats
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Current number of live entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Drop all entries and reset statistics
    pub fn clear(&self) {
        self.inner.lock().clear();
        self.stats.reset();
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
