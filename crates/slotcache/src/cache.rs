//! Fixed-capacity LRU cache
//!
//! Two structures share the entry arena: a hash index from key to slot
//! handle, and the recency list ordering those slots from most to least
//! recently used. Eviction pops the list tail and drops its index entry.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::error::{Error, Result};
use crate::list::{EntryList, SlotId};

/// LRU cache with a capacity fixed at construction
///
/// `get` and `put` are O(1) amortized. Note that `get` is not read-only
/// with respect to eviction order: a hit promotes the key to most
/// recently used, which is why it takes `&mut self`. Use [`peek`] to
/// read without promoting.
///
/// [`peek`]: LruCache::peek
pub struct LruCache<K, V> {
    index: HashMap<K, SlotId, RandomState>,
    list: EntryList<K, V>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache with the given capacity
    ///
    /// # Errors
    /// Returns [`Error::ZeroCapacity`] if `capacity` is 0. A cache that
    /// can never hold an entry is treated as a caller mistake rather
    /// than given always-evict semantics.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            list: EntryList::with_capacity(capacity),
            capacity,
        })
    }

    /// Get a value, promoting its key to most recently used
    ///
    /// A miss returns `None` and has no side effects.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.move_to_front(id);
        self.list.value(id)
    }

    /// Get a value without touching recency order
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.get(key).and_then(|&id| self.list.value(id))
    }

    /// Whether a key is cached; does not touch recency order
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Insert a key-value pair, evicting the least recently used entry
    /// if the cache is full
    ///
    /// An existing key has its value overwritten in place and is
    /// promoted to most recently used; nothing is evicted. Returns the
    /// evicted pair, if any. Eviction and insertion happen within this
    /// one call, so no caller ever observes the cache between them.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&id) = self.index.get(&key) {
            if let Some(slot) = self.list.value_mut(id) {
                *slot = value;
            }
            self.list.move_to_front(id);
            return None;
        }

        let mut evicted = None;
        if self.index.len() >= self.capacity {
            if let Some((old_key, old_value)) = self.list.pop_back() {
                self.index.remove(&old_key);
                evicted = Some((old_key, old_value));
            }
        }

        let id = self.list.push_front(key.clone(), value);
        self.index.insert(key, id);
        debug_assert_eq!(self.index.len(), self.list.len());

        evicted
    }

    /// Remove a key from the cache, returning its value if present
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.list.remove(id).map(|(_, value)| value)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries, fixed at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries; capacity is unchanged
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }
}
