//! Recency list threaded through an entry arena
//!
//! Entries live in a `Vec<Option<Entry>>` arena addressed by stable
//! `SlotId`s. The `prev`/`next` links are slot indices rather than
//! pointers, so no unsafe code is needed and freeing a slot is a push
//! onto the free list. Head = most recently used, tail = least.

/// Stable handle to an entry slot in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlotId(usize);

/// One cached entry plus its intrusive links
struct Entry<K, V> {
    key: K,
    value: V,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly-linked recency list over an arena of slots
///
/// All operations are O(1): splicing only touches a slot and its two
/// neighbors, and allocation reuses freed slots before growing.
pub(crate) struct EntryList<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    free: Vec<SlotId>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
}

impl<K, V> EntryList<K, V> {
    /// Create an empty list with room for `capacity` slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Allocate a slot for a new entry and link it at the head
    pub fn push_front(&mut self, key: K, value: V) -> SlotId {
        let entry = Entry {
            key,
            value,
            prev: None,
            next: None,
        };

        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(entry);
                id
            }
            None => {
                let id = SlotId(self.slots.len());
                self.slots.push(Some(entry));
                id
            }
        };

        self.link_front(id);
        self.len += 1;
        debug_assert!(self.links_consistent());
        id
    }

    /// Move a live slot to the head (most recently used)
    pub fn move_to_front(&mut self, id: SlotId) {
        if self.head == Some(id) {
            return; // Already at front
        }

        self.unlink(id);
        self.link_front(id);
        debug_assert!(self.links_consistent());
    }

    /// Remove and return the tail (least recently used) entry
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Remove a live slot from anywhere in the list, freeing it
    pub fn remove(&mut self, id: SlotId) -> Option<(K, V)> {
        let entry = self.slots[id.0].take()?;
        self.splice_out(entry.prev, entry.next);
        self.free.push(id);
        self.len -= 1;
        debug_assert!(self.links_consistent());
        Some((entry.key, entry.value))
    }

    /// Borrow the value stored in a slot
    pub fn value(&self, id: SlotId) -> Option<&V> {
        self.slots[id.0].as_ref().map(|entry| &entry.value)
    }

    /// Mutably borrow the value stored in a slot
    pub fn value_mut(&mut self, id: SlotId) -> Option<&mut V> {
        self.slots[id.0].as_mut().map(|entry| &mut entry.value)
    }

    /// Key of the least recently used entry
    #[cfg(test)]
    pub fn back_key(&self) -> Option<&K> {
        self.tail
            .and_then(|id| self.slots[id.0].as_ref())
            .map(|entry| &entry.key)
    }

    /// Key of the most recently used entry
    #[cfg(test)]
    pub fn front_key(&self) -> Option<&K> {
        self.head
            .and_then(|id| self.slots[id.0].as_ref())
            .map(|entry| &entry.key)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Drop all entries and reset the arena
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn link_front(&mut self, id: SlotId) {
        let old_head = self.head;

        if let Some(entry) = &mut self.slots[id.0] {
            entry.prev = None;
            entry.next = old_head;
        }

        if let Some(head_id) = old_head {
            if let Some(head) = &mut self.slots[head_id.0] {
                head.prev = Some(id);
            }
        }

        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
    }

    fn unlink(&mut self, id: SlotId) {
        let (prev, next) = match &self.slots[id.0] {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };
        self.splice_out(prev, next);
    }

    /// Re-link the neighbors of a removed slot around it
    fn splice_out(&mut self, prev: Option<SlotId>, next: Option<SlotId>) {
        match prev {
            Some(prev_id) => {
                if let Some(prev_entry) = &mut self.slots[prev_id.0] {
                    prev_entry.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_id) => {
                if let Some(next_entry) = &mut self.slots[next_id.0] {
                    next_entry.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    /// Walk the chain and verify both link directions, the live count,
    /// and the head/tail cursors. Only evaluated by `debug_assert!`.
    fn links_consistent(&self) -> bool {
        let mut seen = 0;
        let mut prev: Option<SlotId> = None;
        let mut cursor = self.head;

        while let Some(id) = cursor {
            let entry = match &self.slots[id.0] {
                Some(entry) => entry,
                None => return false, // link into a freed slot
            };
            if entry.prev != prev {
                return false;
            }
            seen += 1;
            if seen > self.len {
                return false; // cycle
            }
            prev = Some(id);
            cursor = entry.next;
        }

        seen == self.len && self.tail == prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_front_to_back(list: &EntryList<u32, &str>) -> Vec<u32> {
        let mut out = Vec::new();
        let mut cursor = list.head;
        while let Some(id) = cursor {
            let entry = list.slots[id.0].as_ref().unwrap();
            out.push(entry.key);
            cursor = entry.next;
        }
        out
    }

    #[test]
    fn test_push_front_order() {
        let mut list = EntryList::with_capacity(4);
        list.push_front(1, "a");
        list.push_front(2, "b");
        list.push_front(3, "c");

        assert_eq!(keys_front_to_back(&list), vec![3, 2, 1]);
        assert_eq!(list.front_key(), Some(&3));
        assert_eq!(list.back_key(), Some(&1));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_move_to_front_from_tail() {
        let mut list = EntryList::with_capacity(4);
        let a = list.push_front(1, "a");
        list.push_front(2, "b");
        list.push_front(3, "c");

        list.move_to_front(a);
        assert_eq!(keys_front_to_back(&list), vec![1, 3, 2]);
    }

    #[test]
    fn test_move_to_front_from_middle() {
        let mut list = EntryList::with_capacity(4);
        list.push_front(1, "a");
        let b = list.push_front(2, "b");
        list.push_front(3, "c");

        list.move_to_front(b);
        assert_eq!(keys_front_to_back(&list), vec![2, 3, 1]);
    }

    #[test]
    fn test_move_to_front_already_head() {
        let mut list = EntryList::with_capacity(4);
        list.push_front(1, "a");
        let b = list.push_front(2, "b");

        list.move_to_front(b);
        assert_eq!(keys_front_to_back(&list), vec![2, 1]);
    }

    #[test]
    fn test_pop_back() {
        let mut list = EntryList::with_capacity(4);
        list.push_front(1, "a");
        list.push_front(2, "b");

        assert_eq!(list.pop_back(), Some((1, "a")));
        assert_eq!(list.pop_back(), Some((2, "b")));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_single_entry_move_and_pop() {
        let mut list = EntryList::with_capacity(1);
        let a = list.push_front(1, "a");

        list.move_to_front(a);
        assert_eq!(list.front_key(), Some(&1));
        assert_eq!(list.back_key(), Some(&1));

        assert_eq!(list.pop_back(), Some((1, "a")));
        assert_eq!(list.front_key(), None);
        assert_eq!(list.back_key(), None);
    }

    #[test]
    fn test_slot_reuse_after_pop() {
        let mut list = EntryList::with_capacity(2);
        list.push_front(1, "a");
        list.push_front(2, "b");
        list.pop_back();

        // The freed slot is reused: the arena does not grow
        let before = list.slots.len();
        list.push_front(3, "c");
        assert_eq!(list.slots.len(), before);
        assert_eq!(keys_front_to_back(&list), vec![3, 2]);
    }

    #[test]
    fn test_remove_middle() {
        let mut list = EntryList::with_capacity(4);
        list.push_front(1, "a");
        let b = list.push_front(2, "b");
        list.push_front(3, "c");

        assert_eq!(list.remove(b), Some((2, "b")));
        assert_eq!(keys_front_to_back(&list), vec![3, 1]);
        assert_eq!(list.len(), 2);
    }
}
