//! Slot-reusing node store.
//!
//! A deleted node gives its slot back to a free list, so a single removal
//! releases exactly one node and every live index stays valid.

use std::ops::{Index, IndexMut};

use crate::error::TreeError;

#[derive(Clone, Debug)]
pub struct Slab<N> {
    slots: Vec<Option<N>>,
    free: Vec<u32>,
    len: usize,
}

impl<N> Default for Slab<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Slab<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `node` and returns its index.
    ///
    /// Growth is fallible: an allocation failure is returned before anything
    /// is written. The free list always has room for every slot, so
    /// [`remove`](Self::remove) never allocates.
    pub fn insert(&mut self, node: N) -> Result<u32, TreeError> {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(node);
            self.len += 1;
            return Ok(idx);
        }

        let idx = u32::try_from(self.slots.len())
            .map_err(|_| TreeError::CapacityExceeded(self.slots.len()))?;
        self.slots.try_reserve(1)?;
        let want = self.slots.len() + 1;
        if self.free.capacity() < want {
            self.free.try_reserve(want - self.free.len())?;
        }
        self.slots.push(Some(node));
        self.len += 1;
        Ok(idx)
    }

    /// Releases the slot at `idx`, returning its node.
    pub fn remove(&mut self, idx: u32) -> Option<N> {
        let node = self.slots.get_mut(idx as usize)?.take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(node)
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        self.slots.get(idx as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        self.slots.get_mut(idx as usize)?.as_mut()
    }

    pub fn contains(&self, idx: u32) -> bool {
        self.get(idx).is_some()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<N> Index<usize> for Slab<N> {
    type Output = N;

    fn index(&self, idx: usize) -> &N {
        match self.slots.get(idx) {
            Some(Some(node)) => node,
            _ => panic!("node {idx} is not live"),
        }
    }
}

impl<N> IndexMut<usize> for Slab<N> {
    fn index_mut(&mut self, idx: usize) -> &mut N {
        match self.slots.get_mut(idx) {
            Some(Some(node)) => node,
            _ => panic!("node {idx} is not live"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_released_slots() {
        let mut slab = Slab::new();
        let a = slab.insert("a").unwrap();
        let b = slab.insert("b").unwrap();
        assert_eq!((a, b), (0, 1));

        assert_eq!(slab.remove(a), Some("a"));
        assert_eq!(slab.remove(a), None);
        assert!(!slab.contains(a));
        assert_eq!(slab.len(), 1);

        let c = slab.insert("c").unwrap();
        assert_eq!(c, a);
        assert_eq!(slab[c as usize], "c");
        assert_eq!(slab.get(b), Some(&"b"));
        assert_eq!(slab.len(), 2);
    }

    #[test]
    #[should_panic(expected = "not live")]
    fn indexing_a_vacant_slot_panics() {
        let mut slab = Slab::new();
        let a = slab.insert(1u8).unwrap();
        slab.remove(a);
        let value: u8 = slab[a as usize];
        assert_eq!(value, 1);
    }
}
