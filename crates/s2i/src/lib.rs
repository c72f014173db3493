//! String-keyed integer map on top of [`rb_forest`].
//!
//! Each entry is an [`S2iEntry`] embedded in a red-black node; keys compare
//! byte-wise, like `strcmp`. The map owns its key strings and hands the
//! engine nothing but a comparator.

use std::ops::ControlFlow;

use log::trace;
use rb_forest::{Color, Insertion, RbTree};

pub use rb_forest::{InvariantViolation, PrintOptions, TreeError};

/// Returned by [`S2iMap::value`] for a missing key.
pub const INVALID_VALUE: i64 = -1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct S2iEntry {
    pub key: String,
    pub value: i64,
}

impl S2iEntry {
    pub fn new(key: &str, value: i64) -> Self {
        Self {
            key: key.to_owned(),
            value,
        }
    }
}

/// Byte-wise key comparison.
pub fn s2i_compare(a: &S2iEntry, b: &S2iEntry) -> i32 {
    compare_key(&a.key, &b.key)
}

fn compare_key(a: &str, b: &str) -> i32 {
    a.as_bytes().cmp(b.as_bytes()) as i32
}

#[derive(Clone, Debug, Default)]
pub struct S2iMap {
    tree: RbTree<S2iEntry>,
}

impl S2iMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The underlying tree.
    pub fn tree(&self) -> &RbTree<S2iEntry> {
        &self.tree
    }

    /// Stores `key -> value` unless `key` is present; an existing entry is
    /// left as it was. Returns the node holding `key`.
    pub fn insert(&mut self, key: &str, value: i64) -> Result<u32, TreeError> {
        let inserted = self.tree.insert_unique(S2iEntry::new(key, value), s2i_compare)?;
        Ok(inserted.index())
    }

    /// Stores `key -> value`, overwriting the value of an existing entry.
    pub fn set(&mut self, key: &str, value: i64) -> Result<u32, TreeError> {
        match self.tree.insert_unique(S2iEntry::new(key, value), s2i_compare)? {
            Insertion::Inserted(idx) => Ok(idx),
            Insertion::Duplicate { existing, .. } => {
                trace!("updating {key:?} in node {existing}");
                if let Some(entry) = self.tree.get_mut(existing) {
                    entry.value = value;
                }
                Ok(existing)
            }
        }
    }

    /// Node holding `key`.
    pub fn search(&self, key: &str) -> Option<u32> {
        self.tree.find(|e| compare_key(key, &e.key))
    }

    pub fn entry(&self, idx: u32) -> Option<&S2iEntry> {
        self.tree.get(idx)
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.search(key)
            .and_then(|idx| self.tree.get(idx))
            .map(|e| e.value)
    }

    /// Mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut i64> {
        let idx = self.search(key)?;
        self.tree.get_mut(idx).map(|e| &mut e.value)
    }

    /// Value under `key`, or [`INVALID_VALUE`].
    pub fn value(&self, key: &str) -> i64 {
        self.get(key).unwrap_or(INVALID_VALUE)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Removes `key`. Returns whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        match self.search(key) {
            Some(idx) => self.tree.delete(idx).is_some(),
            None => false,
        }
    }

    /// Entries in ascending key order; `.rev()` for descending.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, i64)> + ExactSizeIterator + '_ {
        self.tree.iter().map(|(_, e)| (e.key.as_str(), e.value))
    }

    /// Entries in post-order.
    pub fn postorder(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.tree.postorder().map(|(_, e)| (e.key.as_str(), e.value))
    }

    /// One `key: value` line per entry, in post-order.
    pub fn postorder_dump(&self) -> String {
        let mut out = String::new();
        let _ = self.tree.for_each_postorder(|_, e| {
            out.push_str(&format!("{}: {}\n", e.key, e.value));
            ControlFlow::<()>::Continue(())
        });
        out
    }

    /// Sideways tree rendering with `(key, value) - color` node lines.
    pub fn pprint(&self, options: &PrintOptions) -> String {
        self.tree.pprint(options, format_entry)
    }

    pub fn assert_valid(&self) -> Result<usize, InvariantViolation> {
        self.tree.assert_valid(s2i_compare)
    }

    /// Releases every entry. Returns how many were released.
    pub fn free(self) -> usize {
        self.tree.free(drop)
    }
}

fn format_entry(entry: &S2iEntry, color: Color) -> String {
    format!("({}, {}) - {}", entry.key, entry.value, color)
}
