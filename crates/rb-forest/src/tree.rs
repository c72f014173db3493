//! Owning red-black tree handle.
//!
//! [`RbTree`] pairs a [`Slab`] of [`RbNode`]s with the root index. It is the
//! root of ownership: every node it allocated is released exactly once,
//! either by [`RbTree::delete`], by [`RbTree::release_node`], or by the
//! post-order teardown in [`RbTree::free`] / [`RbTree::clear`].
//!
//! Comparators are `Fn(&T, &T) -> i32` over payloads and are passed to each
//! call, never stored.

use std::ops::ControlFlow;

use log::{debug, trace};

use crate::error::{InvariantViolation, TreeError};
use crate::print::{pprint, PrintOptions};
use crate::red_black::{self, RbNode};
use crate::slab::Slab;
use crate::types::Color;
use crate::util;

/// Outcome of [`RbTree::insert_unique`].
#[derive(Debug, PartialEq, Eq)]
pub enum Insertion<T> {
    /// A new node was linked at this index.
    Inserted(u32),
    /// An equal node already exists; the payload is handed back untouched.
    Duplicate { existing: u32, rejected: T },
}

impl<T> Insertion<T> {
    /// Index of the node now holding the key.
    pub fn index(&self) -> u32 {
        match self {
            Insertion::Inserted(idx) => *idx,
            Insertion::Duplicate { existing, .. } => *existing,
        }
    }

    pub fn is_inserted(&self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }
}

fn by_data<T, C>(comparator: C) -> impl Fn(&RbNode<T>, &RbNode<T>) -> i32
where
    C: Fn(&T, &T) -> i32,
{
    move |a, b| comparator(&a.data, &b.data)
}

#[derive(Clone, Debug)]
pub struct RbTree<T> {
    nodes: Slab<RbNode<T>>,
    root: Option<u32>,
    len: usize,
}

impl<T> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RbTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
            len: 0,
        }
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    /// Number of nodes linked into the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The underlying node store, for the free functions in
    /// [`util`](crate::util) and [`red_black`](crate::red_black).
    pub fn nodes(&self) -> &Slab<RbNode<T>> {
        &self.nodes
    }

    pub fn node(&self, idx: u32) -> Option<&RbNode<T>> {
        self.nodes.get(idx)
    }

    pub fn get(&self, idx: u32) -> Option<&T> {
        self.nodes.get(idx).map(|n| &n.data)
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut T> {
        self.nodes.get_mut(idx).map(|n| &mut n.data)
    }

    pub fn color(&self, idx: u32) -> Option<Color> {
        self.nodes.get(idx).map(|n| n.color)
    }

    fn is_linked(&self, idx: u32) -> bool {
        self.root == Some(idx) || self.nodes.get(idx).is_some_and(|n| !n.is_detached())
    }

    /// Allocates a detached red node holding `data`.
    pub fn create_node(&mut self, data: T) -> Result<u32, TreeError> {
        self.nodes.insert(RbNode::new(data))
    }

    /// Releases a node that is not linked into the tree.
    ///
    /// Returns `None` for linked or unknown nodes.
    pub fn release_node(&mut self, idx: u32) -> Option<T> {
        if self.is_linked(idx) {
            return None;
        }
        self.nodes.remove(idx).map(|n| n.data)
    }

    /// Links the detached node `idx` unless an equal node exists.
    ///
    /// Returns `idx` when it was linked, or the index of the existing equal
    /// node, in which case `idx` stays detached and the caller decides
    /// whether to release it. An already linked `idx` is returned as is.
    ///
    /// Panics if `idx` is not a live node.
    pub fn link_unique<C>(&mut self, idx: u32, comparator: C) -> u32
    where
        C: Fn(&T, &T) -> i32,
    {
        if self.is_linked(idx) {
            return idx;
        }
        let (root, node) =
            red_black::insert_unique(&mut self.nodes, self.root, idx, by_data(comparator));
        self.root = root;
        if node == idx {
            self.len += 1;
            trace!("linked node {idx}");
        } else {
            trace!("node {idx} duplicates node {node}");
        }
        node
    }

    /// Inserts `data` unless an equal payload is present.
    pub fn insert_unique<C>(&mut self, data: T, comparator: C) -> Result<Insertion<T>, TreeError>
    where
        C: Fn(&T, &T) -> i32,
    {
        if let Some(existing) = self.find(|n| comparator(&data, n)) {
            trace!("insert rejected, node {existing} holds an equal key");
            return Ok(Insertion::Duplicate {
                existing,
                rejected: data,
            });
        }
        let idx = self.create_node(data)?;
        Ok(Insertion::Inserted(self.link_unique(idx, &comparator)))
    }

    pub fn search<C>(&self, query: &T, comparator: C) -> Option<u32>
    where
        C: Fn(&T, &T) -> i32,
    {
        self.find(|n| comparator(query, n))
    }

    /// Binary search with a probe returning `compare(query, payload)`.
    pub fn find<P>(&self, probe: P) -> Option<u32>
    where
        P: Fn(&T) -> i32,
    {
        util::find(&self.nodes, self.root, |n| probe(&n.data))
    }

    /// Unlinks and releases the node at `idx`, returning its payload.
    ///
    /// Returns `None` when `idx` is not linked into the tree.
    pub fn delete(&mut self, idx: u32) -> Option<T> {
        if !self.is_linked(idx) {
            return None;
        }
        self.root = red_black::delete(&mut self.nodes, self.root, idx);
        self.len -= 1;
        trace!("deleted node {idx}");
        self.nodes.remove(idx).map(|n| n.data)
    }

    /// Deletes the node equal to `query`, if any.
    pub fn delete_by<C>(&mut self, query: &T, comparator: C) -> Option<T>
    where
        C: Fn(&T, &T) -> i32,
    {
        let idx = self.search(query, comparator)?;
        self.delete(idx)
    }

    /// Promotes the right child of `idx` and returns it.
    ///
    /// Order is preserved; colors are not adjusted. `None` when `idx` is not
    /// linked or has no right child.
    pub fn rotate_left(&mut self, idx: u32) -> Option<u32> {
        if !self.is_linked(idx) {
            return None;
        }
        let y = self.nodes.get(idx)?.r?;
        self.root = red_black::rotate_left(&mut self.nodes, self.root, idx);
        trace!("rotated node {idx} left under node {y}");
        Some(y)
    }

    /// Promotes the left child of `idx` and returns it.
    pub fn rotate_right(&mut self, idx: u32) -> Option<u32> {
        if !self.is_linked(idx) {
            return None;
        }
        let y = self.nodes.get(idx)?.l?;
        self.root = red_black::rotate_right(&mut self.nodes, self.root, idx);
        trace!("rotated node {idx} right under node {y}");
        Some(y)
    }

    pub fn first(&self) -> Option<u32> {
        util::first(&self.nodes, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        util::last(&self.nodes, self.root)
    }

    pub fn next(&self, idx: u32) -> Option<u32> {
        if !self.is_linked(idx) {
            return None;
        }
        util::next(&self.nodes, idx)
    }

    pub fn prev(&self, idx: u32) -> Option<u32> {
        if !self.is_linked(idx) {
            return None;
        }
        util::prev(&self.nodes, idx)
    }

    pub fn first_postorder(&self) -> Option<u32> {
        util::first_postorder(&self.nodes, self.root)
    }

    pub fn next_postorder(&self, idx: u32) -> Option<u32> {
        if !self.is_linked(idx) {
            return None;
        }
        util::next_postorder(&self.nodes, idx)
    }

    /// In-order iterator; `.rev()` walks right-node-left.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            front: self.first(),
            back: self.last(),
            remaining: self.len,
        }
    }

    /// Post-order iterator: every node after both of its children.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder {
            tree: self,
            curr: self.first_postorder(),
        }
    }

    /// Visits nodes in ascending order until `f` breaks.
    pub fn for_each_lnr<B, F>(&self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(u32, &T) -> ControlFlow<B>,
    {
        self.iter().try_for_each(|(i, data)| f(i, data))
    }

    /// Visits nodes in descending order until `f` breaks.
    pub fn for_each_rnl<B, F>(&self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(u32, &T) -> ControlFlow<B>,
    {
        self.iter().rev().try_for_each(|(i, data)| f(i, data))
    }

    /// Visits nodes in post-order until `f` breaks.
    pub fn for_each_postorder<B, F>(&self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(u32, &T) -> ControlFlow<B>,
    {
        self.postorder().try_for_each(|(i, data)| f(i, data))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        util::height(&self.nodes, self.root)
    }

    /// Checks all invariants, returning the black height.
    pub fn assert_valid<C>(&self, comparator: C) -> Result<usize, InvariantViolation>
    where
        C: Fn(&T, &T) -> i32,
    {
        red_black::assert_red_black_tree(&self.nodes, self.root, by_data(comparator))
    }

    /// Sideways rendering, see [`pprint`](crate::print::pprint).
    pub fn pprint<F>(&self, options: &PrintOptions, format: F) -> String
    where
        F: Fn(&T, Color) -> String,
    {
        pprint(&self.nodes, self.root, options, |_, n| format(&n.data, n.color))
    }

    /// Tears the tree down, handing each payload to `destroy` exactly once,
    /// children before parents. Returns the number of nodes released.
    pub fn free<F>(mut self, destroy: F) -> usize
    where
        F: FnMut(T),
    {
        self.teardown(destroy)
    }

    /// Releases every node, dropping the payloads.
    pub fn clear(&mut self) {
        self.teardown(drop);
    }

    fn teardown<F>(&mut self, mut destroy: F) -> usize
    where
        F: FnMut(T),
    {
        let mut released = 0;
        let mut release = |nodes: &mut Slab<RbNode<T>>, idx: u32| {
            if let Some(node) = nodes.remove(idx) {
                destroy(node.data);
                released += 1;
            }
        };

        // The cursor reads the current node's links to advance, so each node
        // is released one step after it was visited.
        let mut prev = None;
        let mut curr = util::first_postorder(&self.nodes, self.root);
        while let Some(i) = curr {
            if let Some(p) = prev {
                release(&mut self.nodes, p);
            }
            prev = Some(i);
            curr = util::next_postorder(&self.nodes, i);
        }
        if let Some(p) = prev {
            release(&mut self.nodes, p);
        }

        self.nodes.clear();
        self.root = None;
        self.len = 0;
        debug!("released {released} nodes");
        released
    }
}

impl<'a, T> IntoIterator for &'a RbTree<T> {
    type Item = (u32, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over `(index, payload)`.
pub struct Iter<'a, T> {
    tree: &'a RbTree<T>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (u32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        self.front = util::next(&self.tree.nodes, i);
        self.remaining -= 1;
        Some((i, &self.tree.nodes[i as usize].data))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        self.back = util::prev(&self.tree.nodes, i);
        self.remaining -= 1;
        Some((i, &self.tree.nodes[i as usize].data))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Post-order iterator over `(index, payload)`.
pub struct Postorder<'a, T> {
    tree: &'a RbTree<T>,
    curr: Option<u32>,
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = (u32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = util::next_postorder(&self.tree.nodes, i);
        Some((i, &self.tree.nodes[i as usize].data))
    }
}
