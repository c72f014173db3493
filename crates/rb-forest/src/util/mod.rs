//! Binary-tree (p / l / r) utility functions.
//!
//! Everything here is color-agnostic: link accessors, leftmost/rightmost
//! descent, transplant, key search, and the stateless traversal cursors in
//! [`inorder`] and [`postorder`].
//!
//! Functions take the node store as `&S` / `&mut S` where `S` indexes by
//! `usize`, so the same code runs over a plain `Vec<N>` and over a
//! [`Slab`](crate::slab::Slab).

pub mod inorder;
pub mod postorder;

use std::ops::{Index, IndexMut};

use crate::types::{Node, Side};

pub use inorder::{first, last, next, prev};
pub use postorder::{first_postorder, left_deepest, next_postorder};

#[inline]
pub(crate) fn get_p<N, S>(arena: &S, idx: u32) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N, S>(arena: &S, idx: u32) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N, S>(arena: &S, idx: u32) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N, S>(arena: &mut S, idx: u32, v: Option<u32>)
where
    N: Node,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N, S>(arena: &mut S, idx: u32, v: Option<u32>)
where
    N: Node,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N, S>(arena: &mut S, idx: u32, v: Option<u32>)
where
    N: Node,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn child<N, S>(arena: &S, idx: u32, side: Side) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    match side {
        Side::Left => get_l(arena, idx),
        Side::Right => get_r(arena, idx),
    }
}

#[inline]
pub(crate) fn set_child<N, S>(arena: &mut S, idx: u32, side: Side, v: Option<u32>)
where
    N: Node,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    match side {
        Side::Left => set_l(arena, idx, v),
        Side::Right => set_r(arena, idx, v),
    }
}

/// Descends from `idx` along `side` children until none is left.
pub(crate) fn most<N, S>(arena: &S, mut idx: u32, side: Side) -> u32
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    while let Some(c) = child(arena, idx, side) {
        idx = c;
    }
    idx
}

/// Leftmost node of the subtree rooted at `idx`.
pub fn left_most<N, S>(arena: &S, idx: u32) -> u32
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    most(arena, idx, Side::Left)
}

/// Rightmost node of the subtree rooted at `idx`.
pub fn right_most<N, S>(arena: &S, idx: u32) -> u32
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    most(arena, idx, Side::Right)
}

/// Makes `new` take the place of `old` under `parent`.
///
/// `parent == None` means `old` was the root. Returns the new root.
pub fn change_child<N, S>(
    arena: &mut S,
    root: Option<u32>,
    old: u32,
    new: Option<u32>,
    parent: Option<u32>,
) -> Option<u32>
where
    N: Node,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    if let Some(n) = new {
        set_p(arena, n, parent);
    }
    match parent {
        None => new,
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
            root
        }
    }
}

/// Replaces the subtree rooted at `u` with the subtree rooted at `v`.
///
/// `u` keeps its own links; only its parent and `v` are updated. Returns the
/// new root.
pub fn transplant<N, S>(arena: &mut S, root: Option<u32>, u: u32, v: Option<u32>) -> Option<u32>
where
    N: Node,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    let p = get_p(arena, u);
    change_child(arena, root, u, v, p)
}

/// Finds a node equal to `query` under `comparator`.
pub fn search<N, S, C>(arena: &S, root: Option<u32>, query: &N, comparator: C) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
    C: Fn(&N, &N) -> i32,
{
    find(arena, root, |node| comparator(query, node))
}

/// Finds a node using a probe that returns `compare(query, node)`.
///
/// Lets callers search by key without materializing a query node.
pub fn find<N, S, P>(arena: &S, root: Option<u32>, probe: P) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
    P: Fn(&N) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = probe(&arena[i as usize]);
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

fn size_inner<N, S>(arena: &S, root: u32) -> usize
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N, S>(arena: &S, root: Option<u32>) -> usize
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    root.map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<N, S>(arena: &S, root: Option<u32>) -> usize
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    match root {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}
