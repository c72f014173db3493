//! Post-order cursor: children before parent, no stack.
//!
//! Each step reads only the current node's parent and the still-unvisited
//! right sibling subtree, so the node just left behind may be released
//! before the walk moves on.

use std::ops::Index;

use crate::types::Node;

use super::{get_l, get_p, get_r};

/// Descends from `idx` preferring left children, then right children, down
/// to a leaf. That leaf is the first post-order node of the subtree.
pub fn left_deepest<N, S>(arena: &S, mut idx: u32) -> u32
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    loop {
        if let Some(l) = get_l(arena, idx) {
            idx = l;
        } else if let Some(r) = get_r(arena, idx) {
            idx = r;
        } else {
            return idx;
        }
    }
}

/// First node of the post-order walk.
pub fn first_postorder<N, S>(arena: &S, root: Option<u32>) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    root.map(|r| left_deepest(arena, r))
}

/// Post-order successor of `idx`.
pub fn next_postorder<N, S>(arena: &S, idx: u32) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    let p = get_p(arena, idx)?;
    if get_l(arena, p) == Some(idx) {
        if let Some(r) = get_r(arena, p) {
            return Some(left_deepest(arena, r));
        }
    }
    Some(p)
}
