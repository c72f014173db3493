use std::ops::Index;

use crate::types::{Node, Side};

use super::{child, get_p, most};

/// Leftmost node in the tree.
pub fn first<N, S>(arena: &S, root: Option<u32>) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    root.map(|r| most(arena, r, Side::Left))
}

/// Rightmost node in the tree.
pub fn last<N, S>(arena: &S, root: Option<u32>) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    root.map(|r| most(arena, r, Side::Right))
}

/// Nearest node in the `toward` direction of the inorder sequence.
///
/// With a `toward` child, that is the extreme node of the child's subtree on
/// the opposite side. Otherwise climb while `node` is a `toward` child; the
/// first ancestor where that stops is the answer.
fn nearest<N, S>(arena: &S, mut node: u32, toward: Side) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    if let Some(c) = child(arena, node, toward) {
        return Some(most(arena, c, toward.opposite()));
    }
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if child(arena, pi, toward) != Some(node) {
            return Some(pi);
        }
        node = pi;
        p = get_p(arena, pi);
    }
    None
}

/// In-order successor.
pub fn next<N, S>(arena: &S, node: u32) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    nearest(arena, node, Side::Right)
}

/// In-order predecessor.
pub fn prev<N, S>(arena: &S, node: u32) -> Option<u32>
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
{
    nearest(arena, node, Side::Left)
}
