use std::ops::{Index, IndexMut};

use crate::error::InvariantViolation;
use crate::types::{Color, RbNodeLike, Side};
use crate::util::{
    change_child, child, first, get_l, get_p, get_r, left_most, next, set_child, set_l, set_p,
    set_r, transplant,
};

#[inline]
fn color<N, S>(arena: &S, i: u32) -> Color
where
    N: RbNodeLike,
    S: Index<usize, Output = N> + ?Sized,
{
    arena[i as usize].color()
}

#[inline]
fn set_color<N, S>(arena: &mut S, i: u32, c: Color)
where
    N: RbNodeLike,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    arena[i as usize].set_color(c);
}

/// Nil counts as black.
#[inline]
fn is_red<N, S>(arena: &S, i: Option<u32>) -> bool
where
    N: RbNodeLike,
    S: Index<usize, Output = N> + ?Sized,
{
    i.is_some_and(|i| arena[i as usize].is_red())
}

/// Moves `x` down to its `side` and promotes the child on the other side.
///
/// Left rotation is `rotate(.., Side::Left)`: the right child `y` takes
/// `x`'s place, `y`'s left subtree becomes `x`'s right subtree.
fn rotate<N, S>(arena: &mut S, root: Option<u32>, x: u32, side: Side) -> Option<u32>
where
    N: RbNodeLike,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    let up = side.opposite();
    let y = child(arena, x, up).expect("rotation needs a child on the promoted side");
    let inner = child(arena, y, side);

    set_child(arena, x, up, inner);
    if let Some(inner) = inner {
        set_p(arena, inner, Some(x));
    }

    let parent = get_p(arena, x);
    let root = change_child(arena, root, x, Some(y), parent);

    set_child(arena, y, side, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Promotes the right child of `x`. Returns the new root.
///
/// Panics if `x` has no right child.
pub fn rotate_left<N, S>(arena: &mut S, root: Option<u32>, x: u32) -> Option<u32>
where
    N: RbNodeLike,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    rotate(arena, root, x, Side::Left)
}

/// Promotes the left child of `x`. Returns the new root.
///
/// Panics if `x` has no left child.
pub fn rotate_right<N, S>(arena: &mut S, root: Option<u32>, x: u32) -> Option<u32>
where
    N: RbNodeLike,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    rotate(arena, root, x, Side::Right)
}

/// Links detached node `n` into the tree unless an equal node exists.
///
/// Returns `(root, node)` where `node == n` when `n` was linked and
/// rebalanced, or the index of the pre-existing equal node otherwise (in
/// which case the tree is untouched and `n` stays detached).
pub fn insert_unique<N, S, C>(
    arena: &mut S,
    root: Option<u32>,
    n: u32,
    comparator: C,
) -> (Option<u32>, u32)
where
    N: RbNodeLike,
    S: IndexMut<usize, Output = N> + ?Sized,
    C: Fn(&N, &N) -> i32,
{
    let mut parent = None;
    let mut side = Side::Left;
    let mut curr = root;
    while let Some(c) = curr {
        let cmp = comparator(&arena[n as usize], &arena[c as usize]);
        if cmp == 0 {
            return (root, c);
        }
        side = if cmp < 0 { Side::Left } else { Side::Right };
        parent = Some(c);
        curr = child(arena, c, side);
    }

    set_p(arena, n, parent);
    set_l(arena, n, None);
    set_r(arena, n, None);
    set_color(arena, n, Color::Red);

    let root = match parent {
        None => Some(n),
        Some(p) => {
            set_child(arena, p, side, Some(n));
            root
        }
    };
    (insert_fixup(arena, root, n), n)
}

fn insert_fixup<N, S>(arena: &mut S, mut root: Option<u32>, mut n: u32) -> Option<u32>
where
    N: RbNodeLike,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    while let Some(mut p) = get_p(arena, n) {
        if color(arena, p) == Color::Black {
            break;
        }
        // A red node is never the root.
        let g = get_p(arena, p).expect("red parent has a parent");
        let side = if get_l(arena, g) == Some(p) {
            Side::Left
        } else {
            Side::Right
        };

        let uncle = child(arena, g, side.opposite());
        if let Some(u) = uncle {
            if is_red(arena, Some(u)) {
                set_color(arena, p, Color::Black);
                set_color(arena, u, Color::Black);
                set_color(arena, g, Color::Red);
                n = g;
                continue;
            }
        }

        if child(arena, p, side.opposite()) == Some(n) {
            root = rotate(arena, root, p, side);
            n = p;
            p = get_p(arena, n).expect("rotated node has a parent");
        }

        set_color(arena, p, Color::Black);
        set_color(arena, g, Color::Red);
        root = rotate(arena, root, g, side.opposite());
    }

    if let Some(r) = root {
        set_color(arena, r, Color::Black);
    }
    root
}

/// Unlinks `z` from the tree and restores the red-black invariants.
///
/// A node with two children is replaced by its inorder successor through
/// link surgery; payloads never move. On return `z` is detached (all
/// relations nil) and may be released. Returns the new root.
pub fn delete<N, S>(arena: &mut S, mut root: Option<u32>, z: u32) -> Option<u32>
where
    N: RbNodeLike,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    let zl = get_l(arena, z);
    let zr = get_r(arena, z);

    let removed;
    let x;
    let x_parent;
    match (zl, zr) {
        (None, _) | (_, None) => {
            removed = color(arena, z);
            x = zl.or(zr);
            x_parent = get_p(arena, z);
            root = transplant(arena, root, z, x);
        }
        (Some(l), Some(r)) => {
            let y = left_most(arena, r);
            removed = color(arena, y);
            x = get_r(arena, y);
            if y == r {
                x_parent = Some(y);
            } else {
                x_parent = get_p(arena, y);
                root = transplant(arena, root, y, x);
                set_r(arena, y, Some(r));
                set_p(arena, r, Some(y));
            }
            root = transplant(arena, root, z, Some(y));
            set_l(arena, y, Some(l));
            set_p(arena, l, Some(y));
            let zc = color(arena, z);
            set_color(arena, y, zc);
        }
    }

    set_p(arena, z, None);
    set_l(arena, z, None);
    set_r(arena, z, None);
    set_color(arena, z, Color::Red);

    if removed == Color::Black {
        root = delete_fixup(arena, root, x, x_parent);
    }
    root
}

/// Absorbs the extra black carried by `x` (possibly nil, hence `parent`).
fn delete_fixup<N, S>(
    arena: &mut S,
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) -> Option<u32>
where
    N: RbNodeLike,
    S: IndexMut<usize, Output = N> + ?Sized,
{
    while x != root && !is_red(arena, x) {
        let Some(p) = parent else {
            break;
        };
        let side = if get_l(arena, p) == x {
            Side::Left
        } else {
            Side::Right
        };

        let mut w = child(arena, p, side.opposite()).expect("doubly-black node has a sibling");

        if is_red(arena, Some(w)) {
            set_color(arena, w, Color::Black);
            set_color(arena, p, Color::Red);
            root = rotate(arena, root, p, side);
            w = child(arena, p, side.opposite()).expect("doubly-black node has a sibling");
        }

        let near = child(arena, w, side);
        let far = child(arena, w, side.opposite());
        if !is_red(arena, near) && !is_red(arena, far) {
            set_color(arena, w, Color::Red);
            x = Some(p);
            parent = get_p(arena, p);
            continue;
        }

        if !is_red(arena, far) {
            if let Some(near) = near {
                set_color(arena, near, Color::Black);
            }
            set_color(arena, w, Color::Red);
            root = rotate(arena, root, w, side.opposite());
            w = child(arena, p, side.opposite()).expect("doubly-black node has a sibling");
        }

        let pc = color(arena, p);
        set_color(arena, w, pc);
        set_color(arena, p, Color::Black);
        if let Some(far) = child(arena, w, side.opposite()) {
            set_color(arena, far, Color::Black);
        }
        root = rotate(arena, root, p, side);
        x = root;
        parent = None;
    }

    if let Some(x) = x {
        set_color(arena, x, Color::Black);
    }
    root
}

/// Checks every red-black and ordering invariant of the tree at `root`.
///
/// Returns the black height (nil excluded) on success.
pub fn assert_red_black_tree<N, S, C>(
    arena: &S,
    root: Option<u32>,
    comparator: C,
) -> Result<usize, InvariantViolation>
where
    N: RbNodeLike,
    S: Index<usize, Output = N> + ?Sized,
    C: Fn(&N, &N) -> i32,
{
    let Some(root) = root else {
        return Ok(0);
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantViolation::RootHasParent { root });
    }
    if color(arena, root) != Color::Black {
        return Err(InvariantViolation::RootNotBlack { root });
    }

    fn black_height<N, S>(arena: &S, node: Option<u32>) -> Result<usize, InvariantViolation>
    where
        N: RbNodeLike,
        S: Index<usize, Output = N> + ?Sized,
    {
        let Some(node) = node else {
            return Ok(0);
        };

        let red = is_red(arena, Some(node));
        for c in [get_l(arena, node), get_r(arena, node)].into_iter().flatten() {
            if get_p(arena, c) != Some(node) {
                return Err(InvariantViolation::BrokenParentLink { node, child: c });
            }
            if red && is_red(arena, Some(c)) {
                return Err(InvariantViolation::RedRedEdge { node, child: c });
            }
        }

        let left = black_height(arena, get_l(arena, node))?;
        let right = black_height(arena, get_r(arena, node))?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { node, left, right });
        }

        Ok(left + usize::from(!red))
    }

    let height = black_height(arena, Some(root))?;

    let mut prev_node: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(&arena[prev as usize], &arena[i as usize]) >= 0 {
                return Err(InvariantViolation::OrderViolated { prev, next: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(height)
}
