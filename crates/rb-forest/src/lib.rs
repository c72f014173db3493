//! Arena-based red-black tree engine.
//!
//! Nodes carry parent / left / right links as `Option<u32>` indices into a
//! node store, plus a color. `None` is the nil sentinel. The engine only
//! rewires links and recolors; payloads never move, so a consumer can embed
//! whatever record it likes in [`RbNode::data`] and keep stable indices to it.
//!
//! Comparators are three-way `Fn(&N, &N) -> i32` functions supplied at each
//! call site.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`], [`RbNodeLike`], [`Color`], [`Side`] |
//! [`util`] | transplant, leftmost/rightmost, search, in-order and post-order cursors |
//! [`red_black`] | rotations, `insert_unique`, `delete`, invariant checker |
//! [`slab`] | slot-reusing node store with fallible growth |
//! [`tree`] | [`RbTree`], the owning handle with iterators and teardown |
//! [`print`] | sideways pretty printer |
//! [`error`] | [`TreeError`], [`InvariantViolation`] |

pub mod error;
pub mod print;
pub mod red_black;
pub mod slab;
pub mod tree;
pub mod types;
pub mod util;

pub use error::{InvariantViolation, TreeError};
pub use print::{pprint, PrintOptions};
pub use red_black::{assert_red_black_tree, delete, insert_unique, rotate_left, rotate_right, RbNode};
pub use slab::Slab;
pub use tree::{Insertion, Iter, Postorder, RbTree};
pub use types::{Color, Node, RbNodeLike, Side};
pub use util::{
    first, first_postorder, last, left_deepest, left_most, next, next_postorder, prev, right_most,
    search, transplant,
};
