//! Red-black tree engine: rotations, unique insertion, deletion and the
//! invariant checker.
//!
//! All functions work on a node store plus a root index and return the new
//! root; the store itself never learns which node is the root.

pub mod types;
pub mod util;

pub use types::RbNode;
pub use util::{assert_red_black_tree, delete, insert_unique, rotate_left, rotate_right};
