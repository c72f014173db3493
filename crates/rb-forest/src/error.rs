use std::collections::TryReserveError;

/// Failures surfaced by node allocation.
///
/// Duplicate keys and missing keys are not errors: they are reported through
/// [`Insertion::Duplicate`](crate::tree::Insertion) and `Option::None`.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("failed to allocate tree node: {0}")]
    AllocationFailure(#[from] TryReserveError),
    #[error("node store is full: {0} slots in use")]
    CapacityExceeded(usize),
}

/// A broken red-black or search-order invariant found by
/// [`assert_red_black_tree`](crate::red_black::assert_red_black_tree).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("root {root} has a parent")]
    RootHasParent { root: u32 },
    #[error("root {root} is not black")]
    RootNotBlack { root: u32 },
    #[error("broken parent link on child {child} of node {node}")]
    BrokenParentLink { node: u32, child: u32 },
    #[error("red node {node} has red child {child}")]
    RedRedEdge { node: u32, child: u32 },
    #[error("black height mismatch under node {node}: left {left}, right {right}")]
    BlackHeightMismatch { node: u32, left: usize, right: usize },
    #[error("inorder order violated between node {prev} and node {next}")]
    OrderViolated { prev: u32, next: u32 },
}
