//! Sideways tree printer: the tree is rendered rotated 90°, right subtree
//! above its parent and left subtree below, one node per line.

use std::ops::Index;

use crate::types::Node;

/// Layout knobs for [`pprint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    /// Spaces before the root line.
    pub indent: usize,
    /// Extra spaces per level.
    pub step: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self { indent: 0, step: 3 }
    }
}

/// Renders the tree at `root`; `format` produces the text of one node.
///
/// Every line, including the last, ends in `\n`. An empty tree renders as
/// an empty string.
pub fn pprint<N, S, F>(arena: &S, root: Option<u32>, options: &PrintOptions, format: F) -> String
where
    N: Node,
    S: Index<usize, Output = N> + ?Sized,
    F: Fn(u32, &N) -> String,
{
    fn walk<N, S, F>(arena: &S, node: u32, spaces: usize, step: usize, format: &F, out: &mut String)
    where
        N: Node,
        S: Index<usize, Output = N> + ?Sized,
        F: Fn(u32, &N) -> String,
    {
        let n = &arena[node as usize];
        if let Some(r) = n.r() {
            walk(arena, r, spaces + step, step, format, out);
        }
        out.extend(std::iter::repeat(' ').take(spaces));
        out.push_str(&format(node, n));
        out.push('\n');
        if let Some(l) = n.l() {
            walk(arena, l, spaces + step, step, format, out);
        }
    }

    let mut out = String::new();
    if let Some(root) = root {
        walk(arena, root, options.indent, options.step, &format, &mut out);
    }
    out
}
