//! Depth-annotated pre-order flattening.

use super::forest::ForestNode;
use super::record::TreeRecord;

/// A row in the flattened tree, ready for indentation-based rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    /// The row itself.
    pub record: T,
    /// Depth in tree (0 = root, unless a start depth was given).
    pub depth: usize,
    /// Whether this node has children.
    pub has_children: bool,
}

/// Flatten a forest in pre-order.
///
/// Each node is emitted before all of its descendants, and a sibling's
/// subtree is emitted only after the previous sibling's subtree is complete.
/// Roots get `start_depth`, their children `start_depth + 1`, and so on.
/// The forest is not modified, so repeated calls give identical output.
pub fn flatten<T: TreeRecord>(forest: &[ForestNode<T>], start_depth: usize) -> Vec<TreeNode<T>> {
    let mut out = Vec::with_capacity(forest.iter().map(ForestNode::len).sum());
    let mut stack: Vec<(&ForestNode<T>, usize)> =
        forest.iter().rev().map(|node| (node, start_depth)).collect();
    while let Some((node, depth)) = stack.pop() {
        out.push(TreeNode {
            record: node.record.clone(),
            depth,
            has_children: !node.children.is_empty(),
        });
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    out
}
