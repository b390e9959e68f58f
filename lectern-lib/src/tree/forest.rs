//! Forest reconstruction from parent-pointer rows.

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use super::record::TreeRecord;
use crate::error::TreeError;

/// A node of the reconstructed forest.
///
/// Every traversal here, including `Clone`, `PartialEq` and `Drop`, walks an
/// explicit stack, so arbitrarily deep parent chains never exhaust the
/// thread stack.
pub struct ForestNode<T> {
    /// The row itself.
    pub record: T,
    /// Direct children, in input order.
    pub children: Vec<ForestNode<T>>,
}

impl<T: TreeRecord> ForestNode<T> {
    /// Number of nodes in this subtree, including this one.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(&node.children);
        }
        count
    }

    /// Always `false`; a node is at least itself.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Find a node by id within this subtree, searching in pre-order.
    pub fn find(&self, id: &T::Id) -> Option<&ForestNode<T>> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if &node.record.id() == id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Ids of this subtree in pre-order.
    pub fn ids(&self) -> Vec<T::Id> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node.record.id());
            stack.extend(node.children.iter().rev());
        }
        out
    }
}

impl<T: Clone> Clone for ForestNode<T> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
            children: clone_forest(&self.children),
        }
    }
}

/// Rebuilds a forest bottom-up. Finished subtrees collect on `done`; a node
/// takes its children from the tail of `done` once all of them are built.
fn clone_forest<T: Clone>(roots: &[ForestNode<T>]) -> Vec<ForestNode<T>> {
    let mut done: Vec<ForestNode<T>> = Vec::new();
    let mut stack: Vec<(&ForestNode<T>, bool)> = roots.iter().rev().map(|n| (n, false)).collect();
    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            let children = done.split_off(done.len() - node.children.len());
            done.push(ForestNode {
                record: node.record.clone(),
                children,
            });
        } else {
            stack.push((node, true));
            stack.extend(node.children.iter().rev().map(|n| (n, false)));
        }
    }
    done
}

impl<T: PartialEq> PartialEq for ForestNode<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.record != b.record || a.children.len() != b.children.len() {
                return false;
            }
            stack.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

/// Shows the record and the number of direct children.
impl<T: fmt::Debug> fmt::Debug for ForestNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForestNode")
            .field("record", &self.record)
            .field("children", &self.children.len())
            .finish()
    }
}

impl<T> Drop for ForestNode<T> {
    fn drop(&mut self) {
        // Detach descendants before they drop so each drop sees no children.
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// Index-based view of the parent graph.
///
/// Nodes are addressed by their position in the input slice, so duplicate
/// ids never alias each other; only parent lookups are affected by them.
struct Links<T: TreeRecord> {
    /// Resolved parent index per input position.
    parent: Vec<Option<usize>>,
    /// Ids that appeared more than once, in order of their second appearance.
    duplicates: Vec<T::Id>,
    /// Ids of the records whose parent link was cut to break a cycle.
    cycles: Vec<T::Id>,
}

impl<T: TreeRecord> Links<T> {
    fn resolve(records: &[T]) -> Self {
        // Pass 1: id lookup, last write wins.
        let mut lookup: HashMap<T::Id, usize> = HashMap::with_capacity(records.len());
        let mut duplicates = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let id = record.id();
            if lookup.insert(id.clone(), index).is_some() {
                duplicates.push(id);
            }
        }

        // Pass 2: parent pointers by index. Dangling references become roots.
        let parent = records
            .iter()
            .map(|record| {
                let parent_id = record.parent_id()?;
                let found = lookup.get(&parent_id).copied();
                if found.is_none() {
                    debug!(
                        "category {} references missing parent {}, treating as root",
                        record.id(),
                        parent_id
                    );
                }
                found
            })
            .collect();

        let mut links = Self {
            parent,
            duplicates,
            cycles: Vec::new(),
        };
        links.break_cycles(records);
        links
    }

    /// Cut one link per cycle so every node is reachable from a root.
    ///
    /// The earliest record of each cycle (by input position) is promoted to
    /// a root, which keeps the output order stable.
    fn break_cycles(&mut self, records: &[T]) {
        const UNSEEN: u8 = 0;
        const ON_PATH: u8 = 1;
        const DONE: u8 = 2;

        let mut state = vec![UNSEEN; records.len()];
        let mut path = Vec::new();

        for start in 0..records.len() {
            if state[start] != UNSEEN {
                continue;
            }
            path.clear();
            let mut current = Some(start);
            while let Some(index) = current {
                match state[index] {
                    UNSEEN => {
                        state[index] = ON_PATH;
                        path.push(index);
                        current = self.parent[index];
                    }
                    ON_PATH => {
                        let Some(pos) = path.iter().position(|&i| i == index) else {
                            break;
                        };
                        let Some(&head) = path[pos..].iter().min() else {
                            break;
                        };
                        self.parent[head] = None;
                        self.cycles.push(records[head].id());
                        break;
                    }
                    _ => break,
                }
            }
            for &index in &path {
                state[index] = DONE;
            }
        }
    }
}

/// Reconstruct the forest from a flat list of parent-pointer rows.
///
/// Rows whose parent is absent from the input become roots. Roots and
/// children keep the order in which they appear in the input. Duplicate ids
/// resolve parent lookups to the last row carrying that id, and each cycle
/// is broken at its earliest row. This never fails; degraded input is
/// logged instead.
///
/// # Example
///
/// ```
/// use lectern_lib::model::Category;
/// use lectern_lib::tree::build_forest;
///
/// let records = vec![
///     Category::new(1, None),
///     Category::new(2, Some(1)),
///     Category::new(3, Some(99)),
/// ];
/// let forest = build_forest(&records);
/// assert_eq!(forest.len(), 2);
/// assert_eq!(forest[0].children[0].record.id(), 2);
/// ```
pub fn build_forest<T: TreeRecord>(records: &[T]) -> Vec<ForestNode<T>> {
    let links = Links::resolve(records);
    for id in &links.duplicates {
        warn!("duplicate category id {}, last occurrence wins", id);
    }
    for id in &links.cycles {
        warn!("category {} is part of a parent cycle, promoted to root", id);
    }
    assemble(records, &links.parent)
}

/// Like [`build_forest`], but rejects duplicate ids and cycles.
pub fn build_forest_strict<T: TreeRecord>(
    records: &[T],
) -> Result<Vec<ForestNode<T>>, TreeError> {
    let links = Links::resolve(records);
    if let Some(id) = links.duplicates.first() {
        return Err(TreeError::DuplicateId { id: id.to_string() });
    }
    if let Some(id) = links.cycles.first() {
        return Err(TreeError::CycleDetected { id: id.to_string() });
    }
    Ok(assemble(records, &links.parent))
}

/// Builds nodes bottom-up from index links, without recursion.
fn assemble<T: TreeRecord>(records: &[T], parent: &[Option<usize>]) -> Vec<ForestNode<T>> {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots = Vec::new();
    for (index, parent) in parent.iter().enumerate() {
        match parent {
            Some(p) => children[*p].push(index),
            None => roots.push(index),
        }
    }

    let mut done: Vec<ForestNode<T>> = Vec::with_capacity(records.len());
    let mut stack: Vec<(usize, bool)> = roots.iter().rev().map(|&r| (r, false)).collect();
    while let Some((index, expanded)) = stack.pop() {
        if expanded {
            let kids = done.split_off(done.len() - children[index].len());
            done.push(ForestNode {
                record: records[index].clone(),
                children: kids,
            });
        } else {
            stack.push((index, true));
            stack.extend(children[index].iter().rev().map(|&c| (c, false)));
        }
    }
    done
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn cat(id: i64, parent: Option<i64>) -> Category {
        Category::new(id, parent)
    }

    #[test]
    fn test_empty_input() {
        let forest = build_forest::<Category>(&[]);
        assert!(forest.is_empty());
    }

    #[test]
    fn test_children_attach_regardless_of_input_order() {
        let records = vec![cat(3, Some(2)), cat(2, Some(1)), cat(1, None)];
        let forest = build_forest(&records);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_sibling_order_follows_input() {
        let records = vec![cat(1, None), cat(5, Some(1)), cat(4, Some(1)), cat(6, Some(1))];
        let forest = build_forest(&records);
        let child_ids: Vec<i64> = forest[0].children.iter().map(|c| c.record.id()).collect();
        assert_eq!(child_ids, vec![5, 4, 6]);
    }

    #[test]
    fn test_self_parent_becomes_root() {
        let records = vec![cat(1, Some(1)), cat(2, Some(1))];
        let forest = build_forest(&records);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].ids(), vec![1, 2]);
    }

    #[test]
    fn test_two_node_cycle_broken_at_earliest() {
        let records = vec![cat(7, None), cat(2, Some(3)), cat(3, Some(2))];
        let forest = build_forest(&records);
        let roots: Vec<i64> = forest.iter().map(|n| n.record.id()).collect();
        assert_eq!(roots, vec![7, 2]);
        assert_eq!(forest[1].ids(), vec![2, 3]);
    }

    #[test]
    fn test_cycle_entered_from_tail() {
        // 4 hangs off a 1 -> 2 -> 3 -> 1 cycle.
        let records = vec![cat(4, Some(3)), cat(1, Some(3)), cat(2, Some(1)), cat(3, Some(2))];
        let forest = build_forest(&records);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].record.id(), 1);
        assert_eq!(forest[0].len(), 4);
    }

    #[test]
    fn test_duplicate_ids_keep_every_row() {
        let records = vec![cat(1, None), cat(1, None), cat(2, Some(1))];
        let forest = build_forest(&records);
        assert_eq!(forest.len(), 2);
        assert!(forest[0].children.is_empty());
        assert_eq!(forest[1].children.len(), 1);
    }

    #[test]
    fn test_strict_rejects_duplicates_and_cycles() {
        let dupes = vec![cat(1, None), cat(1, None)];
        assert_eq!(
            build_forest_strict(&dupes),
            Err(TreeError::DuplicateId { id: "1".into() })
        );

        let cycle = vec![cat(1, Some(2)), cat(2, Some(1))];
        assert_eq!(
            build_forest_strict(&cycle),
            Err(TreeError::CycleDetected { id: "1".into() })
        );

        let fine = vec![cat(1, None), cat(2, Some(1)), cat(3, Some(42))];
        assert_eq!(build_forest_strict(&fine).map(|f| f.len()), Ok(2));
    }

    #[test]
    fn test_deep_chain_clone_compare_and_drop() {
        let records: Vec<Category> = (0..50_000)
            .map(|i| cat(i, (i > 0).then_some(i - 1)))
            .collect();
        let forest = build_forest(&records);
        assert_eq!(forest[0].len(), 50_000);

        let copy = forest.clone();
        assert_eq!(copy, forest);
        assert_eq!(copy[0].find(&49_999).map(|n| n.children.len()), Some(0));
        drop(copy);
        assert_eq!(forest[0].ids().last(), Some(&49_999));
    }

    #[test]
    fn test_find() {
        let records = vec![cat(1, None), cat(2, Some(1)), cat(3, Some(2))];
        let forest = build_forest(&records);
        assert_eq!(forest[0].find(&3).map(|n| n.record.id()), Some(3));
        assert!(forest[0].find(&9).is_none());
    }
}
