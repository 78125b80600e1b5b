//! DFS and BFS traversal algorithms over the tree

use crate::error::Result;
use crate::node::Node;
use crate::tree::Tree;
use std::collections::VecDeque;

/// Tree traversal engine
///
/// Computes depth-first and breadth-first successors/predecessors for a
/// node, and produces lazy whole-sequence traversals. The two sequence
/// entry points have intentionally different scope: depth-first traversal
/// is anchored to the whole tree (it backtracks through ancestors and
/// continues past the start node's subtree), while breadth-first traversal
/// is bounded to the start node's subtree.
pub struct TraversalEngine;

impl TraversalEngine {
    /// Next node in depth-first order
    ///
    /// Preference: first child, else next sibling, else the next sibling
    /// of the nearest ancestor that has one.
    pub fn next_dfs(tree: &Tree, id: &str) -> Result<Option<Node>> {
        let node = tree.get_node(id)?;

        let children = tree.get_children(id)?;
        if let Some(first_child) = children.into_iter().next() {
            return Ok(Some(first_child));
        }

        if node.parent_id.is_some() {
            if let Some(sibling) = Self::next_sibling(tree, id)? {
                return Ok(Some(sibling));
            }
        }

        // Walk up until an ancestor has a next sibling
        let mut current = node;
        while current.parent_id.is_some() {
            let parent = match tree.get_parent(&current.id)? {
                Some(parent) => parent,
                None => break,
            };
            if let Some(sibling) = Self::next_sibling(tree, &parent.id)? {
                return Ok(Some(sibling));
            }
            current = parent;
        }

        Ok(None)
    }

    /// Previous node in depth-first order
    ///
    /// The inverse of `next_dfs`: the rightmost descendant of the previous
    /// sibling when one exists, otherwise the parent. The root has no
    /// predecessor.
    pub fn prev_dfs(tree: &Tree, id: &str) -> Result<Option<Node>> {
        let node = tree.get_node(id)?;

        if node.parent_id.is_none() {
            return Ok(None);
        }

        let siblings = tree.get_siblings(id)?;
        let position = siblings.iter().position(|s| s.id == id);

        match position {
            Some(index) if index > 0 => {
                let left_sibling = &siblings[index - 1];
                Ok(Some(Self::rightmost_descendant(tree, &left_sibling.id)?))
            }
            _ => tree.get_parent(id),
        }
    }

    /// Next node in breadth-first order
    ///
    /// Enumerates the whole tree in level order from the root and returns
    /// the node immediately after `id`; `None` when `id` is last or not
    /// reachable from the root.
    pub fn next_bfs(tree: &Tree, id: &str) -> Result<Option<Node>> {
        let root = match tree.get_root() {
            Some(root) => root,
            None => return Ok(None),
        };

        let mut queue = VecDeque::new();
        queue.push_back(root);
        let mut found_current = false;

        while let Some(current) = queue.pop_front() {
            if found_current {
                return Ok(Some(current));
            }
            if current.id == id {
                found_current = true;
            }
            queue.extend(tree.get_children(&current.id)?);
        }

        Ok(None)
    }

    /// Lazily traverse in depth-first order starting at `start_id`
    ///
    /// Repeatedly applies `next_dfs`, so the sequence continues past the
    /// start node's subtree into subsequent siblings and the siblings of
    /// its ancestors.
    pub fn traverse_dfs<'a>(tree: &'a Tree, start_id: &str) -> Result<DfsIter<'a>> {
        tree.get_node(start_id)?;
        tracing::debug!("Starting DFS traversal at {}", start_id);

        Ok(DfsIter {
            tree,
            next_id: Some(start_id.to_string()),
        })
    }

    /// Lazily traverse the subtree rooted at `start_id` in level order
    ///
    /// A queue-based walk that never consults ancestors, so it is bounded
    /// to the start node's subtree (unlike `traverse_dfs`).
    pub fn traverse_bfs<'a>(tree: &'a Tree, start_id: &str) -> Result<BfsIter<'a>> {
        let start = tree.get_node(start_id)?;
        tracing::debug!("Starting BFS traversal at {}", start_id);

        let mut queue = VecDeque::new();
        queue.push_back(start);
        Ok(BfsIter { tree, queue })
    }

    fn next_sibling(tree: &Tree, id: &str) -> Result<Option<Node>> {
        let siblings = tree.get_siblings(id)?;
        let position = siblings.iter().position(|s| s.id == id);

        match position {
            Some(index) if index + 1 < siblings.len() => Ok(Some(siblings[index + 1].clone())),
            _ => Ok(None),
        }
    }

    /// Follow last children down to a leaf
    fn rightmost_descendant(tree: &Tree, id: &str) -> Result<Node> {
        let mut current = tree.get_node(id)?;
        while !current.is_leaf {
            let children = tree.get_children(&current.id)?;
            match children.into_iter().last() {
                Some(last_child) => current = last_child,
                None => break,
            }
        }
        Ok(current)
    }
}

/// Iterator over nodes in depth-first order (whole-tree-anchored)
pub struct DfsIter<'a> {
    tree: &'a Tree,
    next_id: Option<String>,
}

impl Iterator for DfsIter<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next_id.take()?;
        let node = self.tree.get_node(&id).ok()?;
        self.next_id = TraversalEngine::next_dfs(self.tree, &id)
            .ok()
            .flatten()
            .map(|next| next.id);
        Some(node)
    }
}

/// Iterator over nodes in level order (subtree-bounded)
pub struct BfsIter<'a> {
    tree: &'a Tree,
    queue: VecDeque<Node>,
}

impl Iterator for BfsIter<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Ok(children) = self.tree.get_children(&node.id) {
            self.queue.extend(children);
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Tree {
        let mut tree = Tree::new();
        tree.create_node("root", "Root", None, None).unwrap();
        tree.create_node("a", "Node A", Some("root"), None).unwrap();
        tree.create_node("a1", "Node A1", Some("a"), None).unwrap();
        tree.create_node("a2", "Node A2", Some("a"), None).unwrap();
        tree.create_node("b", "Node B", Some("root"), None).unwrap();
        tree.create_node("b1", "Node B1", Some("b"), None).unwrap();
        tree
    }

    fn ids(nodes: impl IntoIterator<Item = Node>) -> Vec<String> {
        nodes.into_iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_next_dfs_takes_first_child() {
        let tree = sample_tree();
        assert_eq!(TraversalEngine::next_dfs(&tree, "root").unwrap().unwrap().id, "a");
        assert_eq!(TraversalEngine::next_dfs(&tree, "a").unwrap().unwrap().id, "a1");
    }

    #[test]
    fn test_next_dfs_takes_next_sibling() {
        let tree = sample_tree();
        assert_eq!(TraversalEngine::next_dfs(&tree, "a1").unwrap().unwrap().id, "a2");
    }

    #[test]
    fn test_next_dfs_backtracks_through_ancestors() {
        let tree = sample_tree();
        // a2 has no children and no next sibling; its parent a does
        assert_eq!(TraversalEngine::next_dfs(&tree, "a2").unwrap().unwrap().id, "b");
        // b1 is the very last node in DFS order
        assert!(TraversalEngine::next_dfs(&tree, "b1").unwrap().is_none());
    }

    #[test]
    fn test_next_dfs_missing_node_fails() {
        let tree = sample_tree();
        assert!(TraversalEngine::next_dfs(&tree, "ghost").is_err());
    }

    #[test]
    fn test_prev_dfs_of_root_is_none() {
        let tree = sample_tree();
        assert!(TraversalEngine::prev_dfs(&tree, "root").unwrap().is_none());
    }

    #[test]
    fn test_prev_dfs_without_left_sibling_is_parent() {
        let tree = sample_tree();
        assert_eq!(TraversalEngine::prev_dfs(&tree, "a").unwrap().unwrap().id, "root");
        assert_eq!(TraversalEngine::prev_dfs(&tree, "a1").unwrap().unwrap().id, "a");
        assert_eq!(TraversalEngine::prev_dfs(&tree, "b1").unwrap().unwrap().id, "b");
    }

    #[test]
    fn test_prev_dfs_goes_to_rightmost_descendant_of_left_sibling() {
        let tree = sample_tree();
        // b's left sibling is a, whose rightmost descendant is a2
        assert_eq!(TraversalEngine::prev_dfs(&tree, "b").unwrap().unwrap().id, "a2");
        assert_eq!(TraversalEngine::prev_dfs(&tree, "a2").unwrap().unwrap().id, "a1");
    }

    #[test]
    fn test_prev_dfs_descends_multiple_levels() {
        let mut tree = sample_tree();
        tree.create_node("a2x", "Deep", Some("a2"), None).unwrap();

        assert_eq!(TraversalEngine::prev_dfs(&tree, "b").unwrap().unwrap().id, "a2x");
    }

    #[test]
    fn test_next_bfs_crosses_levels() {
        let tree = sample_tree();
        assert_eq!(TraversalEngine::next_bfs(&tree, "root").unwrap().unwrap().id, "a");
        assert_eq!(TraversalEngine::next_bfs(&tree, "a").unwrap().unwrap().id, "b");
        // b is the last node of its level; the walk continues on the next level
        assert_eq!(TraversalEngine::next_bfs(&tree, "b").unwrap().unwrap().id, "a1");
        assert_eq!(TraversalEngine::next_bfs(&tree, "a2").unwrap().unwrap().id, "b1");
        assert!(TraversalEngine::next_bfs(&tree, "b1").unwrap().is_none());
    }

    #[test]
    fn test_next_bfs_unknown_id_is_none() {
        let tree = sample_tree();
        assert!(TraversalEngine::next_bfs(&tree, "ghost").unwrap().is_none());
        assert!(TraversalEngine::next_bfs(&Tree::new(), "root").unwrap().is_none());
    }

    #[test]
    fn test_traverse_dfs_from_root() {
        let tree = sample_tree();
        let order = ids(TraversalEngine::traverse_dfs(&tree, "root").unwrap());
        assert_eq!(order, vec!["root", "a", "a1", "a2", "b", "b1"]);
    }

    #[test]
    fn test_traverse_bfs_from_root() {
        let tree = sample_tree();
        let order = ids(TraversalEngine::traverse_bfs(&tree, "root").unwrap());
        assert_eq!(order, vec!["root", "a", "b", "a1", "a2", "b1"]);
    }

    #[test]
    fn test_traverse_dfs_continues_past_subtree() {
        let tree = sample_tree();
        // DFS from a backtracks out of a's subtree and reaches b's
        let order = ids(TraversalEngine::traverse_dfs(&tree, "a").unwrap());
        assert_eq!(order, vec!["a", "a1", "a2", "b", "b1"]);
    }

    #[test]
    fn test_traverse_bfs_is_subtree_bounded() {
        let tree = sample_tree();
        // BFS from a never leaves a's subtree
        let order = ids(TraversalEngine::traverse_bfs(&tree, "a").unwrap());
        assert_eq!(order, vec!["a", "a1", "a2"]);
    }

    #[test]
    fn test_traverse_missing_start_fails() {
        let tree = sample_tree();
        assert!(TraversalEngine::traverse_dfs(&tree, "ghost").is_err());
        assert!(TraversalEngine::traverse_bfs(&tree, "ghost").is_err());
    }

    #[test]
    fn test_dfs_and_bfs_agree_on_linear_chain() {
        let mut tree = Tree::new();
        tree.create_node("n0", "Level 0", None, None).unwrap();
        tree.create_node("n1", "Level 1", Some("n0"), None).unwrap();
        tree.create_node("n2", "Level 2", Some("n1"), None).unwrap();
        tree.create_node("n3", "Level 3", Some("n2"), None).unwrap();

        let dfs = ids(TraversalEngine::traverse_dfs(&tree, "n0").unwrap());
        let bfs = ids(TraversalEngine::traverse_bfs(&tree, "n0").unwrap());
        assert_eq!(dfs, bfs);
        assert_eq!(dfs, vec!["n0", "n1", "n2", "n3"]);
    }

    #[test]
    fn test_single_node_tree_has_no_neighbors() {
        let mut tree = Tree::new();
        tree.create_node("only", "Only node", None, None).unwrap();

        assert!(TraversalEngine::next_dfs(&tree, "only").unwrap().is_none());
        assert!(TraversalEngine::prev_dfs(&tree, "only").unwrap().is_none());
        assert!(TraversalEngine::next_bfs(&tree, "only").unwrap().is_none());
        assert_eq!(ids(TraversalEngine::traverse_dfs(&tree, "only").unwrap()), vec!["only"]);
        assert_eq!(ids(TraversalEngine::traverse_bfs(&tree, "only").unwrap()), vec!["only"]);
    }
}
