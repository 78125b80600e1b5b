//! Zipper-style navigation and zoom operations

use crate::error::{Error, Result};
use crate::node::{NewNode, Node};
use crate::tree::Tree;

/// Directional navigation and zoom operations over a tree
///
/// Navigation never fails for a missing direction: `up`/`down`/`left`/
/// `right` return `Ok(None)` at an edge and reserve errors for an absent
/// focus id. The zoom operations (`expand`/`collapse`) are the only ones
/// that mutate.
pub struct Zipper;

impl Zipper {
    /// Navigate up to the parent, or `None` at the root
    pub fn up(tree: &Tree, id: &str) -> Result<Option<Node>> {
        tree.get_parent(id)
    }

    /// Navigate down to the first child in insertion order, or `None` at a leaf
    pub fn down(tree: &Tree, id: &str) -> Result<Option<Node>> {
        let children = tree.get_children(id)?;
        Ok(children.into_iter().next())
    }

    /// Navigate left to the previous sibling, or `None` at the first child
    /// or the root
    pub fn left(tree: &Tree, id: &str) -> Result<Option<Node>> {
        let node = tree.get_node(id)?;
        if node.parent_id.is_none() {
            return Ok(None);
        }

        let siblings = tree.get_siblings(id)?;
        let position = siblings.iter().position(|s| s.id == id);

        match position {
            Some(index) if index > 0 => Ok(Some(siblings[index - 1].clone())),
            _ => Ok(None),
        }
    }

    /// Navigate right to the next sibling, or `None` at the last child
    /// or the root
    pub fn right(tree: &Tree, id: &str) -> Result<Option<Node>> {
        let node = tree.get_node(id)?;
        if node.parent_id.is_none() {
            return Ok(None);
        }

        let siblings = tree.get_siblings(id)?;
        let position = siblings.iter().position(|s| s.id == id);

        match position {
            Some(index) if index + 1 < siblings.len() => Ok(Some(siblings[index + 1].clone())),
            _ => Ok(None),
        }
    }

    /// Get the tree's root, or `None` for an empty tree
    pub fn root(tree: &Tree) -> Option<Node> {
        tree.get_root()
    }

    /// Expand a leaf node into a branch by creating the given children
    /// under it, in order
    ///
    /// An empty child list is allowed and leaves the node a leaf. Children
    /// are created one at a time; if one fails (duplicate id), the ones
    /// already created remain attached and the error propagates.
    pub fn expand(tree: &mut Tree, id: &str, children: Vec<NewNode>) -> Result<Node> {
        let node = tree.get_node(id)?;
        if !node.is_leaf {
            return Err(Error::InvalidOperation(format!(
                "Node {} is not a leaf, cannot expand",
                id
            )));
        }

        tracing::debug!("Expanding node {} with {} children", id, children.len());

        for child in children {
            tree.create_node(child.id, child.description, Some(id), Some(child.metadata))?;
        }

        tree.get_node(id)
    }

    /// Collapse a branch node into a leaf, deleting every descendant
    ///
    /// If `summary` is given it replaces the node's description.
    pub fn collapse(tree: &mut Tree, id: &str, summary: Option<&str>) -> Result<Node> {
        let node = tree.get_node(id)?;
        if node.is_leaf {
            return Err(Error::InvalidOperation(format!(
                "Node {} is already a leaf, cannot collapse",
                id
            )));
        }

        let children = tree.get_children(id)?;
        tracing::debug!("Collapsing node {} with {} children", id, children.len());

        for child in children {
            tree.delete_node(&child.id)?;
        }

        match summary {
            Some(summary) => tree.update_node(id, Some(summary), None),
            None => tree.get_node(id),
        }
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

    #[test]
    fn test_up() {
        let tree = sample_tree();
        assert_eq!(Zipper::up(&tree, "a1").unwrap().unwrap().id, "a");
        assert!(Zipper::up(&tree, "root").unwrap().is_none());
        assert!(Zipper::up(&tree, "ghost").is_err());
    }

    #[test]
    fn test_down_goes_to_first_child() {
        let tree = sample_tree();
        assert_eq!(Zipper::down(&tree, "root").unwrap().unwrap().id, "a");
        assert_eq!(Zipper::down(&tree, "a").unwrap().unwrap().id, "a1");
        assert!(Zipper::down(&tree, "b1").unwrap().is_none());
    }

    #[test]
    fn test_left_right_between_siblings() {
        let tree = sample_tree();

        assert!(Zipper::left(&tree, "a1").unwrap().is_none());
        assert_eq!(Zipper::right(&tree, "a1").unwrap().unwrap().id, "a2");
        assert_eq!(Zipper::left(&tree, "a2").unwrap().unwrap().id, "a1");
        assert!(Zipper::right(&tree, "a2").unwrap().is_none());
    }

    #[test]
    fn test_left_right_at_root() {
        let tree = sample_tree();
        assert!(Zipper::left(&tree, "root").unwrap().is_none());
        assert!(Zipper::right(&tree, "root").unwrap().is_none());
    }

    #[test]
    fn test_root() {
        let tree = sample_tree();
        assert_eq!(Zipper::root(&tree).unwrap().id, "root");
        assert!(Zipper::root(&Tree::new()).is_none());
    }

    #[test]
    fn test_expand_leaf() {
        let mut tree = sample_tree();

        let expanded = Zipper::expand(
            &mut tree,
            "b1",
            vec![NewNode::new("b1a", "B1 A"), NewNode::new("b1b", "B1 B")],
        )
        .unwrap();

        assert!(!expanded.is_leaf);
        let ids: Vec<String> = tree
            .get_children("b1")
            .unwrap()
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec!["b1a", "b1b"]);
        assert_eq!(tree.get_node("b1a").unwrap().parent_id.as_deref(), Some("b1"));
    }

    #[test]
    fn test_expand_with_empty_list_stays_leaf() {
        let mut tree = sample_tree();
        let node = Zipper::expand(&mut tree, "b1", vec![]).unwrap();
        assert!(node.is_leaf);
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn test_expand_branch_fails() {
        let mut tree = sample_tree();
        let err = Zipper::expand(&mut tree, "a", vec![NewNode::new("x", "X")]).unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(_)));
        assert!(tree.get_node("x").is_err());
    }

    #[test]
    fn test_expand_stops_at_duplicate_child() {
        let mut tree = sample_tree();

        // "a1" already exists elsewhere in the tree, so creation stops
        // there; earlier children remain attached.
        let err = Zipper::expand(
            &mut tree,
            "b1",
            vec![
                NewNode::new("x", "X"),
                NewNode::new("a1", "Duplicate"),
                NewNode::new("y", "Y"),
            ],
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidOperation(_)));
        assert_eq!(tree.get_node("x").unwrap().parent_id.as_deref(), Some("b1"));
        assert!(tree.get_node("y").is_err());
        assert!(!tree.get_node("b1").unwrap().is_leaf);
    }

    #[test]
    fn test_collapse_deletes_descendants() {
        let mut tree = sample_tree();

        let collapsed = Zipper::collapse(&mut tree, "a", None).unwrap();
        assert!(collapsed.is_leaf);
        assert_eq!(collapsed.description, "Node A");

        assert!(tree.get_node("a1").is_err());
        assert!(tree.get_node("a2").is_err());
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_collapse_with_summary_rewrites_description() {
        let mut tree = sample_tree();

        let collapsed = Zipper::collapse(&mut tree, "a", Some("Two children folded")).unwrap();
        assert!(collapsed.is_leaf);
        assert_eq!(collapsed.description, "Two children folded");
        assert_eq!(tree.get_node("a").unwrap().description, "Two children folded");
    }

    #[test]
    fn test_collapse_leaf_fails() {
        let mut tree = sample_tree();
        let err = Zipper::collapse(&mut tree, "b1", None).unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(_)));
    }

    #[test]
    fn test_collapse_deep_subtree() {
        let mut tree = sample_tree();
        tree.create_node("a1x", "Deep", Some("a1"), None).unwrap();
        tree.create_node("a1y", "Deeper", Some("a1x"), None).unwrap();

        Zipper::collapse(&mut tree, "a", None).unwrap();

        assert!(tree.get_node("a1x").is_err());
        assert!(tree.get_node("a1y").is_err());
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_expand_collapse_round_trip() {
        let mut tree = sample_tree();
        let count_before = tree.node_count();

        Zipper::expand(
            &mut tree,
            "b1",
            vec![NewNode::new("c1", "C1"), NewNode::new("c2", "C2")],
        )
        .unwrap();
        assert!(!tree.get_node("b1").unwrap().is_leaf);
        assert_eq!(tree.node_count(), count_before + 2);

        Zipper::collapse(&mut tree, "b1", None).unwrap();
        assert!(tree.get_node("b1").unwrap().is_leaf);
        assert_eq!(tree.node_count(), count_before);
    }
}
