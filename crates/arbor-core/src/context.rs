//! Positional context: depth, sibling position, breadcrumb trail

use crate::error::Result;
use crate::node::Node;
use crate::tree::Tree;
use serde::{Deserialize, Serialize};

/// One ancestor on the path from the root to a node's parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub id: String,
    pub description: String,
}

/// A node's position within the tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    /// Distance from the root (the root has depth 0)
    pub depth: usize,

    /// Zero-based index of the node within its sibling list
    pub sibling_position: usize,

    /// Sibling count including the node itself (always at least 1)
    pub total_siblings: usize,

    /// Whether the node currently has children
    pub has_children: bool,

    /// Number of direct children
    pub children_count: usize,

    /// Ancestors ordered root-first, excluding the node itself;
    /// length always equals `depth`
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Computes positional context for nodes
pub struct ContextBuilder;

impl ContextBuilder {
    /// Build the context for a node
    pub fn build_context(tree: &Tree, id: &str) -> Result<Context> {
        let node = tree.get_node(id)?;
        let breadcrumbs = Self::breadcrumbs(tree, &node)?;
        let siblings = tree.get_siblings(id)?;
        let children = tree.get_children(id)?;

        let sibling_position = siblings.iter().position(|s| s.id == id).unwrap_or(0);

        Ok(Context {
            depth: breadcrumbs.len(),
            sibling_position,
            total_siblings: siblings.len(),
            has_children: !node.is_leaf,
            children_count: children.len(),
            breadcrumbs,
        })
    }

    /// Walk up to the root collecting the breadcrumb trail
    fn breadcrumbs(tree: &Tree, node: &Node) -> Result<Vec<Breadcrumb>> {
        let mut breadcrumbs = Vec::new();
        let mut current_id = node.parent_id.clone();

        while let Some(ancestor_id) = current_id {
            let ancestor = tree.get_node(&ancestor_id)?;
            breadcrumbs.push(Breadcrumb {
                id: ancestor.id,
                description: ancestor.description,
            });
            current_id = ancestor.parent_id;
        }

        breadcrumbs.reverse();
        Ok(breadcrumbs)
    }
}
