//! Navigation link computation

use crate::error::Result;
use crate::traversal::TraversalEngine;
use crate::tree::Tree;
use crate::zipper::Zipper;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A navigation link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub title: String,
}

impl Link {
    pub fn new(href: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: title.into(),
        }
    }
}

/// Aggregates tree, zipper and traversal outputs into a named link set
pub struct LinkBuilder;

impl LinkBuilder {
    /// Compute every valid navigation link from a node
    ///
    /// `self` and `root` are always present. `up`/`down`/`left`/`right`
    /// and `next-dfs`/`prev-dfs`/`next-bfs` appear only when the
    /// corresponding neighbor exists; `children` only when the node is a
    /// branch. The map is keyed by relation name with deterministic order.
    pub fn build_links(tree: &Tree, id: &str) -> Result<BTreeMap<String, Link>> {
        let node = tree.get_node(id)?;
        let mut links = BTreeMap::new();

        links.insert("self".to_string(), Link::new(id, node.description.clone()));

        if let Some(root) = tree.get_root() {
            links.insert("root".to_string(), Link::new(root.id, root.description));
        }

        if let Some(parent) = Zipper::up(tree, id)? {
            links.insert("up".to_string(), Link::new(parent.id, parent.description));
        }

        if let Some(first_child) = Zipper::down(tree, id)? {
            links.insert(
                "down".to_string(),
                Link::new(first_child.id, first_child.description),
            );
        }

        if let Some(left) = Zipper::left(tree, id)? {
            links.insert("left".to_string(), Link::new(left.id, left.description));
        }

        if let Some(right) = Zipper::right(tree, id)? {
            links.insert("right".to_string(), Link::new(right.id, right.description));
        }

        if let Some(next) = TraversalEngine::next_dfs(tree, id)? {
            links.insert("next-dfs".to_string(), Link::new(next.id, next.description));
        }

        if let Some(prev) = TraversalEngine::prev_dfs(tree, id)? {
            links.insert("prev-dfs".to_string(), Link::new(prev.id, prev.description));
        }

        if let Some(next) = TraversalEngine::next_bfs(tree, id)? {
            links.insert("next-bfs".to_string(), Link::new(next.id, next.description));
        }

        if !node.is_leaf {
            links.insert(
                "children".to_string(),
                Link::new(
                    format!("{}/children", id),
                    format!("Children of {}", node.description),
                ),
            );
        }

        Ok(links)
    }
}
