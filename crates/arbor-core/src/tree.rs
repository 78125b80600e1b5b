//! In-memory tree storage and structural operations

use crate::error::{Error, Result};
use crate::node::Node;
use chrono::Utc;
use std::collections::HashMap;

/// In-memory tree of nodes
///
/// Owns every node record and the parent-to-children adjacency. All
/// operations hand out cloned snapshots; callers never receive a live
/// reference into storage. The tree performs no internal locking and
/// assumes exclusive access for the duration of each call.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: HashMap<String, Node>,
    children: HashMap<String, Vec<String>>,
    root_id: Option<String>,
}

impl Tree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new node
    ///
    /// The first node created without a parent becomes the root; only one
    /// such creation is permitted. Creating under a parent flips the parent
    /// to a branch and advances its `updated_at`. All validation runs
    /// before any mutation, so a failed create leaves the tree untouched.
    pub fn create_node(
        &mut self,
        id: impl Into<String>,
        description: impl Into<String>,
        parent_id: Option<&str>,
        metadata: Option<HashMap<String, serde_json::Value>>,
    ) -> Result<Node> {
        let id = id.into();

        if self.nodes.contains_key(&id) {
            return Err(Error::InvalidOperation(format!(
                "Node {} already exists",
                id
            )));
        }

        if let Some(parent_id) = parent_id {
            if !self.nodes.contains_key(parent_id) {
                return Err(Error::NotFound(parent_id.to_string()));
            }
        } else if self.root_id.is_some() {
            return Err(Error::InvalidOperation("Root node already exists".to_string()));
        }

        let mut node = Node::new(id.clone(), description, parent_id.map(String::from));
        if let Some(metadata) = metadata {
            node = node.with_metadata(metadata);
        }
        let now = node.created_at;

        self.nodes.insert(id.clone(), node.clone());
        self.children.insert(id.clone(), Vec::new());

        match parent_id {
            None => {
                tracing::debug!("Created root node {}", id);
                self.root_id = Some(id);
            }
            Some(parent_id) => {
                tracing::debug!("Created node {} under {}", id, parent_id);
                self.children
                    .entry(parent_id.to_string())
                    .or_default()
                    .push(id);
                if let Some(parent) = self.nodes.get_mut(parent_id) {
                    parent.is_leaf = false;
                    parent.updated_at = now;
                }
            }
        }

        Ok(node)
    }

    /// Get a node by id
    pub fn get_node(&self, id: &str) -> Result<Node> {
        self.nodes
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Update a node's description or metadata
    ///
    /// Partial update: only supplied fields change. `updated_at` always
    /// advances, even for an empty patch.
    pub fn update_node(
        &mut self,
        id: &str,
        description: Option<&str>,
        metadata: Option<HashMap<String, serde_json::Value>>,
    ) -> Result<Node> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        if let Some(description) = description {
            node.description = description.to_string();
        }
        if let Some(metadata) = metadata {
            node.metadata = metadata;
        }
        node.updated_at = Utc::now();

        Ok(node.clone())
    }

    /// Delete a node and all its descendants
    ///
    /// If the parent thereby becomes childless it flips back to a leaf.
    pub fn delete_node(&mut self, id: &str) -> Result<()> {
        let node = self.get_node(id)?;

        if self.root_id.as_deref() == Some(id) {
            return Err(Error::InvalidOperation("Cannot delete root node".to_string()));
        }

        // Collect the whole subtree before touching the maps
        let mut to_remove = Vec::new();
        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            if let Some(child_ids) = self.children.get(&current) {
                stack.extend(child_ids.iter().cloned());
            }
            to_remove.push(current);
        }

        tracing::debug!("Deleting {} node(s) rooted at {}", to_remove.len(), id);

        for node_id in &to_remove {
            self.nodes.remove(node_id);
            self.children.remove(node_id);
        }

        if let Some(parent_id) = node.parent_id {
            if let Some(siblings) = self.children.get_mut(&parent_id) {
                siblings.retain(|s| s != id);
                if siblings.is_empty() {
                    if let Some(parent) = self.nodes.get_mut(&parent_id) {
                        parent.is_leaf = true;
                        parent.updated_at = Utc::now();
                    }
                }
            }
        }

        Ok(())
    }

    /// Get all children of a node, in insertion order
    pub fn get_children(&self, id: &str) -> Result<Vec<Node>> {
        if !self.nodes.contains_key(id) {
            return Err(Error::NotFound(id.to_string()));
        }

        let child_ids = match self.children.get(id) {
            Some(ids) => ids.as_slice(),
            None => &[],
        };

        Ok(child_ids
            .iter()
            .filter_map(|child_id| self.nodes.get(child_id).cloned())
            .collect())
    }

    /// Get all siblings of a node, including itself
    ///
    /// The root is defined as its own sibling set of size one.
    pub fn get_siblings(&self, id: &str) -> Result<Vec<Node>> {
        let node = self.get_node(id)?;

        match node.parent_id.as_deref() {
            None => Ok(vec![node]),
            Some(parent_id) => self.get_children(parent_id),
        }
    }

    /// Get the parent of a node, or `None` for the root
    pub fn get_parent(&self, id: &str) -> Result<Option<Node>> {
        let node = self.get_node(id)?;
        Ok(node
            .parent_id
            .and_then(|parent_id| self.nodes.get(&parent_id).cloned()))
    }

    /// Move a node (and its whole subtree) under a new parent
    ///
    /// The cycle check walks the ancestor chain of `new_parent_id` before
    /// any mutation, so a rejected move leaves the tree untouched.
    pub fn move_node(&mut self, id: &str, new_parent_id: &str) -> Result<Node> {
        let node = self.get_node(id)?;

        if self.root_id.as_deref() == Some(id) {
            return Err(Error::InvalidOperation("Cannot move root node".to_string()));
        }

        if !self.nodes.contains_key(new_parent_id) {
            return Err(Error::NotFound(new_parent_id.to_string()));
        }

        if self.would_create_cycle(id, new_parent_id) {
            return Err(Error::CircularReference(format!(
                "Moving {} to {} would create a cycle",
                id, new_parent_id
            )));
        }

        tracing::debug!("Moving node {} under {}", id, new_parent_id);
        let now = Utc::now();

        // Detach from the old parent
        if let Some(old_parent_id) = node.parent_id.as_deref() {
            if let Some(siblings) = self.children.get_mut(old_parent_id) {
                siblings.retain(|s| s != id);
                if siblings.is_empty() {
                    if let Some(old_parent) = self.nodes.get_mut(old_parent_id) {
                        old_parent.is_leaf = true;
                        old_parent.updated_at = now;
                    }
                }
            }
        }

        // Attach to the new parent
        self.children
            .entry(new_parent_id.to_string())
            .or_default()
            .push(id.to_string());
        if let Some(new_parent) = self.nodes.get_mut(new_parent_id) {
            new_parent.is_leaf = false;
            new_parent.updated_at = now;
        }

        let moved = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        moved.parent_id = Some(new_parent_id.to_string());
        moved.updated_at = now;

        Ok(moved.clone())
    }

    /// Walk up from `new_parent_id`; a hit on `id` means the move would
    /// make `id` its own ancestor. O(depth), read-only.
    fn would_create_cycle(&self, id: &str, new_parent_id: &str) -> bool {
        let mut current = Some(new_parent_id.to_string());
        while let Some(current_id) = current {
            if current_id == id {
                return true;
            }
            current = self
                .nodes
                .get(&current_id)
                .and_then(|node| node.parent_id.clone());
        }
        false
    }

    /// Get the root node, or `None` for an empty tree
    pub fn get_root(&self) -> Option<Node> {
        self.root_id
            .as_ref()
            .and_then(|root_id| self.nodes.get(root_id).cloned())
    }

    /// Total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
