//! Node types for the tree structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A node in the tree
///
/// Nodes are value-semantic: the tree hands out fully-populated clones and
/// callers never hold a live alias into storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Opaque identifier, unique across the tree
    pub id: String,

    /// Parent id; `None` for exactly one node (the root)
    pub parent_id: Option<String>,

    /// Human-readable label
    pub description: String,

    /// Arbitrary metadata, opaque to the tree engine
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,

    /// Derived flag, true iff the node currently has zero children
    pub is_leaf: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp; advances on any field mutation, including
    /// is_leaf flips caused by child insert/delete
    pub updated_at: DateTime<Utc>,
}

impl Node {
    /// Create a new node (starts as a leaf)
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        parent_id: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            parent_id,
            description: description.into(),
            metadata: HashMap::new(),
            is_leaf: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the metadata map
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Data for creating a new node (used by create and expand)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNode {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl NewNode {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }
}
