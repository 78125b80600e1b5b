//! Request and response bodies for the HTTP API

use std::collections::{BTreeMap, HashMap};

use arbor_core::{Context, Link};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full node representation with navigation context and HATEOAS links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeResponse {
    pub id: String,
    pub parent_id: Option<String>,
    pub description: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    pub is_leaf: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub context: Context,
    pub links: BTreeMap<String, Link>,
}

/// Request body for creating a child node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeCreate {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Request body for a partial node update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeUpdate {
    pub description: Option<String>,
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

/// Request body for expanding a leaf into a branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandRequest {
    pub children: Vec<NodeCreate>,
}

/// Request body for collapsing a branch into a leaf
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollapseRequest {
    pub summary: Option<String>,
}

/// Request body for moving a node under a new parent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub new_parent_id: String,
}
