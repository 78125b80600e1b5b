//! HTTP handlers for node CRUD, zipper operations, and navigation

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use arbor_core::{limits, ContextBuilder, LinkBuilder, NewNode, Tree, Zipper};

use crate::error::ApiError;
use crate::models::{
    CollapseRequest, ExpandRequest, MoveRequest, NodeCreate, NodeResponse, NodeUpdate,
};
use crate::server::AppState;

/// Assemble the full response body for a node
fn node_response(tree: &Tree, id: &str) -> Result<NodeResponse, ApiError> {
    let node = tree.get_node(id)?;
    let context = ContextBuilder::build_context(tree, id)?;
    let links = LinkBuilder::build_links(tree, id)?;

    Ok(NodeResponse {
        id: node.id,
        parent_id: node.parent_id,
        description: node.description,
        metadata: node.metadata,
        is_leaf: node.is_leaf,
        created_at: node.created_at,
        updated_at: node.updated_at,
        context,
        links,
    })
}

/// GET / - service banner with entry links
pub async fn api_root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Arbor Tree API",
        "links": {
            "root": { "href": "/nodes/root", "title": "Get root node" },
            "health": { "href": "/health", "title": "Health check" }
        }
    }))
}

/// GET /health - liveness check
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "server": "arbor-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /nodes/root - fetch the root node, creating it on first access
pub async fn get_root(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NodeResponse>, ApiError> {
    let mut tree = state
        .tree
        .write()
        .map_err(|e| ApiError::internal(format!("Lock error: {}", e)))?;

    if tree.get_root().is_none() {
        tree.create_node("root", "Root", None, None)?;
        tracing::info!("Created root node on first access");
    }

    Ok(Json(node_response(&tree, "root")?))
}

/// GET /nodes/:node_id - fetch a single node with context and links
pub async fn get_node(
    State(state): State<Arc<AppState>>,
    Path(node_id): Path<String>,
) -> Result<Json<NodeResponse>, ApiError> {
    limits::validate_node_id(&node_id)?;

    let tree = state
        .tree
        .read()
        .map_err(|e| ApiError::internal(format!("Lock error: {}", e)))?;

    Ok(Json(node_response(&tree, &node_id)?))
}

/// GET /nodes/:node_id/children - list a node's children in insertion order
pub async fn get_children(
    State(state): State<Arc<AppState>>,
    Path(node_id): Path<String>,
) -> Result<Json<Vec<NodeResponse>>, ApiError> {
    limits::validate_node_id(&node_id)?;

    let tree = state
        .tree
        .read()
        .map_err(|e| ApiError::internal(format!("Lock error: {}", e)))?;

    let children = tree.get_children(&node_id)?;
    let mut responses = Vec::with_capacity(children.len());
    for child in &children {
        responses.push(node_response(&tree, &child.id)?);
    }

    Ok(Json(responses))
}

/// POST /nodes/:parent_id/children - create a child under the given parent
pub async fn create_child(
    State(state): State<Arc<AppState>>,
    Path(parent_id): Path<String>,
    Json(body): Json<NodeCreate>,
) -> Result<Response, ApiError> {
    limits::validate_node_id(&parent_id)?;
    limits::validate_node_id(&body.id)?;
    limits::validate_description(&body.description)?;

    let NodeCreate {
        id,
        description,
        metadata,
    } = body;

    let mut tree = state
        .tree
        .write()
        .map_err(|e| ApiError::internal(format!("Lock error: {}", e)))?;

    tree.create_node(id.as_str(), description, Some(&parent_id), Some(metadata))?;

    let location = format!("/nodes/{}", id);
    let response = node_response(&tree, &id)?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    )
        .into_response())
}

/// PATCH /nodes/:node_id - update a node's description or metadata
pub async fn update_node(
    State(state): State<Arc<AppState>>,
    Path(node_id): Path<String>,
    Json(body): Json<NodeUpdate>,
) -> Result<Json<NodeResponse>, ApiError> {
    limits::validate_node_id(&node_id)?;
    if let Some(description) = &body.description {
        limits::validate_description(description)?;
    }

    let mut tree = state
        .tree
        .write()
        .map_err(|e| ApiError::internal(format!("Lock error: {}", e)))?;

    tree.update_node(&node_id, body.description.as_deref(), body.metadata)?;

    Ok(Json(node_response(&tree, &node_id)?))
}

/// DELETE /nodes/:node_id - delete a node and its entire subtree
pub async fn delete_node(
    State(state): State<Arc<AppState>>,
    Path(node_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    limits::validate_node_id(&node_id)?;

    let mut tree = state
        .tree
        .write()
        .map_err(|e| ApiError::internal(format!("Lock error: {}", e)))?;

    tree.delete_node(&node_id)?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /nodes/:node_id/expand - expand a leaf into a branch with children
pub async fn expand_node(
    State(state): State<Arc<AppState>>,
    Path(node_id): Path<String>,
    Json(body): Json<ExpandRequest>,
) -> Result<Json<NodeResponse>, ApiError> {
    limits::validate_node_id(&node_id)?;
    limits::validate_expansion(body.children.len())?;
    for child in &body.children {
        limits::validate_node_id(&child.id)?;
        limits::validate_description(&child.description)?;
    }

    let children: Vec<NewNode> = body
        .children
        .into_iter()
        .map(|c| NewNode::new(c.id, c.description).with_metadata(c.metadata))
        .collect();

    let mut tree = state
        .tree
        .write()
        .map_err(|e| ApiError::internal(format!("Lock error: {}", e)))?;

    Zipper::expand(&mut tree, &node_id, children)?;

    Ok(Json(node_response(&tree, &node_id)?))
}

/// POST /nodes/:node_id/collapse - collapse a branch into a leaf
pub async fn collapse_node(
    State(state): State<Arc<AppState>>,
    Path(node_id): Path<String>,
    Json(body): Json<CollapseRequest>,
) -> Result<Json<NodeResponse>, ApiError> {
    limits::validate_node_id(&node_id)?;
    if let Some(summary) = &body.summary {
        limits::validate_description(summary)?;
    }

    let mut tree = state
        .tree
        .write()
        .map_err(|e| ApiError::internal(format!("Lock error: {}", e)))?;

    Zipper::collapse(&mut tree, &node_id, body.summary.as_deref())?;

    Ok(Json(node_response(&tree, &node_id)?))
}

/// POST /nodes/:node_id/move - reattach a node under a new parent
pub async fn move_node(
    State(state): State<Arc<AppState>>,
    Path(node_id): Path<String>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<NodeResponse>, ApiError> {
    limits::validate_node_id(&node_id)?;
    limits::validate_node_id(&body.new_parent_id)?;

    let mut tree = state
        .tree
        .write()
        .map_err(|e| ApiError::internal(format!("Lock error: {}", e)))?;

    tree.move_node(&node_id, &body.new_parent_id)?;

    Ok(Json(node_response(&tree, &node_id)?))
}
