//! Arbor Server - REST API for zipper-style tree navigation
//!
//! Exposes the Arbor tree engine over HTTP with HATEOAS links: every node
//! response carries the set of legal moves from that position.

pub mod error;
pub mod handlers;
pub mod models;
pub mod server;

pub use error::ApiError;
pub use models::{
    CollapseRequest, ExpandRequest, MoveRequest, NodeCreate, NodeResponse, NodeUpdate,
};
pub use server::{create_router, run_server, AppState};
