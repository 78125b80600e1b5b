//! Arbor Core - Tree engine for zipper navigation
//!
//! This crate provides the core data types and operations for the Arbor
//! hierarchical tree system: node CRUD, zipper movement, expand/collapse,
//! DFS/BFS traversal, and context/link derivation.

pub mod context;
pub mod error;
pub mod limits;
pub mod links;
pub mod node;
pub mod traversal;
pub mod tree;
pub mod zipper;

pub use context::{Breadcrumb, Context, ContextBuilder};
pub use error::{Error, Result};
pub use limits::{ValidationError, MAX_DESCRIPTION_LEN, MAX_NODE_ID_LEN};
pub use links::{Link, LinkBuilder};
pub use node::{NewNode, Node};
pub use traversal::{BfsIter, DfsIter, TraversalEngine};
pub use tree::Tree;
pub use zipper::Zipper;
