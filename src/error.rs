//! Error types for graph operations.
//!
//! The original adjacency structure this crate grew out of reported missing
//! vertices through unchecked map lookups. Every operation that resolves an
//! external vertex id now returns a named failure instead.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors produced by graph operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The referenced vertex id is not registered in the graph.
    #[error("vertex {0} is not present in the graph")]
    VertexNotFound(VertexId),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, GraphError>;
