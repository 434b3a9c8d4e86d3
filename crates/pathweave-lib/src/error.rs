use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the pathweave library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Only contract violations and input problems are errors. A missing path is
/// reported as an infinite distance, and a negative cycle is reported through
/// the `ok` flag of the engines that can detect one.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when Dijkstra or A* reach an edge with a negative weight.
    #[error("negative edge weight {weight} on {from} -> {to}; use Bellman-Ford or Johnson instead")]
    NegativeWeight { from: NodeId, to: NodeId, weight: f64 },

    /// Raised when a caller names a node that the graph does not contain.
    #[error("unknown node: {id}")]
    UnknownNode { id: NodeId },

    /// Raised when an edge weight is NaN.
    #[error("edge {from} -> {to} has a NaN weight")]
    InvalidWeight { from: NodeId, to: NodeId },

    /// Raised when a graph description lists the same node twice.
    #[error("duplicate node {id} in graph description")]
    DuplicateNode { id: NodeId },

    /// Raised when a graph description file could not be read.
    #[error("failed to read graph description from {path}")]
    GraphRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
