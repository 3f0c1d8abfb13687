//! Error types for the wgraph library.

use thiserror::Error;

/// All errors that can occur in the wgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// No node with the given name exists.
    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    /// Edge weight is negative or does not fit a `Weight`.
    #[error("Invalid edge weight: {0} (weights must be in 0..={max})", max = crate::types::Weight::MAX)]
    InvalidWeight(i64),

    /// Malformed line in an edge-list file.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for wgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
