//! Error types shared by the graph model and the search strategies.

use std::fmt::{self, Display};

/// Errors raised at the crate boundary.
///
/// All variants are validation failures. Nothing is retried internally;
/// the caller decides whether to abort or skip the offending input.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The distance matrix is empty or not square.
    InvalidGraph(String),

    /// A node index is outside the distance matrix.
    IndexOutOfRange {
        /// The offending node index.
        index: usize,
        /// Number of nodes in the graph.
        size: usize,
    },

    /// A tour is empty or not a permutation of the graph's nodes.
    InvalidTour(String),

    /// Spanning tree growth ran out of frontier edges before reaching every node.
    DisconnectedGraph {
        /// Nodes connected when growth stopped.
        reached: usize,
        /// Number of nodes in the graph.
        size: usize,
    },

    /// A strategy configuration failed validation.
    InvalidConfig(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGraph(reason) => write!(f, "invalid distance graph: {reason}"),
            Error::IndexOutOfRange { index, size } => {
                write!(f, "node index {index} out of range for graph of {size} nodes")
            }
            Error::InvalidTour(reason) => write!(f, "invalid tour: {reason}"),
            Error::DisconnectedGraph { reached, size } => write!(
                f,
                "graph is disconnected: spanning tree reached {reached} of {size} nodes"
            ),
            Error::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
