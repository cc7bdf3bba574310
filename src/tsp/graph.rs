//! Symmetric distance graph.

use rand::Rng;

use super::mst::SpanningTree;
use crate::error::{Error, Result};

/// A tour: the visiting order of every node, closed back to the start.
pub type Tour = Vec<usize>;

/// Checks that a matrix is non-empty and square.
pub(crate) fn validate_matrix(matrix: &[Vec<f64>]) -> Result<()> {
    if matrix.is_empty() {
        return Err(Error::InvalidGraph("distance matrix is empty".into()));
    }
    let n = matrix.len();
    if let Some((row, len)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != n)
    {
        return Err(Error::InvalidGraph(format!(
            "distance matrix must be square: row {row} has {len} entries, expected {n}"
        )));
    }
    Ok(())
}

/// An immutable square distance matrix over `N` nodes.
///
/// Shared read-only by every [`TourSolution`](super::TourSolution) derived
/// from it, typically behind an `Arc`.
///
/// With the `serde` feature the graph (de)serializes as its bare matrix, and
/// deserializing runs the same validation as [`DistanceGraph::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct DistanceGraph {
    matrix: Vec<Vec<f64>>,
}

impl DistanceGraph {
    /// Builds a graph from a square distance matrix.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGraph`] if the matrix is empty or any row length
    /// differs from the number of rows.
    pub fn new(matrix: Vec<Vec<f64>>) -> Result<Self> {
        validate_matrix(&matrix)?;
        tracing::trace!(nodes = matrix.len(), "distance graph built");
        Ok(Self { matrix })
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.matrix.len()
    }

    /// The underlying distance matrix.
    pub fn matrix(&self) -> &[Vec<f64>] {
        &self.matrix
    }

    /// Distance from node `a` to node `b`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if either index is `>= size()`.
    pub fn distance(&self, a: usize, b: usize) -> Result<f64> {
        let size = self.size();
        for index in [a, b] {
            if index >= size {
                return Err(Error::IndexOutOfRange { index, size });
            }
        }
        Ok(self.matrix[a][b])
    }

    /// Total length of the closed cycle visiting `tour` in order.
    ///
    /// Sums consecutive legs and the closing leg from the last node back to
    /// the first. A single-node tour measures its self-distance.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidTour`] for an empty tour, [`Error::IndexOutOfRange`]
    /// for a node outside the graph.
    pub fn tour_length(&self, tour: &[usize]) -> Result<f64> {
        let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
            return Err(Error::InvalidTour("tour is empty".into()));
        };
        let mut total = 0.0;
        for leg in tour.windows(2) {
            total += self.distance(leg[0], leg[1])?;
        }
        total += self.distance(last, first)?;
        Ok(total)
    }

    /// [`tour_length`](Self::tour_length) for a tour already known to be
    /// valid for this graph.
    ///
    /// # Panics
    ///
    /// Panics if the tour is empty or holds an index `>= size()`.
    pub(crate) fn cycle_length(&self, tour: &[usize]) -> f64 {
        let closing = self.matrix[tour[tour.len() - 1]][tour[0]];
        tour.windows(2)
            .map(|leg| self.matrix[leg[0]][leg[1]])
            .sum::<f64>()
            + closing
    }

    /// A uniformly random permutation of all nodes, drawn from the
    /// thread-local generator.
    pub fn random_tour(&self) -> Tour {
        self.random_tour_with(&mut rand::rng())
    }

    /// A uniformly random permutation of all nodes.
    ///
    /// Repeatedly picks a uniformly random remaining node, removes it and
    /// appends it, so every permutation is equally likely.
    pub fn random_tour_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Tour {
        let mut remaining: Vec<usize> = (0..self.size()).collect();
        let mut tour = Vec::with_capacity(remaining.len());
        while !remaining.is_empty() {
            let pick = rng.random_range(0..remaining.len());
            tour.push(remaining.swap_remove(pick));
        }
        tour
    }

    /// Minimum spanning tree of this graph.
    ///
    /// # Errors
    ///
    /// [`Error::DisconnectedGraph`] if the non-zero edges do not connect
    /// every node.
    pub fn spanning_tree(&self) -> Result<SpanningTree> {
        SpanningTree::compute(&self.matrix)
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceGraph {
    type Error = Error;

    fn try_from(matrix: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(matrix)
    }
}

impl From<DistanceGraph> for Vec<Vec<f64>> {
    fn from(graph: DistanceGraph) -> Self {
        graph.matrix
    }
}
