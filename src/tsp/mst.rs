//! Minimum spanning tree by Prim's algorithm.
//!
//! The tree's total weight is a cheap lower bound on any tour over the same
//! graph and is used to normalize tour lengths into a solution-quality
//! percentage. It is computed once per graph, never inside a search loop.
//!
//! Growth scans the sorted edge list for the first frontier edge on every
//! step (O(E·V)) rather than keeping a priority queue. Ties between equal
//! weights resolve in matrix order, so the result is deterministic.
//!
//! # References
//!
//! - Prim, R. C. (1957), "Shortest connection networks and some
//!   generalizations", *Bell System Technical Journal* 36(6).

use super::graph::validate_matrix;
use crate::error::{Error, Result};

/// A weighted edge between two nodes, used only while building the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEdge {
    /// Row index in the distance matrix.
    pub row: usize,
    /// Column index in the distance matrix.
    pub col: usize,
    /// Edge weight.
    pub weight: f64,
}

/// A minimum spanning tree as a symmetric adjacency matrix plus its cost.
///
/// Only [`compute`](Self::compute) builds one, so the cost always matches
/// the adjacency matrix. With the `serde` feature it serializes but does not
/// deserialize.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpanningTree {
    adjacency: Vec<Vec<f64>>,
    cost: f64,
}

impl SpanningTree {
    /// Builds the minimum spanning tree of a distance matrix.
    ///
    /// Zero-weight entries are not edges. A matrix with no non-zero entries
    /// yields an all-zero tree of cost `0`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidGraph`] if the matrix is empty or not square.
    /// - [`Error::DisconnectedGraph`] if the non-zero edges do not reach
    ///   every node.
    pub fn compute(matrix: &[Vec<f64>]) -> Result<Self> {
        validate_matrix(matrix)?;
        let n = matrix.len();
        let mut adjacency = vec![vec![0.0; n]; n];

        let edges = sorted_edges(matrix);
        let Some(first) = edges.first() else {
            tracing::debug!(nodes = n, "no non-zero edges, spanning tree is empty");
            return Ok(Self { adjacency, cost: 0.0 });
        };

        let mut in_tree = vec![false; n];
        in_tree[first.row] = true;
        let mut reached = 1;

        while reached < n {
            let edge = frontier_edge(&edges, &in_tree).ok_or(Error::DisconnectedGraph {
                reached,
                size: n,
            })?;
            for node in [edge.row, edge.col] {
                if !in_tree[node] {
                    in_tree[node] = true;
                    reached += 1;
                }
            }
            adjacency[edge.row][edge.col] = edge.weight;
            adjacency[edge.col][edge.row] = edge.weight;
        }

        let cost = Self::cost_of(&adjacency);
        tracing::debug!(nodes = n, edges = edges.len(), cost, "spanning tree built");
        Ok(Self { adjacency, cost })
    }

    /// Total weight of a symmetric adjacency matrix: the sum of all entries
    /// halved, since every edge appears twice.
    pub fn cost_of(adjacency: &[Vec<f64>]) -> f64 {
        adjacency.iter().map(|row| row.iter().sum::<f64>()).sum::<f64>() / 2.0
    }

    /// Symmetric adjacency matrix of the tree; non-tree entries are `0`.
    pub fn adjacency(&self) -> &[Vec<f64>] {
        &self.adjacency
    }

    /// Total weight of the tree.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Splits into the adjacency matrix and the cost.
    pub fn into_parts(self) -> (Vec<Vec<f64>>, f64) {
        (self.adjacency, self.cost)
    }
}

/// Every non-zero entry as an edge, stably sorted by ascending weight.
fn sorted_edges(matrix: &[Vec<f64>]) -> Vec<GraphEdge> {
    let mut edges: Vec<GraphEdge> = matrix
        .iter()
        .enumerate()
        .flat_map(|(row, weights)| {
            weights
                .iter()
                .enumerate()
                .filter(|&(_, &w)| w != 0.0)
                .map(move |(col, &weight)| GraphEdge { row, col, weight })
        })
        .collect();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    edges
}

/// First edge, in sorted order, with exactly one endpoint in the tree.
fn frontier_edge(edges: &[GraphEdge], in_tree: &[bool]) -> Option<GraphEdge> {
    edges
        .iter()
        .find(|e| in_tree[e.row] != in_tree[e.col])
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tsp::fixtures::four_city;
    use crate::tsp::DistanceGraph;
    use proptest::prelude::*;

    #[test]
    fn test_four_city_tree() {
        let tree = SpanningTree::compute(&four_city()).unwrap();
        // 0-2 (1204), 1-3 (2011), 1-2 (3587)
        assert!((tree.cost() - 6802.0).abs() < 1e-9);
        let adj = tree.adjacency();
        assert_eq!(adj[0][2], 1204.0);
        assert_eq!(adj[2][0], 1204.0);
        assert_eq!(adj[1][3], 2011.0);
        assert_eq!(adj[1][2], 3587.0);
        assert_eq!(adj[0][1], 0.0);
        assert_eq!(adj[0][3], 0.0);
    }

    #[test]
    fn test_cost_of_halves_symmetric_sum() {
        let adj = vec![
            vec![0.0, 2.0, 0.0],
            vec![2.0, 0.0, 3.0],
            vec![0.0, 3.0, 0.0],
        ];
        assert_eq!(SpanningTree::cost_of(&adj), 5.0);
    }

    #[test]
    fn test_into_parts() {
        let (adj, cost) = SpanningTree::compute(&four_city()).unwrap().into_parts();
        assert_eq!(SpanningTree::cost_of(&adj), cost);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        assert!(matches!(
            SpanningTree::compute(&[]),
            Err(Error::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_non_square_rejected() {
        let ragged = vec![vec![0.0, 1.0], vec![1.0, 0.0, 2.0]];
        assert!(matches!(
            SpanningTree::compute(&ragged),
            Err(Error::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_all_zero_matrix_is_degenerate() {
        let tree = SpanningTree::compute(&vec![vec![0.0; 3]; 3]).unwrap();
        assert_eq!(tree.cost(), 0.0);
        assert!(tree.adjacency().iter().flatten().all(|&w| w == 0.0));
    }

    #[test]
    fn test_single_node() {
        let tree = SpanningTree::compute(&[vec![0.0]]).unwrap();
        assert_eq!(tree.cost(), 0.0);
    }

    #[test]
    fn test_disconnected_graph_is_error() {
        // Node 2 has no non-zero edge.
        let matrix = vec![
            vec![0.0, 5.0, 0.0],
            vec![5.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ];
        assert_eq!(
            SpanningTree::compute(&matrix),
            Err(Error::DisconnectedGraph {
                reached: 2,
                size: 3
            })
        );
    }

    #[test]
    fn test_ties_resolve_in_matrix_order() {
        let matrix = vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ];
        let tree = SpanningTree::compute(&matrix).unwrap();
        // Start at 0, take (0,1) then (0,2).
        assert_eq!(tree.adjacency()[0][1], 1.0);
        assert_eq!(tree.adjacency()[0][2], 1.0);
        assert_eq!(tree.adjacency()[1][2], 0.0);
        assert_eq!(tree.cost(), 2.0);
    }

    #[test]
    fn test_graph_spanning_tree_shortcut() {
        let graph = DistanceGraph::new(four_city()).unwrap();
        assert_eq!(
            graph.spanning_tree().unwrap(),
            SpanningTree::compute(&four_city()).unwrap()
        );
    }

    fn metric_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (2usize..9).prop_flat_map(|n| {
            prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), n).prop_map(|points| {
                points
                    .iter()
                    .map(|&(x1, y1)| {
                        points
                            .iter()
                            .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                            .collect()
                    })
                    .collect()
            })
        })
    }

    fn positive_symmetric_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (2usize..9).prop_flat_map(|n| {
            prop::collection::vec(1.0f64..500.0, n * n).prop_map(move |values| {
                let mut m = vec![vec![0.0; n]; n];
                for i in 0..n {
                    for j in (i + 1)..n {
                        m[i][j] = values[i * n + j];
                        m[j][i] = values[i * n + j];
                    }
                }
                m
            })
        })
    }

    proptest! {
        #[test]
        fn prop_tree_cost_bounds_any_tour(
            matrix in positive_symmetric_matrix(),
            seed in any::<u64>(),
        ) {
            let graph = DistanceGraph::new(matrix).unwrap();
            let cost = graph.spanning_tree().unwrap().cost();
            let mut rng = create_rng(seed);
            for _ in 0..10 {
                let tour = graph.random_tour_with(&mut rng);
                let length = graph.tour_length(&tour).unwrap();
                prop_assert!(cost <= length + 1e-9, "mst {} > tour {}", cost, length);
            }
        }

        #[test]
        fn prop_tree_has_n_minus_one_edges(matrix in positive_symmetric_matrix()) {
            let n = matrix.len();
            let tree = SpanningTree::compute(&matrix).unwrap();
            let edges = tree
                .adjacency()
                .iter()
                .flatten()
                .filter(|&&w| w != 0.0)
                .count();
            prop_assert_eq!(edges, 2 * (n - 1));
        }

        #[test]
        fn prop_euclidean_tree_bounds_tour(matrix in metric_matrix(), seed in any::<u64>()) {
            // Coincident points give zero distances; skip those instances.
            let connected = SpanningTree::compute(&matrix);
            prop_assume!(connected.is_ok());
            let cost = connected.unwrap().cost();
            let graph = DistanceGraph::new(matrix).unwrap();
            let tour = graph.random_tour_with(&mut create_rng(seed));
            prop_assert!(cost <= graph.tour_length(&tour).unwrap() + 1e-9);
        }
    }
}
