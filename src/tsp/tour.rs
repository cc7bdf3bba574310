//! Permutation-based TSP solution.

use std::sync::Arc;

use rand::Rng;

use super::graph::{DistanceGraph, Tour};
use crate::error::{Error, Result};
use crate::solution::Solution;

/// How close a tour is to the spanning-tree lower bound, in percent:
/// `(mst_cost / fitness) * 100`.
///
/// `100` would mean the tour is as short as the spanning tree, which no
/// tour over two or more nodes can reach. The score
/// normalizes results across instances of different scale.
pub fn solution_quality(fitness: f64, mst_cost: f64) -> f64 {
    (mst_cost / fitness) * 100.0
}

/// A tour over a shared [`DistanceGraph`].
///
/// Fitness is the closed tour length; neighbors swap two distinct positions.
#[derive(Debug, Clone)]
pub struct TourSolution {
    tour: Tour,
    graph: Arc<DistanceGraph>,
}

impl TourSolution {
    /// Wraps a tour, checking that it visits every node exactly once.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTour`] if the tour is empty, has the wrong length,
    ///   or repeats a node.
    /// - [`Error::IndexOutOfRange`] if a node is outside the graph.
    pub fn new(tour: Tour, graph: Arc<DistanceGraph>) -> Result<Self> {
        validate_tour(&tour, graph.size())?;
        Ok(Self { tour, graph })
    }

    /// A uniformly random tour over `graph`.
    pub fn random<R: Rng + ?Sized>(graph: Arc<DistanceGraph>, rng: &mut R) -> Self {
        let tour = graph.random_tour_with(rng);
        Self { tour, graph }
    }

    /// The visiting order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// The graph this tour is measured on.
    pub fn graph(&self) -> &Arc<DistanceGraph> {
        &self.graph
    }

    /// Cost of the graph's minimum spanning tree.
    ///
    /// Recomputes the tree on every call; when scoring many tours over one
    /// graph, compute it once and use [`quality_with`](Self::quality_with).
    pub fn spanning_tree_cost(&self) -> Result<f64> {
        Ok(self.graph.spanning_tree()?.cost())
    }

    /// Quality of the current tour against the graph's spanning tree.
    pub fn quality(&self) -> Result<f64> {
        Ok(self.quality_with(self.spanning_tree_cost()?))
    }

    /// Quality of the current tour against a precomputed spanning-tree cost.
    pub fn quality_with(&self, mst_cost: f64) -> f64 {
        solution_quality(self.fitness(), mst_cost)
    }
}

fn validate_tour(tour: &[usize], size: usize) -> Result<()> {
    if tour.is_empty() {
        return Err(Error::InvalidTour("tour is empty".into()));
    }
    if tour.len() != size {
        return Err(Error::InvalidTour(format!(
            "tour visits {} nodes, graph has {size}",
            tour.len()
        )));
    }
    let mut seen = vec![false; size];
    for &node in tour {
        if node >= size {
            return Err(Error::IndexOutOfRange { index: node, size });
        }
        if seen[node] {
            return Err(Error::InvalidTour(format!("node {node} visited twice")));
        }
        seen[node] = true;
    }
    Ok(())
}

impl Solution for TourSolution {
    type Representation = Tour;
    type Fitness = f64;

    fn representation(&self) -> &Tour {
        &self.tour
    }

    /// Installs a new visiting order without re-validating it.
    ///
    /// Strategies only pass tours derived from [`propose_change`], which are
    /// permutations by construction. Use [`TourSolution::new`] for untrusted
    /// input.
    ///
    /// # Panics
    ///
    /// Debug builds panic here if `tour` is not a permutation of the graph's
    /// nodes. In release builds the next [`fitness`](Solution::fitness) or
    /// [`fitness_of`](Solution::fitness_of) call panics on an empty tour or
    /// an out-of-range node.
    ///
    /// [`propose_change`]: Solution::propose_change
    fn set_representation(&mut self, tour: Tour) {
        debug_assert!(validate_tour(&tour, self.graph.size()).is_ok());
        self.tour = tour;
    }

    fn fitness_of(&self, tour: &Tour) -> f64 {
        self.graph.cycle_length(tour)
    }

    fn fitness_delta(&self, a: &Tour, b: &Tour) -> f64 {
        (self.fitness_of(a) - self.fitness_of(b)).abs()
    }

    /// Swaps two distinct, uniformly drawn positions in a copy of the tour.
    ///
    /// A tour of fewer than two nodes has no neighbor; an unchanged copy is
    /// returned.
    fn propose_change<R: Rng + ?Sized>(&self, rng: &mut R) -> Tour {
        let mut candidate = self.tour.clone();
        let n = candidate.len();
        if n < 2 {
            return candidate;
        }
        let (mut i, mut j) = (0, 0);
        while i == j {
            i = rng.random_range(0..n);
            j = rng.random_range(0..n);
        }
        candidate.swap(i, j);
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tsp::fixtures::{four_city, is_permutation};
    use std::cmp::Ordering;

    fn graph() -> Arc<DistanceGraph> {
        Arc::new(DistanceGraph::new(four_city()).unwrap())
    }

    #[test]
    fn test_fitness_is_tour_length() {
        let s = TourSolution::new(vec![0, 1, 2, 3], graph()).unwrap();
        assert!((s.fitness() - 19837.0).abs() < 0.1);
        assert!((s.fitness_of(&vec![0, 2, 1, 3]) - 13164.0).abs() < 0.1);
        assert_eq!(s.fitness(), s.fitness_of(s.representation()));
    }

    #[test]
    fn test_new_rejects_bad_tours() {
        let g = graph();
        assert!(matches!(
            TourSolution::new(vec![], g.clone()),
            Err(Error::InvalidTour(_))
        ));
        assert!(matches!(
            TourSolution::new(vec![0, 1, 2], g.clone()),
            Err(Error::InvalidTour(_))
        ));
        assert!(matches!(
            TourSolution::new(vec![0, 1, 1, 3], g.clone()),
            Err(Error::InvalidTour(_))
        ));
        assert_eq!(
            TourSolution::new(vec![0, 1, 2, 4], g).unwrap_err(),
            Error::IndexOutOfRange { index: 4, size: 4 }
        );
    }

    #[test]
    fn test_rank_sign_convention() {
        let s = TourSolution::new(vec![0, 2, 1, 3], graph()).unwrap();
        // Longer candidate ranks Greater.
        assert_eq!(s.rank(&vec![0, 1, 2, 3]), Ordering::Greater);
        assert_eq!(s.rank(&vec![2, 1, 3, 0]), Ordering::Equal);

        let worse = TourSolution::new(vec![0, 1, 2, 3], graph()).unwrap();
        assert_eq!(worse.rank(&vec![0, 2, 1, 3]), Ordering::Less);
    }

    #[test]
    fn test_fitness_delta_is_absolute() {
        let s = TourSolution::new(vec![0, 1, 2, 3], graph()).unwrap();
        let a = vec![0, 1, 2, 3];
        let b = vec![0, 2, 1, 3];
        assert!((s.fitness_delta(&a, &b) - 6673.0).abs() < 0.1);
        assert_eq!(s.fitness_delta(&a, &b), s.fitness_delta(&b, &a));
    }

    #[test]
    fn test_propose_change_swaps_two_distinct_positions() {
        let s = TourSolution::new(vec![0, 1, 2, 3], graph()).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..200 {
            let candidate = s.propose_change(&mut rng);
            let differing = candidate
                .iter()
                .zip(s.tour())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2, "{candidate:?}");
            assert!(is_permutation(&candidate, 4));
        }
        assert_eq!(s.tour(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_propose_change_reaches_last_position() {
        let s = TourSolution::new(vec![0, 1, 2, 3], graph()).unwrap();
        let mut rng = create_rng(3);
        let moved_last = (0..200).any(|_| s.propose_change(&mut rng)[3] != 3);
        assert!(moved_last);
    }

    #[test]
    fn test_propose_change_two_and_one_node() {
        let two = Arc::new(DistanceGraph::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap());
        let s = TourSolution::new(vec![0, 1], two).unwrap();
        assert_eq!(s.propose_change(&mut create_rng(1)), vec![1, 0]);

        let one = Arc::new(DistanceGraph::new(vec![vec![0.0]]).unwrap());
        let s = TourSolution::new(vec![0], one).unwrap();
        assert_eq!(s.propose_change(&mut create_rng(1)), vec![0]);
    }

    #[test]
    fn test_quality() {
        assert_eq!(solution_quality(200.0, 100.0), 50.0);

        let s = TourSolution::new(vec![0, 2, 1, 3], graph()).unwrap();
        let mst = s.spanning_tree_cost().unwrap();
        assert!((mst - 6802.0).abs() < 1e-9);
        let expected = 6802.0 / 13164.0 * 100.0;
        assert!((s.quality().unwrap() - expected).abs() < 1e-9);
        assert!((s.quality_with(mst) - expected).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn test_set_representation_requires_permutation() {
        let mut s = TourSolution::new(vec![0, 1, 2, 3], graph()).unwrap();
        s.set_representation(vec![]);
        s.fitness();
    }

    #[test]
    fn test_two_node_quality_is_half() {
        let two = Arc::new(DistanceGraph::new(vec![vec![0.0, 7.0], vec![7.0, 0.0]]).unwrap());
        let s = TourSolution::new(vec![0, 1], two).unwrap();
        assert_eq!(s.fitness(), 14.0);
        assert_eq!(s.quality().unwrap(), 50.0);
    }

    #[test]
    fn test_random_is_valid() {
        let g = graph();
        let s = TourSolution::random(g.clone(), &mut create_rng(5));
        assert!(TourSolution::new(s.tour().to_vec(), g).is_ok());
    }
}
