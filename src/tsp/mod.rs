//! Travelling Salesman instantiation of the local-search core.
//!
//! - [`DistanceGraph`]: immutable symmetric distance matrix, tour lengths
//!   and random tours.
//! - [`SpanningTree`]: Prim's minimum spanning tree, the lower bound used to
//!   score solution quality.
//! - [`TourSolution`]: permutation representation implementing
//!   [`Solution`](crate::solution::Solution) with swap mutation.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use u_localsearch::tsp::{DistanceGraph, TourSolution};
//! use u_localsearch::solution::Solution;
//!
//! let graph = Arc::new(DistanceGraph::new(vec![
//!     vec![0.0, 4726.0, 1204.0, 6362.0],
//!     vec![4726.0, 0.0, 3587.0, 2011.0],
//!     vec![1204.0, 3587.0, 0.0, 5162.0],
//!     vec![6362.0, 2011.0, 5162.0, 0.0],
//! ]).unwrap());
//!
//! let tour = TourSolution::new(vec![0, 2, 1, 3], graph.clone()).unwrap();
//! assert_eq!(tour.fitness(), 13164.0);
//! assert_eq!(graph.spanning_tree().unwrap().cost(), 6802.0);
//! ```

mod graph;
mod mst;
mod tour;

pub use graph::{DistanceGraph, Tour};
pub use mst::{GraphEdge, SpanningTree};
pub use tour::{solution_quality, TourSolution};
