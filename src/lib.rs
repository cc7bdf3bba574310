//! Local-search metaheuristics over a generic solution abstraction.
//!
//! Provides four interchangeable single-solution strategies:
//!
//! - **Random Mutation Hill Climbing (RMHC)**: first-improvement climbing,
//!   never accepts a worse neighbor.
//! - **Random Restart Hill Climbing (RRHC)**: repeated bounded RMHC runs
//!   from the incumbent, keeping a run only when it improves.
//! - **Stochastic Hill Climbing (SHC)**: accepts worse neighbors with a
//!   logistic probability.
//! - **Simulated Annealing (SA)**: accepts worse neighbors with the
//!   Metropolis probability under geometric cooling.
//!
//! All strategies drive any type implementing [`solution::Solution`] and run
//! for a fixed iteration budget through the shared
//! [`search::SearchStrategy`] loop.
//!
//! # Travelling Salesman
//!
//! The [`tsp`] module instantiates the core: a symmetric
//! [`DistanceGraph`](tsp::DistanceGraph), a permutation
//! [`TourSolution`](tsp::TourSolution) with swap mutation, and a Prim
//! [`SpanningTree`](tsp::SpanningTree) whose cost is a lower bound for
//! scoring solution quality.
//!
//! ```
//! use std::sync::Arc;
//! use u_localsearch::sa::{SaConfig, SimulatedAnnealing};
//! use u_localsearch::search::SearchStrategy;
//! use u_localsearch::tsp::{DistanceGraph, TourSolution};
//!
//! let graph = Arc::new(DistanceGraph::new(vec![
//!     vec![0.0, 2.0, 9.0, 10.0],
//!     vec![2.0, 0.0, 6.0, 4.0],
//!     vec![9.0, 6.0, 0.0, 3.0],
//!     vec![10.0, 4.0, 3.0, 0.0],
//! ])?);
//! let mst = graph.spanning_tree()?.cost();
//! let start = TourSolution::new(graph.random_tour(), graph.clone())?;
//!
//! let result = SimulatedAnnealing::with_config(start, &SaConfig::tuned_for(mst, 5_000))?
//!     .run_algorithm();
//! assert!(result.fitness >= mst);
//! # Ok::<(), u_localsearch::Error>(())
//! ```
//!
//! # Logging
//!
//! Runs emit [`tracing`] spans and events at `debug` and `trace` level. The
//! crate never installs a subscriber or writes output itself.

pub mod acceptance;
pub mod error;
pub mod random;
pub mod rmhc;
pub mod rrhc;
pub mod sa;
pub mod search;
pub mod shc;
pub mod solution;
pub mod tsp;

pub use error::{Error, Result};
