//! Stochastic Hill Climbing (SHC).
//!
//! Like random mutation hill climbing, but a worse neighbor may still be
//! accepted with the logistic probability `1 / (1 + exp(delta / T))`.
//! Equal or better neighbors are always accepted.
//!
//! # References
//!
//! - Juels & Wattenberg (1996), "Stochastic Hillclimbing as a Baseline
//!   Method for Evaluating Genetic Algorithms"

mod config;
mod runner;

pub use config::ShcConfig;
pub use runner::StochasticHillClimbing;
