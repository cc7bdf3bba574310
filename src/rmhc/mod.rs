//! Random Mutation Hill Climbing (RMHC).
//!
//! First-improvement hill climbing: propose one random neighbor per
//! iteration and keep it only if it strictly improves the current solution.
//! Never accepts a worse or equal candidate, so the fitness is monotone.
//!
//! # References
//!
//! - Mitchell, Holland & Forrest (1994), "When Will a Genetic Algorithm
//!   Outperform Hill Climbing?"

mod config;
mod runner;

pub use config::RmhcConfig;
pub use runner::RandomMutatingHillClimber;
