//! Random Restart Hill Climbing (RRHC).
//!
//! Repeats bounded hill climbs, each started from the best solution found
//! so far, and keeps a climb's result only when it beats the incumbent.

mod config;
mod runner;

pub use config::RrhcConfig;
pub use runner::RandomRestartHillClimbing;
