//! RMHC configuration.

use crate::solution::Direction;

/// Configuration for the Random Mutation Hill Climber.
///
/// # Examples
///
/// ```
/// use u_localsearch::rmhc::RmhcConfig;
/// use u_localsearch::solution::Direction;
///
/// let config = RmhcConfig::default()
///     .with_iterations(5_000)
///     .with_direction(Direction::Minimize)
///     .with_seed(42);
/// assert_eq!(config.iterations, 5_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RmhcConfig {
    /// Iteration budget. Each iteration proposes exactly one neighbor.
    pub iterations: usize,

    /// Which way is better.
    pub direction: Direction,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Sample the current fitness every this many iterations. 0 = no trace.
    pub history_interval: usize,
}

impl Default for RmhcConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            direction: Direction::Minimize,
            seed: None,
            history_interval: 100,
        }
    }
}

impl RmhcConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }
}
