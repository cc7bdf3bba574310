//! RRHC configuration.

use crate::solution::Direction;

/// Configuration for Random Restart Hill Climbing.
///
/// Every outer iteration runs a fresh hill climber of `inner_iterations`
/// steps, so the total number of neighbor evaluations is roughly
/// `iterations * inner_iterations`.
///
/// # Examples
///
/// ```
/// use u_localsearch::rrhc::RrhcConfig;
///
/// // Spend 500_000 evaluations as 50 restarts of 10_000 steps.
/// let config = RrhcConfig::default().with_total_budget(500_000, 10_000);
/// assert_eq!(config.iterations, 50);
/// assert_eq!(config.inner_iterations, 10_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RrhcConfig {
    /// Number of outer iterations (inner climbs).
    pub iterations: usize,

    /// Iteration budget of each inner climb.
    pub inner_iterations: usize,

    /// Which way is better.
    pub direction: Direction,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Sample the current fitness every this many outer iterations. 0 = no trace.
    pub history_interval: usize,
}

impl Default for RrhcConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            inner_iterations: 1_000,
            direction: Direction::Minimize,
            seed: None,
            history_interval: 1,
        }
    }
}

impl RrhcConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_inner_iterations(mut self, n: usize) -> Self {
        self.inner_iterations = n;
        self
    }

    /// Splits a total evaluation budget into `total / inner` outer
    /// iterations of `inner` steps each. An `inner` of zero yields no outer
    /// iterations.
    pub fn with_total_budget(mut self, total: usize, inner: usize) -> Self {
        self.iterations = total.checked_div(inner).unwrap_or(0);
        self.inner_iterations = inner;
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
