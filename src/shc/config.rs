//! SHC configuration.

use crate::solution::Direction;

/// Fraction of the spanning-tree cost used as the convergence parameter by
/// [`ShcConfig::tuned_for`].
const CONVERGENCE_PER_MST_COST: f64 = 0.0055;

/// Configuration for Stochastic Hill Climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::shc::ShcConfig;
///
/// let config = ShcConfig::default()
///     .with_iterations(20_000)
///     .with_convergence(12.5)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShcConfig {
    /// Iteration budget.
    pub iterations: usize,

    /// Convergence parameter `T` of the logistic acceptance
    /// `1 / (1 + exp(delta / T))`. Larger values accept worse moves more
    /// readily.
    pub convergence: f64,

    /// Which way is better.
    pub direction: Direction,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Sample the current fitness every this many iterations. 0 = no trace.
    pub history_interval: usize,
}

impl Default for ShcConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            convergence: 1.0,
            direction: Direction::Minimize,
            seed: None,
            history_interval: 100,
        }
    }
}

impl ShcConfig {
    /// Scales the convergence parameter to an instance: `mst_cost * 0.0055`.
    pub fn tuned_for(mst_cost: f64, iterations: usize) -> Self {
        Self::default()
            .with_iterations(iterations)
            .with_convergence(mst_cost * CONVERGENCE_PER_MST_COST)
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_convergence(mut self, convergence: f64) -> Self {
        self.convergence = convergence;
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

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.convergence.is_finite() || self.convergence <= 0.0 {
            return Err(format!(
                "convergence must be finite and positive, got {}",
                self.convergence
            ));
        }
        Ok(())
    }
}
