//! SA configuration and cooling parameters.

use crate::solution::Direction;

/// Starting temperature as a fraction of the spanning-tree cost, used by
/// [`SaConfig::tuned_for`].
const START_TEMPERATURE_PER_MST_COST: f64 = 0.95;

/// Final temperature as a fraction of the spanning-tree cost, used by
/// [`SaConfig::tuned_for`].
const FINAL_TEMPERATURE_PER_MST_COST: f64 = 0.000_001_8;

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric and applied after every iteration:
/// `T_{k+1} = cooling_rate * T_k`.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_iterations(100_000)
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.9999);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Iteration budget. The temperature is cooled once per iteration.
    pub iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in `(0, 1]`. Higher = slower cooling;
    /// `1.0` keeps the temperature constant.
    pub cooling_rate: f64,

    /// Which way is better.
    pub direction: Direction,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Sample the current fitness every this many iterations. 0 = no trace.
    pub history_interval: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            initial_temperature: 100.0,
            cooling_rate: 0.999,
            direction: Direction::Minimize,
            seed: None,
            history_interval: 100,
        }
    }
}

impl SaConfig {
    /// Scales the schedule to an instance: start at `0.95 * mst_cost` and
    /// cool geometrically to `0.0000018 * mst_cost` over `iterations` steps.
    pub fn tuned_for(mst_cost: f64, iterations: usize) -> Self {
        let start = mst_cost * START_TEMPERATURE_PER_MST_COST;
        let end = mst_cost * FINAL_TEMPERATURE_PER_MST_COST;
        Self::default()
            .with_iterations(iterations)
            .with_initial_temperature(start)
            .with_cooling_rate(cooling_rate_between(start, end, iterations))
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
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
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(format!(
                "initial_temperature must be finite and positive, got {}",
                self.initial_temperature
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}

/// Geometric rate that takes `start` to `end` in `steps` multiplications.
fn cooling_rate_between(start: f64, end: f64, steps: usize) -> f64 {
    if steps == 0 {
        return 1.0;
    }
    (end / start).powf(1.0 / steps as f64)
}
