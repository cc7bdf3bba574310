//! SA execution loop.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::SaConfig;
use crate::acceptance;
use crate::error::{Error, Result};
use crate::random::rng_from_seed;
use crate::search::{SearchState, SearchStrategy};
use crate::solution::{Direction, Solution};

/// Simulated Annealing with Metropolis acceptance and geometric cooling.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_localsearch::sa::{SaConfig, SimulatedAnnealing};
/// use u_localsearch::search::SearchStrategy;
/// use u_localsearch::tsp::{DistanceGraph, TourSolution};
///
/// let graph = Arc::new(DistanceGraph::new(vec![
///     vec![0.0, 4726.0, 1204.0, 6362.0],
///     vec![4726.0, 0.0, 3587.0, 2011.0],
///     vec![1204.0, 3587.0, 0.0, 5162.0],
///     vec![6362.0, 2011.0, 5162.0, 0.0],
/// ]).unwrap());
/// let mst = graph.spanning_tree().unwrap().cost();
/// let start = TourSolution::random(graph, &mut rand::rng());
///
/// let config = SaConfig::tuned_for(mst, 10_000).with_seed(42);
/// let result = SimulatedAnnealing::with_config(start, &config)
///     .unwrap()
///     .run_algorithm();
/// assert!(result.solution.quality_with(mst) > 50.0);
/// ```
#[derive(Debug)]
pub struct SimulatedAnnealing<S: Solution, R: Rng = StdRng> {
    state: SearchState<S>,
    direction: Direction,
    temperature: f64,
    cooling_rate: f64,
    rng: R,
}

impl<S: Solution> SimulatedAnnealing<S, StdRng> {
    /// Creates the strategy with an entropy-seeded generator.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if the temperature is not finite and
    /// positive or the cooling rate is outside `(0, 1]`.
    pub fn new(
        iterations: usize,
        initial: S,
        direction: Direction,
        temperature: f64,
        cooling_rate: f64,
    ) -> Result<Self> {
        let config = SaConfig::default()
            .with_iterations(iterations)
            .with_direction(direction)
            .with_initial_temperature(temperature)
            .with_cooling_rate(cooling_rate);
        Self::with_config(initial, &config)
    }

    /// Creates the strategy from a full configuration.
    pub fn with_config(initial: S, config: &SaConfig) -> Result<Self> {
        Self::with_rng(initial, config, rng_from_seed(config.seed))
    }
}

impl<S: Solution, R: Rng> SimulatedAnnealing<S, R> {
    /// Creates the strategy drawing from a caller-supplied generator.
    /// `config.seed` is ignored.
    pub fn with_rng(initial: S, config: &SaConfig, rng: R) -> Result<Self> {
        config.validate().map_err(Error::InvalidConfig)?;
        Ok(Self {
            state: SearchState::new(initial, config.iterations, config.history_interval),
            direction: config.direction,
            temperature: config.initial_temperature,
            cooling_rate: config.cooling_rate,
            rng,
        })
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The solution currently held.
    pub fn current(&self) -> &S {
        self.state.current()
    }
}

impl<S: Solution, R: Rng> SearchStrategy for SimulatedAnnealing<S, R> {
    type Solution = S;

    fn name(&self) -> &'static str {
        "SA"
    }

    fn state(&self) -> &SearchState<S> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SearchState<S> {
        &mut self.state
    }

    fn iterate(&mut self) {
        let current = self.state.current();
        let candidate = current.propose_change(&mut self.rng);
        let rank = current.rank(&candidate);
        let delta = self.direction.delta(current, &candidate);

        // Metropolis acceptance criterion
        if self.direction.is_worse(rank) {
            let probability = acceptance::boltzmann(delta, self.temperature);
            let draw = self.rng.random::<f64>();
            if acceptance::accepts(probability, draw) {
                tracing::trace!(
                    delta,
                    probability,
                    temperature = self.temperature,
                    "accepted worse move"
                );
                self.state.accept(candidate, false);
            }
        } else {
            let improving = self.direction.is_improvement(rank);
            self.state.accept(candidate, improving);
        }

        // Cool down, accepted or not
        self.temperature *= self.cooling_rate;
    }

    fn into_state(self) -> SearchState<S> {
        tracing::debug!(temperature = self.temperature, "annealing stopped");
        self.state
    }
}
