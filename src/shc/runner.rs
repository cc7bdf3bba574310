//! SHC iteration.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::ShcConfig;
use crate::acceptance;
use crate::error::{Error, Result};
use crate::random::rng_from_seed;
use crate::search::{SearchState, SearchStrategy};
use crate::solution::{Direction, Solution};

/// Stochastic Hill Climbing with logistic acceptance.
#[derive(Debug)]
pub struct StochasticHillClimbing<S: Solution, R: Rng = StdRng> {
    state: SearchState<S>,
    direction: Direction,
    convergence: f64,
    rng: R,
}

impl<S: Solution> StochasticHillClimbing<S, StdRng> {
    /// Creates the strategy with an entropy-seeded generator.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if `convergence` is not finite and positive.
    pub fn new(
        iterations: usize,
        initial: S,
        direction: Direction,
        convergence: f64,
    ) -> Result<Self> {
        let config = ShcConfig::default()
            .with_iterations(iterations)
            .with_direction(direction)
            .with_convergence(convergence);
        Self::with_config(initial, &config)
    }

    /// Creates the strategy from a full configuration.
    pub fn with_config(initial: S, config: &ShcConfig) -> Result<Self> {
        Self::with_rng(initial, config, rng_from_seed(config.seed))
    }
}

impl<S: Solution, R: Rng> StochasticHillClimbing<S, R> {
    /// Creates the strategy drawing from a caller-supplied generator.
    /// `config.seed` is ignored.
    pub fn with_rng(initial: S, config: &ShcConfig, rng: R) -> Result<Self> {
        config.validate().map_err(Error::InvalidConfig)?;
        Ok(Self {
            state: SearchState::new(initial, config.iterations, config.history_interval),
            direction: config.direction,
            convergence: config.convergence,
            rng,
        })
    }

    /// The solution currently held.
    pub fn current(&self) -> &S {
        self.state.current()
    }
}

impl<S: Solution, R: Rng> SearchStrategy for StochasticHillClimbing<S, R> {
    type Solution = S;

    fn name(&self) -> &'static str {
        "SHC"
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

        if self.direction.is_worse(rank) {
            let probability = acceptance::logistic(delta, self.convergence);
            let draw = self.rng.random::<f64>();
            if acceptance::accepts(probability, draw) {
                tracing::trace!(delta, probability, "accepted worse move");
                self.state.accept(candidate, false);
            }
        } else {
            let improving = self.direction.is_improvement(rank);
            self.state.accept(candidate, improving);
        }
    }

    fn into_state(self) -> SearchState<S> {
        self.state
    }
}
