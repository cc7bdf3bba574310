//! RRHC outer loop.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::RrhcConfig;
use crate::random::rng_from_seed;
use crate::rmhc::{RandomMutatingHillClimber, RmhcConfig};
use crate::search::{SearchState, SearchStrategy};
use crate::solution::{Direction, Solution};

/// Random Restart Hill Climbing.
///
/// Owns a template for its inner [`RandomMutatingHillClimber`]; every outer
/// iteration builds a fresh climber from a copy of the current best, runs it
/// to completion and discards it. The inner climber borrows this strategy's
/// generator, so one seed reproduces the whole run.
#[derive(Debug)]
pub struct RandomRestartHillClimbing<S: Solution, R: Rng = StdRng> {
    state: SearchState<S>,
    direction: Direction,
    inner: RmhcConfig,
    rng: R,
}

impl<S: Solution> RandomRestartHillClimbing<S, StdRng> {
    /// Creates the strategy with `iterations` outer steps of
    /// `inner_iterations` each.
    pub fn new(
        iterations: usize,
        initial: S,
        direction: Direction,
        inner_iterations: usize,
    ) -> Self {
        let config = RrhcConfig::default()
            .with_iterations(iterations)
            .with_direction(direction)
            .with_inner_iterations(inner_iterations);
        Self::with_config(initial, &config)
    }

    /// Creates the strategy from a full configuration.
    pub fn with_config(initial: S, config: &RrhcConfig) -> Self {
        Self::with_rng(initial, config, rng_from_seed(config.seed))
    }
}

impl<S: Solution, R: Rng> RandomRestartHillClimbing<S, R> {
    /// Creates the strategy drawing from a caller-supplied generator.
    /// `config.seed` is ignored.
    pub fn with_rng(initial: S, config: &RrhcConfig, rng: R) -> Self {
        let inner = RmhcConfig::default()
            .with_iterations(config.inner_iterations)
            .with_direction(config.direction)
            .with_history_interval(0);
        Self {
            state: SearchState::new(initial, config.iterations, config.history_interval),
            direction: config.direction,
            inner,
            rng,
        }
    }

    /// The solution currently held.
    pub fn current(&self) -> &S {
        self.state.current()
    }
}

impl<S: Solution, R: Rng> SearchStrategy for RandomRestartHillClimbing<S, R> {
    type Solution = S;

    fn name(&self) -> &'static str {
        "RRHC"
    }

    fn state(&self) -> &SearchState<S> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SearchState<S> {
        &mut self.state
    }

    fn iterate(&mut self) {
        let climber = RandomMutatingHillClimber::with_rng(
            self.state.current().clone(),
            &self.inner,
            &mut self.rng,
        );
        let climbed = climber.run_algorithm().solution;
        let rank = self.state.current().rank(climbed.representation());
        if self.direction.is_improvement(rank) {
            tracing::trace!(
                iteration = self.state.iterations_performed(),
                "restart improved incumbent"
            );
            self.state.replace(climbed, true);
        }
    }

    fn into_state(self) -> SearchState<S> {
        self.state
    }
}
