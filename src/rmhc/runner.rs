//! RMHC iteration.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::RmhcConfig;
use crate::random::rng_from_seed;
use crate::search::{SearchState, SearchStrategy};
use crate::solution::{Direction, Solution};

/// Random Mutation Hill Climber.
///
/// Each iteration proposes one neighbor and installs it only when
/// [`Direction::is_improvement`] holds for its rank.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_localsearch::rmhc::RandomMutatingHillClimber;
/// use u_localsearch::search::SearchStrategy;
/// use u_localsearch::solution::Direction;
/// use u_localsearch::tsp::{DistanceGraph, TourSolution};
///
/// let graph = Arc::new(DistanceGraph::new(vec![
///     vec![0.0, 4726.0, 1204.0, 6362.0],
///     vec![4726.0, 0.0, 3587.0, 2011.0],
///     vec![1204.0, 3587.0, 0.0, 5162.0],
///     vec![6362.0, 2011.0, 5162.0, 0.0],
/// ]).unwrap());
/// let start = TourSolution::new(vec![0, 1, 2, 3], graph).unwrap();
///
/// let result = RandomMutatingHillClimber::new(1_000, start, Direction::Minimize).run_algorithm();
/// assert!(result.fitness <= 19837.0);
/// ```
#[derive(Debug)]
pub struct RandomMutatingHillClimber<S: Solution, R: Rng = StdRng> {
    state: SearchState<S>,
    direction: Direction,
    rng: R,
}

impl<S: Solution> RandomMutatingHillClimber<S, StdRng> {
    /// Creates a climber with `iterations` budget and an entropy-seeded
    /// generator.
    pub fn new(iterations: usize, initial: S, direction: Direction) -> Self {
        let config = RmhcConfig::default()
            .with_iterations(iterations)
            .with_direction(direction);
        Self::with_config(initial, &config)
    }

    /// Creates a climber from a full configuration.
    pub fn with_config(initial: S, config: &RmhcConfig) -> Self {
        Self::with_rng(initial, config, rng_from_seed(config.seed))
    }
}

impl<S: Solution, R: Rng> RandomMutatingHillClimber<S, R> {
    /// Creates a climber drawing from a caller-supplied generator.
    /// `config.seed` is ignored.
    pub fn with_rng(initial: S, config: &RmhcConfig, rng: R) -> Self {
        Self {
            state: SearchState::new(initial, config.iterations, config.history_interval),
            direction: config.direction,
            rng,
        }
    }

    /// The solution currently held.
    pub fn current(&self) -> &S {
        self.state.current()
    }
}

impl<S: Solution, R: Rng> SearchStrategy for RandomMutatingHillClimber<S, R> {
    type Solution = S;

    fn name(&self) -> &'static str {
        "RMHC"
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
        if self.direction.is_improvement(current.rank(&candidate)) {
            self.state.accept(candidate, true);
        }
    }

    fn into_state(self) -> SearchState<S> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tsp::fixtures::{four_city, ten_city};
    use crate::tsp::{DistanceGraph, TourSolution};
    use proptest::prelude::*;
    use rand::Rng;
    use std::sync::Arc;

    fn four_city_start() -> TourSolution {
        let graph = Arc::new(DistanceGraph::new(four_city()).unwrap());
        TourSolution::new(vec![0, 1, 2, 3], graph).unwrap()
    }

    // ---- Integer line: f(x) = |x - 7|, neighbors x +/- 1 ----

    #[derive(Clone, Debug)]
    struct Line {
        x: i64,
    }

    impl Solution for Line {
        type Representation = i64;
        type Fitness = f64;

        fn representation(&self) -> &i64 {
            &self.x
        }

        fn set_representation(&mut self, x: i64) {
            self.x = x;
        }

        fn fitness_of(&self, x: &i64) -> f64 {
            (x - 7).abs() as f64
        }

        fn fitness_delta(&self, a: &i64, b: &i64) -> f64 {
            (self.fitness_of(a) - self.fitness_of(b)).abs()
        }

        fn propose_change<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
            if rng.random_bool(0.5) {
                self.x + 1
            } else {
                self.x - 1
            }
        }
    }

    #[test]
    fn test_rmhc_zero_budget_returns_input() {
        let start = four_city_start();
        let result = RandomMutatingHillClimber::new(0, start.clone(), Direction::Minimize)
            .run_algorithm();
        assert_eq!(result.solution.tour(), start.tour());
        assert_eq!(result.fitness, start.fitness());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.accepted_moves, 0);
    }

    #[test]
    fn test_rmhc_finds_four_city_optimum() {
        let config = RmhcConfig::default().with_iterations(500).with_seed(42);
        let result = RandomMutatingHillClimber::with_config(four_city_start(), &config)
            .run_algorithm();
        assert!((result.fitness - 13103.0).abs() < 0.1, "got {}", result.fitness);
        assert_eq!(result.iterations, 500);
    }

    #[test]
    fn test_rmhc_minimizes_line() {
        let config = RmhcConfig::default().with_iterations(2_000).with_seed(1);
        let result = RandomMutatingHillClimber::with_config(Line { x: -40 }, &config)
            .run_algorithm();
        assert_eq!(result.solution.x, 7);
        assert_eq!(result.improving_moves, result.accepted_moves);
    }

    #[test]
    fn test_rmhc_maximizes_line() {
        let config = RmhcConfig::default()
            .with_iterations(200)
            .with_direction(Direction::Maximize)
            .with_seed(1);
        let result = RandomMutatingHillClimber::with_config(Line { x: 7 }, &config)
            .run_algorithm();
        assert!(result.fitness > 0.0);
        for window in result.fitness_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_rmhc_history_non_increasing() {
        let graph = Arc::new(DistanceGraph::new(ten_city()).unwrap());
        let start = TourSolution::random(graph, &mut create_rng(11));
        let config = RmhcConfig::default()
            .with_iterations(5_000)
            .with_history_interval(50)
            .with_seed(11);
        let result = RandomMutatingHillClimber::with_config(start, &config).run_algorithm();
        assert_eq!(result.fitness_history.len(), 101);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-10,
                "fitness history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_rmhc_injected_rng_is_reproducible() {
        let config = RmhcConfig::default().with_iterations(300);
        let a = RandomMutatingHillClimber::with_rng(four_city_start(), &config, create_rng(5))
            .run_algorithm();
        let b = RandomMutatingHillClimber::with_rng(four_city_start(), &config, create_rng(5))
            .run_algorithm();
        assert_eq!(a.solution.tour(), b.solution.tour());
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_rmhc_never_worsens(seed in any::<u64>(), budget in 0usize..400) {
            let graph = Arc::new(DistanceGraph::new(ten_city()).unwrap());
            let start = TourSolution::random(graph, &mut create_rng(seed));
            let initial = start.fitness();
            let config = RmhcConfig::default().with_iterations(budget).with_seed(seed);
            let result = RandomMutatingHillClimber::with_config(start, &config).run_algorithm();
            prop_assert!(result.fitness <= initial);
            prop_assert_eq!(result.iterations, budget);
        }
    }
}
