//! Shared search loop.
//!
//! Every strategy runs the same outer loop: while fewer than `budget`
//! iterations have been performed, apply one strategy-specific iteration to
//! the current solution. There is no early termination on convergence; a
//! run is done exactly when the budget is used up.

use crate::solution::{Fitness, Solution};

/// Result of a local-search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S: Solution> {
    /// The solution held when the budget ran out.
    pub solution: S,

    /// Fitness of `solution`.
    pub fitness: S::Fitness,

    /// Fitness of the starting solution.
    pub initial_fitness: S::Fitness,

    /// Iterations performed.
    pub iterations: usize,

    /// Number of proposals installed as the new current solution.
    pub accepted_moves: usize,

    /// Number of accepted proposals that strictly improved the current solution.
    pub improving_moves: usize,

    /// Current fitness sampled at regular intervals, starting with the
    /// initial fitness and ending with the final one. Empty when tracing is
    /// disabled.
    pub fitness_history: Vec<f64>,
}

impl<S: Solution> SearchResult<S> {
    /// Signed change `initial - final`. Positive means lower fitness.
    pub fn improvement(&self) -> f64 {
        self.initial_fitness.to_f64() - self.fitness.to_f64()
    }
}

/// Mutable per-run state: the current solution plus bookkeeping.
#[derive(Debug, Clone)]
pub struct SearchState<S: Solution> {
    current: S,
    initial_fitness: S::Fitness,
    budget: usize,
    iterations_performed: usize,
    accepted_moves: usize,
    improving_moves: usize,
    history_interval: usize,
    fitness_history: Vec<f64>,
}

impl<S: Solution> SearchState<S> {
    /// Creates the state for a run of `budget` iterations.
    ///
    /// `history_interval == 0` disables the fitness trace.
    pub fn new(initial: S, budget: usize, history_interval: usize) -> Self {
        let initial_fitness = initial.fitness();
        let mut fitness_history = Vec::new();
        if history_interval > 0 {
            fitness_history.push(initial_fitness.to_f64());
        }
        Self {
            current: initial,
            initial_fitness,
            budget,
            iterations_performed: 0,
            accepted_moves: 0,
            improving_moves: 0,
            history_interval,
            fitness_history,
        }
    }

    /// The solution currently held.
    pub fn current(&self) -> &S {
        &self.current
    }

    /// Iteration budget.
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Iterations performed so far.
    pub fn iterations_performed(&self) -> usize {
        self.iterations_performed
    }

    /// Whether the budget is used up.
    pub fn is_done(&self) -> bool {
        self.iterations_performed >= self.budget
    }

    /// Installs an accepted representation.
    pub fn accept(&mut self, representation: S::Representation, improving: bool) {
        self.current.set_representation(representation);
        self.record_acceptance(improving);
    }

    /// Replaces the current solution wholesale.
    pub fn replace(&mut self, solution: S, improving: bool) {
        self.current = solution;
        self.record_acceptance(improving);
    }

    fn record_acceptance(&mut self, improving: bool) {
        self.accepted_moves += 1;
        if improving {
            self.improving_moves += 1;
        }
    }

    /// Counts one finished iteration and samples the trace if due.
    pub fn complete_iteration(&mut self) {
        self.iterations_performed += 1;
        if self.history_interval > 0
            && self.iterations_performed.is_multiple_of(self.history_interval)
        {
            self.fitness_history.push(self.current.fitness().to_f64());
        }
    }

    /// Finishes the run.
    pub fn into_result(mut self) -> SearchResult<S> {
        let fitness = self.current.fitness();
        if self.history_interval > 0
            && !self.iterations_performed.is_multiple_of(self.history_interval)
        {
            self.fitness_history.push(fitness.to_f64());
        }
        SearchResult {
            solution: self.current,
            fitness,
            initial_fitness: self.initial_fitness,
            iterations: self.iterations_performed,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            fitness_history: self.fitness_history,
        }
    }
}

/// A bounded local search over a [`Solution`].
///
/// Implementors supply one iteration of their acceptance rule; the outer
/// loop, iteration counting and tracing are shared.
pub trait SearchStrategy {
    /// The solution type being improved.
    type Solution: Solution;

    /// Short strategy name for logs.
    fn name(&self) -> &'static str;

    /// Read access to the run state.
    fn state(&self) -> &SearchState<Self::Solution>;

    /// Write access to the run state.
    fn state_mut(&mut self) -> &mut SearchState<Self::Solution>;

    /// Applies one iteration of the acceptance rule. Does not count it.
    fn iterate(&mut self);

    /// Releases the run state.
    fn into_state(self) -> SearchState<Self::Solution>;

    /// Performs one iteration. Returns `false` without doing anything once
    /// the budget is used up.
    fn step(&mut self) -> bool {
        if self.state().is_done() {
            return false;
        }
        self.iterate();
        self.state_mut().complete_iteration();
        true
    }

    /// Runs until the budget is used up and returns the final solution.
    ///
    /// A zero budget returns the starting solution unchanged.
    fn run_algorithm(mut self) -> SearchResult<Self::Solution>
    where
        Self: Sized,
    {
        let span = tracing::debug_span!(
            "local_search",
            strategy = self.name(),
            budget = self.state().budget()
        );
        let _guard = span.enter();

        while self.step() {}

        let name = self.name();
        let result = self.into_state().into_result();
        tracing::debug!(
            strategy = name,
            iterations = result.iterations,
            initial_fitness = result.initial_fitness.to_f64(),
            fitness = result.fitness.to_f64(),
            accepted = result.accepted_moves,
            improving = result.improving_moves,
            "search finished"
        );
        result
    }
}
