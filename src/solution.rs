//! Core trait definitions for the local-search strategies.
//!
//! [`Solution`] is the contract between the generic strategies and a
//! concrete problem: it owns a representation, evaluates fitness, proposes
//! neighbors and ranks candidates. [`Direction`] tells a strategy which way
//! is "better".

use std::cmp::Ordering;

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must be cheaply copyable and totally comparable. Acceptance
/// probabilities are computed in `f64`, so every fitness type converts to it.
///
/// Built-in implementations exist for `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Three-way comparison of two fitness values.
    ///
    /// Must be a total order. For floats this follows IEEE 754 `totalOrder`,
    /// so a positive NaN ranks above every finite value.
    fn compare(&self, other: &Self) -> Ordering;

    /// Converts the fitness to `f64` for acceptance and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Lower fitness is better.
    #[default]
    Minimize,
    /// Higher fitness is better.
    Maximize,
}

impl Direction {
    /// Whether a [`Solution::rank`] result means the candidate improves on
    /// the current solution.
    pub fn is_improvement(self, rank: Ordering) -> bool {
        match self {
            Direction::Minimize => rank == Ordering::Less,
            Direction::Maximize => rank == Ordering::Greater,
        }
    }

    /// Whether a [`Solution::rank`] result means the candidate is strictly
    /// worse than the current solution.
    pub fn is_worse(self, rank: Ordering) -> bool {
        match self {
            Direction::Minimize => rank == Ordering::Greater,
            Direction::Maximize => rank == Ordering::Less,
        }
    }

    /// Fitness delta between a candidate and the current representation.
    ///
    /// Minimization measures `delta(candidate, current)`, maximization
    /// `delta(current, candidate)`. With this orientation one acceptance
    /// formula serves both directions.
    pub fn delta<S: Solution>(self, solution: &S, candidate: &S::Representation) -> f64 {
        let current = solution.representation();
        let delta = match self {
            Direction::Minimize => solution.fitness_delta(candidate, current),
            Direction::Maximize => solution.fitness_delta(current, candidate),
        };
        delta.to_f64()
    }
}

/// A candidate solution the strategies can improve.
///
/// The representation is opaque to the strategies. They only ever ask for
/// a neighboring representation, compare it against the current one, and
/// install it wholesale with [`set_representation`](Solution::set_representation)
/// when it is accepted.
///
/// # Implementing
///
/// ```
/// use std::cmp::Ordering;
/// use rand::Rng;
/// use u_localsearch::solution::Solution;
///
/// #[derive(Clone)]
/// struct Parabola { x: f64 }
///
/// impl Solution for Parabola {
///     type Representation = f64;
///     type Fitness = f64;
///
///     fn representation(&self) -> &f64 { &self.x }
///     fn set_representation(&mut self, x: f64) { self.x = x; }
///     fn fitness_of(&self, x: &f64) -> f64 { x * x }
///     fn fitness_delta(&self, a: &f64, b: &f64) -> f64 {
///         (self.fitness_of(a) - self.fitness_of(b)).abs()
///     }
///     fn propose_change<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
///         self.x + rng.random_range(-1.0..1.0)
///     }
/// }
///
/// let p = Parabola { x: 2.0 };
/// assert_eq!(p.fitness(), 4.0);
/// assert_eq!(p.rank(&1.0), Ordering::Less);
/// ```
pub trait Solution: Clone {
    /// The representation type, e.g. a permutation.
    type Representation: Clone;

    /// The fitness type.
    type Fitness: Fitness;

    /// Returns the current representation.
    fn representation(&self) -> &Self::Representation;

    /// Replaces the current representation.
    fn set_representation(&mut self, representation: Self::Representation);

    /// Fitness of the current representation.
    fn fitness(&self) -> Self::Fitness {
        self.fitness_of(self.representation())
    }

    /// Fitness of an arbitrary representation.
    ///
    /// Must agree with [`fitness`](Solution::fitness) when called with the
    /// current representation.
    fn fitness_of(&self, representation: &Self::Representation) -> Self::Fitness;

    /// Magnitude of the fitness difference between two representations.
    ///
    /// Always non-negative; callers handle direction.
    fn fitness_delta(&self, a: &Self::Representation, b: &Self::Representation) -> Self::Fitness;

    /// Produces one neighboring representation without touching `self`.
    fn propose_change<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Representation;

    /// Compares a candidate's fitness against the current fitness.
    ///
    /// Returns `compare(fitness_of(candidate), fitness())`: `Greater` when the
    /// candidate's fitness is higher (worse under minimization), `Less` when
    /// lower, `Equal` when tied.
    fn rank(&self, candidate: &Self::Representation) -> Ordering {
        self.fitness_of(candidate).compare(&self.fitness())
    }
}
