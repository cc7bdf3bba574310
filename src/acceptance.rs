//! Acceptance criteria for worsening moves.
//!
//! Stochastic hill climbing and simulated annealing both decide whether to
//! take a worse candidate by comparing a probability against a uniform draw
//! in `[0, 1)`. The functions here are pure so the decision boundary can be
//! checked with exact draws.
//!
//! # References
//!
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

/// Logistic acceptance probability used by stochastic hill climbing:
/// `1 / (1 + exp(delta / convergence))`.
///
/// Never exceeds `0.5` for a non-negative delta. Larger convergence values
/// flatten the curve towards `0.5`.
pub fn logistic(delta: f64, convergence: f64) -> f64 {
    1.0 / (1.0 + (delta / convergence).exp())
}

/// Boltzmann (Metropolis) acceptance probability used by simulated
/// annealing: `exp(-delta / temperature)`.
///
/// A non-positive delta is always accepted. Once the temperature has decayed
/// to exactly zero, any positive delta is rejected.
pub fn boltzmann(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        return 1.0;
    }
    (-delta / temperature).exp()
}

/// Accepts when the probability strictly exceeds the uniform draw.
pub fn accepts(probability: f64, draw: f64) -> bool {
    probability > draw
}
