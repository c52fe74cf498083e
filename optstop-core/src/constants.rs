/// The asymptotically optimal rejection fraction for the secretary problem.
/// Rejecting the first 1/e of the pool and then taking the first candidate
/// that beats every rejected one succeeds with probability 1/e as n grows.
pub const OPTIMAL_FRACTION: f64 = 1.0 / std::f64::consts::E;

/// Default number of Monte Carlo trials per threshold.
///
/// At 10,000 trials the binomial standard error near the optimum
/// (success_rate ~ 0.37) is sqrt(0.37 * 0.63 / 10000) ~ 0.005, tight enough
/// to resolve the curve's shape on the default grid.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Default number of grid points for the rejection-fraction sweep.
/// 41 evenly spaced points over [0, 1] gives 2.5% increments.
pub const DEFAULT_GRID_POINTS: usize = 41;
