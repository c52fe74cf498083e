/// optstop-core: Monte Carlo core for the secretary (optimal stopping) problem.
///
/// Random rankings → threshold policy → success statistics. No IO, no
/// filesystem — just math. Bring your own RNG: every entry point takes
/// `&mut impl Rng`, so seeded runs reproduce exactly.
///
/// # Quick start
///
/// ```rust
/// use optstop_core::{linspace, run_sweep, SweepOptions};
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let options = SweepOptions {
///     trials: 2_000,
///     thresholds: linspace(21),
/// };
///
/// let sweep = run_sweep(100, &options, &mut rng);
/// let best = sweep.best();
/// println!(
///     "best rejection fraction: {:.3} (success rate {:.3} +/- {:.3})",
///     best.rejection_fraction, best.success_rate, best.standard_error,
/// );
/// ```

pub mod constants;
pub mod ranking;
pub mod simulate;
pub mod sweep;
pub mod theory;
pub mod trial;
pub mod types;

// Re-export primary public API at crate root.
pub use constants::{DEFAULT_GRID_POINTS, DEFAULT_TRIALS, OPTIMAL_FRACTION};
pub use ranking::generate_ranking;
pub use simulate::simulate_threshold;
pub use sweep::{linspace, run_sweep};
pub use theory::{analyze, summary_text};
pub use trial::run_trial;
pub use types::{SweepOptions, SweepResult, TheoreticalSummary, ThresholdResult};
