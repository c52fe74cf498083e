/// Result and options types for the simulation core.
///
/// Everything here is write-once plain data: constructed by the simulation,
/// read by callers, never mutated afterwards.

/// Success statistics for one (pool size, rejection fraction) cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdResult {
    /// Fraction of the pool rejected during the observation phase, 0.0 to 1.0.
    pub rejection_fraction: f64,
    /// Fraction of trials in which the policy picked the overall best candidate.
    pub success_rate: f64,
    /// Binomial standard error: sqrt(rate * (1 - rate) / trials).
    pub standard_error: f64,
}

/// Options for `run_sweep()`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepOptions {
    /// Monte Carlo trials per threshold (e.g. 10_000).
    pub trials: usize,
    /// Rejection fractions to test, each in [0, 1], in iteration order.
    /// Duplicate reject counts after rounding are simulated independently.
    pub thresholds: Vec<f64>,
}

/// One pool size's success curve across the threshold grid.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepResult {
    /// Number of candidates per trial.
    pub pool_size: usize,
    /// Trials per threshold.
    pub trials: usize,
    /// Per-threshold statistics, in the same order as the input thresholds.
    pub points: Vec<ThresholdResult>,
}

impl SweepResult {
    /// The empirically best threshold: the point with the highest success
    /// rate. Ties go to the first occurrence in grid order.
    pub fn best(&self) -> &ThresholdResult {
        assert!(!self.points.is_empty(), "SweepResult has no points");
        let mut best = &self.points[0];
        for p in &self.points[1..] {
            if p.success_rate > best.success_rate {
                best = p;
            }
        }
        best
    }
}

/// Closed-form reference values from `analyze()`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TheoreticalSummary {
    /// Optimal rejection fraction: 1/e.
    pub optimal_fraction: f64,
    /// Success probability at the optimum: also 1/e.
    pub optimal_success_probability: f64,
    /// Human-readable key insights, one per line.
    pub insights: Vec<String>,
}
