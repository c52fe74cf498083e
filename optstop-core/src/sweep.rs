/// Threshold sweep: the success curve for one pool size.
///
/// Iterates the per-threshold simulator across a rejection-fraction grid,
/// preserving grid order in the result. The caller owns the RNG, so a
/// seeded sweep is fully reproducible.
use rand::Rng;

use crate::simulate::simulate_threshold;
use crate::types::{SweepOptions, SweepResult};

/// Build an evenly spaced grid of `points` fractions spanning [0, 1]
/// inclusive. A single point collapses to just 0.0.
pub fn linspace(points: usize) -> Vec<f64> {
    assert!(points >= 1, "grid needs at least 1 point, got {}", points);
    if points == 1 {
        return vec![0.0];
    }
    (0..points)
        .map(|i| i as f64 / (points - 1) as f64)
        .collect()
}

/// Sweep the threshold grid for one pool size.
///
/// Each fraction f maps to `reject_count = round(f * n)`. Small pools can
/// round several fractions to the same reject count; each still gets its
/// own independent simulation run, so the curve stays grid-shaped.
pub fn run_sweep(n: usize, options: &SweepOptions, rng: &mut impl Rng) -> SweepResult {
    assert!(n >= 1, "pool size must be at least 1, got {}", n);
    assert!(
        !options.thresholds.is_empty(),
        "sweep needs at least one threshold"
    );
    for &f in &options.thresholds {
        assert!(
            (0.0..=1.0).contains(&f),
            "threshold {} outside [0, 1]",
            f
        );
    }

    let mut points = Vec::with_capacity(options.thresholds.len());
    for &fraction in &options.thresholds {
        let reject_count = (fraction * n as f64).round() as usize;
        let mut result = simulate_threshold(n, reject_count, options.trials, rng);
        // Report the grid fraction, not the rounded-back one, so results
        // line up across pool sizes.
        result.rejection_fraction = fraction;
        points.push(result);
    }

    SweepResult { pool_size: n, trials: options.trials, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::OPTIMAL_FRACTION;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let grid = linspace(41);
        assert_eq!(grid.len(), 41);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[40], 1.0);
        assert!((grid[1] - 0.025).abs() < 1e-12);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_single_point() {
        assert_eq!(linspace(1), vec![0.0]);
    }

    #[test]
    fn test_sweep_preserves_grid_order() {
        let mut rng = SmallRng::seed_from_u64(23);
        let options = SweepOptions { trials: 200, thresholds: linspace(11) };
        let sweep = run_sweep(30, &options, &mut rng);

        assert_eq!(sweep.pool_size, 30);
        assert_eq!(sweep.points.len(), 11);
        for (point, &f) in sweep.points.iter().zip(&options.thresholds) {
            assert_eq!(point.rejection_fraction, f);
        }
    }

    #[test]
    fn test_sweep_tolerates_duplicate_reject_counts() {
        // n = 3 rounds many fractions to the same reject count; every grid
        // point must still produce its own result.
        let mut rng = SmallRng::seed_from_u64(29);
        let options = SweepOptions { trials: 300, thresholds: linspace(21) };
        let sweep = run_sweep(3, &options, &mut rng);
        assert_eq!(sweep.points.len(), 21);
    }

    #[test]
    fn test_empirical_optimum_lands_near_one_over_e() {
        let mut rng = SmallRng::seed_from_u64(31);
        let options = SweepOptions { trials: 5_000, thresholds: linspace(21) };
        let sweep = run_sweep(200, &options, &mut rng);

        let best = sweep.best();
        assert!(
            (best.rejection_fraction - OPTIMAL_FRACTION).abs() < 0.15,
            "best fraction {} too far from 1/e",
            best.rejection_fraction
        );
        assert!(
            (best.success_rate - OPTIMAL_FRACTION).abs() < 0.05,
            "best rate {} too far from 1/e",
            best.success_rate
        );
    }

    /// Scale invariance: the success curve depends on the rejection fraction,
    /// not on the pool size. Compare two pool sizes point by point within
    /// the combined statistical margin.
    #[test]
    fn test_curves_agree_across_pool_sizes() {
        let options = SweepOptions { trials: 4_000, thresholds: linspace(11) };

        let mut rng_small = SmallRng::seed_from_u64(37);
        let small = run_sweep(100, &options, &mut rng_small);

        let mut rng_large = SmallRng::seed_from_u64(41);
        let large = run_sweep(400, &options, &mut rng_large);

        for (a, b) in small.points.iter().zip(&large.points) {
            let combined =
                (a.standard_error.powi(2) + b.standard_error.powi(2)).sqrt();
            // 4 sigma plus a small allowance for finite-n effects.
            let margin = 4.0 * combined + 0.02;
            assert!(
                (a.success_rate - b.success_rate).abs() < margin,
                "curves diverge at f = {}: {} vs {}",
                a.rejection_fraction,
                a.success_rate,
                b.success_rate
            );
        }
    }

    #[test]
    fn test_seeded_sweep_is_reproducible() {
        let options = SweepOptions { trials: 500, thresholds: linspace(5) };

        let mut rng1 = SmallRng::seed_from_u64(99);
        let first = run_sweep(50, &options, &mut rng1);

        let mut rng2 = SmallRng::seed_from_u64(99);
        let second = run_sweep(50, &options, &mut rng2);

        for (a, b) in first.points.iter().zip(&second.points) {
            assert_eq!(a.success_rate, b.success_rate);
        }
    }

    #[test]
    #[should_panic(expected = "outside [0, 1]")]
    fn test_out_of_range_threshold_panics() {
        let mut rng = SmallRng::seed_from_u64(0);
        let options = SweepOptions { trials: 10, thresholds: vec![0.5, 1.5] };
        let _ = run_sweep(10, &options, &mut rng);
    }

    #[test]
    #[should_panic(expected = "at least one threshold")]
    fn test_empty_grid_panics() {
        let mut rng = SmallRng::seed_from_u64(0);
        let options = SweepOptions { trials: 10, thresholds: vec![] };
        let _ = run_sweep(10, &options, &mut rng);
    }
}
