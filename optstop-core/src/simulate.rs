/// Per-threshold Monte Carlo estimation.
///
/// Repeats independent trials for a fixed (pool size, reject count) and
/// reduces them to a success rate with its binomial standard error.
use rand::Rng;

use crate::ranking::generate_ranking;
use crate::trial::run_trial;
use crate::types::ThresholdResult;

/// Estimate the success rate for one reject count.
///
/// Each trial draws a fresh ranking and is independent of every other; the
/// only shared state is the success counter. `rejection_fraction` in the
/// result is `reject_count / n`.
pub fn simulate_threshold(
    n: usize,
    reject_count: usize,
    trials: usize,
    rng: &mut impl Rng,
) -> ThresholdResult {
    assert!(n >= 1, "pool size must be at least 1, got {}", n);
    assert!(trials >= 1, "trial count must be at least 1, got {}", trials);
    assert!(
        reject_count <= n,
        "reject count {} exceeds pool size {}",
        reject_count,
        n
    );

    let mut successes: usize = 0;
    for _ in 0..trials {
        let ranking = generate_ranking(n, rng);
        if run_trial(&ranking, reject_count) {
            successes += 1;
        }
    }

    let success_rate = successes as f64 / trials as f64;
    let standard_error = (success_rate * (1.0 - success_rate) / trials as f64).sqrt();

    ThresholdResult {
        rejection_fraction: reject_count as f64 / n as f64,
        success_rate,
        standard_error,
    }
}
