/// Output formatting: terminal tables and JSON.
use optstop_core::{SweepResult, TheoreticalSummary, ThresholdResult};
use serde::Serialize;

#[derive(Serialize)]
struct JsonTheory {
    optimal_fraction: f64,
    optimal_success_probability: f64,
}

#[derive(Serialize)]
struct JsonSweep<'a> {
    pool_size: usize,
    trials: usize,
    best: &'a ThresholdResult,
    points: &'a [ThresholdResult],
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    theory: JsonTheory,
    sweeps: Vec<JsonSweep<'a>>,
}

/// Print one sweep as a formatted terminal table.
pub fn print_table(sweep: &SweepResult) {
    println!(
        "\nPool size {} ({} trials per threshold):",
        sweep.pool_size, sweep.trials,
    );
    println!("  Reject % | Success rate | Std error");
    println!("  ---------|--------------|----------");

    for p in &sweep.points {
        println!(
            "  {:>7.1}% | {:>12.4} | {:>9.4}",
            p.rejection_fraction * 100.0,
            p.success_rate,
            p.standard_error,
        );
    }

    let best = sweep.best();
    println!(
        "  Best threshold: {:.1}% (success rate {:.4} +/- {:.4})",
        best.rejection_fraction * 100.0,
        best.success_rate,
        best.standard_error,
    );
}

/// Print theory plus all sweeps as one JSON document.
pub fn print_json(theory: &TheoreticalSummary, sweeps: &[SweepResult]) {
    let output = JsonOutput {
        theory: JsonTheory {
            optimal_fraction: theory.optimal_fraction,
            optimal_success_probability: theory.optimal_success_probability,
        },
        sweeps: sweeps
            .iter()
            .map(|s| JsonSweep {
                pool_size: s.pool_size,
                trials: s.trials,
                best: s.best(),
                points: &s.points,
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
