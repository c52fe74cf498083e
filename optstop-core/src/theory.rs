/// Closed-form analysis of the secretary problem.
///
/// Reference values only — nothing here feeds back into the simulation, so
/// the empirical curve is an honest check against the theory rather than a
/// restatement of it.
use crate::constants::OPTIMAL_FRACTION;
use crate::types::TheoreticalSummary;

/// The asymptotic optimum: reject the first 1/e of the pool, then take the
/// first candidate that beats everyone rejected. Both the optimal fraction
/// and the resulting success probability are 1/e.
pub fn analyze() -> TheoreticalSummary {
    TheoreticalSummary {
        optimal_fraction: OPTIMAL_FRACTION,
        optimal_success_probability: OPTIMAL_FRACTION,
        insights: vec![
            "Reject the first 37% of candidates".to_string(),
            "Pick the first candidate better than all previously seen".to_string(),
            "This strategy has a ~37% success rate".to_string(),
            "Success rate doesn't depend on total number of candidates".to_string(),
        ],
    }
}

/// Render the summary as a human-readable banner.
pub fn summary_text(summary: &TheoreticalSummary) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    out.push_str(&rule);
    out.push_str("\nOPTIMAL STOPPING PROBLEM - THEORETICAL ANALYSIS\n");
    out.push_str(&rule);
    out.push_str(&format!(
        "\n\nOptimal rejection threshold: 1/e = {:.4} ({:.1}%)\n",
        summary.optimal_fraction,
        summary.optimal_fraction * 100.0
    ));
    out.push_str(&format!(
        "Probability of selecting the best candidate: 1/e = {:.4} ({:.1}%)\n",
        summary.optimal_success_probability,
        summary.optimal_success_probability * 100.0
    ));
    out.push_str("\nKey insights:\n");
    for insight in &summary.insights {
        out.push_str(&format!("  - {}\n", insight));
    }
    out.push_str(&rule);
    out
}
