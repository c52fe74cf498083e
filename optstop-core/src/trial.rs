/// The stopping policy for a single trial.
///
/// Pure function of the ranking and the reject count — no RNG, no state.
/// Candidates are interviewed in ranking order; a rejected candidate cannot
/// be recalled.

/// Apply the threshold policy to one ranking.
///
/// The first `reject_count` candidates are observed and rejected; after
/// that, the first candidate strictly better than every rejected one is
/// selected. If nobody qualifies (including when the whole pool is
/// rejected), the last candidate is the forced pick.
///
/// Returns true iff the selected candidate is the overall best (rank 1).
pub fn run_trial(ranking: &[u32], reject_count: usize) -> bool {
    let n = ranking.len();
    assert!(n >= 1, "ranking must not be empty");
    assert!(
        reject_count <= n,
        "reject count {} exceeds pool size {}",
        reject_count,
        n
    );

    // Rejecting everyone leaves only the forced pick at the end.
    if reject_count >= n {
        return ranking[n - 1] == 1;
    }

    // Observation phase. With reject_count == 0 nothing is observed and the
    // first remaining candidate always qualifies.
    let best_rejected = ranking[..reject_count].iter().copied().min();

    for &rank in &ranking[reject_count..] {
        let qualifies = match best_rejected {
            Some(best) => rank < best,
            None => true,
        };
        if qualifies {
            return rank == 1;
        }
    }

    // No candidate beat the observation phase: forced pick of the last one.
    ranking[n - 1] == 1
}
