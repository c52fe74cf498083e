/// Random candidate rankings.
///
/// A ranking is a uniformly random permutation of 1..=n where 1 is the best
/// candidate. The RNG is always passed in by the caller — no process-global
/// generator — so runs can be seeded and reproduced.
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a fresh ranking for a pool of `n` candidates.
///
/// Position in the returned vector is interview order; the value is the
/// candidate's true rank (1 = best, n = worst).
pub fn generate_ranking(n: usize, rng: &mut impl Rng) -> Vec<u32> {
    assert!(n >= 1, "pool size must be at least 1, got {}", n);

    let mut ranking: Vec<u32> = (1..=n as u32).collect();
    ranking.shuffle(rng);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_ranking_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        let ranking = generate_ranking(100, &mut rng);

        assert_eq!(ranking.len(), 100);
        let mut sorted = ranking.clone();
        sorted.sort_unstable();
        let expected: Vec<u32> = (1..=100).collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_single_candidate() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(generate_ranking(1, &mut rng), vec![1]);
    }

    #[test]
    fn test_rankings_are_independent() {
        // Two draws from the same stream should (overwhelmingly) differ.
        let mut rng = SmallRng::seed_from_u64(9);
        let a = generate_ranking(50, &mut rng);
        let b = generate_ranking(50, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_first_position_is_uniform() {
        // Each candidate should land in position 0 about 1/n of the time.
        let n = 10;
        let draws = 20_000;
        let mut rng = SmallRng::seed_from_u64(1234);
        let mut counts = vec![0usize; n];

        for _ in 0..draws {
            let ranking = generate_ranking(n, &mut rng);
            counts[(ranking[0] - 1) as usize] += 1;
        }

        let expected = draws as f64 / n as f64;
        for (rank, &count) in counts.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.15,
                "rank {} appeared first {} times, expected ~{}",
                rank + 1,
                count,
                expected
            );
        }
    }

    #[test]
    #[should_panic(expected = "pool size must be at least 1")]
    fn test_zero_pool_panics() {
        let mut rng = SmallRng::seed_from_u64(0);
        let _ = generate_ranking(0, &mut rng);
    }
}
