// ABOUTME: Injectable randomness provider and uniform random selection
// ABOUTME: Generators draw through RandomSource so tests can fix the sequence of draws

use crate::error::{CoreError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `[0, upper)`. Callers never pass `upper == 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

/// `StdRng`-backed source, reproducible when built from a seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when a seed is configured, entropy-backed otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }
}

/// Pick one element of `items` with uniform probability over its indices.
///
/// Fails with [`CoreError::EmptySelection`] on an empty slice; the fixed
/// content tables are never empty.
pub fn pick<T, R>(items: &[T], rng: &mut R) -> Result<T>
where
    T: Copy,
    R: RandomSource + ?Sized,
{
    if items.is_empty() {
        return Err(CoreError::EmptySelection);
    }
    Ok(items[rng.next_index(items.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedRandom;
    use crate::types::Topic;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pick_empty_slice_fails() {
        let mut rng = SeededRandom::from_seed(7);
        let empty: [Topic; 0] = [];
        assert_eq!(pick(&empty, &mut rng), Err(CoreError::EmptySelection));
    }

    #[test]
    fn test_pick_follows_script() {
        let mut rng = ScriptedRandom::new(vec![2, 0, 9]);
        assert_eq!(pick(Topic::ALL, &mut rng).unwrap(), Topic::CustomerServiceBasics);
        assert_eq!(pick(Topic::ALL, &mut rng).unwrap(), Topic::ComplianceTraining);
        assert_eq!(pick(Topic::ALL, &mut rng).unwrap(), Topic::DataPrivacySecurity);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        let first: Vec<usize> = (0..50).map(|_| a.next_index(1000)).collect();
        let second: Vec<usize> = (0..50).map(|_| b.next_index(1000)).collect();
        assert_eq!(first, second);
        assert_eq!(a.seed(), Some(42));
    }

    #[test]
    fn test_seeded_random_stays_in_range() {
        let mut rng = SeededRandom::from_entropy();
        assert_eq!(rng.seed(), None);
        for _ in 0..500 {
            assert!(rng.next_index(6) < 6);
        }
        assert_eq!(rng.next_index(1), 0);
    }

    #[test]
    fn test_pick_reaches_every_index() {
        let mut rng = SeededRandom::from_seed(3);
        let mut seen = [false; 6];
        for _ in 0..600 {
            let index = rng.next_index(6);
            seen[index] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
