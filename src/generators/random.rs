// src/generators/random.rs
use rand::distributions::{Distribution, Uniform};
use rand_core::RngCore;

/// Source of uniform draws for the generator.
///
/// Any [`RngCore`] qualifies, so production code passes `rand::thread_rng()`
/// and tests pass a seeded `ChaCha20Rng`.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn bounded(&mut self, n: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn bounded(&mut self, n: usize) -> usize {
        Uniform::from(0..n).sample(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_bounded_stays_in_range() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for n in 1..50 {
            for _ in 0..20 {
                assert!(rng.bounded(n) < n);
            }
        }
    }

    #[test]
    fn test_bounded_one_is_always_zero() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            assert_eq!(rng.bounded(1), 0);
        }
    }

    #[test]
    fn test_bounded_covers_every_value() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut seen = [0usize; 6];
        for _ in 0..6000 {
            seen[rng.bounded(6)] += 1;
        }
        // Each bucket expects ~1000
        for count in seen {
            assert!(count > 800 && count < 1200, "skewed bucket: {}", count);
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = ChaCha20Rng::seed_from_u64(99);
        let mut b = ChaCha20Rng::seed_from_u64(99);
        let left: Vec<usize> = (0..32).map(|_| a.bounded(1000)).collect();
        let right: Vec<usize> = (0..32).map(|_| b.bounded(1000)).collect();
        assert_eq!(left, right);
    }
}
