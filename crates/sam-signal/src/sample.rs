//! Random sampling of series values
//!
//! Every function takes the random source as a parameter so callers can
//! pass a seeded generator for reproducible results, or `rand::rng()` for
//! the thread-local one.

use rand::{Rng, RngExt};
use sam_core::Series;

/// Keep each value independently with probability `p`
///
/// The result size is only approximately `p * len`. Returns an empty
/// series when `p` is outside `[0, 1]` (or NaN).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sam_core::Series;
/// use sam_signal::sample_by_percentage;
///
/// let s: Series = (0..100).map(f64::from).collect();
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(sample_by_percentage(&s, 1.0, &mut rng), s);
/// assert!(sample_by_percentage(&s, 1.5, &mut rng).is_empty());
/// ```
pub fn sample_by_percentage<R: Rng + ?Sized>(series: &Series, p: f64, rng: &mut R) -> Series {
    if !(0.0..=1.0).contains(&p) {
        tracing::debug!(p, "sampling probability outside [0, 1]");
        return Series::new();
    }
    bernoulli(series, p, rng)
}

/// Sample roughly `count` values
///
/// Returns the whole series when `count >= len`. Otherwise each value is
/// kept with probability `count / len`, so the result holds `count` values
/// only on average.
pub fn sample_by_count<R: Rng + ?Sized>(series: &Series, count: usize, rng: &mut R) -> Series {
    if count >= series.len() {
        return series.clone();
    }
    let p = count as f64 / series.len() as f64;
    bernoulli(series, p, rng)
}

/// A contiguous run of `length` values starting at a random position
///
/// Every start in `0..=len - length` is equally likely. Returns the whole
/// series when `length >= len` and an empty one when `length == 0`.
pub fn random_subsequence<R: Rng + ?Sized>(series: &Series, length: usize, rng: &mut R) -> Series {
    if length >= series.len() {
        return series.clone();
    }
    if length == 0 {
        return Series::new();
    }
    let start = rng.random_range(0..=series.len() - length);
    Series::from_slice(&series.as_slice()[start..start + length])
}

fn bernoulli<R: Rng + ?Sized>(series: &Series, p: f64, rng: &mut R) -> Series {
    series.iter().filter(|_| rng.random_bool(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ramp(n: usize) -> Series {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_percentage_bounds() {
        let s = ramp(50);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_by_percentage(&s, 0.0, &mut rng).is_empty());
        assert_eq!(sample_by_percentage(&s, 1.0, &mut rng), s);
        assert!(sample_by_percentage(&s, -0.1, &mut rng).is_empty());
        assert!(sample_by_percentage(&s, f64::NAN, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_preserves_order() {
        let s = ramp(200);
        let mut rng = StdRng::seed_from_u64(42);
        let sample = sample_by_percentage(&s, 0.5, &mut rng);
        assert!(sample.as_slice().windows(2).all(|w| w[0] < w[1]));
        assert!(sample.iter().all(|v| s.contains(v)));
    }

    #[test]
    fn test_count_at_least_len_is_identity() {
        let s = ramp(10);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(sample_by_count(&s, 10, &mut rng), s);
        assert_eq!(sample_by_count(&s, 25, &mut rng), s);
        assert!(sample_by_count(&s, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let s = ramp(100);
        let a = sample_by_count(&s, 30, &mut StdRng::seed_from_u64(9));
        let b = sample_by_count(&s, 30, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_subsequence_is_contiguous() {
        let s = ramp(20);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let sub = random_subsequence(&s, 4, &mut rng);
            assert_eq!(sub.len(), 4);
            assert!(sub.as_slice().windows(2).all(|w| w[1] - w[0] == 1.0));
        }
        assert_eq!(random_subsequence(&s, 20, &mut rng), s);
        assert_eq!(random_subsequence(&s, 99, &mut rng), s);
        assert!(random_subsequence(&s, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_random_subsequence_reaches_last_start() {
        let s = ramp(3);
        let mut rng = StdRng::seed_from_u64(5);
        let hit_end = (0..200).any(|_| random_subsequence(&s, 2, &mut rng).as_slice() == [1.0, 2.0]);
        assert!(hit_end);
    }
}
