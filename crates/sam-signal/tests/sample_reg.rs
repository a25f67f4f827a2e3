//! Windowing and sampling regression test
//!
//! Window boundaries, window counts and seeded random sampling.

use rand::SeedableRng;
use rand::rngs::StdRng;
use sam_core::Series;
use sam_signal::{
    consecutive_windows, overlapping_windows, random_subsequence, sample_by_count,
    sample_by_percentage, windows,
};
use sam_test::RegParams;

fn ramp(n: usize) -> Series {
    (0..n).map(|i| i as f64).collect()
}

// ========================================================================
// Test: Windows
// ========================================================================

#[test]
fn sample_reg_windows() {
    let mut rp = RegParams::new("sample_windows");

    let s = ramp(30);

    // Consecutive windows never overlap
    let consecutive: Vec<&[f64]> = consecutive_windows(&s, 4).unwrap().collect();
    rp.compare_values(5.0, consecutive.len() as f64, 0.0);
    for pair in consecutive.windows(2) {
        rp.compare_values(pair[0][3] + 1.0, pair[1][0], 0.0);
    }

    // Overlapping windows advance one value at a time after the lead-in
    let overlapping: Vec<&[f64]> = overlapping_windows(&s, 4).unwrap().collect();
    rp.compare_values(22.0, overlapping.len() as f64, 0.0);
    rp.compare_values(5.0, overlapping[0][0], 0.0);
    rp.compare_values(29.0, overlapping[21][3], 0.0);
    assert!(overlapping.iter().all(|w| w.len() == 4));
    assert!(overlapping.len() <= s.len() - 4);

    let strided: Vec<&[f64]> = windows(&s, 3, 5).unwrap().collect();
    let starts: Vec<f64> = strided.iter().map(|w| w[0]).collect();
    rp.compare_series(&[8.0, 13.0, 18.0, 23.0], &Series::from_vec(starts), 0.0);

    assert!(windows(&s, 0, 2).is_err());
    assert!(rp.cleanup(), "sample_windows regression test failed");
}

// ========================================================================
// Test: Sampling
// ========================================================================

#[test]
fn sample_reg_sampling() {
    let mut rp = RegParams::new("sample_sampling");

    let s = ramp(1000);
    let mut rng = StdRng::seed_from_u64(2024);

    // Full-size requests are exact regardless of the draws
    rp.compare_series(s.as_slice(), &sample_by_count(&s, 1000, &mut rng), 0.0);
    rp.compare_series(s.as_slice(), &sample_by_percentage(&s, 1.0, &mut rng), 0.0);
    rp.compare_values(0.0, sample_by_percentage(&s, 2.0, &mut rng).len() as f64, 0.0);

    // Bernoulli samples are approximately sized
    let half = sample_by_percentage(&s, 0.5, &mut rng);
    rp.compare_values(500.0, half.len() as f64, 100.0);
    let hundred = sample_by_count(&s, 100, &mut rng);
    rp.compare_values(100.0, hundred.len() as f64, 50.0);

    // Same seed, same sample
    let a = sample_by_percentage(&s, 0.3, &mut StdRng::seed_from_u64(17));
    let b = sample_by_percentage(&s, 0.3, &mut StdRng::seed_from_u64(17));
    rp.compare_series(a.as_slice(), &b, 0.0);

    let sub = random_subsequence(&s, 10, &mut rng);
    rp.compare_values(10.0, sub.len() as f64, 0.0);
    let first = sub.get(0).unwrap_or(-1.0);
    let expected: Vec<f64> = (0..10).map(|i| first + i as f64).collect();
    rp.compare_series(&expected, &sub, 0.0);

    assert!(rp.cleanup(), "sample_sampling regression test failed");
}
