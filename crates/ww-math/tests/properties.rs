//! Property-based tests for ww-math numerical functions.
//!
//! Uses proptest to verify the guarded-arithmetic and distribution
//! invariants hold across many random inputs.

use proptest::prelude::*;
use ww_math::{
    clamp, exponential_cdf, exponential_quantile, floor_eps, round_places, summarize, uniform_cdf,
    uniform_quantile, EPSILON,
};

/// Tolerance for floating point comparisons.
const TOL: f64 = 1e-9;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// clamp always lands inside the requested interval.
    #[test]
    fn clamp_stays_in_bounds(v in -1e6..1e6f64, lo in -100.0..0.0f64, hi in 0.0..100.0f64) {
        let c = clamp(v, lo, hi);
        prop_assert!(c >= lo && c <= hi, "clamp({}, {}, {}) = {}", v, lo, hi, c);
    }

    /// clamp is the identity inside the interval.
    #[test]
    fn clamp_identity_inside(v in 0.0..1.0f64) {
        prop_assert_eq!(clamp(v, 0.0, 1.0), v);
    }

    /// floor_eps never returns a value unusable as a divisor.
    #[test]
    fn floor_eps_is_positive(v in -1e6..1e6f64) {
        let f = floor_eps(v);
        prop_assert!(f >= EPSILON);
        prop_assert!((1.0 / f).is_finite());
    }

    /// round_places is idempotent.
    #[test]
    fn round_places_idempotent(v in -1e6..1e6f64, places in 0u32..6) {
        let once = round_places(v, places);
        let twice = round_places(once, places);
        prop_assert!((once - twice).abs() <= TOL, "round({}, {}) not idempotent", v, places);
    }

    /// round_places stays within half a unit in the last place.
    #[test]
    fn round_places_close_to_input(v in -1e6..1e6f64, places in 0u32..6) {
        let rounded = round_places(v, places);
        let half_ulp = 0.5 / 10f64.powi(places as i32);
        prop_assert!((rounded - v).abs() <= half_ulp + TOL);
    }

    /// Both CDFs are probabilities.
    #[test]
    fn cdfs_are_probabilities(scale in -10.0..1000.0f64, wait in -10.0..1000.0f64) {
        let u = uniform_cdf(scale, wait);
        let e = exponential_cdf(scale, wait.max(0.0));
        prop_assert!((0.0..=1.0).contains(&u), "uniform_cdf = {}", u);
        prop_assert!((0.0..=1.0).contains(&e), "exponential_cdf = {}", e);
    }

    /// CDFs are monotone in the wait.
    #[test]
    fn cdfs_monotone_in_wait(scale in 0.1..1000.0f64, a in 0.0..500.0f64, extra in 0.0..500.0f64) {
        let b = a + extra;
        prop_assert!(uniform_cdf(scale, b) >= uniform_cdf(scale, a) - TOL);
        prop_assert!(exponential_cdf(scale, b) >= exponential_cdf(scale, a) - TOL);
    }

    /// Quantiles invert their CDFs on the valid target range.
    #[test]
    fn quantiles_invert_cdfs(scale in 0.1..1000.0f64, p in 0.5..0.99f64) {
        let uw = uniform_quantile(scale, p);
        let ew = exponential_quantile(scale, p);
        prop_assert!((uniform_cdf(scale, uw) - p).abs() <= 1e-9);
        prop_assert!((exponential_cdf(scale, ew) - p).abs() <= 1e-9);
        prop_assert!(uw >= 0.0 && ew >= 0.0);
    }

    /// The exponential quantile dominates the uniform one at the same
    /// target: -ln(1-p) > p for all p in (0, 1).
    #[test]
    fn exponential_waits_dominate_uniform(scale in 0.1..1000.0f64, p in 0.5..0.99f64) {
        prop_assert!(exponential_quantile(scale, p) >= uniform_quantile(scale, p));
    }

    /// Summary statistics: std is non-negative, CV finite, mean bounded
    /// by the sample extremes.
    #[test]
    fn summary_invariants(values in prop::collection::vec(0.01..1e4f64, 1..40)) {
        let s = summarize(&values);
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(s.std_dev >= 0.0);
        prop_assert!(s.cv.is_finite());
        prop_assert!(s.mean >= min - TOL && s.mean <= max + TOL);
    }

    /// Shifting a sample changes the mean but not the spread.
    #[test]
    fn summary_shift_invariance(values in prop::collection::vec(0.01..1e3f64, 2..40), shift in 1.0..1e3f64) {
        let shifted: Vec<f64> = values.iter().map(|v| v + shift).collect();
        let a = summarize(&values);
        let b = summarize(&shifted);
        prop_assert!((b.mean - (a.mean + shift)).abs() <= 1e-6);
        prop_assert!((b.std_dev - a.std_dev).abs() <= 1e-6);
        // CV shrinks when the mean grows with constant spread.
        prop_assert!(b.cv <= a.cv + 1e-9);
    }
}
