//! Sample statistics over inter-event gaps.

use serde::{Deserialize, Serialize};

use crate::math::stable::floor_eps;

/// Mean, spread, and relative spread of a sample.
///
/// The standard deviation is Bessel-corrected (divisor n-1) and defined
/// as 0 when the sample has fewer than two values. The coefficient of
/// variation divides by the epsilon-floored mean so a flat sample never
/// produces NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n-1).
    pub std_dev: f64,
    /// Coefficient of variation: std_dev / max(mean, epsilon).
    pub cv: f64,
}

/// Summarize a sample. An empty sample yields all zeros.
pub fn summarize(values: &[f64]) -> SampleSummary {
    if values.is_empty() {
        return SampleSummary {
            mean: 0.0,
            std_dev: 0.0,
            cv: 0.0,
        };
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std_dev = if values.len() < 2 {
        0.0
    } else {
        let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1.0)).sqrt()
    };
    let cv = std_dev / floor_eps(mean);
    SampleSummary { mean, std_dev, cv }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn empty_sample_is_all_zero() {
        let s = summarize(&[]);
        assert_eq!(s.mean, 0.0);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.cv, 0.0);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let s = summarize(&[17.5]);
        assert_eq!(s.mean, 17.5);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.cv, 0.0);
    }

    #[test]
    fn bessel_corrected_std() {
        // Known sample: mean 2, variance (n-1 divisor) 1.
        let s = summarize(&[1.0, 2.0, 3.0]);
        assert!(approx_eq(s.mean, 2.0, 1e-12));
        assert!(approx_eq(s.std_dev, 1.0, 1e-12));
        assert!(approx_eq(s.cv, 0.5, 1e-12));
    }

    #[test]
    fn observed_winner_gaps() {
        // The three gaps from the 12:10:15..13:02:20 announcement run.
        let s = summarize(&[17.416_666_666, 18.416_666_666, 16.25]);
        assert!(approx_eq(s.mean, 17.361_111, 1e-5));
        assert!(approx_eq(s.cv, 0.062_5, 1e-3));
    }

    #[test]
    fn flat_sample_cv_stays_finite() {
        let s = summarize(&[0.0, 0.0, 0.0]);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.cv, 0.0);
    }
}
