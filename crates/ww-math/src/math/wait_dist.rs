//! Wait-time distributions for arrival into a recurring event cycle.
//!
//! Two base models cover the cadence spectrum:
//!
//! - **Uniform-remaining**: the observer arrives at a uniformly random
//!   point inside a cycle of length `m`. Remaining wait is Uniform(0, m):
//!   expected wait `m/2`, percentile-p wait `p * m`.
//! - **Exponential**: arrivals are memoryless with mean gap `m`:
//!   expected wait `m`, percentile-p wait `-m * ln(1 - p)`.
//!
//! Degenerate cycles (`m <= 0`) saturate the CDFs at 1 rather than
//! erroring; the caller has already floored its rates at epsilon.

use crate::math::stable::clamp;

/// P(wait <= `wait`) when the remaining time is Uniform(0, `cycle`).
pub fn uniform_cdf(cycle: f64, wait: f64) -> f64 {
    if cycle <= 0.0 {
        return 1.0;
    }
    clamp(wait / cycle, 0.0, 1.0)
}

/// Percentile-`p` wait under the uniform-remaining model.
pub fn uniform_quantile(cycle: f64, p: f64) -> f64 {
    p * cycle
}

/// P(wait <= `wait`) under an exponential gap with the given mean.
pub fn exponential_cdf(mean: f64, wait: f64) -> f64 {
    if mean <= 0.0 {
        return 1.0;
    }
    1.0 - (-wait / mean).exp()
}

/// Percentile-`p` wait under an exponential gap with the given mean.
///
/// Defined for `p` in [0, 1); the validator clamps target probabilities
/// to [0.5, 0.99] well inside that range.
pub fn exponential_quantile(mean: f64, p: f64) -> f64 {
    -mean * (1.0 - p).ln()
}
