//! Parametric wait profiles over a mean winner interval.
//!
//! A `WaitProfile` is the distilled answer to "how long from now until
//! the next winner": the mean gap, the expected wait, and three
//! percentile waits. Four constructions cover the cadence spectrum:
//!
//! - `uniform_cycle`: arriving at a random point in a cycle (mode A,
//!   and the backbone of the regular cadence);
//! - `exponential`: memoryless gaps (random cadence);
//! - `regular_remaining`: a tight cycle with a known elapsed time, so
//!   the wait is simply the remainder, with no spread assumed;
//! - `blend`: the field-by-field average of two profiles, used for the
//!   mixed cadence. This deliberately simple average is the documented
//!   contract for intermediate CV, not a fitted mixture.

use ww_common::contract::CadenceModel;
use ww_math::{exponential_quantile, uniform_quantile};

/// Wait summary under one distributional assumption. All fields in
/// minutes, unrounded; the report assembler applies output precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitProfile {
    pub mean_interval: f64,
    pub expected_wait: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
}

impl WaitProfile {
    /// Uniform arrival position in a cycle of length `mean`: expected
    /// remaining wait `mean/2`, percentile-p wait `p * mean`.
    pub fn uniform_cycle(mean: f64) -> Self {
        WaitProfile {
            mean_interval: mean,
            expected_wait: mean / 2.0,
            p50: uniform_quantile(mean, 0.5),
            p75: uniform_quantile(mean, 0.75),
            p90: uniform_quantile(mean, 0.9),
        }
    }

    /// Memoryless gaps with the given mean: expected wait `mean`,
    /// percentile-p wait `-mean * ln(1-p)`.
    pub fn exponential(mean: f64) -> Self {
        WaitProfile {
            mean_interval: mean,
            expected_wait: mean,
            p50: exponential_quantile(mean, 0.5),
            p75: exponential_quantile(mean, 0.75),
            p90: exponential_quantile(mean, 0.9),
        }
    }

    /// Tight cycle with `elapsed` minutes already spent: the remaining
    /// time is replicated across all percentiles (no spread once the
    /// cadence is known to be tight).
    pub fn regular_remaining(mean: f64, elapsed: f64) -> Self {
        let remaining = (mean - elapsed).max(0.0);
        WaitProfile {
            mean_interval: mean,
            expected_wait: remaining,
            p50: remaining,
            p75: remaining,
            p90: remaining,
        }
    }

    /// Field-by-field arithmetic mean of two profiles.
    pub fn blend(a: &WaitProfile, b: &WaitProfile) -> Self {
        WaitProfile {
            mean_interval: (a.mean_interval + b.mean_interval) / 2.0,
            expected_wait: (a.expected_wait + b.expected_wait) / 2.0,
            p50: (a.p50 + b.p50) / 2.0,
            p75: (a.p75 + b.p75) / 2.0,
            p90: (a.p90 + b.p90) / 2.0,
        }
    }

    /// Profile for a classified cadence.
    pub fn for_cadence(model: CadenceModel, mean: f64, elapsed: f64) -> Self {
        match model {
            CadenceModel::Regular => WaitProfile::regular_remaining(mean, elapsed),
            CadenceModel::Random => WaitProfile::exponential(mean),
            CadenceModel::Mixed => WaitProfile::blend(
                &WaitProfile::regular_remaining(mean, elapsed),
                &WaitProfile::exponential(mean),
            ),
        }
    }
}
