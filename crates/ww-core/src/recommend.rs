//! The bounded recommendation policy.
//!
//! Turns a wait distribution into one actionable number: how long to
//! actually stand there. The wait is clamped to the configured bounds,
//! and the success probability is evaluated against the same
//! distribution, so the probability equals the target exactly whenever
//! no bound binds.

use ww_common::contract::CadenceModel;
use ww_math::{clamp, exponential_cdf, exponential_quantile, uniform_cdf, EPSILON};

/// What to do when a purchase-rate wait expires without a winner.
pub const RATE_DECISION_RULE: &str =
    "If no winner is announced within this wait, take a fresh 2-minute observation and recompute.";

/// What to do when a timestamp-mode wait expires without a winner.
pub const CADENCE_DECISION_RULE: &str =
    "If no winner is announced before the cutoff, record 2-3 more timestamps and recompute.";

/// A bounded wait with its success probability and derivation notes.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitRecommendation {
    /// Minutes to wait, clamped to the mode's bounds.
    pub optimal_wait: f64,
    /// Probability a winner lands within `optimal_wait`.
    pub probability: f64,
    /// Fixed policy text for the caller.
    pub decision_rule: &'static str,
    /// Ordered notes on how the wait was derived.
    pub rationale: Vec<String>,
}

/// Mode A policy: target percentile of the uniform cycle, clamped to
/// `[1, max_wait]`.
pub fn for_purchase_rate(mean_interval: f64, target: f64, max_wait: f64) -> WaitRecommendation {
    let raw_wait = mean_interval * target;
    let optimal_wait = clamp(raw_wait, 1.0, max_wait);
    let probability = uniform_cdf(mean_interval, optimal_wait);

    let mut rationale = vec![format!(
        "Wait targets a {:.0}% chance of the next winner landing inside it.",
        target * 100.0
    )];
    if raw_wait > max_wait {
        rationale.push(format!(
            "Capped at the {max_wait:.0}-minute maximum wait; success probability drops below the target."
        ));
    } else if raw_wait < 1.0 {
        rationale.push("Raised to the 1-minute minimum useful wait.".to_string());
    }

    WaitRecommendation {
        optimal_wait,
        probability,
        decision_rule: RATE_DECISION_RULE,
        rationale,
    }
}

/// Mode B policy: base wait per cadence class, clamped to
/// `[0, max_wait]`.
pub fn for_cadence(
    model: CadenceModel,
    mean: f64,
    elapsed: f64,
    target: f64,
    max_wait: f64,
) -> WaitRecommendation {
    let remaining = (mean - elapsed).max(0.0);
    let random_wait = exponential_quantile(mean, target);

    let base_wait = match model {
        CadenceModel::Regular => remaining,
        CadenceModel::Random => random_wait,
        CadenceModel::Mixed => (remaining + random_wait) / 2.0,
    };
    let optimal_wait = clamp(base_wait, 0.0, max_wait);

    // A cycle that is already due counts as certain under the regular
    // model.
    let regular_probability = if remaining <= EPSILON {
        1.0
    } else {
        clamp(optimal_wait / remaining, 0.0, 1.0)
    };
    let random_probability = exponential_cdf(mean, optimal_wait);
    let probability = match model {
        CadenceModel::Regular => regular_probability,
        CadenceModel::Random => random_probability,
        CadenceModel::Mixed => (regular_probability + random_probability) / 2.0,
    };

    let mut rationale = vec![match model {
        CadenceModel::Regular => {
            "Regular cadence: wait covers the remainder of the current cycle.".to_string()
        }
        CadenceModel::Random => format!(
            "Random cadence: wait is the exponential {:.0}% quantile of the mean gap.",
            target * 100.0
        ),
        CadenceModel::Mixed => {
            "Mixed cadence: wait averages the regular and random estimates.".to_string()
        }
    }];
    if base_wait > max_wait {
        rationale.push(format!(
            "Capped at the {max_wait:.0}-minute maximum wait."
        ));
    }

    WaitRecommendation {
        optimal_wait,
        probability,
        decision_rule: CADENCE_DECISION_RULE,
        rationale,
    }
}
