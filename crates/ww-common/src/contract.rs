//! Request and report wire contract.
//!
//! A single JSON object comes in (`EstimateRequest`), a single JSON
//! object goes out (`EstimateReport`). All optional request fields stay
//! `Option` here; defaults and clamps are applied once at the
//! validation boundary in `ww-core`, never inside the algorithms.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Observation mode selector.
///
/// Unrecognized strings deserialize to [`ModeTag::Unknown`] so the
/// validator can reject them with a proper validation error instead of
/// a generic JSON parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ModeTag {
    /// Mode A: estimate the winner interval from checkout throughput.
    PurchaseRate,
    /// Mode B: estimate from directly observed winner timestamps.
    WinnerTimestamps,
    /// Any unsupported mode string; rejected by validation.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ModeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeTag::PurchaseRate => write!(f, "purchase_rate"),
            ModeTag::WinnerTimestamps => write!(f, "winner_timestamps"),
            ModeTag::Unknown => write!(f, "unknown"),
        }
    }
}

/// Raw estimation request as received on the wire.
///
/// Field requirements depend on `mode`; see the per-mode validation in
/// `ww-core`. Unknown extra fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EstimateRequest {
    /// Observation mode: `purchase_rate` or `winner_timestamps`.
    pub mode: Option<ModeTag>,

    /// Day type; selects the winner threshold K (50 weekend/holiday, 25
    /// weekday). Required in purchase-rate mode, optional in timestamp
    /// mode (where it only adds the K fields to the report).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_weekend_or_holiday: Option<bool>,

    /// Throughput model for purchase-rate mode: `global` or `per_lane`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Purchases counted during the observation window (> 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_purchases: Option<f64>,

    /// Length of the observation window in minutes (> 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_minutes: Option<f64>,

    /// Number of lanes covered by the observation (> 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_lanes: Option<f64>,

    /// Total open lanes in the store, for global-model extrapolation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_open_lanes: Option<f64>,

    /// Haircut applied to the estimated rate; clamped to [0, 0.9],
    /// default 0.2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_buffer: Option<f64>,

    /// Observed winner announcement times, `HH:MM[:SS]` or full
    /// date-times; at least 2 entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_timestamps: Option<Vec<String>>,

    /// Minutes since the last known winner; floored at 0, default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_since_last_winner_minutes: Option<f64>,

    /// Desired probability of seeing a winner within the recommended
    /// wait; clamped to [0.5, 0.99], default 0.75.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_hit_probability: Option<f64>,

    /// Hard cap on the recommended wait; floored at 1, default 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_wait_minutes: Option<f64>,

    /// Value of the observer's time, for the economics overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_value_per_minute: Option<f64>,

    /// Expected value of winning, for the economics overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_bonus_value: Option<f64>,
}

/// Cadence regularity classes, a pure step function of the coefficient
/// of variation of the observed gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CadenceModel {
    /// CV < 0.4: winners land on a tight cycle.
    Regular,
    /// 0.4 <= CV <= 0.7: between the two; estimates are blended.
    Mixed,
    /// CV > 0.7: gaps look memoryless.
    Random,
}

impl std::fmt::Display for CadenceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CadenceModel::Regular => write!(f, "regular"),
            CadenceModel::Mixed => write!(f, "mixed"),
            CadenceModel::Random => write!(f, "random"),
        }
    }
}

/// Purchase-rate breakdown (mode A only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RateBreakdown {
    /// Raw observed throughput.
    pub purchases_per_minute_observed: f64,
    /// Throughput after lane scaling.
    pub purchases_per_minute_estimated: f64,
    /// Estimated throughput after the confidence haircut.
    pub purchases_per_minute_conservative: f64,
    /// Extrapolation factor applied under the global model (1 when not
    /// extrapolating).
    pub lane_scale_factor: f64,
}

/// Interval statistics and classification (mode B only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CadenceAnalysis {
    /// Gaps between consecutive winners, in minutes.
    pub intervals_minutes: Vec<f64>,
    /// Sample mean of the gaps.
    pub interval_mean_minutes: f64,
    /// Bessel-corrected sample standard deviation.
    pub interval_std_minutes: f64,
    /// Coefficient of variation (std / mean).
    pub interval_cv: f64,
    /// Classification derived from the CV.
    pub cadence_model: CadenceModel,
}

/// Wait summary under the selected distribution model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WaitEstimates {
    /// Mean gap between winners.
    pub mean_interval_between_winners: f64,
    /// Expected wait from now to the next winner.
    pub expected_wait_to_next_winner: f64,
    /// Median wait.
    pub p50_wait_to_next_winner: f64,
    /// 75th percentile wait.
    pub p75_wait_to_next_winner: f64,
    /// 90th percentile wait.
    pub p90_wait_to_next_winner: f64,
}

/// The actionable outcome: how long to wait and with what confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    /// Recommended wait, clamped to the configured bounds.
    pub optimal_wait_minutes: f64,
    /// Probability a winner is announced within that wait.
    pub probability_next_winner_within_optimal_wait: f64,
    /// What to do if the wait expires without a winner.
    pub decision_rule: String,
    /// Ordered notes explaining how the wait was derived.
    pub rationale: Vec<String>,
}

/// Cost/benefit overlay, present only when both monetary inputs were
/// supplied and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Economics {
    /// P(success) x expected bonus value.
    pub expected_value_for_optimal_wait: f64,
    /// Recommended wait x time value per minute.
    pub expected_time_cost_for_optimal_wait: f64,
    /// Expected value minus time cost.
    pub net_expected_value_for_optimal_wait: f64,
    /// Bonus value spread over one mean interval.
    pub value_expected_per_minute: f64,
    /// Wait at which expected bonus equals time cost, capped at the max
    /// wait.
    pub break_even_wait_minutes: f64,
}

/// Full estimation report.
///
/// Serialized field order is fixed, so identical requests produce
/// byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EstimateReport {
    /// Mode the estimate was computed under.
    pub mode: ModeTag,

    /// Winner threshold K (25 weekday, 50 weekend/holiday). Always
    /// present in mode A; present in mode B only when the day type was
    /// supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k_threshold_clients: Option<u32>,

    /// Per-customer win probability, 1/K.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability_win_per_attempt: Option<f64>,

    /// Ordered modeling assumptions behind the numbers.
    pub assumptions: Vec<String>,

    /// Mode A rate breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<RateBreakdown>,

    /// Mode B cadence analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_analysis: Option<CadenceAnalysis>,

    /// Wait summary under the selected distribution model.
    pub wait_estimates_minutes: WaitEstimates,

    /// The actionable recommendation.
    pub recommendation: Recommendation,

    /// Optional cost/benefit overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economics: Option<Economics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_tag_roundtrip() {
        let tag: ModeTag = serde_json::from_str("\"purchase_rate\"").unwrap();
        assert_eq!(tag, ModeTag::PurchaseRate);
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"purchase_rate\"");
    }

    #[test]
    fn unknown_mode_string_maps_to_unknown() {
        let tag: ModeTag = serde_json::from_str("\"coin_flip\"").unwrap();
        assert_eq!(tag, ModeTag::Unknown);
    }

    #[test]
    fn request_ignores_extra_fields() {
        let req: EstimateRequest = serde_json::from_str(
            r#"{"mode":"winner_timestamps","winner_timestamps":["12:00","12:30"],"comment":"hi"}"#,
        )
        .unwrap();
        assert_eq!(req.mode, Some(ModeTag::WinnerTimestamps));
        assert_eq!(req.winner_timestamps.as_deref().map(<[String]>::len), Some(2));
    }

    #[test]
    fn request_missing_mode_is_parseable() {
        // Presence of the mode is a validation concern, not a parse one.
        let req: EstimateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.mode, None);
    }

    #[test]
    fn optional_report_blocks_are_omitted() {
        let report = EstimateReport {
            mode: ModeTag::PurchaseRate,
            k_threshold_clients: None,
            probability_win_per_attempt: None,
            assumptions: vec![],
            rates: None,
            cadence_analysis: None,
            wait_estimates_minutes: WaitEstimates {
                mean_interval_between_winners: 1.0,
                expected_wait_to_next_winner: 0.5,
                p50_wait_to_next_winner: 0.5,
                p75_wait_to_next_winner: 0.75,
                p90_wait_to_next_winner: 0.9,
            },
            recommendation: Recommendation {
                optimal_wait_minutes: 1.0,
                probability_next_winner_within_optimal_wait: 1.0,
                decision_rule: String::new(),
                rationale: vec![],
            },
            economics: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("economics"));
        assert!(!json.contains("cadence_analysis"));
        assert!(!json.contains("k_threshold_clients"));
    }
}
