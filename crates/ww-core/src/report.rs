//! Report assembly and the output precision policy.
//!
//! Everything upstream computes at full precision; this is the single
//! boundary where numbers are rounded for the wire. Quantities carry 2
//! decimals, probabilities 4.

use ww_common::contract::{
    CadenceAnalysis, CadenceModel, Economics, EstimateReport, ModeTag, RateBreakdown,
    Recommendation, WaitEstimates,
};
use ww_math::round_places;

use crate::cadence::CadenceStatistics;
use crate::rate::{threshold_from_day, RateEstimate};
use crate::recommend::WaitRecommendation;
use crate::validate::{RateObservation, ThroughputModel, TimestampObservation};
use crate::waitmodel::WaitProfile;

/// Named rounding policy applied at the assembly boundary.
#[derive(Debug, Clone, Copy)]
pub struct Precision {
    /// Decimal places for minutes, rates, and money.
    pub quantities: u32,
    /// Decimal places for probabilities.
    pub probabilities: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Precision {
            quantities: 2,
            probabilities: 4,
        }
    }
}

impl Precision {
    pub fn qty(&self, value: f64) -> f64 {
        round_places(value, self.quantities)
    }

    pub fn prob(&self, value: f64) -> f64 {
        round_places(value, self.probabilities)
    }

    fn waits(&self, profile: &WaitProfile) -> WaitEstimates {
        WaitEstimates {
            mean_interval_between_winners: self.qty(profile.mean_interval),
            expected_wait_to_next_winner: self.qty(profile.expected_wait),
            p50_wait_to_next_winner: self.qty(profile.p50),
            p75_wait_to_next_winner: self.qty(profile.p75),
            p90_wait_to_next_winner: self.qty(profile.p90),
        }
    }

    fn recommendation(&self, rec: &WaitRecommendation) -> Recommendation {
        Recommendation {
            optimal_wait_minutes: self.qty(rec.optimal_wait),
            probability_next_winner_within_optimal_wait: self.prob(rec.probability),
            decision_rule: rec.decision_rule.to_string(),
            rationale: rec.rationale.clone(),
        }
    }

    fn economics(&self, econ: &Economics) -> Economics {
        Economics {
            expected_value_for_optimal_wait: self.qty(econ.expected_value_for_optimal_wait),
            expected_time_cost_for_optimal_wait: self
                .qty(econ.expected_time_cost_for_optimal_wait),
            net_expected_value_for_optimal_wait: self.qty(econ.net_expected_value_for_optimal_wait),
            value_expected_per_minute: self.qty(econ.value_expected_per_minute),
            break_even_wait_minutes: self.qty(econ.break_even_wait_minutes),
        }
    }
}

/// Assemble a purchase-rate report.
pub fn assemble_rate(
    obs: &RateObservation,
    est: &RateEstimate,
    profile: &WaitProfile,
    rec: &WaitRecommendation,
    economics: Option<Economics>,
) -> EstimateReport {
    let precision = Precision::default();

    let day_type = if obs.weekend_or_holiday {
        "weekend/holiday"
    } else {
        "weekday"
    };
    let mut assumptions = vec![format!(
        "One winner per {k} customers ({day_type} threshold).",
        k = est.k_threshold
    )];
    assumptions.push(match obs.model {
        ThroughputModel::Global => format!(
            "Global model: observed throughput scaled by lane factor {:.2}.",
            est.lane_scale
        ),
        ThroughputModel::PerLane => {
            "Per-lane model: throughput normalized to a single lane's own rate.".to_string()
        }
    });
    assumptions.push(format!(
        "Estimated rate discounted by a {:.0}% confidence buffer.",
        obs.confidence_buffer * 100.0
    ));
    assumptions.push(
        "Arrival position within the winner cycle is uniformly distributed.".to_string(),
    );

    EstimateReport {
        mode: ModeTag::PurchaseRate,
        k_threshold_clients: Some(est.k_threshold),
        probability_win_per_attempt: Some(precision.prob(est.win_probability_per_attempt())),
        assumptions,
        rates: Some(RateBreakdown {
            purchases_per_minute_observed: precision.qty(est.observed),
            purchases_per_minute_estimated: precision.qty(est.estimated),
            purchases_per_minute_conservative: precision.qty(est.conservative),
            lane_scale_factor: precision.qty(est.lane_scale),
        }),
        cadence_analysis: None,
        wait_estimates_minutes: precision.waits(profile),
        recommendation: precision.recommendation(rec),
        economics: economics.map(|e| precision.economics(&e)),
    }
}

/// Assemble a winner-timestamps report.
pub fn assemble_cadence(
    obs: &TimestampObservation,
    stats: &CadenceStatistics,
    profile: &WaitProfile,
    rec: &WaitRecommendation,
    economics: Option<Economics>,
) -> EstimateReport {
    let precision = Precision::default();

    let mut assumptions = vec![format!(
        "Cadence classified as {} (CV {:.2}).",
        stats.model, stats.cv
    )];
    assumptions.push(match stats.model {
        CadenceModel::Regular => {
            "Regular cadence: winners land on a tight cycle; the wait is the time left in it."
                .to_string()
        }
        CadenceModel::Random => {
            "Random cadence: gaps modeled as exponential (memoryless arrivals).".to_string()
        }
        CadenceModel::Mixed => {
            "Mixed cadence: regular and exponential estimates averaged field by field.".to_string()
        }
    });
    assumptions.push(format!(
        "{:.1} minutes counted since the last known winner.",
        obs.elapsed_since_last
    ));

    // K fields appear only when the caller supplied the day type.
    let k_threshold = obs.weekend_or_holiday.map(threshold_from_day);

    EstimateReport {
        mode: ModeTag::WinnerTimestamps,
        k_threshold_clients: k_threshold,
        probability_win_per_attempt: k_threshold
            .map(|k| precision.prob(1.0 / f64::from(k))),
        assumptions,
        rates: None,
        cadence_analysis: Some(CadenceAnalysis {
            intervals_minutes: stats
                .intervals
                .iter()
                .map(|&gap| precision.qty(gap))
                .collect(),
            interval_mean_minutes: precision.qty(stats.mean),
            interval_std_minutes: precision.qty(stats.std_dev),
            interval_cv: precision.qty(stats.cv),
            cadence_model: stats.model,
        }),
        wait_estimates_minutes: precision.waits(profile),
        recommendation: precision.recommendation(rec),
        economics: economics.map(|e| precision.economics(&e)),
    }
}
