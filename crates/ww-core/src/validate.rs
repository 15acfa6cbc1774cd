//! Per-mode request validation.
//!
//! The wire request carries every field as an `Option`; this module is
//! the single place where presence is checked, defaults are filled in,
//! and soft bounds are clamped. The algorithms downstream only ever see
//! fully-populated observations. Validation fails fast on the first
//! violated constraint and never partially validates.

use ww_common::contract::{EstimateRequest, ModeTag};
use ww_common::error::{Error, Result};
use ww_math::clamp;

/// Default haircut applied to the estimated purchase rate.
pub const DEFAULT_CONFIDENCE_BUFFER: f64 = 0.2;
/// Default probability target for the recommended wait.
pub const DEFAULT_TARGET_PROBABILITY: f64 = 0.75;
/// Default cap on the recommended wait, in minutes.
pub const DEFAULT_MAX_WAIT_MINUTES: f64 = 30.0;

/// How an observed checkout rate extends to the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThroughputModel {
    /// Extrapolate the observed lanes to all open lanes.
    Global,
    /// Normalize to a single lane's own rate.
    PerLane,
}

impl std::fmt::Display for ThroughputModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThroughputModel::Global => write!(f, "global"),
            ThroughputModel::PerLane => write!(f, "per_lane"),
        }
    }
}

/// Monetary inputs for the economics overlay. Only constructed when
/// both values were supplied and non-negative; otherwise the overlay is
/// skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicInputs {
    pub bonus_value: f64,
    pub value_per_minute: f64,
}

/// A validated mode A observation with all defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RateObservation {
    pub weekend_or_holiday: bool,
    pub model: ThroughputModel,
    pub purchases: f64,
    pub minutes: f64,
    pub lanes: f64,
    pub total_open_lanes: Option<f64>,
    pub confidence_buffer: f64,
    pub target_probability: f64,
    pub max_wait: f64,
    pub economics: Option<EconomicInputs>,
}

/// A validated mode B observation with all defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TimestampObservation {
    pub timestamps: Vec<String>,
    pub elapsed_since_last: f64,
    /// Only affects whether the K-threshold fields appear in the report.
    pub weekend_or_holiday: Option<bool>,
    pub target_probability: f64,
    pub max_wait: f64,
    pub economics: Option<EconomicInputs>,
}

/// The per-mode tagged union the engine operates on.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    Rate(RateObservation),
    Timestamps(TimestampObservation),
}

/// Validate a raw request into a per-mode observation.
pub fn validate(request: &EstimateRequest) -> Result<Observation> {
    match request.mode {
        Some(ModeTag::PurchaseRate) => validate_rate(request).map(Observation::Rate),
        Some(ModeTag::WinnerTimestamps) => {
            validate_timestamps(request).map(Observation::Timestamps)
        }
        Some(ModeTag::Unknown) => Err(Error::UnknownMode),
        None => Err(Error::MissingField { field: "mode" }),
    }
}

fn require(value: Option<f64>, field: &'static str) -> Result<f64> {
    value.ok_or(Error::MissingField { field })
}

fn require_positive(value: Option<f64>, field: &'static str) -> Result<f64> {
    let v = require(value, field)?;
    // `!(v > 0)` also rejects NaN from programmatic callers.
    if !(v > 0.0) || !v.is_finite() {
        return Err(Error::OutOfRange {
            field,
            reason: format!("must be a positive finite number, got {v}"),
        });
    }
    Ok(v)
}

/// Shared soft-bounded fields: clamped rather than rejected.
fn target_probability(request: &EstimateRequest) -> f64 {
    clamp(
        request
            .target_hit_probability
            .unwrap_or(DEFAULT_TARGET_PROBABILITY),
        0.5,
        0.99,
    )
}

fn max_wait(request: &EstimateRequest) -> f64 {
    request
        .max_wait_minutes
        .unwrap_or(DEFAULT_MAX_WAIT_MINUTES)
        .max(1.0)
}

/// The overlay activates only when both monetary inputs are present and
/// non-negative; a negative value disables it rather than erroring.
fn economics(request: &EstimateRequest) -> Option<EconomicInputs> {
    match (request.expected_bonus_value, request.time_value_per_minute) {
        (Some(bonus_value), Some(value_per_minute))
            if bonus_value >= 0.0 && value_per_minute >= 0.0 =>
        {
            Some(EconomicInputs {
                bonus_value,
                value_per_minute,
            })
        }
        _ => None,
    }
}

fn validate_rate(request: &EstimateRequest) -> Result<RateObservation> {
    let weekend_or_holiday = request
        .is_weekend_or_holiday
        .ok_or(Error::MissingField {
            field: "is_weekend_or_holiday",
        })?;

    let model = match request.model.as_deref() {
        None => return Err(Error::MissingField { field: "model" }),
        Some("global") => ThroughputModel::Global,
        Some("per_lane") => ThroughputModel::PerLane,
        Some(other) => {
            return Err(Error::OutOfRange {
                field: "model",
                reason: format!("must be 'global' or 'per_lane', got {other:?}"),
            })
        }
    };

    let purchases = require_positive(request.observed_purchases, "observed_purchases")?;
    let minutes = require_positive(request.observed_minutes, "observed_minutes")?;
    let lanes = require_positive(request.observed_lanes, "observed_lanes")?;

    Ok(RateObservation {
        weekend_or_holiday,
        model,
        purchases,
        minutes,
        lanes,
        total_open_lanes: request.total_open_lanes,
        confidence_buffer: clamp(
            request
                .confidence_buffer
                .unwrap_or(DEFAULT_CONFIDENCE_BUFFER),
            0.0,
            0.9,
        ),
        target_probability: target_probability(request),
        max_wait: max_wait(request),
        economics: economics(request),
    })
}

fn validate_timestamps(request: &EstimateRequest) -> Result<TimestampObservation> {
    let timestamps = request
        .winner_timestamps
        .as_ref()
        .ok_or(Error::MissingField {
            field: "winner_timestamps",
        })?;
    if timestamps.len() < 2 {
        return Err(Error::TooFewTimestamps {
            count: timestamps.len(),
        });
    }

    Ok(TimestampObservation {
        timestamps: timestamps.clone(),
        elapsed_since_last: request
            .elapsed_since_last_winner_minutes
            .unwrap_or(0.0)
            .max(0.0),
        weekend_or_holiday: request.is_weekend_or_holiday,
        target_probability: target_probability(request),
        max_wait: max_wait(request),
        economics: economics(request),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate_request() -> EstimateRequest {
        EstimateRequest {
            mode: Some(ModeTag::PurchaseRate),
            is_weekend_or_holiday: Some(true),
            model: Some("global".into()),
            observed_purchases: Some(5.0),
            observed_minutes: Some(2.0),
            observed_lanes: Some(5.0),
            total_open_lanes: Some(15.0),
            ..Default::default()
        }
    }

    fn timestamp_request() -> EstimateRequest {
        EstimateRequest {
            mode: Some(ModeTag::WinnerTimestamps),
            winner_timestamps: Some(vec!["12:00".into(), "12:20".into()]),
            ..Default::default()
        }
    }

    #[test]
    fn missing_mode_is_named() {
        let err = validate(&EstimateRequest::default()).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "mode" }));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let request = EstimateRequest {
            mode: Some(ModeTag::Unknown),
            ..Default::default()
        };
        assert!(matches!(validate(&request).unwrap_err(), Error::UnknownMode));
    }

    #[test]
    fn rate_defaults_are_applied() {
        let obs = match validate(&rate_request()).unwrap() {
            Observation::Rate(obs) => obs,
            other => panic!("expected rate observation, got {other:?}"),
        };
        assert_eq!(obs.confidence_buffer, DEFAULT_CONFIDENCE_BUFFER);
        assert_eq!(obs.target_probability, DEFAULT_TARGET_PROBABILITY);
        assert_eq!(obs.max_wait, DEFAULT_MAX_WAIT_MINUTES);
        assert_eq!(obs.economics, None);
    }

    #[test]
    fn soft_bounds_are_clamped_not_rejected() {
        let request = EstimateRequest {
            confidence_buffer: Some(2.0),
            target_hit_probability: Some(0.1),
            max_wait_minutes: Some(0.0),
            ..rate_request()
        };
        let obs = match validate(&request).unwrap() {
            Observation::Rate(obs) => obs,
            other => panic!("expected rate observation, got {other:?}"),
        };
        assert_eq!(obs.confidence_buffer, 0.9);
        assert_eq!(obs.target_probability, 0.5);
        assert_eq!(obs.max_wait, 1.0);
    }

    #[test]
    fn first_missing_rate_field_is_reported() {
        let request = EstimateRequest {
            model: None,
            observed_purchases: None,
            ..rate_request()
        };
        let err = validate(&request).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "model" }));
    }

    #[test]
    fn non_positive_counts_are_rejected() {
        let request = EstimateRequest {
            observed_minutes: Some(0.0),
            ..rate_request()
        };
        let err = validate(&request).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                field: "observed_minutes",
                ..
            }
        ));
    }

    #[test]
    fn bad_model_string_is_rejected() {
        let request = EstimateRequest {
            model: Some("per_store".into()),
            ..rate_request()
        };
        let err = validate(&request).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { field: "model", .. }));
    }

    #[test]
    fn too_few_timestamps() {
        let request = EstimateRequest {
            winner_timestamps: Some(vec!["12:00".into()]),
            ..timestamp_request()
        };
        let err = validate(&request).unwrap_err();
        assert!(matches!(err, Error::TooFewTimestamps { count: 1 }));
    }

    #[test]
    fn elapsed_is_floored_at_zero() {
        let request = EstimateRequest {
            elapsed_since_last_winner_minutes: Some(-5.0),
            ..timestamp_request()
        };
        let obs = match validate(&request).unwrap() {
            Observation::Timestamps(obs) => obs,
            other => panic!("expected timestamp observation, got {other:?}"),
        };
        assert_eq!(obs.elapsed_since_last, 0.0);
    }

    #[test]
    fn economics_requires_both_nonnegative_inputs() {
        let both = EstimateRequest {
            expected_bonus_value: Some(100.0),
            time_value_per_minute: Some(0.5),
            ..rate_request()
        };
        let negative = EstimateRequest {
            expected_bonus_value: Some(-1.0),
            time_value_per_minute: Some(0.5),
            ..rate_request()
        };
        let partial = EstimateRequest {
            expected_bonus_value: Some(100.0),
            ..rate_request()
        };
        let get = |r: &EstimateRequest| match validate(r).unwrap() {
            Observation::Rate(obs) => obs.economics,
            other => panic!("expected rate observation, got {other:?}"),
        };
        assert!(get(&both).is_some());
        assert!(get(&negative).is_none());
        assert!(get(&partial).is_none());
    }
}
