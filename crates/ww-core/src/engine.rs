//! Engine orchestration: one request in, one report out.
//!
//! `run` is the whole engine: validate, branch on mode, model the wait
//! distribution, derive the recommendation, optionally price it, and
//! assemble the report. Pure and deterministic; identical requests
//! produce byte-identical serialized reports.

use tracing::debug;

use ww_common::contract::{EstimateRequest, EstimateReport};
use ww_common::error::Result;

use crate::validate::{self, Observation, RateObservation, TimestampObservation};
use crate::waitmodel::WaitProfile;
use crate::{cadence, economics, rate, recommend, report};

/// Run the full estimation pipeline on a raw request.
pub fn run(request: &EstimateRequest) -> Result<EstimateReport> {
    match validate::validate(request)? {
        Observation::Rate(obs) => run_rate(&obs),
        Observation::Timestamps(obs) => run_timestamps(&obs),
    }
}

fn run_rate(obs: &RateObservation) -> Result<EstimateReport> {
    let est = rate::estimate(obs);
    debug!(
        k = est.k_threshold,
        conservative_rate = est.conservative,
        mean_interval = est.mean_interval,
        "purchase-rate estimate"
    );

    let profile = WaitProfile::uniform_cycle(est.mean_interval);
    let rec = recommend::for_purchase_rate(est.mean_interval, obs.target_probability, obs.max_wait);
    let econ = obs.economics.as_ref().map(|inputs| {
        economics::evaluate(
            inputs,
            rec.probability,
            est.mean_interval,
            rec.optimal_wait,
            obs.max_wait,
        )
    });

    Ok(report::assemble_rate(obs, &est, &profile, &rec, econ))
}

fn run_timestamps(obs: &TimestampObservation) -> Result<EstimateReport> {
    let stats = cadence::analyze(&obs.timestamps)?;
    debug!(
        intervals = stats.intervals.len(),
        mean = stats.mean,
        cv = stats.cv,
        model = %stats.model,
        "cadence analysis"
    );

    let profile = WaitProfile::for_cadence(stats.model, stats.mean, obs.elapsed_since_last);
    let rec = recommend::for_cadence(
        stats.model,
        stats.mean,
        obs.elapsed_since_last,
        obs.target_probability,
        obs.max_wait,
    );
    let econ = obs.economics.as_ref().map(|inputs| {
        economics::evaluate(
            inputs,
            rec.probability,
            stats.mean,
            rec.optimal_wait,
            obs.max_wait,
        )
    });

    Ok(report::assemble_cadence(obs, &stats, &profile, &rec, econ))
}
