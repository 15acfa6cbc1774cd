//! Mode A: winner-interval estimation from checkout throughput.
//!
//! # Model
//!
//! The promotion announces one winner every K customers served (25 on
//! weekdays, 50 on weekends and holidays). A short observation of a few
//! lanes gives a raw rate `λ_obs = purchases / minutes`, which is then
//! scaled to the relevant throughput:
//!
//! - `global`: extrapolate to all open lanes, `λ_est = λ_obs × scale`
//!   with `scale = total_open_lanes / observed_lanes`. When the claimed
//!   total is smaller than what was actually observed the scale falls
//!   back to 1 - implausible extrapolation is ignored, not flagged.
//! - `per_lane`: normalize to one lane's own rate,
//!   `λ_est = λ_obs / observed_lanes`.
//!
//! A confidence haircut absorbs basket-size and checkout-speed variance
//! the short window cannot capture: `λ_cons = λ_est × (1 - buffer)`.
//! The mean interval between winners is then `T = K / λ_cons`, with the
//! divisor floored at epsilon so a fully-discounted rate saturates the
//! interval instead of dividing by zero.

use ww_math::floor_eps;

use crate::validate::{RateObservation, ThroughputModel};

/// Customers per winner on a weekday.
pub const WEEKDAY_THRESHOLD: u32 = 25;
/// Customers per winner on a weekend or holiday.
pub const WEEKEND_THRESHOLD: u32 = 50;

/// Winner threshold K for the given day type.
pub fn threshold_from_day(weekend_or_holiday: bool) -> u32 {
    if weekend_or_holiday {
        WEEKEND_THRESHOLD
    } else {
        WEEKDAY_THRESHOLD
    }
}

/// Rate ladder and derived winner interval for one observation.
#[derive(Debug, Clone, PartialEq)]
pub struct RateEstimate {
    /// Customers per winner.
    pub k_threshold: u32,
    /// Raw observed purchases per minute.
    pub observed: f64,
    /// After lane scaling.
    pub estimated: f64,
    /// After the confidence haircut (reported un-floored).
    pub conservative: f64,
    /// Lane extrapolation factor actually applied.
    pub lane_scale: f64,
    /// Mean minutes between winners, `K / max(conservative, ε)`.
    pub mean_interval: f64,
}

impl RateEstimate {
    /// Per-customer win probability, `1/K`.
    pub fn win_probability_per_attempt(&self) -> f64 {
        1.0 / f64::from(self.k_threshold)
    }
}

/// Estimate the winner interval from a validated observation.
pub fn estimate(obs: &RateObservation) -> RateEstimate {
    let k_threshold = threshold_from_day(obs.weekend_or_holiday);
    let observed = obs.purchases / obs.minutes;

    let lane_scale = match (obs.model, obs.total_open_lanes) {
        (ThroughputModel::Global, Some(total)) if total >= obs.lanes => total / obs.lanes,
        _ => 1.0,
    };
    let estimated = match obs.model {
        ThroughputModel::Global => observed * lane_scale,
        ThroughputModel::PerLane => observed / obs.lanes,
    };
    let conservative = estimated * (1.0 - obs.confidence_buffer);
    let mean_interval = f64::from(k_threshold) / floor_eps(conservative);

    RateEstimate {
        k_threshold,
        observed,
        estimated,
        conservative,
        lane_scale,
        mean_interval,
    }
}
