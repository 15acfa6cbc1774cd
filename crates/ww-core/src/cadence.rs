//! Mode B: cadence analysis of observed winner timestamps.
//!
//! Timestamps arrive in one of two formats, never mixed:
//!
//! - bare wall-clock times `HH:MM[:SS]` (24-hour, no date). These are
//!   same-day samples that may cross midnight: each entry is advanced
//!   by 24 hours until it exceeds the running cursor, yielding a
//!   strictly increasing absolute-minute timeline. `23:58` followed by
//!   `00:05` is a 7-minute gap, not a negative one.
//! - full date-times (RFC 3339, or naive ISO 8601 treated as UTC),
//!   which must already be strictly increasing.
//!
//! The gaps between consecutive entries are summarized (sample mean,
//! Bessel-corrected std, CV) and classified on fixed CV thresholds:
//! below 0.4 the cadence is `regular`, above 0.7 `random`, `mixed` in
//! between. The thresholds are policy, not fitted.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike};

use ww_common::contract::CadenceModel;
use ww_common::error::{Error, Result};
use ww_math::summarize;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Accepted layouts for date-times without a UTC offset.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Interval statistics and the cadence classification for one run of
/// observed winners.
#[derive(Debug, Clone, PartialEq)]
pub struct CadenceStatistics {
    /// Gaps between consecutive winners, minutes.
    pub intervals: Vec<f64>,
    /// Sample mean of the gaps.
    pub mean: f64,
    /// Bessel-corrected sample standard deviation (0 with one gap).
    pub std_dev: f64,
    /// Coefficient of variation, std over the epsilon-floored mean.
    pub cv: f64,
    /// Step-function classification of the CV.
    pub model: CadenceModel,
}

/// Parse a bare `HH:MM[:SS]` time into minutes since midnight.
fn parse_bare_time(value: &str) -> Option<f64> {
    let time = NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()?;
    Some(f64::from(time.num_seconds_from_midnight()) / 60.0)
}

/// Parse a full date-time into absolute minutes since the Unix epoch.
fn parse_datetime_minutes(value: &str) -> Option<f64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis() as f64 / 60_000.0);
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc().timestamp_millis() as f64 / 60_000.0);
        }
    }
    None
}

/// Build a strictly increasing minute timeline from raw timestamps.
///
/// The caller has already checked `timestamps.len() >= 2`.
pub fn build_timeline(timestamps: &[String]) -> Result<Vec<f64>> {
    let bare: Vec<Option<f64>> = timestamps.iter().map(|t| parse_bare_time(t)).collect();

    if bare.iter().all(Option::is_some) {
        let times: Vec<f64> = bare.into_iter().flatten().collect();
        let mut timeline = Vec::with_capacity(times.len());
        let mut cursor = f64::NEG_INFINITY;
        for (i, &minutes) in times.iter().enumerate() {
            let mut candidate = minutes;
            if i > 0 {
                // Roll past midnight (and past duplicates) until the
                // timeline advances.
                while candidate <= cursor {
                    candidate += MINUTES_PER_DAY;
                }
            }
            timeline.push(candidate);
            cursor = candidate;
        }
        return Ok(timeline);
    }

    let mut timeline = Vec::with_capacity(timestamps.len());
    for (i, raw) in timestamps.iter().enumerate() {
        match parse_datetime_minutes(raw) {
            Some(minutes) => timeline.push(minutes),
            // An entry that parses as a bare time but not as a
            // date-time, alongside entries that failed the bare pass,
            // means the list mixes the two formats.
            None if bare[i].is_some() => return Err(Error::MixedTimestampFormats),
            None => {
                return Err(Error::TimestampUnparseable {
                    value: raw.clone(),
                })
            }
        }
    }
    for i in 1..timeline.len() {
        if timeline[i] <= timeline[i - 1] {
            return Err(Error::TimestampsNotIncreasing { index: i });
        }
    }
    Ok(timeline)
}

/// Gaps between consecutive timeline points.
pub fn intervals(timeline: &[f64]) -> Vec<f64> {
    timeline.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Classify a coefficient of variation into a cadence model.
///
/// Fixed policy thresholds, inclusive on the `mixed` side.
pub fn classify(cv: f64) -> CadenceModel {
    if cv < 0.4 {
        CadenceModel::Regular
    } else if cv <= 0.7 {
        CadenceModel::Mixed
    } else {
        CadenceModel::Random
    }
}

/// Full analysis: timeline, gaps, statistics, classification.
pub fn analyze(timestamps: &[String]) -> Result<CadenceStatistics> {
    let timeline = build_timeline(timestamps)?;
    let gaps = intervals(&timeline);
    let summary = summarize(&gaps);
    Ok(CadenceStatistics {
        intervals: gaps,
        mean: summary.mean,
        std_dev: summary.std_dev,
        cv: summary.cv,
        model: classify(summary.cv),
    })
}
