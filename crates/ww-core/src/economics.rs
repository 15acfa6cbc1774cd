//! Optional cost/benefit overlay.
//!
//! Active only when the validator produced [`EconomicInputs`], i.e.
//! both monetary fields were supplied and non-negative. Values are
//! returned unrounded; the report assembler applies output precision.

use ww_common::contract::Economics;
use ww_math::{clamp, floor_eps};

use crate::validate::EconomicInputs;

/// Evaluate the overlay against an already-computed recommendation.
pub fn evaluate(
    inputs: &EconomicInputs,
    probability_within_wait: f64,
    mean_interval: f64,
    optimal_wait: f64,
    max_wait: f64,
) -> Economics {
    let expected_value = probability_within_wait * inputs.bonus_value;
    let time_cost = optimal_wait * inputs.value_per_minute;
    // Free time never breaks even; cap at the longest wait considered.
    let break_even = if inputs.value_per_minute == 0.0 {
        max_wait
    } else {
        clamp(inputs.bonus_value / inputs.value_per_minute, 0.0, max_wait)
    };

    Economics {
        expected_value_for_optimal_wait: expected_value,
        expected_time_cost_for_optimal_wait: time_cost,
        net_expected_value_for_optimal_wait: expected_value - time_cost,
        value_expected_per_minute: inputs.bonus_value / floor_eps(mean_interval),
        break_even_wait_minutes: break_even,
    }
}
