//! Guarded arithmetic for rate and interval math.
//!
//! Field observations routinely produce degenerate numbers (a single
//! purchase in a long window, two identical timestamps). These helpers
//! keep the downstream division and clamping finite instead of turning
//! a degenerate observation into a NaN or a panic.

/// Floor applied to rates and intervals before they are used as divisors.
pub const EPSILON: f64 = 1e-9;

/// Clamp `value` into `[low, high]`.
///
/// NaN propagates; callers validate their inputs before clamping.
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    value.max(low).min(high)
}

/// Floor a quantity at [`EPSILON`] so it can safely be divided by.
pub fn floor_eps(value: f64) -> f64 {
    value.max(EPSILON)
}

/// Round to `places` decimal digits, half away from zero.
pub fn round_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_orders_bounds() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn floor_eps_keeps_positive_values() {
        assert_eq!(floor_eps(2.5), 2.5);
        assert_eq!(floor_eps(0.0), EPSILON);
        assert_eq!(floor_eps(-1.0), EPSILON);
    }

    #[test]
    fn round_places_two_and_four() {
        assert_eq!(round_places(8.333_333, 2), 8.33);
        assert_eq!(round_places(6.25, 2), 6.25);
        assert_eq!(round_places(0.062_47, 2), 0.06);
        assert_eq!(round_places(0.748_976, 4), 0.749);
        assert_eq!(round_places(1.0 / 50.0, 4), 0.02);
    }

    #[test]
    fn round_places_negative_values() {
        assert_eq!(round_places(-2.678, 2), -2.68);
        assert_eq!(round_places(-0.5, 0), -1.0);
    }
}
