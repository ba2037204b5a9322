//! Lissajous curve parameters and evaluation.
//!
//! The curve is
//!
//! ```text
//! x = sin(a*t + delta)
//! y = sin(b*t)
//! ```
//!
//! Only the x component carries a phase offset.

use std::f64::consts::TAU;
use std::fmt;

/// Period of the phase offset; `delta` is always kept in `[0, PHASE_PERIOD)`.
pub const PHASE_PERIOD: f64 = TAU;

/// Frequency multipliers and phase offset of a Lissajous curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    /// Frequency multiplier of the x component.
    pub a: f64,
    /// Frequency multiplier of the y component.
    pub b: f64,
    /// Phase offset of the x component.
    pub delta: f64,
}

impl CurveParameters {
    /// Create parameters as given. Use [`normalized`](Self::normalized) to wrap the phase.
    #[must_use]
    pub const fn new(a: f64, b: f64, delta: f64) -> Self {
        Self { a, b, delta }
    }

    /// Copy with `delta` reduced into `[0, 2π)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self { delta: normalize_phase(self.delta), ..self }
    }

    /// Evaluate the curve at parameter `t`. Both coordinates lie in `[-1, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        ((self.a * t + self.delta).sin(), (self.b * t).sin())
    }
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self::new(2.0, 3.0, 0.0)
    }
}

/// Formats as the status line, e.g. `a = 2.000000, b = 3.000000, delta = 0.000000`.
impl fmt::Display for CurveParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a = {:.6}, b = {:.6}, delta = {:.6}", self.a, self.b, self.delta)
    }
}

/// Reduce a phase offset into `[0, 2π)`.
///
/// Negative phases wrap from the top of the range, so stepping below zero
/// lands just under 2π.
#[must_use]
pub fn normalize_phase(delta: f64) -> f64 {
    let wrapped = delta.rem_euclid(PHASE_PERIOD);
    // rem_euclid rounds tiny negative inputs up to exactly the period, and
    // keeps the sign of -0.0.
    if wrapped >= PHASE_PERIOD || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_default_parameters() {
        let params = CurveParameters::default();
        assert_eq!(params, CurveParameters::new(2.0, 3.0, 0.0));
    }

    #[test]
    fn test_status_line_format() {
        let params = CurveParameters::new(2.0, 3.0, 0.025);
        assert_eq!(params.to_string(), "a = 2.000000, b = 3.000000, delta = 0.025000");
    }

    #[test]
    fn test_status_line_negative_frequency() {
        let params = CurveParameters::new(-1.0, 0.0, 0.0);
        assert_eq!(params.to_string(), "a = -1.000000, b = 0.000000, delta = 0.000000");
    }

    #[test]
    fn test_normalize_in_range_unchanged() {
        assert_eq!(normalize_phase(1.0), 1.0);
        assert_eq!(normalize_phase(0.0), 0.0);
    }

    #[test]
    fn test_normalize_wraps_full_period() {
        assert_relative_eq!(normalize_phase(TAU + 0.5), 0.5, epsilon = 1e-12);
        assert_eq!(normalize_phase(TAU), 0.0);
    }

    #[test]
    fn test_normalize_negative_wraps_to_top() {
        assert_relative_eq!(normalize_phase(-0.025), TAU - 0.025, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_tiny_negative_stays_below_period() {
        let wrapped = normalize_phase(-1e-18);
        assert!((0.0..TAU).contains(&wrapped));
    }

    #[test]
    fn test_negative_zero_phase_prints_positive() {
        assert!(normalize_phase(-0.0).is_sign_positive());

        let params = CurveParameters::new(2.0, 3.0, -0.0).normalized();
        assert_eq!(params.to_string(), "a = 2.000000, b = 3.000000, delta = 0.000000");
    }

    #[test]
    fn test_point_at_origin() {
        let params = CurveParameters::new(2.0, 3.0, 0.0);
        let (x, y) = params.point_at(0.0);

        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, 0.0);
    }

    #[test]
    fn test_point_at_phase_only_moves_x() {
        let params = CurveParameters::new(1.0, 1.0, std::f64::consts::FRAC_PI_2);
        let (x, y) = params.point_at(0.0);

        assert_relative_eq!(x, 1.0);
        assert_relative_eq!(y, 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_normalized_phase_in_range(delta in -1.0e6f64..1.0e6) {
            let wrapped = normalize_phase(delta);
            prop_assert!(wrapped >= 0.0);
            prop_assert!(wrapped < PHASE_PERIOD);
        }

        #[test]
        fn prop_normalize_is_idempotent(delta in -100.0f64..100.0) {
            let once = normalize_phase(delta);
            prop_assert_eq!(normalize_phase(once), once);
        }

        #[test]
        fn prop_point_within_unit_square(
            a in -20.0f64..20.0,
            b in -20.0f64..20.0,
            delta in 0.0f64..TAU,
            t in 0.0f64..TAU,
        ) {
            let (x, y) = CurveParameters::new(a, b, delta).point_at(t);
            prop_assert!((-1.0..=1.0).contains(&x));
            prop_assert!((-1.0..=1.0).contains(&y));
        }
    }
}
