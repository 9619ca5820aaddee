//! Conversions between degrees, radians and [`Angle`] units.
//!
//! The plain variants truncate toward zero, matching a C cast; the `_rounded`
//! variants round to the nearest unit. Results outside one turn, negative ones
//! included, wrap modulo `0x4000`.

use core::f64::consts::TAU;

use crate::angle::Angle;
use crate::constants::FULL_TURN;

const TURN: f64 = FULL_TURN as f64;

/// Reduce a signed unit count modulo one turn.
#[inline(always)]
fn wrap(units: i64) -> Angle {
    Angle::new(units as u16)
}

/// Degrees to angle units, truncating.
pub fn degrees_to_angle(degrees: f64) -> Angle {
    wrap((degrees * TURN / 360.0) as i64)
}

/// Degrees to angle units, rounding to nearest.
pub fn degrees_to_angle_rounded(degrees: f64) -> Angle {
    wrap(libm::round(degrees * TURN / 360.0) as i64)
}

/// Whole degrees to angle units with integer division.
///
/// Loses up to one unit for degree counts that do not divide the turn evenly.
pub fn degrees_to_angle_i(degrees: i32) -> Angle {
    wrap(degrees as i64 * FULL_TURN as i64 / 360)
}

/// Whole degrees to angle units, rounding half away from zero.
pub fn degrees_to_angle_i_rounded(degrees: i32) -> Angle {
    let scaled = degrees as i64 * FULL_TURN as i64;
    wrap((scaled + 180 * scaled.signum()) / 360)
}

/// Angle units to degrees in `[0, 360)`.
pub fn angle_to_degrees(angle: Angle) -> f64 {
    angle.raw() as f64 * 360.0 / TURN
}

/// Angle units to whole degrees, truncating.
pub fn angle_to_degrees_i(angle: Angle) -> i32 {
    angle.raw() as i32 * 360 / FULL_TURN as i32
}

/// Angle units to whole degrees, rounding to nearest.
///
/// Angles within half a degree of a full turn round to 360.
pub fn angle_to_degrees_i_rounded(angle: Angle) -> i32 {
    (angle.raw() as i32 * 360 + FULL_TURN as i32 / 2) / FULL_TURN as i32
}

/// Radians to angle units, truncating.
pub fn radians_to_angle(radians: f64) -> Angle {
    wrap((radians * TURN / TAU) as i64)
}

/// Radians to angle units, rounding to nearest.
pub fn radians_to_angle_rounded(radians: f64) -> Angle {
    wrap(libm::round(radians * TURN / TAU) as i64)
}

/// Angle units to radians in `[0, 2π)`.
pub fn angle_to_radians(angle: Angle) -> f64 {
    angle.raw() as f64 * TAU / TURN
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    const UNIT_DEGREES: f64 = 360.0 / TURN;

    #[test]
    fn test_degrees_to_angle() {
        assert_eq!(degrees_to_angle(0.0).raw(), 0);
        assert_eq!(degrees_to_angle(30.0).raw(), 1365);
        assert_eq!(degrees_to_angle(45.0).raw(), 0x0800);
        assert_eq!(degrees_to_angle(90.0), Angle::QUARTER_TURN);
        assert_eq!(degrees_to_angle(180.0), Angle::HALF_TURN);
        assert_eq!(degrees_to_angle(270.0), Angle::THREE_QUARTER_TURN);
        assert_eq!(degrees_to_angle(360.0), Angle::ZERO);
        assert_eq!(degrees_to_angle(450.0), Angle::QUARTER_TURN);
        assert_eq!(degrees_to_angle(-90.0), Angle::THREE_QUARTER_TURN);
    }

    #[test]
    fn test_degrees_to_angle_rounded() {
        // 1° = 45.51 units
        assert_eq!(degrees_to_angle(1.0).raw(), 45);
        assert_eq!(degrees_to_angle_rounded(1.0).raw(), 46);
        assert_eq!(degrees_to_angle_rounded(30.0).raw(), 1365);
        assert_eq!(degrees_to_angle_rounded(359.99), Angle::ZERO);
    }

    #[test]
    fn test_degrees_to_angle_integer() {
        assert_eq!(degrees_to_angle_i(30).raw(), 1365);
        assert_eq!(degrees_to_angle_i(90), Angle::QUARTER_TURN);
        assert_eq!(degrees_to_angle_i(1).raw(), 45);
        assert_eq!(degrees_to_angle_i_rounded(1).raw(), 46);
        assert_eq!(degrees_to_angle_i_rounded(0), Angle::ZERO);
        // Truncation toward zero: -45.51 -> -45, rounding: -> -46.
        assert_eq!(degrees_to_angle_i(-1).raw(), 0x4000 - 45);
        assert_eq!(degrees_to_angle_i_rounded(-1).raw(), 0x4000 - 46);
        assert_eq!(degrees_to_angle_i(720 + 180), Angle::HALF_TURN);
        assert_eq!(degrees_to_angle_i(i32::MAX), degrees_to_angle_i(i32::MAX % 360));
    }

    #[test]
    fn test_angle_to_degrees() {
        assert_eq!(angle_to_degrees(Angle::ZERO), 0.0);
        assert_eq!(angle_to_degrees(Angle::HALF_TURN), 180.0);
        assert_abs_diff_eq!(angle_to_degrees(Angle::MAX), 360.0 - UNIT_DEGREES, epsilon = 1e-12);

        assert_eq!(angle_to_degrees_i(Angle::THREE_QUARTER_TURN), 270);
        assert_eq!(angle_to_degrees_i(Angle::new(45)), 0);
        assert_eq!(angle_to_degrees_i_rounded(Angle::new(45)), 1);
        assert_eq!(angle_to_degrees_i(Angle::MAX), 359);
        assert_eq!(angle_to_degrees_i_rounded(Angle::MAX), 360);
    }

    #[test]
    fn test_radians() {
        assert_eq!(radians_to_angle(0.0), Angle::ZERO);
        assert_eq!(radians_to_angle(FRAC_PI_2), Angle::QUARTER_TURN);
        assert_eq!(radians_to_angle(PI), Angle::HALF_TURN);
        assert_eq!(radians_to_angle(TAU), Angle::ZERO);
        assert_eq!(radians_to_angle(-FRAC_PI_2), Angle::THREE_QUARTER_TURN);
        assert_eq!(radians_to_angle_rounded(PI / 6.0).raw(), 1365);

        assert_abs_diff_eq!(angle_to_radians(Angle::QUARTER_TURN), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_to_radians(Angle::HALF_TURN), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_degree_round_trip() {
        for d in [0.0, 45.0, 90.0, 135.0, 180.0, 270.0, 359.0] {
            let back = angle_to_degrees(degrees_to_angle(d));
            assert!(back <= d, "{d} came back as {back}");
            assert_abs_diff_eq!(back, d, epsilon = UNIT_DEGREES);

            let back = angle_to_degrees(degrees_to_angle_rounded(d));
            assert_abs_diff_eq!(back, d, epsilon = UNIT_DEGREES / 2.0);
        }
    }

    #[test]
    fn test_integer_round_trip() {
        // Truncating both ways can lose a whole degree; rounding both ways cannot.
        let mut truncated_losses = 0;
        for d in 0..360 {
            let back = angle_to_degrees_i(degrees_to_angle_i(d));
            assert!(back == d || back == d - 1);
            if back != d {
                truncated_losses += 1;
            }
            assert_eq!(angle_to_degrees_i_rounded(degrees_to_angle_i_rounded(d)), d);
        }
        assert!(truncated_losses > 0);
    }

    #[test]
    fn test_radian_round_trip() {
        for raw in (0..0x4000u16).step_by(97) {
            let a = Angle::new(raw);
            assert_eq!(radians_to_angle_rounded(angle_to_radians(a)), a);
        }
    }
}
