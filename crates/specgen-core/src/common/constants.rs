//! Physical scaling constants and run defaults shared by the broadening
//! numerics and the command line.
//!
//! The scaling constants convert computed oscillator and rotatory strengths
//! into the units of an experimentally recorded spectrum.

pub use std::f64::consts::PI;

/// Divisor applied to every absorption/IR kernel contribution.
pub const ABSORPTION_SCALE: f64 = 3.48e-5;
/// Numerator of the `k / energy` divisor used for CD, ECD and VCD.
pub const DICHROISM_SCALE: f64 = 22.97;
/// Energy at which the scale factor is sampled when normalizing the integral.
pub const REFERENCE_ENERGY: f64 = 1.0;

pub const DEFAULT_NUM_POINTS: usize = 1000;
pub const DEFAULT_PADDING_FACTOR: u32 = 5;
/// Check integrals further than this from 1.00 are logged as warnings.
pub const CHECK_INTEGRAL_WARN_TOLERANCE: f64 = 0.05;

#[cfg(test)]
mod tests {
    use super::{
        ABSORPTION_SCALE, CHECK_INTEGRAL_WARN_TOLERANCE, DEFAULT_NUM_POINTS,
        DEFAULT_PADDING_FACTOR, DICHROISM_SCALE, REFERENCE_ENERGY,
    };

    #[test]
    fn scaling_constants_remain_finite_and_positive() {
        for value in [
            ABSORPTION_SCALE,
            DICHROISM_SCALE,
            REFERENCE_ENERGY,
            CHECK_INTEGRAL_WARN_TOLERANCE,
        ] {
            assert!(value.is_finite());
            assert!(value > 0.0);
        }
    }

    #[test]
    fn defaults_match_documented_command_line_values() {
        assert_eq!(DEFAULT_NUM_POINTS, 1000);
        assert_eq!(DEFAULT_PADDING_FACTOR, 5);
    }
}
