use super::scaling::IntensityScale;
use crate::common::constants::REFERENCE_ENERGY;
use crate::domain::{BroadeningError, BroadeningResult};

/// Turn the engine's running integral into the dimensionless check value.
///
/// A self-consistent broadening gives 1.00 up to grid-resolution error. The
/// value is diagnostic only and is never used to rescale the curve.
pub fn normalize_integral(
    running_integral: f64,
    scale: IntensityScale,
    delta_e: f64,
    total_intensity: f64,
) -> BroadeningResult<f64> {
    if total_intensity == 0.0 {
        return Err(BroadeningError::DivisionByZero {
            quantity: "total transition intensity",
        });
    }

    Ok(running_integral * scale.factor(REFERENCE_ENERGY) * delta_e / total_intensity)
}
