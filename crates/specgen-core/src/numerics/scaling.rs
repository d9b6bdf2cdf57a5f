use crate::common::constants::{ABSORPTION_SCALE, DICHROISM_SCALE};
use crate::domain::{BroadeningError, BroadeningResult, SpectrumTag, SpectrumType};

/// Divisor relating computed strengths to observed intensity, one variant per
/// supported spectrum family. Emission has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntensityScale {
    /// Constant divisor for `abs`/`ir`.
    Absorption,
    /// `k / energy` divisor for `cd`/`ecd`/`vcd`.
    ChiralDichroism,
}

impl IntensityScale {
    pub fn for_spectrum(spectrum_type: SpectrumType) -> BroadeningResult<Self> {
        match spectrum_type {
            SpectrumType::Absorption => Ok(Self::Absorption),
            SpectrumType::ChiralDichroism => Ok(Self::ChiralDichroism),
            SpectrumType::Emission => Err(BroadeningError::UnsupportedSpectrumType {
                tag: spectrum_type.as_str().to_string(),
                reason: "emission spectra (em, cpl) are not supported",
            }),
        }
    }

    /// Same as [`IntensityScale::for_spectrum`], reporting the file tag on failure.
    pub fn for_tag(tag: SpectrumTag) -> BroadeningResult<Self> {
        Self::for_spectrum(tag.spectrum_type()).map_err(|error| match error {
            BroadeningError::UnsupportedSpectrumType { reason, .. } => {
                BroadeningError::UnsupportedSpectrumType {
                    tag: tag.as_str().to_string(),
                    reason,
                }
            }
            other => other,
        })
    }

    #[inline]
    pub fn factor(self, energy: f64) -> f64 {
        match self {
            Self::Absorption => ABSORPTION_SCALE,
            Self::ChiralDichroism => DICHROISM_SCALE / energy,
        }
    }

    /// Amount a single kernel contribution adds to the running integral.
    ///
    /// Dichroism weights by the transition energy, not the grid energy.
    #[inline]
    pub fn integral_weight(self, contribution: f64, transition_energy: f64) -> f64 {
        match self {
            Self::Absorption => contribution,
            Self::ChiralDichroism => contribution / transition_energy,
        }
    }
}
