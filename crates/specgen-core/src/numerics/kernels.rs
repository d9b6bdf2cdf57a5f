use crate::common::constants::PI;
use crate::domain::{BroadeningError, BroadeningResult};
use std::fmt::{Display, Formatter};

/// Normalized Gaussian line shape centered at `x0`.
pub fn gaussian(sigma: f64, x: f64, x0: f64) -> BroadeningResult<f64> {
    validate_width("sigma", sigma)?;
    Ok(gaussian_density(sigma, x, x0))
}

/// Normalized Lorentzian line shape centered at `x0`, `gamma` is the FWHM.
pub fn lorentzian(gamma: f64, x: f64, x0: f64) -> BroadeningResult<f64> {
    validate_width("gamma", gamma)?;
    Ok(lorentzian_density(gamma, x, x0))
}

#[inline]
fn gaussian_density(sigma: f64, x: f64, x0: f64) -> f64 {
    (1.0 / (sigma * (2.0 * PI).sqrt())) * (-(x - x0).powi(2) / (2.0 * sigma.powi(2))).exp()
}

#[inline]
fn lorentzian_density(gamma: f64, x: f64, x0: f64) -> f64 {
    gamma / (2.0 * PI * ((x - x0).powi(2) + (gamma / 2.0).powi(2)))
}

fn validate_width(parameter: &'static str, width: f64) -> BroadeningResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(BroadeningError::invalid_parameter(
            parameter,
            width,
            "must be finite and > 0",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    Gaussian,
    Lorentzian,
}

/// The single kernel active for a run.
///
/// Fields are private: a value only exists through [`LineShape::gaussian`] or
/// [`LineShape::lorentzian`], so `evaluate` never re-checks the width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineShape {
    kind: KernelKind,
    width: f64,
}

impl LineShape {
    pub fn gaussian(sigma: f64) -> BroadeningResult<Self> {
        validate_width("sigma", sigma)?;
        Ok(Self {
            kind: KernelKind::Gaussian,
            width: sigma,
        })
    }

    pub fn lorentzian(gamma: f64) -> BroadeningResult<Self> {
        validate_width("gamma", gamma)?;
        Ok(Self {
            kind: KernelKind::Lorentzian,
            width: gamma,
        })
    }

    pub const fn kind(self) -> KernelKind {
        self.kind
    }

    /// Sigma for a Gaussian, gamma (FWHM) for a Lorentzian.
    pub const fn width(self) -> f64 {
        self.width
    }

    pub const fn name(self) -> &'static str {
        match self.kind {
            KernelKind::Gaussian => "Gaussian",
            KernelKind::Lorentzian => "Lorentzian",
        }
    }

    pub const fn width_label(self) -> &'static str {
        match self.kind {
            KernelKind::Gaussian => "sigma",
            KernelKind::Lorentzian => "gamma",
        }
    }

    #[inline]
    pub fn evaluate(self, x: f64, x0: f64) -> f64 {
        match self.kind {
            KernelKind::Gaussian => gaussian_density(self.width, x, x0),
            KernelKind::Lorentzian => lorentzian_density(self.width, x, x0),
        }
    }
}

impl Display for LineShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({} = {})", self.name(), self.width_label(), self.width())
    }
}
