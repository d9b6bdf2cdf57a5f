pub mod errors;

pub use errors::{
    BroadeningError, BroadeningResult, SpecGenError, SpecGenErrorCategory, SpecGenResult,
};

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    #[default]
    Serial,
    /// Contiguous grid partitions evaluated on the rayon pool, reduced in
    /// partition order.
    Partitioned { partitions: usize },
}

/// Physical family of a spectrum; decides the intensity scaling and the
/// running-integral weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectrumType {
    Absorption,
    ChiralDichroism,
    Emission,
}

impl SpectrumType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absorption => "absorption",
            Self::ChiralDichroism => "chiral dichroism",
            Self::Emission => "emission",
        }
    }
}

impl Display for SpectrumType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

/// Spectrum tag as written in the header of a `.spec` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpectrumTag {
    Abs,
    Ir,
    Cd,
    Ecd,
    Vcd,
    Em,
    Cpl,
}

impl SpectrumTag {
    pub const ALL: [SpectrumTag; 7] = [
        Self::Abs,
        Self::Ir,
        Self::Cd,
        Self::Ecd,
        Self::Vcd,
        Self::Em,
        Self::Cpl,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Ir => "ir",
            Self::Cd => "cd",
            Self::Ecd => "ecd",
            Self::Vcd => "vcd",
            Self::Em => "em",
            Self::Cpl => "cpl",
        }
    }

    pub const fn spectrum_type(self) -> SpectrumType {
        match self {
            Self::Abs | Self::Ir => SpectrumType::Absorption,
            Self::Cd | Self::Ecd | Self::Vcd => SpectrumType::ChiralDichroism,
            Self::Em | Self::Cpl => SpectrumType::Emission,
        }
    }
}

impl FromStr for SpectrumTag {
    type Err = BroadeningError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| BroadeningError::UnsupportedSpectrumType {
                tag: normalized.to_string(),
                reason: "expected one of abs, ir, cd, ecd, vcd, em, cpl",
            })
    }
}

impl Display for SpectrumTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub energy: f64,
    pub intensity: f64,
}

impl Transition {
    pub const fn new(energy: f64, intensity: f64) -> Self {
        Self { energy, intensity }
    }
}

/// Non-empty, index-aligned energy and intensity columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSet {
    energies: Vec<f64>,
    intensities: Vec<f64>,
}

impl TransitionSet {
    pub fn from_columns(energies: Vec<f64>, intensities: Vec<f64>) -> BroadeningResult<Self> {
        if energies.len() != intensities.len() {
            return Err(BroadeningError::LengthMismatch {
                energies: energies.len(),
                intensities: intensities.len(),
            });
        }
        if energies.is_empty() {
            return Err(BroadeningError::invalid_grid(
                "at least one transition is required",
            ));
        }
        if let Some(value) = energies.iter().copied().find(|value| !value.is_finite()) {
            return Err(BroadeningError::invalid_parameter(
                "transition energy",
                value,
                "must be finite",
            ));
        }
        if let Some(value) = intensities.iter().copied().find(|value| !value.is_finite()) {
            return Err(BroadeningError::invalid_parameter(
                "transition intensity",
                value,
                "must be finite",
            ));
        }

        Ok(Self {
            energies,
            intensities,
        })
    }

    pub fn from_transitions(
        transitions: impl IntoIterator<Item = Transition>,
    ) -> BroadeningResult<Self> {
        let (energies, intensities): (Vec<f64>, Vec<f64>) = transitions
            .into_iter()
            .map(|transition| (transition.energy, transition.intensity))
            .unzip();
        Self::from_columns(energies, intensities)
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    pub fn iter(&self) -> impl Iterator<Item = Transition> + '_ {
        self.energies
            .iter()
            .zip(&self.intensities)
            .map(|(energy, intensity)| Transition::new(*energy, *intensity))
    }

    pub fn total_intensity(&self) -> f64 {
        self.intensities.iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadenedPoint {
    pub energy: f64,
    pub intensity: f64,
}

impl BroadenedPoint {
    pub const fn new(energy: f64, intensity: f64) -> Self {
        Self { energy, intensity }
    }
}

/// Transitions plus the tag they were declared with.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumInput {
    pub tag: SpectrumTag,
    pub transitions: TransitionSet,
}

impl SpectrumInput {
    pub fn new(tag: SpectrumTag, transitions: TransitionSet) -> Self {
        Self { tag, transitions }
    }

    pub const fn spectrum_type(&self) -> SpectrumType {
        self.tag.spectrum_type()
    }
}
