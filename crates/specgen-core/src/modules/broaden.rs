use crate::common::constants::{
    CHECK_INTEGRAL_WARN_TOLERANCE, DEFAULT_NUM_POINTS, DEFAULT_PADDING_FACTOR,
};
use crate::domain::{
    BroadenedPoint, BroadeningError, BroadeningResult, ExecutionMode, SpectrumInput, SpectrumTag,
};
use crate::numerics::{
    EnergyGrid, IntensityScale, LineShape, MAX_NUM_POINTS, build_grid, convolve,
    convolve_partitioned, normalize_integral,
};

/// Run parameters for one broadening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadeningConfig {
    pub kernel: LineShape,
    pub num_points: usize,
    pub padding_factor: u32,
    pub execution: ExecutionMode,
}

impl BroadeningConfig {
    pub fn new(kernel: LineShape) -> Self {
        Self {
            kernel,
            num_points: DEFAULT_NUM_POINTS,
            padding_factor: DEFAULT_PADDING_FACTOR,
            execution: ExecutionMode::Serial,
        }
    }

    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    pub fn with_padding_factor(mut self, padding_factor: u32) -> Self {
        self.padding_factor = padding_factor;
        self
    }

    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    pub fn validate(&self) -> BroadeningResult<()> {
        if self.num_points == 0 {
            return Err(BroadeningError::invalid_parameter(
                "num_points",
                0.0,
                "quadrature must be a positive integer",
            ));
        }
        if self.num_points > MAX_NUM_POINTS {
            return Err(BroadeningError::invalid_parameter(
                "num_points",
                self.num_points as f64,
                "quadrature is too large to allocate",
            ));
        }
        if let ExecutionMode::Partitioned { partitions: 0 } = self.execution {
            return Err(BroadeningError::invalid_parameter(
                "partitions",
                0.0,
                "must be a positive integer",
            ));
        }
        Ok(())
    }
}

/// A validated run: config checked and spectrum family resolved to a scale.
///
/// Building the plan is where emission spectra are rejected, before any grid
/// or convolution work happens.
#[derive(Debug, Clone, Copy)]
pub struct BroadeningPlan<'a> {
    input: &'a SpectrumInput,
    config: BroadeningConfig,
    scale: IntensityScale,
}

impl<'a> BroadeningPlan<'a> {
    pub fn new(input: &'a SpectrumInput, config: BroadeningConfig) -> BroadeningResult<Self> {
        let scale = IntensityScale::for_tag(input.tag)?;
        config.validate()?;
        Ok(Self {
            input,
            config,
            scale,
        })
    }

    pub const fn scale(&self) -> IntensityScale {
        self.scale
    }

    pub fn run(&self) -> BroadeningResult<BroadenedSpectrum> {
        let transitions = &self.input.transitions;
        let kernel = self.config.kernel;
        let grid = build_grid(
            transitions.energies(),
            kernel.width(),
            self.config.padding_factor,
            self.config.num_points,
        )?;
        tracing::info!(
            tag = %self.input.tag,
            kernel = %kernel,
            transitions = transitions.len(),
            grid_start = grid.start(),
            grid_end = grid.end(),
            delta_e = grid.step(),
            "broadening spectrum"
        );

        let output = match self.config.execution {
            ExecutionMode::Serial => convolve(&grid, transitions, kernel, self.scale),
            ExecutionMode::Partitioned { partitions } => {
                convolve_partitioned(&grid, transitions, kernel, self.scale, partitions)?
            }
        };

        Ok(BroadenedSpectrum {
            tag: self.input.tag,
            kernel,
            scale: self.scale,
            grid,
            points: output.points,
            running_integral: output.running_integral,
            transition_count: transitions.len(),
            total_intensity: transitions.total_intensity(),
        })
    }
}

/// Broadened curve and the data needed to normalize its integral.
#[derive(Debug, Clone, PartialEq)]
pub struct BroadenedSpectrum {
    pub tag: SpectrumTag,
    pub kernel: LineShape,
    pub scale: IntensityScale,
    pub grid: EnergyGrid,
    pub points: Vec<BroadenedPoint>,
    pub running_integral: f64,
    pub transition_count: usize,
    pub total_intensity: f64,
}

impl BroadenedSpectrum {
    /// Normalized check integral; fails when the intensities sum to zero.
    pub fn check_integral(&self) -> BroadeningResult<f64> {
        let check = normalize_integral(
            self.running_integral,
            self.scale,
            self.grid.step(),
            self.total_intensity,
        )?;
        if (check - 1.0).abs() > CHECK_INTEGRAL_WARN_TOLERANCE {
            tracing::warn!(
                check,
                "integral of broadened spectrum deviates from 1.00; consider a finer quadrature or larger padding"
            );
        }
        Ok(check)
    }
}

pub fn broaden_spectrum(
    input: &SpectrumInput,
    config: BroadeningConfig,
) -> BroadeningResult<BroadenedSpectrum> {
    BroadeningPlan::new(input, config)?.run()
}
