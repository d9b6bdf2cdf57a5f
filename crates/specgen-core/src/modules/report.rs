use super::broaden::{BroadenedSpectrum, BroadeningConfig};
use crate::domain::{SpecGenError, SpecGenResult, SpectrumTag};
use serde::Serialize;
use std::path::Path;

pub const DEFAULT_LOG_FILE_NAME: &str = "spec-gen.log";

/// Everything the run log and JSON summary report about one broadening.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub input_file: String,
    pub spectrum_type: SpectrumTag,
    pub kernel: String,
    pub width_parameter: &'static str,
    pub kernel_width: f64,
    pub num_points: usize,
    pub padding_factor: u32,
    pub delta_e: f64,
    pub grid_start: f64,
    pub grid_end: f64,
    pub transition_count: usize,
    pub total_intensity: f64,
    pub check_integral: f64,
}

impl RunReport {
    pub fn new(
        input_path: &Path,
        config: &BroadeningConfig,
        spectrum: &BroadenedSpectrum,
        check_integral: f64,
    ) -> Self {
        Self {
            input_file: input_path.display().to_string(),
            spectrum_type: spectrum.tag,
            kernel: spectrum.kernel.name().to_string(),
            width_parameter: spectrum.kernel.width_label(),
            kernel_width: spectrum.kernel.width(),
            num_points: config.num_points,
            padding_factor: config.padding_factor,
            delta_e: spectrum.grid.step(),
            grid_start: spectrum.grid.start(),
            grid_end: spectrum.grid.end(),
            transition_count: spectrum.transition_count,
            total_intensity: spectrum.total_intensity,
            check_integral,
        }
    }
}

pub fn render_run_log(report: &RunReport) -> String {
    let mut lines = vec![
        "spec-gen broadening log".to_string(),
        "-> User is responsible for any and all broadened spectra!".to_string(),
        " === DEBUGGING INFORMATION BELOW THIS LINE === ".to_string(),
        format!("Input File: {}", report.input_file),
        format!("Spectrum Type: {}", report.spectrum_type),
        format!(
            "Broadened with {} functions, {} = {}",
            report.kernel, report.width_parameter, report.kernel_width
        ),
        format!(
            "Number of points in broadened spectrum: {}",
            report.num_points
        ),
        format!("Energy padding factor: {}", report.padding_factor),
        format!(
            "Integral of broadened spectrum: {} (Should be 1.00)",
            report.check_integral
        ),
    ];
    lines.push(String::new());
    lines.join("\n")
}

pub fn render_run_summary_json(report: &RunReport) -> SpecGenResult<String> {
    serde_json::to_string_pretty(report).map_err(|source| {
        SpecGenError::internal(
            "SYS.SUMMARY_SERIALIZE",
            format!("failed to serialize run summary: {}", source),
        )
    })
}
