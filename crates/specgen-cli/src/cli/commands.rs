use super::CliError;
use super::helpers::{write_artifact, write_stdout};
use specgen_core::common::constants::{DEFAULT_NUM_POINTS, DEFAULT_PADDING_FACTOR};
use specgen_core::domain::ExecutionMode;
use specgen_core::modules::{
    BroadeningConfig, DEFAULT_LOG_FILE_NAME, RunReport, broaden_spectrum, read_spectrum_file,
    render_broadened_curve, render_run_log, render_run_summary_json,
};
use specgen_core::numerics::LineShape;
use std::path::PathBuf;

#[derive(clap::Args)]
#[command(group(clap::ArgGroup::new("kernel").required(true).args(["gaussian", "lorentzian"])))]
pub(super) struct BroadenArgs {
    /// Spectrum file: '#<count> <type>' header, then '<energy> <intensity>' rows
    #[arg(short = 'i', long = "input", value_name = "file.spec")]
    input: PathBuf,

    /// Sigma of the Gaussian line shape
    #[arg(short = 'g', long, value_name = "sigma", allow_negative_numbers = true)]
    gaussian: Option<f64>,

    /// Gamma (FWHM) of the Lorentzian line shape
    #[arg(short = 'l', long, value_name = "gamma", allow_negative_numbers = true)]
    lorentzian: Option<f64>,

    /// Number of grid intervals used for the broadened spectrum
    #[arg(short = 'q', long, value_name = "points", default_value_t = DEFAULT_NUM_POINTS)]
    quadrature: usize,

    /// Energy padding, in multiples of the kernel width
    #[arg(short = 'p', long, value_name = "factor", default_value_t = DEFAULT_PADDING_FACTOR)]
    padding: u32,

    /// Write the broadened curve here instead of stdout
    #[arg(short = 'o', long, value_name = "path")]
    output: Option<PathBuf>,

    /// Run log path
    #[arg(long, value_name = "path", default_value = DEFAULT_LOG_FILE_NAME)]
    log: PathBuf,

    /// Also write the run summary as JSON
    #[arg(long, value_name = "path")]
    summary: Option<PathBuf>,

    /// Evaluate the grid in this many parallel partitions
    #[arg(long, value_name = "n")]
    partitions: Option<usize>,
}

impl BroadenArgs {
    fn kernel(&self) -> Result<LineShape, CliError> {
        let kernel = match (self.gaussian, self.lorentzian) {
            (Some(sigma), None) => LineShape::gaussian(sigma)?,
            (None, Some(gamma)) => LineShape::lorentzian(gamma)?,
            _ => {
                return Err(CliError::Usage(
                    "exactly one of --gaussian or --lorentzian is required".to_string(),
                ));
            }
        };
        Ok(kernel)
    }

    fn config(&self) -> Result<BroadeningConfig, CliError> {
        let execution = match self.partitions {
            Some(partitions) => ExecutionMode::Partitioned { partitions },
            None => ExecutionMode::Serial,
        };
        let config = BroadeningConfig::new(self.kernel()?)
            .with_num_points(self.quadrature)
            .with_padding_factor(self.padding)
            .with_execution(execution);
        config.validate()?;
        Ok(config)
    }
}

pub(super) fn run_broaden_command(args: BroadenArgs) -> Result<i32, CliError> {
    let config = args.config()?;
    let input = read_spectrum_file(&args.input)?;

    let spectrum = broaden_spectrum(&input, config)?;
    let check_integral = spectrum.check_integral()?;

    let report = RunReport::new(&args.input, &config, &spectrum, check_integral);
    let run_log = render_run_log(&report);
    let summary = match &args.summary {
        Some(path) => Some((path, render_run_summary_json(&report)?)),
        None => None,
    };
    let curve = render_broadened_curve(&spectrum.points);

    // curve is written last: a failed run leaves no curve output
    write_artifact(&args.log, &run_log, "IO.LOG_WRITE", "run log")?;
    if let Some((path, summary)) = &summary {
        write_artifact(path, summary, "IO.SUMMARY_WRITE", "run summary")?;
    }
    match &args.output {
        Some(path) => write_artifact(path, &curve, "IO.CURVE_WRITE", "broadened spectrum")?,
        None => write_stdout(&curve)?,
    }

    tracing::info!(
        points = spectrum.points.len(),
        check_integral,
        log = %args.log.display(),
        "broadening complete"
    );

    if let Some(path) = &args.output {
        println!(
            "Broadened {} {} transitions onto {} grid points: {}",
            spectrum.transition_count,
            spectrum.tag,
            spectrum.points.len(),
            path.display()
        );
        println!(
            "Integral of broadened spectrum: {} (Should be 1.00)",
            check_integral
        );
    }

    Ok(0)
}
