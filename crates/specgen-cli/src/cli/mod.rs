mod commands;
mod helpers;

use clap::Parser;
use specgen_core::domain::SpecGenError;

pub fn run_from_env() -> i32 {
    helpers::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let error = error.as_spec_gen_error();
            eprintln!("{}", error.diagnostic_line());
            eprintln!("{}", error.fatal_exit_line());
            error.exit_code()
        }
    }
}

fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("spec-gen".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => commands::run_broaden_command(cli.broaden),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "spec-gen",
    version,
    disable_version_flag = true,
    about = "Broaden IR, ECD and VCD stick spectra into continuous curves"
)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: (),

    #[command(flatten)]
    broaden: commands::BroadenArgs,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(SpecGenError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_spec_gen_error(&self) -> SpecGenError {
        match self {
            Self::Usage(message) => {
                SpecGenError::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => SpecGenError::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

impl From<SpecGenError> for CliError {
    fn from(error: SpecGenError) -> Self {
        Self::Compute(error)
    }
}

impl From<specgen_core::domain::BroadeningError> for CliError {
    fn from(error: specgen_core::domain::BroadeningError) -> Self {
        Self::Compute(error.into())
    }
}
