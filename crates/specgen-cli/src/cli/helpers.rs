use super::CliError;
use anyhow::Context;
use specgen_core::domain::SpecGenError;
use specgen_core::modules::write_text_artifact;
use std::io::Write;
use std::path::Path;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub(super) const LOG_FILTER_ENV: &str = "SPEC_GEN_LOG";
pub(super) const DEFAULT_LOG_FILTER: &str = "warn";

static INIT: Once = Once::new();

/// Install the stderr subscriber once per process; stdout carries only the curve.
///
/// Filter comes from `SPEC_GEN_LOG`, falling back to `warn`.
pub(super) fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .init();
    });
}

pub(super) fn write_artifact(
    path: &Path,
    content: &str,
    placeholder: &'static str,
    description: &str,
) -> Result<(), CliError> {
    write_text_artifact(path, content).map_err(|source| {
        CliError::Compute(SpecGenError::io_system(
            placeholder,
            format!(
                "failed to write {} '{}': {}",
                description,
                path.display(),
                source
            ),
        ))
    })
}

pub(super) fn write_stdout(content: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .context("failed to write broadened spectrum to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
