//! Reader for `.spec` stick-spectrum files.
//!
//! ```text
//! #3 ecd
//! 4.12  0.031
//! 4.57 -0.012
//! 5.03  0.044
//! ```
//!
//! The header gives the transition count and spectrum tag; each following row
//! holds an energy and an intensity. Extra columns and rows past the declared
//! count are ignored.

mod parser;

use crate::domain::{SpecGenError, SpecGenResult, SpectrumInput};
use std::fs;
use std::path::Path;

pub use parser::parse_spectrum_source;

pub fn read_spectrum_file(path: &Path) -> SpecGenResult<SpectrumInput> {
    if !path.is_file() {
        return Err(SpecGenError::io_system(
            "IO.SPEC_READ",
            format!("spectrum file '{}' does not exist", path.display()),
        ));
    }

    let source = fs::read_to_string(path).map_err(|source| {
        SpecGenError::io_system(
            "IO.SPEC_READ",
            format!("failed to read spectrum file '{}': {}", path.display(), source),
        )
    })?;

    let input = parse_spectrum_source(&source)?;
    tracing::info!(
        path = %path.display(),
        tag = %input.tag,
        transitions = input.transitions.len(),
        "loaded spectrum file"
    );
    Ok(input)
}
