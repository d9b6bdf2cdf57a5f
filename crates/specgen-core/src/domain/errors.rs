use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SpecGenResult<T> = Result<T, SpecGenError>;
pub type BroadeningResult<T> = Result<T, BroadeningError>;

/// Failure taxonomy of the broadening core.
///
/// Every variant carries enough context (which parameter, which value) for a
/// caller to build a user-facing message; the core never prints.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BroadeningError {
    #[error("invalid {parameter}: {reason}, got {value}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("invalid energy grid: {reason}")]
    InvalidGrid { reason: String },
    #[error("unsupported spectrum type '{tag}': {reason}")]
    UnsupportedSpectrumType { tag: String, reason: &'static str },
    #[error("{quantity} sums to exactly zero; cannot normalize the broadened integral")]
    DivisionByZero { quantity: &'static str },
    #[error("transition column length mismatch: energies={energies}, intensities={intensities}")]
    LengthMismatch { energies: usize, intensities: usize },
}

impl BroadeningError {
    pub(crate) fn invalid_parameter(
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            reason,
        }
    }

    pub(crate) fn invalid_grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            reason: reason.into(),
        }
    }

    pub const fn category(&self) -> SpecGenErrorCategory {
        match self {
            Self::DivisionByZero { .. } => SpecGenErrorCategory::ComputationError,
            Self::InvalidParameter { .. }
            | Self::InvalidGrid { .. }
            | Self::UnsupportedSpectrumType { .. }
            | Self::LengthMismatch { .. } => SpecGenErrorCategory::InputValidationError,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::InvalidParameter { parameter, .. } => match *parameter {
                "sigma" | "gamma" | "kernel_width" => "INPUT.KERNEL_WIDTH",
                "num_points" => "INPUT.QUADRATURE",
                "partitions" => "INPUT.PARTITIONS",
                _ => "INPUT.TRANSITION_VALUE",
            },
            Self::InvalidGrid { .. } => "INPUT.ENERGY_GRID",
            Self::UnsupportedSpectrumType { .. } => "INPUT.SPECTRUM_TYPE",
            Self::DivisionByZero { .. } => "RUN.INTEGRAL_ZERO_INTENSITY",
            Self::LengthMismatch { .. } => "INPUT.TRANSITION_COLUMNS",
        }
    }
}

/// Failure class of a run; fixes the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecGenErrorCategory {
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl SpecGenErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }
}

/// A run failure as reported on stderr: class, stable placeholder code, message.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecGenError {
    category: SpecGenErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl SpecGenError {
    pub fn new(
        category: SpecGenErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SpecGenErrorCategory::InputValidationError, placeholder, message)
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SpecGenErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(SpecGenErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> SpecGenErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> String {
        format!("FATAL EXIT CODE: {}", self.exit_code())
    }
}

impl From<BroadeningError> for SpecGenError {
    fn from(error: BroadeningError) -> Self {
        Self::new(error.category(), error.placeholder(), error.to_string())
    }
}

impl Display for SpecGenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.label(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for SpecGenError {}

#[cfg(test)]
mod tests {
    use super::{BroadeningError, SpecGenError, SpecGenErrorCategory};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (
                SpecGenErrorCategory::InputValidationError,
                2,
                "InputValidationError",
            ),
            (SpecGenErrorCategory::IoSystemError, 3, "IoSystemError"),
            (SpecGenErrorCategory::ComputationError, 4, "ComputationError"),
            (SpecGenErrorCategory::InternalError, 5, "InternalError"),
        ];

        for (category, exit_code, label) in cases {
            assert_eq!(category.exit_code(), exit_code);
            assert_eq!(category.label(), label);
        }
    }

    #[test]
    fn fatal_error_renders_diagnostic_lines() {
        let error = SpecGenError::input_validation(
            "INPUT.SPEC_HEADER",
            "spectrum file header is missing at line 1",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.SPEC_HEADER] spectrum file header is missing at line 1"
        );
        assert_eq!(error.fatal_exit_line(), "FATAL EXIT CODE: 2");
    }

    #[test]
    fn broadening_errors_map_to_categorized_errors() {
        let width: SpecGenError =
            BroadeningError::invalid_parameter("sigma", -1.0, "must be finite and > 0").into();
        assert_eq!(width.placeholder(), "INPUT.KERNEL_WIDTH");
        assert_eq!(width.exit_code(), 2);
        assert_eq!(width.message(), "invalid sigma: must be finite and > 0, got -1");

        let zero: SpecGenError = BroadeningError::DivisionByZero {
            quantity: "total transition intensity",
        }
        .into();
        assert_eq!(zero.category(), SpecGenErrorCategory::ComputationError);
        assert_eq!(zero.placeholder(), "RUN.INTEGRAL_ZERO_INTENSITY");
        assert_eq!(zero.exit_code(), 4);

        let emission: SpecGenError = BroadeningError::UnsupportedSpectrumType {
            tag: "em".to_string(),
            reason: "emission spectra are not supported",
        }
        .into();
        assert_eq!(emission.placeholder(), "INPUT.SPECTRUM_TYPE");
        assert_eq!(
            emission.message(),
            "unsupported spectrum type 'em': emission spectra are not supported"
        );
    }
}
