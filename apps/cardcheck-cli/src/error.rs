//! # CLI Error Types
//!
//! Errors raised by the harness: configuration, batch files, output.
//! Checksum failures are results, not errors, and never show up here.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors raised outside the core.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML config file could not be parsed.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A batch file or report could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration is well-formed but not usable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Strict mode rejected the input.
    #[error(transparent)]
    Core(#[from] cardcheck_core::CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardcheck_core::ValidationError;

    #[test]
    fn test_invalid_config_message() {
        let err = CliError::InvalidConfig("logging.filter must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: logging.filter must not be empty"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core: cardcheck_core::CoreError =
            ValidationError::InvalidDigit { index: 0, value: 11 }.into();
        let err: CliError = core.into();
        assert_eq!(
            err.to_string(),
            "Validation error: element 0 is 11, expected a digit between 0 and 9"
        );
    }
}
