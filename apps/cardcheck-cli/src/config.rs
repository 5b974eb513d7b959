//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                               │
//! │     --format json  --strict                                             │
//! │                                                                         │
//! │  2. Environment Variables                                               │
//! │     CARDCHECK_FORMAT=json                                               │
//! │     CARDCHECK_STRICT=true                                               │
//! │     CARDCHECK_LOG=debug                                                 │
//! │                                                                         │
//! │  3. TOML Config File                                                    │
//! │     --config <path>, else the platform config dir:                      │
//! │     ~/.config/cardcheck/cardcheck.toml (Linux)                          │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [output]
//! format = "text"   # text | json
//! pretty = true
//!
//! [input]
//! strict = false
//!
//! [logging]
//! filter = "warn,cardcheck=info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

// =============================================================================
// Output Format
// =============================================================================

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

/// `[input]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSettings {
    /// Reject sequences holding elements above 9 instead of checking them as-is.
    #[serde(default)]
    pub strict: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn,cardcheck=info".to_string()
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardcheckConfig {
    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl CardcheckConfig {
    /// Loads configuration from file and environment, then validates it.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: an explicit path must exist; the platform default may not
    /// 3. Environment variables
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses one TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `CARDCHECK_*` environment variable overrides.
    fn apply_env_overrides(&mut self) -> CliResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup (the environment in production).
    ///
    /// A value that does not parse is an error, not a skipped override: this
    /// runs before any log subscriber is installed.
    fn apply_overrides<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("CARDCHECK_FORMAT") {
            self.output.format = format.parse().map_err(|_| {
                CliError::InvalidConfig(format!(
                    "CARDCHECK_FORMAT: unknown output format '{}'. Valid options: text, json",
                    format
                ))
            })?;
            debug!(format = %format, "Overriding output format from environment");
        }

        if let Some(strict) = lookup("CARDCHECK_STRICT") {
            self.input.strict = strict.trim().parse::<bool>().map_err(|_| {
                CliError::InvalidConfig(format!(
                    "CARDCHECK_STRICT must be true or false, got '{}'",
                    strict
                ))
            })?;
        }

        if let Some(filter) = lookup("CARDCHECK_LOG") {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cardcheck", "cardcheck")
            .map(|dirs| dirs.config_dir().join("cardcheck.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = CardcheckConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty);
        assert!(!config.input.strict);
        assert_eq!(config.logging.filter, "warn,cardcheck=info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CardcheckConfig = toml::from_str("[input]\nstrict = true\n").unwrap();
        assert!(config.input.strict);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[output]\nformat = \"json\"\npretty = false\n\n[logging]\nfilter = \"debug\""
        )
        .unwrap();

        let config = CardcheckConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.pretty);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            CardcheckConfig::load(Some(missing.as_path())),
            Err(CliError::Io(_))
        ));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"yaml\"").unwrap();
        assert!(matches!(
            CardcheckConfig::from_file(file.path()),
            Err(CliError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_filter() {
        let mut config = CardcheckConfig::default();
        config.logging.filter = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("CARDCHECK_FORMAT", "json"),
            ("CARDCHECK_STRICT", "true"),
            ("CARDCHECK_LOG", "trace"),
        ]
        .into_iter()
        .collect();

        let mut config = CardcheckConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.input.strict);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn test_unknown_format_override_is_rejected() {
        let mut config = CardcheckConfig::default();
        let err = config
            .apply_overrides(|key| match key {
                "CARDCHECK_FORMAT" => Some("xml".into()),
                _ => None,
            })
            .unwrap_err();

        assert!(matches!(err, CliError::InvalidConfig(_)));
        assert!(err.to_string().contains("CARDCHECK_FORMAT"));
        assert!(err.to_string().contains("xml"));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_non_boolean_strict_override_is_rejected() {
        let mut config = CardcheckConfig::default();
        let err = config
            .apply_overrides(|key| match key {
                "CARDCHECK_STRICT" => Some("maybe".into()),
                _ => None,
            })
            .unwrap_err();

        assert!(matches!(err, CliError::InvalidConfig(_)));
        assert!(err.to_string().contains("CARDCHECK_STRICT"));
        assert!(!config.input.strict);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&CardcheckConfig::default()).unwrap();
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("[input]"));
        assert!(toml_str.contains("[logging]"));
    }
}
