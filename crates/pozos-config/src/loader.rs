//! Configuration loading utilities

use crate::schema::Config;
use crate::validator::ConfigValidator;
use pozos_common::{PozosError, Result as PozosResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "POZOS_CONFIG_PATH";

/// Files searched in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["pozos.toml", "pozos.yaml", "pozos.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// File extension is neither TOML nor YAML
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {}", .0.join("; "))]
    ValidationError(Vec<String>),
}

impl From<ConfigError> for PozosError {
    fn from(err: ConfigError) -> Self {
        PozosError::config_with_source("invalid configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML or YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!("Reading configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::parse(path, &content)?;

        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config).map_err(ConfigError::ValidationError)?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the explicit path, `POZOS_CONFIG_PATH`, a
    /// `pozos.*` file in the working directory, or the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> PozosResult<Config> {
        if let Some(path) = Self::resolve_path(explicit) {
            return Ok(Self::load_config(path)?);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config).map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PozosResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Pick the configuration file to read, if any
    fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
    }

    /// Parse file contents according to the file extension
    pub fn parse(path: &Path, content: &str) -> Result<Config, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(toml::from_str(content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(content)?),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(input) = env::var("POZOS_INPUT") {
            config.input.csv_path = input.into();
        }

        if let Ok(output) = env::var("POZOS_OUTPUT_DIR") {
            config.output.directory = output.into();
        }

        if let Ok(well) = env::var("POZOS_WELL") {
            config.analysis.well_id = well;
        }

        if let Ok(dpi) = env::var("POZOS_DPI") {
            config.graphs.dpi = dpi.parse().map_err(|e| ConfigError::EnvParseError {
                var: "POZOS_DPI".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(locale) = env::var("POZOS_LOCALE") {
            config.graphs.locale = locale;
        }

        if let Ok(level) = env::var("POZOS_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pozos_common::test_utils::config_fixtures;

    #[test]
    fn test_parse_full_toml() {
        let config = ConfigLoader::parse(Path::new("pozos.toml"), config_fixtures::full_config_toml())
            .unwrap();

        assert_eq!(config.input.csv_path, PathBuf::from("datos/pozos.csv"));
        assert_eq!(config.output.directory, PathBuf::from("graficas"));
        assert!(config.output.create_missing);
        assert_eq!(config.analysis.well_id, "Pozo Sur");
        assert_eq!(config.analysis.kde_points, 500);
        assert_eq!(config.analysis.day_limit, (0.0, 50.0));
        assert_eq!(config.graphs.dpi, 150);
        assert_eq!(config.graphs.locale, "en-US");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
    }

    #[test]
    fn test_parse_partial_yaml_keeps_defaults() {
        let config = ConfigLoader::parse(Path::new("pozos.yml"), config_fixtures::partial_config_yaml())
            .unwrap();

        assert_eq!(config.analysis.well_id, "Pozo Este");
        assert_eq!(config.graphs.dpi, 100);
        assert_eq!(config.analysis.kde_points, 1000);
        assert_eq!(config.output.directory, PathBuf::from("salida"));
    }

    #[test]
    fn test_parse_unknown_extension() {
        let err = ConfigLoader::parse(Path::new("pozos.ini"), "").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "ini"));
    }

    #[test]
    fn test_parse_malformed_toml() {
        let err = ConfigLoader::parse(Path::new("pozos.toml"), "[graphs\ndpi = 3").unwrap_err();
        assert!(matches!(err, ConfigError::TomlError(_)));
    }

    #[test]
    fn test_validation_error_message_lists_problems() {
        let err = ConfigError::ValidationError(vec!["a: bad".into(), "b: worse".into()]);
        assert_eq!(err.to_string(), "Configuration validation failed: a: bad; b: worse");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ConfigLoader::load_config("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }
}
