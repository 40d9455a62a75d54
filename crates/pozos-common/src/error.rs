//! Error types and utilities for the Pozos report

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for Pozos operations
pub type Result<T> = std::result::Result<T, PozosError>;

/// Main error type for Pozos operations
#[derive(Error, Debug)]
pub enum PozosError {
    /// The input CSV does not exist
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Expected column absent or a field with the wrong type
    #[error("Schema error{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Schema { message: String, line: Option<u64> },

    /// Output directory missing or chart file unwritable
    #[error("Cannot write output {}: {message}", .path.display())]
    OutputWrite {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Localization errors (missing message, unparsable catalogue)
    #[error("Localization error: {message}")]
    Localization {
        message: String,
        locale: Option<String>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PozosError {
    /// Create an input-not-found error
    pub fn input_not_found(path: impl AsRef<Path>) -> Self {
        Self::InputNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a schema error pointing at a CSV line
    pub fn schema_at_line(msg: impl Into<String>, line: u64) -> Self {
        Self::Schema {
            message: msg.into(),
            line: Some(line),
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl AsRef<Path>, msg: impl Into<String>) -> Self {
        Self::OutputWrite {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
            source: None,
        }
    }

    /// Create an output write error with source
    pub fn output_write_with_source(
        path: impl AsRef<Path>,
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::OutputWrite {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new localization error
    pub fn localization(msg: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: None,
        }
    }

    /// Create a new localization error with locale
    pub fn localization_with_locale(msg: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::Localization {
            message: msg.into(),
            locale: Some(locale.into()),
        }
    }

    /// Whether this error belongs to the input side (missing file or bad schema)
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputNotFound { .. } | Self::Schema { .. })
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error, keeping the failing line when the reader knows it
impl From<csv::Error> for PozosError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            csv::ErrorKind::Deserialize { err, .. } => Self::Schema {
                message: err.to_string(),
                line,
            },
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => Self::Schema {
                message: format!("expected {expected_len} fields, found {len}"),
                line,
            },
            other => Self::Schema {
                message: format!("{other:?}"),
                line,
            },
        }
    }
}

/// Convert from toml::de::Error to PozosError
impl From<toml::de::Error> for PozosError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

/// Convert from serde_yaml::Error to PozosError
impl From<serde_yaml::Error> for PozosError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config_with_source("YAML parsing error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to PozosError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for PozosError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}
