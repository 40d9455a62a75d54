//! Configuration schema definitions using serde.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input dataset.
    pub input: InputConfig,
    /// Output directory for the rendered charts.
    pub output: OutputConfig,
    /// Well selection and aggregation parameters.
    pub analysis: AnalysisConfig,
    /// Chart rendering settings.
    pub graphs: GraphsConfig,
    /// Logging settings.
    pub logging: LoggingSection,
}

/// Input dataset configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path of the production CSV.
    pub csv_path: PathBuf,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the PNG files.
    pub directory: PathBuf,
    /// Create the directory when it does not exist instead of failing.
    pub create_missing: bool,
}

/// Analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Well used by the single-well charts.
    pub well_id: String,
    /// Evaluation points of the distribution curves.
    pub kde_points: usize,
    /// Evaluation points of each violin outline.
    pub violin_points: usize,
    /// Visible day range of the daily production chart.
    pub day_limit: (f64, f64),
}

/// Chart rendering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphsConfig {
    /// Output resolution in dots per inch.
    pub dpi: u32,
    /// Background colour as `#RRGGBB`.
    pub background_color: String,
    /// Font family used for every text element.
    pub font_family: String,
    /// Locale of titles and axis labels.
    pub locale: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Filter directive, e.g. `info` or `pozos_graphs=debug`.
    pub level: String,
    /// Emit JSON lines.
    pub json_format: bool,
    /// Optional log file (appended).
    pub file_path: Option<String>,
}

impl LoggingSection {
    /// Convert into the logging setup understood by `pozos-common`.
    pub fn to_logging_config(&self) -> pozos_common::LoggingConfig {
        pozos_common::LoggingConfig {
            level: self.level.clone(),
            json_format: self.json_format,
            file_path: self.file_path.clone(),
            ..pozos_common::LoggingConfig::default()
        }
    }
}
