//! Default values: the fixed paths, well and resolution of the report.

use crate::schema::*;

/// Default input CSV.
pub const DEFAULT_CSV_PATH: &str = "entrada/produccion_petroleo_mexico.csv";
/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "salida";
/// Well analysed by the single-well charts.
pub const DEFAULT_WELL_ID: &str = "Pozo Norte";
/// Default output resolution.
pub const DEFAULT_DPI: u32 = 300;
/// Default chart locale.
pub const DEFAULT_LOCALE: &str = "es-MX";

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            analysis: AnalysisConfig::default(),
            graphs: GraphsConfig::default(),
            logging: LoggingSection::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIR.into(),
            create_missing: false,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            well_id: DEFAULT_WELL_ID.to_string(),
            kde_points: 1000,
            violin_points: 100,
            day_limit: (0.0, 100.0),
        }
    }
}

impl Default for GraphsConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            background_color: "#FFFFFF".to_string(),
            font_family: "sans-serif".to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            file_path: None,
        }
    }
}
