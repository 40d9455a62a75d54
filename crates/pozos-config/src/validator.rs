//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Regex pattern for locale codes (e.g., es, es-MX)
pub static LOCALE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("Invalid locale regex pattern")
});

/// Locale codes with a shipped catalogue.
pub const SUPPORTED_LOCALES: [&str; 4] = ["es", "es-MX", "en", "en-US"];

/// Accepted output resolution range.
pub const DPI_RANGE: std::ops::RangeInclusive<u32> = 50..=1200;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, returning every problem found.
    pub fn validate(config: &Config) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if let Err(e) = validate_file_path(&config.input.csv_path) {
            problems.push(format!("input.csv_path: {e}"));
        }
        if let Err(e) = validate_file_path(&config.output.directory) {
            problems.push(format!("output.directory: {e}"));
        }

        if config.analysis.well_id.trim().is_empty() {
            problems.push("analysis.well_id: must not be empty".to_string());
        }
        if config.analysis.kde_points < 2 {
            problems.push(format!(
                "analysis.kde_points: need at least 2 points, got {}",
                config.analysis.kde_points
            ));
        }
        if config.analysis.violin_points < 2 {
            problems.push(format!(
                "analysis.violin_points: need at least 2 points, got {}",
                config.analysis.violin_points
            ));
        }
        let (lo, hi) = config.analysis.day_limit;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            problems.push(format!("analysis.day_limit: [{lo}, {hi}] is not an increasing range"));
        }

        if !DPI_RANGE.contains(&config.graphs.dpi) {
            problems.push(format!(
                "graphs.dpi: {} outside {}..={}",
                config.graphs.dpi,
                DPI_RANGE.start(),
                DPI_RANGE.end()
            ));
        }
        if !HEX_COLOR_REGEX.is_match(&config.graphs.background_color) {
            problems.push(format!(
                "graphs.background_color: '{}' is not #RRGGBB",
                config.graphs.background_color
            ));
        }
        if config.graphs.font_family.trim().is_empty() {
            problems.push("graphs.font_family: must not be empty".to_string());
        }
        if !LOCALE_REGEX.is_match(&config.graphs.locale) {
            problems.push(format!("graphs.locale: '{}' is not a locale code", config.graphs.locale));
        } else if !SUPPORTED_LOCALES.contains(&config.graphs.locale.as_str()) {
            problems.push(format!(
                "graphs.locale: '{}' is not one of {}",
                config.graphs.locale,
                SUPPORTED_LOCALES.join(", ")
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &Path) -> Result<(), &'static str> {
    let path = path.to_string_lossy();
    if path.is_empty() {
        return Err("empty path");
    }

    // Colon is allowed for Windows drive letters (C:\)
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err("path contains invalid characters");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_hex_color_regex() {
        assert!(HEX_COLOR_REGEX.is_match("#FFFFFF"));
        assert!(HEX_COLOR_REGEX.is_match("#abc123"));

        assert!(!HEX_COLOR_REGEX.is_match("FFFFFF"));
        assert!(!HEX_COLOR_REGEX.is_match("#FFF"));
        assert!(!HEX_COLOR_REGEX.is_match("#GGGGGG"));
    }

    #[test]
    fn test_locale_regex() {
        assert!(LOCALE_REGEX.is_match("es-MX"));
        assert!(LOCALE_REGEX.is_match("en"));
        assert!(!LOCALE_REGEX.is_match("spanish"));
        assert!(!LOCALE_REGEX.is_match("es_MX"));
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path(Path::new("entrada/produccion.csv")).is_ok());
        assert!(validate_file_path(Path::new("C:\\datos\\pozos.csv")).is_ok());

        assert!(validate_file_path(Path::new("")).is_err());
        assert!(validate_file_path(Path::new("salida|tmp")).is_err());
        assert!(validate_file_path(Path::new("salida*")).is_err());
    }

    #[test]
    fn test_collects_every_problem() {
        let mut config = Config::default();
        config.analysis.well_id = "  ".to_string();
        config.graphs.dpi = 0;
        config.analysis.day_limit = (100.0, 0.0);

        let problems = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(problems.len(), 3);
        assert!(problems[0].starts_with("analysis.well_id"));
        assert!(problems[1].starts_with("analysis.day_limit"));
        assert!(problems[2].starts_with("graphs.dpi"));
    }

    #[test]
    fn test_rejects_unsupported_locale() {
        let mut config = Config::default();
        config.graphs.locale = "fr-FR".to_string();

        let problems = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("es-MX"));
    }

    #[test]
    fn test_rejects_single_point_curves() {
        let mut config = Config::default();
        config.analysis.kde_points = 1;
        config.analysis.violin_points = 0;

        let problems = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(problems.len(), 2);
    }
}
