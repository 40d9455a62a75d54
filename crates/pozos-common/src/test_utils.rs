//! Test utilities and shared test helpers for the Pozos workspace.
//!
//! Fixture CSV text, temporary directories and logging setup used by the unit
//! and integration tests of every crate.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Write `contents` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// CSV fixtures shaped like the production export.
pub mod csv_fixtures {
    use super::*;

    /// Header row shared by every fixture.
    pub const HEADER: &str =
        "Well_ID,Day,Oil_Production,Gas_Production,Water_Cut,Wellhead_Pressure,Reservoir_Temperature";

    /// Three wells, "Pozo Norte" rows deliberately out of day order.
    pub fn sample_csv() -> String {
        let rows = [
            "Pozo Norte,3,120.5,410.0,0.21,2450.0,88.0",
            "Pozo Sur,1,95.0,300.5,0.30,2100.0,85.5",
            "Pozo Norte,1,110.0,395.0,0.20,2500.0,88.2",
            "Pozo Este,1,80.0,250.0,0.35,1980.0,84.0",
            "Pozo Sur,2,97.5,310.0,0.31,2080.0,85.4",
            "Pozo Norte,2,115.0,402.5,0.20,2475.0,88.1",
            "Pozo Este,2,82.5,255.0,0.36,1975.0,84.1",
            "Pozo Sur,3,99.0,320.0,0.33,2060.0,85.2",
            "Pozo Norte,4,125.0,420.0,0.22,2425.0,87.9",
            "Pozo Este,3,79.0,248.0,0.37,1960.0,83.9",
        ];
        let mut csv = String::from(HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv.push('\n');
        csv
    }

    /// Deterministic synthetic export with `days` rows per well.
    pub fn generated_csv(wells: &[&str], days: i64) -> String {
        let mut csv = String::from(HEADER);
        for (w, well) in wells.iter().enumerate() {
            let base = 100.0 + 25.0 * w as f64;
            for day in 1..=days {
                let t = day as f64;
                let oil = base + 10.0 * (t / 7.0).sin() - 0.2 * t;
                let gas = 3.5 * oil + 5.0 * (t / 3.0).cos();
                let pressure = 2500.0 - 4.0 * t - 30.0 * w as f64;
                csv.push_str(&format!(
                    "\n{well},{day},{oil:.3},{gas:.3},{:.3},{pressure:.3},{:.2}",
                    0.2 + 0.001 * t,
                    88.0 - 0.01 * t
                ));
            }
        }
        csv.push('\n');
        csv
    }

    /// Header without the `Wellhead_Pressure` column.
    pub fn missing_pressure_csv() -> String {
        "Well_ID,Day,Oil_Production,Gas_Production,Water_Cut,Reservoir_Temperature\n\
         Pozo Norte,1,110.0,395.0,0.20,88.2\n"
            .to_string()
    }

    /// Blank `Water_Cut` on line 2 and blank `Oil_Production` on line 4.
    pub fn blank_cells_csv() -> String {
        format!(
            "{HEADER}\n\
             Pozo Norte,1,110.0,395.0,,2500.0,88.2\n\
             Pozo Norte,2,115.0,402.5,0.20,2475.0,88.1\n\
             Pozo Norte,3,,410.0,0.21,2450.0,88.0\n\
             Pozo Norte,4,125.0,420.0,0.22,2425.0,87.9\n"
        )
    }

    /// Row 3 (line 3 of the file) carries a non-numeric day.
    pub fn malformed_day_csv() -> String {
        format!(
            "{HEADER}\n\
             Pozo Norte,1,110.0,395.0,0.20,2500.0,88.2\n\
             Pozo Norte,dos,115.0,402.5,0.20,2475.0,88.1\n"
        )
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A TOML configuration overriding every section.
    pub fn full_config_toml() -> &'static str {
        r##"
[input]
csv_path = "datos/pozos.csv"

[output]
directory = "graficas"
create_missing = true

[analysis]
well_id = "Pozo Sur"
kde_points = 500
violin_points = 80
day_limit = [0.0, 50.0]

[graphs]
dpi = 150
background_color = "#FAFAFA"
font_family = "serif"
locale = "en-US"

[logging]
level = "debug"
json_format = true
"##
    }

    /// A partial YAML configuration; unspecified fields keep their defaults.
    pub fn partial_config_yaml() -> &'static str {
        r#"
analysis:
  well_id: "Pozo Este"
graphs:
  dpi: 100
"#
    }
}
