//! Report run: load the export, select the well, render every chart.

use crate::error::{ReportError, ReportResult};
use pozos_common::init_logging;
use pozos_config::Config;
use pozos_data::Dataset;
use pozos_graphs::GraphManager;
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub rows: usize,
    pub wells: usize,
    /// Rows of the analysed well
    pub well_rows: usize,
    pub written: Vec<PathBuf>,
}

/// The production report application.
pub struct ReportApp {
    config: Config,
}

impl ReportApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Install the tracing subscriber described by the `logging` section.
    ///
    /// `override_level` comes from the command line and wins over `RUST_LOG`.
    pub fn init_logging(&self, override_level: Option<&str>) -> ReportResult<()> {
        init_logging(&self.config.logging.to_logging_config(), override_level)
            .map_err(|e| ReportError::Logging(e.to_string()))
    }

    /// Run the whole report.
    ///
    /// The input is read before the output directory is touched, so a
    /// missing or malformed CSV leaves no files behind.
    pub async fn run(&self) -> ReportResult<ReportSummary> {
        let input = &self.config.input.csv_path;
        let well_id = &self.config.analysis.well_id;
        info!("Generating production report from {}", input.display());

        let dataset = Dataset::load(input)?;
        let subset = dataset.filter_well(well_id);
        if subset.is_empty() {
            warn!("Well '{}' has no rows; its charts will be empty", well_id);
        }

        let manager = GraphManager::new(&self.config)?;
        let written = manager.generate_all(&dataset, &subset).await?;

        let summary = ReportSummary {
            rows: dataset.len(),
            wells: dataset.well_ids().len(),
            well_rows: subset.len(),
            written,
        };
        info!(
            "Report complete: {} rows, {} wells, {} charts",
            summary.rows,
            summary.wells,
            summary.written.len()
        );
        Ok(summary)
    }
}
