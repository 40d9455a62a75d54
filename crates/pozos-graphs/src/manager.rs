//! Graph manager for orchestrating report-wide chart generation.

use crate::average_production::AverageProductionGraph;
use crate::cumulative_production::CumulativeProductionGraph;
use crate::daily_production::DailyProductionGraph;
use crate::production_distribution::ProductionDistributionGraph;
use crate::production_scatter_3d::ProductionScatter3dGraph;
use crate::production_surface::ProductionSurfaceGraph;
use crate::production_vs_pressure::ProductionVsPressureGraph;
use crate::traits::GraphRenderer;
use crate::types::GraphConfig;
use crate::violin_pressure::ViolinPressureGraph;
use pozos_common::{PozosError, Result};
use pozos_config::{AnalysisConfig, Config, GraphsConfig, OutputConfig};
use pozos_data::{cumulative_production, Dataset, WellSubset};
use pozos_i18n::{ChartLabels, I18nManager};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Renders the eight report charts one after another.
pub struct GraphManager {
    analysis: AnalysisConfig,
    output: OutputConfig,
    settings: GraphsConfig,
    i18n: I18nManager,
}

impl GraphManager {
    /// Creates a manager with the catalogue of the configured locale.
    pub fn new(config: &Config) -> Result<Self> {
        let i18n = I18nManager::from_code(&config.graphs.locale)?;
        Ok(Self::with_i18n(config, i18n))
    }

    pub fn with_i18n(config: &Config, i18n: I18nManager) -> Self {
        Self {
            analysis: config.analysis.clone(),
            output: config.output.clone(),
            settings: config.graphs.clone(),
            i18n,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output.directory
    }

    /// Make sure the output directory exists before anything is drawn.
    ///
    /// A missing directory is an [`PozosError::OutputWrite`] unless
    /// `output.create_missing` is set, in which case it is created.
    pub fn prepare_output_dir(&self) -> Result<&Path> {
        let dir = self.output_dir();
        if dir.is_dir() {
            return Ok(dir);
        }
        if !self.output.create_missing {
            return Err(PozosError::output_write(dir, "output directory does not exist"));
        }

        std::fs::create_dir_all(dir).map_err(|e| {
            PozosError::output_write_with_source(dir, "failed to create output directory", e)
        })?;
        info!("Created output directory {}", dir.display());
        Ok(dir)
    }

    /// Build every renderer, in report order, from the full dataset and the
    /// analysed well's rows.
    pub fn build_renderers(&self, dataset: &Dataset, subset: &WellSubset) -> Vec<Box<dyn GraphRenderer>> {
        vec![
            Box::new(ViolinPressureGraph::from_dataset(dataset, self.analysis.violin_points)),
            Box::new(CumulativeProductionGraph::from_series(&cumulative_production(subset))),
            Box::new(ProductionDistributionGraph::from_dataset(dataset, self.analysis.kde_points)),
            Box::new(AverageProductionGraph::from_dataset(dataset)),
            Box::new(ProductionVsPressureGraph::from_subset(subset)),
            Box::new(DailyProductionGraph::from_subset(subset, self.analysis.day_limit)),
            Box::new(ProductionSurfaceGraph::default()),
            Box::new(ProductionScatter3dGraph::from_subset(subset)),
        ]
    }

    /// Resolve the localized texts and rendering settings of one chart.
    pub fn graph_config(&self, renderer: &dyn GraphRenderer) -> Result<GraphConfig> {
        let labels = ChartLabels::resolve(&self.i18n, renderer.messages(), &self.analysis.well_id)?;
        Ok(GraphConfig::from_settings(labels, renderer.figure(), &self.settings))
    }

    /// Render all charts and return the written paths.
    ///
    /// The first failing chart aborts the run.
    #[instrument(skip_all, fields(well = %self.analysis.well_id))]
    pub async fn generate_all(&self, dataset: &Dataset, subset: &WellSubset) -> Result<Vec<PathBuf>> {
        let dir = self.prepare_output_dir()?.to_path_buf();
        let renderers = self.build_renderers(dataset, subset);
        let mut written = Vec::with_capacity(renderers.len());

        for renderer in &renderers {
            let config = self.graph_config(renderer.as_ref())?;
            let path = dir.join(renderer.file_name());
            debug!("Rendering {} ({}x{} px)", renderer.name(), config.pixel_size().0, config.pixel_size().1);

            renderer.render_to_file(&config, &path).await?;
            written.push(path);
        }

        info!("Rendered {} charts into {}", written.len(), dir.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FigureSize;
    use tempfile::tempdir;

    fn config_for(dir: &Path) -> Config {
        let mut config = Config::default();
        config.output.directory = dir.to_path_buf();
        config.graphs.dpi = 50;
        config
    }

    #[test]
    fn test_renderers_in_report_order() {
        let manager = GraphManager::new(&Config::default()).unwrap();
        let renderers = manager.build_renderers(&Dataset::default(), &WellSubset::default());

        let files: Vec<_> = renderers.iter().map(|r| r.file_name()).collect();
        assert_eq!(
            files,
            vec![
                "violin_plot_presion_pozo.png",
                "produccion_acumulada_pozo_norte.png",
                "curva_distribucion_produccion_petroleo_gas.png",
                "produccion_promedio_por_pozo.png",
                "produccion_vs_presion.png",
                "produccion_diaria_pozo_norte.png",
                "superficie_3D_produccion_petroleo.png",
                "dispersión_3D_produccion_petroleo_gas.png",
            ]
        );
    }

    #[test]
    fn test_graph_config_uses_locale_and_settings() {
        let manager = GraphManager::new(&Config::default()).unwrap();
        let renderers = manager.build_renderers(&Dataset::default(), &WellSubset::default());

        let config = manager.graph_config(renderers[4].as_ref()).unwrap();
        assert_eq!(config.dpi, 300);
        assert_eq!(config.figure, FigureSize::COMPACT);
        assert_eq!(config.style.background_color.as_deref(), Some("#FFFFFF"));
        assert!(config.z_label.is_none());

        let config = manager.graph_config(renderers[6].as_ref()).unwrap();
        assert!(config.z_label.is_some());
    }

    #[test]
    fn test_missing_output_dir_is_rejected() {
        let dir = tempdir().unwrap();
        let config = config_for(&dir.path().join("salida"));
        let manager = GraphManager::new(&config).unwrap();

        let err = manager.prepare_output_dir().unwrap_err();
        assert!(matches!(err, PozosError::OutputWrite { .. }));
    }

    #[test]
    fn test_missing_output_dir_created_on_request() {
        let dir = tempdir().unwrap();
        let mut config = config_for(&dir.path().join("salida"));
        config.output.create_missing = true;
        let manager = GraphManager::new(&config).unwrap();

        let created = manager.prepare_output_dir().unwrap();
        assert!(created.is_dir());
    }

    #[tokio::test]
    async fn test_generate_all_fails_before_drawing() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("salida");
        let manager = GraphManager::new(&config_for(&target)).unwrap();

        let result = manager
            .generate_all(&Dataset::default(), &WellSubset::default())
            .await;
        assert!(result.is_err());
        assert!(!target.exists());
    }
}
