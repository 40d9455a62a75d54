//! 3D scatter of day, wellhead pressure and oil production for one well.

use crate::traits::GraphRenderer;
use crate::types::GraphConfig;
use crate::utils::{
    apply_3d_projection, draw_3d_axis_titles, draw_legend, finish, font, open_canvas, padded_range,
    palette,
};
use async_trait::async_trait;
use plotters::prelude::*;
use pozos_common::Result;
use pozos_data::{Column, WellSubset};
use pozos_i18n::{messages, ChartMessages};
use std::path::Path;

/// `(day, pressure, oil production)` markers
#[derive(Debug, Default)]
pub struct ProductionScatter3dGraph {
    pub points: Vec<(f64, f64, f64)>,
}

impl ProductionScatter3dGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_subset(subset: &WellSubset) -> Self {
        let points = subset
            .days()
            .into_iter()
            .zip(subset.column(Column::WellheadPressure))
            .zip(subset.column(Column::OilProduction))
            .map(|((day, pressure), oil)| (day as f64, pressure, oil))
            .filter(|(_, pressure, oil)| pressure.is_finite() && oil.is_finite())
            .collect();
        Self { points }
    }
}

#[async_trait]
impl GraphRenderer for ProductionScatter3dGraph {
    async fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let root = open_canvas(self, config, path)?;

        // Production is the vertical axis, pressure the depth axis.
        let x_range = padded_range(self.points.iter().map(|(day, _, _)| *day), 0.05);
        let y_range = padded_range(self.points.iter().map(|(_, _, oil)| *oil), 0.05);
        let z_range = padded_range(self.points.iter().map(|(_, pressure, _)| *pressure), 0.05);

        {
            let mut chart = ChartBuilder::on(&root)
                .caption(&config.title, font(config, &config.style.title_font))
                .margin(config.px(config.style.margins.outer))
                .build_cartesian_3d(x_range, y_range, z_range)?;
            apply_3d_projection(&mut chart);

            chart
                .configure_axes()
                .light_grid_style(self.get_grid_color(config).mix(0.3))
                .max_light_lines(3)
                .label_style(font(config, &config.style.label_font))
                .draw()?;

            let radius = config.px(3);
            let style = palette::BLUE.filled();
            let series = chart.draw_series(
                self.points
                    .iter()
                    .map(|(day, pressure, oil)| Circle::new((*day, *oil, *pressure), radius, style)),
            )?;
            series
                .label(config.legend_at(0))
                .legend(move |(x, y)| Circle::new((x + radius as i32, y), radius, style));

            draw_legend(&mut chart, config)?;
        }

        draw_3d_axis_titles(&root, config)?;
        finish(&root, self.name(), path)
    }

    fn name(&self) -> &'static str {
        "production_scatter_3d"
    }

    fn file_name(&self) -> &'static str {
        "dispersión_3D_produccion_petroleo_gas.png"
    }

    fn messages(&self) -> ChartMessages {
        messages::SCATTER_3D
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FigureSize;
    use pozos_common::test_utils::csv_fixtures;
    use pozos_data::Dataset;
    use tempfile::tempdir;

    fn subset() -> WellSubset {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pozos.csv");
        std::fs::write(&path, csv_fixtures::sample_csv()).unwrap();
        Dataset::load(&path).unwrap().filter_well("Pozo Norte")
    }

    #[test]
    fn test_from_subset_orders_by_day() {
        let graph = ProductionScatter3dGraph::from_subset(&subset());

        assert!(!graph.points.is_empty());
        assert!(graph.points.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[tokio::test]
    async fn test_render_with_legend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dispersion_3d.png");
        let config = GraphConfig {
            dpi: 40,
            figure: FigureSize::WIDE,
            legend: vec!["Pozo Norte".to_string()],
            ..Default::default()
        };

        ProductionScatter3dGraph::from_subset(&subset())
            .render_to_file(&config, &path)
            .await
            .unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_render_without_points() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vacio.png");
        let config = GraphConfig {
            dpi: 40,
            ..Default::default()
        };

        ProductionScatter3dGraph::new()
            .render_to_file(&config, &path)
            .await
            .unwrap();
        assert!(path.exists());
    }
}
