//! Filled area of a well's cumulative oil production.

use crate::traits::GraphRenderer;
use crate::types::GraphConfig;
use crate::utils::{build_chart_2d, draw_mesh, finish, open_canvas, padded_range, palette, GridLines};
use async_trait::async_trait;
use plotters::prelude::*;
use pozos_common::Result;
use pozos_data::CumulativeSeries;
use pozos_i18n::{messages, ChartMessages};
use std::path::Path;

/// Cumulative production area chart
#[derive(Debug, Default)]
pub struct CumulativeProductionGraph {
    /// `(day, running total)` in day order
    pub data: Vec<(f64, f64)>,
}

impl CumulativeProductionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_series(series: &CumulativeSeries) -> Self {
        let mut graph = Self::new();
        graph.set_data(series);
        graph
    }

    /// Days without a total are left out of the area.
    pub fn set_data(&mut self, series: &CumulativeSeries) {
        self.data = series
            .points
            .iter()
            .filter(|(_, total)| total.is_finite())
            .map(|(day, total)| (*day as f64, *total))
            .collect();
    }

    /// The area is filled down to zero, so zero is always in range.
    fn get_y_range(&self) -> std::ops::Range<f64> {
        if self.data.is_empty() {
            return 0.0..1.0;
        }
        padded_range(self.data.iter().map(|(_, y)| *y).chain([0.0]), 0.05)
    }
}

#[async_trait]
impl GraphRenderer for CumulativeProductionGraph {
    async fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let root = open_canvas(self, config, path)?;

        let x_range = padded_range(self.data.iter().map(|(x, _)| *x), 0.05);
        let mut chart = build_chart_2d(&root, config, x_range, self.get_y_range())?;
        draw_mesh(self, &mut chart, config, GridLines::Both, false)?;

        if !self.data.is_empty() {
            chart.draw_series(
                AreaSeries::new(self.data.iter().copied(), 0.0, palette::GREEN.mix(0.5))
                    .border_style(palette::GREEN.mix(0.5)),
            )?;
        }

        finish(&root, self.name(), path)
    }

    fn name(&self) -> &'static str {
        "cumulative_production"
    }

    fn file_name(&self) -> &'static str {
        "produccion_acumulada_pozo_norte.png"
    }

    fn messages(&self) -> ChartMessages {
        messages::CUMULATIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_data_converts_days() {
        let series = CumulativeSeries {
            points: vec![(1, 3.0), (2, 7.0), (3, 12.0)],
        };
        let graph = CumulativeProductionGraph::from_series(&series);

        assert_eq!(graph.data, vec![(1.0, 3.0), (2.0, 7.0), (3.0, 12.0)]);
        let range = graph.get_y_range();
        assert!(range.start < 0.0 && range.end > 12.0);
    }

    #[tokio::test]
    async fn test_render_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("acumulada.png");
        let config = GraphConfig {
            dpi: 40,
            ..Default::default()
        };

        let graph = CumulativeProductionGraph::from_series(&CumulativeSeries {
            points: vec![(1, 110.0), (2, 225.0), (3, 345.5)],
        });
        graph.render_to_file(&config, &path).await.unwrap();

        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
