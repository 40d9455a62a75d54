//! Mean oil production per well as bars, with the overall mean as a dashed line.

use crate::traits::GraphRenderer;
use crate::types::GraphConfig;
use crate::utils::{
    build_chart_2d, draw_category_labels, draw_legend, draw_mesh, finish, open_canvas, palette,
    GridLines,
};
use async_trait::async_trait;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use pozos_common::Result;
use pozos_data::{mean_by_well, overall_mean, Dataset, WellMean};
use pozos_i18n::{messages, ChartMessages};
use std::path::Path;

const BAR_WIDTH: f64 = 0.5;

/// Bar chart of per-well means, highest first
#[derive(Debug, Default)]
pub struct AverageProductionGraph {
    pub means: Vec<WellMean>,
    pub overall: Option<f64>,
}

impl AverageProductionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut graph = Self::new();
        graph.set_data(mean_by_well(dataset));
        graph
    }

    pub fn set_data(&mut self, means: Vec<WellMean>) {
        self.overall = overall_mean(&means);
        self.means = means;
    }

    /// Get max mean for y-axis scaling
    fn get_max_value(&self) -> f64 {
        let max = self.means.iter().map(|m| m.mean).fold(0.0, f64::max);
        if max > 0.0 {
            max * 1.05
        } else {
            1.0
        }
    }
}

#[async_trait]
impl GraphRenderer for AverageProductionGraph {
    async fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let root = open_canvas(self, config, path)?;

        let count = self.means.len().max(1) as f64;
        let x_range = -0.5..count - 0.5;
        let mut chart = build_chart_2d(&root, config, x_range.clone(), 0.0..self.get_max_value())?;
        draw_mesh(self, &mut chart, config, GridLines::HorizontalOnly, true)?;

        let bars = self.means.iter().enumerate().filter(|(_, m)| m.mean.is_finite());
        chart.draw_series(bars.map(|(i, m)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, m.mean)],
                palette::SKY_BLUE.filled(),
            )
        }))?;

        if let Some(overall) = self.overall {
            let style = palette::RED.stroke_width(config.px(1) + 1);
            let dash = config.px(4);
            let legend_width = config.px(20) as i32;
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_range.start, overall), (x_range.end, overall)],
                    dash,
                    dash / 2,
                    style,
                ))?
                .label(config.legend_at(0))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_width, y)], style));
            draw_legend(&mut chart, config)?;
        }

        let labels: Vec<(f64, &str)> = self
            .means
            .iter()
            .enumerate()
            .map(|(i, m)| (i as f64, m.well_id.as_str()))
            .collect();
        draw_category_labels(&root, &chart, config, &labels, 0.0)?;

        finish(&root, self.name(), path)
    }

    fn name(&self) -> &'static str {
        "average_production"
    }

    fn file_name(&self) -> &'static str {
        "produccion_promedio_por_pozo.png"
    }

    fn messages(&self) -> ChartMessages {
        messages::AVERAGE
    }
}
