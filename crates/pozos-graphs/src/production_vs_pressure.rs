//! Scatter of oil production against wellhead pressure for one well.

use crate::traits::GraphRenderer;
use crate::types::{FigureSize, GraphConfig};
use crate::utils::{build_chart_2d, draw_mesh, finish, open_canvas, padded_range, palette, GridLines};
use async_trait::async_trait;
use plotters::prelude::*;
use pozos_common::Result;
use pozos_data::{Column, WellSubset};
use pozos_i18n::{messages, ChartMessages};
use std::path::Path;

/// Pressure (x) against oil production (y)
#[derive(Debug, Default)]
pub struct ProductionVsPressureGraph {
    pub points: Vec<(f64, f64)>,
}

impl ProductionVsPressureGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_subset(subset: &WellSubset) -> Self {
        let points = subset
            .column(Column::WellheadPressure)
            .into_iter()
            .zip(subset.column(Column::OilProduction))
            .filter(|(pressure, oil)| pressure.is_finite() && oil.is_finite())
            .collect();
        Self { points }
    }
}

#[async_trait]
impl GraphRenderer for ProductionVsPressureGraph {
    async fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let root = open_canvas(self, config, path)?;

        let x_range = padded_range(self.points.iter().map(|(x, _)| *x), 0.05);
        let y_range = padded_range(self.points.iter().map(|(_, y)| *y), 0.05);
        let mut chart = build_chart_2d(&root, config, x_range, y_range)?;
        draw_mesh(self, &mut chart, config, GridLines::Both, false)?;

        let radius = config.px(3);
        let style = palette::TAB_BLUE.mix(0.7).filled();
        chart.draw_series(
            self.points
                .iter()
                .map(|point| Circle::new(*point, radius, style)),
        )?;

        finish(&root, self.name(), path)
    }

    fn name(&self) -> &'static str {
        "production_vs_pressure"
    }

    fn file_name(&self) -> &'static str {
        "produccion_vs_presion.png"
    }

    fn messages(&self) -> ChartMessages {
        messages::SCATTER
    }

    fn figure(&self) -> FigureSize {
        FigureSize::COMPACT
    }
}
