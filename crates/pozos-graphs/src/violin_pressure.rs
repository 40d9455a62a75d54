//! Wellhead pressure distribution per well, drawn as violins.

use crate::traits::GraphRenderer;
use crate::types::GraphConfig;
use crate::utils::{
    build_chart_2d, draw_category_labels, draw_mesh, finish, open_canvas, padded_range, palette,
    GridLines,
};
use async_trait::async_trait;
use plotters::prelude::*;
use pozos_common::Result;
use pozos_data::{violin_stats, Column, Dataset, ViolinStats};
use pozos_i18n::{messages, ChartMessages};
use std::path::Path;

/// Maximum half width of a violin body, in x units.
const HALF_WIDTH: f64 = 0.25;

/// One violin per well, wells in order of first appearance.
#[derive(Debug, Default)]
pub struct ViolinPressureGraph {
    pub violins: Vec<(String, Option<ViolinStats>)>,
}

impl ViolinPressureGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dataset(dataset: &Dataset, points: usize) -> Self {
        let violins = dataset
            .group_by_well(Column::WellheadPressure)
            .into_iter()
            .map(|(well, values)| (well, violin_stats(&values, points)))
            .collect();
        Self { violins }
    }

    /// Body outline as a closed polygon centred on `position`.
    fn body_outline(stats: &ViolinStats, position: f64) -> Vec<(f64, f64)> {
        let peak = stats.outline.max_density();
        if peak <= 0.0 {
            return Vec::new();
        }
        let half = |d: f64| HALF_WIDTH * d / peak;

        let pairs = stats.outline.xs.iter().zip(&stats.outline.densities);
        let left = pairs.clone().map(|(y, d)| (position - half(*d), *y));
        let right = pairs.rev().map(|(y, d)| (position + half(*d), *y));
        left.chain(right).collect()
    }

    fn y_range(&self) -> std::ops::Range<f64> {
        padded_range(
            self.violins
                .iter()
                .filter_map(|(_, s)| s.as_ref())
                .flat_map(|s| [s.min, s.max]),
            0.05,
        )
    }
}

#[async_trait]
impl GraphRenderer for ViolinPressureGraph {
    async fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let root = open_canvas(self, config, path)?;

        let count = self.violins.len().max(1) as f64;
        let y_range = self.y_range();
        let y_bottom = y_range.start;
        let mut chart = build_chart_2d(&root, config, 0.5..count + 0.5, y_range)?;
        draw_mesh(self, &mut chart, config, GridLines::Both, true)?;

        let line = palette::TAB_BLUE.stroke_width(config.px(1));
        let tick = HALF_WIDTH / 2.0;

        for (i, (_, stats)) in self.violins.iter().enumerate() {
            let Some(stats) = stats else { continue };
            let position = (i + 1) as f64;

            let outline = Self::body_outline(stats, position);
            if !outline.is_empty() {
                chart.draw_series(std::iter::once(Polygon::new(
                    outline.clone(),
                    palette::TAB_BLUE.mix(0.3).filled(),
                )))?;
                let mut edge = outline;
                if let Some(first) = edge.first().copied() {
                    edge.push(first);
                }
                chart.draw_series(std::iter::once(PathElement::new(edge, palette::TAB_BLUE.mix(0.5))))?;
            }

            chart.draw_series(std::iter::once(PathElement::new(
                vec![(position, stats.min), (position, stats.max)],
                line,
            )))?;
            chart.draw_series(
                [stats.min, stats.max, stats.mean, stats.median]
                    .into_iter()
                    .map(|y| PathElement::new(vec![(position - tick, y), (position + tick, y)], line)),
            )?;
        }

        let labels: Vec<(f64, &str)> = self
            .violins
            .iter()
            .enumerate()
            .map(|(i, (well, _))| ((i + 1) as f64, well.as_str()))
            .collect();
        draw_category_labels(&root, &chart, config, &labels, y_bottom)?;

        finish(&root, self.name(), path)
    }

    fn name(&self) -> &'static str {
        "violin_pressure"
    }

    fn file_name(&self) -> &'static str {
        "violin_plot_presion_pozo.png"
    }

    fn messages(&self) -> ChartMessages {
        messages::VIOLIN
    }
}
