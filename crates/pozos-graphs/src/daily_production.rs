//! Daily oil production line of one well

use crate::traits::GraphRenderer;
use crate::types::{FigureSize, GraphConfig};
use crate::utils::{
    build_chart_2d, draw_legend, draw_mesh, finish, open_canvas, padded_range, palette, GridLines,
};
use async_trait::async_trait;
use plotters::prelude::*;
use pozos_common::Result;
use pozos_data::WellSubset;
use pozos_i18n::{messages, ChartMessages};
use std::path::Path;

/// Daily production line graph with a fixed day window
#[derive(Debug)]
pub struct DailyProductionGraph {
    /// `(day, oil production)` in day order
    pub data: Vec<(f64, f64)>,
    /// Visible day range
    pub day_limit: (f64, f64),
}

impl Default for DailyProductionGraph {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            day_limit: (0.0, 100.0),
        }
    }
}

impl DailyProductionGraph {
    pub fn new(day_limit: (f64, f64)) -> Self {
        Self {
            data: Vec::new(),
            day_limit,
        }
    }

    pub fn from_subset(subset: &WellSubset, day_limit: (f64, f64)) -> Self {
        let mut graph = Self::new(day_limit);
        graph.data = subset
            .records
            .iter()
            .map(|r| (r.day as f64, r.oil_production))
            .collect();
        graph
    }

    /// The line clipped to the visible day range.
    ///
    /// Segments crossing an edge are cut where they meet it, so the line runs
    /// to the border instead of stopping at the last point inside. Points with
    /// a missing value are skipped.
    fn visible_data(&self) -> Vec<(f64, f64)> {
        let (lo, hi) = self.day_limit;
        let points: Vec<(f64, f64)> = self
            .data
            .iter()
            .copied()
            .filter(|(day, oil)| day.is_finite() && oil.is_finite())
            .collect();

        if let [only] = points.as_slice() {
            return if (lo..=hi).contains(&only.0) { vec![*only] } else { Vec::new() };
        }

        let mut visible: Vec<(f64, f64)> = Vec::new();
        for segment in points.windows(2) {
            if let Some((start, end)) = clip_segment(segment[0], segment[1], lo, hi) {
                for point in [start, end] {
                    if visible.last() != Some(&point) {
                        visible.push(point);
                    }
                }
            }
        }
        visible
    }
}

/// Part of the segment `a`-`b` with `lo <= x <= hi`, if any.
fn clip_segment(a: (f64, f64), b: (f64, f64), lo: f64, hi: f64) -> Option<((f64, f64), (f64, f64))> {
    let dx = b.0 - a.0;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    if dx == 0.0 {
        if !(lo..=hi).contains(&a.0) {
            return None;
        }
    } else {
        let (t_lo, t_hi) = ((lo - a.0) / dx, (hi - a.0) / dx);
        t0 = t0.max(t_lo.min(t_hi));
        t1 = t1.min(t_lo.max(t_hi));
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f64| match t {
        t if t == 0.0 => a,
        t if t == 1.0 => b,
        t => (a.0 + t * dx, a.1 + t * (b.1 - a.1)),
    };
    Some((at(t0), at(t1)))
}

#[async_trait]
impl GraphRenderer for DailyProductionGraph {
    async fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let root = open_canvas(self, config, path)?;

        let visible = self.visible_data();
        let (lo, hi) = self.day_limit;
        let y_range = padded_range(visible.iter().map(|(_, y)| *y), 0.05);
        let mut chart = build_chart_2d(&root, config, lo..hi, y_range)?;
        draw_mesh(self, &mut chart, config, GridLines::Both, false)?;

        let style = palette::BLUE.stroke_width(config.px(1) + 1);
        let legend_width = config.px(20) as i32;
        chart
            .draw_series(LineSeries::new(visible, style))?
            .label(config.legend_at(0))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_width, y)], style));
        draw_legend(&mut chart, config)?;

        finish(&root, self.name(), path)
    }

    fn name(&self) -> &'static str {
        "daily_production"
    }

    fn file_name(&self) -> &'static str {
        "produccion_diaria_pozo_norte.png"
    }

    fn messages(&self) -> ChartMessages {
        messages::DAILY
    }

    fn figure(&self) -> FigureSize {
        FigureSize::COMPACT
    }
}
