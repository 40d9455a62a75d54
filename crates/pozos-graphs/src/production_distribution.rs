//! Kernel density curves of gas and oil production.

use crate::traits::GraphRenderer;
use crate::types::GraphConfig;
use crate::utils::{
    build_chart_2d, draw_legend, draw_mesh, finish, open_canvas, padded_range, palette, GridLines,
};
use async_trait::async_trait;
use plotters::prelude::*;
use pozos_common::Result;
use pozos_data::{kde_curve, Column, Dataset, DensityCurve};
use pozos_i18n::{messages, ChartMessages};
use std::path::Path;
use tracing::warn;

/// Gas and oil production density curves on one axis
#[derive(Debug, Default)]
pub struct ProductionDistributionGraph {
    pub gas: Option<DensityCurve>,
    pub oil: Option<DensityCurve>,
}

impl ProductionDistributionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate both curves over the whole export.
    pub fn from_dataset(dataset: &Dataset, points: usize) -> Self {
        let gas = kde_curve(&dataset.column(Column::GasProduction), points);
        let oil = kde_curve(&dataset.column(Column::OilProduction), points);
        if gas.is_none() || oil.is_none() {
            warn!("Not enough spread in production data to estimate every density curve");
        }
        Self { gas, oil }
    }

    fn curves(&self) -> impl Iterator<Item = &DensityCurve> {
        self.gas.iter().chain(self.oil.iter())
    }

    fn get_max_density(&self) -> f64 {
        let max = self.curves().map(DensityCurve::max_density).fold(0.0, f64::max);
        if max > 0.0 {
            max * 1.05
        } else {
            1.0
        }
    }
}

#[async_trait]
impl GraphRenderer for ProductionDistributionGraph {
    async fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let root = open_canvas(self, config, path)?;

        let x_range = padded_range(self.curves().flat_map(|c| c.xs.iter().copied()), 0.0);
        let mut chart = build_chart_2d(&root, config, x_range, 0.0..self.get_max_density())?;
        draw_mesh(self, &mut chart, config, GridLines::Both, false)?;

        let width = config.px(1) + 1;
        let series = [
            (&self.gas, palette::ORANGE, config.legend_at(0)),
            (&self.oil, palette::BLUE, config.legend_at(1)),
        ];
        let mut drawn = 0;
        for (curve, color, label) in series {
            let Some(curve) = curve else { continue };
            let points = curve.xs.iter().copied().zip(curve.densities.iter().copied());
            let legend_width = config.px(20) as i32;
            chart
                .draw_series(LineSeries::new(points, color.stroke_width(width)))?
                .label(label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + legend_width, y)], color.stroke_width(width))
                });
            drawn += 1;
        }

        if drawn > 0 {
            draw_legend(&mut chart, config)?;
        }

        finish(&root, self.name(), path)
    }

    fn name(&self) -> &'static str {
        "production_distribution"
    }

    fn file_name(&self) -> &'static str {
        "curva_distribucion_produccion_petroleo_gas.png"
    }

    fn messages(&self) -> ChartMessages {
        messages::DISTRIBUTION
    }
}
