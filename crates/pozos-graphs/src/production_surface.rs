//! 3D surface of oil production over days and wellhead pressure.
//!
//! The surface is synthetic: it comes from a closed formula evaluated on a
//! regular grid, not from the dataset. Each grid cell is drawn as a
//! quadrilateral coloured by its mean height on the viridis colour map.

use crate::traits::GraphRenderer;
use crate::types::GraphConfig;
use crate::utils::{apply_3d_projection, draw_3d_axis_titles, finish, font, open_canvas, padded_range};
use async_trait::async_trait;
use plotters::prelude::*;
use pozos_common::Result;
use pozos_data::SurfaceGrid;
use pozos_i18n::{messages, ChartMessages};
use std::path::Path;

/// One surface cell in chart coordinates `(day, height, pressure)` with its
/// colour-map position.
type Cell = ([(f64, f64, f64); 4], f64);

/// Production surface chart
#[derive(Debug, Clone)]
pub struct ProductionSurfaceGraph {
    pub grid: SurfaceGrid,
}

impl Default for ProductionSurfaceGraph {
    fn default() -> Self {
        Self::new(SurfaceGrid::production_surface())
    }
}

impl ProductionSurfaceGraph {
    pub fn new(grid: SurfaceGrid) -> Self {
        Self { grid }
    }

    /// Quadrilaterals between neighbouring grid points, far pressures first.
    fn cells(&self) -> Vec<Cell> {
        let Some((lo, hi)) = self.grid.z_range() else {
            return Vec::new();
        };
        let span = hi - lo;
        let (nx, ny) = (self.grid.xs.len(), self.grid.ys.len());
        let mut cells = Vec::with_capacity(nx.saturating_sub(1) * ny.saturating_sub(1));

        for j in (1..ny).rev() {
            for i in 1..nx {
                let corners = [(i - 1, j - 1), (i, j - 1), (i, j), (i - 1, j)];
                let mut points = [(0.0, 0.0, 0.0); 4];
                let mut total = 0.0;
                for (slot, (ci, cj)) in points.iter_mut().zip(corners) {
                    let Some(height) = self.grid.value(ci, cj) else {
                        continue;
                    };
                    *slot = (self.grid.xs[ci], height, self.grid.ys[cj]);
                    total += height;
                }
                let mean = total / 4.0;
                let t = if span > 0.0 { (mean - lo) / span } else { 0.5 };
                cells.push((points, t.clamp(0.0, 1.0)));
            }
        }
        cells
    }
}

#[async_trait]
impl GraphRenderer for ProductionSurfaceGraph {
    async fn render_to_file(&self, config: &GraphConfig, path: &Path) -> Result<()> {
        let root = open_canvas(self, config, path)?;

        let x_range = padded_range(self.grid.xs.iter().copied(), 0.0);
        let y_range = padded_range(self.grid.z.iter().flatten().copied(), 0.05);
        let z_range = padded_range(self.grid.ys.iter().copied(), 0.0);

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

            chart.draw_series(self.cells().into_iter().map(|(points, t)| {
                Polygon::new(points.to_vec(), ViridisRGB::get_color(t).filled())
            }))?;
        }

        draw_3d_axis_titles(&root, config)?;
        finish(&root, self.name(), path)
    }

    fn name(&self) -> &'static str {
        "production_surface"
    }

    fn file_name(&self) -> &'static str {
        "superficie_3D_produccion_petroleo.png"
    }

    fn messages(&self) -> ChartMessages {
        messages::SURFACE
    }
}
