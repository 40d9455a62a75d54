//! Synthetic production surface for the 3D chart.

use crate::grid::{linspace, min_max};

/// Side length of the surface grid.
pub const SURFACE_RESOLUTION: usize = 50;

/// Heights over a day × pressure grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    /// Day axis.
    pub xs: Vec<f64>,
    /// Pressure axis.
    pub ys: Vec<f64>,
    /// `z[j][i]` is the height at `(xs[i], ys[j])`.
    pub z: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    /// `z = 1000 · sin(x / 15) · 200 − cos(y − 2400)` over days 1..100 and
    /// pressures 1500..3500.
    pub fn production_surface() -> Self {
        let xs = linspace(1.0, 100.0, SURFACE_RESOLUTION);
        let ys = linspace(1500.0, 3500.0, SURFACE_RESOLUTION);
        let z = ys
            .iter()
            .map(|y| xs.iter().map(|x| production_height(*x, *y)).collect())
            .collect();
        Self { xs, ys, z }
    }

    /// Height at grid indices, `i` along days and `j` along pressures.
    pub fn value(&self, i: usize, j: usize) -> Option<f64> {
        self.z.get(j)?.get(i).copied()
    }

    pub fn z_range(&self) -> Option<(f64, f64)> {
        let all: Vec<f64> = self.z.iter().flatten().copied().collect();
        min_max(&all)
    }
}

/// The surface formula.
pub fn production_height(x: f64, y: f64) -> f64 {
    1000.0 * (x / 15.0).sin() * 200.0 - (y - 2400.0).cos()
}
