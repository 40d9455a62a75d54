//! Gaussian kernel density estimation and violin summaries.
//!
//! The bandwidth follows Scott's rule, `h = s · n^(-1/5)` with `s` the sample
//! standard deviation, and curves are evaluated on evenly spaced grids.

use crate::grid::{linspace, min_max};
use statrs::distribution::{Continuous, Normal};
use statrs::statistics::{Data, Median, Statistics};

/// Gaussian KDE over a one-dimensional sample.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
    kernel: Normal,
}

impl GaussianKde {
    /// Fit a KDE on the finite samples. Returns `None` when fewer than two
    /// remain or the sample has no spread.
    pub fn new(samples: &[f64]) -> Option<Self> {
        let samples = finite(samples);
        if samples.len() < 2 {
            return None;
        }
        let bandwidth = scott_bandwidth(&samples);
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return None;
        }
        let kernel = Normal::new(0.0, 1.0).ok()?;
        Some(Self {
            samples,
            bandwidth,
            kernel,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Estimated density at `x`.
    pub fn density(&self, x: f64) -> f64 {
        let n = self.samples.len() as f64;
        let sum: f64 = self
            .samples
            .iter()
            .map(|xi| self.kernel.pdf((x - xi) / self.bandwidth))
            .sum();
        sum / (n * self.bandwidth)
    }

    pub fn evaluate(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|x| self.density(*x)).collect()
    }
}

fn finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Scott's rule bandwidth for a sample of at least two values.
pub fn scott_bandwidth(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    samples.iter().std_dev() * n.powf(-0.2)
}

/// A density evaluated on a grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DensityCurve {
    pub xs: Vec<f64>,
    pub densities: Vec<f64>,
}

impl DensityCurve {
    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }

    /// Trapezoidal area under the curve.
    pub fn area(&self) -> f64 {
        self.xs
            .windows(2)
            .zip(self.densities.windows(2))
            .map(|(x, d)| (x[1] - x[0]) * (d[0] + d[1]) / 2.0)
            .sum()
    }
}

/// KDE of `values` on `points` grid values spanning half the data range beyond
/// each extreme.
pub fn kde_curve(values: &[f64], points: usize) -> Option<DensityCurve> {
    let kde = GaussianKde::new(values)?;
    let (lo, hi) = min_max(values)?;
    let pad = (hi - lo) / 2.0;
    let xs = linspace(lo - pad, hi + pad, points);
    let densities = kde.evaluate(&xs);
    Some(DensityCurve { xs, densities })
}

/// Outline and markers of one violin.
#[derive(Debug, Clone, PartialEq)]
pub struct ViolinStats {
    /// Density along the value axis, from `min` to `max`. Empty when the
    /// sample has no spread.
    pub outline: DensityCurve,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

/// Violin summary of the finite `values`, `None` when there are none.
pub fn violin_stats(values: &[f64], points: usize) -> Option<ViolinStats> {
    let values = finite(values);
    let (min, max) = min_max(&values)?;
    let mean = values.iter().mean();
    let median = Data::new(values.clone()).median();

    let outline = match GaussianKde::new(&values) {
        Some(kde) => {
            let xs = linspace(min, max, points);
            let densities = kde.evaluate(&xs);
            DensityCurve { xs, densities }
        }
        None => DensityCurve::default(),
    };

    Some(ViolinStats {
        outline,
        mean,
        median,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pozos_common::test_utils::assert_approx_eq;

    #[test]
    fn test_scott_bandwidth_closed_form() {
        let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
        // sample std of 1..=5 is sqrt(2.5)
        let expected = 2.5_f64.sqrt() * 5.0_f64.powf(-0.2);
        assert_approx_eq(scott_bandwidth(&samples), expected, 1e-12);
        assert_approx_eq(GaussianKde::new(&samples).unwrap().bandwidth(), expected, 1e-12);
    }

    #[test]
    fn test_density_of_two_points() {
        let kde = GaussianKde::new(&[0.0, 2.0]).unwrap();
        let h = kde.bandwidth();
        let phi = |u: f64| (-0.5 * u * u).exp() / (2.0 * std::f64::consts::PI).sqrt();

        let expected = (phi(1.0 / h) + phi(-1.0 / h)) / (2.0 * h);
        assert_approx_eq(kde.density(1.0), expected, 1e-12);
    }

    #[test]
    fn test_degenerate_samples() {
        assert!(GaussianKde::new(&[]).is_none());
        assert!(GaussianKde::new(&[4.0]).is_none());
        assert!(GaussianKde::new(&[4.0, 4.0, 4.0]).is_none());
        assert!(kde_curve(&[], 1000).is_none());
    }

    #[test]
    fn test_curve_grid_and_area() {
        let values = [120.5, 110.0, 115.0, 125.0, 95.0, 97.5, 99.0, 80.0, 82.5, 79.0];
        let curve = kde_curve(&values, 1000).unwrap();

        assert_eq!(curve.xs.len(), 1000);
        assert_approx_eq(curve.xs[0], 79.0 - 23.0, 1e-9);
        assert_approx_eq(curve.xs[999], 125.0 + 23.0, 1e-9);
        assert!((curve.area() - 1.0).abs() < 0.02, "area = {}", curve.area());
    }

    #[test]
    fn test_violin_stats() {
        let stats = violin_stats(&[2450.0, 2500.0, 2475.0, 2425.0], 100).unwrap();

        assert_eq!(stats.min, 2425.0);
        assert_eq!(stats.max, 2500.0);
        assert_approx_eq(stats.mean, 2462.5, 1e-9);
        assert_approx_eq(stats.median, 2462.5, 1e-9);
        assert_eq!(stats.outline.xs.len(), 100);
        assert_eq!(stats.outline.xs[0], 2425.0);
        assert_eq!(stats.outline.xs[99], 2500.0);
        assert!(stats.outline.densities.iter().all(|d| *d > 0.0));
    }

    #[test]
    fn test_missing_values_are_dropped() {
        let with_gap = [1.0, f64::NAN, 2.0, 3.0, 4.0, 5.0];
        let without = [1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(kde_curve(&with_gap, 50), kde_curve(&without, 50));
        assert_eq!(violin_stats(&with_gap, 20), violin_stats(&without, 20));
        assert!(violin_stats(&[f64::NAN], 20).is_none());
    }

    #[test]
    fn test_violin_single_value() {
        let stats = violin_stats(&[3.0], 100).unwrap();
        assert!(stats.outline.xs.is_empty());
        assert_eq!((stats.mean, stats.median, stats.min, stats.max), (3.0, 3.0, 3.0, 3.0));
        assert!(violin_stats(&[], 100).is_none());
    }
}
