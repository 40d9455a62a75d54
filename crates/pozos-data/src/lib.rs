//! # Pozos Data
//!
//! Loads the well production export and computes the aggregates behind every
//! chart: per-well means, cumulative production, kernel density curves, violin
//! summaries and the synthetic production surface.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod dataset;
pub mod grid;
pub mod kde;
pub mod record;
pub mod surface;

pub use aggregate::{cumulative_production, mean_by_well, overall_mean, CumulativeSeries, WellMean};
pub use dataset::{Dataset, WellSubset};
pub use grid::{linspace, min_max};
pub use kde::{kde_curve, violin_stats, DensityCurve, GaussianKde, ViolinStats};
pub use record::{Column, WellRecord, REQUIRED_COLUMNS};
pub use surface::SurfaceGrid;
