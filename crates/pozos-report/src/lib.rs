//! # Pozos Report
//!
//! Command line report over a well production CSV export: per-well pressure
//! violins, cumulative and daily production, production distributions, mean
//! production per well and two 3D views, written as PNG files.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
