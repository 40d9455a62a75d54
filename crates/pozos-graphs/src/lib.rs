//! # Pozos Graphs
//!
//! Static PNG rendering of the production report charts with plotters.
//!
//! Each chart lives in its own module, owns the aggregate it draws and
//! implements [`GraphRenderer`]. [`GraphManager`] resolves the localized
//! texts, checks the output directory and renders the eight charts in order.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod manager;
pub mod traits;
pub mod types;
pub mod utils;

pub mod average_production;
pub mod cumulative_production;
pub mod daily_production;
pub mod production_distribution;
pub mod production_scatter_3d;
pub mod production_surface;
pub mod production_vs_pressure;
pub mod violin_pressure;

pub use average_production::AverageProductionGraph;
pub use cumulative_production::CumulativeProductionGraph;
pub use daily_production::DailyProductionGraph;
pub use manager::GraphManager;
pub use production_distribution::ProductionDistributionGraph;
pub use production_scatter_3d::ProductionScatter3dGraph;
pub use production_surface::ProductionSurfaceGraph;
pub use production_vs_pressure::ProductionVsPressureGraph;
pub use traits::GraphRenderer;
pub use types::*;
pub use violin_pressure::ViolinPressureGraph;
