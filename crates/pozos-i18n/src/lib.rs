//! Localized chart texts for the Pozos report.
//!
//! Titles, axis labels and legend entries live in Fluent catalogues compiled
//! into the crate. `es-MX` is the default and carries the report's Spanish
//! strings; `en-US` is also shipped.
//!
//! # Example
//!
//! ```rust
//! use pozos_i18n::{messages, ChartLabels, I18nManager, Locale};
//!
//! # fn example() -> Result<(), pozos_i18n::I18nError> {
//! let i18n = I18nManager::new(Locale::SpanishMexico)?;
//! let labels = ChartLabels::resolve(&i18n, messages::DAILY, "Pozo Norte")?;
//! assert_eq!(labels.x_label, "Día");
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod bundle;
pub mod error;
pub mod locale;
pub mod manager;
pub mod messages;
pub mod resource;

pub use bundle::{fluent_args, BundleManager};
pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use manager::I18nManager;
pub use messages::{ChartLabels, ChartMessages};

// Re-export commonly used Fluent types
pub use fluent_bundle::{FluentArgs, FluentValue};
