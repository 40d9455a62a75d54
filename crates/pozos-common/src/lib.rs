//! # Pozos Common
//!
//! Shared error type, logging setup and test helpers for the Pozos production
//! report workspace.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{PozosError, Result};
pub use logging::{init_logging, LoggingConfig};
