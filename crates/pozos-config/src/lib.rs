//! # Pozos Config
//!
//! Typed configuration for the production report.
//!
//! Every field has a default equal to the report's fixed value, so running
//! without a configuration file gives the standard report.
//! A TOML or YAML file and `POZOS_*` environment variables can override them.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
