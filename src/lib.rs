pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use core::{etl::Engine, pipeline::UtilizationPipeline};
pub use utils::error::{Result, UtilizationError};
