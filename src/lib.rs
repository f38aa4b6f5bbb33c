pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, SystemClock};
pub use config::metadata::MetadataTable;
pub use core::engine::HunterEngine;
pub use domain::model::Report;
pub use utils::error::{HunterError, Result};
