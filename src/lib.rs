pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::BlocklistConfig};
pub use core::{engine::BlocklistEngine, pipeline::BlocklistPipeline};
pub use utils::error::{BlocklistError, Result};
