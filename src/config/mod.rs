pub mod cli;
pub mod toml_config;

use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// `config.toml` next to the running executable, falling back to the
/// current directory when the executable path is unavailable.
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[cfg(feature = "cli")]
mod args {
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "nginx-blocklist")]
    #[command(about = "Aggregate IP blocklist feeds into an nginx geo include file")]
    pub struct CliConfig {
        /// Path to TOML configuration file (defaults to config.toml next to the executable)
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        pub verbose: bool,

        /// Load and validate the configuration, list sources, fetch nothing
        #[arg(long)]
        pub dry_run: bool,
    }

    impl CliConfig {
        pub fn config_path(&self) -> PathBuf {
            self.config.clone().unwrap_or_else(super::default_config_path)
        }
    }
}

#[cfg(feature = "cli")]
pub use args::CliConfig;
