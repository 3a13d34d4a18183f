//! CLI command implementations.

pub(crate) mod locate;
pub(crate) mod nav;
pub(crate) mod pages;
pub(crate) mod toc;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_sidebar::Sidebar;

use crate::error::CliError;

pub(crate) use locate::LocateArgs;
pub(crate) use nav::NavArgs;
pub(crate) use pages::PagesArgs;
pub(crate) use toc::TocArgs;

/// Configuration arguments shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long, env = "DOCNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Sidebar content file (overrides config).
    #[arg(long)]
    sidebar: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            sidebar_file: self.sidebar.clone(),
            source_dir: self.source_dir.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load configuration and the sidebar it points to.
    pub(crate) fn load_sidebar(&self) -> Result<(Config, Sidebar), CliError> {
        let config = self.load_config()?;
        let sidebar = Sidebar::load(&config.sidebar_resolved.file)?;
        Ok((config, sidebar))
    }
}
