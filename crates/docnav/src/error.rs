//! CLI error types.

use docnav_config::ConfigError;
use docnav_sidebar::SidebarError;
use docnav_toc::TocError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Sidebar(#[from] SidebarError),

    #[error("{0}")]
    Toc(#[from] TocError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
