//! `docnav pages` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

impl PagesArgs {
    /// Execute the pages command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, sidebar) = self.config.load_sidebar()?;

        for link in sidebar.duplicate_links() {
            tracing::warn!(link, "Duplicate page link in sidebar");
            output.warning(&format!("Warning: {link} appears more than once"));
        }

        let pages = sidebar.flattened().pages();
        if self.json {
            output.json(&pages)?;
            return Ok(());
        }

        let width = pages.len().to_string().len();
        for (i, page) in pages.iter().enumerate() {
            output.line_with_detail(
                &format!("{:>width$}. {}", i + 1, page.display_name),
                &page.link,
            );
        }

        Ok(())
    }
}
