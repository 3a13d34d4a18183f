//! `docnav locate` command implementation.

use clap::Args;
use docnav_sidebar::{ActivePath, NavItem, SectionKind, Sidebar, descend};
use serde::Serialize;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the locate command.
#[derive(Args)]
pub(crate) struct LocateArgs {
    /// URL path of the current page.
    url: String,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Active path of one sidebar section.
#[derive(Debug, Serialize)]
struct SectionMatch<'a> {
    section: SectionKind,
    path: ActivePath,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    nested_accordion_index: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<&'a NavItem>,
}

impl LocateArgs {
    /// Execute the locate command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, sidebar) = self.config.load_sidebar()?;

        let matches = section_matches(&sidebar, &self.url);
        tracing::debug!(
            url = %self.url,
            active = matches.iter().filter(|m| !m.path.is_empty()).count(),
            "Located page"
        );

        if self.json {
            output.json(&matches)?;
            return Ok(());
        }

        for m in &matches {
            let label = format!("{:<14}{:?}", m.section, m.path.indices());
            match m.active {
                Some(item) => output.line_with_detail(
                    &label,
                    &format!("{} ({})", item.display_name, item.link),
                ),
                None => output.line(&label),
            }
        }

        Ok(())
    }
}

/// Active path for `url` in every section, with the highlighted leaf.
fn section_matches<'a>(sidebar: &'a Sidebar, url: &str) -> Vec<SectionMatch<'a>> {
    sidebar
        .locate_all(url)
        .into_iter()
        .map(|(section, path)| {
            let items = sidebar.section(section);
            let active = descend(items, &path)
                .and_then(|siblings| siblings.iter().find(|item| item.is_active(url)));
            SectionMatch {
                section,
                nested_accordion_index: path.nested_accordion_index(items).to_vec(),
                path,
                active,
            }
        })
        .collect()
}
