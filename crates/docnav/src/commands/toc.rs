//! `docnav toc` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docnav_config::DocsConfig;
use docnav_toc::{Document, HeadingEntry, extract_toc};
use serde::Serialize;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    /// Documentation source file.
    file: PathBuf,

    /// URL path of the page (default: derived from the source directory).
    #[arg(long)]
    path: Option<String>,

    /// Component documented on the page. The first one is the page's own
    /// component; repeat for each.
    #[arg(long = "component", value_name = "NAME")]
    components: Vec<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Table of contents entry with its jump link.
#[derive(Debug, Serialize)]
struct TocLine<'a> {
    #[serde(flatten)]
    entry: &'a HeadingEntry,
    anchor: String,
}

impl TocArgs {
    /// Execute the toc command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load_config()?;

        let page_path = page_path(self.path, &self.file, &config.docs_resolved)?;

        let source = std::fs::read_to_string(&self.file)?;
        let document = Document::parse(&source)?;
        let entries = extract_toc(&document, &self.components)?;
        tracing::debug!(
            file = %self.file.display(),
            path = %page_path,
            entries = entries.len(),
            "Built table of contents"
        );

        let lines = toc_lines(&entries, &page_path);
        if self.json {
            output.json(&lines)?;
            return Ok(());
        }

        for line in &lines {
            output.line_with_detail(&indented(line.entry), &line.anchor);
        }

        Ok(())
    }
}

/// URL path of the page: `--path` if given, otherwise derived from the
/// file's location under the source directory.
fn page_path(path: Option<String>, file: &Path, docs: &DocsConfig) -> Result<String, CliError> {
    if let Some(path) = path {
        return Ok(path);
    }
    docs.url_for(file).ok_or_else(|| {
        CliError::Validation(format!(
            "{} is outside {}; pass --path",
            file.display(),
            docs.source_dir.display()
        ))
    })
}

fn toc_lines<'a>(entries: &'a [HeadingEntry], page_path: &str) -> Vec<TocLine<'a>> {
    entries
        .iter()
        .map(|entry| TocLine {
            entry,
            anchor: entry.anchor(page_path),
        })
        .collect()
}

/// Heading text indented two spaces per level below 1.
fn indented(entry: &HeadingEntry) -> String {
    let depth = usize::from(entry.level.saturating_sub(1)) * 2;
    format!("{:depth$}{}", "", entry.text)
}
