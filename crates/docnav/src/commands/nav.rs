//! `docnav nav` command implementation.

use clap::Args;
use docnav_sidebar::{BreadcrumbItem, NavItem, PrevNext, Sidebar, breadcrumbs};
use serde::Serialize;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// URL path of the current page.
    url: String,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Page navigation: breadcrumbs plus previous/next links.
#[derive(Debug, Serialize)]
struct PageNav<'a> {
    breadcrumbs: Vec<BreadcrumbItem>,
    #[serde(flatten)]
    neighbours: PrevNext<'a>,
}

impl<'a> PageNav<'a> {
    fn build(sidebar: &'a Sidebar, url: &str) -> Self {
        Self {
            breadcrumbs: breadcrumbs(url),
            neighbours: sidebar.prev_next(url),
        }
    }
}

impl NavArgs {
    /// Execute the nav command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_, sidebar) = self.config.load_sidebar()?;

        let nav = PageNav::build(&sidebar, &self.url);
        if nav.neighbours.prev.is_none() && nav.neighbours.next.is_none() {
            tracing::debug!(url = %self.url, "Page not in reading order");
        }

        if self.json {
            output.json(&nav)?;
            return Ok(());
        }

        let trail: Vec<&str> = nav.breadcrumbs.iter().map(|c| c.title.as_str()).collect();
        if !trail.is_empty() {
            output.highlight(&trail.join(" / "));
        }
        if let Some(prev) = nav.neighbours.prev {
            output.line_with_detail(&prev_label(prev), &prev.link);
        }
        if let Some(next) = nav.neighbours.next {
            output.line_with_detail(&next_label(next), &next.link);
        }

        Ok(())
    }
}

fn prev_label(item: &NavItem) -> String {
    format!("← {}", item.prev_next_label())
}

fn next_label(item: &NavItem) -> String {
    format!("{} →", item.prev_next_label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav_sidebar::SectionKind;
    use pretty_assertions::assert_eq;

    fn sidebar() -> Sidebar {
        Sidebar::new([
            (
                SectionKind::Learn,
                vec![
                    NavItem::new("Introduction", "/docs/getting-started/introduction"),
                    NavItem::new("Installation", "/docs/getting-started/installation")
                        .with_alt_name("Install"),
                ],
            ),
            (
                SectionKind::Frontend,
                vec![NavItem::new("Styling", "/docs/styling/overview")],
            ),
        ])
    }

    #[test]
    fn test_labels_use_alt_name() {
        let item = NavItem::new("Installation", "/docs/install").with_alt_name("Install");

        assert_eq!(prev_label(&item), "← Install");
        assert_eq!(next_label(&item), "Install →");
    }

    #[test]
    fn test_page_nav_crosses_sections() {
        let sidebar = sidebar();

        let nav = PageNav::build(&sidebar, "/docs/getting-started/installation/");

        assert_eq!(nav.neighbours.prev.unwrap().display_name, "Introduction");
        assert_eq!(nav.neighbours.next.unwrap().display_name, "Styling");
        let titles: Vec<&str> = nav.breadcrumbs.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Getting-started", "Installation"]);
    }

    #[test]
    fn test_page_nav_json_shape() {
        let sidebar = sidebar();

        let nav = PageNav::build(&sidebar, "/docs/getting-started/introduction/");
        let json = serde_json::to_value(&nav).unwrap();

        assert!(json["prev"].is_null());
        assert_eq!(json["next"]["alt_name_for_prev_next"], "Install");
        assert_eq!(json["breadcrumbs"][0]["path"], "/getting-started");
    }
}
