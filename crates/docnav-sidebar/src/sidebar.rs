//! Sidebar content tree for all documentation sections.
//!
//! The tree is authored in a YAML file with one key per section:
//!
//! ```yaml
//! learn:
//!   - name: Introduction
//!     link: /docs/getting-started/introduction
//! backend:
//!   - name: State
//!     link: /docs/state
//!     children:
//!       - name: Overview
//!         link: /docs/state/overview
//!         alt_name: State Overview
//! ```
//!
//! A [`Sidebar`] is built once and only read afterwards, so it can be
//! shared between request handlers behind an `Arc`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::flatten::{FlattenedIndex, PrevNext};
use crate::item::NavItem;
use crate::locate::{ActivePath, locate};
use crate::section::SectionKind;

/// Sidebar loading error.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// File not found.
    #[error("Sidebar file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("Sidebar parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Item as written in the sidebar file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem {
    name: String,
    link: String,
    #[serde(default)]
    children: Vec<RawItem>,
    #[serde(default)]
    alt_name: Option<String>,
    #[serde(default)]
    outer: bool,
}

impl From<RawItem> for NavItem {
    fn from(raw: RawItem) -> Self {
        let mut item = NavItem::new(raw.name, &raw.link)
            .with_children(raw.children.into_iter().map(NavItem::from).collect());
        item.alt_name_for_prev_next = raw.alt_name;
        item.is_outer_section = raw.outer;
        item
    }
}

/// Sidebar file layout. Missing sections are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SidebarFile {
    learn: Vec<RawItem>,
    frontend: Vec<RawItem>,
    backend: Vec<RawItem>,
    hosting: Vec<RawItem>,
    components: Vec<RawItem>,
    graphing: Vec<RawItem>,
    recipes: Vec<RawItem>,
    api_reference: Vec<RawItem>,
    tutorials: Vec<RawItem>,
}

impl SidebarFile {
    fn into_sections(self) -> [(SectionKind, Vec<RawItem>); 9] {
        [
            (SectionKind::Learn, self.learn),
            (SectionKind::Frontend, self.frontend),
            (SectionKind::Backend, self.backend),
            (SectionKind::Hosting, self.hosting),
            (SectionKind::Components, self.components),
            (SectionKind::Graphing, self.graphing),
            (SectionKind::Recipes, self.recipes),
            (SectionKind::ApiReference, self.api_reference),
            (SectionKind::Tutorials, self.tutorials),
        ]
    }
}

/// Navigation tree for every documentation section plus the reading
/// order derived from it.
#[derive(Clone, Debug, Default)]
pub struct Sidebar {
    sections: [Vec<NavItem>; 9],
    flattened: FlattenedIndex,
}

impl Sidebar {
    /// Build a sidebar from section trees.
    ///
    /// Sections not listed are empty. A section listed twice keeps the
    /// last tree.
    pub fn new<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = (SectionKind, Vec<NavItem>)>,
    {
        let mut trees: [Vec<NavItem>; 9] = Default::default();
        for (kind, items) in sections {
            trees[kind.position()] = items;
        }

        let flattened = FlattenedIndex::new(trees.iter().map(Vec::as_slice));
        tracing::debug!(pages = flattened.len(), "Sidebar built");

        Self {
            sections: trees,
            flattened,
        }
    }

    /// Parse a sidebar from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SidebarError> {
        let file: SidebarFile = serde_yaml::from_str(yaml)?;
        Ok(Self::new(file.into_sections().into_iter().map(|(kind, items)| {
            (kind, items.into_iter().map(NavItem::from).collect())
        })))
    }

    /// Load a sidebar from a YAML file.
    pub fn load(path: &Path) -> Result<Self, SidebarError> {
        if !path.exists() {
            return Err(SidebarError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let sidebar = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), pages = sidebar.flattened.len(), "Loaded sidebar");
        Ok(sidebar)
    }

    /// Tree of one section.
    pub fn section(&self, kind: SectionKind) -> &[NavItem] {
        &self.sections[kind.position()]
    }

    /// Active path for `url` within one section.
    pub fn locate(&self, kind: SectionKind, url: &str) -> ActivePath {
        locate(self.section(kind), url)
    }

    /// Default-expanded index of the nested accordions of one section.
    ///
    /// Empty unless the section has a second level of accordions and
    /// `url` is inside one of them.
    pub fn nested_accordion_index(&self, kind: SectionKind, url: &str) -> Vec<i32> {
        self.locate(kind, url)
            .nested_accordion_index(self.section(kind))
            .to_vec()
    }

    /// Active path for `url` in every section, in reading order.
    ///
    /// At most one section has a non-empty path when leaf links are
    /// unique.
    pub fn locate_all(&self, url: &str) -> Vec<(SectionKind, ActivePath)> {
        SectionKind::ALL
            .iter()
            .map(|&kind| (kind, self.locate(kind, url)))
            .collect()
    }

    /// All pages in reading order.
    pub fn flattened(&self) -> &FlattenedIndex {
        &self.flattened
    }

    /// Previous and next pages around `url`.
    pub fn prev_next(&self, url: &str) -> PrevNext<'_> {
        self.flattened.prev_next(url)
    }

    /// Links that appear on more than one page, in reading order of
    /// their second occurrence.
    pub fn duplicate_links(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.flattened
            .pages()
            .iter()
            .filter(|page| !seen.insert(page.link.as_str()))
            .map(|page| page.link.as_str())
            .collect()
    }
}
