//! Linear reading order for previous/next navigation.

use serde::Serialize;

use crate::item::NavItem;

/// Collect the leaves of each section, depth-first, in section order.
///
/// Items with children are traversed but never emitted.
pub fn flatten<'a, I>(sections: I) -> Vec<&'a NavItem>
where
    I: IntoIterator<Item = &'a [NavItem]>,
{
    let mut pages = Vec::new();
    for section in sections {
        collect_leaves(section, &mut pages);
    }
    pages
}

fn collect_leaves<'a>(items: &'a [NavItem], pages: &mut Vec<&'a NavItem>) {
    for item in items {
        if item.is_leaf() {
            pages.push(item);
        } else {
            collect_leaves(&item.children, pages);
        }
    }
}

/// Previous and next pages around the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrevNext<'a> {
    pub prev: Option<&'a NavItem>,
    pub next: Option<&'a NavItem>,
}

/// All documentation pages in reading order.
///
/// Built once from the sidebar and shared read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct FlattenedIndex {
    pages: Vec<NavItem>,
}

impl FlattenedIndex {
    /// Build the index from sections in reading order.
    pub fn new<'a, I>(sections: I) -> Self
    where
        I: IntoIterator<Item = &'a [NavItem]>,
    {
        Self {
            pages: flatten(sections).into_iter().cloned().collect(),
        }
    }

    /// Pages in reading order.
    pub fn pages(&self) -> &[NavItem] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Find the pages before and after `url`.
    ///
    /// Leading and trailing slashes are ignored on both sides. A URL that
    /// is not a documentation page gets no neighbours.
    pub fn prev_next(&self, url: &str) -> PrevNext<'_> {
        let url = url.trim_matches('/');

        let Some(i) = self
            .pages
            .iter()
            .position(|page| page.link.trim_matches('/') == url)
        else {
            return PrevNext::default();
        };

        PrevNext {
            prev: i.checked_sub(1).and_then(|p| self.pages.get(p)),
            next: self.pages.get(i + 1),
        }
    }
}
