//! Sidebar navigation items.

use serde::Serialize;

/// Node in the sidebar content tree.
///
/// Leaves (no children) are documentation pages. Items with children are
/// rendered as collapsible accordion sections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Text shown in the sidebar.
    pub display_name: String,
    /// Canonical URL path, always normalized (see [`normalize_link`]).
    pub link: String,
    /// Child items in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
    /// Label override used only for previous/next links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_name_for_prev_next: Option<String>,
    /// Top-level section header rendered without an accordion.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_outer_section: bool,
}

impl NavItem {
    /// Create a leaf item. The link is normalized.
    pub fn new(display_name: impl Into<String>, link: &str) -> Self {
        Self {
            display_name: display_name.into(),
            link: normalize_link(link),
            children: Vec::new(),
            alt_name_for_prev_next: None,
            is_outer_section: false,
        }
    }

    /// Attach children, turning this item into an accordion section.
    #[must_use]
    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    /// Set the label used by previous/next links.
    #[must_use]
    pub fn with_alt_name(mut self, alt_name: impl Into<String>) -> Self {
        self.alt_name_for_prev_next = Some(alt_name.into());
        self
    }

    /// Mark this item as an outer section header.
    #[must_use]
    pub fn outer_section(mut self) -> Self {
        self.is_outer_section = true;
        self
    }

    /// Whether this item is a page (has no children).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Label for previous/next links: the alternative name if set,
    /// otherwise the display name.
    pub fn prev_next_label(&self) -> &str {
        self.alt_name_for_prev_next
            .as_deref()
            .unwrap_or(&self.display_name)
    }

    /// Whether this item is the page at `url` and should be highlighted.
    ///
    /// Only the trailing slash of `url` is normalized.
    pub fn is_active(&self, url: &str) -> bool {
        !url.is_empty() && self.is_leaf() && self.link == with_trailing_slash(url)
    }
}

/// Normalize a sidebar link.
///
/// Underscores become hyphens and the path ends with exactly one `/`.
/// Applying it twice gives the same result.
///
/// # Examples
///
/// ```
/// use docnav_sidebar::normalize_link;
///
/// assert_eq!(normalize_link("/docs/getting_started"), "/docs/getting-started/");
/// assert_eq!(normalize_link("/docs/library//"), "/docs/library/");
/// ```
pub fn normalize_link(link: &str) -> String {
    with_trailing_slash(&link.replace('_', "-"))
}

/// Ensure exactly one trailing slash.
pub(crate) fn with_trailing_slash(path: &str) -> String {
    let mut result = path.trim_end_matches('/').to_owned();
    result.push('/');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_link_replaces_underscores() {
        assert_eq!(
            normalize_link("/docs/state/var_operations"),
            "/docs/state/var-operations/"
        );
    }

    #[test]
    fn test_normalize_link_adds_trailing_slash() {
        assert_eq!(normalize_link("/docs/hosting"), "/docs/hosting/");
    }

    #[test]
    fn test_normalize_link_collapses_trailing_slashes() {
        assert_eq!(normalize_link("/docs/hosting///"), "/docs/hosting/");
    }

    #[test]
    fn test_normalize_link_is_idempotent() {
        let once = normalize_link("/docs/api_reference/special_events");
        assert_eq!(normalize_link(&once), once);
    }

    #[test]
    fn test_normalize_link_empty_becomes_root() {
        assert_eq!(normalize_link(""), "/");
    }

    #[test]
    fn test_new_normalizes_link() {
        let item = NavItem::new("Vars", "/docs/vars/base_vars");

        assert_eq!(item.link, "/docs/vars/base-vars/");
        assert!(item.is_leaf());
        assert!(!item.is_outer_section);
    }

    #[test]
    fn test_with_children_is_not_leaf() {
        let item = NavItem::new("State", "/docs/state")
            .with_children(vec![NavItem::new("Overview", "/docs/state/overview")]);

        assert!(!item.is_leaf());
    }

    #[test]
    fn test_prev_next_label_prefers_alt_name() {
        let item = NavItem::new("Overview", "/docs/state/overview").with_alt_name("State Overview");

        assert_eq!(item.prev_next_label(), "State Overview");
    }

    #[test]
    fn test_prev_next_label_falls_back_to_display_name() {
        let item = NavItem::new("Overview", "/docs/state/overview");

        assert_eq!(item.prev_next_label(), "Overview");
    }

    #[test]
    fn test_is_active_ignores_trailing_slash() {
        let item = NavItem::new("Overview", "/docs/state/overview");

        assert!(item.is_active("/docs/state/overview"));
        assert!(item.is_active("/docs/state/overview/"));
        assert!(!item.is_active("/docs/state"));
        assert!(!item.is_active(""));
    }

    #[test]
    fn test_is_active_false_for_sections() {
        let item = NavItem::new("State", "/docs/state")
            .with_children(vec![NavItem::new("Overview", "/docs/state/overview")]);

        assert!(!item.is_active("/docs/state/"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let item = NavItem::new("Overview", "/docs/state/overview");

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["display_name"], "Overview");
        assert_eq!(json["link"], "/docs/state/overview/");
        assert!(json.get("children").is_none());
        assert!(json.get("alt_name_for_prev_next").is_none());
        assert!(json.get("is_outer_section").is_none());
    }
}
