//! Active-path lookup for sidebar accordions.
//!
//! The sidebar renders one accordion per section. An accordion only has
//! entries for items with children, so leaf siblings must not shift the
//! index of the accordion to expand. [`locate`] keeps a running count of
//! leaves seen at each level and subtracts it from the sibling position.
//!
//! A matched leaf counts itself before the subtraction, which makes the
//! last element negative when the leaf has no accordion siblings before
//! it. The accordion widget consumes exactly this convention.

use serde::Serialize;

use crate::item::{NavItem, with_trailing_slash};

/// Per-depth sibling offsets from a section root to the active page.
///
/// Empty when the URL is not in the section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivePath(Vec<i32>);

impl ActivePath {
    /// Offsets from the outermost level down to the matched leaf.
    pub fn indices(&self) -> &[i32] {
        &self.0
    }

    /// Whether nothing in the section matched.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Default-expanded index for the accordion nested one level below
    /// the section root: the element at depth 1, if any.
    pub fn accordion_index(&self) -> &[i32] {
        self.0.get(1..2).unwrap_or(&[])
    }

    /// [`accordion_index`](Self::accordion_index) as seen by the nested
    /// accordions of `items`, the section this path was located in.
    ///
    /// Only sections with a second level of accordions expand one by
    /// default. Other sections get an empty index.
    pub fn nested_accordion_index(&self, items: &[NavItem]) -> &[i32] {
        if has_nested_accordions(items) {
            self.accordion_index()
        } else {
            &[]
        }
    }

    /// Offset of the matched leaf within its siblings.
    pub fn leaf_offset(&self) -> Option<i32> {
        self.0.last().copied()
    }
}

impl From<Vec<i32>> for ActivePath {
    fn from(indices: Vec<i32>) -> Self {
        Self(indices)
    }
}

/// Find the active path to the leaf whose link equals `url`.
///
/// `url` gets a trailing slash before comparison; an empty `url` never
/// matches. The first matching leaf in declaration order wins.
///
/// # Examples
///
/// ```
/// use docnav_sidebar::{NavItem, locate};
///
/// let learn = vec![
///     NavItem::new("A", "/a"),
///     NavItem::new("B", "/b").with_children(vec![
///         NavItem::new("C", "/b/c"),
///         NavItem::new("D", "/b/d"),
///     ]),
/// ];
///
/// assert_eq!(locate(&learn, "/b/d/").indices(), &[0, -1]);
/// assert!(locate(&learn, "").is_empty());
/// ```
pub fn locate(items: &[NavItem], url: &str) -> ActivePath {
    if url.is_empty() {
        return ActivePath::default();
    }

    let url = with_trailing_slash(url);
    ActivePath(locate_in(items, &url).unwrap_or_default())
}

/// Recursive step of [`locate`]. `url` is already normalized.
fn locate_in(items: &[NavItem], url: &str) -> Option<Vec<i32>> {
    let mut sub = 0;

    for (i, item) in (0..).zip(items) {
        if item.is_leaf() {
            sub += 1;
            if item.link == url {
                return Some(vec![i - sub]);
            }
        } else if let Some(mut path) = locate_in(&item.children, url) {
            path.insert(0, i - sub);
            return Some(path);
        }
    }

    None
}

/// Walk an active path back down the tree.
///
/// Every element but the last selects the n-th item with children (its
/// accordion index). Returns the sibling list that holds the located
/// leaf, or `None` if the path does not fit the tree.
pub fn descend<'a>(items: &'a [NavItem], path: &ActivePath) -> Option<&'a [NavItem]> {
    let (_, sections) = path.indices().split_last()?;

    let mut level = items;
    for &accordion in sections {
        let accordion = usize::try_from(accordion).ok()?;
        let section = level
            .iter()
            .filter(|item| !item.is_leaf())
            .nth(accordion)?;
        level = &section.children;
    }

    Some(level)
}

/// Whether any top-level item has a child that itself has children.
pub fn has_nested_accordions(items: &[NavItem]) -> bool {
    items
        .iter()
        .flat_map(|item| &item.children)
        .any(|child| !child.is_leaf())
}

/// Offset [`locate`] reports for the leaf at `position` among `siblings`.
pub fn leaf_offset_at(siblings: &[NavItem], position: usize) -> Option<i32> {
    let item = siblings.get(position)?;
    if !item.is_leaf() {
        return None;
    }

    let leaves = siblings[..=position].iter().filter(|s| s.is_leaf()).count();
    let position = i32::try_from(position).ok()?;
    let leaves = i32::try_from(leaves).ok()?;
    Some(position - leaves)
}
