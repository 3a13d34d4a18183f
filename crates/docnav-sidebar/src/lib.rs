//! Sidebar navigation index for docnav.
//!
//! This crate provides:
//! - [`NavItem`]: a node of the documentation content tree
//! - [`Sidebar`]: the per-section forest, loaded once and shared read-only
//! - [`locate`]: active-path lookup used to expand sidebar accordions
//! - [`flatten`] and [`FlattenedIndex`]: reading order for previous/next links
//! - [`breadcrumbs`]: ancestor trail for a documentation URL
//!
//! # Quick Start
//!
//! ```
//! use docnav_sidebar::{SectionKind, Sidebar};
//!
//! let sidebar = Sidebar::from_yaml_str(
//!     "learn:\n  - name: Introduction\n    link: /docs/introduction\n  - name: Installation\n    link: /docs/installation\n",
//! )?;
//!
//! let path = sidebar.locate(SectionKind::Learn, "/docs/installation");
//! assert_eq!(path.indices(), &[-1]);
//!
//! let nav = sidebar.prev_next("/docs/installation/");
//! assert_eq!(nav.prev.map(|p| p.display_name.as_str()), Some("Introduction"));
//! assert!(nav.next.is_none());
//! # Ok::<(), docnav_sidebar::SidebarError>(())
//! ```

mod breadcrumb;
mod flatten;
mod item;
mod locate;
mod section;
mod sidebar;

pub use breadcrumb::{BreadcrumbItem, breadcrumbs};
pub use flatten::{FlattenedIndex, PrevNext, flatten};
pub use item::{NavItem, normalize_link};
pub use locate::{ActivePath, descend, has_nested_accordions, leaf_offset_at, locate};
pub use section::SectionKind;
pub use sidebar::{Sidebar, SidebarError};
