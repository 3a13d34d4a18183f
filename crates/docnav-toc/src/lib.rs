//! Table-of-contents extraction for docnav documents.
//!
//! A documentation source is a markdown body with optional YAML front
//! matter. The body is split into [`Block`]s: plain markdown, or custom
//! blocks (demos, alerts, definitions, sections, videos) rendered by their
//! own components. [`extract_toc`] derives the in-page jump links from the
//! markdown blocks only.
//!
//! # Example
//!
//! ```
//! use docnav_toc::{Document, extract_toc};
//!
//! let source = "---\ncomponent: Button\n---\n# {component}\n\n## Variants\n";
//! let doc = Document::parse(source)?;
//! let toc = extract_toc::<&str>(&doc, &[])?;
//!
//! let links: Vec<String> = toc.iter().map(|h| h.anchor("/docs/button/")).collect();
//! assert_eq!(links, ["/docs/button/#button", "/docs/button/#variants"]);
//! # Ok::<(), docnav_toc::TocError>(())
//! ```

mod block;
mod document;
mod error;
mod fence;
mod heading;
mod template;
mod toc;

pub use block::{Block, CustomBlock, CustomKind, split_blocks};
pub use document::Document;
pub use error::TocError;
pub use template::TemplateEnv;
pub use toc::{API_REFERENCE, HeadingEntry, extract_toc};
