//! Heading collection over a parsed markdown tree.
//!
//! pulldown-cmark yields a flat event stream. It is folded into a small
//! tree first so that collection is a plain recursive walk: headings may
//! sit inside block quotes or list items, and heading text may sit
//! inside emphasis or links.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

/// Markdown tree reduced to what heading extraction needs.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Node {
    Heading { level: u8, children: Vec<Node> },
    /// Any other element (paragraph, list, emphasis, link, ...).
    Element(Vec<Node>),
    /// Text or inline code.
    Text(String),
}

/// Parser options matching the page renderer.
fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Parse markdown into a node tree.
pub(crate) fn parse(markdown: &str) -> Vec<Node> {
    // Each frame holds the heading level (if the open tag is a heading)
    // and the children collected so far.
    let mut stack: Vec<(Option<u8>, Vec<Node>)> = vec![(None, Vec::new())];

    for event in Parser::new_ext(markdown, parser_options()) {
        match event {
            Event::Start(tag) => {
                let level = if let Tag::Heading { level, .. } = tag {
                    Some(heading_level_to_num(level))
                } else {
                    None
                };
                stack.push((level, Vec::new()));
            }
            Event::End(_) => {
                if stack.len() < 2 {
                    continue;
                }
                let Some((level, children)) = stack.pop() else {
                    continue;
                };
                let node = match level {
                    Some(level) => Node::Heading { level, children },
                    None => Node::Element(children),
                };
                if let Some((_, parent)) = stack.last_mut() {
                    parent.push(node);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, parent)) = stack.last_mut() {
                    parent.push(Node::Text(text.into_string()));
                }
            }
            _ => {}
        }
    }

    stack
        .into_iter()
        .next()
        .map(|(_, nodes)| nodes)
        .unwrap_or_default()
}

/// Collect `(level, text)` for every heading, in document order.
pub(crate) fn collect_headings(nodes: &[Node]) -> Vec<(u8, String)> {
    nodes
        .iter()
        .flat_map(|node| match node {
            Node::Heading { level, children } => vec![(*level, text_of(children))],
            Node::Element(children) => collect_headings(children),
            Node::Text(_) => Vec::new(),
        })
        .collect()
}

/// Concatenate all text leaves below `nodes`.
fn text_of(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| match node {
            Node::Text(text) => text.clone(),
            Node::Heading { children, .. } | Node::Element(children) => text_of(children),
        })
        .collect()
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
