//! Splitting a document body into content blocks.
//!
//! Custom blocks open with an indicator fence such as ```` ```python demo ````
//! and close at the next bare ```` ``` ```` line. Everything else is
//! markdown, split into blocks at blank lines. A plain fenced code block is
//! never split, even when it contains blank lines.

use crate::error::TocError;
use crate::fence::FenceTracker;

/// Kind of a custom block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CustomKind {
    /// Live component demo with its source.
    Demo,
    /// Callout box.
    Alert,
    /// Term and definition pair.
    Definition,
    /// Titled content section.
    Section,
    /// Embedded video.
    Video,
}

impl CustomKind {
    const ALL: [CustomKind; 5] = [
        CustomKind::Demo,
        CustomKind::Alert,
        CustomKind::Definition,
        CustomKind::Section,
        CustomKind::Video,
    ];

    /// Opening fence for this kind.
    pub fn indicator(self) -> &'static str {
        match self {
            CustomKind::Demo => "```python demo",
            CustomKind::Alert => "```md alert",
            CustomKind::Definition => "```md definition",
            CustomKind::Section => "```md section",
            CustomKind::Video => "```md video",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CustomKind::Demo => "demo",
            CustomKind::Alert => "alert",
            CustomKind::Definition => "definition",
            CustomKind::Section => "section",
            CustomKind::Video => "video",
        }
    }

    /// Match an opening line, returning the kind and its arguments.
    fn detect(line: &str) -> Option<(CustomKind, Vec<String>)> {
        let trimmed = line.trim();
        Self::ALL.into_iter().find_map(|kind| {
            let rest = trimmed.strip_prefix(kind.indicator())?;
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                return None;
            }
            Some((kind, rest.split_whitespace().map(str::to_owned).collect()))
        })
    }
}

/// Custom block contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CustomBlock {
    /// Words after the indicator on the opening line.
    pub args: Vec<String>,
    /// Lines between the fences, joined with newlines.
    pub body: String,
    /// 1-based line of the opening fence.
    pub line: usize,
}

/// Content block of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Block {
    /// Plain markdown.
    Markdown {
        /// Block lines joined with newlines.
        content: String,
    },
    /// Custom block rendered by its own component.
    Custom {
        kind: CustomKind,
        #[cfg_attr(feature = "serde", serde(flatten))]
        block: CustomBlock,
    },
}

impl Block {
    pub fn markdown(content: impl Into<String>) -> Self {
        Block::Markdown {
            content: content.into(),
        }
    }

    /// Markdown content if this is a markdown block.
    pub fn as_markdown(&self) -> Option<&str> {
        match self {
            Block::Markdown { content } => Some(content.as_str()),
            Block::Custom { .. } => None,
        }
    }

    /// Whether this is a markdown block starting with a heading marker.
    pub fn is_heading_block(&self) -> bool {
        self.as_markdown()
            .is_some_and(|content| content.starts_with('#'))
    }
}

/// Split a document body into blocks.
///
/// # Errors
///
/// Returns [`TocError::UnterminatedBlock`] if a custom block is never
/// closed.
pub fn split_blocks(body: &str) -> Result<Vec<Block>, TocError> {
    let mut blocks = Vec::new();
    let mut markdown: Vec<&str> = Vec::new();
    let mut fence = FenceTracker::default();
    let mut lines = body.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        if !fence.in_fence() {
            if let Some((kind, args)) = CustomKind::detect(line) {
                flush_markdown(&mut markdown, &mut blocks);
                let body = collect_custom_body(&mut lines).ok_or(TocError::UnterminatedBlock {
                    kind: kind.name(),
                    line: index + 1,
                })?;
                blocks.push(Block::Custom {
                    kind,
                    block: CustomBlock {
                        args,
                        body,
                        line: index + 1,
                    },
                });
                continue;
            }

            if line.trim().is_empty() {
                flush_markdown(&mut markdown, &mut blocks);
                continue;
            }
        }

        fence.update(line);
        markdown.push(line);
    }

    flush_markdown(&mut markdown, &mut blocks);
    Ok(blocks)
}

/// Consume lines up to and including the closing fence. `None` if the
/// input ends first.
fn collect_custom_body<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
) -> Option<String> {
    let mut body: Vec<&str> = Vec::new();
    for (_, line) in lines {
        if line.trim() == "```" {
            return Some(body.join("\n"));
        }
        body.push(line);
    }
    None
}

fn flush_markdown(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !lines.is_empty() {
        blocks.push(Block::markdown(lines.join("\n")));
        lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn custom(kind: CustomKind, args: &[&str], body: &str, line: usize) -> Block {
        Block::Custom {
            kind,
            block: CustomBlock {
                args: args.iter().map(|&a| a.to_owned()).collect(),
                body: body.to_owned(),
                line,
            },
        }
    }

    #[test]
    fn test_blank_lines_split_markdown() {
        let blocks = split_blocks("# Intro\nSome text.\n\n## Details\n\nMore text.").unwrap();

        assert_eq!(
            blocks,
            vec![
                Block::markdown("# Intro\nSome text."),
                Block::markdown("## Details"),
                Block::markdown("More text."),
            ]
        );
    }

    #[test]
    fn test_demo_block_is_custom() {
        let blocks = split_blocks("# Intro\n```python demo\n# not a heading\nrx.button()\n```\n## Details").unwrap();

        assert_eq!(
            blocks,
            vec![
                Block::markdown("# Intro"),
                custom(CustomKind::Demo, &[], "# not a heading\nrx.button()", 2),
                Block::markdown("## Details"),
            ]
        );
    }

    #[test]
    fn test_custom_block_args() {
        let blocks = split_blocks("```md alert warning\n# Careful\nText\n```").unwrap();

        assert_eq!(
            blocks,
            vec![custom(CustomKind::Alert, &["warning"], "# Careful\nText", 1)]
        );
    }

    #[test]
    fn test_custom_block_keeps_blank_lines() {
        let blocks = split_blocks("```md section\nA\n\nB\n```").unwrap();

        assert_eq!(blocks, vec![custom(CustomKind::Section, &[], "A\n\nB", 1)]);
    }

    #[test]
    fn test_indicator_needs_word_boundary() {
        let blocks = split_blocks("```md sections\ntext\n```").unwrap();

        assert_eq!(blocks, vec![Block::markdown("```md sections\ntext\n```")]);
    }

    #[test]
    fn test_plain_fence_with_blank_lines_is_one_block() {
        let source = "```python\nx = 1\n\n# comment\n```\n\n# After";

        let blocks = split_blocks(source).unwrap();

        assert_eq!(
            blocks,
            vec![
                Block::markdown("```python\nx = 1\n\n# comment\n```"),
                Block::markdown("# After"),
            ]
        );
    }

    #[test]
    fn test_indicator_inside_plain_fence_is_text() {
        let source = "````md\n```python demo\nx\n```\n````";

        let blocks = split_blocks(source).unwrap();

        assert_eq!(blocks, vec![Block::markdown(source)]);
    }

    #[test]
    fn test_unterminated_custom_block() {
        let err = split_blocks("# Intro\n\n```md definition\nTerm").unwrap_err();

        assert!(matches!(
            err,
            TocError::UnterminatedBlock {
                kind: "definition",
                line: 3
            }
        ));
    }

    #[test]
    fn test_empty_body_has_no_blocks() {
        assert!(split_blocks("").unwrap().is_empty());
        assert!(split_blocks("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_is_heading_block() {
        assert!(Block::markdown("# Intro").is_heading_block());
        assert!(!Block::markdown("Text\n# Late").is_heading_block());
        assert!(!custom(CustomKind::Demo, &[], "# x", 1).is_heading_block());
    }
}
