//! Documentation source files.

use serde_yaml::Value;

use crate::block::{Block, split_blocks};
use crate::error::TocError;
use crate::template::TemplateEnv;

/// Parsed documentation source: front matter environment plus blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    env: TemplateEnv,
    blocks: Vec<Block>,
}

impl Document {
    /// Parse a source file.
    ///
    /// Optional YAML front matter between `---` lines becomes the
    /// template environment for the document's markdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the front matter is unclosed or invalid, or a
    /// custom block is never closed.
    pub fn parse(source: &str) -> Result<Self, TocError> {
        let (front_matter, body) = split_front_matter(source)?;

        let env = match front_matter {
            Some(yaml) if !yaml.trim().is_empty() => {
                let value: Value = serde_yaml::from_str(yaml)?;
                TemplateEnv::from_yaml(&value)
            }
            _ => TemplateEnv::new(),
        };

        Ok(Self {
            env,
            blocks: split_blocks(body)?,
        })
    }

    /// Build a document from already split blocks.
    pub fn from_blocks(blocks: Vec<Block>, env: TemplateEnv) -> Self {
        Self { env, blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn env(&self) -> &TemplateEnv {
        &self.env
    }
}

/// Split off front matter. Returns the YAML text (if any) and the body.
fn split_front_matter(source: &str) -> Result<(Option<&str>, &str), TocError> {
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return Ok((None, source));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Ok((Some(&rest[..offset]), &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(TocError::UnclosedFrontMatter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_without_front_matter() {
        let doc = Document::parse("# Intro\n\nText").unwrap();

        assert!(doc.env().is_empty());
        assert_eq!(
            doc.blocks(),
            &[Block::markdown("# Intro"), Block::markdown("Text")]
        );
    }

    #[test]
    fn test_parse_front_matter_into_env() {
        let doc = Document::parse("---\ncomponent: Button\n---\n# {component}\n").unwrap();

        assert_eq!(doc.env().get("component"), Some("Button"));
        assert_eq!(doc.blocks(), &[Block::markdown("# {component}")]);
    }

    #[test]
    fn test_parse_empty_front_matter() {
        let doc = Document::parse("---\n---\n# Intro").unwrap();

        assert!(doc.env().is_empty());
        assert_eq!(doc.blocks().len(), 1);
    }

    #[test]
    fn test_parse_crlf_front_matter() {
        let doc = Document::parse("---\r\ntitle: Vars\r\n---\r\n# Vars\r\n").unwrap();

        assert_eq!(doc.env().get("title"), Some("Vars"));
        assert_eq!(doc.blocks(), &[Block::markdown("# Vars")]);
    }

    #[test]
    fn test_unclosed_front_matter() {
        let err = Document::parse("---\ntitle: Vars\n# Vars").unwrap_err();

        assert!(matches!(err, TocError::UnclosedFrontMatter));
    }

    #[test]
    fn test_invalid_front_matter() {
        let err = Document::parse("---\ntitle: [unclosed\n---\n").unwrap_err();

        assert!(matches!(err, TocError::FrontMatter(_)));
    }

    #[test]
    fn test_horizontal_rule_later_is_not_front_matter() {
        let doc = Document::parse("# Intro\n\n---\n").unwrap();

        assert!(doc.env().is_empty());
        assert_eq!(doc.blocks().len(), 2);
    }
}
