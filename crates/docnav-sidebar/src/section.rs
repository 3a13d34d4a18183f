//! Documentation sections.

use std::fmt;

use serde::Serialize;

/// Top-level documentation section. Each section is rendered as its own
/// accordion in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Learn,
    Frontend,
    Backend,
    Hosting,
    Components,
    Graphing,
    Recipes,
    ApiReference,
    Tutorials,
}

impl SectionKind {
    /// All sections in reading order. Previous/next navigation follows
    /// this order.
    pub const ALL: [SectionKind; 9] = [
        SectionKind::Learn,
        SectionKind::Frontend,
        SectionKind::Backend,
        SectionKind::Hosting,
        SectionKind::Components,
        SectionKind::Graphing,
        SectionKind::Recipes,
        SectionKind::ApiReference,
        SectionKind::Tutorials,
    ];

    /// Key used for this section in the sidebar file.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Learn => "learn",
            SectionKind::Frontend => "frontend",
            SectionKind::Backend => "backend",
            SectionKind::Hosting => "hosting",
            SectionKind::Components => "components",
            SectionKind::Graphing => "graphing",
            SectionKind::Recipes => "recipes",
            SectionKind::ApiReference => "api_reference",
            SectionKind::Tutorials => "tutorials",
        }
    }

    /// Position in [`SectionKind::ALL`].
    pub(crate) fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_matches_reading_order() {
        for (i, section) in SectionKind::ALL.iter().enumerate() {
            assert_eq!(section.position(), i);
        }
    }

    #[test]
    fn test_display_uses_file_key() {
        assert_eq!(SectionKind::ApiReference.to_string(), "api_reference");
        assert_eq!(SectionKind::Learn.to_string(), "learn");
    }
}
