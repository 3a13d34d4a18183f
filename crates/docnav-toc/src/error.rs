//! Document parsing and table-of-contents errors.

/// Error while parsing a document or extracting its table of contents.
///
/// There is no partial result: a document either yields a complete
/// table of contents or one of these errors.
#[derive(Debug, thiserror::Error)]
pub enum TocError {
    /// Front matter is not valid YAML.
    #[error("Front matter parse error: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
    /// Front matter opened with `---` but never closed.
    #[error("Front matter is not closed")]
    UnclosedFrontMatter,
    /// Custom block without a closing fence.
    #[error("Unterminated {kind} block starting at line {line}")]
    UnterminatedBlock {
        /// Block kind name (e.g., "demo").
        kind: &'static str,
        /// 1-based line of the opening fence.
        line: usize,
    },
    /// Template expression references a name the document does not define.
    #[error("Undefined template variable `{name}`")]
    UndefinedVariable {
        /// Referenced name.
        name: String,
    },
}
