//! Template expressions in markdown blocks.
//!
//! Markdown may reference document metadata with `{name}` or
//! `{group.name}`. Expressions are substituted before headings are
//! parsed, the same way the page itself is rendered. Braces that do not
//! enclose a name are left alone.
//!
//! Code is literal: expressions inside inline code spans and fenced code
//! blocks are not substituted. A backslash before the opening brace
//! (`\{name}`) escapes an expression elsewhere; markdown then renders it
//! as `{name}`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use crate::error::TocError;
use crate::fence::FenceTracker;

static EXPR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)\}").unwrap()
});

/// Names available to template expressions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateEnv {
    values: BTreeMap<String, String>,
}

impl TemplateEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, replacing any previous one.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build an environment from front matter.
    ///
    /// Nested mappings become dotted names. Scalars are stringified;
    /// sequences and nulls are not addressable.
    pub(crate) fn from_yaml(value: &Value) -> Self {
        let mut env = Self::new();
        if let Value::Mapping(mapping) = value {
            env.insert_mapping("", mapping);
        }
        env
    }

    fn insert_mapping(&mut self, prefix: &str, mapping: &serde_yaml::Mapping) {
        for (key, value) in mapping {
            let Some(key) = key.as_str() else {
                continue;
            };
            let name = if prefix.is_empty() {
                key.to_owned()
            } else {
                format!("{prefix}.{key}")
            };

            match value {
                Value::String(s) => self.insert(name, s.as_str()),
                Value::Number(n) => self.insert(name, n.to_string()),
                Value::Bool(b) => self.insert(name, b.to_string()),
                Value::Mapping(nested) => self.insert_mapping(&name, nested),
                Value::Null | Value::Sequence(_) | Value::Tagged(_) => {}
            }
        }
    }

    /// Substitute every `{name}` expression in `content`.
    ///
    /// Code spans, fenced code and escaped expressions are copied as
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::UndefinedVariable`] for the first name that is
    /// not defined.
    pub fn render(&self, content: &str) -> Result<String, TocError> {
        let mut output = String::with_capacity(content.len());
        let mut fence = FenceTracker::default();

        for line in content.split_inclusive('\n') {
            let in_code = fence.in_fence();
            if fence.update(line) || in_code {
                output.push_str(line);
            } else {
                self.render_line(line, &mut output)?;
            }
        }

        Ok(output)
    }

    /// Render one line outside fenced code, skipping code spans.
    fn render_line(&self, line: &str, output: &mut String) -> Result<(), TocError> {
        let mut rest = line;

        while let Some(open) = rest.find('`') {
            let ticks = backtick_run(&rest[open..]);
            let body_start = open + ticks;
            let Some(close) = closing_backticks(&rest[body_start..], ticks) else {
                break;
            };
            let end = body_start + close + ticks;

            self.render_text(&rest[..open], output)?;
            output.push_str(&rest[open..end]);
            rest = &rest[end..];
        }

        self.render_text(rest, output)
    }

    fn render_text(&self, text: &str, output: &mut String) -> Result<(), TocError> {
        let mut last = 0;

        for caps in EXPR_RE.captures_iter(text) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if text[..whole.start()].ends_with('\\') {
                continue;
            }
            let value = self
                .get(name.as_str())
                .ok_or_else(|| TocError::UndefinedVariable {
                    name: name.as_str().to_owned(),
                })?;

            output.push_str(&text[last..whole.start()]);
            output.push_str(value);
            last = whole.end();
        }

        output.push_str(&text[last..]);
        Ok(())
    }
}

/// Length of the backtick run at the start of `text`.
fn backtick_run(text: &str) -> usize {
    text.len() - text.trim_start_matches('`').len()
}

/// Offset of the next backtick run of exactly `ticks` in `text`.
fn closing_backticks(text: &str, ticks: usize) -> Option<usize> {
    let mut offset = 0;
    while let Some(found) = text[offset..].find('`') {
        let start = offset + found;
        let run = backtick_run(&text[start..]);
        if run == ticks {
            return Some(start);
        }
        offset = start + run;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_substitutes_names() {
        let env = TemplateEnv::new().with("component", "Button");

        let output = env.render("# The {component} Component").unwrap();

        assert_eq!(output, "# The Button Component");
    }

    #[test]
    fn test_render_without_expressions_is_unchanged() {
        let env = TemplateEnv::new();

        assert_eq!(env.render("## Plain heading").unwrap(), "## Plain heading");
    }

    #[test]
    fn test_render_leaves_non_name_braces() {
        let env = TemplateEnv::new();

        let output = env.render("Use {} or { x } or {1}").unwrap();

        assert_eq!(output, "Use {} or { x } or {1}");
    }

    #[test]
    fn test_render_undefined_name_fails() {
        let env = TemplateEnv::new().with("a", "1");

        let err = env.render("# {a} and {b}").unwrap_err();

        assert!(matches!(err, TocError::UndefinedVariable { name } if name == "b"));
    }

    #[test]
    fn test_from_yaml_flattens_nested_mappings() {
        let value: Value = serde_yaml::from_str(
            "title: Vars\norder: 3\ndraft: false\ncomponents:\n  primary: Input\ntags: [a, b]\n",
        )
        .unwrap();

        let env = TemplateEnv::from_yaml(&value);

        assert_eq!(env.get("title"), Some("Vars"));
        assert_eq!(env.get("order"), Some("3"));
        assert_eq!(env.get("draft"), Some("false"));
        assert_eq!(env.get("components.primary"), Some("Input"));
        assert_eq!(env.get("tags"), None);
    }

    #[test]
    fn test_render_dotted_name() {
        let value: Value = serde_yaml::from_str("components:\n  primary: Input\n").unwrap();
        let env = TemplateEnv::from_yaml(&value);

        assert_eq!(env.render("## {components.primary} Props").unwrap(), "## Input Props");
    }

    #[test]
    fn test_from_yaml_non_mapping_is_empty() {
        let value: Value = serde_yaml::from_str("- a\n- b\n").unwrap();

        assert!(TemplateEnv::from_yaml(&value).is_empty());
    }

    #[test]
    fn test_render_skips_inline_code() {
        let env = TemplateEnv::new().with("component", "Button");

        let output = env.render("## Use `{value}` with {component}").unwrap();

        assert_eq!(output, "## Use `{value}` with Button");
    }

    #[test]
    fn test_render_skips_double_backtick_span() {
        let env = TemplateEnv::new();

        let output = env.render("## ``a ` {value}`` here").unwrap();

        assert_eq!(output, "## ``a ` {value}`` here");
    }

    #[test]
    fn test_render_unclosed_backtick_is_text() {
        let env = TemplateEnv::new().with("name", "x");

        assert_eq!(env.render("# A ` {name}").unwrap(), "# A ` x");
    }

    #[test]
    fn test_render_skips_fenced_code() {
        let env = TemplateEnv::new().with("title", "Vars");

        let output = env
            .render("# {title}\n```python\nd = {value}\n```\n## After {title}")
            .unwrap();

        assert_eq!(output, "# Vars\n```python\nd = {value}\n```\n## After Vars");
    }

    #[test]
    fn test_render_escaped_expression_is_kept() {
        let env = TemplateEnv::new();

        let output = env.render(r"## The \{value} placeholder").unwrap();

        assert_eq!(output, r"## The \{value} placeholder");
    }
}
