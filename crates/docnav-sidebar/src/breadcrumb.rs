//! Breadcrumb trail for documentation URLs.

use serde::Serialize;

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
}

/// Build breadcrumbs for a URL path.
///
/// The `docs` prefix segment is dropped. Each remaining segment becomes a
/// capitalized title linking to the path up to and including it.
///
/// # Examples
///
/// ```
/// use docnav_sidebar::breadcrumbs;
///
/// let crumbs = breadcrumbs("/docs/state/overview/");
/// assert_eq!(crumbs[0].title, "State");
/// assert_eq!(crumbs[1].path, "/state/overview");
/// ```
pub fn breadcrumbs(path: &str) -> Vec<BreadcrumbItem> {
    let titles: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "docs")
        .map(capitalize)
        .collect();

    let mut href = String::new();
    titles
        .into_iter()
        .map(|title| {
            href.push('/');
            href.push_str(&title.to_lowercase());
            BreadcrumbItem {
                title,
                path: href.clone(),
            }
        })
        .collect()
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn crumb(title: &str, path: &str) -> BreadcrumbItem {
        BreadcrumbItem {
            title: title.to_owned(),
            path: path.to_owned(),
        }
    }

    #[test]
    fn test_breadcrumbs_skip_docs_segment() {
        assert_eq!(
            breadcrumbs("/docs/library/forms/button/"),
            vec![
                crumb("Library", "/library"),
                crumb("Forms", "/library/forms"),
                crumb("Button", "/library/forms/button"),
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_capitalize_lowercases_rest() {
        assert_eq!(
            breadcrumbs("/docs/API-reference"),
            vec![crumb("Api-reference", "/api-reference")]
        );
    }

    #[test]
    fn test_breadcrumbs_root_is_empty() {
        assert!(breadcrumbs("/").is_empty());
        assert!(breadcrumbs("").is_empty());
        assert!(breadcrumbs("/docs/").is_empty());
    }

    #[test]
    fn test_breadcrumbs_outside_docs() {
        assert_eq!(
            breadcrumbs("/blog/launch"),
            vec![crumb("Blog", "/blog"), crumb("Launch", "/blog/launch")]
        );
    }
}
