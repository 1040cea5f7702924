//! Href classification and locale prefixing.

use crate::content::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Site-relative path (`/studies/theology#creeds`), split into path and `?`/`#` suffix.
    Internal { path: String, suffix: String },
    /// In-page anchor (`#creeds`).
    Fragment(String),
    /// Anything with a scheme or protocol-relative (`https://`, `mailto:`, `//cdn`).
    External(String),
    /// Bare relative path; never valid in content.
    Relative(String),
}

impl LinkTarget {
    /// Resolve the internal path to a route, if this is a well-formed internal link.
    pub fn route(&self) -> Option<Route> {
        match self {
            LinkTarget::Internal { path, .. } => Route::parse(path).ok(),
            _ => None,
        }
    }
}

pub fn classify(href: &str) -> LinkTarget {
    let href = href.trim();

    if href.starts_with('#') {
        return LinkTarget::Fragment(href.to_string());
    }
    if href.starts_with("//") || has_scheme(href) {
        return LinkTarget::External(href.to_string());
    }
    if href.starts_with('/') {
        let split = href.find(|c| c == '?' || c == '#').unwrap_or(href.len());
        let (path, suffix) = href.split_at(split);
        return LinkTarget::Internal {
            path: path.to_string(),
            suffix: suffix.to_string(),
        };
    }
    LinkTarget::Relative(href.to_string())
}

fn has_scheme(href: &str) -> bool {
    match href.find(':') {
        Some(idx) if idx > 0 => {
            let scheme = &href[..idx];
            scheme.chars().next().map(|c| c.is_ascii_alphabetic()).unwrap_or(false)
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        _ => false,
    }
}

pub fn is_external(href: &str) -> bool {
    matches!(classify(href), LinkTarget::External(_))
}

/// Prefix internal links with the locale segment; leave everything else alone.
pub fn localize(href: &str, locale: &str) -> String {
    match classify(href) {
        LinkTarget::Internal { path, suffix } => {
            let path = path.trim_end_matches('/');
            format!("/{}{}{}", locale, path, suffix)
        }
        _ => href.trim().to_string(),
    }
}

/// Localized href of a route.
pub fn route_href(route: &Route, locale: &str) -> String {
    if route.is_root() {
        format!("/{}", locale)
    } else {
        format!("/{}{}", locale, route)
    }
}

/// Lowercase ASCII slug for keys and DOM ids.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "item".to_string()
    } else {
        slug
    }
}

/// `sacred-texts` → `Sacred Texts`
pub fn title_case_segment(segment: &str) -> String {
    segment
        .split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
