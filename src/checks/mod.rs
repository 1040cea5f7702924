//! Content Checks
//!
//! Build-time checks over the whole catalog. Content mistakes never break a
//! render (missing optional fields are just omitted), so they are caught here:
//! - `keys`: unique titles/names within each list, unique section and tab ids
//! - `affiliate`: affiliate resources carry an affiliate URL
//! - `links`: internal hrefs resolve to catalog pages, external URLs are http(s)
//! - `metadata`: SEO fields present and within recommended lengths

pub mod affiliate;
pub mod keys;
pub mod links;
pub mod metadata;

use serde::Serialize;
use thiserror::Error;

use crate::content::catalog::{Catalog, Page};
use crate::content::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    #[error("duplicate key `{key}` in {list}")]
    DuplicateKey { list: String, key: String },

    #[error("affiliate resource `{title}` in {location} has no affiliate_url")]
    MissingAffiliateUrl { location: String, title: String },

    #[error("link `{href}` in {location} does not resolve to a page")]
    BrokenLink { location: String, href: String },

    #[error("url `{url}` in {location} is not an http(s) URL")]
    MalformedUrl { location: String, url: String },

    #[error("metadata field `{field}` is empty")]
    EmptyMetadata { field: String },

    #[error("metadata description is {len} characters (recommended maximum {max})")]
    LongDescription { len: usize, max: usize },

    #[error("metadata has no keywords")]
    NoKeywords,
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::LongDescription { .. } | IssueKind::NoKeywords => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub route: Route,
    pub severity: Severity,
    #[serde(flatten)]
    pub kind: IssueKind,
    pub message: String,
}

impl Issue {
    pub fn new(route: &Route, kind: IssueKind) -> Self {
        Self {
            route: route.clone(),
            severity: kind.severity(),
            message: kind.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub pages_checked: usize,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Returns `true` if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns `true` if any issue is an error.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn for_route<'a>(&'a self, route: &'a Route) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.iter().filter(move |i| &i.route == route)
    }
}

/// Run every check on every page.
pub fn validate_catalog(catalog: &Catalog) -> ValidationReport {
    let mut issues = Vec::new();
    for page in catalog.iter() {
        issues.extend(validate_page(page, catalog));
    }

    let report = ValidationReport {
        pages_checked: catalog.len(),
        issues,
    };
    tracing::info!(
        "Checked {} pages: {} errors, {} warnings",
        report.pages_checked,
        report.error_count(),
        report.warning_count()
    );
    report
}

/// Checks for a single page; links are resolved against `catalog`.
pub fn validate_page(page: &Page, catalog: &Catalog) -> Vec<Issue> {
    let mut kinds = Vec::new();
    kinds.extend(metadata::check(&page.content));
    kinds.extend(keys::check(&page.content));
    kinds.extend(affiliate::check(&page.content));
    kinds.extend(links::check(&page.content, catalog));

    kinds.into_iter().map(|kind| Issue::new(&page.route, kind)).collect()
}
