//! Link integrity: internal hrefs must resolve to a page in the catalog.
//!
//! Checked: hero actions, topic-area links, related links and resource URLs.
//! `#fragment` and `?query` suffixes are ignored when resolving.

use crate::checks::affiliate::resources;
use crate::checks::IssueKind;
use crate::content::catalog::Catalog;
use crate::content::types::{Block, ContentPage};
use crate::pages::links::{classify, LinkTarget};

pub fn check(page: &ContentPage, catalog: &Catalog) -> Vec<IssueKind> {
    let mut issues = Vec::new();

    for action in &page.hero.actions {
        check_href(&mut issues, catalog, "hero.actions", &action.href);
    }

    for section in &page.sections {
        for tab in &section.tabs {
            if let Block::Topics(areas) = &tab.content {
                let loc = format!("sections[{}].tabs[{}].topics", section.id, tab.id);
                for area in areas {
                    if let Some(href) = &area.link {
                        check_href(&mut issues, catalog, &loc, href);
                    }
                }
            }
        }
    }

    for related in &page.related {
        check_href(&mut issues, catalog, "related", &related.href);
    }

    for (location, resource) in resources(page) {
        check_http_url(&mut issues, &location, &resource.url);
        if let Some(url) = resource.affiliate_url.as_deref().filter(|u| !u.trim().is_empty()) {
            check_http_url(&mut issues, &location, url);
        }
    }

    issues
}

fn check_href(issues: &mut Vec<IssueKind>, catalog: &Catalog, location: &str, href: &str) {
    let broken = match classify(href) {
        target @ LinkTarget::Internal { .. } => match target.route() {
            Some(route) => !catalog.contains(&route),
            None => true,
        },
        LinkTarget::Relative(_) => true,
        LinkTarget::Fragment(_) | LinkTarget::External(_) => false,
    };

    if broken {
        issues.push(IssueKind::BrokenLink {
            location: location.to_string(),
            href: href.to_string(),
        });
    }
}

fn check_http_url(issues: &mut Vec<IssueKind>, location: &str, url: &str) {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    let host_ok = rest
        .map(|r| r.split(['/', '?', '#']).next().unwrap_or(""))
        .map(|host| !host.is_empty() && !host.contains(char::is_whitespace))
        .unwrap_or(false);

    if !host_ok {
        issues.push(IssueKind::MalformedUrl {
            location: location.to_string(),
            url: url.to_string(),
        });
    }
}
