//! Affiliate resources must name the URL their button points to.

use crate::checks::IssueKind;
use crate::content::types::{Block, ContentPage, Resource};

pub fn check(page: &ContentPage) -> Vec<IssueKind> {
    let mut issues = Vec::new();

    for (location, resource) in resources(page) {
        let has_url = resource
            .affiliate_url
            .as_deref()
            .map(|u| !u.trim().is_empty())
            .unwrap_or(false);

        if resource.affiliate && !has_url {
            issues.push(IssueKind::MissingAffiliateUrl {
                location,
                title: resource.title.clone(),
            });
        }
    }
    issues
}

/// Every resource on the page with its location, including those nested in techniques.
pub fn resources(page: &ContentPage) -> Vec<(String, &Resource)> {
    let mut out = Vec::new();

    for section in &page.sections {
        for tab in &section.tabs {
            let loc = format!("sections[{}].tabs[{}]", section.id, tab.id);
            match &tab.content {
                Block::Resources(items) => {
                    out.extend(items.iter().map(|r| (format!("{}.resources", loc), r)));
                }
                Block::Practices(items) => {
                    for practice in items {
                        for technique in &practice.techniques {
                            let nested = format!(
                                "{}.practices[{}].techniques[{}].resources",
                                loc, practice.name, technique.name
                            );
                            out.extend(technique.resources.iter().map(|r| (nested.clone(), r)));
                        }
                    }
                }
                Block::Topics(_) | Block::Figures(_) => {}
            }
        }
    }
    out
}
