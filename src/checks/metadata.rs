//! SEO metadata checks.

use crate::checks::IssueKind;
use crate::content::types::ContentPage;

/// Longest description search engines reliably show in full.
pub const MAX_DESCRIPTION_LEN: usize = 160;

pub fn check(page: &ContentPage) -> Vec<IssueKind> {
    let meta = &page.metadata;
    let mut issues = Vec::new();

    if meta.title.trim().is_empty() {
        issues.push(IssueKind::EmptyMetadata { field: "title".to_string() });
    }

    let description_len = meta.description.trim().chars().count();
    if description_len == 0 {
        issues.push(IssueKind::EmptyMetadata { field: "description".to_string() });
    } else if description_len > MAX_DESCRIPTION_LEN {
        issues.push(IssueKind::LongDescription {
            len: description_len,
            max: MAX_DESCRIPTION_LEN,
        });
    }

    if meta.keywords.iter().all(|k| k.trim().is_empty()) {
        issues.push(IssueKind::NoKeywords);
    }

    issues
}
