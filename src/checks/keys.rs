//! Unique-key checks.
//!
//! Lists are rendered keyed by the slug of `title`/`name`, and sections/tabs
//! by the slug of `id`, so each slug must be unique within its list.

use rustc_hash::FxHashSet;

use crate::checks::IssueKind;
use crate::content::types::{Block, ContentPage};
use crate::pages::links::slugify;

pub fn check(page: &ContentPage) -> Vec<IssueKind> {
    let mut issues = Vec::new();

    report(&mut issues, "sections", page.sections.iter().map(|s| s.id.as_str()));

    for section in &page.sections {
        let section_loc = format!("sections[{}]", section.id);
        report(
            &mut issues,
            &format!("{}.tabs", section_loc),
            section.tabs.iter().map(|t| t.id.as_str()),
        );

        for tab in &section.tabs {
            let loc = format!("{}.tabs[{}].{}", section_loc, tab.id, tab.content.kind());
            check_block(&mut issues, &loc, &tab.content);
        }
    }

    report(&mut issues, "related", page.related.iter().map(|r| r.title.as_str()));
    issues
}

fn check_block(issues: &mut Vec<IssueKind>, loc: &str, block: &Block) {
    match block {
        Block::Topics(items) => report(issues, loc, items.iter().map(|i| i.title.as_str())),
        Block::Figures(items) => report(issues, loc, items.iter().map(|i| i.name.as_str())),
        Block::Resources(items) => report(issues, loc, items.iter().map(|i| i.title.as_str())),
        Block::Practices(items) => {
            report(issues, loc, items.iter().map(|i| i.name.as_str()));
            for practice in items {
                let practice_loc = format!("{}[{}]", loc, practice.name);
                report(
                    issues,
                    &format!("{}.figures", practice_loc),
                    practice.figures.iter().map(|f| f.name.as_str()),
                );
                report(
                    issues,
                    &format!("{}.techniques", practice_loc),
                    practice.techniques.iter().map(|t| t.name.as_str()),
                );
                // techniques and figures share one children list in the view
                let technique_slugs: FxHashSet<String> =
                    practice.techniques.iter().map(|t| slugify(&t.name)).collect();
                for figure in &practice.figures {
                    if technique_slugs.contains(&slugify(&figure.name)) {
                        issues.push(IssueKind::DuplicateKey {
                            list: format!("{}.children", practice_loc),
                            key: figure.name.trim().to_string(),
                        });
                    }
                }
                for technique in &practice.techniques {
                    report(
                        issues,
                        &format!("{}.techniques[{}].resources", practice_loc, technique.name),
                        technique.resources.iter().map(|r| r.title.as_str()),
                    );
                }
            }
        }
    }
}

fn report<'a>(issues: &mut Vec<IssueKind>, list: &str, keys: impl Iterator<Item = &'a str>) {
    for key in duplicates(keys) {
        issues.push(IssueKind::DuplicateKey {
            list: list.to_string(),
            key,
        });
    }
}

/// Keys whose slugs collide, each reported once, in first-repeat order.
///
/// Rendered DOM ids are built from `slugify(key)`, so `St. John` and
/// `St John` clash even though the raw keys differ.
pub fn duplicates<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    let mut dups = Vec::new();

    for key in keys.map(str::trim) {
        let slug = slugify(key);
        if !seen.insert(slug.clone()) && reported.insert(slug) {
            dups.push(key.to_string());
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::{parse_page, ContentFormat};

    #[test]
    fn test_duplicates_reported_once() {
        let dups = duplicates(["Luther", "Calvin", "Luther ", "Luther", "Zwingli", "Calvin"].into_iter());
        assert_eq!(dups, vec!["Luther", "Calvin"]);
        assert!(duplicates(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_nested_duplicates_found() {
        let page = parse_page(
            r#"
metadata: { title: T, description: D }
hero: { title: T }
sections:
  - id: practices
    heading: Practices
    tabs:
      - id: all
        label: All
        content:
          kind: practices
          items:
            - name: Centering Prayer
              description: Silent consent to God's presence.
              techniques:
                - name: Sacred Word
                  description: Choose a word.
                - name: Sacred Word
                  description: Duplicate.
      - id: all
        label: Again
        content: { kind: topics, items: [] }
  - id: practices
    heading: Duplicate section
"#,
            ContentFormat::Yaml,
        )
        .unwrap();

        let issues = check(&page);
        let lists: Vec<String> = issues
            .iter()
            .map(|i| match i {
                IssueKind::DuplicateKey { list, .. } => list.clone(),
                other => panic!("unexpected issue {:?}", other),
            })
            .collect();

        assert_eq!(
            lists,
            vec![
                "sections".to_string(),
                "sections[practices].tabs".to_string(),
                "sections[practices].tabs[all].practices[Centering Prayer].techniques".to_string(),
            ]
        );
    }

    #[test]
    fn test_keys_compared_by_slug() {
        let dups = duplicates(["St. John", "St John", "Key Figures", "key-figures", "Augustine"].into_iter());
        assert_eq!(dups, vec!["St John", "key-figures"]);
    }

    #[test]
    fn test_slug_collisions_in_page() {
        let page = parse_page(
            r#"
metadata: { title: T, description: D }
hero: { title: T }
sections:
  - id: Key Figures
    heading: Figures
    tabs:
      - id: all
        label: All
        content:
          kind: figures
          items:
            - { name: St. John, period: "1st century", contribution: Gospel. }
            - { name: St John, period: "1st century", contribution: Letters. }
  - id: key-figures
    heading: Practices
    tabs:
      - id: all
        label: All
        content:
          kind: practices
          items:
            - name: Examen
              description: Daily review.
              figures:
                - { name: Ignatius of Loyola, period: "1491-1556", contribution: Exercises. }
              techniques:
                - { name: "Ignatius of Loyola", description: Same slug as the figure. }
"#,
            ContentFormat::Yaml,
        )
        .unwrap();

        let found: Vec<(String, String)> = check(&page)
            .into_iter()
            .map(|i| match i {
                IssueKind::DuplicateKey { list, key } => (list, key),
                other => panic!("unexpected issue {:?}", other),
            })
            .collect();

        assert_eq!(
            found,
            vec![
                ("sections".to_string(), "key-figures".to_string()),
                ("sections[Key Figures].tabs[all].figures".to_string(), "St John".to_string()),
                (
                    "sections[key-figures].tabs[all].practices[Examen].children".to_string(),
                    "Ignatius of Loyola".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_empty_lists_are_clean() {
        let page = parse_page(
            "metadata: { title: T, description: D }\nhero: { title: T }\n",
            ContentFormat::Yaml,
        )
        .unwrap();
        assert!(check(&page).is_empty());
    }
}
