//! Practice cards: nested figure cards plus one child card per technique.
//!
//! A technique card lists its steps, scripture passages and resources.

use crate::content::types::{Practice, Technique};
use crate::pages::links::slugify;
use crate::pages::rich_text;
use crate::pages::sections::{figures, resources};
use crate::pages::view_models::{CardList, CardView, ListItem};

pub fn cards(practices: &[Practice]) -> Vec<CardView> {
    practices.iter().map(card).collect()
}

fn card(practice: &Practice) -> CardView {
    let mut badges = Vec::new();
    if !practice.techniques.is_empty() {
        badges.push(plural(practice.techniques.len(), "technique", "techniques"));
    }
    if !practice.figures.is_empty() {
        badges.push(plural(practice.figures.len(), "key figure", "key figures"));
    }

    let children = practice
        .techniques
        .iter()
        .map(technique_card)
        .chain(practice.figures.iter().map(figures::card))
        .collect();

    CardView {
        key: slugify(&practice.name),
        title: practice.name.clone(),
        badges,
        body: practice.description.clone(),
        body_html: rich_text::to_html(&practice.description),
        children,
        ..CardView::default()
    }
}

fn technique_card(technique: &Technique) -> CardView {
    let mut lists = Vec::new();

    if !technique.steps.is_empty() {
        lists.push(CardList {
            heading: "Steps".to_string(),
            items: technique.steps.iter().map(ListItem::text).collect(),
        });
    }

    if !technique.scriptures.is_empty() {
        lists.push(CardList {
            heading: "Scripture".to_string(),
            items: technique
                .scriptures
                .iter()
                .map(|s| ListItem {
                    text: s.reference.clone(),
                    note: Some(s.text.clone()),
                    href: None,
                })
                .collect(),
        });
    }

    if !technique.resources.is_empty() {
        lists.push(CardList {
            heading: "Resources".to_string(),
            items: technique.resources.iter().map(resources::list_item).collect(),
        });
    }

    CardView {
        key: slugify(&technique.name),
        title: technique.name.clone(),
        subtitle: Some("Technique".to_string()),
        body: technique.description.clone(),
        body_html: rich_text::to_html(&technique.description),
        lists,
        ..CardView::default()
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", n, many)
    }
}
