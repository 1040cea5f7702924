//! Topic/area cards: description, subtopic list, optional "learn more" link.

use crate::content::types::TopicArea;
use crate::pages::links::{is_external, localize, slugify};
use crate::pages::rich_text;
use crate::pages::view_models::{CardList, CardView, LinkView, ListItem};

pub fn cards(areas: &[TopicArea], locale: &str) -> Vec<CardView> {
    areas.iter().map(|area| card(area, locale)).collect()
}

fn card(area: &TopicArea, locale: &str) -> CardView {
    let mut lists = Vec::new();
    if !area.topics.is_empty() {
        lists.push(CardList {
            heading: "Key Topics".to_string(),
            items: area.topics.iter().map(ListItem::text).collect(),
        });
    }

    let link = area.link.as_ref().map(|href| LinkView {
        label: format!("Explore {}", area.title),
        href: localize(href, locale),
        external: is_external(href),
    });

    CardView {
        key: slugify(&area.title),
        title: area.title.clone(),
        icon_svg: area.icon.map(|i| i.svg_path()),
        icon: area.icon.map(|i| format!("{:?}", i).to_lowercase()),
        body: area.description.clone(),
        body_html: rich_text::to_html(&area.description),
        lists,
        link,
        ..CardView::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::Icon;

    fn area(link: Option<&str>, topics: &[&str]) -> TopicArea {
        TopicArea {
            title: "Systematic Theology".to_string(),
            description: "Doctrines arranged *topically*.".to_string(),
            icon: Some(Icon::Book),
            link: link.map(str::to_string),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_card_fields() {
        let cards = cards(&[area(Some("/studies/theology#systematic"), &["Trinity", "Christology"])], "en");
        let card = &cards[0];

        assert_eq!(card.key, "systematic-theology");
        assert_eq!(card.icon.as_deref(), Some("book"));
        assert!(card.icon_svg.is_some());
        assert_eq!(card.body_html, "<p>Doctrines arranged <em>topically</em>.</p>");
        assert_eq!(card.lists[0].items.len(), 2);

        let link = card.link.as_ref().unwrap();
        assert_eq!(link.href, "/en/studies/theology#systematic");
        assert!(!link.external);
    }

    #[test]
    fn test_optional_fields_omitted() {
        let cards = cards(&[area(None, &[])], "en");
        assert!(cards[0].link.is_none());
        assert!(cards[0].lists.is_empty());
    }
}
