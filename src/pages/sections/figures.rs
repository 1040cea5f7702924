//! Historical figure cards.

use crate::content::types::HistoricalFigure;
use crate::pages::links::slugify;
use crate::pages::rich_text;
use crate::pages::view_models::{CardList, CardView, ListItem};

pub fn cards(figures: &[HistoricalFigure]) -> Vec<CardView> {
    figures.iter().map(card).collect()
}

pub fn card(figure: &HistoricalFigure) -> CardView {
    let mut lists = Vec::new();
    if !figure.key_texts.is_empty() {
        lists.push(CardList {
            heading: "Key Texts".to_string(),
            items: figure.key_texts.iter().map(ListItem::text).collect(),
        });
    }

    CardView {
        key: slugify(&figure.name),
        title: figure.name.clone(),
        subtitle: Some(figure.period.clone()),
        body: figure.contribution.clone(),
        body_html: rich_text::to_html(&figure.contribution),
        lists,
        quotes: figure.quotes.clone(),
        ..CardView::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_card() {
        let figure = HistoricalFigure {
            name: "Athanasius of Alexandria".to_string(),
            period: "c. 296-373".to_string(),
            contribution: "Defended the full divinity of Christ at Nicaea.".to_string(),
            key_texts: vec!["On the Incarnation".to_string()],
            quotes: vec!["He became what we are that he might make us what he is.".to_string()],
        };

        let card = card(&figure);
        assert_eq!(card.key, "athanasius-of-alexandria");
        assert_eq!(card.subtitle.as_deref(), Some("c. 296-373"));
        assert_eq!(card.lists[0].heading, "Key Texts");
        assert_eq!(card.quotes.len(), 1);
    }

    #[test]
    fn test_no_texts_no_list() {
        let figure = HistoricalFigure {
            name: "Benedict of Nursia".to_string(),
            period: "c. 480-547".to_string(),
            contribution: "Wrote the Rule.".to_string(),
            key_texts: vec![],
            quotes: vec![],
        };
        let card = card(&figure);
        assert!(card.lists.is_empty());
        assert!(card.quotes.is_empty());
    }
}
