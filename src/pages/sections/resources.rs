//! Resource cards and the resource buttons they carry.
//!
//! Affiliate resources link to `affiliate_url` with `rel="sponsored nofollow noopener"`;
//! an affiliate entry missing that URL falls back to `url` (the content checks flag it).

use crate::content::types::Resource;
use crate::pages::links::slugify;
use crate::pages::rich_text;
use crate::pages::view_models::{ActionView, CardView, ListItem};

pub fn cards(resources: &[Resource]) -> Vec<CardView> {
    resources.iter().map(card).collect()
}

fn card(resource: &Resource) -> CardView {
    let mut badges = vec![resource.kind.label().to_string()];
    if let Some(year) = resource.year {
        badges.push(year.to_string());
    }
    if resource.affiliate {
        badges.push("Affiliate".to_string());
    }

    CardView {
        key: slugify(&resource.title),
        title: resource.title.clone(),
        subtitle: byline(resource),
        badges,
        body: resource.description.clone(),
        body_html: rich_text::to_html(&resource.description),
        actions: vec![action(resource)],
        ..CardView::default()
    }
}

/// "Author · Publisher", whichever are present.
fn byline(resource: &Resource) -> Option<String> {
    let parts: Vec<&str> = [resource.author.as_deref(), resource.publisher.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join(" · "))
}

pub fn action(resource: &Resource) -> ActionView {
    let affiliate_target = resource
        .affiliate_url
        .as_deref()
        .filter(|url| resource.affiliate && !url.trim().is_empty());

    match affiliate_target {
        Some(url) => ActionView {
            label: resource.kind.action_label().to_string(),
            href: url.to_string(),
            rel: "sponsored nofollow noopener".to_string(),
            sponsored: true,
        },
        None => ActionView {
            label: resource.kind.action_label().to_string(),
            href: resource.url.clone(),
            rel: "noopener".to_string(),
            sponsored: false,
        },
    }
}

/// Compact list entry used inside technique cards.
pub fn list_item(resource: &Resource) -> ListItem {
    let text = match &resource.author {
        Some(author) => format!("{} ({})", resource.title, author),
        None => resource.title.clone(),
    };
    ListItem {
        text,
        note: Some(resource.kind.label().to_string()),
        href: Some(action(resource).href),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::ResourceKind;

    fn resource(affiliate: bool, affiliate_url: Option<&str>) -> Resource {
        Resource {
            title: "Mere Christianity".to_string(),
            author: Some("C. S. Lewis".to_string()),
            url: "https://www.cslewis.com/us/books/mere-christianity".to_string(),
            kind: ResourceKind::Book,
            description: "Broadcast talks on the common core of Christian belief.".to_string(),
            year: Some(1952),
            publisher: Some("Geoffrey Bles".to_string()),
            affiliate,
            affiliate_url: affiliate_url.map(str::to_string),
        }
    }

    #[test]
    fn test_plain_resource_links_to_url() {
        let cards = cards(&[resource(false, None)]);
        let card = &cards[0];
        assert_eq!(card.subtitle.as_deref(), Some("C. S. Lewis · Geoffrey Bles"));
        assert_eq!(card.badges, vec!["Book", "1952"]);
        assert_eq!(card.actions[0].href, "https://www.cslewis.com/us/books/mere-christianity");
        assert!(!card.actions[0].sponsored);
    }

    #[test]
    fn test_affiliate_resource_links_to_affiliate_url() {
        let r = resource(true, Some("https://www.amazon.com/s?k=mere+christianity&tag=theopedia-20"));
        let action = action(&r);
        assert!(action.sponsored);
        assert!(action.rel.contains("sponsored"));
        assert!(action.href.contains("amazon.com"));
    }

    #[test]
    fn test_affiliate_without_url_falls_back() {
        let action = action(&resource(true, Some("  ")));
        assert!(!action.sponsored);
        assert!(action.href.contains("cslewis.com"));
    }

    #[test]
    fn test_list_item() {
        let item = list_item(&resource(false, None));
        assert_eq!(item.text, "Mere Christianity (C. S. Lewis)");
        assert_eq!(item.note.as_deref(), Some("Book"));
    }
}
