//! Markdown rendition of a page view.
//!
//! Frontmatter values are JSON-quoted (valid YAML). No generation timestamp,
//! so repeated renders are byte-identical.

use crate::pages::view_models::{CardView, PageView};

pub fn render(view: &PageView) -> String {
    let mut out: Vec<String> = Vec::new();

    // Frontmatter
    out.push("---".to_string());
    out.push(format!("route: {}", quote(view.route.as_str())));
    out.push(format!("locale: {}", quote(&view.locale)));
    out.push(format!("title: {}", quote(&view.head.title)));
    out.push(format!("description: {}", quote(&view.head.description)));
    out.push(format!("canonical: {}", quote(&view.head.canonical)));
    if let Some(keywords) = &view.head.keywords {
        out.push(format!("keywords: {}", quote(keywords)));
    }
    out.push("---".to_string());
    out.push(String::new());

    // Hero
    out.push(format!("# {}", view.hero.title));
    if let Some(subtitle) = &view.hero.subtitle {
        out.push(String::new());
        out.push(subtitle.clone());
    }
    if !view.hero.badges.is_empty() {
        out.push(String::new());
        out.push(badges(&view.hero.badges));
    }
    if !view.hero.actions.is_empty() {
        out.push(String::new());
        let actions: Vec<String> = view
            .hero
            .actions
            .iter()
            .map(|a| format!("[{}]({})", a.label, a.href))
            .collect();
        out.push(actions.join(" · "));
    }

    // Sections
    for section in &view.sections {
        out.push(String::new());
        out.push(format!("## {}", section.heading));
        if let Some(intro) = &section.intro {
            out.push(String::new());
            out.push(intro.clone());
        }

        for tab in &section.tabs {
            if section.has_tab_bar {
                out.push(String::new());
                out.push(format!("### {}", tab.label));
            }
            if tab.cards.is_empty() {
                out.push(String::new());
                out.push("*Nothing listed yet.*".to_string());
            }
            for card in &tab.cards {
                render_card(card, "####", &mut out);
                for child in &card.children {
                    render_card(child, "#####", &mut out);
                }
            }
        }
    }

    // Related topics
    if !view.related.is_empty() {
        out.push(String::new());
        out.push("## Related Topics".to_string());
        out.push(String::new());
        for related in &view.related {
            match &related.description {
                Some(description) => out.push(format!("- [{}]({}) — {}", related.title, related.href, description)),
                None => out.push(format!("- [{}]({})", related.title, related.href)),
            }
        }
    }

    let mut result = out.join("\n");
    result.push('\n');
    result
}

fn render_card(card: &CardView, level: &str, out: &mut Vec<String>) {
    out.push(String::new());
    out.push(format!("{} {}", level, card.title));

    if let Some(subtitle) = &card.subtitle {
        out.push(String::new());
        out.push(format!("*{}*", subtitle));
    }
    if !card.badges.is_empty() {
        out.push(String::new());
        out.push(badges(&card.badges));
    }
    if !card.body.is_empty() {
        out.push(String::new());
        out.push(card.body.clone());
    }

    for list in &card.lists {
        out.push(String::new());
        out.push(format!("**{}**:", list.heading));
        for item in &list.items {
            let text = match &item.href {
                Some(href) => format!("[{}]({})", item.text, href),
                None => item.text.clone(),
            };
            match &item.note {
                Some(note) => out.push(format!("- {} — {}", text, note)),
                None => out.push(format!("- {}", text)),
            }
        }
    }

    for quote in &card.quotes {
        out.push(String::new());
        out.push(format!("> {}", quote));
    }

    if !card.actions.is_empty() {
        out.push(String::new());
        let actions: Vec<String> = card
            .actions
            .iter()
            .map(|a| format!("[{}]({})", a.label, a.href))
            .collect();
        out.push(actions.join(" · "));
    }

    if let Some(link) = &card.link {
        out.push(String::new());
        out.push(format!("[{}]({})", link.label, link.href));
    }
}

fn badges(badges: &[String]) -> String {
    badges
        .iter()
        .map(|b| format!("`{}`", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}
