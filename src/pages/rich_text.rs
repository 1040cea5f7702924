//! Markdown-to-HTML for descriptions and intros.
//!
//! Raw HTML embedded in content is escaped, never passed through. Link and
//! image destinations are limited to `http(s)://`, site paths and fragments;
//! anything else (`javascript:`, `data:`) is replaced by `#`.

use pulldown_cmark::{html, CowStr, Event, LinkType, Options, Parser, Tag};

pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            dest_url: safe_destination(link_type, dest_url),
            link_type,
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            dest_url: safe_destination(link_type, dest_url),
            link_type,
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() + markdown.len() / 4);
    html::push_html(&mut out, parser);
    out.trim_end().to_string()
}

fn safe_destination<'a>(link_type: LinkType, dest: CowStr<'a>) -> CowStr<'a> {
    // email autolinks carry the bare address; the renderer adds `mailto:`
    if link_type == LinkType::Email {
        return dest;
    }

    let trimmed = dest.trim_start();
    let lower = trimmed.to_ascii_lowercase();
    let allowed = lower.starts_with("https://")
        || lower.starts_with("http://")
        || lower.starts_with('#')
        || (trimmed.starts_with('/') && !trimmed.starts_with("//"));

    if allowed {
        dest
    } else {
        CowStr::Borrowed("#")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_rendered() {
        assert_eq!(
            to_html("The *Nicene* Creed (**325**)"),
            "<p>The <em>Nicene</em> Creed (<strong>325</strong>)</p>"
        );
    }

    #[test]
    fn test_raw_html_escaped() {
        let html = to_html("Before <script>alert(1)</script> after");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_neutralised() {
        assert_eq!(
            to_html("[click](javascript:alert(1))"),
            "<p><a href=\"#\">click</a></p>"
        );
        assert!(!to_html("[x](JavaScript:alert(1)) ![y](data:text/html,hi)").contains("script:"));
        assert!(!to_html("![y](data:text/html,hi)").contains("data:"));
    }

    #[test]
    fn test_safe_links_kept() {
        assert_eq!(
            to_html("[Bible](/sacred-texts/bible) and [SEP](https://plato.stanford.edu/)"),
            "<p><a href=\"/sacred-texts/bible\">Bible</a> and <a href=\"https://plato.stanford.edu/\">SEP</a></p>"
        );
        assert!(to_html("<editor@theopedia.example>").contains("href=\"mailto:editor@theopedia.example\""));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }
}
