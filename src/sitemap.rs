//! XML sitemap: one `<url>` per page per locale, with hreflang alternates.

use crate::config::SiteConfig;
use crate::content::catalog::Catalog;
use crate::pages::links::route_href;

pub fn render_sitemap(catalog: &Catalog, config: &SiteConfig) -> String {
    let mut xml = String::with_capacity(256 + catalog.len() * config.locales.len() * 256);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n");

    for page in catalog.iter() {
        for locale in &config.locales {
            xml.push_str("  <url>\n");
            xml.push_str(&format!(
                "    <loc>{}</loc>\n",
                escape_xml(&format!("{}{}", config.base_url, route_href(&page.route, locale)))
            ));
            for alternate in &config.locales {
                xml.push_str(&format!(
                    "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                    escape_xml(alternate),
                    escape_xml(&format!("{}{}", config.base_url, route_href(&page.route, alternate)))
                ));
            }
            xml.push_str("  </url>\n");
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::Page;
    use crate::content::loader::{parse_page, ContentFormat};
    use crate::content::route::Route;

    fn catalog() -> Catalog {
        let page = |route: &str| {
            Page::new(
                Route::parse(route).unwrap(),
                format!("{}.yaml", route),
                parse_page("metadata: { title: T, description: D }\nhero: { title: T }\n", ContentFormat::Yaml).unwrap(),
            )
        };
        Catalog::from_pages(vec![page("/studies/theology"), page("/sacred-texts/bible")]).unwrap()
    }

    #[test]
    fn test_one_url_per_page_per_locale() {
        let config = SiteConfig {
            base_url: "https://theopedia.example".to_string(),
            locales: vec!["en".to_string(), "es".to_string()],
            ..SiteConfig::default()
        };
        let xml = render_sitemap(&catalog(), &config);

        assert_eq!(xml.matches("<url>").count(), 4);
        assert_eq!(xml.matches("<xhtml:link").count(), 8);
        let first = xml.find("<loc>https://theopedia.example/en/sacred-texts/bible</loc>").unwrap();
        let second = xml.find("<loc>https://theopedia.example/es/sacred-texts/bible</loc>").unwrap();
        let third = xml.find("<loc>https://theopedia.example/en/studies/theology</loc>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>\"'"), "a&amp;b&lt;c&gt;&quot;&apos;");
    }
}
