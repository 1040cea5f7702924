//! SEO head: title, canonical URL, hreflang alternates, Open Graph, Twitter.

use crate::config::SiteConfig;
use crate::content::route::Route;
use crate::content::types::Metadata;
use crate::pages::links::{classify, route_href, LinkTarget};
use crate::pages::view_models::{AlternateLink, HeadView, MetaTag};

pub fn build_head(metadata: &Metadata, route: &Route, locale: &str, config: &SiteConfig) -> HeadView {
    let canonical = absolute_url(config, &route_href(route, locale));
    let og = metadata.open_graph.as_ref();
    let tw = metadata.twitter.as_ref();

    let og_title = og.and_then(|o| o.title.as_deref()).unwrap_or(&metadata.title);
    let og_description = og
        .and_then(|o| o.description.as_deref())
        .unwrap_or(&metadata.description);

    let mut open_graph = vec![
        tag("og:title", og_title),
        tag("og:description", og_description),
        tag("og:type", og.map(|o| o.kind.as_str()).unwrap_or("article")),
        tag("og:url", &canonical),
        tag("og:site_name", &config.site_name),
        tag("og:locale", &locale.replace('-', "_")),
    ];
    let og_image = og.and_then(|o| o.image.as_deref());
    if let Some(image) = og_image {
        open_graph.push(tag("og:image", &absolute_url(config, image)));
    }

    let mut twitter = vec![
        tag("twitter:card", tw.map(|t| t.card.as_str()).unwrap_or("summary")),
        tag("twitter:title", tw.and_then(|t| t.title.as_deref()).unwrap_or(og_title)),
        tag(
            "twitter:description",
            tw.and_then(|t| t.description.as_deref()).unwrap_or(og_description),
        ),
    ];
    if let Some(image) = tw.and_then(|t| t.image.as_deref()).or(og_image) {
        twitter.push(tag("twitter:image", &absolute_url(config, image)));
    }

    let keywords = (!metadata.keywords.is_empty()).then(|| metadata.keywords.join(", "));

    HeadView {
        title: format!("{} | {}", metadata.title, config.site_name),
        description: metadata.description.clone(),
        keywords,
        canonical,
        alternates: alternates(route, config),
        open_graph,
        twitter,
    }
}

/// Head for the per-locale home index.
pub fn build_home_head(locale: &str, config: &SiteConfig) -> HeadView {
    let route = Route::root();
    let description = format!(
        "{}: reference pages on theology, church history, sacred texts and spiritual practice.",
        config.site_name
    );
    let canonical = absolute_url(config, &route_href(&route, locale));

    HeadView {
        title: config.site_name.clone(),
        description: description.clone(),
        keywords: None,
        open_graph: vec![
            tag("og:title", &config.site_name),
            tag("og:description", &description),
            tag("og:type", "website"),
            tag("og:url", &canonical),
            tag("og:site_name", &config.site_name),
            tag("og:locale", &locale.replace('-', "_")),
        ],
        twitter: vec![tag("twitter:card", "summary")],
        canonical,
        alternates: alternates(&route, config),
    }
}

fn alternates(route: &Route, config: &SiteConfig) -> Vec<AlternateLink> {
    let mut links: Vec<AlternateLink> = config
        .locales
        .iter()
        .map(|locale| AlternateLink {
            hreflang: locale.clone(),
            href: absolute_url(config, &route_href(route, locale)),
        })
        .collect();
    links.push(AlternateLink {
        hreflang: "x-default".to_string(),
        href: absolute_url(config, &route_href(route, &config.default_locale)),
    });
    links
}

/// Site-relative paths get the configured origin; absolute URLs pass through.
pub fn absolute_url(config: &SiteConfig, href: &str) -> String {
    match classify(href) {
        LinkTarget::Internal { .. } => format!("{}{}", config.base_url, href),
        _ => href.to_string(),
    }
}

fn tag(key: &str, content: &str) -> MetaTag {
    MetaTag {
        key: key.to_string(),
        content: content.to_string(),
    }
}
