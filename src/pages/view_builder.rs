//! View Builder - Converts content pages to view models
//!
//! Pure projection of a `Page` and a locale into a `PageView`. No clocks, no
//! randomness: the same inputs always give the same view.

use crate::config::SiteConfig;
use crate::content::catalog::{Catalog, Page};
use crate::content::types::{ContentPage, Section};
use crate::pages::links::{is_external, localize, route_href, slugify, title_case_segment};
use crate::pages::metadata::{build_head, build_home_head};
use crate::pages::rich_text;
use crate::pages::sections;
use crate::pages::view_models::*;

/// Build the complete view of one page in one locale.
pub fn build_page_view(page: &Page, locale: &str, config: &SiteConfig) -> PageView {
    let content: &ContentPage = &page.content;

    PageView {
        route: page.route.clone(),
        locale: locale.to_string(),
        site_name: config.site_name.clone(),
        head: build_head(&content.metadata, &page.route, locale, config),
        breadcrumbs: build_breadcrumbs(page, locale),
        hero: build_hero(content, locale),
        sections: content
            .sections
            .iter()
            .map(|section| build_section(section, locale))
            .collect(),
        related: content
            .related
            .iter()
            .map(|r| RelatedView {
                title: r.title.clone(),
                description: r.description.clone(),
                href: localize(&r.href, locale),
            })
            .collect(),
    }
}

// ============================================================================
// Breadcrumbs
// ============================================================================

/// Home → intermediate route segments (unlinked) → page title.
fn build_breadcrumbs(page: &Page, locale: &str) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb {
        label: "Home".to_string(),
        href: Some(format!("/{}", locale)),
    }];

    if page.route.is_root() {
        return crumbs;
    }

    let segments: Vec<&str> = page.route.segments().collect();
    for segment in &segments[..segments.len() - 1] {
        crumbs.push(Breadcrumb {
            label: title_case_segment(segment),
            href: None,
        });
    }
    crumbs.push(Breadcrumb {
        label: page.content.metadata.title.clone(),
        href: None,
    });
    crumbs
}

// ============================================================================
// Hero
// ============================================================================

fn build_hero(content: &ContentPage, locale: &str) -> HeroView {
    let hero = &content.hero;
    HeroView {
        title: hero.title.clone(),
        subtitle: hero.subtitle.clone(),
        badges: hero.badges.clone(),
        actions: hero
            .actions
            .iter()
            .map(|a| LinkView {
                label: a.label.clone(),
                href: localize(&a.href, locale),
                external: is_external(&a.href),
            })
            .collect(),
    }
}

// ============================================================================
// Sections
// ============================================================================

fn build_section(section: &Section, locale: &str) -> SectionView {
    let section_slug = slugify(&section.id);

    let tabs = section
        .tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| TabView {
            dom_id: format!("{}-{}", section_slug, slugify(&tab.id)),
            label: tab.label.clone(),
            kind: tab.content.kind(),
            active: i == 0,
            cards: sections::cards(&tab.content, locale),
        })
        .collect::<Vec<_>>();

    SectionView {
        id: section_slug,
        heading: section.heading.clone(),
        intro: section.intro.clone(),
        intro_html: section.intro.as_deref().map(rich_text::to_html),
        has_tab_bar: tabs.len() > 1,
        tabs,
    }
}

// ============================================================================
// Home index
// ============================================================================

/// Pages grouped by their first route segment, in route order.
pub fn build_home_view(catalog: &Catalog, locale: &str, config: &SiteConfig) -> HomeView {
    let mut groups: Vec<HomeGroup> = Vec::new();

    for page in catalog.iter() {
        let heading = page
            .route
            .top_segment()
            .map(title_case_segment)
            .unwrap_or_else(|| config.site_name.clone());

        let entry = HomeEntry {
            title: page.content.metadata.title.clone(),
            description: page.content.metadata.description.clone(),
            href: route_href(&page.route, locale),
        };

        match groups.last_mut() {
            Some(group) if group.heading == heading => group.pages.push(entry),
            _ => groups.push(HomeGroup {
                heading,
                pages: vec![entry],
            }),
        }
    }

    HomeView {
        locale: locale.to_string(),
        site_name: config.site_name.clone(),
        head: build_home_head(locale, config),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::{parse_page, ContentFormat};
    use crate::content::route::Route;

    const PAGE: &str = r#"
metadata:
  title: Christian Meditation
  description: Contemplative prayer in the Christian tradition.
hero:
  title: Christian Meditation
  actions:
    - label: Read the Bible
      href: /sacred-texts/bible
    - label: Carmelite Order
      href: https://www.ocarm.org
sections:
  - id: practices
    heading: Practices
    tabs:
      - id: western
        label: Western
        content:
          kind: practices
          items: []
      - id: eastern
        label: Eastern
        content:
          kind: figures
          items: []
  - id: reading
    heading: Further Reading
    intro: Start with the *classics*.
    tabs:
      - id: books
        label: Books
        content:
          kind: resources
          items: []
related:
  - title: Church History
    href: /religion/christianity/history
"#;

    fn page() -> Page {
        Page::new(
            Route::parse("/practices/meditation").unwrap(),
            "practices/meditation.yaml",
            parse_page(PAGE, ContentFormat::Yaml).unwrap(),
        )
    }

    #[test]
    fn test_hero_actions_localized() {
        let view = build_page_view(&page(), "es", &SiteConfig::default());
        assert_eq!(view.hero.actions[0].href, "/es/sacred-texts/bible");
        assert!(!view.hero.actions[0].external);
        assert_eq!(view.hero.actions[1].href, "https://www.ocarm.org");
        assert!(view.hero.actions[1].external);
        assert_eq!(view.related[0].href, "/es/religion/christianity/history");
    }

    #[test]
    fn test_first_tab_active_and_tab_bar_only_for_multiple_tabs() {
        let view = build_page_view(&page(), "en", &SiteConfig::default());

        let practices = &view.sections[0];
        assert!(practices.has_tab_bar);
        assert!(practices.tabs[0].active);
        assert!(!practices.tabs[1].active);
        assert_eq!(practices.tabs[1].dom_id, "practices-eastern");

        let reading = &view.sections[1];
        assert!(!reading.has_tab_bar);
        assert_eq!(reading.intro_html.as_deref(), Some("<p>Start with the <em>classics</em>.</p>"));
    }

    #[test]
    fn test_empty_arrays_render_empty_tabs() {
        let view = build_page_view(&page(), "en", &SiteConfig::default());
        assert!(view.sections.iter().flat_map(|s| &s.tabs).all(|t| t.cards.is_empty()));
    }

    #[test]
    fn test_breadcrumbs() {
        let view = build_page_view(&page(), "en", &SiteConfig::default());
        let labels: Vec<&str> = view.breadcrumbs.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Practices", "Christian Meditation"]);
        assert_eq!(view.breadcrumbs[0].href.as_deref(), Some("/en"));
    }

    #[test]
    fn test_view_is_deterministic() {
        let config = SiteConfig::default();
        assert_eq!(build_page_view(&page(), "en", &config), build_page_view(&page(), "en", &config));
    }

    #[test]
    fn test_home_groups_by_top_segment() {
        let other = Page::new(
            Route::parse("/practices/prayer").unwrap(),
            "practices/prayer.yaml",
            parse_page(PAGE, ContentFormat::Yaml).unwrap(),
        );
        let bible = Page::new(
            Route::parse("/sacred-texts/bible").unwrap(),
            "sacred-texts/bible.yaml",
            parse_page(PAGE, ContentFormat::Yaml).unwrap(),
        );
        let catalog = Catalog::from_pages(vec![bible, other, page()]).unwrap();

        let home = build_home_view(&catalog, "en", &SiteConfig::default());
        let headings: Vec<&str> = home.groups.iter().map(|g| g.heading.as_str()).collect();
        assert_eq!(headings, vec!["Practices", "Sacred Texts"]);
        assert_eq!(home.groups[0].pages.len(), 2);
        assert_eq!(home.groups[1].pages[0].href, "/en/sacred-texts/bible");
    }
}
