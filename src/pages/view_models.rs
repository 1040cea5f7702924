//! View Models for Topic Pages
//!
//! Render-ready data shared by the HTML templates, the Markdown renderer and
//! the JSON API. Every string here is final: links are localized, rich text
//! is already converted, tab state is decided.

use serde::Serialize;

use crate::content::route::Route;

/// Complete data for one topic page in one locale.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageView {
    pub route: Route,
    pub locale: String,
    pub site_name: String,
    pub head: HeadView,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub hero: HeroView,
    pub sections: Vec<SectionView>,
    pub related: Vec<RelatedView>,
}

// ============================================================================
// Head (SEO)
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeadView {
    /// Full `<title>` text, site name included.
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub canonical: String,
    pub alternates: Vec<AlternateLink>,
    pub open_graph: Vec<MetaTag>,
    pub twitter: Vec<MetaTag>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetaTag {
    pub key: String,
    pub content: String,
}

impl HeadView {
    /// Content of an Open Graph or Twitter tag, for tests and debugging.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.open_graph
            .iter()
            .chain(self.twitter.iter())
            .find(|m| m.key == key)
            .map(|m| m.content.as_str())
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinkView {
    pub label: String,
    pub href: String,
    pub external: bool,
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeroView {
    pub title: String,
    pub subtitle: Option<String>,
    pub badges: Vec<String>,
    pub actions: Vec<LinkView>,
}

// ============================================================================
// Sections, tabs, cards
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SectionView {
    pub id: String,
    pub heading: String,
    pub intro: Option<String>,
    pub intro_html: Option<String>,
    /// Single-tab sections render their panel without a tab bar.
    pub has_tab_bar: bool,
    pub tabs: Vec<TabView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TabView {
    /// `{section}-{tab}`, unique within the page.
    pub dom_id: String,
    pub label: String,
    pub kind: &'static str,
    pub active: bool,
    pub cards: Vec<CardView>,
}

/// Uniform card for every record type.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct CardView {
    /// Slug of the record's title or name; unique within its list when content is clean.
    pub key: String,
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(skip)]
    pub icon_svg: Option<&'static str>,
    pub icon: Option<String>,
    pub badges: Vec<String>,
    /// Markdown source.
    pub body: String,
    pub body_html: String,
    pub lists: Vec<CardList>,
    pub quotes: Vec<String>,
    pub link: Option<LinkView>,
    pub actions: Vec<ActionView>,
    pub children: Vec<CardView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CardList {
    pub heading: String,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListItem {
    pub text: String,
    pub note: Option<String>,
    pub href: Option<String>,
}

impl ListItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            note: None,
            href: None,
        }
    }
}

/// Button on a resource card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionView {
    pub label: String,
    pub href: String,
    /// `rel` attribute value.
    pub rel: String,
    pub sponsored: bool,
}

// ============================================================================
// Related topics
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RelatedView {
    pub title: String,
    pub description: Option<String>,
    pub href: String,
}

// ============================================================================
// Home index
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomeView {
    pub locale: String,
    pub site_name: String,
    pub head: HeadView,
    pub groups: Vec<HomeGroup>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomeGroup {
    pub heading: String,
    pub pages: Vec<HomeEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HomeEntry {
    pub title: String,
    pub description: String,
    pub href: String,
}
