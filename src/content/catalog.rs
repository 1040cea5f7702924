//! Page catalog: every loaded page, indexed by route.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::path::PathBuf;

use crate::content::error::ContentError;
use crate::content::route::Route;
use crate::content::types::ContentPage;

/// One loaded content file.
#[derive(Debug, Clone)]
pub struct Page {
    pub route: Route,
    /// Source file relative to the content root (or a label for in-memory pages).
    pub source: PathBuf,
    pub content: ContentPage,
}

impl Page {
    pub fn new(route: Route, source: impl Into<PathBuf>, content: ContentPage) -> Self {
        Self {
            route,
            source: source.into(),
            content,
        }
    }

    pub fn title(&self) -> &str {
        &self.content.metadata.title
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchHit {
    pub route: Route,
    pub title: String,
    pub description: String,
    pub score: u32,
}

/// Immutable set of pages, sorted by route.
#[derive(Debug, Default)]
pub struct Catalog {
    pages: Vec<Page>,
    index: FxHashMap<Route, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting two pages that claim the same route.
    ///
    /// `/` is not a page route: `/{locale}` always serves the home index.
    pub fn from_pages(mut pages: Vec<Page>) -> Result<Self, ContentError> {
        if let Some(page) = pages.iter().find(|p| p.route.is_root()) {
            return Err(ContentError::RootRoute {
                path: page.source.clone(),
            });
        }

        pages.sort_by(|a, b| a.route.cmp(&b.route).then_with(|| a.source.cmp(&b.source)));

        let mut index = FxHashMap::default();
        for (i, page) in pages.iter().enumerate() {
            if let Some(&first) = index.get(&page.route) {
                let first: &Page = &pages[first];
                return Err(ContentError::DuplicateRoute {
                    route: page.route.to_string(),
                    first: first.source.clone(),
                    second: page.source.clone(),
                });
            }
            index.insert(page.route.clone(), i);
        }

        Ok(Self { pages, index })
    }

    pub fn get(&self, route: &Route) -> Option<&Page> {
        self.index.get(route).map(|&i| &self.pages[i])
    }

    /// Look up a raw path such as `/studies/theology/`.
    pub fn get_path(&self, path: &str) -> Option<&Page> {
        Route::parse(path).ok().and_then(|route| self.get(&route))
    }

    pub fn contains(&self, route: &Route) -> bool {
        self.index.contains_key(route)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.pages.iter().map(|p| &p.route)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Case-insensitive token search over title, keywords and description.
    ///
    /// Each query token scores 3 for a title hit, 2 for a keyword hit and 1 for
    /// a description hit. Results are ordered by score, then route.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let tokens: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if tokens.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .pages
            .iter()
            .filter_map(|page| {
                let meta = &page.content.metadata;
                let title = meta.title.to_lowercase();
                let description = meta.description.to_lowercase();
                let keywords: Vec<String> = meta.keywords.iter().map(|k| k.to_lowercase()).collect();

                let score: u32 = tokens
                    .iter()
                    .map(|token| {
                        let mut s = 0;
                        if title.contains(token.as_str()) {
                            s += 3;
                        }
                        if keywords.iter().any(|k| k.contains(token.as_str())) {
                            s += 2;
                        }
                        if description.contains(token.as_str()) {
                            s += 1;
                        }
                        s
                    })
                    .sum();

                (score > 0).then(|| SearchHit {
                    route: page.route.clone(),
                    title: meta.title.clone(),
                    description: meta.description.clone(),
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.route.cmp(&b.route)));
        hits.truncate(limit);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::{Hero, Metadata};

    fn page(route: &str, title: &str, keywords: &[&str], description: &str) -> Page {
        Page::new(
            Route::parse(route).unwrap(),
            format!("{}.yaml", route.trim_start_matches('/')),
            ContentPage {
                metadata: Metadata {
                    title: title.to_string(),
                    description: description.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                    open_graph: None,
                    twitter: None,
                },
                hero: Hero {
                    title: title.to_string(),
                    subtitle: None,
                    badges: vec![],
                    actions: vec![],
                },
                sections: vec![],
                related: vec![],
            },
        )
    }

    #[test]
    fn test_pages_sorted_and_indexed() {
        let catalog = Catalog::from_pages(vec![
            page("/studies/theology", "Theology Studies", &[], "Study."),
            page("/sacred-texts/bible", "The Bible", &[], "Scripture."),
        ])
        .unwrap();

        let routes: Vec<&str> = catalog.routes().map(Route::as_str).collect();
        assert_eq!(routes, vec!["/sacred-texts/bible", "/studies/theology"]);
        assert_eq!(catalog.get_path("/studies/theology/").unwrap().title(), "Theology Studies");
        assert!(catalog.get_path("/missing").is_none());
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let mut second = page("/studies", "Studies", &[], "Again.");
        second.source = PathBuf::from("studies/index.yaml");
        let err = Catalog::from_pages(vec![page("/studies", "Studies", &[], "Once."), second]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateRoute { .. }));
    }

    #[test]
    fn test_root_page_rejected() {
        let mut root = page("/studies", "Welcome", &[], "Home.");
        root.route = Route::root();
        root.source = PathBuf::from("index.yaml");

        let err = Catalog::from_pages(vec![page("/studies", "Studies", &[], "Once."), root]).unwrap_err();
        assert!(matches!(err, ContentError::RootRoute { .. }));
        assert!(err.to_string().starts_with("index.yaml maps to `/`"));
    }

    #[test]
    fn test_search_scores_title_over_description() {
        let catalog = Catalog::from_pages(vec![
            page("/a", "Christian Meditation", &["prayer"], "Contemplative practice."),
            page("/b", "Church History", &["councils"], "Includes meditation in monasteries."),
            page("/c", "The Bible", &["scripture"], "Canon and translations."),
        ])
        .unwrap();

        let hits = catalog.search("Meditation", 10);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].route.as_str(), "/a");
        assert_eq!(hits[0].score, 3);
        assert_eq!(hits[1].score, 1);

        assert!(catalog.search("   ", 10).is_empty());
        assert_eq!(catalog.search("meditation", 1).len(), 1);
    }
}
