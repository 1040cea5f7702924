// HTML rendering with Askama
//
// Templates live in templates/: one topic page template shared by every page,
// the per-locale home index and the not-found page.

use askama::Template;

use crate::pages::view_models::{HeadView, HomeView, PageView};

// ============================================================================
// Topic Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/topic.html")]
pub struct TopicTemplate<'a> {
    pub lang: &'a str,
    pub site_name: &'a str,
    pub home_href: String,
    pub head: &'a HeadView,
    pub page: &'a PageView,
}

pub fn render_page(view: &PageView) -> askama::Result<String> {
    TopicTemplate {
        lang: &view.locale,
        site_name: &view.site_name,
        home_href: format!("/{}", view.locale),
        head: &view.head,
        page: view,
    }
    .render()
}

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub lang: &'a str,
    pub site_name: &'a str,
    pub home_href: String,
    pub head: &'a HeadView,
    pub home: &'a HomeView,
}

pub fn render_home(view: &HomeView) -> askama::Result<String> {
    HomeTemplate {
        lang: &view.locale,
        site_name: &view.site_name,
        home_href: format!("/{}", view.locale),
        head: &view.head,
        home: view,
    }
    .render()
}

// ============================================================================
// Not Found
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub lang: &'a str,
    pub site_name: &'a str,
    pub home_href: String,
    pub path: &'a str,
}

pub fn render_not_found(locale: &str, site_name: &str, path: &str) -> askama::Result<String> {
    NotFoundTemplate {
        lang: locale,
        site_name,
        home_href: format!("/{}", locale),
        path,
    }
    .render()
}
