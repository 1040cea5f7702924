//! Page Generator
//!
//! Main entry point for rendering topic pages. Holds the site configuration
//! and turns a catalog page plus a locale into HTML, Markdown or JSON.
//!
//! Public API (consumed by api_server.rs, site_builder.rs and the binaries):
//! - PageGenerator::new(config) -> Self
//! - PageGenerator::render(page, locale, format) -> Result<String, RenderError>
//! - PageGenerator::render_home(catalog, locale) -> Result<String, RenderError>

use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::catalog::{Catalog, Page};
use crate::pages::view_builder::{build_home_view, build_page_view};
use crate::pages::view_models::PageView;
use crate::pages::{html, markdown};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("locale `{0}` is not served by this site")]
    UnsupportedLocale(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputFormat::Html => "text/html; charset=utf-8",
            OutputFormat::Markdown => "text/markdown; charset=utf-8",
            OutputFormat::Json => "application/json",
        }
    }
}

/// Page generator - stateless apart from configuration.
#[derive(Debug, Clone)]
pub struct PageGenerator {
    config: SiteConfig,
}

impl PageGenerator {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Build the view model for a page in a served locale.
    pub fn view(&self, page: &Page, locale: &str) -> Result<PageView, RenderError> {
        self.check_locale(locale)?;
        Ok(build_page_view(page, locale, &self.config))
    }

    pub fn render(&self, page: &Page, locale: &str, format: OutputFormat) -> Result<String, RenderError> {
        match format {
            OutputFormat::Html => self.render_html(page, locale),
            OutputFormat::Markdown => self.render_markdown(page, locale),
            OutputFormat::Json => self.render_json(page, locale),
        }
    }

    pub fn render_html(&self, page: &Page, locale: &str) -> Result<String, RenderError> {
        let view = self.view(page, locale)?;
        Ok(html::render_page(&view)?)
    }

    pub fn render_markdown(&self, page: &Page, locale: &str) -> Result<String, RenderError> {
        let view = self.view(page, locale)?;
        Ok(markdown::render(&view))
    }

    pub fn render_json(&self, page: &Page, locale: &str) -> Result<String, RenderError> {
        let view = self.view(page, locale)?;
        Ok(serde_json::to_string_pretty(&view)?)
    }

    /// Per-locale index of every page in the catalog.
    pub fn render_home(&self, catalog: &Catalog, locale: &str) -> Result<String, RenderError> {
        self.check_locale(locale)?;
        let view = build_home_view(catalog, locale, &self.config);
        Ok(html::render_home(&view)?)
    }

    /// Not-found page; unknown locales fall back to the default.
    pub fn render_not_found(&self, locale: Option<&str>, path: &str) -> Result<String, RenderError> {
        let locale = self.config.resolve_locale(locale);
        Ok(html::render_not_found(locale, &self.config.site_name, path)?)
    }

    fn check_locale(&self, locale: &str) -> Result<(), RenderError> {
        if self.config.is_supported_locale(locale) {
            Ok(())
        } else {
            Err(RenderError::UnsupportedLocale(locale.to_string()))
        }
    }
}
