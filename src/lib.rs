//! Theopedia - static reference pages for theology and religious studies
//!
//! Content records (YAML/JSON) are loaded into a route-indexed catalog,
//! checked for broken links, duplicate keys and missing metadata, then
//! rendered through a single page template:
//! - `content/`: records, routes, loading and search
//! - `checks/`: key, affiliate, link and metadata checks
//! - `pages/`: view models plus HTML (Askama), Markdown and JSON renditions
//! - `site_builder`: static export of every page in every locale
//!
//! With the `api` feature the same catalog is served by an Axum server.

pub mod config;
pub mod content;
pub mod checks;
pub mod pages;
pub mod sitemap;
pub mod site_builder;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use config::SiteConfig;
pub use content::{load_catalog, Catalog, Page};
pub use checks::{validate_catalog, ValidationReport};
pub use pages::{OutputFormat, PageGenerator};
pub use site_builder::{build_site, BuildSummary};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
