//! Topic Page Module
//!
//! One template for every page of the site. A page is rendered in three steps:
//! content record → view model (`view_builder`) → output (`html`, `markdown`, JSON).
//!
//! ## Page layout
//! 1. Head - title, description, canonical URL, hreflang, Open Graph, Twitter
//! 2. Breadcrumbs - home and route segments
//! 3. Hero - title, subtitle, badges, call-to-action links
//! 4. Sections - tabbed panels of cards (topics, figures, resources, practices)
//! 5. Related Topics - links to other pages

pub mod generator;
pub mod html;
pub mod links;
pub mod markdown;
pub mod metadata;
pub mod rich_text;
pub mod sections;
pub mod view_builder;
pub mod view_models;

pub use generator::{OutputFormat, PageGenerator, RenderError};
pub use view_builder::{build_home_view, build_page_view};
pub use view_models::*;
