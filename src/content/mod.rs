//! Content Module
//!
//! Page data files and the catalog built from them.
//!
//! ## Layout
//! - `route`: canonical routes derived from the directory structure
//! - `types`: content records (topic areas, figures, resources, practices)
//! - `loader`: walks the content directory and parses YAML/JSON files
//! - `catalog`: route-indexed set of loaded pages

pub mod catalog;
pub mod error;
pub mod loader;
pub mod route;
pub mod types;

pub use catalog::{Catalog, Page, SearchHit};
pub use error::ContentError;
pub use loader::{load_catalog, parse_page, ContentFormat};
pub use route::{Route, RouteError};
pub use types::*;
