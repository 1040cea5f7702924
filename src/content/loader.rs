//! Content directory loader.
//!
//! Walks the content root in sorted order, parses every `.yaml`, `.yml` and
//! `.json` file into a `ContentPage`, and derives each page's route from its
//! relative path. Other files are skipped.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::content::catalog::{Catalog, Page};
use crate::content::error::ContentError;
use crate::content::route::Route;
use crate::content::types::ContentPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Yaml,
    Json,
}

impl ContentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Some(ContentFormat::Yaml),
            Some("json") => Some(ContentFormat::Json),
            _ => None,
        }
    }
}

/// Load every page under `dir` into a catalog.
pub fn load_catalog(dir: &Path) -> Result<Catalog, ContentError> {
    if !dir.is_dir() {
        return Err(ContentError::MissingDir(dir.to_path_buf()));
    }

    let files = collect_files(dir)?;

    let mut pages = Vec::with_capacity(files.len());
    for path in files {
        let Some(format) = ContentFormat::from_path(&path) else {
            tracing::debug!("Skipping non-content file {}", path.display());
            continue;
        };

        let relative = path.strip_prefix(dir).unwrap_or(&path).to_path_buf();
        let route = Route::from_relative_path(&relative).map_err(|source| ContentError::Route {
            path: relative.clone(),
            source,
        })?;

        let text = fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        let content = parse_page_at(&text, format, &relative)?;

        tracing::debug!("Loaded {} from {}", route, relative.display());
        pages.push(Page::new(route, relative, content));
    }

    let catalog = Catalog::from_pages(pages)?;
    tracing::info!("Loaded {} pages from {}", catalog.len(), dir.display());
    Ok(catalog)
}

/// Parse one page from an in-memory source.
pub fn parse_page(text: &str, format: ContentFormat) -> Result<ContentPage, ContentError> {
    parse_page_at(text, format, Path::new("<memory>"))
}

fn parse_page_at(text: &str, format: ContentFormat, path: &Path) -> Result<ContentPage, ContentError> {
    match format {
        ContentFormat::Yaml => serde_yaml::from_str(text).map_err(|source| ContentError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        ContentFormat::Json => serde_json::from_str(text).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Regular files under `dir`, in per-directory name order. Hidden entries
/// are pruned and symlinks are neither followed nor loaded.
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ContentError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        } else if entry.path_is_symlink() {
            tracing::debug!("Skipping symlink {}", entry.path().display());
        }
    }
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
