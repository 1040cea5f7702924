use std::path::PathBuf;
use thiserror::Error;

use crate::content::route::RouteError;

/// Failures while loading the content directory.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content directory {0} does not exist")]
    MissingDir(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot derive a route for {path}: {source}")]
    Route {
        path: PathBuf,
        #[source]
        source: RouteError,
    },

    #[error("{} maps to `/`, which is reserved for the per-locale home index", .path.display())]
    RootRoute { path: PathBuf },

    #[error("route {route} is defined by both {} and {}", .first.display(), .second.display())]
    DuplicateRoute {
        route: String,
        first: PathBuf,
        second: PathBuf,
    },
}
