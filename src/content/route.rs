//! Canonical page routes.
//!
//! A route is `/` or `/seg(/seg)*`, each segment lowercase ASCII alphanumerics
//! and `-`. Routes come from the content directory layout: `a/b.yaml` serves
//! `/a/b`, `a/index.yaml` serves `/a`.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("route `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("route `{0}` contains an empty segment")]
    EmptySegment(String),

    #[error("route segment `{segment}` in `{route}` may only contain a-z, 0-9 and `-`")]
    InvalidSegment { route: String, segment: String },

    #[error("path `{0}` cannot be mapped to a route")]
    UnmappablePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Route(String);

impl Route {
    pub fn root() -> Self {
        Route("/".to_string())
    }

    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        if !raw.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(raw.to_string()));
        }
        if raw == "/" {
            return Ok(Self::root());
        }

        let trimmed = raw.strip_suffix('/').unwrap_or(raw);
        for segment in trimmed[1..].split('/') {
            validate_segment(trimmed, segment)?;
        }
        Ok(Route(trimmed.to_string()))
    }

    /// Map a content file path (relative to the content root) to its route.
    pub fn from_relative_path(path: &Path) -> Result<Self, RouteError> {
        let display = path.display().to_string();
        let mut segments = Vec::new();

        for component in path.with_extension("").components() {
            match component {
                Component::Normal(os) => {
                    let segment = os
                        .to_str()
                        .ok_or_else(|| RouteError::UnmappablePath(display.clone()))?;
                    segments.push(segment.to_string());
                }
                Component::CurDir => {}
                _ => return Err(RouteError::UnmappablePath(display)),
            }
        }

        if segments.last().map(String::as_str) == Some("index") {
            segments.pop();
        }

        Self::parse(&format!("/{}", segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// First path segment, used to group pages on the home index.
    pub fn top_segment(&self) -> Option<&str> {
        self.segments().next()
    }
}

fn validate_segment(route: &str, segment: &str) -> Result<(), RouteError> {
    if segment.is_empty() {
        return Err(RouteError::EmptySegment(route.to_string()));
    }
    let valid = segment
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(RouteError::InvalidSegment {
            route: route.to_string(),
            segment: segment.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
