// Axum Server Module
//
// Purpose: serve the catalog as HTML pages plus a small JSON/Markdown API.
// Rendered output is immutable for the life of the process, so every
// response body is cached by (format, locale, route).

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::checks::{validate_catalog, Severity, ValidationReport};
use crate::config::SiteConfig;
use crate::content::{load_catalog, Catalog, Page};
use crate::pages::{OutputFormat, PageGenerator};
use crate::sitemap::render_sitemap;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub generator: Arc<PageGenerator>,
    pub report: Arc<ValidationReport>,
    pub cache: Cache<String, Arc<String>>,
}

impl AppState {
    /// Load the content directory named by the config and check it.
    pub async fn new(config: SiteConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading content from {}...", config.content_dir.display());
        let content_dir = config.content_dir.clone();
        let catalog = tokio::task::spawn_blocking(move || load_catalog(&content_dir)).await??;
        Ok(Self::from_catalog(catalog, config))
    }

    pub fn from_catalog(catalog: Catalog, config: SiteConfig) -> Self {
        tracing::info!("Checking {} pages...", catalog.len());
        let report = validate_catalog(&catalog);
        for issue in &report.issues {
            match issue.severity {
                Severity::Error => tracing::error!("{}: {}", issue.route, issue.message),
                Severity::Warning => tracing::warn!("{}: {}", issue.route, issue.message),
            }
        }

        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(3600))
            .build();

        Self {
            catalog: Arc::new(catalog),
            generator: Arc::new(PageGenerator::new(config)),
            report: Arc::new(report),
            cache,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        self.generator.config()
    }

    /// Look up a wildcard path capture (`studies/theology`) in the catalog.
    pub fn find_page(&self, path: &str) -> Option<&Page> {
        self.catalog.get_path(&format!("/{}", path.trim_matches('/')))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        .route("/", get(root_redirect))
        .route("/sitemap.xml", get(sitemap))

        // JSON / Markdown API
        .route("/api/pages", get(list_pages))
        .route("/api/pages/*route", get(get_page_json))
        .route("/api/markdown/*route", get(get_page_markdown))
        .route("/api/search", get(search_pages))
        .route("/api/checks", get(get_checks))

        // HTML pages
        .route("/:locale", get(pages::home_page))
        .route("/:locale/*path", get(pages::topic_page))
        .fallback(pages::not_found_page)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "pages": state.catalog.len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn root_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&format!("/{}", state.config().default_locale))
}

async fn sitemap(State(state): State<AppState>) -> Response {
    let cache_key = "sitemap".to_string();
    let body = match state.cache.get(&cache_key).await {
        Some(cached) => cached,
        None => {
            let body = Arc::new(render_sitemap(&state.catalog, state.config()));
            state.cache.insert(cache_key, body.clone()).await;
            body
        }
    };
    ([(header::CONTENT_TYPE, "application/xml")], (*body).clone()).into_response()
}

async fn list_pages(State(state): State<AppState>) -> Json<serde_json::Value> {
    let data: Vec<serde_json::Value> = state
        .catalog
        .iter()
        .map(|page| {
            serde_json::json!({
                "route": page.route,
                "title": page.content.metadata.title,
                "description": page.content.metadata.description,
            })
        })
        .collect();

    Json(serde_json::json!({
        "rows": data.len(),
        "data": data,
    }))
}

async fn get_page_json(
    State(state): State<AppState>,
    Path(route): Path<String>,
    Query(params): Query<LocaleQuery>,
) -> Result<Response, AppError> {
    render_cached(&state, &route, params.locale.as_deref(), OutputFormat::Json).await
}

async fn get_page_markdown(
    State(state): State<AppState>,
    Path(route): Path<String>,
    Query(params): Query<LocaleQuery>,
) -> Result<Response, AppError> {
    render_cached(&state, &route, params.locale.as_deref(), OutputFormat::Markdown).await
}

async fn search_pages(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<serde_json::Value> {
    let limit = params.limit.unwrap_or(20).min(100);
    let query = params.q.unwrap_or_default();

    let start = std::time::Instant::now();
    let hits = state.catalog.search(&query, limit);
    tracing::debug!("Search '{}' returned {} results in {:?}", query, hits.len(), start.elapsed());

    Json(serde_json::json!({
        "rows": hits.len(),
        "data": hits,
    }))
}

async fn get_checks(State(state): State<AppState>) -> Json<ValidationReport> {
    Json(state.report.as_ref().clone())
}

/// Render a page in a non-HTML format, going through the response cache.
async fn render_cached(
    state: &AppState,
    route: &str,
    locale: Option<&str>,
    format: OutputFormat,
) -> Result<Response, AppError> {
    let locale = state.config().resolve_locale(locale).to_string();
    let page = state
        .find_page(route)
        .ok_or_else(|| AppError::NotFound(format!("Page /{} not found", route.trim_matches('/'))))?;

    let cache_key = format!("{:?}:{}:{}", format, locale, page.route);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok(([(header::CONTENT_TYPE, format.content_type())], (*cached).clone()).into_response());
    }

    let body = state
        .generator
        .render(page, &locale, format)
        .map_err(|e| AppError::Render(e.to_string()))?;
    state.cache.insert(cache_key, Arc::new(body.clone())).await;

    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(serde::Deserialize, Debug)]
struct LocaleQuery {
    locale: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
struct SearchQuery {
    q: Option<String>,
    limit: Option<usize>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Render(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Render(msg) => {
                tracing::error!("Render failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
