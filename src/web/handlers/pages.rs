// Page handlers for HTML rendering with Askama

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::api_server::AppState;

// ============================================================================
// Home Page
// ============================================================================

pub async fn home_page(State(state): State<AppState>, Path(locale): Path<String>) -> Response {
    if !state.config().is_supported_locale(&locale) {
        return not_found(&state, None, &format!("/{}", locale));
    }

    let cache_key = format!("home:{}", locale);
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Html((*cached).clone()).into_response();
    }

    match state.generator.render_home(&state.catalog, &locale) {
        Ok(body) => {
            state.cache.insert(cache_key, Arc::new(body.clone())).await;
            Html(body).into_response()
        }
        Err(e) => render_failure(&e),
    }
}

// ============================================================================
// Topic Page
// ============================================================================

pub async fn topic_page(
    State(state): State<AppState>,
    Path((locale, path)): Path<(String, String)>,
) -> Response {
    let requested = format!("/{}/{}", locale, path.trim_matches('/'));

    if !state.config().is_supported_locale(&locale) {
        return not_found(&state, None, &requested);
    }
    let Some(page) = state.find_page(&path) else {
        return not_found(&state, Some(&locale), &requested);
    };

    let cache_key = format!("html:{}:{}", locale, page.route);
    if let Some(cached) = state.cache.get(&cache_key).await {
        return Html((*cached).clone()).into_response();
    }

    match state.generator.render_html(page, &locale) {
        Ok(body) => {
            state.cache.insert(cache_key, Arc::new(body.clone())).await;
            Html(body).into_response()
        }
        Err(e) => render_failure(&e),
    }
}

// ============================================================================
// Not Found
// ============================================================================

pub async fn not_found_page(State(state): State<AppState>, uri: Uri) -> Response {
    let locale = uri
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| state.config().is_supported_locale(segment))
        .map(str::to_string);
    not_found(&state, locale.as_deref(), uri.path())
}

fn not_found(state: &AppState, locale: Option<&str>, path: &str) -> Response {
    tracing::debug!("No page at {}", path);
    match state.generator.render_not_found(locale, path) {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(e) => render_failure(&e),
    }
}

fn render_failure(err: &dyn std::error::Error) -> Response {
    tracing::error!("Template error: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Template error: {}", err)).into_response()
}
