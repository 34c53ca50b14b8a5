//! Router and page handlers.
//!
//! | path                    | view                               |
//! |-------------------------|------------------------------------|
//! | `{base}`                | listing page                       |
//! | `{base}project/{id}`    | detail page, or not-found (404)    |
//! | `{base}healthz`         | JSON liveness document             |
//! | anything else           | static asset, or not-found (404)   |
//!
//! When the base path is not `/`, the bare prefix redirects to `{base}`.

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use folio_render::{PageStatus, RenderedPage};
use serde::{Deserialize, Serialize};
use tower::ServiceExt;
use tower_http::trace::TraceLayer;

use crate::assets::asset_fallback;
use crate::config::FolioConfig;
use crate::error::{Error, Result};
use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let base = state.base_path().to_string();
    let mut router = Router::new()
        .route(&base, get(home_handler))
        .route(&format!("{base}project/{{id}}"), get(project_handler))
        .route(&format!("{base}healthz"), get(health_handler));

    if base != "/" {
        let bare = base.trim_end_matches('/').to_string();
        let target = base.clone();
        router = router.route(
            &bare,
            get(move || async move { Redirect::permanent(&target) }),
        );
    }

    router
        .fallback(asset_fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run one `GET path` through the router built from `config` and return
/// the status and body, exactly as the server would answer it.
pub async fn render_path(config: &FolioConfig, path: &str) -> Result<(StatusCode, String)> {
    let render_error = |message: String| Error::Render {
        path: path.to_string(),
        message,
    };
    if !path.starts_with('/') {
        return Err(render_error("path must start with '/'".to_string()));
    }
    let request = Request::get(path)
        .body(Body::empty())
        .map_err(|e| render_error(e.to_string()))?;
    let response = build_router(AppState::new(config)?)
        .oneshot(request)
        .await
        .unwrap_or_else(|infallible| match infallible {});
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| render_error(e.to_string()))?;
    Ok((status, String::from_utf8_lossy(&bytes).into_owned()))
}

/// Turn a rendered page into an HTML response with the matching status.
pub fn page_response(page: RenderedPage) -> Response {
    let status = match page.status {
        PageStatus::Found => StatusCode::OK,
        PageStatus::NotFound => StatusCode::NOT_FOUND,
    };
    (status, Html(page.html)).into_response()
}

async fn home_handler(State(state): State<AppState>) -> Response {
    page_response(state.renderer().home())
}

async fn project_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let page = state.renderer().project(&id);
    if page.status == PageStatus::NotFound {
        tracing::info!(id = %id, "unknown project requested");
    }
    page_response(page)
}

/// Liveness response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Number of registered projects.
    pub projects: usize,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        projects: state.renderer().registry().len(),
    })
}
