//! Static asset serving and the catch-all fallback.
//!
//! Any request no route matched is treated as an asset lookup: the base
//! path is stripped and the remainder is served from the asset directory.
//! Directories are never listed or redirected; whatever cannot be served
//! as a file gets the not-found page.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::routes::page_response;
use crate::state::AppState;

/// Fallback handler: serve a static file or the not-found page.
pub async fn asset_fallback(State(state): State<AppState>, req: Request) -> Response {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return not_found(&state);
    }

    let Some(relative) = strip_base(state.base_path(), req.uri().path()).map(str::to_owned) else {
        return not_found(&state);
    };
    let uri = match rebase_uri(req.uri(), &relative) {
        Some(uri) => uri,
        None => return not_found(&state),
    };

    let (mut parts, body) = req.into_parts();
    parts.uri = uri;
    let req = Request::from_parts(parts, body);

    let served = ServeDir::new(state.asset_dir().as_path())
        .append_index_html_on_directories(false)
        .oneshot(req)
        .await
        .unwrap_or_else(|infallible| match infallible {});

    let status = served.status();
    if !status.is_success() && status != StatusCode::NOT_MODIFIED {
        tracing::debug!(
            path = %relative_display(&relative),
            status = status.as_u16(),
            "asset not servable"
        );
        return not_found(&state);
    }
    served.map(Body::new).into_response()
}

fn not_found(state: &AppState) -> Response {
    page_response(state.renderer().not_found())
}

/// The part of `path` below `base`, without a leading `/`.
///
/// ```
/// use folio_server::assets::strip_base;
///
/// assert_eq!(strip_base("/", "/images/a.png"), Some("images/a.png"));
/// assert_eq!(strip_base("/site/", "/site/images/a.png"), Some("images/a.png"));
/// assert_eq!(strip_base("/site/", "/other/a.png"), None);
/// ```
pub fn strip_base<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    path.strip_prefix(base)
}

fn rebase_uri(original: &Uri, relative: &str) -> Option<Uri> {
    let path_and_query = match original.query() {
        Some(query) => format!("/{relative}?{query}"),
        None => format!("/{relative}"),
    };
    Uri::builder().path_and_query(path_and_query).build().ok()
}

fn relative_display(relative: &str) -> &str {
    if relative.is_empty() { "/" } else { relative }
}
